//! Implementation of the `dlvgen generate` command.
//!
//! # What `dlvgen generate` does
//!
//! 1. Resolves the flags into a validated [`DebugConfig`]; an empty project,
//!    source directory or main file stops here with nothing written
//! 2. Creates the output directory (default `examples/debug/`)
//! 3. Renders and writes `Dockerfile`, `docker-compose.yaml`, `.env` and
//!    `dlv.sh`, then makes `dlv.sh` executable
//! 4. Prints the follow-up commands for starting the debug stack
//!
//! With `--dry-run`, step 3 only renders and the files are printed instead.

mod report;

#[cfg(test)]
mod tests;

use crate::cli::GenerateArgs;
use crate::config::DebugConfig;
use crate::emit::{self, TARGETS};
use crate::error::Result;

use report::*;

/// Execute the `dlvgen generate` command.
pub fn cmd_generate(args: GenerateArgs) -> Result<()> {
    let config = DebugConfig::resolve(args.raw_config())?;

    if args.dry_run {
        let rendered = emit::render_all(&config, &args.output_dir, TARGETS)?;
        print!("{}", format_dry_run(&args.output_dir, &rendered, args.json));
        return Ok(());
    }

    let report = emit::emit(&config, &args.output_dir, TARGETS)?;

    if args.json {
        println!("{}", format_json(&config, &report));
    } else {
        print!("{}", format_summary(&report));
    }

    Ok(())
}
