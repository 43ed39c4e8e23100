//! CLI argument parsing for dlvgen.
//!
//! Uses clap derive macros for declarative argument definitions.
//! This module defines the command structure; actual implementations
//! are in the `commands` module.

use crate::config::{DEFAULT_DEBUG_PORT, DEFAULT_GO_VERSION, DEFAULT_OUTPUT_DIR, RawConfig};
use clap::{ArgAction, Parser, Subcommand};
use std::path::PathBuf;

/// dlvgen: Generate remote debugging configuration files.
///
/// A generator for Docker-based remote debugging of Go applications.
/// It writes a Dockerfile, docker-compose.yaml, .env and a dlv.sh launch
/// script for the Delve debugger.
#[derive(Parser, Debug)]
#[command(name = "dlvgen")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Increase log verbosity (-v for info, -vv for debug).
    #[arg(short, long, global = true, action = ArgAction::Count)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Command,
}

/// Available commands for dlvgen.
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Generate remote debugging configuration files.
    ///
    /// Generates all files needed to remote debug a Go application:
    /// - Dockerfile for the debug container
    /// - docker-compose.yaml for orchestration
    /// - .env file for configuration
    /// - dlv.sh script for running the Delve debugger
    Generate(GenerateArgs),
}

/// Arguments for the `generate` command.
#[derive(Parser, Debug)]
pub struct GenerateArgs {
    /// Go version to use.
    #[arg(long = "go-version", default_value = DEFAULT_GO_VERSION)]
    pub go_version: String,

    /// Project name.
    #[arg(long)]
    pub project: String,

    /// Source directory to mount.
    #[arg(long)]
    pub src: String,

    /// Path to main file relative to the source directory.
    #[arg(long)]
    pub main: String,

    /// Port for the Delve debugger.
    #[arg(long, default_value_t = DEFAULT_DEBUG_PORT, value_parser = clap::value_parser!(u16).range(1..))]
    pub port: u16,

    /// Directory to write the generated files to.
    #[arg(long, default_value = DEFAULT_OUTPUT_DIR)]
    pub output_dir: PathBuf,

    /// Print the rendered files instead of writing them.
    #[arg(long)]
    pub dry_run: bool,

    /// Print the result as JSON.
    #[arg(long)]
    pub json: bool,
}

impl GenerateArgs {
    /// The parameters the config resolver consumes.
    pub fn raw_config(&self) -> RawConfig {
        RawConfig {
            go_version: Some(self.go_version.clone()),
            project_name: self.project.clone(),
            src_dir: self.src.clone(),
            main_file: self.main.clone(),
            debug_port: Some(self.port),
        }
    }
}

impl Cli {
    /// Parse command-line arguments.
    pub fn parse_args() -> Self {
        Cli::parse()
    }
}
