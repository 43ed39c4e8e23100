//! Output formatting for the generate command.

use crate::config::DebugConfig;
use crate::emit::{EmitReport, RenderedFile};
use serde_json::json;
use std::path::Path;

const COMPOSE_COMMAND: &str = "docker-compose up";

/// Human-readable summary printed after a successful run.
pub(super) fn format_summary(report: &EmitReport) -> String {
    let mut out = String::from("Debug files generated successfully!\n\nGenerated files:\n");
    for file in &report.files {
        let marker = if file.executable { "  (executable)" } else { "" };
        out.push_str(&format!("  {}{}\n", file.path.display(), marker));
    }
    out.push_str(&format!(
        "\nTo start debugging:\n1. cd {}\n2. {}\n",
        report.output_dir.display(),
        COMPOSE_COMMAND
    ));
    out
}

/// Machine-readable report for `--json`.
pub(super) fn format_json(config: &DebugConfig, report: &EmitReport) -> String {
    let files: Vec<_> = report
        .files
        .iter()
        .map(|file| {
            json!({
                "file_name": file.file_name,
                "path": file.path.display().to_string(),
                "bytes": file.bytes,
                "executable": file.executable,
            })
        })
        .collect();
    let value = json!({
        "config": config,
        "output_dir": report.output_dir.display().to_string(),
        "files": files,
        "next_steps": [
            format!("cd {}", report.output_dir.display()),
            COMPOSE_COMMAND,
        ],
    });
    format!("{:#}", value)
}

/// Rendered files for `--dry-run`, either as text sections or JSON.
pub(super) fn format_dry_run(output_dir: &Path, rendered: &[RenderedFile], json: bool) -> String {
    if json {
        let files: Vec<_> = rendered
            .iter()
            .map(|file| {
                json!({
                    "path": output_dir.join(file.target.file_name).display().to_string(),
                    "executable": file.target.executable,
                    "content": file.content,
                })
            })
            .collect();
        return format!("{:#}\n", json!({ "dry_run": true, "files": files }));
    }

    let mut out = String::new();
    for file in rendered {
        out.push_str(&format!(
            "==> {} <==\n",
            output_dir.join(file.target.file_name).display()
        ));
        out.push_str(&file.content);
        if !file.content.ends_with('\n') {
            out.push('\n');
        }
        out.push('\n');
    }
    out
}
