//! Tests for the generate command.

use super::*;
use crate::cli::{Cli, Command};
use crate::config::RawConfig;
use crate::emit::{EmitReport, EmittedFile};
use crate::error::DlvgenError;
use crate::test_support::DirGuard;
use clap::Parser;
use serial_test::serial;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

fn generate_args(extra: &[&str]) -> GenerateArgs {
    let mut argv = vec![
        "dlvgen", "generate", "--project", "svc", "--src", "./app", "--main", "main.go",
    ];
    argv.extend_from_slice(extra);
    match Cli::try_parse_from(argv).unwrap().command {
        Command::Generate(args) => args,
    }
}

fn sample_report() -> EmitReport {
    let output_dir = PathBuf::from("examples/debug");
    let files = [("Dockerfile", 120, false), ("dlv.sh", 300, true)]
        .into_iter()
        .map(|(name, bytes, executable)| EmittedFile {
            file_name: name.to_string(),
            path: output_dir.join(name),
            bytes,
            executable,
        })
        .collect();
    EmitReport { output_dir, files }
}

#[test]
#[serial]
fn test_generate_writes_default_layout() {
    let temp_dir = TempDir::new().unwrap();
    let _guard = DirGuard::new(temp_dir.path());

    cmd_generate(generate_args(&[])).unwrap();

    let debug_dir = temp_dir.path().join("examples").join("debug");
    for name in ["Dockerfile", "docker-compose.yaml", ".env", "dlv.sh"] {
        assert!(debug_dir.join(name).is_file(), "{} missing", name);
    }

    #[cfg(unix)]
    {
        use std::os::unix::fs::PermissionsExt;
        let mode = std::fs::metadata(debug_dir.join("dlv.sh"))
            .unwrap()
            .permissions()
            .mode();
        assert_eq!(mode & 0o100, 0o100);
    }
}

#[test]
#[serial]
fn test_generate_empty_project_creates_nothing() {
    let temp_dir = TempDir::new().unwrap();
    let _guard = DirGuard::new(temp_dir.path());

    let mut args = generate_args(&[]);
    args.project = String::new();
    let err = cmd_generate(args).unwrap_err();

    assert!(matches!(err, DlvgenError::Validation { .. }));
    assert!(!temp_dir.path().join("examples").exists());
}

#[test]
#[serial]
fn test_generate_dry_run_writes_nothing() {
    let temp_dir = TempDir::new().unwrap();
    let _guard = DirGuard::new(temp_dir.path());

    cmd_generate(generate_args(&["--dry-run"])).unwrap();
    cmd_generate(generate_args(&["--dry-run", "--json"])).unwrap();

    assert!(!temp_dir.path().join("examples").exists());
}

#[test]
#[serial]
fn test_generate_custom_output_dir_with_json() {
    let temp_dir = TempDir::new().unwrap();
    let _guard = DirGuard::new(temp_dir.path());

    cmd_generate(generate_args(&["--output-dir", "debug", "--json"])).unwrap();

    let env = std::fs::read_to_string(temp_dir.path().join("debug").join(".env")).unwrap();
    assert!(env.contains("SRC_DIR=../app\n"));
    assert!(!temp_dir.path().join("examples").exists());
}

#[test]
fn test_format_summary() {
    let summary = format_summary(&sample_report());
    let dockerfile = Path::new("examples/debug").join("Dockerfile");
    let script = Path::new("examples/debug").join("dlv.sh");

    assert!(summary.starts_with("Debug files generated successfully!\n"));
    assert!(summary.contains(&format!("  {}\n", dockerfile.display())));
    assert!(summary.contains(&format!("  {}  (executable)\n", script.display())));
    assert!(summary.ends_with("To start debugging:\n1. cd examples/debug\n2. docker-compose up\n"));
}

#[test]
fn test_format_summary_exact_layout() {
    let summary = format_summary(&sample_report());
    let dockerfile = Path::new("examples/debug").join("Dockerfile");
    let script = Path::new("examples/debug").join("dlv.sh");

    assert_eq!(
        summary,
        format!(
            "Debug files generated successfully!\n\nGenerated files:\n  {}\n  {}  (executable)\n\nTo start debugging:\n1. cd examples/debug\n2. docker-compose up\n",
            dockerfile.display(),
            script.display()
        )
    );
}

#[test]
fn test_format_json() {
    let config = DebugConfig::resolve(RawConfig {
        project_name: "svc".to_string(),
        src_dir: "./app".to_string(),
        main_file: "main.go".to_string(),
        ..RawConfig::default()
    })
    .unwrap();

    let output = format_json(&config, &sample_report());
    let value: serde_json::Value = serde_json::from_str(&output).unwrap();

    assert_eq!(value["config"]["project_name"], "svc");
    assert_eq!(value["config"]["debug_port"], 40000);
    assert_eq!(value["output_dir"], "examples/debug");
    assert_eq!(value["files"].as_array().unwrap().len(), 2);
    assert_eq!(value["files"][1]["file_name"], "dlv.sh");
    assert_eq!(value["files"][1]["executable"], true);
    assert_eq!(value["next_steps"][1], "docker-compose up");
}

#[test]
fn test_format_dry_run_text_and_json() {
    let rendered = vec![
        emit::RenderedFile {
            target: emit::Target::new(".env", ""),
            content: "PROJECT_NAME=svc\n".to_string(),
        },
        emit::RenderedFile {
            target: emit::Target::new("dlv.sh", "").executable(),
            content: "#!/bin/sh".to_string(),
        },
    ];
    let output_dir = Path::new("out");

    let text = format_dry_run(output_dir, &rendered, false);
    assert_eq!(
        text,
        format!(
            "==> {} <==\nPROJECT_NAME=svc\n\n==> {} <==\n#!/bin/sh\n\n",
            output_dir.join(".env").display(),
            output_dir.join("dlv.sh").display()
        )
    );

    let json = format_dry_run(output_dir, &rendered, true);
    let value: serde_json::Value = serde_json::from_str(&json).unwrap();
    assert_eq!(value["dry_run"], true);
    assert_eq!(value["files"][0]["content"], "PROJECT_NAME=svc\n");
    assert_eq!(value["files"][1]["executable"], true);
}
