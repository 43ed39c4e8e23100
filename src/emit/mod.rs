//! Rendering and writing the generated files.
//!
//! # Sequence
//!
//! 1. Create the output directory (and any missing parents)
//! 2. For each target: render its template, write it atomically
//! 3. For executable targets: set the executable mode once written
//!
//! The first failure aborts the run. Files written before the failure are
//! left on disk; there is no rollback.

mod mount;
mod targets;


pub use targets::{TARGETS, Target};

use crate::config::DebugConfig;
use crate::error::{DlvgenError, Result};
use crate::fs::{atomic_write_file, make_executable};
use crate::template::render_template;
use std::collections::HashMap;
use std::path::{Path, PathBuf};

/// A target rendered in memory.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderedFile {
    pub target: Target,
    pub content: String,
}

/// A file written by [`emit`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EmittedFile {
    pub file_name: String,
    pub path: PathBuf,
    pub bytes: usize,
    pub executable: bool,
}

/// Summary of a successful [`emit`] run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EmitReport {
    pub output_dir: PathBuf,
    pub files: Vec<EmittedFile>,
}

/// Render every target and write it under `output_dir`.
pub fn emit(config: &DebugConfig, output_dir: &Path, targets: &[Target]) -> Result<EmitReport> {
    std::fs::create_dir_all(output_dir).map_err(|source| DlvgenError::Directory {
        path: output_dir.to_path_buf(),
        source,
    })?;
    tracing::debug!(output_dir = %output_dir.display(), "output directory ready");

    let vars = template_vars(config, output_dir)?;
    let mut files = Vec::with_capacity(targets.len());

    for target in targets {
        let content = render_target(target, &vars)?;
        let path = output_dir.join(target.file_name);

        atomic_write_file(&path, &content).map_err(|source| DlvgenError::Write {
            file: target.file_name.to_string(),
            source,
        })?;

        apply_mode(target, &path)?;

        tracing::info!(
            file = target.file_name,
            path = %path.display(),
            bytes = content.len(),
            executable = target.executable,
            "wrote generated file"
        );

        files.push(EmittedFile {
            file_name: target.file_name.to_string(),
            path,
            bytes: content.len(),
            executable: target.executable,
        });
    }

    Ok(EmitReport {
        output_dir: output_dir.to_path_buf(),
        files,
    })
}

/// Render every target without touching the filesystem.
///
/// Produces exactly what [`emit`] would write for the same arguments.
pub fn render_all(
    config: &DebugConfig,
    output_dir: &Path,
    targets: &[Target],
) -> Result<Vec<RenderedFile>> {
    let vars = template_vars(config, output_dir)?;
    targets
        .iter()
        .map(|target| {
            Ok(RenderedFile {
                target: *target,
                content: render_target(target, &vars)?,
            })
        })
        .collect()
}

/// Config fields plus the derived `src_mount` path.
fn template_vars(config: &DebugConfig, output_dir: &Path) -> Result<HashMap<String, String>> {
    let mut vars = config.to_template_vars();
    let mount = mount::src_mount(config.src_dir(), output_dir).map_err(|source| {
        DlvgenError::Directory {
            path: output_dir.to_path_buf(),
            source,
        }
    })?;
    vars.insert("src_mount".to_string(), mount);
    Ok(vars)
}

/// Mark `path` executable when `target` calls for it.
///
/// Only a file that vanished or is not ours fails here, which cannot be
/// staged portably between the write and the mode change inside [`emit`].
fn apply_mode(target: &Target, path: &Path) -> Result<()> {
    if !target.executable {
        return Ok(());
    }
    make_executable(path).map_err(|source| DlvgenError::Permission {
        file: target.file_name.to_string(),
        source,
    })
}

fn render_target(target: &Target, vars: &HashMap<String, String>) -> Result<String> {
    tracing::debug!(file = target.file_name, "rendering template");
    render_template(target.template, vars).map_err(|source| DlvgenError::Render {
        file: target.file_name.to_string(),
        source,
    })
}
