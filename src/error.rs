//! Error types for the dlvgen CLI.
//!
//! Uses thiserror for derive macros. Every variant renders as a single line
//! that names the offending field or file, so `main` can print it verbatim.

use crate::exit_codes;
use crate::template::TemplateError;
use std::path::PathBuf;
use thiserror::Error;

/// Main error type for dlvgen operations.
#[derive(Error, Debug)]
pub enum DlvgenError {
    /// One or more required parameters were empty.
    #[error("project name, source directory, and main file are required (missing: {})", .missing.join(", "))]
    Validation { missing: Vec<&'static str> },

    /// The output directory could not be created.
    #[error("failed to create output directory '{}': {source}", .path.display())]
    Directory {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// A template could not be rendered.
    #[error("failed to render {file}: {source}")]
    Render {
        file: String,
        #[source]
        source: TemplateError,
    },

    /// A rendered file could not be written.
    #[error("failed to write {file}: {source}")]
    Write {
        file: String,
        #[source]
        source: std::io::Error,
    },

    /// The executable bit could not be set on a generated script.
    #[error("failed to make {file} executable: {source}")]
    Permission {
        file: String,
        #[source]
        source: std::io::Error,
    },
}

impl DlvgenError {
    /// Returns the appropriate exit code for this error type.
    pub fn exit_code(&self) -> i32 {
        match self {
            DlvgenError::Validation { .. } => exit_codes::USER_ERROR,
            DlvgenError::Directory { .. } => exit_codes::FILESYSTEM_FAILURE,
            DlvgenError::Render { .. } => exit_codes::TEMPLATE_FAILURE,
            DlvgenError::Write { .. } => exit_codes::FILESYSTEM_FAILURE,
            DlvgenError::Permission { .. } => exit_codes::FILESYSTEM_FAILURE,
        }
    }

    /// Name of the generated file this error refers to, if any.
    pub fn file(&self) -> Option<&str> {
        match self {
            DlvgenError::Render { file, .. }
            | DlvgenError::Write { file, .. }
            | DlvgenError::Permission { file, .. } => Some(file),
            DlvgenError::Validation { .. } | DlvgenError::Directory { .. } => None,
        }
    }
}

/// Result type alias for dlvgen operations.
pub type Result<T> = std::result::Result<T, DlvgenError>;
