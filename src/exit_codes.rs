//! Exit code constants for the dlvgen CLI.
//!
//! - 0: Success
//! - 1: User error (missing or empty required parameters)
//! - 2: Usage error (reported by clap before any command runs)
//! - 3: Filesystem failure (directory, write, or permission)
//! - 4: Template failure (malformed template or unknown placeholder)

/// Successful execution.
pub const SUCCESS: i32 = 0;

/// User error: a required parameter was empty.
pub const USER_ERROR: i32 = 1;

/// Filesystem failure: output directory, file write, or permission change.
pub const FILESYSTEM_FAILURE: i32 = 3;

/// Template failure: a template could not be rendered.
pub const TEMPLATE_FAILURE: i32 = 4;
