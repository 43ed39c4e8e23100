//! DebugConfig struct definition.

use serde::Serialize;

/// Validated configuration for one generation run.
///
/// Built once by [`DebugConfig::resolve`] and read-only afterwards; fields
/// are private so a record can only exist in its validated form. The
/// serialized field names are the placeholder names available to templates.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DebugConfig {
    pub(super) go_version: String,
    pub(super) project_name: String,
    pub(super) src_dir: String,
    pub(super) main_file: String,
    pub(super) debug_port: u16,
}

impl DebugConfig {
    /// Go toolchain version for the debug image.
    pub fn go_version(&self) -> &str {
        &self.go_version
    }

    /// Project name used for the compose service and binary.
    pub fn project_name(&self) -> &str {
        &self.project_name
    }

    /// Source directory mounted into the container, relative to the invocation.
    pub fn src_dir(&self) -> &str {
        &self.src_dir
    }

    /// Entry point, relative to `src_dir`.
    pub fn main_file(&self) -> &str {
        &self.main_file
    }

    /// Port Delve listens on.
    pub fn debug_port(&self) -> u16 {
        self.debug_port
    }
}
