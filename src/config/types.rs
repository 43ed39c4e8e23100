//! Raw configuration input and compiled-in defaults.

/// Go toolchain version used when `--go-version` is omitted.
pub const DEFAULT_GO_VERSION: &str = "1.22.2";

/// Delve listen port used when `--port` is omitted.
pub const DEFAULT_DEBUG_PORT: u16 = 40000;

/// Directory the generated files are written to, relative to the invocation.
pub const DEFAULT_OUTPUT_DIR: &str = "examples/debug";

/// Unvalidated parameters as supplied by the caller.
///
/// Optional fields fall back to the defaults above during
/// [`DebugConfig::resolve`](super::DebugConfig::resolve).
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RawConfig {
    pub go_version: Option<String>,
    pub project_name: String,
    pub src_dir: String,
    pub main_file: String,
    pub debug_port: Option<u16>,
}
