//! Configuration resolution for dlvgen.
//!
//! Turns the raw flag values into a validated, immutable [`DebugConfig`]:
//! defaults are applied for the Go version and debug port, and the project
//! name, source directory and main file must all be non-empty.

mod model;
mod operations;
pub mod types;


// Re-export public API
pub use model::DebugConfig;
pub use types::{DEFAULT_DEBUG_PORT, DEFAULT_GO_VERSION, DEFAULT_OUTPUT_DIR, RawConfig};
