//! Filesystem utilities for dlvgen.
//!
//! Atomic writes for generated files and the mode change that makes the
//! launch script executable. Errors are plain `std::io::Error`; callers attach
//! the file name when wrapping them.

mod atomic;
mod permissions;

pub use atomic::atomic_write_file;
pub use permissions::make_executable;
