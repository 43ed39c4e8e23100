//! File mode adjustments for generated scripts.

use std::io;
use std::path::Path;

/// Mode applied to generated scripts: rwx for owner, r-x for group and other.
#[cfg(unix)]
pub const EXECUTABLE_MODE: u32 = 0o755;

/// Mark a file executable for its owner, group and others.
#[cfg(unix)]
pub fn make_executable(path: &Path) -> io::Result<()> {
    use std::os::unix::fs::PermissionsExt;

    std::fs::set_permissions(path, std::fs::Permissions::from_mode(EXECUTABLE_MODE))
}

/// Windows has no executable bit; the script only needs to exist.
#[cfg(not(unix))]
pub fn make_executable(path: &Path) -> io::Result<()> {
    std::fs::metadata(path).map(|_| ())
}
