//! Atomic file writes.
//!
//! Generated files are written to a temporary sibling first, synced, then
//! renamed over the destination. A crash mid-write leaves either the old file
//! or the new one at the destination, never a truncated mix.
//!
//! # Important Notes
//!
//! - The parent directory must already exist; creating it is the caller's job
//! - On crash, a temporary file may remain (named `.{filename}.tmp`)
//! - Atomicity is per file only; writing several files is not a transaction

use std::fs::{self, File};
use std::io::{self, Write};
use std::path::{Path, PathBuf};

/// Atomically write bytes to a file, replacing any existing content.
///
/// The replaced file's permissions are not carried over: the new file gets
/// the default mode for newly created files.
pub fn atomic_write<P: AsRef<Path>>(path: P, content: &[u8]) -> io::Result<()> {
    let path = path.as_ref();
    let temp_path = temp_path_for(path)?;

    if let Err(e) = write_and_sync(&temp_path, content) {
        let _ = fs::remove_file(&temp_path);
        return Err(e);
    }

    if let Err(e) = fs::rename(&temp_path, path) {
        let _ = fs::remove_file(&temp_path);
        return Err(e);
    }

    sync_parent_dir(path);
    Ok(())
}

/// Persist the directory entry as well as the file contents.
#[cfg(unix)]
fn sync_parent_dir(path: &Path) {
    if let Some(parent) = path.parent()
        && let Ok(dir) = File::open(parent)
    {
        let _ = dir.sync_all();
    }
}

#[cfg(not(unix))]
fn sync_parent_dir(_path: &Path) {}

/// Atomically write a string to a file.
pub fn atomic_write_file<P: AsRef<Path>>(path: P, content: &str) -> io::Result<()> {
    atomic_write(path, content.as_bytes())
}

/// Temporary file path in the same directory as the target.
fn temp_path_for(target: &Path) -> io::Result<PathBuf> {
    let filename = target.file_name().ok_or_else(|| {
        io::Error::new(
            io::ErrorKind::InvalidInput,
            format!("'{}' has no file name", target.display()),
        )
    })?;

    let mut temp_name = std::ffi::OsString::from(".");
    temp_name.push(filename);
    temp_name.push(".tmp");
    Ok(target.with_file_name(temp_name))
}

fn write_and_sync(path: &Path, content: &[u8]) -> io::Result<()> {
    let mut file = File::create(path)?;
    file.write_all(content)?;
    file.sync_all()
}
