//! Source directory path as seen from the generated compose file.
//!
//! Compose resolves relative volume paths against the directory holding the
//! compose file, while `--src` is given relative to where `dlvgen` was run.

use std::io;
use std::path::{Component, Path};

/// Express `src_dir` relative to `output_dir`.
///
/// - absolute `src_dir`: returned unchanged
/// - `output_dir` made only of plain segments (`examples/debug`): one `..`
///   per segment, then `src_dir`
/// - anything else (absolute or containing `..`): the current directory
///   joined with `src_dir`
pub fn src_mount(src_dir: &str, output_dir: &Path) -> io::Result<String> {
    if Path::new(src_dir).is_absolute() {
        return Ok(src_dir.to_string());
    }

    let rest = strip_current_dir(src_dir);
    let is_base = rest.is_empty() || rest == ".";

    match plain_depth(output_dir) {
        Some(0) => Ok(src_dir.to_string()),
        Some(depth) => {
            let prefix = vec![".."; depth].join("/");
            if is_base {
                Ok(prefix)
            } else {
                Ok(format!("{}/{}", prefix, rest))
            }
        }
        None => {
            let cwd = std::env::current_dir()?;
            let mount = if is_base { cwd } else { cwd.join(rest) };
            Ok(mount.display().to_string())
        }
    }
}

/// Number of plain segments in a relative path, or `None` if the path is
/// absolute or climbs with `..`.
fn plain_depth(path: &Path) -> Option<usize> {
    let mut depth = 0;
    for component in path.components() {
        match component {
            Component::Normal(_) => depth += 1,
            Component::CurDir => {}
            Component::ParentDir | Component::RootDir | Component::Prefix(_) => return None,
        }
    }
    Some(depth)
}

fn strip_current_dir(mut path: &str) -> &str {
    while let Some(rest) = path.strip_prefix("./") {
        path = rest.trim_start_matches('/');
    }
    path
}
