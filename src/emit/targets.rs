//! The fixed set of generated files.

use crate::template;

/// A generated file: where it goes, what it renders from, and whether it
/// must be executable.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Target {
    /// File name relative to the output directory.
    pub file_name: &'static str,
    /// Template body with `{{ name }}` placeholders.
    pub template: &'static str,
    /// Whether the file gets the executable mode after writing.
    pub executable: bool,
}

impl Target {
    pub const fn new(file_name: &'static str, template: &'static str) -> Self {
        Self {
            file_name,
            template,
            executable: false,
        }
    }

    pub const fn executable(self) -> Self {
        Self {
            executable: true,
            ..self
        }
    }
}

/// Everything `dlvgen generate` writes. The files are independent of each
/// other; the order only fixes the order of output and reports.
pub const TARGETS: &[Target] = &[
    Target::new("Dockerfile", template::DOCKERFILE),
    Target::new("docker-compose.yaml", template::DOCKER_COMPOSE),
    Target::new(".env", template::ENV),
    Target::new("dlv.sh", template::DLV_SCRIPT).executable(),
];

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_four_distinct_targets() {
        let names: HashSet<_> = TARGETS.iter().map(|t| t.file_name).collect();
        assert_eq!(TARGETS.len(), 4);
        assert_eq!(names.len(), 4);
    }

    #[test]
    fn test_only_launch_script_is_executable() {
        let executable: Vec<_> = TARGETS
            .iter()
            .filter(|t| t.executable)
            .map(|t| t.file_name)
            .collect();
        assert_eq!(executable, vec!["dlv.sh"]);
    }

    #[test]
    fn test_launch_script_has_shebang() {
        let script = TARGETS.iter().find(|t| t.file_name == "dlv.sh").unwrap();
        assert!(script.template.starts_with("#!/bin/sh\n"));
    }
}
