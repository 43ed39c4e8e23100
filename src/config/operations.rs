//! Config resolution and template variable extraction.

use super::model::DebugConfig;
use super::types::{DEFAULT_DEBUG_PORT, DEFAULT_GO_VERSION, RawConfig};
use crate::error::{DlvgenError, Result};
use regex::Regex;
use std::collections::HashMap;
use std::sync::LazyLock;

/// Go release versions look like `1.22` or `1.22.2`, optionally with a
/// pre-release suffix such as `1.23rc1`.
static GO_VERSION_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^\d+\.\d+(\.\d+)?([a-z]+\d+)?$").expect("Invalid Go version regex")
});

impl DebugConfig {
    /// Build a validated config from raw caller input.
    ///
    /// Omitted optional fields take their defaults. Fails with
    /// [`DlvgenError::Validation`] naming every required field that is empty.
    /// Values are otherwise kept verbatim. Performs no filesystem access.
    pub fn resolve(raw: RawConfig) -> Result<Self> {
        let missing: Vec<&'static str> = [
            ("project", &raw.project_name),
            ("src", &raw.src_dir),
            ("main", &raw.main_file),
        ]
        .into_iter()
        .filter(|(_, value)| value.is_empty())
        .map(|(flag, _)| flag)
        .collect();

        if !missing.is_empty() {
            return Err(DlvgenError::Validation { missing });
        }

        let go_version = raw
            .go_version
            .unwrap_or_else(|| DEFAULT_GO_VERSION.to_string());
        if !looks_like_go_version(&go_version) {
            tracing::warn!(
                go_version = %go_version,
                "Go version does not look like MAJOR.MINOR[.PATCH]; the golang image tag may not exist"
            );
        }

        let config = Self {
            go_version,
            project_name: raw.project_name,
            src_dir: raw.src_dir,
            main_file: raw.main_file,
            debug_port: raw.debug_port.unwrap_or(DEFAULT_DEBUG_PORT),
        };
        tracing::debug!(?config, "resolved configuration");
        Ok(config)
    }

    /// Convert the config to template variables.
    ///
    /// Keys are the record's field names, so `{{ project_name }}` in a
    /// template resolves to [`DebugConfig::project_name`].
    pub fn to_template_vars(&self) -> HashMap<String, String> {
        let mut vars = HashMap::new();
        vars.insert("go_version".to_string(), self.go_version().to_string());
        vars.insert("project_name".to_string(), self.project_name().to_string());
        vars.insert("src_dir".to_string(), self.src_dir().to_string());
        vars.insert("main_file".to_string(), self.main_file().to_string());
        vars.insert("debug_port".to_string(), self.debug_port().to_string());
        vars
    }
}

/// Check whether a version string matches the Go release naming scheme.
pub(super) fn looks_like_go_version(version: &str) -> bool {
    GO_VERSION_REGEX.is_match(version)
}
