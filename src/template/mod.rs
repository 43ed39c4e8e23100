//! Template bodies and the substitution engine that renders them.
//!
//! The four template bodies are compiled into the binary from the
//! repository's `templates/` directory. Each uses `{{ name }}` placeholders
//! whose names match the fields of [`DebugConfig`](crate::config::DebugConfig)
//! plus the derived `src_mount` variable:
//!
//! ```text
//! FROM golang:{{ go_version }}
//! EXPOSE {{ debug_port }}
//! ```

mod engine;

pub use engine::{TemplateError, render_template};

/// Container build definition.
pub const DOCKERFILE: &str = include_str!("../../templates/Dockerfile.tmpl");

/// Orchestration definition.
pub const DOCKER_COMPOSE: &str = include_str!("../../templates/docker-compose.yaml.tmpl");

/// Environment variables consumed by the compose file.
pub const ENV: &str = include_str!("../../templates/env.tmpl");

/// Delve launch script run as the container entrypoint.
pub const DLV_SCRIPT: &str = include_str!("../../templates/dlv.sh.tmpl");
