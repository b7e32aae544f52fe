//! runtime::endpoint
//!
//! Resolve which address to contact for the runtime.
//!
//! # Precedence
//!
//! First non-empty source wins:
//! 1. Explicit override (`--endpoint`)
//! 2. `$LODE_RUNTIME_ENDPOINT`
//! 3. Project config (`runtime.endpoint`, `runtime_endpoint`, `endpoint`)
//! 4. User config, same keys
//! 5. [`DEFAULT_ENDPOINT`]
//!
//! Config documents that are missing or fail to parse are skipped silently.
//! The endpoint is resolved once per invocation and never cached.

use std::path::{Path, PathBuf};

use tracing::debug;

use crate::core::config::ProjectConfig;
use crate::core::paths::{user_config_path, ProjectPaths};

/// Address used when nothing else is configured.
pub const DEFAULT_ENDPOINT: &str = "127.0.0.1:9998";

/// Environment variable overriding the endpoint.
pub const ENDPOINT_ENV: &str = "LODE_RUNTIME_ENDPOINT";

/// Inputs to endpoint resolution.
///
/// Gathered from the process environment by [`EndpointSources::gather`];
/// tests build it directly.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EndpointSources {
    /// Caller-supplied override.
    pub explicit: Option<String>,
    /// Value of [`ENDPOINT_ENV`].
    pub env: Option<String>,
    /// Project config document path.
    pub project_config: Option<PathBuf>,
    /// User-global config document path.
    pub user_config: Option<PathBuf>,
}

impl EndpointSources {
    /// Collect sources from the environment and standard locations.
    pub fn gather(explicit: Option<&str>, project: Option<&ProjectPaths>) -> Self {
        Self {
            explicit: explicit.map(str::to_string),
            env: std::env::var(ENDPOINT_ENV).ok(),
            project_config: project.map(ProjectPaths::config_path),
            user_config: user_config_path(),
        }
    }

    /// Resolve the endpoint.
    pub fn resolve(&self) -> String {
        if let Some(endpoint) = non_empty(self.explicit.as_deref()) {
            debug!(endpoint, "endpoint from explicit override");
            return endpoint.to_string();
        }
        if let Some(endpoint) = non_empty(self.env.as_deref()) {
            debug!(endpoint, "endpoint from {}", ENDPOINT_ENV);
            return endpoint.to_string();
        }
        for path in [&self.project_config, &self.user_config].into_iter().flatten() {
            if let Some(endpoint) = endpoint_from_config(path) {
                debug!(endpoint = %endpoint, path = %path.display(), "endpoint from config");
                return endpoint;
            }
        }
        debug!(endpoint = DEFAULT_ENDPOINT, "endpoint from default");
        DEFAULT_ENDPOINT.to_string()
    }
}

/// Resolve the endpoint for a project from the process environment.
pub fn resolve_endpoint(explicit: Option<&str>, project: Option<&ProjectPaths>) -> String {
    EndpointSources::gather(explicit, project).resolve()
}

fn endpoint_from_config(path: &Path) -> Option<String> {
    ProjectConfig::load_optional(path)?
        .endpoint()
        .map(str::to_string)
}

fn non_empty(value: Option<&str>) -> Option<&str> {
    value.filter(|v| !v.is_empty())
}
