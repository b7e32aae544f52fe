//! core::config::schema
//!
//! Keys read from config documents, and the document written by `init`.
//!
//! # Project Config
//!
//! Located at `.lodetime/config.yaml`. The status path reads only:
//!
//! ```yaml
//! current_phase: 2
//! active_profile: dev
//! runtime:
//!   endpoint: 127.0.0.1:9998
//! zones:
//!   core:
//!     paths: [lib/]
//! triggers:
//!   file_system:
//!     ignore: ["_build/**"]
//! ```
//!
//! # User Config
//!
//! Located at `<config_dir>/lode/config.yaml`. Only the endpoint keys are
//! consulted.

/// Key names, kept in one place so accessors and tests agree.
pub mod keys {
    pub const RUNTIME: &str = "runtime";
    pub const ENDPOINT: &str = "endpoint";
    pub const RUNTIME_ENDPOINT: &str = "runtime_endpoint";
    pub const CURRENT_PHASE: &str = "current_phase";
    pub const ACTIVE_PROFILE: &str = "active_profile";
    pub const ZONES: &str = "zones";
    pub const PATHS: &str = "paths";
    pub const TRIGGERS: &str = "triggers";
    pub const FILE_SYSTEM: &str = "file_system";
    pub const IGNORE: &str = "ignore";
}

/// Project config written by `lode init`.
pub const DEFAULT_PROJECT_CONFIG: &str = "\
# LodeTime Configuration
project: my-project
version: \"0.1.0\"

zones:
  core:
    paths: [src/, lib/]
    tracking: full
  tests:
    paths: [test/]
    tracking: none
";
