//! core
//!
//! Core domain types for LodeTime status.
//!
//! # Modules
//!
//! - [`paths`] - Project location and path routing
//! - [`config`] - Config documents and read-only accessors
//! - [`component`] - Component declaration documents
//! - [`payload`] - Status payload value type and normalization
//!
//! # Design Principles
//!
//! - Nothing here performs network I/O
//! - Config documents are read fresh on every invocation, never cached

pub mod component;
pub mod config;
pub mod paths;
pub mod payload;
