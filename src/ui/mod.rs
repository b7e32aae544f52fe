//! ui
//!
//! User-facing output.
//!
//! # Modules
//!
//! - [`output`] - Verbosity-aware printing of results, warnings, and errors
//! - [`render`] - Structured (JSON) and human renderers for status payloads
//!
//! # Design
//!
//! Renderers are pure: they return text and never print. Command handlers
//! decide where the text goes.

pub mod output;
pub mod render;
