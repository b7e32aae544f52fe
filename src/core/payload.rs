//! core::payload
//!
//! The status payload exchanged between the runtime, the offline collector,
//! and the renderers.
//!
//! # Shape
//!
//! A payload is a schema-free mapping of string keys to JSON values. Both
//! producers populate a conventional subset of keys (`mode`, `source`,
//! `runtime_state`, `graph`, `last_error`, `queue`, ...) and every key is
//! optional at every level. [`serde_json::Value`] already is the tagged
//! union of null/bool/number/string/list/object, so the payload wraps a
//! [`Map`] of those and adds accessors that treat "absent" and "wrong type"
//! identically as missing.
//!
//! # Normalization
//!
//! [`ensure_mode`] runs once per invocation, after mode resolution and
//! before rendering. Afterwards `mode` is always present, and an offline
//! payload always carries `source = "offline"`.

use std::fmt;

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Key holding the outcome mode tag.
pub const MODE_KEY: &str = "mode";
/// Key holding the payload origin tag.
pub const SOURCE_KEY: &str = "source";
/// Value of [`SOURCE_KEY`] for payloads derived from disk.
pub const OFFLINE_SOURCE: &str = "offline";

/// Fallback shown for absent, null, or empty values.
pub const MISSING: &str = "n/a";

/// Outcome tag recorded in a payload's `mode` key.
///
/// Distinct from the caller's mode selection: `auto` is a strategy, never
/// an outcome.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StatusMode {
    /// Payload came from a live runtime.
    Connected,
    /// Payload was derived from on-disk project state.
    Offline,
}

impl StatusMode {
    /// The tag as written into the payload.
    pub fn as_str(&self) -> &'static str {
        match self {
            StatusMode::Connected => "connected",
            StatusMode::Offline => "offline",
        }
    }
}

impl fmt::Display for StatusMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A status payload.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct StatusPayload(Map<String, Value>);

impl StatusPayload {
    /// Create an empty payload.
    pub fn new() -> Self {
        Self::default()
    }

    /// Get a top-level value.
    pub fn get(&self, key: &str) -> Option<&Value> {
        self.0.get(key)
    }

    /// Check whether a top-level key is present (even if null).
    pub fn contains_key(&self, key: &str) -> bool {
        self.0.contains_key(key)
    }

    /// Insert or replace a top-level value.
    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<Value>) {
        self.0.insert(key.into(), value.into());
    }

    /// Remove a top-level key. Removing an absent key is a no-op.
    pub fn remove(&mut self, key: &str) -> Option<Value> {
        self.0.remove(key)
    }

    /// Get a nested mapping. Absent keys and non-object values are `None`.
    pub fn section(&self, key: &str) -> Option<&Map<String, Value>> {
        self.0.get(key).and_then(Value::as_object)
    }

    /// Mutable access to a nested mapping, if the key holds an object.
    pub fn section_mut(&mut self, key: &str) -> Option<&mut Map<String, Value>> {
        self.0.get_mut(key).and_then(Value::as_object_mut)
    }

    /// Get a field of a nested mapping, treating a missing or malformed
    /// section as empty.
    pub fn field(&self, section: &str, key: &str) -> Option<&Value> {
        self.section(section).and_then(|s| s.get(key))
    }

    /// The `mode` tag, if it is a string.
    pub fn mode(&self) -> Option<&str> {
        self.0.get(MODE_KEY).and_then(Value::as_str)
    }

    /// The `source` tag, if it is a string.
    pub fn source(&self) -> Option<&str> {
        self.0.get(SOURCE_KEY).and_then(Value::as_str)
    }

    /// Number of top-level keys.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Whether the payload has no keys.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Borrow the underlying map.
    pub fn as_map(&self) -> &Map<String, Value> {
        &self.0
    }
}

impl From<Map<String, Value>> for StatusPayload {
    fn from(map: Map<String, Value>) -> Self {
        Self(map)
    }
}

/// Normalize a payload so it always carries a mode tag.
///
/// - An absent payload starts as an empty mapping.
/// - A missing `mode` becomes `offline` or `connected` depending on `offline`.
///   An existing `mode` is never overwritten.
/// - When `offline` is set, `source` is forced to `offline`.
///
/// Total and idempotent.
pub fn ensure_mode(payload: Option<StatusPayload>, offline: bool) -> StatusPayload {
    let mut payload = payload.unwrap_or_default();

    if !payload.contains_key(MODE_KEY) {
        let mode = if offline {
            StatusMode::Offline
        } else {
            StatusMode::Connected
        };
        payload.insert(MODE_KEY, mode.as_str());
    }
    if offline {
        payload.insert(SOURCE_KEY, OFFLINE_SOURCE);
    }

    payload
}

/// Format a value for human display, using `fallback` for absent, null, or
/// empty-string values.
///
/// Strings print bare; numbers and booleans print as written in JSON;
/// lists and objects print as compact JSON.
pub fn display_or(value: Option<&Value>, fallback: &str) -> String {
    match value {
        None | Some(Value::Null) => fallback.to_string(),
        Some(Value::String(s)) if s.is_empty() => fallback.to_string(),
        Some(Value::String(s)) => s.clone(),
        Some(other) => other.to_string(),
    }
}

/// Format a value for human display with the [`MISSING`] fallback.
pub fn display_value(value: Option<&Value>) -> String {
    display_or(value, MISSING)
}
