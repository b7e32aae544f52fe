//! ui::render
//!
//! Structured and human renderers for a normalized status payload.
//!
//! # Field Suppression
//!
//! Both renderers are pure functions of `(payload, verbose, offline)`.
//! The structured renderer deletes fields from a working copy in a fixed
//! order: the verbosity filter first, then the offline filter. The human
//! renderer prints fixed sections and fills anything missing with `n/a`.

use serde_json::Value;

use crate::core::payload::{display_or, display_value, StatusPayload, MODE_KEY, SOURCE_KEY};

/// Title line of the human report.
pub const TITLE: &str = "LodeTime Status";

/// Top-level keys only shown in verbose output.
const VERBOSE_ONLY_KEYS: &[&str] = &["config_summary", "queue", "last_check", "tools", "errors"];

/// `graph` keys only shown in verbose output.
const VERBOSE_ONLY_GRAPH_KEYS: &[&str] = &["hash", "last_change_at"];

/// Top-level keys that only a live runtime can report.
const RUNTIME_ONLY_KEYS: &[&str] = &["runtime_state", "runtime_version", "last_error"];

/// Render the payload as pretty-printed JSON (2-space indentation).
///
/// # Example
///
/// ```
/// use lodetime::core::payload::StatusPayload;
/// use lodetime::ui::render::render_json;
///
/// let payload: StatusPayload =
///     serde_json::from_str(r#"{"mode":"offline","runtime_state":"running"}"#).unwrap();
/// let json = render_json(&payload, false, true).unwrap();
/// assert_eq!(json, "{\n  \"mode\": \"offline\"\n}");
/// ```
pub fn render_json(
    payload: &StatusPayload,
    verbose: bool,
    offline: bool,
) -> serde_json::Result<String> {
    let mut filtered = payload.clone();

    if !verbose {
        for key in VERBOSE_ONLY_KEYS {
            filtered.remove(key);
        }
        if let Some(graph) = filtered.section_mut("graph") {
            for key in VERBOSE_ONLY_GRAPH_KEYS {
                graph.remove(*key);
            }
        }
    }
    if offline {
        for key in RUNTIME_ONLY_KEYS {
            filtered.remove(key);
        }
    }

    serde_json::to_string_pretty(&filtered)
}

/// Render the payload as a multi-section human report.
///
/// Always ends with a newline.
pub fn render_human(payload: &StatusPayload, verbose: bool, offline: bool) -> String {
    let mut report = Report::default();

    report.line(TITLE);
    report.line(format!(
        "Mode: {}",
        display_or(payload.get(MODE_KEY), "unknown")
    ));
    if let Some(source) = payload.get(SOURCE_KEY) {
        report.line(format!("Source: {}", display_value(Some(source))));
    }
    if let Some(phase) = payload.get("phase") {
        report.line(format!("Phase: {}", display_value(Some(phase))));
    }

    if !offline {
        report.line(format!(
            "Runtime State: {}",
            display_value(payload.get("runtime_state"))
        ));
        report.line(format!(
            "Runtime Version: {}",
            display_value(payload.get("runtime_version"))
        ));
    }

    report.section(payload, "Graph", "graph", &["component_count", "contract_count"]);

    if !offline {
        report.section(
            payload,
            "Last Error",
            "last_error",
            &["count", "last_at", "last_message"],
        );
    }

    if !verbose {
        return report.finish();
    }

    if offline {
        if payload.section("config_summary").is_some_and(|s| !s.is_empty()) {
            report.config_summary(payload);
        }
        return report.finish();
    }

    report.section(
        payload,
        "Queue",
        "queue",
        &["pending_count", "oldest_age", "last_checkpoint_at"],
    );
    report.section(payload, "Graph Details", "graph", &["hash", "last_change_at"]);
    report.section(
        payload,
        "Last Check",
        "last_check",
        &["status", "at", "warnings_open"],
    );
    report.config_summary(payload);
    report.section(payload, "Tools", "tools", &["enabled", "last_run"]);
    report.section(payload, "Errors by Process", "errors", &["by_process"]);

    report.finish()
}

/// Line accumulator for the human report.
#[derive(Default)]
struct Report {
    lines: Vec<String>,
}

impl Report {
    fn line(&mut self, line: impl Into<String>) {
        self.lines.push(line.into());
    }

    /// A blank line, the title, then every field of `payload[key]`.
    fn section(&mut self, payload: &StatusPayload, title: &str, key: &str, fields: &[&str]) {
        self.line("");
        self.line(title);
        for field in fields {
            let value: Option<&Value> = payload.field(key, field);
            self.line(format!("  {}: {}", field, display_value(value)));
        }
    }

    fn config_summary(&mut self, payload: &StatusPayload) {
        self.section(
            payload,
            "Config Summary",
            "config_summary",
            &["active_profile", "watched_paths_count", "ignored_paths_count"],
        );
    }

    fn finish(self) -> String {
        let mut out = self.lines.join("\n");
        out.push('\n');
        out
    }
}
