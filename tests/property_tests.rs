//! Property-based tests for normalization, mode resolution, and rendering.
//!
//! These tests use proptest to verify invariants hold across
//! randomly generated payloads and flag combinations.

use proptest::prelude::*;
use serde_json::{Map, Value};

use lodetime::core::payload::{ensure_mode, StatusPayload};
use lodetime::engine::modes::{ModeError, ModeSelection};
use lodetime::ui::render::{render_human, render_json};

/// Keys the renderers treat specially, mixed with arbitrary ones.
fn payload_key() -> impl Strategy<Value = String> {
    prop_oneof![
        Just("mode".to_string()),
        Just("source".to_string()),
        Just("graph".to_string()),
        Just("queue".to_string()),
        Just("last_check".to_string()),
        Just("tools".to_string()),
        Just("errors".to_string()),
        Just("config_summary".to_string()),
        Just("runtime_state".to_string()),
        Just("runtime_version".to_string()),
        Just("last_error".to_string()),
        "[a-z_]{1,10}",
    ]
}

/// Strategy for arbitrary JSON values, a few levels deep.
fn json_value() -> impl Strategy<Value = Value> {
    let leaf = prop_oneof![
        Just(Value::Null),
        any::<bool>().prop_map(Value::Bool),
        any::<i64>().prop_map(Value::from),
        "[ -~]{0,12}".prop_map(Value::String),
    ];
    leaf.prop_recursive(3, 24, 4, |inner| {
        prop_oneof![
            prop::collection::vec(inner.clone(), 0..4).prop_map(Value::Array),
            prop::collection::btree_map(payload_key(), inner, 0..4)
                .prop_map(|m| Value::Object(m.into_iter().collect())),
        ]
    })
}

/// Strategy for status payloads.
fn payload() -> impl Strategy<Value = StatusPayload> {
    prop::collection::btree_map(payload_key(), json_value(), 0..8)
        .prop_map(|m| StatusPayload::from(m.into_iter().collect::<Map<String, Value>>()))
}

fn top_level_keys(rendered: &str) -> Vec<String> {
    let parsed: Value = serde_json::from_str(rendered).unwrap();
    parsed.as_object().unwrap().keys().cloned().collect()
}

proptest! {
    #[test]
    fn ensure_mode_is_idempotent(p in proptest::option::of(payload()), offline in any::<bool>()) {
        let once = ensure_mode(p, offline);
        let twice = ensure_mode(Some(once.clone()), offline);
        prop_assert_eq!(once, twice);
    }

    #[test]
    fn ensure_mode_always_tags(p in proptest::option::of(payload()), offline in any::<bool>()) {
        let normalized = ensure_mode(p, offline);
        prop_assert!(normalized.contains_key("mode"));
    }

    #[test]
    fn ensure_mode_offline_sets_source(p in payload()) {
        let normalized = ensure_mode(Some(p.clone()), true);
        prop_assert_eq!(normalized.get("source"), Some(&Value::from("offline")));
        if !p.contains_key("mode") {
            prop_assert_eq!(normalized.mode(), Some("offline"));
        }
    }

    #[test]
    fn ensure_mode_keeps_existing_mode(p in payload(), mode in json_value()) {
        let mut p = p;
        p.insert("mode", mode.clone());
        let normalized = ensure_mode(Some(p), false);
        prop_assert_eq!(normalized.get("mode"), Some(&mode));
    }

    #[test]
    fn ensure_mode_connected_leaves_other_keys(p in payload()) {
        let normalized = ensure_mode(Some(p.clone()), false);
        for (key, value) in p.as_map() {
            prop_assert_eq!(normalized.get(key), Some(value));
        }
    }

    #[test]
    fn both_forced_modes_always_conflict(auto in any::<bool>()) {
        prop_assert_eq!(ModeSelection::resolve(true, true, auto), Err(ModeError::Conflicting));
    }

    #[test]
    fn a_single_forced_mode_wins(connected in any::<bool>(), auto in any::<bool>()) {
        let expected = if connected { ModeSelection::Connected } else { ModeSelection::Offline };
        prop_assert_eq!(ModeSelection::resolve(connected, !connected, auto), Ok(expected));
    }

    #[test]
    fn json_non_verbose_drops_detail_keys(p in payload(), offline in any::<bool>()) {
        let rendered = render_json(&p, false, offline).unwrap();
        let keys = top_level_keys(&rendered);
        for hidden in ["queue", "last_check", "tools", "errors", "config_summary"] {
            prop_assert!(!keys.iter().any(|k| k == hidden), "{} leaked", hidden);
        }
    }

    #[test]
    fn json_offline_drops_runtime_keys(p in payload(), verbose in any::<bool>()) {
        let rendered = render_json(&p, verbose, true).unwrap();
        let keys = top_level_keys(&rendered);
        for hidden in ["runtime_state", "runtime_version", "last_error"] {
            prop_assert!(!keys.iter().any(|k| k == hidden), "{} leaked", hidden);
        }
    }

    #[test]
    fn json_keeps_everything_verbose_connected(p in payload()) {
        let rendered = render_json(&p, true, false).unwrap();
        let reparsed: StatusPayload = serde_json::from_str(&rendered).unwrap();
        prop_assert_eq!(reparsed, p);
    }

    #[test]
    fn human_mode_line_matches_payload(
        p in payload(),
        mode in "[a-z][a-z_-]{0,11}",
        verbose in any::<bool>(),
        offline in any::<bool>(),
    ) {
        let mut p = p;
        p.insert("mode", mode.clone());
        let rendered = render_human(&p, verbose, offline);
        let expected = format!("Mode: {}", mode);
        prop_assert!(rendered.lines().any(|line| line == expected));
    }
}

#[test]
fn auto_requires_opt_in() {
    assert_eq!(ModeSelection::resolve(false, false, false), Err(ModeError::Required));
    assert_eq!(ModeSelection::resolve(false, false, true), Ok(ModeSelection::Auto));
}
