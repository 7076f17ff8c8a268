//! End-to-end headless runs of the landing page.

use std::collections::BTreeMap;
use std::fs;

use vista_app::{
    run_scenario, run_scenario_with_store, HeadlessScenario, PageConfig, PhaseKind, MAX_TICK_MS,
};
use vista_theme::{ColorScheme, FileStore};

fn run(steps: &str) -> vista_app::RunOutcome {
    let input = format!(r#"{{"steps": {steps}}}"#);
    run_scenario(&input, &PageConfig::default()).expect("scenario should load")
}

#[test]
fn first_load_renders_only_after_mount() {
    let outcome = run(r#"[
        {"type": "assert_rendered", "rendered": false},
        {"type": "tick", "frames": 5},
        {"type": "assert_rendered", "rendered": false},
        {"type": "mount"},
        {"type": "assert_rendered"},
        {"type": "assert_scheme", "scheme": "dark"},
        {"type": "assert_active_tab", "tab": "reports"}
    ]"#);

    assert!(outcome.report().is_passed(), "{:?}", outcome.report());
    assert_eq!(outcome.report().elapsed_frames, 5);
}

#[test]
fn rapid_tab_switches_settle_on_last_choice() {
    let outcome = run(r#"[
        {"type": "mount"},
        {"type": "select_tab", "tab": "presentations"},
        {"type": "wait", "ms": 100},
        {"type": "select_tab", "tab": "quizzes"},
        {"type": "assert_active_tab", "tab": "quizzes"},
        {"type": "assert_visible_tab", "tab": "reports"},
        {"type": "wait", "ms": 1000},
        {"type": "assert_phase", "phase": "idle"},
        {"type": "assert_visible_tab", "tab": "quizzes"},
        {"type": "assert_panel_title_contains", "value": "Quizzes"},
        {"type": "assert_range", "metric": "panel_opacity", "min": 1.0, "max": 1.0}
    ]"#);

    assert!(outcome.report().is_passed(), "{:?}", outcome.report());
    let snapshot = outcome.report().snapshot.expect("rendered");
    assert_eq!(snapshot.phase, PhaseKind::Idle);
    assert_eq!(snapshot.panel_translate_y, 0.0);
}

#[test]
fn scroll_reveals_section() {
    let outcome = run(r#"[
        {"type": "mount"},
        {"type": "scroll", "offset": 0},
        {"type": "assert_range", "metric": "section_opacity", "max": 0.0},
        {"type": "assert_range", "metric": "section_scale", "min": 0.8, "max": 0.8},
        {"type": "scroll", "offset": 645},
        {"type": "assert_range", "metric": "section_opacity", "min": 0.4, "max": 0.6},
        {"type": "scroll", "offset": 1400},
        {"type": "assert_range", "metric": "section_opacity", "min": 1.0},
        {"type": "assert_range", "metric": "section_scale", "min": 1.0, "max": 1.0}
    ]"#);

    assert!(outcome.report().is_passed(), "{:?}", outcome.report());
}

#[test]
fn failed_assertion_stops_the_run() {
    let outcome = run(r#"[
        {"type": "mount"},
        {"type": "assert_phase", "phase": "entering"},
        {"type": "tick", "frames": 10}
    ]"#);

    assert!(outcome.is_failed());
    let report = outcome.report();
    assert_eq!(report.failed_step_index, Some(1));
    assert_eq!(report.assertion.as_deref(), Some("assert_phase"));
    assert_eq!(report.elapsed_frames, 0);
    assert!(report.message.is_some());
}

#[test]
fn entrance_settles_within_a_few_seconds() {
    let outcome = run(r#"[
        {"type": "mount"},
        {"type": "assert_range", "metric": "header_offset", "min": -100.0, "max": -100.0},
        {"type": "wait", "ms": 3000},
        {"type": "assert_range", "metric": "header_offset", "min": -0.5, "max": 0.5}
    ]"#);

    assert!(outcome.report().is_passed(), "{:?}", outcome.report());
}

#[test]
fn stored_preference_is_read_and_written_back() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("prefs.json");
    fs::write(&path, r#"{"theme": "light", "locale": "en"}"#).unwrap();

    let scenario = HeadlessScenario::from_json(
        r#"{"steps": [
            {"type": "mount"},
            {"type": "assert_scheme", "scheme": "light"},
            {"type": "toggle_theme"},
            {"type": "assert_scheme", "scheme": "dark"}
        ]}"#,
    )
    .unwrap();

    let outcome =
        run_scenario_with_store(&scenario, &PageConfig::default(), FileStore::new(&path)).unwrap();
    assert!(outcome.report().is_passed(), "{:?}", outcome.report());

    let stored: BTreeMap<String, String> =
        serde_json::from_str(&fs::read_to_string(&path).unwrap()).unwrap();
    assert_eq!(stored.get("theme").map(String::as_str), Some("dark"));
    assert_eq!(stored.get("locale").map(String::as_str), Some("en"));
}

#[test]
fn configured_default_scheme_applies_without_preference() {
    let mut config = PageConfig::default();
    config.theme.default = ColorScheme::Light;

    let outcome = run_scenario(
        r#"{"steps": [{"type": "mount"}, {"type": "assert_scheme", "scheme": "light"}]}"#,
        &config,
    )
    .unwrap();
    assert!(outcome.report().is_passed(), "{:?}", outcome.report());
}

#[test]
fn report_serializes_status_and_snapshot() {
    let outcome = run(r#"[{"type": "mount"}]"#);
    let mut buf = Vec::new();
    outcome.report().write_to_writer(&mut buf).unwrap();

    let json: serde_json::Value = serde_json::from_slice(&buf).unwrap();
    assert_eq!(json["status"], "passed");
    assert_eq!(json["snapshot"]["scheme"], "dark");
    assert_eq!(json["snapshot"]["active_tab"], "reports");
}

#[test]
fn unbounded_time_is_rejected() {
    let err = run_scenario(
        r#"{"steps": [{"type": "mount"}, {"type": "wait", "ms": 18446744073709551615}]}"#,
        &PageConfig::default(),
    )
    .unwrap_err();
    assert!(format!("{err:#}").contains("step 1"), "{err:#}");

    let mut config = PageConfig::default();
    config.headless.tick_ms = MAX_TICK_MS * 1_000;
    assert!(run_scenario(r#"{"steps": [{"type": "tick", "frames": 1}]}"#, &config).is_err());
}

#[test]
fn preference_file_with_numeric_entries_is_honoured() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("prefs.json");
    fs::write(&path, r#"{"theme": "light", "visits": 3}"#).unwrap();

    let scenario = HeadlessScenario::from_json(
        r#"{"steps": [
            {"type": "mount"},
            {"type": "assert_rendered"},
            {"type": "assert_scheme", "scheme": "light"},
            {"type": "toggle_theme"},
            {"type": "assert_scheme", "scheme": "dark"}
        ]}"#,
    )
    .unwrap();

    let outcome =
        run_scenario_with_store(&scenario, &PageConfig::default(), FileStore::new(&path)).unwrap();
    assert!(outcome.report().is_passed(), "{:?}", outcome.report());

    let stored: serde_json::Value =
        serde_json::from_str(&fs::read_to_string(&path).unwrap()).unwrap();
    assert_eq!(stored["theme"], "dark");
    assert_eq!(stored["visits"], 3);
}
