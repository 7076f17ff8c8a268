//! Assertion helpers for headless page runs.

use serde::{Deserialize, Serialize};
use vista_theme::ColorScheme;

use crate::page::{PageSnapshot, PhaseKind};
use crate::tab::LandingTab;

/// Numeric snapshot values that range assertions can check.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Metric {
    ScrollProgress,
    SectionOpacity,
    SectionScale,
    PanelOpacity,
    PanelTranslateY,
    HeaderOffset,
    AccentPosition,
}

impl Metric {
    pub fn read(self, snapshot: &PageSnapshot) -> f32 {
        match self {
            Metric::ScrollProgress => snapshot.scroll_progress,
            Metric::SectionOpacity => snapshot.section_opacity,
            Metric::SectionScale => snapshot.section_scale,
            Metric::PanelOpacity => snapshot.panel_opacity,
            Metric::PanelTranslateY => snapshot.panel_translate_y,
            Metric::HeaderOffset => snapshot.header_offset,
            Metric::AccentPosition => snapshot.accent_position,
        }
    }
}

/// Assertion result with structured failure details.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AssertionResult {
    Passed,
    Failed { code: String, message: String },
}

impl AssertionResult {
    fn failed(code: &str, message: String) -> Self {
        AssertionResult::Failed {
            code: code.to_string(),
            message,
        }
    }

    fn check(ok: bool, code: &str, message: impl FnOnce() -> String) -> Self {
        if ok {
            AssertionResult::Passed
        } else {
            Self::failed(code, message())
        }
    }
}

fn not_rendered() -> AssertionResult {
    AssertionResult::failed(
        "not_rendered",
        "page is not rendered (theme preference unknown)".to_string(),
    )
}

pub fn evaluate_assert_rendered(
    expected: bool,
    snapshot: Option<&PageSnapshot>,
) -> AssertionResult {
    let rendered = snapshot.is_some();
    AssertionResult::check(rendered == expected, "render_mismatch", || {
        if expected {
            "expected page to render, but it is suppressed".to_string()
        } else {
            "expected page to be suppressed, but it rendered".to_string()
        }
    })
}

pub fn evaluate_assert_scheme(
    expected: ColorScheme,
    snapshot: Option<&PageSnapshot>,
) -> AssertionResult {
    let Some(snapshot) = snapshot else {
        return not_rendered();
    };
    AssertionResult::check(snapshot.scheme == expected, "scheme_mismatch", || {
        format!("expected scheme '{expected}', got '{}'", snapshot.scheme)
    })
}

pub fn evaluate_assert_active_tab(
    expected: LandingTab,
    snapshot: Option<&PageSnapshot>,
) -> AssertionResult {
    let Some(snapshot) = snapshot else {
        return not_rendered();
    };
    AssertionResult::check(snapshot.active_tab == expected, "tab_mismatch", || {
        format!("expected active tab '{expected}', got '{}'", snapshot.active_tab)
    })
}

pub fn evaluate_assert_visible_tab(
    expected: LandingTab,
    snapshot: Option<&PageSnapshot>,
) -> AssertionResult {
    let Some(snapshot) = snapshot else {
        return not_rendered();
    };
    AssertionResult::check(snapshot.visible_tab == expected, "tab_mismatch", || {
        format!("expected visible tab '{expected}', got '{}'", snapshot.visible_tab)
    })
}

pub fn evaluate_assert_phase(
    expected: PhaseKind,
    snapshot: Option<&PageSnapshot>,
) -> AssertionResult {
    let Some(snapshot) = snapshot else {
        return not_rendered();
    };
    AssertionResult::check(snapshot.phase == expected, "phase_mismatch", || {
        format!("expected phase {expected:?}, got {:?}", snapshot.phase)
    })
}

pub fn evaluate_assert_range(
    metric: Metric,
    min: f32,
    max: f32,
    snapshot: Option<&PageSnapshot>,
) -> AssertionResult {
    let Some(snapshot) = snapshot else {
        return not_rendered();
    };
    let value = metric.read(snapshot);
    AssertionResult::check((min..=max).contains(&value), "out_of_range", || {
        format!("{metric:?}: expected value in [{min}, {max}], got {value}")
    })
}

pub fn evaluate_assert_panel_title_contains(
    expected: &str,
    snapshot: Option<&PageSnapshot>,
) -> AssertionResult {
    let Some(snapshot) = snapshot else {
        return not_rendered();
    };
    let title = snapshot.panel.title;
    AssertionResult::check(title.contains(expected), "text_mismatch", || {
        format!("panel title: expected substring '{expected}', got '{title}'")
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tab::PanelCopy;

    fn snapshot() -> PageSnapshot {
        PageSnapshot {
            scheme: ColorScheme::Dark,
            scroll_progress: 0.25,
            section_opacity: 0.5,
            section_scale: 0.9,
            active_tab: LandingTab::Quizzes,
            visible_tab: LandingTab::Reports,
            phase: PhaseKind::Exiting,
            panel_opacity: 0.4,
            panel_translate_y: -12.0,
            panel: PanelCopy {
                title: "Generate Comprehensive Reports",
                body: "",
            },
            header_offset: 0.0,
            accent_position: 10.0,
        }
    }

    #[test]
    fn test_missing_snapshot_fails_value_assertions() {
        assert!(matches!(
            evaluate_assert_scheme(ColorScheme::Dark, None),
            AssertionResult::Failed { code, .. } if code == "not_rendered"
        ));
        assert_eq!(evaluate_assert_rendered(false, None), AssertionResult::Passed);
    }

    #[test]
    fn test_range_and_tabs() {
        let snapshot = snapshot();
        assert_eq!(
            evaluate_assert_range(Metric::SectionScale, 0.85, 0.95, Some(&snapshot)),
            AssertionResult::Passed
        );
        assert!(matches!(
            evaluate_assert_range(Metric::PanelOpacity, 0.5, 1.0, Some(&snapshot)),
            AssertionResult::Failed { code, .. } if code == "out_of_range"
        ));
        assert_eq!(
            evaluate_assert_active_tab(LandingTab::Quizzes, Some(&snapshot)),
            AssertionResult::Passed
        );
        assert_ne!(
            evaluate_assert_visible_tab(LandingTab::Quizzes, Some(&snapshot)),
            AssertionResult::Passed
        );
        assert_eq!(
            evaluate_assert_panel_title_contains("Reports", Some(&snapshot)),
            AssertionResult::Passed
        );
    }
}
