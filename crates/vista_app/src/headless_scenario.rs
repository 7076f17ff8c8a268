//! Scenario definition for headless page runs.

use anyhow::{Context, Result};
use serde::Deserialize;
use std::path::Path;
use vista_theme::ColorScheme;

use crate::event::PageEvent;
use crate::headless_assert::Metric;
use crate::page::PhaseKind;
use crate::tab::LandingTab;

/// Sequence of headless steps.
#[derive(Debug, Clone, Deserialize)]
pub struct HeadlessScenario {
    pub steps: Vec<ScenarioStep>,
}

impl HeadlessScenario {
    /// Load a scenario from JSON text.
    pub fn from_json(input: &str) -> Result<Self> {
        serde_json::from_str(input).context("invalid scenario JSON")
    }

    /// Load a scenario from file.
    pub fn from_path(path: &Path) -> Result<Self> {
        let raw = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read scenario {}", path.display()))?;
        Self::from_json(&raw).with_context(|| format!("failed to load {}", path.display()))
    }
}

/// One scenario step: a page event, a clock advance or an assertion.
#[derive(Debug, Clone, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum ScenarioStep {
    Mount,
    Scroll {
        offset: f32,
    },
    Resize {
        width: f32,
        height: f32,
    },
    SelectTab {
        tab: LandingTab,
    },
    ToggleTheme,
    Wait {
        ms: u64,
    },
    Tick {
        frames: u32,
    },
    /// The page produces a snapshot (`true`) or is suppressed (`false`)
    AssertRendered {
        #[serde(default = "default_true")]
        rendered: bool,
    },
    AssertScheme {
        scheme: ColorScheme,
    },
    AssertActiveTab {
        tab: LandingTab,
    },
    AssertVisibleTab {
        tab: LandingTab,
    },
    AssertPhase {
        phase: PhaseKind,
    },
    AssertRange {
        metric: Metric,
        #[serde(default = "default_min")]
        min: f32,
        #[serde(default = "default_max")]
        max: f32,
    },
    AssertPanelTitleContains {
        value: String,
    },
}

fn default_true() -> bool {
    true
}

fn default_min() -> f32 {
    f32::MIN
}

fn default_max() -> f32 {
    f32::MAX
}

impl ScenarioStep {
    /// The page event this step delivers, if it is an event step
    pub fn event(&self) -> Option<PageEvent> {
        match *self {
            ScenarioStep::Mount => Some(PageEvent::Mount),
            ScenarioStep::Scroll { offset } => Some(PageEvent::Scroll { offset }),
            ScenarioStep::Resize { width, height } => Some(PageEvent::Resize { width, height }),
            ScenarioStep::SelectTab { tab } => Some(PageEvent::SelectTab { tab }),
            ScenarioStep::ToggleTheme => Some(PageEvent::ToggleTheme),
            _ => None,
        }
    }

    /// Name used in reports for assertion steps
    pub fn assertion_name(&self) -> Option<&'static str> {
        Some(match self {
            ScenarioStep::AssertRendered { .. } => "assert_rendered",
            ScenarioStep::AssertScheme { .. } => "assert_scheme",
            ScenarioStep::AssertActiveTab { .. } => "assert_active_tab",
            ScenarioStep::AssertVisibleTab { .. } => "assert_visible_tab",
            ScenarioStep::AssertPhase { .. } => "assert_phase",
            ScenarioStep::AssertRange { .. } => "assert_range",
            ScenarioStep::AssertPanelTitleContains { .. } => "assert_panel_title_contains",
            _ => return None,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_steps() {
        let scenario = HeadlessScenario::from_json(
            r#"{"steps": [
                {"type": "mount"},
                {"type": "scroll", "offset": 1200},
                {"type": "wait", "ms": 300},
                {"type": "assert_range", "metric": "section_opacity", "min": 0.5},
                {"type": "assert_rendered"}
            ]}"#,
        )
        .unwrap();

        assert_eq!(scenario.steps.len(), 5);
        assert_eq!(scenario.steps[0].event(), Some(PageEvent::Mount));
        assert_eq!(scenario.steps[2].event(), None);
        assert!(matches!(
            scenario.steps[3],
            ScenarioStep::AssertRange {
                metric: Metric::SectionOpacity,
                min,
                max
            } if min == 0.5 && max == f32::MAX
        ));
        assert!(matches!(
            scenario.steps[4],
            ScenarioStep::AssertRendered { rendered: true }
        ));
        assert_eq!(scenario.steps[4].assertion_name(), Some("assert_rendered"));
    }

    #[test]
    fn test_unknown_step_is_rejected() {
        let err = HeadlessScenario::from_json(r#"{"steps": [{"type": "hover"}]}"#).unwrap_err();
        assert!(err.to_string().contains("invalid scenario JSON"));
    }
}
