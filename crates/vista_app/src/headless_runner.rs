//! Scenario runner that drives a landing page headlessly.

use anyhow::{Context, Result};
use vista_theme::{MemoryStore, PreferenceStore};

use crate::config::PageConfig;
use crate::headless_assert::{
    evaluate_assert_active_tab, evaluate_assert_panel_title_contains, evaluate_assert_phase,
    evaluate_assert_range, evaluate_assert_rendered, evaluate_assert_scheme,
    evaluate_assert_visible_tab, AssertionResult,
};
use crate::headless_report::HeadlessReport;
use crate::headless_runtime::{HeadlessClock, HeadlessRunConfig};
use crate::headless_scenario::{HeadlessScenario, ScenarioStep};
use crate::page::LandingPage;

/// Final outcome of a scenario run.
#[derive(Debug, Clone)]
pub enum RunOutcome {
    Passed { report: HeadlessReport },
    Failed { report: HeadlessReport },
}

impl RunOutcome {
    pub fn report(&self) -> &HeadlessReport {
        match self {
            RunOutcome::Passed { report } => report,
            RunOutcome::Failed { report } => report,
        }
    }

    pub fn is_failed(&self) -> bool {
        matches!(self, RunOutcome::Failed { .. })
    }
}

/// Execute scenario JSON against a fresh page with an in-memory preference
/// store.
pub fn run_scenario(input: &str, config: &PageConfig) -> Result<RunOutcome> {
    let scenario = HeadlessScenario::from_json(input)?;
    run_scenario_with_store(&scenario, config, MemoryStore::new())
}

/// Execute a loaded scenario against a fresh page backed by `store`.
pub fn run_scenario_with_store<S: PreferenceStore>(
    scenario: &HeadlessScenario,
    config: &PageConfig,
    store: S,
) -> Result<RunOutcome> {
    let mut page =
        LandingPage::from_config(config, store).context("invalid page configuration")?;
    run_loaded_scenario(scenario, &mut page, config.headless.run_config())
}

/// Execute a pre-loaded scenario against an existing page.
pub fn run_loaded_scenario<S: PreferenceStore>(
    scenario: &HeadlessScenario,
    page: &mut LandingPage<S>,
    runtime_cfg: HeadlessRunConfig,
) -> Result<RunOutcome> {
    let mut clock = HeadlessClock::new(&runtime_cfg)?;

    for (step_index, step) in scenario.steps.iter().enumerate() {
        let snapshot = if step.assertion_name().is_some() {
            page.snapshot()
        } else {
            None
        };
        let snapshot = snapshot.as_ref();

        let result = match step {
            ScenarioStep::Wait { ms } => {
                clock
                    .wait(*ms, |frame| page.frame(frame.dt_ms as f32))
                    .with_context(|| format!("scenario step {step_index}"))?;
                continue;
            }
            ScenarioStep::Tick { frames } => {
                clock
                    .tick(*frames, |frame| page.frame(frame.dt_ms as f32))
                    .with_context(|| format!("scenario step {step_index}"))?;
                continue;
            }
            ScenarioStep::AssertRendered { rendered } => {
                evaluate_assert_rendered(*rendered, snapshot)
            }
            ScenarioStep::AssertScheme { scheme } => evaluate_assert_scheme(*scheme, snapshot),
            ScenarioStep::AssertActiveTab { tab } => evaluate_assert_active_tab(*tab, snapshot),
            ScenarioStep::AssertVisibleTab { tab } => evaluate_assert_visible_tab(*tab, snapshot),
            ScenarioStep::AssertPhase { phase } => evaluate_assert_phase(*phase, snapshot),
            ScenarioStep::AssertRange { metric, min, max } => {
                evaluate_assert_range(*metric, *min, *max, snapshot)
            }
            ScenarioStep::AssertPanelTitleContains { value } => {
                evaluate_assert_panel_title_contains(value, snapshot)
            }
            ScenarioStep::Mount
            | ScenarioStep::Scroll { .. }
            | ScenarioStep::Resize { .. }
            | ScenarioStep::SelectTab { .. }
            | ScenarioStep::ToggleTheme => {
                if let Some(event) = step.event() {
                    page.handle_event(event);
                }
                continue;
            }
        };

        if let AssertionResult::Failed { code, message } = result {
            let assertion = step.assertion_name().unwrap_or("assertion");
            tracing::debug!(step_index, assertion, code = %code, "scenario assertion failed");
            let report = HeadlessReport::failed(
                assertion,
                step_index,
                message,
                clock.elapsed_frames(),
                clock.elapsed_ms(),
                page.snapshot(),
            );
            return Ok(RunOutcome::Failed { report });
        }
    }

    Ok(RunOutcome::Passed {
        report: HeadlessReport::passed(
            clock.elapsed_frames(),
            clock.elapsed_ms(),
            page.snapshot(),
        ),
    })
}
