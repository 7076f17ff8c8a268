//! Vista Application
//!
//! Composes the Vista components into the landing page and runs it
//! headlessly.
//!
//! # Example
//!
//! ```rust
//! use vista_app::prelude::*;
//! use vista_theme::MemoryStore;
//!
//! let mut page = LandingPage::new(MemoryStore::new());
//! assert!(page.snapshot().is_none());
//!
//! page.handle_event(PageEvent::Mount);
//! page.handle_event(PageEvent::SelectTab { tab: LandingTab::Quizzes });
//! page.frame(16.0);
//!
//! let snapshot = page.snapshot().unwrap();
//! assert_eq!(snapshot.active_tab, LandingTab::Quizzes);
//! assert_eq!(snapshot.phase, PhaseKind::Exiting);
//! ```
//!
//! # Headless scenarios
//!
//! Scenarios are JSON step lists executed against a fresh page on a
//! deterministic frame clock; see [`headless_scenario::ScenarioStep`] for
//! the step set and [`run_scenario`] to execute one.

pub mod config;
pub mod event;
pub mod headless_assert;
pub mod headless_report;
pub mod headless_runner;
pub mod headless_runtime;
pub mod headless_scenario;
pub mod page;
pub mod sample;
pub mod tab;

pub use config::PageConfig;
pub use event::PageEvent;
pub use headless_report::{HeadlessReport, ReportStatus};
pub use headless_runner::{run_loaded_scenario, run_scenario, run_scenario_with_store, RunOutcome};
pub use headless_runtime::{HeadlessRunConfig, MAX_RUN_MS, MAX_TICK_MS};
pub use headless_scenario::HeadlessScenario;
pub use page::{LandingPage, PageSnapshot, PhaseKind, NAV_ITEMS};
pub use sample::{scroll_pass, ScrollSample, MAX_SAMPLE_STEPS};
pub use tab::{LandingTab, PanelCopy};

/// Prelude module - import everything commonly needed
pub mod prelude {
    pub use crate::config::PageConfig;
    pub use crate::event::PageEvent;
    pub use crate::page::{LandingPage, PageSnapshot, PhaseKind};
    pub use crate::tab::LandingTab;

    pub use vista_theme::ColorScheme;
}
