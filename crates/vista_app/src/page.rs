//! Landing page composition
//!
//! [`LandingPage`] owns one of each stateful component for the lifetime of
//! the page and routes host events to them. Rendering reads a
//! [`PageSnapshot`], which is `None` until the theme preference is known.

use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};
use vista_core::{Result, Viewport};
use vista_layout::{
    EntranceChoreography, EntranceElement, ScrollMotion, ScrollProgressTracker, ScrollWindow,
    TabTransitionController, TransitionPhase,
};
use vista_theme::{ColorScheme, PreferenceStore, ThemeState};

use crate::config::PageConfig;
use crate::event::PageEvent;
use crate::tab::{panel_copy, LandingTab, PanelCopy};

/// Links in the header navigation
pub const NAV_ITEMS: [&str; 4] = ["Features", "Pricing", "About", "Contact"];

/// Phase of the tab block without its payload
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PhaseKind {
    Idle,
    Exiting,
    Entering,
}

impl<T> From<TransitionPhase<T>> for PhaseKind {
    fn from(phase: TransitionPhase<T>) -> Self {
        match phase {
            TransitionPhase::Idle(_) => PhaseKind::Idle,
            TransitionPhase::Exiting { .. } => PhaseKind::Exiting,
            TransitionPhase::Entering(_) => PhaseKind::Entering,
        }
    }
}

/// Everything the rendering surface needs for one frame
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct PageSnapshot {
    pub scheme: ColorScheme,
    pub scroll_progress: f32,
    pub section_opacity: f32,
    pub section_scale: f32,
    pub active_tab: LandingTab,
    pub visible_tab: LandingTab,
    pub phase: PhaseKind,
    pub panel_opacity: f32,
    pub panel_translate_y: f32,
    pub panel: PanelCopy,
    pub header_offset: f32,
    pub accent_position: f32,
}

/// The landing page and its presentation state
pub struct LandingPage<S> {
    viewport: Viewport,
    tracker: ScrollProgressTracker,
    motion: ScrollMotion,
    tabs: TabTransitionController<LandingTab>,
    theme: ThemeState<S>,
    entrance: EntranceChoreography,
    copy: FxHashMap<LandingTab, PanelCopy>,
    mounted: bool,
}

impl<S: PreferenceStore> LandingPage<S> {
    /// Page with the default configuration
    pub fn new(store: S) -> Self {
        let config = PageConfig::default();
        let viewport = config.headless.viewport();
        Self::assemble(
            viewport,
            ScrollProgressTracker::new(ScrollWindow::default(), viewport.height)
                .with_region(config.section.region()),
            ScrollMotion::fade_and_grow(),
            TabTransitionController::new(LandingTab::default()),
            ThemeState::new(store),
        )
    }

    /// Page built from configuration; fails on invalid mappings, scroll
    /// edges or easing names
    pub fn from_config(config: &PageConfig, store: S) -> Result<Self> {
        let viewport = config.headless.viewport();
        let tracker = ScrollProgressTracker::new(config.section.window()?, viewport.height)
            .with_region(config.section.region());
        let tabs = TabTransitionController::with_curve(
            config.tabs.default,
            config.tabs.transition_curve()?,
        );
        let theme = ThemeState::new(store).with_default(config.theme.default);

        Ok(Self::assemble(
            viewport,
            tracker,
            config.section.motion()?,
            tabs,
            theme,
        ))
    }

    fn assemble(
        viewport: Viewport,
        tracker: ScrollProgressTracker,
        motion: ScrollMotion,
        tabs: TabTransitionController<LandingTab>,
        theme: ThemeState<S>,
    ) -> Self {
        Self {
            viewport,
            tracker,
            motion,
            tabs,
            theme,
            entrance: EntranceChoreography::new(NAV_ITEMS.len() as u8),
            copy: panel_copy(),
            mounted: false,
        }
    }

    pub fn handle_event(&mut self, event: PageEvent) {
        tracing::trace!(?event, "page event");
        match event {
            PageEvent::Mount => self.mount(),
            PageEvent::Scroll { offset } => self.tracker.on_scroll(offset),
            PageEvent::Resize { width, height } => {
                self.viewport = Viewport::new(width, height);
                self.tracker.on_resize(self.viewport.height);
            }
            PageEvent::SelectTab { tab } => {
                self.tabs.select(tab);
            }
            PageEvent::ToggleTheme => self.theme.toggle(),
        }
    }

    fn mount(&mut self) {
        // retried on every mount until the preference is known
        self.theme.initialize();
        if !self.mounted {
            self.mounted = true;
            self.entrance.start();
            tracing::debug!(theme_ready = self.theme.get().is_ready(), "page mounted");
        }
    }

    /// Advance time-driven animations by `dt_ms`
    pub fn frame(&mut self, dt_ms: f32) {
        self.entrance.tick(dt_ms);
        self.tabs.tick(dt_ms);
    }

    /// Render state, or `None` while the theme preference is unknown
    pub fn snapshot(&self) -> Option<PageSnapshot> {
        let scheme = self.theme.get().get().copied()?;

        let progress = self.tracker.progress();
        let section = self.motion.style(progress);
        let panel = self.tabs.panel_style();
        let copy = self.copy.get(&panel.tab).copied().unwrap_or(PanelCopy {
            title: panel.tab.label(),
            body: "",
        });
        let header_offset = self
            .entrance
            .style(EntranceElement::Header)
            .map_or(0.0, |style| style.resolved_translate().1);

        Some(PageSnapshot {
            scheme,
            scroll_progress: progress.value(),
            section_opacity: section.opacity,
            section_scale: section.scale,
            active_tab: self.tabs.active(),
            visible_tab: panel.tab,
            phase: self.tabs.phase().into(),
            panel_opacity: panel.opacity,
            panel_translate_y: panel.translate_y,
            panel: copy,
            header_offset,
            accent_position: self.entrance.accent_position(),
        })
    }

    pub fn is_mounted(&self) -> bool {
        self.mounted
    }

    pub fn is_animating(&self) -> bool {
        self.tabs.is_animating() || (self.mounted && !self.entrance.is_settled())
    }

    pub fn viewport(&self) -> Viewport {
        self.viewport
    }

    pub fn tracker(&self) -> &ScrollProgressTracker {
        &self.tracker
    }

    pub fn tabs(&self) -> &TabTransitionController<LandingTab> {
        &self.tabs
    }

    pub fn theme(&self) -> &ThemeState<S> {
        &self.theme
    }

    pub fn entrance(&self) -> &EntranceChoreography {
        &self.entrance
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use vista_theme::MemoryStore;

    fn mounted_page() -> LandingPage<MemoryStore> {
        let mut page = LandingPage::new(MemoryStore::new());
        page.handle_event(PageEvent::Mount);
        page
    }

    #[test]
    fn test_render_suppressed_until_mount() {
        let mut page = LandingPage::new(MemoryStore::new());
        assert_eq!(page.snapshot(), None);

        page.handle_event(PageEvent::ToggleTheme);
        assert_eq!(page.snapshot(), None);

        page.handle_event(PageEvent::Mount);
        let snapshot = page.snapshot().unwrap();
        assert_eq!(snapshot.scheme, ColorScheme::Dark);
        assert_eq!(snapshot.active_tab, LandingTab::Reports);
        assert_eq!(snapshot.phase, PhaseKind::Idle);
        assert_eq!(snapshot.panel.title, "Generate Comprehensive Reports");
    }

    #[test]
    fn test_accessors_reflect_events() {
        let mut page = mounted_page();
        assert!(page.entrance().is_started());
        assert_eq!(page.theme().get().get().copied(), Some(ColorScheme::Dark));

        page.handle_event(PageEvent::Resize {
            width: 800.0,
            height: 600.0,
        });
        assert_eq!(page.viewport(), Viewport::new(800.0, 600.0));
        assert_eq!(page.tracker().viewport_extent(), 600.0);

        page.handle_event(PageEvent::SelectTab {
            tab: LandingTab::Quizzes,
        });
        assert_eq!(page.tabs().active(), LandingTab::Quizzes);
        assert!(page.tabs().is_animating());
    }

    #[test]
    fn test_unavailable_store_keeps_page_hidden() {
        let mut page = LandingPage::new(MemoryStore::unavailable());
        page.handle_event(PageEvent::Mount);
        assert!(page.is_mounted());
        assert_eq!(page.snapshot(), None);
    }

    #[test]
    fn test_scroll_drives_section_style() {
        let mut page = mounted_page();
        // default section: 900px tall at 960px, 720px viewport
        page.handle_event(PageEvent::Scroll { offset: 240.0 });
        let snapshot = page.snapshot().unwrap();
        assert_eq!(snapshot.scroll_progress, 0.0);
        assert_eq!(snapshot.section_opacity, 0.0);
        assert_eq!(snapshot.section_scale, 0.8);

        page.handle_event(PageEvent::Scroll { offset: 1050.0 });
        let snapshot = page.snapshot().unwrap();
        assert!((snapshot.scroll_progress - 0.5).abs() < 1e-6);
        assert_eq!(snapshot.section_opacity, 1.0);
        assert_eq!(snapshot.section_scale, 1.0);
    }

    #[test]
    fn test_resize_moves_window() {
        let mut page = mounted_page();
        page.handle_event(PageEvent::Scroll { offset: 400.0 });
        let before = page.snapshot().unwrap().scroll_progress;

        page.handle_event(PageEvent::Resize {
            width: 1280.0,
            height: 1000.0,
        });
        let after = page.snapshot().unwrap().scroll_progress;
        assert!(after > before);
        assert_eq!(page.viewport(), Viewport::new(1280.0, 1000.0));
    }

    #[test]
    fn test_tab_switch_swaps_copy_after_exit() {
        let mut page = mounted_page();
        page.handle_event(PageEvent::SelectTab {
            tab: LandingTab::Quizzes,
        });

        let exiting = page.snapshot().unwrap();
        assert_eq!(exiting.phase, PhaseKind::Exiting);
        assert_eq!(exiting.active_tab, LandingTab::Quizzes);
        assert_eq!(exiting.visible_tab, LandingTab::Reports);

        page.frame(300.0);
        let entering = page.snapshot().unwrap();
        assert_eq!(entering.phase, PhaseKind::Entering);
        assert_eq!(entering.panel.title, "Auto-Generate Quizzes");

        page.frame(300.0);
        assert_eq!(page.snapshot().unwrap().phase, PhaseKind::Idle);
    }

    #[test]
    fn test_entrance_runs_after_mount() {
        let mut page = LandingPage::new(MemoryStore::new());
        page.frame(1000.0);
        assert!(!page.is_animating());

        page.handle_event(PageEvent::Mount);
        assert!(page.is_animating());
        assert_eq!(page.snapshot().unwrap().header_offset, -100.0);

        for _ in 0..150 {
            page.frame(16.0);
        }
        assert!(!page.is_animating());
        assert_eq!(page.snapshot().unwrap().header_offset, 0.0);
    }

    #[test]
    fn test_from_config_applies_settings() {
        let mut config = PageConfig::default();
        config.tabs.default = LandingTab::Presentations;
        config.theme.default = ColorScheme::Light;

        let mut page = LandingPage::from_config(&config, MemoryStore::new()).unwrap();
        page.handle_event(PageEvent::Mount);
        let snapshot = page.snapshot().unwrap();
        assert_eq!(snapshot.scheme, ColorScheme::Light);
        assert_eq!(snapshot.active_tab, LandingTab::Presentations);
    }
}
