//! Page configuration
//!
//! Every field has a default reproducing the stock landing page, so an
//! empty configuration file (or none at all) is valid.

use std::path::PathBuf;

use serde::{Deserialize, Serialize};
use vista_animation::{Easing, SpringConfig, SpringCurve, TimedCurve, TransitionCurve};
use vista_core::{RegionBounds, Result, Viewport};
use vista_layout::{ScrollMotion, ScrollWindow};
use vista_theme::ColorScheme;

use crate::headless_runtime::HeadlessRunConfig;
use crate::tab::LandingTab;

/// Top-level page configuration (the contents of `vista.toml`)
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
pub struct PageConfig {
    #[serde(default)]
    pub section: SectionConfig,
    #[serde(default)]
    pub tabs: TabsConfig,
    #[serde(default)]
    pub theme: ThemeConfig,
    #[serde(default)]
    pub headless: HeadlessConfig,
}

// ============================================================================
// [section]
// ============================================================================

/// The scroll-animated section
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct SectionConfig {
    /// Distance from the top of the page to the section
    #[serde(default = "default_section_offset")]
    pub offset: f32,
    #[serde(default = "default_section_height")]
    pub height: f32,
    /// Window start condition, e.g. `"start end"`
    #[serde(default = "default_window_start")]
    pub window_start: String,
    #[serde(default = "default_window_end")]
    pub window_end: String,
    #[serde(default = "default_reveal_inputs")]
    pub opacity_inputs: Vec<f32>,
    #[serde(default = "default_opacity_outputs")]
    pub opacity_outputs: Vec<f32>,
    #[serde(default = "default_reveal_inputs")]
    pub scale_inputs: Vec<f32>,
    #[serde(default = "default_scale_outputs")]
    pub scale_outputs: Vec<f32>,
}

fn default_section_offset() -> f32 {
    960.0
}

fn default_section_height() -> f32 {
    900.0
}

fn default_window_start() -> String {
    "start end".to_string()
}

fn default_window_end() -> String {
    "end start".to_string()
}

fn default_reveal_inputs() -> Vec<f32> {
    vec![0.0, 0.5]
}

fn default_opacity_outputs() -> Vec<f32> {
    vec![0.0, 1.0]
}

fn default_scale_outputs() -> Vec<f32> {
    vec![0.8, 1.0]
}

impl Default for SectionConfig {
    fn default() -> Self {
        Self {
            offset: default_section_offset(),
            height: default_section_height(),
            window_start: default_window_start(),
            window_end: default_window_end(),
            opacity_inputs: default_reveal_inputs(),
            opacity_outputs: default_opacity_outputs(),
            scale_inputs: default_reveal_inputs(),
            scale_outputs: default_scale_outputs(),
        }
    }
}

impl SectionConfig {
    pub fn region(&self) -> RegionBounds {
        RegionBounds::new(self.offset, self.height)
    }

    pub fn window(&self) -> Result<ScrollWindow> {
        ScrollWindow::parse(&self.window_start, &self.window_end)
    }

    pub fn motion(&self) -> Result<ScrollMotion> {
        ScrollMotion::from_ranges(
            &self.opacity_inputs,
            &self.opacity_outputs,
            &self.scale_inputs,
            &self.scale_outputs,
        )
    }
}

// ============================================================================
// [tabs]
// ============================================================================

/// How tab phases are timed
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum CurveKind {
    #[default]
    Timed,
    Spring,
}

/// Named spring configurations
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum SpringPreset {
    Stiff,
    #[default]
    Snappy,
    Gentle,
    Wobbly,
}

impl SpringPreset {
    pub fn config(self) -> SpringConfig {
        match self {
            SpringPreset::Stiff => SpringConfig::stiff(),
            SpringPreset::Snappy => SpringConfig::snappy(),
            SpringPreset::Gentle => SpringConfig::gentle(),
            SpringPreset::Wobbly => SpringConfig::wobbly(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct TabsConfig {
    #[serde(default)]
    pub default: LandingTab,
    #[serde(default)]
    pub curve: CurveKind,
    /// Phase duration for the timed curve
    #[serde(default = "default_transition_ms")]
    pub duration_ms: u32,
    #[serde(default = "default_easing")]
    pub easing: String,
    #[serde(default)]
    pub spring: SpringPreset,
}

fn default_transition_ms() -> u32 {
    vista_layout::DEFAULT_TRANSITION_MS
}

fn default_easing() -> String {
    "ease-out".to_string()
}

impl Default for TabsConfig {
    fn default() -> Self {
        Self {
            default: LandingTab::default(),
            curve: CurveKind::default(),
            duration_ms: default_transition_ms(),
            easing: default_easing(),
            spring: SpringPreset::default(),
        }
    }
}

impl TabsConfig {
    /// Build the curve driving each transition phase
    pub fn transition_curve(&self) -> Result<Box<dyn TransitionCurve>> {
        Ok(match self.curve {
            CurveKind::Timed => {
                let easing: Easing = self.easing.parse()?;
                Box::new(TimedCurve::new(self.duration_ms, easing))
            }
            CurveKind::Spring => Box::new(SpringCurve::new(self.spring.config())),
        })
    }
}

// ============================================================================
// [theme]
// ============================================================================

#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
pub struct ThemeConfig {
    /// Scheme used when no preference is stored
    #[serde(default)]
    pub default: ColorScheme,
    /// Preference file; preferences stay in memory when unset
    #[serde(default)]
    pub store: Option<PathBuf>,
}

// ============================================================================
// [headless]
// ============================================================================

#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct HeadlessConfig {
    #[serde(default = "default_width")]
    pub width: u32,
    #[serde(default = "default_height")]
    pub height: u32,
    /// Logical milliseconds per frame
    #[serde(default = "default_tick_ms")]
    pub tick_ms: u64,
}

fn default_width() -> u32 {
    1280
}

fn default_height() -> u32 {
    720
}

fn default_tick_ms() -> u64 {
    16
}

impl Default for HeadlessConfig {
    fn default() -> Self {
        Self {
            width: default_width(),
            height: default_height(),
            tick_ms: default_tick_ms(),
        }
    }
}

impl HeadlessConfig {
    pub fn viewport(&self) -> Viewport {
        self.run_config().viewport()
    }

    pub fn run_config(&self) -> HeadlessRunConfig {
        HeadlessRunConfig {
            width: self.width,
            height: self.height,
            tick_ms: self.tick_ms,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use vista_core::{Error, ScrollProgress};

    #[test]
    fn test_defaults_match_stock_page() {
        let config = PageConfig::default();
        let motion = config.section.motion().unwrap();
        assert_eq!(motion, ScrollMotion::fade_and_grow());
        assert_eq!(config.section.window().unwrap(), ScrollWindow::default());
        assert_eq!(config.tabs.default, LandingTab::Reports);
        assert_eq!(config.theme.default, ColorScheme::Dark);
        assert_eq!(config.headless.viewport(), Viewport::default());
    }

    #[test]
    fn test_partial_sections_fill_defaults() {
        let config: PageConfig = serde_json::from_str(
            r#"{"tabs": {"default": "quizzes", "curve": "spring"}, "section": {"offset": 100.0}}"#,
        )
        .unwrap();
        assert_eq!(config.tabs.default, LandingTab::Quizzes);
        assert_eq!(config.tabs.duration_ms, 300);
        assert_eq!(config.section.height, 900.0);
        assert_eq!(config.section.region(), RegionBounds::new(100.0, 900.0));

        let mut curve = config.tabs.transition_curve().unwrap();
        assert!((0.0..=1.5).contains(&curve.advance(16.0)));
    }

    #[test]
    fn test_invalid_values_are_typed_errors() {
        let mut tabs = TabsConfig::default();
        tabs.easing = "bouncy".into();
        assert!(matches!(
            tabs.transition_curve(),
            Err(Error::UnknownEasing(name)) if name == "bouncy"
        ));

        let section = SectionConfig {
            opacity_inputs: vec![0.5, 0.0],
            ..SectionConfig::default()
        };
        assert!(matches!(
            section.motion(),
            Err(Error::NonMonotonicKeyframes { .. })
        ));

        let section = SectionConfig {
            window_start: "top bottom".into(),
            ..SectionConfig::default()
        };
        assert!(section.window().is_err());
    }

    #[test]
    fn test_custom_mapping_is_used() {
        let section = SectionConfig {
            opacity_inputs: vec![0.0, 0.25],
            ..SectionConfig::default()
        };
        let style = section.motion().unwrap().style(ScrollProgress::new(0.25));
        assert_eq!(style.opacity, 1.0);
    }
}
