//! Events delivered to a landing page by its host

use serde::{Deserialize, Serialize};

use crate::tab::LandingTab;

/// Input from the host environment
#[derive(Debug, Clone, Copy, PartialEq, Deserialize, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum PageEvent {
    /// The page became visible; performs the one-time preference read
    Mount,
    /// Vertical scroll offset of the page in logical pixels
    Scroll { offset: f32 },
    Resize { width: f32, height: f32 },
    SelectTab { tab: LandingTab },
    ToggleTheme,
}
