//! Landing page tabs and their panel copy

use std::fmt;
use std::str::FromStr;

use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};
use vista_core::Error;

/// Tabs of the "How It Works" section
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LandingTab {
    #[default]
    Reports,
    Presentations,
    Quizzes,
}

impl LandingTab {
    pub const ALL: [LandingTab; 3] = [
        LandingTab::Reports,
        LandingTab::Presentations,
        LandingTab::Quizzes,
    ];

    /// Trigger label
    pub fn label(self) -> &'static str {
        match self {
            LandingTab::Reports => "Reports",
            LandingTab::Presentations => "Presentations",
            LandingTab::Quizzes => "Quizzes",
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            LandingTab::Reports => "reports",
            LandingTab::Presentations => "presentations",
            LandingTab::Quizzes => "quizzes",
        }
    }
}

impl fmt::Display for LandingTab {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for LandingTab {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let needle = s.trim();
        LandingTab::ALL
            .into_iter()
            .find(|tab| tab.as_str().eq_ignore_ascii_case(needle))
            .ok_or_else(|| Error::UnknownTab(s.to_string()))
    }
}

/// Heading and body shown in a tab panel
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct PanelCopy {
    pub title: &'static str,
    pub body: &'static str,
}

/// Panel copy for every landing tab
pub fn panel_copy() -> FxHashMap<LandingTab, PanelCopy> {
    let mut copy = FxHashMap::default();
    copy.insert(
        LandingTab::Reports,
        PanelCopy {
            title: "Generate Comprehensive Reports",
            body: "Upload your documents or provide links, and our AI will create detailed reports in minutes.",
        },
    );
    copy.insert(
        LandingTab::Presentations,
        PanelCopy {
            title: "Create Stunning Presentations",
            body: "Turn media files into captivating slideshows with just a few clicks.",
        },
    );
    copy.insert(
        LandingTab::Quizzes,
        PanelCopy {
            title: "Auto-Generate Quizzes",
            body: "Our AI analyzes your media and generates custom quizzes to test knowledge.",
        },
    );
    copy
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_tab_names() {
        assert_eq!("quizzes".parse::<LandingTab>(), Ok(LandingTab::Quizzes));
        assert_eq!("Reports".parse::<LandingTab>(), Ok(LandingTab::Reports));
        assert_eq!(
            "pricing".parse::<LandingTab>(),
            Err(Error::UnknownTab("pricing".into()))
        );
    }

    #[test]
    fn test_every_tab_has_copy() {
        let copy = panel_copy();
        for tab in LandingTab::ALL {
            assert!(copy.contains_key(&tab), "{tab} has no copy");
        }
    }
}
