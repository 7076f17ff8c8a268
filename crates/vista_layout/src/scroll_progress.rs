//! Scroll progress tracking
//!
//! Tracks how far a region has travelled through an observation window of
//! the viewport. The window is bounded by two [`ScrollEdge`] conditions; the
//! default window runs from "region start meets viewport end" (the region is
//! about to scroll into view) to "region end meets viewport start" (it has
//! just scrolled out).
//!
//! ```text
//!   start condition ("start end")         end condition ("end start")
//!
//!   +-----------+  viewport                  +-----------+ <- region end
//!   |           |                            |  region   |
//!   |           |                            +-----------+ <- viewport start
//!   +-----------+ <- viewport end            |           |
//!   |  region   | <- region start            |           |
//!   +-----------+                            +-----------+
//! ```
//!
//! Progress is recomputed only in response to scroll, resize or region
//! changes; the tracker never polls.

use std::fmt;
use std::str::FromStr;

use vista_core::{Error, ListenerId, Listeners, RegionBounds, Result, ScrollProgress};

/// Window bounds closer than this are treated as a zero-length window
const DEGENERATE_WINDOW: f32 = 1e-4;

// ============================================================================
// Scroll Edge
// ============================================================================

/// An edge condition pairing a point of the tracked region with a point of
/// the viewport.
///
/// Both values are fractions along the scroll axis: `0.0` is the start edge,
/// `0.5` the center, `1.0` the end edge. The condition is met when the two
/// points coincide.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ScrollEdge {
    /// Point of the tracked region
    pub target: f32,
    /// Point of the viewport
    pub container: f32,
}

impl ScrollEdge {
    /// Region start meets viewport end
    pub const START_END: ScrollEdge = ScrollEdge {
        target: 0.0,
        container: 1.0,
    };

    /// Region end meets viewport start
    pub const END_START: ScrollEdge = ScrollEdge {
        target: 1.0,
        container: 0.0,
    };

    pub fn new(target: f32, container: f32) -> Self {
        Self {
            target: target.clamp(0.0, 1.0),
            container: container.clamp(0.0, 1.0),
        }
    }

    /// Scroll offset at which this condition is met
    pub fn scroll_offset(&self, region: &RegionBounds, viewport_extent: f32) -> f32 {
        region.point_at(self.target) - self.container * viewport_extent
    }
}

fn parse_fraction(token: &str, input: &str) -> Result<f32> {
    match token {
        "start" => Ok(0.0),
        "center" => Ok(0.5),
        "end" => Ok(1.0),
        other => match other.parse::<f32>() {
            Ok(value) if (0.0..=1.0).contains(&value) => Ok(value),
            _ => Err(Error::InvalidScrollEdge(input.to_string())),
        },
    }
}

impl FromStr for ScrollEdge {
    type Err = Error;

    /// Parse `"<target> <container>"`, e.g. `"start end"` or `"0.5 center"`
    fn from_str(s: &str) -> Result<Self> {
        let mut tokens = s.split_whitespace();
        let (Some(target), Some(container), None) = (tokens.next(), tokens.next(), tokens.next())
        else {
            return Err(Error::InvalidScrollEdge(s.to_string()));
        };

        Ok(Self {
            target: parse_fraction(target, s)?,
            container: parse_fraction(container, s)?,
        })
    }
}

impl fmt::Display for ScrollEdge {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fn word(value: f32) -> String {
            match value {
                v if v == 0.0 => "start".to_string(),
                v if v == 0.5 => "center".to_string(),
                v if v == 1.0 => "end".to_string(),
                v => v.to_string(),
            }
        }
        write!(f, "{} {}", word(self.target), word(self.container))
    }
}

// ============================================================================
// Scroll Window
// ============================================================================

/// Observation window between two edge conditions
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ScrollWindow {
    /// Condition at which progress is 0
    pub start: ScrollEdge,
    /// Condition at which progress is 1
    pub end: ScrollEdge,
}

impl ScrollWindow {
    pub fn new(start: ScrollEdge, end: ScrollEdge) -> Self {
        Self { start, end }
    }

    /// Build a window from two edge strings
    pub fn parse(start: &str, end: &str) -> Result<Self> {
        Ok(Self::new(start.parse()?, end.parse()?))
    }

    /// Progress of `region` through this window at the given scroll offset.
    ///
    /// No region means nothing to track, which reads as progress 0.
    pub fn progress(
        &self,
        region: Option<&RegionBounds>,
        scroll_offset: f32,
        viewport_extent: f32,
    ) -> ScrollProgress {
        let Some(region) = region else {
            return ScrollProgress::START;
        };

        let from = self.start.scroll_offset(region, viewport_extent);
        let to = self.end.scroll_offset(region, viewport_extent);
        let length = to - from;

        if length.abs() < DEGENERATE_WINDOW {
            return if scroll_offset >= to {
                ScrollProgress::END
            } else {
                ScrollProgress::START
            };
        }

        ScrollProgress::new((scroll_offset - from) / length)
    }
}

impl Default for ScrollWindow {
    fn default() -> Self {
        Self::new(ScrollEdge::START_END, ScrollEdge::END_START)
    }
}

// ============================================================================
// Tracker
// ============================================================================

/// Emits the progress of one region through a [`ScrollWindow`]
pub struct ScrollProgressTracker {
    window: ScrollWindow,
    region: Option<RegionBounds>,
    scroll_offset: f32,
    viewport_extent: f32,
    progress: ScrollProgress,
    listeners: Listeners<ScrollProgress>,
}

impl ScrollProgressTracker {
    /// Create a tracker with no region yet (constant progress 0)
    pub fn new(window: ScrollWindow, viewport_extent: f32) -> Self {
        Self {
            window,
            region: None,
            scroll_offset: 0.0,
            viewport_extent: viewport_extent.max(0.0),
            progress: ScrollProgress::START,
            listeners: Listeners::new(),
        }
    }

    /// Builder: track `region` from the start
    pub fn with_region(mut self, region: RegionBounds) -> Self {
        self.set_region(Some(region));
        self
    }

    /// Replace the tracked region (`None` detaches the tracker)
    pub fn set_region(&mut self, region: Option<RegionBounds>) {
        self.region = region;
        self.recompute();
    }

    /// Scroll event: the viewport's start edge is now at `offset`
    pub fn on_scroll(&mut self, offset: f32) {
        if !offset.is_finite() {
            return;
        }
        self.scroll_offset = offset;
        self.recompute();
    }

    /// Resize event: the viewport's extent along the scroll axis changed
    pub fn on_resize(&mut self, viewport_extent: f32) {
        if !viewport_extent.is_finite() {
            return;
        }
        self.viewport_extent = viewport_extent.max(0.0);
        self.recompute();
    }

    pub fn progress(&self) -> ScrollProgress {
        self.progress
    }

    pub fn window(&self) -> ScrollWindow {
        self.window
    }

    pub fn region(&self) -> Option<RegionBounds> {
        self.region
    }

    pub fn scroll_offset(&self) -> f32 {
        self.scroll_offset
    }

    pub fn viewport_extent(&self) -> f32 {
        self.viewport_extent
    }

    /// Subscribe to progress changes. The callback fires only when the value
    /// actually changes.
    pub fn subscribe<F>(&mut self, listener: F) -> ListenerId
    where
        F: FnMut(&ScrollProgress) + 'static,
    {
        self.listeners.subscribe(listener)
    }

    pub fn unsubscribe(&mut self, id: ListenerId) -> bool {
        self.listeners.unsubscribe(id)
    }

    fn recompute(&mut self) {
        let next = self.window.progress(
            self.region.as_ref(),
            self.scroll_offset,
            self.viewport_extent,
        );
        if next == self.progress {
            return;
        }

        tracing::trace!(
            scroll_offset = self.scroll_offset,
            progress = next.value(),
            "scroll progress changed"
        );
        self.progress = next;
        self.listeners.notify(&next);
    }
}

impl fmt::Debug for ScrollProgressTracker {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ScrollProgressTracker")
            .field("window", &self.window)
            .field("region", &self.region)
            .field("scroll_offset", &self.scroll_offset)
            .field("viewport_extent", &self.viewport_extent)
            .field("progress", &self.progress)
            .field("listeners", &self.listeners)
            .finish()
    }
}
