//! Scroll pass sampling
//!
//! Evaluates the configured section over a full scroll pass, from before its
//! window opens to after it closes. Used to inspect a mapping without a
//! rendering surface.

use serde::Serialize;
use vista_core::Result;
use vista_layout::ScrollProgressTracker;

use crate::config::PageConfig;

/// Largest number of intervals a single pass evaluates
pub const MAX_SAMPLE_STEPS: u32 = 10_000;

/// One row of a scroll pass
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ScrollSample {
    pub offset: f32,
    pub progress: f32,
    pub opacity: f32,
    pub scale: f32,
}

/// Sample `steps + 1` evenly spaced scroll offsets covering the whole window
/// plus one viewport of margin on each side.
///
/// `steps` is clamped to `1..=MAX_SAMPLE_STEPS`.
pub fn scroll_pass(config: &PageConfig, steps: u32) -> Result<Vec<ScrollSample>> {
    let window = config.section.window()?;
    let motion = config.section.motion()?;
    let region = config.section.region();
    let viewport = config.headless.viewport().height;

    let start = window.start.scroll_offset(&region, viewport);
    let end = window.end.scroll_offset(&region, viewport);
    let first = start.min(end) - viewport;
    let last = start.max(end) + viewport;

    let mut tracker = ScrollProgressTracker::new(window, viewport).with_region(region);
    let steps = steps.clamp(1, MAX_SAMPLE_STEPS);

    let samples = (0..=steps)
        .map(|i| {
            let offset = first + (last - first) * (i as f32 / steps as f32);
            tracker.on_scroll(offset);
            let progress = tracker.progress();
            let style = motion.style(progress);
            ScrollSample {
                offset,
                progress: progress.value(),
                opacity: style.opacity,
                scale: style.scale,
            }
        })
        .collect();

    Ok(samples)
}
