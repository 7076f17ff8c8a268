//! Deterministic frame clock for headless page runs.
//!
//! Headless runs never read the wall clock. Time only moves when a scenario
//! ticks frames or waits, in fixed `tick_ms` steps.

use anyhow::{bail, Result};
use vista_core::Viewport;

/// Longest frame a run may be configured with
pub const MAX_TICK_MS: u64 = 1_000;
/// Logical time a single run may cover (one hour)
pub const MAX_RUN_MS: u64 = 60 * 60 * 1_000;

/// Configuration for deterministic headless frame execution.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HeadlessRunConfig {
    /// Logical viewport width used by the headless run.
    pub width: u32,
    /// Logical viewport height used by the headless run.
    pub height: u32,
    /// Logical milliseconds between frames.
    pub tick_ms: u64,
}

impl Default for HeadlessRunConfig {
    fn default() -> Self {
        Self {
            width: 1280,
            height: 720,
            tick_ms: 16,
        }
    }
}

impl HeadlessRunConfig {
    pub fn validate(&self) -> Result<()> {
        if self.width == 0 || self.height == 0 {
            bail!("headless dimensions must be non-zero");
        }
        if self.tick_ms == 0 {
            bail!("headless tick_ms must be > 0");
        }
        if self.tick_ms > MAX_TICK_MS {
            bail!("headless tick_ms must be at most {MAX_TICK_MS}");
        }
        Ok(())
    }

    pub fn viewport(&self) -> Viewport {
        Viewport::new(self.width as f32, self.height as f32)
    }
}

/// Frame passed to headless frame callbacks.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FrameContext {
    /// Zero-based index of this frame over the whole run
    pub frame_index: u64,
    /// Time advanced by this frame
    pub dt_ms: u64,
    /// Total time after this frame
    pub elapsed_ms: u64,
}

/// Frame clock shared by every step of a run.
#[derive(Debug, Clone)]
pub struct HeadlessClock {
    tick_ms: u64,
    elapsed_frames: u64,
    elapsed_ms: u64,
}

impl HeadlessClock {
    pub fn new(cfg: &HeadlessRunConfig) -> Result<Self> {
        cfg.validate()?;
        Ok(Self {
            tick_ms: cfg.tick_ms,
            elapsed_frames: 0,
            elapsed_ms: 0,
        })
    }

    /// Run `frames` full frames.
    ///
    /// Fails without running any frame if the run would pass [`MAX_RUN_MS`].
    pub fn tick<F>(&mut self, frames: u32, mut on_frame: F) -> Result<()>
    where
        F: FnMut(&FrameContext),
    {
        self.reserve(u64::from(frames).saturating_mul(self.tick_ms))?;
        for _ in 0..frames {
            self.advance(self.tick_ms, &mut on_frame);
        }
        Ok(())
    }

    /// Let `ms` pass in whole frames; the last frame is shortened so exactly
    /// `ms` elapses.
    ///
    /// Fails without running any frame if the run would pass [`MAX_RUN_MS`].
    pub fn wait<F>(&mut self, ms: u64, mut on_frame: F) -> Result<()>
    where
        F: FnMut(&FrameContext),
    {
        self.reserve(ms)?;
        let mut remaining = ms;
        while remaining > 0 {
            let step = remaining.min(self.tick_ms);
            remaining -= step;
            self.advance(step, &mut on_frame);
        }
        Ok(())
    }

    fn reserve(&self, ms: u64) -> Result<()> {
        match self.elapsed_ms.checked_add(ms) {
            Some(total) if total <= MAX_RUN_MS => Ok(()),
            _ => bail!(
                "advancing {ms} ms would exceed the {MAX_RUN_MS} ms limit of a run \
                 (already at {} ms)",
                self.elapsed_ms
            ),
        }
    }

    fn advance<F>(&mut self, dt_ms: u64, on_frame: &mut F)
    where
        F: FnMut(&FrameContext),
    {
        let frame = FrameContext {
            frame_index: self.elapsed_frames,
            dt_ms,
            elapsed_ms: self.elapsed_ms.saturating_add(dt_ms),
        };
        self.elapsed_frames = self.elapsed_frames.saturating_add(1);
        self.elapsed_ms = frame.elapsed_ms;
        on_frame(&frame);
    }

    pub fn elapsed_frames(&self) -> u64 {
        self.elapsed_frames
    }

    pub fn elapsed_ms(&self) -> u64 {
        self.elapsed_ms
    }
}
