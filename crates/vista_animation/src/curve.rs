//! Transition curves
//!
//! A [`TransitionCurve`] turns elapsed time into a phase value running from
//! `0.0` to (roughly) `1.0`. State machines that sequence animations hold a
//! boxed curve and never care whether it is duration based or physical.

use std::fmt;

use crate::easing::Easing;
use crate::spring::{Spring, SpringConfig};

/// Interpolation strategy for one animation phase
pub trait TransitionCurve: fmt::Debug {
    /// Rewind to the start of a new phase
    fn restart(&mut self);

    /// Advance by `dt_ms` milliseconds and return the new value
    fn advance(&mut self, dt_ms: f32) -> f32;

    /// Current value (0.0 at the start of the phase)
    fn value(&self) -> f32;

    fn is_finished(&self) -> bool;
}

/// Fixed-duration curve with an easing function
#[derive(Clone, Debug)]
pub struct TimedCurve {
    duration_ms: u32,
    easing: Easing,
    elapsed_ms: f32,
}

impl TimedCurve {
    pub fn new(duration_ms: u32, easing: Easing) -> Self {
        Self {
            duration_ms,
            easing,
            elapsed_ms: 0.0,
        }
    }

    pub fn duration_ms(&self) -> u32 {
        self.duration_ms
    }

    fn linear_progress(&self) -> f32 {
        if self.duration_ms == 0 {
            return 1.0;
        }
        (self.elapsed_ms / self.duration_ms as f32).clamp(0.0, 1.0)
    }
}

impl Default for TimedCurve {
    fn default() -> Self {
        Self::new(300, Easing::EaseOut)
    }
}

impl TransitionCurve for TimedCurve {
    fn restart(&mut self) {
        self.elapsed_ms = 0.0;
    }

    fn advance(&mut self, dt_ms: f32) -> f32 {
        self.elapsed_ms = (self.elapsed_ms + dt_ms.max(0.0)).min(self.duration_ms as f32);
        self.value()
    }

    fn value(&self) -> f32 {
        self.easing.apply(self.linear_progress())
    }

    fn is_finished(&self) -> bool {
        self.linear_progress() >= 1.0
    }
}

/// Spring-driven curve from 0.0 to 1.0; may overshoot before settling
#[derive(Clone, Debug)]
pub struct SpringCurve {
    config: SpringConfig,
    spring: Spring,
}

impl SpringCurve {
    pub fn new(config: SpringConfig) -> Self {
        let mut spring = Spring::new(config, 0.0);
        spring.set_target(1.0);
        Self { config, spring }
    }

    pub fn config(&self) -> SpringConfig {
        self.config
    }
}

impl Default for SpringCurve {
    fn default() -> Self {
        Self::new(SpringConfig::snappy())
    }
}

impl TransitionCurve for SpringCurve {
    fn restart(&mut self) {
        self.spring = Spring::new(self.config, 0.0);
        self.spring.set_target(1.0);
    }

    fn advance(&mut self, dt_ms: f32) -> f32 {
        self.spring.step(dt_ms.max(0.0) / 1000.0);
        self.spring.value()
    }

    fn value(&self) -> f32 {
        self.spring.value()
    }

    fn is_finished(&self) -> bool {
        self.spring.is_settled()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_timed_curve_runs_for_duration() {
        let mut curve = TimedCurve::new(300, Easing::Linear);
        assert_eq!(curve.value(), 0.0);

        assert!((curve.advance(150.0) - 0.5).abs() < 1e-6);
        assert!(!curve.is_finished());

        assert_eq!(curve.advance(200.0), 1.0);
        assert!(curve.is_finished());

        curve.restart();
        assert_eq!(curve.value(), 0.0);
        assert!(!curve.is_finished());
    }

    #[test]
    fn test_zero_duration_finishes_immediately() {
        let curve = TimedCurve::new(0, Easing::EaseOut);
        assert!(curve.is_finished());
        assert_eq!(curve.value(), 1.0);
    }

    #[test]
    fn test_spring_curve_settles_at_one() {
        let mut curve = SpringCurve::new(SpringConfig::stiff());
        assert!(!curve.is_finished());
        for _ in 0..300 {
            curve.advance(16.0);
        }
        assert!(curve.is_finished());
        assert_eq!(curve.value(), 1.0);

        curve.restart();
        assert_eq!(curve.value(), 0.0);
    }
}
