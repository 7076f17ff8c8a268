//! Animation scheduler
//!
//! Holds running springs and motion animations and advances them when the
//! host's frame clock ticks. The scheduler never reads the wall clock itself:
//! every `tick` carries the elapsed milliseconds, which keeps headless runs
//! deterministic.

use slotmap::{new_key_type, SlotMap};

use crate::keyframe::MotionAnimation;
use crate::spring::Spring;

new_key_type! {
    pub struct SpringId;
    pub struct MotionId;
}

/// Registry of active animations ticked by the host frame clock
pub struct AnimationScheduler {
    springs: SlotMap<SpringId, Spring>,
    motions: SlotMap<MotionId, MotionAnimation>,
    elapsed_ms: f64,
}

impl AnimationScheduler {
    pub fn new() -> Self {
        Self {
            springs: SlotMap::with_key(),
            motions: SlotMap::with_key(),
            elapsed_ms: 0.0,
        }
    }

    pub fn add_spring(&mut self, spring: Spring) -> SpringId {
        self.springs.insert(spring)
    }

    pub fn get_spring(&self, id: SpringId) -> Option<&Spring> {
        self.springs.get(id)
    }

    /// Run a closure against a spring, if it still exists
    pub fn with_spring_mut<R>(
        &mut self,
        id: SpringId,
        f: impl FnOnce(&mut Spring) -> R,
    ) -> Option<R> {
        self.springs.get_mut(id).map(f)
    }

    /// Register a motion animation and start it
    pub fn add_motion(&mut self, mut motion: MotionAnimation) -> MotionId {
        motion.start();
        self.motions.insert(motion)
    }

    pub fn get_motion(&self, id: MotionId) -> Option<&MotionAnimation> {
        self.motions.get(id)
    }

    pub fn remove_motion(&mut self, id: MotionId) -> Option<MotionAnimation> {
        self.motions.remove(id)
    }

    /// Advance every animation by `dt_ms` milliseconds
    pub fn tick(&mut self, dt_ms: f32) {
        if dt_ms <= 0.0 {
            return;
        }
        self.elapsed_ms += dt_ms as f64;

        let dt = dt_ms / 1000.0;
        for (_, spring) in self.springs.iter_mut() {
            spring.step(dt);
        }
        for (_, motion) in self.motions.iter_mut() {
            motion.tick(dt_ms);
        }

        tracing::trace!(
            elapsed_ms = self.elapsed_ms,
            springs = self.springs.len(),
            motions = self.motions.len(),
            "animation scheduler tick"
        );
    }

    /// Check if any animation still needs frames
    pub fn has_active_animations(&self) -> bool {
        self.springs.iter().any(|(_, s)| !s.is_settled())
            || self.motions.iter().any(|(_, m)| m.is_playing())
    }

    /// Total time ticked since creation
    pub fn elapsed_ms(&self) -> f64 {
        self.elapsed_ms
    }

    pub fn motion_count(&self) -> usize {
        self.motions.len()
    }
}

impl Default for AnimationScheduler {
    fn default() -> Self {
        Self::new()
    }
}
