//! Spring physics
//!
//! Damped harmonic oscillator integrated with fixed-size RK4 substeps, so the
//! result is stable regardless of the host's frame interval.

/// Spring parameters
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SpringConfig {
    pub stiffness: f32,
    pub damping: f32,
    pub mass: f32,
}

impl SpringConfig {
    pub fn new(stiffness: f32, damping: f32, mass: f32) -> Self {
        Self {
            stiffness: stiffness.max(f32::EPSILON),
            damping: damping.max(0.0),
            mass: mass.max(f32::EPSILON),
        }
    }

    /// Fast, barely overshooting
    pub fn stiff() -> Self {
        Self::new(400.0, 30.0, 1.0)
    }

    /// Header slide-in spring (stiffness 300, damping 30)
    pub fn snappy() -> Self {
        Self::new(300.0, 30.0, 1.0)
    }

    /// Soft, slower settle
    pub fn gentle() -> Self {
        Self::new(120.0, 14.0, 1.0)
    }

    /// Visible overshoot
    pub fn wobbly() -> Self {
        Self::new(180.0, 12.0, 1.0)
    }

    /// Damping ratio (1.0 = critically damped)
    pub fn damping_ratio(&self) -> f32 {
        self.damping / (2.0 * (self.stiffness * self.mass).sqrt())
    }
}

impl Default for SpringConfig {
    fn default() -> Self {
        Self::snappy()
    }
}

/// Largest integration substep in seconds
const MAX_SUBSTEP: f32 = 1.0 / 240.0;
/// Longest interval a single step integrates; longer steps are clamped
const MAX_STEP: f32 = 1.0;
/// Distance and speed under which the spring snaps to its target
const REST_EPSILON: f32 = 0.001;

/// A spring animating a single value toward a target
#[derive(Clone, Debug)]
pub struct Spring {
    config: SpringConfig,
    value: f32,
    velocity: f32,
    target: f32,
}

impl Spring {
    /// Create a spring at rest at `initial`
    pub fn new(config: SpringConfig, initial: f32) -> Self {
        Self {
            config,
            value: initial,
            velocity: 0.0,
            target: initial,
        }
    }

    /// Retarget the spring, keeping its current velocity
    pub fn set_target(&mut self, target: f32) {
        self.target = target;
    }

    pub fn value(&self) -> f32 {
        self.value
    }

    pub fn velocity(&self) -> f32 {
        self.velocity
    }

    pub fn target(&self) -> f32 {
        self.target
    }

    pub fn config(&self) -> SpringConfig {
        self.config
    }

    pub fn is_settled(&self) -> bool {
        (self.value - self.target).abs() < REST_EPSILON && self.velocity.abs() < REST_EPSILON
    }

    /// Advance the spring by `dt` seconds, at most one second per call
    pub fn step(&mut self, dt: f32) {
        if dt <= 0.0 || !dt.is_finite() {
            return;
        }
        if self.is_settled() {
            self.value = self.target;
            self.velocity = 0.0;
            return;
        }

        let dt = dt.min(MAX_STEP);
        let steps = (dt / MAX_SUBSTEP).ceil().max(1.0) as u32;
        let h = dt / steps as f32;
        for _ in 0..steps {
            self.rk4(h);
        }

        if self.is_settled() {
            self.value = self.target;
            self.velocity = 0.0;
        }
    }

    fn acceleration(&self, x: f32, v: f32) -> f32 {
        let SpringConfig {
            stiffness,
            damping,
            mass,
        } = self.config;
        (-stiffness * (x - self.target) - damping * v) / mass
    }

    fn rk4(&mut self, h: f32) {
        let (x, v) = (self.value, self.velocity);

        let k1x = v;
        let k1v = self.acceleration(x, v);

        let k2x = v + 0.5 * h * k1v;
        let k2v = self.acceleration(x + 0.5 * h * k1x, k2x);

        let k3x = v + 0.5 * h * k2v;
        let k3v = self.acceleration(x + 0.5 * h * k2x, k3x);

        let k4x = v + h * k3v;
        let k4v = self.acceleration(x + h * k3x, k4x);

        self.value = x + h / 6.0 * (k1x + 2.0 * k2x + 2.0 * k3x + k4x);
        self.velocity = v + h / 6.0 * (k1v + 2.0 * k2v + 2.0 * k3v + k4v);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_spring_at_rest_is_settled() {
        let spring = Spring::new(SpringConfig::stiff(), 5.0);
        assert!(spring.is_settled());
        assert_eq!(spring.target(), 5.0);
    }

    #[test]
    fn test_spring_reaches_target() {
        let mut spring = Spring::new(SpringConfig::stiff(), 0.0);
        spring.set_target(100.0);
        assert!(!spring.is_settled());

        for _ in 0..60 {
            spring.step(1.0 / 60.0);
        }
        assert!((spring.value() - 100.0).abs() < 5.0);

        for _ in 0..240 {
            spring.step(1.0 / 60.0);
        }
        assert!(spring.is_settled());
        assert_eq!(spring.value(), 100.0);
    }

    #[test]
    fn test_step_size_does_not_change_outcome() {
        let mut coarse = Spring::new(SpringConfig::gentle(), 0.0);
        let mut fine = Spring::new(SpringConfig::gentle(), 0.0);
        coarse.set_target(1.0);
        fine.set_target(1.0);

        coarse.step(0.1);
        for _ in 0..10 {
            fine.step(0.01);
        }
        assert!((coarse.value() - fine.value()).abs() < 1e-3);
    }

    #[test]
    fn test_huge_step_is_clamped() {
        let mut spring = Spring::new(SpringConfig::snappy(), 0.0);
        spring.set_target(100.0);
        spring.step(1.0e9);
        assert!(spring.is_settled());
        assert_eq!(spring.value(), 100.0);

        let mut clamped = Spring::new(SpringConfig::wobbly(), 0.0);
        let mut one_second = Spring::new(SpringConfig::wobbly(), 0.0);
        clamped.set_target(1.0);
        one_second.set_target(1.0);
        clamped.step(f32::MAX);
        one_second.step(MAX_STEP);
        assert_eq!(clamped.value(), one_second.value());
        assert!(clamped.value().is_finite());
    }

    #[test]
    fn test_wobbly_overshoots() {
        let mut spring = Spring::new(SpringConfig::wobbly(), 0.0);
        spring.set_target(1.0);
        let mut peak: f32 = 0.0;
        for _ in 0..120 {
            spring.step(1.0 / 120.0);
            peak = peak.max(spring.value());
        }
        assert!(peak > 1.0);
        assert!(SpringConfig::wobbly().damping_ratio() < 1.0);
    }
}
