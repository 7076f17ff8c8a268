//! Vista Animation System
//!
//! Keyframe mappings, easing curves, spring physics and the transition
//! curves that drive tab cross-fades.
//!
//! # Features
//!
//! - **Keyframe Mappings**: piecewise-linear `(input, output)` maps used to
//!   turn scroll progress into opacity and scale
//! - **Keyframe Tracks**: time-based looping tracks for ambient effects
//! - **Motion Animations**: multi-property entrance animations with delays
//! - **Spring Physics**: RK4-integrated springs with stiffness, damping, mass
//! - **Transition Curves**: pluggable timed or spring curves for phase
//!   animations
//! - **Scheduler**: host-clock driven registry of running animations

pub mod curve;
pub mod easing;
pub mod keyframe;
pub mod presets;
pub mod scheduler;
pub mod spring;

pub use curve::{SpringCurve, TimedCurve, TransitionCurve};
pub use easing::Easing;
pub use keyframe::{
    map, Breakpoint, KeyframeMapping, KeyframeTrack, MotionAnimation, MotionKeyframe,
    MotionProperties,
};
pub use presets::AnimationPreset;
pub use scheduler::{AnimationScheduler, MotionId, SpringId};
pub use spring::{Spring, SpringConfig};
