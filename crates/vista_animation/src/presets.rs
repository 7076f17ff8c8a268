//! Animation presets for common entry/exit animations
//!
//! Pre-built motion animations used by page entrances and tab panels.

use crate::easing::Easing;
use crate::keyframe::{MotionAnimation, MotionProperties};

/// Vertical travel of a tab panel while it enters or exits
pub const PANEL_TRAVEL: f32 = 20.0;

/// Pre-built animation presets for common patterns
pub struct AnimationPreset;

impl AnimationPreset {
    // ========================================================================
    // Fade animations
    // ========================================================================

    /// Fade in from transparent to opaque
    pub fn fade_in(duration_ms: u32) -> MotionAnimation {
        MotionAnimation::new(duration_ms)
            .keyframe(0.0, MotionProperties::opacity(0.0), Easing::Linear)
            .keyframe(1.0, MotionProperties::opacity(1.0), Easing::EaseOut)
    }

    /// Fade out from opaque to transparent
    pub fn fade_out(duration_ms: u32) -> MotionAnimation {
        MotionAnimation::new(duration_ms)
            .keyframe(0.0, MotionProperties::opacity(1.0), Easing::Linear)
            .keyframe(1.0, MotionProperties::opacity(0.0), Easing::EaseIn)
    }

    /// Fade in while rising `distance` pixels into place
    pub fn fade_up(duration_ms: u32, distance: f32) -> MotionAnimation {
        MotionAnimation::new(duration_ms)
            .keyframe(
                0.0,
                MotionProperties::opacity(0.0).with_translate_y(distance),
                Easing::Linear,
            )
            .keyframe(
                1.0,
                MotionProperties::opacity(1.0).with_translate_y(0.0),
                Easing::EaseOut,
            )
    }

    /// Fade in while dropping `distance` pixels into place
    pub fn fade_down(duration_ms: u32, distance: f32) -> MotionAnimation {
        Self::fade_up(duration_ms, -distance)
    }

    // ========================================================================
    // Slide animations
    // ========================================================================

    /// Fade in while sliding in from the left
    pub fn slide_in_left(duration_ms: u32, distance: f32) -> MotionAnimation {
        MotionAnimation::new(duration_ms)
            .keyframe(
                0.0,
                MotionProperties::opacity(0.0).with_translate_x(-distance),
                Easing::Linear,
            )
            .keyframe(
                1.0,
                MotionProperties::opacity(1.0).with_translate_x(0.0),
                Easing::EaseOut,
            )
    }

    // ========================================================================
    // Panel cross-fade
    //
    // Linear on purpose: the transition curve driving the phase already
    // applies easing, so these are sampled with `sample_at(curve_value)`.
    // ========================================================================

    /// Incoming panel: rises from below while fading in
    pub fn panel_enter(duration_ms: u32) -> MotionAnimation {
        MotionAnimation::new(duration_ms)
            .keyframe(
                0.0,
                MotionProperties::opacity(0.0).with_translate_y(PANEL_TRAVEL),
                Easing::Linear,
            )
            .keyframe(
                1.0,
                MotionProperties::opacity(1.0).with_translate_y(0.0),
                Easing::Linear,
            )
    }

    /// Outgoing panel: lifts away while fading out
    pub fn panel_exit(duration_ms: u32) -> MotionAnimation {
        MotionAnimation::new(duration_ms)
            .keyframe(
                0.0,
                MotionProperties::opacity(1.0).with_translate_y(0.0),
                Easing::Linear,
            )
            .keyframe(
                1.0,
                MotionProperties::opacity(0.0).with_translate_y(-PANEL_TRAVEL),
                Easing::Linear,
            )
    }
}
