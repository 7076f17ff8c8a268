//! Keyframe mappings and animations
//!
//! This module provides:
//! - [`KeyframeMapping`]: a pure piecewise-linear map from an input (usually
//!   scroll progress) to an output value
//! - [`KeyframeTrack`]: a single-value, time-driven track with looping
//! - [`MotionAnimation`]: a multi-property animation used for entrance and
//!   panel transitions

use smallvec::SmallVec;
use vista_core::{Error, Result, ScrollProgress};

use crate::easing::Easing;

// ============================================================================
// Keyframe Mapping
// ============================================================================

/// A configured `(input, output)` pair
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Breakpoint {
    pub input: f32,
    pub output: f32,
}

impl From<(f32, f32)> for Breakpoint {
    fn from((input, output): (f32, f32)) -> Self {
        Self { input, output }
    }
}

/// Piecewise-linear mapping over strictly increasing breakpoints.
///
/// Inputs before the first breakpoint map to the first output and inputs
/// after the last breakpoint map to the last output; there is no
/// extrapolation. An input that lands exactly on a breakpoint returns that
/// breakpoint's output exactly.
///
/// ```rust
/// use vista_animation::KeyframeMapping;
///
/// let scale = KeyframeMapping::ranges(&[0.0, 0.5], &[0.8, 1.0]).unwrap();
/// assert_eq!(scale.sample(0.0), 0.8);
/// assert!((scale.sample(0.25) - 0.9).abs() < 1e-6);
/// assert_eq!(scale.sample(0.9), 1.0);
/// ```
#[derive(Clone, Debug, PartialEq)]
pub struct KeyframeMapping {
    points: SmallVec<[Breakpoint; 4]>,
    /// Easing applied within each segment
    easing: Easing,
}

impl KeyframeMapping {
    /// Build a mapping from `(input, output)` pairs
    pub fn new<I>(points: I) -> Result<Self>
    where
        I: IntoIterator<Item = (f32, f32)>,
    {
        let points: SmallVec<[Breakpoint; 4]> = points.into_iter().map(Breakpoint::from).collect();

        if points.len() < 2 {
            return Err(Error::TooFewKeyframes(points.len()));
        }

        for (index, point) in points.iter().enumerate() {
            if !point.input.is_finite() || !point.output.is_finite() {
                return Err(Error::NonFiniteKeyframe { index });
            }
            if index > 0 {
                let previous = points[index - 1].input;
                if point.input <= previous {
                    return Err(Error::NonMonotonicKeyframes {
                        index,
                        previous,
                        current: point.input,
                    });
                }
            }
        }

        Ok(Self {
            points,
            easing: Easing::Linear,
        })
    }

    /// Build a mapping from parallel input and output ranges
    pub fn ranges(inputs: &[f32], outputs: &[f32]) -> Result<Self> {
        if inputs.len() != outputs.len() {
            return Err(Error::MismatchedRanges {
                inputs: inputs.len(),
                outputs: outputs.len(),
            });
        }
        Self::new(inputs.iter().copied().zip(outputs.iter().copied()))
    }

    /// Builder: ease within each segment instead of interpolating linearly
    pub fn with_easing(mut self, easing: Easing) -> Self {
        self.easing = easing;
        self
    }

    pub fn breakpoints(&self) -> &[Breakpoint] {
        &self.points
    }

    pub fn easing(&self) -> Easing {
        self.easing
    }

    /// Evaluate the mapping at `input`
    pub fn sample(&self, input: f32) -> f32 {
        let first = self.points[0];
        let last = self.points[self.points.len() - 1];

        if input.is_nan() || input <= first.input {
            return first.output;
        }
        if input >= last.input {
            return last.output;
        }

        // first < input < last, so `upper` is in 1..len
        let upper = self.points.partition_point(|bp| bp.input <= input);
        let lower = self.points[upper - 1];
        if lower.input == input {
            return lower.output;
        }
        let next = self.points[upper];

        let local = (input - lower.input) / (next.input - lower.input);
        lower.output + (next.output - lower.output) * self.easing.apply(local)
    }
}

/// Map a scroll progress value through a keyframe mapping
pub fn map(progress: ScrollProgress, mapping: &KeyframeMapping) -> f32 {
    mapping.sample(progress.value())
}

// ============================================================================
// Keyframe Track - single value over time
// ============================================================================

/// A time-driven single-value track.
///
/// The track's mapping is expressed over normalized time (`0.0` = start of an
/// iteration, `1.0` = end).
///
/// ```rust
/// use vista_animation::{KeyframeMapping, KeyframeTrack};
///
/// // background position 0% -> 100% -> 0% every 5 seconds, forever
/// let mapping = KeyframeMapping::ranges(&[0.0, 0.5, 1.0], &[0.0, 100.0, 0.0]).unwrap();
/// let mut track = KeyframeTrack::new(5000, mapping).looping();
/// track.start();
/// track.tick(1250.0);
/// assert!((track.value() - 50.0).abs() < 1e-3);
/// ```
#[derive(Clone, Debug)]
pub struct KeyframeTrack {
    mapping: KeyframeMapping,
    duration_ms: u32,
    /// `None` loops forever
    iterations: Option<u32>,
    elapsed_ms: f32,
    playing: bool,
}

impl KeyframeTrack {
    pub fn new(duration_ms: u32, mapping: KeyframeMapping) -> Self {
        Self {
            mapping,
            duration_ms,
            iterations: Some(1),
            elapsed_ms: 0.0,
            playing: false,
        }
    }

    /// Repeat the track forever
    pub fn looping(mut self) -> Self {
        self.iterations = None;
        self
    }

    /// Repeat the track a fixed number of times
    pub fn repeat(mut self, count: u32) -> Self {
        self.iterations = Some(count.max(1));
        self
    }

    pub fn start(&mut self) {
        self.elapsed_ms = 0.0;
        self.playing = true;
    }

    pub fn stop(&mut self) {
        self.playing = false;
    }

    pub fn is_playing(&self) -> bool {
        self.playing
    }

    /// Advance the track by delta time (in milliseconds)
    pub fn tick(&mut self, dt_ms: f32) {
        if !self.playing {
            return;
        }
        self.elapsed_ms += dt_ms.max(0.0);

        if let Some(count) = self.iterations {
            let total = self.duration_ms as f32 * count as f32;
            if self.elapsed_ms >= total {
                self.elapsed_ms = total;
                self.playing = false;
            }
        }
    }

    /// Progress within the current iteration (0.0 to 1.0)
    pub fn progress(&self) -> f32 {
        if self.duration_ms == 0 {
            return 1.0;
        }
        let duration = self.duration_ms as f32;
        if !self.playing && self.elapsed_ms >= duration {
            return 1.0;
        }
        (self.elapsed_ms % duration) / duration
    }

    pub fn value(&self) -> f32 {
        self.mapping.sample(self.progress())
    }

    pub fn duration_ms(&self) -> u32 {
        self.duration_ms
    }
}

// ============================================================================
// Multi-Property Motion Animation
// ============================================================================

/// Properties that can be animated by a [`MotionAnimation`]
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct MotionProperties {
    /// Opacity (0.0 to 1.0)
    pub opacity: Option<f32>,
    /// Translation X in pixels
    pub translate_x: Option<f32>,
    /// Translation Y in pixels
    pub translate_y: Option<f32>,
}

impl MotionProperties {
    pub fn opacity(value: f32) -> Self {
        Self {
            opacity: Some(value),
            ..Default::default()
        }
    }

    pub fn with_translate_x(mut self, x: f32) -> Self {
        self.translate_x = Some(x);
        self
    }

    pub fn with_translate_y(mut self, y: f32) -> Self {
        self.translate_y = Some(y);
        self
    }

    /// Interpolate between two property sets
    pub fn lerp(&self, other: &Self, t: f32) -> Self {
        Self {
            opacity: lerp_opt(self.opacity, other.opacity, t),
            translate_x: lerp_opt(self.translate_x, other.translate_x, t),
            translate_y: lerp_opt(self.translate_y, other.translate_y, t),
        }
    }

    /// Opacity, defaulting to fully opaque
    pub fn resolved_opacity(&self) -> f32 {
        self.opacity.unwrap_or(1.0)
    }

    pub fn resolved_translate(&self) -> (f32, f32) {
        (
            self.translate_x.unwrap_or(0.0),
            self.translate_y.unwrap_or(0.0),
        )
    }
}

fn lerp_opt(a: Option<f32>, b: Option<f32>, t: f32) -> Option<f32> {
    match (a, b) {
        (Some(a), Some(b)) => Some(a + (b - a) * t),
        (Some(a), None) => Some(a),
        (None, Some(b)) => Some(b),
        (None, None) => None,
    }
}

/// A keyframe with multiple animated properties
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct MotionKeyframe {
    /// Time position (0.0 to 1.0)
    pub time: f32,
    pub properties: MotionProperties,
    /// Easing used when transitioning TO this keyframe
    pub easing: Easing,
}

/// Multi-property keyframe animation with an optional start delay.
///
/// Before it starts and while its delay runs, the animation reports its
/// first keyframe (the element's initial state); after it finishes it holds
/// the last keyframe.
#[derive(Clone, Debug)]
pub struct MotionAnimation {
    duration_ms: u32,
    delay_ms: u32,
    keyframes: SmallVec<[MotionKeyframe; 3]>,
    /// Negative while the delay is running
    current_time: f32,
    playing: bool,
    finished: bool,
}

impl MotionAnimation {
    pub fn new(duration_ms: u32) -> Self {
        Self {
            duration_ms,
            delay_ms: 0,
            keyframes: SmallVec::new(),
            current_time: 0.0,
            playing: false,
            finished: false,
        }
    }

    /// Add a keyframe (builder pattern). Keyframes stay sorted by time.
    pub fn keyframe(mut self, time: f32, properties: MotionProperties, easing: Easing) -> Self {
        let time = if time.is_finite() {
            time.clamp(0.0, 1.0)
        } else {
            0.0
        };
        let index = self.keyframes.partition_point(|kf| kf.time <= time);
        self.keyframes.insert(
            index,
            MotionKeyframe {
                time,
                properties,
                easing,
            },
        );
        self
    }

    /// Set delay before the animation starts
    pub fn delay(mut self, delay_ms: u32) -> Self {
        self.delay_ms = delay_ms;
        self
    }

    pub fn start(&mut self) {
        self.current_time = -(self.delay_ms as f32);
        self.playing = true;
        self.finished = false;
    }

    pub fn stop(&mut self) {
        self.playing = false;
    }

    pub fn is_playing(&self) -> bool {
        self.playing
    }

    pub fn is_finished(&self) -> bool {
        self.finished
    }

    /// Advance the animation by delta time (in milliseconds)
    pub fn tick(&mut self, dt_ms: f32) {
        if !self.playing {
            return;
        }
        self.current_time += dt_ms.max(0.0);
        if self.current_time >= self.duration_ms as f32 {
            self.current_time = self.duration_ms as f32;
            self.playing = false;
            self.finished = true;
        }
    }

    /// Progress through the active portion (0.0 during the delay)
    pub fn progress(&self) -> f32 {
        if self.finished {
            return 1.0;
        }
        if self.current_time <= 0.0 || self.duration_ms == 0 {
            return 0.0;
        }
        (self.current_time / self.duration_ms as f32).clamp(0.0, 1.0)
    }

    pub fn current_properties(&self) -> MotionProperties {
        self.sample_at(self.progress())
    }

    /// Sample the animation at a specific progress (0.0 to 1.0)
    pub fn sample_at(&self, progress: f32) -> MotionProperties {
        let Some(first) = self.keyframes.first() else {
            return MotionProperties::default();
        };
        let progress = progress.clamp(0.0, 1.0);

        let mut prev_kf = first;
        let mut next_kf = first;
        for kf in &self.keyframes {
            if kf.time <= progress {
                prev_kf = kf;
            }
            if kf.time >= progress {
                next_kf = kf;
                break;
            }
        }

        if (prev_kf.time - next_kf.time).abs() < f32::EPSILON {
            return prev_kf.properties;
        }

        let local = (progress - prev_kf.time) / (next_kf.time - prev_kf.time);
        prev_kf
            .properties
            .lerp(&next_kf.properties, next_kf.easing.apply(local))
    }

    pub fn duration_ms(&self) -> u32 {
        self.duration_ms
    }

    pub fn delay_ms(&self) -> u32 {
        self.delay_ms
    }

    /// Total duration including delay
    pub fn total_duration_ms(&self) -> u32 {
        self.delay_ms + self.duration_ms
    }

    pub fn keyframes(&self) -> &[MotionKeyframe] {
        &self.keyframes
    }
}

impl Default for MotionAnimation {
    fn default() -> Self {
        Self::new(300)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn opacity_mapping() -> KeyframeMapping {
        KeyframeMapping::ranges(&[0.0, 0.5], &[0.0, 1.0]).unwrap()
    }

    #[test]
    fn test_rejects_invalid_breakpoints() {
        assert_eq!(
            KeyframeMapping::new([(0.0, 1.0)]),
            Err(Error::TooFewKeyframes(1))
        );
        assert!(matches!(
            KeyframeMapping::new([(0.0, 0.0), (0.5, 1.0), (0.5, 2.0)]),
            Err(Error::NonMonotonicKeyframes { index: 2, .. })
        ));
        assert!(matches!(
            KeyframeMapping::new([(0.0, 0.0), (f32::NAN, 1.0)]),
            Err(Error::NonFiniteKeyframe { index: 1 })
        ));
        assert!(matches!(
            KeyframeMapping::ranges(&[0.0, 1.0], &[0.0]),
            Err(Error::MismatchedRanges {
                inputs: 2,
                outputs: 1
            })
        ));
    }

    #[test]
    fn test_clamps_outside_input_range() {
        let mapping = KeyframeMapping::ranges(&[0.2, 0.6], &[10.0, 20.0]).unwrap();
        for p in [-5.0, -0.01, 0.0, 0.1, 0.2] {
            assert_eq!(mapping.sample(p), 10.0, "p = {p}");
        }
        for p in [0.6, 0.61, 1.0, 1.5, 100.0] {
            assert_eq!(mapping.sample(p), 20.0, "p = {p}");
        }
        assert_eq!(mapping.sample(f32::NAN), 10.0);
    }

    #[test]
    fn test_exact_at_breakpoints() {
        let mapping =
            KeyframeMapping::new([(0.0, 0.3), (0.1, 0.7), (0.35, -2.0), (0.9, 5.5), (1.0, 0.1)])
                .unwrap();
        for bp in mapping.breakpoints() {
            assert_eq!(mapping.sample(bp.input), bp.output);
        }

        let eased = mapping.clone().with_easing(Easing::EaseInOut);
        for bp in eased.breakpoints() {
            assert_eq!(eased.sample(bp.input), bp.output);
        }
    }

    #[test]
    fn test_linear_interpolation_within_segment() {
        let mapping = KeyframeMapping::new([(0.0, 0.0), (0.5, 1.0), (1.0, 0.0)]).unwrap();
        assert!((mapping.sample(0.25) - 0.5).abs() < 1e-6);
        assert!((mapping.sample(0.75) - 0.5).abs() < 1e-6);
    }

    #[test]
    fn test_map_fade_and_grow_section() {
        let opacity = opacity_mapping();
        let scale = KeyframeMapping::ranges(&[0.0, 0.5], &[0.8, 1.0]).unwrap();

        let p = ScrollProgress::new(0.1);
        assert!((map(p, &opacity) - 0.2).abs() < 1e-6);
        assert!((map(p, &scale) - 0.84).abs() < 1e-6);

        assert_eq!(map(ScrollProgress::new(0.5), &opacity), 1.0);
        assert_eq!(map(ScrollProgress::END, &opacity), 1.0);
        assert_eq!(map(ScrollProgress::START, &scale), 0.8);
    }

    #[test]
    fn test_track_finishes_after_iterations() {
        let mapping = KeyframeMapping::ranges(&[0.0, 1.0], &[0.0, 10.0]).unwrap();
        let mut track = KeyframeTrack::new(100, mapping).repeat(2);
        track.start();

        track.tick(150.0);
        assert!(track.is_playing());
        assert!((track.value() - 5.0).abs() < 1e-4);

        track.tick(100.0);
        assert!(!track.is_playing());
        assert_eq!(track.value(), 10.0);
    }

    #[test]
    fn test_looping_track_wraps() {
        let mapping = KeyframeMapping::ranges(&[0.0, 0.5, 1.0], &[0.0, 100.0, 0.0]).unwrap();
        let mut track = KeyframeTrack::new(5000, mapping).looping();
        track.start();

        track.tick(2500.0);
        assert!((track.value() - 100.0).abs() < 1e-3);

        track.tick(5000.0);
        assert!(track.is_playing());
        assert!((track.value() - 100.0).abs() < 1e-3);
    }

    #[test]
    fn test_motion_holds_initial_state_during_delay() {
        let mut anim = MotionAnimation::new(600)
            .keyframe(
                0.0,
                MotionProperties::opacity(0.0).with_translate_y(20.0),
                Easing::Linear,
            )
            .keyframe(
                1.0,
                MotionProperties::opacity(1.0).with_translate_y(0.0),
                Easing::Linear,
            )
            .delay(200);

        assert_eq!(anim.current_properties().resolved_opacity(), 0.0);

        anim.start();
        anim.tick(150.0);
        assert_eq!(anim.current_properties().resolved_opacity(), 0.0);

        anim.tick(350.0);
        let props = anim.current_properties();
        assert!((props.resolved_opacity() - 0.5).abs() < 1e-5);
        assert!((props.resolved_translate().1 - 10.0).abs() < 1e-4);

        anim.tick(1000.0);
        assert!(anim.is_finished());
        assert_eq!(anim.current_properties().resolved_opacity(), 1.0);
        assert_eq!(anim.total_duration_ms(), 800);
    }

    #[test]
    fn test_keyframes_sorted_on_insert() {
        let anim = MotionAnimation::new(100)
            .keyframe(1.0, MotionProperties::opacity(1.0), Easing::Linear)
            .keyframe(0.0, MotionProperties::opacity(0.0), Easing::Linear);
        let times: Vec<f32> = anim.keyframes().iter().map(|kf| kf.time).collect();
        assert_eq!(times, vec![0.0, 1.0]);
    }
}
