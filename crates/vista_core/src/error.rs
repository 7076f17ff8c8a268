//! Configuration errors
//!
//! Runtime operations in Vista never fail: degenerate inputs clamp or fall
//! back to defaults. These errors only surface while building configuration
//! (keyframe mappings, scroll windows, names read from files).

/// Errors raised while validating Vista configuration values
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum Error {
    #[error("keyframe mapping needs at least two breakpoints, got {0}")]
    TooFewKeyframes(usize),

    #[error("keyframe ranges differ in length ({inputs} inputs, {outputs} outputs)")]
    MismatchedRanges { inputs: usize, outputs: usize },

    #[error("keyframe breakpoint {index} is not a finite number")]
    NonFiniteKeyframe { index: usize },

    #[error("keyframe inputs must be strictly increasing: breakpoint {index} ({current}) follows {previous}")]
    NonMonotonicKeyframes {
        index: usize,
        previous: f32,
        current: f32,
    },

    #[error("invalid scroll edge `{0}` (expected \"<target> <container>\", e.g. \"start end\")")]
    InvalidScrollEdge(String),

    #[error("unknown easing `{0}`")]
    UnknownEasing(String),

    #[error("unknown tab `{0}`")]
    UnknownTab(String),

    #[error("unknown color scheme `{0}`")]
    UnknownScheme(String),
}

/// Result alias for configuration validation
pub type Result<T> = std::result::Result<T, Error>;
