//! Normalized scroll progress

use std::fmt;

/// A progress value clamped to `[0, 1]`.
///
/// Non-finite inputs collapse to `0.0`, so consumers never observe NaN.
#[derive(Clone, Copy, Debug, Default, PartialEq, PartialOrd)]
pub struct ScrollProgress(f32);

impl ScrollProgress {
    pub const START: ScrollProgress = ScrollProgress(0.0);
    pub const END: ScrollProgress = ScrollProgress(1.0);

    pub fn new(value: f32) -> Self {
        if value.is_finite() {
            Self(value.clamp(0.0, 1.0))
        } else {
            Self::START
        }
    }

    pub fn value(self) -> f32 {
        self.0
    }
}

impl From<f32> for ScrollProgress {
    fn from(value: f32) -> Self {
        Self::new(value)
    }
}

impl From<ScrollProgress> for f32 {
    fn from(progress: ScrollProgress) -> Self {
        progress.0
    }
}

impl fmt::Display for ScrollProgress {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.3}", self.0)
    }
}
