//! Geometry along the scroll axis

/// A tracked region in document space, measured along the scroll axis
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct RegionBounds {
    /// Distance from the document start to the region's start edge
    pub offset: f32,
    /// Length of the region along the scroll axis
    pub extent: f32,
}

impl RegionBounds {
    pub fn new(offset: f32, extent: f32) -> Self {
        Self {
            offset,
            extent: extent.max(0.0),
        }
    }

    /// Document position of the region's end edge
    pub fn end(&self) -> f32 {
        self.offset + self.extent
    }

    /// Document position of a fractional point in the region (0 = start, 1 = end)
    pub fn point_at(&self, fraction: f32) -> f32 {
        self.offset + self.extent * fraction
    }
}

/// Visible viewport size in logical pixels
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Viewport {
    pub width: f32,
    pub height: f32,
}

impl Viewport {
    pub fn new(width: f32, height: f32) -> Self {
        Self {
            width: width.max(0.0),
            height: height.max(0.0),
        }
    }
}

impl Default for Viewport {
    fn default() -> Self {
        Self::new(1280.0, 720.0)
    }
}
