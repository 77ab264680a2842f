use crate::core::data::complex::{lerp, Complex};

/// Horizontal and vertical extent of a viewport, in plane units.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Zoom {
    pub width: f64,
    pub height: f64,
}

impl Zoom {
    #[must_use]
    pub fn square(extent: f64) -> Self {
        Self {
            width: extent,
            height: extent,
        }
    }

    #[must_use]
    pub fn is_valid(&self) -> bool {
        self.width.is_finite() && self.height.is_finite() && self.width > 0.0 && self.height > 0.0
    }

    #[must_use]
    pub fn lerp(self, other: Self, t: f64) -> Self {
        Self {
            width: lerp(self.width, other.width, t),
            height: lerp(self.height, other.height, t),
        }
    }
}

/// A point of view on the plane: where the camera is and how much it sees.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Viewpoint {
    pub position: Complex,
    pub zoom: Zoom,
}

/// The region of the complex plane one frame maps onto.
///
/// `width` and `height` are the full span of the viewport, centred on
/// `center`.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct FrameGeometry {
    pub center: Complex,
    pub width: f64,
    pub height: f64,
}

impl From<Viewpoint> for FrameGeometry {
    fn from(viewpoint: Viewpoint) -> Self {
        Self {
            center: viewpoint.position,
            width: viewpoint.zoom.width,
            height: viewpoint.zoom.height,
        }
    }
}
