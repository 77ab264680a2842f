use std::error::Error;
use std::fmt;

use crate::core::data::canvas::{Canvas, CanvasError};
use crate::core::data::frame_geometry::{Viewpoint, Zoom};

pub const DEFAULT_MAX_ITERATIONS: u32 = 1000;
pub const DEFAULT_FRAME_DELAY: u32 = 8;
pub const DEFAULT_MOVING_FRAME_COUNT: u32 = 25;
/// Largest delay a GIF frame can carry, in hundredths of a second.
pub const MAX_FRAME_DELAY: u32 = u16::MAX as u32;

#[derive(Debug, Copy, Clone, PartialEq)]
pub enum AnimationSpecError {
    MissingStartPosition,
    MissingStartZoom,
    ZeroFrameCount,
    ZeroMaxIterations,
    ZeroFrameDelay,
    FrameDelayTooLong { delay: u32 },
    InvalidZoom { width: f64, height: f64 },
    NonFinitePosition { real: f64, imag: f64 },
    Canvas(CanvasError),
}

impl fmt::Display for AnimationSpecError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::MissingStartPosition => write!(f, "need to specify start position"),
            Self::MissingStartZoom => write!(f, "need to give start zoom"),
            Self::ZeroFrameCount => write!(f, "number of frames must be at least 1"),
            Self::ZeroMaxIterations => write!(f, "maximum iterations must be greater than zero"),
            Self::ZeroFrameDelay => write!(f, "delay time must be at least 1"),
            Self::FrameDelayTooLong { delay } => {
                write!(f, "delay time must be at most {}: {}", MAX_FRAME_DELAY, delay)
            }
            Self::InvalidZoom { width, height } => {
                write!(f, "zoom must be positive and finite: {}x{}", width, height)
            }
            Self::NonFinitePosition { real, imag } => {
                write!(f, "position must be finite: {}{:+}i", real, imag)
            }
            Self::Canvas(err) => write!(f, "{}", err),
        }
    }
}

impl Error for AnimationSpecError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Canvas(err) => Some(err),
            _ => None,
        }
    }
}

impl From<CanvasError> for AnimationSpecError {
    fn from(err: CanvasError) -> Self {
        Self::Canvas(err)
    }
}

/// A fully resolved, validated description of an animation.
///
/// Read-only once constructed; everything downstream trusts its
/// invariants without re-checking them.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct AnimationSpec {
    start: Viewpoint,
    end: Viewpoint,
    canvas: Canvas,
    max_iterations: u32,
    frame_count: u32,
    frame_delay: u32,
}

impl AnimationSpec {
    pub fn new(
        start: Viewpoint,
        end: Viewpoint,
        canvas: Canvas,
        max_iterations: u32,
        frame_count: u32,
        frame_delay: u32,
    ) -> Result<Self, AnimationSpecError> {
        for viewpoint in [start, end] {
            validate_viewpoint(viewpoint)?;
        }

        if max_iterations == 0 {
            return Err(AnimationSpecError::ZeroMaxIterations);
        }

        if frame_count == 0 {
            return Err(AnimationSpecError::ZeroFrameCount);
        }

        if frame_delay == 0 {
            return Err(AnimationSpecError::ZeroFrameDelay);
        }

        if frame_delay > MAX_FRAME_DELAY {
            return Err(AnimationSpecError::FrameDelayTooLong { delay: frame_delay });
        }

        Ok(Self {
            start,
            end,
            canvas,
            max_iterations,
            frame_count,
            frame_delay,
        })
    }

    #[must_use]
    pub fn start(&self) -> Viewpoint {
        self.start
    }

    #[must_use]
    pub fn end(&self) -> Viewpoint {
        self.end
    }

    #[must_use]
    pub fn canvas(&self) -> Canvas {
        self.canvas
    }

    #[must_use]
    pub fn max_iterations(&self) -> u32 {
        self.max_iterations
    }

    #[must_use]
    pub fn frame_count(&self) -> u32 {
        self.frame_count
    }

    /// Delay between frames in hundredths of a second.
    #[must_use]
    pub fn frame_delay(&self) -> u32 {
        self.frame_delay
    }
}

fn validate_viewpoint(viewpoint: Viewpoint) -> Result<(), AnimationSpecError> {
    let Viewpoint { position, zoom } = viewpoint;

    if !position.is_finite() {
        return Err(AnimationSpecError::NonFinitePosition {
            real: position.real,
            imag: position.imag,
        });
    }

    if !zoom.is_valid() {
        let Zoom { width, height } = zoom;
        return Err(AnimationSpecError::InvalidZoom { width, height });
    }

    Ok(())
}
