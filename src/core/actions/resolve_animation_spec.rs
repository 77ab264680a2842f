use std::fmt;

use crate::core::data::animation_spec::{
    AnimationSpec, AnimationSpecError, DEFAULT_FRAME_DELAY, DEFAULT_MAX_ITERATIONS,
    DEFAULT_MOVING_FRAME_COUNT,
};
use crate::core::data::canvas::{Canvas, DEFAULT_CANVAS_HEIGHT, DEFAULT_CANVAS_WIDTH};
use crate::core::data::complex::Complex;
use crate::core::data::frame_geometry::{Viewpoint, Zoom};

/// Animation settings as the user supplied them, before defaults apply.
#[derive(Debug, Copy, Clone, PartialEq, Default)]
pub struct PartialAnimationSpec {
    pub start_pos: Option<Complex>,
    pub end_pos: Option<Complex>,
    pub start_zoom: Option<Zoom>,
    pub end_zoom: Option<Zoom>,
    pub canvas_size: Option<(u32, u32)>,
    pub max_iterations: Option<u32>,
    pub frame_count: Option<u32>,
    pub frame_delay: Option<u32>,
}

/// Something the user asked for that the resolved spec overrides.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum SpecWarning {
    NoMotion { requested_frames: u32 },
    IgnoringEndZoom,
    IgnoringEndPosition,
}

impl fmt::Display for SpecWarning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NoMotion { requested_frames } => write!(
                f,
                "setting frames argument to 1 due to lack of movement (requested {})",
                requested_frames
            ),
            Self::IgnoringEndZoom => write!(f, "frames set to 1; ignoring end zoom"),
            Self::IgnoringEndPosition => write!(f, "frames set to 1; ignoring end position"),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct ResolvedSpec {
    pub spec: AnimationSpec,
    pub warnings: Vec<SpecWarning>,
}

/// Fills in every default and checks the result.
///
/// A still animation (no end position and no end zoom) is always a single
/// frame; otherwise the frame count defaults to 25.
pub fn resolve_animation_spec(
    partial: PartialAnimationSpec,
) -> Result<ResolvedSpec, AnimationSpecError> {
    let start_pos = partial.start_pos.ok_or(AnimationSpecError::MissingStartPosition)?;
    let start_zoom = partial.start_zoom.ok_or(AnimationSpecError::MissingStartZoom)?;
    let has_motion = partial.end_pos.is_some() || partial.end_zoom.is_some();
    let mut warnings = Vec::new();

    let frame_count = match partial.frame_count {
        Some(requested_frames) if requested_frames > 1 && !has_motion => {
            warnings.push(SpecWarning::NoMotion { requested_frames });
            1
        }
        Some(requested_frames) => requested_frames,
        None if has_motion => DEFAULT_MOVING_FRAME_COUNT,
        None => 1,
    };

    if frame_count == 1 {
        if partial.end_zoom.is_some() {
            warnings.push(SpecWarning::IgnoringEndZoom);
        }
        if partial.end_pos.is_some() {
            warnings.push(SpecWarning::IgnoringEndPosition);
        }
    }

    let (width, height) = partial
        .canvas_size
        .unwrap_or((DEFAULT_CANVAS_WIDTH, DEFAULT_CANVAS_HEIGHT));

    let start = Viewpoint {
        position: start_pos,
        zoom: start_zoom,
    };
    // A single frame never reaches the end, so whatever was given there is dropped.
    let end = if frame_count == 1 {
        start
    } else {
        Viewpoint {
            position: partial.end_pos.unwrap_or(start_pos),
            zoom: partial.end_zoom.unwrap_or(start_zoom),
        }
    };

    let spec = AnimationSpec::new(
        start,
        end,
        Canvas::new(width, height)?,
        partial.max_iterations.unwrap_or(DEFAULT_MAX_ITERATIONS),
        frame_count,
        partial.frame_delay.unwrap_or(DEFAULT_FRAME_DELAY),
    )?;

    Ok(ResolvedSpec { spec, warnings })
}
