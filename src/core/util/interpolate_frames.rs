use crate::core::data::animation_spec::AnimationSpec;
use crate::core::data::frame_geometry::FrameGeometry;

/// Position of `frame` within the animation, from 0.0 (start) to 1.0 (end).
///
/// A single-frame animation always sits at 0.0.
#[must_use]
pub fn interpolation_fraction(frame: u32, frame_count: u32) -> f64 {
    let denominator = if frame_count > 1 { frame_count - 1 } else { 1 };
    frame as f64 / denominator as f64
}

#[must_use]
pub fn frame_geometry(spec: &AnimationSpec, frame: u32) -> FrameGeometry {
    let t = interpolation_fraction(frame, spec.frame_count());
    let (start, end) = (spec.start(), spec.end());
    let zoom = start.zoom.lerp(end.zoom, t);

    FrameGeometry {
        center: start.position.lerp(end.position, t),
        width: zoom.width,
        height: zoom.height,
    }
}

/// Geometry for every frame of `spec`, in frame order.
#[must_use]
pub fn interpolate_frames(spec: &AnimationSpec) -> Vec<FrameGeometry> {
    (0..spec.frame_count())
        .map(|frame| frame_geometry(spec, frame))
        .collect()
}
