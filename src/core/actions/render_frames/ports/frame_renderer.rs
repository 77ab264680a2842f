use crate::core::data::frame_geometry::FrameGeometry;

/// Produces one complete frame for a viewport.
///
/// Rendering cannot fail for a validated animation, so there is no error
/// channel; a renderer that panics aborts the whole render.
pub trait FrameRenderer {
    type Frame;

    fn render(&self, geometry: &FrameGeometry) -> Self::Frame;
}
