use crate::core::data::canvas::Canvas;
use crate::core::data::complex::Complex;
use crate::core::data::frame_geometry::FrameGeometry;
use crate::core::data::point::Point;

/// Multiplier applied to `FrameGeometry::width`/`height` when mapping.
///
/// Geometry extents are full spans, so a pixel offset of half the canvas
/// lands half a span away from the centre. A half-extent convention would
/// use 2.0 here.
pub const VIEWPORT_SPAN_SCALE: f64 = 1.0;

/// Maps a pixel onto the complex plane. The canvas centre `(w / 2, h / 2)`
/// maps exactly onto `geometry.center`; `y` grows with the imaginary axis.
#[must_use]
pub fn pixel_to_complex_coords(pixel: Point, canvas: Canvas, geometry: &FrameGeometry) -> Complex {
    let canvas_width = canvas.width() as f64;
    let canvas_height = canvas.height() as f64;

    let real = geometry.center.real
        + (pixel.x as f64 - canvas_width / 2.0) / canvas_width * geometry.width * VIEWPORT_SPAN_SCALE;
    let imag = geometry.center.imag
        + (pixel.y as f64 - canvas_height / 2.0) / canvas_height * geometry.height * VIEWPORT_SPAN_SCALE;

    Complex { real, imag }
}
