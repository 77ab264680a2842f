use crate::core::actions::render_frames::ports::frame_renderer::FrameRenderer;
use crate::core::data::canvas::Canvas;
use crate::core::data::frame_geometry::FrameGeometry;
use crate::core::data::indexed_bitmap::IndexedBitmap;
use crate::core::data::palette::{Palette, PaletteIndex};
use crate::core::fractals::mandelbrot::algorithm::MandelbrotAlgorithm;
use crate::core::util::pixel_to_complex_coords::pixel_to_complex_coords;

/// Renders one frame of the Mandelbrot set as a two-colour bitmap.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct MandelbrotFrameRenderer {
    canvas: Canvas,
    algorithm: MandelbrotAlgorithm,
    palette: Palette,
}

impl MandelbrotFrameRenderer {
    #[must_use]
    pub fn new(canvas: Canvas, algorithm: MandelbrotAlgorithm, palette: Palette) -> Self {
        Self {
            canvas,
            algorithm,
            palette,
        }
    }
}

impl FrameRenderer for MandelbrotFrameRenderer {
    type Frame = IndexedBitmap;

    fn render(&self, geometry: &FrameGeometry) -> IndexedBitmap {
        IndexedBitmap::from_fn(self.canvas, self.palette, |pixel| {
            let c = pixel_to_complex_coords(pixel, self.canvas, geometry);
            PaletteIndex::from_in_set(self.algorithm.is_in_set(c))
        })
    }
}
