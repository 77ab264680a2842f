use crate::core::data::canvas::Canvas;
use crate::core::data::palette::{Palette, PaletteIndex};
use crate::core::data::point::Point;

/// A rendered frame: one palette index per pixel, row-major.
///
/// The bitmap is built in one pass by [`IndexedBitmap::from_fn`] and never
/// mutated afterwards.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IndexedBitmap {
    canvas: Canvas,
    palette: Palette,
    indices: Vec<PaletteIndex>,
}

impl IndexedBitmap {
    pub fn from_fn<F>(canvas: Canvas, palette: Palette, classify: F) -> Self
    where
        F: FnMut(Point) -> PaletteIndex,
    {
        let mut indices = Vec::with_capacity(canvas.size());
        indices.extend(canvas.points().map(classify));

        Self {
            canvas,
            palette,
            indices,
        }
    }

    #[must_use]
    pub fn canvas(&self) -> Canvas {
        self.canvas
    }

    #[must_use]
    pub fn palette(&self) -> Palette {
        self.palette
    }

    #[must_use]
    pub fn indices(&self) -> &[PaletteIndex] {
        &self.indices
    }

    #[must_use]
    pub fn index_at(&self, point: Point) -> Option<PaletteIndex> {
        if !self.canvas.contains_point(point) {
            return None;
        }

        let offset = point.y as usize * self.canvas.width() as usize + point.x as usize;
        self.indices.get(offset).copied()
    }

    #[must_use]
    pub fn count(&self, index: PaletteIndex) -> usize {
        self.indices.iter().filter(|&&i| i == index).count()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn checkerboard(width: u32, height: u32) -> IndexedBitmap {
        IndexedBitmap::from_fn(
            Canvas::new(width, height).unwrap(),
            Palette::default(),
            |point| PaletteIndex::from_in_set((point.x + point.y) % 2 == 0),
        )
    }

    #[test]
    fn test_from_fn_fills_every_pixel() {
        let bitmap = checkerboard(5, 3);

        assert_eq!(bitmap.indices().len(), 15);
        assert_eq!(bitmap.count(PaletteIndex::Foreground), 8);
        assert_eq!(bitmap.count(PaletteIndex::Background), 7);
    }

    #[test]
    fn test_from_fn_visits_pixels_row_major() {
        let canvas = Canvas::new(3, 2).unwrap();
        let mut visited = Vec::new();
        let _ = IndexedBitmap::from_fn(canvas, Palette::default(), |point| {
            visited.push(point);
            PaletteIndex::Background
        });

        assert_eq!(visited, canvas.points().collect::<Vec<_>>());
    }

    #[test]
    fn test_index_at() {
        let bitmap = checkerboard(4, 4);

        assert_eq!(bitmap.index_at(Point { x: 0, y: 0 }), Some(PaletteIndex::Foreground));
        assert_eq!(bitmap.index_at(Point { x: 1, y: 0 }), Some(PaletteIndex::Background));
        assert_eq!(bitmap.index_at(Point { x: 3, y: 3 }), Some(PaletteIndex::Foreground));
    }

    #[test]
    fn test_index_at_outside_bounds_is_none() {
        let bitmap = checkerboard(4, 4);

        assert_eq!(bitmap.index_at(Point { x: 4, y: 0 }), None);
        assert_eq!(bitmap.index_at(Point { x: 0, y: 4 }), None);
    }
}
