use std::error::Error;
use std::fmt;
use crate::core::data::point::Point;

pub const DEFAULT_CANVAS_WIDTH: u32 = 512;
pub const DEFAULT_CANVAS_HEIGHT: u32 = 512;

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum CanvasError {
    InvalidSize { width: u32, height: u32 },
}

impl fmt::Display for CanvasError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidSize { width, height } => {
                write!(f, "canvas size must be positive: {}x{}", width, height)
            }
        }
    }
}

impl Error for CanvasError {}

/// Pixel dimensions of every frame in an animation.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct Canvas {
    width: u32,
    height: u32,
}

impl Default for Canvas {
    fn default() -> Self {
        Self {
            width: DEFAULT_CANVAS_WIDTH,
            height: DEFAULT_CANVAS_HEIGHT,
        }
    }
}

impl Canvas {
    pub fn new(width: u32, height: u32) -> Result<Self, CanvasError> {
        if width == 0 || height == 0 {
            return Err(CanvasError::InvalidSize { width, height });
        }

        Ok(Self { width, height })
    }

    #[must_use]
    pub fn width(&self) -> u32 {
        self.width
    }

    #[must_use]
    pub fn height(&self) -> u32 {
        self.height
    }

    #[must_use]
    pub fn contains_point(&self, point: Point) -> bool {
        point.x < self.width && point.y < self.height
    }

    #[must_use]
    pub fn size(&self) -> usize {
        self.width as usize * self.height as usize
    }

    /// Every pixel in row-major order.
    pub fn points(&self) -> impl Iterator<Item = Point> {
        let width = self.width;
        (0..self.height).flat_map(move |y| (0..width).map(move |x| Point { x, y }))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_canvas_new_valid() {
        let canvas = Canvas::new(640, 480).unwrap();

        assert_eq!(canvas.width(), 640);
        assert_eq!(canvas.height(), 480);
        assert_eq!(canvas.size(), 307_200);
    }

    #[test]
    fn test_canvas_dimensions_must_be_positive() {
        assert_eq!(Canvas::new(0, 10), Err(CanvasError::InvalidSize { width: 0, height: 10 }));
        assert_eq!(Canvas::new(10, 0), Err(CanvasError::InvalidSize { width: 10, height: 0 }));
        assert_eq!(Canvas::new(0, 0), Err(CanvasError::InvalidSize { width: 0, height: 0 }));
    }

    #[test]
    fn test_single_pixel_canvas_is_valid() {
        let canvas = Canvas::new(1, 1).unwrap();

        assert_eq!(canvas.size(), 1);
        assert_eq!(canvas.points().collect::<Vec<_>>(), vec![Point { x: 0, y: 0 }]);
    }

    #[test]
    fn test_default_canvas_is_512_square() {
        let canvas = Canvas::default();

        assert_eq!(canvas.width(), DEFAULT_CANVAS_WIDTH);
        assert_eq!(canvas.height(), DEFAULT_CANVAS_HEIGHT);
    }

    #[test]
    fn test_canvas_contains_point() {
        let canvas = Canvas::new(4, 3).unwrap();

        assert!(canvas.contains_point(Point { x: 0, y: 0 }));
        assert!(canvas.contains_point(Point { x: 3, y: 2 }));
        assert!(!canvas.contains_point(Point { x: 4, y: 2 }));
        assert!(!canvas.contains_point(Point { x: 3, y: 3 }));
    }

    #[test]
    fn test_points_are_row_major() {
        let canvas = Canvas::new(3, 2).unwrap();
        let points: Vec<Point> = canvas.points().collect();

        assert_eq!(points.len(), 6);
        assert_eq!(points[0], Point { x: 0, y: 0 });
        assert_eq!(points[2], Point { x: 2, y: 0 });
        assert_eq!(points[3], Point { x: 0, y: 1 });
        assert_eq!(points[5], Point { x: 2, y: 1 });
    }
}
