use std::error::Error;
use std::fmt;
use crate::core::data::point::Point;

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum PixelRectError {
    InvalidSize { width: i32, height: i32 },
}

impl fmt::Display for PixelRectError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidSize { width, height } => {
                write!(f, "pixel rect size must be at least 2x2: {}x{}", width, height)
            }
        }
    }
}

impl Error for PixelRectError {}

/// Inclusive rectangle of screen pixels.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct PixelRect {
    top_left: Point,
    bottom_right: Point,
}

impl PixelRect {
    pub fn new(top_left: Point, bottom_right: Point) -> Result<Self, PixelRectError> {
        let dx = (bottom_right.x as i64) - (top_left.x as i64);
        let dy = (bottom_right.y as i64) - (top_left.y as i64);

        let width = (dx + if dx >= 0 { 1 } else { -1 }) as i32;
        let height = (dy + if dy >= 0 { 1 } else { -1 }) as i32;

        if width < 2 || height < 2 {
            return Err(PixelRectError::InvalidSize { width, height });
        }

        Ok(Self {
            top_left,
            bottom_right,
        })
    }

    /// A `width` x `height` window anchored at the origin.
    pub fn from_size(width: u32, height: u32) -> Result<Self, PixelRectError> {
        if width < 2 || height < 2 || width > i32::MAX as u32 || height > i32::MAX as u32 {
            return Err(PixelRectError::InvalidSize {
                width: width.min(i32::MAX as u32) as i32,
                height: height.min(i32::MAX as u32) as i32,
            });
        }

        Self::new(
            Point { x: 0, y: 0 },
            Point {
                x: width as i32 - 1,
                y: height as i32 - 1,
            },
        )
    }

    #[must_use]
    pub fn top_left(&self) -> Point {
        self.top_left
    }

    #[must_use]
    pub fn bottom_right(&self) -> Point {
        self.bottom_right
    }

    #[must_use]
    pub fn width(&self) -> u32 {
        (self.bottom_right.x - self.top_left.x + 1) as u32
    }

    #[must_use]
    pub fn height(&self) -> u32 {
        (self.bottom_right.y - self.top_left.y + 1) as u32
    }

    #[must_use]
    pub fn size(&self) -> u64 {
        self.width() as u64 * self.height() as u64
    }

    #[must_use]
    pub fn contains_point(&self, point: Point) -> bool {
        self.top_left.x <= point.x
            && self.top_left.y <= point.y
            && self.bottom_right.x >= point.x
            && self.bottom_right.y >= point.y
    }

    /// Row-major offset of `point`, or `None` when it lies outside the rect.
    #[must_use]
    pub fn index_of(&self, point: Point) -> Option<usize> {
        if !self.contains_point(point) {
            return None;
        }

        let relative_x = (point.x - self.top_left.x) as usize;
        let relative_y = (point.y - self.top_left.y) as usize;

        Some(relative_y * self.width() as usize + relative_x)
    }

    /// Every pixel in row-major order.
    pub fn points(&self) -> impl Iterator<Item = Point> + use<> {
        let (x_start, x_end) = (self.top_left.x, self.bottom_right.x);

        (self.top_left.y..=self.bottom_right.y)
            .flat_map(move |y| (x_start..=x_end).map(move |x| Point { x, y }))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pixel_rect_dimensions() {
        let rect = PixelRect::new(Point { x: -10, y: -20 }, Point { x: 110, y: 80 }).unwrap();

        assert_eq!(rect.width(), 121);
        assert_eq!(rect.height(), 101);
        assert_eq!(rect.size(), 12221);
    }

    #[test]
    fn test_pixel_rect_dimensions_must_be_positive() {
        let rect_negative_width = PixelRect::new(Point { x: 0, y: 0 }, Point { x: -100, y: 10 });
        let rect_negative_height = PixelRect::new(Point { x: 0, y: 0 }, Point { x: 100, y: -10 });

        assert_eq!(rect_negative_width, Err(PixelRectError::InvalidSize { width: -101, height: 11 }));
        assert_eq!(rect_negative_height, Err(PixelRectError::InvalidSize { width: 101, height: -11 }));
    }

    #[test]
    fn test_pixel_rect_must_be_at_least_two_pixels_wide_and_tall() {
        let single_pixel = PixelRect::new(Point { x: 0, y: 0 }, Point { x: 0, y: 0 });
        let two_pixels_square = PixelRect::new(Point { x: 0, y: 0 }, Point { x: 1, y: 1 });

        assert_eq!(single_pixel, Err(PixelRectError::InvalidSize { width: 1, height: 1 }));
        assert!(two_pixels_square.is_ok());
    }

    #[test]
    fn test_from_size() {
        let rect = PixelRect::from_size(900, 500).unwrap();

        assert_eq!(rect.top_left(), Point { x: 0, y: 0 });
        assert_eq!(rect.bottom_right(), Point { x: 899, y: 499 });
        assert_eq!(rect.width(), 900);
        assert_eq!(rect.height(), 500);
    }

    #[test]
    fn test_from_size_rejects_degenerate_windows() {
        assert_eq!(
            PixelRect::from_size(1, 10),
            Err(PixelRectError::InvalidSize { width: 1, height: 10 })
        );
        assert!(PixelRect::from_size(0, 0).is_err());
    }

    #[test]
    fn test_pixel_rect_contains_point() {
        let rect = PixelRect::new(Point { x: -50, y: -50 }, Point { x: 100, y: 100 }).unwrap();

        assert!(rect.contains_point(Point { x: -50, y: -50 }));
        assert!(rect.contains_point(Point { x: 100, y: 100 }));
        assert!(!rect.contains_point(Point { x: 101, y: 50 }));
        assert!(!rect.contains_point(Point { x: 50, y: -51 }));
    }

    #[test]
    fn test_index_of_is_row_major() {
        let rect = PixelRect::new(Point { x: 10, y: 20 }, Point { x: 13, y: 22 }).unwrap();

        assert_eq!(rect.index_of(Point { x: 10, y: 20 }), Some(0));
        assert_eq!(rect.index_of(Point { x: 13, y: 20 }), Some(3));
        assert_eq!(rect.index_of(Point { x: 10, y: 21 }), Some(4));
        assert_eq!(rect.index_of(Point { x: 13, y: 22 }), Some(11));
        assert_eq!(rect.index_of(Point { x: 14, y: 22 }), None);
    }

    #[test]
    fn test_points_visits_every_pixel_in_row_major_order() {
        let rect = PixelRect::new(Point { x: 1, y: 1 }, Point { x: 2, y: 3 }).unwrap();
        let points: Vec<Point> = rect.points().collect();

        assert_eq!(points.len(), 6);
        assert_eq!(points[0], Point { x: 1, y: 1 });
        assert_eq!(points[1], Point { x: 2, y: 1 });
        assert_eq!(points[2], Point { x: 1, y: 2 });
        assert_eq!(points[5], Point { x: 2, y: 3 });

        for (i, point) in points.iter().enumerate() {
            assert_eq!(rect.index_of(*point), Some(i));
        }
    }
}
