use crate::core::data::complex::Complex;
use crate::core::data::complex_rect::ComplexRect;
use crate::core::data::pixel_rect::PixelRect;
use crate::core::data::point::Point;
use std::error::Error;
use std::fmt;

#[derive(Debug, Copy, Clone, PartialEq)]
pub enum PixelToComplexCoordsError {
    PointOutsideRect { point: Point, pixel_rect: PixelRect },
}

impl fmt::Display for PixelToComplexCoordsError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::PointOutsideRect { point, pixel_rect } => {
                write!(
                    f,
                    "point (x: {}, y: {}) is outside the rectangle with coords top-left: (x: {}, y: {}) bottom-right: (x: {}, y: {})",
                    point.x,
                    point.y,
                    pixel_rect.top_left().x,
                    pixel_rect.top_left().y,
                    pixel_rect.bottom_right().x,
                    pixel_rect.bottom_right().y
                )
            }
        }
    }
}

impl Error for PixelToComplexCoordsError {}

/// Maps a pixel onto the view so that the first and last pixel of each axis
/// land exactly on the view's edges.
pub fn pixel_to_complex_coords(
    pixel_position: Point,
    pixel_rect: PixelRect,
    complex_rect: ComplexRect,
) -> Result<Complex, PixelToComplexCoordsError> {
    if !pixel_rect.contains_point(pixel_position) {
        return Err(PixelToComplexCoordsError::PointOutsideRect {
            point: pixel_position,
            pixel_rect,
        });
    }

    // PixelRect guarantees at least two pixels per axis, so neither span is zero.
    let span_x = (pixel_rect.width() - 1) as f64;
    let span_y = (pixel_rect.height() - 1) as f64;
    let fx = (pixel_position.x - pixel_rect.top_left().x) as f64 / span_x;
    let fy = (pixel_position.y - pixel_rect.top_left().y) as f64 / span_y;

    Ok(fraction_to_complex_coords(fx, fy, complex_rect))
}

/// Maps a point given as fractions of the view, `(0, 0)` top-left and `(1, 1)`
/// bottom-right, onto the complex plane. The random sample renderer uses this
/// directly since its samples do not sit on pixel centres.
#[must_use]
pub fn fraction_to_complex_coords(fx: f64, fy: f64, complex_rect: ComplexRect) -> Complex {
    Complex {
        real: complex_rect.top_left().real + fx * complex_rect.width(),
        imag: complex_rect.top_left().imag + fy * complex_rect.height(),
    }
}
