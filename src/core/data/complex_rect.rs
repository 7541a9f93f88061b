use crate::core::data::complex::Complex;
use std::error::Error;
use std::fmt;

#[derive(Debug, Copy, Clone, PartialEq)]
pub enum ComplexRectError {
    InvalidSize { width: f64, height: f64 },
}

impl fmt::Display for ComplexRectError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidSize { width, height } => {
                write!(
                    f,
                    "complex rect size must be positive: {}x{}",
                    width, height
                )
            }
        }
    }
}

impl Error for ComplexRectError {}

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum PanDirection {
    Up,
    Down,
    Left,
    Right,
}

/// The visible window of the complex plane, `[xmin, xmax] x [ymin, ymax]`.
///
/// `top_left` holds the minimum of both axes; screen row 0 maps to `ymin`.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct ComplexRect {
    top_left: Complex,
    bottom_right: Complex,
}

impl ComplexRect {
    pub fn new(top_left: Complex, bottom_right: Complex) -> Result<Self, ComplexRectError> {
        let width = bottom_right.real - top_left.real;
        let height = bottom_right.imag - top_left.imag;

        // Negated comparison so NaN sizes are rejected too.
        if !(width > 0.0) || !(height > 0.0) {
            return Err(ComplexRectError::InvalidSize { width, height });
        }

        Ok(Self {
            top_left,
            bottom_right,
        })
    }

    #[must_use]
    pub fn top_left(&self) -> Complex {
        self.top_left
    }

    #[must_use]
    pub fn bottom_right(&self) -> Complex {
        self.bottom_right
    }

    #[must_use]
    pub fn width(&self) -> f64 {
        self.bottom_right.real - self.top_left.real
    }

    #[must_use]
    pub fn height(&self) -> f64 {
        self.bottom_right.imag - self.top_left.imag
    }

    #[must_use]
    pub fn centre(&self) -> Complex {
        (self.top_left + self.bottom_right) / 2.0
    }

    #[must_use]
    pub fn contains_point(&self, point: Complex) -> bool {
        self.top_left.real <= point.real
            && self.top_left.imag <= point.imag
            && self.bottom_right.real >= point.real
            && self.bottom_right.imag >= point.imag
    }

    /// Shifts the window by a quarter of its extent, scaled by `speed`.
    ///
    /// `Up` moves towards `ymin`, matching the top-down screen mapping.
    #[must_use]
    pub fn pan(&self, direction: PanDirection, speed: f64) -> Self {
        let dx = self.width() / 4.0 * speed;
        let dy = self.height() / 4.0 * speed;

        let offset = match direction {
            PanDirection::Up => Complex::new(0.0, -dy),
            PanDirection::Down => Complex::new(0.0, dy),
            PanDirection::Left => Complex::new(-dx, 0.0),
            PanDirection::Right => Complex::new(dx, 0.0),
        };

        Self {
            top_left: self.top_left + offset,
            bottom_right: self.bottom_right + offset,
        }
    }

    /// Reflects each edge through the opposite one by `factor` of the extent:
    /// `min' = max - extent * factor`, `max' = min + extent * factor`.
    ///
    /// The centre is preserved and the extent becomes `extent * (2 * factor - 1)`,
    /// so `0.75` halves the window and `1 / 0.75` grows it by two thirds.
    pub fn zoom(&self, factor: f64) -> Result<Self, ComplexRectError> {
        let width = self.width();
        let height = self.height();

        Self::new(
            Complex {
                real: self.bottom_right.real - width * factor,
                imag: self.bottom_right.imag - height * factor,
            },
            Complex {
                real: self.top_left.real + width * factor,
                imag: self.top_left.imag + height * factor,
            },
        )
    }
}
