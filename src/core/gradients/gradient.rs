use crate::core::data::colour::Rgba;
use std::error::Error;
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ControlPoint {
    pub position: f64,
    pub colour: Rgba,
}

impl ControlPoint {
    #[must_use]
    pub const fn new(position: f64, colour: Rgba) -> Self {
        Self { position, colour }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum GradientError {
    Empty,
    UnorderedControlPoints { index: usize },
}

impl fmt::Display for GradientError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Empty => write!(f, "gradient needs at least one control point"),
            Self::UnorderedControlPoints { index } => {
                write!(
                    f,
                    "control point {} is positioned before the one preceding it",
                    index
                )
            }
        }
    }
}

impl Error for GradientError {}

/// Piecewise-linear path through colour space.
///
/// Control points are ordered by ascending position. The first position is
/// expected to be `0.0`; lookups before it return the first colour.
#[derive(Debug, Clone, PartialEq)]
pub struct Gradient {
    control_points: Vec<ControlPoint>,
}

impl Gradient {
    pub fn new(control_points: Vec<ControlPoint>) -> Result<Self, GradientError> {
        if control_points.is_empty() {
            return Err(GradientError::Empty);
        }

        if let Some(index) = control_points
            .windows(2)
            .position(|pair| !(pair[0].position <= pair[1].position))
        {
            return Err(GradientError::UnorderedControlPoints { index: index + 1 });
        }

        Ok(Self { control_points })
    }

    #[must_use]
    pub fn control_points(&self) -> &[ControlPoint] {
        &self.control_points
    }

    /// Colour at `t`, interpolated channel by channel between the two
    /// control points around it.
    ///
    /// `t` must not be negative. At or past the last control point the last
    /// colour is returned as is: the gradient clamps rather than wraps, so
    /// cyclic callers reduce `t` into `[0, 1)` first.
    #[must_use]
    pub fn map(&self, t: f64) -> Rgba {
        debug_assert!(!(t < 0.0), "gradient position must not be negative: {t}");

        let points = &self.control_points;
        let upper = points.partition_point(|point| point.position <= t);

        if upper == points.len() {
            return points[points.len() - 1].colour;
        }
        if upper == 0 {
            return points[0].colour;
        }

        let from = points[upper - 1];
        let to = points[upper];
        let fraction = (t - from.position) / (to.position - from.position);

        from.colour + (to.colour - from.colour) * fraction as f32
    }
}
