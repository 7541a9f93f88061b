use std::error::Error;
use std::fmt;
use crate::core::actions::generate_fractal::ports::fractal_algorithm::FractalAlgorithm;
use crate::core::data::complex::Complex;
use crate::core::data::complex_rect::ComplexRect;
use crate::core::data::pixel_rect::PixelRect;
use crate::core::data::point::Point;
use crate::core::fractals::escape::{EvaluationResult, evaluate};
use crate::core::fractals::variant::FractalVariant;
use crate::core::util::pixel_to_complex_coords::{
    PixelToComplexCoordsError, fraction_to_complex_coords, pixel_to_complex_coords,
};

#[derive(Debug, PartialEq, Eq)]
pub enum EscapeTimeAlgorithmError {
    ZeroMaxIterationsError,
}

impl fmt::Display for EscapeTimeAlgorithmError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::ZeroMaxIterationsError => {
                write!(f, "Maximum iterations must be greater than zero")
            }
        }
    }
}

impl Error for EscapeTimeAlgorithmError {}

/// Binds one frame's view and iteration settings to the escape-time evaluator.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EscapeTimeAlgorithm {
    pixel_rect: PixelRect,
    complex_rect: ComplexRect,
    variant: FractalVariant,
    start: Complex,
    threshold: f64,
    max_iterations: u32,
}

impl FractalAlgorithm for EscapeTimeAlgorithm {
    type Success = EvaluationResult;
    type Failure = PixelToComplexCoordsError;

    fn compute(&self, pixel: Point) -> Result<Self::Success, Self::Failure> {
        let sample = pixel_to_complex_coords(pixel, self.pixel_rect, self.complex_rect)?;

        Ok(self.evaluate_at(sample))
    }
}

impl EscapeTimeAlgorithm {
    pub fn new(
        pixel_rect: PixelRect,
        complex_rect: ComplexRect,
        variant: FractalVariant,
        start: Complex,
        threshold: f64,
        max_iterations: u32,
    ) -> Result<Self, EscapeTimeAlgorithmError> {
        if max_iterations == 0 {
            return Err(EscapeTimeAlgorithmError::ZeroMaxIterationsError);
        }

        Ok(Self {
            pixel_rect,
            complex_rect,
            variant,
            start,
            threshold,
            max_iterations,
        })
    }

    #[must_use]
    pub fn pixel_rect(&self) -> PixelRect {
        self.pixel_rect
    }

    #[must_use]
    pub fn complex_rect(&self) -> ComplexRect {
        self.complex_rect
    }

    #[must_use]
    pub fn variant(&self) -> FractalVariant {
        self.variant
    }

    #[must_use]
    pub fn max_iterations(&self) -> u32 {
        self.max_iterations
    }

    /// Evaluates a sample given as fractions of the view, see
    /// [`fraction_to_complex_coords`].
    #[must_use]
    pub fn compute_fraction(&self, fx: f64, fy: f64) -> EvaluationResult {
        self.evaluate_at(fraction_to_complex_coords(fx, fy, self.complex_rect))
    }

    #[inline]
    fn evaluate_at(&self, sample: Complex) -> EvaluationResult {
        evaluate(self.variant, self.start, sample, self.threshold, self.max_iterations)
    }
}
