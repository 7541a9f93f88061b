//! Depth-bounded escape-time evaluation.
//!
//! The score of an escaping point is the number of iterations that were *left*
//! when it crossed the threshold, not the number consumed. Points that survive
//! longest, close to the set boundary, score lowest. Combined with modulo banding
//! in the gradient cache this draws continuous colour bands around the set.

use crate::core::data::complex::Complex;
use crate::core::fractals::rules::{
    BurningShipRule, CubicJuliaRule, FractalRule, MandelbrotRule, QuadraticJuliaRule,
};
use crate::core::fractals::variant::FractalVariant;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct EvaluationResult {
    pub escaped: bool,
    pub score: u32,
}

impl EvaluationResult {
    pub const BOUNDED: Self = Self {
        escaped: false,
        score: 0,
    };

    #[must_use]
    pub const fn escaped_with(score: u32) -> Self {
        Self {
            escaped: true,
            score,
        }
    }
}

/// Runs `variant`'s recurrence for one sample.
///
/// For Mandelbrot-family variants `start` is the initial orbit value and
/// `sample` the fixed parameter; for Julia-family variants `sample` is iterated
/// and `start` is the Julia parameter.
#[must_use]
pub fn evaluate(
    variant: FractalVariant,
    start: Complex,
    sample: Complex,
    threshold: f64,
    max_depth: u32,
) -> EvaluationResult {
    match variant {
        FractalVariant::Mandelbrot => {
            evaluate_rule(&MandelbrotRule, start, sample, threshold, max_depth)
        }
        FractalVariant::BurningShip => {
            evaluate_rule(&BurningShipRule, start, sample, threshold, max_depth)
        }
        FractalVariant::JuliaQuadratic => {
            evaluate_rule(&QuadraticJuliaRule, start, sample, threshold, max_depth)
        }
        FractalVariant::JuliaCubic => {
            evaluate_rule(&CubicJuliaRule, start, sample, threshold, max_depth)
        }
    }
}

/// Same as [`evaluate`], for any rule including ones from a
/// [`RuleRegistry`](crate::core::fractals::rules::RuleRegistry).
///
/// A zero depth, or a threshold that is not strictly positive, yields
/// [`EvaluationResult::BOUNDED`]. An orbit that only reaches the threshold on
/// the last permitted iteration has no depth left to score and is also reported
/// as bounded, so `escaped` always implies `0 < score <= max_depth`.
#[must_use]
pub fn evaluate_rule<R: FractalRule + ?Sized>(
    rule: &R,
    start: Complex,
    sample: Complex,
    threshold: f64,
    max_depth: u32,
) -> EvaluationResult {
    if max_depth == 0 || !(threshold > 0.0) {
        return EvaluationResult::BOUNDED;
    }

    let family = rule.family();
    let mut orbit = family.seed(start, sample);
    let mut iterations = 0;

    while iterations < max_depth && orbit.iterated.magnitude() < threshold {
        orbit.iterated = rule.step(orbit.iterated, orbit.parameter);
        iterations += 1;
    }

    let remaining = max_depth - iterations;

    if remaining > 0 && family.has_escaped(orbit.iterated.magnitude(), threshold) {
        EvaluationResult::escaped_with(remaining)
    } else {
        EvaluationResult::BOUNDED
    }
}
