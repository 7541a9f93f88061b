use std::error::Error;
use std::fmt;
use std::sync::Arc;
use crate::core::actions::generate_pixel_buffer::ports::colour_map::ColourMap;
use crate::core::data::colour::Colour;
use crate::core::fractals::escape::EvaluationResult;
use crate::core::gradients::cache::GradientCache;
use crate::core::gradients::presets::GradientKind;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GradientColourMapError {
    ScoreOutsideCache { score: u32, max_iterations: u32 },
    SchemeOutsideCache { scheme: usize, scheme_count: usize },
}

impl fmt::Display for GradientColourMapError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::ScoreOutsideCache {
                score,
                max_iterations,
            } => {
                write!(
                    f,
                    "score {} exceeds the {} iterations the gradient cache was built for",
                    score, max_iterations
                )
            }
            Self::SchemeOutsideCache {
                scheme,
                scheme_count,
            } => {
                write!(
                    f,
                    "scheme {} is not one of the {} cached schemes",
                    scheme, scheme_count
                )
            }
        }
    }
}

impl Error for GradientColourMapError {}

/// Colours escaped samples from a cache snapshot, bounded ones black.
#[derive(Debug, Clone)]
pub struct GradientColourMap {
    cache: Arc<GradientCache>,
    kind: GradientKind,
}

impl GradientColourMap {
    #[must_use]
    pub fn new(cache: Arc<GradientCache>, kind: GradientKind) -> Self {
        Self { cache, kind }
    }

    #[must_use]
    pub fn kind(&self) -> GradientKind {
        self.kind
    }

    pub fn colour_of(&self, result: EvaluationResult) -> Result<Colour, GradientColourMapError> {
        if !result.escaped {
            return Ok(Colour::default());
        }

        let scheme = self.kind.index();
        if scheme >= self.cache.scheme_count() {
            return Err(GradientColourMapError::SchemeOutsideCache {
                scheme,
                scheme_count: self.cache.scheme_count(),
            });
        }

        self.cache
            .get(scheme, result.score)
            .map(|rgba| rgba.to_colour())
            .ok_or(GradientColourMapError::ScoreOutsideCache {
                score: result.score,
                max_iterations: self.cache.max_iterations(),
            })
    }
}

impl ColourMap<EvaluationResult> for GradientColourMap {
    fn map(&self, value: EvaluationResult) -> Result<Colour, Box<dyn Error>> {
        Ok(self.colour_of(value)?)
    }

    fn display_name(&self) -> &str {
        self.kind.display_name()
    }
}
