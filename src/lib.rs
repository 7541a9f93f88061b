mod controllers;
mod core;
mod presenters;

pub use controllers::cli::render::{
    CLI_MAX_ITERATIONS, CliRenderController, DEFAULT_HEIGHT, DEFAULT_WIDTH, JULIA_PARAMETER,
    variant_config,
};
pub use controllers::explorer::command::ExplorerCommand;
pub use controllers::explorer::config::{ExplorerConfig, RenderMode};
pub use controllers::explorer::session::{
    ExplorerSession, MAX_ITERATIONS_LIMIT, RenderFrameError, SessionError,
};
pub use controllers::ports::file_presenter::FilePresenterPort;
pub use presenters::file::ppm::PpmFilePresenter;

pub use crate::core::actions::cancellation::{
    CANCEL_CHECK_INTERVAL_PIXELS, CancelFlag, CancelToken, Cancelled, NeverCancel,
};
pub use crate::core::actions::generate_fractal::generate_fractal_parallel_rayon::{
    GenerateFractalError, generate_fractal_parallel_rayon, generate_fractal_parallel_rayon_cancelable,
};
pub use crate::core::actions::generate_fractal::generate_fractal_serial::generate_fractal_serial;
pub use crate::core::actions::generate_fractal::ports::fractal_algorithm::FractalAlgorithm;
pub use crate::core::actions::generate_pixel_buffer::generate_pixel_buffer::{
    GeneratePixelBufferError, generate_pixel_buffer, generate_pixel_buffer_cancelable,
};
pub use crate::core::actions::generate_pixel_buffer::ports::colour_map::ColourMap;
pub use crate::core::actions::generate_samples::generate_samples;
pub use crate::core::data::colour::{Colour, Rgba};
pub use crate::core::data::complex::Complex;
pub use crate::core::data::complex_rect::{ComplexRect, ComplexRectError, PanDirection};
pub use crate::core::data::pixel_buffer::{PixelBuffer, PixelBufferError};
pub use crate::core::data::pixel_rect::{PixelRect, PixelRectError};
pub use crate::core::data::point::Point;
pub use crate::core::fractals::algorithm::{EscapeTimeAlgorithm, EscapeTimeAlgorithmError};
pub use crate::core::fractals::convergence::converges_within;
pub use crate::core::fractals::escape::{EvaluationResult, evaluate, evaluate_rule};
pub use crate::core::fractals::rules::{
    BurningShipRule, CubicJuliaRule, Family, FractalRule, MandelbrotRule, Orbit, QuadraticJuliaRule,
    RuleRegistry,
};
pub use crate::core::fractals::variant::FractalVariant;
pub use crate::core::gradients::cache::{GradientCache, GradientCacheError, SharedGradientCache};
pub use crate::core::gradients::colour_map::{GradientColourMap, GradientColourMapError};
pub use crate::core::gradients::gradient::{ControlPoint, Gradient, GradientError};
pub use crate::core::gradients::presets::{GradientKind, all_presets};
pub use crate::core::util::pixel_to_complex_coords::{
    PixelToComplexCoordsError, fraction_to_complex_coords, pixel_to_complex_coords,
};
