use rand::SeedableRng;
use rand::rngs::StdRng;
use std::error::Error;
use std::fmt;
use std::sync::Arc;
use std::time::Instant;

use crate::controllers::explorer::command::ExplorerCommand;
use crate::controllers::explorer::config::{ExplorerConfig, RenderMode};
use crate::core::actions::cancellation::{CancelToken, Cancelled};
use crate::core::actions::generate_fractal::generate_fractal_parallel_rayon::{
    GenerateFractalError, generate_fractal_parallel_rayon_cancelable,
};
use crate::core::actions::generate_pixel_buffer::generate_pixel_buffer::{
    GeneratePixelBufferError, generate_pixel_buffer_cancelable,
};
use crate::core::actions::generate_samples::generate_samples;
use crate::core::data::complex::Complex;
use crate::core::data::complex_rect::{ComplexRect, ComplexRectError, PanDirection};
use crate::core::data::pixel_buffer::PixelBuffer;
use crate::core::data::pixel_rect::PixelRect;
use crate::core::fractals::algorithm::{EscapeTimeAlgorithm, EscapeTimeAlgorithmError};
use crate::core::fractals::variant::FractalVariant;
use crate::core::gradients::cache::{GradientCache, GradientCacheError, SharedGradientCache};
use crate::core::gradients::colour_map::GradientColourMap;
use crate::core::gradients::gradient::Gradient;
use crate::core::gradients::presets::{GradientKind, all_presets};
use crate::core::util::pixel_to_complex_coords::PixelToComplexCoordsError;

/// Deepest iteration budget a session will double up to.
pub const MAX_ITERATIONS_LIMIT: u32 = 1 << 16;

#[derive(Debug, Clone, PartialEq)]
pub enum SessionError {
    ZeroMaxIterations,
    IterationLimit { requested: u64, limit: u32 },
    InvalidView(ComplexRectError),
    GradientCache(GradientCacheError),
}

impl fmt::Display for SessionError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::ZeroMaxIterations => write!(f, "maximum iterations must be greater than zero"),
            Self::IterationLimit { requested, limit } => {
                write!(f, "{} iterations exceeds the limit of {}", requested, limit)
            }
            Self::InvalidView(err) => write!(f, "invalid view: {}", err),
            Self::GradientCache(err) => write!(f, "gradient cache: {}", err),
        }
    }
}

impl Error for SessionError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::InvalidView(err) => Some(err),
            Self::GradientCache(err) => Some(err),
            _ => None,
        }
    }
}

impl From<ComplexRectError> for SessionError {
    fn from(err: ComplexRectError) -> Self {
        Self::InvalidView(err)
    }
}

impl From<GradientCacheError> for SessionError {
    fn from(err: GradientCacheError) -> Self {
        Self::GradientCache(err)
    }
}

#[derive(Debug)]
pub enum RenderFrameError {
    Cancelled(Cancelled),
    Algorithm(EscapeTimeAlgorithmError),
    Coordinates(PixelToComplexCoordsError),
    PixelBuffer(GeneratePixelBufferError),
}

impl fmt::Display for RenderFrameError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Cancelled(c) => write!(f, "{}", c),
            Self::Algorithm(err) => write!(f, "algorithm error: {}", err),
            Self::Coordinates(err) => write!(f, "coordinate error: {}", err),
            Self::PixelBuffer(err) => write!(f, "{}", err),
        }
    }
}

impl Error for RenderFrameError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Cancelled(c) => Some(c),
            Self::Algorithm(err) => Some(err),
            Self::Coordinates(err) => Some(err),
            Self::PixelBuffer(err) => Some(err),
        }
    }
}

impl From<EscapeTimeAlgorithmError> for RenderFrameError {
    fn from(err: EscapeTimeAlgorithmError) -> Self {
        Self::Algorithm(err)
    }
}

impl From<GenerateFractalError<PixelToComplexCoordsError>> for RenderFrameError {
    fn from(err: GenerateFractalError<PixelToComplexCoordsError>) -> Self {
        match err {
            GenerateFractalError::Cancelled(c) => Self::Cancelled(c),
            GenerateFractalError::Algorithm(err) => Self::Coordinates(err),
        }
    }
}

impl From<GeneratePixelBufferError> for RenderFrameError {
    fn from(err: GeneratePixelBufferError) -> Self {
        match err {
            GeneratePixelBufferError::Cancelled(c) => Self::Cancelled(c),
            other => Self::PixelBuffer(other),
        }
    }
}

/// Explorer state plus the gradient cache that matches it.
///
/// Commands change the state; [`render_frame`](Self::render_frame) draws it.
/// Whenever the iteration depth or palette changes a new cache is built and
/// published before the command returns, so a frame never sees scores the
/// cache does not cover.
#[derive(Debug)]
pub struct ExplorerSession {
    view: ComplexRect,
    start: Complex,
    variant: FractalVariant,
    gradient: GradientKind,
    threshold: f64,
    max_iterations: u32,
    band_size: f64,
    sampling_resolution: u32,
    speed: f64,
    zoom_factor: f64,
    render_mode: RenderMode,
    gradients: Vec<Gradient>,
    cache: SharedGradientCache,
    sample_frame: Option<PixelBuffer>,
    rng: StdRng,
}

impl ExplorerSession {
    pub fn new(config: ExplorerConfig) -> Result<Self, SessionError> {
        Self::with_rng(config, StdRng::from_os_rng())
    }

    /// A session whose sampled frames are reproducible.
    pub fn with_seed(config: ExplorerConfig, seed: u64) -> Result<Self, SessionError> {
        Self::with_rng(config, StdRng::seed_from_u64(seed))
    }

    fn with_rng(config: ExplorerConfig, rng: StdRng) -> Result<Self, SessionError> {
        if config.max_iterations == 0 {
            return Err(SessionError::ZeroMaxIterations);
        }
        check_iteration_limit(u64::from(config.max_iterations))?;

        let gradients = all_presets();
        let cache = GradientCache::build(&gradients, config.max_iterations, config.band_size)?;

        log::debug!(
            "New explorer session: {} over {:?}, {} iterations",
            config.variant,
            config.view,
            config.max_iterations
        );

        Ok(Self {
            view: config.view,
            start: config.start,
            variant: config.variant,
            gradient: config.gradient,
            threshold: config.threshold,
            max_iterations: config.max_iterations,
            band_size: config.band_size,
            sampling_resolution: config.sampling_resolution,
            speed: config.speed,
            zoom_factor: config.zoom_factor,
            render_mode: config.render_mode,
            gradients,
            cache: SharedGradientCache::new(cache),
            sample_frame: None,
            rng,
        })
    }

    /// Applies one command. On error the session is left unchanged.
    pub fn apply(&mut self, command: ExplorerCommand) -> Result<(), SessionError> {
        match command {
            ExplorerCommand::Pan(direction) => {
                self.view = self.view.pan(direction, self.speed);
            }
            ExplorerCommand::ZoomIn => {
                self.view = self.view.zoom(self.zoom_factor)?;
            }
            ExplorerCommand::ZoomOut => {
                self.view = self.view.zoom(1.0 / self.zoom_factor)?;
            }
            ExplorerCommand::NextScheme => {
                // Same gradients and depth, so the table is unchanged; this only republishes
                self.cache.rebuild(&self.gradients, self.max_iterations, self.band_size)?;
                self.gradient = self.gradient.next();
            }
            ExplorerCommand::NextVariant => {
                self.variant = self.variant.next();
            }
            ExplorerCommand::DoubleIterations => {
                let doubled = u64::from(self.max_iterations) * 2;
                check_iteration_limit(doubled)?;
                self.set_max_iterations(doubled as u32)?;
            }
            ExplorerCommand::HalveIterations => {
                let halved = self.max_iterations / 2;
                if halved == 0 {
                    return Err(SessionError::ZeroMaxIterations);
                }
                self.set_max_iterations(halved)?;
            }
            ExplorerCommand::NudgeStart(direction) => {
                self.start += match direction {
                    PanDirection::Up => Complex::new(0.0, self.speed),
                    PanDirection::Down => Complex::new(0.0, -self.speed),
                    PanDirection::Left => Complex::new(-self.speed, 0.0),
                    PanDirection::Right => Complex::new(self.speed, 0.0),
                };
            }
            ExplorerCommand::ResetStart => {
                self.start = Complex::ZERO;
            }
            ExplorerCommand::FasterSpeed => {
                self.speed *= 2.0;
            }
            ExplorerCommand::SlowerSpeed => {
                self.speed /= 2.0;
            }
            ExplorerCommand::MoreSamples => {
                self.sampling_resolution = self.sampling_resolution.saturating_mul(2);
            }
            ExplorerCommand::FewerSamples => {
                self.sampling_resolution /= 2;
            }
            ExplorerCommand::ToggleRenderMode => {
                self.render_mode = self.render_mode.toggled();
            }
        }

        if command.invalidates_frame() {
            self.sample_frame = None;
        }

        log::debug!(
            "Applied {:?}: {} with {} at {} iterations, start {}",
            command,
            self.variant,
            self.gradient,
            self.max_iterations,
            self.start
        );

        Ok(())
    }

    fn set_max_iterations(&mut self, max_iterations: u32) -> Result<(), SessionError> {
        self.cache.rebuild(&self.gradients, max_iterations, self.band_size)?;
        self.max_iterations = max_iterations;

        Ok(())
    }

    /// Draws the current state into a frame of `pixel_rect`.
    ///
    /// In [`RenderMode::Sampled`] each call adds `sampling_resolution` samples
    /// to the frame left by the previous call, as long as no command changed
    /// the picture and the frame size is the same.
    pub fn render_frame<C: CancelToken>(
        &mut self,
        pixel_rect: PixelRect,
        cancel: &C,
    ) -> Result<PixelBuffer, RenderFrameError> {
        let start_time = Instant::now();
        let algorithm = EscapeTimeAlgorithm::new(
            pixel_rect,
            self.view,
            self.variant,
            self.start,
            self.threshold,
            self.max_iterations,
        )?;
        let colour_map = GradientColourMap::new(self.cache.snapshot(), self.gradient);

        let pixel_buffer = match self.render_mode {
            RenderMode::FullScan => {
                let results = generate_fractal_parallel_rayon_cancelable(pixel_rect, &algorithm, cancel)?;

                if cancel.is_cancelled() {
                    return Err(RenderFrameError::Cancelled(Cancelled));
                }

                generate_pixel_buffer_cancelable(results, &colour_map, pixel_rect, cancel)?
            }
            RenderMode::Sampled => {
                let mut frame = match self.sample_frame.take() {
                    Some(frame) if frame.pixel_rect() == pixel_rect => frame,
                    _ => PixelBuffer::new(pixel_rect),
                };

                let sampled = generate_samples(
                    &algorithm,
                    &colour_map,
                    self.sampling_resolution,
                    &mut self.rng,
                    &mut frame,
                    cancel,
                );
                // The accumulated frame survives an abandoned pass
                self.sample_frame = Some(frame.clone());

                let escaped = sampled?;
                log::trace!("{} of {} samples escaped", escaped, self.sampling_resolution);

                frame
            }
        };

        log::debug!(
            "Rendered {} {}x{} frame ({:?}) in {:?}",
            self.variant,
            pixel_rect.width(),
            pixel_rect.height(),
            self.render_mode,
            start_time.elapsed()
        );

        Ok(pixel_buffer)
    }

    #[must_use]
    pub fn view(&self) -> ComplexRect {
        self.view
    }

    #[must_use]
    pub fn start(&self) -> Complex {
        self.start
    }

    #[must_use]
    pub fn variant(&self) -> FractalVariant {
        self.variant
    }

    #[must_use]
    pub fn gradient(&self) -> GradientKind {
        self.gradient
    }

    #[must_use]
    pub fn max_iterations(&self) -> u32 {
        self.max_iterations
    }

    #[must_use]
    pub fn sampling_resolution(&self) -> u32 {
        self.sampling_resolution
    }

    #[must_use]
    pub fn speed(&self) -> f64 {
        self.speed
    }

    #[must_use]
    pub fn render_mode(&self) -> RenderMode {
        self.render_mode
    }

    /// The cache frames are currently coloured from.
    #[must_use]
    pub fn cache(&self) -> Arc<GradientCache> {
        self.cache.snapshot()
    }
}

fn check_iteration_limit(requested: u64) -> Result<(), SessionError> {
    if requested > u64::from(MAX_ITERATIONS_LIMIT) {
        return Err(SessionError::IterationLimit {
            requested,
            limit: MAX_ITERATIONS_LIMIT,
        });
    }

    Ok(())
}
