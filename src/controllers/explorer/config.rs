use crate::core::data::complex::Complex;
use crate::core::data::complex_rect::ComplexRect;
use crate::core::fractals::variant::FractalVariant;
use crate::core::gradients::presets::GradientKind;

pub const DEFAULT_THRESHOLD: f64 = 2.0;
pub const DEFAULT_MAX_ITERATIONS: u32 = 64;
pub const DEFAULT_BAND_SIZE: f64 = 100.0;
pub const DEFAULT_SAMPLING_RESOLUTION: u32 = 20_000;
pub const DEFAULT_SPEED: f64 = 0.08;
pub const DEFAULT_ZOOM_FACTOR: f64 = 0.75;

pub(crate) fn default_view() -> ComplexRect {
    ComplexRect::new(Complex::new(-2.0, -1.0), Complex::new(1.0, 1.0))
        .expect("default view is valid")
}

/// How a frame is produced.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RenderMode {
    /// Every pixel evaluated once.
    #[default]
    FullScan,
    /// A fixed number of random samples per frame, accumulated until the
    /// picture changes.
    Sampled,
}

impl RenderMode {
    #[must_use]
    pub const fn toggled(self) -> Self {
        match self {
            Self::FullScan => Self::Sampled,
            Self::Sampled => Self::FullScan,
        }
    }
}

/// Initial state of an [`ExplorerSession`](super::session::ExplorerSession).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ExplorerConfig {
    pub view: ComplexRect,
    pub start: Complex,
    pub variant: FractalVariant,
    pub gradient: GradientKind,
    pub threshold: f64,
    pub max_iterations: u32,
    pub band_size: f64,
    pub sampling_resolution: u32,
    pub speed: f64,
    pub zoom_factor: f64,
    pub render_mode: RenderMode,
}

impl Default for ExplorerConfig {
    fn default() -> Self {
        Self {
            view: default_view(),
            start: Complex::ZERO,
            variant: FractalVariant::default(),
            gradient: GradientKind::default(),
            threshold: DEFAULT_THRESHOLD,
            max_iterations: DEFAULT_MAX_ITERATIONS,
            band_size: DEFAULT_BAND_SIZE,
            sampling_resolution: DEFAULT_SAMPLING_RESOLUTION,
            speed: DEFAULT_SPEED,
            zoom_factor: DEFAULT_ZOOM_FACTOR,
            render_mode: RenderMode::default(),
        }
    }
}
