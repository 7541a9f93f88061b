use std::error::Error;
use std::path::{Path, PathBuf};
use std::time::Instant;

use crate::controllers::explorer::config::ExplorerConfig;
use crate::controllers::explorer::session::ExplorerSession;
use crate::controllers::ports::file_presenter::FilePresenterPort;
use crate::core::actions::cancellation::NeverCancel;
use crate::core::data::complex::Complex;
use crate::core::data::complex_rect::ComplexRect;
use crate::core::data::pixel_buffer::PixelBuffer;
use crate::core::data::pixel_rect::PixelRect;
use crate::core::fractals::rules::Family;
use crate::core::fractals::variant::FractalVariant;

pub const DEFAULT_WIDTH: u32 = 800;
pub const DEFAULT_HEIGHT: u32 = 600;
pub const CLI_MAX_ITERATIONS: u32 = 256;
pub const JULIA_PARAMETER: Complex = Complex::new(-0.7, 0.27);

fn julia_view() -> ComplexRect {
    ComplexRect::new(Complex::new(-1.6, -1.0), Complex::new(1.6, 1.0))
        .expect("julia view is valid")
}

/// Session settings used to render `variant` from the command line.
#[must_use]
pub fn variant_config(variant: FractalVariant) -> ExplorerConfig {
    let defaults = ExplorerConfig::default();

    match variant.family() {
        Family::Mandelbrot => ExplorerConfig {
            variant,
            max_iterations: CLI_MAX_ITERATIONS,
            ..defaults
        },
        Family::Julia => ExplorerConfig {
            variant,
            start: JULIA_PARAMETER,
            view: julia_view(),
            max_iterations: CLI_MAX_ITERATIONS,
            ..defaults
        },
    }
}

/// Renders every built-in variant and hands the frames to a file presenter.
pub struct CliRenderController<P: FilePresenterPort> {
    presenter: P,
    pixel_rect: PixelRect,
    frames: Vec<(FractalVariant, PixelBuffer)>,
}

impl<P: FilePresenterPort> CliRenderController<P> {
    pub fn new(presenter: P, width: u32, height: u32) -> Result<Self, Box<dyn Error>> {
        Ok(Self {
            presenter,
            pixel_rect: PixelRect::from_size(width, height)?,
            frames: Vec::new(),
        })
    }

    pub fn generate(&mut self) -> Result<(), Box<dyn Error>> {
        log::info!(
            "Rendering {} variants at {}x{}",
            FractalVariant::ALL.len(),
            self.pixel_rect.width(),
            self.pixel_rect.height()
        );

        self.frames.clear();

        for &variant in FractalVariant::ALL {
            let config = variant_config(variant);
            let mut session = ExplorerSession::new(config)?;

            let start = Instant::now();
            let frame = session.render_frame(self.pixel_rect, &NeverCancel)?;

            log::info!(
                "{}: {} iterations, {:?}",
                variant,
                config.max_iterations,
                start.elapsed()
            );

            self.frames.push((variant, frame));
        }

        Ok(())
    }

    #[must_use]
    pub fn frames(&self) -> &[(FractalVariant, PixelBuffer)] {
        &self.frames
    }

    /// Writes each generated frame to `<directory>/<variant slug>.ppm` and
    /// returns the paths written, in variant order.
    pub fn write(&self, directory: impl AsRef<Path>) -> std::io::Result<Vec<PathBuf>> {
        let mut written = Vec::with_capacity(self.frames.len());

        for (variant, frame) in &self.frames {
            let path = directory.as_ref().join(format!("{}.ppm", variant.slug()));

            self.presenter.present(frame, &path)?;
            log::info!("Wrote {}", path.display());

            written.push(path);
        }

        Ok(written)
    }
}
