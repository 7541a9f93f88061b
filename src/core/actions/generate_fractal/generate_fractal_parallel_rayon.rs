use rayon::prelude::*;

use crate::core::actions::cancellation::{
    CANCEL_CHECK_INTERVAL_PIXELS, CancelToken, Cancelled, NeverCancel,
};
use crate::core::actions::generate_fractal::ports::fractal_algorithm::FractalAlgorithm;
use crate::core::data::pixel_rect::PixelRect;
use crate::core::data::point::Point;

/// Why a cancelable generation stopped early.
#[derive(Debug, PartialEq)]
pub enum GenerateFractalError<E> {
    Cancelled(Cancelled),
    Algorithm(E),
}

impl<E: std::fmt::Display> std::fmt::Display for GenerateFractalError<E> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Cancelled(c) => write!(f, "{}", c),
            Self::Algorithm(e) => write!(f, "algorithm error: {}", e),
        }
    }
}

impl<E: std::error::Error + 'static> std::error::Error for GenerateFractalError<E> {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Cancelled(c) => Some(c),
            Self::Algorithm(e) => Some(e),
        }
    }
}

/// Evaluates every pixel of `pixel_rect` across the rayon pool. The output is
/// row-major, identical to [`generate_fractal_serial`].
///
/// [`generate_fractal_serial`]: super::generate_fractal_serial::generate_fractal_serial
pub fn generate_fractal_parallel_rayon<Alg>(
    pixel_rect: PixelRect,
    algorithm: &Alg,
) -> Result<Vec<Alg::Success>, Alg::Failure>
where
    Alg: FractalAlgorithm + Sync,
    Alg::Success: Send,
    Alg::Failure: Send,
{
    generate_fractal_parallel_rayon_cancelable(pixel_rect, algorithm, &NeverCancel).map_err(
        |err| match err {
            GenerateFractalError::Algorithm(alg_err) => alg_err,
            GenerateFractalError::Cancelled(_) => {
                unreachable!("NeverCancel token should never signal cancellation")
            }
        },
    )
}

/// Parallel generation that gives up once `cancel` fires.
///
/// Rows are the unit of parallel work. Each row polls the token before its
/// first pixel and then every [`CANCEL_CHECK_INTERVAL_PIXELS`] pixels.
pub fn generate_fractal_parallel_rayon_cancelable<Alg, C>(
    pixel_rect: PixelRect,
    algorithm: &Alg,
    cancel: &C,
) -> Result<Vec<Alg::Success>, GenerateFractalError<Alg::Failure>>
where
    Alg: FractalAlgorithm + Sync,
    Alg::Success: Send,
    Alg::Failure: Send,
    C: CancelToken,
{
    let x_start = pixel_rect.top_left().x;
    let x_end = pixel_rect.bottom_right().x;
    let row_width = pixel_rect.width() as usize;

    let rows: Vec<Vec<Alg::Success>> = (pixel_rect.top_left().y..=pixel_rect.bottom_right().y)
        .into_par_iter()
        .map(|y| {
            let mut row = Vec::with_capacity(row_width);

            for (i, x) in (x_start..=x_end).enumerate() {
                if i % CANCEL_CHECK_INTERVAL_PIXELS == 0 && cancel.is_cancelled() {
                    return Err(GenerateFractalError::Cancelled(Cancelled));
                }

                row.push(
                    algorithm
                        .compute(Point { x, y })
                        .map_err(GenerateFractalError::Algorithm)?,
                );
            }

            Ok(row)
        })
        .collect::<Result<_, _>>()?;

    let mut results = Vec::with_capacity(pixel_rect.size() as usize);
    for row in rows {
        results.extend(row);
    }

    Ok(results)
}
