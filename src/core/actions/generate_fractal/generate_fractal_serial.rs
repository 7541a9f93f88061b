use crate::core::actions::generate_fractal::ports::fractal_algorithm::FractalAlgorithm;
use crate::core::data::pixel_rect::PixelRect;

/// Evaluates every pixel of `pixel_rect` on the calling thread, row-major.
pub fn generate_fractal_serial<Alg: FractalAlgorithm>(
    pixel_rect: PixelRect,
    algorithm: &Alg,
) -> Result<Vec<Alg::Success>, Alg::Failure> {
    pixel_rect
        .points()
        .map(|pixel| algorithm.compute(pixel))
        .collect()
}
