use rand::Rng;

use crate::core::actions::cancellation::{CANCEL_CHECK_INTERVAL_PIXELS, CancelToken, Cancelled};
use crate::core::actions::generate_pixel_buffer::generate_pixel_buffer::GeneratePixelBufferError;
use crate::core::actions::generate_pixel_buffer::ports::colour_map::ColourMap;
use crate::core::data::pixel_buffer::PixelBuffer;
use crate::core::data::point::Point;
use crate::core::fractals::algorithm::EscapeTimeAlgorithm;
use crate::core::fractals::escape::EvaluationResult;

/// Evaluates `count` uniformly random positions of the view and paints the
/// escaped ones into `pixel_buffer`, leaving everything else as it was.
///
/// Repeated calls on the same buffer accumulate detail. Returns how many
/// samples escaped.
pub fn generate_samples<CMap, R, C>(
    algorithm: &EscapeTimeAlgorithm,
    mapper: &CMap,
    count: u32,
    rng: &mut R,
    pixel_buffer: &mut PixelBuffer,
    cancel: &C,
) -> Result<u32, GeneratePixelBufferError>
where
    CMap: ColourMap<EvaluationResult>,
    R: Rng + ?Sized,
    C: CancelToken,
{
    let pixel_rect = pixel_buffer.pixel_rect();
    let width = f64::from(pixel_rect.width());
    let height = f64::from(pixel_rect.height());
    let origin = pixel_rect.top_left();
    let last_column = pixel_rect.width() as i32 - 1;
    let last_row = pixel_rect.height() as i32 - 1;
    let mut escaped = 0;

    for i in 0..count {
        if i as usize % CANCEL_CHECK_INTERVAL_PIXELS == 0 && cancel.is_cancelled() {
            return Err(GeneratePixelBufferError::Cancelled(Cancelled));
        }

        let fx: f64 = rng.random_range(0.0..1.0);
        let fy: f64 = rng.random_range(0.0..1.0);

        let result = algorithm.compute_fraction(fx, fy);
        if !result.escaped {
            continue;
        }

        let colour = mapper.map(result).map_err(GeneratePixelBufferError::ColourMap)?;
        let pixel = Point {
            x: origin.x + ((fx * width) as i32).min(last_column),
            y: origin.y + ((fy * height) as i32).min(last_row),
        };

        pixel_buffer.set_pixel(pixel, colour)?;
        escaped += 1;
    }

    Ok(escaped)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::actions::cancellation::{CancelFlag, NeverCancel};
    use crate::core::data::colour::Colour;
    use crate::core::data::complex::Complex;
    use crate::core::data::complex_rect::ComplexRect;
    use crate::core::data::pixel_rect::PixelRect;
    use crate::core::fractals::variant::FractalVariant;
    use rand::SeedableRng;
    use rand::rngs::StdRng;
    use std::error::Error;

    const RED: Colour = Colour { r: 255, g: 0, b: 0 };

    struct Red;

    impl ColourMap<EvaluationResult> for Red {
        fn map(&self, _: EvaluationResult) -> Result<Colour, Box<dyn Error>> {
            Ok(RED)
        }

        fn display_name(&self) -> &str {
            "Red"
        }
    }

    fn algorithm(complex_rect: ComplexRect) -> EscapeTimeAlgorithm {
        EscapeTimeAlgorithm::new(
            PixelRect::from_size(32, 24).unwrap(),
            complex_rect,
            FractalVariant::Mandelbrot,
            Complex::ZERO,
            2.0,
            64,
        )
        .unwrap()
    }

    fn classic_view() -> ComplexRect {
        ComplexRect::new(Complex::new(-2.0, -1.0), Complex::new(1.0, 1.0)).unwrap()
    }

    fn painted(pixel_buffer: &PixelBuffer) -> usize {
        pixel_buffer
            .buffer()
            .chunks_exact(3)
            .filter(|rgb| *rgb != [0, 0, 0])
            .count()
    }

    #[test]
    fn test_same_seed_gives_same_frame() {
        let algorithm = algorithm(classic_view());
        let mut first = PixelBuffer::new(algorithm.pixel_rect());
        let mut second = PixelBuffer::new(algorithm.pixel_rect());

        let first_count =
            generate_samples(&algorithm, &Red, 2000, &mut StdRng::seed_from_u64(7), &mut first, &NeverCancel)
                .unwrap();
        let second_count =
            generate_samples(&algorithm, &Red, 2000, &mut StdRng::seed_from_u64(7), &mut second, &NeverCancel)
                .unwrap();

        assert_eq!(first_count, second_count);
        assert_eq!(first, second);
    }

    #[test]
    fn test_view_outside_threshold_paints_every_sample() {
        // Every sample of this view already has a magnitude above 2
        let far_away = ComplexRect::new(Complex::new(10.0, 10.0), Complex::new(11.0, 11.0)).unwrap();
        let algorithm = algorithm(far_away);
        let mut pixel_buffer = PixelBuffer::new(algorithm.pixel_rect());

        let escaped = generate_samples(
            &algorithm,
            &Red,
            500,
            &mut StdRng::seed_from_u64(1),
            &mut pixel_buffer,
            &NeverCancel,
        )
        .unwrap();

        assert_eq!(escaped, 500);
        assert!(painted(&pixel_buffer) > 0);
        assert!(painted(&pixel_buffer) <= 500);
    }

    #[test]
    fn test_view_inside_the_set_paints_nothing() {
        let inside = ComplexRect::new(Complex::new(-0.1, -0.1), Complex::new(0.1, 0.1)).unwrap();
        let algorithm = algorithm(inside);
        let mut pixel_buffer = PixelBuffer::new(algorithm.pixel_rect());

        let escaped = generate_samples(
            &algorithm,
            &Red,
            500,
            &mut StdRng::seed_from_u64(2),
            &mut pixel_buffer,
            &NeverCancel,
        )
        .unwrap();

        assert_eq!(escaped, 0);
        assert_eq!(pixel_buffer, PixelBuffer::new(algorithm.pixel_rect()));
    }

    #[test]
    fn test_samples_accumulate_across_calls() {
        let algorithm = algorithm(classic_view());
        let mut pixel_buffer = PixelBuffer::new(algorithm.pixel_rect());
        let mut rng = StdRng::seed_from_u64(3);

        generate_samples(&algorithm, &Red, 200, &mut rng, &mut pixel_buffer, &NeverCancel).unwrap();
        let after_first = painted(&pixel_buffer);
        generate_samples(&algorithm, &Red, 2000, &mut rng, &mut pixel_buffer, &NeverCancel).unwrap();

        assert!(painted(&pixel_buffer) >= after_first);
    }

    #[test]
    fn test_zero_samples_leave_buffer_untouched() {
        let algorithm = algorithm(classic_view());
        let mut pixel_buffer = PixelBuffer::new(algorithm.pixel_rect());

        let escaped = generate_samples(
            &algorithm,
            &Red,
            0,
            &mut StdRng::seed_from_u64(4),
            &mut pixel_buffer,
            &NeverCancel,
        )
        .unwrap();

        assert_eq!(escaped, 0);
        assert_eq!(painted(&pixel_buffer), 0);
    }

    #[test]
    fn test_cancelled_token_stops_sampling() {
        let algorithm = algorithm(classic_view());
        let mut pixel_buffer = PixelBuffer::new(algorithm.pixel_rect());
        let flag = CancelFlag::new();
        flag.cancel();

        let result = generate_samples(
            &algorithm,
            &Red,
            100,
            &mut StdRng::seed_from_u64(5),
            &mut pixel_buffer,
            &flag,
        );

        assert!(matches!(result, Err(GeneratePixelBufferError::Cancelled(_))));
    }
}
