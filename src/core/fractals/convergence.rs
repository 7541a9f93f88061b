use crate::core::data::complex::Complex;

/// Follows the orbit of `map` from `start` and reports whether it falls under
/// `threshold`, compared against the *squared* magnitude, before `depth` steps
/// run out.
///
/// On convergence the second value is the remaining depth, as with escape scores.
/// This is a rough probe for attracting cycles, not a proof of membership.
pub fn converges_within<F>(map: F, start: Complex, threshold: f64, depth: u32) -> (bool, u32)
where
    F: Fn(Complex) -> Complex,
{
    let mut z = start;
    let mut remaining = depth;

    loop {
        if z.magnitude_squared() < threshold {
            return (true, remaining);
        }
        if remaining == 0 {
            return (false, 0);
        }

        z = map(z);
        remaining -= 1;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_start_already_under_threshold() {
        let result = converges_within(|z| z * z, Complex::new(0.1, 0.0), 0.5, 10);

        assert_eq!(result, (true, 10));
    }

    #[test]
    fn test_contracting_map_converges() {
        // 0.9 -> 0.81 -> 0.6561 -> 0.43046721, squared 0.185
        let result = converges_within(|z| z * z, Complex::new(0.9, 0.0), 0.25, 10);

        assert_eq!(result, (true, 7));
    }

    #[test]
    fn test_diverging_map_runs_out_of_depth() {
        let result = converges_within(|z| z * z, Complex::new(1.5, 0.0), 0.25, 8);

        assert_eq!(result, (false, 0));
    }

    #[test]
    fn test_zero_depth_only_checks_the_start() {
        assert_eq!(converges_within(|z| z, Complex::new(3.0, 4.0), 1.0, 0), (false, 0));
        assert_eq!(converges_within(|z| z, Complex::ZERO, 1.0, 0), (true, 0));
    }

    #[test]
    fn test_map_can_capture_a_parameter() {
        let c = Complex::new(-1.0, 0.0);
        // 0 -> -1 -> 0 -> ...: the period-two cycle of z² - 1 passes through 0
        let result = converges_within(move |z| z * z + c, Complex::new(-1.0, 0.0), 0.01, 4);

        assert_eq!(result, (true, 3));
    }
}
