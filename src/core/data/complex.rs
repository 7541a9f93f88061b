use std::fmt;
use std::ops::{Add, AddAssign, Div, DivAssign, Mul, MulAssign, Sub, SubAssign};

// implement Complex instead of using the num-complex trait for learning
#[derive(Debug, Copy, Clone, PartialEq, Default)]
pub struct Complex {
    pub real: f64,
    pub imag: f64,
}

impl Complex {
    pub const ZERO: Self = Self { real: 0.0, imag: 0.0 };

    #[must_use]
    pub const fn new(real: f64, imag: f64) -> Self {
        Self { real, imag }
    }

    #[must_use]
    pub fn magnitude_squared(&self) -> f64 {
        self.real * self.real + self.imag * self.imag
    }

    #[must_use]
    pub fn magnitude(&self) -> f64 {
        self.magnitude_squared().sqrt()
    }

    #[must_use]
    pub fn angle(&self) -> f64 {
        self.imag.atan2(self.real)
    }

    /// Folds the value into the first quadrant, as used by the Burning Ship rule.
    #[must_use]
    pub fn abs_components(&self) -> Self {
        Self {
            real: self.real.abs(),
            imag: self.imag.abs(),
        }
    }
}

impl From<f64> for Complex {
    fn from(real: f64) -> Self {
        Self { real, imag: 0.0 }
    }
}

impl fmt::Display for Complex {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} + {}i", self.real, self.imag)
    }
}

impl Add for Complex {
    type Output = Self;

    fn add(self, other: Self) -> Self {
        Self {
            real: self.real + other.real,
            imag: self.imag + other.imag,
        }
    }
}

impl Add<f64> for Complex {
    type Output = Self;

    fn add(self, other: f64) -> Self {
        Self {
            real: self.real + other,
            imag: self.imag,
        }
    }
}

impl Add<Complex> for f64 {
    type Output = Complex;

    fn add(self, other: Complex) -> Complex {
        other + self
    }
}

impl Sub for Complex {
    type Output = Self;

    fn sub(self, other: Self) -> Self {
        Self {
            real: self.real - other.real,
            imag: self.imag - other.imag,
        }
    }
}

impl Sub<f64> for Complex {
    type Output = Self;

    fn sub(self, other: f64) -> Self {
        Self {
            real: self.real - other,
            imag: self.imag,
        }
    }
}

impl Sub<Complex> for f64 {
    type Output = Complex;

    fn sub(self, other: Complex) -> Complex {
        Complex {
            real: self - other.real,
            imag: -other.imag,
        }
    }
}

impl Mul for Complex {
    type Output = Self;

    fn mul(self, other: Self) -> Self {
        Self {
            real: self.real * other.real - self.imag * other.imag,
            imag: self.real * other.imag + self.imag * other.real,
        }
    }
}

impl Mul<f64> for Complex {
    type Output = Self;

    fn mul(self, other: f64) -> Self {
        Self {
            real: self.real * other,
            imag: self.imag * other,
        }
    }
}

impl Mul<Complex> for f64 {
    type Output = Complex;

    fn mul(self, other: Complex) -> Complex {
        other * self
    }
}

impl Div<f64> for Complex {
    type Output = Self;

    fn div(self, other: f64) -> Self {
        Self {
            real: self.real / other,
            imag: self.imag / other,
        }
    }
}

/// `k / z`, computed as the reciprocal of `z` scaled by `k`.
///
/// A zero divisor yields IEEE special values rather than an error.
impl Div<Complex> for f64 {
    type Output = Complex;

    fn div(self, other: Complex) -> Complex {
        let denom = other.magnitude_squared();
        let reciprocal = Complex {
            real: other.real / denom,
            imag: -other.imag / denom,
        };

        reciprocal * self
    }
}

impl AddAssign for Complex {
    fn add_assign(&mut self, other: Self) {
        *self = *self + other;
    }
}

impl AddAssign<f64> for Complex {
    fn add_assign(&mut self, other: f64) {
        *self = *self + other;
    }
}

impl SubAssign for Complex {
    fn sub_assign(&mut self, other: Self) {
        *self = *self - other;
    }
}

impl SubAssign<f64> for Complex {
    fn sub_assign(&mut self, other: f64) {
        *self = *self - other;
    }
}

impl MulAssign for Complex {
    fn mul_assign(&mut self, other: Self) {
        *self = *self * other;
    }
}

impl MulAssign<f64> for Complex {
    fn mul_assign(&mut self, other: f64) {
        *self = *self * other;
    }
}

impl DivAssign<f64> for Complex {
    fn div_assign(&mut self, other: f64) {
        *self = *self / other;
    }
}

// Exact comparison against a pure real, no tolerance.
impl PartialEq<f64> for Complex {
    fn eq(&self, other: &f64) -> bool {
        self.real == *other && self.imag == 0.0
    }
}

impl PartialEq<Complex> for f64 {
    fn eq(&self, other: &Complex) -> bool {
        other == self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_magnitude_squared() {
        let c = Complex::new(3.0, 4.0);
        assert_eq!(c.magnitude_squared(), 25.0); // 3² + 4² = 25
    }

    #[test]
    fn test_magnitude_negative_real_and_imag() {
        let c = Complex::new(-3.0, -4.0);
        assert_eq!(c.magnitude(), 5.0);
    }

    #[test]
    fn test_magnitude_of_infinity_is_infinite() {
        let c = Complex::new(f64::INFINITY, 1.0);
        assert_eq!(c.magnitude(), f64::INFINITY);
        assert!(c.magnitude() >= 2.0);
    }

    #[test]
    fn test_angle() {
        assert_eq!(Complex::new(1.0, 0.0).angle(), 0.0);
        assert_eq!(Complex::new(0.0, 2.0).angle(), std::f64::consts::FRAC_PI_2);
        assert_eq!(Complex::new(-1.0, 0.0).angle(), std::f64::consts::PI);
    }

    #[test]
    fn test_from_real_has_zero_imag() {
        let c = Complex::from(2.5);
        assert_eq!(c, Complex::new(2.5, 0.0));
    }

    #[test]
    fn test_add_zero_is_identity() {
        let z = Complex::new(-1.25, 7.5);
        assert_eq!(z + Complex::ZERO, z);
        assert_eq!(z + 0.0, z);
    }

    #[test]
    fn test_mul_one_is_identity() {
        let z = Complex::new(-1.25, 7.5);
        assert_eq!(z * Complex::from(1.0), z);
        assert_eq!(z * 1.0, z);
    }

    #[test]
    fn test_add() {
        let result = Complex::new(1.0, 2.0) + Complex::new(-3.0, -7.0);
        assert_eq!(result.real, -2.0);
        assert_eq!(result.imag, -5.0);
    }

    #[test]
    fn test_sub_subtracts_both_parts() {
        let result = Complex::new(1.0, 2.0) - Complex::new(3.0, 5.0);
        assert_eq!(result, Complex::new(-2.0, -3.0));
    }

    #[test]
    fn test_scalar_on_the_left() {
        let z = Complex::new(2.0, 3.0);
        assert_eq!(1.0 + z, Complex::new(3.0, 3.0));
        assert_eq!(1.0 - z, Complex::new(-1.0, -3.0));
        assert_eq!(2.0 * z, Complex::new(4.0, 6.0));
    }

    #[test]
    fn test_mul() {
        // (1 + 2i) * (3 + 4i) = 3 + 4i + 6i + 8i² = 3 + 10i - 8 = -5 + 10i
        let result = Complex::new(1.0, 2.0) * Complex::new(3.0, 4.0);
        assert_eq!(result.real, -5.0);
        assert_eq!(result.imag, 10.0);
    }

    #[test]
    fn test_mul_conjugate_pair() {
        // (2 + 3i) * (1 - i) = 2 - 2i + 3i - 3i² = 5 + i
        let result = Complex::new(2.0, 3.0) * Complex::new(1.0, -1.0);
        assert_eq!(result, Complex::new(5.0, 1.0));
    }

    #[test]
    fn test_square() {
        // (2 + 3i)² = 4 + 12i + 9i² = 4 + 12i - 9 = -5 + 12i
        let c = Complex::new(2.0, 3.0);
        let result = c * c;
        assert_eq!(result.real, -5.0);
        assert_eq!(result.imag, 12.0);
    }

    #[test]
    fn test_div_by_scalar() {
        assert_eq!(Complex::new(4.0, -2.0) / 2.0, Complex::new(2.0, -1.0));
    }

    #[test]
    fn test_scalar_div_by_complex_uses_squared_magnitude() {
        // 2 / (1 + i) = 2(1 - i) / 2 = 1 - i
        let result = 2.0 / Complex::new(1.0, 1.0);
        assert_eq!(result, Complex::new(1.0, -1.0));

        // 1 / (3 + 4i) = (3 - 4i) / 25
        let result = 1.0 / Complex::new(3.0, 4.0);
        assert_eq!(result, Complex::new(0.12, -0.16));
    }

    #[test]
    fn test_scalar_div_by_zero_is_not_finite() {
        let result = 1.0 / Complex::ZERO;
        assert!(!result.real.is_finite());
    }

    #[test]
    fn test_compound_assignment() {
        let mut z = Complex::new(1.0, 1.0);
        z += Complex::new(1.0, 2.0);
        z -= 1.0;
        z *= Complex::new(0.0, 1.0);
        z /= 3.0;
        assert_eq!(z, Complex::new(-1.0, 1.0 / 3.0));
    }

    #[test]
    fn test_equality_with_real_requires_exact_zero_imag() {
        assert!(Complex::new(2.0, 0.0) == 2.0);
        assert!(2.0 == Complex::new(2.0, 0.0));
        assert!(Complex::new(2.0, 1e-300) != 2.0);
        assert!(Complex::new(2.0 + f64::EPSILON * 2.0, 0.0) != 2.0);
    }

    #[test]
    fn test_abs_components() {
        assert_eq!(Complex::new(-1.5, -2.0).abs_components(), Complex::new(1.5, 2.0));
    }

    #[test]
    fn test_display() {
        assert_eq!(Complex::new(1.5, -2.0).to_string(), "1.5 + -2i");
    }
}
