use std::ops::{Add, Mul, Sub};

/// 8-bit RGB colour as written into a [`PixelBuffer`](crate::core::data::pixel_buffer::PixelBuffer).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Colour {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

/// Floating point colour with every channel nominally in `[0, 1]`.
///
/// Gradients interpolate in this raw channel space. Channels are not clamped
/// until the colour is quantised with [`Rgba::to_colour`].
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Rgba {
    pub r: f32,
    pub g: f32,
    pub b: f32,
    pub a: f32,
}

impl Rgba {
    pub const BLACK: Self = Self::rgb(0.0, 0.0, 0.0);
    pub const WHITE: Self = Self::rgb(1.0, 1.0, 1.0);

    #[must_use]
    pub const fn new(r: f32, g: f32, b: f32, a: f32) -> Self {
        Self { r, g, b, a }
    }

    /// Opaque colour.
    #[must_use]
    pub const fn rgb(r: f32, g: f32, b: f32) -> Self {
        Self { r, g, b, a: 1.0 }
    }

    /// Alpha is dropped; the renderer draws opaque points.
    #[must_use]
    pub fn to_colour(self) -> Colour {
        Colour {
            r: quantise(self.r),
            g: quantise(self.g),
            b: quantise(self.b),
        }
    }
}

/// Out-of-range levels saturate, NaN reads as no intensity.
fn quantise(level: f32) -> u8 {
    if level.is_nan() {
        return 0;
    }

    (level.clamp(0.0, 1.0) * 255.0).round() as u8
}

impl Add for Rgba {
    type Output = Self;

    fn add(self, other: Self) -> Self {
        Self {
            r: self.r + other.r,
            g: self.g + other.g,
            b: self.b + other.b,
            a: self.a + other.a,
        }
    }
}

impl Sub for Rgba {
    type Output = Self;

    fn sub(self, other: Self) -> Self {
        Self {
            r: self.r - other.r,
            g: self.g - other.g,
            b: self.b - other.b,
            a: self.a - other.a,
        }
    }
}

impl Mul<f32> for Rgba {
    type Output = Self;

    fn mul(self, factor: f32) -> Self {
        Self {
            r: self.r * factor,
            g: self.g * factor,
            b: self.b * factor,
            a: self.a * factor,
        }
    }
}
