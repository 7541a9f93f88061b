use crate::core::fractals::rules::{
    BurningShipRule, CubicJuliaRule, Family, FractalRule, MandelbrotRule, QuadraticJuliaRule,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum FractalVariant {
    #[default]
    Mandelbrot,
    BurningShip,
    JuliaQuadratic,
    JuliaCubic,
}

impl FractalVariant {
    pub const ALL: &'static [Self] = &[
        Self::Mandelbrot,
        Self::BurningShip,
        Self::JuliaQuadratic,
        Self::JuliaCubic,
    ];

    /// Maps an unbounded selector knob onto a variant, modulo 4.
    #[must_use]
    pub const fn from_selector(selector: u32) -> Self {
        match selector % 4 {
            0 => Self::Mandelbrot,
            1 => Self::BurningShip,
            2 => Self::JuliaQuadratic,
            _ => Self::JuliaCubic,
        }
    }

    #[must_use]
    pub const fn selector(self) -> u32 {
        match self {
            Self::Mandelbrot => 0,
            Self::BurningShip => 1,
            Self::JuliaQuadratic => 2,
            Self::JuliaCubic => 3,
        }
    }

    #[must_use]
    pub const fn next(self) -> Self {
        Self::from_selector(self.selector() + 1)
    }

    #[must_use]
    pub const fn display_name(self) -> &'static str {
        match self {
            Self::Mandelbrot => "Mandelbrot",
            Self::BurningShip => "Burning ship",
            Self::JuliaQuadratic => "Julia z^2 + c",
            Self::JuliaCubic => "Julia z^3 + c",
        }
    }

    /// Lower-case identifier used for output file names.
    #[must_use]
    pub const fn slug(self) -> &'static str {
        match self {
            Self::Mandelbrot => "mandelbrot",
            Self::BurningShip => "burning_ship",
            Self::JuliaQuadratic => "julia_quadratic",
            Self::JuliaCubic => "julia_cubic",
        }
    }

    #[must_use]
    pub fn rule(self) -> &'static dyn FractalRule {
        match self {
            Self::Mandelbrot => &MandelbrotRule,
            Self::BurningShip => &BurningShipRule,
            Self::JuliaQuadratic => &QuadraticJuliaRule,
            Self::JuliaCubic => &CubicJuliaRule,
        }
    }

    #[must_use]
    pub fn family(self) -> Family {
        self.rule().family()
    }
}

impl std::fmt::Display for FractalVariant {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str((*self).display_name())
    }
}
