use std::sync::LazyLock;
use crate::core::data::colour::Rgba;
use crate::core::gradients::gradient::{ControlPoint, Gradient};

/// The built-in palettes, each meant to be cycled through many times across
/// the iteration range.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum GradientKind {
    #[default]
    Rainbow,
    Twilight,
    Cyanic,
    Blood,
    Noir,
}

impl GradientKind {
    pub const ALL: &'static [Self] = &[
        Self::Rainbow,
        Self::Twilight,
        Self::Cyanic,
        Self::Blood,
        Self::Noir,
    ];

    /// Wraps any scheme counter onto a palette.
    #[must_use]
    pub const fn from_index(index: usize) -> Self {
        Self::ALL[index % Self::ALL.len()]
    }

    #[must_use]
    pub const fn index(self) -> usize {
        match self {
            Self::Rainbow => 0,
            Self::Twilight => 1,
            Self::Cyanic => 2,
            Self::Blood => 3,
            Self::Noir => 4,
        }
    }

    #[must_use]
    pub const fn next(self) -> Self {
        Self::from_index(self.index() + 1)
    }

    #[must_use]
    pub const fn display_name(self) -> &'static str {
        match self {
            Self::Rainbow => "Rainbow",
            Self::Twilight => "Twilight",
            Self::Cyanic => "Cyanic",
            Self::Blood => "Blood",
            Self::Noir => "Noir",
        }
    }

    #[must_use]
    pub fn gradient(self) -> &'static Gradient {
        match self {
            Self::Rainbow => &*RAINBOW,
            Self::Twilight => &*TWILIGHT,
            Self::Cyanic => &*CYANIC,
            Self::Blood => &*BLOOD,
            Self::Noir => &*NOIR,
        }
    }
}

impl std::fmt::Display for GradientKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str((*self).display_name())
    }
}

/// Every preset, in [`GradientKind::ALL`] order. The scheme index of a
/// gradient cache built from this list is the preset's [`GradientKind::index`].
#[must_use]
pub fn all_presets() -> Vec<Gradient> {
    GradientKind::ALL
        .iter()
        .map(|kind| kind.gradient().clone())
        .collect()
}

/// Control points spread evenly over `[0, 1]`.
fn evenly_spaced(colours: &[Rgba]) -> Gradient {
    let last = (colours.len() - 1) as f64;
    let control_points = colours
        .iter()
        .enumerate()
        .map(|(i, colour)| ControlPoint::new(i as f64 / last, *colour))
        .collect();

    Gradient::new(control_points).expect("preset gradient is valid")
}

static RAINBOW: LazyLock<Gradient> = LazyLock::new(|| {
    evenly_spaced(&[
        Rgba::rgb(0.0, 0.0, 0.0),
        Rgba::rgb(1.0, 0.0, 0.0),
        Rgba::rgb(1.0, 1.0, 0.0),
        Rgba::rgb(0.0, 1.0, 0.0),
        Rgba::rgb(0.0, 1.0, 1.0),
        Rgba::rgb(0.0, 0.0, 1.0),
        Rgba::rgb(1.0, 0.0, 1.0),
        Rgba::rgb(1.0, 0.0, 0.0),
    ])
});

static TWILIGHT: LazyLock<Gradient> = LazyLock::new(|| {
    evenly_spaced(&[
        Rgba::rgb(0.1, 0.0, 0.3), // dark violet
        Rgba::rgb(0.5, 0.0, 0.8), // light violet
        Rgba::rgb(0.6, 0.6, 0.8), // light blue
        Rgba::rgb(0.8, 0.8, 0.8), // light grey
        Rgba::rgb(0.8, 0.4, 0.1), // light bronze
        Rgba::rgb(1.0, 0.5, 0.5), // pinkish bronze
        Rgba::rgb(0.1, 0.0, 0.3), // dark violet
    ])
});

static CYANIC: LazyLock<Gradient> = LazyLock::new(|| {
    evenly_spaced(&[
        Rgba::rgb(0.0, 0.0, 0.0),
        Rgba::rgb(0.0, 0.0, 1.0),
        Rgba::rgb(0.0, 1.0, 1.0),
        Rgba::rgb(1.0, 1.0, 1.0),
        Rgba::rgb(0.0, 1.0, 1.0),
        Rgba::rgb(0.0, 1.0, 0.0),
        Rgba::rgb(0.0, 0.0, 0.0),
    ])
});

static BLOOD: LazyLock<Gradient> = LazyLock::new(|| {
    evenly_spaced(&[
        Rgba::rgb(0.0, 0.0, 0.0),
        Rgba::rgb(0.4, 0.2, 0.0),
        Rgba::rgb(1.0, 1.0, 1.0),
        Rgba::rgb(0.0, 0.0, 0.0),
    ])
});

static NOIR: LazyLock<Gradient> = LazyLock::new(|| {
    evenly_spaced(&[
        Rgba::rgb(0.0, 0.0, 0.0),
        Rgba::rgb(0.4, 0.0, 0.0),
        Rgba::rgb(0.0, 0.0, 0.0),
        Rgba::rgb(1.0, 1.0, 1.0),
        Rgba::rgb(0.0, 0.0, 0.0),
        Rgba::rgb(1.0, 1.0, 1.0),
    ])
});

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn all_array_has_default_first() {
        assert_eq!(GradientKind::ALL.first(), Some(&GradientKind::default()));
    }

    #[test]
    fn from_index_wraps_modulo_five() {
        assert_eq!(GradientKind::from_index(0), GradientKind::Rainbow);
        assert_eq!(GradientKind::from_index(4), GradientKind::Noir);
        assert_eq!(GradientKind::from_index(5), GradientKind::Rainbow);
        assert_eq!(GradientKind::from_index(13), GradientKind::Blood);
    }

    #[test]
    fn index_round_trip_for_all_kinds() {
        for &kind in GradientKind::ALL {
            assert_eq!(GradientKind::from_index(kind.index()), kind);
        }
    }

    #[test]
    fn next_cycles_through_every_kind() {
        let mut kind = GradientKind::default();
        for &expected in GradientKind::ALL {
            assert_eq!(kind, expected);
            kind = kind.next();
        }

        assert_eq!(kind, GradientKind::default());
    }

    #[test]
    fn display_names_are_unique() {
        let names: Vec<&str> = GradientKind::ALL.iter().map(|k| k.display_name()).collect();
        for (i, name) in names.iter().enumerate() {
            for (j, other) in names.iter().enumerate() {
                if i != j {
                    assert_ne!(name, other, "Duplicate display name: {}", name);
                }
            }
        }
    }

    #[test]
    fn presets_start_at_zero_and_end_at_one() {
        for &kind in GradientKind::ALL {
            let points = kind.gradient().control_points();
            assert_eq!(points.first().map(|p| p.position), Some(0.0), "{kind}");
            assert_eq!(points.last().map(|p| p.position), Some(1.0), "{kind}");
        }
    }

    #[test]
    fn preset_sizes() {
        let sizes: Vec<usize> = GradientKind::ALL
            .iter()
            .map(|kind| kind.gradient().control_points().len())
            .collect();

        assert_eq!(sizes, vec![8, 7, 7, 4, 6]);
    }

    #[test]
    fn cyclic_presets_end_where_they_start() {
        for kind in [GradientKind::Twilight, GradientKind::Cyanic, GradientKind::Blood] {
            let points = kind.gradient().control_points();
            assert_eq!(points[0].colour, points[points.len() - 1].colour, "{kind}");
        }
    }

    #[test]
    fn rainbow_control_points_are_sevenths() {
        let gradient = GradientKind::Rainbow.gradient();

        assert_eq!(gradient.control_points()[3].position, 3.0 / 7.0);
        assert_eq!(gradient.map(1.0 / 7.0), Rgba::rgb(1.0, 0.0, 0.0));
    }

    #[test]
    fn all_presets_follow_kind_order() {
        let presets = all_presets();

        assert_eq!(presets.len(), GradientKind::ALL.len());
        for &kind in GradientKind::ALL {
            assert_eq!(&presets[kind.index()], kind.gradient());
        }
    }
}
