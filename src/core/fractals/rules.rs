use crate::core::data::complex::Complex;

/// Which of the two evaluation inputs a rule iterates.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Family {
    /// Iterates the starting point; the sample coordinate is the fixed parameter.
    Mandelbrot,
    /// Iterates the sample coordinate; the starting point is the fixed Julia parameter.
    Julia,
}

/// The two values carried through an escape-time loop.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Orbit {
    pub iterated: Complex,
    pub parameter: Complex,
}

impl Family {
    #[must_use]
    pub fn seed(self, start: Complex, sample: Complex) -> Orbit {
        match self {
            Self::Mandelbrot => Orbit {
                iterated: start,
                parameter: sample,
            },
            Self::Julia => Orbit {
                iterated: sample,
                parameter: start,
            },
        }
    }

    /// Escape test applied once the loop stops.
    ///
    /// Julia-family orbits sitting exactly on the threshold do not count as escaped.
    #[must_use]
    pub fn has_escaped(self, magnitude: f64, threshold: f64) -> bool {
        match self {
            Self::Mandelbrot => magnitude >= threshold,
            Self::Julia => magnitude > threshold,
        }
    }
}

pub trait FractalRule: Send + Sync {
    fn name(&self) -> &str;

    fn family(&self) -> Family;

    /// One application of the recurrence.
    fn step(&self, z: Complex, c: Complex) -> Complex;
}

#[derive(Debug, Clone, Copy, Default)]
pub struct MandelbrotRule;

impl FractalRule for MandelbrotRule {
    fn name(&self) -> &str {
        "Mandelbrot"
    }

    fn family(&self) -> Family {
        Family::Mandelbrot
    }

    #[inline]
    fn step(&self, z: Complex, c: Complex) -> Complex {
        z * z + c
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct BurningShipRule;

impl FractalRule for BurningShipRule {
    fn name(&self) -> &str {
        "Burning ship"
    }

    fn family(&self) -> Family {
        Family::Mandelbrot
    }

    #[inline]
    fn step(&self, z: Complex, c: Complex) -> Complex {
        let folded = z.abs_components();
        folded * folded + c
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct QuadraticJuliaRule;

impl FractalRule for QuadraticJuliaRule {
    fn name(&self) -> &str {
        "Julia z^2 + c"
    }

    fn family(&self) -> Family {
        Family::Julia
    }

    #[inline]
    fn step(&self, z: Complex, c: Complex) -> Complex {
        z * z + c
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct CubicJuliaRule;

impl FractalRule for CubicJuliaRule {
    fn name(&self) -> &str {
        "Julia z^3 + c"
    }

    fn family(&self) -> Family {
        Family::Julia
    }

    #[inline]
    fn step(&self, z: Complex, c: Complex) -> Complex {
        z * z * z + c
    }
}

/// Ordered set of rules, addressed by a wrapping index.
pub struct RuleRegistry {
    rules: Vec<Box<dyn FractalRule>>,
}

impl RuleRegistry {
    #[must_use]
    pub fn empty() -> Self {
        Self { rules: Vec::new() }
    }

    /// The four built-in rules, in selector order.
    #[must_use]
    pub fn with_builtin() -> Self {
        let mut registry = Self::empty();
        registry.register(Box::new(MandelbrotRule));
        registry.register(Box::new(BurningShipRule));
        registry.register(Box::new(QuadraticJuliaRule));
        registry.register(Box::new(CubicJuliaRule));
        registry
    }

    /// Returns the index the rule was registered under.
    pub fn register(&mut self, rule: Box<dyn FractalRule>) -> usize {
        self.rules.push(rule);
        self.rules.len() - 1
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.rules.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }

    /// Looks up `index` modulo the number of registered rules.
    #[must_use]
    pub fn get(&self, index: usize) -> Option<&dyn FractalRule> {
        if self.rules.is_empty() {
            return None;
        }

        Some(self.rules[index % self.rules.len()].as_ref())
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.rules.iter().map(|rule| rule.name())
    }
}

impl Default for RuleRegistry {
    fn default() -> Self {
        Self::with_builtin()
    }
}

impl std::fmt::Debug for RuleRegistry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_list().entries(self.names()).finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct TranslateRule;

    impl FractalRule for TranslateRule {
        fn name(&self) -> &str {
            "Translate"
        }

        fn family(&self) -> Family {
            Family::Mandelbrot
        }

        fn step(&self, z: Complex, c: Complex) -> Complex {
            z + c
        }
    }

    #[test]
    fn test_seed_swaps_roles_for_julia_family() {
        let start = Complex::new(-0.7, 0.27);
        let sample = Complex::new(0.1, 0.2);

        assert_eq!(
            Family::Mandelbrot.seed(start, sample),
            Orbit { iterated: start, parameter: sample }
        );
        assert_eq!(
            Family::Julia.seed(start, sample),
            Orbit { iterated: sample, parameter: start }
        );
    }

    #[test]
    fn test_escape_polarity_differs_at_the_threshold() {
        assert!(Family::Mandelbrot.has_escaped(2.0, 2.0));
        assert!(!Family::Julia.has_escaped(2.0, 2.0));
        assert!(Family::Julia.has_escaped(2.0001, 2.0));
        assert!(Family::Julia.has_escaped(f64::INFINITY, 2.0));
    }

    #[test]
    fn test_mandelbrot_step() {
        let z = Complex::new(1.0, 2.0);
        let c = Complex::new(0.5, -0.5);
        assert_eq!(MandelbrotRule.step(z, c), Complex::new(-2.5, 3.5));
    }

    #[test]
    fn test_burning_ship_folds_before_squaring() {
        let c = Complex::new(0.5, -0.5);
        let folded = BurningShipRule.step(Complex::new(-1.0, -2.0), c);
        assert_eq!(folded, MandelbrotRule.step(Complex::new(1.0, 2.0), c));
    }

    #[test]
    fn test_cubic_julia_step() {
        // i³ = -i
        let result = CubicJuliaRule.step(Complex::new(0.0, 1.0), Complex::new(1.0, 0.0));
        assert_eq!(result, Complex::new(1.0, -1.0));
    }

    #[test]
    fn test_builtin_registry_order() {
        let registry = RuleRegistry::with_builtin();
        let names: Vec<&str> = registry.names().collect();

        assert_eq!(
            names,
            vec!["Mandelbrot", "Burning ship", "Julia z^2 + c", "Julia z^3 + c"]
        );
    }

    #[test]
    fn test_registry_wraps_index() {
        let registry = RuleRegistry::with_builtin();

        assert_eq!(registry.get(5).map(|rule| rule.name()), Some("Burning ship"));
    }

    #[test]
    fn test_register_custom_rule() {
        let mut registry = RuleRegistry::with_builtin();
        let index = registry.register(Box::new(TranslateRule));

        assert_eq!(index, 4);
        assert_eq!(registry.len(), 5);

        let rule = registry.get(index).unwrap();
        assert_eq!(rule.step(Complex::new(1.0, 1.0), Complex::new(2.0, 0.0)), Complex::new(3.0, 1.0));
    }

    #[test]
    fn test_empty_registry_has_no_rules() {
        let registry = RuleRegistry::empty();

        assert!(registry.is_empty());
        assert!(registry.get(0).is_none());
    }
}
