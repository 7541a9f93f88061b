use std::error::Error;
use std::fmt;
use std::sync::{Arc, PoisonError, RwLock};
use crate::core::data::colour::Rgba;
use crate::core::gradients::gradient::Gradient;

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum GradientCacheError {
    InvalidBandSize { band_size: f64 },
}

impl fmt::Display for GradientCacheError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidBandSize { band_size } => {
                write!(f, "band size must be finite and greater than zero, got {}", band_size)
            }
        }
    }
}

impl Error for GradientCacheError {}

/// Precomputed colour for every (scheme, escape score) pair.
///
/// Scores are folded into bands of `band_size` iterations, each band running
/// once through the whole gradient. Rows hold `max_iterations + 1` entries since
/// a sample that starts outside the threshold scores exactly `max_iterations`.
#[derive(Debug, Clone, PartialEq)]
pub struct GradientCache {
    rows: Vec<Vec<Rgba>>,
    max_iterations: u32,
    band_size: f64,
}

impl GradientCache {
    pub fn build(
        gradients: &[Gradient],
        max_iterations: u32,
        band_size: f64,
    ) -> Result<Self, GradientCacheError> {
        if !band_size.is_finite() || band_size <= 0.0 {
            return Err(GradientCacheError::InvalidBandSize { band_size });
        }

        let rows = gradients
            .iter()
            .map(|gradient| {
                (0..=max_iterations)
                    .map(|n| gradient.map(band_position(n, band_size)))
                    .collect()
            })
            .collect();

        Ok(Self {
            rows,
            max_iterations,
            band_size,
        })
    }

    /// Colour for `score` under `scheme`.
    ///
    /// Both indices must be in range; a stale cache is a caller bug.
    #[must_use]
    #[inline]
    pub fn lookup(&self, scheme: usize, score: u32) -> Rgba {
        debug_assert!(
            scheme < self.rows.len(),
            "scheme {scheme} outside cache of {} schemes",
            self.rows.len()
        );
        debug_assert!(
            score <= self.max_iterations,
            "score {score} outside cache built for {} iterations",
            self.max_iterations
        );

        self.rows[scheme][score as usize]
    }

    #[must_use]
    pub fn get(&self, scheme: usize, score: u32) -> Option<Rgba> {
        self.rows.get(scheme)?.get(score as usize).copied()
    }

    #[must_use]
    pub fn max_iterations(&self) -> u32 {
        self.max_iterations
    }

    #[must_use]
    pub fn band_size(&self) -> f64 {
        self.band_size
    }

    #[must_use]
    pub fn scheme_count(&self) -> usize {
        self.rows.len()
    }
}

/// Where score `n` lands in its band, in `[0, 1)`.
#[inline]
fn band_position(n: u32, band_size: f64) -> f64 {
    (f64::from(n) % band_size) / band_size
}

/// Gradient cache that can be replaced while renders are reading it.
///
/// Readers take a [`snapshot`](Self::snapshot) and keep using it for a whole
/// frame; a rebuild publishes a new cache without touching old snapshots.
#[derive(Debug)]
pub struct SharedGradientCache {
    inner: RwLock<Arc<GradientCache>>,
}

impl SharedGradientCache {
    #[must_use]
    pub fn new(cache: GradientCache) -> Self {
        Self {
            inner: RwLock::new(Arc::new(cache)),
        }
    }

    #[must_use]
    pub fn snapshot(&self) -> Arc<GradientCache> {
        let guard = self.inner.read().unwrap_or_else(PoisonError::into_inner);

        Arc::clone(&guard)
    }

    pub fn publish(&self, cache: GradientCache) {
        let cache = Arc::new(cache);
        let mut guard = self.inner.write().unwrap_or_else(PoisonError::into_inner);

        *guard = cache;
    }

    /// Builds outside the lock, then swaps the result in.
    pub fn rebuild(
        &self,
        gradients: &[Gradient],
        max_iterations: u32,
        band_size: f64,
    ) -> Result<(), GradientCacheError> {
        let cache = GradientCache::build(gradients, max_iterations, band_size)?;

        log::debug!(
            "Rebuilt gradient cache: {} schemes, scores 0..={}, band size {}",
            cache.scheme_count(),
            max_iterations,
            band_size
        );

        self.publish(cache);

        Ok(())
    }
}
