use std::sync::atomic::{AtomicBool, Ordering};

/// How many pixels a generator may process between two cancellation polls.
pub const CANCEL_CHECK_INTERVAL_PIXELS: usize = 1024;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Cancelled;

impl std::fmt::Display for Cancelled {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "render cancelled")
    }
}

impl std::error::Error for Cancelled {}

pub trait CancelToken: Send + Sync {
    fn is_cancelled(&self) -> bool;
}

#[derive(Debug, Clone, Copy, Default)]
pub struct NeverCancel;

impl CancelToken for NeverCancel {
    #[inline]
    fn is_cancelled(&self) -> bool {
        false
    }
}

/// One-shot flag, typically shared between a render and whoever may want to
/// abandon it.
#[derive(Debug, Default)]
pub struct CancelFlag {
    cancelled: AtomicBool,
}

impl CancelFlag {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    pub fn cancel(&self) {
        self.cancelled.store(true, Ordering::Relaxed);
    }
}

impl CancelToken for CancelFlag {
    #[inline]
    fn is_cancelled(&self) -> bool {
        self.cancelled.load(Ordering::Relaxed)
    }
}

impl<F> CancelToken for F
where
    F: Fn() -> bool + Send + Sync,
{
    #[inline]
    fn is_cancelled(&self) -> bool {
        self()
    }
}
