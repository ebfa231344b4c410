//! Recompute coalescing for bursts of seed edits.
//!
//! A color picker can fire a new seed on every pointer move. Deriving a
//! palette is cheap but not free, so interactive front ends hold the latest
//! input in a [`RecomputeCoalescer`] and derive once the input has been
//! quiet for a short window.
//!
//! Coalescing only decides *when* to derive. The value that comes out is
//! always the last one pushed, so the coalesced result equals deriving from
//! scratch on the final input.
//!
//! ```
//! use std::time::{Duration, Instant};
//! use swatch_palette::RecomputeCoalescer;
//!
//! let start = Instant::now();
//! let mut c = RecomputeCoalescer::new(Duration::from_millis(150));
//! c.push("#4f68c5", start);
//! c.push("#4f69c5", start + Duration::from_millis(40));
//!
//! assert_eq!(c.poll(start + Duration::from_millis(100)), None);
//! assert_eq!(c.poll(start + Duration::from_millis(190)), Some("#4f69c5"));
//! assert!(!c.is_pending());
//! ```

use std::time::{Duration, Instant};

/// Default quiescence window for interactive recomputation.
pub const DEFAULT_WINDOW: Duration = Duration::from_millis(150);

/// Latest-wins holder for a pending recompute input.
///
/// Time is passed in by the caller, so the coalescer never reads a clock.
/// Not thread-safe; drive it from the thread that owns the input.
#[derive(Debug, Clone)]
pub struct RecomputeCoalescer<T> {
    window: Duration,
    pending: Option<(T, Instant)>,
    superseded: u64,
}

impl<T> RecomputeCoalescer<T> {
    #[must_use]
    pub const fn new(window: Duration) -> Self {
        Self {
            window,
            pending: None,
            superseded: 0,
        }
    }

    #[must_use]
    pub const fn window(&self) -> Duration {
        self.window
    }

    /// Replace the pending input and restart the window at `now`.
    pub fn push(&mut self, value: T, now: Instant) {
        if self.pending.is_some() {
            self.superseded = self.superseded.saturating_add(1);
        }
        self.pending = Some((value, now));
    }

    /// Take the pending input if the window has elapsed by `now`.
    ///
    /// An input whose deadline lies beyond what `Instant` can represent is
    /// never due; only [`flush`](Self::flush) releases it.
    pub fn poll(&mut self, now: Instant) -> Option<T> {
        match self.deadline() {
            Some(deadline) if now >= deadline => self.flush(),
            _ => None,
        }
    }

    /// Take the pending input immediately, ignoring the window.
    pub fn flush(&mut self) -> Option<T> {
        self.pending.take().map(|(value, _)| value)
    }

    /// Drop the pending input. Returns whether anything was dropped.
    pub fn cancel(&mut self) -> bool {
        self.pending.take().is_some()
    }

    #[must_use]
    pub const fn is_pending(&self) -> bool {
        self.pending.is_some()
    }

    /// When the pending input becomes due.
    ///
    /// `None` either when nothing is pending or when the window reaches past
    /// the representable future; [`is_pending`](Self::is_pending) tells the
    /// two apart.
    #[must_use]
    pub fn deadline(&self) -> Option<Instant> {
        let (_, at) = self.pending.as_ref()?;
        at.checked_add(self.window)
    }

    /// Number of inputs replaced before they were taken.
    #[must_use]
    pub const fn superseded(&self) -> u64 {
        self.superseded
    }
}

impl<T> Default for RecomputeCoalescer<T> {
    fn default() -> Self {
        Self::new(DEFAULT_WINDOW)
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
