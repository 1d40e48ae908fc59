//! Atomic counter backing identifier allocation.

use std::sync::atomic::{AtomicU64, Ordering};

/// Fixed starting offset added to the stored record count at startup.
pub const BASELINE: u64 = 10_000;

/// Monotonic counter shared by all concurrent create requests.
///
/// Every call to [`IdCounter::next`] returns a value no other caller has
/// received from this counter.
#[derive(Debug)]
pub struct IdCounter {
    value: AtomicU64,
}

impl IdCounter {
    /// Creates a counter positioned at [`BASELINE`].
    pub fn new() -> Self {
        Self::starting_at(BASELINE)
    }

    /// Creates a counter positioned at `value`; the first allocation returns `value + 1`.
    pub fn starting_at(value: u64) -> Self {
        Self {
            value: AtomicU64::new(value),
        }
    }

    /// Moves the counter forward by `by` without allocating.
    pub fn advance(&self, by: u64) {
        self.value.fetch_add(by, Ordering::SeqCst);
    }

    /// Allocates the next value.
    pub fn next(&self) -> u64 {
        self.value.fetch_add(1, Ordering::SeqCst) + 1
    }

    /// Returns the most recently allocated (or seeded) value.
    pub fn current(&self) -> u64 {
        self.value.load(Ordering::SeqCst)
    }
}

impl Default for IdCounter {
    fn default() -> Self {
        Self::new()
    }
}
