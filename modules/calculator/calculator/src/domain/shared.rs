//! Accumulator shared between threads.

use std::sync::Arc;

use parking_lot::Mutex;

use crate::domain::accumulator::Accumulator;
use crate::domain::error::AccumulatorError;
use crate::domain::operation::Operation;

/// Cloneable handle to one accumulator whose operations are serialised by a
/// mutex.
///
/// Each call holds the lock for the whole read-modify-write, so concurrent
/// callers never observe or produce a partially applied step. Clones share
/// the same total.
#[derive(Debug, Clone, Default)]
pub struct SharedAccumulator {
    inner: Arc<Mutex<Accumulator>>,
}

impl SharedAccumulator {
    /// Create a shared accumulator starting at zero.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Wrap an existing accumulator.
    #[must_use]
    pub fn from_accumulator(acc: Accumulator) -> Self {
        Self {
            inner: Arc::new(Mutex::new(acc)),
        }
    }

    /// Current running total.
    #[must_use]
    pub fn total(&self) -> f64 {
        self.inner.lock().total()
    }

    /// Reset the shared total to zero.
    pub fn reset(&self) {
        self.inner.lock().reset();
    }

    /// Add `n` and return the new total.
    pub fn add(&self, n: f64) -> f64 {
        self.inner.lock().add(n)
    }

    /// Subtract `n` and return the new total.
    pub fn subtract(&self, n: f64) -> f64 {
        self.inner.lock().subtract(n)
    }

    /// Multiply by `n` and return the new total.
    pub fn multiply(&self, n: f64) -> f64 {
        self.inner.lock().multiply(n)
    }

    /// Divide by `n` and return the new total.
    ///
    /// # Errors
    ///
    /// Returns [`AccumulatorError::DivisionByZero`] when `n` is zero.
    pub fn divide(&self, n: f64) -> Result<f64, AccumulatorError> {
        self.inner.lock().divide(n)
    }

    /// Apply one [`Operation`] under the lock.
    ///
    /// # Errors
    ///
    /// Propagates [`AccumulatorError::DivisionByZero`].
    pub fn apply(&self, op: Operation) -> Result<f64, AccumulatorError> {
        self.inner.lock().apply(op)
    }

    /// Copy of the current accumulator state.
    #[must_use]
    pub fn snapshot(&self) -> Accumulator {
        *self.inner.lock()
    }
}
