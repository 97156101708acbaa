//! Running-total accumulator.

use std::num::FpCategory;

use serde::Serialize;
use tracing::{debug, trace};

use crate::domain::error::AccumulatorError;
use crate::domain::operation::Operation;

/// Holds one running numeric total mutated by sequential arithmetic steps.
///
/// Every mutating method returns the updated total. `divide` is the only
/// fallible step: a zero divisor is rejected and the total is left as it was.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize)]
pub struct Accumulator {
    total: f64,
}

impl Accumulator {
    /// Create an accumulator with a total of zero.
    #[must_use]
    pub const fn new() -> Self {
        Self { total: 0.0 }
    }

    /// Create an accumulator starting from `total`.
    #[must_use]
    pub const fn with_total(total: f64) -> Self {
        Self { total }
    }

    /// Current running total.
    #[must_use]
    pub const fn total(&self) -> f64 {
        self.total
    }

    /// Reset the total back to zero.
    pub fn reset(&mut self) {
        trace!(previous = self.total, "resetting accumulator");
        self.total = 0.0;
    }

    /// `total <- total + n`
    pub fn add(&mut self, n: f64) -> f64 {
        self.total += n;
        self.total
    }

    /// `total <- total - n`
    pub fn subtract(&mut self, n: f64) -> f64 {
        self.total -= n;
        self.total
    }

    /// `total <- total * n`
    pub fn multiply(&mut self, n: f64) -> f64 {
        self.total *= n;
        self.total
    }

    /// `total <- total / n`
    ///
    /// # Errors
    ///
    /// Returns [`AccumulatorError::DivisionByZero`] when `n` is `0.0` or
    /// `-0.0`; the total is not modified in that case.
    pub fn divide(&mut self, n: f64) -> Result<f64, AccumulatorError> {
        if n.classify() == FpCategory::Zero {
            debug!(total = self.total, "rejected division by zero");
            return Err(AccumulatorError::DivisionByZero);
        }
        self.total /= n;
        Ok(self.total)
    }

    /// Apply a single parsed [`Operation`].
    ///
    /// # Errors
    ///
    /// Propagates [`AccumulatorError::DivisionByZero`] from [`Self::divide`].
    pub fn apply(&mut self, op: Operation) -> Result<f64, AccumulatorError> {
        match op {
            Operation::Add(n) => Ok(self.add(n)),
            Operation::Subtract(n) => Ok(self.subtract(n)),
            Operation::Multiply(n) => Ok(self.multiply(n)),
            Operation::Divide(n) => self.divide(n),
        }
    }

    /// Apply operations in order and return the total after each one.
    ///
    /// Stops at the first failure; the total then holds the result of the
    /// last successful step.
    ///
    /// # Errors
    ///
    /// Returns the first [`AccumulatorError`] encountered.
    pub fn apply_all<I>(&mut self, ops: I) -> Result<Vec<f64>, AccumulatorError>
    where
        I: IntoIterator<Item = Operation>,
    {
        ops.into_iter().map(|op| self.apply(op)).collect()
    }
}

#[cfg(test)]
#[cfg_attr(coverage_nightly, coverage(off))]
#[allow(clippy::float_cmp)]
mod tests {
    use super::*;

    #[test]
    fn test_starts_at_zero() {
        assert_eq!(Accumulator::new().total(), 0.0);
        assert_eq!(Accumulator::default(), Accumulator::new());
    }

    #[test]
    fn test_add_multiply_subtract_sequence() {
        let mut acc = Accumulator::new();
        assert_eq!(acc.add(5.0), 5.0);
        assert_eq!(acc.multiply(3.0), 15.0);
        assert_eq!(acc.subtract(2.0), 13.0);
        assert_eq!(acc.total(), 13.0);
    }

    #[test]
    fn test_divide_by_zero_keeps_total() {
        let mut acc = Accumulator::new();
        acc.add(10.0);
        assert_eq!(acc.divide(0.0), Err(AccumulatorError::DivisionByZero));
        assert_eq!(acc.total(), 10.0);
    }

    #[test]
    fn test_divide_by_negative_zero_is_rejected() {
        let mut acc = Accumulator::with_total(-4.5);
        assert_eq!(acc.divide(-0.0), Err(AccumulatorError::DivisionByZero));
        assert_eq!(acc.total(), -4.5);
    }

    #[test]
    fn test_divide_by_zero_for_any_prior_total() {
        for prior in [0.0, 1.0, -7.25, 1e300, f64::MIN_POSITIVE] {
            let mut acc = Accumulator::with_total(prior);
            assert!(acc.divide(0.0).is_err());
            assert_eq!(acc.total(), prior);
        }
    }

    #[test]
    fn test_divide_nonzero() {
        let mut acc = Accumulator::with_total(7.0);
        assert_eq!(acc.divide(2.0), Ok(3.5));
        assert_eq!(acc.divide(-0.5), Ok(-7.0));
    }

    #[test]
    fn test_sequences_match_left_to_right_evaluation() {
        let cases: &[&[Operation]] = &[
            &[Operation::Add(1.5), Operation::Multiply(4.0), Operation::Subtract(10.0)],
            &[Operation::Subtract(3.0), Operation::Subtract(-3.0), Operation::Add(0.25)],
            &[Operation::Multiply(100.0), Operation::Add(-2.0), Operation::Multiply(-0.5)],
        ];

        for ops in cases {
            let mut expected = 0.0;
            for op in *ops {
                expected = match *op {
                    Operation::Add(n) => expected + n,
                    Operation::Subtract(n) => expected - n,
                    Operation::Multiply(n) => expected * n,
                    Operation::Divide(n) => expected / n,
                };
            }

            let mut acc = Accumulator::new();
            let trace = acc.apply_all(ops.iter().copied()).unwrap();
            assert_eq!(trace.len(), ops.len());
            assert_eq!(acc.total(), expected);
        }
    }

    #[test]
    fn test_apply_all_returns_intermediate_totals() {
        let mut acc = Accumulator::new();
        let trace = acc
            .apply_all([Operation::Add(5.0), Operation::Multiply(3.0), Operation::Subtract(2.0)])
            .unwrap();
        assert_eq!(trace, vec![5.0, 15.0, 13.0]);
    }

    #[test]
    fn test_apply_all_stops_at_first_failure() {
        let mut acc = Accumulator::new();
        let result = acc.apply_all([
            Operation::Add(10.0),
            Operation::Divide(0.0),
            Operation::Add(1.0),
        ]);
        assert_eq!(result, Err(AccumulatorError::DivisionByZero));
        assert_eq!(acc.total(), 10.0);
    }

    #[test]
    fn test_reset() {
        let mut acc = Accumulator::with_total(42.0);
        acc.reset();
        assert_eq!(acc.total(), 0.0);
    }

    #[test]
    fn test_serializes_total() {
        let acc = Accumulator::with_total(13.0);
        assert_eq!(serde_json::to_string(&acc).unwrap(), r#"{"total":13.0}"#);
    }
}
