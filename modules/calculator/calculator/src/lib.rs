//! Calculator Module
//!
//! A running-total accumulator with guarded division.
//!
//! ## Architecture
//!
//! - `domain/accumulator.rs` - The `Accumulator` value type
//! - `domain/operation.rs` - Parsed arithmetic steps (`Operation`)
//! - `domain/shared.rs` - Mutex-serialised wrapper for concurrent callers
//! - `domain/error.rs` - `AccumulatorError`
//!
//! ## Usage
//!
//! ```
//! use calculator::{Accumulator, AccumulatorError};
//!
//! let mut acc = Accumulator::new();
//! acc.add(5.0);
//! acc.multiply(3.0);
//! assert_eq!(acc.subtract(2.0), 13.0);
//! assert_eq!(acc.divide(0.0), Err(AccumulatorError::DivisionByZero));
//! assert_eq!(acc.total(), 13.0);
//! ```

#![forbid(unsafe_code)]
#![deny(rust_2018_idioms)]

pub mod domain;

pub use domain::{Accumulator, AccumulatorError, Operation, ParseOperationError, SharedAccumulator};
