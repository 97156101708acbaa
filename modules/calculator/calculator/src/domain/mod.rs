//! Domain layer for calculator module
//!
//! Contains business logic for accumulator operations.

pub mod accumulator;
pub mod error;
pub mod operation;
pub mod shared;

pub use accumulator::Accumulator;
pub use error::{AccumulatorError, ParseOperationError};
pub use operation::Operation;
pub use shared::SharedAccumulator;
