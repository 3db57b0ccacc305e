//! Result type aliases for the pizza backend.

use crate::PizzaError;

/// A specialized `Result` type for pizza operations.
pub type PizzaResult<T> = Result<T, PizzaError>;
