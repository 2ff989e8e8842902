//! Error types for quadcalc
//!
//! Nothing here ever reaches a caller of the reducer: arithmetic errors
//! become the `Error` display sentinel, and parse errors are absorbed as
//! no-op transitions. The types exist so the formatter and evaluator can
//! report failure explicitly instead of leaking NaN or infinities.

use thiserror::Error;

pub type Result<T> = std::result::Result<T, CalcError>;

#[derive(Error, Debug)]
pub enum CalcError {
    #[error("Arithmetic error: {0}")]
    Math(#[from] MathError),

    #[error("Display text is not a number: {0}")]
    Parse(#[from] std::num::ParseFloatError),
}

/// Arithmetic failures produced by the evaluator
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum MathError {
    #[error("Division by zero")]
    DivisionByZero,

    #[error("Result out of range")]
    Overflow,
}
