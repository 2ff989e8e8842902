//! Binary arithmetic evaluator
//!
//! Pure and total over the four operators. Undefined results come back
//! as [`MathError`] instead of leaking infinities or NaN into the
//! display pipeline.

use crate::error::MathError;
use crate::types::Operator;

/// Evaluate `prev op current`
///
/// Division by zero is [`MathError::DivisionByZero`]; any non-finite
/// result (f64 overflow) is [`MathError::Overflow`].
pub fn evaluate(prev: f64, current: f64, op: Operator) -> std::result::Result<f64, MathError> {
    let result = match op {
        Operator::Add => prev + current,
        Operator::Subtract => prev - current,
        Operator::Multiply => prev * current,
        Operator::Divide => {
            if current == 0.0 {
                return Err(MathError::DivisionByZero);
            }
            prev / current
        }
    };

    if result.is_finite() {
        Ok(result)
    } else {
        Err(MathError::Overflow)
    }
}
