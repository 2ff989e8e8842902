//! Pure reducer for calculator state transitions
//!
//! `(CalculatorState, Action) -> CalculatorState`. The reducer has no
//! side effects and never fails: undefined arithmetic becomes the
//! `Error` display sentinel, and invalid input (duplicate decimal
//! point, digits past the cap, equals with nothing pending) leaves the
//! state unchanged.
//!
//! Evaluation is eager and left to right. Selecting an operator while
//! one is already pending either replaces it (no operand typed yet) or
//! commits the pending computation first (chaining).

use tracing::{trace, warn};

use crate::actions::Action;
use crate::error::MathError;
use crate::eval::evaluate;
use crate::format;
use crate::state::CalculatorState;
use crate::types::{DisplayValue, Operator};

/// Significant digits a single operand may hold
pub const MAX_DIGITS: usize = 9;

/// Apply one action to the calculator state
pub fn reduce(state: CalculatorState, action: Action) -> CalculatorState {
    trace!(?action, "reducing");

    // Recovery rule for the error sentinel: only Clear and Digit do
    // anything. The reset flag is always set alongside the sentinel, so
    // the digit path starts a fresh number with no special casing.
    if state.display.is_error() && !matches!(action, Action::Clear | Action::Digit(_)) {
        return state;
    }

    match action {
        Action::Digit(digit) => handle_digit(state, digit),
        Action::Decimal => handle_decimal(state),
        Action::Operation(op) => handle_operation(state, op),
        Action::Equals => handle_equals(state),
        Action::Clear => CalculatorState::default(),
        Action::ToggleSign => handle_unary(state, |value| -value),
        Action::Percentage => handle_unary(state, |value| value / 100.0),
    }
}

fn handle_digit(state: CalculatorState, digit: u8) -> CalculatorState {
    if digit > 9 {
        return state;
    }
    let digit = char::from(b'0' + digit);

    if state.should_reset_display {
        // Fresh number: mid-chain the digit extends the trace,
        // otherwise it begins a new one.
        let expression = if state.previous_value.is_some() {
            format!("{}{digit}", state.expression)
        } else {
            digit.to_string()
        };
        return CalculatorState {
            display: DisplayValue::Value(digit.to_string()),
            expression,
            should_reset_display: false,
            ..state
        };
    }

    let Some(text) = state.display.text() else {
        return state;
    };
    let unformatted: String = text
        .chars()
        .filter(|&c| c != format::THOUSANDS_SEPARATOR)
        .collect();

    if unformatted.chars().filter(|c| c.is_ascii_digit()).count() >= MAX_DIGITS {
        return state;
    }

    let appended = if unformatted == "0" {
        digit.to_string()
    } else {
        format!("{unformatted}{digit}")
    };

    // Reformat through parse so the separators land in the right spots.
    let display = match format::parse(&appended) {
        Ok(value) => DisplayValue::Value(format::format(value)),
        Err(_) => return state,
    };

    CalculatorState {
        display,
        expression: format!("{}{digit}", state.expression),
        ..state
    }
}

fn handle_decimal(state: CalculatorState) -> CalculatorState {
    let Some(text) = state.display.text() else {
        return state;
    };
    if text.contains('.') {
        return state;
    }

    // The trace only gains the point mid-number; with a reset pending
    // the point belongs to a number that has not started yet.
    let expression = if state.should_reset_display {
        state.expression.clone()
    } else {
        format!("{}.", state.expression)
    };

    CalculatorState {
        display: DisplayValue::Value(format!("{text}.")),
        expression,
        ..state
    }
}

fn handle_operation(state: CalculatorState, op: Operator) -> CalculatorState {
    // Operator replacement: a pending operator with no operand typed
    // yet is swapped in place, trace token included.
    if state.current_operation.is_some() && state.should_reset_display {
        return CalculatorState {
            expression: replace_trailing_operator(&state.expression, op),
            current_operation: Some(op),
            active_operation: Some(op),
            ..state
        };
    }

    let current_value = match format::parse(state.display.as_str()) {
        Ok(value) => value,
        Err(_) => return state,
    };

    match (state.previous_value, state.current_operation) {
        // First commit: the display becomes the left operand.
        (None, _) => CalculatorState {
            expression: format!("{} {} ", format::format(current_value), op.symbol()),
            previous_value: Some(current_value),
            current_operation: Some(op),
            active_operation: Some(op),
            should_reset_display: true,
            ..state
        },
        // Chained commit: evaluate eagerly, left to right.
        (Some(previous), Some(pending)) => match evaluate(previous, current_value, pending) {
            Ok(result) => {
                let formatted = format::format(result);
                CalculatorState {
                    display: DisplayValue::Value(formatted.clone()),
                    expression: format!("{formatted} {} ", op.symbol()),
                    previous_value: Some(result),
                    current_operation: Some(op),
                    active_operation: Some(op),
                    should_reset_display: true,
                }
            }
            Err(error) => abort_chain(error),
        },
        // Unreachable while the reducer maintains its invariants: the
        // two fields are set and cleared together.
        (Some(_), None) => state,
    }
}

fn handle_equals(state: CalculatorState) -> CalculatorState {
    let (Some(previous), Some(pending)) = (state.previous_value, state.current_operation) else {
        return state;
    };
    let current_value = match format::parse(state.display.as_str()) {
        Ok(value) => value,
        Err(_) => return state,
    };

    let (display, result_text) = match evaluate(previous, current_value, pending) {
        Ok(result) => {
            let formatted = format::format(result);
            (DisplayValue::Value(formatted.clone()), formatted)
        }
        Err(error) => {
            warn!(%error, "evaluation failed");
            (DisplayValue::Error, DisplayValue::ERROR_TEXT.to_string())
        }
    };

    // The result stays on display, ready to seed a new chain.
    CalculatorState {
        display,
        expression: format!("{} = {}", state.expression, result_text),
        previous_value: None,
        current_operation: None,
        active_operation: None,
        should_reset_display: true,
    }
}

fn handle_unary(state: CalculatorState, apply: impl FnOnce(f64) -> f64) -> CalculatorState {
    let value = match format::parse(state.display.as_str()) {
        Ok(value) => apply(value),
        Err(_) => return state,
    };
    let formatted = format::format(value);

    // The trace follows unary edits only while the first operand is
    // being entered; mid-chain the display changes alone.
    let expression = if state.previous_value.is_none() {
        formatted.clone()
    } else {
        state.expression.clone()
    };

    CalculatorState {
        display: DisplayValue::Value(formatted),
        expression,
        ..state
    }
}

/// Rewrite the trailing `"<op> "` token of the expression trace
fn replace_trailing_operator(expression: &str, op: Operator) -> String {
    let mut chars = expression.chars();
    chars.next_back();
    chars.next_back();
    format!("{}{} ", chars.as_str(), op.symbol())
}

fn abort_chain(error: MathError) -> CalculatorState {
    warn!(%error, "evaluation failed, aborting chain");
    CalculatorState {
        display: DisplayValue::Error,
        expression: DisplayValue::ERROR_TEXT.to_string(),
        ..CalculatorState::default()
    }
}
