//! Calculator state
//!
//! A single immutable snapshot, replaced wholesale by the reducer on
//! every action (see `reducer.rs`). Front-ends read `display` and
//! `expression` after each step; nothing else is observable.

use crate::types::{DisplayValue, Operator};

/// Complete calculator state
///
/// Invariants maintained by the reducer:
/// - `previous_value` is `None` iff no operation has been committed
///   since the last clear/equals
/// - `current_operation` is `None` iff `previous_value` is `None`
/// - `display` parses to a valid number whenever it is not the error
///   sentinel
/// - the typed digit count of one operand never exceeds nine
#[derive(Debug, Clone, PartialEq)]
pub struct CalculatorState {
    /// Currently shown value (formatted)
    pub display: DisplayValue,

    /// Running human-readable trace of the computation
    pub expression: String,

    /// Left operand of a pending or chained computation; `None` means
    /// no operation is in progress
    pub previous_value: Option<f64>,

    /// Operator awaiting its right operand
    pub current_operation: Option<Operator>,

    /// Which operator button renders as selected; mirrors
    /// `current_operation` but is cleared independently on equals
    pub active_operation: Option<Operator>,

    /// Next digit press starts a fresh number instead of appending
    pub should_reset_display: bool,
}

impl Default for CalculatorState {
    fn default() -> Self {
        Self {
            display: DisplayValue::zero(),
            expression: String::new(),
            previous_value: None,
            current_operation: None,
            active_operation: None,
            should_reset_display: true,
        }
    }
}

impl CalculatorState {
    /// Create the initial state (display `"0"`, empty expression)
    pub fn new() -> Self {
        Self::default()
    }

    /// Display text exactly as shown to the user
    pub fn display_text(&self) -> &str {
        self.display.as_str()
    }

    /// True when `op`'s keypad button should render as selected
    ///
    /// The pending operator stays lit only until the next operand
    /// starts.
    pub fn is_operator_active(&self, op: Operator) -> bool {
        self.active_operation == Some(op) && self.should_reset_display
    }
}
