//! Application state
//!
//! Immutable state wrapping the calculator core. All transitions happen
//! through the reducer (see `reducer.rs`).

use libquadcalc::CalculatorState;

/// Root application state
#[derive(Debug, Clone)]
pub struct AppState {
    /// Should the application quit?
    pub should_quit: bool,

    /// Help overlay visible?
    pub help_visible: bool,

    /// The calculator core snapshot
    pub calculator: CalculatorState,

    /// UI configuration
    pub config: UiConfig,
}

/// UI configuration
#[derive(Debug, Clone)]
pub struct UiConfig {
    /// Event poll timeout in milliseconds
    pub tick_rate_ms: u64,
}

impl Default for AppState {
    fn default() -> Self {
        Self {
            should_quit: false,
            help_visible: false,
            calculator: CalculatorState::new(),
            config: UiConfig::default(),
        }
    }
}

impl Default for UiConfig {
    fn default() -> Self {
        let tick_rate_ms = std::env::var("QUAD_TUI_TICK_MS")
            .ok()
            .and_then(|s| s.parse().ok())
            .unwrap_or(100);

        Self { tick_rate_ms }
    }
}

impl AppState {
    /// Create new application state with default values
    pub fn new() -> Self {
        Self::default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_state_starts_at_zero() {
        let state = AppState::new();

        assert!(!state.should_quit);
        assert!(!state.help_visible);
        assert_eq!(state.calculator.display_text(), "0");
        assert_eq!(state.calculator.expression, "");
    }
}
