//! Pure reducer for TUI state transitions
//!
//! `(AppState, Action) -> AppState`. Keyboard events are translated to
//! application or calculator actions here; everything the calculator
//! itself does happens inside `libquadcalc::reduce`.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use libquadcalc::{Action as CalcAction, Operator};

use super::actions::Action;
use super::state::AppState;

/// Pure reducer function
///
/// Takes current state and an action, returns new state. No I/O, no
/// side effects, deterministic.
pub fn reduce(state: AppState, action: Action) -> AppState {
    match action {
        // === UI Events ===
        Action::Key(key) => handle_key(state, key),
        Action::Tick => state,
        Action::Resize(_, _) => state,

        // === Application ===
        Action::Quit => AppState {
            should_quit: true,
            ..state
        },

        Action::ShowHelp => AppState {
            help_visible: true,
            ..state
        },

        Action::HideHelp => AppState {
            help_visible: false,
            ..state
        },

        // === Calculator ===
        Action::Calc(calc_action) => {
            let calculator = libquadcalc::reduce(state.calculator.clone(), calc_action);
            AppState { calculator, ..state }
        }
    }
}

/// Map a calculator key to a core action
///
/// Returns `None` for keys the calculator does not know. Modifiers are
/// ignored because `+`, `*`, `%` and friends arrive shifted on most
/// layouts.
pub fn keymap(code: KeyCode) -> Option<CalcAction> {
    match code {
        KeyCode::Char(c @ '0'..='9') => Some(CalcAction::Digit(c as u8 - b'0')),
        KeyCode::Char('.') => Some(CalcAction::Decimal),
        KeyCode::Char('+') => Some(CalcAction::Operation(Operator::Add)),
        KeyCode::Char('-') => Some(CalcAction::Operation(Operator::Subtract)),
        KeyCode::Char('*') | KeyCode::Char('x') => Some(CalcAction::Operation(Operator::Multiply)),
        KeyCode::Char('/') => Some(CalcAction::Operation(Operator::Divide)),
        KeyCode::Char('=') | KeyCode::Enter => Some(CalcAction::Equals),
        KeyCode::Char('c') | KeyCode::Char('C') | KeyCode::Delete => Some(CalcAction::Clear),
        KeyCode::Char('s') | KeyCode::Char('S') => Some(CalcAction::ToggleSign),
        KeyCode::Char('%') => Some(CalcAction::Percentage),
        _ => None,
    }
}

/// Handle keyboard input
///
/// This is where keybindings are defined.
fn handle_key(state: AppState, key: KeyEvent) -> AppState {
    // The help overlay swallows everything except its own dismissal.
    if state.help_visible {
        return match key.code {
            KeyCode::Esc | KeyCode::F(1) | KeyCode::Char('?') => reduce(state, Action::HideHelp),
            _ => state,
        };
    }

    match (key.code, key.modifiers) {
        // Quit
        (KeyCode::Char('q'), KeyModifiers::NONE) | (KeyCode::Esc, _) => {
            reduce(state, Action::Quit)
        }

        // Help
        (KeyCode::F(1), _) | (KeyCode::Char('?'), _) => reduce(state, Action::ShowHelp),

        // Calculator keys
        _ => match keymap(key.code) {
            Some(calc_action) => reduce(state, Action::Calc(calc_action)),
            None => state,
        },
    }
}
