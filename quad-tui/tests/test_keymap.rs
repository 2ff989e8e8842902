//! Test keybinding mappings to actions
//!
//! Verifies that keyboard input is correctly mapped to calculator and
//! application actions through the reducer.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use quad_tui::app::{reduce, Action, AppState};

fn key_event(code: KeyCode, modifiers: KeyModifiers) -> KeyEvent {
    KeyEvent::new(code, modifiers)
}

fn press(state: AppState, code: KeyCode) -> AppState {
    reduce(state, Action::Key(key_event(code, KeyModifiers::NONE)))
}

#[test]
fn test_q_quits_application() {
    let state = AppState::new();

    let new_state = press(state, KeyCode::Char('q'));

    assert!(new_state.should_quit);
}

#[test]
fn test_esc_quits_application() {
    let state = AppState::new();

    let new_state = press(state, KeyCode::Esc);

    assert!(new_state.should_quit);
}

#[test]
fn test_f1_shows_help() {
    let state = AppState::new();
    assert!(!state.help_visible);

    let state = press(state, KeyCode::F(1));
    assert!(state.help_visible);
}

#[test]
fn test_esc_closes_help_without_quitting() {
    let state = press(AppState::new(), KeyCode::F(1));
    assert!(state.help_visible);

    let state = press(state, KeyCode::Esc);

    assert!(!state.help_visible);
    assert!(!state.should_quit);
}

#[test]
fn test_calculator_keys_are_swallowed_while_help_is_open() {
    let state = press(AppState::new(), KeyCode::F(1));

    let state = press(state, KeyCode::Char('5'));

    assert_eq!(state.calculator.display_text(), "0");
}

#[test]
fn test_typing_a_full_calculation() {
    let mut state = AppState::new();
    for code in [
        KeyCode::Char('2'),
        KeyCode::Char('+'),
        KeyCode::Char('3'),
        KeyCode::Char('*'),
        KeyCode::Char('4'),
        KeyCode::Enter,
    ] {
        state = press(state, code);
    }

    assert_eq!(state.calculator.display_text(), "20");
    assert_eq!(state.calculator.expression, "5 × 4 = 20");
}

#[test]
fn test_digit_keys_update_the_display() {
    let state = press(press(AppState::new(), KeyCode::Char('4')), KeyCode::Char('2'));

    assert_eq!(state.calculator.display_text(), "42");
}

#[test]
fn test_c_clears_the_calculator() {
    let mut state = AppState::new();
    for code in [KeyCode::Char('7'), KeyCode::Char('+'), KeyCode::Char('1')] {
        state = press(state, code);
    }

    let state = press(state, KeyCode::Char('c'));

    assert_eq!(state.calculator.display_text(), "0");
    assert_eq!(state.calculator.expression, "");
}

#[test]
fn test_shifted_percent_still_reaches_the_calculator() {
    let mut state = AppState::new();
    state = press(state, KeyCode::Char('5'));
    state = press(state, KeyCode::Char('0'));

    // Most layouts report '%' with the shift modifier held.
    let state = reduce(
        state,
        Action::Key(key_event(KeyCode::Char('%'), KeyModifiers::SHIFT)),
    );

    assert_eq!(state.calculator.display_text(), "0.5");
}

#[test]
fn test_s_toggles_the_sign() {
    let state = press(press(AppState::new(), KeyCode::Char('9')), KeyCode::Char('s'));

    assert_eq!(state.calculator.display_text(), "-9");
}

#[test]
fn test_unknown_keys_are_ignored() {
    let state = press(AppState::new(), KeyCode::Char('z'));

    assert_eq!(state.calculator.display_text(), "0");
    assert!(!state.should_quit);
    assert!(!state.help_visible);
}
