//! Actions for the TUI reducer
//!
//! Raw terminal events and application-level requests. Calculator input
//! is carried through as the core's own action type, untranslated.

use crossterm::event::KeyEvent;
use libquadcalc::Action as CalcAction;

/// Actions that trigger state transitions
#[derive(Debug, Clone)]
pub enum Action {
    // === UI Events ===
    /// Keyboard input event
    Key(KeyEvent),

    /// Periodic tick while idle
    Tick,

    /// Terminal resize event
    Resize(u16, u16),

    // === Application ===
    /// Quit the application
    Quit,

    /// Show help overlay
    ShowHelp,

    /// Hide help overlay
    HideHelp,

    // === Calculator ===
    /// One calculator key, forwarded to the core reducer
    Calc(CalcAction),
}
