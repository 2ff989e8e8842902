//! Application module
//!
//! The TUI-side reducer architecture:
//! - Actions: what can happen (key presses, ticks, calculator input)
//! - State: the wrapped calculator snapshot plus UI flags
//! - Reducer: pure function (State, Action) -> State
//!
//! Calculator rules live entirely in `libquadcalc`; this layer only
//! translates terminal events and tracks quit/help state.

pub mod actions;
pub mod event;
pub mod reducer;
pub mod state;

// Re-export commonly used types
pub use actions::Action;
pub use reducer::{keymap, reduce};
pub use state::{AppState, UiConfig};
