//! quad-tui - terminal front-end for the quadcalc core
//!
//! Renders the keypad, display and expression trace, and maps key
//! presses onto core actions. All calculator rules live in
//! `libquadcalc`; this binary only translates events and draws state.

use quad_tui::{
    app::{event::EventHandler, reduce, AppState},
    error::Result,
    terminal::{install_panic_hook, restore_terminal, setup_terminal},
    ui,
};
use tracing::{debug, info};

fn main() -> Result<()> {
    libquadcalc::logging::init_default();

    // Install panic hook to restore terminal on panic
    install_panic_hook();

    let mut terminal = setup_terminal()?;
    info!("terminal ready");

    let result = run_app(&mut terminal);

    restore_terminal(terminal)?;
    result
}

fn run_app(terminal: &mut quad_tui::terminal::Tui) -> Result<()> {
    let mut state = AppState::new();
    let event_handler = EventHandler::new(state.config.tick_rate_ms);

    // Main event loop: draw, wait for one event, reduce.
    loop {
        terminal.draw(|frame| ui::render(frame, &state))?;

        let event = event_handler.next()?;
        state = reduce(state, event.into());

        if state.should_quit {
            debug!("quit requested");
            break;
        }
    }

    Ok(())
}
