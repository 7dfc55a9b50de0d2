pub mod app;
pub mod browser;
pub mod editor;
pub mod events;
pub mod footer;
pub mod form;
pub mod header;
pub mod input;
pub mod layout;
pub mod mvi;
pub mod render;
pub mod terminal_guard;
pub mod theme;

use crate::ui::app::App;
use crate::ui::events::{AppEvent, EventHandler};
use std::io;
use std::time::Duration;

pub use app::Focus;

/// Run the main loop until the user quits.
///
/// Single-threaded and event-driven: every state mutation happens here,
/// synchronously, in response to one event, followed by a full redraw.
pub fn run(mut app: App, tick_rate: Duration) -> io::Result<()> {
    let (mut terminal, guard) = terminal_guard::setup_terminal()?;
    let events = EventHandler::new(tick_rate);

    loop {
        terminal.draw(|frame| render::draw(frame, &app))?;
        if app.should_quit() {
            break;
        }

        match events.next(tick_rate) {
            Ok(AppEvent::Key(key)) => input::handle_key(&mut app, key),
            Ok(AppEvent::Tick) | Ok(AppEvent::Resize(_, _)) => {}
            Err(std::sync::mpsc::RecvTimeoutError::Timeout) => {}
            Err(std::sync::mpsc::RecvTimeoutError::Disconnected) => break,
        }
    }

    drop(guard);
    Ok(())
}
