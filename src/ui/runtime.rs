use std::sync::mpsc::RecvTimeoutError;
use std::time::Duration;

use anyhow::Context;

use crate::config::Config;
use crate::counter::{CounterReducer, CounterState};
use crate::shutdown::ShutdownCoordinator;
use crate::store::Store;
use crate::ui::app::App;
use crate::ui::events::{AppEvent, EventHandler};
use crate::ui::input::handle_key;
use crate::ui::render::draw;
use crate::ui::terminal_guard::setup_terminal;

/// Run the TUI until quit or shutdown.
///
/// Constructs the store, mounts the view against it, and drives the
/// event loop. Dispatch only ever happens on this thread.
pub fn run(config: Config, initial_value: i64) -> anyhow::Result<()> {
    let shutdown = ShutdownCoordinator::new();
    shutdown
        .install_signal_handlers()
        .context("failed to install signal handlers")?;

    let (mut terminal, guard) = setup_terminal().context("failed to set up terminal")?;
    let tick_rate = Duration::from_millis(config.ui.tick_rate_ms);
    let events = EventHandler::new(tick_rate, shutdown.handle());

    let store: Store<CounterReducer> = Store::new(CounterState::new(initial_value));
    let mut app = App::new(store);

    tracing::info!(initial_value, "view mounted");

    loop {
        if app.take_redraw() {
            terminal.draw(|frame| draw(frame, &app))?;
        }
        if app.should_quit() {
            break;
        }

        match events.next(tick_rate) {
            Ok(AppEvent::Key(key)) => handle_key(&mut app, key),
            Ok(AppEvent::Paste(text)) => app.paste_input(&text),
            Ok(AppEvent::Resize(_, _)) => app.request_redraw(),
            Ok(AppEvent::Tick) => {}
            Ok(AppEvent::Shutdown) => break,
            Err(RecvTimeoutError::Timeout) => {}
            Err(RecvTimeoutError::Disconnected) => break,
        }
    }

    shutdown.signal();
    drop(guard);
    Ok(())
}
