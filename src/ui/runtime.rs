use crate::catalog::Catalog;
use crate::config::Config;
use crate::error::AppError;
use crate::shutdown::ShutdownCoordinator;
use crate::ui::app::App;
use crate::ui::events::{AppEvent, EventHandler};
use crate::ui::input::{handle_key, handle_mouse};
use crate::ui::render::draw;
use crate::ui::terminal_guard::setup_terminal;
use std::sync::mpsc::RecvTimeoutError;
use std::time::Duration;

pub fn run(config: &Config) -> Result<(), AppError> {
    let shutdown = ShutdownCoordinator::new();
    shutdown
        .install_signal_handlers()
        .map_err(AppError::Signals)?;

    let (mut terminal, guard) = setup_terminal(config.ui.mouse).map_err(AppError::Terminal)?;
    let tick_rate = Duration::from_millis(config.ui.tick_rate_ms);
    let mut app = App::new(Catalog::builtin(), &config.layout);
    app.selection_mut().subscribe(|product| {
        if let Some(product) = product {
            tracing::info!(product = %product.name, price = %product.price, "product selected");
        }
    });
    let events = EventHandler::new(tick_rate, shutdown.handle());

    let (cols, rows) = crossterm::terminal::size().map_err(AppError::Terminal)?;
    app.on_resize(cols, rows);
    tracing::info!(
        cols,
        rows,
        mode = app.layout_mode().label(),
        products = app.catalog().len(),
        "catalog browser started"
    );

    loop {
        terminal
            .draw(|frame| draw(frame, &app))
            .map_err(AppError::Terminal)?;
        if app.should_quit() {
            break;
        }

        match events.next(tick_rate) {
            Ok(AppEvent::Key(key)) => handle_key(&mut app, key),
            Ok(AppEvent::Mouse(mouse)) => handle_mouse(&mut app, mouse),
            Ok(AppEvent::Resize(cols, rows)) => app.on_resize(cols, rows),
            Ok(AppEvent::Tick) => {}
            Ok(AppEvent::Shutdown) => app.request_quit(),
            Err(RecvTimeoutError::Timeout) => {}
            Err(RecvTimeoutError::Disconnected) => break,
        }
    }

    drop(guard);
    tracing::info!("catalog browser stopped");
    Ok(())
}
