use anyhow::Result;
use tracing::{error, info, warn};
use culturesphere_core::Config;

mod app;
mod handler;
mod logging;
mod theme;
mod tui;
mod ui;

use app::App;
use tui::{EventHandler, Tui};

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    let log_path = logging::init()?;
    info!("Starting CultureSphere v{} (log: {:?})", env!("CARGO_PKG_VERSION"), log_path);

    let config = Config::load().unwrap_or_else(|e| {
        warn!("Failed to load config, using defaults: {e}");
        Config::new()
    });

    let mut app = App::new(&config);

    tui::install_panic_hook();
    let mut terminal = tui::init()?;
    let size = terminal.size()?;
    app.resize(size.width, size.height);

    let mut events = EventHandler::new();
    let result = run(&mut terminal, &mut app, &mut events).await;

    tui::restore()?;
    if let Err(e) = &result {
        error!("Exited with error: {e:#}");
    }
    info!("Goodbye");
    result
}

async fn run(terminal: &mut Tui, app: &mut App, events: &mut EventHandler) -> Result<()> {
    while !app.should_quit {
        app.poll_requests();
        terminal.draw(|frame| ui::render(app, frame))?;

        match events.next().await {
            Some(event) => handler::handle_event(app, event),
            None => break,
        }
    }
    Ok(())
}
