use std::io;
use std::time::Instant;

use crossterm::{
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};
use tokio::sync::mpsc::{unbounded_channel, UnboundedSender};

use super::app::InteractiveApp;
use super::event::{DataEvent, Event, EventHandler};
use super::keys::map_key;
use crate::client::CatalogClient;
use crate::constants::TICK_RATE_MS;
use crate::logging::{log_debug, log_error, log_info};
use crate::resource::ResourceAction;

pub async fn run_interactive_mode(endpoint: String) -> Result<(), Box<dyn std::error::Error>> {
    log_info("Starting interactive mode");

    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;
    log_debug("Terminal initialized");

    let mut app = InteractiveApp::new();
    let events = EventHandler::new(TICK_RATE_MS);

    let (data_tx, mut data_rx) = unbounded_channel();
    spawn_catalog_fetches(&mut app, CatalogClient::new(endpoint), data_tx);

    loop {
        while let Ok(data_event) = data_rx.try_recv() {
            log_debug(&format!("Catalog resolved: {:?}", data_event));
            app.on_data_event(data_event);
        }

        if let Err(e) = terminal.draw(|f| super::ui::draw(f, &app)) {
            log_error(&format!("Error drawing UI: {}", e));
            return Err(Box::new(e));
        }

        match events.recv()? {
            Event::Key(key_event) => {
                let action = map_key(key_event, app.focused_dropdown().is_open());
                app.handle_action(action, Instant::now());
            }
            Event::Tick => {
                app.poll_settled(Instant::now());
            }
        }

        if app.should_quit {
            break;
        }
    }

    log_info("Exiting interactive mode");

    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    Ok(())
}

/// Kick off both catalog fetches, fire-and-forget. They may resolve
/// in either order or never; a failure is logged and leaves the
/// resource in Loading, which the UI renders as an empty list.
fn spawn_catalog_fetches(
    app: &mut InteractiveApp,
    client: CatalogClient,
    data_tx: UnboundedSender<DataEvent>,
) {
    app.cascade.dispatch_continents(ResourceAction::Loading);
    app.cascade.dispatch_countries(ResourceAction::Loading);

    let tx = data_tx.clone();
    let continents_client = client.clone();
    tokio::spawn(async move {
        match continents_client.fetch_continents().await {
            Ok(catalog) => {
                let _ = tx.send(DataEvent::ContinentsLoaded(Some(catalog)));
            }
            Err(e) => log_error(&format!("Continent catalog fetch failed: {}", e)),
        }
    });

    tokio::spawn(async move {
        match client.fetch_countries().await {
            Ok(catalog) => {
                let _ = data_tx.send(DataEvent::CountriesLoaded(Some(catalog)));
            }
            Err(e) => log_error(&format!("Country catalog fetch failed: {}", e)),
        }
    });
}
