//! todo-tui entry point.

use std::time::Duration;

use crossterm::event::{self, Event as CrosstermEvent, KeyEventKind};
use todo_tui::app::{App, Command};
use todo_tui::config::TuiConfig;
use todo_tui::error::TuiError;
use todo_tui::events::TuiEvent;
use todo_tui::keys::map_key;
use todo_tui::logging;
use todo_tui::terminal;
use todo_tui::transport::ReqwestTransport;
use todo_tui::views::render_app;
use todo_view_core::{fetch_collection, fetch_todo, TodoClient};
use tokio::sync::mpsc;
use tracing::info;

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<(), TuiError> {
    let config = TuiConfig::load()?;
    logging::init(&config.log_file)?;
    info!(base_url = %config.base_url, "starting");

    let client = TodoClient::new(&config.base_url);
    let transport = ReqwestTransport::new(config.request_timeout())?;
    let mut app = App::new(client.base_url());

    let (mut tui, _guard) = terminal::enter()?;

    let (event_tx, mut event_rx) = mpsc::channel::<TuiEvent>(256);
    spawn_input_reader(event_tx.clone());

    let mount = app.mount();
    run_command(mount, &client, &transport, &event_tx);

    loop {
        tui.draw(|f| render_app(f, &app))?;

        let Some(event) = event_rx.recv().await else {
            break;
        };
        match event {
            TuiEvent::Input(key) => {
                let Some(action) = map_key(key) else {
                    continue;
                };
                match app.handle_action(action) {
                    Some(Command::Quit) => break,
                    Some(command) => run_command(command, &client, &transport, &event_tx),
                    None => {}
                }
            }
            TuiEvent::ListFetched { ticket, outcome } => app.list_fetched(ticket, outcome),
            TuiEvent::DetailFetched { ticket, outcome } => app.detail_fetched(ticket, outcome),
            TuiEvent::Resize { .. } => {}
        }
    }

    info!("exiting");
    Ok(())
}

/// Spawn the fetch a command asks for. The result comes back as an event.
fn run_command(
    command: Command,
    client: &TodoClient,
    transport: &ReqwestTransport,
    sender: &mpsc::Sender<TuiEvent>,
) {
    let client = client.clone();
    let transport = transport.clone();
    let sender = sender.clone();
    match command {
        Command::FetchCollection(ticket) => {
            tokio::spawn(async move {
                let outcome = fetch_collection(&client, &transport).await;
                let _ = sender.send(TuiEvent::ListFetched { ticket, outcome }).await;
            });
        }
        Command::FetchTodo { ticket, id } => {
            tokio::spawn(async move {
                let outcome = fetch_todo(&client, &transport, id).await;
                let _ = sender.send(TuiEvent::DetailFetched { ticket, outcome }).await;
            });
        }
        Command::Quit => {}
    }
}

fn spawn_input_reader(sender: mpsc::Sender<TuiEvent>) {
    std::thread::spawn(move || loop {
        if let Ok(true) = event::poll(Duration::from_millis(200)) {
            if let Ok(evt) = event::read() {
                let forwarded = match evt {
                    CrosstermEvent::Key(key) if key.kind == KeyEventKind::Press => {
                        sender.blocking_send(TuiEvent::Input(key))
                    }
                    CrosstermEvent::Resize(width, height) => {
                        sender.blocking_send(TuiEvent::Resize { width, height })
                    }
                    _ => Ok(()),
                };
                if forwarded.is_err() {
                    break;
                }
            }
        }
    });
}
