use anyhow::Result;
use clap::Parser;
use crossterm::{
    event::{DisableBracketedPaste, EnableBracketedPaste, EventStream},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use futures::StreamExt;
use ratatui::{backend::CrosstermBackend, Terminal};
use std::{io, time::Duration};
use tokio::sync::mpsc;
use tracing::{error, info, warn};

use imgfetch::app::cli::Args;
use imgfetch::app::config::{AppConfig, UserConfig};
use imgfetch::app::events::AppEvent;
use imgfetch::app::{App, Command};
use imgfetch::loader::ImageLoader;
use imgfetch::{logging, theme, ui};

type Tui = Terminal<CrosstermBackend<io::Stdout>>;

#[tokio::main]
async fn main() -> Result<()> {
    human_panic::setup_panic!();
    let args = Args::parse();

    if args.generate_config {
        println!("{}", UserConfig::default().to_toml()?);
        return Ok(());
    }

    let config = AppConfig::load();
    let log_guard = logging::init(&AppConfig::get_config_dir(), config.log_level());
    if log_guard.is_none() {
        eprintln!("imgfetch: file logging disabled, could not open the log file");
    }
    info!(version = env!("CARGO_PKG_VERSION"), "starting imgfetch");

    let loader = ImageLoader::new(config.http.build_client()?);
    let mut app = App::new(&config, theme::load_theme(&AppConfig::get_theme_path()));
    if args.grayscale {
        app.display.grayscale = true;
    }

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableBracketedPaste)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let result = run(&mut terminal, &mut app, &loader, args.url).await;
    if let Err(ref e) = result {
        error!(error = %e, "event loop failed");
    }

    disable_raw_mode()?;
    execute!(terminal.backend_mut(), DisableBracketedPaste, LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    info!("bye");
    result
}

async fn run(
    terminal: &mut Tui,
    app: &mut App,
    loader: &ImageLoader,
    initial_url: Option<String>,
) -> Result<()> {
    let (tx, mut rx) = mpsc::channel::<AppEvent>(64);

    // Terminal input
    let tx_input = tx.clone();
    tokio::spawn(async move {
        let mut reader = EventStream::new();
        loop {
            match reader.next().await {
                Some(Ok(event)) => {
                    if tx_input.send(AppEvent::Input(event)).await.is_err() {
                        return;
                    }
                }
                Some(Err(e)) => {
                    warn!(error = %e, "terminal input failed");
                    break;
                }
                None => break,
            }
        }
        let _ = tx_input.send(AppEvent::InputClosed).await;
    });

    // Loader snapshots
    let tx_load = tx.clone();
    let mut load_rx = loader.subscribe();
    tokio::spawn(async move {
        while load_rx.changed().await.is_ok() {
            let snapshot = load_rx.borrow_and_update().clone();
            if tx_load.send(AppEvent::LoadUpdate(snapshot)).await.is_err() {
                break;
            }
        }
    });

    // Spinner tick
    let tx_tick = tx;
    tokio::spawn(async move {
        let mut interval = tokio::time::interval(Duration::from_millis(100));
        loop {
            interval.tick().await;
            if tx_tick.send(AppEvent::Tick).await.is_err() {
                break;
            }
        }
    });

    if let Some(url) = initial_url {
        app.set_url(&url);
        dispatch(loader, Command::Load(url));
    }

    let mut redraw = true;
    while app.is_running {
        if redraw {
            terminal.draw(|f| ui::ui(f, app))?;
        }

        let Some(event) = rx.recv().await else {
            break;
        };
        let update = app.on_event(event);
        if let Some(command) = update.command {
            dispatch(loader, command);
        }
        redraw = update.redraw;
    }

    Ok(())
}

fn dispatch(loader: &ImageLoader, command: Command) {
    match command {
        // The task handle is not needed: results arrive through the subscription
        Command::Load(url) => {
            let _ = loader.request_load(&url);
        }
        Command::Clear => loader.reset(),
    }
}
