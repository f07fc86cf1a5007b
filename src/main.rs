mod auth;
mod config;
mod controller;
mod error;
mod logging;
mod model;
mod view;

use std::io;
use std::time::Duration;

use anyhow::Result;
use crossterm::{
    event::{self, Event, KeyCode},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, size, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};

use config::Config;
use controller::SessionController;
use error::AppError;
use model::{CatalogClient, PlayerClient, SessionModel, DEFAULT_PAUSE_THRESHOLD};
use view::{AppView, BROWSER_CHROME_HEIGHT, STATUS_PANE_HEIGHT};

const MIN_COLS: u16 = 40;
const MIN_ROWS: u16 = 8;
const WATCHER_SHUTDOWN: Duration = Duration::from_secs(2);

fn page_height(rows: u16) -> usize {
    rows.saturating_sub(STATUS_PANE_HEIGHT + BROWSER_CHROME_HEIGHT)
        .max(1) as usize
}

#[tokio::main]
async fn main() -> Result<()> {
    if let Err(e) = logging::init_logging() {
        eprintln!("Warning: Failed to initialize logging: {}", e);
    }

    tracing::info!("=== spoticon starting ===");

    let config = Config::load()?;

    // Checked before the terminal is put into raw mode so the message is
    // actually readable.
    let (cols, rows) = size()?;
    if cols < MIN_COLS || rows < MIN_ROWS {
        return Err(AppError::Render {
            cols,
            rows,
            min_cols: MIN_COLS,
            min_rows: MIN_ROWS,
        }
        .into());
    }

    let session = auth::authorize(&config).await?;
    if !session.user_authorized {
        tracing::warn!("running read-only, playback commands disabled");
    }

    let catalog = CatalogClient::new(session.client.clone());
    let player = session
        .user_authorized
        .then(|| PlayerClient::new(session.client.clone()));

    let model = SessionModel::new(
        config.pause_threshold.unwrap_or(DEFAULT_PAUSE_THRESHOLD),
        page_height(rows),
    );
    let quit_key = config.quit_key_code().unwrap_or(KeyCode::Char('q'));
    let controller = SessionController::new(
        model.clone(),
        catalog,
        player,
        config.username.clone(),
        quit_key,
    );

    tracing::info!("Starting TUI...");

    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let watcher = controller.spawn_watcher();

    let res = run_app(&mut terminal, model.clone(), controller).await;

    model.request_quit().await;
    if let Some(handle) = watcher {
        let _ = tokio::time::timeout(WATCHER_SHUTDOWN, handle).await;
    }

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    if let Err(ref err) = res {
        tracing::error!(error = ?err, "Application error");
    }

    tracing::info!("spoticon shutting down");
    res.map_err(Into::into)
}

async fn run_app(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    model: SessionModel,
    controller: SessionController,
) -> io::Result<()> {
    loop {
        model.auto_clear_old_flash().await;

        // Follow resizes before taking the frame's snapshot.
        let area = terminal.size()?;
        model.set_page_height(page_height(area.height)).await;

        let browser = model.browser_snapshot().await;
        let playback = model.now_playing_info().await;
        let ui_state = model.ui_snapshot().await;

        terminal.draw(|f| {
            AppView::render(f, &browser, &playback, &ui_state);
        })?;

        // Handle input with shorter poll time for smoother UI updates
        if event::poll(Duration::from_millis(50))? {
            if let Event::Key(key) = event::read()? {
                let _ = controller.handle_key_event(key).await;
            }
        }

        if model.should_quit().await {
            break;
        }
    }

    Ok(())
}
