mod config;
mod controller;
mod logging;
mod model;
mod view;

use std::io;
use std::sync::Arc;
use std::time::Duration;
use anyhow::Result;
use tokio::sync::Mutex;
use crossterm::{
    event::{self, Event},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};

use config::Config;
use controller::AppController;
use model::{AppModel, TmdbClient};
use view::AppView;

#[tokio::main]
async fn main() -> Result<()> {
    if let Err(e) = logging::init_logging() {
        eprintln!("Warning: Failed to initialize logging: {}", e);
    }

    tracing::info!("=== Movie Browser Starting ===");

    let config = Config::from_env();
    let view = AppView::new(config.image_base_url.clone());
    let tmdb = TmdbClient::new(reqwest::Client::new(), config);

    let model = Arc::new(Mutex::new(AppModel::new()));
    let controller = AppController::new(model.clone(), Arc::new(tmdb));

    let mut terminal = setup_terminal()?;

    // First page of the popular catalog; the grid shows a placeholder until it lands
    controller.load_initial().await;

    let res = run_app(&mut terminal, model, &view, controller).await;

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    if let Err(err) = res {
        tracing::error!(error = ?err, "Application error");
    }

    tracing::info!("Movie Browser shutting down");
    Ok(())
}

/// Raw mode plus alternate screen. A failure part way through leaves the
/// terminal as it was found.
fn setup_terminal() -> io::Result<Terminal<CrosstermBackend<io::Stdout>>> {
    enable_raw_mode()?;
    rollback_on_error(
        || {
            let mut stdout = io::stdout();
            execute!(stdout, EnterAlternateScreen)?;
            Terminal::new(CrosstermBackend::new(stdout))
        },
        || {
            let _ = execute!(io::stdout(), LeaveAlternateScreen);
            let _ = disable_raw_mode();
        },
    )
}

fn rollback_on_error<T>(
    setup: impl FnOnce() -> io::Result<T>,
    rollback: impl FnOnce(),
) -> io::Result<T> {
    match setup() {
        Ok(value) => Ok(value),
        Err(e) => {
            tracing::error!(error = %e, "Terminal setup failed, restoring terminal");
            rollback();
            Err(e)
        }
    }
}

async fn run_app(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    model: Arc<Mutex<AppModel>>,
    view: &AppView,
    controller: AppController,
) -> io::Result<()> {
    loop {
        let (ui_state, content_state, should_quit) = {
            let model_guard = model.lock().await;
            (
                model_guard.get_ui_state(),
                model_guard.get_content_state(),
                model_guard.should_quit(),
            )
        };

        if should_quit {
            break;
        }

        terminal.draw(|f| {
            view.render(f, &ui_state, &content_state);
        })?;

        // Short poll so responses landing in the background show up promptly
        if event::poll(Duration::from_millis(50))? {
            if let Event::Key(key) = event::read()? {
                if let Err(e) = controller.handle_key_event(key).await {
                    tracing::warn!(error = %e, "Key handling failed");
                }
            }
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use std::cell::Cell;

    use super::*;

    #[test]
    fn failed_setup_runs_rollback() {
        let restored = Cell::new(false);
        let result: io::Result<()> = rollback_on_error(
            || Err(io::Error::other("no tty")),
            || restored.set(true),
        );

        assert!(result.is_err());
        assert!(restored.get());
    }

    #[test]
    fn successful_setup_skips_rollback() {
        let restored = Cell::new(false);
        let result = rollback_on_error(|| Ok(7), || restored.set(true));

        assert_eq!(result.unwrap(), 7);
        assert!(!restored.get());
    }
}
