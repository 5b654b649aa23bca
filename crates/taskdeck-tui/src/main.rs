mod actions;
mod input;
mod logging;
mod render;
mod runtime;
mod ui;

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;

use taskdeck_core::config::CoreConfig;

use crate::runtime::run_app;
use crate::ui::{App, InputMode, View};

#[derive(Parser, Debug)]
#[command(name = "taskdeck", version, about = "Terminal client for the TaskDeck todo backend")]
struct Args {
    /// Backend origin, e.g. http://localhost:5000. Falls back to
    /// TASKDECK_API_URL, then the default.
    #[arg(long)]
    api_url: Option<String>,

    /// Directory for credentials and preferences. Defaults to ~/.taskdeck.
    #[arg(long)]
    data_dir: Option<PathBuf>,
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();

    let api_url = args.api_url.unwrap_or_else(CoreConfig::api_url_from_env);
    let config = match args.data_dir {
        Some(dir) => CoreConfig::new(dir, api_url),
        None => {
            let mut config = CoreConfig::default();
            config.api_url = api_url;
            config
        }
    };
    std::fs::create_dir_all(&config.data_dir)
        .with_context(|| format!("creating data dir {}", config.data_dir.display()))?;

    logging::init();
    tracing::info!(api_url = %config.api_url, "starting taskdeck");

    // Restore terminal on panic so the trace is readable
    let original_hook = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |panic_info| {
        let _ = crossterm::terminal::disable_raw_mode();
        let _ = crossterm::execute!(
            std::io::stdout(),
            crossterm::terminal::LeaveAlternateScreen,
            crossterm::event::DisableBracketedPaste
        );
        original_hook(panic_info);
    }));

    let mut app = App::new(&config);
    app.session.restore(&mut app.api).await;
    if app.session.is_authenticated() {
        app.view = View::Tasks;
        app.input_mode = InputMode::Normal;
    }

    let mut terminal = ui::init_terminal()?;
    let result = run_app(&mut terminal, &mut app).await;
    ui::restore_terminal()?;

    if let Err(err) = result {
        eprintln!("Error: {err}");
    }

    Ok(())
}
