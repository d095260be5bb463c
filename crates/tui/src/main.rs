mod app;
mod client;
mod config;
mod error;
mod i18n;
mod local_state;
mod series;
mod session;
mod ui;

use crate::error::Result;

#[tokio::main]
async fn main() -> Result<()> {
    let config = config::load()?;
    init_tracing(config.log_file.as_deref())?;
    let mut app = app::App::new(config)?;
    app.run().await?;
    Ok(())
}

/// Sends logs to a file when configured. The terminal itself belongs to
/// ratatui, so there is no stdout/stderr logging.
fn init_tracing(log_file: Option<&str>) -> Result<()> {
    let Some(path) = log_file else {
        return Ok(());
    };

    let file = std::fs::OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)?;

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("hishab_tui=info")),
        )
        .with_writer(file)
        .with_ansi(false)
        .init();

    Ok(())
}
