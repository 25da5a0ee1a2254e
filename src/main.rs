//! Contact Assistant - Main entry point
//!
//! Runs the interactive assistant bot on the terminal.

use anyhow::Result;
use contact_assistant::{run_session, Assistant, Config, SystemClock};
use std::io;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    // Initialize logging first (stderr only to keep stdout for the session)
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(Config::log_level_from_env()));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();

    // Load configuration
    let config = match Config::from_env() {
        Ok(cfg) => cfg,
        Err(e) => {
            error!("Failed to load configuration: {}", e);
            return Err(e.into());
        }
    };

    info!(
        window_days = config.birthday_window_days,
        wrap_year = config.birthday_wrap_year,
        "Configuration loaded successfully"
    );

    let mut assistant = Assistant::new(SystemClock, config.birthday_window());

    let stdin = io::stdin();
    let mut stdout = io::stdout();
    if let Err(e) = run_session(&mut assistant, &config.prompt, stdin.lock(), &mut stdout) {
        error!("Session aborted: {}", e);
        return Err(e.into());
    }

    Ok(())
}
