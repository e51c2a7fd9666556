use anyhow::Context;
use clap::Parser;
use configuration::{init_tracing, load_settings, Cli};

/// The main entry point for the rate calculator API.
#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // A missing .env is fine; the environment and defaults still apply.
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    let mut settings = load_settings().context("Failed to load settings")?;
    settings.apply_cli(&cli);

    let _log_guard = init_tracing(settings.effective_log_level())?;
    tracing::info!(
        host = %settings.host,
        port = settings.port,
        debug = settings.debug,
        "Starting rate calculator v{}",
        env!("CARGO_PKG_VERSION")
    );

    web_server::run_server(&settings).await
}
