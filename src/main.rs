use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use tokio::net::TcpListener;
use tracing::info;

use connect_n::config::AppConfig;
use connect_n::game::GameEngine;
use connect_n::web::{self, AppState};

/// Serve the connect-N game over HTTP.
#[derive(Parser)]
#[command(name = "connect-n", about = "Play connect-N in the browser")]
struct Cli {
    /// Path to TOML configuration file
    #[arg(long, default_value = "connect-n.toml")]
    config: PathBuf,

    /// Override the listening port (takes precedence over PORT)
    #[arg(long)]
    port: Option<u16>,

    /// Print the default configuration as TOML and exit
    #[arg(long)]
    print_config: bool,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    if cli.print_config {
        print!("{}", AppConfig::default_toml());
        return Ok(());
    }

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "connect_n=info,tower_http=info".into()),
        )
        .init();

    let mut config = AppConfig::load_or_default(&cli.config)
        .with_context(|| format!("loading config from {}", cli.config.display()))?;
    config
        .apply_env_overrides()
        .context("applying environment overrides")?;
    if let Some(port) = cli.port {
        config.server.port = port;
        config.validate().context("validating --port")?;
    }

    let engine = match config.game.bot_seed {
        Some(seed) => GameEngine::with_seed(seed),
        None => GameEngine::new(),
    };
    let state = AppState::new(engine, &config.server.static_prefix);
    let app = web::router(state, &config.server);

    let addr = config.bind_addr();
    let listener = TcpListener::bind(&addr)
        .await
        .with_context(|| format!("binding {addr}"))?;
    info!(%addr, static_dir = %config.server.static_dir.display(), "connect-n listening");
    info!("open http://localhost:{} in a browser", config.server.port);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("serving HTTP")?;
    Ok(())
}

async fn shutdown_signal() {
    if let Err(err) = tokio::signal::ctrl_c().await {
        tracing::warn!(%err, "failed to listen for Ctrl+C");
        std::future::pending::<()>().await;
    }
    info!("shutdown signal received, stopping server");
}
