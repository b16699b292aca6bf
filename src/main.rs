// src/main.rs

use clap::Parser;
use tracing::{Level, info};
use tracing_subscriber::FmtSubscriber;

use cod_studio::config::CONFIG;
use cod_studio::server::{self, AppState};
use cod_studio::tools::tool_definitions;

#[derive(Parser, Debug)]
#[command(name = "cod-studio", about = "Chain of Draft reasoning studio backend")]
struct Cli {
    /// Bind host (overrides COD_HOST)
    #[arg(long)]
    host: Option<String>,

    /// Bind port (overrides COD_PORT)
    #[arg(long)]
    port: Option<u16>,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let level = CONFIG
        .log_level
        .parse::<Level>()
        .unwrap_or(Level::INFO);
    let subscriber = FmtSubscriber::builder().with_max_level(level).finish();
    tracing::subscriber::set_global_default(subscriber)?;

    info!("Starting CoD Studio Backend");
    info!("Model: {}", CONFIG.model);
    info!("Tools: {} registered", tool_definitions().len());
    info!(
        "Model credential: {}",
        if CONFIG.has_model_credential() { "configured" } else { "missing" }
    );
    info!(
        "Search credential: {}",
        if CONFIG.has_search_credential() { "configured" } else { "missing" }
    );

    let state = AppState::from_config()?;

    let host = cli.host.unwrap_or_else(|| CONFIG.host.clone());
    let port = cli.port.unwrap_or(CONFIG.port);
    let bind_address = format!("{}:{}", host, port);

    server::run(state, &bind_address).await
}
