use anyhow::Context;
use clap::Parser;
use projectbrief::{
    api::{create_router, AppState},
    Config,
};
use std::path::PathBuf;
use tracing::info;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(author, version, about = "HTTP service that summarizes uploaded project archives", long_about = None)]
struct Cli {
    /// Config file (defaults to <config dir>/projectbrief/config.toml)
    #[arg(short, long)]
    config: Option<PathBuf>,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    let config = Config::load(cli.config.as_deref()).context("Failed to load configuration")?;

    // Initialize logging
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(&config.log_level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .compact()
        .init();

    config
        .ensure_directories_exist()
        .await
        .context("Failed to prepare upload and work directories")?;

    let state = AppState::new(&config);
    let app = create_router(state, &config.server);

    let address = config.bind_address();
    info!("Upload directory: {}", config.upload_dir.display());
    info!("Workspace root: {}", config.analysis.work_dir.display());

    let listener = tokio::net::TcpListener::bind(&address)
        .await
        .with_context(|| format!("Failed to bind {}", address))?;
    info!("Server listening on http://{}", address);

    axum::serve(listener, app).await?;

    Ok(())
}
