use anyhow::Result;
use kchat_relay::{config, logging, server};
use tracing::info;

#[tokio::main]
async fn main() -> Result<()> {
    // Load configuration first (before logging setup). A missing credential stops here.
    let config = match config::load().await {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Failed to load configuration: {}", e);
            std::process::exit(1);
        }
    };

    // RUST_LOG, when set, takes precedence over the configured level
    let rust_log = std::env::var("RUST_LOG").ok();
    let (log_filter, filter) =
        match logging::resolve_filter(rust_log.as_deref(), &config.server.logs.level) {
            Ok(resolved) => resolved,
            Err(e) => {
                eprintln!("{}", e);
                std::process::exit(1);
            }
        };

    logging::init(filter);

    info!("Starting KCHATAI relay with log filter: {}", log_filter);
    info!(
        provider = ?config.llm.provider,
        model = %config.llm.model_id(),
        "Configuration loaded successfully"
    );

    server::run(config).await?;

    Ok(())
}
