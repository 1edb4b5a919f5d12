use clap::Parser;
use risk_api::{build_router, ApiConfig, ApiState};
use std::net::SocketAddr;
use tracing::info;

#[derive(Debug, Parser)]
#[command(name = "risk-api", version, about = "Borrower risk-tier HTTP service")]
struct Cli {
    /// Socket address to bind, e.g. 127.0.0.1:8080
    #[arg(long, default_value = "127.0.0.1:8080", env = "RISK_API_LISTEN")]
    listen: SocketAddr,
    /// Log raw request bodies at debug level.
    #[arg(long, default_value_t = false, env = "RISK_API_LOG_BODIES")]
    log_request_bodies: bool,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            std::env::var("RUST_LOG").unwrap_or_else(|_| "risk_api=info,info".to_string()),
        )
        .init();

    let cli = Cli::parse();
    let state = ApiState::new(ApiConfig {
        log_request_bodies: cli.log_request_bodies,
    });
    let app = build_router(state);

    let listener = tokio::net::TcpListener::bind(cli.listen).await?;
    info!("risk-api listening on {}", listener.local_addr()?);

    axum::serve(listener, app).await?;
    Ok(())
}
