use taskboard_mock_server::{ServerConfig, Tables};
use tokio::net::TcpListener;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<(), std::io::Error> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let config = ServerConfig::from_env();
    let tables = if config.seed { Tables::seeded() } else { Tables::default() };
    let addr = config.addr();
    let listener = TcpListener::bind(&addr).await?;
    tracing::info!(%addr, seed = config.seed, "listening");
    taskboard_mock_server::serve(listener, tables).await
}
