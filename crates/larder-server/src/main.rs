use clap::Parser;
use larder_server::routes;
use larder_server::state::AppState;
use larder_storage::MemStore;
use std::sync::Arc;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "larder-server")]
#[command(about = "Larder in-memory recipe store HTTP server")]
struct Args {
    /// Listen address
    #[arg(long, default_value = "127.0.0.1:8080")]
    listen_addr: String,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let args = Args::parse();

    // One store for the process lifetime, shared by reference into the
    // router; no ambient global state.
    let state = AppState::new(Arc::new(MemStore::new()));
    let app = routes::router(state);

    let listener = tokio::net::TcpListener::bind(&args.listen_addr).await?;
    tracing::info!("larder server listening on {}", args.listen_addr);
    axum::serve(listener, app).await?;

    Ok(())
}
