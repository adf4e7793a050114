use std::path::PathBuf;

use clap::Parser;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use clipstash::{api, store::ItemStore};

#[derive(Parser)]
#[command(name = "clipstash", version)]
#[command(about = "Self-hosted clipboard history with pinning")]
struct Cli {
    /// Port for the HTTP API
    #[arg(short, long, default_value = "8084")]
    port: u16,

    /// Override the history file location
    #[arg(long)]
    data_file: Option<PathBuf>,
}

fn init_tracing() {
    let filter = tracing_subscriber::EnvFilter::new(
        std::env::var("RUST_LOG").unwrap_or_else(|_| "clipstash=debug,tower_http=debug".into()),
    );

    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer())
        .init();
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_tracing();

    tracing::info!("clipstash {}", env!("CARGO_PKG_VERSION"));

    let store = match cli.data_file {
        Some(path) => ItemStore::open(path)?,
        None => ItemStore::open_default()?,
    };
    tracing::info!("Clipboard history at {}", store.data_path().display());

    let app = api::create_router(store);

    let listener = tokio::net::TcpListener::bind(format!("127.0.0.1:{}", cli.port)).await?;
    tracing::info!("clipstash listening on http://127.0.0.1:{}", cli.port);

    axum::serve(listener, app).await?;

    Ok(())
}
