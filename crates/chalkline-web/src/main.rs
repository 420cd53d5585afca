//! Chalkline Web Server
//!
//! Run with: cargo run -p chalkline-web

use std::net::SocketAddr;
use std::path::Path;

use tracing::{info, Level};
use tracing_subscriber::FmtSubscriber;

use chalkline_content::Catalog;
use chalkline_web::config::Config;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing
    let subscriber = FmtSubscriber::builder()
        .with_max_level(Level::INFO)
        .finish();
    tracing::subscriber::set_global_default(subscriber)?;

    let config = Config::load()?;

    // Load the content catalog once; it is immutable for the life of the process.
    let catalog = match config.content.dataset_path.as_deref() {
        Some(path) => Catalog::from_json_file(Path::new(path))?,
        None => Catalog::builtin()?,
    };
    info!(
        plays = catalog.plays().len(),
        movies = catalog.movies().len(),
        "Content catalog loaded"
    );

    let state = chalkline_web::state::AppState::new(catalog);
    let app = chalkline_web::router::build_router(state);

    let addr: SocketAddr = format!("{}:{}", config.server.host, config.server.port).parse()?;
    info!("Server listening on http://{}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
