use std::net::SocketAddr;
use std::path::PathBuf;

use media_discovery_backend::api::{self, AppState};
use media_discovery_backend::models::SystemYear;
use media_discovery_backend::services::SettingsStore;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::fmt::init();

    // Load environment variables
    dotenv::dotenv().ok();

    // Load user settings
    let settings_path = std::env::var("SETTINGS_PATH")
        .map(PathBuf::from)
        .unwrap_or_else(|_| PathBuf::from(SettingsStore::DEFAULT_SETTINGS_PATH));
    let settings = SettingsStore::load(Some(settings_path)).await?;

    let app = api::create_router(AppState::new(settings, SystemYear));

    // Run the server
    let host = std::env::var("HOST").unwrap_or_else(|_| "0.0.0.0".to_string());
    let port: u16 = std::env::var("PORT")
        .unwrap_or_else(|_| "3000".to_string())
        .parse()
        .unwrap_or(3000);

    let addr: SocketAddr = format!("{}:{}", host, port).parse()?;
    tracing::info!("🚀 Server listening on {}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
