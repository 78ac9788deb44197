//! Binary entry point: wires configuration, the database, and the HTTP server.

use dotenvy::dotenv;
use phone_store::{
    config,
    core::upload,
    errors::Result,
    web::{self, AppState},
};
use std::sync::Arc;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<()> {
    // 1. Initialize tracing (as early as possible)
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    // 2. Load .env file (non-fatal, env vars can be set externally)
    dotenv().ok();
    info!("Attempted to load .env file.");

    // 3. Load the main application configuration
    let app_config = config::load_app_configuration()?;
    info!("Successfully processed application configuration.");

    // 4. Initialize database
    let db = config::database::create_connection(&app_config.database_url)
        .await
        .inspect(|_| info!("Database connection established."))
        .inspect_err(|e| error!("Failed to connect to database: {}", e))?;
    config::database::create_tables(&db)
        .await
        .inspect(|_| info!("Database schema ready."))
        .inspect_err(|e| error!("Failed to create tables: {}", e))?;

    // 5. Make sure the upload directory exists before the first admin submission
    upload::ensure_upload_dir(&app_config.upload_dir)
        .await
        .inspect_err(|e| error!("Failed to create upload directory: {}", e))?;

    // 6. Serve requests until shutdown
    let state = Arc::new(AppState {
        db,
        config: app_config,
    });
    web::serve(state).await?;

    Ok(())
}
