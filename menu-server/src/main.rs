use menu_server::common::init_logger;
use menu_server::{Config, Server, ServerState};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // 1. Environment (.env) and logging
    dotenv::dotenv().ok();
    init_logger();

    tracing::info!("Menu server starting...");

    // 2. Load configuration
    let config = Config::from_env();

    // 3. Initialize server state (seeds the catalog)
    let state = ServerState::initialize(&config)?;

    // 4. Run the HTTP server
    let server = Server::with_state(config, state);
    if let Err(e) = server.run().await {
        tracing::error!("Server error: {}", e);
        return Err(e);
    }

    Ok(())
}
