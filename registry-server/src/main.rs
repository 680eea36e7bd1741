use registry_server::{Config, Server, ServerState, init_logger};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // 1. Environment (.env) and configuration - fail fast on missing fields
    dotenv::dotenv().ok();
    let config = Config::from_env()?;

    // 2. Logging
    init_logger(&config.log_level);

    tracing::info!("Member registry starting...");

    // 3. State (database, migrations, JWT service, allowlist)
    let state = ServerState::initialize(&config).await?;

    // 4. HTTP server
    let server = Server::with_state(config, state);

    if let Err(e) = server.run().await {
        tracing::error!("Server error: {}", e);
        return Err(e.into());
    }

    Ok(())
}
