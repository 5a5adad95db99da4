//! `contextwise serve` — Start the dashboard HTTP server.

use contextwise_config::AppConfig;

pub async fn run(port_override: Option<u16>) -> Result<(), Box<dyn std::error::Error>> {
    let mut config = AppConfig::load().map_err(|e| format!("Failed to load config: {e}"))?;

    if let Some(port) = port_override {
        config.gateway.port = port;
    }

    println!("🧠 Contextwise Dashboard");
    println!("   Listening: http://{}:{}", config.gateway.host, config.gateway.port);
    println!("   Default role: {}", config.dashboard.default_role);
    if !config.geolocation.enabled {
        println!("   Geolocation: disabled");
    }

    contextwise_gateway::start(config).await?;

    Ok(())
}
