//! MCP Server Entry Point
//!
//! Loads configuration, refuses to start when it is unusable, then serves
//! the enabled Blink actions on the configured transport.

use anyhow::{Context, Result};
use tracing::{Level, error, info};
use tracing_subscriber::{EnvFilter, fmt};

use blink_actions_mcp_server::core::{Config, McpServer, TransportService};

#[tokio::main]
async fn main() -> Result<()> {
    let config = Config::from_env();

    init_logging(&config.logging.level);

    info!("Starting {} v{}", config.server.name, config.server.version);
    config.log_summary();

    if let Err(e) = config.validate() {
        error!("Invalid configuration: {}", e);
        return Err(e).context("refusing to start");
    }

    let server = McpServer::new(config.clone())?;

    info!(
        "Server initialized with {} action tool(s) via {}",
        server.catalog().len(),
        config.transport.description()
    );

    let transport = TransportService::new(config.transport);
    transport.run(server).await?;

    info!("Server shutting down");

    Ok(())
}

/// Initialize the logging subsystem.
///
/// Logs are written to stderr; stdout is reserved for the STDIO transport.
fn init_logging(level: &str) {
    let level = match level.to_lowercase().as_str() {
        "trace" => Level::TRACE,
        "debug" => Level::DEBUG,
        "info" => Level::INFO,
        "warn" => Level::WARN,
        "error" => Level::ERROR,
        _ => Level::INFO,
    };

    let filter = EnvFilter::from_default_env().add_directive(level.into());

    fmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_thread_ids(false)
        .with_file(false)
        .with_line_number(false)
        .with_writer(std::io::stderr)
        .init();
}
