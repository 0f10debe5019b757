//! MCP Server Entry Point
//!
//! Initializes logging, loads configuration, and starts the server with the
//! configured transport.

use anyhow::Result;
use tracing::{Level, debug, info, warn};
use tracing_subscriber::{EnvFilter, fmt};

use hello_mcp_server::core::{Config, McpServer, TransportService};

#[tokio::main]
async fn main() -> Result<()> {
    // Load configuration from environment
    let config = Config::from_env();

    init_logging(&config.logging.level, config.logging.with_timestamps);

    info!("Starting {} v{}", config.server.name, config.server.version);
    for warning in &config.warnings {
        warn!("{}", warning);
    }
    if config.tools.strict_enums {
        info!("Strict enum validation enabled");
    }
    log_process_info();

    let server = McpServer::new(config.clone())?;

    info!("Server initialized");

    let transport = TransportService::new(config.transport);
    transport.run(server).await?;

    info!("Server shutting down");

    Ok(())
}

/// Initialize the logging subsystem.
///
/// Logs go to stderr; stdout is reserved for the STDIO transport.
fn init_logging(level: &str, with_timestamps: bool) {
    let level = match level.to_lowercase().as_str() {
        "trace" => Level::TRACE,
        "debug" => Level::DEBUG,
        "info" => Level::INFO,
        "warn" => Level::WARN,
        "error" => Level::ERROR,
        _ => Level::INFO,
    };

    let filter = EnvFilter::from_default_env().add_directive(level.into());

    let builder = fmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_thread_ids(false)
        .with_file(false)
        .with_line_number(false)
        .with_writer(std::io::stderr);

    if with_timestamps {
        builder.init();
    } else {
        builder.without_time().init();
    }
}

/// Log where the process runs from; useful when a desktop client spawns it.
fn log_process_info() {
    match std::env::current_dir() {
        Ok(dir) => debug!("Working directory: {}", dir.display()),
        Err(e) => debug!("Working directory unavailable: {}", e),
    }
    match std::env::current_exe() {
        Ok(exe) => debug!("Executable path: {}", exe.display()),
        Err(e) => debug!("Executable path unavailable: {}", e),
    }
}
