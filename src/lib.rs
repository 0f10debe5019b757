//! Hello World MCP Server Library
//!
//! A small Model Context Protocol (MCP) server exposing two tools:
//! `say_hello` (a greeting in Japanese or English) and `get_time` (the
//! current local time in 12- or 24-hour form).
//!
//! # Architecture
//!
//! - **core**: configuration, error handling, the rmcp server handler and
//!   the stdio/tcp/http transports
//! - **domains::tools**: the tool catalog, argument resolver and dispatcher
//!
//! # Example
//!
//! ```rust,no_run
//! use hello_mcp_server::{Config, McpServer, core::TransportService};
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     let config = Config::from_env();
//!     let server = McpServer::new(config.clone())?;
//!     TransportService::new(config.transport).run(server).await?;
//!     Ok(())
//! }
//! ```

pub mod core;
pub mod domains;

// Re-export commonly used types for convenience
pub use core::{Config, Error, McpServer, Result};
