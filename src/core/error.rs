//! Error types and handling for the MCP server.
//!
//! This module defines a unified error type covering the tools domain and
//! the transport layer.

use thiserror::Error;

use super::transport::TransportError;

/// A specialized Result type for MCP server operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Unified error type for the MCP server.
#[derive(Debug, Error)]
pub enum Error {
    /// Error originating from the tools domain.
    #[error("Tool error: {0}")]
    Tool(#[from] crate::domains::tools::ToolError),

    /// Error raised while starting or running a transport.
    #[error("Transport error: {0}")]
    Transport(#[from] TransportError),
}
