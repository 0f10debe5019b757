//! Tool-specific error types.

use rmcp::ErrorData as McpError;
use thiserror::Error;

/// Errors that can occur while dispatching a tool call.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ToolError {
    /// The requested tool is not in the catalog.
    #[error("Unknown tool: {0}")]
    UnknownTool(String),

    /// A property listed as required was not supplied.
    #[error("Missing required argument: {0}")]
    MissingArgument(String),

    /// Arguments could not be interpreted (e.g. nested objects).
    #[error("Invalid arguments: {0}")]
    InvalidArguments(String),

    /// A value outside the declared enum, rejected in strict mode.
    #[error("Invalid value '{value}' for '{property}' (expected one of: {})", allowed.join(", "))]
    InvalidEnumValue {
        property: String,
        value: String,
        allowed: Vec<String>,
    },

    /// A catalog entry breaks a schema invariant.
    #[error("Invalid schema: {0}")]
    InvalidSchema(String),
}

impl ToolError {
    /// Create a new "unknown tool" error.
    pub fn unknown_tool(name: impl Into<String>) -> Self {
        Self::UnknownTool(name.into())
    }

    /// Create a new "missing argument" error.
    pub fn missing_argument(name: impl Into<String>) -> Self {
        Self::MissingArgument(name.into())
    }

    /// Create a new "invalid arguments" error.
    pub fn invalid_arguments(msg: impl Into<String>) -> Self {
        Self::InvalidArguments(msg.into())
    }

    /// Create a new "invalid schema" error.
    pub fn invalid_schema(msg: impl Into<String>) -> Self {
        Self::InvalidSchema(msg.into())
    }
}

impl From<ToolError> for McpError {
    fn from(err: ToolError) -> Self {
        McpError::invalid_params(err.to_string(), None)
    }
}
