//! Greeting tool definition.
//!
//! Greets a person by name in Japanese or English.

use rmcp::model::{CallToolResult, Content};
use tracing::{info, instrument};

use crate::domains::tools::catalog::{SchemaNode, ToolDescriptor};
use crate::domains::tools::error::ToolError;
use crate::domains::tools::resolver::ResolvedArguments;

// ============================================================================
// Tool Parameters
// ============================================================================

/// Language of the greeting.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Language {
    #[default]
    Japanese,
    English,
}

impl Language {
    /// Interpret a `language` argument.
    ///
    /// Only `english` selects English; absent, empty and unrecognised
    /// values all greet in Japanese.
    pub fn from_arg(value: Option<&str>) -> Self {
        match value {
            Some("english") => Self::English,
            _ => Self::Japanese,
        }
    }
}

/// Parameters for the greeting tool.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SayHelloParams {
    /// Who to greet. Interpolated verbatim.
    pub name: String,

    pub language: Language,
}

impl SayHelloParams {
    pub fn from_resolved(args: &ResolvedArguments) -> Result<Self, ToolError> {
        Ok(Self {
            name: args.require("name")?.to_string(),
            language: Language::from_arg(args.get("language")),
        })
    }
}

// ============================================================================
// Tool Definition
// ============================================================================

/// Greeting tool - returns a greeting for the given name.
pub struct SayHelloTool;

impl SayHelloTool {
    /// Tool name as registered in MCP.
    pub const NAME: &'static str = "say_hello";

    /// Tool description shown to clients.
    pub const DESCRIPTION: &'static str = "指定された名前に対して挨拶を返します";

    pub fn descriptor() -> ToolDescriptor {
        ToolDescriptor {
            name: Self::NAME,
            description: Self::DESCRIPTION,
            input_schema: SchemaNode::object()
                .required_property("name", SchemaNode::string().describe("挨拶する相手の名前"))
                .property(
                    "language",
                    SchemaNode::string()
                        .describe("挨拶の言語 (japanese, english)")
                        .one_of(["japanese", "english"])
                        .with_default("japanese"),
                ),
        }
    }

    /// Execute the tool logic.
    #[instrument(skip_all, fields(name = %params.name))]
    pub fn execute(params: &SayHelloParams) -> CallToolResult {
        info!("Greeting tool called ({:?})", params.language);
        CallToolResult::success(vec![Content::text(greeting(&params.name, params.language))])
    }
}

/// Build the greeting text.
pub fn greeting(name: &str, language: Language) -> String {
    match language {
        Language::English => format!("Hello, {}!", name),
        Language::Japanese => format!("こんにちは、{}さん！", name),
    }
}

// ============================================================================
// Tests
// ============================================================================
