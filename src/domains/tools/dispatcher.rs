//! Tool dispatcher - maps a tool call onto its handler.
//!
//! A call goes through three steps: the name is looked up as a
//! [`ToolKind`], the raw arguments are resolved against that tool's
//! schema, and the tool's handler turns the typed parameters into a
//! `CallToolResult`. Any failure ends the call with a [`ToolError`] and
//! no content.

use std::sync::Arc;

use rmcp::model::{CallToolResult, JsonObject};
use tracing::{instrument, warn};

use super::catalog::{self, ToolDescriptor};
use super::clock::{Clock, SystemClock};
use super::definitions::{GetTimeParams, GetTimeTool, SayHelloParams, SayHelloTool};
use super::error::ToolError;
use super::resolver::{EnumPolicy, RawArguments, raw_arguments_from_json, resolve};
use crate::core::config::ToolsConfig;

/// The tools this server can run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToolKind {
    SayHello,
    GetTime,
}

impl ToolKind {
    pub const ALL: [ToolKind; 2] = [ToolKind::SayHello, ToolKind::GetTime];

    /// Map an external tool name onto its variant.
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            SayHelloTool::NAME => Some(Self::SayHello),
            GetTimeTool::NAME => Some(Self::GetTime),
            _ => None,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Self::SayHello => SayHelloTool::NAME,
            Self::GetTime => GetTimeTool::NAME,
        }
    }

    /// The catalog entry for this tool.
    pub fn descriptor(self) -> Result<&'static ToolDescriptor, ToolError> {
        catalog::find(self.name()).ok_or_else(|| ToolError::unknown_tool(self.name()))
    }
}

/// Resolves and executes tool calls. Holds no per-call state.
#[derive(Clone)]
pub struct Dispatcher {
    clock: Arc<dyn Clock>,
    enum_policy: EnumPolicy,
}

impl Dispatcher {
    pub fn new(config: &ToolsConfig) -> Self {
        Self {
            clock: Arc::new(SystemClock),
            enum_policy: config.enum_policy(),
        }
    }

    /// Replace the clock used by time-dependent tools.
    pub fn with_clock(mut self, clock: Arc<dyn Clock>) -> Self {
        self.clock = clock;
        self
    }

    pub fn enum_policy(&self) -> EnumPolicy {
        self.enum_policy
    }

    /// Tool catalog, in advertised order.
    pub fn list_tools(&self) -> &'static [ToolDescriptor] {
        catalog::list_tools()
    }

    /// Run the tool named `name` with `raw_arguments`.
    #[instrument(skip(self, raw_arguments))]
    pub fn call_tool(
        &self,
        name: &str,
        raw_arguments: &RawArguments,
    ) -> Result<CallToolResult, ToolError> {
        let Some(kind) = ToolKind::from_name(name) else {
            warn!("Unknown tool requested: {}", name);
            return Err(ToolError::unknown_tool(name));
        };

        let resolved = resolve(kind.descriptor()?, raw_arguments, self.enum_policy)?;

        let result = match kind {
            ToolKind::SayHello => SayHelloTool::execute(&SayHelloParams::from_resolved(&resolved)?),
            ToolKind::GetTime => {
                GetTimeTool::execute(&GetTimeParams::from_resolved(&resolved), self.clock.as_ref())
            }
        };

        Ok(result)
    }

    /// Run a tool with the JSON arguments of a `tools/call` request.
    ///
    /// The name is looked up before the arguments are converted, so an
    /// unknown tool is reported as such regardless of its arguments.
    pub fn call_tool_json(
        &self,
        name: &str,
        arguments: Option<JsonObject>,
    ) -> Result<CallToolResult, ToolError> {
        let Some(kind) = ToolKind::from_name(name) else {
            warn!("Unknown tool requested: {}", name);
            return Err(ToolError::unknown_tool(name));
        };

        let raw = raw_arguments_from_json(kind.descriptor()?, arguments)?;
        self.call_tool(name, &raw)
    }
}

impl Default for Dispatcher {
    fn default() -> Self {
        Self::new(&ToolsConfig::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domains::tools::clock::FixedClock;
    use chrono::NaiveTime;

    fn args(pairs: &[(&str, &str)]) -> RawArguments {
        pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect()
    }

    fn text_of(result: &CallToolResult) -> String {
        assert_eq!(result.content.len(), 1);
        match &result.content[0].raw {
            rmcp::model::RawContent::Text(text) => text.text.clone(),
            _ => panic!("Expected text content"),
        }
    }

    fn fixed(h: u32, m: u32, s: u32) -> Dispatcher {
        let time = NaiveTime::from_hms_opt(h, m, s).unwrap();
        Dispatcher::default().with_clock(Arc::new(FixedClock(time)))
    }

    #[test]
    fn test_kind_names_match_catalog() {
        let catalog_names: Vec<_> = catalog::list_tools().iter().map(|t| t.name).collect();
        let kind_names: Vec<_> = ToolKind::ALL.iter().map(|k| k.name()).collect();
        assert_eq!(catalog_names, kind_names);

        for kind in ToolKind::ALL {
            assert_eq!(ToolKind::from_name(kind.name()), Some(kind));
            assert!(kind.descriptor().is_ok());
        }
    }

    #[test]
    fn test_list_tools() {
        let dispatcher = Dispatcher::default();
        let names: Vec<_> = dispatcher.list_tools().iter().map(|t| t.name).collect();
        assert_eq!(names, vec!["say_hello", "get_time"]);
    }

    #[test]
    fn test_say_hello_default_language() {
        let dispatcher = Dispatcher::default();
        let result = dispatcher
            .call_tool("say_hello", &args(&[("name", "Taro")]))
            .unwrap();
        assert_eq!(text_of(&result), "こんにちは、Taroさん！");
    }

    #[test]
    fn test_say_hello_english() {
        let dispatcher = Dispatcher::default();
        let result = dispatcher
            .call_tool("say_hello", &args(&[("name", "Alice"), ("language", "english")]))
            .unwrap();
        assert_eq!(text_of(&result), "Hello, Alice!");
    }

    #[test]
    fn test_say_hello_empty_language_falls_back() {
        let dispatcher = Dispatcher::default();
        let result = dispatcher
            .call_tool("say_hello", &args(&[("name", "Taro"), ("language", "")]))
            .unwrap();
        assert_eq!(text_of(&result), "こんにちは、Taroさん！");
    }

    #[test]
    fn test_say_hello_missing_name() {
        let dispatcher = Dispatcher::default();
        let err = dispatcher.call_tool("say_hello", &args(&[])).unwrap_err();
        assert_eq!(err, ToolError::missing_argument("name"));
    }

    #[test]
    fn test_say_hello_is_idempotent() {
        let dispatcher = Dispatcher::default();
        let input = args(&[("name", "Hanako"), ("language", "japanese")]);
        let first = text_of(&dispatcher.call_tool("say_hello", &input).unwrap());
        let second = text_of(&dispatcher.call_tool("say_hello", &input).unwrap());
        assert_eq!(first, second);
    }

    #[test]
    fn test_get_time_default_is_24h() {
        let result = fixed(18, 4, 5).call_tool("get_time", &args(&[])).unwrap();
        assert_eq!(text_of(&result), "現在の時刻: 18:04:05");
    }

    #[test]
    fn test_get_time_12h() {
        let result = fixed(18, 4, 5)
            .call_tool("get_time", &args(&[("format", "12h")]))
            .unwrap();
        assert_eq!(text_of(&result), "現在の時刻: 06:04:05 午後");
    }

    #[test]
    fn test_get_time_unknown_format_advisory() {
        let result = fixed(7, 0, 0)
            .call_tool("get_time", &args(&[("format", "unix")]))
            .unwrap();
        assert_eq!(text_of(&result), "現在の時刻: 07:00:00");
    }

    #[test]
    fn test_get_time_unknown_format_strict() {
        let dispatcher = Dispatcher::new(&ToolsConfig { strict_enums: true });
        assert_eq!(dispatcher.enum_policy(), EnumPolicy::Enforced);
        let err = dispatcher
            .call_tool("get_time", &args(&[("format", "unix")]))
            .unwrap_err();
        assert!(matches!(err, ToolError::InvalidEnumValue { .. }));
    }

    #[test]
    fn test_unknown_tool() {
        let dispatcher = Dispatcher::default();
        let err = dispatcher.call_tool("nonexistent", &args(&[])).unwrap_err();
        assert_eq!(err, ToolError::unknown_tool("nonexistent"));
        assert_eq!(err.to_string(), "Unknown tool: nonexistent");
    }

    #[test]
    fn test_usable_after_failure() {
        let dispatcher = Dispatcher::default();
        assert!(dispatcher.call_tool("nonexistent", &args(&[])).is_err());
        assert!(dispatcher.call_tool("say_hello", &args(&[])).is_err());
        assert!(
            dispatcher
                .call_tool("say_hello", &args(&[("name", "Taro")]))
                .is_ok()
        );
    }

    #[test]
    fn test_call_tool_json() {
        let dispatcher = Dispatcher::default();
        let arguments = serde_json::json!({ "name": "Alice", "language": "english" });
        let result = dispatcher
            .call_tool_json("say_hello", arguments.as_object().cloned())
            .unwrap();
        assert_eq!(text_of(&result), "Hello, Alice!");
    }

    #[test]
    fn test_call_tool_json_unknown_tool_with_nested_arguments() {
        let dispatcher = Dispatcher::default();
        let arguments = serde_json::json!({ "x": [1] });
        let err = dispatcher
            .call_tool_json("nonexistent", arguments.as_object().cloned())
            .unwrap_err();
        assert_eq!(err, ToolError::unknown_tool("nonexistent"));
    }

    #[test]
    fn test_call_tool_json_ignores_undeclared_nested_argument() {
        let arguments = serde_json::json!({ "format": "24h", "extra": { "a": 1 } });
        let result = fixed(8, 9, 10)
            .call_tool_json("get_time", arguments.as_object().cloned())
            .unwrap();
        assert_eq!(text_of(&result), "現在の時刻: 08:09:10");
    }

    #[test]
    fn test_call_tool_json_rejects_nested_declared_argument() {
        let dispatcher = Dispatcher::default();
        let arguments = serde_json::json!({ "name": ["Taro"] });
        let err = dispatcher
            .call_tool_json("say_hello", arguments.as_object().cloned())
            .unwrap_err();
        assert!(matches!(err, ToolError::InvalidArguments(_)));
    }

    #[test]
    fn test_call_tool_json_without_arguments() {
        let dispatcher = Dispatcher::default();
        let err = dispatcher.call_tool_json("say_hello", None).unwrap_err();
        assert_eq!(err, ToolError::missing_argument("name"));
    }
}
