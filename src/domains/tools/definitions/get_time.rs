//! Current time tool definition.
//!
//! Reports the local wall-clock time using Japanese conventions.

use chrono::{NaiveTime, Timelike};
use rmcp::model::{CallToolResult, Content};
use tracing::{info, instrument};

use crate::domains::tools::catalog::{SchemaNode, ToolDescriptor};
use crate::domains::tools::clock::Clock;
use crate::domains::tools::resolver::ResolvedArguments;

/// Prefix of every rendered time.
const PREFIX: &str = "現在の時刻: ";

// ============================================================================
// Tool Parameters
// ============================================================================

/// 12- or 24-hour clock.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum HourCycle {
    H12,
    #[default]
    H24,
}

impl HourCycle {
    /// Interpret a `format` argument. Anything but `12h` is 24-hour.
    pub fn from_arg(value: Option<&str>) -> Self {
        match value {
            Some("12h") => Self::H12,
            _ => Self::H24,
        }
    }
}

/// Parameters for the time tool.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GetTimeParams {
    pub format: HourCycle,
}

impl GetTimeParams {
    pub fn from_resolved(args: &ResolvedArguments) -> Self {
        Self {
            format: HourCycle::from_arg(args.get("format")),
        }
    }
}

// ============================================================================
// Tool Definition
// ============================================================================

/// Time tool - returns the current local time.
pub struct GetTimeTool;

impl GetTimeTool {
    /// Tool name as registered in MCP.
    pub const NAME: &'static str = "get_time";

    /// Tool description shown to clients.
    pub const DESCRIPTION: &'static str = "現在の時刻を返します";

    pub fn descriptor() -> ToolDescriptor {
        ToolDescriptor {
            name: Self::NAME,
            description: Self::DESCRIPTION,
            input_schema: SchemaNode::object().property(
                "format",
                SchemaNode::string()
                    .describe("時刻のフォーマット (12h, 24h)")
                    .one_of(["12h", "24h"])
                    .with_default("24h"),
            ),
        }
    }

    /// Execute the tool logic. The clock is read on every call.
    #[instrument(skip_all, fields(format = ?params.format))]
    pub fn execute(params: &GetTimeParams, clock: &dyn Clock) -> CallToolResult {
        let text = format!("{}{}", PREFIX, format_local_time(clock.now(), params.format));
        info!("Time tool called: {}", text);
        CallToolResult::success(vec![Content::text(text)])
    }
}

// ============================================================================
// Helper Functions
// ============================================================================

/// Render `time` as two-digit hour, minute and second.
///
/// The 12-hour form uses hours 01-12 followed by the Japanese day-period
/// marker (午前 / 午後).
pub fn format_local_time(time: NaiveTime, cycle: HourCycle) -> String {
    match cycle {
        HourCycle::H24 => format!(
            "{:02}:{:02}:{:02}",
            time.hour(),
            time.minute(),
            time.second()
        ),
        HourCycle::H12 => {
            let (is_pm, hour) = time.hour12();
            let marker = if is_pm { "午後" } else { "午前" };
            format!(
                "{:02}:{:02}:{:02} {}",
                hour,
                time.minute(),
                time.second(),
                marker
            )
        }
    }
}

// ============================================================================
// Tests
// ============================================================================
