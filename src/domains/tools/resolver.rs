//! Argument resolution against a tool's input schema.
//!
//! Turns the raw argument map of a `tools/call` request into the set of
//! values a handler works with: declared properties are kept, schema
//! defaults fill the gaps, and missing required properties are rejected
//! before any handler code runs.

use std::collections::{BTreeMap, HashMap};

use rmcp::model::JsonObject;
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use super::catalog::ToolDescriptor;
use super::error::ToolError;

/// Raw, caller-supplied arguments.
pub type RawArguments = HashMap<String, String>;

/// How values outside a property's `enum` are treated.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EnumPolicy {
    /// Pass the value through; handlers fall back to their default branch.
    #[default]
    Advisory,
    /// Reject the call with [`ToolError::InvalidEnumValue`].
    Enforced,
}

/// Arguments after defaulting, keyed by property name.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ResolvedArguments {
    values: BTreeMap<String, String>,
}

impl ResolvedArguments {
    pub fn get(&self, name: &str) -> Option<&str> {
        self.values.get(name).map(String::as_str)
    }

    /// Get a value the schema marks as required.
    pub fn require(&self, name: &str) -> Result<&str, ToolError> {
        self.get(name)
            .ok_or_else(|| ToolError::missing_argument(name))
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}

/// Resolve `raw` against the input schema of `tool`.
pub fn resolve(
    tool: &ToolDescriptor,
    raw: &RawArguments,
    policy: EnumPolicy,
) -> Result<ResolvedArguments, ToolError> {
    let schema = &tool.input_schema;
    let mut values = BTreeMap::new();

    for (name, property) in &schema.properties {
        let value = match raw.get(name) {
            Some(value) => {
                check_enum(name, value, property.enum_values.as_deref(), policy)?;
                value.clone()
            }
            None => match &property.default {
                Some(default) => default.clone(),
                None if schema.is_required(name) => {
                    warn!("{}: missing required argument '{}'", tool.name, name);
                    return Err(ToolError::missing_argument(name));
                }
                None => continue,
            },
        };
        values.insert(name.clone(), value);
    }

    for name in raw.keys().filter(|k| !schema.properties.contains_key(*k)) {
        debug!("{}: ignoring undeclared argument '{}'", tool.name, name);
    }

    Ok(ResolvedArguments { values })
}

fn check_enum(
    name: &str,
    value: &str,
    allowed: Option<&[String]>,
    policy: EnumPolicy,
) -> Result<(), ToolError> {
    let Some(allowed) = allowed else {
        return Ok(());
    };
    if allowed.iter().any(|a| a == value) {
        return Ok(());
    }

    match policy {
        EnumPolicy::Advisory => {
            warn!(
                "Value '{}' for '{}' is not one of [{}]; passing it through",
                value,
                name,
                allowed.join(", ")
            );
            Ok(())
        }
        EnumPolicy::Enforced => Err(ToolError::InvalidEnumValue {
            property: name.to_string(),
            value: value.to_string(),
            allowed: allowed.to_vec(),
        }),
    }
}

/// Convert the JSON arguments of a `tools/call` request into raw arguments
/// for `tool`.
///
/// Only properties declared by the tool's schema are converted: strings are
/// taken as-is, numbers and booleans use their JSON text, `null` counts as
/// absent, and arrays or objects are rejected. Undeclared arguments are
/// dropped whatever their shape.
pub fn raw_arguments_from_json(
    tool: &ToolDescriptor,
    arguments: Option<JsonObject>,
) -> Result<RawArguments, ToolError> {
    let mut raw = RawArguments::new();

    for (name, value) in arguments.unwrap_or_default() {
        if !tool.input_schema.properties.contains_key(&name) {
            debug!("{}: ignoring undeclared argument '{}'", tool.name, name);
            continue;
        }

        let text = match value {
            serde_json::Value::Null => continue,
            serde_json::Value::String(s) => s,
            serde_json::Value::Bool(b) => b.to_string(),
            serde_json::Value::Number(n) => n.to_string(),
            serde_json::Value::Array(_) | serde_json::Value::Object(_) => {
                return Err(ToolError::invalid_arguments(format!(
                    "'{}' must be a string",
                    name
                )));
            }
        };
        raw.insert(name, text);
    }

    Ok(raw)
}
