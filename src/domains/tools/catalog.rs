//! Tool catalog - the static, ordered list of tools this server exposes.
//!
//! Each tool's descriptor lives next to its implementation in
//! `definitions/`; this module only fixes the enumeration order and owns
//! the schema model shared by all of them.
//!
//! The catalog is built once on first access and never mutated afterwards.

use std::collections::BTreeMap;
use std::sync::{Arc, LazyLock};

use rmcp::model::{JsonObject, Tool};
use serde::Serialize;

use super::definitions::{GetTimeTool, SayHelloTool};
use super::error::ToolError;

// ============================================================================
// Schema Model
// ============================================================================

/// JSON Schema type of a schema node.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum SchemaType {
    Object,
    String,
}

/// A (small) subset of JSON Schema describing accepted argument shapes.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SchemaNode {
    #[serde(rename = "type")]
    pub schema_type: SchemaType,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    #[serde(skip_serializing_if = "BTreeMap::is_empty")]
    pub properties: BTreeMap<String, SchemaNode>,

    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub required: Vec<String>,

    #[serde(rename = "enum", skip_serializing_if = "Option::is_none")]
    pub enum_values: Option<Vec<String>>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub default: Option<String>,
}

impl SchemaNode {
    fn new(schema_type: SchemaType) -> Self {
        Self {
            schema_type,
            description: None,
            properties: BTreeMap::new(),
            required: Vec::new(),
            enum_values: None,
            default: None,
        }
    }

    /// An object node with no properties yet.
    pub fn object() -> Self {
        Self::new(SchemaType::Object)
    }

    /// A string leaf node.
    pub fn string() -> Self {
        Self::new(SchemaType::String)
    }

    pub fn describe(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Restrict the node to a fixed set of values.
    pub fn one_of<I, V>(mut self, values: I) -> Self
    where
        I: IntoIterator<Item = V>,
        V: Into<String>,
    {
        self.enum_values = Some(values.into_iter().map(Into::into).collect());
        self
    }

    pub fn with_default(mut self, value: impl Into<String>) -> Self {
        self.default = Some(value.into());
        self
    }

    /// Add an optional property.
    pub fn property(mut self, name: impl Into<String>, node: SchemaNode) -> Self {
        self.properties.insert(name.into(), node);
        self
    }

    /// Add a property the caller must supply.
    pub fn required_property(mut self, name: impl Into<String>, node: SchemaNode) -> Self {
        let name = name.into();
        self.required.push(name.clone());
        self.properties.insert(name, node);
        self
    }

    /// Whether `name` is listed in `required`.
    pub fn is_required(&self, name: &str) -> bool {
        self.required.iter().any(|r| r == name)
    }

    /// Check the structural invariants of this node and its children.
    ///
    /// A default must belong to the enum (when both are set), a required
    /// property must not carry a default, and every required name must be
    /// a declared property.
    pub fn check(&self) -> Result<(), String> {
        if let (Some(values), Some(default)) = (&self.enum_values, &self.default) {
            if !values.contains(default) {
                return Err(format!(
                    "default '{}' is not one of [{}]",
                    default,
                    values.join(", ")
                ));
            }
        }

        for name in &self.required {
            match self.properties.get(name) {
                None => return Err(format!("required property '{}' is not declared", name)),
                Some(node) if node.default.is_some() => {
                    return Err(format!(
                        "required property '{}' must not have a default",
                        name
                    ));
                }
                Some(_) => {}
            }
        }

        for (name, node) in &self.properties {
            node.check()
                .map_err(|e| format!("property '{}': {}", name, e))?;
        }

        Ok(())
    }

    /// Render this node as a JSON object.
    pub fn to_json_object(&self) -> JsonObject {
        match serde_json::to_value(self) {
            Ok(serde_json::Value::Object(map)) => map,
            _ => JsonObject::new(),
        }
    }
}

// ============================================================================
// Tool Descriptor
// ============================================================================

/// Name, description and input schema of one tool.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ToolDescriptor {
    pub name: &'static str,
    pub description: &'static str,
    pub input_schema: SchemaNode,
}

impl ToolDescriptor {
    /// Create a Tool model for this descriptor (metadata).
    pub fn to_tool(&self) -> Tool {
        Tool {
            name: self.name.into(),
            description: Some(self.description.into()),
            input_schema: Arc::new(self.input_schema.to_json_object()),
            annotations: None,
            output_schema: None,
            icons: None,
            meta: None,
            title: None,
        }
    }

    /// Check the descriptor's schema invariants.
    pub fn check(&self) -> Result<(), ToolError> {
        self.input_schema
            .check()
            .map_err(|e| ToolError::invalid_schema(format!("tool '{}': {}", self.name, e)))
    }
}

// ============================================================================
// Catalog
// ============================================================================

static CATALOG: LazyLock<Vec<ToolDescriptor>> =
    LazyLock::new(|| vec![SayHelloTool::descriptor(), GetTimeTool::descriptor()]);

/// All tools, in the order they are advertised to clients.
pub fn list_tools() -> &'static [ToolDescriptor] {
    &CATALOG
}

/// Look a tool up by its registered name.
pub fn find(name: &str) -> Option<&'static ToolDescriptor> {
    CATALOG.iter().find(|t| t.name == name)
}

/// Validate every catalog entry. Called once at server construction.
pub fn check_catalog() -> Result<(), ToolError> {
    list_tools().iter().try_for_each(ToolDescriptor::check)
}
