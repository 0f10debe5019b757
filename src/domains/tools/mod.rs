//! Tools domain module.
//!
//! This module handles all tool-related functionality for the MCP server.
//! Tools are executable functions that can be called by MCP clients.
//!
//! ## Architecture
//!
//! - `definitions/` - Individual tool implementations (one file per tool)
//! - `catalog.rs` - Ordered tool list and the input schema model
//! - `resolver.rs` - Argument defaulting and validation against a schema
//! - `dispatcher.rs` - Name lookup, resolution and execution of a call
//! - `clock.rs` - Wall-clock source for time-dependent tools
//! - `error.rs` - Tool-specific error types
//!
//! ## Adding a New Tool
//!
//! 1. Create a new file in `definitions/` with a descriptor and `execute()`
//! 2. Export it in `definitions/mod.rs`
//! 3. Append its descriptor to the catalog in `catalog.rs`
//! 4. Add a `ToolKind` variant and its arm in `dispatcher.rs`

pub mod catalog;
pub mod clock;
pub mod definitions;
pub mod dispatcher;
mod error;
pub mod resolver;

pub use catalog::{SchemaNode, SchemaType, ToolDescriptor, check_catalog, list_tools};
pub use clock::{Clock, FixedClock, SystemClock};
pub use dispatcher::{Dispatcher, ToolKind};
pub use error::ToolError;
pub use resolver::{EnumPolicy, RawArguments, ResolvedArguments, resolve};
