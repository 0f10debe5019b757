//! Tool definitions module.
//!
//! Each tool is defined in its own file: parameters, schema descriptor,
//! and execution logic.

pub mod get_time;
pub mod say_hello;

pub use get_time::{GetTimeParams, GetTimeTool, HourCycle};
pub use say_hello::{Language, SayHelloParams, SayHelloTool};
