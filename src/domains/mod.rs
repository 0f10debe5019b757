//! Domains module containing the server's business logic.
//!
//! The server exposes a single bounded context: tools.

pub mod tools;
