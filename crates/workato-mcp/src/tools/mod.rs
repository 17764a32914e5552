//! MCP tool parameter types and per-group tool implementations.
//!
//! All parameter structs derive `Deserialize + JsonSchema` for MCP tool registration.
//! Each group module holds the async bodies the server's tool methods delegate to.

pub mod connections;
pub mod connectors;
pub mod helpers;
pub mod lifecycle;
pub mod lookup_tables;
pub mod params;
pub mod recipes;

pub use params::*;
