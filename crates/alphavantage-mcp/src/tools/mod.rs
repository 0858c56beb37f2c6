//! MCP tool parameter types.
//!
//! All parameter structs derive `Deserialize + JsonSchema` for MCP tool registration,
//! and convert into an [`UpstreamRequest`](crate::gateway::UpstreamRequest).

pub mod params;

pub use params::*;
