//! Alpha Vantage MCP Server library.
//!
//! Provides the [`AlphaVantageMcpServer`](server::AlphaVantageMcpServer) MCP handler,
//! the upstream [`RequestGateway`](gateway::RequestGateway) and tool parameter types.
//! Used by the `alphavantage-mcp` binary and available for integration testing.

pub mod config;
pub mod error;
pub mod gateway;
pub mod server;
pub mod tools;

pub use config::GatewayConfig;
pub use error::{ConfigError, GatewayError};
pub use gateway::{RequestGateway, UpstreamRequest};
pub use server::AlphaVantageMcpServer;
