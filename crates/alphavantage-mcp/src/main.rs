//! Alpha Vantage MCP Server
//!
//! Model Context Protocol server exposing Alpha Vantage market data (quotes,
//! fundamentals, time series, forex, crypto and technical indicators) to LLM
//! agents over stdio.
//!
//! # Environment Variables
//!
//! - `ALPHA_VANTAGE_API_KEY`: API key (required)
//! - `ALPHA_VANTAGE_BASE_URL`: upstream endpoint override
//! - `RUST_LOG`: log filter (default: `alphavantage_mcp=info`)
//!
//! stdout carries the protocol; logs go to stderr.

use clap::Parser;
use rmcp::ServiceExt;
use tracing_subscriber::EnvFilter;

use alphavantage_mcp::config::GatewayConfig;
use alphavantage_mcp::{AlphaVantageMcpServer, RequestGateway};

/// MCP server for Alpha Vantage market data
#[derive(Debug, Parser)]
#[command(name = "alphavantage-mcp")]
#[command(about = "MCP server for Alpha Vantage market data")]
#[command(version)]
struct Args {
    /// Upstream API endpoint (overrides ALPHA_VANTAGE_BASE_URL)
    #[arg(long)]
    base_url: Option<String>,

    /// Default log directive when RUST_LOG is unset
    #[arg(long, default_value = "alphavantage_mcp=info")]
    log_level: String,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Missing .env is fine; the environment may already be populated.
    let _ = dotenvy::dotenv();

    let args = Args::parse();

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env().add_directive(args.log_level.parse()?))
        .with_writer(std::io::stderr)
        .init();

    let mut config = match GatewayConfig::from_env() {
        Ok(config) => config,
        Err(e) => {
            tracing::error!(error = %e, "Refusing to start");
            return Err(e.into());
        }
    };
    if let Some(base_url) = args.base_url.as_deref() {
        config = config.with_base_url(base_url)?;
    }

    let gateway = RequestGateway::new(config)?;
    tracing::info!(base_url = %gateway.base_url(), "alphavantage-mcp starting (stdio transport)");

    let server = AlphaVantageMcpServer::new(gateway);
    tracing::info!(tools = server.tool_count(), "Registered tools");

    let transport = rmcp::transport::io::stdio();
    let service = server.serve(transport).await?;
    service.waiting().await?;

    tracing::info!("alphavantage-mcp stopped");
    Ok(())
}
