//! MCP ServerHandler implementation for Alpha Vantage.
//!
//! Every tool maps its arguments onto one upstream function and forwards the
//! request through the shared [`RequestGateway`]:
//!
//! - `get_stock_price` — Latest quote (`GLOBAL_QUOTE`)
//! - `get_company_overview` — Fundamentals and company profile (`OVERVIEW`)
//! - `get_daily_time_series` — Daily OHLCV history (`TIME_SERIES_DAILY`)
//! - `get_weekly_time_series` — Weekly OHLCV history (`TIME_SERIES_WEEKLY`)
//! - `get_forex_rate` — Currency exchange rate (`CURRENCY_EXCHANGE_RATE`)
//! - `get_crypto_price` — Intraday crypto prices (`CRYPTO_INTRADAY`)
//! - `get_technical_indicator` — Any indicator code, used as the function itself
//!
//! Upstream payloads are returned as pretty-printed JSON, untouched. When the
//! gateway reports no data the tool answers with a short plain-text message;
//! that is a normal tool result, not a protocol error.

use std::sync::Arc;

use rmcp::handler::server::router::tool::ToolRouter;
use rmcp::handler::server::wrapper::Parameters;
use rmcp::model::{Implementation, ProtocolVersion, ServerCapabilities, ServerInfo};
use rmcp::{tool, tool_handler, tool_router, ServerHandler};

use crate::gateway::{RequestGateway, UpstreamRequest};
use crate::tools::*;

pub const STOCK_PRICE_FAILURE: &str = "Failed to fetch stock data";
pub const COMPANY_OVERVIEW_FAILURE: &str = "Failed to fetch company overview";
pub const DAILY_TIME_SERIES_FAILURE: &str = "Failed to fetch daily time series";
pub const WEEKLY_TIME_SERIES_FAILURE: &str = "Failed to fetch weekly time series";
pub const FOREX_RATE_FAILURE: &str = "Failed to fetch forex rate";
pub const CRYPTO_PRICE_FAILURE: &str = "Failed to fetch crypto price";
pub const TECHNICAL_INDICATOR_FAILURE: &str = "Failed to fetch technical indicator";

/// Alpha Vantage MCP server handler.
#[derive(Debug, Clone)]
pub struct AlphaVantageMcpServer {
    tool_router: ToolRouter<Self>,
    gateway: Arc<RequestGateway>,
}

impl AlphaVantageMcpServer {
    pub fn new(gateway: RequestGateway) -> Self {
        Self::with_gateway(Arc::new(gateway))
    }

    /// Create a server sharing an existing gateway.
    pub fn with_gateway(gateway: Arc<RequestGateway>) -> Self {
        Self {
            tool_router: Self::tool_router(),
            gateway,
        }
    }

    pub fn gateway(&self) -> &Arc<RequestGateway> {
        &self.gateway
    }

    /// Number of registered tools.
    pub fn tool_count(&self) -> usize {
        self.tool_router.list_all().len()
    }

    /// Forward one request and render the outcome as tool text.
    async fn forward(&self, request: UpstreamRequest, failure: &str) -> String {
        match self.gateway.fetch(request).await {
            Some(payload) => {
                serde_json::to_string_pretty(&payload).unwrap_or_else(|_| failure.to_string())
            }
            None => failure.to_string(),
        }
    }
}

#[tool_handler(router = self.tool_router)]
impl ServerHandler for AlphaVantageMcpServer {
    fn get_info(&self) -> ServerInfo {
        let instructions = "Alpha Vantage market data. Stocks: get_stock_price for the latest quote, \
             get_company_overview for fundamentals, get_daily_time_series / get_weekly_time_series \
             for price history (daily accepts outputsize compact|full).\n\
             Currencies: get_forex_rate (from_currency → to_currency), get_crypto_price (symbol + market).\n\
             Indicators: get_technical_indicator takes any Alpha Vantage indicator code (SMA, EMA, RSI, MACD, ...) \
             plus an optional interval.\n\
             Results are the raw upstream JSON. Upstream notes such as rate-limit messages are passed through \
             unchanged; when no data could be fetched the tool returns a short plain-text message instead of JSON."
            .to_string();

        ServerInfo {
            protocol_version: ProtocolVersion::V_2025_03_26,
            capabilities: ServerCapabilities::builder().enable_tools().build(),
            server_info: Implementation {
                name: "alphavantage-mcp".to_string(),
                title: Some("Alpha Vantage MCP Server".to_string()),
                version: env!("CARGO_PKG_VERSION").to_string(),
                description: Some(
                    "MCP server exposing Alpha Vantage stock, forex, crypto and technical indicator data"
                        .to_string(),
                ),
                icons: None,
                website_url: None,
            },
            instructions: Some(instructions),
        }
    }
}

#[tool_router(router = tool_router)]
impl AlphaVantageMcpServer {
    /// Latest price and volume for a stock.
    #[tool(
        name = "get_stock_price",
        description = "Get the latest price, change and volume for a stock symbol (Alpha Vantage GLOBAL_QUOTE)."
    )]
    pub async fn get_stock_price(&self, Parameters(params): Parameters<StockPriceParams>) -> String {
        self.forward(params.into(), STOCK_PRICE_FAILURE).await
    }

    #[tool(
        name = "get_company_overview",
        description = "Get company information, financial ratios and key metrics for a stock symbol (Alpha Vantage OVERVIEW)."
    )]
    pub async fn get_company_overview(
        &self,
        Parameters(params): Parameters<CompanyOverviewParams>,
    ) -> String {
        self.forward(params.into(), COMPANY_OVERVIEW_FAILURE).await
    }

    /// Daily OHLCV series; `outputsize` defaults to compact.
    #[tool(
        name = "get_daily_time_series",
        description = "Get daily open/high/low/close/volume for a stock symbol. outputsize 'compact' returns the latest 100 points (default), 'full' returns the full history."
    )]
    pub async fn get_daily_time_series(
        &self,
        Parameters(params): Parameters<DailyTimeSeriesParams>,
    ) -> String {
        self.forward(params.into(), DAILY_TIME_SERIES_FAILURE).await
    }

    #[tool(
        name = "get_weekly_time_series",
        description = "Get weekly open/high/low/close/volume for a stock symbol covering its full history."
    )]
    pub async fn get_weekly_time_series(
        &self,
        Parameters(params): Parameters<WeeklyTimeSeriesParams>,
    ) -> String {
        self.forward(params.into(), WEEKLY_TIME_SERIES_FAILURE).await
    }

    #[tool(
        name = "get_forex_rate",
        description = "Get the realtime exchange rate between two currencies (physical or digital)."
    )]
    pub async fn get_forex_rate(&self, Parameters(params): Parameters<ForexRateParams>) -> String {
        self.forward(params.into(), FOREX_RATE_FAILURE).await
    }

    #[tool(
        name = "get_crypto_price",
        description = "Get intraday prices for a cryptocurrency in the given market (e.g., BTC in USD)."
    )]
    pub async fn get_crypto_price(
        &self,
        Parameters(params): Parameters<CryptoPriceParams>,
    ) -> String {
        self.forward(params.into(), CRYPTO_PRICE_FAILURE).await
    }

    /// Technical indicator values; the indicator code is the upstream function.
    #[tool(
        name = "get_technical_indicator",
        description = "Get technical indicator values for a stock symbol. indicator is any Alpha Vantage indicator code (SMA, EMA, RSI, MACD, BBANDS, ...); interval is one of 1min, 5min, 15min, 30min, 60min, daily (default), weekly, monthly."
    )]
    pub async fn get_technical_indicator(
        &self,
        Parameters(params): Parameters<TechnicalIndicatorParams>,
    ) -> String {
        self.forward(params.into(), TECHNICAL_INDICATOR_FAILURE).await
    }
}
