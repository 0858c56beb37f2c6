//! Parameter structs for all MCP tools, and their mapping onto upstream
//! requests.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::gateway::UpstreamRequest;

// ── get_stock_price ──

/// Parameters for the `get_stock_price` tool.
#[derive(Debug, Deserialize, JsonSchema)]
pub struct StockPriceParams {
    #[schemars(description = "Stock ticker symbol (e.g., 'AAPL', 'IBM')")]
    pub symbol: String,
}

impl From<StockPriceParams> for UpstreamRequest {
    fn from(p: StockPriceParams) -> Self {
        UpstreamRequest::new("GLOBAL_QUOTE").with("symbol", p.symbol)
    }
}

// ── get_company_overview ──

/// Parameters for the `get_company_overview` tool.
#[derive(Debug, Deserialize, JsonSchema)]
pub struct CompanyOverviewParams {
    #[schemars(description = "Stock ticker symbol (e.g., 'MSFT')")]
    pub symbol: String,
}

impl From<CompanyOverviewParams> for UpstreamRequest {
    fn from(p: CompanyOverviewParams) -> Self {
        UpstreamRequest::new("OVERVIEW").with("symbol", p.symbol)
    }
}

// ── get_daily_time_series ──

/// Amount of history returned by the daily series.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "lowercase")]
pub enum OutputSize {
    /// Latest 100 data points.
    #[default]
    Compact,
    /// Full-length history.
    Full,
}

impl OutputSize {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Compact => "compact",
            Self::Full => "full",
        }
    }
}

/// Parameters for the `get_daily_time_series` tool.
#[derive(Debug, Deserialize, JsonSchema)]
pub struct DailyTimeSeriesParams {
    #[schemars(description = "Stock ticker symbol (e.g., 'IBM')")]
    pub symbol: String,
    #[schemars(description = "'compact' for the latest 100 data points, 'full' for the full history (default: compact)")]
    #[serde(default)]
    pub outputsize: OutputSize,
}

impl From<DailyTimeSeriesParams> for UpstreamRequest {
    fn from(p: DailyTimeSeriesParams) -> Self {
        UpstreamRequest::new("TIME_SERIES_DAILY")
            .with("symbol", p.symbol)
            .with("outputsize", p.outputsize.as_str())
    }
}

// ── get_weekly_time_series ──

/// Parameters for the `get_weekly_time_series` tool.
#[derive(Debug, Deserialize, JsonSchema)]
pub struct WeeklyTimeSeriesParams {
    #[schemars(description = "Stock ticker symbol (e.g., 'IBM')")]
    pub symbol: String,
}

impl From<WeeklyTimeSeriesParams> for UpstreamRequest {
    fn from(p: WeeklyTimeSeriesParams) -> Self {
        UpstreamRequest::new("TIME_SERIES_WEEKLY").with("symbol", p.symbol)
    }
}

// ── get_forex_rate ──

/// Parameters for the `get_forex_rate` tool.
#[derive(Debug, Deserialize, JsonSchema)]
pub struct ForexRateParams {
    #[schemars(description = "Source currency code (e.g., 'USD')")]
    pub from_currency: String,
    #[schemars(description = "Target currency code (e.g., 'EUR')")]
    pub to_currency: String,
}

impl From<ForexRateParams> for UpstreamRequest {
    fn from(p: ForexRateParams) -> Self {
        UpstreamRequest::new("CURRENCY_EXCHANGE_RATE")
            .with("from_currency", p.from_currency)
            .with("to_currency", p.to_currency)
    }
}

// ── get_crypto_price ──

/// Parameters for the `get_crypto_price` tool.
#[derive(Debug, Deserialize, JsonSchema)]
pub struct CryptoPriceParams {
    #[schemars(description = "Cryptocurrency symbol (e.g., 'BTC', 'ETH')")]
    pub symbol: String,
    #[schemars(description = "Market / quote currency (e.g., 'USD')")]
    pub market: String,
}

impl From<CryptoPriceParams> for UpstreamRequest {
    fn from(p: CryptoPriceParams) -> Self {
        UpstreamRequest::new("CRYPTO_INTRADAY")
            .with("symbol", p.symbol)
            .with("market", p.market)
    }
}

// ── get_technical_indicator ──

/// Sampling interval for technical indicators.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub enum Interval {
    #[serde(rename = "1min")]
    OneMin,
    #[serde(rename = "5min")]
    FiveMin,
    #[serde(rename = "15min")]
    FifteenMin,
    #[serde(rename = "30min")]
    ThirtyMin,
    #[serde(rename = "60min")]
    SixtyMin,
    #[default]
    #[serde(rename = "daily")]
    Daily,
    #[serde(rename = "weekly")]
    Weekly,
    #[serde(rename = "monthly")]
    Monthly,
}

impl Interval {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::OneMin => "1min",
            Self::FiveMin => "5min",
            Self::FifteenMin => "15min",
            Self::ThirtyMin => "30min",
            Self::SixtyMin => "60min",
            Self::Daily => "daily",
            Self::Weekly => "weekly",
            Self::Monthly => "monthly",
        }
    }
}

/// Parameters for the `get_technical_indicator` tool.
#[derive(Debug, Deserialize, JsonSchema)]
pub struct TechnicalIndicatorParams {
    #[schemars(description = "Stock ticker symbol (e.g., 'IBM')")]
    pub symbol: String,
    /// Passed straight through as the upstream function, so any indicator
    /// code Alpha Vantage accepts works here.
    #[schemars(description = "Indicator code used as the upstream function (e.g., 'SMA', 'EMA', 'RSI', 'MACD')")]
    pub indicator: String,
    #[schemars(description = "Time interval between data points (default: daily)")]
    #[serde(default)]
    pub interval: Interval,
}

impl From<TechnicalIndicatorParams> for UpstreamRequest {
    fn from(p: TechnicalIndicatorParams) -> Self {
        UpstreamRequest::new(p.indicator)
            .with("symbol", p.symbol)
            .with("interval", p.interval.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_daily_outputsize_defaults_to_compact() {
        let params: DailyTimeSeriesParams = serde_json::from_value(json!({"symbol": "IBM"})).unwrap();
        let request = UpstreamRequest::from(params);
        assert_eq!(request.function(), "TIME_SERIES_DAILY");
        assert_eq!(request.get("outputsize"), Some("compact"));
    }

    #[test]
    fn test_daily_outputsize_full() {
        let params: DailyTimeSeriesParams =
            serde_json::from_value(json!({"symbol": "IBM", "outputsize": "full"})).unwrap();
        assert_eq!(UpstreamRequest::from(params).get("outputsize"), Some("full"));
    }

    #[test]
    fn test_daily_outputsize_outside_enum_is_rejected() {
        let result: Result<DailyTimeSeriesParams, _> =
            serde_json::from_value(json!({"symbol": "IBM", "outputsize": "huge"}));
        assert!(result.is_err());
    }

    #[test]
    fn test_missing_required_field_is_rejected() {
        let result: Result<ForexRateParams, _> =
            serde_json::from_value(json!({"from_currency": "USD"}));
        assert!(result.is_err());
    }

    #[test]
    fn test_indicator_becomes_function() {
        let params: TechnicalIndicatorParams =
            serde_json::from_value(json!({"symbol": "IBM", "indicator": "RSI"})).unwrap();
        let request = UpstreamRequest::from(params);
        assert_eq!(request.function(), "RSI");
        assert_eq!(request.get("symbol"), Some("IBM"));
        assert_eq!(request.get("interval"), Some("daily"));
    }

    #[test]
    fn test_indicator_is_not_restricted_to_known_codes() {
        let params: TechnicalIndicatorParams = serde_json::from_value(
            json!({"symbol": "IBM", "indicator": "VWAP", "interval": "15min"}),
        )
        .unwrap();
        let request = UpstreamRequest::from(params);
        assert_eq!(request.function(), "VWAP");
        assert_eq!(request.get("interval"), Some("15min"));
    }

    #[test]
    fn test_interval_names_match_serde() {
        for interval in [
            Interval::OneMin,
            Interval::FiveMin,
            Interval::FifteenMin,
            Interval::ThirtyMin,
            Interval::SixtyMin,
            Interval::Daily,
            Interval::Weekly,
            Interval::Monthly,
        ] {
            assert_eq!(serde_json::to_value(interval).unwrap(), interval.as_str());
        }
    }

    #[test]
    fn test_forex_field_order() {
        let request = UpstreamRequest::from(ForexRateParams {
            from_currency: "USD".into(),
            to_currency: "EUR".into(),
        });
        let keys: Vec<&str> = request.params().iter().map(|(k, _)| k.as_str()).collect();
        assert_eq!(keys, ["function", "from_currency", "to_currency"]);
    }

    #[test]
    fn test_crypto_request() {
        let request = UpstreamRequest::from(CryptoPriceParams {
            symbol: "BTC".into(),
            market: "USD".into(),
        });
        assert_eq!(request.function(), "CRYPTO_INTRADAY");
        assert_eq!(request.get("market"), Some("USD"));
    }

    #[test]
    fn test_schema_marks_required_fields() {
        let schema = serde_json::to_value(schemars::schema_for!(TechnicalIndicatorParams)).unwrap();
        let required: Vec<&str> = schema["required"]
            .as_array()
            .unwrap()
            .iter()
            .filter_map(|v| v.as_str())
            .collect();
        assert!(required.contains(&"symbol"));
        assert!(required.contains(&"indicator"));
        assert!(!required.contains(&"interval"));
    }
}
