//! Common market-data wire types
//!
//! Field names mirror the HTTP contract; every value is an immutable
//! snapshot replaced wholesale on refresh.

use serde::{Deserialize, Serialize};

/// Ticker search hit
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SearchResult {
    pub symbol: String,
    pub name: String,
    pub exchange: String,
    #[serde(rename = "type")]
    pub kind: String,
}

/// Point-in-time quote for one symbol, including a short price history
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StockData {
    pub symbol: String,
    pub name: String,
    pub price: f64,
    pub change: f64,
    pub change_percent: f64,
    pub market_cap: Option<i64>,
    pub sparkline: Vec<f64>,
    pub currency: String,
}

/// Market index reading
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MarketIndex {
    pub symbol: String,
    pub name: String,
    pub price: f64,
    pub change_percent: f64,
}

/// Top mover entry
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DailyMover {
    pub symbol: String,
    pub name: String,
    pub price: f64,
    pub change_percent: f64,
}

/// Aggregate read of indices and top movers at one point in time
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct MarketSnapshot {
    pub indices: Vec<MarketIndex>,
    pub top_movers: Vec<DailyMover>,
}

/// Exchange open/closed state with countdown to the next session event
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MarketStatus {
    pub is_open: bool,
    pub exchange: String,
    pub next_event: String,
    pub countdown: String,
    pub open_time: String,
    pub close_time: String,
}

impl Default for MarketStatus {
    fn default() -> Self {
        Self {
            is_open: false,
            exchange: "NYSE".to_string(),
            next_event: "open".to_string(),
            countdown: String::new(),
            open_time: "9:30 AM ET".to_string(),
            close_time: "4:00 PM ET".to_string(),
        }
    }
}

/// Sector performance entry
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Sector {
    pub name: String,
    pub change_percent: f64,
}

/// Market news item
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewsItem {
    pub title: String,
    pub publisher: String,
    pub link: String,
    pub published_at: String,
    pub related_stocks: Vec<String>,
}

/// Single featured story
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct FeaturedNews {
    pub title: String,
    pub symbol: String,
    pub summary: String,
}

/// Upcoming earnings event
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EarningEvent {
    pub symbol: String,
    pub name: String,
    pub date: String,
    /// "before_market" or "after_market"
    pub time: String,
    pub expected_eps: Option<f64>,
}

/// Analyst consensus for one symbol
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AnalystRating {
    pub symbol: String,
    pub name: String,
    /// "buy", "hold" or "sell"
    pub rating: String,
    pub rating_score: f64,
    pub target_price: f64,
    pub current_price: f64,
    pub upside_percent: f64,
    pub analyst_count: i32,
}

/// Dividend payer entry
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DividendStock {
    pub symbol: String,
    pub name: String,
    pub price: f64,
    pub dividend_yield: f64,
    pub annual_dividend: f64,
    pub payout_frequency: String,
    pub ex_dividend_date: String,
}

/// 52-week range position for one symbol
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WeekHighLow {
    pub symbol: String,
    pub name: String,
    pub price: f64,
    pub week_high: f64,
    pub week_low: f64,
    pub percent_from_high: f64,
    pub is_new_high: bool,
    pub is_new_low: bool,
}

/// 52-week highs and lows
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct WeekExtremes {
    pub highs: Vec<WeekHighLow>,
    pub lows: Vec<WeekHighLow>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_search_result_type_field() {
        let json = r#"{"symbol":"AAPL","name":"Apple Inc.","exchange":"NASDAQ","type":"Equity"}"#;
        let result: SearchResult = serde_json::from_str(json).unwrap();
        assert_eq!(result.kind, "Equity");
        let back = serde_json::to_value(&result).unwrap();
        assert_eq!(back["type"], "Equity");
    }

    #[test]
    fn test_market_status_camel_case() {
        let status = MarketStatus {
            is_open: true,
            next_event: "close".to_string(),
            countdown: "4h 23m".to_string(),
            ..MarketStatus::default()
        };
        let value = serde_json::to_value(&status).unwrap();
        assert_eq!(value["isOpen"], true);
        assert_eq!(value["nextEvent"], "close");
        assert_eq!(value["openTime"], "9:30 AM ET");
    }
}
