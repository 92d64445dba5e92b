//! Static catalog backing the mock data source
//!
//! A curated universe of US large-caps with seed prices, plus fixtures for
//! the panels that have no natural synthetic generator (news, earnings,
//! ratings, dividends, 52-week extremes).

use crate::datasource::types::*;

/// Trend bias applied when generating a sparkline from a seed price
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Trend {
    Up,
    Down,
    Flat,
}

/// Seed values for one mock quote
pub struct StockSeed {
    pub symbol: &'static str,
    pub name: &'static str,
    pub price: f64,
    pub change: f64,
    pub change_percent: f64,
    pub market_cap: Option<i64>,
    pub trend: Trend,
}

/// (symbol, name, exchange) rows answering ticker search
pub const SEARCH_UNIVERSE: &[(&str, &str, &str)] = &[
    ("AAPL", "Apple Inc.", "NASDAQ"),
    ("MSFT", "Microsoft Corporation", "NASDAQ"),
    ("GOOGL", "Alphabet Inc. Class A", "NASDAQ"),
    ("AMZN", "Amazon.com Inc.", "NASDAQ"),
    ("NVDA", "NVIDIA Corporation", "NASDAQ"),
    ("META", "Meta Platforms Inc.", "NASDAQ"),
    ("TSLA", "Tesla Inc.", "NASDAQ"),
    ("BRK-B", "Berkshire Hathaway Inc.", "NYSE"),
    ("UNH", "UnitedHealth Group Inc.", "NYSE"),
    ("JNJ", "Johnson & Johnson", "NYSE"),
    ("XOM", "Exxon Mobil Corporation", "NYSE"),
    ("V", "Visa Inc.", "NYSE"),
    ("JPM", "JPMorgan Chase & Co.", "NYSE"),
    ("WMT", "Walmart Inc.", "NYSE"),
    ("PG", "Procter & Gamble Co.", "NYSE"),
    ("MA", "Mastercard Inc.", "NYSE"),
    ("HD", "Home Depot Inc.", "NYSE"),
    ("CVX", "Chevron Corporation", "NYSE"),
    ("KO", "Coca-Cola Co.", "NYSE"),
    ("PFE", "Pfizer Inc.", "NYSE"),
    ("NFLX", "Netflix Inc.", "NASDAQ"),
    ("ADBE", "Adobe Inc.", "NASDAQ"),
    ("CRM", "Salesforce Inc.", "NYSE"),
    ("AMD", "Advanced Micro Devices Inc.", "NASDAQ"),
    ("INTC", "Intel Corporation", "NASDAQ"),
];

pub const STOCK_SEEDS: &[StockSeed] = &[
    StockSeed {
        symbol: "AAPL",
        name: "Apple Inc.",
        price: 185.92,
        change: 1.45,
        change_percent: 0.78,
        market_cap: Some(2_800_000_000_000),
        trend: Trend::Up,
    },
    StockSeed {
        symbol: "MSFT",
        name: "Microsoft Corporation",
        price: 420.55,
        change: -2.3,
        change_percent: -0.54,
        market_cap: Some(3_120_000_000_000),
        trend: Trend::Down,
    },
    StockSeed {
        symbol: "NVDA",
        name: "NVIDIA Corporation",
        price: 726.13,
        change: 17.32,
        change_percent: 2.44,
        market_cap: Some(1_800_000_000_000),
        trend: Trend::Up,
    },
    StockSeed {
        symbol: "TSLA",
        name: "Tesla Inc.",
        price: 202.64,
        change: -8.21,
        change_percent: -3.89,
        market_cap: Some(645_000_000_000),
        trend: Trend::Down,
    },
    StockSeed {
        symbol: "AMZN",
        name: "Amazon.com Inc.",
        price: 178.35,
        change: 2.15,
        change_percent: 1.22,
        market_cap: Some(1_850_000_000_000),
        trend: Trend::Up,
    },
    StockSeed {
        symbol: "META",
        name: "Meta Platforms Inc.",
        price: 505.68,
        change: 5.42,
        change_percent: 1.08,
        market_cap: Some(1_290_000_000_000),
        trend: Trend::Up,
    },
    StockSeed {
        symbol: "GOOGL",
        name: "Alphabet Inc. Class A",
        price: 141.8,
        change: -0.92,
        change_percent: -0.64,
        market_cap: Some(1_750_000_000_000),
        trend: Trend::Flat,
    },
    StockSeed {
        symbol: "BRK-B",
        name: "Berkshire Hathaway Inc.",
        price: 412.85,
        change: 1.23,
        change_percent: 0.3,
        market_cap: Some(890_000_000_000),
        trend: Trend::Up,
    },
    StockSeed {
        symbol: "UNH",
        name: "UnitedHealth Group Inc.",
        price: 520.15,
        change: -3.45,
        change_percent: -0.66,
        market_cap: Some(480_000_000_000),
        trend: Trend::Down,
    },
    StockSeed {
        symbol: "JNJ",
        name: "Johnson & Johnson",
        price: 162.42,
        change: 0.58,
        change_percent: 0.36,
        market_cap: Some(390_000_000_000),
        trend: Trend::Up,
    },
    StockSeed {
        symbol: "V",
        name: "Visa Inc.",
        price: 280.35,
        change: 1.25,
        change_percent: 0.45,
        market_cap: Some(580_000_000_000),
        trend: Trend::Up,
    },
    StockSeed {
        symbol: "XOM",
        name: "Exxon Mobil Corporation",
        price: 116.82,
        change: -0.45,
        change_percent: -0.38,
        market_cap: Some(465_000_000_000),
        trend: Trend::Down,
    },
    StockSeed {
        symbol: "JPM",
        name: "JPMorgan Chase & Co.",
        price: 195.42,
        change: 2.18,
        change_percent: 1.13,
        market_cap: Some(565_000_000_000),
        trend: Trend::Up,
    },
    StockSeed {
        symbol: "WMT",
        name: "Walmart Inc.",
        price: 175.28,
        change: -1.12,
        change_percent: -0.64,
        market_cap: Some(470_000_000_000),
        trend: Trend::Down,
    },
    StockSeed {
        symbol: "AMD",
        name: "Advanced Micro Devices Inc.",
        price: 178.92,
        change: 7.05,
        change_percent: 4.12,
        market_cap: Some(290_000_000_000),
        trend: Trend::Up,
    },
    StockSeed {
        symbol: "NFLX",
        name: "Netflix Inc.",
        price: 628.45,
        change: -13.82,
        change_percent: -2.15,
        market_cap: Some(270_000_000_000),
        trend: Trend::Down,
    },
    StockSeed {
        symbol: "CRM",
        name: "Salesforce Inc.",
        price: 312.5,
        change: 4.75,
        change_percent: 1.54,
        market_cap: Some(305_000_000_000),
        trend: Trend::Up,
    },
    StockSeed {
        symbol: "ADBE",
        name: "Adobe Inc.",
        price: 598.32,
        change: 8.45,
        change_percent: 1.43,
        market_cap: Some(265_000_000_000),
        trend: Trend::Up,
    },
    StockSeed {
        symbol: "INTC",
        name: "Intel Corporation",
        price: 42.15,
        change: -0.68,
        change_percent: -1.59,
        market_cap: Some(178_000_000_000),
        trend: Trend::Down,
    },
    StockSeed {
        symbol: "MA",
        name: "Mastercard Inc.",
        price: 528.45,
        change: 3.22,
        change_percent: 0.61,
        market_cap: Some(490_000_000_000),
        trend: Trend::Up,
    },
    StockSeed {
        symbol: "HD",
        name: "Home Depot Inc.",
        price: 385.72,
        change: -2.15,
        change_percent: -0.55,
        market_cap: Some(382_000_000_000),
        trend: Trend::Down,
    },
    StockSeed {
        symbol: "CVX",
        name: "Chevron Corporation",
        price: 158.32,
        change: 1.85,
        change_percent: 1.18,
        market_cap: Some(285_000_000_000),
        trend: Trend::Up,
    },
    StockSeed {
        symbol: "KO",
        name: "Coca-Cola Co.",
        price: 62.45,
        change: 0.32,
        change_percent: 0.52,
        market_cap: Some(270_000_000_000),
        trend: Trend::Up,
    },
    StockSeed {
        symbol: "PFE",
        name: "Pfizer Inc.",
        price: 28.75,
        change: -0.45,
        change_percent: -1.54,
        market_cap: Some(162_000_000_000),
        trend: Trend::Down,
    },
    StockSeed {
        symbol: "PG",
        name: "Procter & Gamble Co.",
        price: 168.92,
        change: 1.15,
        change_percent: 0.69,
        market_cap: Some(396_000_000_000),
        trend: Trend::Up,
    },
];

pub fn find_seed(symbol: &str) -> Option<&'static StockSeed> {
    STOCK_SEEDS.iter().find(|s| s.symbol == symbol)
}

pub fn indices() -> Vec<MarketIndex> {
    vec![
        MarketIndex {
            symbol: "^GSPC".to_string(),
            name: "S&P 500".to_string(),
            price: 5005.57,
            change_percent: 0.12,
        },
        MarketIndex {
            symbol: "^IXIC".to_string(),
            name: "Nasdaq".to_string(),
            price: 15859.15,
            change_percent: -0.3,
        },
        MarketIndex {
            symbol: "^DJI".to_string(),
            name: "Dow Jones".to_string(),
            price: 38627.99,
            change_percent: 0.25,
        },
    ]
}

pub fn top_movers() -> Vec<DailyMover> {
    let movers = [
        ("NVDA", "NVIDIA Corp", 726.13, 2.44),
        ("TSLA", "Tesla Inc.", 202.64, -3.89),
        ("META", "Meta Platforms", 505.68, 1.08),
        ("AMD", "AMD Inc.", 178.92, 4.12),
        ("NFLX", "Netflix Inc.", 628.45, -2.15),
    ];
    movers
        .into_iter()
        .map(|(symbol, name, price, change_percent)| DailyMover {
            symbol: symbol.to_string(),
            name: name.to_string(),
            price,
            change_percent,
        })
        .collect()
}

pub fn sectors() -> Vec<Sector> {
    let rows = [
        ("Technology", 1.24),
        ("Finance", 0.52),
        ("Energy", -0.78),
        ("Healthcare", 0.35),
        ("Consumer", -0.21),
    ];
    rows.into_iter()
        .map(|(name, change_percent)| Sector {
            name: name.to_string(),
            change_percent,
        })
        .collect()
}

pub fn featured_news() -> FeaturedNews {
    FeaturedNews {
        title: "NVIDIA Surges on AI Demand".to_string(),
        symbol: "NVDA".to_string(),
        summary: "NVIDIA shares rally as AI chip demand continues to drive growth in the \
                  semiconductor sector."
            .to_string(),
    }
}

pub fn news() -> Vec<NewsItem> {
    let rows: [(&str, &str, &str, &str, &[&str]); 6] = [
        (
            "NVIDIA Surges on Record AI Chip Demand",
            "Reuters",
            "https://www.reuters.com/technology/nvidia",
            "2025-02-18T14:30:00Z",
            &["NVDA", "AMD"],
        ),
        (
            "Tesla Deliveries Miss Estimates Amid Production Challenges",
            "Bloomberg",
            "https://www.bloomberg.com/tesla",
            "2025-02-18T12:00:00Z",
            &["TSLA"],
        ),
        (
            "Fed Signals Potential Rate Cuts in 2025",
            "Wall Street Journal",
            "https://www.wsj.com/economy",
            "2025-02-18T11:00:00Z",
            &[],
        ),
        (
            "Apple Vision Pro Sales Exceed Expectations",
            "CNBC",
            "https://www.cnbc.com/apple",
            "2025-02-18T10:00:00Z",
            &["AAPL"],
        ),
        (
            "Meta Announces Major AI Investment Initiative",
            "TechCrunch",
            "https://techcrunch.com/meta",
            "2025-02-18T08:00:00Z",
            &["META", "NVDA"],
        ),
        (
            "Oil Prices Slip on Demand Concerns",
            "Reuters",
            "https://www.reuters.com/markets",
            "2025-02-18T06:00:00Z",
            &["XOM", "CVX"],
        ),
    ];
    rows.into_iter()
        .map(|(title, publisher, link, published_at, related)| NewsItem {
            title: title.to_string(),
            publisher: publisher.to_string(),
            link: link.to_string(),
            published_at: published_at.to_string(),
            related_stocks: related.iter().map(|s| s.to_string()).collect(),
        })
        .collect()
}

pub fn earnings() -> Vec<EarningEvent> {
    let rows = [
        ("NVDA", "NVIDIA Corporation", "Feb 21", "after_market", 4.59),
        ("AAPL", "Apple Inc.", "Feb 20", "after_market", 2.1),
        ("MSFT", "Microsoft Corporation", "Feb 22", "after_market", 2.78),
        ("TSLA", "Tesla Inc.", "Feb 25", "after_market", 0.73),
        ("AMZN", "Amazon.com Inc.", "Feb 26", "after_market", 0.8),
        ("META", "Meta Platforms Inc.", "Feb 27", "after_market", 4.95),
        ("GOOGL", "Alphabet Inc.", "Feb 28", "after_market", 1.59),
        ("JPM", "JPMorgan Chase", "Mar 1", "before_market", 4.12),
    ];
    rows.into_iter()
        .map(|(symbol, name, date, time, eps)| EarningEvent {
            symbol: symbol.to_string(),
            name: name.to_string(),
            date: date.to_string(),
            time: time.to_string(),
            expected_eps: Some(eps),
        })
        .collect()
}

pub fn ratings() -> Vec<AnalystRating> {
    let rows = [
        ("NVDA", "NVIDIA Corporation", "buy", 4.8, 850.0, 726.13, 17.06, 42),
        ("AAPL", "Apple Inc.", "buy", 4.2, 210.0, 185.92, 12.95, 38),
        ("MSFT", "Microsoft Corporation", "buy", 4.4, 450.0, 420.55, 7.01, 35),
        ("TSLA", "Tesla Inc.", "hold", 3.2, 220.0, 202.64, 8.56, 28),
        ("META", "Meta Platforms Inc.", "buy", 4.3, 580.0, 505.68, 14.69, 32),
        ("AMZN", "Amazon.com Inc.", "buy", 4.5, 205.0, 178.35, 14.93, 40),
    ];
    rows.into_iter()
        .map(
            |(symbol, name, rating, score, target, current, upside, count)| AnalystRating {
                symbol: symbol.to_string(),
                name: name.to_string(),
                rating: rating.to_string(),
                rating_score: score,
                target_price: target,
                current_price: current,
                upside_percent: upside,
                analyst_count: count,
            },
        )
        .collect()
}

pub fn dividends() -> Vec<DividendStock> {
    let rows = [
        ("CVX", "Chevron Corporation", 158.32, 4.02, 6.52, "Feb 15"),
        ("KO", "Coca-Cola Co.", 62.45, 3.12, 1.94, "Mar 1"),
        ("JNJ", "Johnson & Johnson", 162.42, 2.98, 4.76, "Feb 20"),
        ("PG", "Procter & Gamble Co.", 168.92, 2.45, 4.03, "Feb 22"),
        ("XOM", "Exxon Mobil Corporation", 116.82, 3.65, 4.28, "Feb 10"),
        ("PFE", "Pfizer Inc.", 28.75, 5.42, 1.56, "Feb 25"),
    ];
    rows.into_iter()
        .map(|(symbol, name, price, yield_pct, annual, ex_date)| DividendStock {
            symbol: symbol.to_string(),
            name: name.to_string(),
            price,
            dividend_yield: yield_pct,
            annual_dividend: annual,
            payout_frequency: "quarterly".to_string(),
            ex_dividend_date: ex_date.to_string(),
        })
        .collect()
}

#[allow(clippy::too_many_arguments)]
fn extreme_row(
    symbol: &str,
    name: &str,
    price: f64,
    week_high: f64,
    week_low: f64,
    percent_from_high: f64,
    is_new_high: bool,
    is_new_low: bool,
) -> WeekHighLow {
    WeekHighLow {
        symbol: symbol.to_string(),
        name: name.to_string(),
        price,
        week_high,
        week_low,
        percent_from_high,
        is_new_high,
        is_new_low,
    }
}

pub fn week_extremes() -> WeekExtremes {
    WeekExtremes {
        highs: vec![
            extreme_row("NVDA", "NVIDIA Corporation", 726.13, 726.13, 392.0, 0.0, true, false),
            extreme_row("META", "Meta Platforms Inc.", 505.68, 512.0, 88.0, 1.23, false, false),
            extreme_row("MSFT", "Microsoft Corporation", 420.55, 430.0, 245.0, 2.2, false, false),
        ],
        lows: vec![
            extreme_row("INTC", "Intel Corporation", 42.15, 68.0, 42.15, 38.01, false, true),
            extreme_row("PFE", "Pfizer Inc.", 28.75, 42.0, 28.75, 31.55, false, true),
        ],
    }
}
