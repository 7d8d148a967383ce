//! # Market Records
//!
//! Rows shown on the home, market and trade pages.
//!
//! ## JSON Example
//!
//! ```json
//! {
//!   "symbol": "BTC",
//!   "name": "Bitcoin",
//!   "price": 45230.5,
//!   "change": 1042.0,
//!   "change_percent": 2.36,
//!   "volume": 810000000.0
//! }
//! ```

use chrono::NaiveTime;
use serde::{Deserialize, Serialize};

/// One row of the market table.
///
/// `change` and `change_percent` describe the last price move, so after a tick
/// `change == price - previous_price` and
/// `change_percent == change / previous_price * 100`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MarketRecord {
    pub symbol: String,
    pub name: String,
    pub price: f64,
    pub change: f64,
    pub change_percent: f64,
    pub volume: f64,
}

impl MarketRecord {
    pub fn new(
        symbol: impl Into<String>,
        name: impl Into<String>,
        price: f64,
        change: f64,
        change_percent: f64,
        volume: f64,
    ) -> Self {
        Self {
            symbol: symbol.into(),
            name: name.into(),
            price,
            change,
            change_percent,
            volume,
        }
    }

    /// Whether the row renders with the "up" colour.
    pub fn is_up(&self) -> bool {
        self.change >= 0.0
    }

    /// Price weighted by volume, summed into the home page market cap.
    pub fn market_cap(&self) -> f64 {
        self.price * self.volume
    }
}

/// Buy or sell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum TradeSide {
    #[default]
    Buy,
    Sell,
}

impl TradeSide {
    pub fn label(&self) -> &'static str {
        match self {
            TradeSide::Buy => "Buy",
            TradeSide::Sell => "Sell",
        }
    }

    /// CSS class suffix used by the trade page.
    pub fn css_class(&self) -> &'static str {
        match self {
            TradeSide::Buy => "buy",
            TradeSide::Sell => "sell",
        }
    }
}

/// A tradeable pair such as `BTC/USDT`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TradePair {
    pub symbol: String,
    pub name: String,
    pub price: f64,
    pub change_percent: f64,
}

impl TradePair {
    pub fn new(symbol: impl Into<String>, name: impl Into<String>, price: f64, change_percent: f64) -> Self {
        Self {
            symbol: symbol.into(),
            name: name.into(),
            price,
            change_percent,
        }
    }

    /// Base asset, the part before the slash (`BTC` for `BTC/USDT`).
    pub fn base(&self) -> &str {
        self.symbol.split('/').next().unwrap_or(&self.symbol)
    }

    /// Quote asset, the part after the slash. Pairs without a slash quote in USDT.
    pub fn quote(&self) -> &str {
        self.symbol.split_once('/').map(|(_, quote)| quote).unwrap_or("USDT")
    }

    pub fn is_up(&self) -> bool {
        self.change_percent >= 0.0
    }
}

/// A fill in the "recent trades" list.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RecentTrade {
    pub time: NaiveTime,
    pub price: f64,
    pub amount: f64,
    pub side: TradeSide,
}

/// Order book pressure shown as two bars; the shares always add up to 100.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DepthSplit {
    pub buy_percent: f64,
    pub sell_percent: f64,
}

impl DepthSplit {
    /// Build a split from the buy share, clamped to `0..=100`.
    pub fn from_buy_percent(buy_percent: f64) -> Self {
        let buy_percent = buy_percent.clamp(0.0, 100.0);
        Self {
            buy_percent,
            sell_percent: 100.0 - buy_percent,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pair_base_and_quote() {
        let pair = TradePair::new("ETH/USDT", "Ethereum", 2845.8, -1.23);
        assert_eq!(pair.base(), "ETH");
        assert_eq!(pair.quote(), "USDT");
        assert!(!pair.is_up());
    }

    #[test]
    fn test_pair_without_slash() {
        let pair = TradePair::new("SOL", "Solana", 98.75, 5.67);
        assert_eq!(pair.base(), "SOL");
        assert_eq!(pair.quote(), "USDT");
    }

    #[test]
    fn test_depth_split_sums_to_hundred() {
        let split = DepthSplit::from_buy_percent(52.3);
        assert!((split.buy_percent + split.sell_percent - 100.0).abs() < 1e-9);

        let clamped = DepthSplit::from_buy_percent(140.0);
        assert_eq!(clamped.buy_percent, 100.0);
        assert_eq!(clamped.sell_percent, 0.0);
    }

    #[test]
    fn test_trade_side_serializes_lowercase() {
        assert_eq!(serde_json::to_string(&TradeSide::Sell).unwrap(), "\"sell\"");
    }

    #[test]
    fn test_recent_trade_json_time_format() {
        let trade = RecentTrade {
            time: NaiveTime::from_hms_opt(14, 32, 15).unwrap(),
            price: 45280.5,
            amount: 0.023,
            side: TradeSide::Buy,
        };
        let json = serde_json::to_value(&trade).unwrap();
        assert_eq!(json["time"], "14:32:15");
        assert_eq!(json["side"], "buy");
    }
}
