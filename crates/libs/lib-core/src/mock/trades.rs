//! # Mock Trade Page Data
//!
//! Pair list, recent fills and order-book split for the trade page.

use chrono::NaiveTime;
use lib_utils::seconds_before;
use rand::Rng;
use shared::dto::{DepthSplit, RecentTrade, TradePair, TradeSide};

/// Fills shown under the order form.
pub const RECENT_TRADE_COUNT: usize = 5;

/// Pairs offered by the trade page, first one selected by default.
pub fn default_pairs() -> Vec<TradePair> {
    vec![
        TradePair::new("BTC/USDT", "Bitcoin", 45_230.50, 2.34),
        TradePair::new("ETH/USDT", "Ethereum", 2_845.80, -1.23),
        TradePair::new("BNB/USDT", "BNB", 425.60, 3.45),
        TradePair::new("SOL/USDT", "Solana", 98.75, 5.67),
    ]
}

/// Recent fills around `price`, newest first, going back in time from `now`.
///
/// Fill prices stay within ±50 of `price` (never below zero), amounts have three
/// decimals and consecutive fills are 5 to 15 seconds apart.
pub fn generate_recent_trades<R: Rng + ?Sized>(
    rng: &mut R,
    price: f64,
    now: NaiveTime,
    count: usize,
) -> Vec<RecentTrade> {
    let mut elapsed = 0;
    (0..count)
        .map(|_| {
            let side = if rng.random_bool(0.5) { TradeSide::Buy } else { TradeSide::Sell };
            let offset: f64 = rng.random_range(-50.0..50.0);
            let amount = (rng.random_range(0.001..0.25_f64) * 1_000.0).round() / 1_000.0;
            let trade = RecentTrade {
                time: seconds_before(now, elapsed),
                price: (price + offset).max(0.0),
                amount,
                side,
            };
            elapsed += rng.random_range(5..=15);
            trade
        })
        .collect()
}

/// Order-book pressure with the buy share in `[40, 60)`, one decimal.
pub fn generate_depth<R: Rng + ?Sized>(rng: &mut R) -> DepthSplit {
    let buy = (rng.random_range(40.0..60.0_f64) * 10.0).round() / 10.0;
    DepthSplit::from_buy_percent(buy)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn test_default_pairs() {
        let pairs = default_pairs();
        assert_eq!(pairs.len(), 4);
        assert_eq!(pairs[0].symbol, "BTC/USDT");
        assert_eq!(pairs[3].base(), "SOL");
    }

    #[test]
    fn test_recent_trades_are_newest_first_and_near_price() {
        let mut rng = StdRng::seed_from_u64(11);
        let now = NaiveTime::from_hms_opt(14, 32, 15).unwrap();
        let trades = generate_recent_trades(&mut rng, 45_230.5, now, RECENT_TRADE_COUNT);

        assert_eq!(trades.len(), RECENT_TRADE_COUNT);
        assert_eq!(trades[0].time, now);
        for pair in trades.windows(2) {
            assert!(pair[0].time > pair[1].time);
        }
        for trade in &trades {
            assert!((trade.price - 45_230.5).abs() <= 50.0);
            assert!(trade.amount > 0.0 && trade.amount <= 0.25);
        }
    }

    #[test]
    fn test_recent_trades_price_not_negative() {
        let mut rng = StdRng::seed_from_u64(2);
        let now = NaiveTime::from_hms_opt(9, 0, 0).unwrap();
        let trades = generate_recent_trades(&mut rng, 0.52, now, 20);
        assert!(trades.iter().all(|t| t.price >= 0.0));
    }

    #[test]
    fn test_depth_split() {
        let mut rng = StdRng::seed_from_u64(5);
        for _ in 0..50 {
            let depth = generate_depth(&mut rng);
            assert!((40.0..=60.0).contains(&depth.buy_percent));
            assert!((depth.buy_percent + depth.sell_percent - 100.0).abs() < 1e-9);
        }
    }
}
