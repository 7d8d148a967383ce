//! Fixed holdings for the assets page.

use shared::dto::AssetRecord;

/// Mock wallet: three coins plus stablecoin held, two listed with a zero balance.
pub fn mock_holdings() -> Vec<AssetRecord> {
    vec![
        AssetRecord::new("USDT", "Tether", 10_000.0, 1.0, 0.0),
        AssetRecord::new("BTC", "Bitcoin", 0.5, 45_230.50, 2.34),
        AssetRecord::new("ETH", "Ethereum", 5.0, 2_845.80, -1.23),
        AssetRecord::new("BNB", "BNB", 10.0, 425.60, 3.45),
        AssetRecord::new("SOL", "Solana", 0.0, 98.75, 5.67),
        AssetRecord::new("XRP", "XRP", 0.0, 0.52, -2.1),
    ]
}
