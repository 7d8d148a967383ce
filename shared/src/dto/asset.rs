//! # Asset Records
//!
//! Rows of the wallet ("assets") page. Display-only: nothing writes them back.

use serde::{Deserialize, Serialize};

/// A held (or zero-balance) asset.
///
/// `value` is always `balance * price`; build rows through [`AssetRecord::new`]
/// so the two never drift apart.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AssetRecord {
    pub symbol: String,
    pub name: String,
    pub balance: f64,
    pub price: f64,
    pub value: f64,
    pub change_percent: f64,
}

impl AssetRecord {
    pub fn new(symbol: impl Into<String>, name: impl Into<String>, balance: f64, price: f64, change_percent: f64) -> Self {
        let balance = balance.max(0.0);
        let price = price.max(0.0);
        Self {
            symbol: symbol.into(),
            name: name.into(),
            balance,
            price,
            value: balance * price,
            change_percent,
        }
    }

    pub fn is_held(&self) -> bool {
        self.balance > 0.0
    }

    /// First character of the symbol, used as the round icon glyph.
    pub fn glyph(&self) -> char {
        self.symbol.chars().next().unwrap_or('?')
    }
}
