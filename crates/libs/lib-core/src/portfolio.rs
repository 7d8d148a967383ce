//! # Portfolio
//!
//! Totals and allocation shares for the assets page.
//!
//! ## Invariants
//!
//! - [`Portfolio::total_value`] is the sum of every row's `value`.
//! - The shares returned by [`Portfolio::allocation`] sum to 100 whenever the
//!   displayed rows hold any value, and the list is empty otherwise.
//!
//! ```rust
//! use lib_core::mock::assets::mock_holdings;
//! use lib_core::portfolio::Portfolio;
//!
//! let portfolio = Portfolio::new(mock_holdings());
//! assert_eq!(portfolio.held_count(), 4);
//! ```

use shared::dto::AssetRecord;

/// Slices below this share get no inline label in the allocation bar.
pub const SLICE_LABEL_MIN_PERCENT: f64 = 8.0;

/// One segment of the allocation bar.
#[derive(Debug, Clone, PartialEq)]
pub struct AllocationSlice {
    pub symbol: String,
    pub percent: f64,
    /// Index into the four-colour palette.
    pub palette_index: usize,
}

impl AllocationSlice {
    pub fn shows_label(&self) -> bool {
        self.percent > SLICE_LABEL_MIN_PERCENT
    }
}

/// Ordered asset list with derived totals.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Portfolio {
    assets: Vec<AssetRecord>,
}

impl Portfolio {
    pub fn new(assets: Vec<AssetRecord>) -> Self {
        Self { assets }
    }

    pub fn assets(&self) -> &[AssetRecord] {
        &self.assets
    }

    pub fn total_value(&self) -> f64 {
        self.assets.iter().map(|a| a.value).sum()
    }

    /// Total converted with a fixed fiat rate.
    pub fn fiat_estimate(&self, rate: f64) -> f64 {
        self.total_value() * rate
    }

    /// Number of assets with a positive balance.
    pub fn held_count(&self) -> usize {
        self.assets.iter().filter(|a| a.is_held()).count()
    }

    /// Rows to display; zero balances only when `show_zero` is set.
    pub fn displayed(&self, show_zero: bool) -> Vec<&AssetRecord> {
        self.assets.iter().filter(|a| show_zero || a.is_held()).collect()
    }

    /// Share of each displayed row in the displayed total.
    pub fn allocation(&self, show_zero: bool) -> Vec<AllocationSlice> {
        let displayed = self.displayed(show_zero);
        let total: f64 = displayed.iter().map(|a| a.value).sum();
        if total <= 0.0 {
            return Vec::new();
        }

        displayed
            .iter()
            .enumerate()
            .map(|(index, asset)| AllocationSlice {
                symbol: asset.symbol.clone(),
                percent: asset.value / total * 100.0,
                palette_index: index % 4,
            })
            .collect()
    }
}
