//! # Trade Form
//!
//! Local state of the quick-trade form. Nothing is sent anywhere: a submit only
//! validates the input, produces a [`TradeReceipt`] for the confirmation notice and
//! clears the inputs.
//!
//! ## Derived fields
//!
//! Amount and total are kept in sync through the selected pair's price:
//!
//! - editing the amount sets `total = amount × price` with 2 decimals
//! - editing the total sets `amount = total / price` with 8 decimals
//! - input that is not a non-negative number clears the other field
//!
//! ```rust
//! use lib_core::trade::TradeForm;
//!
//! let mut form = TradeForm::default();
//! form.set_amount("0.5");
//! assert_eq!(form.total(), "22615.25");
//! ```

use lib_utils::parse_amount;
use shared::dto::{TradePair, TradeSide};

use crate::error::{AppError, Result};
use crate::mock::trades::default_pairs;

/// Fractions offered by the quick-fill buttons.
pub const QUICK_FRACTIONS: [f64; 4] = [0.25, 0.5, 0.75, 1.0];

/// Confirmation of a simulated order.
#[derive(Debug, Clone, PartialEq)]
pub struct TradeReceipt {
    pub side: TradeSide,
    pub pair: String,
    pub amount: String,
    pub total: String,
}

impl TradeReceipt {
    /// Text of the confirmation notice, e.g. `Buy 0.5 BTC succeeded`.
    pub fn message(&self) -> String {
        let base = self.pair.split('/').next().unwrap_or(&self.pair);
        format!("{} {} {} succeeded", self.side.label(), self.amount, base)
    }
}

/// Trade form state for one mount of the trade page.
#[derive(Debug, Clone, PartialEq)]
pub struct TradeForm {
    pairs: Vec<TradePair>,
    selected: usize,
    amount: String,
    total: String,
    side: TradeSide,
}

impl Default for TradeForm {
    fn default() -> Self {
        Self::new(default_pairs())
    }
}

impl TradeForm {
    /// Form over `pairs`, first pair selected. An empty list falls back to the
    /// default pairs.
    pub fn new(pairs: Vec<TradePair>) -> Self {
        let pairs = if pairs.is_empty() { default_pairs() } else { pairs };
        Self {
            pairs,
            selected: 0,
            amount: String::new(),
            total: String::new(),
            side: TradeSide::default(),
        }
    }

    pub fn pairs(&self) -> &[TradePair] {
        &self.pairs
    }

    pub fn current_pair(&self) -> &TradePair {
        &self.pairs[self.selected]
    }

    pub fn amount(&self) -> &str {
        &self.amount
    }

    pub fn total(&self) -> &str {
        &self.total
    }

    pub fn side(&self) -> TradeSide {
        self.side
    }

    pub fn set_side(&mut self, side: TradeSide) {
        self.side = side;
    }

    /// Select a pair by symbol and reprice the total from the entered amount.
    pub fn select_pair(&mut self, symbol: &str) -> Result<()> {
        let index = self
            .pairs
            .iter()
            .position(|p| p.symbol == symbol)
            .ok_or_else(|| AppError::UnknownPair(symbol.to_string()))?;
        self.selected = index;
        if !self.amount.is_empty() {
            let amount = self.amount.clone();
            self.set_amount(&amount);
        }
        Ok(())
    }

    pub fn set_amount(&mut self, value: &str) {
        self.amount = value.to_string();
        self.total = match parse_amount(value, "Amount") {
            Ok(Some(amount)) => format!("{:.2}", amount * self.current_pair().price),
            _ => String::new(),
        };
    }

    pub fn set_total(&mut self, value: &str) {
        self.total = value.to_string();
        let price = self.current_pair().price;
        self.amount = match parse_amount(value, "Total") {
            Ok(Some(total)) if price > 0.0 => format!("{:.8}", total / price),
            _ => String::new(),
        };
    }

    /// Fill the form with a fraction of the available balance.
    ///
    /// `balance` is the quote balance (USDT) when buying and the base balance when
    /// selling.
    pub fn quick_fill(&mut self, fraction: f64, balance: f64) {
        let fraction = fraction.clamp(0.0, 1.0);
        let portion = balance.max(0.0) * fraction;
        match self.side {
            TradeSide::Buy => self.set_total(&format!("{:.2}", portion)),
            TradeSide::Sell => self.set_amount(&format!("{:.8}", portion)),
        }
    }

    /// Validate and "place" the order, then clear the inputs.
    ///
    /// Leaves the form untouched when amount or total is missing or malformed.
    pub fn submit(&mut self) -> Result<TradeReceipt> {
        if self.amount.trim().is_empty() || self.total.trim().is_empty() {
            return Err(AppError::Validation("Enter an amount to trade".to_string()));
        }
        parse_amount(&self.amount, "Amount").map_err(AppError::Validation)?;
        parse_amount(&self.total, "Total").map_err(AppError::Validation)?;

        let receipt = TradeReceipt {
            side: self.side,
            pair: self.current_pair().symbol.clone(),
            amount: self.amount.trim().to_string(),
            total: self.total.trim().to_string(),
        };
        tracing::info!(
            side = receipt.side.label(),
            pair = %receipt.pair,
            amount = %receipt.amount,
            "Simulated order placed"
        );

        self.amount.clear();
        self.total.clear();
        Ok(receipt)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_amount_derives_total() {
        let mut form = TradeForm::default();
        form.set_amount("0.5");
        assert_eq!(form.total(), "22615.25");
    }

    #[test]
    fn test_total_derives_amount() {
        let mut form = TradeForm::default();
        form.select_pair("SOL/USDT").unwrap();
        form.set_total("197.5");
        assert_eq!(form.amount(), "2.00000000");
    }

    #[test]
    fn test_invalid_input_clears_other_field() {
        let mut form = TradeForm::default();
        form.set_amount("1");
        form.set_amount("abc");
        assert_eq!(form.amount(), "abc");
        assert_eq!(form.total(), "");
    }

    #[test]
    fn test_select_pair_reprices_total() {
        let mut form = TradeForm::default();
        form.set_amount("2");
        form.select_pair("BNB/USDT").unwrap();
        assert_eq!(form.current_pair().base(), "BNB");
        assert_eq!(form.total(), "851.20");
    }

    #[test]
    fn test_select_unknown_pair() {
        let mut form = TradeForm::default();
        let err = form.select_pair("DOGE/USDT").unwrap_err();
        assert_eq!(err, AppError::UnknownPair("DOGE/USDT".to_string()));
        assert_eq!(form.current_pair().symbol, "BTC/USDT");
    }

    #[test]
    fn test_submit_empty_is_rejected_and_state_kept() {
        let mut form = TradeForm::default();
        form.set_side(TradeSide::Sell);
        let before = form.clone();
        assert!(matches!(form.submit(), Err(AppError::Validation(_))));
        assert_eq!(form, before);
    }

    #[test]
    fn test_submit_resets_inputs() {
        let mut form = TradeForm::default();
        form.set_amount("0.5");
        let receipt = form.submit().unwrap();
        assert_eq!(receipt.message(), "Buy 0.5 BTC succeeded");
        assert_eq!(form.amount(), "");
        assert_eq!(form.total(), "");
        assert_eq!(form.side(), TradeSide::Buy);
    }

    #[test]
    fn test_quick_fill_by_side() {
        let mut form = TradeForm::default();
        form.select_pair("ETH/USDT").unwrap();
        form.quick_fill(0.5, 2_845.8);
        assert_eq!(form.total(), "1422.90");
        assert_eq!(form.amount(), "0.50000000");

        form.set_side(TradeSide::Sell);
        form.quick_fill(0.25, 5.0);
        assert_eq!(form.amount(), "1.25000000");
        assert_eq!(form.total(), "3557.25");
    }
}
