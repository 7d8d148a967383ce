//! Mock market feed scoped to the mounting view

use std::time::Duration;

use leptos::prelude::*;
use lib_core::mock::{MarketSource, MockMarket, SymbolInfo};
use lib_core::AppConfig;
use shared::dto::MarketRecord;

/// Seed from the clock mixed with `Math.random`, so two views mounted in the
/// same millisecond still differ.
pub fn browser_seed() -> u64 {
    let now = js_sys::Date::now() as u64;
    let noise = (js_sys::Math::random() * u32::MAX as f64) as u64;
    now.rotate_left(17) ^ noise
}

/// Rows for `catalog`, regenerated on mount and perturbed every market tick.
///
/// The interval is cleared when the owning view unmounts.
pub fn use_market_feed(catalog: &'static [SymbolInfo]) -> ReadSignal<Vec<MarketRecord>> {
    let config = expect_context::<AppConfig>();
    let mut market = MockMarket::from_seed(browser_seed(), catalog);
    let (records, set_records) = signal(market.snapshot());
    let market = StoredValue::new(market);

    match set_interval_with_handle(
        move || {
            market.update_value(|market| set_records.update(|rows| market.tick(rows)));
        },
        Duration::from_millis(config.market_tick_ms),
    ) {
        Ok(handle) => on_cleanup(move || handle.clear()),
        Err(e) => log::error!("Market ticker not started: {:?}", e),
    }

    records
}
