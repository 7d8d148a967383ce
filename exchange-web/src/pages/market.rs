//! Market Page - Full coin list with live mock prices

use leptos::prelude::*;
use lib_core::mock::{MarketSummary, MARKET_SYMBOLS};
use shared::utils::{format_change_arrow, format_price, format_volume};

use crate::state::market::use_market_feed;

#[component]
pub fn MarketPage() -> impl IntoView {
    let markets = use_market_feed(MARKET_SYMBOLS);
    let summary = Memo::new(move |_| markets.with(|rows| MarketSummary::from_records(rows)));

    view! {
        <div class="page market-page">
            <div class="market-header-banner">
                <div class="banner-content">
                    <div class="banner-icon">"📊"</div>
                    <div class="banner-text">
                        <h1 class="banner-title">"Live Market"</h1>
                        <p class="banner-subtitle">"Global crypto prices"</p>
                    </div>
                </div>
                <div class="market-stats-row">
                    <div class="stat-box">
                        <span class="stat-label">"24h volume"</span>
                        <span class="stat-value">
                            {move || format!("${}", format_volume(markets.with(|rows| rows.iter().map(|r| r.volume).sum::<f64>())))}
                        </span>
                    </div>
                    <div class="stat-box">
                        <span class="stat-label">"Up / down"</span>
                        <span class="stat-value positive">
                            {move || summary.with(|s| format!("↑ {}:{}", s.gainers, s.losers))}
                        </span>
                    </div>
                </div>
            </div>

            <div class="market-container">
                <div class="market-list">
                    {move || {
                        markets
                            .get()
                            .into_iter()
                            .map(|item| {
                                let change_class = if item.is_up() { "price-change up" } else { "price-change down" };
                                view! {
                                    <div class="market-item">
                                        <div class="market-item-left">
                                            <div class="market-symbol">
                                                <span class="market-name">{item.name.clone()}</span>
                                                <span class="market-code">{item.symbol.clone()}</span>
                                            </div>
                                        </div>
                                        <div class="market-item-right">
                                            <div class="market-price">
                                                <div class="price-value">{format!("${}", format_price(item.price))}</div>
                                                <div class=change_class>{format_change_arrow(item.change_percent)}</div>
                                            </div>
                                            <div class="market-volume">
                                                {format!("24h vol: {}", format_volume(item.volume))}
                                            </div>
                                        </div>
                                    </div>
                                }
                            })
                            .collect_view()
                    }}
                </div>
            </div>
        </div>
    }
}
