//! Home Page - Market overview table with live mock prices

use leptos::prelude::*;
use lib_core::mock::{MarketSummary, HOME_SYMBOLS};
use lib_core::nav::NavigationShell;
use lib_core::AppConfig;
use shared::utils::{format_percentage, format_price};

use crate::state::market::use_market_feed;
use crate::state::pwa::use_pwa_context;

#[component]
pub fn HomePage() -> impl IntoView {
    let config = expect_context::<AppConfig>();
    let pwa = use_pwa_context();
    let markets = use_market_feed(HOME_SYMBOLS);
    let summary = Memo::new(move |_| markets.with(|rows| MarketSummary::from_records(rows)));

    let install_href = NavigationShell::new(&config.base_path).href("/install");
    let online = move || pwa.snapshot.with(|s| s.online);
    let can_install = move || pwa.snapshot.with(|s| s.shows_install_affordance());

    view! {
        <div class="page exchange-page">
            <div class="exchange-header">
                <div class="exchange-header-top">
                    <div class="exchange-title">
                        <h1>"Markets"</h1>
                        <div class="header-badges">
                            <div class=move || if online() { "status-badge online" } else { "status-badge offline" }>
                                <span class="status-dot-small"></span>
                                {move || if online() { "Online" } else { "Offline" }}
                            </div>
                            <Show when=can_install>
                                <a class="install-entry-btn" href=install_href.clone() title="Install the app">
                                    <span class="install-icon">"📱"</span>
                                    <span class="install-text">"Install app"</span>
                                </a>
                            </Show>
                        </div>
                    </div>
                    <div class="market-overview">
                        <div class="overview-item">
                            <span class="overview-label">"Market cap"</span>
                            <span class="overview-value">
                                {move || format!("${:.2}B", summary.with(|s| s.total_market_cap) / 1e9)}
                            </span>
                        </div>
                        <div class="overview-divider"></div>
                        <div class="overview-item">
                            <span class="overview-label">"Gainers / losers"</span>
                            <span class="overview-value">
                                <span class="ratio-up">{move || format!("{}↑", summary.with(|s| s.gainers))}</span>
                                <span class="ratio-separator">"/"</span>
                                <span class="ratio-down">{move || format!("{}↓", summary.with(|s| s.losers))}</span>
                            </span>
                        </div>
                    </div>
                </div>
            </div>

            <div class="exchange-content">
                <div class="market-table">
                    <div class="market-table-header">
                        <div class="table-col-name">"Pair"</div>
                        <div class="table-col-price">"Last price"</div>
                        <div class="table-col-change">"24h change"</div>
                        <div class="table-col-volume">"24h volume"</div>
                    </div>
                    <div class="market-table-body">
                        {move || {
                            markets
                                .get()
                                .into_iter()
                                .enumerate()
                                .map(|(index, item)| {
                                    let change_class = if item.change_percent >= 0.0 {
                                        "table-col-change up"
                                    } else {
                                        "table-col-change down"
                                    };
                                    view! {
                                        <div class="market-table-row">
                                            <div class="table-col-name">
                                                <span class="market-rank">{format!("#{}", index + 1)}</span>
                                                <div class="market-pair">
                                                    <span class="market-symbol-text">{item.symbol.clone()}</span>
                                                    <span class="market-name-text">{item.name.clone()}</span>
                                                </div>
                                            </div>
                                            <div class="table-col-price">
                                                <span class="price-main">{format!("${}", format_price(item.price))}</span>
                                            </div>
                                            <div class=change_class>{format_percentage(item.change_percent)}</div>
                                            <div class="table-col-volume">
                                                <span class="volume-value">{format!("${:.2}M", item.volume / 1e6)}</span>
                                            </div>
                                        </div>
                                    }
                                })
                                .collect_view()
                        }}
                    </div>
                </div>

                <div class="market-indicators">
                    <div class="indicator-card">
                        <div class="indicator-icon">"🔥"</div>
                        <div class="indicator-info">
                            <span class="indicator-label">"Top pair"</span>
                            <span class="indicator-value">"BTC/USDT"</span>
                        </div>
                    </div>
                    <div class="indicator-card">
                        <div class="indicator-icon">"📈"</div>
                        <div class="indicator-info">
                            <span class="indicator-label">"Best 24h move"</span>
                            <span class="indicator-value green">
                                {move || summary.with(|s| s.top_gain_percent.map(format_percentage).unwrap_or_default())}
                            </span>
                        </div>
                    </div>
                    <div class="indicator-card">
                        <div class="indicator-icon">"💹"</div>
                        <div class="indicator-info">
                            <span class="indicator-label">"Active coins"</span>
                            <span class="indicator-value">{move || format!("{}+", markets.with(|rows| rows.len()))}</span>
                        </div>
                    </div>
                </div>
            </div>
        </div>
    }
}
