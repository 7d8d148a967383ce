//! Assets Page - Wallet holdings, totals and allocation bar

use leptos::prelude::*;
use lib_core::mock::assets::mock_holdings;
use lib_core::portfolio::{AllocationSlice, Portfolio};
use lib_core::AppConfig;
use shared::dto::AssetRecord;
use shared::utils::{format_number, format_percentage, format_usd};

const SLICE_GRADIENTS: [&str; 4] = [
    "linear-gradient(135deg, #667eea 0%, #764ba2 100%)",
    "linear-gradient(135deg, #f093fb 0%, #f5576c 100%)",
    "linear-gradient(135deg, #4facfe 0%, #00f2fe 100%)",
    "linear-gradient(135deg, #43e97b 0%, #38f9d7 100%)",
];

#[component]
pub fn AssetsPage() -> impl IntoView {
    let config = expect_context::<AppConfig>();
    let portfolio = StoredValue::new(Portfolio::new(mock_holdings()));
    let (show_zero, set_show_zero) = signal(false);

    let total = portfolio.with_value(|p| p.total_value());
    let fiat = portfolio.with_value(|p| p.fiat_estimate(config.fiat_rate));
    let held = portfolio.with_value(|p| p.held_count());

    let rows = move || {
        let show = show_zero.get();
        portfolio.with_value(|p| p.displayed(show).into_iter().cloned().collect::<Vec<_>>())
    };
    let slices = move || {
        let show = show_zero.get();
        portfolio.with_value(|p| p.allocation(show))
    };

    view! {
        <div class="page assets-page">
            <div class="assets-header-banner">
                <div class="assets-banner-content">
                    <div class="total-assets-card">
                        <span class="total-label">"Total assets (USD)"</span>
                        <span class="total-value">{format!("${}", format_usd(total))}</span>
                        <span class="total-cny">{format!("≈ ¥{}", format_usd(fiat))}</span>
                    </div>
                    <div class="assets-count">{format!("{} assets held", held)}</div>
                </div>
            </div>

            <div class="assets-container">
                <div class="assets-toolbar">
                    <h2 class="section-title">"My assets"</h2>
                    <label class="toggle-zero">
                        <input
                            type="checkbox"
                            prop:checked=show_zero
                            on:change=move |ev| set_show_zero.set(event_target_checked(&ev))
                        />
                        <span>"Show zero balances"</span>
                    </label>
                </div>

                <div class="assets-list">
                    {move || {
                        let rows = rows();
                        if rows.is_empty() {
                            view! {
                                <div class="empty-state">
                                    <div class="empty-icon">"📭"</div>
                                    <p>"No assets yet"</p>
                                </div>
                            }
                            .into_any()
                        } else {
                            rows.into_iter()
                                .map(|asset| view! { <AssetRow asset=asset/> })
                                .collect_view()
                                .into_any()
                        }
                    }}
                </div>

                <div class="asset-distribution">
                    <h3 class="section-title">"Allocation"</h3>
                    <div class="distribution-bar">
                        {move || slices().into_iter().map(|slice| view! { <SliceSegment slice=slice/> }).collect_view()}
                    </div>
                </div>
            </div>
        </div>
    }
}

#[component]
fn AssetRow(asset: AssetRecord) -> impl IntoView {
    let change_class = if asset.change_percent >= 0.0 { "asset-change up" } else { "asset-change down" };
    let row_class = if asset.is_held() { "asset-item" } else { "asset-item zero" };

    view! {
        <div class=row_class>
            <div class="asset-left">
                <div class="asset-icon">{asset.glyph().to_string()}</div>
                <div class="asset-info">
                    <span class="asset-symbol">{asset.symbol.clone()}</span>
                    <span class="asset-name">{asset.name.clone()}</span>
                </div>
            </div>
            <div class="asset-right">
                <span class="asset-balance">{format_number(asset.balance, 8)}</span>
                <span class="asset-value">{format!("${}", format_usd(asset.value))}</span>
                <span class=change_class>{format_percentage(asset.change_percent)}</span>
            </div>
        </div>
    }
}

#[component]
fn SliceSegment(slice: AllocationSlice) -> impl IntoView {
    let background = SLICE_GRADIENTS[slice.palette_index % SLICE_GRADIENTS.len()];
    let label = slice
        .shows_label()
        .then(|| format!("{} {:.1}%", slice.symbol, slice.percent));

    view! {
        <div
            class="distribution-segment"
            style:width=format!("{:.2}%", slice.percent)
            style:background=background
            title=format!("{} {:.2}%", slice.symbol, slice.percent)
        >
            {label.map(|text| view! { <span class="segment-label">{text}</span> })}
        </div>
    }
}
