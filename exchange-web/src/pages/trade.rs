//! Trade Page - Quick buy/sell form over mock pairs

use leptos::prelude::*;
use lib_core::mock::assets::mock_holdings;
use lib_core::mock::trades::{generate_depth, generate_recent_trades, RECENT_TRADE_COUNT};
use lib_core::trade::{TradeForm, QUICK_FRACTIONS};
use lib_utils::{format_time_of_day, time_of_day_from_millis};
use rand::rngs::SmallRng;
use rand::SeedableRng;
use shared::dto::{TradePair, TradeSide};
use shared::utils::{format_change_arrow, format_percentage, format_price};

use crate::services::pwa::alert;
use crate::state::market::browser_seed;

/// Balance the quick-fill buttons work from: quote funds when buying, the base
/// coin when selling.
fn available_balance(form: &TradeForm) -> f64 {
    let pair = form.current_pair();
    let symbol = match form.side() {
        TradeSide::Buy => pair.quote(),
        TradeSide::Sell => pair.base(),
    };
    mock_holdings()
        .iter()
        .find(|asset| asset.symbol == symbol)
        .map(|asset| asset.balance)
        .unwrap_or(0.0)
}

#[component]
pub fn TradePage() -> impl IntoView {
    let form = RwSignal::new(TradeForm::default());
    let pair = Memo::new(move |_| form.with(|f| f.current_pair().clone()));

    let recent = Memo::new(move |_| {
        let pair = pair.get();
        let mut rng = SmallRng::seed_from_u64(browser_seed());
        let now = time_of_day_from_millis(js_sys::Date::now() as i64).unwrap_or_default();
        (
            generate_recent_trades(&mut rng, pair.price, now, RECENT_TRADE_COUNT),
            generate_depth(&mut rng),
        )
    });

    let on_submit = move |_| {
        match form.try_update(|f| f.submit()) {
            Some(Ok(receipt)) => alert(&receipt.message()),
            Some(Err(e)) => alert(&e.user_message()),
            None => {}
        }
    };

    view! {
        <div class="page trade-page">
            <div class="trade-header-banner">
                <div class="trade-banner-content">
                    <div class="trade-header-top">
                        <div class="trade-icon">"💱"</div>
                        <div class="trade-header-info">
                            <h1 class="trade-title">"Quick Trade"</h1>
                            <p class="trade-subtitle">"Simple, fast and secure"</p>
                        </div>
                    </div>
                </div>
            </div>

            <div class="trade-container">
                <div class="trade-pair-selector">
                    <div class="selector-header">
                        <span class="selector-label">"Pairs"</span>
                    </div>
                    <div class="pair-list">
                        {form.with_untracked(|f| f.pairs().to_vec())
                            .into_iter()
                            .map(|item| view! { <PairButton item=item form=form/> })
                            .collect_view()}
                    </div>
                </div>

                <div class="price-info-card">
                    <div class="price-info-header">
                        <h2>{move || pair.with(|p| p.name.clone())}</h2>
                        <span class="current-symbol">{move || pair.with(|p| p.symbol.clone())}</span>
                    </div>
                    <div class="price-display">
                        <span class="price-value-large">{move || pair.with(|p| format!("${}", format_price(p.price)))}</span>
                        <span class=move || if pair.with(|p| p.is_up()) { "change-badge up" } else { "change-badge down" }>
                            {move || pair.with(|p| format_change_arrow(p.change_percent))}
                        </span>
                    </div>
                </div>

                <div class="trade-type-selector">
                    <SideButton side=TradeSide::Buy form=form/>
                    <SideButton side=TradeSide::Sell form=form/>
                </div>

                <div class="trade-form">
                    <div class="form-group">
                        <label class="form-label">
                            <span>"Amount"</span>
                            <span class="form-unit">{move || pair.with(|p| p.base().to_string())}</span>
                        </label>
                        <input
                            type="number"
                            class="form-input"
                            placeholder="0.00000000"
                            prop:value=move || form.with(|f| f.amount().to_string())
                            on:input=move |ev| form.update(|f| f.set_amount(&event_target_value(&ev)))
                        />
                    </div>

                    <div class="form-divider">
                        <span class="divider-icon">"×"</span>
                    </div>

                    <div class="form-group">
                        <label class="form-label">
                            <span>"Total"</span>
                            <span class="form-unit">{move || pair.with(|p| p.quote().to_string())}</span>
                        </label>
                        <input
                            type="number"
                            class="form-input"
                            placeholder="0.00"
                            prop:value=move || form.with(|f| f.total().to_string())
                            on:input=move |ev| form.update(|f| f.set_total(&event_target_value(&ev)))
                        />
                    </div>

                    <button
                        class=move || format!("trade-submit-btn {}", form.with(|f| f.side().css_class()))
                        on:click=on_submit
                    >
                        {move || form.with(|f| format!("{} {}", f.side().label(), f.current_pair().base()))}
                    </button>
                </div>

                <div class="quick-amounts">
                    <span class="quick-label">"Quick fill:"</span>
                    <div class="quick-btns">
                        {QUICK_FRACTIONS
                            .iter()
                            .map(|fraction| {
                                let fraction = *fraction;
                                view! {
                                    <button
                                        class="quick-btn"
                                        on:click=move |_| form.update(|f| {
                                            let balance = available_balance(f);
                                            f.quick_fill(fraction, balance);
                                        })
                                    >
                                        {format!("{}%", (fraction * 100.0) as u32)}
                                    </button>
                                }
                            })
                            .collect_view()}
                    </div>
                </div>

                <div class="recent-trades">
                    <h3 class="section-title">"Recent trades"</h3>
                    <div class="trades-list">
                        <div class="trades-header">
                            <span>"Time"</span>
                            <span>{move || pair.with(|p| format!("Price({})", p.quote()))}</span>
                            <span>"Amount"</span>
                        </div>
                        {move || {
                            recent
                                .with(|(trades, _)| trades.clone())
                                .into_iter()
                                .map(|trade| {
                                    view! {
                                        <div class="trade-row">
                                            <span class="trade-time">{format_time_of_day(trade.time)}</span>
                                            <span class=format!("trade-price {}", trade.side.css_class())>
                                                {format_price(trade.price)}
                                            </span>
                                            <span class="trade-amount">{format!("{:.3}", trade.amount)}</span>
                                        </div>
                                    }
                                })
                                .collect_view()
                        }}
                    </div>
                </div>

                <div class="market-depth-preview">
                    <h3 class="section-title">"Market depth"</h3>
                    <div class="depth-chart">
                        <div class="depth-side buy-side">
                            <div class="depth-label">
                                <span>"Buy"</span>
                                <span class="depth-total">{move || recent.with(|(_, d)| format!("{:.1}%", d.buy_percent))}</span>
                            </div>
                            <div class="depth-bar" style:width=move || recent.with(|(_, d)| format!("{:.1}%", d.buy_percent))></div>
                        </div>
                        <div class="depth-side sell-side">
                            <div class="depth-label">
                                <span>"Sell"</span>
                                <span class="depth-total">{move || recent.with(|(_, d)| format!("{:.1}%", d.sell_percent))}</span>
                            </div>
                            <div class="depth-bar" style:width=move || recent.with(|(_, d)| format!("{:.1}%", d.sell_percent))></div>
                        </div>
                    </div>
                </div>
            </div>
        </div>
    }
}

#[component]
fn PairButton(item: TradePair, form: RwSignal<TradeForm>) -> impl IntoView {
    let symbol = item.symbol.clone();
    let selected = {
        let symbol = symbol.clone();
        move || form.with(|f| f.current_pair().symbol == symbol)
    };
    let change_class = if item.is_up() { "pair-change up" } else { "pair-change down" };

    view! {
        <button
            class=move || if selected() { "pair-item active" } else { "pair-item" }
            on:click=move |_| {
                if let Some(Err(e)) = form.try_update(|f| f.select_pair(&symbol)) {
                    log::warn!("{}", e);
                }
            }
        >
            <div class="pair-info">
                <span class="pair-symbol">{item.symbol.clone()}</span>
                <span class="pair-name">{item.name.clone()}</span>
            </div>
            <div class="pair-stats">
                <span class="pair-price">{format!("${}", format_price(item.price))}</span>
                <span class=change_class>{format_percentage(item.change_percent)}</span>
            </div>
        </button>
    }
}

#[component]
fn SideButton(side: TradeSide, form: RwSignal<TradeForm>) -> impl IntoView {
    let class = move || {
        if form.with(|f| f.side() == side) {
            format!("trade-type-btn active {}", side.css_class())
        } else {
            "trade-type-btn".to_string()
        }
    };

    view! {
        <button class=class on:click=move |_| form.update(|f| f.set_side(side))>
            {side.label()}
        </button>
    }
}
