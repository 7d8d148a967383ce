//! Crypto Exchange PWA - Leptos Frontend
//!
//! Router, global contexts and the persistent chrome (tab bar, update prompt).

use leptos::prelude::*;
use leptos_router::{
    components::{Route, Router, Routes},
    path,
};
use lib_core::AppConfig;

use crate::components::{TabBar, UpdatePrompt};
use crate::pages::{AssetsPage, HomePage, InstallPage, MarketPage, NotFoundPage, TradePage};
use crate::state::pwa::provide_pwa_context;
use crate::utils::constants::BASE_PATH;

/// Build-time config, falling back to root hosting when the baked-in base path is
/// rejected.
fn load_config() -> AppConfig {
    AppConfig::with_base_path(BASE_PATH).unwrap_or_else(|e| {
        log::error!("{}; using defaults", e);
        AppConfig::default()
    })
}

#[component]
pub fn App() -> impl IntoView {
    let config = load_config();
    log::info!("Starting with base path {:?}", config.base_path);

    provide_context(config.clone());
    provide_pwa_context(&config);

    Effect::new(move |_| crate::hide_loading_screen());

    view! {
        <Router base=config.router_base().to_string()>
            <div class="app-container">
                <main class="app-content">
                    <Routes fallback=NotFoundPage>
                        <Route path=path!("/") view=HomePage/>
                        <Route path=path!("/market") view=MarketPage/>
                        <Route path=path!("/trade") view=TradePage/>
                        <Route path=path!("/assets") view=AssetsPage/>
                        <Route path=path!("/install") view=InstallPage/>
                    </Routes>
                </main>
                <TabBar/>
                <UpdatePrompt/>
            </div>
        </Router>
    }
}
