//! Bottom Tab Bar
//!
//! Persistent navigation across the four main views. Hidden on full-screen routes.

use leptos::prelude::*;
use leptos_router::hooks::use_location;
use lib_core::nav::{NavigationShell, Tab, TABS};
use lib_core::AppConfig;

#[component]
pub fn TabBar() -> impl IntoView {
    let config = expect_context::<AppConfig>();
    let location = use_location();
    let base = config.base_path.clone();

    let shell = Memo::new(move |_| {
        let mut shell = NavigationShell::new(&base);
        shell.navigate(&location.pathname.get());
        shell
    });

    view! {
        <Show when=move || shell.with(|s| s.shows_tab_bar())>
            <nav class="tab-bar">
                {TABS
                    .iter()
                    .map(|tab| view! { <TabItem tab=*tab shell=shell/> })
                    .collect_view()}
            </nav>
        </Show>
    }
}

#[component]
fn TabItem(tab: Tab, shell: Memo<NavigationShell>) -> impl IntoView {
    let active = move || shell.with(|s| s.active_tab().map(|t| t.route) == Some(tab.route));
    let href = shell.with_untracked(|s| s.href(tab.path));

    view! {
        <a href=href class=move || if active() { "tab-item active" } else { "tab-item" }>
            <span class="tab-icon">{tab_icon(tab.path)}</span>
            <span class="tab-label">{tab.label}</span>
        </a>
    }
}

fn tab_icon(path: &str) -> &'static str {
    match path {
        "/" => "🏠",
        "/market" => "📈",
        "/trade" => "💱",
        _ => "💼",
    }
}
