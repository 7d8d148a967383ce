//! Not Found Page - Unknown paths, tab bar stays visible

use leptos::prelude::*;
use lib_core::nav::NavigationShell;
use lib_core::AppConfig;

#[component]
pub fn NotFoundPage() -> impl IntoView {
    let config = expect_context::<AppConfig>();
    let home_href = NavigationShell::new(&config.base_path).href("/");

    view! {
        <div class="page not-found-page">
            <div class="card not-found-card">
                <h1>"404 - Page Not Found"</h1>
                <p>"The page you're looking for doesn't exist."</p>
                <a class="btn" href=home_href>"Back to markets"</a>
            </div>
        </div>
    }
}
