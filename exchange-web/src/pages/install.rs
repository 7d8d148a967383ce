//! Install Page - Full-screen app-store style install screen
//!
//! Rendered without the tab bar. The install button goes through the lifecycle
//! context: native dialog when the browser offered one, otherwise the manual
//! guide matching the detected device and browser.

use leptos::prelude::*;
use lib_core::nav::NavigationShell;
use lib_core::pwa::{Environment, InstallStatus};
use lib_core::AppConfig;

use crate::services::pwa::user_agent;
use crate::state::pwa::use_pwa_context;

const FEATURES: [(&str, &str, &str); 4] = [
    ("⚡", "Fast", "Opens instantly from the home screen"),
    ("📶", "Works offline", "Cached pages stay available without a connection"),
    ("🔔", "Always current", "New versions are offered as soon as they land"),
    ("🔒", "Secure", "Served over HTTPS like the website"),
];

const SCREENSHOTS: [(&str, &str); 4] = [
    ("screenshots/home.png", "Markets overview"),
    ("screenshots/market.png", "Live prices"),
    ("screenshots/trade.png", "Quick trade"),
    ("screenshots/assets.png", "Wallet assets"),
];

#[component]
pub fn InstallPage() -> impl IntoView {
    let config = expect_context::<AppConfig>();
    let pwa = use_pwa_context();
    let environment = Environment::from_user_agent(&user_agent());
    log::debug!("Install page environment: {:?}", environment);

    let shell = NavigationShell::new(&config.base_path);
    let back_href = shell.href("/");

    let installed = move || {
        pwa.snapshot
            .with(|s| s.install == InstallStatus::Installed || s.standalone)
    };
    let browser_line = if environment.browser_version.is_empty() {
        environment.browser.name().to_string()
    } else {
        format!("{} {}", environment.browser.name(), environment.browser_version)
    };
    let device_line = format!("{:?}", environment.device);
    let environment = StoredValue::new(environment);
    let guide = move || environment.with_value(|env| env.guide(installed()));
    let button_label = move || {
        if installed() {
            "Installed"
        } else if pwa.snapshot.with(|s| s.install_ready) {
            "Install"
        } else {
            "How to install"
        }
    };

    view! {
        <div class="install-page">
            <div class="install-topbar">
                <a class="install-back" href=back_href>"← Back"</a>
            </div>

            <div class="app-header">
                <img class="app-icon" src=shell.href("/pwa-192x192.png") alt="App icon"/>
                <div class="app-meta">
                    <h1 class="app-name">"Crypto Exchange"</h1>
                    <p class="app-developer">"Demo Exchange Team"</p>
                    <div class="app-rating">
                        <span class="rating-stars">"★★★★★"</span>
                        <span class="rating-value">"4.9"</span>
                    </div>
                </div>
            </div>

            <button
                class=move || if installed() { "install-main-btn installed" } else { "install-main-btn" }
                disabled=installed
                on:click=move |_| pwa.install()
            >
                {button_label}
            </button>

            <div class="install-guide">
                <div class="guide-icon">{move || guide().icon()}</div>
                <div class="guide-text">
                    <h3>{move || guide().title()}</h3>
                    <p>{move || guide().description()}</p>
                </div>
            </div>

            <div class="screenshots-section">
                <h2 class="section-title">"Screenshots"</h2>
                <div class="screenshots-scroll">
                    {SCREENSHOTS
                        .iter()
                        .map(|(path, caption)| {
                            view! {
                                <figure class="screenshot-card">
                                    <img src=shell.href(&format!("/{}", path)) alt=*caption loading="lazy"/>
                                    <figcaption>{*caption}</figcaption>
                                </figure>
                            }
                        })
                        .collect_view()}
                </div>
            </div>

            <div class="features-section">
                <h2 class="section-title">"Features"</h2>
                <div class="features-grid">
                    {FEATURES
                        .iter()
                        .map(|(icon, title, text)| {
                            view! {
                                <div class="feature-card">
                                    <span class="feature-icon">{*icon}</span>
                                    <h4>{*title}</h4>
                                    <p>{*text}</p>
                                </div>
                            }
                        })
                        .collect_view()}
                </div>
            </div>

            <div class="install-footer">
                <span class="env-info">{browser_line}</span>
                <span class="env-info">{device_line}</span>
            </div>
        </div>
    }
}
