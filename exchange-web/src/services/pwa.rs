//! Installable-App Browser Bindings via wasm-bindgen
//!
//! Thin JavaScript interop for the service worker, the deferred install prompt and
//! the standalone/network probes. State decisions live in `lib_core::pwa`; this
//! module only talks to the browser.

use js_sys::Function;
use lib_core::pwa::PromptOutcome;
use serde::Deserialize;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;

// ============================================================================
// SERVICE WORKER
// ============================================================================

#[wasm_bindgen(inline_js = "
export async function registerServiceWorker(url, scope, onNeedRefresh, onOfflineReady) {
    if (!('serviceWorker' in navigator)) {
        throw new Error('Service workers are not supported');
    }
    const registration = await navigator.serviceWorker.register(url, { scope, type: 'classic' });

    const watch = (worker) => {
        if (!worker) return;
        worker.addEventListener('statechange', () => {
            if (worker.state !== 'installed') return;
            if (navigator.serviceWorker.controller) {
                onNeedRefresh(registration);
            } else {
                onOfflineReady();
            }
        });
    };

    if (registration.waiting && navigator.serviceWorker.controller) {
        onNeedRefresh(registration);
    }
    watch(registration.installing);
    registration.addEventListener('updatefound', () => watch(registration.installing));
    return registration;
}

export function registrationScope(registration) {
    return registration && registration.scope ? registration.scope : '';
}

export async function checkForUpdate(registration) {
    if (registration.installing || !navigator.onLine) return;
    await registration.update();
}

export function activateWaitingWorker(registration) {
    if (registration && registration.waiting) {
        registration.waiting.postMessage({ type: 'SKIP_WAITING' });
        return true;
    }
    return false;
}

export function waitForControllerChange(timeoutMs) {
    return new Promise((resolve) => {
        let done = false;
        const finish = () => { if (!done) { done = true; resolve(); } };
        navigator.serviceWorker.addEventListener('controllerchange', finish, { once: true });
        setTimeout(finish, timeoutMs);
    });
}
")]
extern "C" {
    /// Register the worker; callbacks fire when a new version is waiting or the
    /// first install finished.
    #[wasm_bindgen(catch)]
    async fn registerServiceWorker(
        url: &str,
        scope: &str,
        on_need_refresh: &Function,
        on_offline_ready: &Function,
    ) -> Result<JsValue, JsValue>;

    fn registrationScope(registration: &JsValue) -> String;

    #[wasm_bindgen(catch)]
    async fn checkForUpdate(registration: &JsValue) -> Result<JsValue, JsValue>;

    fn activateWaitingWorker(registration: &JsValue) -> bool;

    async fn waitForControllerChange(timeout_ms: u32);
}

// ============================================================================
// INSTALL PROMPT AND PLATFORM PROBES
// ============================================================================

#[wasm_bindgen(inline_js = "
export function listenInstallPrompt(onPrompt, onInstalled) {
    window.addEventListener('beforeinstallprompt', (event) => {
        event.preventDefault();
        onPrompt(event);
    });
    window.addEventListener('appinstalled', () => onInstalled());
}

export function isStandalone() {
    return window.matchMedia('(display-mode: standalone)').matches
        || window.navigator.standalone === true;
}

export function listenDisplayMode(onChange) {
    const query = window.matchMedia('(display-mode: standalone)');
    query.addEventListener('change', (event) => onChange(event.matches));
}

export async function installedRelatedApps() {
    if (!('getInstalledRelatedApps' in navigator)) return 0;
    const apps = await navigator.getInstalledRelatedApps();
    return apps.length;
}

export async function showInstallPrompt(event) {
    await event.prompt();
    const choice = await event.userChoice;
    return { outcome: choice.outcome };
}

export function listenNetwork(onChange) {
    window.addEventListener('online', () => onChange(true));
    window.addEventListener('offline', () => onChange(false));
}

export function listenPageHide(onHide) {
    window.addEventListener('pagehide', (event) => onHide(event.persisted === true));
}
")]
extern "C" {
    fn listenInstallPrompt(on_prompt: &Function, on_installed: &Function);

    fn isStandalone() -> bool;

    fn listenDisplayMode(on_change: &Function);

    #[wasm_bindgen(catch)]
    async fn installedRelatedApps() -> Result<JsValue, JsValue>;

    #[wasm_bindgen(catch)]
    async fn showInstallPrompt(event: &JsValue) -> Result<JsValue, JsValue>;

    fn listenNetwork(on_change: &Function);

    fn listenPageHide(on_hide: &Function);
}

/// `userChoice` as returned by [`show_install_prompt`].
#[derive(Debug, Deserialize)]
struct UserChoice {
    outcome: String,
}

fn js_error_message(err: &JsValue) -> String {
    err.as_string()
        .or_else(|| {
            js_sys::Reflect::get(err, &JsValue::from_str("message"))
                .ok()
                .and_then(|m| m.as_string())
        })
        .unwrap_or_else(|| format!("{:?}", err))
}

/// Register `url` for `scope`. The returned value is the registration handle.
pub async fn register_service_worker(
    url: &str,
    scope: &str,
    on_need_refresh: impl FnMut(JsValue) + 'static,
    on_offline_ready: impl FnMut() + 'static,
) -> Result<JsValue, String> {
    // Both callbacks live as long as the page.
    let need_refresh = Closure::<dyn FnMut(JsValue)>::new(on_need_refresh);
    let offline_ready = Closure::<dyn FnMut()>::new(on_offline_ready);
    let result = registerServiceWorker(
        url,
        scope,
        need_refresh.as_ref().unchecked_ref(),
        offline_ready.as_ref().unchecked_ref(),
    )
    .await;
    need_refresh.forget();
    offline_ready.forget();
    result.map_err(|e| js_error_message(&e))
}

pub fn registration_scope(registration: &JsValue) -> String {
    registrationScope(registration)
}

/// Ask the browser to look for a newer worker.
pub async fn check_for_update(registration: &JsValue) -> Result<(), String> {
    checkForUpdate(registration)
        .await
        .map(|_| ())
        .map_err(|e| js_error_message(&e))
}

/// Activate the waiting worker, wait for it to take control, then reload.
pub async fn apply_update_and_reload(registration: &JsValue) {
    if activateWaitingWorker(registration) {
        waitForControllerChange(1_000).await;
    } else {
        log::warn!("No waiting service worker, reloading anyway");
    }
    reload_page();
}

pub fn reload_page() {
    if let Some(window) = web_sys::window() {
        if let Err(e) = window.location().reload() {
            log::error!("Reload failed: {:?}", e);
        }
    }
}

pub fn listen_install_prompt(on_prompt: impl FnMut(JsValue) + 'static, on_installed: impl FnMut() + 'static) {
    let prompt = Closure::<dyn FnMut(JsValue)>::new(on_prompt);
    let installed = Closure::<dyn FnMut()>::new(on_installed);
    listenInstallPrompt(prompt.as_ref().unchecked_ref(), installed.as_ref().unchecked_ref());
    prompt.forget();
    installed.forget();
}

pub fn listen_display_mode(on_change: impl FnMut(bool) + 'static) {
    let closure = Closure::<dyn FnMut(bool)>::new(on_change);
    listenDisplayMode(closure.as_ref().unchecked_ref());
    closure.forget();
}

pub fn listen_network(on_change: impl FnMut(bool) + 'static) {
    let closure = Closure::<dyn FnMut(bool)>::new(on_change);
    listenNetwork(closure.as_ref().unchecked_ref());
    closure.forget();
}

/// `on_hide` gets `event.persisted`: true when the page is kept in the
/// back/forward cache.
pub fn listen_page_hide(on_hide: impl FnMut(bool) + 'static) {
    let closure = Closure::<dyn FnMut(bool)>::new(on_hide);
    listenPageHide(closure.as_ref().unchecked_ref());
    closure.forget();
}

pub fn is_standalone() -> bool {
    isStandalone()
}

/// Number of installed related apps; 0 when the API is missing or fails.
pub async fn installed_related_apps() -> usize {
    match installedRelatedApps().await {
        Ok(count) => count.as_f64().map(|n| n as usize).unwrap_or(0),
        Err(e) => {
            log::warn!("Installed apps query failed: {}", js_error_message(&e));
            0
        }
    }
}

/// Show the native install dialog for a captured `beforeinstallprompt` event.
pub async fn show_install_prompt(event: &JsValue) -> Result<PromptOutcome, String> {
    let choice = showInstallPrompt(event).await.map_err(|e| js_error_message(&e))?;
    let choice: UserChoice = serde_wasm_bindgen::from_value(choice).map_err(|e| e.to_string())?;
    Ok(PromptOutcome::from_outcome(&choice.outcome))
}

pub fn is_online() -> bool {
    web_sys::window().map(|w| w.navigator().on_line()).unwrap_or(true)
}

pub fn user_agent() -> String {
    web_sys::window()
        .and_then(|w| w.navigator().user_agent().ok())
        .unwrap_or_default()
}

pub fn alert(message: &str) {
    if let Some(window) = web_sys::window() {
        let _ = window.alert_with_message(message);
    }
}
