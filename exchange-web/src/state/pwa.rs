//! Installable-app lifecycle state
//!
//! Wraps [`LifecycleContext`] for the browser: platform callbacks are dispatched
//! into it and every change is mirrored into a signal the views read.

use std::time::Duration;

use leptos::prelude::*;
use leptos::task::spawn_local;
use lib_core::pwa::environment::MANUAL_INSTALL_HINT;
use lib_core::pwa::{Dispatch, InstallAction, LifecycleContext, LifecycleSnapshot, PlatformEvent};
use lib_core::AppConfig;
use wasm_bindgen::JsValue;

use crate::services::pwa as platform;

/// Install prompt event and service worker registration, both browser objects.
type BrowserLifecycle = LifecycleContext<JsValue, JsValue>;

/// Global installable-app context
#[derive(Clone, Copy)]
pub struct PwaContext {
    pub snapshot: RwSignal<LifecycleSnapshot>,
    lifecycle: StoredValue<BrowserLifecycle, LocalStorage>,
    registration: StoredValue<Option<JsValue>, LocalStorage>,
    prompt_delay_ms: u64,
}

impl PwaContext {
    pub fn new(config: &AppConfig) -> Self {
        let mut lifecycle = BrowserLifecycle::from_config(config);
        let snapshot = RwSignal::new(lifecycle.snapshot());
        if let Err(e) = lifecycle.subscribe(move |snap| snapshot.set(*snap)) {
            log::error!("Lifecycle subscription failed: {}", e);
        }

        Self {
            snapshot,
            lifecycle: StoredValue::new_local(lifecycle),
            registration: StoredValue::new_local(None),
            prompt_delay_ms: config.update_prompt_delay_ms,
        }
    }

    pub fn prompt_delay(&self) -> Duration {
        Duration::from_millis(self.prompt_delay_ms)
    }

    /// Feed a platform event. Events arriving after teardown are dropped.
    pub fn dispatch(self, event: PlatformEvent<JsValue, JsValue>) {
        let Some(result) = self.lifecycle.try_update_value(|lifecycle| lifecycle.dispatch(event)) else {
            return;
        };
        match result {
            Ok(Dispatch {
                schedule_update_check_ms: Some(period_ms),
                ..
            }) => self.start_update_checks(period_ms),
            Ok(_) => {}
            Err(e) => log::warn!("Lifecycle event rejected: {}", e),
        }
    }

    /// Wire the browser listeners, probe the install state and register the
    /// service worker.
    pub fn start(self, config: &AppConfig) {
        self.dispatch(PlatformEvent::NetworkChanged {
            online: platform::is_online(),
        });

        platform::listen_install_prompt(
            move |event| self.dispatch(PlatformEvent::InstallPromptAvailable(event)),
            move || self.dispatch(PlatformEvent::AppInstalled),
        );
        platform::listen_display_mode(move |standalone| {
            self.dispatch(PlatformEvent::DisplayModeChanged { standalone })
        });
        platform::listen_network(move |online| self.dispatch(PlatformEvent::NetworkChanged { online }));
        platform::listen_page_hide(move |persisted| self.page_hidden(persisted));

        spawn_local(async move {
            let standalone = platform::is_standalone();
            let related_apps = platform::installed_related_apps().await;
            self.dispatch(PlatformEvent::InstalledProbe {
                standalone,
                related_apps,
            });
        });

        let url = config.service_worker_url();
        let scope = config.service_worker_scope();
        spawn_local(async move {
            let registered = platform::register_service_worker(
                &url,
                &scope,
                move |registration| self.dispatch(PlatformEvent::NeedRefresh(registration)),
                move || self.dispatch(PlatformEvent::OfflineReady),
            )
            .await;

            match registered {
                Ok(registration) => {
                    let scope = platform::registration_scope(&registration);
                    self.registration.try_set_value(Some(registration));
                    self.dispatch(PlatformEvent::Registered { scope });
                }
                Err(message) => self.dispatch(PlatformEvent::RegistrationFailed(message)),
            }
        });
    }

    /// Recurring background check, runs until the page goes away.
    fn start_update_checks(self, period_ms: u64) {
        log::info!("Checking for updates every {} ms", period_ms);
        set_interval(
            move || spawn_local(self.check_for_update()),
            Duration::from_millis(period_ms),
        );
    }

    async fn check_for_update(self) {
        let Some(registration) = self.registration.try_get_value().flatten() else {
            return;
        };
        if let Err(message) = platform::check_for_update(&registration).await {
            self.dispatch(PlatformEvent::UpdateCheckFailed(message));
        }
    }

    /// "Install" pressed: native dialog when a prompt was captured, manual guide
    /// otherwise.
    pub fn install(self) {
        let Some(action) = self.lifecycle.try_update_value(|lifecycle| lifecycle.begin_install()) else {
            return;
        };
        match action {
            Ok(InstallAction::ShowNativePrompt(prompt)) => spawn_local(async move {
                let answer = platform::show_install_prompt(&prompt).await;
                let finished = self
                    .lifecycle
                    .try_update_value(|lifecycle| lifecycle.finish_install(answer));
                match finished {
                    Some(Ok(outcome)) => log::info!("Install prompt outcome: {:?}", outcome),
                    Some(Err(e)) => platform::alert(&e.user_message()),
                    None => {}
                }
            }),
            Ok(InstallAction::ShowManualGuide) => platform::alert(MANUAL_INSTALL_HINT),
            Ok(InstallAction::AlreadyInstalled) => log::info!("App already installed"),
            Ok(InstallAction::PromptPending) => log::debug!("Install prompt already open"),
            Err(e) => log::warn!("Install unavailable: {}", e),
        }
    }

    /// "Update now": invoke the held update action once, then reload.
    pub fn apply_update(self) {
        match self.lifecycle.try_update_value(|lifecycle| lifecycle.apply_update()) {
            Some(Ok(registration)) => spawn_local(async move {
                platform::apply_update_and_reload(&registration).await;
            }),
            Some(Err(e)) => log::warn!("Update not applied: {}", e),
            None => {}
        }
    }

    pub fn dismiss_update(self) {
        if let Some(Err(e)) = self.lifecycle.try_update_value(|lifecycle| lifecycle.dismiss_update()) {
            log::warn!("Dismiss ignored: {}", e);
        }
    }

    /// `pagehide`. A page entering the back/forward cache keeps its context; a
    /// real unload tears it down and drops the registration handle.
    fn page_hidden(self, persisted: bool) {
        self.dispatch(PlatformEvent::PageHidden { persisted });
        let shut_down = self
            .lifecycle
            .try_with_value(|lifecycle| lifecycle.is_shut_down())
            .unwrap_or(true);
        if shut_down {
            self.registration.try_set_value(None);
        }
    }
}

pub fn provide_pwa_context(config: &AppConfig) -> PwaContext {
    let context = PwaContext::new(config);
    provide_context(context);
    context.start(config);
    context
}

pub fn use_pwa_context() -> PwaContext {
    expect_context::<PwaContext>()
}
