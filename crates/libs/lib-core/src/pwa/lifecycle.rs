//! # Lifecycle Context
//!
//! Owns the install and update flows for the lifetime of the page.
//!
//! The host creates one context at startup, feeds browser notifications through
//! [`LifecycleContext::dispatch`] and forwards user actions (install, update,
//! dismiss). Subscribers get a [`LifecycleSnapshot`] after every change. A
//! [`PlatformEvent::PageHidden`] that is not persisted shuts the context down; it
//! then drops its subscribers and handles and ignores further events. A page kept
//! in the back/forward cache stays live so it works again after a restore.
//!
//! ```rust
//! use std::cell::Cell;
//! use std::rc::Rc;
//! use lib_core::pwa::{LifecycleContext, PlatformEvent};
//!
//! let mut ctx: LifecycleContext<&str, ()> = LifecycleContext::new();
//! let seen = Rc::new(Cell::new(false));
//! let flag = seen.clone();
//! ctx.subscribe(move |snap| flag.set(snap.install_ready)).unwrap();
//!
//! ctx.dispatch(PlatformEvent::InstallPromptAvailable("prompt")).unwrap();
//! assert!(seen.get());
//! ```

use super::events::PlatformEvent;
use super::install::{InstallAction, InstallFlow, InstallStatus, PromptOutcome};
use super::update::{UpdateFlow, UpdateStatus};
use crate::config::AppConfig;
use crate::error::{AppError, Result};

/// Read-only view handed to subscribers.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LifecycleSnapshot {
    pub install: InstallStatus,
    /// A native prompt is captured.
    pub install_ready: bool,
    pub update: UpdateStatus,
    pub pending_update: bool,
    pub online: bool,
    pub standalone: bool,
    pub registered: bool,
    pub offline_ready: bool,
}

impl LifecycleSnapshot {
    /// The install button is offered until the app is installed; without a
    /// captured prompt it leads to the manual guide.
    pub fn shows_install_affordance(&self) -> bool {
        self.install != InstallStatus::Installed && !self.standalone
    }

    pub fn update_available(&self) -> bool {
        self.update == UpdateStatus::RefreshAvailable
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct SubscriptionId(u64);

pub type Subscriber = Box<dyn Fn(&LifecycleSnapshot)>;

/// Host instructions resulting from an event.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Dispatch {
    pub changed: bool,
    /// Start the recurring update check with this period.
    pub schedule_update_check_ms: Option<u64>,
}

pub struct LifecycleContext<P, U> {
    install: InstallFlow<P>,
    update: UpdateFlow<U>,
    online: bool,
    standalone: bool,
    registered: bool,
    subscribers: Vec<(SubscriptionId, Subscriber)>,
    next_id: u64,
    shut_down: bool,
}

impl<P: Clone, U> Default for LifecycleContext<P, U> {
    fn default() -> Self {
        Self::new()
    }
}

impl<P: Clone, U> LifecycleContext<P, U> {
    pub fn new() -> Self {
        Self::with_update_flow(UpdateFlow::new())
    }

    /// Context with the update timing taken from `config`.
    pub fn from_config(config: &AppConfig) -> Self {
        Self::with_update_flow(UpdateFlow::with_timing(
            config.update_prompt_delay_ms,
            config.update_check_interval_ms,
        ))
    }

    fn with_update_flow(update: UpdateFlow<U>) -> Self {
        tracing::debug!("Lifecycle context created");
        Self {
            install: InstallFlow::new(),
            update,
            online: true,
            standalone: false,
            registered: false,
            subscribers: Vec::new(),
            next_id: 0,
            shut_down: false,
        }
    }

    pub fn snapshot(&self) -> LifecycleSnapshot {
        LifecycleSnapshot {
            install: self.install.status(),
            install_ready: self.install.has_prompt(),
            update: self.update.status(),
            pending_update: self.update.has_pending_update(),
            online: self.online,
            standalone: self.standalone,
            registered: self.registered,
            offline_ready: self.update.is_offline_ready(),
        }
    }

    pub fn is_shut_down(&self) -> bool {
        self.shut_down
    }

    pub fn subscriber_count(&self) -> usize {
        self.subscribers.len()
    }

    pub fn subscribe<F>(&mut self, subscriber: F) -> Result<SubscriptionId>
    where
        F: Fn(&LifecycleSnapshot) + 'static,
    {
        self.ensure_running()?;
        let id = SubscriptionId(self.next_id);
        self.next_id += 1;
        self.subscribers.push((id, Box::new(subscriber)));
        Ok(id)
    }

    /// Returns whether `id` was subscribed.
    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        let before = self.subscribers.len();
        self.subscribers.retain(|(sub, _)| *sub != id);
        self.subscribers.len() != before
    }

    /// Apply a platform notification. Ignored after shutdown.
    pub fn dispatch(&mut self, event: PlatformEvent<P, U>) -> Result<Dispatch> {
        if self.shut_down {
            tracing::debug!(event = event.kind(), "Event ignored after shutdown");
            return Ok(Dispatch::default());
        }
        tracing::debug!(event = event.kind(), "Platform event");

        let mut schedule_update_check_ms = None;
        let changed = match event {
            PlatformEvent::InstallPromptAvailable(prompt) => self.install.on_prompt_available(prompt),
            PlatformEvent::AppInstalled => {
                tracing::info!("App installed");
                self.install.on_installed()
            }
            PlatformEvent::InstalledProbe {
                standalone,
                related_apps,
            } => {
                let standalone_changed = self.set_standalone(standalone);
                self.install.on_probe(standalone, related_apps) || standalone_changed
            }
            PlatformEvent::DisplayModeChanged { standalone } => {
                let changed = self.set_standalone(standalone);
                if standalone {
                    self.install.on_installed() || changed
                } else {
                    changed
                }
            }
            PlatformEvent::NetworkChanged { online } => {
                let changed = self.online != online;
                self.online = online;
                changed
            }
            PlatformEvent::Registered { scope } => {
                tracing::info!(%scope, "Service worker registered");
                schedule_update_check_ms = self.update.on_registered();
                let changed = !self.registered;
                self.registered = true;
                changed
            }
            PlatformEvent::RegistrationFailed(message) => {
                tracing::error!(%message, "Service worker registration failed");
                false
            }
            PlatformEvent::NeedRefresh(action) => {
                tracing::info!("New version available");
                self.update.on_need_refresh(action)
            }
            PlatformEvent::OfflineReady => {
                tracing::info!("App ready to work offline");
                self.update.on_offline_ready()
            }
            PlatformEvent::UpdateCheckFailed(message) => {
                tracing::warn!(%message, "Update check failed");
                false
            }
            PlatformEvent::PageHidden { persisted: true } => {
                tracing::debug!("Page cached, keeping lifecycle");
                false
            }
            PlatformEvent::PageHidden { persisted: false } => {
                self.shutdown();
                return Ok(Dispatch::default());
            }
        };

        if changed {
            self.notify();
        }
        Ok(Dispatch {
            changed,
            schedule_update_check_ms,
        })
    }

    /// User pressed "install". A native prompt is handed out once; until
    /// [`finish_install`](Self::finish_install) runs, presses get
    /// [`InstallAction::PromptPending`].
    pub fn begin_install(&mut self) -> Result<InstallAction<P>> {
        self.ensure_running()?;
        let action = self.install.begin_install();
        if matches!(action, InstallAction::ShowManualGuide) {
            tracing::warn!("No install prompt captured, showing manual guide");
        }
        Ok(action)
    }

    /// Outcome of the native dialog started by [`begin_install`](Self::begin_install).
    pub fn finish_install(&mut self, result: std::result::Result<PromptOutcome, String>) -> Result<PromptOutcome> {
        self.ensure_running()?;
        let before = self.snapshot();
        let outcome = self.install.finish_install(result)?;
        if self.snapshot() != before {
            self.notify();
        }
        Ok(outcome)
    }

    /// User pressed "later" on the update prompt.
    pub fn dismiss_update(&mut self) -> Result<()> {
        self.ensure_running()?;
        if self.update.dismiss() {
            self.notify();
        }
        Ok(())
    }

    /// User pressed "update now". The returned action must be invoked, then the
    /// page reloaded.
    pub fn apply_update(&mut self) -> Result<U> {
        self.ensure_running()?;
        let action = self.update.apply()?;
        tracing::info!("Applying update");
        self.notify();
        Ok(action)
    }

    /// Tear down on unload.
    pub fn shutdown(&mut self) {
        if self.shut_down {
            return;
        }
        tracing::debug!(subscribers = self.subscribers.len(), "Lifecycle context shut down");
        self.subscribers.clear();
        self.install = InstallFlow::new();
        self.update.release();
        self.shut_down = true;
    }

    fn set_standalone(&mut self, standalone: bool) -> bool {
        let changed = self.standalone != standalone;
        self.standalone = standalone;
        changed
    }

    fn ensure_running(&self) -> Result<()> {
        if self.shut_down {
            Err(AppError::ShutDown)
        } else {
            Ok(())
        }
    }

    fn notify(&self) {
        let snapshot = self.snapshot();
        for (_, subscriber) in &self.subscribers {
            subscriber(&snapshot);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::{Cell, RefCell};
    use std::rc::Rc;

    type Ctx = LifecycleContext<&'static str, Rc<dyn Fn()>>;

    fn recording(ctx: &mut Ctx) -> Rc<RefCell<Vec<LifecycleSnapshot>>> {
        let log = Rc::new(RefCell::new(Vec::new()));
        let sink = log.clone();
        ctx.subscribe(move |snap| sink.borrow_mut().push(*snap)).unwrap();
        log
    }

    #[test]
    fn test_install_affordance_disappears_for_session() {
        let mut ctx = Ctx::new();
        let log = recording(&mut ctx);

        ctx.dispatch(PlatformEvent::InstallPromptAvailable("prompt")).unwrap();
        let last = *log.borrow().last().unwrap();
        assert!(last.shows_install_affordance());
        assert!(last.install_ready);

        ctx.dispatch(PlatformEvent::AppInstalled).unwrap();
        assert!(!ctx.snapshot().shows_install_affordance());

        ctx.dispatch(PlatformEvent::InstallPromptAvailable("again")).unwrap();
        assert!(!ctx.snapshot().shows_install_affordance());
        assert_eq!(ctx.begin_install().unwrap(), InstallAction::AlreadyInstalled);
        assert_eq!(log.borrow().len(), 2);
    }

    #[test]
    fn test_update_action_invoked_exactly_once() {
        let mut ctx = Ctx::new();
        let calls = Rc::new(Cell::new(0));
        let counter = calls.clone();
        let action: Rc<dyn Fn()> = Rc::new(move || counter.set(counter.get() + 1));

        ctx.dispatch(PlatformEvent::NeedRefresh(action)).unwrap();
        assert!(ctx.snapshot().update_available());

        let apply = ctx.apply_update().unwrap();
        apply();
        assert!(ctx.apply_update().is_err());
        assert_eq!(calls.get(), 1);
        assert_eq!(ctx.snapshot().update, UpdateStatus::Applying);
    }

    #[test]
    fn test_dismiss_does_not_invoke_action() {
        let mut ctx = Ctx::new();
        let calls = Rc::new(Cell::new(0));
        let counter = calls.clone();
        ctx.dispatch(PlatformEvent::NeedRefresh(Rc::new(move || counter.set(counter.get() + 1))))
            .unwrap();

        ctx.dismiss_update().unwrap();
        assert!(!ctx.snapshot().update_available());
        assert!(ctx.snapshot().pending_update);
        assert_eq!(calls.get(), 0);
    }

    #[test]
    fn test_registration_schedules_single_check() {
        let mut ctx = Ctx::new();
        let first = ctx
            .dispatch(PlatformEvent::Registered { scope: "/".into() })
            .unwrap();
        assert_eq!(first.schedule_update_check_ms, Some(3_600_000));
        let second = ctx
            .dispatch(PlatformEvent::Registered { scope: "/".into() })
            .unwrap();
        assert_eq!(second.schedule_update_check_ms, None);
        assert!(!second.changed);
    }

    #[test]
    fn test_from_config_uses_check_interval() {
        let config = AppConfig {
            update_check_interval_ms: 60_000,
            ..AppConfig::default()
        };
        let mut ctx: Ctx = LifecycleContext::from_config(&config);
        let d = ctx.dispatch(PlatformEvent::Registered { scope: "/".into() }).unwrap();
        assert_eq!(d.schedule_update_check_ms, Some(60_000));
    }

    #[test]
    fn test_failures_are_logged_only() {
        let mut ctx = Ctx::new();
        let before = ctx.snapshot();
        let d = ctx.dispatch(PlatformEvent::UpdateCheckFailed("offline".into())).unwrap();
        assert!(!d.changed);
        ctx.dispatch(PlatformEvent::RegistrationFailed("404".into())).unwrap();
        assert_eq!(ctx.snapshot(), before);
    }

    #[test]
    fn test_native_prompt_throw_keeps_state() {
        let mut ctx = Ctx::new();
        ctx.dispatch(PlatformEvent::InstallPromptAvailable("prompt")).unwrap();
        let before = ctx.snapshot();
        let err = ctx.finish_install(Err("NotAllowedError".into())).unwrap_err();
        assert!(matches!(err, AppError::InstallPrompt(_)));
        assert_eq!(ctx.snapshot(), before);
    }

    #[test]
    fn test_probe_and_network() {
        let mut ctx = Ctx::new();
        ctx.dispatch(PlatformEvent::InstalledProbe {
            standalone: true,
            related_apps: 0,
        })
        .unwrap();
        let snap = ctx.snapshot();
        assert!(snap.standalone);
        assert_eq!(snap.install, InstallStatus::Installed);

        assert!(ctx.dispatch(PlatformEvent::NetworkChanged { online: false }).unwrap().changed);
        assert!(!ctx.snapshot().online);
    }

    #[test]
    fn test_unsubscribe_stops_notifications() {
        let mut ctx = Ctx::new();
        let count = Rc::new(Cell::new(0));
        let c = count.clone();
        let id = ctx.subscribe(move |_| c.set(c.get() + 1)).unwrap();

        ctx.dispatch(PlatformEvent::OfflineReady).unwrap();
        assert!(ctx.unsubscribe(id));
        assert!(!ctx.unsubscribe(id));
        ctx.dispatch(PlatformEvent::NetworkChanged { online: false }).unwrap();
        assert_eq!(count.get(), 1);
    }

    #[test]
    fn test_shutdown_ignores_later_events() {
        let mut ctx = Ctx::new();
        let log = recording(&mut ctx);
        ctx.shutdown();

        assert_eq!(ctx.subscriber_count(), 0);
        let d = ctx.dispatch(PlatformEvent::InstallPromptAvailable("late")).unwrap();
        assert!(!d.changed);
        assert!(log.borrow().is_empty());
        assert_eq!(ctx.begin_install().unwrap_err(), AppError::ShutDown);
        assert!(ctx.subscribe(|_| {}).is_err());
    }

    #[test]
    fn test_cached_page_keeps_working_after_restore() {
        let mut ctx = Ctx::new();
        let log = recording(&mut ctx);
        ctx.dispatch(PlatformEvent::InstallPromptAvailable("prompt")).unwrap();

        let d = ctx.dispatch(PlatformEvent::PageHidden { persisted: true }).unwrap();
        assert!(!d.changed);
        assert!(!ctx.is_shut_down());
        assert_eq!(ctx.subscriber_count(), 1);

        let count = Rc::new(Cell::new(0));
        let counter = count.clone();
        ctx.dispatch(PlatformEvent::NeedRefresh(Rc::new(move || counter.set(counter.get() + 1))))
            .unwrap();
        assert!(ctx.snapshot().update_available());
        assert_eq!(log.borrow().len(), 2);
        assert_eq!(ctx.begin_install().unwrap(), InstallAction::ShowNativePrompt("prompt"));
        (ctx.apply_update().unwrap())();
        assert_eq!(count.get(), 1);
    }

    #[test]
    fn test_page_unload_shuts_down() {
        let mut ctx = Ctx::new();
        let log = recording(&mut ctx);
        ctx.dispatch(PlatformEvent::InstallPromptAvailable("prompt")).unwrap();

        let d = ctx.dispatch(PlatformEvent::PageHidden { persisted: false }).unwrap();
        assert!(!d.changed);
        assert!(ctx.is_shut_down());
        assert_eq!(ctx.subscriber_count(), 0);
        assert_eq!(log.borrow().len(), 1);
        assert_eq!(ctx.begin_install().unwrap_err(), AppError::ShutDown);
    }

    #[test]
    fn test_install_pressed_twice_shows_prompt_once() {
        let mut ctx = Ctx::new();
        ctx.dispatch(PlatformEvent::InstallPromptAvailable("prompt")).unwrap();

        assert_eq!(ctx.begin_install().unwrap(), InstallAction::ShowNativePrompt("prompt"));
        assert_eq!(ctx.begin_install().unwrap(), InstallAction::PromptPending);
        assert!(ctx.snapshot().install_ready);

        ctx.finish_install(Err("prompt() rejected".into())).unwrap_err();
        assert_eq!(ctx.begin_install().unwrap(), InstallAction::ShowNativePrompt("prompt"));
    }
}
