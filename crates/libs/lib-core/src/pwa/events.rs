//! Platform notifications fed into the lifecycle context.

/// Something the browser told us.
///
/// `P` is the captured install-prompt handle and `U` the update-apply action; both
/// are opaque to the core.
#[derive(Debug, Clone, PartialEq)]
pub enum PlatformEvent<P, U> {
    /// `beforeinstallprompt`, with the deferred prompt.
    InstallPromptAvailable(P),
    /// `appinstalled`.
    AppInstalled,
    /// Startup probe: standalone display mode and installed related apps.
    InstalledProbe { standalone: bool, related_apps: usize },
    /// `display-mode` media query change.
    DisplayModeChanged { standalone: bool },
    /// `online` / `offline`.
    NetworkChanged { online: bool },
    /// Service worker registered for `scope`.
    Registered { scope: String },
    RegistrationFailed(String),
    /// Waiting worker found, with the action that activates it.
    NeedRefresh(U),
    /// First install of the worker finished, assets precached.
    OfflineReady,
    UpdateCheckFailed(String),
    /// `pagehide`; `persisted` is set when the page goes into the back/forward cache.
    PageHidden { persisted: bool },
}

impl<P, U> PlatformEvent<P, U> {
    /// Short name for logs.
    pub fn kind(&self) -> &'static str {
        match self {
            PlatformEvent::InstallPromptAvailable(_) => "install_prompt_available",
            PlatformEvent::AppInstalled => "app_installed",
            PlatformEvent::InstalledProbe { .. } => "installed_probe",
            PlatformEvent::DisplayModeChanged { .. } => "display_mode_changed",
            PlatformEvent::NetworkChanged { .. } => "network_changed",
            PlatformEvent::Registered { .. } => "registered",
            PlatformEvent::RegistrationFailed(_) => "registration_failed",
            PlatformEvent::NeedRefresh(_) => "need_refresh",
            PlatformEvent::OfflineReady => "offline_ready",
            PlatformEvent::UpdateCheckFailed(_) => "update_check_failed",
            PlatformEvent::PageHidden { .. } => "page_hidden",
        }
    }
}
