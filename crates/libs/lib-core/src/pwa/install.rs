//! # Install Flow
//!
//! Tracks whether the app can be installed through the browser's native prompt.
//!
//! ## States
//!
//! ```text
//! Unknown ──prompt available──▶ Installable ──user answered──▶ Unknown
//!    │                               │
//!    └────────app installed──────────┴──────────▶ Installed (terminal)
//! ```
//!
//! Pressing "install" without a captured prompt is not an error: the caller gets
//! [`InstallAction::ShowManualGuide`]. While the native dialog is open the prompt is
//! held as pending and further presses get [`InstallAction::PromptPending`]. A
//! prompt that throws is put back, so the user can try again.

use crate::error::{AppError, Result};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum InstallStatus {
    #[default]
    Unknown,
    Installable,
    Installed,
}

/// What the host should do after the user pressed "install".
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InstallAction<P> {
    /// Call `prompt()` on the handle, await `userChoice`, then report back through
    /// [`InstallFlow::finish_install`].
    ShowNativePrompt(P),
    ShowManualGuide,
    AlreadyInstalled,
    /// The native dialog from an earlier press is still open.
    PromptPending,
}

/// The user's answer to the native dialog.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PromptOutcome {
    Accepted,
    Dismissed,
}

impl PromptOutcome {
    /// Parse `userChoice.outcome`; anything but `accepted` counts as dismissed.
    pub fn from_outcome(outcome: &str) -> Self {
        if outcome == "accepted" {
            PromptOutcome::Accepted
        } else {
            PromptOutcome::Dismissed
        }
    }
}

#[derive(Debug, Clone)]
pub struct InstallFlow<P> {
    status: InstallStatus,
    prompt: Option<P>,
    /// Prompt handed to the host, dialog not answered yet.
    pending: Option<P>,
}

impl<P> Default for InstallFlow<P> {
    fn default() -> Self {
        Self {
            status: InstallStatus::Unknown,
            prompt: None,
            pending: None,
        }
    }
}

impl<P: Clone> InstallFlow<P> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn status(&self) -> InstallStatus {
        self.status
    }

    pub fn is_installed(&self) -> bool {
        self.status == InstallStatus::Installed
    }

    /// Whether a native prompt is being held, shown or not.
    pub fn has_prompt(&self) -> bool {
        self.prompt.is_some() || self.pending.is_some()
    }

    pub fn is_prompt_pending(&self) -> bool {
        self.pending.is_some()
    }

    /// Capture a deferred prompt. Ignored once installed. Returns whether the
    /// status changed.
    pub fn on_prompt_available(&mut self, prompt: P) -> bool {
        if self.is_installed() {
            tracing::debug!("Install prompt ignored, app already installed");
            return false;
        }
        self.prompt = Some(prompt);
        let changed = self.status != InstallStatus::Installable;
        self.status = InstallStatus::Installable;
        changed
    }

    /// The app was installed; drops any held prompt.
    pub fn on_installed(&mut self) -> bool {
        self.prompt = None;
        self.pending = None;
        let changed = !self.is_installed();
        self.status = InstallStatus::Installed;
        changed
    }

    /// Startup probe result.
    pub fn on_probe(&mut self, standalone: bool, related_apps: usize) -> bool {
        if standalone || related_apps > 0 {
            tracing::info!(standalone, related_apps, "App already installed");
            self.on_installed()
        } else {
            false
        }
    }

    /// User pressed "install". A captured prompt moves to pending until
    /// [`finish_install`](Self::finish_install) reports the answer.
    pub fn begin_install(&mut self) -> InstallAction<P> {
        if self.is_installed() {
            return InstallAction::AlreadyInstalled;
        }
        if self.pending.is_some() {
            tracing::debug!("Install prompt already open");
            return InstallAction::PromptPending;
        }
        match self.prompt.take() {
            Some(prompt) => {
                self.pending = Some(prompt.clone());
                InstallAction::ShowNativePrompt(prompt)
            }
            None => InstallAction::ShowManualGuide,
        }
    }

    /// Apply the result of the native dialog.
    ///
    /// Either answer discards the prompt, which the browser will not show twice.
    /// `Err` means the dialog threw; the state is kept and the error returned for
    /// the failure notice.
    pub fn finish_install(&mut self, result: std::result::Result<PromptOutcome, String>) -> Result<PromptOutcome> {
        match result {
            Ok(outcome) => {
                tracing::info!(?outcome, "Install prompt answered");
                self.pending = None;
                self.prompt = None;
                if !self.is_installed() {
                    self.status = InstallStatus::Unknown;
                }
                Ok(outcome)
            }
            Err(message) => {
                tracing::error!(%message, "Install prompt failed");
                if let Some(prompt) = self.pending.take() {
                    self.prompt.get_or_insert(prompt);
                }
                Err(AppError::InstallPrompt(message))
            }
        }
    }
}
