//! # Update Flow
//!
//! Offers a freshly fetched app version to the user.
//!
//! ```text
//! Idle ──new version fetched──▶ RefreshAvailable ──update now──▶ Applying
//!   ▲                                   │
//!   └──────────────dismiss──────────────┘
//! ```
//!
//! The update-apply action handed over with the "new version" signal is kept until
//! the user confirms, and can be taken out exactly once. Dismissing keeps it: the
//! waiting version is also picked up by the next natural reload.

use crate::error::{AppError, Result};

/// Delay between entering `RefreshAvailable` and showing the prompt.
pub const UPDATE_PROMPT_DELAY_MS: u64 = 300;

/// Period of the background update check (one hour).
pub const UPDATE_CHECK_INTERVAL_MS: u64 = 60 * 60 * 1_000;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum UpdateStatus {
    #[default]
    Idle,
    RefreshAvailable,
    /// Update action taken, reload pending. Terminal for this page load.
    Applying,
}

#[derive(Debug, Clone)]
pub struct UpdateFlow<U> {
    status: UpdateStatus,
    action: Option<U>,
    check_scheduled: bool,
    offline_ready: bool,
    prompt_delay_ms: u64,
    check_interval_ms: u64,
}

impl<U> Default for UpdateFlow<U> {
    fn default() -> Self {
        Self::with_timing(UPDATE_PROMPT_DELAY_MS, UPDATE_CHECK_INTERVAL_MS)
    }
}

impl<U> UpdateFlow<U> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_timing(prompt_delay_ms: u64, check_interval_ms: u64) -> Self {
        Self {
            status: UpdateStatus::Idle,
            action: None,
            check_scheduled: false,
            offline_ready: false,
            prompt_delay_ms,
            check_interval_ms,
        }
    }

    pub fn prompt_delay_ms(&self) -> u64 {
        self.prompt_delay_ms
    }

    pub fn status(&self) -> UpdateStatus {
        self.status
    }

    pub fn has_pending_update(&self) -> bool {
        self.action.is_some()
    }

    pub fn is_offline_ready(&self) -> bool {
        self.offline_ready
    }

    /// Whether the prompt should be on screen `elapsed_ms` after the new version
    /// was reported.
    pub fn prompt_visible(&self, elapsed_ms: u64) -> bool {
        self.status == UpdateStatus::RefreshAvailable && elapsed_ms >= self.prompt_delay_ms
    }

    /// A new version is waiting. Replaces any older action.
    pub fn on_need_refresh(&mut self, action: U) -> bool {
        if self.status == UpdateStatus::Applying {
            return false;
        }
        self.action = Some(action);
        let changed = self.status != UpdateStatus::RefreshAvailable;
        self.status = UpdateStatus::RefreshAvailable;
        changed
    }

    pub fn on_offline_ready(&mut self) -> bool {
        let changed = !self.offline_ready;
        self.offline_ready = true;
        changed
    }

    /// Registration succeeded. Returns the check period the first time only, so
    /// the host starts a single recurring check.
    pub fn on_registered(&mut self) -> Option<u64> {
        if self.check_scheduled {
            return None;
        }
        self.check_scheduled = true;
        Some(self.check_interval_ms)
    }

    /// "Later": hide the prompt, keep the action.
    pub fn dismiss(&mut self) -> bool {
        if self.status == UpdateStatus::RefreshAvailable {
            self.status = UpdateStatus::Idle;
            true
        } else {
            false
        }
    }

    /// Drop the held action without applying it.
    pub fn release(&mut self) {
        self.action = None;
        if self.status == UpdateStatus::RefreshAvailable {
            self.status = UpdateStatus::Idle;
        }
    }

    /// "Update now": hand out the action for the host to invoke before reloading.
    pub fn apply(&mut self) -> Result<U> {
        if self.status != UpdateStatus::RefreshAvailable {
            return Err(AppError::NoPendingUpdate);
        }
        let action = self.action.take().ok_or(AppError::NoPendingUpdate)?;
        self.status = UpdateStatus::Applying;
        Ok(action)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_prompt_visible_after_delay() {
        let mut flow = UpdateFlow::new();
        assert!(!flow.prompt_visible(1_000));
        assert!(flow.on_need_refresh("skip-waiting"));
        assert!(!flow.prompt_visible(0));
        assert!(!flow.prompt_visible(UPDATE_PROMPT_DELAY_MS - 1));
        assert!(flow.prompt_visible(UPDATE_PROMPT_DELAY_MS));
    }

    #[test]
    fn test_apply_hands_out_action_once() {
        let mut flow = UpdateFlow::new();
        flow.on_need_refresh(42);
        assert_eq!(flow.apply(), Ok(42));
        assert_eq!(flow.status(), UpdateStatus::Applying);
        assert_eq!(flow.apply(), Err(AppError::NoPendingUpdate));
        assert!(!flow.on_need_refresh(43));
    }

    #[test]
    fn test_dismiss_keeps_action() {
        let mut flow = UpdateFlow::new();
        flow.on_need_refresh(1);
        assert!(flow.dismiss());
        assert_eq!(flow.status(), UpdateStatus::Idle);
        assert!(flow.has_pending_update());
        assert_eq!(flow.apply(), Err(AppError::NoPendingUpdate));

        // a later check re-enters RefreshAvailable
        assert!(flow.on_need_refresh(2));
        assert_eq!(flow.apply(), Ok(2));
    }

    #[test]
    fn test_check_scheduled_once() {
        let mut flow: UpdateFlow<()> = UpdateFlow::new();
        assert_eq!(flow.on_registered(), Some(3_600_000));
        assert_eq!(flow.on_registered(), None);
    }

    #[test]
    fn test_custom_timing() {
        let mut flow = UpdateFlow::with_timing(50, 1_000);
        flow.on_need_refresh(());
        assert!(flow.prompt_visible(50));
        assert_eq!(flow.on_registered(), Some(1_000));
    }

    #[test]
    fn test_apply_without_update() {
        let mut flow: UpdateFlow<()> = UpdateFlow::new();
        assert_eq!(flow.apply(), Err(AppError::NoPendingUpdate));
        assert!(!flow.dismiss());
    }
}
