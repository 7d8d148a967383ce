//! Update Prompt
//!
//! Overlay offering a freshly fetched version. Appears a short delay after the
//! new version is reported so it does not flash during page load.

use leptos::prelude::*;

use crate::state::pwa::use_pwa_context;

#[component]
pub fn UpdatePrompt() -> impl IntoView {
    let pwa = use_pwa_context();
    let (visible, set_visible) = signal(false);
    let update_available = Memo::new(move |_| pwa.snapshot.with(|s| s.update_available()));
    let pending_timeout = StoredValue::new(None::<TimeoutHandle>);

    let clear_pending = move || {
        if let Some(handle) = pending_timeout.try_update_value(Option::take).flatten() {
            handle.clear();
        }
    };

    Effect::new(move |_| {
        clear_pending();
        if update_available.get() {
            let scheduled = set_timeout_with_handle(
                move || {
                    pending_timeout.try_set_value(None);
                    if pwa.snapshot.with_untracked(|s| s.update_available()) {
                        set_visible.set(true);
                    }
                },
                pwa.prompt_delay(),
            );
            match scheduled {
                Ok(handle) => {
                    pending_timeout.try_set_value(Some(handle));
                }
                Err(e) => log::warn!("Update prompt timer failed: {:?}", e),
            }
        } else {
            set_visible.set(false);
        }
    });
    on_cleanup(clear_pending);

    view! {
        <Show when=move || visible.get()>
            <div class="update-prompt-overlay">
                <div class="update-prompt">
                    <div class="update-icon">"🚀"</div>
                    <div class="update-content">
                        <h3 class="update-title">"New version available"</h3>
                        <p class="update-message">
                            "Update now to get the latest features and improvements."
                        </p>
                    </div>
                    <div class="update-actions">
                        <button class="update-btn update-btn-primary" on:click=move |_| pwa.apply_update()>
                            "Update now"
                        </button>
                        <button class="update-btn update-btn-secondary" on:click=move |_| pwa.dismiss_update()>
                            "Later"
                        </button>
                    </div>
                </div>
            </div>
        </Show>
    }
}
