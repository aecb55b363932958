//! Shared support components.

use leptos::prelude::*;

/// Error panel shown when a fetch fails, with an optional retry.
#[component]
pub fn LoadError(
    /// User-facing message, usually `ApiError`'s display string.
    #[prop(into)]
    message: String,
    /// Re-run the failed fetch.
    #[prop(optional, into)]
    on_retry: Option<Callback<()>>,
) -> impl IntoView {
    view! {
        <div class="load-error" role="alert">
            <p>{message}</p>
            {on_retry
                .map(|retry| {
                    view! {
                        <button class="button-secondary" on:click=move |_| retry.run(())>
                            "Try again"
                        </button>
                    }
                })}
        </div>
    }
}
