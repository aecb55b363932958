//! Payment-method selection modal.

use inkpress_commerce::checkout::payment::{enabled_methods, PaymentMethod};
use leptos::prelude::*;

/// Modal listing payment methods. The parent owns the data and the submit
/// action; the modal owns only its selection state. Submit stays disabled
/// until a method is chosen, and a backdrop click closes the modal.
#[component]
pub fn PaymentModal(
    /// Methods fetched by the parent.
    methods: Vec<PaymentMethod>,
    /// Close requested (backdrop click or cancel).
    #[prop(into)]
    on_close: Callback<()>,
    /// Submit the chosen method code.
    #[prop(into)]
    on_submit: Callback<String>,
    /// True while the parent's POST is in flight.
    #[prop(into)]
    pending: Signal<bool>,
    /// Error from the parent's last submit attempt.
    #[prop(into)]
    error: Signal<Option<String>>,
) -> impl IntoView {
    let selected = RwSignal::new(None::<String>);
    let methods: Vec<PaymentMethod> = enabled_methods(&methods).into_iter().cloned().collect();

    view! {
        <div class="modal-backdrop" on:click=move |_| on_close.run(())>
            <div
                class="modal payment-modal"
                role="dialog"
                aria-label="Choose a payment method"
                on:click=move |ev| ev.stop_propagation()
            >
                <h3>"How would you like to pay?"</h3>
                <div class="payment-methods">
                    {methods
                        .into_iter()
                        .map(|method| {
                            let code = method.code.clone();
                            let check_code = method.code.clone();
                            view! {
                                <label class="payment-method">
                                    <input
                                        type="radio"
                                        name="payment-method"
                                        prop:checked=move || {
                                            selected.get().as_deref() == Some(check_code.as_str())
                                        }
                                        on:change=move |_| selected.set(Some(code.clone()))
                                    />
                                    <span class="payment-method-label">{method.label}</span>
                                    {method
                                        .description
                                        .map(|d| {
                                            view! { <span class="payment-method-description">{d}</span> }
                                        })}
                                </label>
                            }
                        })
                        .collect::<Vec<_>>()}
                </div>
                {move || {
                    error
                        .get()
                        .map(|message| view! { <p class="form-error">{message}</p> })
                }}
                <div class="modal-actions">
                    <button class="button-secondary" on:click=move |_| on_close.run(())>
                        "Cancel"
                    </button>
                    <button
                        class="button-primary"
                        disabled=move || pending.get() || selected.get().is_none()
                        on:click=move |_| {
                            if let Some(code) = selected.get() {
                                on_submit.run(code);
                            }
                        }
                    >
                        {move || if pending.get() { "Submitting..." } else { "Pay now" }}
                    </button>
                </div>
            </div>
        </div>
    }
}
