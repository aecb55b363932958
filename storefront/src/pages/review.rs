//! Design-review step: approve the artwork proof (which updates the cart)
//! or request changes, then choose a payment method.

use inkpress_api::{ApiClient, ApiConfig, ApiError};
use inkpress_commerce::checkout::{PaymentMethod, PaymentSelection, ReviewSubmission};
use inkpress_commerce::checkout::review::{ProofStatus, ReviewDecision};
use inkpress_commerce::ids::CartItemId;
use inkpress_ui::{ImageZoom, LoadError, PaymentModal, TableSkeleton};
use leptos::prelude::*;
use leptos::task::spawn_local;
use leptos_router::hooks::use_params_map;

#[component]
pub fn ReviewPage() -> impl IntoView {
    let config = expect_context::<ApiConfig>();
    let params = use_params_map();
    let item_id = move || CartItemId::new(params.get().get("item").unwrap_or_default());

    let proof = LocalResource::new({
        let config = config.clone();
        move || {
            let id = item_id();
            let config = config.clone();
            async move { ApiClient::new(config).design_proof(&id).await }
        }
    });

    // Review state.
    let acknowledged = RwSignal::new(false);
    let changes_open = RwSignal::new(false);
    let note = RwSignal::new(String::new());
    let review_pending = RwSignal::new(false);
    let review_error = RwSignal::new(None::<String>);
    let decided = RwSignal::new(None::<ProofStatus>);
    let artwork_failed = RwSignal::new(false);

    // Payment state. Methods are fetched lazily when the modal first opens.
    let payment_open = RwSignal::new(false);
    let methods = RwSignal::new(None::<Result<Vec<PaymentMethod>, ApiError>>);
    let payment_pending = RwSignal::new(false);
    let payment_error = RwSignal::new(None::<String>);
    let payment_done = RwSignal::new(false);

    let fetch_methods = {
        let config = config.clone();
        move || {
            let config = config.clone();
            spawn_local(async move {
                methods.set(Some(ApiClient::new(config).payment_methods().await));
            });
        }
    };

    let open_payment = {
        let fetch_methods = fetch_methods.clone();
        move || {
            payment_open.set(true);
            if methods.get_untracked().is_none() {
                fetch_methods();
            }
        }
    };

    let submit_review = {
        let config = config.clone();
        let open_payment = open_payment.clone();
        move |decision: ReviewDecision, note_text: Option<String>| {
            let config = config.clone();
            let open_payment = open_payment.clone();
            let submission = ReviewSubmission {
                item_id: item_id(),
                decision,
                note: note_text,
            };
            review_pending.set(true);
            review_error.set(None);
            spawn_local(async move {
                let result = ApiClient::new(config).submit_review(&submission).await;
                review_pending.set(false);
                match result {
                    Ok(()) => {
                        match decision {
                            ReviewDecision::Approve => {
                                decided.set(Some(ProofStatus::Approved));
                                // The cart now holds the approved item; move
                                // straight to payment.
                                open_payment();
                            }
                            ReviewDecision::RequestChanges => {
                                decided.set(Some(ProofStatus::ChangesRequested));
                                changes_open.set(false);
                            }
                        }
                    }
                    Err(e) => {
                        log::error!("review submission failed: {e}");
                        review_error.set(Some(e.to_string()));
                    }
                }
            });
        }
    };

    let submit_payment = {
        let config = config.clone();
        move |code: String| {
            let config = config.clone();
            let selection = PaymentSelection {
                cart_item_id: item_id(),
                method_code: code,
            };
            payment_pending.set(true);
            payment_error.set(None);
            spawn_local(async move {
                match ApiClient::new(config).submit_payment(&selection).await {
                    Ok(()) => {
                        payment_done.set(true);
                        payment_open.set(false);
                    }
                    Err(e) => {
                        log::error!("payment submission failed: {e}");
                        payment_error.set(Some(e.to_string()));
                    }
                }
                payment_pending.set(false);
            });
        }
    };

    view! {
        <h2>"Review your design"</h2>
        <Suspense fallback=move || view! { <TableSkeleton rows=3/> }>
            {
                let submit_review = submit_review.clone();
                move || {
                    let submit_review = submit_review.clone();
                    proof
                        .get()
                        .map(|res| match res.take() {
                            Ok(p) => {
                                let status = decided.get().unwrap_or(p.status);
                                let approve = submit_review.clone();
                                let request_changes = submit_review.clone();
                                view! {
                                    <div class="review-layout">
                                        <div>
                                            {if artwork_failed.get() {
                                                view! {
                                                    <LoadError message="The artwork preview failed to load. Refresh to try again."/>
                                                }
                                                    .into_any()
                                            } else {
                                                view! {
                                                    <ImageZoom
                                                        src=p.artwork_url.clone()
                                                        alt=format!("Artwork proof for {}", p.product_name)
                                                        on_error=Callback::new(move |_: ()| {
                                                            artwork_failed.set(true)
                                                        })
                                                    />
                                                    <p class="hint">
                                                        "Hover or press the artwork to inspect it up close."
                                                    </p>
                                                }
                                                    .into_any()
                                            }}
                                        </div>
                                        <div>
                                            <h3>{p.product_name.clone()}</h3>
                                            {p
                                                .notes
                                                .clone()
                                                .map(|n| {
                                                    view! {
                                                        <p class="review-notes">"Prepress notes: " {n}</p>
                                                    }
                                                })}
                                            {match status {
                                                ProofStatus::Pending => {
                                                    view! {
                                                        <div class="ack-row">
                                                            <input
                                                                id="ack"
                                                                type="checkbox"
                                                                prop:checked=move || acknowledged.get()
                                                                on:change=move |_| {
                                                                    acknowledged.update(|a| *a = !*a)
                                                                }
                                                            />
                                                            <label for="ack">
                                                                "I have checked the spelling, colors and layout, and I understand the item prints exactly as shown."
                                                            </label>
                                                        </div>
                                                        {move || {
                                                            review_error
                                                                .get()
                                                                .map(|m| view! { <p class="form-error">{m}</p> })
                                                        }}
                                                        <div class="modal-actions">
                                                            <button
                                                                class="button-secondary"
                                                                on:click=move |_| {
                                                                    changes_open.update(|o| *o = !*o)
                                                                }
                                                            >
                                                                "Request changes"
                                                            </button>
                                                            <button
                                                                class="button-primary"
                                                                disabled=move || {
                                                                    !acknowledged.get() || review_pending.get()
                                                                }
                                                                on:click=move |_| {
                                                                    approve(ReviewDecision::Approve, None)
                                                                }
                                                            >
                                                                {move || {
                                                                    if review_pending.get() {
                                                                        "Submitting..."
                                                                    } else {
                                                                        "Approve and add to cart"
                                                                    }
                                                                }}
                                                            </button>
                                                        </div>
                                                        <Show when=move || changes_open.get()>
                                                            <div class="form-field">
                                                                <label for="change-note">
                                                                    "What should we change?"
                                                                </label>
                                                                <textarea
                                                                    id="change-note"
                                                                    prop:value=move || note.get()
                                                                    on:input=move |ev| {
                                                                        note.set(event_target_value(&ev))
                                                                    }
                                                                ></textarea>
                                                                {
                                                                    let request_changes = request_changes.clone();
                                                                    view! {
                                                                        <button
                                                                            class="button-primary"
                                                                            disabled=move || {
                                                                                note.get().trim().is_empty()
                                                                                    || review_pending.get()
                                                                            }
                                                                            on:click=move |_| {
                                                                                request_changes(
                                                                                    ReviewDecision::RequestChanges,
                                                                                    Some(note.get()),
                                                                                )
                                                                            }
                                                                        >
                                                                            "Send change request"
                                                                        </button>
                                                                    }
                                                                }
                                                            </div>
                                                        </Show>
                                                    }
                                                        .into_any()
                                                }
                                                ProofStatus::Approved => {
                                                    view! {
                                                        <p class="form-success">
                                                            "Approved. This design is locked for printing."
                                                        </p>
                                                    }
                                                        .into_any()
                                                }
                                                ProofStatus::ChangesRequested => {
                                                    view! {
                                                        <p>
                                                            "Changes requested. Our design team will send a new proof shortly."
                                                        </p>
                                                    }
                                                        .into_any()
                                                }
                                            }}
                                        </div>
                                    </div>
                                }
                                    .into_any()
                            }
                            Err(e) => {
                                view! {
                                    <LoadError
                                        message=e.to_string()
                                        on_retry=Callback::new(move |_: ()| proof.refetch())
                                    />
                                }
                                    .into_any()
                            }
                        })
                }
            }
        </Suspense>

        {move || {
            payment_done
                .get()
                .then(|| {
                    view! {
                        <p class="form-success">
                            "Payment method saved. We'll start printing right away."
                        </p>
                    }
                })
        }}

        {
            let fetch_methods = fetch_methods.clone();
            let submit_payment = submit_payment.clone();
            move || {
                if !payment_open.get() {
                    return ().into_any();
                }
                match methods.get() {
                    Some(Ok(list)) => {
                        let submit_payment = submit_payment.clone();
                        view! {
                            <PaymentModal
                                methods=list
                                on_close=Callback::new(move |_: ()| payment_open.set(false))
                                on_submit=Callback::new(move |code: String| {
                                    submit_payment(code)
                                })
                                pending=payment_pending
                                error=payment_error
                            />
                        }
                            .into_any()
                    }
                    Some(Err(e)) => {
                        let fetch_methods = fetch_methods.clone();
                        view! {
                            <div class="modal-backdrop">
                                <div class="modal">
                                    <LoadError
                                        message=e.to_string()
                                        on_retry=Callback::new(move |_: ()| fetch_methods())
                                    />
                                    <div class="modal-actions">
                                        <button
                                            class="button-secondary"
                                            on:click=move |_| payment_open.set(false)
                                        >
                                            "Close"
                                        </button>
                                    </div>
                                </div>
                            </div>
                        }
                            .into_any()
                    }
                    None => {
                        view! {
                            <div class="modal-backdrop">
                                <div class="modal">
                                    <p>"Loading payment methods..."</p>
                                </div>
                            </div>
                        }
                            .into_any()
                    }
                }
            }
        }
    }
}
