//! FAQ page: accordion with client-side search.

use inkpress_api::{ApiClient, ApiConfig};
use inkpress_commerce::content::faq::filter_faqs;
use inkpress_commerce::content::Faq;
use inkpress_ui::{FaqAccordion, LoadError, TableSkeleton};
use leptos::prelude::*;

#[component]
pub fn FaqPage() -> impl IntoView {
    let config = expect_context::<ApiConfig>();

    let faqs = LocalResource::new({
        let config = config.clone();
        move || {
            let config = config.clone();
            async move { ApiClient::new(config).faqs().await }
        }
    });

    let query = RwSignal::new(String::new());

    view! {
        <h2>"Frequently asked questions"</h2>
        <input
            class="search-input"
            type="search"
            placeholder="Search the FAQ"
            prop:value=move || query.get()
            on:input=move |ev| query.set(event_target_value(&ev))
        />
        <Suspense fallback=move || view! { <TableSkeleton/> }>
            {move || {
                faqs.get()
                    .map(|res| match res.take() {
                        Ok(items) => {
                            let q = query.get();
                            let hits: Vec<Faq> =
                                filter_faqs(&items, &q).into_iter().cloned().collect();
                            if hits.is_empty() {
                                view! { <p>"No questions match your search."</p> }.into_any()
                            } else {
                                view! { <FaqAccordion faqs=hits/> }.into_any()
                            }
                        }
                        Err(e) => {
                            view! {
                                <LoadError
                                    message=e.to_string()
                                    on_retry=Callback::new(move |_: ()| faqs.refetch())
                                />
                            }
                            .into_any()
                        }
                    })
            }}
        </Suspense>
    }
}
