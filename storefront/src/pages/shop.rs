//! Product grid for one subcategory.

use inkpress_api::{ApiClient, ApiConfig};
use inkpress_ui::{CardRailSkeleton, LoadError};
use leptos::prelude::*;
use leptos_router::hooks::use_params_map;

use super::home::ProductCard;

#[component]
pub fn ShopPage() -> impl IntoView {
    let config = expect_context::<ApiConfig>();
    let params = use_params_map();

    let products = LocalResource::new({
        let config = config.clone();
        move || {
            let slug = params.get().get("subcategory").unwrap_or_default();
            let config = config.clone();
            async move { ApiClient::new(config).products(&slug).await }
        }
    });

    let back_href = move || {
        format!(
            "/category/{}",
            params.get().get("category").unwrap_or_default()
        )
    };

    view! {
        <p>
            <a href=back_href>"\u{2039} Back to category"</a>
        </p>
        <h2>"Products"</h2>
        <Suspense fallback=move || view! { <CardRailSkeleton/> }>
            {move || {
                products
                    .get()
                    .map(|res| match res.take() {
                        Ok(items) => {
                            if items.is_empty() {
                                view! { <p>"Nothing here yet - check back soon."</p> }.into_any()
                            } else {
                                view! {
                                    <div class="card-grid">
                                        {items
                                            .into_iter()
                                            .map(|p| view! { <ProductCard product=p/> })
                                            .collect::<Vec<_>>()}
                                    </div>
                                }
                                .into_any()
                            }
                        }
                        Err(e) => {
                            view! {
                                <LoadError
                                    message=e.to_string()
                                    on_retry=Callback::new(move |_: ()| products.refetch())
                                />
                            }
                            .into_any()
                        }
                    })
            }}
        </Suspense>
    }
}
