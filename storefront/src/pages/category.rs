//! Subcategory browsing for one category, with client-side search.

use inkpress_api::{ApiClient, ApiConfig};
use inkpress_commerce::catalog::subcategory::{filter_subcategories, sort_by_position};
use inkpress_commerce::catalog::Subcategory;
use inkpress_ui::{CardRailSkeleton, LoadError};
use leptos::prelude::*;
use leptos_router::hooks::use_params_map;

#[component]
pub fn CategoryPage() -> impl IntoView {
    let config = expect_context::<ApiConfig>();
    let params = use_params_map();

    let subcategories = LocalResource::new({
        let config = config.clone();
        move || {
            let slug = params.get().get("slug").unwrap_or_default();
            let config = config.clone();
            async move { ApiClient::new(config).subcategories(&slug).await }
        }
    });

    let query = RwSignal::new(String::new());
    let category_slug = move || params.get().get("slug").unwrap_or_default();

    view! {
        <h2>"Browse products"</h2>
        <input
            class="search-input"
            type="search"
            placeholder="Search this category"
            prop:value=move || query.get()
            on:input=move |ev| query.set(event_target_value(&ev))
        />
        <Suspense fallback=move || view! { <CardRailSkeleton/> }>
            {move || {
                subcategories
                    .get()
                    .map(|res| match res.take() {
                        Ok(mut items) => {
                            sort_by_position(&mut items);
                            let q = query.get();
                            let hits: Vec<Subcategory> =
                                filter_subcategories(&items, &q).into_iter().cloned().collect();
                            if hits.is_empty() {
                                view! { <p>"No products match your search."</p> }.into_any()
                            } else {
                                let parent = category_slug();
                                view! {
                                    <div class="card-grid">
                                        {hits
                                            .into_iter()
                                            .map(|sub| {
                                                view! {
                                                    <SubcategoryCard
                                                        category_slug=parent.clone()
                                                        subcategory=sub
                                                    />
                                                }
                                            })
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
                                    on_retry=Callback::new(move |_: ()| subcategories.refetch())
                                />
                            }
                            .into_any()
                        }
                    })
            }}
        </Suspense>
    }
}

#[component]
fn SubcategoryCard(category_slug: String, subcategory: Subcategory) -> impl IntoView {
    let href = format!("/shop/{category_slug}/{}", subcategory.slug);
    view! {
        <a class="card" href=href>
            {subcategory
                .image_url
                .map(|url| view! { <img src=url alt=subcategory.name.clone()/> })}
            <div class="card-body">
                <h3>{subcategory.name}</h3>
                {subcategory.description.map(|d| view! { <p class="card-description">{d}</p> })}
            </div>
        </a>
    }
}
