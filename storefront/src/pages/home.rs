//! Home page: offer bar, live banners, category and featured-product rails.

use inkpress_api::{ApiClient, ApiConfig};
use inkpress_commerce::catalog::{category, Category, Product};
use inkpress_commerce::content::banner::live_banners;
use inkpress_commerce::content::offer::active_offers;
use inkpress_commerce::content::{Banner, Offer};
use inkpress_ui::{BannerRail, CardRailSkeleton, Carousel, LoadError, OfferBar};
use leptos::prelude::*;

/// Wall-clock seconds, from the JS clock (wasm has no `SystemTime`).
fn now_unix() -> i64 {
    (js_sys::Date::now() / 1000.0) as i64
}

#[component]
pub fn HomePage() -> impl IntoView {
    let config = expect_context::<ApiConfig>();

    let offers = LocalResource::new({
        let config = config.clone();
        move || {
            let config = config.clone();
            async move { ApiClient::new(config).offers().await }
        }
    });
    let banners = LocalResource::new({
        let config = config.clone();
        move || {
            let config = config.clone();
            async move { ApiClient::new(config).banners().await }
        }
    });
    let categories = LocalResource::new({
        let config = config.clone();
        move || {
            let config = config.clone();
            async move { ApiClient::new(config).categories().await }
        }
    });
    let featured = LocalResource::new({
        let config = config.clone();
        move || {
            let config = config.clone();
            async move { ApiClient::new(config).featured_products().await }
        }
    });

    view! {
        // Promotional surfaces degrade silently when their fetch fails.
        <Suspense fallback=|| ()>
            {move || {
                offers
                    .get()
                    .map(|res| match res.take() {
                        Ok(items) => {
                            let active: Vec<Offer> =
                                active_offers(&items).into_iter().cloned().collect();
                            view! { <OfferBar offers=active/> }.into_any()
                        }
                        Err(e) => {
                            log::warn!("offer bar unavailable: {e}");
                            ().into_any()
                        }
                    })
            }}
        </Suspense>

        <Suspense fallback=|| ()>
            {move || {
                banners
                    .get()
                    .map(|res| match res.take() {
                        Ok(items) => {
                            let live: Vec<Banner> =
                                live_banners(&items, now_unix()).into_iter().cloned().collect();
                            view! { <BannerRail banners=live/> }.into_any()
                        }
                        Err(e) => {
                            log::warn!("banners unavailable: {e}");
                            ().into_any()
                        }
                    })
            }}
        </Suspense>

        <h2>"Shop by category"</h2>
        <Suspense fallback=move || view! { <CardRailSkeleton/> }>
            {move || {
                categories
                    .get()
                    .map(|res| match res.take() {
                        Ok(mut items) => {
                            category::sort_by_position(&mut items);
                            view! {
                                <Carousel label="Categories">
                                    {items
                                        .into_iter()
                                        .map(|c| view! { <CategoryCard category=c/> })
                                        .collect::<Vec<_>>()}
                                </Carousel>
                            }
                            .into_any()
                        }
                        Err(e) => {
                            view! {
                                <LoadError
                                    message=e.to_string()
                                    on_retry=Callback::new(move |_: ()| categories.refetch())
                                />
                            }
                            .into_any()
                        }
                    })
            }}
        </Suspense>

        <h2>"Popular right now"</h2>
        <Suspense fallback=move || view! { <CardRailSkeleton/> }>
            {move || {
                featured
                    .get()
                    .map(|res| match res.take() {
                        Ok(items) => {
                            view! {
                                <Carousel label="Featured products">
                                    {items
                                        .into_iter()
                                        .map(|p| view! { <ProductCard product=p/> })
                                        .collect::<Vec<_>>()}
                                </Carousel>
                            }
                            .into_any()
                        }
                        Err(e) => {
                            view! {
                                <LoadError
                                    message=e.to_string()
                                    on_retry=Callback::new(move |_: ()| featured.refetch())
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
fn CategoryCard(category: Category) -> impl IntoView {
    let href = format!("/category/{}", category.slug);
    view! {
        <a class="card" href=href>
            {category
                .image_url
                .map(|url| view! { <img src=url alt=category.name.clone()/> })}
            <div class="card-body">
                <h3>{category.name}</h3>
                {category.description.map(|d| view! { <p class="card-description">{d}</p> })}
            </div>
        </a>
    }
}

/// Product card shared by the home rail and the shop grid.
#[component]
pub fn ProductCard(product: Product) -> impl IntoView {
    let review_href = format!("/review/{}", product.id);
    let price = product.price_display();
    let original = product.original_price.map(|p| p.display());
    let discount = product.discount_percent();
    let in_stock = product.in_stock;

    view! {
        <div class="card">
            {product
                .image_url
                .map(|url| view! { <img src=url alt=product.name.clone()/> })}
            <div class="card-body">
                <h3>{product.name}</h3>
                <p>
                    <span class="price">{price}</span>
                    {original.map(|o| view! { <span class="price-original">{o}</span> })}
                    {discount.map(|d| view! { <span class="discount-badge">{d}"% off"</span> })}
                </p>
                <p class="hint">
                    "Min. order " {product.min_order_quantity.to_string()}
                </p>
                {if in_stock {
                    view! { <a class="button-primary" href=review_href>"Review artwork"</a> }
                        .into_any()
                } else {
                    view! { <p class="out-of-stock">"Currently unavailable"</p> }.into_any()
                }}
            </div>
        </div>
    }
}
