//! Application shell: routes, layout, and injected API configuration.

use inkpress_api::ApiConfig;
use leptos::prelude::*;
use leptos_meta::{provide_meta_context, Meta, Title};
use leptos_router::components::{Route, Router, Routes};
use leptos_router::path;

use crate::pages;

/// Read the backend base URL from the page's
/// `<meta name="inkpress-api-base">` tag. Missing or empty means
/// same-origin requests.
fn api_base_from_meta() -> String {
    web_sys::window()
        .and_then(|w| w.document())
        .and_then(|d| {
            d.query_selector("meta[name='inkpress-api-base']")
                .ok()
                .flatten()
        })
        .and_then(|el| el.get_attribute("content"))
        .unwrap_or_default()
}

#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    // The one place backend configuration enters the app; every page builds
    // its client from this context.
    provide_context(ApiConfig::new(api_base_from_meta()));

    let fallback = || view! { <NotFound/> }.into_view();

    view! {
        <Title text="Inkpress Printing"/>
        <Meta name="description" content="Inkpress - custom printing for cards, stationery and signage"/>

        <Router>
            <Header/>
            <main>
                <Routes fallback>
                    <Route path=path!("") view=pages::home::HomePage/>
                    <Route path=path!("/category/:slug") view=pages::category::CategoryPage/>
                    <Route path=path!("/shop/:category/:subcategory") view=pages::shop::ShopPage/>
                    <Route path=path!("/faq") view=pages::faq::FaqPage/>
                    <Route path=path!("/review/:item") view=pages::review::ReviewPage/>
                    <Route path=path!("/admin/subcategories") view=pages::admin::AdminSubcategoriesPage/>
                    <Route path=path!("/*any") view=NotFound/>
                </Routes>
            </main>
            <Footer/>
        </Router>
    }
}

#[component]
fn Header() -> impl IntoView {
    view! {
        <header class="site-header">
            <h1>"Inkpress"</h1>
            <nav>
                <a href="/">"Home"</a>
                <a href="/faq">"FAQ"</a>
                <a href="/admin/subcategories">"Admin"</a>
            </nav>
        </header>
    }
}

#[component]
fn Footer() -> impl IntoView {
    view! {
        <footer class="site-footer">
            <p>"Inkpress - print that arrives the way you approved it."</p>
            <p>"Questions? Start with the " <a href="/faq">"FAQ"</a> "."</p>
        </footer>
    }
}

/// 404 page.
#[component]
fn NotFound() -> impl IntoView {
    view! {
        <div style="text-align: center; padding: 4rem;">
            <h1>"404"</h1>
            <p>"Page not found"</p>
            <a href="/">"Back to Home"</a>
        </div>
    }
}
