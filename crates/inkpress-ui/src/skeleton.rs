//! Shimmer placeholders shown while data loads.

use leptos::prelude::*;

/// Placeholder for one product/category card.
#[component]
pub fn CardSkeleton() -> impl IntoView {
    view! {
        <div class="card">
            <div class="skeleton" style="width: 100%; height: 160px;"></div>
            <div class="card-body">
                <div class="skeleton" style="width: 80%; height: 1.25rem; margin-bottom: 0.5rem;"></div>
                <div class="skeleton" style="width: 40%; height: 1rem;"></div>
            </div>
        </div>
    }
}

/// Placeholder rail of cards for carousels and grids.
#[component]
pub fn CardRailSkeleton(#[prop(default = 4)] count: usize) -> impl IntoView {
    view! {
        <div class="card-rail">
            {(0..count).map(|_| view! { <CardSkeleton/> }).collect::<Vec<_>>()}
        </div>
    }
}

/// Placeholder rows for the admin table.
#[component]
pub fn TableSkeleton(#[prop(default = 5)] rows: usize) -> impl IntoView {
    view! {
        <div class="table-skeleton">
            {(0..rows)
                .map(|_| {
                    view! {
                        <div class="skeleton" style="width: 100%; height: 2.5rem; margin-bottom: 0.5rem;"></div>
                    }
                })
                .collect::<Vec<_>>()}
        </div>
    }
}
