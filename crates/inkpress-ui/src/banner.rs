//! Promotional surfaces: the rotating offer bar and the banner rail.

use inkpress_commerce::content::{Banner, Offer};
use leptos::leptos_dom::helpers::set_interval_with_handle;
use leptos::prelude::*;
use std::time::Duration;

/// Next offer index, wrapping at the end.
pub fn next_offer(current: usize, count: usize) -> usize {
    if count == 0 {
        0
    } else {
        (current + 1) % count
    }
}

/// Previous offer index, wrapping at the start.
pub fn prev_offer(current: usize, count: usize) -> usize {
    if count == 0 {
        0
    } else {
        (current + count - 1) % count
    }
}

const ROTATE_INTERVAL: Duration = Duration::from_secs(5);

/// Rotating strip of offers above the header. Rotates on an interval and on
/// the manual prev/next arrows; the interval is cleared on unmount.
#[component]
pub fn OfferBar(offers: Vec<Offer>) -> impl IntoView {
    let count = offers.len();
    let index = RwSignal::new(0usize);

    // Hoisted out of the view: a bare `count > 1` inside `view!` parses the
    // `>` as a tag close.
    let any_offers = count > 0;
    let many_offers = count > 1;

    if many_offers {
        if let Ok(handle) = set_interval_with_handle(
            move || index.update(|i| *i = next_offer(*i, count)),
            ROTATE_INTERVAL,
        ) {
            on_cleanup(move || handle.clear());
        }
    }

    view! {
        <Show when=move || any_offers>
            <div class="offer-bar">
                <Show when=move || many_offers>
                    <button
                        class="offer-bar-arrow"
                        aria-label="Previous offer"
                        on:click=move |_| index.update(|i| *i = prev_offer(*i, count))
                    >
                        "\u{2039}"
                    </button>
                </Show>
                {
                    let offers = offers.clone();
                    move || {
                        offers.get(index.get()).map(|offer| {
                            let text = offer.text.clone();
                            match &offer.link_url {
                                Some(url) => view! {
                                    <a class="offer-bar-text" href=url.clone()>{text}</a>
                                }
                                .into_any(),
                                None => view! { <span class="offer-bar-text">{text}</span> }
                                    .into_any(),
                            }
                        })
                    }
                }
                <Show when=move || many_offers>
                    <button
                        class="offer-bar-arrow"
                        aria-label="Next offer"
                        on:click=move |_| index.update(|i| *i = next_offer(*i, count))
                    >
                        "\u{203a}"
                    </button>
                </Show>
            </div>
        </Show>
    }
}

/// Strip of live promotional banners. The caller decides liveness so this
/// stays clock-free.
#[component]
pub fn BannerRail(banners: Vec<Banner>) -> impl IntoView {
    view! {
        <div class="banner-rail">
            {banners
                .into_iter()
                .map(|banner| {
                    let image = view! {
                        <img class="banner-image" src=banner.image_url alt=banner.title/>
                    };
                    match banner.link_url {
                        Some(url) => {
                            view! { <a class="banner" href=url>{image}</a> }.into_any()
                        }
                        None => view! { <div class="banner">{image}</div> }.into_any(),
                    }
                })
                .collect::<Vec<_>>()}
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_next_offer_wraps() {
        assert_eq!(next_offer(0, 3), 1);
        assert_eq!(next_offer(2, 3), 0);
    }

    #[test]
    fn test_prev_offer_wraps() {
        assert_eq!(prev_offer(1, 3), 0);
        assert_eq!(prev_offer(0, 3), 2);
    }

    #[test]
    fn test_empty_offer_list_stays_put() {
        assert_eq!(next_offer(0, 0), 0);
        assert_eq!(prev_offer(0, 0), 0);
    }

    #[test]
    fn test_single_offer_is_stable() {
        assert_eq!(next_offer(0, 1), 0);
        assert_eq!(prev_offer(0, 1), 0);
    }
}
