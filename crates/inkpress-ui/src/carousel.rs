//! Horizontal carousel rail with prev/next paging.

use leptos::html;
use leptos::prelude::*;
use web_sys::{ScrollBehavior, ScrollToOptions};

/// Which way a paging button scrolls.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScrollDirection {
    Back,
    Forward,
}

/// Target offset after one page in the given direction, clamped to the
/// scrollable range. One page is the visible viewport width.
pub fn scroll_target(
    current: f64,
    viewport: f64,
    content: f64,
    direction: ScrollDirection,
) -> f64 {
    let max = (content - viewport).max(0.0);
    let next = match direction {
        ScrollDirection::Back => current - viewport,
        ScrollDirection::Forward => current + viewport,
    };
    next.clamp(0.0, max)
}

/// Whether the rail sits at its start/end edge, for disabling the buttons.
pub fn scroll_edges(current: f64, viewport: f64, content: f64) -> (bool, bool) {
    let max = (content - viewport).max(0.0);
    (current <= 0.0, current >= max - 1.0)
}

/// A horizontal scroll rail. Children are the cards; paging is one viewport
/// width per click, smoothed by the browser.
#[component]
pub fn Carousel(
    /// Accessible label for the rail.
    #[prop(into)]
    label: String,
    children: Children,
) -> impl IntoView {
    let rail = NodeRef::<html::Div>::new();
    // Edge state is refreshed on scroll so the buttons disable at the ends.
    let edges = RwSignal::new((true, false));

    let refresh_edges = move || {
        if let Some(el) = rail.get_untracked() {
            edges.set(scroll_edges(
                el.scroll_left() as f64,
                el.client_width() as f64,
                el.scroll_width() as f64,
            ));
        }
    };

    let page = move |direction: ScrollDirection| {
        if let Some(el) = rail.get_untracked() {
            let target = scroll_target(
                el.scroll_left() as f64,
                el.client_width() as f64,
                el.scroll_width() as f64,
                direction,
            );
            let options = ScrollToOptions::new();
            options.set_left(target);
            options.set_behavior(ScrollBehavior::Smooth);
            el.scroll_to_with_scroll_to_options(&options);
        }
    };

    view! {
        <div class="carousel" aria-label=label>
            <button
                class="carousel-button carousel-button-back"
                aria-label="Scroll back"
                disabled=move || edges.get().0
                on:click=move |_| page(ScrollDirection::Back)
            >
                "\u{2039}"
            </button>
            <div
                class="carousel-rail"
                node_ref=rail
                on:scroll=move |_| refresh_edges()
            >
                {children()}
            </div>
            <button
                class="carousel-button carousel-button-forward"
                aria-label="Scroll forward"
                disabled=move || edges.get().1
                on:click=move |_| page(ScrollDirection::Forward)
            >
                "\u{203a}"
            </button>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_forward_pages_one_viewport() {
        assert_eq!(
            scroll_target(0.0, 300.0, 1200.0, ScrollDirection::Forward),
            300.0
        );
    }

    #[test]
    fn test_forward_clamps_at_end() {
        assert_eq!(
            scroll_target(800.0, 300.0, 1200.0, ScrollDirection::Forward),
            900.0
        );
    }

    #[test]
    fn test_back_clamps_at_start() {
        assert_eq!(
            scroll_target(100.0, 300.0, 1200.0, ScrollDirection::Back),
            0.0
        );
    }

    #[test]
    fn test_content_narrower_than_viewport_never_scrolls() {
        assert_eq!(
            scroll_target(0.0, 500.0, 300.0, ScrollDirection::Forward),
            0.0
        );
    }

    #[test]
    fn test_scroll_edges() {
        assert_eq!(scroll_edges(0.0, 300.0, 1200.0), (true, false));
        assert_eq!(scroll_edges(450.0, 300.0, 1200.0), (false, false));
        assert_eq!(scroll_edges(900.0, 300.0, 1200.0), (false, true));
        // Nothing to scroll: both edges at once.
        assert_eq!(scroll_edges(0.0, 500.0, 300.0), (true, true));
    }
}
