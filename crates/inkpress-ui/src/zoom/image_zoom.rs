//! The `ImageZoom` component: a circular lens showing a magnified crop of
//! the image region under the pointer or touch point.

use super::lens::{self, ContainerBounds, InputSource, LensFrame, LensState, Point};
use leptos::html;
use leptos::prelude::*;

/// Build the overlay style for one lens frame.
///
/// The lens background is the source image scaled to `zoom_level x 100%` of
/// the container, positioned by percentage so the magnified crop matches the
/// true pointer location.
fn lens_style(frame: &LensFrame, diameter: f64, zoom_level: f64, src: &str) -> String {
    let radius = diameter / 2.0;
    format!(
        "position: absolute; pointer-events: none; border-radius: 50%; \
         border: 2px solid #fff; box-shadow: 0 1px 6px rgba(0, 0, 0, 0.35); \
         left: {left}px; top: {top}px; width: {diameter}px; height: {diameter}px; \
         background-image: url('{src}'); background-repeat: no-repeat; \
         background-size: {size}% {size}%; \
         background-position: {px}% {py}%;",
        left = frame.center.x - radius,
        top = frame.center.y - radius,
        size = zoom_level * 100.0,
        px = frame.background_percent.x,
        py = frame.background_percent.y,
    )
}

/// Magnifier over a base image.
///
/// Hover drives the lens on desktop; touch drives it on mobile, activating
/// immediately on touch-start and suppressing the default scroll gesture for
/// the duration of the interaction. Whichever modality engages first owns
/// the lens until it releases.
#[component]
pub fn ImageZoom(
    /// Image URL.
    #[prop(into)]
    src: String,
    /// Accessibility text for the base image.
    #[prop(into, optional)]
    alt: String,
    /// Magnification factor.
    #[prop(default = 2.0)]
    zoom_level: f64,
    /// Lens diameter in pixels.
    #[prop(default = 150.0)]
    lens_size: f64,
    /// Invoked if the underlying image fails to load.
    #[prop(optional, into)]
    on_error: Option<Callback<()>>,
) -> impl IntoView {
    let state = RwSignal::new(LensState::default());
    let container = NodeRef::<html::Div>::new();

    // Bounds are re-read on every event: the container may have scrolled or
    // resized since the last one.
    let frame_at = move |client_x: f64, client_y: f64| -> Option<LensFrame> {
        let el = container.get_untracked()?;
        let rect = el.get_bounding_client_rect();
        let bounds = ContainerBounds::new(rect.left(), rect.top(), rect.width(), rect.height());
        lens::resolve(bounds, Point::new(client_x, client_y), lens_size)
    };

    let pointer_frame = move |ev: &web_sys::MouseEvent| {
        frame_at(ev.client_x() as f64, ev.client_y() as f64)
    };
    let touch_frame = move |ev: &web_sys::TouchEvent| {
        let touch = ev.touches().get(0)?;
        frame_at(touch.client_x() as f64, touch.client_y() as f64)
    };

    let lens_src = src.clone();

    view! {
        <div
            class="image-zoom"
            node_ref=container
            style="position: relative; display: inline-block; overflow: hidden; touch-action: none;"
            on:mouseenter=move |ev: web_sys::MouseEvent| {
                if let Some(frame) = pointer_frame(&ev) {
                    state.update(|s| s.engage(InputSource::Pointer, frame));
                }
            }
            on:mousemove=move |ev: web_sys::MouseEvent| {
                if let Some(frame) = pointer_frame(&ev) {
                    state.update(|s| s.track(InputSource::Pointer, frame));
                }
            }
            on:mouseleave=move |_| state.update(|s| s.release(InputSource::Pointer))
            on:touchstart=move |ev: web_sys::TouchEvent| {
                ev.prevent_default();
                if let Some(frame) = touch_frame(&ev) {
                    state.update(|s| s.engage(InputSource::Touch, frame));
                }
            }
            on:touchmove=move |ev: web_sys::TouchEvent| {
                ev.prevent_default();
                if let Some(frame) = touch_frame(&ev) {
                    state.update(|s| s.track(InputSource::Touch, frame));
                }
            }
            on:touchend=move |_| state.update(|s| s.release(InputSource::Touch))
            on:touchcancel=move |_| state.update(|s| s.release(InputSource::Touch))
        >
            <img
                src=src
                alt=alt
                draggable="false"
                style="display: block; width: 100%; height: 100%; user-select: none;"
                on:error=move |_| {
                    log::warn!("image-zoom: source failed to load");
                    if let Some(cb) = on_error {
                        cb.run(());
                    }
                }
            />
            {move || {
                state
                    .get()
                    .frame()
                    .map(|frame| {
                        view! {
                            <div
                                class="image-zoom-lens"
                                style=lens_style(&frame, lens_size, zoom_level, &lens_src)
                            ></div>
                        }
                    })
            }}
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lens_style_positions_by_center() {
        let frame = LensFrame {
            center: Point::new(75.0, 75.0),
            background_percent: Point::new(18.75, 25.0),
        };
        let style = lens_style(&frame, 150.0, 2.0, "/proof.png");

        assert!(style.contains("left: 0px"));
        assert!(style.contains("top: 0px"));
        assert!(style.contains("width: 150px; height: 150px"));
        assert!(style.contains("background-image: url('/proof.png')"));
        assert!(style.contains("background-size: 200% 200%"));
        assert!(style.contains("background-position: 18.75% 25%"));
    }

    #[test]
    fn test_lens_style_honors_zoom_level() {
        let frame = LensFrame {
            center: Point::new(200.0, 150.0),
            background_percent: Point::new(50.0, 50.0),
        };
        let style = lens_style(&frame, 100.0, 3.0, "/proof.png");

        assert!(style.contains("left: 150px"));
        assert!(style.contains("top: 100px"));
        assert!(style.contains("background-size: 300% 300%"));
        assert!(style.contains("background-position: 50% 50%"));
    }
}
