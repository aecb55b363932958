//! Reusable Leptos components for the Inkpress storefront.
//!
//! Interaction math is kept in pure modules beside each component so it can
//! be unit-tested natively; the components themselves are thin wiring from
//! DOM events and props into that math.

pub mod accordion;
pub mod banner;
pub mod carousel;
pub mod modal;
pub mod skeleton;
pub mod support;
pub mod zoom;

pub use accordion::FaqAccordion;
pub use banner::{BannerRail, OfferBar};
pub use carousel::Carousel;
pub use modal::PaymentModal;
pub use skeleton::{CardRailSkeleton, CardSkeleton, TableSkeleton};
pub use support::LoadError;
pub use zoom::ImageZoom;
