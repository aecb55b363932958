//! Storefront content: FAQs, promotional banners, offer bars.

pub mod banner;
pub mod faq;
pub mod offer;

pub use banner::Banner;
pub use faq::Faq;
pub use offer::Offer;
