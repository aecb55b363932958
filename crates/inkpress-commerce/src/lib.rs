//! Storefront domain types and client-side logic for Inkpress.
//!
//! This crate holds everything the storefront and admin console know about
//! the printing business that is not tied to the DOM or to HTTP:
//!
//! - **Catalog**: categories, subcategories, products
//! - **Content**: FAQs, promotional banners, offer bars
//! - **Checkout**: payment methods, the design-review step
//! - **Admin**: form drafts and validation for subcategory CRUD
//!
//! All wire types deserialize from the backend's JSON envelopes and tolerate
//! missing optional fields. Logic here is pure: ordering, text matching,
//! slug generation, price formatting, and the small state transitions the UI
//! needs. Nothing in this crate touches the network or the browser.
//!
//! # Example
//!
//! ```rust
//! use inkpress_commerce::prelude::*;
//!
//! let price = Price::from_decimal(499.0, Currency::INR);
//! assert_eq!(price.display(), "\u{20b9}499.00");
//!
//! assert_eq!(slugify("Wedding Cards & Invites"), "wedding-cards-invites");
//! ```

pub mod error;
pub mod ids;
pub mod price;
pub mod slug;

pub mod catalog;
pub mod content;
pub mod checkout;

pub mod admin;

pub use error::CommerceError;
pub use ids::*;
pub use price::{Currency, Price};
pub use slug::{is_valid_slug, slugify};

/// Prelude for convenient imports.
pub mod prelude {
    pub use crate::error::CommerceError;
    pub use crate::ids::*;
    pub use crate::price::{Currency, Price};
    pub use crate::slug::{is_valid_slug, slugify};

    // Catalog
    pub use crate::catalog::{Category, Product, Subcategory};

    // Content
    pub use crate::content::{Banner, Faq, Offer};

    // Checkout
    pub use crate::checkout::{
        DesignProof, PaymentMethod, PaymentSelection, ProofStatus, ReviewDecision,
        ReviewSubmission,
    };

    // Admin
    pub use crate::admin::{FormIssue, SubcategoryDraft};
}
