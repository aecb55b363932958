//! Typed REST client for the Inkpress backend.
//!
//! Every component talks to the backend through one [`ApiClient`] built from
//! an [`ApiConfig`] at the application boundary and passed down (the
//! storefront provides it through Leptos context). Components never read
//! environment state or hard-code hosts.
//!
//! All endpoints wrap their payloads in the JSON envelope
//! `{ success, data, message? }`; [`Envelope`] unwraps that into a
//! `Result<T, ApiError>`.
//!
//! # Example
//!
//! ```rust,ignore
//! use inkpress_api::{ApiClient, ApiConfig};
//!
//! let client = ApiClient::new(ApiConfig::new("https://api.inkpress.example"));
//! let categories = client.categories().await?;
//! ```

mod envelope;
mod error;

pub use envelope::Envelope;
pub use error::ApiError;

use inkpress_commerce::admin::SubcategoryDraft;
use inkpress_commerce::catalog::{Category, Product, Subcategory};
use inkpress_commerce::checkout::{DesignProof, PaymentMethod, PaymentSelection, ReviewSubmission};
use inkpress_commerce::content::{Banner, Faq, Offer};
use inkpress_commerce::ids::{CartItemId, SubcategoryId};
use serde::de::DeserializeOwned;
use serde::Serialize;

/// Client configuration, injected where the application boots.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ApiConfig {
    /// Base URL of the backend. Empty means same-origin relative requests.
    pub base_url: String,
}

impl ApiConfig {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
        }
    }
}

/// The single typed HTTP client for the backend.
#[derive(Clone)]
pub struct ApiClient {
    http: reqwest::Client,
    base_url: String,
}

impl ApiClient {
    /// Build a client from injected configuration.
    pub fn new(config: ApiConfig) -> Self {
        Self {
            http: reqwest::Client::new(),
            base_url: config.base_url,
        }
    }

    /// Join the configured base with a request path.
    ///
    /// Absolute URLs pass through untouched; otherwise the base's trailing
    /// slashes and the path's missing leading slash are normalized away.
    fn join_url(&self, path: &str) -> String {
        if path.starts_with("http://") || path.starts_with("https://") {
            return path.to_string();
        }
        let base = self.base_url.trim_end_matches('/');
        if path.starts_with('/') {
            format!("{base}{path}")
        } else {
            format!("{base}/{path}")
        }
    }

    async fn get<T: DeserializeOwned>(&self, path: &str) -> Result<T, ApiError> {
        let url = self.join_url(path);
        log::debug!("GET {url}");
        let response = self.http.get(&url).send().await?;
        Self::unwrap_data(path, response).await
    }

    async fn post_ack<B: Serialize>(&self, path: &str, body: &B) -> Result<(), ApiError> {
        let url = self.join_url(path);
        log::debug!("POST {url}");
        let response = self.http.post(&url).json(body).send().await?;
        Self::unwrap_ack(path, response).await
    }

    async fn put_ack<B: Serialize>(&self, path: &str, body: &B) -> Result<(), ApiError> {
        let url = self.join_url(path);
        log::debug!("PUT {url}");
        let response = self.http.put(&url).json(body).send().await?;
        Self::unwrap_ack(path, response).await
    }

    async fn delete_ack(&self, path: &str) -> Result<(), ApiError> {
        let url = self.join_url(path);
        log::debug!("DELETE {url}");
        let response = self.http.delete(&url).send().await?;
        Self::unwrap_ack(path, response).await
    }

    async fn unwrap_data<T: DeserializeOwned>(
        path: &str,
        response: reqwest::Response,
    ) -> Result<T, ApiError> {
        let envelope = Self::read_envelope::<T>(response).await?;
        envelope.into_result().inspect_err(|e| {
            if let ApiError::Rejected(message) = e {
                log::warn!("{path} rejected: {message}");
            }
        })
    }

    async fn unwrap_ack(path: &str, response: reqwest::Response) -> Result<(), ApiError> {
        let envelope = Self::read_envelope::<serde_json::Value>(response).await?;
        envelope.into_ack().inspect_err(|e| {
            if let ApiError::Rejected(message) = e {
                log::warn!("{path} rejected: {message}");
            }
        })
    }

    async fn read_envelope<T: DeserializeOwned>(
        response: reqwest::Response,
    ) -> Result<Envelope<T>, ApiError> {
        let status = response.status();
        if !status.is_success() {
            return Err(ApiError::Status(status.as_u16()));
        }
        let body = response.text().await?;
        Ok(serde_json::from_str(&body)?)
    }

    // ---- Catalog -----------------------------------------------------------

    pub async fn categories(&self) -> Result<Vec<Category>, ApiError> {
        self.get("/api/categories").await
    }

    pub async fn subcategories(&self, category_slug: &str) -> Result<Vec<Subcategory>, ApiError> {
        self.get(&format!("/api/categories/{category_slug}/subcategories"))
            .await
    }

    pub async fn all_subcategories(&self) -> Result<Vec<Subcategory>, ApiError> {
        self.get("/api/subcategories").await
    }

    pub async fn products(&self, subcategory_slug: &str) -> Result<Vec<Product>, ApiError> {
        self.get(&format!("/api/subcategories/{subcategory_slug}/products"))
            .await
    }

    pub async fn featured_products(&self) -> Result<Vec<Product>, ApiError> {
        self.get("/api/products/featured").await
    }

    // ---- Content -----------------------------------------------------------

    pub async fn faqs(&self) -> Result<Vec<Faq>, ApiError> {
        self.get("/api/faqs").await
    }

    pub async fn banners(&self) -> Result<Vec<Banner>, ApiError> {
        self.get("/api/banners").await
    }

    pub async fn offers(&self) -> Result<Vec<Offer>, ApiError> {
        self.get("/api/offers").await
    }

    // ---- Checkout ----------------------------------------------------------

    pub async fn payment_methods(&self) -> Result<Vec<PaymentMethod>, ApiError> {
        self.get("/api/payment-methods").await
    }

    pub async fn submit_payment(&self, selection: &PaymentSelection) -> Result<(), ApiError> {
        self.post_ack("/api/payments", selection).await
    }

    pub async fn design_proof(&self, item_id: &CartItemId) -> Result<DesignProof, ApiError> {
        self.get(&format!("/api/cart/items/{item_id}/proof")).await
    }

    /// Submit the review decision. Approval is what updates the cart.
    pub async fn submit_review(&self, submission: &ReviewSubmission) -> Result<(), ApiError> {
        self.put_ack(
            &format!("/api/cart/items/{}/review", submission.item_id),
            submission,
        )
        .await
    }

    // ---- Admin -------------------------------------------------------------

    pub async fn create_subcategory(&self, draft: &SubcategoryDraft) -> Result<(), ApiError> {
        self.post_ack("/api/admin/subcategories", draft).await
    }

    pub async fn update_subcategory(&self, draft: &SubcategoryDraft) -> Result<(), ApiError> {
        let id = draft.id.as_ref().map(|i| i.as_str()).unwrap_or_default();
        self.put_ack(&format!("/api/admin/subcategories/{id}"), draft)
            .await
    }

    pub async fn delete_subcategory(&self, id: &SubcategoryId) -> Result<(), ApiError> {
        self.delete_ack(&format!("/api/admin/subcategories/{id}"))
            .await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn client(base: &str) -> ApiClient {
        ApiClient::new(ApiConfig::new(base))
    }

    #[test]
    fn test_join_url_normalizes_slashes() {
        let c = client("https://api.example.com/");
        assert_eq!(
            c.join_url("/api/categories"),
            "https://api.example.com/api/categories"
        );
        assert_eq!(
            c.join_url("api/categories"),
            "https://api.example.com/api/categories"
        );
    }

    #[test]
    fn test_join_url_empty_base_is_same_origin() {
        let c = client("");
        assert_eq!(c.join_url("/api/faqs"), "/api/faqs");
    }

    #[test]
    fn test_join_url_passes_absolute_urls_through() {
        let c = client("https://api.example.com");
        assert_eq!(
            c.join_url("https://cdn.example.com/x.png"),
            "https://cdn.example.com/x.png"
        );
    }
}
