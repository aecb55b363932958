//! Printable products.

use crate::ids::{ProductId, SubcategoryId};
use crate::price::Price;
use serde::{Deserialize, Serialize};

/// A product in the catalog.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Product {
    /// Unique product identifier.
    pub id: ProductId,
    /// Parent subcategory ID.
    pub subcategory_id: SubcategoryId,
    /// Product name.
    pub name: String,
    /// URL-friendly slug.
    pub slug: String,
    /// Product description.
    #[serde(default)]
    pub description: Option<String>,
    /// Product image URL.
    #[serde(default)]
    pub image_url: Option<String>,
    /// Current selling price.
    pub price: Price,
    /// Price before discount, when the product is on offer.
    #[serde(default)]
    pub original_price: Option<Price>,
    /// Minimum order quantity for print runs.
    #[serde(default = "default_min_order_quantity")]
    pub min_order_quantity: i64,
    /// Whether the product can currently be ordered.
    #[serde(default = "default_in_stock")]
    pub in_stock: bool,
}

fn default_min_order_quantity() -> i64 {
    1
}

fn default_in_stock() -> bool {
    true
}

impl Product {
    /// Discount off the original price, as a whole percentage.
    ///
    /// `None` when there is no original price, the currencies differ, or
    /// the "discount" is not actually a reduction.
    pub fn discount_percent(&self) -> Option<u8> {
        let original = self.original_price.as_ref()?;
        if original.currency != self.price.currency
            || original.amount_minor <= self.price.amount_minor
            || original.amount_minor <= 0
        {
            return None;
        }
        let off = (original.amount_minor - self.price.amount_minor) as f64
            / original.amount_minor as f64;
        Some((off * 100.0).round() as u8)
    }

    /// Selling price formatted for display.
    pub fn price_display(&self) -> String {
        self.price.display()
    }

    /// Case-insensitive name match for client-side search.
    pub fn matches(&self, query: &str) -> bool {
        let query = query.trim();
        query.is_empty() || self.name.to_lowercase().contains(&query.to_lowercase())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::price::Currency;

    fn product(price_minor: i64, original_minor: Option<i64>) -> Product {
        Product {
            id: ProductId::new("p1"),
            subcategory_id: SubcategoryId::new("s1"),
            name: "Matte Business Cards".to_string(),
            slug: "matte-business-cards".to_string(),
            description: None,
            image_url: None,
            price: Price::new(price_minor, Currency::INR),
            original_price: original_minor.map(|m| Price::new(m, Currency::INR)),
            min_order_quantity: 100,
            in_stock: true,
        }
    }

    #[test]
    fn test_discount_percent() {
        assert_eq!(product(7500, Some(10000)).discount_percent(), Some(25));
        assert_eq!(product(10000, None).discount_percent(), None);
        // Not a reduction.
        assert_eq!(product(10000, Some(10000)).discount_percent(), None);
        assert_eq!(product(10000, Some(9000)).discount_percent(), None);
    }

    #[test]
    fn test_discount_percent_ignores_mixed_currencies() {
        let mut p = product(7500, Some(10000));
        p.original_price = Some(Price::new(10000, Currency::USD));
        assert_eq!(p.discount_percent(), None);
    }

    #[test]
    fn test_price_display() {
        assert_eq!(product(49900, None).price_display(), "\u{20b9}499.00");
    }

    #[test]
    fn test_wire_defaults() {
        let p: Product = serde_json::from_str(
            r#"{"id":"p1","subcategory_id":"s1","name":"Flyers","slug":"flyers",
                "price":{"amount_minor":9900,"currency":"INR"}}"#,
        )
        .unwrap();
        assert_eq!(p.min_order_quantity, 1);
        assert!(p.in_stock);
    }
}
