//! Newtype IDs for type-safe identifiers.
//!
//! Using newtypes prevents accidentally mixing up different ID types,
//! e.g., passing a `ProductId` where a `SubcategoryId` is expected.
//! All IDs are assigned by the backend; this crate never generates them.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Macro to generate newtype ID structs.
macro_rules! define_id {
    ($name:ident) => {
        /// A unique identifier.
        #[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
        #[serde(transparent)]
        pub struct $name(String);

        impl $name {
            /// Create a new ID from a string.
            pub fn new(id: impl Into<String>) -> Self {
                Self(id.into())
            }

            /// Get the ID as a string slice.
            pub fn as_str(&self) -> &str {
                &self.0
            }

            /// Consume and return the inner string.
            pub fn into_inner(self) -> String {
                self.0
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{}", self.0)
            }
        }

        impl From<String> for $name {
            fn from(s: String) -> Self {
                Self(s)
            }
        }

        impl From<&str> for $name {
            fn from(s: &str) -> Self {
                Self(s.to_string())
            }
        }

        impl AsRef<str> for $name {
            fn as_ref(&self) -> &str {
                &self.0
            }
        }
    };
}

// Define all ID types
define_id!(CategoryId);
define_id!(SubcategoryId);
define_id!(ProductId);
define_id!(FaqId);
define_id!(BannerId);
define_id!(OfferId);
define_id!(PaymentMethodId);
define_id!(CartItemId);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_id_creation() {
        let id = SubcategoryId::new("sub-123");
        assert_eq!(id.as_str(), "sub-123");
    }

    #[test]
    fn test_id_from_string() {
        let id: ProductId = "prod-456".into();
        assert_eq!(id.as_str(), "prod-456");
    }

    #[test]
    fn test_id_display() {
        let id = CategoryId::new("cat-789");
        assert_eq!(format!("{}", id), "cat-789");
    }

    #[test]
    fn test_id_serde_transparent() {
        let id = CartItemId::new("item-1");
        assert_eq!(serde_json::to_string(&id).unwrap(), "\"item-1\"");
        let back: CartItemId = serde_json::from_str("\"item-1\"").unwrap();
        assert_eq!(back, id);
    }

    #[test]
    fn test_id_equality() {
        let id1 = FaqId::new("same");
        let id2 = FaqId::new("same");
        let id3 = FaqId::new("different");

        assert_eq!(id1, id2);
        assert_ne!(id1, id3);
    }
}
