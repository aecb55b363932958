//! Payment-method selection.

use crate::ids::{CartItemId, PaymentMethodId};
use serde::{Deserialize, Serialize};

/// A payment method offered in the selection modal.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct PaymentMethod {
    /// Unique payment method identifier.
    pub id: PaymentMethodId,
    /// Stable code submitted back to the backend (e.g., "upi", "card").
    pub code: String,
    /// Human-readable label.
    pub label: String,
    /// Optional helper text under the label.
    #[serde(default)]
    pub description: Option<String>,
    /// Whether the method can currently be chosen.
    #[serde(default = "default_enabled")]
    pub enabled: bool,
    /// Sort order position.
    #[serde(default)]
    pub position: i32,
}

fn default_enabled() -> bool {
    true
}

/// Methods selectable in the modal, in position order.
pub fn enabled_methods(items: &[PaymentMethod]) -> Vec<&PaymentMethod> {
    let mut enabled: Vec<&PaymentMethod> = items.iter().filter(|m| m.enabled).collect();
    enabled.sort_by_key(|m| m.position);
    enabled
}

/// POST body for submitting the chosen payment method.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct PaymentSelection {
    /// Cart item the payment applies to.
    pub cart_item_id: CartItemId,
    /// Code of the chosen method.
    pub method_code: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn method(code: &str, enabled: bool, position: i32) -> PaymentMethod {
        PaymentMethod {
            id: PaymentMethodId::new(code),
            code: code.to_string(),
            label: code.to_uppercase(),
            description: None,
            enabled,
            position,
        }
    }

    #[test]
    fn test_enabled_methods() {
        let items = vec![
            method("card", true, 2),
            method("netbanking", false, 1),
            method("upi", true, 0),
        ];
        let enabled = enabled_methods(&items);
        let codes: Vec<_> = enabled.iter().map(|m| m.code.as_str()).collect();
        assert_eq!(codes, ["upi", "card"]);
    }

    #[test]
    fn test_selection_body_shape() {
        let sel = PaymentSelection {
            cart_item_id: CartItemId::new("item-9"),
            method_code: "upi".to_string(),
        };
        let json = serde_json::to_value(&sel).unwrap();
        assert_eq!(json["cart_item_id"], "item-9");
        assert_eq!(json["method_code"], "upi");
    }
}
