//! Offer-bar strips shown above the header.

use crate::ids::OfferId;
use serde::{Deserialize, Serialize};

/// One line of the rotating offer bar.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Offer {
    /// Unique offer identifier.
    pub id: OfferId,
    /// Offer text (e.g., "Free shipping over ₹999").
    pub text: String,
    /// Optional destination when the offer is clicked.
    #[serde(default)]
    pub link_url: Option<String>,
    /// Whether the offer is currently shown.
    #[serde(default = "default_active")]
    pub active: bool,
    /// Sort order position.
    #[serde(default)]
    pub position: i32,
}

fn default_active() -> bool {
    true
}

/// Active offers in position order.
pub fn active_offers(items: &[Offer]) -> Vec<&Offer> {
    let mut active: Vec<&Offer> = items.iter().filter(|o| o.active).collect();
    active.sort_by_key(|o| o.position);
    active
}
