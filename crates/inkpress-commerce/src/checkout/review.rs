//! The design-review step that gates the cart update.
//!
//! Before a printed item enters the cart proper, the customer reviews the
//! artwork proof and either approves it or requests changes. A proof can be
//! decided exactly once; a second decision is a logic error surfaced as
//! [`CommerceError::ProofAlreadyDecided`].

use crate::ids::CartItemId;
use crate::CommerceError;
use serde::{Deserialize, Serialize};

/// Where a design proof stands.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum ProofStatus {
    /// Awaiting the customer's decision.
    #[default]
    Pending,
    /// Approved; the cart update proceeds.
    Approved,
    /// Customer asked for changes; the item stays out of the cart.
    ChangesRequested,
}

impl ProofStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            ProofStatus::Pending => "pending",
            ProofStatus::Approved => "approved",
            ProofStatus::ChangesRequested => "changes_requested",
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            ProofStatus::Pending => "Pending review",
            ProofStatus::Approved => "Approved",
            ProofStatus::ChangesRequested => "Changes requested",
        }
    }
}

/// The customer's decision on a proof.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ReviewDecision {
    Approve,
    RequestChanges,
}

/// An artwork proof awaiting review.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct DesignProof {
    /// Cart item the proof belongs to.
    pub item_id: CartItemId,
    /// Name of the product being printed.
    pub product_name: String,
    /// Rendered artwork URL, shown under the magnifier.
    pub artwork_url: String,
    /// Notes from the prepress team.
    #[serde(default)]
    pub notes: Option<String>,
    /// Current status.
    #[serde(default)]
    pub status: ProofStatus,
}

impl DesignProof {
    /// Whether the proof still needs a decision.
    pub fn is_pending(&self) -> bool {
        self.status == ProofStatus::Pending
    }

    /// Apply the customer's decision, rejecting a second decision.
    pub fn decide(&mut self, decision: ReviewDecision) -> Result<ProofStatus, CommerceError> {
        if !self.is_pending() {
            return Err(CommerceError::ProofAlreadyDecided(
                self.item_id.as_str().to_string(),
            ));
        }
        self.status = match decision {
            ReviewDecision::Approve => ProofStatus::Approved,
            ReviewDecision::RequestChanges => ProofStatus::ChangesRequested,
        };
        Ok(self.status)
    }
}

/// PUT body submitted when the customer decides.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ReviewSubmission {
    /// Cart item being decided.
    pub item_id: CartItemId,
    /// The decision.
    pub decision: ReviewDecision,
    /// Required note when requesting changes.
    #[serde(default)]
    pub note: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn proof() -> DesignProof {
        DesignProof {
            item_id: CartItemId::new("item-1"),
            product_name: "Wedding Invites".to_string(),
            artwork_url: "https://cdn.example.com/proof-1.png".to_string(),
            notes: None,
            status: ProofStatus::Pending,
        }
    }

    #[test]
    fn test_approve() {
        let mut p = proof();
        assert_eq!(p.decide(ReviewDecision::Approve), Ok(ProofStatus::Approved));
        assert!(!p.is_pending());
    }

    #[test]
    fn test_request_changes() {
        let mut p = proof();
        assert_eq!(
            p.decide(ReviewDecision::RequestChanges),
            Ok(ProofStatus::ChangesRequested)
        );
    }

    #[test]
    fn test_second_decision_rejected() {
        let mut p = proof();
        p.decide(ReviewDecision::Approve).unwrap();
        assert!(matches!(
            p.decide(ReviewDecision::RequestChanges),
            Err(CommerceError::ProofAlreadyDecided(_))
        ));
        // The first decision stands.
        assert_eq!(p.status, ProofStatus::Approved);
    }

    #[test]
    fn test_status_wire_format() {
        assert_eq!(
            serde_json::to_string(&ProofStatus::ChangesRequested).unwrap(),
            "\"changes_requested\""
        );
        assert_eq!(
            serde_json::to_string(&ReviewDecision::RequestChanges).unwrap(),
            "\"request_changes\""
        );
    }
}
