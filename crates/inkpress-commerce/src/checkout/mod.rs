//! Checkout: payment-method selection and the design-review step.

pub mod payment;
pub mod review;

pub use payment::{PaymentMethod, PaymentSelection};
pub use review::{DesignProof, ProofStatus, ReviewDecision, ReviewSubmission};
