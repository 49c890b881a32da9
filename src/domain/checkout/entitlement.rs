//! Entitlement decision types.

use serde::{Deserialize, Serialize};

/// Final grant/deny decision after verification.
///
/// Fail-closed: anything other than an explicit positive verification is a
/// denial carrying the reason it was denied.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "outcome", rename_all = "snake_case")]
pub enum EntitlementResult {
    /// Verification explicitly confirmed a valid signature tied to a real
    /// completed payment.
    Granted,

    /// Entitlement withheld.
    Denied { reason: DenyReason },
}

impl EntitlementResult {
    /// True only for an explicit grant.
    pub fn granted(&self) -> bool {
        matches!(self, EntitlementResult::Granted)
    }

    pub fn denied(reason: DenyReason) -> Self {
        EntitlementResult::Denied { reason }
    }
}

/// Why entitlement was denied.
///
/// "Verification said no" and "we could not ask" stay distinct here even
/// though the user-facing message is uniform.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DenyReason {
    /// The signature did not verify against the order and payment ids.
    SignatureInvalid,

    /// The verification call itself failed; validity is unknown.
    VerificationUnavailable,

    /// This confirmation was already accepted once.
    Replayed,

    /// The confirmation names a different order than the attempt owns.
    OrderMismatch,
}

/// User-visible next step after a checkout attempt settles.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "action", rename_all = "snake_case")]
pub enum NextAction {
    /// Upgrade granted: navigate to the dashboard route.
    RedirectToDashboard { route: String },

    /// Denied or failed: show the retry notification, no redirect.
    ShowRetry,

    /// Abandoned checkout: nothing to show.
    None,
}
