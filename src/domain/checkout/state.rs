//! Checkout attempt state machine.
//!
//! One attempt moves strictly forward: no state transitions back to Idle;
//! a new attempt starts a fresh aggregate.

use serde::{Deserialize, Serialize};

/// State of a single checkout attempt.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CheckoutState {
    /// Attempt created, nothing requested yet.
    Idle,

    /// Order creation is in flight with the payment gateway.
    OrderRequested,

    /// Provider issued the order.
    OrderCreated,

    /// Waiting on the external checkout widget. The only asynchronous
    /// suspension point; nothing polls it.
    AwaitingConfirmation,

    /// Confirmation received, verification in flight.
    Verifying,

    /// Entitlement granted. Terminal.
    Granted,

    /// Verification said no, or we could not ask. Terminal.
    Denied,

    /// User dismissed the checkout; no verification call was made. Terminal.
    Abandoned,

    /// Order creation failed. Terminal.
    Failed,
}

impl CheckoutState {
    /// Returns true if transition from self to target is valid.
    pub fn can_transition_to(&self, target: &Self) -> bool {
        use CheckoutState::*;
        matches!(
            (self, target),
            (Idle, OrderRequested)
                | (OrderRequested, OrderCreated)
                | (OrderRequested, Failed)
                | (OrderCreated, AwaitingConfirmation)
                | (AwaitingConfirmation, Verifying)
                | (AwaitingConfirmation, Abandoned)
                | (Verifying, Granted)
                | (Verifying, Denied)
        )
    }

    /// True for states no attempt ever leaves.
    pub fn is_terminal(&self) -> bool {
        matches!(
            self,
            CheckoutState::Granted
                | CheckoutState::Denied
                | CheckoutState::Abandoned
                | CheckoutState::Failed
        )
    }

    /// True only after an explicit grant.
    pub fn has_entitlement(&self) -> bool {
        matches!(self, CheckoutState::Granted)
    }

    /// Human-readable name, used in InvalidState errors and logs.
    pub fn name(&self) -> &'static str {
        match self {
            CheckoutState::Idle => "idle",
            CheckoutState::OrderRequested => "order_requested",
            CheckoutState::OrderCreated => "order_created",
            CheckoutState::AwaitingConfirmation => "awaiting_confirmation",
            CheckoutState::Verifying => "verifying",
            CheckoutState::Granted => "granted",
            CheckoutState::Denied => "denied",
            CheckoutState::Abandoned => "abandoned",
            CheckoutState::Failed => "failed",
        }
    }
}

impl std::fmt::Display for CheckoutState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use CheckoutState::*;

    #[test]
    fn happy_path_transitions_are_valid() {
        assert!(Idle.can_transition_to(&OrderRequested));
        assert!(OrderRequested.can_transition_to(&OrderCreated));
        assert!(OrderCreated.can_transition_to(&AwaitingConfirmation));
        assert!(AwaitingConfirmation.can_transition_to(&Verifying));
        assert!(Verifying.can_transition_to(&Granted));
    }

    #[test]
    fn failure_and_abandonment_transitions_are_valid() {
        assert!(OrderRequested.can_transition_to(&Failed));
        assert!(AwaitingConfirmation.can_transition_to(&Abandoned));
        assert!(Verifying.can_transition_to(&Denied));
    }

    #[test]
    fn no_state_returns_to_idle() {
        for state in [
            OrderRequested,
            OrderCreated,
            AwaitingConfirmation,
            Verifying,
            Granted,
            Denied,
            Abandoned,
            Failed,
        ] {
            assert!(!state.can_transition_to(&Idle), "{} -> idle", state);
        }
    }

    #[test]
    fn terminal_states_have_no_outgoing_transitions() {
        let all = [
            Idle,
            OrderRequested,
            OrderCreated,
            AwaitingConfirmation,
            Verifying,
            Granted,
            Denied,
            Abandoned,
            Failed,
        ];
        for terminal in all.iter().filter(|s| s.is_terminal()) {
            for target in &all {
                assert!(
                    !terminal.can_transition_to(target),
                    "{} -> {}",
                    terminal,
                    target
                );
            }
        }
    }

    #[test]
    fn only_granted_has_entitlement() {
        assert!(Granted.has_entitlement());
        assert!(!Denied.has_entitlement());
        assert!(!Abandoned.has_entitlement());
        assert!(!Verifying.has_entitlement());
    }

    #[test]
    fn cannot_verify_without_awaiting() {
        assert!(!OrderCreated.can_transition_to(&Verifying));
        assert!(!Idle.can_transition_to(&Verifying));
    }
}
