//! Unlock state for the paid verdict reveal.
//!
//! The verdict and what-works sections render blurred until the viewer pays.
//! Unlocking runs through an external checkout redirect, so the machine only
//! ever reaches `Unlocked` via its initial state: after payment the provider
//! redirects back and the page is rebuilt, it is never mutated in place.
//!
//! Transition table (anything not listed is a self-loop with no effect):
//! - `Locked`    --UnlockRequested-->   `Unlocking` + request a session
//! - `Unlocking` --SessionReady(url)--> `Unlocking` + redirect to `url`
//! - `Unlocking` --SessionFailed-->     `Locked`

use serde::{Deserialize, Serialize};

/// Visibility of the paid sections of an analysis.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum UnlockState {
    /// Paid sections hidden; unlock affordance offered.
    Locked,
    /// Checkout session requested; affordance disabled until the outcome.
    Unlocking,
    /// Paid sections visible; no affordance.
    Unlocked,
}

/// External stimulus driving the unlock flow.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UnlockEvent {
    /// The viewer activated the unlock affordance.
    UnlockRequested,
    /// The checkout session was created at the given URL.
    SessionReady(String),
    /// The checkout session could not be created.
    SessionFailed,
}

/// Side effect the caller must perform after a transition.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UnlockEffect {
    /// Create a checkout session for the current analysis.
    RequestSession,
    /// Navigate the browsing context to the checkout URL.
    RedirectTo(String),
}

impl UnlockState {
    /// Initial state for a freshly rendered analysis.
    ///
    /// Admin-originated requests skip the paywall entirely.
    pub fn initial(admin_originated: bool) -> Self {
        if admin_originated {
            Self::Unlocked
        } else {
            Self::Locked
        }
    }

    /// Whether the unlock affordance should be offered.
    pub fn offers_unlock(self) -> bool {
        self == Self::Locked
    }

    /// Advance the machine by one event.
    ///
    /// Returns the next state and the effect the caller must run, if any.
    /// The machine itself performs no I/O.
    pub fn apply(self, event: UnlockEvent) -> (Self, Option<UnlockEffect>) {
        match (self, event) {
            (Self::Locked, UnlockEvent::UnlockRequested) => {
                (Self::Unlocking, Some(UnlockEffect::RequestSession))
            }
            (Self::Unlocking, UnlockEvent::SessionReady(url)) => {
                (Self::Unlocking, Some(UnlockEffect::RedirectTo(url)))
            }
            (Self::Unlocking, UnlockEvent::SessionFailed) => (Self::Locked, None),
            (state, _) => (state, None),
        }
    }
}
