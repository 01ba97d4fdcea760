//! Confirmation port gating destructive bulk actions.

/// User-confirmation step required before a destructive bulk action.
///
/// A declined confirmation must leave the remote store untouched; services
/// consult the gate before issuing any write.
#[cfg_attr(test, mockall::automock)]
pub trait ConfirmationGate: Send + Sync {
    /// Asks the user to confirm the described action.
    fn confirm(&self, prompt: &str) -> bool;
}

/// Gate that confirms or declines every action unconditionally.
///
/// Stands in for the browser confirm dialog in tests and headless flows.
#[derive(Debug, Clone, Copy)]
pub struct FixedGate(bool);

impl FixedGate {
    /// Gate that accepts every confirmation.
    #[must_use]
    pub const fn accepting() -> Self {
        Self(true)
    }

    /// Gate that declines every confirmation.
    #[must_use]
    pub const fn declining() -> Self {
        Self(false)
    }
}

impl ConfirmationGate for FixedGate {
    fn confirm(&self, _prompt: &str) -> bool {
        self.0
    }
}
