//! Confirmation port for destructive commands.
//!
//! Clearing the whole pool asks first. The interactive adapter lives in the
//! presentation layer; the built-ins here serve scripts and tests.
//!
//! # Built-in Implementations
//!
//! - [`AutoConfirm`] - Always answers yes
//! - [`AutoDecline`] - Always answers no

/// Port for asking the user a yes/no question
pub trait ConfirmationPort: Send + Sync {
    /// Return `true` if the user agrees to `prompt`
    fn confirm(&self, prompt: &str) -> bool;
}

/// Answers every prompt with yes (`--yes`)
pub struct AutoConfirm;

impl ConfirmationPort for AutoConfirm {
    fn confirm(&self, _prompt: &str) -> bool {
        true
    }
}

/// Answers every prompt with no
pub struct AutoDecline;

impl ConfirmationPort for AutoDecline {
    fn confirm(&self, _prompt: &str) -> bool {
        false
    }
}
