//! # Driving Port (Inbound): Transaction Family
//!
//! The surface the surrounding ledger registers and drives. A family is a
//! capability pair {validate, apply} named by a family tag; the ledger
//! delivers already-ordered, already-authenticated transactions one at a
//! time and commits or discards the write scope based on the result.

use crate::domain::action::PlayPayload;
use crate::errors::FamilyError;

/// A registered transaction family: named validate-and-apply logic.
pub trait TransactionFamily: Send + Sync {
    /// Registration tag for this family.
    fn family_name(&self) -> &'static str;

    /// Validate one transaction against current state and, if admitted,
    /// apply it. On success the store has been updated exactly once for the
    /// target key; on rejection or fault the store is untouched.
    ///
    /// # Errors
    ///
    /// - [`FamilyError::Rejected`] with the rejection reason; non-fatal,
    ///   the transaction is reported rejected.
    /// - [`FamilyError::Store`] on store faults; the enclosing ledger
    ///   transaction must abort.
    fn apply_transaction(&self, requester: &str, payload: &PlayPayload) -> Result<(), FamilyError>;
}
