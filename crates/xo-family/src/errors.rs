//! # Error Types
//!
//! All error types for the XO transaction family.
//!
//! Two categories, deliberately kept apart:
//!
//! - [`InvalidPlay`]: validation rejections. Non-fatal, decided purely from
//!   the submitted play and the current stored state. The transaction is
//!   reported rejected with the reason; ledger state is unchanged.
//! - [`StoreError`]: state store failures. Fatal to the enclosing ledger
//!   transaction and propagated upward, never swallowed.

use thiserror::Error;

// =============================================================================
// VALIDATION REJECTIONS
// =============================================================================

/// Reasons a play is rejected during validation.
///
/// Every variant is a deterministic verdict: re-validating the same play
/// against the same stored state yields the same rejection.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum InvalidPlay {
    /// Envelope payload is missing a field required for its action kind.
    #[error("malformed action: {0}")]
    MalformedAction(String),

    /// Action kind is not one of the recognized verbs.
    #[error("unknown action: {0}")]
    UnknownAction(String),

    /// CREATE targets a name already present in the store.
    #[error("game already exists: {0}")]
    GameAlreadyExists(String),

    /// TAKE targets a name absent from the store.
    #[error("no such game: {0}")]
    NoSuchGame(String),

    /// TAKE targets a game whose status is terminal.
    #[error("game already over")]
    GameAlreadyOver,

    /// TAKE names a cell outside the board.
    #[error("invalid space: {0}")]
    InvalidSpace(u8),

    /// TAKE names a cell that already holds a mark.
    #[error("space already taken: {0}")]
    SpaceAlreadyTaken(u8),

    /// Requester is not the player whose turn it is, or holds no seat.
    #[error("not your turn: {0}")]
    NotYourTurn(String),
}

// =============================================================================
// STORE ERRORS
// =============================================================================

/// Errors from the state store port.
///
/// These abort the enclosing ledger transaction with no partial write.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum StoreError {
    /// Underlying store I/O failure.
    #[error("state store failure: {0}")]
    Io(String),

    /// A store lock was poisoned by a panicking writer.
    #[error("state store lock poisoned")]
    LockPoisoned,

    /// A stored value failed to decode as a game state.
    #[error("corrupted state under key '{key}': {detail}")]
    CorruptedState {
        /// Store key holding the undecodable value.
        key: String,
        /// Decoder diagnostic.
        detail: String,
    },
}

// =============================================================================
// FAMILY ERRORS
// =============================================================================

/// Umbrella error for the `validate_and_apply` entry point.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum FamilyError {
    /// The play was rejected during validation; state is untouched.
    #[error("transaction rejected: {0}")]
    Rejected(#[from] InvalidPlay),

    /// The state store failed; the enclosing transaction must abort.
    #[error(transparent)]
    Store(#[from] StoreError),
}

impl FamilyError {
    /// Returns true if this is a validation rejection rather than a fault.
    #[must_use]
    pub fn is_rejection(&self) -> bool {
        matches!(self, Self::Rejected(_))
    }

    /// The rejection reason, if this is a rejection.
    #[must_use]
    pub fn rejection(&self) -> Option<&InvalidPlay> {
        match self {
            Self::Rejected(reason) => Some(reason),
            Self::Store(_) => None,
        }
    }
}

// =============================================================================
// TESTS
// =============================================================================
