//! # XO Transaction Family
//!
//! Deterministic validate-and-apply logic for a two-player board game on a
//! replicated ledger. Every validating node runs this core against the same
//! prior state and must arrive at the same verdict and successor state, or
//! consensus breaks; the game is the easy part, replay-safe determinism is
//! the contract.
//!
//! ## Purpose
//!
//! The surrounding ledger delivers totally-ordered, already-authenticated
//! transactions one at a time. This crate decides admission
//! (`domain::services::validate`), computes the successor state
//! (`domain::services::apply`), and performs exactly one store write per
//! accepted play. Transport, consensus, signing, and the storage engine are
//! external collaborators behind the ports.
//!
//! ## Domain Invariants
//!
//! | ID | Invariant | Enforcement Location |
//! |----|-----------|---------------------|
//! | 1 | Single winner per board | `domain/invariants.rs` - `check_single_winner()` |
//! | 2 | Turn alternation while in progress | `domain/invariants.rs` - `check_turn_alternation()` |
//! | 3 | Terminal states accept no moves | `domain/invariants.rs` - `check_terminal_lock()` |
//! | 4 | Marks only added, one per take | `domain/invariants.rs` - `check_monotonic_board()` |
//! | 5 | Status agrees with the rule engine | `domain/invariants.rs` - `check_status_consistency()` |
//! | 6 | Name and seat bindings immutable | `domain/invariants.rs` - `check_seat_stability()` |
//!
//! ## Determinism Rules
//!
//! - No randomness, no clock reads, no I/O beyond the store port.
//! - Validation is pure and idempotent; re-evaluation never changes a
//!   verdict.
//! - State is re-read from the store on every invocation, never cached
//!   across transactions.
//! - Logging is observational only and never influences control flow.
//!
//! ## Usage Example
//!
//! ```
//! use xo_family::prelude::*;
//!
//! let service = XoFamilyService::new(InMemoryStateStore::new(), FamilyConfig::default());
//!
//! service.validate_and_apply("alice", &PlayPayload::create("g1"))?;
//! service.validate_and_apply("alice", &PlayPayload::take("g1", 0))?;
//!
//! // Out-of-turn play is rejected with a typed reason; state is untouched.
//! let err = service
//!     .validate_and_apply("alice", &PlayPayload::take("g1", 1))
//!     .unwrap_err();
//! assert!(err.is_rejection());
//! # Ok::<(), xo_family::FamilyError>(())
//! ```

// Crate-level lints
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

// =============================================================================
// MODULES
// =============================================================================

pub mod adapters;
pub mod domain;
pub mod errors;
pub mod ports;
pub mod service;

pub use errors::{FamilyError, InvalidPlay, StoreError};

// =============================================================================
// PRELUDE
// =============================================================================

/// Convenient re-exports for common usage.
pub mod prelude {
    // Domain entities
    pub use crate::domain::entities::{GameState, GameStatus, Mark, Player, BOARD_CELLS};

    // Actions
    pub use crate::domain::action::{Action, Play, PlayPayload};

    // Rule engine
    pub use crate::domain::rules::{check_winner, is_draw, is_valid_space, WINNING_LINES};

    // Transitions
    pub use crate::domain::services::{apply, validate, Admitted, FamilyConfig};

    // Invariants
    pub use crate::domain::invariants::{
        check_single_winner, check_take_transition, limits, InvariantCheckResult,
        InvariantViolation,
    };

    // Ports
    pub use crate::ports::inbound::TransactionFamily;
    pub use crate::ports::outbound::StateStore;

    // Adapters
    pub use crate::adapters::InMemoryStateStore;

    // Service
    pub use crate::service::{FamilyStats, XoFamilyService, FAMILY_NAME};

    // Errors
    pub use crate::errors::{FamilyError, InvalidPlay, StoreError};
}

// =============================================================================
// CRATE INFO
// =============================================================================

/// Crate version.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

// =============================================================================
// TESTS
// =============================================================================
