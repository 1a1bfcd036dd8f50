//! # Family Service
//!
//! The single entry point the surrounding ledger drives: decode the payload,
//! re-read current state through the store port, run the pure validate and
//! apply transitions, write the successor back. One invocation per ordered
//! transaction, no state cached across invocations.

use crate::domain::action::{Play, PlayPayload};
use crate::domain::entities::GameState;
use crate::domain::services::{self, Admitted, FamilyConfig};
use crate::errors::{FamilyError, StoreError};
use crate::ports::inbound::TransactionFamily;
use crate::ports::outbound::StateStore;

use std::sync::RwLock;
use tracing::{debug, info, instrument};

/// Registration tag for this family.
pub const FAMILY_NAME: &str = "xo";

// =============================================================================
// STATISTICS
// =============================================================================

/// Observational counters for the service. Never consulted by the
/// transition logic, so they cannot perturb determinism.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct FamilyStats {
    /// Plays admitted and applied.
    pub plays_accepted: u64,
    /// Plays rejected during validation.
    pub plays_rejected: u64,
    /// Games created.
    pub games_created: u64,
    /// Games that reached a terminal status.
    pub games_finished: u64,
}

// =============================================================================
// SERVICE
// =============================================================================

/// The XO transaction family service.
///
/// Generic over the store port so the ledger can hand in its own state
/// handle; tests use [`crate::adapters::InMemoryStateStore`].
pub struct XoFamilyService<S: StateStore> {
    config: FamilyConfig,
    store: S,
    stats: RwLock<FamilyStats>,
}

impl<S: StateStore> XoFamilyService<S> {
    /// Create a service over `store` with the given transition policy.
    pub fn new(store: S, config: FamilyConfig) -> Self {
        Self {
            config,
            store,
            stats: RwLock::new(FamilyStats::default()),
        }
    }

    /// Current counters. Empty default if the stats lock was poisoned;
    /// counters are observational and must not surface faults.
    pub fn stats(&self) -> FamilyStats {
        self.stats.read().map(|s| *s).unwrap_or_default()
    }

    /// Validate one play against current stored state and, if admitted,
    /// apply it and write the successor state.
    ///
    /// Deterministic: given identical stored state and payload, every node
    /// computes the identical verdict and successor. Rejections leave the
    /// store untouched.
    ///
    /// # Errors
    ///
    /// - [`FamilyError::Rejected`]: the play failed validation; non-fatal.
    /// - [`FamilyError::Store`]: store fault or corrupt stored state; fatal
    ///   to the enclosing ledger transaction.
    #[instrument(skip(self, payload), fields(family = FAMILY_NAME, requester = %requester))]
    pub fn validate_and_apply(
        &self,
        requester: &str,
        payload: &PlayPayload,
    ) -> Result<(), FamilyError> {
        let play = match Play::from_payload(requester, payload) {
            Ok(play) => play,
            Err(reason) => {
                debug!(%reason, "play rejected before state lookup");
                self.count_rejected();
                return Err(reason.into());
            }
        };

        let current = self.read_state(&play.game_name)?;

        let admitted = match services::validate(current, &play, &self.config) {
            Ok(admitted) => admitted,
            Err(reason) => {
                debug!(game = %play.game_name, %reason, "play rejected");
                self.count_rejected();
                return Err(reason.into());
            }
        };

        let created = matches!(admitted, Admitted::Create);
        #[cfg(debug_assertions)]
        let prev = match &admitted {
            Admitted::Take { state, .. } => Some(state.clone()),
            Admitted::Create => None,
        };

        let next = services::apply(&play, admitted);

        #[cfg(debug_assertions)]
        if let Some(prev) = prev {
            debug_assert!(
                crate::domain::invariants::check_take_transition(&prev, &next).is_valid(),
                "accepted take violated a transition invariant"
            );
        }

        self.store.set(&play.game_name, next.encode()?)?;

        if created {
            info!(game = %play.game_name, "game created");
        } else if next.is_terminal() {
            info!(game = %play.game_name, status = ?next.status, "game finished");
        }
        self.count_accepted(created, next.is_terminal());
        Ok(())
    }

    /// Fetch and decode the stored state under `key`, if present.
    fn read_state(&self, key: &str) -> Result<Option<GameState>, StoreError> {
        match self.store.get(key)? {
            Some(bytes) => Ok(Some(GameState::decode(key, &bytes)?)),
            None => Ok(None),
        }
    }

    fn count_accepted(&self, created: bool, finished: bool) {
        if let Ok(mut stats) = self.stats.write() {
            stats.plays_accepted += 1;
            if created {
                stats.games_created += 1;
            }
            if finished {
                stats.games_finished += 1;
            }
        }
    }

    fn count_rejected(&self) {
        if let Ok(mut stats) = self.stats.write() {
            stats.plays_rejected += 1;
        }
    }
}

impl<S: StateStore> TransactionFamily for XoFamilyService<S> {
    fn family_name(&self) -> &'static str {
        FAMILY_NAME
    }

    fn apply_transaction(&self, requester: &str, payload: &PlayPayload) -> Result<(), FamilyError> {
        self.validate_and_apply(requester, payload)
    }
}

// =============================================================================
// TESTS
// =============================================================================
