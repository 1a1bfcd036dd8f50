//! # Driven Port (Outbound): State Store
//!
//! The replicated key/value store the surrounding ledger exposes to
//! transaction families. Keys are game names, values are encoded
//! `GameState` bytes. Reads and writes are synchronous within one
//! transaction's scope; atomicity and commit ordering are the ledger's
//! concern, not this port's.

use crate::errors::StoreError;

/// Key/value state access for one ledger transaction.
///
/// Implementations must present a read-then-write snapshot per transaction:
/// a `get` observes the latest committed value, and a `set` lands in the
/// enclosing transaction's write scope. The family never caches state
/// across invocations, so every call re-reads through this port.
pub trait StateStore: Send + Sync {
    /// Read the value under `key`, if present.
    ///
    /// # Errors
    ///
    /// [`StoreError`] on any store fault; fatal to the enclosing
    /// transaction.
    fn get(&self, key: &str) -> Result<Option<Vec<u8>>, StoreError>;

    /// Write `value` under `key`, replacing any prior value.
    ///
    /// # Errors
    ///
    /// [`StoreError`] on any store fault; fatal to the enclosing
    /// transaction.
    fn set(&self, key: &str, value: Vec<u8>) -> Result<(), StoreError>;
}

/// A shared handle to a store is itself a store, letting the ledger and the
/// family hold the same state through `Arc`.
impl<S: StateStore + ?Sized> StateStore for std::sync::Arc<S> {
    fn get(&self, key: &str) -> Result<Option<Vec<u8>>, StoreError> {
        (**self).get(key)
    }

    fn set(&self, key: &str, value: Vec<u8>) -> Result<(), StoreError> {
        (**self).set(key, value)
    }
}
