//! # Ports Layer (Middle Hexagon)
//!
//! Trait definitions between the family core and the surrounding ledger.
//!
//! - **Driving port (inbound)**: [`TransactionFamily`] - how the ledger
//!   hands ordered transactions to this family.
//! - **Driven port (outbound)**: [`StateStore`] - how the family reads and
//!   writes replicated key/value state.
//!
//! No concrete implementations in this module.

pub mod inbound;
pub mod outbound;

pub use inbound::*;
pub use outbound::*;
