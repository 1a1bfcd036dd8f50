//! # Adapters Layer (Outer Hexagon)
//!
//! Concrete implementations of the ports. In production the ledger supplies
//! the store; the in-memory adapter here backs tests and local development.

pub mod memory_store;

pub use memory_store::*;
