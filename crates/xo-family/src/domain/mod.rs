//! # Domain Layer (Inner Hexagon)
//!
//! Pure game and transition logic. NO I/O, NO store access: everything in
//! this module is a total function of its arguments, which is what makes
//! the family deterministic across validating nodes.

pub mod action;
pub mod entities;
pub mod invariants;
pub mod rules;
pub mod services;

pub use action::*;
pub use entities::*;
pub use invariants::*;
pub use rules::*;
pub use services::*;
