//! Type-safe wrappers for draft identifiers and league order.

pub mod ids;
pub mod order;
