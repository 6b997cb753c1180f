//! Draft math for the assistant
//!
//! This module holds the pure computations the commands are built on:
//! - `availability`: chance a player survives until the caller's next pick
//! - `snake`: keeper and trade placement in a snake-draft pick sequence
//! - `board`: the full pick grid with trades and keepers applied

pub mod availability;
pub mod board;
pub mod snake;

// Re-export commonly used items for convenience
pub use availability::{
    apply_availability_discount, estimate, estimate_availability, normal_cdf,
    AvailabilityEstimate, DraftWindow, SigmaModel, DEFAULT_SIGMA,
};
pub use board::{BoardSlot, DraftBoard, SlotKind};
pub use snake::{
    keeper_pick_or_sentinel, resolve_keeper_pick, resolve_keepers, resolve_pick_trades,
    KeeperEntry, PickTrade, RoundDirection, TradeResolution, UNRESOLVED_PICK,
};
