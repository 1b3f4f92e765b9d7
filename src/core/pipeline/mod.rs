//! Pipeline latches and hazard resolution.
//!
//! The five stage implementations themselves live in `core::stages`; this
//! module holds only the inter-stage data (`latches`) and the
//! `HazardResolver` trait plus its two implementations (`hazards`).

/// The two hazard-resolution disciplines: scoreboard stall and forwarding.
pub mod hazards;

/// The single-entry stage latch and the five-stage latch array.
pub mod latches;

/// The `HazardResolver` trait.
pub mod traits;

pub use hazards::{Forwarding, Scoreboard};
pub use latches::{Latches, StageLatch};
pub use traits::{DecodeOutcome, HazardResolver};
