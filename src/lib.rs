//! APEX Pipeline Simulator.
//!
//! A cycle-accurate, in-order functional simulator for a small RISC-style
//! instructional processor: a fixed five-stage pipeline (Fetch, Decode/
//! Register-Read, Execute, Memory, Writeback) over a 16-entry integer
//! register file, a single Z flag, and a linear 4096-word data memory.
//!
//! # Architecture
//!
//! * **Core**: single-issue 5-stage in-order pipeline, stages invoked in
//!   reverse order each cycle to emulate simultaneous flip-flop latches.
//! * **Hazard resolution**: two interchangeable disciplines behind one
//!   trait — scoreboard stall and operand forwarding.
//!
//! # Modules
//!
//! * `common`: Shared error/fault types.
//! * `config`: TOML configuration for discipline selection and diagnostics.
//! * `core`: CPU core — architectural state, latches, hazard resolution,
//!   and the five stage functions.
//! * `sim`: The assembly loader and the final-state display.
//! * `stats`: Cycle/instruction statistics collection and reporting.

/// Shared types and error handling.
///
/// The single `SimError` enum covering configuration failures and fatal
/// runtime faults.
pub mod common;

/// Configuration system for hazard-discipline selection and diagnostics.
///
/// Loads and parses an optional TOML configuration file.
pub mod config;

/// CPU core implementation: architectural state, pipeline stages, and
/// hazard resolution.
///
/// Implements the 5-stage in-order pipeline (Fetch, Decode/Register-Read,
/// Execute, Memory, Writeback) and the two hazard-resolution disciplines.
pub mod core;

/// Simulation harness: the assembly-text loader and final-state display.
pub mod sim;

/// Statistics collection and reporting.
///
/// Tracks cycle counts, retired-instruction counts, and a stall-cause
/// breakdown.
pub mod stats;
