//! Error and fault types shared across the simulator.
//!
//! The simulator distinguishes configuration-time failures (bad CLI input,
//! a malformed assembly file) from runtime faults raised by the pipeline
//! itself once a program is executing.

use std::fmt;

use crate::core::instruction::Opcode;

/// Top-level failure type for the simulator.
///
/// `Config` errors are raised before the cycle loop starts and abort with a
/// null simulator. `FatalFault` is raised mid-run by the Execute or Decode
/// stage and terminates the loop immediately; there is no recovery path.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum SimError {
    /// Missing or malformed input: file path, function selector, cycle
    /// count, assembly syntax, or config file.
    Config(String),
    /// A computed memory address or decoded register index fell outside
    /// its valid range.
    FatalFault { opcode: Opcode, message: String },
}

impl fmt::Display for SimError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SimError::Config(msg) => write!(f, "configuration error: {msg}"),
            SimError::FatalFault { opcode, message } => {
                write!(f, "fatal fault at {opcode:?}: {message}")
            }
        }
    }
}

impl std::error::Error for SimError {}
