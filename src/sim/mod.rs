//! The simulation harness: the assembly loader and the final state display.

/// The final-state dump (registers, Z flag, data memory window).
pub mod display;

/// The assembly-text loader.
pub mod loader;
