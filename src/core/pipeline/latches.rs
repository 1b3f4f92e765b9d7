//! Stage latches and the five-stage latch array.
//!
//! A single `StageLatch` type is reused for every stage (Fetch, DRF, EX,
//! MEM, WB), mirroring the source's uniform `CPU_Stage` struct — this
//! pipeline is single-issue, so unlike a superscalar design there is no
//! per-stage vector of entries, just one. Inter-stage propagation is a
//! value copy of the whole record; `busy` is never cleared explicitly by a
//! stage — it is overwritten to `false` the first time a latch value flows
//! in from upstream, since Fetch and bubble construction never set it.

use crate::core::instruction::{Instruction, Opcode};

#[derive(Clone, Debug)]
pub struct StageLatch {
    pub pc: i32,
    pub opcode: Opcode,
    pub rd: Option<u8>,
    pub rs1: Option<u8>,
    pub rs2: Option<u8>,
    pub imm: i32,
    pub rs1_value: i32,
    pub rs2_value: i32,
    pub buffer: i32,
    pub mem_address: i32,
    pub busy: bool,
    pub stalled: bool,
    /// Variant B only: the Z value this instruction resolved at Decode,
    /// captured so a later architectural Z update can't retroactively
    /// change a branch already in flight. `None` under Variant A, where
    /// Execute reads the architectural `z_flag` directly.
    pub z_snapshot: Option<bool>,
}

impl StageLatch {
    pub fn bubble() -> Self {
        Self {
            pc: 0,
            opcode: Opcode::Bubble,
            rd: None,
            rs1: None,
            rs2: None,
            imm: 0,
            rs1_value: 0,
            rs2_value: 0,
            buffer: 0,
            mem_address: 0,
            busy: false,
            stalled: false,
            z_snapshot: None,
        }
    }

    /// A pre-warm sentinel for the four downstream stages: inert until the
    /// first real (or bubble) instruction copies over it.
    pub fn pre_warm() -> Self {
        Self {
            busy: true,
            ..Self::bubble()
        }
    }

    pub fn from_instruction(pc: i32, inst: &Instruction) -> Self {
        Self {
            pc,
            opcode: inst.opcode,
            rd: inst.rd,
            rs1: inst.rs1,
            rs2: inst.rs2,
            imm: inst.imm,
            rs1_value: 0,
            rs2_value: 0,
            buffer: 0,
            mem_address: 0,
            busy: false,
            stalled: false,
            z_snapshot: None,
        }
    }
}

/// The five per-stage latches, indexed by pipeline position.
pub struct Latches {
    pub fetch: StageLatch,
    pub drf: StageLatch,
    pub ex: StageLatch,
    pub mem: StageLatch,
    pub wb: StageLatch,
}

impl Latches {
    pub fn new() -> Self {
        Self {
            fetch: StageLatch::bubble(),
            drf: StageLatch::pre_warm(),
            ex: StageLatch::pre_warm(),
            mem: StageLatch::pre_warm(),
            wb: StageLatch::pre_warm(),
        }
    }
}

impl Default for Latches {
    fn default() -> Self {
        Self::new()
    }
}
