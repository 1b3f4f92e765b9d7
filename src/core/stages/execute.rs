//! Execute: the single ALU/AGU/branch-resolution unit.

use crate::common::error::SimError;
use crate::core::arch::DataMemory;
use crate::core::instruction::Opcode;
use crate::core::pipeline::{Latches, StageLatch};

/// Overwrites DRF and Fetch with bubbles and redirects the PC — invoked
/// once per taken branch or jump. Exactly two wrong-path instructions are
/// discarded this way: the one already resident in DRF, and the one
/// sitting in Fetch's own latch waiting to be promoted. Fetch's `stalled`
/// bit additionally suppresses this cycle's read from code memory, so the
/// first instruction fetched at the new PC arrives next cycle.
fn flush_and_redirect(latches: &mut Latches, pc: &mut i32, target: i32) {
    latches.drf = StageLatch::bubble();
    latches.fetch = StageLatch::bubble();
    latches.fetch.stalled = true;
    *pc = target;
}

pub fn execute_stage(latches: &mut Latches, pc: &mut i32, z_flag: bool, trace: bool) -> Result<(), SimError> {
    if latches.ex.busy {
        return Ok(());
    }

    // Second cycle of a MUL: the product was already computed last cycle.
    // Release EX and DRF and move straight to MEM.
    if latches.ex.stalled && latches.ex.opcode == Opcode::Mul {
        latches.ex.stalled = false;
        latches.drf.stalled = false;
        latches.mem = latches.ex.clone();
        return Ok(());
    }

    if latches.ex.stalled {
        // HALT occupies EX permanently once admitted.
        return Ok(());
    }

    let mut ex = latches.ex.clone();
    let mut redirect = None;

    match ex.opcode {
        Opcode::Movc => ex.buffer = ex.imm,
        Opcode::Add => ex.buffer = ex.rs1_value.wrapping_add(ex.rs2_value),
        Opcode::Sub => ex.buffer = ex.rs1_value.wrapping_sub(ex.rs2_value),
        Opcode::And => ex.buffer = ex.rs1_value & ex.rs2_value,
        Opcode::Or => ex.buffer = ex.rs1_value | ex.rs2_value,
        Opcode::ExOr => ex.buffer = ex.rs1_value ^ ex.rs2_value,
        Opcode::Mul => {
            ex.buffer = ex.rs1_value.wrapping_mul(ex.rs2_value);
            ex.stalled = true;
            latches.drf.stalled = true;
            if trace {
                eprintln!("EX     pc={} opcode=MUL stall cycle 1", ex.pc);
            }
            latches.ex = ex;
            latches.mem = StageLatch::bubble();
            return Ok(());
        }
        Opcode::Load | Opcode::Store => {
            ex.mem_address = ex.rs1_value.wrapping_add(ex.imm);
            if !DataMemory::in_bounds(ex.mem_address) {
                return Err(SimError::FatalFault {
                    opcode: ex.opcode,
                    message: format!("data memory address {} out of range", ex.mem_address),
                });
            }
        }
        Opcode::Jump => {
            let target = ex.rs1_value.wrapping_add(ex.imm);
            if trace {
                eprintln!("EX     pc={} opcode=JUMP target={}", ex.pc, target);
            }
            redirect = Some(target);
        }
        Opcode::Bz | Opcode::Bnz => {
            let z = ex.z_snapshot.unwrap_or(z_flag);
            let taken = if ex.opcode == Opcode::Bz { z } else { !z };
            if taken {
                let target = ex.pc.wrapping_add(ex.imm);
                if trace {
                    eprintln!("EX     pc={} opcode={} taken target={}", ex.pc, ex.opcode, target);
                }
                redirect = Some(target);
            }
        }
        Opcode::Halt => {
            ex.stalled = true;
        }
        Opcode::Bubble => {}
    }

    latches.ex = ex.clone();
    // `stalled` is a per-stage flag, not part of the instruction's value —
    // EX's own self-stall (HALT) must not carry into MEM's latch.
    ex.stalled = false;
    latches.mem = ex;
    if let Some(target) = redirect {
        flush_and_redirect(latches, pc, target);
    }
    Ok(())
}
