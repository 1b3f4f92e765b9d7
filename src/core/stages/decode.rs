//! Decode/Register-Read (DRF): resolves operands via the active hazard
//! discipline and promotes the instruction into EX on success.

use crate::common::error::SimError;
use crate::core::arch::RegisterFile;
use crate::core::instruction::Opcode;
use crate::core::pipeline::{DecodeOutcome, HazardResolver, Latches};

/// Register fields are validated against the 16-entry file regardless of
/// discipline; an out-of-range index is a fatal fault, not a panic.
fn check_register_range(opcode: Opcode, reg: Option<u8>) -> Result<(), SimError> {
    if let Some(r) = reg {
        if r >= 16 {
            return Err(SimError::FatalFault {
                opcode,
                message: format!("register index {r} out of range"),
            });
        }
    }
    Ok(())
}

pub fn decode_stage(
    latches: &mut Latches,
    regs: &RegisterFile,
    z_flag: bool,
    hazard: &mut dyn HazardResolver,
    trace: bool,
) -> Result<(), SimError> {
    if latches.drf.busy {
        return Ok(());
    }
    // HALT, once admitted, never retries; DRF stays stalled with HALT
    // parked in EX forever after.
    if latches.drf.stalled && latches.drf.opcode == Opcode::Halt {
        return Ok(());
    }
    // EX is occupied for a second cycle by a MUL; DRF cannot promote into
    // it yet, so leave EX untouched and stay blocked.
    if latches.ex.stalled {
        return Ok(());
    }

    let opcode = latches.drf.opcode;
    check_register_range(opcode, latches.drf.rd)?;
    check_register_range(opcode, latches.drf.rs1)?;
    check_register_range(opcode, latches.drf.rs2)?;

    let outcome = hazard.decode(
        opcode,
        latches.drf.rs1,
        latches.drf.rs2,
        latches.drf.rd,
        regs,
        z_flag,
        latches,
    );

    match outcome {
        DecodeOutcome::Stall => {
            latches.drf.stalled = true;
        }
        DecodeOutcome::Ready {
            rs1_value,
            rs2_value,
            z_snapshot,
        } => {
            latches.drf.rs1_value = rs1_value;
            latches.drf.rs2_value = rs2_value;
            latches.drf.z_snapshot = z_snapshot;

            if trace {
                eprintln!("DRF    pc={} opcode={}", latches.drf.pc, latches.drf.opcode);
            }

            latches.ex = latches.drf.clone();
            latches.ex.stalled = false;

            if opcode == Opcode::Halt {
                latches.drf.stalled = true;
                latches.fetch.stalled = true;
            } else {
                latches.drf = crate::core::pipeline::StageLatch::bubble();
            }
        }
    }

    Ok(())
}
