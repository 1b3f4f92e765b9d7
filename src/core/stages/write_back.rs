//! Writeback: commits the writer's value, updates the Z flag, retires the
//! instruction, and notifies the hazard resolver.

use crate::core::arch::RegisterFile;
use crate::core::instruction::Opcode;
use crate::core::pipeline::{HazardResolver, Latches};

/// Whether a later in-flight ADD/SUB/MUL will overwrite the Z flag again
/// before this one's update would be observed — Z is a single global flag,
/// not per-register, so any updater downstream shadows it regardless of
/// destination register.
fn z_shadowed(latches: &Latches) -> bool {
    latches.ex.opcode.updates_z() || latches.mem.opcode.updates_z()
}

pub fn write_back_stage(
    latches: &mut Latches,
    regs: &mut RegisterFile,
    z_flag: &mut bool,
    ins_completed: &mut u64,
    hazard: &mut dyn HazardResolver,
    trace: bool,
) {
    if latches.wb.busy {
        return;
    }

    let wb = latches.wb.clone();

    if wb.opcode.writes_rd() {
        if let Some(rd) = wb.rd {
            regs.write(rd, wb.buffer);
            hazard.retire(Some(rd), latches);
        }
    }

    if wb.opcode.updates_z() && !z_shadowed(latches) {
        *z_flag = wb.buffer == 0;
        hazard.mark_z_valid();
    }

    if wb.opcode != Opcode::Bubble {
        *ins_completed += 1;
    }

    if trace {
        eprintln!("WB     pc={} opcode={}", wb.pc, wb.opcode);
    }

    if wb.opcode == Opcode::Halt {
        latches.wb.opcode = Opcode::Bubble;
    }
}
