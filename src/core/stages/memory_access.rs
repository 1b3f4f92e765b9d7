//! Memory: LOAD/STORE pass-through against data memory.

use crate::core::arch::DataMemory;
use crate::core::instruction::Opcode;
use crate::core::pipeline::{Latches, StageLatch};

pub fn memory_stage(latches: &mut Latches, data_memory: &mut DataMemory, trace: bool) {
    if latches.mem.busy {
        return;
    }
    if latches.mem.stalled {
        // HALT occupies MEM permanently once admitted.
        return;
    }

    let mut mem = latches.mem.clone();

    match mem.opcode {
        Opcode::Load => {
            mem.buffer = data_memory.read(mem.mem_address);
            if trace {
                eprintln!("MEM    pc={} opcode=LOAD addr={} value={}", mem.pc, mem.mem_address, mem.buffer);
            }
        }
        Opcode::Store => {
            data_memory.write(mem.mem_address, mem.rs2_value);
            if trace {
                eprintln!("MEM    pc={} opcode=STORE addr={} value={}", mem.pc, mem.mem_address, mem.rs2_value);
            }
        }
        Opcode::Halt => {
            mem.stalled = true;
        }
        Opcode::Movc
        | Opcode::Add
        | Opcode::Sub
        | Opcode::Mul
        | Opcode::And
        | Opcode::Or
        | Opcode::ExOr
        | Opcode::Bz
        | Opcode::Bnz
        | Opcode::Jump
        | Opcode::Bubble => {}
    }

    // `stalled` is a per-stage flag, not part of the instruction's value —
    // MEM's own self-stall (HALT) must not carry into WB's latch.
    latches.wb = StageLatch { stalled: false, ..mem.clone() };
    latches.mem = mem;
}
