//! The two hazard-resolution disciplines: scoreboard stall (Variant A) and
//! operand forwarding (Variant B).

use crate::core::arch::RegisterFile;
use crate::core::instruction::Opcode;
use crate::core::pipeline::latches::{Latches, StageLatch};
use crate::core::pipeline::traits::{shadows, DecodeOutcome, HazardResolver};

/// Variant A. Every register and the Z flag carries a validity bit; a reader
/// stalls until its source's bit is set. The bits live here, not on
/// architectural state, since Variant B never references them.
#[derive(Debug)]
pub struct Scoreboard {
    regs_valid: [bool; 16],
    z_flag_valid: bool,
}

impl Scoreboard {
    pub fn new() -> Self {
        Self {
            regs_valid: [true; 16],
            z_flag_valid: true,
        }
    }
}

impl Default for Scoreboard {
    fn default() -> Self {
        Self::new()
    }
}

impl HazardResolver for Scoreboard {
    fn decode(
        &mut self,
        opcode: Opcode,
        rs1: Option<u8>,
        rs2: Option<u8>,
        rd: Option<u8>,
        regs: &RegisterFile,
        z_flag: bool,
        _latches: &Latches,
    ) -> DecodeOutcome {
        // Z validity is cleared unconditionally on every Decode attempt of
        // an instruction that will update it, whether this is the first
        // attempt or a stalled retry — clearing-to-false is idempotent.
        if opcode.updates_z() {
            self.z_flag_valid = false;
        }

        if opcode.reads_z() && !self.z_flag_valid {
            return DecodeOutcome::Stall;
        }
        if let Some(r) = rs1 {
            if opcode.reads_rs1() && !self.regs_valid[r as usize] {
                return DecodeOutcome::Stall;
            }
        }
        if let Some(r) = rs2 {
            if opcode.reads_rs2() && !self.regs_valid[r as usize] {
                return DecodeOutcome::Stall;
            }
        }

        // Only a successful read clears the writer's own destination bit —
        // not merely entry into DRF.
        if let Some(r) = rd {
            if opcode.writes_rd() {
                self.regs_valid[r as usize] = false;
            }
        }

        let rs1_value = rs1.filter(|_| opcode.reads_rs1()).map(|r| regs.read(r)).unwrap_or(0);
        let rs2_value = rs2.filter(|_| opcode.reads_rs2()).map(|r| regs.read(r)).unwrap_or(0);
        let z_snapshot = opcode.reads_z().then_some(z_flag);

        DecodeOutcome::Ready {
            rs1_value,
            rs2_value,
            z_snapshot,
        }
    }

    fn retire(&mut self, rd: Option<u8>, latches: &Latches) {
        let Some(r) = rd else { return };
        let shadowed = shadows(r, latches.ex.rd, latches.ex.opcode) || shadows(r, latches.mem.rd, latches.mem.opcode);
        if !shadowed {
            self.regs_valid[r as usize] = true;
        }
    }

    fn mark_z_valid(&mut self) {
        self.z_flag_valid = true;
    }

    fn name(&self) -> &'static str {
        "scoreboard"
    }

    fn validity_snapshot(&self) -> Option<([bool; 16], bool)> {
        Some((self.regs_valid, self.z_flag_valid))
    }
}

/// Variant B. Stateless: every Decode searches the EX and WB latches
/// directly for a writer instruction whose `rd` matches, rather than
/// consulting any bookkeeping of its own.
#[derive(Debug, Default)]
pub struct Forwarding;

enum Lookup {
    Value(i32),
    LoadPending,
    NotFound,
}

/// Whether `opcode` is a candidate source for forwarding — excludes
/// control-flow instructions and Store, neither of which produces a value
/// for a later reader.
fn is_forwarding_writer(opcode: Opcode) -> bool {
    !matches!(
        opcode,
        Opcode::Bubble | Opcode::Store | Opcode::Bz | Opcode::Bnz | Opcode::Jump
    )
}

/// Searches EX (this cycle's freshly computed result, since EX already ran
/// earlier this same cycle) then WB (also already fresh this cycle) for a
/// writer targeting `reg`.
fn forward_lookup(reg: u8, latches: &Latches) -> Lookup {
    if is_forwarding_writer(latches.ex.opcode) && latches.ex.rd == Some(reg) {
        return if latches.ex.opcode == Opcode::Load {
            Lookup::LoadPending
        } else {
            Lookup::Value(latches.ex.buffer)
        };
    }
    if is_forwarding_writer(latches.wb.opcode) && latches.wb.rd == Some(reg) {
        return Lookup::Value(latches.wb.buffer);
    }
    Lookup::NotFound
}

/// Snapshots the Z value a BZ/BNZ in Decode should resolve against: the
/// nearest in-flight ADD/SUB/MUL (EX before WB), falling back to the
/// architectural flag if neither holds one.
fn resolve_z_forward(latches: &Latches, z_flag: bool) -> bool {
    if latches.ex.opcode.updates_z() {
        return latches.ex.buffer == 0;
    }
    if latches.wb.opcode.updates_z() {
        return latches.wb.buffer == 0;
    }
    z_flag
}

impl HazardResolver for Forwarding {
    fn decode(
        &mut self,
        opcode: Opcode,
        rs1: Option<u8>,
        rs2: Option<u8>,
        _rd: Option<u8>,
        regs: &RegisterFile,
        z_flag: bool,
        latches: &Latches,
    ) -> DecodeOutcome {
        let mut rs1_value = 0;
        if let Some(r) = rs1.filter(|_| opcode.reads_rs1()) {
            match forward_lookup(r, latches) {
                Lookup::Value(v) => rs1_value = v,
                Lookup::LoadPending => return DecodeOutcome::Stall,
                Lookup::NotFound => rs1_value = regs.read(r),
            }
        }

        let mut rs2_value = 0;
        if let Some(r) = rs2.filter(|_| opcode.reads_rs2()) {
            match forward_lookup(r, latches) {
                Lookup::Value(v) => rs2_value = v,
                Lookup::LoadPending => return DecodeOutcome::Stall,
                Lookup::NotFound => rs2_value = regs.read(r),
            }
        }

        let z_snapshot = opcode.reads_z().then(|| resolve_z_forward(latches, z_flag));

        DecodeOutcome::Ready {
            rs1_value,
            rs2_value,
            z_snapshot,
        }
    }

    fn retire(&mut self, _rd: Option<u8>, _latches: &Latches) {}

    fn mark_z_valid(&mut self) {}

    fn name(&self) -> &'static str {
        "forwarding"
    }
}
