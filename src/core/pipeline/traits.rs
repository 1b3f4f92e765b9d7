//! The hazard-resolver interface.
//!
//! Decode's register-read step is the one place the two documented
//! disciplines ("scoreboard stall" and "forwarding") genuinely differ. Both
//! are expressed as implementations of `HazardResolver`, selected once at
//! startup and held as a trait object on the `Cpu` — there is no duplicated
//! stage code path per variant.

use crate::core::arch::RegisterFile;
use crate::core::instruction::Opcode;
use crate::core::pipeline::latches::Latches;

/// Result of a Decode attempt to read (or forward) an instruction's
/// operands.
pub enum DecodeOutcome {
    /// At least one source is not yet available; retry next cycle.
    Stall,
    /// Operands resolved; the instruction may be promoted to EX.
    Ready {
        rs1_value: i32,
        rs2_value: i32,
        z_snapshot: Option<bool>,
    },
}

pub trait HazardResolver: std::fmt::Debug {
    /// Attempt to resolve the operands of the instruction currently held in
    /// DRF. Called every cycle DRF holds a non-busy instruction, whether
    /// this is the first attempt or a retry of a previous stall.
    #[allow(clippy::too_many_arguments)]
    fn decode(
        &mut self,
        opcode: Opcode,
        rs1: Option<u8>,
        rs2: Option<u8>,
        rd: Option<u8>,
        regs: &RegisterFile,
        z_flag: bool,
        latches: &Latches,
    ) -> DecodeOutcome;

    /// Called from Writeback once a writer instruction's value has been
    /// committed to `regs[rd]`, so the discipline can update any bookkeeping
    /// it privately owns (the scoreboard's validity bits; a no-op under
    /// forwarding).
    fn retire(&mut self, rd: Option<u8>, latches: &Latches);

    /// Called from Writeback when an ADD/SUB/MUL's Z update was not
    /// shadowed by a later arithmetic instruction still in flight.
    fn mark_z_valid(&mut self);

    /// Discipline name, surfaced in the final state dump and `--discipline`.
    fn name(&self) -> &'static str;

    /// The register and Z-flag validity bits, for the final state dump.
    /// `None` under Variant B, which keeps no validity state of its own.
    fn validity_snapshot(&self) -> Option<([bool; 16], bool)> {
        None
    }
}

/// True if `latch` holds a writer instruction targeting `rd` — the
/// no-shadowing check shared by the scoreboard's retire step.
pub fn shadows(rd: u8, latch_rd: Option<u8>, latch_opcode: Opcode) -> bool {
    latch_opcode.writes_rd() && latch_rd == Some(rd)
}
