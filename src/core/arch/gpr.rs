//! The APEX integer register file.
//!
//! Sixteen signed 32-bit registers. Unlike a RISC-V GPR file there is no
//! hardwired-zero register; every index 0..16 is an ordinary register.

const NUM_REGS: usize = 16;

/// General-purpose register file.
pub struct RegisterFile {
    regs: [i32; NUM_REGS],
}

impl RegisterFile {
    pub fn new() -> Self {
        Self {
            regs: [0; NUM_REGS],
        }
    }

    /// Reads a register value.
    ///
    /// # Panics
    ///
    /// Panics if `idx >= 16`; callers must validate register indices at
    /// Decode before reaching here (see `FatalFault` register-range checks).
    pub fn read(&self, idx: u8) -> i32 {
        self.regs[idx as usize]
    }

    pub fn write(&mut self, idx: u8, val: i32) {
        self.regs[idx as usize] = val;
    }

    /// Dumps all 16 registers, two per line, matching the final state dump
    /// format used by the CLI's display module.
    pub fn dump(&self) {
        self.dump_with_validity(None);
    }

    /// Same as `dump`, but appends a `[valid]`/`[stale]` tag after each
    /// register when a validity vector is supplied — Variant A's final
    /// state dump includes this, Variant B's does not.
    pub fn dump_with_validity(&self, valid: Option<&[bool; NUM_REGS]>) {
        for i in (0..NUM_REGS).step_by(2) {
            match valid {
                Some(v) => println!(
                    "R{:<2} = {:<12} [{}]   R{:<2} = {:<12} [{}]",
                    i,
                    self.regs[i],
                    if v[i] { "valid" } else { "stale" },
                    i + 1,
                    self.regs[i + 1],
                    if v[i + 1] { "valid" } else { "stale" },
                ),
                None => println!(
                    "R{:<2} = {:<12} R{:<2} = {:<12}",
                    i,
                    self.regs[i],
                    i + 1,
                    self.regs[i + 1]
                ),
            }
        }
    }
}

impl Default for RegisterFile {
    fn default() -> Self {
        Self::new()
    }
}
