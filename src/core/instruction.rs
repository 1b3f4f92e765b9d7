//! The decoded instruction record and its opcode tag.

use std::fmt;

/// The closed set of opcodes the APEX pipeline understands.
///
/// `Bubble` is the in-pipeline NOP inserted by stalls and the control-flow
/// unit; it never appears in a loaded program. `Halt` is the terminator.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Opcode {
    Movc,
    Add,
    Sub,
    Mul,
    And,
    Or,
    ExOr,
    Load,
    Store,
    Bz,
    Bnz,
    Jump,
    Halt,
    Bubble,
}

impl Opcode {
    /// Whether this opcode reads `rs1` at Decode.
    pub fn reads_rs1(self) -> bool {
        matches!(
            self,
            Opcode::Add
                | Opcode::Sub
                | Opcode::Mul
                | Opcode::And
                | Opcode::Or
                | Opcode::ExOr
                | Opcode::Load
                | Opcode::Store
                | Opcode::Jump
        )
    }

    /// Whether this opcode reads `rs2` at Decode.
    pub fn reads_rs2(self) -> bool {
        matches!(
            self,
            Opcode::Add | Opcode::Sub | Opcode::Mul | Opcode::And | Opcode::Or | Opcode::ExOr | Opcode::Store
        )
    }

    /// Whether this opcode reads the Z flag at Decode (to resolve a branch).
    pub fn reads_z(self) -> bool {
        matches!(self, Opcode::Bz | Opcode::Bnz)
    }

    /// Whether this opcode writes `rd` at Writeback.
    pub fn writes_rd(self) -> bool {
        matches!(
            self,
            Opcode::Movc
                | Opcode::Add
                | Opcode::Sub
                | Opcode::Mul
                | Opcode::And
                | Opcode::Or
                | Opcode::ExOr
                | Opcode::Load
        )
    }

    /// Whether this opcode updates the Z flag at Writeback.
    pub fn updates_z(self) -> bool {
        matches!(self, Opcode::Add | Opcode::Sub | Opcode::Mul)
    }

    /// Whether this opcode is a control-flow instruction handled by EX.
    pub fn is_branch_or_jump(self) -> bool {
        matches!(self, Opcode::Bz | Opcode::Bnz | Opcode::Jump)
    }
}

impl fmt::Display for Opcode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Opcode::Movc => "MOVC",
            Opcode::Add => "ADD",
            Opcode::Sub => "SUB",
            Opcode::Mul => "MUL",
            Opcode::And => "AND",
            Opcode::Or => "OR",
            Opcode::ExOr => "EX-OR",
            Opcode::Load => "LOAD",
            Opcode::Store => "STORE",
            Opcode::Bz => "BZ",
            Opcode::Bnz => "BNZ",
            Opcode::Jump => "JUMP",
            Opcode::Halt => "HALT",
            Opcode::Bubble => "BUBBLE",
        };
        f.write_str(s)
    }
}

/// An immutable decoded instruction as produced by the loader.
///
/// Register fields are `None` when the opcode does not use them; `imm` is
/// simply `0` when unused, since every opcode that omits it also never
/// reads it.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Instruction {
    pub opcode: Opcode,
    pub rd: Option<u8>,
    pub rs1: Option<u8>,
    pub rs2: Option<u8>,
    pub imm: i32,
}

impl Instruction {
    pub fn bubble() -> Self {
        Self {
            opcode: Opcode::Bubble,
            rd: None,
            rs1: None,
            rs2: None,
            imm: 0,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::Opcode;

    const ALL_OPCODES: [Opcode; 14] = [
        Opcode::Movc,
        Opcode::Add,
        Opcode::Sub,
        Opcode::Mul,
        Opcode::And,
        Opcode::Or,
        Opcode::ExOr,
        Opcode::Load,
        Opcode::Store,
        Opcode::Bz,
        Opcode::Bnz,
        Opcode::Jump,
        Opcode::Halt,
        Opcode::Bubble,
    ];

    /// Exhaustive, wildcard-free match over every `Opcode` variant. If a
    /// variant is ever added to the enum without a corresponding arm here,
    /// this function fails to compile — the compile-time guard the stage
    /// modules' own exhaustive `Opcode` matches rely on.
    fn mnemonic(op: Opcode) -> &'static str {
        match op {
            Opcode::Movc => "MOVC",
            Opcode::Add => "ADD",
            Opcode::Sub => "SUB",
            Opcode::Mul => "MUL",
            Opcode::And => "AND",
            Opcode::Or => "OR",
            Opcode::ExOr => "EX-OR",
            Opcode::Load => "LOAD",
            Opcode::Store => "STORE",
            Opcode::Bz => "BZ",
            Opcode::Bnz => "BNZ",
            Opcode::Jump => "JUMP",
            Opcode::Halt => "HALT",
            Opcode::Bubble => "BUBBLE",
        }
    }

    #[test]
    fn no_unhandled_opcode() {
        for op in ALL_OPCODES {
            assert_eq!(mnemonic(op), op.to_string());
        }
    }
}
