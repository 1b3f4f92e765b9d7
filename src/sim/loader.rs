//! The assembly loader.
//!
//! Parses the simple `OPCODE,operand,operand,...` text format into decoded
//! `Instruction`s. Blank lines and lines starting with `#` are skipped;
//! everything else is exactly one instruction per line.

use crate::common::error::SimError;
use crate::core::instruction::{Instruction, Opcode};

fn parse_register(token: &str, opcode: Opcode) -> Result<u8, SimError> {
    let digits = token.strip_prefix('R').ok_or_else(|| SimError::Config(format!("expected register, got '{token}'")))?;
    digits.parse::<u8>().map_err(|_| {
        SimError::Config(format!(
            "invalid register '{token}' in {opcode} instruction"
        ))
    })
}

fn parse_immediate(token: &str, opcode: Opcode) -> Result<i32, SimError> {
    let digits = token
        .strip_prefix('#')
        .ok_or_else(|| SimError::Config(format!("expected immediate, got '{token}'")))?;
    digits
        .parse::<i32>()
        .map_err(|_| SimError::Config(format!("invalid immediate '{token}' in {opcode} instruction")))
}

fn opcode_from_mnemonic(mnemonic: &str) -> Result<Opcode, SimError> {
    Ok(match mnemonic {
        "MOVC" => Opcode::Movc,
        "ADD" => Opcode::Add,
        "SUB" => Opcode::Sub,
        "MUL" => Opcode::Mul,
        "AND" => Opcode::And,
        "OR" => Opcode::Or,
        "EX-OR" => Opcode::ExOr,
        "LOAD" => Opcode::Load,
        "STORE" => Opcode::Store,
        "BZ" => Opcode::Bz,
        "BNZ" => Opcode::Bnz,
        "JUMP" => Opcode::Jump,
        "HALT" => Opcode::Halt,
        other => return Err(SimError::Config(format!("unknown opcode '{other}'"))),
    })
}

fn parse_line(line: &str) -> Result<Instruction, SimError> {
    let fields: Vec<&str> = line.split(',').map(str::trim).collect();
    let opcode = opcode_from_mnemonic(fields[0])?;
    let ops = &fields[1..];

    let inst = match opcode {
        Opcode::Movc => Instruction {
            opcode,
            rd: Some(parse_register(ops[0], opcode)?),
            rs1: None,
            rs2: None,
            imm: parse_immediate(ops[1], opcode)?,
        },
        Opcode::Add | Opcode::Sub | Opcode::Mul | Opcode::And | Opcode::Or | Opcode::ExOr => Instruction {
            opcode,
            rd: Some(parse_register(ops[0], opcode)?),
            rs1: Some(parse_register(ops[1], opcode)?),
            rs2: Some(parse_register(ops[2], opcode)?),
            imm: 0,
        },
        Opcode::Load => Instruction {
            opcode,
            rd: Some(parse_register(ops[0], opcode)?),
            rs1: Some(parse_register(ops[1], opcode)?),
            rs2: None,
            imm: parse_immediate(ops[2], opcode)?,
        },
        Opcode::Store => Instruction {
            opcode,
            rd: None,
            rs1: Some(parse_register(ops[1], opcode)?),
            rs2: Some(parse_register(ops[0], opcode)?),
            imm: parse_immediate(ops[2], opcode)?,
        },
        Opcode::Bz | Opcode::Bnz => Instruction {
            opcode,
            rd: None,
            rs1: None,
            rs2: None,
            imm: parse_immediate(ops[0], opcode)?,
        },
        Opcode::Jump => Instruction {
            opcode,
            rd: None,
            rs1: Some(parse_register(ops[0], opcode)?),
            rs2: None,
            imm: parse_immediate(ops[1], opcode)?,
        },
        Opcode::Halt => Instruction {
            opcode,
            rd: None,
            rs1: None,
            rs2: None,
            imm: 0,
        },
        Opcode::Bubble => unreachable!("bubble never appears in a loaded program"),
    };

    Ok(inst)
}

/// Parses an assembly-text program into its instruction stream.
pub fn load_program(text: &str) -> Result<Vec<Instruction>, SimError> {
    let mut program = Vec::new();
    for raw_line in text.lines() {
        let line = raw_line.trim();
        if line.is_empty() || line.starts_with('#') {
            continue;
        }
        program.push(parse_line(line)?);
    }
    if program.is_empty() {
        return Err(SimError::Config("program contains no instructions".to_string()));
    }
    Ok(program)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_movc_and_add() {
        let program = load_program("MOVC,R1,#5\nADD,R3,R1,R2\n").unwrap();
        assert_eq!(program[0].opcode, Opcode::Movc);
        assert_eq!(program[0].rd, Some(1));
        assert_eq!(program[0].imm, 5);
        assert_eq!(program[1].opcode, Opcode::Add);
        assert_eq!(program[1].rs1, Some(1));
        assert_eq!(program[1].rs2, Some(2));
    }

    #[test]
    fn skips_blank_and_comment_lines() {
        let program = load_program("# comment\n\nHALT\n").unwrap();
        assert_eq!(program.len(), 1);
        assert_eq!(program[0].opcode, Opcode::Halt);
    }

    #[test]
    fn store_reads_value_then_base() {
        let program = load_program("STORE,R5,R2,#4\n").unwrap();
        assert_eq!(program[0].rs2, Some(5));
        assert_eq!(program[0].rs1, Some(2));
        assert_eq!(program[0].imm, 4);
    }

    #[test]
    fn rejects_unknown_opcode() {
        assert!(load_program("NOPE,R1\n").is_err());
    }

    #[test]
    fn rejects_empty_program() {
        assert!(load_program("# only a comment\n").is_err());
    }
}
