//! Exercises the opcodes the S1-S6 scenarios don't touch (bitwise ALU ops
//! and JUMP), so every opcode in the closed set runs through the pipeline
//! at least once under test.

use apex_sim::config::Discipline;
use apex_sim::core::Cpu;
use apex_sim::sim::loader;

fn run(program: &str, discipline: Discipline, cycles: u64) -> Cpu {
    let code = loader::load_program(program).expect("program should parse");
    let mut cpu = Cpu::new(code, discipline, cycles, false);
    cpu.run().expect("program should run to completion without a fatal fault");
    cpu
}

#[test]
fn bitwise_alu_ops() {
    let program = "MOVC,R1,#6\nMOVC,R2,#3\nAND,R3,R1,R2\nOR,R4,R1,R2\nEX-OR,R5,R1,R2\nHALT\n";
    for discipline in [Discipline::Stall, Discipline::Forward] {
        let cpu = run(program, discipline, 30);
        assert_eq!(cpu.regs.read(3), 6 & 3);
        assert_eq!(cpu.regs.read(4), 6 | 3);
        assert_eq!(cpu.regs.read(5), 6 ^ 3);
    }
}

#[test]
fn jump_skips_exactly_one_instruction() {
    // R1 is loaded with the absolute address of the MOVC three instructions
    // down, so the jump target doesn't depend on any PC-relative arithmetic.
    let program = "MOVC,R1,#4012\nJUMP,R1,#0\nMOVC,R2,#99\nMOVC,R3,#7\nHALT\n";
    for discipline in [Discipline::Stall, Discipline::Forward] {
        let cpu = run(program, discipline, 30);
        assert_eq!(cpu.regs.read(2), 0, "MOVC R2 sits between JUMP and its target; must be skipped");
        assert_eq!(cpu.regs.read(3), 7);
    }
}

#[test]
fn bnz_branches_when_z_is_clear() {
    let program = "MOVC,R1,#1\nADD,R3,R1,R1\nBNZ,#8\nMOVC,R4,#99\nMOVC,R5,#7\nHALT\n";
    for discipline in [Discipline::Stall, Discipline::Forward] {
        let cpu = run(program, discipline, 30);
        assert_eq!(cpu.regs.read(4), 0, "Z is clear (2 != 0), so BNZ is taken and R4 is skipped");
        assert_eq!(cpu.regs.read(5), 7);
    }
}
