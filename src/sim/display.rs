//! The final-state dump: registers, Z flag, and the leading window of data
//! memory, printed once the cycle loop ends.

use crate::core::arch::{DataMemory, RegisterFile};

const MEMORY_DUMP_WORDS: usize = 100;

pub fn dump_final_state(
    regs: &RegisterFile,
    data_memory: &DataMemory,
    z_flag: bool,
    discipline: &str,
    validity: Option<([bool; 16], bool)>,
) {
    println!("\n==========================================================");
    println!("APEX FINAL STATE ({discipline} discipline)");
    println!("==========================================================");
    match validity {
        Some((_, z_valid)) => println!("Z flag: {} [{}]", z_flag, if z_valid { "valid" } else { "stale" }),
        None => println!("Z flag: {}", z_flag),
    }
    println!("----------------------------------------------------------");
    regs.dump_with_validity(validity.map(|(v, _)| v).as_ref());
    println!("----------------------------------------------------------");
    println!("Data Memory (first {MEMORY_DUMP_WORDS} words)");
    for (addr, word) in data_memory.window(MEMORY_DUMP_WORDS).iter().enumerate() {
        if *word != 0 {
            println!("  MEM[{addr:<4}] = {word}");
        }
    }
    println!("==========================================================");
}
