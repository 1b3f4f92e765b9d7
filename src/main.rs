//! APEX Pipeline Simulator CLI.

use clap::Parser;
use std::{fs, process};

extern crate apex_sim;

use apex_sim::config::{Config, Discipline};
use apex_sim::core::Cpu;
use apex_sim::sim::{display, loader};

/// Command-line arguments for the APEX pipeline simulator.
#[derive(Parser, Debug)]
#[command(author, version, about = "APEX Cycle-Accurate Pipeline Simulator")]
struct Args {
    /// Path to the assembly-text input file.
    input_file: String,

    /// `simulate` suppresses per-cycle tracing; anything else (conventionally
    /// `display`) enables it.
    function: String,

    /// Upper bound on cycles simulated.
    cycles: u64,

    #[arg(long, default_value = "stall")]
    discipline: Discipline,

    #[arg(long)]
    config: Option<String>,
}

fn load_config(path: &Option<String>) -> Config {
    let Some(path) = path else {
        return Config::default();
    };
    let content = fs::read_to_string(path).unwrap_or_else(|e| {
        eprintln!("[!] FATAL: could not read config '{path}': {e}");
        process::exit(1);
    });
    toml::from_str(&content).unwrap_or_else(|e| {
        eprintln!("[!] FATAL: could not parse config '{path}': {e}");
        process::exit(1);
    })
}

fn main() {
    let args = Args::parse();
    let config = load_config(&args.config);

    let program_text = fs::read_to_string(&args.input_file).unwrap_or_else(|e| {
        eprintln!("[!] FATAL: could not read input file '{}': {}", args.input_file, e);
        process::exit(1);
    });

    let code_memory = loader::load_program(&program_text).unwrap_or_else(|e| {
        eprintln!("[!] FATAL: {e}");
        process::exit(1);
    });

    let trace = config.trace || args.function != "simulate";
    let discipline = if args.config.is_some() { config.discipline } else { args.discipline };

    let mut cpu = Cpu::new(code_memory, discipline, args.cycles, trace);

    println!("APEX Pipeline Simulator");
    println!("-----------------------");
    println!("Input:      {}", args.input_file);
    println!("Function:   {}", args.function);
    println!("Cycles:     {}", args.cycles);
    println!("Discipline: {}", cpu.discipline_name());
    println!("-----------------------");

    if let Err(e) = cpu.run() {
        eprintln!("\n[!] FATAL FAULT: {e}");
        if config.show_final_state {
            display::dump_final_state(
            &cpu.regs,
            &cpu.data_memory,
            cpu.z_flag,
            cpu.discipline_name(),
            cpu.hazard.validity_snapshot(),
        );
        }
        process::exit(1);
    }

    if config.show_final_state {
        display::dump_final_state(
            &cpu.regs,
            &cpu.data_memory,
            cpu.z_flag,
            cpu.discipline_name(),
            cpu.hazard.validity_snapshot(),
        );
    }
    if config.show_stats {
        cpu.stats.print();
    }

    process::exit(0);
}
