//! The APEX CPU: architectural state, the latch array, the active hazard
//! discipline, and the per-cycle driver loop.

use crate::common::error::SimError;
use crate::config::Discipline;
use crate::core::arch::{DataMemory, RegisterFile};
use crate::core::instruction::Instruction;
use crate::core::pipeline::{Forwarding, HazardResolver, Latches, Scoreboard};
use crate::core::stages;
use crate::stats::Stats;

pub struct Cpu {
    pub regs: RegisterFile,
    pub data_memory: DataMemory,
    pub z_flag: bool,
    pub pc: i32,

    pub code_memory: Vec<Instruction>,
    pub latches: Latches,
    pub hazard: Box<dyn HazardResolver>,

    pub clock: u64,
    pub cycle_budget: u64,
    pub ins_completed: u64,

    pub trace: bool,
    pub stats: Stats,
}

impl Cpu {
    pub fn new(code_memory: Vec<Instruction>, discipline: Discipline, cycles: u64, trace: bool) -> Self {
        let hazard: Box<dyn HazardResolver> = match discipline {
            Discipline::Stall => Box::new(Scoreboard::new()),
            Discipline::Forward => Box::new(Forwarding),
        };

        Self {
            regs: RegisterFile::new(),
            data_memory: DataMemory::new(),
            z_flag: false,
            pc: stages::fetch::PC_BASE,
            code_memory,
            latches: Latches::new(),
            hazard,
            clock: 0,
            cycle_budget: cycles,
            ins_completed: 0,
            trace,
            stats: Stats::default(),
        }
    }

    pub fn discipline_name(&self) -> &'static str {
        self.hazard.name()
    }

    /// Runs the cycle loop until the budget is exhausted or HALT retires.
    ///
    /// Stages are invoked in reverse pipeline order — Writeback, Memory,
    /// Execute, Decode, Fetch — so each stage observes the previous cycle's
    /// downstream latches before this cycle's writes land on them.
    pub fn run(&mut self) -> Result<(), SimError> {
        while self.clock < self.cycle_budget {
            stages::write_back_stage(
                &mut self.latches,
                &mut self.regs,
                &mut self.z_flag,
                &mut self.ins_completed,
                self.hazard.as_mut(),
                self.trace,
            );
            stages::memory_stage(&mut self.latches, &mut self.data_memory, self.trace);
            stages::execute_stage(&mut self.latches, &mut self.pc, self.z_flag, self.trace)?;
            stages::decode_stage(&mut self.latches, &self.regs, self.z_flag, self.hazard.as_mut(), self.trace)?;
            stages::fetch_stage(
                &mut self.latches.fetch,
                &mut self.latches.drf,
                &self.latches.wb,
                &mut self.pc,
                &self.code_memory,
                &mut self.cycle_budget,
                self.clock,
                self.trace,
            );

            self.clock += 1;
            self.stats.cycles = self.clock;
            self.stats.instructions_retired = self.ins_completed;
        }
        Ok(())
    }
}
