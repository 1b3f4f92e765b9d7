//! Simulation statistics: cycle/instruction counts and a stall-cause
//! breakdown, printed after the run completes.

use std::time::Instant;

pub struct Stats {
    start_time: Instant,
    pub cycles: u64,
    pub instructions_retired: u64,

    pub stalls_data_hazard: u64,
    pub stalls_control: u64,
    pub stalls_mul: u64,
}

impl Default for Stats {
    fn default() -> Self {
        Self {
            start_time: Instant::now(),
            cycles: 0,
            instructions_retired: 0,
            stalls_data_hazard: 0,
            stalls_control: 0,
            stalls_mul: 0,
        }
    }
}

impl Stats {
    pub fn print(&self) {
        let duration = self.start_time.elapsed();
        let seconds = duration.as_secs_f64();

        let cyc = if self.cycles == 0 { 1 } else { self.cycles };
        let ipc = self.instructions_retired as f64 / cyc as f64;

        println!("\n==========================================================");
        println!("APEX SIMULATION STATISTICS");
        println!("==========================================================");
        println!("host_seconds             {:.4} s", seconds);
        println!("sim_cycles               {}", self.cycles);
        println!("sim_insts                {}", self.instructions_retired);
        println!("sim_ipc                  {:.4}", ipc);
        println!("----------------------------------------------------------");
        println!("STALL BREAKDOWN");
        println!(
            "  stalls.data_hazard     {} ({:.2}%)",
            self.stalls_data_hazard,
            (self.stalls_data_hazard as f64 / cyc as f64) * 100.0
        );
        println!(
            "  stalls.control         {} ({:.2}%)",
            self.stalls_control,
            (self.stalls_control as f64 / cyc as f64) * 100.0
        );
        println!(
            "  stalls.mul             {} ({:.2}%)",
            self.stalls_mul,
            (self.stalls_mul as f64 / cyc as f64) * 100.0
        );
        println!("==========================================================");
    }
}
