//! Simulator configuration, loaded from an optional TOML file via
//! `--config` and layered under the CLI's own flags.

use serde::Deserialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Discipline {
    Stall,
    Forward,
}

impl Default for Discipline {
    fn default() -> Self {
        Discipline::Stall
    }
}

impl std::str::FromStr for Discipline {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "stall" => Ok(Discipline::Stall),
            "forward" => Ok(Discipline::Forward),
            other => Err(format!("unknown discipline '{other}', expected 'stall' or 'forward'")),
        }
    }
}

#[derive(Debug, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub discipline: Discipline,

    #[serde(default)]
    pub trace: bool,

    /// Print the final register/memory state dump after the run completes.
    #[serde(default = "default_true")]
    pub show_final_state: bool,

    /// Print cycle/stall statistics after the run completes.
    #[serde(default = "default_true")]
    pub show_stats: bool,

    /// Mirrors the reference source's `ENABLE_COUNTING` switch: an opt-in
    /// diagnostic, off by default, with no effect on simulated behavior.
    #[serde(default)]
    pub counting_mode: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            discipline: Discipline::default(),
            trace: false,
            show_final_state: true,
            show_stats: true,
            counting_mode: false,
        }
    }
}

fn default_true() -> bool {
    true
}
