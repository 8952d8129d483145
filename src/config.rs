//! Simulation configuration.
//!
//! Defaults reproduce the classic behaviour (quantum 3, throughput over
//! the last computed completion). The binary reads overrides from the
//! environment so that the command line keeps a single positional argument.
//!
//! | Variable | Values | Default |
//! |----------|--------|---------|
//! | `SCHED_QUANTUM` | positive integer | `3` |
//! | `SCHED_THROUGHPUT` | `last-completion`, `makespan` | `last-completion` |
//! | `SCHED_ZERO_ARRIVAL` | `recompute`, `carry-forward` | `recompute` |

use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::{Result, SchedError};
use crate::models::Ticks;

pub const QUANTUM_VAR: &str = "SCHED_QUANTUM";
pub const THROUGHPUT_VAR: &str = "SCHED_THROUGHPUT";
pub const ZERO_ARRIVAL_VAR: &str = "SCHED_ZERO_ARRIVAL";

/// Denominator used for throughput.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ThroughputBasis {
    /// Completion of the last process the driver accounted for.
    #[default]
    LastCompletion,
    /// Latest completion across all rows.
    Makespan,
}

/// Waiting time assigned to a process that arrives at t=0.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ZeroArrivalPolicy {
    /// `max(0, clock - arrival)`, same as every other process.
    #[default]
    Recompute,
    /// Keep the waiting time of the previously scheduled process.
    CarryForward,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SimulationConfig {
    /// Round-robin time slice.
    pub quantum: Ticks,
    pub throughput: ThroughputBasis,
    pub zero_arrival: ZeroArrivalPolicy,
}

impl SimulationConfig {
    pub const DEFAULT_QUANTUM: Ticks = 3;

    /// Creates the default configuration.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the round-robin quantum.
    pub fn with_quantum(mut self, quantum: Ticks) -> Self {
        self.quantum = quantum;
        self
    }

    /// Sets the throughput denominator.
    pub fn with_throughput(mut self, throughput: ThroughputBasis) -> Self {
        self.throughput = throughput;
        self
    }

    /// Sets the zero-arrival waiting policy.
    pub fn with_zero_arrival(mut self, zero_arrival: ZeroArrivalPolicy) -> Self {
        self.zero_arrival = zero_arrival;
        self
    }

    /// Reads overrides from the process environment.
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|var| std::env::var(var).ok())
    }

    /// Reads overrides through `lookup`; unset variables keep defaults.
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self::default();

        if let Some(raw) = lookup(QUANTUM_VAR) {
            config.quantum = parse_quantum(&raw)?;
        }
        if let Some(raw) = lookup(THROUGHPUT_VAR) {
            config.throughput = parse_var(THROUGHPUT_VAR, &raw)?;
        }
        if let Some(raw) = lookup(ZERO_ARRIVAL_VAR) {
            config.zero_arrival = parse_var(ZERO_ARRIVAL_VAR, &raw)?;
        }

        Ok(config)
    }
}

impl Default for SimulationConfig {
    fn default() -> Self {
        Self {
            quantum: Self::DEFAULT_QUANTUM,
            throughput: ThroughputBasis::default(),
            zero_arrival: ZeroArrivalPolicy::default(),
        }
    }
}

impl FromStr for ThroughputBasis {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "last-completion" | "last" => Ok(Self::LastCompletion),
            "makespan" => Ok(Self::Makespan),
            _ => Err("expected 'last-completion' or 'makespan'".to_string()),
        }
    }
}

impl FromStr for ZeroArrivalPolicy {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "recompute" => Ok(Self::Recompute),
            "carry-forward" | "carry" => Ok(Self::CarryForward),
            _ => Err("expected 'recompute' or 'carry-forward'".to_string()),
        }
    }
}

fn parse_var<T: FromStr<Err = String>>(var: &'static str, raw: &str) -> Result<T> {
    raw.parse().map_err(|reason| SchedError::Config {
        var,
        value: raw.to_string(),
        reason,
    })
}

fn parse_quantum(raw: &str) -> Result<Ticks> {
    let invalid = |reason: String| SchedError::Config {
        var: QUANTUM_VAR,
        value: raw.to_string(),
        reason,
    };
    let quantum: Ticks = raw.trim().parse().map_err(|e| invalid(format!("{e}")))?;
    if quantum <= 0 {
        return Err(invalid("quantum must be positive".to_string()));
    }
    Ok(quantum)
}
