//! Scheduler drivers and run metrics.
//!
//! Four disciplines, each a pure function of an immutable process slice:
//!
//! | Algorithm | Driver | Order |
//! |-----------|--------|-------|
//! | FCFS | [`NonPreemptiveScheduler::fcfs`] | input order |
//! | SJF | [`NonPreemptiveScheduler::sjf`] | ascending burst |
//! | Priority | [`NonPreemptiveScheduler::priority`] | ascending priority |
//! | Round-robin | [`RoundRobinScheduler`] | FIFO ready queue, fixed quantum |
//!
//! All drivers share the [`TimingAccumulator`] and report a [`RunSummary`].

mod accumulator;
mod kpi;
mod round_robin;
mod sequential;

use std::fmt;

use serde::{Deserialize, Serialize};
use tracing::info;

pub use accumulator::{Timing, TimingAccumulator};
pub use kpi::RunSummary;
pub use round_robin::RoundRobinScheduler;
pub use sequential::NonPreemptiveScheduler;

use crate::config::{SimulationConfig, ThroughputBasis};
use crate::models::{Process, Schedule};

/// The supported scheduling disciplines, in reporting order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Algorithm {
    Fcfs,
    Sjf,
    Priority,
    RoundRobin,
}

impl Algorithm {
    /// All algorithms in the order they are reported.
    pub const ALL: [Algorithm; 4] = [
        Algorithm::Fcfs,
        Algorithm::Sjf,
        Algorithm::Priority,
        Algorithm::RoundRobin,
    ];

    /// Report title.
    pub fn title(&self) -> &'static str {
        match self {
            Algorithm::Fcfs => "First-come, first-serve",
            Algorithm::Sjf => "Shortest-job-first",
            Algorithm::Priority => "Priority",
            Algorithm::RoundRobin => "Round-robin",
        }
    }

    /// Builds the driver for this algorithm.
    pub fn scheduler(&self, config: &SimulationConfig) -> Box<dyn CpuScheduler> {
        match self {
            Algorithm::Fcfs => Box::new(NonPreemptiveScheduler::fcfs().configured(config)),
            Algorithm::Sjf => Box::new(NonPreemptiveScheduler::sjf().configured(config)),
            Algorithm::Priority => {
                Box::new(NonPreemptiveScheduler::priority().configured(config))
            }
            Algorithm::RoundRobin => Box::new(RoundRobinScheduler::from_config(config)),
        }
    }
}

impl fmt::Display for Algorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.title())
    }
}

/// Outcome of one algorithm over one batch.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScheduleRun {
    pub algorithm: Algorithm,
    pub schedule: Schedule,
    pub summary: RunSummary,
}

/// A scheduling discipline.
pub trait CpuScheduler {
    fn algorithm(&self) -> Algorithm;

    /// Denominator used for the run's throughput.
    fn throughput_basis(&self) -> ThroughputBasis;

    /// Builds the execution record. Must not depend on anything but
    /// `processes` and the driver's own settings.
    fn schedule(&self, processes: &[Process]) -> Schedule;

    /// Schedules `processes` and summarises the result.
    fn run(&self, processes: &[Process]) -> ScheduleRun {
        let schedule = self.schedule(processes);
        let summary = RunSummary::calculate(&schedule, self.throughput_basis());
        info!(
            algorithm = %self.algorithm(),
            processes = summary.process_count,
            slices = schedule.slice_count(),
            average_waiting = summary.average_waiting,
            average_turnaround = summary.average_turnaround,
            throughput = summary.throughput,
            "schedule computed"
        );
        ScheduleRun {
            algorithm: self.algorithm(),
            schedule,
            summary,
        }
    }
}

/// Runs one algorithm over `processes`.
pub fn simulate(
    algorithm: Algorithm,
    processes: &[Process],
    config: &SimulationConfig,
) -> ScheduleRun {
    algorithm.scheduler(config).run(processes)
}

/// Runs every algorithm, in [`Algorithm::ALL`] order.
pub fn simulate_all(processes: &[Process], config: &SimulationConfig) -> Vec<ScheduleRun> {
    Algorithm::ALL
        .iter()
        .map(|&algorithm| simulate(algorithm, processes, config))
        .collect()
}
