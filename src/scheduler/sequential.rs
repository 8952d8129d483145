//! Non-preemptive drivers (FCFS, SJF, priority).
//!
//! # Algorithm
//!
//! 1. Order process indices once with the driver's rule engine.
//! 2. Visit them in that order; each runs to completion in its slot.
//!
//! The caller's slice is only read; ordering happens on an index vector.
//!
//! # Complexity
//! O(n log n) for the sort, O(n) for the walk.

use crate::config::{SimulationConfig, ThroughputBasis, ZeroArrivalPolicy};
use crate::dispatching::{rules, RuleEngine};
use crate::models::{Process, Schedule};

use super::{Algorithm, CpuScheduler, TimingAccumulator};

/// A run-to-completion scheduler driven by a rule engine.
///
/// # Example
///
/// ```
/// use cpu_sched_sim::models::Process;
/// use cpu_sched_sim::scheduler::{CpuScheduler, NonPreemptiveScheduler};
///
/// let processes = vec![Process::new(1, 5, 0), Process::new(2, 3, 2)];
/// let run = NonPreemptiveScheduler::fcfs().run(&processes);
/// assert_eq!(run.schedule.rows[1].completion, 8);
/// ```
#[derive(Debug, Clone)]
pub struct NonPreemptiveScheduler {
    algorithm: Algorithm,
    rule_engine: RuleEngine,
    zero_arrival: ZeroArrivalPolicy,
    throughput: ThroughputBasis,
}

impl NonPreemptiveScheduler {
    /// Creates a scheduler that dispatches in `rule_engine` order.
    pub fn new(algorithm: Algorithm, rule_engine: RuleEngine) -> Self {
        Self {
            algorithm,
            rule_engine,
            zero_arrival: ZeroArrivalPolicy::default(),
            throughput: ThroughputBasis::default(),
        }
    }

    /// First-come-first-served: input order.
    pub fn fcfs() -> Self {
        Self::new(Algorithm::Fcfs, RuleEngine::new())
    }

    /// Shortest-job-first: ascending burst, ties in input order.
    pub fn sjf() -> Self {
        Self::new(
            Algorithm::Sjf,
            RuleEngine::new().with_rule(rules::ShortestBurst),
        )
    }

    /// Priority: ascending priority value, ties in input order.
    pub fn priority() -> Self {
        Self::new(
            Algorithm::Priority,
            RuleEngine::new().with_rule(rules::HighestPriority),
        )
    }

    /// Sets the zero-arrival waiting policy.
    pub fn with_zero_arrival(mut self, zero_arrival: ZeroArrivalPolicy) -> Self {
        self.zero_arrival = zero_arrival;
        self
    }

    /// Sets the throughput denominator.
    pub fn with_throughput(mut self, throughput: ThroughputBasis) -> Self {
        self.throughput = throughput;
        self
    }

    /// Applies the policies from `config`.
    pub fn configured(self, config: &SimulationConfig) -> Self {
        self.with_zero_arrival(config.zero_arrival)
            .with_throughput(config.throughput)
    }
}

impl CpuScheduler for NonPreemptiveScheduler {
    fn algorithm(&self) -> Algorithm {
        self.algorithm
    }

    fn throughput_basis(&self) -> ThroughputBasis {
        self.throughput
    }

    fn schedule(&self, processes: &[Process]) -> Schedule {
        let mut acc = TimingAccumulator::new(self.zero_arrival);
        for idx in self.rule_engine.sort_indices(processes) {
            acc.run_to_completion(&processes[idx]);
        }
        acc.finish()
    }
}
