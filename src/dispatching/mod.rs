//! Dispatching rules and rule engine.
//!
//! Decides the order in which drivers visit processes. FCFS uses an empty
//! engine (input order), SJF ranks by burst, priority scheduling by the
//! priority field, and round-robin admits processes by arrival.
//!
//! # Usage
//!
//! ```
//! use cpu_sched_sim::dispatching::{rules, RuleEngine};
//! use cpu_sched_sim::models::Process;
//!
//! let processes = vec![Process::new(1, 8, 0), Process::new(2, 3, 0)];
//! let engine = RuleEngine::new().with_rule(rules::ShortestBurst);
//! assert_eq!(engine.sort_indices(&processes), vec![1, 0]);
//! ```

mod engine;
pub mod rules;

pub use engine::RuleEngine;

use crate::models::Process;
use std::fmt::Debug;

/// Score returned by a dispatching rule.
///
/// Lower scores = dispatched first.
pub type RuleScore = i64;

/// A dispatching rule that ranks processes.
///
/// # Score Convention
/// **Lower score = higher priority.**
pub trait DispatchingRule: Send + Sync + Debug {
    /// Rule name (e.g., "SJF").
    fn name(&self) -> &'static str;

    /// Scores a process; lower runs earlier.
    fn evaluate(&self, process: &Process) -> RuleScore;
}
