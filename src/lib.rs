//! Offline uniprocessor CPU-scheduling simulator.
//!
//! Given a fixed batch of processes (id, arrival, burst, priority), computes
//! what a single CPU would do under four classic disciplines and reports
//! per-process timing plus a Gantt timeline.
//!
//! # Modules
//!
//! - **`models`**: Domain types: `Process`, `ExecutionSlice`, `ScheduleRow`, `Schedule`
//! - **`dispatching`**: Ordering rules and the stable `RuleEngine`
//! - **`scheduler`**: FCFS, SJF, priority and round-robin drivers, `RunSummary`
//! - **`loader`**: CSV input and argument handling
//! - **`validation`**: Batch integrity checks (duplicate IDs, bursts, arrivals)
//! - **`report`**: `ReportSink` and the console renderer
//! - **`config`**: `SimulationConfig` and environment overrides
//!
//! # Example
//!
//! ```
//! use cpu_sched_sim::config::SimulationConfig;
//! use cpu_sched_sim::models::Process;
//! use cpu_sched_sim::scheduler::simulate_all;
//!
//! let processes = vec![Process::new(1, 4, 0), Process::new(2, 2, 1)];
//! let runs = simulate_all(&processes, &SimulationConfig::default());
//! assert_eq!(runs.len(), 4);
//! assert!(runs.iter().all(|r| r.schedule.row_count() == 2));
//! ```

pub mod config;
pub mod dispatching;
pub mod error;
pub mod loader;
pub mod models;
pub mod report;
pub mod scheduler;
pub mod telemetry;
pub mod validation;

pub use error::{Result, SchedError};
