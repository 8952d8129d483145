//! Run summary metrics.
//!
//! # Metrics
//!
//! | Metric | Definition |
//! |--------|-----------|
//! | Average waiting | Mean of row waiting times |
//! | Average turnaround | Mean of row turnaround times |
//! | Throughput | `count / denominator`, see [`ThroughputBasis`] |
//! | Makespan | Latest completion time |
//!
//! Under [`ThroughputBasis::LastCompletion`] the denominator is the
//! completion of the last row the driver produced, which is not
//! necessarily the largest completion in the batch.

use serde::{Deserialize, Serialize};

use crate::config::ThroughputBasis;
use crate::models::{Schedule, Ticks};

/// Aggregate statistics of one algorithm run.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RunSummary {
    pub process_count: usize,
    pub average_waiting: f64,
    pub average_turnaround: f64,
    /// Processes completed per tick.
    pub throughput: f64,
    pub makespan: Ticks,
}

impl RunSummary {
    /// Computes the summary of a finished schedule.
    ///
    /// An empty schedule yields all-zero statistics.
    pub fn calculate(schedule: &Schedule, basis: ThroughputBasis) -> Self {
        let count = schedule.row_count();
        let makespan = schedule.makespan();

        if count == 0 {
            return Self {
                process_count: 0,
                average_waiting: 0.0,
                average_turnaround: 0.0,
                throughput: 0.0,
                makespan,
            };
        }

        // Per-row values fit in `Ticks`; their sum need not.
        let total_waiting: i128 = schedule.rows.iter().map(|r| i128::from(r.waiting)).sum();
        let total_turnaround: i128 =
            schedule.rows.iter().map(|r| i128::from(r.turnaround)).sum();

        let denominator = match basis {
            ThroughputBasis::LastCompletion => {
                schedule.rows.last().map(|r| r.completion).unwrap_or(0)
            }
            ThroughputBasis::Makespan => makespan,
        };
        let throughput = if denominator > 0 {
            count as f64 / denominator as f64
        } else {
            0.0
        };

        Self {
            process_count: count,
            average_waiting: total_waiting as f64 / count as f64,
            average_turnaround: total_turnaround as f64 / count as f64,
            throughput,
            makespan,
        }
    }
}
