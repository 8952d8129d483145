//! Schedule (simulation result) model.
//!
//! A schedule is the ordered execution record of one algorithm run: the
//! Gantt slices in the order they were dispatched plus one timing row per
//! process.

use serde::{Deserialize, Serialize};

use super::{ProcessId, Ticks};

/// A contiguous interval during which one process held the CPU.
///
/// Non-preemptive drivers emit one slice per process; round-robin emits
/// one per quantum.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExecutionSlice {
    /// Process that ran.
    pub process_id: ProcessId,
    /// Tick the slice begins.
    pub start: Ticks,
    /// Service clock after the slice.
    pub stop: Ticks,
}

/// Per-process timing outcome.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScheduleRow {
    pub process_id: ProcessId,
    pub priority: i64,
    pub burst: Ticks,
    pub arrival: Ticks,
    /// Time spent ready but not running.
    pub waiting: Ticks,
    /// `waiting + burst`.
    pub turnaround: Ticks,
    /// `arrival + waiting + burst`.
    pub completion: Ticks,
}

/// A complete execution record for one algorithm run.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Schedule {
    /// Gantt slices in dispatch order.
    pub slices: Vec<ExecutionSlice>,
    /// One row per process, in the order the algorithm produced them.
    pub rows: Vec<ScheduleRow>,
}

impl ExecutionSlice {
    /// Creates a new slice.
    pub fn new(process_id: ProcessId, start: Ticks, stop: Ticks) -> Self {
        Self {
            process_id,
            start,
            stop,
        }
    }

    /// `stop - start`.
    ///
    /// Non-preemptive drivers stamp `stop` with the service clock, which
    /// advances by burst only. A process that arrives after the clock gets
    /// `start` at its arrival, so its slice can be shorter than its burst or
    /// even negative. Round-robin slices always equal the ticks run.
    #[inline]
    pub fn duration(&self) -> Ticks {
        self.stop - self.start
    }
}

impl Schedule {
    /// Creates an empty schedule.
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a Gantt slice.
    pub fn add_slice(&mut self, slice: ExecutionSlice) {
        self.slices.push(slice);
    }

    /// Appends a timing row.
    pub fn add_row(&mut self, row: ScheduleRow) {
        self.rows.push(row);
    }

    /// Makespan: latest completion across all rows.
    pub fn makespan(&self) -> Ticks {
        self.rows.iter().map(|r| r.completion).max().unwrap_or(0)
    }

    /// Finds the timing row for a process.
    pub fn row_for(&self, process_id: ProcessId) -> Option<&ScheduleRow> {
        self.rows.iter().find(|r| r.process_id == process_id)
    }

    /// Returns all slices of a process, in dispatch order.
    pub fn slices_for(&self, process_id: ProcessId) -> Vec<&ExecutionSlice> {
        self.slices
            .iter()
            .filter(|s| s.process_id == process_id)
            .collect()
    }

    /// Sum of [`ExecutionSlice::duration`] over a process's slices.
    ///
    /// Equals the process's burst for round-robin schedules. For the
    /// non-preemptive drivers it is only meaningful when the process did not
    /// arrive after the service clock.
    pub fn busy_time(&self, process_id: ProcessId) -> Ticks {
        self.slices_for(process_id)
            .iter()
            .map(|s| s.duration())
            .sum()
    }

    /// Number of timing rows.
    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    /// Number of Gantt slices.
    pub fn slice_count(&self) -> usize {
        self.slices.len()
    }
}
