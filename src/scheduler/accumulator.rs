//! Shared timing bookkeeping.
//!
//! Every driver walks its dispatch order through a `TimingAccumulator`,
//! which owns the service clock and the schedule being built.
//!
//! # Formulas
//!
//! | Quantity | Definition |
//! |----------|-----------|
//! | waiting | `max(0, clock - arrival)` |
//! | start | `arrival + waiting` |
//! | turnaround | `burst + waiting` |
//! | completion | `arrival + waiting + burst` |

use tracing::debug;

use crate::config::ZeroArrivalPolicy;
use crate::models::{ExecutionSlice, Process, Schedule, ScheduleRow, Ticks};

/// Timing outcome of one process.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Timing {
    pub waiting: Ticks,
    pub start: Ticks,
    pub turnaround: Ticks,
    pub completion: Ticks,
}

impl Timing {
    /// Derives all quantities from a waiting time.
    pub fn from_waiting(process: &Process, waiting: Ticks) -> Self {
        Self {
            waiting,
            start: process.arrival + waiting,
            turnaround: process.burst + waiting,
            completion: process.arrival + waiting + process.burst,
        }
    }

    /// Timing of `process` if it is dispatched when the service clock reads
    /// `clock`.
    ///
    /// `previous_waiting` is only consulted for zero-arrival processes under
    /// [`ZeroArrivalPolicy::CarryForward`].
    pub fn at(
        process: &Process,
        clock: Ticks,
        previous_waiting: Ticks,
        policy: ZeroArrivalPolicy,
    ) -> Self {
        let waiting = if process.arrival > 0 || policy == ZeroArrivalPolicy::Recompute {
            (clock - process.arrival).max(0)
        } else {
            previous_waiting
        };
        Self::from_waiting(process, waiting)
    }

    fn row(&self, process: &Process) -> ScheduleRow {
        ScheduleRow {
            process_id: process.id,
            priority: process.priority,
            burst: process.burst,
            arrival: process.arrival,
            waiting: self.waiting,
            turnaround: self.turnaround,
            completion: self.completion,
        }
    }
}

/// Service clock plus the schedule under construction.
#[derive(Debug, Clone)]
pub struct TimingAccumulator {
    clock: Ticks,
    last_waiting: Ticks,
    zero_arrival: ZeroArrivalPolicy,
    schedule: Schedule,
}

impl TimingAccumulator {
    /// Starts at t=0 with an empty schedule.
    pub fn new(zero_arrival: ZeroArrivalPolicy) -> Self {
        Self {
            clock: 0,
            last_waiting: 0,
            zero_arrival,
            schedule: Schedule::new(),
        }
    }

    /// Current service clock.
    pub fn clock(&self) -> Ticks {
        self.clock
    }

    /// Runs `process` to completion at the current clock.
    ///
    /// Emits one slice `[start, clock + burst]` and one row. The clock
    /// advances by the burst only.
    pub fn run_to_completion(&mut self, process: &Process) -> ScheduleRow {
        let timing = Timing::at(process, self.clock, self.last_waiting, self.zero_arrival);
        self.last_waiting = timing.waiting;
        self.clock += process.burst;

        let slice = ExecutionSlice::new(process.id, timing.start, self.clock);
        debug!(process = process.id, start = slice.start, stop = slice.stop, "dispatched");
        self.schedule.add_slice(slice);

        let row = timing.row(process);
        self.schedule.add_row(row);
        row
    }

    /// Charges `amount` ticks of CPU to `process` starting at the current
    /// clock.
    pub fn run_slice(&mut self, process: &Process, amount: Ticks) -> ExecutionSlice {
        let slice = ExecutionSlice::new(process.id, self.clock, self.clock + amount);
        self.clock = slice.stop;
        debug!(process = process.id, start = slice.start, stop = slice.stop, "quantum");
        self.schedule.add_slice(slice);
        slice
    }

    /// Moves the clock forward to `tick` if the CPU would otherwise idle.
    pub fn idle_until(&mut self, tick: Ticks) {
        if tick > self.clock {
            debug!(from = self.clock, to = tick, "cpu idle");
            self.clock = tick;
        }
    }

    /// Records that `process` finished at the current clock.
    ///
    /// Waiting time is whatever part of its turnaround was not spent running.
    pub fn complete_at_clock(&mut self, process: &Process) -> ScheduleRow {
        let turnaround = self.clock - process.arrival;
        let waiting = (turnaround - process.burst).max(0);
        let timing = Timing::from_waiting(process, waiting);
        self.last_waiting = waiting;

        let row = timing.row(process);
        self.schedule.add_row(row);
        row
    }

    /// Consumes the accumulator and returns the finished schedule.
    pub fn finish(self) -> Schedule {
        self.schedule
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_timing_formulas() {
        let p = Process::new(2, 3, 2);
        let t = Timing::at(&p, 5, 0, ZeroArrivalPolicy::Recompute);
        assert_eq!(t.waiting, 3);
        assert_eq!(t.start, 5);
        assert_eq!(t.turnaround, 6);
        assert_eq!(t.completion, 8);
    }

    #[test]
    fn test_waiting_floored_at_zero() {
        // Arrives after the clock: no waiting, starts at arrival.
        let p = Process::new(1, 4, 10);
        let t = Timing::at(&p, 3, 0, ZeroArrivalPolicy::Recompute);
        assert_eq!(t.waiting, 0);
        assert_eq!(t.start, 10);
        assert_eq!(t.completion, 14);
    }

    #[test]
    fn test_zero_arrival_recompute() {
        let p = Process::new(1, 4, 0);
        let t = Timing::at(&p, 7, 2, ZeroArrivalPolicy::Recompute);
        assert_eq!(t.waiting, 7);
    }

    #[test]
    fn test_zero_arrival_carry_forward() {
        let p = Process::new(1, 4, 0);
        let t = Timing::at(&p, 7, 2, ZeroArrivalPolicy::CarryForward);
        assert_eq!(t.waiting, 2);
        assert_eq!(t.completion, 6);

        // Positive arrivals are always recomputed.
        let q = Process::new(2, 4, 1);
        let t = Timing::at(&q, 7, 2, ZeroArrivalPolicy::CarryForward);
        assert_eq!(t.waiting, 6);
    }

    #[test]
    fn test_run_to_completion_advances_clock_by_burst() {
        let mut acc = TimingAccumulator::new(ZeroArrivalPolicy::Recompute);
        let first = acc.run_to_completion(&Process::new(1, 5, 0));
        assert_eq!(first.completion, 5);
        assert_eq!(acc.clock(), 5);

        let second = acc.run_to_completion(&Process::new(2, 3, 2));
        assert_eq!(second.waiting, 3);
        assert_eq!(second.completion, 8);
        assert_eq!(acc.clock(), 8);

        let schedule = acc.finish();
        assert_eq!(schedule.slices[1], ExecutionSlice::new(2, 5, 8));
        assert_eq!(schedule.row_count(), 2);
    }

    #[test]
    fn test_preemptive_accounting() {
        let p = Process::new(1, 5, 1);
        let mut acc = TimingAccumulator::new(ZeroArrivalPolicy::Recompute);
        acc.idle_until(1);
        acc.run_slice(&p, 3);
        acc.run_slice(&Process::new(2, 2, 0), 2);
        acc.run_slice(&p, 2);
        let row = acc.complete_at_clock(&p);

        assert_eq!(acc.clock(), 8);
        assert_eq!(row.completion, 8);
        assert_eq!(row.turnaround, 7);
        assert_eq!(row.waiting, 2);
    }

    #[test]
    fn test_idle_never_moves_backwards() {
        let mut acc = TimingAccumulator::new(ZeroArrivalPolicy::Recompute);
        acc.idle_until(4);
        acc.idle_until(2);
        assert_eq!(acc.clock(), 4);
    }
}
