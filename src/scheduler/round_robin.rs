//! Preemptive round-robin driver.
//!
//! # Algorithm
//!
//! 1. Admit processes into a FIFO ready queue in arrival order (ties in
//!    input order) once `arrival <= clock`.
//! 2. Pop the head and run it for `min(quantum, remaining)` ticks.
//! 3. Admit everything that arrived during that slice, then re-enqueue the
//!    preempted process at the tail unless it has finished.
//! 4. If the queue is empty but processes are still pending, the CPU idles
//!    until the next arrival.
//!
//! Rows are emitted in completion order, so the last row is always the
//! last process to finish.
//!
//! # Complexity
//! O(n log n + total_burst / quantum).

use std::collections::VecDeque;
use std::iter::Peekable;
use std::vec::IntoIter;

use crate::config::{SimulationConfig, ThroughputBasis, ZeroArrivalPolicy};
use crate::dispatching::{rules, RuleEngine};
use crate::models::{Process, Schedule, Ticks};

use super::{Algorithm, CpuScheduler, TimingAccumulator};

#[derive(Debug, Clone)]
pub struct RoundRobinScheduler {
    quantum: Ticks,
    throughput: ThroughputBasis,
}

impl RoundRobinScheduler {
    /// Creates a scheduler with the given quantum.
    ///
    /// Quanta below one tick are raised to one.
    pub fn new(quantum: Ticks) -> Self {
        Self {
            quantum: quantum.max(1),
            throughput: ThroughputBasis::default(),
        }
    }

    /// Sets the throughput denominator.
    pub fn with_throughput(mut self, throughput: ThroughputBasis) -> Self {
        self.throughput = throughput;
        self
    }

    /// Builds a scheduler from `config`.
    pub fn from_config(config: &SimulationConfig) -> Self {
        Self::new(config.quantum).with_throughput(config.throughput)
    }

    pub fn quantum(&self) -> Ticks {
        self.quantum
    }
}

impl Default for RoundRobinScheduler {
    fn default() -> Self {
        Self::new(SimulationConfig::DEFAULT_QUANTUM)
    }
}

impl CpuScheduler for RoundRobinScheduler {
    fn algorithm(&self) -> Algorithm {
        Algorithm::RoundRobin
    }

    fn throughput_basis(&self) -> ThroughputBasis {
        self.throughput
    }

    fn schedule(&self, processes: &[Process]) -> Schedule {
        let arrival_order = RuleEngine::new()
            .with_rule(rules::EarliestArrival)
            .sort_indices(processes);
        let mut pending = arrival_order.into_iter().peekable();
        let mut ready: VecDeque<usize> = VecDeque::with_capacity(processes.len());
        let mut remaining: Vec<Ticks> = processes.iter().map(|p| p.burst).collect();
        let mut acc = TimingAccumulator::new(ZeroArrivalPolicy::Recompute);

        loop {
            admit(processes, &mut pending, &mut ready, acc.clock());

            let Some(idx) = ready.pop_front() else {
                match pending.peek() {
                    Some(&next) => {
                        acc.idle_until(processes[next].arrival);
                        continue;
                    }
                    None => break,
                }
            };

            let process = &processes[idx];
            let amount = remaining[idx].min(self.quantum);
            if amount > 0 {
                acc.run_slice(process, amount);
                remaining[idx] -= amount;
            }

            admit(processes, &mut pending, &mut ready, acc.clock());

            if remaining[idx] <= 0 {
                acc.complete_at_clock(process);
            } else {
                ready.push_back(idx);
            }
        }

        acc.finish()
    }
}

/// Moves every pending process with `arrival <= clock` to the ready queue.
fn admit(
    processes: &[Process],
    pending: &mut Peekable<IntoIter<usize>>,
    ready: &mut VecDeque<usize>,
    clock: Ticks,
) {
    while let Some(idx) = pending.next_if(|&i| processes[i].arrival <= clock) {
        ready.push_back(idx);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::ExecutionSlice;

    fn sample() -> Vec<Process> {
        vec![
            Process::new(1, 5, 0),
            Process::new(2, 3, 2),
            Process::new(3, 8, 4),
        ]
    }

    #[test]
    fn test_round_robin_sample() {
        let run = RoundRobinScheduler::new(3).run(&sample());
        let slices = &run.schedule.slices;

        assert_eq!(
            slices,
            &vec![
                ExecutionSlice::new(1, 0, 3),
                ExecutionSlice::new(2, 3, 6),
                ExecutionSlice::new(1, 6, 8),
                ExecutionSlice::new(3, 8, 11),
                ExecutionSlice::new(3, 11, 14),
                ExecutionSlice::new(3, 14, 16),
            ]
        );

        let p2 = run.schedule.row_for(2).unwrap();
        assert_eq!((p2.waiting, p2.turnaround, p2.completion), (1, 4, 6));
        let p1 = run.schedule.row_for(1).unwrap();
        assert_eq!((p1.waiting, p1.turnaround, p1.completion), (3, 8, 8));
        let p3 = run.schedule.row_for(3).unwrap();
        assert_eq!((p3.waiting, p3.turnaround, p3.completion), (4, 12, 16));

        // Completion order.
        let ids: Vec<_> = run.schedule.rows.iter().map(|r| r.process_id).collect();
        assert_eq!(ids, vec![2, 1, 3]);
        assert!((run.summary.throughput - 3.0 / 16.0).abs() < 1e-10);
    }

    #[test]
    fn test_slices_sum_to_burst_and_respect_quantum() {
        let processes = vec![
            Process::new(10, 7, 0),
            Process::new(11, 1, 0),
            Process::new(12, 9, 1),
            Process::new(13, 4, 3),
            Process::new(14, 3, 5),
        ];
        let run = RoundRobinScheduler::new(3).run(&processes);
        for p in &processes {
            assert_eq!(run.schedule.busy_time(p.id), p.burst);
        }
        assert!(run.schedule.slices.iter().all(|s| s.duration() <= 3));
        assert_eq!(run.schedule.row_count(), processes.len());
    }

    #[test]
    fn test_newcomer_enqueued_before_preempted() {
        // P2 arrives at t=2, during P1's first quantum.
        let processes = vec![Process::new(1, 6, 0), Process::new(2, 2, 2)];
        let run = RoundRobinScheduler::new(3).run(&processes);
        let order: Vec<_> = run.schedule.slices.iter().map(|s| s.process_id).collect();
        assert_eq!(order, vec![1, 2, 1]);
    }

    #[test]
    fn test_idle_gap_jumps_clock() {
        let processes = vec![Process::new(1, 2, 0), Process::new(2, 2, 10)];
        let run = RoundRobinScheduler::new(3).run(&processes);
        assert_eq!(run.schedule.slices[1], ExecutionSlice::new(2, 10, 12));
        let row = run.schedule.row_for(2).unwrap();
        assert_eq!(row.waiting, 0);
        assert_eq!(row.completion, 12);
    }

    #[test]
    fn test_arrival_order_not_input_order() {
        let processes = vec![Process::new(1, 2, 5), Process::new(2, 2, 0)];
        let run = RoundRobinScheduler::new(3).run(&processes);
        assert_eq!(run.schedule.slices[0].process_id, 2);
    }

    #[test]
    fn test_works_for_any_batch_size() {
        for n in [1usize, 2, 4, 7] {
            let processes: Vec<_> = (0..n as i64).map(|i| Process::new(i, 4, 0)).collect();
            let run = RoundRobinScheduler::new(3).run(&processes);
            assert_eq!(run.schedule.row_count(), n);
            assert_eq!(run.schedule.makespan(), 4 * n as i64);
        }
    }

    #[test]
    fn test_single_process() {
        let run = RoundRobinScheduler::default().run(&[Process::new(1, 7, 0)]);
        let row = run.schedule.rows[0];
        assert_eq!(row.waiting, 0);
        assert_eq!(row.turnaround, 7);
        assert_eq!(run.schedule.slice_count(), 3);
        assert!((run.summary.throughput - 1.0 / 7.0).abs() < 1e-10);
    }

    #[test]
    fn test_zero_quantum_is_clamped() {
        assert_eq!(RoundRobinScheduler::new(0).quantum(), 1);
    }

    #[test]
    fn test_empty_batch() {
        let run = RoundRobinScheduler::default().run(&[]);
        assert_eq!(run.schedule.slice_count(), 0);
        assert_eq!(run.summary.process_count, 0);
    }
}
