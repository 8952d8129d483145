//! Process model.
//!
//! A process is one entry of the offline batch: it becomes runnable at its
//! arrival time and needs `burst` units of CPU time to finish.
//!
//! # Time Representation
//! All times are integer ticks relative to the simulation epoch (t=0).

use serde::{Deserialize, Serialize};

/// Opaque process identifier, unique within a batch.
pub type ProcessId = i64;

/// Simulation time in ticks.
pub type Ticks = i64;

/// An input process record.
///
/// Immutable for the duration of a simulation: drivers read it through a
/// shared slice and keep any per-run state (remaining burst, order) in
/// their own buffers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Process {
    /// Unique process identifier.
    pub id: ProcessId,
    /// Tick at which the process becomes runnable.
    pub arrival: Ticks,
    /// Total CPU time required.
    pub burst: Ticks,
    /// Scheduling priority (lower = more important).
    pub priority: i64,
}

impl Process {
    /// Priority used when the input row omits it.
    pub const DEFAULT_PRIORITY: i64 = 0;

    /// Creates a process with the default priority.
    pub fn new(id: ProcessId, burst: Ticks, arrival: Ticks) -> Self {
        Self {
            id,
            arrival,
            burst,
            priority: Self::DEFAULT_PRIORITY,
        }
    }

    /// Sets the scheduling priority.
    pub fn with_priority(mut self, priority: i64) -> Self {
        self.priority = priority;
        self
    }
}
