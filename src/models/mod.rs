//! Scheduling domain models.
//!
//! Provides the input record (`Process`) and the derived execution record
//! (`Schedule`, made of `ExecutionSlice`s and `ScheduleRow`s).
//!
//! # Glossary
//!
//! | Term | Meaning |
//! |------|---------|
//! | Burst | Total CPU time a process needs |
//! | Waiting | Time spent ready but not running |
//! | Turnaround | `waiting + burst` |
//! | Completion | `arrival + waiting + burst` |

mod process;
mod schedule;

pub use process::{Process, ProcessId, Ticks};
pub use schedule::{ExecutionSlice, Schedule, ScheduleRow};
