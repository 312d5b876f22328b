use serde::{Deserialize, Serialize};

/**
 * A recurring side-effect (output, logging) due at a simulation time,
 * not a wall-clock time — cadence here is purely `next_time`-driven.
 */
#[derive(Clone, Serialize, Deserialize)]
pub struct RecurringTask {
    /// The number of times this task has been performed.
    count: u64,

    /// The next simulation time at which this task is due.
    next_time: f64,
}

/**
 * The driver-cadence tasks tracked over a run.
 */
#[derive(Clone, Serialize, Deserialize)]
pub struct Tasks {
    pub save: RecurringTask,
    pub log: RecurringTask,
}

impl RecurringTask {
    /// A task first due at `start_time`.
    pub fn new(start_time: f64) -> Self {
        Self { count: 0, next_time: start_time }
    }

    pub fn count(&self) -> u64 {
        self.count
    }

    pub fn next_time(&self) -> f64 {
        self.next_time
    }

    /// Whether the task is due at or past `t`.
    pub fn is_due(&self, t: f64) -> bool {
        t >= self.next_time
    }

    /// Marks the task performed and schedules it `interval` later. A
    /// non-positive `interval` disables the cadence (the task is never
    /// due again).
    pub fn advance(&mut self, interval: f64) {
        self.count += 1;
        self.next_time = if interval > 0.0 { self.next_time + interval } else { f64::INFINITY };
    }
}

impl Tasks {
    pub fn new(start_time: f64) -> Self {
        Self { save: RecurringTask::new(start_time), log: RecurringTask::new(start_time) }
    }
}
