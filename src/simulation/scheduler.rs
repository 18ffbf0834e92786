// src/simulation/scheduler.rs

use std::cmp::Ordering;
use std::collections::BinaryHeap;

use crate::error::SimulationError;

/// Simulated time, counted in whole days since the start of the run.
pub type Day = u64;

/// A resumable simulation process.
///
/// Processes are plain data values sitting in the scheduler's pending set.
/// When the clock reaches a process's wake time the scheduler pops it and
/// calls `resume`, consuming it. A recurring process reschedules itself
/// before returning; a one-shot process simply returns.
pub trait Process<S>: Sized {
    fn resume(self, sim: &mut Scheduler<S, Self>) -> Result<(), SimulationError>;
}

struct Scheduled<P> {
    at: Day,
    // Monotone tiebreaker: wakeups due on the same day fire in the order
    // they were scheduled.
    seq: u64,
    process: P,
}

impl<P> PartialEq for Scheduled<P> {
    fn eq(&self, other: &Self) -> bool {
        self.at == other.at && self.seq == other.seq
    }
}
impl<P> Eq for Scheduled<P> {}
impl<P> PartialOrd for Scheduled<P> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}
impl<P> Ord for Scheduled<P> {
    fn cmp(&self, other: &Self) -> Ordering {
        // BinaryHeap is a max-heap; reverse so the earliest (day, seq) pops first.
        self.at
            .cmp(&other.at)
            .then_with(|| self.seq.cmp(&other.seq))
            .reverse()
    }
}

/// Drives simulated time forward in discrete steps, resuming processes when
/// their wake time is reached. Owns the shared simulation state so that
/// independent runs never touch each other.
///
/// The scheduler knows nothing about the domain: `S` is whatever context the
/// processes mutate, `P` is whatever process type they are.
pub struct Scheduler<S, P: Process<S>> {
    now: Day,
    next_seq: u64,
    pending: BinaryHeap<Scheduled<P>>,
    state: S,
}

impl<S, P: Process<S>> Scheduler<S, P> {
    pub fn new(state: S) -> Self {
        Self {
            now: 0,
            next_seq: 0,
            pending: BinaryHeap::new(),
            state,
        }
    }

    /// Current simulated day. Never decreases.
    pub fn now(&self) -> Day {
        self.now
    }

    pub fn state(&self) -> &S {
        &self.state
    }

    pub fn state_mut(&mut self) -> &mut S {
        &mut self.state
    }

    /// Tear down the scheduler and hand back the state it owned.
    pub fn into_state(self) -> S {
        self.state
    }

    /// Register a process to start at the current simulated time.
    pub fn spawn(&mut self, process: P) {
        let at = self.now;
        self.push(at, process);
    }

    /// Suspend `process` until `delay` days have elapsed. A zero delay is
    /// rejected: it would wake the process at the instant it suspended.
    pub fn schedule_after(&mut self, process: P, delay: u64) -> Result<(), SimulationError> {
        if delay == 0 {
            return Err(SimulationError::InvalidDelay(delay));
        }
        let at = self.now + delay;
        self.push(at, process);
        Ok(())
    }

    fn push(&mut self, at: Day, process: P) {
        let seq = self.next_seq;
        self.next_seq += 1;
        self.pending.push(Scheduled { at, seq, process });
    }

    /// Run until no process has a pending wakeup before `until`, then leave
    /// the clock at `until`. All processes due at a given day complete their
    /// step before the clock advances further.
    pub fn run(&mut self, until: Day) -> Result<(), SimulationError> {
        while let Some(scheduled) = self.pending.pop() {
            if scheduled.at >= until {
                self.pending.push(scheduled);
                break;
            }
            self.now = scheduled.at;
            scheduled.process.resume(self)?;
        }
        self.now = until;
        Ok(())
    }
}
