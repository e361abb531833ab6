//! Deferred continuations.
//!
//! Every timer-driven side effect is described by a [`Deferred`] value and
//! handed to a [`Scheduler`]. The browser frontend backs the trait with
//! `setTimeout`; [`ManualScheduler`] keeps a virtual clock so tests can step
//! time deterministically.

use crate::effects::{EffectId, NthRule};
use crate::slide::SlideId;
use std::time::Duration;

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Deferred {
    /// Re-apply animation group `group` of `slide` after it was suspended.
    ResumeAnimation { slide: SlideId, group: usize },
    /// Drop one more confetti piece for a running celebration.
    SpawnConfetti,
    /// Remove the banner and lift the page filter.
    EndCelebration { banner: EffectId },
    RemoveEffect(EffectId),
    ReplayHighlight(NthRule),
}

pub trait Scheduler {
    fn schedule(&mut self, delay: Duration, task: Deferred);
}

#[derive(Debug)]
struct Pending {
    due: Duration,
    seq: u64,
    task: Deferred,
}

/// Virtual-time scheduler. Tasks are released in (due time, insertion) order.
#[derive(Debug, Default)]
pub struct ManualScheduler {
    now: Duration,
    next_seq: u64,
    pending: Vec<Pending>,
}

impl ManualScheduler {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn now(&self) -> Duration {
        self.now
    }

    pub fn pending(&self) -> usize {
        self.pending.len()
    }

    pub fn is_idle(&self) -> bool {
        self.pending.is_empty()
    }

    /// Remove the earliest task due at or before `until` and move the clock
    /// to its due time.
    pub fn pop_due(&mut self, until: Duration) -> Option<Deferred> {
        let index = self
            .pending
            .iter()
            .enumerate()
            .filter(|(_, p)| p.due <= until)
            .min_by_key(|(_, p)| (p.due, p.seq))
            .map(|(i, _)| i)?;
        let next = self.pending.swap_remove(index);
        self.now = self.now.max(next.due);
        Some(next.task)
    }

    /// Move the clock forward without releasing anything.
    pub fn advance_to(&mut self, until: Duration) {
        self.now = self.now.max(until);
    }

    /// Release every task due within `by`, in order. Tasks scheduled by the
    /// caller while handling them are not included; use
    /// [`crate::Deck::run_for`] to drive cascades.
    pub fn advance(&mut self, by: Duration) -> Vec<Deferred> {
        let until = self.now + by;
        let mut due = Vec::new();
        while let Some(task) = self.pop_due(until) {
            due.push(task);
        }
        self.advance_to(until);
        due
    }
}

impl Scheduler for ManualScheduler {
    fn schedule(&mut self, delay: Duration, task: Deferred) {
        let seq = self.next_seq;
        self.next_seq += 1;
        self.pending.push(Pending {
            due: self.now + delay,
            seq,
            task,
        });
    }
}
