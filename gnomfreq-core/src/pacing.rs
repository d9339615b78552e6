//! Fixed-size request pacing.
//!
//! The gnomAD API applies an implicit rate limit. The driver reports each completed
//! variant to a [`RequestPacer`], which owes a pause after every `every`-th completion.
use std::thread;
use std::time::Duration;

use tracing::debug;

use crate::consts::{DEFAULT_PACING_BATCH, DEFAULT_PACING_PAUSE_MS};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PacingPolicy {
    pub every: u64,
    pub pause: Duration,
}

impl PacingPolicy {
    pub fn new(every: u64, pause: Duration) -> Self {
        PacingPolicy { every, pause }
    }

    /// A policy that never pauses.
    pub fn disabled() -> Self {
        PacingPolicy {
            every: 0,
            pause: Duration::ZERO,
        }
    }

    pub fn is_enabled(&self) -> bool {
        self.every > 0 && !self.pause.is_zero()
    }
}

impl Default for PacingPolicy {
    fn default() -> Self {
        PacingPolicy::new(
            DEFAULT_PACING_BATCH,
            Duration::from_millis(DEFAULT_PACING_PAUSE_MS),
        )
    }
}

#[derive(Debug, Clone)]
pub struct RequestPacer {
    policy: PacingPolicy,
    completed: u64,
    pauses: u64,
    sleep: fn(Duration),
}

impl RequestPacer {
    pub fn new(policy: PacingPolicy) -> Self {
        RequestPacer {
            policy,
            completed: 0,
            pauses: 0,
            sleep: thread::sleep,
        }
    }

    /// Replace the blocking sleep used for pauses.
    pub fn with_sleep(mut self, sleep: fn(Duration)) -> Self {
        self.sleep = sleep;
        self
    }

    pub fn completed(&self) -> u64 {
        self.completed
    }

    /// Number of pauses actually taken.
    pub fn pauses(&self) -> u64 {
        self.pauses
    }

    ///
    /// Count one completed variant and return the pause owed, if any.
    /// Does not sleep.
    ///
    pub fn record_completion(&mut self) -> Option<Duration> {
        self.completed += 1;
        if self.policy.is_enabled() && self.completed % self.policy.every == 0 {
            Some(self.policy.pause)
        } else {
            None
        }
    }

    ///
    /// Count one completed variant and block for the owed pause.
    /// The pause is skipped when `more_pending` is false, as no request follows it.
    ///
    pub fn complete_and_wait(&mut self, more_pending: bool) {
        let Some(pause) = self.record_completion() else {
            return;
        };
        if !more_pending {
            debug!(completed = self.completed, "last variant done, no pause needed");
            return;
        }

        debug!(
            completed = self.completed,
            pause_ms = pause.as_millis() as u64,
            "pausing to respect the API rate limit"
        );
        self.pauses += 1;
        (self.sleep)(pause);
    }
}
