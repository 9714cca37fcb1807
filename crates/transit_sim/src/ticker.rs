//! Cancellable repeating timer that paces clock ticks.

use std::time::{Duration, Instant};

use crossbeam_channel::{Receiver, RecvTimeoutError, tick};
use log::trace;

/// Repeating timer backed by a crossbeam tick channel.
///
/// The channel holds at most one pending tick, so ticks missed while the
/// owner is busy are dropped rather than replayed. Dropping the ticker (or
/// calling [`cancel`](Ticker::cancel)) drops the channel and no further
/// ticks are delivered.
#[derive(Debug)]
pub struct Ticker {
    interval: Duration,
    receiver: Option<Receiver<Instant>>,
}

impl Ticker {
    /// An idle ticker with the given cadence.
    pub fn new(interval: Duration) -> Self {
        Self {
            interval,
            receiver: None,
        }
    }

    pub fn interval(&self) -> Duration {
        self.interval
    }

    pub fn is_active(&self) -> bool {
        self.receiver.is_some()
    }

    /// Arm the timer. An already running timer is replaced, so the first
    /// tick comes one full interval from now.
    pub fn start(&mut self) {
        trace!("ticker armed at {:?}", self.interval);
        self.receiver = Some(tick(self.interval));
    }

    /// Stop delivering ticks.
    pub fn cancel(&mut self) {
        if self.receiver.take().is_some() {
            trace!("ticker cancelled");
        }
    }

    /// Block until the next tick or `timeout`, whichever comes first.
    ///
    /// Returns `true` if a tick was delivered. Returns `false` at once when
    /// the ticker is idle.
    pub fn wait(&self, timeout: Duration) -> bool {
        let Some(receiver) = &self.receiver else {
            return false;
        };
        match receiver.recv_timeout(timeout) {
            Ok(_) => true,
            Err(RecvTimeoutError::Timeout) | Err(RecvTimeoutError::Disconnected) => false,
        }
    }
}
