use std::time::{Duration, Instant};

use metrics::{counter, histogram};
use tracing::{debug, trace};

use crate::clock::{Clock, SystemClock};

const SECS_PER_MINUTE: f64 = 60.0;
const SECS_PER_HOUR: f64 = 3_600.0;
const SECS_PER_DAY: f64 = 86_400.0;

/// A start/stop stopwatch that accumulates time across running intervals.
///
/// The mutators return `true` when the call changed the timer and `false`
/// when it was a no-op, e.g. starting a timer that is already running.
///
/// Not synchronized. Share behind a lock if it must be mutated from more
/// than one thread.
#[derive(Debug)]
pub struct Timer<C = SystemClock> {
    clock: C,
    last_start: Option<Instant>,
    elapsed: Duration,
}

impl Timer {
    pub fn new(start_timer: bool) -> Self {
        Self::with_clock(SystemClock, start_timer)
    }
}

impl Default for Timer {
    fn default() -> Self {
        Self::new(false)
    }
}

impl<C: Clock> Timer<C> {
    pub fn with_clock(clock: C, start_timer: bool) -> Self {
        let mut timer = Self {
            clock,
            last_start: None,
            elapsed: Duration::ZERO,
        };
        if start_timer {
            timer.start();
        }
        timer
    }

    /// Returns true while the timer is running.
    pub fn status(&self) -> bool {
        self.last_start.is_some()
    }

    /// Begins tracking time. Returns false if already started.
    pub fn start(&mut self) -> bool {
        if self.last_start.is_some() {
            trace!("timer already started");
            return false;
        }
        self.last_start = Some(self.clock.now());
        counter!("timer::start").increment(1);
        true
    }

    /// Stops tracking time and folds the current interval into the total.
    /// Returns false if already stopped.
    pub fn stop(&mut self) -> bool {
        let Some(t) = self.last_start.take() else {
            trace!("timer already stopped");
            return false;
        };
        let interval = self.clock.now().saturating_duration_since(t);
        self.elapsed += interval;

        counter!("timer::stop").increment(1);
        histogram!("timer::interval").record(interval.as_secs_f64());
        debug!(?interval, total = ?self.elapsed, "timer stopped");
        true
    }

    /// Resets, then stops. The return value is that of the stop.
    pub fn reset_and_stop(&mut self) -> bool {
        self.reset();
        self.stop()
    }

    /// Zeroes the elapsed time. A running timer keeps running, measuring
    /// from now. Returns false if the timer is stopped with nothing to clear.
    pub fn reset(&mut self) -> bool {
        if self.last_start.is_none() && self.elapsed.is_zero() {
            trace!("timer already reset");
            return false;
        }
        if let Some(t) = self.last_start.as_mut() {
            *t = self.clock.now();
        }
        self.elapsed = Duration::ZERO;
        counter!("timer::reset").increment(1);
        true
    }

    pub fn elapsed(&self) -> Duration {
        match self.last_start {
            Some(t) => self.elapsed + self.clock.now().saturating_duration_since(t),
            None => self.elapsed,
        }
    }

    pub fn seconds(&self) -> f64 {
        self.elapsed().as_secs_f64()
    }

    pub fn minutes(&self) -> f64 {
        self.seconds() / SECS_PER_MINUTE
    }

    pub fn hours(&self) -> f64 {
        self.seconds() / SECS_PER_HOUR
    }

    pub fn days(&self) -> f64 {
        self.seconds() / SECS_PER_DAY
    }
}
