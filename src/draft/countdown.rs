// src/draft/countdown.rs

use chrono::{DateTime, Utc};
use std::time::Duration;

/// Refresh cadence while the countdown is on screen.
pub const TICK: Duration = Duration::from_secs(1);

const SECS_PER_DAY: i64 = 86_400;

/// Time left until a deadline, floored to whole units.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord)]
pub struct Remaining {
    pub days: i64,
    pub hours: i64,
    pub minutes: i64,
    pub seconds: i64,
}

impl Remaining {
    pub const ZERO: Remaining = Remaining {
        days: 0,
        hours: 0,
        minutes: 0,
        seconds: 0,
    };

    pub fn total_seconds(&self) -> i64 {
        self.days * SECS_PER_DAY + self.hours * 3600 + self.minutes * 60 + self.seconds
    }

    pub fn is_zero(&self) -> bool {
        *self == Remaining::ZERO
    }

    /// `DDd:HHh:MMm:SSs`
    pub fn display(&self) -> String {
        format!(
            "{:02}d:{:02}h:{:02}m:{:02}s",
            self.days, self.hours, self.minutes, self.seconds
        )
    }
}

/// Remaining time from `now` to `target`, clamped at zero once passed.
pub fn remaining(target: DateTime<Utc>, now: DateTime<Utc>) -> Remaining {
    let total = (target - now).num_seconds().max(0);

    Remaining {
        days: total / SECS_PER_DAY,
        hours: (total / 3600) % 24,
        minutes: (total / 60) % 60,
        seconds: total % 60,
    }
}

/// Display-side countdown. Each tick re-derives from absolute timestamps, so
/// missed ticks need no catch-up.
#[derive(Debug, Clone)]
pub struct Countdown {
    target: DateTime<Utc>,
    current: Remaining,
    last_tick: Option<DateTime<Utc>>,
}

impl Countdown {
    pub fn new(target: DateTime<Utc>) -> Self {
        Self {
            target,
            current: Remaining::ZERO,
            last_tick: None,
        }
    }

    pub fn target(&self) -> DateTime<Utc> {
        self.target
    }

    pub fn current(&self) -> Remaining {
        self.current
    }

    /// Recompute if a tick is due. Returns true when the value was re-derived.
    pub fn poll(&mut self, now: DateTime<Utc>) -> bool {
        let due = match self.last_tick {
            None => true,
            // clock moved backwards: resync
            Some(t) if now < t => true,
            Some(t) => (now - t).num_milliseconds() >= TICK.as_millis() as i64,
        };

        if due {
            self.current = remaining(self.target, now);
            self.last_tick = Some(now);
        }
        due
    }

    pub fn is_expired(&self) -> bool {
        self.last_tick.is_some() && self.current.is_zero()
    }
}

// ======================================================
// Unit Tests
// ======================================================
