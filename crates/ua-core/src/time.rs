//! Ticks, the session clock, and `SimConfig`.
//!
//! # Design
//!
//! Time advances in discrete `Tick`s driven by one cooperative loop.  Each
//! tick represents `tick_duration_secs` of game time, the "delta time" that
//! behaviors use to scale per-tick work:
//!
//!   step = speed * tick_duration_secs
//!
//! The tick counter is integral so comparisons (watchdog deadlines, event
//! ordering in logs) are exact; only spatial movement uses floats.

use std::fmt;

use crate::{CoreError, CoreResult};

// ── Tick ─────────────────────────────────────────────────────────────────────

/// Index of a simulation step, counted from the session start.
#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Tick(pub u64);

impl Tick {
    pub const ZERO: Tick = Tick(0);

    #[inline]
    pub fn next(self) -> Tick {
        Tick(self.0 + 1)
    }

    /// Steps from `earlier` up to `self`; zero when `earlier` is not before.
    #[inline]
    pub fn since(self, earlier: Tick) -> u64 {
        self.0.saturating_sub(earlier.0)
    }
}

impl fmt::Display for Tick {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "t{}", self.0)
    }
}

// ── SimClock ──────────────────────────────────────────────────────────────────

/// Tracks the current tick and the fixed delta time per tick.
#[derive(Clone, Debug)]
pub struct SimClock {
    /// Seconds of game time covered by one tick.
    pub tick_duration_secs: f32,
    /// The current tick, advanced by `SimClock::advance()` each iteration.
    pub current_tick: Tick,
}

impl SimClock {
    pub fn new(tick_duration_secs: f32) -> Self {
        SimClock { tick_duration_secs, current_tick: Tick::ZERO }
    }

    #[inline]
    pub fn advance(&mut self) {
        self.current_tick = self.current_tick.next();
    }

    /// Rewind to tick 0 (session boundary).
    #[inline]
    pub fn reset(&mut self) {
        self.current_tick = Tick::ZERO;
    }

    /// Delta time for the tick being processed.
    #[inline]
    pub fn delta_secs(&self) -> f32 {
        self.tick_duration_secs
    }

    /// Elapsed game seconds since tick 0.
    #[inline]
    pub fn elapsed_secs(&self) -> f64 {
        self.current_tick.0 as f64 * f64::from(self.tick_duration_secs)
    }
}

impl fmt::Display for SimClock {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({:.2}s)", self.current_tick, self.elapsed_secs())
    }
}

// ── FailurePolicy ─────────────────────────────────────────────────────────────

/// What the event dispatcher does when a handler returns an error.
#[derive(Copy, Clone, PartialEq, Eq, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum FailurePolicy {
    /// Log the failure and keep draining the remaining handlers and events.
    #[default]
    Isolate,
    /// Abort the drain and return the error to the `trigger` caller.  Events
    /// still queued stay queued for the next drain.
    Propagate,
}

// ── SimConfig ─────────────────────────────────────────────────────────────────

/// Session settings, loaded from JSON by the demo (`serde` feature).
///
/// Typically loaded from a JSON file by the application crate (with the
/// `serde` feature) and passed to the simulation builder.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct SimConfig {
    /// Game seconds per tick (the per-tick delta time).  Default: 1/30.
    pub tick_duration_secs: f32,

    /// Total ticks `Sim::run` processes.
    pub total_ticks: u64,

    /// Session seed; every agent stream derives from it.
    pub seed: u64,

    /// Distance below which a mover counts as arrived.  Default: 0.01.
    pub arrival_epsilon: f32,

    /// Cancel any behavior that has been running this many ticks.  `None`
    /// disables the watchdog, leaving stalled behaviors running forever.
    pub behavior_timeout_ticks: Option<u64>,

    /// Handler failure policy for the session's event dispatcher.
    pub failure_policy: FailurePolicy,
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            tick_duration_secs:     1.0 / 30.0,
            total_ticks:            1_000,
            seed:                   0,
            arrival_epsilon:        0.01,
            behavior_timeout_ticks: None,
            failure_policy:         FailurePolicy::Isolate,
        }
    }
}

impl SimConfig {
    /// First tick that is not simulated.
    #[inline]
    pub fn end_tick(&self) -> Tick {
        Tick(self.total_ticks)
    }

    /// A clock at tick 0 with this config's tick duration.
    pub fn make_clock(&self) -> SimClock {
        SimClock::new(self.tick_duration_secs)
    }

    /// Reject values the tick loop cannot work with.
    pub fn validate(&self) -> CoreResult<()> {
        if !(self.tick_duration_secs.is_finite() && self.tick_duration_secs > 0.0) {
            return Err(CoreError::Config(format!(
                "tick_duration_secs must be positive, got {}",
                self.tick_duration_secs
            )));
        }
        if !(self.arrival_epsilon.is_finite() && self.arrival_epsilon >= 0.0) {
            return Err(CoreError::Config(format!(
                "arrival_epsilon must be non-negative, got {}",
                self.arrival_epsilon
            )));
        }
        if self.behavior_timeout_ticks == Some(0) {
            return Err(CoreError::Config(
                "behavior_timeout_ticks must be at least 1 when set".into(),
            ));
        }
        Ok(())
    }
}
