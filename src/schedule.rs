//! Timing state owned by a [`FrameScheduler`](crate::scheduler::FrameScheduler).

use std::str::FromStr;

use crate::cadence::Cadence;
use crate::error::ConfigError;
use crate::surface::Size;

/// What the `elapsed` argument handed to the client measures.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ElapsedPolicy {
    /// Time since the previous tick: a per-tick delta for integration steps.
    #[default]
    SinceLastTick,
    /// Time since the session started; grows monotonically.
    SinceStart,
}

impl ElapsedPolicy {
    /// Folds a delivered elapsed value into a running session clock, so
    /// clients can keep one code path for both policies.
    pub fn advance(self, clock: f64, elapsed: f64) -> f64 {
        match self {
            Self::SinceLastTick => clock + elapsed,
            Self::SinceStart => elapsed,
        }
    }
}

impl FromStr for ElapsedPolicy {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "tick" => Ok(Self::SinceLastTick),
            "start" => Ok(Self::SinceStart),
            other => Err(ConfigError::UnknownElapsed(other.to_owned())),
        }
    }
}

/// When the first tick may fire.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum StartPolicy {
    /// On the first cycle, whatever the cadence.
    #[default]
    Immediate,
    /// Once a full cadence has passed since the origin.
    AfterCadence,
}

impl FromStr for StartPolicy {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "immediate" => Ok(Self::Immediate),
            "deferred" => Ok(Self::AfterCadence),
            other => Err(ConfigError::UnknownStart(other.to_owned())),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct ScheduleState {
    origin: f64,
    // `None` until the first tick under `StartPolicy::Immediate`.
    last_tick: Option<f64>,
    surface: Size,
}

impl ScheduleState {
    pub fn new(origin: f64, start: StartPolicy) -> Self {
        let last_tick = match start {
            StartPolicy::Immediate => None,
            StartPolicy::AfterCadence => Some(origin),
        };
        Self {
            origin,
            last_tick,
            surface: Size::default(),
        }
    }

    pub fn origin(&self) -> f64 {
        self.origin
    }

    pub fn last_tick(&self) -> Option<f64> {
        self.last_tick
    }

    /// Surface size seen by the most recent tick.
    pub fn surface_size(&self) -> Size {
        self.surface
    }

    pub fn is_due(&self, now: f64, cadence: Cadence) -> bool {
        match self.last_tick {
            None => true,
            Some(last) => now - last >= cadence.as_millis(),
        }
    }

    /// Records a tick at `now` and returns the elapsed value for `policy`.
    pub(crate) fn fire(&mut self, now: f64, policy: ElapsedPolicy) -> f64 {
        let since = match policy {
            ElapsedPolicy::SinceLastTick => self.last_tick.unwrap_or(self.origin),
            ElapsedPolicy::SinceStart => self.origin,
        };
        self.last_tick = Some(now);
        now - since
    }

    pub(crate) fn record_surface(&mut self, size: Size) {
        self.surface = size;
    }
}
