//! The frame scheduler: decides, once per display refresh, whether the client
//! gets an update/render pair.

use std::cell::Cell;
use std::rc::Rc;

use crate::cadence::CadenceSource;
use crate::client::Client;
use crate::schedule::{ElapsedPolicy, ScheduleState, StartPolicy};
use crate::surface::{sync_to_window, Size, Surface};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Options {
    pub elapsed: ElapsedPolicy,
    pub start: StartPolicy,
    /// Match the surface to the window before each tick.
    pub sync_surface: bool,
}

impl Default for Options {
    fn default() -> Self {
        Self {
            elapsed: ElapsedPolicy::default(),
            start: StartPolicy::default(),
            sync_surface: true,
        }
    }
}

/// Breaks a running frame chain. Clones share the same flag.
#[derive(Debug, Clone, Default)]
pub struct StopHandle(Rc<Cell<bool>>);

impl StopHandle {
    pub fn stop(&self) {
        self.0.set(true);
    }

    pub fn is_stopped(&self) -> bool {
        self.0.get()
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Tick {
    pub at: f64,
    pub elapsed: f64,
    /// Surface size handed to the client.
    pub size: Size,
    pub resized: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Skip {
    /// The cadence source had nothing usable this cycle.
    NoCadence,
    NotDue,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Cycle {
    Ticked(Tick),
    Skipped(Skip),
    Stopped,
}

pub struct FrameScheduler<S> {
    state: ScheduleState,
    cadence: S,
    options: Options,
    stop: StopHandle,
}

impl<S: CadenceSource> FrameScheduler<S> {
    pub fn new(cadence: S, origin: f64, options: Options) -> Self {
        Self {
            state: ScheduleState::new(origin, options.start),
            cadence,
            options,
            stop: StopHandle::default(),
        }
    }

    pub fn state(&self) -> &ScheduleState {
        &self.state
    }

    pub fn options(&self) -> Options {
        self.options
    }

    pub fn stop_handle(&self) -> StopHandle {
        self.stop.clone()
    }

    pub fn is_stopped(&self) -> bool {
        self.stop.is_stopped()
    }

    /// Runs one scheduling cycle at `now`.
    ///
    /// `window` is the current host viewport size; it is only used when
    /// `sync_surface` is on. Skipped cycles leave all state untouched.
    pub fn cycle<F, C>(&mut self, now: f64, window: Size, surface: &mut F, client: &mut C) -> Cycle
    where
        F: Surface + ?Sized,
        C: Client + ?Sized,
    {
        if self.stop.is_stopped() {
            return Cycle::Stopped;
        }
        let Some(cadence) = self.cadence.cadence() else {
            return Cycle::Skipped(Skip::NoCadence);
        };
        if !self.state.is_due(now, cadence) {
            return Cycle::Skipped(Skip::NotDue);
        }

        let elapsed = self.state.fire(now, self.options.elapsed);
        let resized = self.options.sync_surface && sync_to_window(surface, window);
        let size = surface.size();
        self.state.record_surface(size);

        client.update(elapsed, size.height, size.width);
        client.render();

        Cycle::Ticked(Tick {
            at: now,
            elapsed,
            size,
            resized,
        })
    }
}
