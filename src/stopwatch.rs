use std::time::Duration;

use log::debug;

use crate::clock::{Clock, SystemClock};
use crate::laps::{Lap, LapBook};
use crate::ticker::{DEFAULT_TICK_INTERVAL, ThreadScheduler, TickScheduler, TickTask};

/// Raw timing state of the stopwatch.
///
/// While `running`, the displayed time is `now - reference_start_ms`. Once
/// paused it stays frozen at `paused_elapsed_ms` until the next start.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct ClockState {
    pub running: bool,
    pub elapsed_ms: u64,
    pub reference_start_ms: u64,
    pub paused_elapsed_ms: u64,
}

/// Stopwatch engine: clock state, recorded laps and the periodic sampling task.
///
/// The sampling task only exists while the stopwatch runs. Pausing, resetting
/// or dropping the stopwatch cancels it before returning, so no sample can land
/// on a state that was already paused or thrown away.
pub struct Stopwatch<C: Clock = SystemClock, S: TickScheduler = ThreadScheduler> {
    clock: C,
    scheduler: S,
    tick_interval: Duration,
    state: ClockState,
    laps: LapBook,
    tick_task: Option<S::Task>,
}

impl<C: Clock, S: TickScheduler> Stopwatch<C, S> {
    pub fn new(clock: C, scheduler: S) -> Self {
        Self {
            clock,
            scheduler,
            tick_interval: DEFAULT_TICK_INTERVAL,
            state: ClockState::default(),
            laps: LapBook::new(),
            tick_task: None,
        }
    }

    pub fn with_tick_interval(mut self, tick_interval: Duration) -> Self {
        self.tick_interval = tick_interval;
        self
    }

    pub fn state(&self) -> &ClockState {
        &self.state
    }

    pub fn is_running(&self) -> bool {
        self.state.running
    }

    /// Elapsed time as last sampled; this is what the display shows.
    pub fn elapsed_ms(&self) -> u64 {
        self.state.elapsed_ms
    }

    pub fn laps(&self) -> &LapBook {
        &self.laps
    }

    pub fn is_ticking(&self) -> bool {
        self.tick_task.is_some()
    }

    /// Starts or resumes the stopwatch. Returns `false` if it was already running.
    pub fn start(&mut self) -> bool {
        if self.state.running {
            return false;
        }
        let now = self.clock.now_ms();
        self.state.reference_start_ms = now.saturating_sub(self.state.paused_elapsed_ms);
        self.state.running = true;
        self.tick_task = Some(self.scheduler.schedule(self.tick_interval));
        debug!(
            "Stopwatch started at {}ms, resuming from {}ms",
            now, self.state.paused_elapsed_ms
        );
        true
    }

    /// Pauses the stopwatch, freezing the displayed time. Returns `false` if it
    /// was not running.
    pub fn pause(&mut self) -> bool {
        if !self.state.running {
            return false;
        }
        self.cancel_ticks();
        self.sample();
        self.state.paused_elapsed_ms = self.state.elapsed_ms;
        self.state.running = false;
        debug!("Stopwatch paused at {}ms", self.state.elapsed_ms);
        true
    }

    /// Starts when stopped, pauses when running.
    pub fn toggle(&mut self) {
        if self.state.running {
            self.pause();
        } else {
            self.start();
        }
    }

    /// Stops the stopwatch and drops every lap, whatever the current state.
    pub fn reset(&mut self) {
        self.cancel_ticks();
        self.state = ClockState::default();
        self.laps.clear();
        debug!("Stopwatch reset");
    }

    /// Records a lap at the current elapsed time.
    ///
    /// Ignored unless the stopwatch is running and some time has elapsed.
    pub fn record_lap(&mut self) -> Option<Lap> {
        if !self.state.running {
            return None;
        }
        self.sample();
        if self.state.elapsed_ms == 0 {
            return None;
        }
        let lap = *self.laps.record(self.state.elapsed_ms);
        debug!(
            "Lap {} recorded: {}ms ({}ms total)",
            lap.id, lap.duration_ms, lap.cumulative_ms
        );
        Some(lap)
    }

    /// Consumes pending ticks and refreshes the elapsed time if any fired.
    /// Returns whether a new sample was taken.
    pub fn tick(&mut self) -> bool {
        let fired = self.tick_task.as_mut().map(|task| task.drain()).unwrap_or(0);
        if fired == 0 {
            return false;
        }
        self.sample();
        true
    }

    fn sample(&mut self) {
        if self.state.running {
            self.state.elapsed_ms = self
                .clock
                .now_ms()
                .saturating_sub(self.state.reference_start_ms);
        }
    }

    fn cancel_ticks(&mut self) {
        if let Some(task) = self.tick_task.take() {
            task.cancel();
        }
    }
}

impl<C: Clock, S: TickScheduler> Drop for Stopwatch<C, S> {
    fn drop(&mut self) {
        self.cancel_ticks();
    }
}
