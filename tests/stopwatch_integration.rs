// Integration tests for the stopwatch engine driven through the public API
//
// These follow a full session the way the window drives it:
// 1. Start the clock and let ticks refresh the display
// 2. Record laps and read back the presentation model
// 3. Pause, resume and reset

use std::time::{Duration, Instant};

use lapwatch::view::{LapBadge, PrimaryControl};
use lapwatch::{
    ClockState, ManualClock, ManualScheduler, Stopwatch, StopwatchView, SystemClock,
    ThreadScheduler, format_elapsed,
};

/// Helper to build a stopwatch on a hand-driven clock and scheduler
fn manual_stopwatch() -> (
    Stopwatch<ManualClock, ManualScheduler>,
    ManualClock,
    ManualScheduler,
) {
    let clock = ManualClock::new(0);
    let scheduler = ManualScheduler::new();
    let stopwatch = Stopwatch::new(clock.clone(), scheduler.clone());
    (stopwatch, clock, scheduler)
}

/// Helper to advance time in tick-sized steps, draining ticks as the UI would
fn run_for(
    stopwatch: &mut Stopwatch<ManualClock, ManualScheduler>,
    clock: &ManualClock,
    scheduler: &ManualScheduler,
    ms: u64,
) {
    for _ in 0..ms / 10 {
        clock.advance(10);
        scheduler.fire();
        stopwatch.tick();
    }
}

#[test]
fn test_lap_session_scenario() {
    let (mut stopwatch, clock, scheduler) = manual_stopwatch();

    stopwatch.start();
    run_for(&mut stopwatch, &clock, &scheduler, 1500);
    let lap = stopwatch.record_lap().expect("lap while running");
    assert_eq!((lap.id, lap.cumulative_ms, lap.duration_ms), (1, 1500, 1500));

    run_for(&mut stopwatch, &clock, &scheduler, 2700);
    let lap = stopwatch.record_lap().expect("lap while running");
    assert_eq!((lap.id, lap.cumulative_ms, lap.duration_ms), (2, 4200, 2700));

    stopwatch.pause();
    let view = StopwatchView::from_stopwatch(&stopwatch);
    assert_eq!(view.time, "00:04.20");
    assert_eq!(view.primary, PrimaryControl::Start);
    assert!(!view.show_lap_control);

    // newest first, lap 1 was fastest
    assert_eq!(view.laps[0].id, 2);
    assert_eq!(view.laps[0].badge, Some(LapBadge::Worst));
    assert_eq!(view.laps[1].badge, Some(LapBadge::Best));
    let summary = view.summary.expect("summary with two laps");
    assert_eq!(summary.best.duration, "00:01.50");
    assert_eq!(summary.worst.duration, "00:02.70");

    stopwatch.reset();
    let view = StopwatchView::from_stopwatch(&stopwatch);
    assert_eq!(view.time, "00:00.00");
    assert!(view.laps.is_empty());
    assert!(view.summary.is_none());
}

#[test]
fn test_display_frozen_while_paused() {
    let (mut stopwatch, clock, scheduler) = manual_stopwatch();
    stopwatch.start();
    run_for(&mut stopwatch, &clock, &scheduler, 3000);
    stopwatch.pause();

    clock.advance(60_000);
    scheduler.fire();
    stopwatch.tick();
    assert_eq!(format_elapsed(stopwatch.elapsed_ms()), "00:03.00");

    // resuming continues from the frozen value rather than the wall clock
    stopwatch.start();
    run_for(&mut stopwatch, &clock, &scheduler, 1000);
    assert_eq!(stopwatch.elapsed_ms(), 4000);
}

#[test]
fn test_laps_across_pause_resume() {
    let (mut stopwatch, clock, scheduler) = manual_stopwatch();
    stopwatch.start();
    run_for(&mut stopwatch, &clock, &scheduler, 1000);
    stopwatch.record_lap();
    stopwatch.pause();

    clock.advance(5000);
    assert!(stopwatch.record_lap().is_none());

    stopwatch.start();
    run_for(&mut stopwatch, &clock, &scheduler, 500);
    let lap = stopwatch.record_lap().unwrap();
    assert_eq!((lap.id, lap.cumulative_ms, lap.duration_ms), (2, 1500, 500));
}

#[test]
fn test_reset_from_every_state() {
    let (mut stopwatch, clock, scheduler) = manual_stopwatch();

    stopwatch.reset();
    assert_eq!(*stopwatch.state(), ClockState::default());

    stopwatch.start();
    run_for(&mut stopwatch, &clock, &scheduler, 200);
    stopwatch.record_lap();
    stopwatch.reset();
    assert_eq!(*stopwatch.state(), ClockState::default());
    assert!(stopwatch.laps().is_empty());
    assert_eq!(scheduler.active_tasks(), 0);

    stopwatch.start();
    run_for(&mut stopwatch, &clock, &scheduler, 200);
    stopwatch.pause();
    stopwatch.reset();
    assert_eq!(*stopwatch.state(), ClockState::default());
    assert_eq!(scheduler.scheduled_count(), scheduler.cancelled_count());
}

#[test]
fn test_real_clock_and_ticker() {
    let mut stopwatch = Stopwatch::new(SystemClock::default(), ThreadScheduler::new())
        .with_tick_interval(Duration::from_millis(5));
    stopwatch.start();
    assert!(stopwatch.is_ticking());

    let deadline = Instant::now() + Duration::from_secs(2);
    while stopwatch.elapsed_ms() < 30 && Instant::now() < deadline {
        std::thread::sleep(Duration::from_millis(5));
        stopwatch.tick();
    }
    assert!(stopwatch.elapsed_ms() >= 30);

    stopwatch.pause();
    assert!(!stopwatch.is_ticking());
    let frozen = stopwatch.elapsed_ms();
    std::thread::sleep(Duration::from_millis(20));
    assert!(!stopwatch.tick());
    assert_eq!(stopwatch.elapsed_ms(), frozen);
}
