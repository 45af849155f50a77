//! Presentation model for the stopwatch window.
//!
//! Everything the window shows is derived here from the engine state, so the
//! egui code only lays things out and forwards button presses.

use itertools::Itertools;

use crate::clock::Clock;
use crate::format::format_elapsed;
use crate::laps::{Lap, LapBook};
use crate::stopwatch::Stopwatch;
use crate::ticker::TickScheduler;

/// The start/pause button shows one or the other, never both.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PrimaryControl {
    Start,
    Pause,
}

impl PrimaryControl {
    pub fn label(&self) -> &'static str {
        match self {
            Self::Start => "Start",
            Self::Pause => "Pause",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LapBadge {
    Best,
    Worst,
}

impl LapBadge {
    pub fn label(&self) -> &'static str {
        match self {
            Self::Best => "Best",
            Self::Worst => "Worst",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LapRow {
    pub id: u32,
    pub duration: String,
    pub cumulative: String,
    pub badge: Option<LapBadge>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SummaryCard {
    pub lap_id: u32,
    pub duration: String,
}

impl From<&Lap> for SummaryCard {
    fn from(lap: &Lap) -> Self {
        Self {
            lap_id: lap.id,
            duration: format_elapsed(lap.duration_ms),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LapSummary {
    pub best: SummaryCard,
    pub worst: SummaryCard,
    pub average: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StopwatchView {
    pub time: String,
    pub primary: PrimaryControl,
    pub show_lap_control: bool,
    /// Newest lap first.
    pub laps: Vec<LapRow>,
    /// Only present once two laps exist.
    pub summary: Option<LapSummary>,
    pub message: &'static str,
}

impl StopwatchView {
    pub fn from_stopwatch<C: Clock, S: TickScheduler>(stopwatch: &Stopwatch<C, S>) -> Self {
        Self::build(stopwatch.elapsed_ms(), stopwatch.is_running(), stopwatch.laps())
    }

    pub fn build(elapsed_ms: u64, running: bool, laps: &LapBook) -> Self {
        let best_id = laps.best().map(|lap| lap.id);
        let worst_id = laps
            .worst()
            .filter(|_| laps.has_distinct_worst())
            .map(|lap| lap.id);

        let rows = laps
            .iter()
            .rev()
            .map(|lap| LapRow {
                id: lap.id,
                duration: format_elapsed(lap.duration_ms),
                cumulative: format_elapsed(lap.cumulative_ms),
                badge: if Some(lap.id) == best_id {
                    Some(LapBadge::Best)
                } else if Some(lap.id) == worst_id {
                    Some(LapBadge::Worst)
                } else {
                    None
                },
            })
            .collect_vec();

        let summary = match (laps.best(), laps.worst(), laps.average_duration_ms()) {
            (Some(best), Some(worst), Some(average)) if laps.has_distinct_worst() => {
                Some(LapSummary {
                    best: best.into(),
                    worst: worst.into(),
                    average: format_elapsed(average),
                })
            }
            _ => None,
        };

        Self {
            time: format_elapsed(elapsed_ms),
            primary: if running {
                PrimaryControl::Pause
            } else {
                PrimaryControl::Start
            },
            show_lap_control: running,
            laps: rows,
            summary,
            message: lap_message(laps.len()),
        }
    }
}

/// Encouragement shown under the lap list.
pub fn lap_message(lap_count: usize) -> &'static str {
    match lap_count {
        0 => "Start the clock and hit Lap to record a split",
        1..=2 => "Good start, keep going",
        3..=4 => "Nice rhythm, you're building momentum",
        _ => "On a roll! Check your best and worst laps",
    }
}
