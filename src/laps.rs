/// A checkpoint recorded while the stopwatch was running.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Lap {
    /// 1-based, sequential within a run.
    pub id: u32,
    /// Elapsed time on the stopwatch when the lap was recorded.
    pub cumulative_ms: u64,
    /// Time since the previous lap, or since zero for the first one.
    pub duration_ms: u64,
}

/// Append-only list of laps for the current run.
///
/// Durations telescope: their sum is always the cumulative time of the last lap.
#[derive(Debug, Default, Clone)]
pub struct LapBook {
    laps: Vec<Lap>,
}

impl LapBook {
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a lap ending at `cumulative_ms` and returns it.
    pub fn record(&mut self, cumulative_ms: u64) -> &Lap {
        let previous_ms = self.laps.last().map(|lap| lap.cumulative_ms).unwrap_or(0);
        self.laps.push(Lap {
            id: self.laps.len() as u32 + 1,
            cumulative_ms,
            duration_ms: cumulative_ms.saturating_sub(previous_ms),
        });
        &self.laps[self.laps.len() - 1]
    }

    pub fn clear(&mut self) {
        self.laps.clear();
    }

    pub fn len(&self) -> usize {
        self.laps.len()
    }

    pub fn is_empty(&self) -> bool {
        self.laps.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Lap> {
        self.laps.iter()
    }

    /// Fastest lap. The earliest one wins a tie.
    pub fn best(&self) -> Option<&Lap> {
        self.laps
            .iter()
            .reduce(|best, lap| if lap.duration_ms < best.duration_ms { lap } else { best })
    }

    /// Slowest lap. The earliest one wins a tie.
    pub fn worst(&self) -> Option<&Lap> {
        self.laps
            .iter()
            .reduce(|worst, lap| if lap.duration_ms > worst.duration_ms { lap } else { worst })
    }

    /// Whether a worst lap is worth pointing out; with a single lap it would
    /// just be the best one again.
    pub fn has_distinct_worst(&self) -> bool {
        self.laps.len() >= 2
    }

    pub fn average_duration_ms(&self) -> Option<u64> {
        if self.laps.is_empty() {
            return None;
        }
        Some(self.total_ms() / self.laps.len() as u64)
    }

    pub fn total_ms(&self) -> u64 {
        self.laps.last().map(|lap| lap.cumulative_ms).unwrap_or(0)
    }
}

impl<'a> IntoIterator for &'a LapBook {
    type Item = &'a Lap;
    type IntoIter = std::slice::Iter<'a, Lap>;

    fn into_iter(self) -> Self::IntoIter {
        self.laps.iter()
    }
}
