use chrono::{DateTime, Utc};
use std::collections::HashMap;

/// Trailing span of history considered, in days (about six months).
pub const WINDOW_DAYS: i64 = 183;

/// Day indices run from 1 through `WINDOW_DAYS + 7`, 7 being the largest
/// possible alignment offset.
pub const HISTOGRAM_SLOTS: usize = WINDOW_DAYS as usize + 8;

/// Number of week columns the rendered graph spans.
pub const WEEKS_IN_WINDOW: usize = (WINDOW_DAYS as usize + 7).div_ceil(7);

#[derive(Debug, Clone)]
pub struct CommitEvent {
    pub timestamp: DateTime<Utc>,
    pub author_email: String,
}

/// Commit counts keyed by aligned day index, backed by a fixed
/// zero-initialized array so a missing day reads as zero without any
/// map-lookup fallback.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DayHistogram {
    counts: [u32; HISTOGRAM_SLOTS],
}

impl DayHistogram {
    pub fn new() -> Self {
        Self {
            counts: [0; HISTOGRAM_SLOTS],
        }
    }

    /// Count one commit on `day_index`. Indices outside the window are
    /// ignored; callers filter them out beforehand.
    pub fn record(&mut self, day_index: usize) {
        if let Some(slot) = self.counts.get_mut(day_index) {
            *slot += 1;
        }
    }

    pub fn get(&self, day_index: usize) -> u32 {
        self.counts.get(day_index).copied().unwrap_or(0)
    }

    pub fn total(&self) -> u64 {
        self.counts.iter().map(|&c| c as u64).sum()
    }
}

impl Default for DayHistogram {
    fn default() -> Self {
        Self::new()
    }
}

/// One week's daily counts, oldest day of the week first. The current week
/// holds fewer than 7 values until it has fully elapsed.
pub type CalendarColumn = Vec<u32>;

/// Week-indexed grid of daily counts. Week 0 is the current week; larger
/// indices are further in the past.
#[derive(Debug, Clone, Default)]
pub struct CalendarGrid {
    columns: HashMap<usize, CalendarColumn>,
}

impl CalendarGrid {
    pub fn insert(&mut self, week: usize, column: CalendarColumn) {
        self.columns.insert(week, column);
    }

    pub fn column(&self, week: usize) -> Option<&[u32]> {
        self.columns.get(&week).map(|c| c.as_slice())
    }

    pub fn total(&self) -> u64 {
        self.columns
            .values()
            .flat_map(|col| col.iter())
            .map(|&c| c as u64)
            .sum()
    }
}
