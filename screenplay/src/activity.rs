use std::collections::BTreeSet;

use chrono::{Days, NaiveDate};
use serde::{Deserialize, Serialize};

/// The set of calendar days on which the author wrote. Stored as ISO-8601
/// date strings, one per day.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct WritingLog {
    days: BTreeSet<NaiveDate>,
}

impl WritingLog {
    pub fn new() -> Self {
        WritingLog::default()
    }

    /// Mark a day as written. Re-marking is a no-op.
    pub fn record(&mut self, day: NaiveDate) {
        self.days.insert(day);
    }

    pub fn wrote_on(&self, day: NaiveDate) -> bool {
        self.days.contains(&day)
    }

    pub fn is_empty(&self) -> bool {
        self.days.is_empty()
    }

    /// Earliest recorded day, if any.
    pub fn first_day(&self) -> Option<NaiveDate> {
        self.days.iter().next().copied()
    }

    pub fn days(&self) -> impl Iterator<Item = NaiveDate> + '_ {
        self.days.iter().copied()
    }

    /// Every calendar day from `from` through `to`, inclusive. The calendar
    /// view renders this range with written days highlighted.
    pub fn calendar(from: NaiveDate, to: NaiveDate) -> Vec<NaiveDate> {
        let mut days = Vec::new();
        let mut day = from;
        while day <= to {
            days.push(day);
            day = match day.checked_add_days(Days::new(1)) {
                Some(next) => next,
                None => break,
            };
        }
        days
    }

    /// Consecutive written days ending at `today` (or yesterday, so a streak
    /// survives until the current day is over).
    pub fn current_streak(&self, today: NaiveDate) -> usize {
        let mut day = if self.wrote_on(today) {
            today
        } else {
            match today.pred_opt() {
                Some(d) => d,
                None => return 0,
            }
        };

        let mut streak = 0;
        while self.wrote_on(day) {
            streak += 1;
            day = match day.pred_opt() {
                Some(d) => d,
                None => break,
            };
        }
        streak
    }

    /// Longest run of consecutive written days anywhere in the log.
    pub fn longest_streak(&self) -> usize {
        let mut longest = 0;
        let mut run = 0;
        let mut prev: Option<NaiveDate> = None;

        for day in &self.days {
            run = match prev.and_then(|p| p.succ_opt()) {
                Some(next) if next == *day => run + 1,
                _ => 1,
            };
            longest = longest.max(run);
            prev = Some(*day);
        }
        longest
    }
}
