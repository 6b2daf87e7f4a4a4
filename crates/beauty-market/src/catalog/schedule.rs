use std::collections::BTreeSet;

use chrono::NaiveTime;
use serde::{Deserialize, Serialize};

use super::domain::DayOfWeek;

const TIME_FORMAT: &str = "%H:%M";

/// Weekly working pattern for a single professional.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PersonalSchedule {
    /// Weekday indices, 0 = Sunday.
    pub working_days: BTreeSet<u8>,
    pub working_hours: TimeWindow,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub lunch_break: Option<TimeWindow>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub personal_blocks: Option<Vec<PersonalTimeBlock>>,
}

/// `HH:MM` bounds, start inclusive and end exclusive.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TimeWindow {
    pub start: String,
    pub end: String,
}

/// Ad-hoc time the professional has taken off on a given weekday.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PersonalTimeBlock {
    pub day: u8,
    pub start: String,
    pub end: String,
    pub reason: String,
}

impl TimeWindow {
    pub fn bounds(&self) -> Option<(NaiveTime, NaiveTime)> {
        Some((parse_time(&self.start)?, parse_time(&self.end)?))
    }

    fn contains(&self, at: NaiveTime) -> Option<bool> {
        let (start, end) = self.bounds()?;
        Some(start <= at && at < end)
    }
}

impl PersonalTimeBlock {
    pub fn window(&self) -> TimeWindow {
        TimeWindow {
            start: self.start.clone(),
            end: self.end.clone(),
        }
    }
}

impl PersonalSchedule {
    pub fn works_on(&self, day: DayOfWeek) -> bool {
        self.working_days.contains(&day.index())
    }

    pub fn blocks(&self) -> &[PersonalTimeBlock] {
        self.personal_blocks.as_deref().unwrap_or_default()
    }

    /// Whether the professional can take a booking starting at `at` on `day`.
    ///
    /// Any malformed time string involved in the decision makes the slot
    /// unavailable.
    pub fn is_available(&self, day: DayOfWeek, at: NaiveTime) -> bool {
        if !self.works_on(day) {
            return false;
        }

        if self.working_hours.contains(at) != Some(true) {
            return false;
        }

        if let Some(lunch) = &self.lunch_break {
            match lunch.contains(at) {
                Some(false) => {}
                _ => return false,
            }
        }

        self.blocks()
            .iter()
            .filter(|block| block.day == day.index())
            .all(|block| block.window().contains(at) == Some(false))
    }
}

pub fn parse_time(value: &str) -> Option<NaiveTime> {
    NaiveTime::parse_from_str(value.trim(), TIME_FORMAT).ok()
}
