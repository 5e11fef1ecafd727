//! Meeting day sets and 24-hour `HHMM` meeting times.

use std::fmt;
use std::str::FromStr;

use bitflags::bitflags;
use chrono::NaiveTime;
use serde::{Deserialize, Serialize};

use packsched_core::error::AppError;

bitflags! {
    /// Weekdays on which a section meets.
    ///
    /// The empty set is an "arranged" section with no fixed meeting time.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
    pub struct MeetingDays: u8 {
        const MONDAY = 1 << 0;
        const TUESDAY = 1 << 1;
        const WEDNESDAY = 1 << 2;
        const THURSDAY = 1 << 3;
        const FRIDAY = 1 << 4;
    }
}

/// Day letters in display order. Thursday is `H`.
const DAY_LETTERS: [(char, MeetingDays); 5] = [
    ('M', MeetingDays::MONDAY),
    ('T', MeetingDays::TUESDAY),
    ('W', MeetingDays::WEDNESDAY),
    ('H', MeetingDays::THURSDAY),
    ('F', MeetingDays::FRIDAY),
];

/// Letter used for sections without fixed meeting days.
pub const ARRANGED: &str = "A";

impl MeetingDays {
    /// Returns `true` for sections without fixed meeting days.
    pub fn is_arranged(&self) -> bool {
        self.is_empty()
    }

    /// Returns `true` when both sets share at least one weekday.
    pub fn shares_day_with(&self, other: MeetingDays) -> bool {
        self.intersects(other)
    }
}

impl fmt::Display for MeetingDays {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_arranged() {
            return f.write_str(ARRANGED);
        }
        for (letter, day) in DAY_LETTERS {
            if self.contains(day) {
                write!(f, "{letter}")?;
            }
        }
        Ok(())
    }
}

impl FromStr for MeetingDays {
    type Err = AppError;

    /// Parse a day string such as `"MWF"`, or `"A"` for arranged.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.is_empty() {
            return Err(AppError::validation("Meeting days cannot be empty"));
        }
        if s == ARRANGED {
            return Ok(Self::empty());
        }
        let mut days = Self::empty();
        for c in s.chars() {
            let day = DAY_LETTERS
                .iter()
                .find(|(letter, _)| *letter == c)
                .map(|(_, day)| *day)
                .ok_or_else(|| AppError::validation(format!("Invalid meeting day '{c}'")))?;
            if days.contains(day) {
                return Err(AppError::validation(format!("Meeting day '{c}' is repeated")));
            }
            days |= day;
        }
        Ok(days)
    }
}

/// A same-day time of day written as `HHMM` on a 24-hour clock.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize, Deserialize)]
#[serde(try_from = "u16", into = "u16")]
pub struct MeetingTime(u16);

impl MeetingTime {
    /// Midnight, used for arranged sections.
    pub const MIDNIGHT: MeetingTime = MeetingTime(0);

    /// Build a time from its `HHMM` encoding, e.g. `1330` for 1:30 PM.
    pub fn from_hhmm(hhmm: u16) -> Result<Self, AppError> {
        let (hour, minute) = (hhmm / 100, hhmm % 100);
        if hour > 23 || minute > 59 {
            return Err(AppError::validation(format!("Invalid meeting time {hhmm:04}")));
        }
        Ok(Self(hhmm))
    }

    /// The raw `HHMM` value.
    pub fn hhmm(&self) -> u16 {
        self.0
    }

    pub fn hour(&self) -> u32 {
        u32::from(self.0 / 100)
    }

    pub fn minute(&self) -> u32 {
        u32::from(self.0 % 100)
    }

    /// Convert to a chrono time of day.
    pub fn to_naive_time(&self) -> NaiveTime {
        NaiveTime::from_hms_opt(self.hour(), self.minute(), 0).unwrap_or_default()
    }

    /// Twelve-hour display form, e.g. `1:30PM`.
    pub fn to_standard(&self) -> String {
        self.to_naive_time().format("%-I:%M%p").to_string()
    }
}

impl fmt::Display for MeetingTime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:04}", self.0)
    }
}

impl TryFrom<u16> for MeetingTime {
    type Error = AppError;

    fn try_from(value: u16) -> Result<Self, Self::Error> {
        Self::from_hhmm(value)
    }
}

impl From<MeetingTime> for u16 {
    fn from(time: MeetingTime) -> u16 {
        time.0
    }
}
