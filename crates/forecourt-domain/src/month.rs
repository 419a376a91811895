//! Canonical calendar months and relative-month arithmetic.

use std::fmt;

use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};

#[derive(
    Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, PartialOrd, Ord, Hash,
)]
#[serde(rename_all = "lowercase")]
/// A calendar month. Declaration order is canonical report order, so `Ord`
/// on this type is the January-through-December sort key.
pub enum Month {
    January,
    February,
    March,
    April,
    May,
    June,
    July,
    August,
    September,
    October,
    November,
    December,
}

impl Month {
    /// The canonical January..December sequence.
    pub const ALL: [Month; 12] = [
        Month::January,
        Month::February,
        Month::March,
        Month::April,
        Month::May,
        Month::June,
        Month::July,
        Month::August,
        Month::September,
        Month::October,
        Month::November,
        Month::December,
    ];

    /// The month containing `date`.
    pub fn from_date(date: NaiveDate) -> Self {
        Self::from_index(date.month0())
    }

    /// Maps a zero-based month index onto the calendar, wrapping past
    /// December.
    pub fn from_index(index: u32) -> Self {
        Self::ALL[(index % 12) as usize]
    }

    /// Zero-based position within the calendar year.
    pub fn index(self) -> u32 {
        self as u32
    }

    /// The month `n` calendar months earlier. Wraps the year boundary, so
    /// January one month back is December; the year itself is not carried.
    pub fn back(self, n: u32) -> Self {
        let shifted = (self.index() as i64 - n as i64).rem_euclid(12);
        Self::from_index(shifted as u32)
    }

    /// Lowercase full month name, matching the serialized ledger form.
    pub fn name(self) -> &'static str {
        match self {
            Month::January => "january",
            Month::February => "february",
            Month::March => "march",
            Month::April => "april",
            Month::May => "may",
            Month::June => "june",
            Month::July => "july",
            Month::August => "august",
            Month::September => "september",
            Month::October => "october",
            Month::November => "november",
            Month::December => "december",
        }
    }

    /// Parses a lowercase (or mixed-case) full month name.
    pub fn from_name(value: &str) -> Option<Self> {
        let normalized = value.trim().to_ascii_lowercase();
        Self::ALL
            .iter()
            .copied()
            .find(|month| month.name() == normalized)
    }
}

impl fmt::Display for Month {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
