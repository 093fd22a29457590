//! Calendar months in canonical order.

use serde::{Deserialize, Serialize};

/// January through December.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum CalendarMonth {
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

impl CalendarMonth {
    pub fn all() -> &'static [CalendarMonth; 12] {
        &[
            CalendarMonth::January,
            CalendarMonth::February,
            CalendarMonth::March,
            CalendarMonth::April,
            CalendarMonth::May,
            CalendarMonth::June,
            CalendarMonth::July,
            CalendarMonth::August,
            CalendarMonth::September,
            CalendarMonth::October,
            CalendarMonth::November,
            CalendarMonth::December,
        ]
    }

    /// Month for a 1-based month number.
    pub fn from_number(number: u32) -> Option<Self> {
        let idx = usize::try_from(number).ok()?.checked_sub(1)?;
        Self::all().get(idx).copied()
    }

    /// 1-based month number.
    pub fn number(self) -> u32 {
        self as u32 + 1
    }

    pub fn name(self) -> &'static str {
        match self {
            CalendarMonth::January => "January",
            CalendarMonth::February => "February",
            CalendarMonth::March => "March",
            CalendarMonth::April => "April",
            CalendarMonth::May => "May",
            CalendarMonth::June => "June",
            CalendarMonth::July => "July",
            CalendarMonth::August => "August",
            CalendarMonth::September => "September",
            CalendarMonth::October => "October",
            CalendarMonth::November => "November",
            CalendarMonth::December => "December",
        }
    }

    /// Three-letter label for narrow chart axes.
    pub fn short_name(self) -> &'static str {
        &self.name()[..3]
    }
}
