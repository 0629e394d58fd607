use std::fmt;
use std::str::FromStr;

use chrono::{Datelike, NaiveDate};

use regex::Regex;

use serde::{Serialize, Serializer};

use crate::error::{Error, Result};
use crate::report::calendar::month_start;

const CURRENT: &str = "current";

/// A month picked from the calendar month selector
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum MonthSelection {
    /// The month containing today
    #[default]
    Current,
    /// An explicit month, stored as its first day
    Month(NaiveDate),
}

impl MonthSelection {
    /// Selection of the month containing `date`
    pub fn of(date: NaiveDate) -> Self {
        Self::Month(month_start(date))
    }
    /// The date the calendar grid is rendered around
    pub fn reference_date(&self, today: NaiveDate) -> NaiveDate {
        match self {
            Self::Current => today,
            Self::Month(start) => *start,
        }
    }
}

impl FromStr for MonthSelection {
    type Err = Error;

    fn from_str(value: &str) -> Result<Self> {
        lazy_static::lazy_static! {
            static ref MONTH_REGEX: Regex = Regex::new(r"^(\d{4})-(\d{2})$").unwrap();
        }

        let value = value.trim();
        if value.is_empty() || value.eq_ignore_ascii_case(CURRENT) {
            return Ok(Self::Current);
        }

        let invalid = || Error::ParsingError(format!("{} is not a valid month", value));

        let captures = MONTH_REGEX.captures(value).ok_or_else(invalid)?;
        let year: i32 = captures[1].parse().map_err(|_| invalid())?;
        let month: u32 = captures[2].parse().map_err(|_| invalid())?;

        NaiveDate::from_ymd_opt(year, month, 1)
            .map(Self::Month)
            .ok_or_else(invalid)
    }
}

impl fmt::Display for MonthSelection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Current => f.write_str(CURRENT),
            Self::Month(start) => write!(f, "{:04}-{:02}", start.year(), start.month()),
        }
    }
}

impl Serialize for MonthSelection {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}
