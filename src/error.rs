//! Error types for calendar conversion, dataset loading and text parsing.

use crate::prelude::*;
use crate::types::{AdDate, BsDate};

/// Failure of a conversion or table query.
///
/// Every variant is a terminal outcome of the call that produced it; nothing
/// here represents a process-level fault.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CalendarError {
    /// The BS (year, month, day) is not a day present in the table.
    #[error("Invalid BS date: {year}-{month}-{day}")]
    InvalidBsDate { year: u16, month: u8, day: u8 },

    /// The AD (year, month, day) breaks Gregorian month-length rules.
    #[error("Invalid AD date: {year}-{month}-{day}")]
    InvalidAdDate { year: u16, month: u8, day: u8 },

    /// The year lies outside the span of the table.
    #[error("BS year {year} is outside the supported range ({min}-{max})")]
    YearOutOfRange { year: u16, min: u16, max: u16 },

    /// The table holds no row for this year.
    #[error("No data available for BS year {0}")]
    NoDataForYear(u16),

    /// The AD date precedes the anchor, below which no BS data exists.
    #[error("Date {date} is before the minimum supported date ({minimum})")]
    DateBeforeMinimum { date: AdDate, minimum: AdDate },

    /// A month-indexed query received a month outside 1-12.
    #[error("Invalid month: {0}. Month must be between 1 and 12.")]
    InvalidMonth(u8),
}

impl CalendarError {
    /// True for the two "year is not covered by the table" kinds.
    pub const fn is_out_of_range(&self) -> bool {
        matches!(self, Self::YearOutOfRange { .. } | Self::NoDataForYear(_))
    }

    pub(crate) const fn invalid_bs(date: BsDate) -> Self {
        Self::InvalidBsDate {
            year: date.year,
            month: date.month,
            day: date.day,
        }
    }

    pub(crate) const fn invalid_ad(date: AdDate) -> Self {
        Self::InvalidAdDate {
            year: date.year,
            month: date.month,
            day: date.day,
        }
    }
}

/// Failure while loading or checking a month-length dataset.
#[derive(Debug, thiserror::Error)]
pub enum DataError {
    /// The dataset is not valid JSON of the expected shape.
    #[error("Malformed calendar dataset: {0}")]
    Json(#[from] serde_json::Error),

    /// A year key is not a BS year number.
    #[error("Dataset key is not a year: {0}")]
    BadYear(String),

    /// The same year appears more than once.
    #[error("Dataset lists year {0} more than once")]
    DuplicateYear(u16),

    /// The dataset holds no years.
    #[error("Dataset contains no years")]
    EmptyTable,

    /// A year row does not have exactly twelve entries.
    #[error("Year {year}: expected 12 months, found {found}")]
    MonthCount { year: u16, found: usize },

    /// A month length lies outside 29-32.
    #[error("Year {year}, month {month}: invalid day count {days} (must be 29-32)")]
    MonthLength { year: u16, month: u8, days: u8 },

    /// The anchor BS year has no row in the table.
    #[error("Anchor year {year} is not present in the table")]
    AnchorNotInTable { year: u16 },

    /// The anchor is not a valid date in one of the two calendars.
    #[error("Anchor pair is not a valid pair of dates")]
    InvalidAnchor,
}

/// Failure while parsing date text or shaping options.
#[derive(Debug, Clone, PartialEq, Eq, Display)]
pub enum ParseError {
    #[display(fmt = "Empty date string")]
    EmptyInput,
    #[display(fmt = "Invalid date string: {_0}")]
    InvalidFormat(String),
    #[display(fmt = "Invalid date value in: {_0}")]
    InvalidNumber(String),
    #[display(fmt = "Unknown date pattern: {_0}")]
    UnknownPattern(String),
    #[display(fmt = "Unknown output format: {_0}")]
    UnknownFormat(String),
    #[display(fmt = "Unknown locale: {_0}")]
    UnknownLocale(String),
}

impl std::error::Error for ParseError {}
