//! The BS month-length table.
//!
//! BS months have no closed-form length; every year's twelve month lengths
//! are looked up here. A table is immutable once built.

use std::collections::BTreeMap;
use std::ops::RangeInclusive;

use log::{debug, warn};
use serde::{Deserialize, Serialize};

use crate::consts::{
    FIRST_MONTH, LAST_MONTH, MAX_BS_MONTH_DAYS, MAX_BS_YEAR_DAYS, MAX_MONTH, MIN_BS_MONTH_DAYS,
    MIN_BS_YEAR_DAYS, MONTHS_PER_YEAR,
};
use crate::data::BUNDLED_YEARS;
use crate::error::{CalendarError, DataError};
use crate::prelude::*;
use crate::step::MonthLengths;

/// Month lengths of one BS year, Baisakh first.
pub type MonthLengthRow = [u8; MONTHS_PER_YEAR as usize];

/// Mapping from BS year to its twelve month lengths.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CalendarTable {
    rows: BTreeMap<u16, MonthLengthRow>,
    min_year: u16,
    max_year: u16,
}

/// Span of years covered by a table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Display)]
#[display(fmt = "{min_year}-{max_year} ({total_years} years)")]
#[serde(rename_all = "camelCase")]
pub struct DataRange {
    pub min_year: u16,
    pub max_year: u16,
    pub total_years: u32,
}

/// A problem found by [`CalendarTable::integrity_report`].
#[derive(Debug, Clone, PartialEq, Eq, Display)]
pub enum IntegrityIssue {
    #[display(fmt = "Year {_0}: missing from the table")]
    MissingYear(u16),
    #[display(fmt = "Year {year}, Month {month}: Invalid day count {days} (must be 29-32)")]
    MonthLength { year: u16, month: u8, days: u8 },
    #[display(fmt = "Year {year}: Unusual total days {days} (typically 354-385)")]
    UnusualYearLength { year: u16, days: u16 },
}

/// Result of checking a table against the dataset invariants.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct IntegrityReport {
    pub errors: Vec<IntegrityIssue>,
    pub warnings: Vec<IntegrityIssue>,
}

impl IntegrityReport {
    /// True when no errors were found. Warnings do not count.
    pub fn is_ok(&self) -> bool {
        self.errors.is_empty()
    }
}

impl CalendarTable {
    /// The bundled dataset covering BS 2000-2100.
    pub fn bundled() -> Self {
        let rows: BTreeMap<u16, MonthLengthRow> = BUNDLED_YEARS.iter().copied().collect();
        let first = BUNDLED_YEARS[0].0;
        let last = BUNDLED_YEARS[BUNDLED_YEARS.len() - 1].0;
        Self {
            rows,
            min_year: first,
            max_year: last,
        }
    }

    /// Builds a table from `(year, month lengths)` rows.
    ///
    /// # Errors
    /// Returns `DataError` when there are no rows, a year appears twice, a row
    /// does not have twelve entries, or a month length is outside 29-32.
    pub fn from_rows<I, R>(rows: I) -> Result<Self, DataError>
    where
        I: IntoIterator<Item = (u16, R)>,
        R: AsRef<[u8]>,
    {
        let mut table = BTreeMap::new();
        for (year, row) in rows {
            let row = row.as_ref();
            let lengths: MonthLengthRow = row.try_into().map_err(|_| DataError::MonthCount {
                year,
                found: row.len(),
            })?;
            for (month, &days) in (FIRST_MONTH..=LAST_MONTH).zip(lengths.iter()) {
                if !(MIN_BS_MONTH_DAYS..=MAX_BS_MONTH_DAYS).contains(&days) {
                    return Err(DataError::MonthLength { year, month, days });
                }
            }
            if table.insert(year, lengths).is_some() {
                return Err(DataError::DuplicateYear(year));
            }
        }

        let (&min_year, &max_year) = match (table.keys().next(), table.keys().next_back()) {
            (Some(min), Some(max)) => (min, max),
            _ => return Err(DataError::EmptyTable),
        };

        let table = Self {
            rows: table,
            min_year,
            max_year,
        };
        debug!("loaded BS calendar table for {}", table.data_range());
        let report = table.integrity_report();
        for issue in report.errors.iter().chain(&report.warnings) {
            warn!("{issue}");
        }
        Ok(table)
    }

    /// Parses a `{ "2000": [30, 32, ...], ... }` dataset.
    ///
    /// Keys starting with `$` and a `description` key are metadata and skipped.
    ///
    /// # Errors
    /// Returns `DataError` for malformed JSON, non-numeric year keys, or rows
    /// rejected by [`CalendarTable::from_rows`].
    pub fn from_json(json: &str) -> Result<Self, DataError> {
        let raw: BTreeMap<String, serde_json::Value> = serde_json::from_str(json)?;
        let mut rows = Vec::with_capacity(raw.len());
        for (key, value) in raw {
            if key.starts_with('$') || key == "description" {
                continue;
            }
            let year = key.trim().parse::<u16>().map_err(|_| DataError::BadYear(key.clone()))?;
            let lengths: Vec<u8> = serde_json::from_value(value)?;
            rows.push((year, lengths));
        }
        Self::from_rows(rows)
    }

    /// First year in the table
    pub const fn min_year(&self) -> u16 {
        self.min_year
    }

    /// Last year in the table
    pub const fn max_year(&self) -> u16 {
        self.max_year
    }

    /// Inclusive span of supported years
    pub const fn year_range(&self) -> RangeInclusive<u16> {
        self.min_year..=self.max_year
    }

    /// Summary of the supported span
    pub fn data_range(&self) -> DataRange {
        DataRange {
            min_year: self.min_year,
            max_year: self.max_year,
            total_years: u32::from(self.max_year) - u32::from(self.min_year) + 1,
        }
    }

    /// Whether the table has a row for `year`
    pub fn has_year(&self, year: u16) -> bool {
        self.rows.contains_key(&year)
    }

    /// All rows in year order
    pub fn years(&self) -> impl Iterator<Item = (u16, MonthLengthRow)> + '_ {
        self.rows.iter().map(|(&year, &row)| (year, row))
    }

    /// The twelve month lengths of `year`.
    ///
    /// # Errors
    /// `YearOutOfRange` outside the table span, `NoDataForYear` for a gap.
    pub fn month_lengths(&self, year: u16) -> Result<MonthLengthRow, CalendarError> {
        if !self.year_range().contains(&year) {
            return Err(CalendarError::YearOutOfRange {
                year,
                min: self.min_year,
                max: self.max_year,
            });
        }
        self.rows
            .get(&year)
            .copied()
            .ok_or(CalendarError::NoDataForYear(year))
    }

    /// Days in BS `(year, month)`.
    ///
    /// # Errors
    /// Year errors as for [`CalendarTable::month_lengths`], then
    /// `InvalidMonth` for a month outside 1-12.
    pub fn month_length(&self, year: u16, month: u8) -> Result<u8, CalendarError> {
        let row = self.month_lengths(year)?;
        if month == 0 || month > MAX_MONTH {
            return Err(CalendarError::InvalidMonth(month));
        }
        Ok(row[usize::from(month - 1)])
    }

    /// Days in BS `year`.
    ///
    /// # Errors
    /// Same year errors as [`CalendarTable::month_lengths`].
    pub fn year_length(&self, year: u16) -> Result<u16, CalendarError> {
        Ok(self.month_lengths(year)?.iter().map(|&d| u16::from(d)).sum())
    }

    /// Checks every row against the dataset invariants.
    pub fn integrity_report(&self) -> IntegrityReport {
        let mut report = IntegrityReport::default();

        for year in self.year_range() {
            if !self.has_year(year) {
                report.errors.push(IntegrityIssue::MissingYear(year));
            }
        }

        for (year, row) in self.years() {
            for (month, &days) in (FIRST_MONTH..=LAST_MONTH).zip(row.iter()) {
                if !(MIN_BS_MONTH_DAYS..=MAX_BS_MONTH_DAYS).contains(&days) {
                    report.errors.push(IntegrityIssue::MonthLength { year, month, days });
                }
            }
            let days: u16 = row.iter().map(|&d| u16::from(d)).sum();
            if !(MIN_BS_YEAR_DAYS..=MAX_BS_YEAR_DAYS).contains(&days) {
                report.warnings.push(IntegrityIssue::UnusualYearLength { year, days });
            }
        }

        report
    }
}

impl MonthLengths for CalendarTable {
    fn month_length(&self, year: u16, month: u8) -> Result<u8, CalendarError> {
        Self::month_length(self, year, month)
    }

    fn following_month(&self, year: u16, month: u8) -> Result<(u16, u8), CalendarError> {
        if month < LAST_MONTH {
            return Ok((year, month + 1));
        }
        let next = year.saturating_add(1);
        if next > self.max_year {
            return Err(CalendarError::YearOutOfRange {
                year: next,
                min: self.min_year,
                max: self.max_year,
            });
        }
        if !self.has_year(next) {
            return Err(CalendarError::NoDataForYear(next));
        }
        Ok((next, FIRST_MONTH))
    }
}
