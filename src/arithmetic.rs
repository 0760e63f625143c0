//! BS date arithmetic over the month-length table.

use crate::calendar::Calendar;
use crate::consts::{FIRST_MONTH, LAST_MONTH, MAX_MONTH};
use crate::error::CalendarError;
use crate::step::days_between;
use crate::table::{DataRange, MonthLengthRow};
use crate::types::BsDate;

impl Calendar {
    /// Days in BS `(year, month)`.
    ///
    /// # Errors
    /// `YearOutOfRange`/`NoDataForYear` for an unsupported year, then
    /// `InvalidMonth` for a month outside 1-12.
    pub fn total_days_in_month(&self, year: u16, month: u8) -> Result<u8, CalendarError> {
        self.table().month_length(year, month)
    }

    /// Days in BS `year`.
    ///
    /// # Errors
    /// `YearOutOfRange`/`NoDataForYear` for an unsupported year.
    pub fn total_days_in_year(&self, year: u16) -> Result<u16, CalendarError> {
        self.table().year_length(year)
    }

    /// The month after `(year, month)`.
    ///
    /// # Errors
    /// `InvalidMonth` outside 1-12, `NoDataForYear` when rolling into a year
    /// the table does not have.
    pub fn next_month(&self, year: u16, month: u8) -> Result<(u16, u8), CalendarError> {
        check_month(month)?;
        if month < LAST_MONTH {
            return Ok((year, month + 1));
        }
        let next = year.checked_add(1).ok_or(CalendarError::NoDataForYear(year))?;
        if !self.table().has_year(next) {
            return Err(CalendarError::NoDataForYear(next));
        }
        Ok((next, FIRST_MONTH))
    }

    /// The month before `(year, month)`.
    ///
    /// # Errors
    /// `InvalidMonth` outside 1-12, `NoDataForYear` when rolling into a year
    /// the table does not have.
    pub fn prev_month(&self, year: u16, month: u8) -> Result<(u16, u8), CalendarError> {
        check_month(month)?;
        if month > FIRST_MONTH {
            return Ok((year, month - 1));
        }
        let prev = year.checked_sub(1).ok_or(CalendarError::NoDataForYear(year))?;
        if !self.table().has_year(prev) {
            return Err(CalendarError::NoDataForYear(prev));
        }
        Ok((prev, LAST_MONTH))
    }

    /// Signed day count from `from` to `to`: positive when `to` is later,
    /// negative when earlier, zero when equal.
    ///
    /// # Errors
    /// `YearOutOfRange` when either year is not in the table, `InvalidBsDate`
    /// when either endpoint is not a day of its month.
    pub fn days_in_range(&self, from: BsDate, to: BsDate) -> Result<i32, CalendarError> {
        let table = self.table();
        for year in [from.year, to.year] {
            if !table.has_year(year) {
                return Err(CalendarError::YearOutOfRange {
                    year,
                    min: table.min_year(),
                    max: table.max_year(),
                });
            }
        }
        for date in [from, to] {
            if !self.is_valid_bs_date(date) {
                return Err(CalendarError::invalid_bs(date));
            }
        }

        let (start, end, sign) = if from <= to { (from, to, 1) } else { (to, from, -1) };
        let days = days_between(table, start.to_tuple(), end.to_tuple())?;
        // at most ~37k days over the table span
        Ok(sign * i32::try_from(days).unwrap_or(i32::MAX))
    }

    /// Copy of one year's twelve month lengths.
    ///
    /// # Errors
    /// `YearOutOfRange`/`NoDataForYear` for an unsupported year.
    pub fn calendar_data(&self, year: u16) -> Result<MonthLengthRow, CalendarError> {
        self.table().month_lengths(year)
    }

    /// Span of supported BS years
    pub fn data_range(&self) -> DataRange {
        self.table().data_range()
    }

    /// Whether `year` has a row in the table
    pub fn has_data_for_year(&self, year: u16) -> bool {
        self.table().has_year(year)
    }
}

const fn check_month(month: u8) -> Result<(), CalendarError> {
    if month == 0 || month > MAX_MONTH {
        return Err(CalendarError::InvalidMonth(month));
    }
    Ok(())
}
