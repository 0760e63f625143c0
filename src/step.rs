//! Day stepping shared by both calendars.
//!
//! Conversions count days in one calendar and replay that count in the
//! other. Both halves go through [`advance_days`] and [`days_between`], which
//! only need to know how long a month is and which month follows it.
//! Whole months are skipped at once; the result is the same as stepping one
//! day at a time.

use crate::consts::{FIRST_MONTH, LAST_MONTH, MAX_AD_YEAR, MIN_DAY};
use crate::error::CalendarError;
use crate::types::days_in_gregorian_month;

/// Month-length source for a calendar.
pub(crate) trait MonthLengths {
    /// Days in `(year, month)`.
    fn month_length(&self, year: u16, month: u8) -> Result<u8, CalendarError>;

    /// The month after `(year, month)`, rolling the year after the last month.
    fn following_month(&self, year: u16, month: u8) -> Result<(u16, u8), CalendarError>;
}

/// Gregorian month lengths.
#[derive(Debug, Clone, Copy, Default)]
pub(crate) struct Gregorian;

impl MonthLengths for Gregorian {
    fn month_length(&self, year: u16, month: u8) -> Result<u8, CalendarError> {
        match days_in_gregorian_month(year, month) {
            0 => Err(CalendarError::InvalidMonth(month)),
            days => Ok(days),
        }
    }

    fn following_month(&self, year: u16, month: u8) -> Result<(u16, u8), CalendarError> {
        if month < LAST_MONTH {
            return Ok((year, month + 1));
        }
        if year >= MAX_AD_YEAR {
            return Err(CalendarError::InvalidAdDate {
                year: year.saturating_add(1),
                month: FIRST_MONTH,
                day: MIN_DAY,
            });
        }
        Ok((year + 1, FIRST_MONTH))
    }
}

/// Moves `date` forward by `days`, rolling months and years with `cal`.
///
/// `date` must be a valid day of `cal`.
pub(crate) fn advance_days<C: MonthLengths + ?Sized>(
    cal: &C,
    date: (u16, u8, u8),
    days: u32,
) -> Result<(u16, u8, u8), CalendarError> {
    let (mut year, mut month, day) = date;
    let mut day = u32::from(day);
    let mut remaining = days;

    loop {
        let length = u32::from(cal.month_length(year, month)?);
        let left_in_month = length.saturating_sub(day);
        if remaining <= left_in_month {
            #[allow(clippy::cast_possible_truncation)]
            let day = (day + remaining) as u8; // bounded by the month length
            return Ok((year, month, day));
        }

        remaining -= left_in_month + 1;
        (year, month) = cal.following_month(year, month)?;
        day = u32::from(MIN_DAY);
    }
}

/// Number of days from `from` forward to `to`.
///
/// Requires `from <= to`, both valid days of `cal`.
pub(crate) fn days_between<C: MonthLengths + ?Sized>(
    cal: &C,
    from: (u16, u8, u8),
    to: (u16, u8, u8),
) -> Result<u32, CalendarError> {
    debug_assert!(from <= to);

    let (mut year, mut month, mut day) = from;
    let mut days = 0u32;

    while (year, month) != (to.0, to.1) {
        let length = cal.month_length(year, month)?;
        days += u32::from(length.saturating_sub(day)) + 1;
        (year, month) = cal.following_month(year, month)?;
        day = MIN_DAY;
    }

    Ok(days + u32::from(to.2.saturating_sub(day)))
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Reference implementation: one day per iteration.
    fn step_one_by_one(start: (u16, u8, u8), days: u32) -> (u16, u8, u8) {
        let (mut y, mut m, mut d) = start;
        for _ in 0..days {
            d += 1;
            if d > days_in_gregorian_month(y, m) {
                d = 1;
                m += 1;
                if m > 12 {
                    m = 1;
                    y += 1;
                }
            }
        }
        (y, m, d)
    }

    #[test]
    fn test_advance_zero_days() {
        assert_eq!(advance_days(&Gregorian, (1943, 4, 14), 0).unwrap(), (1943, 4, 14));
    }

    #[test]
    fn test_advance_within_month() {
        assert_eq!(advance_days(&Gregorian, (2024, 1, 1), 30).unwrap(), (2024, 1, 31));
    }

    #[test]
    fn test_advance_across_leap_february() {
        assert_eq!(advance_days(&Gregorian, (2024, 2, 28), 1).unwrap(), (2024, 2, 29));
        assert_eq!(advance_days(&Gregorian, (2024, 2, 28), 2).unwrap(), (2024, 3, 1));
        assert_eq!(advance_days(&Gregorian, (2023, 2, 28), 1).unwrap(), (2023, 3, 1));
    }

    #[test]
    fn test_advance_across_year() {
        assert_eq!(advance_days(&Gregorian, (2023, 12, 31), 1).unwrap(), (2024, 1, 1));
        assert_eq!(advance_days(&Gregorian, (1943, 4, 14), 365).unwrap(), (1944, 4, 13));
    }

    #[test]
    fn test_advance_matches_single_steps() {
        let start = (1943, 4, 14);
        for days in [0, 1, 16, 17, 47, 260, 261, 366, 1000, 10_000, 36_890] {
            assert_eq!(
                advance_days(&Gregorian, start, days).unwrap(),
                step_one_by_one(start, days),
                "advancing {days} days"
            );
        }
    }

    #[test]
    fn test_advance_past_max_year() {
        let result = advance_days(&Gregorian, (9999, 12, 31), 1);
        assert!(matches!(result, Err(CalendarError::InvalidAdDate { .. })));
    }

    #[test]
    fn test_days_between() {
        assert_eq!(days_between(&Gregorian, (2024, 1, 1), (2024, 1, 1)).unwrap(), 0);
        assert_eq!(days_between(&Gregorian, (2024, 1, 1), (2024, 1, 31)).unwrap(), 30);
        assert_eq!(days_between(&Gregorian, (2024, 1, 31), (2024, 2, 1)).unwrap(), 1);
        assert_eq!(days_between(&Gregorian, (2024, 1, 1), (2025, 1, 1)).unwrap(), 366);
        assert_eq!(days_between(&Gregorian, (2023, 1, 1), (2024, 1, 1)).unwrap(), 365);
    }

    #[test]
    fn test_days_between_inverts_advance() {
        let start = (1943, 4, 14);
        for days in [0, 17, 365, 4_000, 29_500] {
            let end = advance_days(&Gregorian, start, days).unwrap();
            assert_eq!(days_between(&Gregorian, start, end).unwrap(), days);
        }
    }
}
