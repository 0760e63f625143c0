//! Bikram Sambat (BS) <-> Gregorian (AD) date conversion.
//!
//! BS month lengths are observed, not computed, so every BS-side operation
//! reads a month-length table. Conversion counts days from one anchor pair
//! (BS 2000-01-01 = AD 1943-04-14) in the source calendar and replays that
//! count in the target calendar.
//!
//! The free functions below use the bundled BS 2000-2100 table through
//! [`Calendar::bundled`]. Build a [`Calendar`] directly to use another
//! dataset.
//!
//! ```
//! use bikram_sambat::{AdDate, BsDate, ad_to_bs, bs_to_ad};
//!
//! let ad = bs_to_ad(2080, 10, 15)?;
//! assert_eq!(ad, AdDate::new(2024, 1, 29));
//! assert_eq!(ad_to_bs(ad.year, ad.month, ad.day)?, BsDate::new(2080, 10, 15));
//! # Ok::<(), bikram_sambat::CalendarError>(())
//! ```

mod arithmetic;
mod calendar;
mod consts;
mod convert;
mod data;
mod error;
mod format;
mod names;
mod prelude;
mod reference;
mod step;
mod table;
mod types;
mod validate;

pub use calendar::{Calendar, MismatchKind, ReferenceMismatch};
pub use consts::*;
pub use error::{CalendarError, DataError, ParseError};
pub use format::{
    ConversionOptions, DateFormat, DatePattern, FormattedDate, OutputFormat, format_ad_date,
    format_bs_date, format_with_pattern, parse_date,
};
pub use names::{Locale, NepaliMonth, english_month_name, nepali_month_name};
pub use reference::{AnchorPair, BASE_AD_DATE, BASE_BS_DATE, REFERENCE_DATES, ReferenceDatePair};
pub use table::{CalendarTable, DataRange, IntegrityIssue, IntegrityReport, MonthLengthRow};
pub use types::{AdDate, BsDate, days_in_gregorian_month, is_leap_year};
pub use validate::is_valid_ad_date;

/// Converts BS `(year, month, day)` to AD.
///
/// # Errors
/// `InvalidBsDate` if the date is not in the bundled table.
pub fn bs_to_ad(year: u16, month: u8, day: u8) -> Result<AdDate, CalendarError> {
    Calendar::bundled().bs_to_ad(BsDate::new(year, month, day))
}

/// Converts BS to AD and shapes the result per `options`.
///
/// # Errors
/// As [`bs_to_ad`].
pub fn bs_to_ad_with(
    year: u16,
    month: u8,
    day: u8,
    options: ConversionOptions,
) -> Result<FormattedDate<AdDate>, CalendarError> {
    Calendar::bundled().bs_to_ad_with(BsDate::new(year, month, day), options.into())
}

/// Converts AD `(year, month, day)` to BS.
///
/// # Errors
/// `InvalidAdDate`, `DateBeforeMinimum` before AD 1943-04-14, or
/// `YearOutOfRange` past the bundled table.
pub fn ad_to_bs(year: u16, month: u8, day: u8) -> Result<BsDate, CalendarError> {
    Calendar::bundled().ad_to_bs(AdDate::new(year, month, day))
}

/// Converts AD to BS and shapes the result per `options`.
///
/// # Errors
/// As [`ad_to_bs`].
pub fn ad_to_bs_with(
    year: u16,
    month: u8,
    day: u8,
    options: ConversionOptions,
) -> Result<FormattedDate<BsDate>, CalendarError> {
    Calendar::bundled().ad_to_bs_with(AdDate::new(year, month, day), options.into())
}

/// Whether BS `(year, month, day)` is a day of the bundled table
pub fn is_valid_bs_date(year: u16, month: u8, day: u8) -> bool {
    Calendar::bundled().table().is_valid_bs_date(year, month, day)
}

/// Days in BS `(year, month)`.
///
/// # Errors
/// See [`Calendar::total_days_in_month`].
pub fn total_days_in_month(year: u16, month: u8) -> Result<u8, CalendarError> {
    Calendar::bundled().total_days_in_month(year, month)
}

/// Days in BS `year`.
///
/// # Errors
/// See [`Calendar::total_days_in_year`].
pub fn total_days_in_year(year: u16) -> Result<u16, CalendarError> {
    Calendar::bundled().total_days_in_year(year)
}

/// BS month after `(year, month)`.
///
/// # Errors
/// See [`Calendar::next_month`].
pub fn next_month(year: u16, month: u8) -> Result<(u16, u8), CalendarError> {
    Calendar::bundled().next_month(year, month)
}

/// BS month before `(year, month)`.
///
/// # Errors
/// See [`Calendar::prev_month`].
pub fn prev_month(year: u16, month: u8) -> Result<(u16, u8), CalendarError> {
    Calendar::bundled().prev_month(year, month)
}

/// Signed day count between two BS dates.
///
/// # Errors
/// See [`Calendar::days_in_range`].
pub fn days_in_range(
    from_year: u16,
    from_month: u8,
    from_day: u8,
    to_year: u16,
    to_month: u8,
    to_day: u8,
) -> Result<i32, CalendarError> {
    Calendar::bundled().days_in_range(
        BsDate::new(from_year, from_month, from_day),
        BsDate::new(to_year, to_month, to_day),
    )
}

/// One BS year's twelve month lengths.
///
/// # Errors
/// See [`Calendar::calendar_data`].
pub fn calendar_data(year: u16) -> Result<MonthLengthRow, CalendarError> {
    Calendar::bundled().calendar_data(year)
}

/// Span of the bundled table
pub fn data_range() -> DataRange {
    Calendar::bundled().data_range()
}

/// Whether the bundled table has `year`
pub fn has_data_for_year(year: u16) -> bool {
    Calendar::bundled().has_data_for_year(year)
}

/// First BS year of the bundled table
pub fn min_year() -> u16 {
    Calendar::bundled().table().min_year()
}

/// Last BS year of the bundled table
pub fn max_year() -> u16 {
    Calendar::bundled().table().max_year()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_free_functions_use_bundled_table() {
        assert_eq!(min_year(), 2000);
        assert_eq!(max_year(), 2100);
        assert_eq!(data_range().total_years, 101);
        assert!(has_data_for_year(2050));
        assert_eq!(total_days_in_month(2080, 1).unwrap(), 31);
        assert_eq!(total_days_in_year(2080).unwrap(), 365);
        assert_eq!(calendar_data(2080).unwrap()[1], 32);
    }

    #[test]
    fn test_anchor_scenario() {
        assert_eq!(bs_to_ad(2000, 1, 1).unwrap(), AdDate::new(1943, 4, 14));
        assert_eq!(ad_to_bs(1943, 4, 14).unwrap(), BsDate::new(2000, 1, 1));
    }

    #[test]
    fn test_validator_scenarios() {
        assert!(!is_valid_bs_date(2080, 13, 1));
        assert!(!is_valid_bs_date(2080, 1, 32));
        assert!(is_valid_bs_date(2080, 1, 31));
        assert!(is_valid_ad_date(2024, 2, 29));
        assert!(!is_valid_ad_date(2023, 2, 29));
    }

    #[test]
    fn test_range_scenarios() {
        assert_eq!(days_in_range(2080, 1, 1, 2080, 1, 31).unwrap(), 30);
        assert_eq!(
            days_in_range(2080, 1, 1, 2081, 1, 1).unwrap(),
            i32::from(total_days_in_year(2080).unwrap())
        );
        assert_eq!(days_in_range(2080, 1, 10, 2080, 1, 1).unwrap(), -9);
    }

    #[test]
    fn test_navigation_scenarios() {
        assert_eq!(next_month(2080, 12).unwrap(), (2081, 1));
        assert_eq!(prev_month(2081, 1).unwrap(), (2080, 12));
        assert!(next_month(2100, 12).is_err());
        assert!(prev_month(2000, 1).is_err());
    }

    #[test]
    fn test_options_entry_points() {
        let options = ConversionOptions::new(DateFormat::String).with_pattern(DatePattern::DayMonthYearSlash);
        assert_eq!(
            bs_to_ad_with(2000, 1, 1, options).unwrap(),
            FormattedDate::Text("14/04/1943".to_owned())
        );
        assert_eq!(
            ad_to_bs_with(1943, 4, 14, ConversionOptions::new(DateFormat::Iso)).unwrap(),
            FormattedDate::Iso("2000-01-01".to_owned())
        );
        assert_eq!(
            ad_to_bs_with(1943, 4, 14, ConversionOptions::default()).unwrap(),
            FormattedDate::Object(BsDate::new(2000, 1, 1))
        );
    }

    #[test]
    fn test_constants() {
        assert_eq!(MAX_AD_YEAR, 9999);
        assert_eq!(MAX_MONTH, 12);
        assert_eq!(BASE_BS_DATE, BsDate::new(2000, 1, 1));
        assert_eq!(BASE_AD_DATE, AdDate::new(1943, 4, 14));
    }
}
