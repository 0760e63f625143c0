//! BS <-> AD conversion by counting days from the anchor.
//!
//! A date is first expressed as a day offset from the anchor in its own
//! calendar, then that offset is replayed from the anchor in the other one.

use log::{debug, trace};

use crate::calendar::Calendar;
use crate::error::CalendarError;
use crate::format::{FormattedDate, OutputFormat};
use crate::step::{Gregorian, advance_days, days_between};
use crate::types::{AdDate, BsDate};
use crate::validate::is_valid_ad_date;

impl Calendar {
    /// Converts a BS date to its Gregorian equivalent.
    ///
    /// # Errors
    /// `InvalidBsDate` if the date is not a day of the table.
    pub fn bs_to_ad(&self, date: BsDate) -> Result<AdDate, CalendarError> {
        if !self.is_valid_bs_date(date) {
            debug!("rejecting BS {date}: not a day of the table");
            return Err(CalendarError::invalid_bs(date));
        }

        let offset = self.bs_offset(date)?;
        trace!("BS {date} is {offset} days after anchor BS {}", self.anchor().bs);

        let anchor = self.anchor().ad;
        advance_days(&Gregorian, anchor.to_tuple(), offset).map(AdDate::from)
    }

    /// Converts a Gregorian date to BS.
    ///
    /// # Errors
    /// `InvalidAdDate` for an impossible Gregorian date, `DateBeforeMinimum`
    /// before the anchor, `YearOutOfRange`/`NoDataForYear` past the table.
    pub fn ad_to_bs(&self, date: AdDate) -> Result<BsDate, CalendarError> {
        if !is_valid_ad_date(date.year, date.month, date.day) {
            return Err(CalendarError::invalid_ad(date));
        }

        let anchor = self.anchor();
        if date < anchor.ad {
            debug!("rejecting AD {date}: before anchor AD {}", anchor.ad);
            return Err(CalendarError::DateBeforeMinimum {
                date,
                minimum: anchor.ad,
            });
        }

        let offset = days_between(&Gregorian, anchor.ad.to_tuple(), date.to_tuple())?;
        trace!("AD {date} is {offset} days after anchor AD {}", anchor.ad);

        advance_days(self.table(), anchor.bs.to_tuple(), offset)
            .map(BsDate::from)
            .inspect_err(|e| debug!("AD {date} has no BS equivalent: {e}"))
    }

    /// [`Calendar::bs_to_ad`] followed by output shaping.
    ///
    /// # Errors
    /// As [`Calendar::bs_to_ad`].
    pub fn bs_to_ad_with(
        &self,
        date: BsDate,
        format: OutputFormat,
    ) -> Result<FormattedDate<AdDate>, CalendarError> {
        self.bs_to_ad(date).map(|ad| format.apply(ad))
    }

    /// [`Calendar::ad_to_bs`] followed by output shaping.
    ///
    /// # Errors
    /// As [`Calendar::ad_to_bs`].
    pub fn ad_to_bs_with(
        &self,
        date: AdDate,
        format: OutputFormat,
    ) -> Result<FormattedDate<BsDate>, CalendarError> {
        self.ad_to_bs(date).map(|bs| format.apply(bs))
    }

    /// Days from the BS anchor to `date`, counted with BS month lengths.
    fn bs_offset(&self, date: BsDate) -> Result<u32, CalendarError> {
        let table = self.table();
        let anchor = self.anchor().bs;

        let mut days = 0u32;
        for year in anchor.year..date.year {
            days += u32::from(table.year_length(year)?);
        }
        let row = table.month_lengths(date.year)?;
        days += row
            .iter()
            .take(usize::from(date.month - 1))
            .map(|&d| u32::from(d))
            .sum::<u32>();
        Ok(days + u32::from(date.day - 1))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::format::DatePattern;

    fn calendar() -> &'static Calendar {
        Calendar::bundled()
    }

    #[test]
    fn test_anchor_both_directions() {
        assert_eq!(
            calendar().bs_to_ad(BsDate::new(2000, 1, 1)).unwrap(),
            AdDate::new(1943, 4, 14)
        );
        assert_eq!(
            calendar().ad_to_bs(AdDate::new(1943, 4, 14)).unwrap(),
            BsDate::new(2000, 1, 1)
        );
    }

    #[test]
    fn test_magh_2080() {
        let bs = BsDate::new(2080, 10, 15);
        let ad = calendar().bs_to_ad(bs).unwrap();
        assert_eq!(ad, AdDate::new(2024, 1, 29));
        assert_eq!(calendar().ad_to_bs(ad).unwrap(), bs);
    }

    #[test]
    fn test_last_day_of_first_month() {
        // 2000 Baisakh has 30 days
        let ad = calendar().bs_to_ad(BsDate::new(2000, 1, 30)).unwrap();
        assert_eq!(ad, AdDate::new(1943, 5, 13));
        assert_eq!(calendar().ad_to_bs(ad).unwrap(), BsDate::new(2000, 1, 30));
        assert_eq!(
            calendar().ad_to_bs(AdDate::new(1943, 5, 14)).unwrap(),
            BsDate::new(2000, 2, 1)
        );
    }

    #[test]
    fn test_last_supported_day() {
        let last = BsDate::new(2100, 12, 30);
        let ad = calendar().bs_to_ad(last).unwrap();
        assert_eq!(calendar().ad_to_bs(ad).unwrap(), last);

        let next_ad = advance_days(&Gregorian, ad.to_tuple(), 1).map(AdDate::from).unwrap();
        assert!(matches!(
            calendar().ad_to_bs(next_ad),
            Err(CalendarError::YearOutOfRange { year: 2101, .. })
        ));
    }

    #[test]
    fn test_bs_to_ad_rejects_invalid() {
        struct TestCase {
            date: BsDate,
            description: &'static str,
        }

        let cases = [
            TestCase {
                date: BsDate::new(1999, 1, 1),
                description: "year before the table",
            },
            TestCase {
                date: BsDate::new(2080, 13, 1),
                description: "month 13",
            },
            TestCase {
                date: BsDate::new(2080, 1, 0),
                description: "day 0",
            },
            TestCase {
                date: BsDate::new(2080, 1, 33),
                description: "day past month length",
            },
        ];

        for case in &cases {
            let result = calendar().bs_to_ad(case.date);
            assert!(
                matches!(result, Err(CalendarError::InvalidBsDate { .. })),
                "expected InvalidBsDate for {}",
                case.description
            );
        }
    }

    #[test]
    fn test_ad_to_bs_rejects_invalid() {
        assert!(matches!(
            calendar().ad_to_bs(AdDate::new(2024, 13, 1)),
            Err(CalendarError::InvalidAdDate { .. })
        ));
        assert!(matches!(
            calendar().ad_to_bs(AdDate::new(2024, 1, 32)),
            Err(CalendarError::InvalidAdDate { .. })
        ));
        assert!(matches!(
            calendar().ad_to_bs(AdDate::new(2023, 2, 29)),
            Err(CalendarError::InvalidAdDate { .. })
        ));
        assert!(calendar().ad_to_bs(AdDate::new(2024, 2, 29)).is_ok());
    }

    #[test]
    fn test_ad_to_bs_before_anchor() {
        let result = calendar().ad_to_bs(AdDate::new(1943, 4, 13));
        assert_eq!(
            result,
            Err(CalendarError::DateBeforeMinimum {
                date: AdDate::new(1943, 4, 13),
                minimum: AdDate::new(1943, 4, 14),
            })
        );
    }

    #[test]
    fn test_shaped_output() {
        let bs = BsDate::new(2000, 1, 1);
        assert_eq!(
            calendar().bs_to_ad_with(bs, OutputFormat::Iso).unwrap(),
            FormattedDate::Iso("1943-04-14".to_owned())
        );
        assert_eq!(
            calendar()
                .bs_to_ad_with(bs, OutputFormat::Pattern(DatePattern::YearMonthDaySlash))
                .unwrap(),
            FormattedDate::Text("1943/04/14".to_owned())
        );
        assert_eq!(
            calendar()
                .ad_to_bs_with(AdDate::new(1943, 4, 14), OutputFormat::Pattern(DatePattern::DayMonthYearDash))
                .unwrap(),
            FormattedDate::Text("01-01-2000".to_owned())
        );
        assert_eq!(
            calendar().ad_to_bs_with(AdDate::new(1943, 4, 14), OutputFormat::Array).unwrap(),
            FormattedDate::Array([2000, 1, 1])
        );
    }

    #[test]
    fn test_conversion_on_custom_table() {
        let table = crate::CalendarTable::from_rows([
            (2000u16, [30u8, 32, 31, 32, 31, 30, 30, 30, 29, 30, 29, 31]),
            (2001u16, [31u8, 31, 32, 31, 31, 31, 30, 29, 30, 29, 30, 30]),
        ])
        .unwrap();
        let calendar = Calendar::new(table, crate::AnchorPair::BUNDLED).unwrap();

        let ad = calendar.bs_to_ad(BsDate::new(2001, 1, 1)).unwrap();
        assert_eq!(ad, AdDate::new(1944, 4, 13));
        assert_eq!(calendar.ad_to_bs(ad).unwrap(), BsDate::new(2001, 1, 1));
    }

    #[test]
    fn test_conversion_across_missing_year() {
        let table = crate::CalendarTable::from_rows([
            (2000u16, [30u8, 32, 31, 32, 31, 30, 30, 30, 29, 30, 29, 31]),
            (2002u16, [31u8, 31, 32, 32, 31, 30, 30, 29, 30, 29, 30, 30]),
        ])
        .unwrap();
        let calendar = Calendar::new(table, crate::AnchorPair::BUNDLED).unwrap();

        // last day of 2000 is still reachable
        assert_eq!(
            calendar.ad_to_bs(AdDate::new(1944, 4, 12)).unwrap(),
            BsDate::new(2000, 12, 31)
        );
        assert_eq!(
            calendar.ad_to_bs(AdDate::new(1944, 4, 13)),
            Err(CalendarError::NoDataForYear(2001))
        );
        assert_eq!(
            calendar.bs_to_ad(BsDate::new(2002, 1, 1)),
            Err(CalendarError::NoDataForYear(2001))
        );
        assert!(matches!(
            calendar.bs_to_ad(BsDate::new(2001, 1, 1)),
            Err(CalendarError::InvalidBsDate { .. })
        ));
    }
}
