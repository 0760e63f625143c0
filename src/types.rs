use crate::consts::{
    CENTURY_CYCLE, DATE_SEPARATOR, DAYS_IN_MONTH, FEBRUARY, FEBRUARY_DAYS_LEAP, GREGORIAN_CYCLE,
    LEAP_YEAR_CYCLE, MAX_MONTH,
};
use crate::error::ParseError;
use crate::prelude::*;
use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// A Bikram Sambat date as a plain (year, month, day) record.
///
/// Construction performs no validation; whether the value names a real day
/// is answered by [`crate::Calendar::is_valid_bs_date`]. Ordering is
/// lexicographic on (year, month, day).
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Display, Serialize, Deserialize,
)]
#[display(fmt = "{year:04}-{month:02}-{day:02}")]
pub struct BsDate {
    pub year: u16,
    pub month: u8,
    pub day: u8,
}

/// A Gregorian date as a plain (year, month, day) record.
///
/// Same rules as [`BsDate`]: any triple may be constructed, validity is
/// checked by [`crate::is_valid_ad_date`].
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Display, Serialize, Deserialize,
)]
#[display(fmt = "{year:04}-{month:02}-{day:02}")]
pub struct AdDate {
    pub year: u16,
    pub month: u8,
    pub day: u8,
}

macro_rules! date_record_impls {
    ($ty:ident) => {
        impl $ty {
            /// Creates a date record without validating it
            pub const fn new(year: u16, month: u8, day: u8) -> Self {
                Self { year, month, day }
            }

            /// `YYYY-MM-DD` with zero-padded month and day
            pub fn to_iso_string(&self) -> String {
                self.to_string()
            }

            /// Ordered triple `[year, month, day]`
            pub const fn to_array(&self) -> [u16; 3] {
                [self.year, self.month as u16, self.day as u16]
            }

            /// Converts to a (year, month, day) tuple
            pub const fn to_tuple(&self) -> (u16, u8, u8) {
                (self.year, self.month, self.day)
            }
        }

        impl From<(u16, u8, u8)> for $ty {
            fn from((year, month, day): (u16, u8, u8)) -> Self {
                Self::new(year, month, day)
            }
        }

        impl From<$ty> for (u16, u8, u8) {
            fn from(date: $ty) -> Self {
                date.to_tuple()
            }
        }

        impl FromStr for $ty {
            type Err = ParseError;

            /// Parses the structural `YYYY-MM-DD` form. Calendar validity is not checked.
            fn from_str(s: &str) -> Result<Self, Self::Err> {
                parse_iso_parts(s).map(Self::from)
            }
        }
    };
}

date_record_impls!(BsDate);
date_record_impls!(AdDate);

fn parse_iso_parts(s: &str) -> Result<(u16, u8, u8), ParseError> {
    let trimmed = s.trim();
    if trimmed.is_empty() {
        return Err(ParseError::EmptyInput);
    }

    let parts: Vec<&str> = trimmed.split(DATE_SEPARATOR).map(str::trim).collect();
    let [year, month, day] = parts.as_slice() else {
        return Err(ParseError::InvalidFormat(trimmed.to_owned()));
    };

    let year = year
        .parse::<u16>()
        .map_err(|_| ParseError::InvalidNumber(trimmed.to_owned()))?;
    let month = month
        .parse::<u8>()
        .map_err(|_| ParseError::InvalidNumber(trimmed.to_owned()))?;
    let day = day
        .parse::<u8>()
        .map_err(|_| ParseError::InvalidNumber(trimmed.to_owned()))?;
    Ok((year, month, day))
}

// Helper functions

/// Gregorian leap year rule
pub const fn is_leap_year(year: u16) -> bool {
    (year % LEAP_YEAR_CYCLE == 0 && year % CENTURY_CYCLE != 0) || (year % GREGORIAN_CYCLE == 0)
}

/// Days in a Gregorian month; 0 for a month outside 1-12.
pub const fn days_in_gregorian_month(year: u16, month: u8) -> u8 {
    if month == 0 || month > MAX_MONTH {
        return 0;
    }

    if month == FEBRUARY && is_leap_year(year) {
        FEBRUARY_DAYS_LEAP
    } else {
        DAYS_IN_MONTH[month as usize]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_does_not_validate() {
        let date = BsDate::new(2080, 13, 40);
        assert_eq!(date.to_tuple(), (2080, 13, 40));
    }

    #[test]
    fn test_display_is_zero_padded() {
        assert_eq!(BsDate::new(2000, 1, 1).to_string(), "2000-01-01");
        assert_eq!(AdDate::new(1943, 4, 14).to_string(), "1943-04-14");
        assert_eq!(AdDate::new(2024, 12, 31).to_iso_string(), "2024-12-31");
    }

    #[test]
    fn test_to_array() {
        assert_eq!(BsDate::new(2080, 10, 15).to_array(), [2080, 10, 15]);
        assert_eq!(AdDate::new(2024, 1, 29).to_array(), [2024, 1, 29]);
    }

    #[test]
    fn test_tuple_conversions() {
        let date: BsDate = (2080, 10, 15).into();
        assert_eq!(date, BsDate::new(2080, 10, 15));

        let tuple: (u16, u8, u8) = AdDate::new(1943, 4, 14).into();
        assert_eq!(tuple, (1943, 4, 14));
    }

    #[test]
    fn test_ordering() {
        let a = BsDate::new(2080, 1, 31);
        let b = BsDate::new(2080, 2, 1);
        let c = BsDate::new(2081, 1, 1);
        assert!(a < b);
        assert!(b < c);
        assert_eq!(a, a);

        assert!(AdDate::new(1943, 4, 13) < AdDate::new(1943, 4, 14));
    }

    #[test]
    fn test_from_str() {
        let date = "2080-10-15".parse::<BsDate>().unwrap();
        assert_eq!(date, BsDate::new(2080, 10, 15));

        let date = " 1943-4-14 ".parse::<AdDate>().unwrap();
        assert_eq!(date, AdDate::new(1943, 4, 14));
    }

    #[test]
    fn test_from_str_errors() {
        assert!(matches!("".parse::<BsDate>(), Err(ParseError::EmptyInput)));
        assert!(matches!(
            "2080-10".parse::<BsDate>(),
            Err(ParseError::InvalidFormat(_))
        ));
        assert!(matches!(
            "2080-x-15".parse::<BsDate>(),
            Err(ParseError::InvalidNumber(_))
        ));
        assert!(matches!(
            "2080/10/15".parse::<AdDate>(),
            Err(ParseError::InvalidFormat(_))
        ));
    }

    #[test]
    fn test_serde() {
        let date = BsDate::new(2080, 10, 15);
        let json = serde_json::to_string(&date).unwrap();
        assert_eq!(json, r#"{"year":2080,"month":10,"day":15}"#);

        let parsed: BsDate = serde_json::from_str(&json).unwrap();
        assert_eq!(date, parsed);
    }

    #[test]
    fn test_is_leap_year_cases() {
        struct TestCase {
            year: u16,
            is_leap: bool,
            description: &'static str,
        }

        let cases = [
            TestCase {
                year: 2020,
                is_leap: true,
                description: "divisible by 4",
            },
            TestCase {
                year: 2024,
                is_leap: true,
                description: "divisible by 4",
            },
            TestCase {
                year: 2023,
                is_leap: false,
                description: "not divisible by 4",
            },
            TestCase {
                year: 1900,
                is_leap: false,
                description: "century not divisible by 400",
            },
            TestCase {
                year: 2100,
                is_leap: false,
                description: "century not divisible by 400",
            },
            TestCase {
                year: 2000,
                is_leap: true,
                description: "divisible by 400",
            },
            TestCase {
                year: 2400,
                is_leap: true,
                description: "divisible by 400",
            },
        ];

        for case in &cases {
            assert_eq!(
                is_leap_year(case.year),
                case.is_leap,
                "Year {} ({}): expected {}",
                case.year,
                case.description,
                if case.is_leap {
                    "leap year"
                } else {
                    "not leap year"
                }
            );
        }
    }

    #[test]
    fn test_days_in_gregorian_month() {
        let expected = [0, 31, 28, 31, 30, 31, 30, 31, 31, 30, 31, 30, 31];
        for month in 1..=12 {
            assert_eq!(
                days_in_gregorian_month(2023, month),
                expected[month as usize],
                "Month {month} has incorrect day count"
            );
        }
        assert_eq!(days_in_gregorian_month(2024, 2), 29);
        assert_eq!(days_in_gregorian_month(2000, 2), 29, "Century year divisible by 400");
        assert_eq!(days_in_gregorian_month(1900, 2), 28, "Century year not divisible by 400");
    }

    #[test]
    fn test_days_in_gregorian_month_out_of_range() {
        assert_eq!(days_in_gregorian_month(2024, 0), 0);
        assert_eq!(days_in_gregorian_month(2024, 13), 0);
    }
}
