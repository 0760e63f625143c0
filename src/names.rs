//! Month names: BS months in English transliteration and Devanagari, and
//! Gregorian months in English.

use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::{CalendarError, ParseError};
use crate::prelude::*;

/// Language of a BS month name.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Display, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Locale {
    #[default]
    #[display(fmt = "en")]
    En,
    #[display(fmt = "ne")]
    Ne,
}

impl FromStr for Locale {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "en" => Ok(Self::En),
            "ne" => Ok(Self::Ne),
            other => Err(ParseError::UnknownLocale(other.to_owned())),
        }
    }
}

/// The twelve BS months, Baisakh = 1.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Display, Serialize, Deserialize,
)]
#[repr(u8)]
pub enum NepaliMonth {
    #[display(fmt = "Baisakh")]
    Baisakh = 1,
    #[display(fmt = "Jestha")]
    Jestha = 2,
    #[display(fmt = "Ashar")]
    Ashar = 3,
    #[display(fmt = "Shrawan")]
    Shrawan = 4,
    #[display(fmt = "Bhadra")]
    Bhadra = 5,
    #[display(fmt = "Ashwin")]
    Ashwin = 6,
    #[display(fmt = "Kartik")]
    Kartik = 7,
    #[display(fmt = "Mangsir")]
    Mangsir = 8,
    #[display(fmt = "Poush")]
    Poush = 9,
    #[display(fmt = "Magh")]
    Magh = 10,
    #[display(fmt = "Falgun")]
    Falgun = 11,
    #[display(fmt = "Chaitra")]
    Chaitra = 12,
}

const NEPALI_MONTHS: [NepaliMonth; 12] = [
    NepaliMonth::Baisakh,
    NepaliMonth::Jestha,
    NepaliMonth::Ashar,
    NepaliMonth::Shrawan,
    NepaliMonth::Bhadra,
    NepaliMonth::Ashwin,
    NepaliMonth::Kartik,
    NepaliMonth::Mangsir,
    NepaliMonth::Poush,
    NepaliMonth::Magh,
    NepaliMonth::Falgun,
    NepaliMonth::Chaitra,
];

const NEPALI_MONTH_NAMES_EN: [&str; 12] = [
    "Baisakh", "Jestha", "Ashar", "Shrawan", "Bhadra", "Ashwin", "Kartik", "Mangsir", "Poush",
    "Magh", "Falgun", "Chaitra",
];

const NEPALI_MONTH_NAMES_NE: [&str; 12] = [
    "बैशाख",
    "जेठ",
    "असार",
    "श्रावण",
    "भाद्र",
    "आश्विन",
    "कार्तिक",
    "मंसिर",
    "पौष",
    "माघ",
    "फाल्गुन",
    "चैत्र",
];

const ENGLISH_MONTH_NAMES: [&str; 12] = [
    "January",
    "February",
    "March",
    "April",
    "May",
    "June",
    "July",
    "August",
    "September",
    "October",
    "November",
    "December",
];

impl NepaliMonth {
    /// Month number, 1-12
    pub const fn number(self) -> u8 {
        self as u8
    }

    /// Name in the given locale
    pub const fn name(self, locale: Locale) -> &'static str {
        let index = self as usize - 1;
        match locale {
            Locale::En => NEPALI_MONTH_NAMES_EN[index],
            Locale::Ne => NEPALI_MONTH_NAMES_NE[index],
        }
    }
}

impl TryFrom<u8> for NepaliMonth {
    type Error = CalendarError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        value
            .checked_sub(1)
            .and_then(|i| NEPALI_MONTHS.get(usize::from(i)))
            .copied()
            .ok_or(CalendarError::InvalidMonth(value))
    }
}

impl From<NepaliMonth> for u8 {
    fn from(month: NepaliMonth) -> Self {
        month.number()
    }
}

/// Name of BS month `month` (1-12).
///
/// # Errors
/// `InvalidMonth` outside 1-12.
pub fn nepali_month_name(month: u8, locale: Locale) -> Result<&'static str, CalendarError> {
    NepaliMonth::try_from(month).map(|m| m.name(locale))
}

/// English name of Gregorian month `month` (1-12).
///
/// # Errors
/// `InvalidMonth` outside 1-12.
pub fn english_month_name(month: u8) -> Result<&'static str, CalendarError> {
    month
        .checked_sub(1)
        .and_then(|i| ENGLISH_MONTH_NAMES.get(usize::from(i)))
        .copied()
        .ok_or(CalendarError::InvalidMonth(month))
}
