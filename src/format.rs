//! Output shaping and the thin text helpers around it.

use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::consts::{DATE_SEPARATOR, DAY_TOKEN, MONTH_TOKEN, SLASH_SEPARATOR, YEAR_TOKEN};
use crate::error::ParseError;
use crate::prelude::*;
use crate::types::{AdDate, BsDate};

/// Fixed token templates accepted for string output and parsing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Display, Serialize, Deserialize)]
pub enum DatePattern {
    #[default]
    #[display(fmt = "YYYY-MM-DD")]
    #[serde(rename = "YYYY-MM-DD")]
    YearMonthDayDash,
    #[display(fmt = "YYYY/MM/DD")]
    #[serde(rename = "YYYY/MM/DD")]
    YearMonthDaySlash,
    #[display(fmt = "DD-MM-YYYY")]
    #[serde(rename = "DD-MM-YYYY")]
    DayMonthYearDash,
    #[display(fmt = "DD/MM/YYYY")]
    #[serde(rename = "DD/MM/YYYY")]
    DayMonthYearSlash,
    #[display(fmt = "MM-DD-YYYY")]
    #[serde(rename = "MM-DD-YYYY")]
    MonthDayYearDash,
    #[display(fmt = "MM/DD/YYYY")]
    #[serde(rename = "MM/DD/YYYY")]
    MonthDayYearSlash,
}

impl DatePattern {
    pub const ALL: [Self; 6] = [
        Self::YearMonthDayDash,
        Self::YearMonthDaySlash,
        Self::DayMonthYearDash,
        Self::DayMonthYearSlash,
        Self::MonthDayYearDash,
        Self::MonthDayYearSlash,
    ];

    /// Template text, e.g. `"DD/MM/YYYY"`
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::YearMonthDayDash => "YYYY-MM-DD",
            Self::YearMonthDaySlash => "YYYY/MM/DD",
            Self::DayMonthYearDash => "DD-MM-YYYY",
            Self::DayMonthYearSlash => "DD/MM/YYYY",
            Self::MonthDayYearDash => "MM-DD-YYYY",
            Self::MonthDayYearSlash => "MM/DD/YYYY",
        }
    }

    /// Component separator used by the template
    pub const fn separator(self) -> char {
        match self {
            Self::YearMonthDayDash | Self::DayMonthYearDash | Self::MonthDayYearDash => {
                DATE_SEPARATOR
            }
            Self::YearMonthDaySlash | Self::DayMonthYearSlash | Self::MonthDayYearSlash => {
                SLASH_SEPARATOR
            }
        }
    }
}

impl FromStr for DatePattern {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        Self::ALL
            .into_iter()
            .find(|p| p.as_str() == trimmed)
            .ok_or_else(|| ParseError::UnknownPattern(trimmed.to_owned()))
    }
}

/// The `format` key of [`ConversionOptions`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Display, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DateFormat {
    #[default]
    #[display(fmt = "object")]
    Object,
    #[display(fmt = "iso")]
    Iso,
    #[display(fmt = "string")]
    String,
    #[display(fmt = "array")]
    Array,
}

impl FromStr for DateFormat {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "object" => Ok(Self::Object),
            "iso" => Ok(Self::Iso),
            "string" => Ok(Self::String),
            "array" => Ok(Self::Array),
            other => Err(ParseError::UnknownFormat(other.to_owned())),
        }
    }
}

/// Caller-facing shaping configuration.
///
/// Deserializes from `{"format": "string", "pattern": "DD/MM/YYYY"}`; both
/// keys are optional. `pattern` only matters for the `string` format.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ConversionOptions {
    pub format: DateFormat,
    pub pattern: Option<DatePattern>,
}

impl ConversionOptions {
    pub const fn new(format: DateFormat) -> Self {
        Self {
            format,
            pattern: None,
        }
    }

    #[must_use]
    pub const fn with_pattern(mut self, pattern: DatePattern) -> Self {
        self.pattern = Some(pattern);
        self
    }
}

/// How a converted date is rendered.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum OutputFormat {
    /// The date record itself
    #[default]
    Object,
    /// `YYYY-MM-DD`
    Iso,
    /// A token template
    Pattern(DatePattern),
    /// `[year, month, day]`
    Array,
}

impl From<ConversionOptions> for OutputFormat {
    fn from(options: ConversionOptions) -> Self {
        match options.format {
            DateFormat::Object => Self::Object,
            DateFormat::Iso => Self::Iso,
            DateFormat::String => Self::Pattern(options.pattern.unwrap_or_default()),
            DateFormat::Array => Self::Array,
        }
    }
}

/// A date rendered per an [`OutputFormat`].
///
/// Serializes untagged, so `Object` becomes `{"year":..}`, `Iso`/`Text` a
/// string and `Array` a three-element list.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(untagged)]
pub enum FormattedDate<D> {
    Object(D),
    Iso(String),
    Text(String),
    Array([u16; 3]),
}

impl<D> FormattedDate<D> {
    /// Returns the record for `Object`, `None` otherwise
    pub fn into_date(self) -> Option<D> {
        match self {
            Self::Object(date) => Some(date),
            Self::Iso(_) | Self::Text(_) | Self::Array(_) => None,
        }
    }

    /// Returns the text for `Iso` and `Text`, `None` otherwise
    pub fn as_text(&self) -> Option<&str> {
        match self {
            Self::Iso(text) | Self::Text(text) => Some(text),
            Self::Object(_) | Self::Array(_) => None,
        }
    }
}

impl OutputFormat {
    /// Renders `date`. Shaping itself never fails.
    pub fn apply<D>(self, date: D) -> FormattedDate<D>
    where
        D: Copy + Into<(u16, u8, u8)>,
    {
        let (year, month, day) = date.into();
        match self {
            Self::Object => FormattedDate::Object(date),
            Self::Iso => FormattedDate::Iso(format_with_pattern(
                year,
                month,
                day,
                DatePattern::YearMonthDayDash.as_str(),
            )),
            Self::Pattern(pattern) => {
                FormattedDate::Text(format_with_pattern(year, month, day, pattern.as_str()))
            }
            Self::Array => FormattedDate::Array([year, u16::from(month), u16::from(day)]),
        }
    }
}

/// Replaces the first `YYYY`, `MM` and `DD` in `pattern`; month and day are
/// zero-padded to two digits. Tokens missing from `pattern` are skipped.
pub fn format_with_pattern(year: u16, month: u8, day: u8, pattern: &str) -> String {
    pattern
        .replacen(YEAR_TOKEN, &year.to_string(), 1)
        .replacen(MONTH_TOKEN, &format!("{month:02}"), 1)
        .replacen(DAY_TOKEN, &format!("{day:02}"), 1)
}

/// Renders a BS date with a template
pub fn format_bs_date(date: BsDate, pattern: DatePattern) -> String {
    format_with_pattern(date.year, date.month, date.day, pattern.as_str())
}

/// Renders an AD date with a template
pub fn format_ad_date(date: AdDate, pattern: DatePattern) -> String {
    format_with_pattern(date.year, date.month, date.day, pattern.as_str())
}

/// Splits `text` per `pattern` into (year, month, day).
///
/// Only the shape is checked; calendar validity is left to the validators.
///
/// # Errors
/// `EmptyInput`, `InvalidFormat` when the separator count is wrong or a
/// component is zero, `InvalidNumber` when a component is not numeric.
pub fn parse_date(text: &str, pattern: DatePattern) -> Result<(u16, u8, u8), ParseError> {
    let trimmed = text.trim();
    if trimmed.is_empty() {
        return Err(ParseError::EmptyInput);
    }

    let separator = pattern.separator();
    let parts: Vec<&str> = trimmed.split(separator).map(str::trim).collect();
    if parts.len() != 3 {
        return Err(ParseError::InvalidFormat(trimmed.to_owned()));
    }

    let (mut year, mut month, mut day) = (0u16, 0u8, 0u8);
    for (token, part) in pattern.as_str().split(separator).zip(parts) {
        let invalid = || ParseError::InvalidNumber(trimmed.to_owned());
        match token {
            YEAR_TOKEN => year = part.parse().map_err(|_| invalid())?,
            MONTH_TOKEN => month = part.parse().map_err(|_| invalid())?,
            DAY_TOKEN => day = part.parse().map_err(|_| invalid())?,
            _ => {}
        }
    }

    if year == 0 || month == 0 || day == 0 {
        return Err(ParseError::InvalidFormat(trimmed.to_owned()));
    }
    Ok((year, month, day))
}
