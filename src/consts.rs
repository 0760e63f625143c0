/// Smallest Gregorian year accepted by the AD validator
pub const MIN_AD_YEAR: u16 = 1;
/// Largest Gregorian year accepted by the AD validator (inclusive)
pub const MAX_AD_YEAR: u16 = 9999;

/// Months in both calendars
pub const MONTHS_PER_YEAR: u8 = 12;

/// Maximum valid month (Chaitra / December)
pub const MAX_MONTH: u8 = 12;

/// First day of month, used for lower bounds
pub const MIN_DAY: u8 = 1;

/// Month number for Baisakh / January
pub const FIRST_MONTH: u8 = 1;
/// Month number for Chaitra / December
pub const LAST_MONTH: u8 = 12;
/// Month number for February
pub const FEBRUARY: u8 = 2;

/// Days in February for leap years
pub const FEBRUARY_DAYS_LEAP: u8 = 29;

/// Days in each Gregorian month (index 0 is unused, months are 1-indexed)
/// February shows 28 days (non-leap year default)
pub const DAYS_IN_MONTH: [u8; 13] = [
    0,  // index 0 unused (months are 1-indexed)
    31, // January
    28, // February (non-leap, adjusted by is_leap_year check)
    31, // March
    30, // April
    31, // May
    30, // June
    31, // July
    31, // August
    30, // September
    31, // October
    30, // November
    31, // December
];

/// Shortest observed BS month
pub const MIN_BS_MONTH_DAYS: u8 = 29;
/// Longest observed BS month
pub const MAX_BS_MONTH_DAYS: u8 = 32;

/// Lower bound for a plausible BS year total
pub const MIN_BS_YEAR_DAYS: u16 = 354;
/// Upper bound for a plausible BS year total
pub const MAX_BS_YEAR_DAYS: u16 = 385;

/// Leap year occurs every 4 years
pub(crate) const LEAP_YEAR_CYCLE: u16 = 4;
/// Century years are not leap years unless...
pub(crate) const CENTURY_CYCLE: u16 = 100;
/// ...they are divisible by 400 (Gregorian calendar correction)
pub(crate) const GREGORIAN_CYCLE: u16 = 400;

/// Date component separator (ISO 8601 format)
pub const DATE_SEPARATOR: char = '-';
/// Alternate separator accepted by the slash patterns
pub const SLASH_SEPARATOR: char = '/';

/// Pattern tokens
pub const YEAR_TOKEN: &str = "YYYY";
pub const MONTH_TOKEN: &str = "MM";
pub const DAY_TOKEN: &str = "DD";
