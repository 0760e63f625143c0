//! Date validity predicates. None of these fail; out-of-range input is `false`.

use crate::consts::{MAX_AD_YEAR, MAX_MONTH, MIN_AD_YEAR, MIN_DAY};
use crate::table::CalendarTable;
use crate::types::days_in_gregorian_month;

impl CalendarTable {
    /// True iff `year` is in the table, `month` is 1-12 and `day` is within
    /// that month's length.
    pub fn is_valid_bs_date(&self, year: u16, month: u8, day: u8) -> bool {
        self.month_length(year, month)
            .is_ok_and(|length| (MIN_DAY..=length).contains(&day))
    }
}

/// True iff the Gregorian date exists and its year is within 1-9999.
pub const fn is_valid_ad_date(year: u16, month: u8, day: u8) -> bool {
    if year < MIN_AD_YEAR || year > MAX_AD_YEAR {
        return false;
    }
    if month == 0 || month > MAX_MONTH {
        return false;
    }
    day >= MIN_DAY && day <= days_in_gregorian_month(year, month)
}
