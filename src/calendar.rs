//! The calendar facade: one month-length table plus the anchor pair.

use std::sync::LazyLock;

use crate::consts::{FIRST_MONTH, MIN_DAY};
use crate::error::{CalendarError, DataError};
use crate::reference::{AnchorPair, ReferenceDatePair};
use crate::table::CalendarTable;
use crate::types::{AdDate, BsDate};
use crate::validate::is_valid_ad_date;

static BUNDLED: LazyLock<Calendar> = LazyLock::new(|| Calendar {
    table: CalendarTable::bundled(),
    anchor: AnchorPair::BUNDLED,
});

/// An immutable calendar: every conversion and table query goes through one.
///
/// A `Calendar` is `Send + Sync` and holds no interior mutability, so one
/// instance can be shared by any number of threads.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Calendar {
    table: CalendarTable,
    anchor: AnchorPair,
}

/// Which half of a reference pair disagreed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MismatchKind {
    /// BS side converted to a different AD date
    BsToAd { got: AdDate },
    /// AD side converted to a different BS date
    AdToBs { got: BsDate },
    /// The conversion was rejected
    Failed(CalendarError),
}

/// A reference pair the calendar does not reproduce.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReferenceMismatch {
    pub index: usize,
    pub pair: ReferenceDatePair,
    pub kind: MismatchKind,
}

impl Calendar {
    /// Builds a calendar from a table and the pair anchoring it.
    ///
    /// The anchor must be the first day of the table's first year, and its AD
    /// side must be a valid Gregorian date.
    ///
    /// # Errors
    /// `AnchorNotInTable` when the anchor year has no row, `InvalidAnchor`
    /// when the anchor is not the table's first day or the AD side is invalid.
    pub fn new(table: CalendarTable, anchor: AnchorPair) -> Result<Self, DataError> {
        if !table.has_year(anchor.bs.year) {
            return Err(DataError::AnchorNotInTable {
                year: anchor.bs.year,
            });
        }
        let first_day = BsDate::new(table.min_year(), FIRST_MONTH, MIN_DAY);
        let AdDate { year, month, day } = anchor.ad;
        if anchor.bs != first_day || !is_valid_ad_date(year, month, day) {
            return Err(DataError::InvalidAnchor);
        }
        Ok(Self { table, anchor })
    }

    /// The bundled BS 2000-2100 calendar anchored at BS 2000-01-01 = AD 1943-04-14.
    pub fn bundled() -> &'static Self {
        &BUNDLED
    }

    pub const fn table(&self) -> &CalendarTable {
        &self.table
    }

    pub const fn anchor(&self) -> AnchorPair {
        self.anchor
    }

    /// See [`CalendarTable::is_valid_bs_date`]
    pub fn is_valid_bs_date(&self, date: BsDate) -> bool {
        self.table.is_valid_bs_date(date.year, date.month, date.day)
    }

    /// Converts every pair in both directions and collects the disagreements.
    pub fn verify_reference_dates(&self, pairs: &[ReferenceDatePair]) -> Vec<ReferenceMismatch> {
        let mut mismatches = Vec::new();
        for (index, &pair) in pairs.iter().enumerate() {
            let mut report = |kind| {
                mismatches.push(ReferenceMismatch { index, pair, kind });
            };

            match self.bs_to_ad(pair.bs) {
                Ok(got) if got != pair.ad => report(MismatchKind::BsToAd { got }),
                Ok(_) => {}
                Err(e) => report(MismatchKind::Failed(e)),
            }
            match self.ad_to_bs(pair.ad) {
                Ok(got) if got != pair.bs => report(MismatchKind::AdToBs { got }),
                Ok(_) => {}
                Err(e) => report(MismatchKind::Failed(e)),
            }
        }
        mismatches
    }
}
