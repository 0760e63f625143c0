//! The anchor pair and the reference corpus of verified BS/AD pairs.

use serde::{Deserialize, Serialize};

use crate::types::{AdDate, BsDate};

/// BS 2000-01-01, the first day of the bundled table
pub const BASE_BS_DATE: BsDate = BsDate::new(2000, 1, 1);
/// AD 1943-04-14, the Gregorian day equal to [`BASE_BS_DATE`]
pub const BASE_AD_DATE: AdDate = AdDate::new(1943, 4, 14);

/// The zero point of day counting: one BS date stipulated equal to one AD date.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct AnchorPair {
    pub bs: BsDate,
    pub ad: AdDate,
}

impl AnchorPair {
    /// Anchor for the bundled table
    pub const BUNDLED: Self = Self {
        bs: BASE_BS_DATE,
        ad: BASE_AD_DATE,
    };
}

/// A BS/AD pair known from an outside source to be the same day.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ReferenceDatePair {
    pub bs: BsDate,
    pub ad: AdDate,
}

impl ReferenceDatePair {
    pub const fn new(bs: BsDate, ad: AdDate) -> Self {
        Self { bs, ad }
    }
}

impl From<AnchorPair> for ReferenceDatePair {
    fn from(anchor: AnchorPair) -> Self {
        Self::new(anchor.bs, anchor.ad)
    }
}

/// Verified pairs, anchor first. Mostly Baisakh 1 (BS new year) of recent years.
pub const REFERENCE_DATES: &[ReferenceDatePair] = &[
    ReferenceDatePair::new(BASE_BS_DATE, BASE_AD_DATE),
    ReferenceDatePair::new(BsDate::new(2057, 1, 1), AdDate::new(2000, 4, 13)),
    ReferenceDatePair::new(BsDate::new(2070, 1, 1), AdDate::new(2013, 4, 14)),
    ReferenceDatePair::new(BsDate::new(2079, 1, 1), AdDate::new(2022, 4, 14)),
    ReferenceDatePair::new(BsDate::new(2080, 1, 1), AdDate::new(2023, 4, 14)),
    ReferenceDatePair::new(BsDate::new(2080, 10, 1), AdDate::new(2024, 1, 15)),
    ReferenceDatePair::new(BsDate::new(2080, 10, 15), AdDate::new(2024, 1, 29)),
    ReferenceDatePair::new(BsDate::new(2081, 1, 1), AdDate::new(2024, 4, 13)),
    ReferenceDatePair::new(BsDate::new(2082, 1, 1), AdDate::new(2025, 4, 14)),
];
