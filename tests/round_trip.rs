//! BS -> AD -> BS and AD -> BS -> AD are identities over the whole table.

use bikram_sambat::{AdDate, BsDate, Calendar, CalendarError};

#[test]
fn bs_round_trip_across_every_month() {
    let calendar = Calendar::bundled();
    for (year, row) in calendar.table().years() {
        for (index, &length) in row.iter().enumerate() {
            let month = u8::try_from(index + 1).unwrap();
            for day in [1, 15, length - 1, length] {
                let bs = BsDate::new(year, month, day);
                let ad = calendar.bs_to_ad(bs).unwrap();
                assert_eq!(calendar.ad_to_bs(ad).unwrap(), bs, "BS {bs} via AD {ad}");
            }
        }
    }
}

#[test]
fn ad_round_trip_across_supported_span() {
    let calendar = Calendar::bundled();
    let last = calendar.bs_to_ad(BsDate::new(2100, 12, 30)).unwrap();

    for year in 1943..=last.year {
        for month in 1..=12u8 {
            for day in [1, 14, 28] {
                let ad = AdDate::new(year, month, day);
                if ad < calendar.anchor().ad || ad > last {
                    continue;
                }
                let bs = calendar.ad_to_bs(ad).unwrap();
                assert_eq!(calendar.bs_to_ad(bs).unwrap(), ad, "AD {ad} via BS {bs}");
            }
        }
    }
}

#[test]
fn consecutive_ad_days_map_to_consecutive_bs_days() {
    let calendar = Calendar::bundled();
    let mut previous = calendar.ad_to_bs(AdDate::new(2023, 12, 31)).unwrap();
    for day in 1..=31 {
        let current = calendar.ad_to_bs(AdDate::new(2024, 1, day)).unwrap();
        assert_eq!(calendar.days_in_range(previous, current).unwrap(), 1);
        previous = current;
    }
}

#[test]
fn boundaries_of_supported_span() {
    let calendar = Calendar::bundled();
    assert!(matches!(
        calendar.ad_to_bs(AdDate::new(1943, 4, 13)),
        Err(CalendarError::DateBeforeMinimum { .. })
    ));
    assert!(calendar.ad_to_bs(AdDate::new(2044, 4, 12)).is_ok());
    assert!(
        calendar
            .ad_to_bs(AdDate::new(2044, 4, 13))
            .unwrap_err()
            .is_out_of_range()
    );
    assert!(calendar.ad_to_bs(AdDate::new(9999, 12, 31)).unwrap_err().is_out_of_range());
}
