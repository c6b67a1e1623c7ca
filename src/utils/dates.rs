use chrono::{DateTime, Days, FixedOffset, NaiveDate, Offset, Utc};

/// Snapshot days roll over at midnight UTC+8.
pub const REFERENCE_OFFSET_SECS: i32 = 8 * 3600;

/// Number of snapshot slots: today plus seven prior days.
pub const SNAPSHOT_SLOTS: usize = 8;

pub fn reference_offset() -> FixedOffset {
    FixedOffset::east_opt(REFERENCE_OFFSET_SECS).unwrap_or_else(|| Utc.fix())
}

/// Calendar date of `now` in the reference timezone.
pub fn reference_date(now: DateTime<Utc>) -> NaiveDate {
    now.with_timezone(&reference_offset()).date_naive()
}

pub fn days_after(now: DateTime<Utc>, days: u64) -> Option<NaiveDate> {
    reference_date(now).checked_add_days(Days::new(days))
}

/// Request dates for the snapshot slots. Slot 0 is `None` and means "latest".
pub fn snapshot_dates(now: DateTime<Utc>) -> [Option<NaiveDate>; SNAPSHOT_SLOTS] {
    let today = reference_date(now);
    let mut dates = [None; SNAPSHOT_SLOTS];
    for (offset, slot) in dates.iter_mut().enumerate().skip(1) {
        *slot = today.checked_sub_days(Days::new(offset as u64));
    }
    dates
}

#[cfg(test)]
mod tests {
    use super::{days_after, reference_date, snapshot_dates};
    use chrono::{NaiveDate, TimeZone, Utc};

    #[test]
    fn test_reference_date_rolls_over_at_utc_16() {
        let before = Utc.with_ymd_and_hms(2024, 3, 10, 15, 59, 0).unwrap();
        let after = Utc.with_ymd_and_hms(2024, 3, 10, 16, 0, 0).unwrap();

        assert_eq!(reference_date(before), NaiveDate::from_ymd_opt(2024, 3, 10).unwrap());
        assert_eq!(reference_date(after), NaiveDate::from_ymd_opt(2024, 3, 11).unwrap());
    }

    #[test]
    fn test_snapshot_dates() {
        let now = Utc.with_ymd_and_hms(2024, 3, 2, 20, 0, 0).unwrap();
        let dates = snapshot_dates(now);

        assert_eq!(dates[0], None);
        assert_eq!(dates[1], NaiveDate::from_ymd_opt(2024, 3, 2));
        assert_eq!(dates[2], NaiveDate::from_ymd_opt(2024, 3, 1));
        assert_eq!(dates[3], NaiveDate::from_ymd_opt(2024, 2, 29));
        assert_eq!(dates[7], NaiveDate::from_ymd_opt(2024, 2, 25));
    }

    #[test]
    fn test_days_after() {
        let now = Utc.with_ymd_and_hms(2024, 12, 30, 1, 0, 0).unwrap();
        assert_eq!(days_after(now, 2), NaiveDate::from_ymd_opt(2025, 1, 1));
        assert_eq!(days_after(now, u64::MAX), None);
    }
}
