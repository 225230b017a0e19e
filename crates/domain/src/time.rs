//! Time and timestamp helpers.
//!
//! All due-date math works on whole office-local calendar days, never raw
//! elapsed hours. Offices carry a fixed UTC offset; conversions go through
//! [`chrono::FixedOffset`].

use chrono::{DateTime, Datelike, FixedOffset, Utc};
use serde::{Deserialize, Serialize};

/// UTC timestamp used for scheduled starts, completion dates, event times, etc.
pub type Timestamp = DateTime<Utc>;

/// Return the current UTC time.
#[must_use]
pub fn now() -> Timestamp {
    Utc::now()
}

/// Count whole calendar days between two instants, as seen from an office
/// with the given UTC offset.
///
/// Day boundaries are office-local midnights: an instant at 23:59 and one at
/// 00:01 the next local day are exactly one day apart, regardless of the
/// hours elapsed between them. Negative when `to` is before `from`.
#[must_use]
pub fn local_days_between(from: Timestamp, to: Timestamp, offset: FixedOffset) -> i64 {
    let from = from.with_timezone(&offset).date_naive();
    let to = to.with_timezone(&offset).date_naive();
    (to - from).num_days()
}

/// Seasonal window used by the due-threshold table.
///
/// Summer runs April through October (office-local months); the rest of the
/// year is winter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Season {
    Summer,
    Winter,
}

impl Season {
    /// Season at the given instant, as seen from an office with the given
    /// UTC offset.
    #[must_use]
    pub fn at(instant: Timestamp, offset: FixedOffset) -> Self {
        let month = instant.with_timezone(&offset).month();
        if (4..=10).contains(&month) {
            Self::Summer
        } else {
            Self::Winter
        }
    }
}

#[cfg(test)]
mod tests {
    use chrono::TimeZone;

    use super::*;

    fn utc(y: i32, mo: u32, d: u32, h: u32, mi: u32) -> Timestamp {
        Utc.with_ymd_and_hms(y, mo, d, h, mi, 0).unwrap()
    }

    #[test]
    fn should_return_current_utc_time() {
        let before = Utc::now();
        let ts = now();
        let after = Utc::now();
        assert!(ts >= before);
        assert!(ts <= after);
    }

    #[test]
    fn should_count_calendar_days_not_elapsed_hours() {
        let offset = FixedOffset::east_opt(0).unwrap();
        // 23:59 to 00:01 the next day: two minutes, one calendar day.
        let from = utc(2026, 3, 1, 23, 59);
        let to = utc(2026, 3, 2, 0, 1);
        assert_eq!(local_days_between(from, to, offset), 1);
        // 00:01 to 23:59 the same day: almost a full day, zero calendar days.
        let from = utc(2026, 3, 1, 0, 1);
        let to = utc(2026, 3, 1, 23, 59);
        assert_eq!(local_days_between(from, to, offset), 0);
    }

    #[test]
    fn should_apply_office_offset_before_counting_days() {
        // 23:00 UTC is already the next day in a UTC+2 office.
        let offset = FixedOffset::east_opt(2 * 3600).unwrap();
        let from = utc(2026, 3, 1, 23, 0);
        let to = utc(2026, 3, 2, 1, 0);
        assert_eq!(local_days_between(from, to, offset), 0);
    }

    #[test]
    fn should_count_negative_days_when_reversed() {
        let offset = FixedOffset::east_opt(0).unwrap();
        let from = utc(2026, 3, 5, 12, 0);
        let to = utc(2026, 3, 2, 12, 0);
        assert_eq!(local_days_between(from, to, offset), -3);
    }

    #[test]
    fn should_classify_april_through_october_as_summer() {
        let offset = FixedOffset::east_opt(0).unwrap();
        assert_eq!(Season::at(utc(2026, 4, 1, 0, 0), offset), Season::Summer);
        assert_eq!(Season::at(utc(2026, 7, 15, 12, 0), offset), Season::Summer);
        assert_eq!(Season::at(utc(2026, 10, 31, 23, 0), offset), Season::Summer);
    }

    #[test]
    fn should_classify_november_through_march_as_winter() {
        let offset = FixedOffset::east_opt(0).unwrap();
        assert_eq!(Season::at(utc(2026, 11, 1, 0, 0), offset), Season::Winter);
        assert_eq!(Season::at(utc(2026, 1, 15, 12, 0), offset), Season::Winter);
        assert_eq!(Season::at(utc(2026, 3, 31, 23, 0), offset), Season::Winter);
    }

    #[test]
    fn should_use_office_local_month_for_season() {
        // 23:00 UTC on Oct 31 is already Nov 1 in a UTC+2 office.
        let offset = FixedOffset::east_opt(2 * 3600).unwrap();
        assert_eq!(Season::at(utc(2026, 10, 31, 23, 0), offset), Season::Winter);
    }
}
