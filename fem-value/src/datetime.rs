//! Calendar timestamp payload.
//!
//! A `VDatetime` is a pair of counts:
//!
//! - **days** since the first day of the Gregorian calendar, Friday
//!   1582-10-15 (day `0`), up to 9999-12-31 (day `3_074_323`)
//! - **millis** since midnight, `0..86_400_000`
//!
//! There is no time zone. The wire text is `W<days>,<millis>`; `Display`
//! renders the calendar form `1582-10-15T00:00:00.000`.

use core::fmt;

use chrono::{Datelike, Days, NaiveDate, NaiveDateTime, NaiveTime, Timelike, Weekday};

use crate::error::ValueError;

/// A calendar timestamp with millisecond precision.
#[derive(Copy, Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct VDatetime {
    days: i32,
    millis: i32,
}

/// Day 0 of the calendar day count.
fn gregorian_epoch() -> NaiveDate {
    NaiveDate::from_ymd_opt(1582, 10, 15).expect("1582-10-15 is a valid date")
}

impl VDatetime {
    /// Largest valid day count (9999-12-31).
    pub const MAX_DAYS: i32 = 3_074_323;

    /// Number of milliseconds in a day; `millis` is always below this.
    pub const MILLIS_PER_DAY: i32 = 86_400_000;

    /// 1582-10-15T00:00:00.000
    pub const EPOCH: Self = Self { days: 0, millis: 0 };

    /// Creates a timestamp from its day and millisecond counts.
    pub fn new(days: i32, millis: i32) -> Result<Self, ValueError> {
        if !(0..=Self::MAX_DAYS).contains(&days) {
            return Err(ValueError::invalid(format!(
                "calendar day {days} outside 0..={}",
                Self::MAX_DAYS
            )));
        }
        if !(0..Self::MILLIS_PER_DAY).contains(&millis) {
            return Err(ValueError::invalid(format!(
                "day millis {millis} outside 0..{}",
                Self::MILLIS_PER_DAY
            )));
        }
        Ok(Self { days, millis })
    }

    /// Creates a timestamp from calendar fields.
    #[allow(clippy::too_many_arguments)]
    pub fn from_ymd_hms_milli(
        year: i32,
        month: u32,
        day: u32,
        hour: u32,
        minute: u32,
        second: u32,
        milli: u32,
    ) -> Result<Self, ValueError> {
        let date = NaiveDate::from_ymd_opt(year, month, day)
            .ok_or_else(|| ValueError::invalid(format!("no such date {year}-{month}-{day}")))?;
        let time = NaiveTime::from_hms_milli_opt(hour, minute, second, milli).ok_or_else(|| {
            ValueError::invalid(format!("no such time {hour}:{minute}:{second}.{milli}"))
        })?;
        Self::from_naive_opt(date.and_time(time))
            .ok_or_else(|| ValueError::invalid(format!("{date} is before 1582-10-15 or after 9999")))
    }

    /// Converts from a chrono timestamp, truncating to milliseconds.
    ///
    /// Fails with an unsupported-conversion error outside 1582-10-15..=9999-12-31.
    pub fn from_naive(datetime: NaiveDateTime) -> Result<Self, ValueError> {
        Self::from_naive_opt(datetime).ok_or_else(|| {
            ValueError::unsupported(format!(
                "{datetime} lies outside the Gregorian range 1582-10-15..=9999-12-31"
            ))
        })
    }

    fn from_naive_opt(datetime: NaiveDateTime) -> Option<Self> {
        let days = datetime
            .date()
            .signed_duration_since(gregorian_epoch())
            .num_days();
        let days = i32::try_from(days).ok()?;
        if !(0..=Self::MAX_DAYS).contains(&days) {
            return None;
        }
        let time = datetime.time();
        // leap seconds report nanos >= 1e9
        let sub_millis = (time.nanosecond() / 1_000_000).min(999);
        let millis = time.num_seconds_from_midnight() * 1000 + sub_millis;
        Some(Self {
            days,
            millis: millis as i32,
        })
    }

    /// Converts to a chrono timestamp.
    #[must_use]
    pub fn to_naive(&self) -> NaiveDateTime {
        let date = gregorian_epoch() + Days::new(self.days as u64);
        let secs = (self.millis / 1000) as u32;
        let nanos = (self.millis % 1000) as u32 * 1_000_000;
        let time = NaiveTime::from_num_seconds_from_midnight_opt(secs, nanos)
            .expect("day millis are below 86_400_000");
        date.and_time(time)
    }

    /// Days since 1582-10-15.
    #[must_use]
    pub const fn days(&self) -> i32 {
        self.days
    }

    /// Milliseconds since midnight.
    #[must_use]
    pub const fn millis(&self) -> i32 {
        self.millis
    }

    /// Day of the week.
    #[must_use]
    pub fn weekday(&self) -> Weekday {
        self.to_naive().weekday()
    }
}

impl fmt::Display for VDatetime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_naive().format("%Y-%m-%dT%H:%M:%S%.3f"))
    }
}

impl TryFrom<NaiveDateTime> for VDatetime {
    type Error = ValueError;

    fn try_from(datetime: NaiveDateTime) -> Result<Self, Self::Error> {
        Self::from_naive(datetime)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ValueErrorKind;

    #[test]
    fn day_zero_is_gregorian_start() {
        let epoch = VDatetime::EPOCH.to_naive();
        assert_eq!(epoch.date(), NaiveDate::from_ymd_opt(1582, 10, 15).unwrap());
        assert_eq!(VDatetime::EPOCH.weekday(), Weekday::Fri);
        assert_eq!(VDatetime::EPOCH.to_string(), "1582-10-15T00:00:00.000");
    }

    #[test]
    fn last_day_is_end_of_9999() {
        let last = VDatetime::new(VDatetime::MAX_DAYS, VDatetime::MILLIS_PER_DAY - 1).unwrap();
        assert_eq!(last.to_string(), "9999-12-31T23:59:59.999");
    }

    #[test]
    fn calendar_fields_round_trip() {
        let dt = VDatetime::from_ymd_hms_milli(2024, 2, 29, 13, 45, 7, 250).unwrap();
        assert_eq!(dt.to_string(), "2024-02-29T13:45:07.250");
        assert_eq!(VDatetime::from_naive(dt.to_naive()).unwrap(), dt);
        assert_eq!(dt.millis(), 13 * 3_600_000 + 45 * 60_000 + 7_000 + 250);
    }

    #[test]
    fn rejects_out_of_range_parts() {
        assert!(VDatetime::new(-1, 0).is_err());
        assert!(VDatetime::new(VDatetime::MAX_DAYS + 1, 0).is_err());
        assert!(VDatetime::new(0, VDatetime::MILLIS_PER_DAY).is_err());
        assert!(VDatetime::from_ymd_hms_milli(1582, 10, 14, 0, 0, 0, 0).is_err());
        assert!(VDatetime::from_ymd_hms_milli(2023, 2, 29, 0, 0, 0, 0).is_err());
    }

    #[test]
    fn chrono_outside_window_is_unsupported() {
        let early = NaiveDate::from_ymd_opt(1500, 1, 1)
            .unwrap()
            .and_hms_opt(0, 0, 0)
            .unwrap();
        let err = VDatetime::from_naive(early).unwrap_err();
        assert!(matches!(
            err.kind,
            ValueErrorKind::UnsupportedConversion { .. }
        ));
    }

    #[test]
    fn sub_millisecond_precision_is_truncated() {
        let dt = NaiveDate::from_ymd_opt(2000, 1, 1)
            .unwrap()
            .and_hms_nano_opt(0, 0, 1, 999_999_999)
            .unwrap();
        assert_eq!(VDatetime::from_naive(dt).unwrap().millis(), 1_999);
    }
}
