//! Elapsed time span payload.
//!
//! A `VDuration` holds a relative part in **months** and an absolute part in
//! **millis**. Months cannot be converted to a fixed number of days, so the
//! two parts are kept apart. Both carry the same sign: a span is either
//! entirely forwards or entirely backwards in time.
//!
//! The wire text is `H<months>,<millis>`; `Display` renders ISO 8601
//! (`P1Y2M3DT4H5M6.007S`).

use core::fmt;

use chrono::TimeDelta;

use crate::error::ValueError;

const MILLIS_PER_SECOND: i64 = 1_000;
const MILLIS_PER_MINUTE: i64 = 60 * MILLIS_PER_SECOND;
const MILLIS_PER_HOUR: i64 = 60 * MILLIS_PER_MINUTE;
const MILLIS_PER_DAY: i64 = 24 * MILLIS_PER_HOUR;

/// A time span of months plus milliseconds.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub struct VDuration {
    months: i32,
    millis: i64,
}

impl VDuration {
    /// Largest magnitude of the month part.
    pub const MAX_MONTHS: i32 = 119_999;

    /// Largest magnitude of the millisecond part (one millisecond short of 10000 years).
    pub const MAX_MILLIS: i64 = 315_569_519_999_999;

    /// The empty span.
    pub const ZERO: Self = Self {
        months: 0,
        millis: 0,
    };

    /// Creates a span from its month and millisecond parts.
    pub fn new(months: i32, millis: i64) -> Result<Self, ValueError> {
        if months.unsigned_abs() > Self::MAX_MONTHS as u32 {
            return Err(ValueError::invalid(format!(
                "duration months {months} outside ±{}",
                Self::MAX_MONTHS
            )));
        }
        if millis.unsigned_abs() > Self::MAX_MILLIS as u64 {
            return Err(ValueError::invalid(format!(
                "duration millis {millis} outside ±{}",
                Self::MAX_MILLIS
            )));
        }
        if (months > 0 && millis < 0) || (months < 0 && millis > 0) {
            return Err(ValueError::invalid(format!(
                "duration parts have opposite signs ({months} months, {millis} millis)"
            )));
        }
        Ok(Self { months, millis })
    }

    /// Creates a span from unsigned components and one overall sign.
    #[allow(clippy::too_many_arguments)]
    pub fn from_parts(
        negative: bool,
        years: u32,
        months: u32,
        days: u32,
        hours: u32,
        minutes: u64,
        seconds: u64,
        millis: u64,
    ) -> Result<Self, ValueError> {
        let overflow = || ValueError::invalid("duration components overflow");
        let total_months = i64::from(years)
            .checked_mul(12)
            .and_then(|m| m.checked_add(i64::from(months)))
            .ok_or_else(overflow)?;
        let total_millis = [
            (u64::from(days), MILLIS_PER_DAY),
            (u64::from(hours), MILLIS_PER_HOUR),
            (minutes, MILLIS_PER_MINUTE),
            (seconds, MILLIS_PER_SECOND),
            (millis, 1),
        ]
        .into_iter()
        .try_fold(0i64, |acc, (count, unit)| {
            i64::try_from(count)
                .ok()
                .and_then(|c| c.checked_mul(unit))
                .and_then(|m| acc.checked_add(m))
        })
        .ok_or_else(overflow)?;
        let total_months = i32::try_from(total_months).map_err(|_| overflow())?;
        if negative {
            Self::new(-total_months, -total_millis)
        } else {
            Self::new(total_months, total_millis)
        }
    }

    /// Converts a chrono span (which has no month part), truncating to milliseconds.
    pub fn from_time_delta(delta: TimeDelta) -> Result<Self, ValueError> {
        Self::new(0, delta.num_milliseconds())
    }

    /// The month part.
    #[must_use]
    pub const fn months(&self) -> i32 {
        self.months
    }

    /// The millisecond part.
    #[must_use]
    pub const fn millis(&self) -> i64 {
        self.millis
    }

    /// `-1`, `0` or `1`.
    #[must_use]
    pub fn signum(&self) -> i32 {
        if self.months != 0 {
            self.months.signum()
        } else {
            self.millis.signum() as i32
        }
    }

    /// The same span pointing the other way.
    #[must_use]
    pub const fn negate(&self) -> Self {
        Self {
            months: -self.months,
            millis: -self.millis,
        }
    }

    /// Returns `true` for the empty span.
    #[must_use]
    pub const fn is_zero(&self) -> bool {
        self.months == 0 && self.millis == 0
    }
}

impl fmt::Display for VDuration {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_zero() {
            return f.write_str("P0Y");
        }
        if self.signum() < 0 {
            f.write_str("-")?;
        }
        f.write_str("P")?;

        let months = self.months.unsigned_abs();
        let (years, months) = (months / 12, months % 12);
        let millis = self.millis.unsigned_abs();
        let days = millis / MILLIS_PER_DAY as u64;
        let hours = millis % MILLIS_PER_DAY as u64 / MILLIS_PER_HOUR as u64;
        let minutes = millis % MILLIS_PER_HOUR as u64 / MILLIS_PER_MINUTE as u64;
        let seconds = millis % MILLIS_PER_MINUTE as u64 / MILLIS_PER_SECOND as u64;
        let sub = millis % MILLIS_PER_SECOND as u64;

        if years != 0 {
            write!(f, "{years}Y")?;
        }
        if months != 0 {
            write!(f, "{months}M")?;
        }
        if days != 0 {
            write!(f, "{days}D")?;
        }
        if hours == 0 && minutes == 0 && seconds == 0 && sub == 0 {
            return Ok(());
        }
        f.write_str("T")?;
        if hours != 0 {
            write!(f, "{hours}H")?;
        }
        if minutes != 0 {
            write!(f, "{minutes}M")?;
        }
        match (seconds, sub) {
            (0, 0) => Ok(()),
            (s, 0) => write!(f, "{s}S"),
            (s, ms) => write!(f, "{s}.{ms:03}S"),
        }
    }
}
