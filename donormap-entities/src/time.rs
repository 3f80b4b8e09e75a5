use std::{
    fmt,
    ops::{Add, AddAssign, Sub, SubAssign},
};

use time::{Duration, OffsetDateTime};

/// A generic UNIX timestamp with millisecond precision.
///
/// Milliseconds instead of seconds because the throttling windows measured
/// against it are themselves sub-second.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct TimestampMs(i64);

impl TimestampMs {
    pub fn now() -> Self {
        OffsetDateTime::now_utc().into()
    }

    pub const fn from_millis(millis: i64) -> Self {
        Self(millis)
    }

    pub const fn as_millis(self) -> i64 {
        self.0
    }

    pub fn saturating_duration_since(self, earlier: Self) -> Duration {
        if self <= earlier {
            Duration::ZERO
        } else {
            self - earlier
        }
    }
}

impl From<OffsetDateTime> for TimestampMs {
    fn from(from: OffsetDateTime) -> Self {
        Self((from.unix_timestamp_nanos() / 1_000_000) as i64)
    }
}

impl From<TimestampMs> for OffsetDateTime {
    fn from(from: TimestampMs) -> Self {
        OffsetDateTime::from_unix_timestamp_nanos(i128::from(from.0) * 1_000_000)
            .unwrap_or(OffsetDateTime::UNIX_EPOCH)
    }
}

impl Add<Duration> for TimestampMs {
    type Output = Self;
    fn add(self, duration: Duration) -> Self {
        Self(self.0 + duration.whole_milliseconds() as i64)
    }
}

impl AddAssign<Duration> for TimestampMs {
    fn add_assign(&mut self, duration: Duration) {
        *self = *self + duration;
    }
}

impl Sub<Duration> for TimestampMs {
    type Output = Self;
    fn sub(self, duration: Duration) -> Self {
        Self(self.0 - duration.whole_milliseconds() as i64)
    }
}

impl SubAssign<Duration> for TimestampMs {
    fn sub_assign(&mut self, duration: Duration) {
        *self = *self - duration;
    }
}

impl Sub for TimestampMs {
    type Output = Duration;
    fn sub(self, other: Self) -> Duration {
        Duration::milliseconds(self.0 - other.0)
    }
}

impl fmt::Display for TimestampMs {
    fn fmt(&self, f: &mut fmt::Formatter) -> Result<(), fmt::Error> {
        write!(f, "{}", OffsetDateTime::from(*self))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn convert_from_into_millis() {
        let t1 = TimestampMs::now();
        let m1 = t1.as_millis();
        let t2 = TimestampMs::from_millis(m1);
        assert_eq!(t1, t2);
    }

    #[test]
    fn add_sub_duration() {
        let t = TimestampMs::from_millis(10_000);
        assert_eq!(TimestampMs::from_millis(11_500), t + Duration::milliseconds(1500));
        assert_eq!(TimestampMs::from_millis(9_000), t - Duration::seconds(1));
        assert_eq!(Duration::seconds(10), t - TimestampMs::from_millis(0));
    }

    #[test]
    fn saturating_duration() {
        let earlier = TimestampMs::from_millis(5_000);
        let later = TimestampMs::from_millis(7_500);
        assert_eq!(
            Duration::milliseconds(2_500),
            later.saturating_duration_since(earlier)
        );
        assert_eq!(Duration::ZERO, earlier.saturating_duration_since(later));
    }
}
