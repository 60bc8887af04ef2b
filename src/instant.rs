use std::fmt;

use chrono::{DateTime, Datelike, NaiveDate, NaiveTime, Timelike, Utc};
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::error::ParseError;

pub const MILLIS_PER_SECOND: i64 = 1000;
pub const MILLIS_PER_MINUTE: i64 = MILLIS_PER_SECOND * 60;
pub const MILLIS_PER_HOUR: i64 = MILLIS_PER_MINUTE * 60;
pub const MILLIS_PER_DAY: i64 = MILLIS_PER_HOUR * 24;

const SECONDS_PER_DAY: i64 = 86_400;

/// An instant in time, normalized to UTC and truncated to the whole second.
///
/// The value wraps a single count of milliseconds since the Unix epoch that
/// is always second-aligned (`epoch_millis % 1000 == 0`). Construction goes
/// through the named factories only; the field is private so callers cannot
/// bypass truncation. Every operation that appears to mutate returns a new
/// `Instant`, which makes the type freely shareable.
///
/// ```
/// use utc_instant::Instant;
///
/// let instant = Instant::from_iso_string("2016-01-10T12:03:49Z")?;
/// assert_eq!(instant.add_months(2).to_iso_date_string(), "2016-03-10");
/// # Ok::<(), utc_instant::ParseError>(())
/// ```
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Instant {
    epoch_millis: i64,
}

impl Instant {
    /// The current wall-clock time, truncated to the whole second.
    pub fn now() -> Self {
        Self::from_epoch_millis(Utc::now().timestamp_millis())
    }

    /// Wraps a raw epoch-millisecond count, truncating the seconds count
    /// toward zero: `1001` becomes `1000` and `-1001` becomes `-1000`.
    pub const fn from_epoch_millis(millis: i64) -> Self {
        Self {
            epoch_millis: (millis / MILLIS_PER_SECOND) * MILLIS_PER_SECOND,
        }
    }

    /// Like [`Self::from_epoch_millis`] but for values coming from floating
    /// point sources such as JSON numbers. A value that is not a number, not
    /// finite, or outside the i64 millisecond range is treated as the epoch,
    /// which keeps arithmetic on the result total.
    pub fn from_epoch_millis_f64(millis: f64) -> Self {
        if millis.is_finite() && (i64::MIN as f64..=i64::MAX as f64).contains(&millis) {
            Self::from_epoch_millis(millis as i64)
        } else {
            Self { epoch_millis: 0 }
        }
    }

    /// Builds an instant from UTC calendar fields. `month0` is zero-based
    /// (0 = January).
    ///
    /// Out-of-range fields carry over rather than fail: a `month0` of 12 rolls
    /// into January of the following year, and a `day` past the end of the
    /// month overflows into the month after it, so
    /// `from_parts(2016, 1, 31, 0, 0, 0)` lands on March 2nd. This mirrors
    /// how civil-time libraries normalize component overflow and is what
    /// [`Self::add_months`] relies on to detect short target months.
    pub fn from_parts(
        year: i32,
        month0: u32,
        day: u32,
        hour: u32,
        minute: u32,
        second: u32,
    ) -> Self {
        let months = i64::from(year) * 12 + i64::from(month0);
        let month0 = months.rem_euclid(12) as u32;
        let first_of_month = i32::try_from(months.div_euclid(12))
            .ok()
            .and_then(|y| NaiveDate::from_ymd_opt(y, month0 + 1, 1));
        let Some(first_of_month) = first_of_month else {
            // Outside the supported calendar range; coerce like any other
            // invalid numeric input.
            return Self { epoch_millis: 0 };
        };
        let midnight = first_of_month.and_time(NaiveTime::MIN).and_utc().timestamp();
        let seconds = midnight
            + (i64::from(day) - 1) * SECONDS_PER_DAY
            + i64::from(hour) * 3600
            + i64::from(minute) * 60
            + i64::from(second);
        Self {
            epoch_millis: seconds.saturating_mul(MILLIS_PER_SECOND),
        }
    }

    /// Builds an instant at midnight UTC of the given calendar date.
    pub fn from_date_parts(year: i32, month0: u32, day: u32) -> Self {
        Self::from_parts(year, month0, day, 0, 0, 0)
    }

    /// Parses a full timestamp matching `YYYY-MM-DDTHH:MM:SS[.mmm]Z` at the
    /// start of the input. Fractional seconds are accepted by the pattern and
    /// then discarded by the whole-second truncation.
    ///
    /// # Errors
    ///
    /// Returns [`ParseError::Timestamp`] when the leading pattern is absent.
    pub fn from_iso_string(input: &str) -> Result<Self, ParseError> {
        let (year, month, day, hour, minute, second) = parse_timestamp(input.as_bytes())
            .ok_or_else(|| ParseError::Timestamp(input.to_owned()))?;
        Ok(Self::from_calendar(year, month, day, hour, minute, second))
    }

    /// Parses a date-only prefix `YYYY-MM-DD` at the start of the input and
    /// builds the instant at midnight UTC of that date.
    ///
    /// # Errors
    ///
    /// Returns [`ParseError::Date`] when the leading pattern is absent.
    pub fn from_iso_date_string(input: &str) -> Result<Self, ParseError> {
        let (year, month, day) =
            parse_date(input.as_bytes()).ok_or_else(|| ParseError::Date(input.to_owned()))?;
        Ok(Self::from_calendar(year, month, day, 0, 0, 0))
    }

    // Pattern-valid fields that do not name a real calendar date-time (month
    // 13, hour 25, ...) coerce to the epoch rather than failing, keeping
    // parse errors strictly about the leading pattern.
    fn from_calendar(year: i32, month: u32, day: u32, hour: u32, minute: u32, second: u32) -> Self {
        let millis = NaiveDate::from_ymd_opt(year, month, day)
            .and_then(|date| date.and_hms_opt(hour, minute, second))
            .map_or(0, |dt| dt.and_utc().timestamp_millis());
        Self::from_epoch_millis(millis)
    }

    /// The raw epoch-millisecond value, always second-aligned.
    pub const fn epoch_millis(self) -> i64 {
        self.epoch_millis
    }

    /// The full signed year, supporting dates before 1970.
    pub fn year(self) -> i32 {
        self.as_datetime().year()
    }

    /// The zero-based month (0 = January .. 11 = December).
    pub fn month0(self) -> u32 {
        self.as_datetime().month0()
    }

    /// The day of the month (1-31).
    pub fn day(self) -> u32 {
        self.as_datetime().day()
    }

    /// The day of the week (0 = Sunday .. 6 = Saturday).
    pub fn weekday(self) -> u32 {
        self.as_datetime().weekday().num_days_from_sunday()
    }

    /// The hour of the day (0-23).
    pub fn hour(self) -> u32 {
        self.as_datetime().hour()
    }

    /// The minute of the hour (0-59).
    pub fn minute(self) -> u32 {
        self.as_datetime().minute()
    }

    /// The second of the minute (0-59).
    pub fn second(self) -> u32 {
        self.as_datetime().second()
    }

    /// Returns a new instant offset by `count` seconds.
    pub fn add_seconds(self, count: i64) -> Self {
        self.add_millis(count.saturating_mul(MILLIS_PER_SECOND))
    }

    /// Returns a new instant offset by `count` minutes.
    pub fn add_minutes(self, count: i64) -> Self {
        self.add_millis(count.saturating_mul(MILLIS_PER_MINUTE))
    }

    /// Returns a new instant offset by `count` hours.
    pub fn add_hours(self, count: i64) -> Self {
        self.add_millis(count.saturating_mul(MILLIS_PER_HOUR))
    }

    /// Returns a new instant offset by `count` days. Days are fixed 24-hour
    /// units; month, year and weekday boundaries roll over through plain
    /// epoch arithmetic.
    pub fn add_days(self, count: i64) -> Self {
        self.add_millis(count.saturating_mul(MILLIS_PER_DAY))
    }

    /// Returns a new instant offset by `count` calendar months, keeping the
    /// time of day. When the current day of the month does not exist in the
    /// target month, the result clamps to the last valid day of that month:
    /// January 31st plus one month is the last day of February.
    pub fn add_months(self, count: i32) -> Self {
        let months =
            i64::from(self.year()) * 12 + i64::from(self.month0()) + i64::from(count);
        let month0 = months.rem_euclid(12) as u32;
        let Ok(year) = i32::try_from(months.div_euclid(12)) else {
            return Self { epoch_millis: 0 };
        };
        let mut shifted = Self::from_parts(
            year,
            month0,
            self.day(),
            self.hour(),
            self.minute(),
            self.second(),
        );
        // A day past the end of the target month overflowed into the month
        // after it; walking back a day at a time lands on the last valid day.
        while shifted.month0() != month0 {
            shifted = shifted.add_days(-1);
        }
        shifted
    }

    /// Whether both instants name the same epoch-millisecond value.
    pub fn is_equal_to(self, other: Self) -> bool {
        self.epoch_millis == other.epoch_millis
    }

    /// Whether this instant is strictly earlier than `other`.
    pub fn is_less_than(self, other: Self) -> bool {
        self.epoch_millis < other.epoch_millis
    }

    /// Whether this instant is strictly later than `other`.
    pub fn is_greater_than(self, other: Self) -> bool {
        self.epoch_millis > other.epoch_millis
    }

    /// Formats the full timestamp, e.g. `2016-01-10T12:03:49Z`.
    pub fn to_iso_string(self) -> String {
        self.as_datetime().format("%Y-%m-%dT%H:%M:%SZ").to_string()
    }

    /// Formats the date only, e.g. `2016-01-10`.
    pub fn to_iso_date_string(self) -> String {
        self.as_datetime().format("%Y-%m-%d").to_string()
    }

    fn add_millis(self, offset: i64) -> Self {
        Self::from_epoch_millis(self.epoch_millis.saturating_add(offset))
    }

    // A stored value outside chrono's calendar range reads as the epoch, the
    // same coercion the numeric factories apply to invalid input.
    fn as_datetime(self) -> DateTime<Utc> {
        DateTime::from_timestamp_millis(self.epoch_millis).unwrap_or_default()
    }
}

/// `Display` is the full ISO timestamp, same as [`Instant::to_iso_string`].
impl fmt::Display for Instant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_datetime().format("%Y-%m-%dT%H:%M:%SZ"))
    }
}

/// `Debug` is an RFC-1123-style UTC string, e.g.
/// `Sun, 10 Jan 2016 12:03:49 GMT`. Diagnostics only, never parsed back.
impl fmt::Debug for Instant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_datetime().format("%a, %d %b %Y %H:%M:%S GMT"))
    }
}

/// Serializes as the full-precision ISO form. The stored value is always
/// second-aligned, so the fractional part is always `.000`.
impl Serialize for Instant {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.collect_str(&self.as_datetime().format("%Y-%m-%dT%H:%M:%S%.3fZ"))
    }
}

impl<'de> Deserialize<'de> for Instant {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s: String = Deserialize::deserialize(deserializer)?;
        Self::from_iso_string(&s).map_err(serde::de::Error::custom)
    }
}

/// Reads `len` ASCII digits starting at `start`, or `None` if any byte is
/// missing or not a digit.
fn digits(bytes: &[u8], start: usize, len: usize) -> Option<u32> {
    let slice = bytes.get(start..start + len)?;
    let mut value = 0u32;
    for &byte in slice {
        if !byte.is_ascii_digit() {
            return None;
        }
        value = value * 10 + u32::from(byte - b'0');
    }
    Some(value)
}

// `YYYY-MM-DD` at the start of the input; trailing bytes are ignored.
fn parse_date(bytes: &[u8]) -> Option<(i32, u32, u32)> {
    let year = digits(bytes, 0, 4)?;
    let month = digits(bytes, 5, 2)?;
    let day = digits(bytes, 8, 2)?;
    (bytes[4] == b'-' && bytes[7] == b'-').then_some((year as i32, month, day))
}

// `YYYY-MM-DDTHH:MM:SS[.mmm]Z` at the start of the input; trailing bytes
// after the `Z` are ignored. The fractional digits are validated but not
// returned since the whole-second truncation would discard them anyway.
fn parse_timestamp(bytes: &[u8]) -> Option<(i32, u32, u32, u32, u32, u32)> {
    let (year, month, day) = parse_date(bytes)?;
    let hour = digits(bytes, 11, 2)?;
    let minute = digits(bytes, 14, 2)?;
    let second = digits(bytes, 17, 2)?;
    if bytes[10] != b'T' || bytes[13] != b':' || bytes[16] != b':' {
        return None;
    }
    let zulu = if bytes.get(19) == Some(&b'.') {
        digits(bytes, 20, 3)?;
        bytes.get(23)
    } else {
        bytes.get(19)
    };
    (zulu == Some(&b'Z')).then_some((year, month, day, hour, minute, second))
}
