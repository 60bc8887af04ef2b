//! A single immutable value type for instants in time, truncated to whole
//! seconds and normalized to UTC.
//!
//! [`Instant`] wraps a signed count of milliseconds since the Unix epoch and
//! offers construction from epoch milliseconds, calendar parts and ISO-8601
//! strings, calendar field accessors, calendar-aware arithmetic, and ISO
//! formatting. Instances are immutable; arithmetic returns new values.

pub mod error;
pub mod instant;

pub use error::ParseError;
pub use instant::{
    Instant, MILLIS_PER_DAY, MILLIS_PER_HOUR, MILLIS_PER_MINUTE, MILLIS_PER_SECOND,
};
