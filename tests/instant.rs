use rstest::rstest;
use utc_instant::{Instant, ParseError};

#[test]
fn parses_a_timestamp_string() {
    let instant = Instant::from_iso_string("2016-01-10T12:03:49Z").unwrap();
    assert_eq!(instant.epoch_millis(), 1_452_427_429_000);
    assert_eq!(instant.to_iso_string(), "2016-01-10T12:03:49Z");
    assert_eq!(instant.to_iso_date_string(), "2016-01-10");

    let instant = Instant::from_iso_date_string("2016-01-10").unwrap();
    assert_eq!(instant.epoch_millis(), 1_452_384_000_000);
    assert_eq!(instant.to_iso_string(), "2016-01-10T00:00:00Z");
    assert_eq!(instant.to_iso_date_string(), "2016-01-10");
}

#[test]
fn discards_milliseconds_from_strings() {
    let instant = Instant::from_iso_string("2016-01-10T12:03:49.501Z").unwrap();
    assert_eq!(instant.epoch_millis(), 1_452_427_429_000);
    assert_eq!(instant.to_iso_string(), "2016-01-10T12:03:49Z");
}

#[rstest]
#[case(1_452_427_429_001, 1_452_427_429_000)]
#[case(1_452_427_429_999, 1_452_427_429_000)]
#[case(-31_536_000_999, -31_536_000_000)]
#[case(-31_536_000_001, -31_536_000_000)]
fn truncates_toward_zero(#[case] input: i64, #[case] expected: i64) {
    assert_eq!(Instant::from_epoch_millis(input).epoch_millis(), expected);
}

#[rstest]
#[case("2016-01-10T12:03:49")]
#[case("2016-01-1")]
#[case("")]
#[case("not a date")]
fn rejects_invalid_timestamp_strings(#[case] input: &str) {
    assert_eq!(
        Instant::from_iso_string(input),
        Err(ParseError::Timestamp(input.to_owned()))
    );
}

#[test]
fn rejects_invalid_date_strings() {
    assert_eq!(
        Instant::from_iso_date_string("2016-01-1"),
        Err(ParseError::Date("2016-01-1".to_owned()))
    );
}

#[rstest]
#[case("2015-12-31", 2, "2016-02-29")]
#[case("2015-12-31", 3, "2016-03-31")]
#[case("2015-12-31", 4, "2016-04-30")]
#[case("2016-01-08", -1, "2015-12-08")]
#[case("2016-02-08", -15, "2014-11-08")]
fn adds_months(#[case] start: &str, #[case] count: i32, #[case] expected: &str) {
    let instant = Instant::from_iso_date_string(start).unwrap();
    assert_eq!(instant.add_months(count).to_iso_date_string(), expected);
}

#[test]
fn adds_months_keeping_the_time_of_day() {
    let instant = Instant::from_iso_string("2016-01-31T12:03:49Z").unwrap();
    assert_eq!(instant.add_months(1).to_iso_string(), "2016-02-29T12:03:49Z");
}

#[test]
fn adds_days() {
    let instant = Instant::from_iso_date_string("2016-02-29").unwrap();
    assert_eq!(instant.add_days(1).to_iso_date_string(), "2016-03-01");

    let instant = Instant::from_iso_string("2015-07-01T23:59:00Z").unwrap();
    assert_eq!(instant.add_days(-1).to_iso_string(), "2015-06-30T23:59:00Z");
}

#[test]
fn adds_hours() {
    let instant = Instant::from_iso_string("2016-02-29T00:00:00Z").unwrap();
    assert_eq!(instant.add_hours(1).to_iso_string(), "2016-02-29T01:00:00Z");

    let instant = Instant::from_iso_string("2016-02-29T23:00:00Z").unwrap();
    assert_eq!(instant.add_hours(1).to_iso_date_string(), "2016-03-01");
}

#[test]
fn adds_minutes() {
    let instant = Instant::from_iso_string("2016-02-29T00:00:00Z").unwrap();
    assert_eq!(instant.add_minutes(60).to_iso_string(), "2016-02-29T01:00:00Z");

    let instant = Instant::from_iso_string("2016-02-29T23:00:00Z").unwrap();
    assert_eq!(instant.add_minutes(60).to_iso_date_string(), "2016-03-01");
}

#[test]
fn adds_seconds() {
    let instant = Instant::from_iso_string("2016-02-29T00:00:00Z").unwrap();
    assert_eq!(instant.add_seconds(121).to_iso_string(), "2016-02-29T00:02:01Z");

    let instant = Instant::from_iso_string("2016-12-31T23:59:50Z").unwrap();
    assert_eq!(instant.add_seconds(11).to_iso_string(), "2017-01-01T00:00:01Z");
}

#[test]
fn arithmetic_leaves_the_receiver_unchanged() {
    let instant = Instant::from_iso_string("2016-02-29T00:00:00Z").unwrap();
    let _ = instant.add_months(13);
    let _ = instant.add_seconds(-1);
    assert_eq!(instant.to_iso_string(), "2016-02-29T00:00:00Z");
}

#[test]
fn compares_by_epoch_value() {
    let instant = Instant::from_iso_string("2016-02-29T00:00:00Z").unwrap();

    let round_trip = instant.add_hours(1).add_hours(-1);
    assert!(round_trip.is_equal_to(instant));

    let later = instant.add_hours(1);
    assert!(!later.is_equal_to(instant));
    assert!(!later.is_less_than(instant));
    assert!(later.is_greater_than(instant));
    assert!(instant.is_less_than(later));

    // The derived ordering agrees with the predicates.
    assert!(later > instant);
    assert!(instant < later);
    assert_ne!(later, instant);
    assert_eq!(round_trip, instant);

    let mut instants = vec![later, instant, round_trip];
    instants.sort();
    assert_eq!(instants, vec![instant, round_trip, later]);
}

#[test]
fn builds_from_parts() {
    let instant = Instant::from_parts(2016, 1, 29, 0, 0, 0);
    assert_eq!(instant.to_iso_string(), "2016-02-29T00:00:00Z");

    let instant = Instant::from_date_parts(2016, 1, 29);
    assert_eq!(instant.to_iso_date_string(), "2016-02-29");
}

#[test]
fn decomposes_into_parts() {
    let instant = Instant::from_iso_string("2016-02-29T03:21:08Z").unwrap();
    assert_eq!(instant.year(), 2016);
    assert_eq!(instant.month0(), 1);
    assert_eq!(instant.day(), 29);
    assert_eq!(instant.hour(), 3);
    assert_eq!(instant.minute(), 21);
    assert_eq!(instant.second(), 8);

    let rebuilt = Instant::from_parts(
        instant.year(),
        instant.month0(),
        instant.day(),
        instant.hour(),
        instant.minute(),
        instant.second(),
    );
    // 2016-02-29 was a Monday.
    assert_eq!(rebuilt.weekday(), 1);
    assert!(rebuilt.is_equal_to(instant));
    assert_eq!(rebuilt.to_iso_string(), "2016-02-29T03:21:08Z");

    let date_only = Instant::from_date_parts(instant.year(), instant.month0(), instant.day());
    assert!(date_only.is_less_than(instant));
    assert_eq!(date_only.to_iso_string(), "2016-02-29T00:00:00Z");
}

#[test]
fn supports_years_before_the_epoch() {
    let instant = Instant::from_iso_string("1969-12-31T23:59:59Z").unwrap();
    assert_eq!(instant.epoch_millis(), -1_000);
    assert_eq!(instant.year(), 1969);
    assert_eq!(instant.add_seconds(1).epoch_millis(), 0);
}
