//! Wire-format coercions applied at the API boundary.
//!
//! Money is stored as exact `NUMERIC(15,2)` and travels as a JSON number.
//! Dates are emitted as RFC 3339 and accepted either as RFC 3339 or as a
//! bare `YYYY-MM-DD` (midnight UTC), which is what HTML date inputs send.

use chrono::{DateTime, NaiveDate, Utc};
use rust_decimal::prelude::ToPrimitive;
use rust_decimal::Decimal;
use serde::{Deserialize, Deserializer};

/// Digits allowed before the decimal point by NUMERIC(15,2)
const MONEY_INTEGER_DIGITS: u32 = 13;

/// Stored money to API number
pub fn decimal_to_number(value: Decimal) -> Option<f64> {
    value.to_f64()
}

/// API number to stored money, rounded to cents.
/// Returns None for non-finite values and values NUMERIC(15,2) cannot hold.
pub fn number_to_decimal(value: f64) -> Option<Decimal> {
    if !value.is_finite() || value.abs() >= 10f64.powi(MONEY_INTEGER_DIGITS as i32) {
        return None;
    }
    Decimal::from_f64_retain(value).map(|d| d.round_dp(2).normalize())
}

/// Parse an RFC 3339 timestamp or a `YYYY-MM-DD` date
pub fn parse_datetime(raw: &str) -> Option<DateTime<Utc>> {
    let raw = raw.trim();
    if let Ok(dt) = DateTime::parse_from_rfc3339(raw) {
        return Some(dt.with_timezone(&Utc));
    }
    NaiveDate::parse_from_str(raw, "%Y-%m-%d")
        .ok()
        .and_then(|d| d.and_hms_opt(0, 0, 0))
        .map(|naive| naive.and_utc())
}

fn datetime_from_str<E: serde::de::Error>(raw: &str) -> Result<DateTime<Utc>, E> {
    parse_datetime(raw).ok_or_else(|| E::custom(format!("invalid date '{}': expected RFC 3339 or YYYY-MM-DD", raw)))
}

/// `Option<DateTime>` field accepting either date format
pub fn deserialize_optional_datetime<'de, D>(deserializer: D) -> Result<Option<DateTime<Utc>>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw: Option<String> = Option::deserialize(deserializer)?;
    raw.map(|s| datetime_from_str(&s)).transpose()
}

/// Patch field: absent => `None`, `null` => `Some(None)`, value => `Some(Some(v))`.
/// Pair with `#[serde(default)]`.
pub fn deserialize_patch<'de, T, D>(deserializer: D) -> Result<Option<Option<T>>, D::Error>
where
    T: Deserialize<'de>,
    D: Deserializer<'de>,
{
    Option::<T>::deserialize(deserializer).map(Some)
}

/// Patch field for dates, same tri-state as [`deserialize_patch`]
pub fn deserialize_patch_datetime<'de, D>(deserializer: D) -> Result<Option<Option<DateTime<Utc>>>, D::Error>
where
    D: Deserializer<'de>,
{
    deserialize_optional_datetime(deserializer).map(Some)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde::Deserialize;
    use std::str::FromStr;

    #[derive(Debug, Deserialize)]
    struct Patch {
        #[serde(default, deserialize_with = "deserialize_patch")]
        description: Option<Option<String>>,
        #[serde(default, deserialize_with = "deserialize_patch_datetime")]
        due_date: Option<Option<DateTime<Utc>>>,
    }

    #[test]
    fn money_round_trips_through_decimal() {
        let stored = number_to_decimal(50000.75).unwrap();
        assert_eq!(stored, Decimal::from_str("50000.75").unwrap());
        assert_eq!(decimal_to_number(stored), Some(50000.75));
    }

    #[test]
    fn money_is_rounded_to_cents() {
        assert!(number_to_decimal(10.005).unwrap().scale() <= 2);
        assert_eq!(number_to_decimal(1999.999).unwrap(), Decimal::from_str("2000").unwrap());
    }

    #[test]
    fn money_out_of_range_is_rejected() {
        assert!(number_to_decimal(f64::NAN).is_none());
        assert!(number_to_decimal(f64::INFINITY).is_none());
        assert!(number_to_decimal(1e13).is_none());
        assert!(number_to_decimal(9_999_999_999_999.0).is_some());
    }

    #[test]
    fn parses_both_date_formats() {
        let a = parse_datetime("2024-03-15").unwrap();
        assert_eq!(a.to_rfc3339(), "2024-03-15T00:00:00+00:00");

        let b = parse_datetime("2024-03-15T08:30:00-05:00").unwrap();
        assert_eq!(b.to_rfc3339(), "2024-03-15T13:30:00+00:00");

        assert!(parse_datetime("15/03/2024").is_none());
    }

    #[test]
    fn patch_fields_distinguish_absent_and_null() {
        let absent: Patch = serde_json::from_str("{}").unwrap();
        assert_eq!(absent.description, None);
        assert_eq!(absent.due_date, None);

        let cleared: Patch = serde_json::from_str(r#"{"description": null, "due_date": null}"#).unwrap();
        assert_eq!(cleared.description, Some(None));
        assert_eq!(cleared.due_date, Some(None));

        let set: Patch = serde_json::from_str(r#"{"description": "Rebar delivery", "due_date": "2024-06-01"}"#).unwrap();
        assert_eq!(set.description, Some(Some("Rebar delivery".to_string())));
        assert!(set.due_date.unwrap().is_some());
    }

    #[test]
    fn bad_dates_fail_deserialization() {
        assert!(serde_json::from_str::<Patch>(r#"{"due_date": "next week"}"#).is_err());
    }
}
