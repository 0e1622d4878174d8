//! Epoch-second timestamps as sent by the forum API.
//!
//! # Invariants
//! - Wire values are integer or float epoch seconds; fractions are truncated.
//! - `edited: false` means "never edited" and decodes to `None`.
//! - Encoding always writes integer epoch seconds.

use serde::de::{self, Deserializer, Visitor};
use serde::{Deserialize, Serialize, Serializer};
use std::fmt::Formatter;

/// UTC instant with one-second resolution.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Timestamp(i64);

impl Timestamp {
    pub fn from_unix_seconds(seconds: i64) -> Self {
        Self(seconds)
    }

    pub fn unix_seconds(self) -> i64 {
        self.0
    }
}

impl Serialize for Timestamp {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_i64(self.0)
    }
}

impl<'de> Deserialize<'de> for Timestamp {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        match deserializer.deserialize_any(TimestampVisitor)? {
            Some(timestamp) => Ok(timestamp),
            None => Err(de::Error::custom("timestamp must be epoch seconds")),
        }
    }
}

/// `deserialize_with` helper for optional timestamp fields.
///
/// Accepts `null`, `false`, integer and float epoch seconds.
pub(crate) fn deserialize_optional<'de, D>(deserializer: D) -> Result<Option<Timestamp>, D::Error>
where
    D: Deserializer<'de>,
{
    deserializer.deserialize_any(TimestampVisitor)
}

struct TimestampVisitor;

impl<'de> Visitor<'de> for TimestampVisitor {
    type Value = Option<Timestamp>;

    fn expecting(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "epoch seconds, false, or null")
    }

    fn visit_i64<E: de::Error>(self, value: i64) -> Result<Self::Value, E> {
        Ok(Some(Timestamp(value)))
    }

    fn visit_u64<E: de::Error>(self, value: u64) -> Result<Self::Value, E> {
        i64::try_from(value)
            .map(|seconds| Some(Timestamp(seconds)))
            .map_err(|_| E::invalid_value(de::Unexpected::Unsigned(value), &self))
    }

    fn visit_f64<E: de::Error>(self, value: f64) -> Result<Self::Value, E> {
        if !value.is_finite() || value < i64::MIN as f64 || value > i64::MAX as f64 {
            return Err(E::invalid_value(de::Unexpected::Float(value), &self));
        }
        Ok(Some(Timestamp(value.trunc() as i64)))
    }

    fn visit_bool<E: de::Error>(self, value: bool) -> Result<Self::Value, E> {
        if value {
            return Err(E::invalid_value(de::Unexpected::Bool(true), &self));
        }
        Ok(None)
    }

    fn visit_unit<E: de::Error>(self) -> Result<Self::Value, E> {
        Ok(None)
    }

    fn visit_none<E: de::Error>(self) -> Result<Self::Value, E> {
        Ok(None)
    }

    fn visit_some<D: Deserializer<'de>>(self, deserializer: D) -> Result<Self::Value, D::Error> {
        deserializer.deserialize_any(TimestampVisitor)
    }
}

#[cfg(test)]
mod tests {
    use super::Timestamp;
    use serde::Deserialize;

    #[derive(Deserialize)]
    struct Probe {
        #[serde(default, deserialize_with = "super::deserialize_optional")]
        edited: Option<Timestamp>,
    }

    #[test]
    fn float_seconds_are_truncated() {
        let ts: Timestamp = serde_json::from_str("1594606094.0").unwrap();
        assert_eq!(ts.unix_seconds(), 1_594_606_094);
        let ts: Timestamp = serde_json::from_str("1594606094.9").unwrap();
        assert_eq!(ts.unix_seconds(), 1_594_606_094);
    }

    #[test]
    fn edited_false_and_null_mean_unset() {
        let probe: Probe = serde_json::from_str(r#"{"edited":false}"#).unwrap();
        assert_eq!(probe.edited, None);
        let probe: Probe = serde_json::from_str(r#"{"edited":null}"#).unwrap();
        assert_eq!(probe.edited, None);
        let probe: Probe = serde_json::from_str("{}").unwrap();
        assert_eq!(probe.edited, None);
        let probe: Probe = serde_json::from_str(r#"{"edited":1594606100}"#).unwrap();
        assert_eq!(probe.edited, Some(Timestamp::from_unix_seconds(1_594_606_100)));
    }

    #[test]
    fn edited_true_is_rejected() {
        assert!(serde_json::from_str::<Probe>(r#"{"edited":true}"#).is_err());
    }

    #[test]
    fn encodes_as_integer_seconds() {
        let json = serde_json::to_string(&Timestamp::from_unix_seconds(42)).unwrap();
        assert_eq!(json, "42");
    }
}
