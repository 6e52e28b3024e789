//! Wire scalars that need more than a plain serde derive.

use std::fmt;

use base64::engine::general_purpose::STANDARD;
use base64::Engine as _;
use chrono::{DateTime, Utc};
use serde::de::{self, Visitor};
use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// A UTC instant, carried on the wire as epoch seconds.
///
/// Whole seconds serialize as integers, anything finer as a fractional
/// number. Both forms are accepted on input.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Timestamp(DateTime<Utc>);

impl Timestamp {
    /// Timestamp for the current instant.
    pub fn now() -> Self {
        Timestamp(Utc::now())
    }

    /// Build from whole epoch seconds. `None` if out of range.
    pub fn from_secs(secs: i64) -> Option<Self> {
        DateTime::<Utc>::from_timestamp(secs, 0).map(Timestamp)
    }

    /// Build from fractional epoch seconds. `None` if not finite or out of range.
    pub fn from_secs_f64(secs: f64) -> Option<Self> {
        if !secs.is_finite() {
            return None;
        }
        let whole = secs.floor();
        let mut nanos = ((secs - whole) * 1_000_000_000.0).round() as u32;
        let mut whole = whole as i64;
        if nanos >= 1_000_000_000 {
            whole += 1;
            nanos = 0;
        }
        DateTime::<Utc>::from_timestamp(whole, nanos).map(Timestamp)
    }

    /// Whole epoch seconds.
    pub fn secs(&self) -> i64 {
        self.0.timestamp()
    }

    /// Epoch seconds including the sub-second part.
    pub fn as_secs_f64(&self) -> f64 {
        self.0.timestamp() as f64 + f64::from(self.0.timestamp_subsec_nanos()) / 1_000_000_000.0
    }

    pub fn as_datetime(&self) -> &DateTime<Utc> {
        &self.0
    }
}

impl From<DateTime<Utc>> for Timestamp {
    fn from(value: DateTime<Utc>) -> Self {
        Timestamp(value)
    }
}

impl From<Timestamp> for DateTime<Utc> {
    fn from(value: Timestamp) -> Self {
        value.0
    }
}

impl fmt::Display for Timestamp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.to_rfc3339())
    }
}

impl Serialize for Timestamp {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        if self.0.timestamp_subsec_nanos() == 0 {
            serializer.serialize_i64(self.secs())
        } else {
            serializer.serialize_f64(self.as_secs_f64())
        }
    }
}

struct EpochSecondsVisitor;

impl<'de> Visitor<'de> for EpochSecondsVisitor {
    type Value = Timestamp;

    fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("epoch seconds as an integer or floating point number")
    }

    fn visit_i64<E: de::Error>(self, v: i64) -> Result<Timestamp, E> {
        Timestamp::from_secs(v).ok_or_else(|| E::custom(format!("timestamp out of range: {v}")))
    }

    fn visit_u64<E: de::Error>(self, v: u64) -> Result<Timestamp, E> {
        let secs = i64::try_from(v).map_err(|_| E::custom(format!("timestamp out of range: {v}")))?;
        self.visit_i64(secs)
    }

    fn visit_f64<E: de::Error>(self, v: f64) -> Result<Timestamp, E> {
        Timestamp::from_secs_f64(v).ok_or_else(|| E::custom(format!("timestamp out of range: {v}")))
    }
}

impl<'de> Deserialize<'de> for Timestamp {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        deserializer.deserialize_any(EpochSecondsVisitor)
    }
}

/// Opaque bytes, carried on the wire as standard base64.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct Blob(Vec<u8>);

impl Blob {
    pub fn new(bytes: impl Into<Vec<u8>>) -> Self {
        Blob(bytes.into())
    }

    pub fn as_bytes(&self) -> &[u8] {
        &self.0
    }

    pub fn into_inner(self) -> Vec<u8> {
        self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl From<Vec<u8>> for Blob {
    fn from(value: Vec<u8>) -> Self {
        Blob(value)
    }
}

impl From<&[u8]> for Blob {
    fn from(value: &[u8]) -> Self {
        Blob(value.to_vec())
    }
}

impl From<&str> for Blob {
    fn from(value: &str) -> Self {
        Blob(value.as_bytes().to_vec())
    }
}

impl Serialize for Blob {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&STANDARD.encode(&self.0))
    }
}

impl<'de> Deserialize<'de> for Blob {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let encoded = String::deserialize(deserializer)?;
        STANDARD
            .decode(encoded.as_bytes())
            .map(Blob)
            .map_err(|e| de::Error::custom(format!("invalid base64 blob: {e}")))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_timestamp_whole_seconds_serialize_as_integer() {
        let ts = Timestamp::from_secs(1_585_000_000).unwrap();
        assert_eq!(serde_json::to_string(&ts).unwrap(), "1585000000");
    }

    #[test]
    fn test_timestamp_fractional_round_trip() {
        let ts: Timestamp = serde_json::from_str("1585000000.25").unwrap();
        assert_eq!(ts.secs(), 1_585_000_000);
        assert_eq!(ts.as_datetime().timestamp_subsec_millis(), 250);

        let json = serde_json::to_string(&ts).unwrap();
        assert_eq!(json, "1585000000.25");
    }

    #[test]
    fn test_timestamp_rejects_strings() {
        let err = serde_json::from_str::<Timestamp>("\"2020-01-01\"").unwrap_err();
        assert!(err.to_string().contains("epoch seconds"));
    }

    #[test]
    fn test_timestamp_from_non_finite() {
        assert!(Timestamp::from_secs_f64(f64::NAN).is_none());
        assert!(Timestamp::from_secs_f64(f64::INFINITY).is_none());
    }

    #[test]
    fn test_blob_base64() {
        let blob = Blob::from("wallet");
        let json = serde_json::to_string(&blob).unwrap();
        assert_eq!(json, "\"d2FsbGV0\"");

        let back: Blob = serde_json::from_str(&json).unwrap();
        assert_eq!(back.as_bytes(), b"wallet");
    }

    #[test]
    fn test_blob_rejects_bad_base64() {
        assert!(serde_json::from_str::<Blob>("\"not base64!\"").is_err());
    }
}
