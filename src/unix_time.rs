//! Instants as integer Unix seconds.

use chrono::{DateTime, Utc};
use serde::{Deserializer, Serializer};
use serde_with::{DeserializeAs, SerializeAs};

use crate::codec::{self, DecodeError, Scalar, ScalarCodec, TargetType};

/// Adapter for [`DateTime<Utc>`].
///
/// Sub-second precision is dropped on encode: the wire value is
/// [`DateTime::timestamp`], the whole seconds at or before the instant.
/// Decoded instants are in UTC with a zero nanosecond part.
#[derive(Debug, Clone, Copy, Default)]
pub struct UnixTime;

impl ScalarCodec for UnixTime {
    type Value = DateTime<Utc>;
    const TARGET: TargetType = TargetType::Time;

    fn encode(value: &DateTime<Utc>) -> Scalar<'_> {
        Scalar::Int(value.timestamp())
    }

    fn decode(token: Scalar<'_>) -> Result<DateTime<Utc>, DecodeError> {
        let seconds = token.into_int(Self::TARGET)?;
        DateTime::from_timestamp(seconds, 0).ok_or(DecodeError::OutOfRange {
            target: Self::TARGET,
            value: seconds,
        })
    }
}

impl SerializeAs<DateTime<Utc>> for UnixTime {
    fn serialize_as<S>(source: &DateTime<Utc>, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        codec::serialize::<Self, S>(source, serializer)
    }
}

impl<'de> DeserializeAs<'de, DateTime<Utc>> for UnixTime {
    fn deserialize_as<D>(deserializer: D) -> Result<DateTime<Utc>, D::Error>
    where
        D: Deserializer<'de>,
    {
        codec::deserialize::<Self, D>(deserializer)
    }
}

pub fn serialize<S>(instant: &DateTime<Utc>, serializer: S) -> Result<S::Ok, S::Error>
where
    S: Serializer,
{
    UnixTime::serialize_as(instant, serializer)
}

pub fn deserialize<'de, D>(deserializer: D) -> Result<DateTime<Utc>, D::Error>
where
    D: Deserializer<'de>,
{
    UnixTime::deserialize_as(deserializer)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeZone, Timelike};

    #[test]
    fn test_encode_epoch() {
        let epoch = DateTime::from_timestamp(0, 0).unwrap();
        assert_eq!(UnixTime::encode(&epoch), Scalar::Int(0));
    }

    #[test]
    fn test_encode_drops_nanos() {
        let instant = Utc
            .with_ymd_and_hms(2024, 1, 2, 3, 4, 5)
            .unwrap()
            .with_nanosecond(999_999_999)
            .unwrap();
        assert_eq!(UnixTime::encode(&instant), Scalar::Int(1_704_164_645));
    }

    #[test]
    fn test_encode_before_epoch_floors() {
        let instant = DateTime::from_timestamp(-2, 500_000_000).unwrap();
        assert_eq!(UnixTime::encode(&instant), Scalar::Int(-2));
    }

    #[test]
    fn test_encode_year_one() {
        let instant = Utc.with_ymd_and_hms(1, 1, 1, 0, 0, 0).unwrap();
        assert_eq!(UnixTime::encode(&instant), Scalar::Int(-62_135_596_800));
    }

    #[test]
    fn test_decode() {
        let instant = UnixTime::decode(Scalar::Int(1_704_164_645)).unwrap();
        assert_eq!(instant, Utc.with_ymd_and_hms(2024, 1, 2, 3, 4, 5).unwrap());
        assert_eq!(instant.nanosecond(), 0);
    }

    #[test]
    fn test_decode_out_of_range() {
        let err = UnixTime::decode(Scalar::Int(i64::MIN)).unwrap_err();
        assert_eq!(err.target(), TargetType::Time);
    }

    #[test]
    fn test_decode_rejects_string_scalar() {
        let err = UnixTime::decode(Scalar::Str("3".into())).unwrap_err();
        assert!(matches!(err, DecodeError::UnexpectedToken { .. }));
    }
}
