//! Calendar dates as the integer Unix timestamp of their midnight (UTC).
//!
//! Use [`UnixDate`] with `#[serde_as(as = "UnixDate")]`, or the module
//! itself with `#[serde(with = "jsonutil::unix_date")]`.

use chrono::{DateTime, NaiveDate, NaiveTime};
use serde::{Deserializer, Serializer};
use serde_with::{DeserializeAs, SerializeAs};

use crate::codec::{self, DecodeError, Scalar, ScalarCodec, TargetType};

/// Adapter for [`NaiveDate`].
///
/// Encodes to the Unix timestamp of the date's midnight UTC. Decoding takes
/// the UTC calendar date of the timestamp, so any time of day is dropped.
///
/// ```
/// use chrono::NaiveDate;
/// use jsonutil::UnixDate;
/// use serde::{Deserialize, Serialize};
/// use serde_with::serde_as;
///
/// #[serde_as]
/// #[derive(Serialize, Deserialize)]
/// struct Invoice {
///     #[serde_as(as = "UnixDate")]
///     issued: NaiveDate,
/// }
///
/// let invoice: Invoice = jsonutil::from_str(r#"{"issued":86400}"#)?;
/// assert_eq!(invoice.issued, NaiveDate::from_ymd_opt(1970, 1, 2).unwrap());
/// # Ok::<(), jsonutil::Error>(())
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct UnixDate;

impl ScalarCodec for UnixDate {
    type Value = NaiveDate;
    const TARGET: TargetType = TargetType::Date;

    fn encode(value: &NaiveDate) -> Scalar<'_> {
        Scalar::Int(value.and_time(NaiveTime::MIN).and_utc().timestamp())
    }

    fn decode(token: Scalar<'_>) -> Result<NaiveDate, DecodeError> {
        let seconds = token.into_int(Self::TARGET)?;
        DateTime::from_timestamp(seconds, 0)
            .map(|instant| instant.date_naive())
            .ok_or(DecodeError::OutOfRange {
                target: Self::TARGET,
                value: seconds,
            })
    }
}

impl SerializeAs<NaiveDate> for UnixDate {
    fn serialize_as<S>(source: &NaiveDate, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        codec::serialize::<Self, S>(source, serializer)
    }
}

impl<'de> DeserializeAs<'de, NaiveDate> for UnixDate {
    fn deserialize_as<D>(deserializer: D) -> Result<NaiveDate, D::Error>
    where
        D: Deserializer<'de>,
    {
        codec::deserialize::<Self, D>(deserializer)
    }
}

pub fn serialize<S>(date: &NaiveDate, serializer: S) -> Result<S::Ok, S::Error>
where
    S: Serializer,
{
    UnixDate::serialize_as(date, serializer)
}

pub fn deserialize<'de, D>(deserializer: D) -> Result<NaiveDate, D::Error>
where
    D: Deserializer<'de>,
{
    UnixDate::deserialize_as(deserializer)
}
