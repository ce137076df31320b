//! Signed durations as integer seconds.

use chrono::TimeDelta;
use serde::{Deserializer, Serializer};
use serde_with::{DeserializeAs, SerializeAs};

use crate::codec::{self, DecodeError, Scalar, ScalarCodec, TargetType};

/// Adapter for [`TimeDelta`].
///
/// Encodes whole seconds truncated toward zero, so `-1.5s` becomes `-1`,
/// not `-2`.
///
/// ```
/// use chrono::TimeDelta;
/// use jsonutil::DurationSecs;
/// use serde::Serialize;
/// use serde_with::serde_as;
///
/// #[serde_as]
/// #[derive(Serialize)]
/// struct Retry {
///     #[serde_as(as = "DurationSecs")]
///     backoff: TimeDelta,
/// }
///
/// let retry = Retry { backoff: TimeDelta::milliseconds(30_900) };
/// assert_eq!(jsonutil::to_string(&retry)?, r#"{"backoff":30}"#);
/// # Ok::<(), jsonutil::Error>(())
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct DurationSecs;

impl ScalarCodec for DurationSecs {
    type Value = TimeDelta;
    const TARGET: TargetType = TargetType::Duration;

    fn encode(value: &TimeDelta) -> Scalar<'_> {
        Scalar::Int(value.num_seconds())
    }

    fn decode(token: Scalar<'_>) -> Result<TimeDelta, DecodeError> {
        let seconds = token.into_int(Self::TARGET)?;
        TimeDelta::try_seconds(seconds).ok_or(DecodeError::OutOfRange {
            target: Self::TARGET,
            value: seconds,
        })
    }
}

impl SerializeAs<TimeDelta> for DurationSecs {
    fn serialize_as<S>(source: &TimeDelta, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        codec::serialize::<Self, S>(source, serializer)
    }
}

impl<'de> DeserializeAs<'de, TimeDelta> for DurationSecs {
    fn deserialize_as<D>(deserializer: D) -> Result<TimeDelta, D::Error>
    where
        D: Deserializer<'de>,
    {
        codec::deserialize::<Self, D>(deserializer)
    }
}

pub fn serialize<S>(duration: &TimeDelta, serializer: S) -> Result<S::Ok, S::Error>
where
    S: Serializer,
{
    DurationSecs::serialize_as(duration, serializer)
}

pub fn deserialize<'de, D>(deserializer: D) -> Result<TimeDelta, D::Error>
where
    D: Deserializer<'de>,
{
    DurationSecs::deserialize_as(deserializer)
}
