//! Field-level policies applied around the adapters.
//!
//! The adapters themselves never see `null` and never decide whether a field
//! is written. Those choices are made per field:
//!
//! | Policy | Attribute |
//! |---|---|
//! | null leaves an optional field unset | `#[serde_as(as = "Option<UnixDate>")]` |
//! | null leaves a value field at zero | `#[serde_as(as = "ZeroOnNull<UnixDate>")]` |
//! | omit if zero | `#[serde(default = "jsonutil::zero", skip_serializing_if = "jsonutil::is_zero")]` |
//! | omit if empty | `#[serde(default, skip_serializing_if = "Option::is_none")]` |

use std::marker::PhantomData;

use chrono::{DateTime, NaiveDate, TimeDelta, Utc};
use serde::{Deserializer, Serializer};
use serde_with::{DeserializeAs, SerializeAs};

/// Unix seconds of the zero instant, 0001-01-01T00:00:00Z.
pub const ZERO_INSTANT_UNIX: i64 = -62_135_596_800;

/// Types with a distinguished zero value.
///
/// | Type | Zero |
/// |---|---|
/// | [`NaiveDate`] | 1970-01-01 |
/// | [`DateTime<Utc>`] | 0001-01-01T00:00:00Z |
/// | [`TimeDelta`] | zero length |
/// | `Option<T>` | `None` |
pub trait Zero: Sized {
    fn zero() -> Self;

    fn is_zero(&self) -> bool;
}

impl Zero for NaiveDate {
    fn zero() -> Self {
        NaiveDate::default()
    }

    fn is_zero(&self) -> bool {
        *self == NaiveDate::default()
    }
}

impl Zero for DateTime<Utc> {
    fn zero() -> Self {
        DateTime::from_timestamp(ZERO_INSTANT_UNIX, 0).unwrap_or(DateTime::<Utc>::MIN_UTC)
    }

    fn is_zero(&self) -> bool {
        self.timestamp() == ZERO_INSTANT_UNIX && self.timestamp_subsec_nanos() == 0
    }
}

impl Zero for TimeDelta {
    fn zero() -> Self {
        TimeDelta::zero()
    }

    fn is_zero(&self) -> bool {
        TimeDelta::is_zero(self)
    }
}

impl<T> Zero for Option<T> {
    fn zero() -> Self {
        None
    }

    fn is_zero(&self) -> bool {
        self.is_none()
    }
}

/// Returns the zero value of `T`, for `#[serde(default = "jsonutil::zero")]`.
pub fn zero<T: Zero>() -> T {
    T::zero()
}

/// Returns true if `value` is zero, for
/// `#[serde(skip_serializing_if = "jsonutil::is_zero")]`.
pub fn is_zero<T: Zero>(value: &T) -> bool {
    value.is_zero()
}

/// Wraps an adapter so that a JSON `null` decodes to [`Zero::zero`].
///
/// Any other token goes to the inner adapter unchanged. Encoding is always
/// delegated.
#[derive(Debug, Clone, Copy, Default)]
pub struct ZeroOnNull<C>(PhantomData<C>);

impl<T, C> SerializeAs<T> for ZeroOnNull<C>
where
    C: SerializeAs<T>,
{
    fn serialize_as<S>(source: &T, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        C::serialize_as(source, serializer)
    }
}

impl<'de, T, C> DeserializeAs<'de, T> for ZeroOnNull<C>
where
    T: Zero,
    C: DeserializeAs<'de, T>,
{
    fn deserialize_as<D>(deserializer: D) -> Result<T, D::Error>
    where
        D: Deserializer<'de>,
    {
        let value = <Option<C> as DeserializeAs<'de, Option<T>>>::deserialize_as(deserializer)?;
        Ok(value.unwrap_or_else(T::zero))
    }
}
