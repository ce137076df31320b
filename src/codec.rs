//! The scalar codec contract shared by every adapter.
//!
//! An adapter turns one in-memory value into exactly one JSON scalar token
//! ([`Scalar`]) and back. The generic [`serialize`] and [`deserialize`]
//! helpers do the token plumbing against serde, so an adapter only has to
//! implement [`ScalarCodec`].
//!
//! Every error raised on the decode path starts with the adapter's marker,
//! `jsonutil[<Target>]: `, before any echoed input. [`TargetType::from_message`]
//! reads only that prefix, which is how [`crate::Error::target`] later tells
//! which kind of field failed.

use std::borrow::Cow;
use std::fmt;

use serde::de::{self, MapAccess, SeqAccess, Unexpected, Visitor};
use serde::{Deserializer, Serialize, Serializer};

const TAG_PREFIX: &str = "jsonutil[";
const TAG_SUFFIX: &str = "]: ";

/// JSON kind of a codec's wire token.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum WireKind {
    Integer,
    String,
}

impl fmt::Display for WireKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            WireKind::Integer => f.write_str("integer"),
            WireKind::String => f.write_str("string"),
        }
    }
}

/// The in-memory type an adapter decodes into.
///
/// Displays as the Rust type name, e.g. `chrono::NaiveDate`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TargetType {
    Date,
    Time,
    Duration,
    Url,
}

impl TargetType {
    pub const ALL: [TargetType; 4] = [
        TargetType::Date,
        TargetType::Time,
        TargetType::Duration,
        TargetType::Url,
    ];

    /// Rust type name, for humans.
    pub const fn type_name(self) -> &'static str {
        match self {
            TargetType::Date => "chrono::NaiveDate",
            TargetType::Time => "chrono::DateTime<Utc>",
            TargetType::Duration => "chrono::TimeDelta",
            TargetType::Url => "url::Url",
        }
    }

    /// Short name written inside the error marker.
    pub const fn label(self) -> &'static str {
        match self {
            TargetType::Date => "Date",
            TargetType::Time => "Time",
            TargetType::Duration => "Duration",
            TargetType::Url => "Url",
        }
    }

    /// JSON kind the adapter for this type reads and writes.
    pub const fn wire_kind(self) -> WireKind {
        match self {
            TargetType::Date | TargetType::Time | TargetType::Duration => WireKind::Integer,
            TargetType::Url => WireKind::String,
        }
    }

    const fn expecting(self) -> &'static str {
        match self {
            TargetType::Date => "an integer Unix timestamp for chrono::NaiveDate",
            TargetType::Time => "an integer Unix timestamp for chrono::DateTime<Utc>",
            TargetType::Duration => "an integer number of seconds for chrono::TimeDelta",
            TargetType::Url => "a URL string for url::Url",
        }
    }

    /// Prefixes `message` with this target's marker.
    pub fn tagged(self, message: impl fmt::Display) -> String {
        format!("{TAG_PREFIX}{}{TAG_SUFFIX}{message}", self.label())
    }

    /// Reads the marker at the very start of an error message.
    ///
    /// Text anywhere else in the message is ignored, so echoed input can
    /// never produce or change a tag.
    pub fn from_message(message: &str) -> Option<Self> {
        let (label, _) = message
            .strip_prefix(TAG_PREFIX)?
            .split_once(TAG_SUFFIX)?;
        Self::ALL.into_iter().find(|target| target.label() == label)
    }
}

impl fmt::Display for TargetType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.type_name())
    }
}

/// A single JSON scalar token as seen by an adapter.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Scalar<'a> {
    Int(i64),
    Str(Cow<'a, str>),
}

impl<'a> Scalar<'a> {
    pub fn kind(&self) -> WireKind {
        match self {
            Scalar::Int(_) => WireKind::Integer,
            Scalar::Str(_) => WireKind::String,
        }
    }

    /// Returns the integer payload, or an [`DecodeError::UnexpectedToken`]
    /// tagged with `target`.
    pub fn into_int(self, target: TargetType) -> Result<i64, DecodeError> {
        match self {
            Scalar::Int(value) => Ok(value),
            other => Err(DecodeError::UnexpectedToken {
                target,
                expected: WireKind::Integer,
                found: other.kind(),
            }),
        }
    }

    /// Returns the string payload, or an [`DecodeError::UnexpectedToken`]
    /// tagged with `target`.
    pub fn into_str(self, target: TargetType) -> Result<Cow<'a, str>, DecodeError> {
        match self {
            Scalar::Str(value) => Ok(value),
            other => Err(DecodeError::UnexpectedToken {
                target,
                expected: WireKind::String,
                found: other.kind(),
            }),
        }
    }
}

impl Serialize for Scalar<'_> {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        match self {
            Scalar::Int(value) => serializer.serialize_i64(*value),
            Scalar::Str(value) => serializer.serialize_str(value),
        }
    }
}

/// Errors an adapter raises after a token of the right kind was read.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum DecodeError {
    #[error("expected {expected} token for {target}, found {found}")]
    UnexpectedToken {
        target: TargetType,
        expected: WireKind,
        found: WireKind,
    },

    #[error("{value} is out of range for {target}")]
    OutOfRange { target: TargetType, value: i64 },

    #[error("invalid {target} {input:?}: {reason}")]
    Invalid {
        target: TargetType,
        input: String,
        reason: String,
    },
}

impl DecodeError {
    pub fn target(&self) -> TargetType {
        match self {
            DecodeError::UnexpectedToken { target, .. }
            | DecodeError::OutOfRange { target, .. }
            | DecodeError::Invalid { target, .. } => *target,
        }
    }
}

/// A type-specific scalar adapter.
///
/// Implementations are stateless: `encode` never fails and `decode` only
/// sees tokens whose kind already matches [`TargetType::wire_kind`] when it
/// is driven through [`deserialize`].
pub trait ScalarCodec {
    /// The in-memory type being adapted.
    type Value;

    /// Tag attached to every decode error.
    const TARGET: TargetType;

    fn encode(value: &Self::Value) -> Scalar<'_>;

    fn decode(token: Scalar<'_>) -> Result<Self::Value, DecodeError>;
}

/// Writes `value` as the single scalar token produced by `C`.
pub fn serialize<C, S>(value: &C::Value, serializer: S) -> Result<S::Ok, S::Error>
where
    C: ScalarCodec,
    S: Serializer,
{
    C::encode(value).serialize(serializer)
}

/// Reads one scalar token of `C`'s wire kind and decodes it.
///
/// The token is read with `deserialize_any` so that a wrong-kind token
/// reaches the visitor, which reports it under the target's marker. This
/// needs a self-describing format such as JSON.
///
/// # Errors
///
/// Syntax errors come straight from the deserializer. A token of the wrong
/// kind fails with an `invalid type` error, and a rejected token with the
/// [`DecodeError`] message; both start with the target's marker.
pub fn deserialize<'de, C, D>(deserializer: D) -> Result<C::Value, D::Error>
where
    C: ScalarCodec,
    D: Deserializer<'de>,
{
    let token = deserializer.deserialize_any(ScalarVisitor { target: C::TARGET })?;

    C::decode(token).map_err(|err| {
        tracing::debug!(target_type = %C::TARGET, error = %err, "scalar token rejected");
        de::Error::custom(C::TARGET.tagged(err))
    })
}

struct ScalarVisitor {
    target: TargetType,
}

impl ScalarVisitor {
    fn mismatch<E: de::Error>(&self, unexpected: Unexpected<'_>) -> E {
        tracing::debug!(target_type = %self.target, found = %unexpected, "wrong token kind");
        E::custom(self.target.tagged(format_args!(
            "invalid type: {unexpected}, expected {}",
            self.target.expecting()
        )))
    }
}

impl<'de> Visitor<'de> for ScalarVisitor {
    type Value = Scalar<'de>;

    fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
        formatter.write_str(self.target.expecting())
    }

    fn visit_bool<E>(self, v: bool) -> Result<Self::Value, E>
    where
        E: de::Error,
    {
        Err(self.mismatch(Unexpected::Bool(v)))
    }

    fn visit_i64<E>(self, v: i64) -> Result<Self::Value, E>
    where
        E: de::Error,
    {
        match self.target.wire_kind() {
            WireKind::Integer => Ok(Scalar::Int(v)),
            WireKind::String => Err(self.mismatch(Unexpected::Signed(v))),
        }
    }

    fn visit_u64<E>(self, v: u64) -> Result<Self::Value, E>
    where
        E: de::Error,
    {
        match self.target.wire_kind() {
            WireKind::Integer => i64::try_from(v).map(Scalar::Int).map_err(|_| {
                E::custom(self.target.tagged(format_args!(
                    "invalid value: {}, expected {}",
                    Unexpected::Unsigned(v),
                    self.target.expecting()
                )))
            }),
            WireKind::String => Err(self.mismatch(Unexpected::Unsigned(v))),
        }
    }

    fn visit_f64<E>(self, v: f64) -> Result<Self::Value, E>
    where
        E: de::Error,
    {
        Err(self.mismatch(Unexpected::Float(v)))
    }

    fn visit_borrowed_str<E>(self, v: &'de str) -> Result<Self::Value, E>
    where
        E: de::Error,
    {
        match self.target.wire_kind() {
            WireKind::String => Ok(Scalar::Str(Cow::Borrowed(v))),
            WireKind::Integer => Err(self.mismatch(Unexpected::Str(v))),
        }
    }

    fn visit_str<E>(self, v: &str) -> Result<Self::Value, E>
    where
        E: de::Error,
    {
        match self.target.wire_kind() {
            WireKind::String => Ok(Scalar::Str(Cow::Owned(v.to_owned()))),
            WireKind::Integer => Err(self.mismatch(Unexpected::Str(v))),
        }
    }

    fn visit_string<E>(self, v: String) -> Result<Self::Value, E>
    where
        E: de::Error,
    {
        match self.target.wire_kind() {
            WireKind::String => Ok(Scalar::Str(Cow::Owned(v))),
            WireKind::Integer => Err(self.mismatch(Unexpected::Str(&v))),
        }
    }

    fn visit_unit<E>(self) -> Result<Self::Value, E>
    where
        E: de::Error,
    {
        Err(self.mismatch(Unexpected::Unit))
    }

    fn visit_none<E>(self) -> Result<Self::Value, E>
    where
        E: de::Error,
    {
        Err(self.mismatch(Unexpected::Option))
    }

    fn visit_seq<A>(self, _seq: A) -> Result<Self::Value, A::Error>
    where
        A: SeqAccess<'de>,
    {
        Err(self.mismatch(Unexpected::Seq))
    }

    fn visit_map<A>(self, _map: A) -> Result<Self::Value, A::Error>
    where
        A: MapAccess<'de>,
    {
        Err(self.mismatch(Unexpected::Map))
    }
}
