//! URLs as their serialized string form.
//!
//! Two adapters share the same parsing rules:
//!
//! - [`UrlString`] for a required [`Url`]. The empty string is not a URL and
//!   fails to decode.
//! - [`UrlOrEmpty`] for `Option<Url>` used as a plain value: `None` is the
//!   empty string on the wire, in both directions.
//!
//! Parsing is stricter than [`Url::parse`] alone: input with leading or
//! trailing whitespace is rejected instead of silently trimmed.

use std::borrow::Cow;

use serde::{Deserializer, Serializer};
use serde_with::{DeserializeAs, SerializeAs};
use url::Url;

use crate::codec::{self, DecodeError, Scalar, ScalarCodec, TargetType};

/// Adapter for [`Url`].
#[derive(Debug, Clone, Copy, Default)]
pub struct UrlString;

/// Adapter for `Option<Url>` where `None` is written as `""`.
///
/// ```
/// use jsonutil::UrlOrEmpty;
/// use serde::{Deserialize, Serialize};
/// use serde_with::serde_as;
/// use url::Url;
///
/// #[serde_as]
/// #[derive(Serialize, Deserialize)]
/// struct Profile {
///     #[serde_as(as = "UrlOrEmpty")]
///     homepage: Option<Url>,
/// }
///
/// let profile = Profile { homepage: None };
/// assert_eq!(jsonutil::to_string(&profile)?, r#"{"homepage":""}"#);
///
/// let profile: Profile = jsonutil::from_str(r#"{"homepage":"https://example.com/me"}"#)?;
/// assert_eq!(profile.homepage.unwrap().path(), "/me");
/// # Ok::<(), jsonutil::Error>(())
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct UrlOrEmpty;

/// Parses a URL token, rejecting surrounding whitespace.
///
/// # Errors
///
/// Returns [`DecodeError::Invalid`] tagged with [`TargetType::Url`].
pub fn parse(input: &str) -> Result<Url, DecodeError> {
    let invalid = |reason: String| DecodeError::Invalid {
        target: TargetType::Url,
        input: input.to_owned(),
        reason,
    };

    if input.trim() != input {
        return Err(invalid("leading or trailing whitespace".to_owned()));
    }

    Url::parse(input).map_err(|e| invalid(e.to_string()))
}

impl ScalarCodec for UrlString {
    type Value = Url;
    const TARGET: TargetType = TargetType::Url;

    fn encode(value: &Url) -> Scalar<'_> {
        Scalar::Str(Cow::Borrowed(value.as_str()))
    }

    fn decode(token: Scalar<'_>) -> Result<Url, DecodeError> {
        parse(&token.into_str(Self::TARGET)?)
    }
}

impl ScalarCodec for UrlOrEmpty {
    type Value = Option<Url>;
    const TARGET: TargetType = TargetType::Url;

    fn encode(value: &Option<Url>) -> Scalar<'_> {
        Scalar::Str(Cow::Borrowed(value.as_ref().map_or("", Url::as_str)))
    }

    fn decode(token: Scalar<'_>) -> Result<Option<Url>, DecodeError> {
        let input = token.into_str(Self::TARGET)?;
        if input.is_empty() {
            return Ok(None);
        }
        parse(&input).map(Some)
    }
}

impl SerializeAs<Url> for UrlString {
    fn serialize_as<S>(source: &Url, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        codec::serialize::<Self, S>(source, serializer)
    }
}

impl<'de> DeserializeAs<'de, Url> for UrlString {
    fn deserialize_as<D>(deserializer: D) -> Result<Url, D::Error>
    where
        D: Deserializer<'de>,
    {
        codec::deserialize::<Self, D>(deserializer)
    }
}

impl SerializeAs<Option<Url>> for UrlOrEmpty {
    fn serialize_as<S>(source: &Option<Url>, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        codec::serialize::<Self, S>(source, serializer)
    }
}

impl<'de> DeserializeAs<'de, Option<Url>> for UrlOrEmpty {
    fn deserialize_as<D>(deserializer: D) -> Result<Option<Url>, D::Error>
    where
        D: Deserializer<'de>,
    {
        codec::deserialize::<Self, D>(deserializer)
    }
}

pub fn serialize<S>(url: &Url, serializer: S) -> Result<S::Ok, S::Error>
where
    S: Serializer,
{
    UrlString::serialize_as(url, serializer)
}

pub fn deserialize<'de, D>(deserializer: D) -> Result<Url, D::Error>
where
    D: Deserializer<'de>,
{
    UrlString::deserialize_as(deserializer)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_full_url() {
        let url = parse("https://user@example.com:8443/a/b?q=1#frag").unwrap();
        assert_eq!(url.scheme(), "https");
        assert_eq!(url.username(), "user");
        assert_eq!(url.host_str(), Some("example.com"));
        assert_eq!(url.port(), Some(8443));
        assert_eq!(url.path(), "/a/b");
        assert_eq!(url.query(), Some("q=1"));
        assert_eq!(url.fragment(), Some("frag"));
    }

    #[test]
    fn test_parse_leading_space() {
        let err = parse(" http://example.org").unwrap_err();
        assert_eq!(err.target(), TargetType::Url);
        assert!(err.to_string().contains("leading or trailing whitespace"));
    }

    #[test]
    fn test_parse_trailing_newline() {
        assert!(parse("http://example.org\n").is_err());
    }

    #[test]
    fn test_parse_relative() {
        let err = parse("/just/a/path").unwrap_err();
        assert!(matches!(err, DecodeError::Invalid { .. }));
    }

    #[test]
    fn test_url_string_rejects_empty() {
        assert!(UrlString::decode(Scalar::Str("".into())).is_err());
    }

    #[test]
    fn test_url_string_encode() {
        let url = Url::parse("https://example.com/path?x=1").unwrap();
        assert_eq!(
            UrlString::encode(&url),
            Scalar::Str("https://example.com/path?x=1".into())
        );
    }

    #[test]
    fn test_url_or_empty_none() {
        assert_eq!(UrlOrEmpty::encode(&None), Scalar::Str("".into()));
        assert_eq!(UrlOrEmpty::decode(Scalar::Str("".into())).unwrap(), None);
    }

    #[test]
    fn test_url_or_empty_some() {
        let url = UrlOrEmpty::decode(Scalar::Str("https://example.com/path".into()))
            .unwrap()
            .unwrap();
        assert_eq!(url.as_str(), "https://example.com/path");
    }

    #[test]
    fn test_url_or_empty_rejects_blank() {
        assert!(UrlOrEmpty::decode(Scalar::Str(" ".into())).is_err());
    }

    #[test]
    fn test_url_rejects_integer_scalar() {
        let err = UrlString::decode(Scalar::Int(3)).unwrap_err();
        assert_eq!(err.target(), TargetType::Url);
    }
}
