mod common;

use jsonutil::{Error, TargetType, UrlOrEmpty, UrlString, ZeroOnNull};
use serde::{Deserialize, Serialize};
use serde_with::serde_as;
use url::Url;

#[serde_as]
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
struct Urls {
    #[serde_as(as = "ZeroOnNull<UrlOrEmpty>")]
    url: Option<Url>,

    #[serde_as(as = "Option<UrlString>")]
    #[serde(default)]
    url_pointer: Option<Url>,

    #[serde_as(as = "ZeroOnNull<UrlOrEmpty>")]
    #[serde(default = "jsonutil::zero", skip_serializing_if = "jsonutil::is_zero")]
    url_omit_zero: Option<Url>,

    #[serde_as(as = "Option<UrlString>")]
    #[serde(default, skip_serializing_if = "Option::is_none")]
    url_pointer_omit_empty: Option<Url>,
}

impl Urls {
    fn zeroed() -> Self {
        Self {
            url: None,
            url_pointer: None,
            url_omit_zero: None,
            url_pointer_omit_empty: None,
        }
    }

    fn all(url: Url) -> Self {
        Self {
            url: Some(url.clone()),
            url_pointer: Some(url.clone()),
            url_omit_zero: Some(url.clone()),
            url_pointer_omit_empty: Some(url),
        }
    }
}

#[test]
fn test_truncated_input_is_syntactic() {
    common::init_tracing();

    let err = jsonutil::from_str::<Urls>(r#"{"url":"#).unwrap_err();
    assert!(matches!(err, Error::UnexpectedEof { .. }));
}

#[test]
fn test_integer_token_is_semantic() {
    common::init_tracing();

    let err = jsonutil::from_str::<Urls>(r#"{"url":3}"#).unwrap_err();
    assert!(err.is_semantic());
    assert_eq!(err.target(), Some(TargetType::Url));
}

#[test]
fn test_leading_space_is_semantic() {
    common::init_tracing();

    let err = jsonutil::from_str::<Urls>(r#"{"url":" http://example.org"}"#).unwrap_err();
    assert!(err.is_semantic());
    assert_eq!(err.target(), Some(TargetType::Url));
}

#[test]
fn test_pointer_rejects_empty_string() {
    let err = jsonutil::from_str::<Urls>(r#"{"url":"","urlPointer":""}"#).unwrap_err();
    assert!(err.is_semantic());
    assert_eq!(err.target(), Some(TargetType::Url));
}

#[test]
fn test_null_fields() {
    common::init_tracing();

    let urls: Urls = jsonutil::from_str(
        r#"{"url":null,"urlPointer":null,"urlOmitZero":null,"urlPointerOmitEmpty":null}"#,
    )
    .unwrap();
    assert_eq!(urls, Urls::zeroed());
}

#[test]
fn test_zero_value_round_trip() {
    common::init_tracing();

    let json = jsonutil::to_string(&Urls::zeroed()).unwrap();
    assert_eq!(json, r#"{"url":"","urlPointer":null}"#);

    let parsed: Urls = jsonutil::from_str(&json).unwrap();
    assert_eq!(parsed, Urls::zeroed());
}

#[test]
fn test_url_round_trip() {
    common::init_tracing();

    let url = Url::parse("https://example.com/path").unwrap();
    let json = jsonutil::to_string(&Urls::all(url.clone())).unwrap();
    assert_eq!(
        json,
        r#"{"url":"https://example.com/path","urlPointer":"https://example.com/path","urlOmitZero":"https://example.com/path","urlPointerOmitEmpty":"https://example.com/path"}"#
    );

    let parsed: Urls = jsonutil::from_str(&json).unwrap();
    assert_eq!(parsed, Urls::all(url));
}

#[test]
fn test_decoded_url_is_structured() {
    let urls: Urls =
        jsonutil::from_str(r#"{"url":"http://example.org:8080/a?b=c#d","urlPointer":null}"#)
            .unwrap();
    let url = urls.url.unwrap();
    assert_eq!(url.scheme(), "http");
    assert_eq!(url.host_str(), Some("example.org"));
    assert_eq!(url.port(), Some(8080));
    assert_eq!(url.path(), "/a");
    assert_eq!(url.query(), Some("b=c"));
    assert_eq!(url.fragment(), Some("d"));
}

#[test]
fn test_escaped_string_token() {
    let urls: Urls =
        jsonutil::from_str(r#"{"url":"https:\/\/example.com\/x","urlPointer":null}"#).unwrap();
    assert_eq!(urls.url.unwrap().as_str(), "https://example.com/x");
}

#[test]
fn test_type_name_in_input_keeps_url_tag() {
    common::init_tracing();

    let err = jsonutil::from_str::<Urls>(r#"{"url":" chrono::NaiveDate"}"#).unwrap_err();
    assert!(err.is_semantic());
    assert_eq!(err.target(), Some(TargetType::Url));
}

#[derive(Debug, Deserialize)]
struct Plain {
    #[allow(dead_code)]
    count: u8,
}

#[test]
fn test_type_name_in_plain_field_is_untagged() {
    common::init_tracing();

    let err = jsonutil::from_str::<Plain>(r#"{"count":"url::Url"}"#).unwrap_err();
    assert!(err.is_semantic());
    assert_eq!(err.target(), None);
}
