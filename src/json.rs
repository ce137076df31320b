//! Top-level marshal and unmarshal entry points.
//!
//! Thin wrappers over `serde_json` that turn its errors into
//! [`crate::Error`], keeping the syntactic/semantic split and the adapter
//! type tag.

use std::io;

use serde::Serialize;
use serde::de::DeserializeOwned;
use serde_json::Value;

use crate::error::{Error, Result};

fn decode_failed(source: serde_json::Error) -> Error {
    let err = Error::decode(source);
    tracing::debug!(
        error = %err,
        syntactic = err.is_syntactic(),
        target_type = ?err.target(),
        "failed to decode JSON document"
    );
    err
}

fn encode_failed(source: serde_json::Error) -> Error {
    let err = Error::encode(source);
    tracing::debug!(error = %err, "failed to encode JSON document");
    err
}

/// Serializes `value` as a JSON string.
///
/// # Errors
///
/// Returns [`Error::Encode`] if a `Serialize` impl fails. The scalar adapters
/// never do.
pub fn to_string<T>(value: &T) -> Result<String>
where
    T: ?Sized + Serialize,
{
    serde_json::to_string(value).map_err(encode_failed)
}

pub fn to_vec<T>(value: &T) -> Result<Vec<u8>>
where
    T: ?Sized + Serialize,
{
    serde_json::to_vec(value).map_err(encode_failed)
}

pub fn to_value<T>(value: T) -> Result<Value>
where
    T: Serialize,
{
    serde_json::to_value(value).map_err(encode_failed)
}

/// Deserializes a `T` from a JSON string.
///
/// # Errors
///
/// - [`Error::UnexpectedEof`] if the input ends before a complete value.
/// - [`Error::Syntax`] if the input is not valid JSON.
/// - [`Error::Semantic`] if a token has the wrong kind or an adapter rejects
///   it; [`Error::target`] names the adapter type.
pub fn from_str<T>(input: &str) -> Result<T>
where
    T: DeserializeOwned,
{
    serde_json::from_str(input).map_err(decode_failed)
}

/// Deserializes a `T` from JSON bytes. See [`from_str`] for errors.
pub fn from_slice<T>(input: &[u8]) -> Result<T>
where
    T: DeserializeOwned,
{
    serde_json::from_slice(input).map_err(decode_failed)
}

/// Deserializes a `T` from a reader. I/O failures become [`Error::Io`].
pub fn from_reader<R, T>(reader: R) -> Result<T>
where
    R: io::Read,
    T: DeserializeOwned,
{
    serde_json::from_reader(reader).map_err(decode_failed)
}

/// Deserializes a `T` from an already-parsed document.
///
/// Only semantic errors are possible here.
pub fn from_value<T>(value: Value) -> Result<T>
where
    T: DeserializeOwned,
{
    serde_json::from_value(value).map_err(decode_failed)
}
