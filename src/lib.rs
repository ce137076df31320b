//! # jsonutil
//!
//! Compact scalar JSON representations for a handful of value types, plugged
//! into serde through `serde_with`.
//!
//! | Type | Adapter | Wire form |
//! |---|---|---|
//! | `chrono::NaiveDate` | [`UnixDate`] | integer, Unix seconds at midnight UTC |
//! | `chrono::DateTime<Utc>` | [`UnixTime`] | integer, Unix seconds |
//! | `chrono::TimeDelta` | [`DurationSecs`] | integer, whole seconds |
//! | `url::Url` | [`UrlString`] | string |
//! | `Option<url::Url>` | [`UrlOrEmpty`] | string, `""` for `None` |
//!
//! ## Architecture
//!
//! - **Contract** ([`codec`]) - the [`ScalarCodec`] trait and the token
//!   plumbing every adapter goes through
//! - **Adapters** ([`unix_date`], [`unix_time`], [`duration_secs`],
//!   [`url_string`]) - one module per type
//! - **Field policies** ([`policy`]) - null handling and omission, chosen per
//!   field
//! - **Entry points** ([`json`]) - `serde_json` wrappers returning [`Error`]
//!
//! ## Example
//!
//! ```
//! use chrono::{NaiveDate, TimeDelta};
//! use jsonutil::{DurationSecs, UnixDate};
//! use serde::{Deserialize, Serialize};
//! use serde_with::serde_as;
//!
//! #[serde_as]
//! #[derive(Debug, PartialEq, Serialize, Deserialize)]
//! struct Job {
//!     #[serde_as(as = "UnixDate")]
//!     due: NaiveDate,
//!     #[serde_as(as = "Option<DurationSecs>")]
//!     #[serde(default, skip_serializing_if = "Option::is_none")]
//!     timeout: Option<TimeDelta>,
//! }
//!
//! let job = Job {
//!     due: NaiveDate::from_ymd_opt(2024, 1, 2).unwrap(),
//!     timeout: Some(TimeDelta::seconds(30)),
//! };
//! let json = jsonutil::to_string(&job)?;
//! assert_eq!(json, r#"{"due":1704153600,"timeout":30}"#);
//! assert_eq!(jsonutil::from_str::<Job>(&json)?, job);
//!
//! let err = jsonutil::from_str::<Job>(r#"{"due":"3"}"#).unwrap_err();
//! assert_eq!(err.target(), Some(jsonutil::TargetType::Date));
//! # Ok::<(), jsonutil::Error>(())
//! ```
//!
//! ## Logging
//!
//! Rejected tokens and failed documents are reported through `tracing` at
//! `debug` level. The crate never installs a subscriber.

pub mod codec;
pub mod duration_secs;
pub mod error;
pub mod json;
pub mod policy;
pub mod unix_date;
pub mod unix_time;
pub mod url_string;

pub use codec::{DecodeError, Scalar, ScalarCodec, TargetType, WireKind};
pub use duration_secs::DurationSecs;
pub use error::{Error, Result};
pub use json::{from_reader, from_slice, from_str, from_value, to_string, to_value, to_vec};
pub use policy::{Zero, ZeroOnNull, is_zero, zero};
pub use unix_date::UnixDate;
pub use unix_time::UnixTime;
pub use url_string::{UrlOrEmpty, UrlString};

/// Commonly used types for field declarations.
pub mod prelude {
    pub use crate::duration_secs::DurationSecs;
    pub use crate::policy::{Zero, ZeroOnNull};
    pub use crate::unix_date::UnixDate;
    pub use crate::unix_time::UnixTime;
    pub use crate::url_string::{UrlOrEmpty, UrlString};
}
