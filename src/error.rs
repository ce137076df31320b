//! Crate-level error type returned by the [`crate::json`] entry points.

use serde_json::error::Category;

use crate::codec::TargetType;

/// A failed marshal or unmarshal.
///
/// Decoding failures split into two kinds:
///
/// - **syntactic** ([`Error::UnexpectedEof`], [`Error::Syntax`]): the input is
///   not well-formed JSON. These come from the tokenizer.
/// - **semantic** ([`Error::Semantic`]): a well-formed token had the wrong
///   kind or failed type-specific validation. `target` names the adapter
///   type that rejected it, when an adapter was involved.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("unexpected end of JSON input: {source}")]
    UnexpectedEof { source: serde_json::Error },

    #[error("malformed JSON input: {source}")]
    Syntax { source: serde_json::Error },

    #[error("cannot decode {}: {source}", .target.map_or("value", TargetType::type_name))]
    Semantic {
        target: Option<TargetType>,
        source: serde_json::Error,
    },

    #[error("failed to read JSON input: {source}")]
    Io { source: serde_json::Error },

    #[error("failed to encode JSON: {source}")]
    Encode { source: serde_json::Error },
}

impl Error {
    /// Classifies a decoding error from `serde_json`.
    pub fn decode(source: serde_json::Error) -> Self {
        match source.classify() {
            Category::Eof => Error::UnexpectedEof { source },
            Category::Syntax => Error::Syntax { source },
            Category::Io => Error::Io { source },
            Category::Data => Error::Semantic {
                target: TargetType::from_message(&source.to_string()),
                source,
            },
        }
    }

    pub fn encode(source: serde_json::Error) -> Self {
        Error::Encode { source }
    }

    /// The adapter type that rejected the input, for semantic errors.
    pub fn target(&self) -> Option<TargetType> {
        match self {
            Error::Semantic { target, .. } => *target,
            _ => None,
        }
    }

    pub fn is_syntactic(&self) -> bool {
        matches!(self, Error::UnexpectedEof { .. } | Error::Syntax { .. })
    }

    pub fn is_semantic(&self) -> bool {
        matches!(self, Error::Semantic { .. })
    }

    pub fn is_eof(&self) -> bool {
        matches!(self, Error::UnexpectedEof { .. })
    }

    fn source_json(&self) -> &serde_json::Error {
        match self {
            Error::UnexpectedEof { source }
            | Error::Syntax { source }
            | Error::Semantic { source, .. }
            | Error::Io { source }
            | Error::Encode { source } => source,
        }
    }

    /// One-based line of the failure, or 0 when not tied to a position.
    pub fn line(&self) -> usize {
        self.source_json().line()
    }

    /// One-based column of the failure, or 0 when not tied to a position.
    pub fn column(&self) -> usize {
        self.source_json().column()
    }
}

pub type Result<T, E = Error> = std::result::Result<T, E>;
