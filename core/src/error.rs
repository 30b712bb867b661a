//! # Error Handling
//!
//! Provides the `CollectionError` enum returned by every parse operation.

use derive_more::{Display, From};

/// The Global Error Enum.
///
/// Every variant is fatal: a parse either yields a complete `Collection`
/// or one of these.
#[derive(Debug, Display, From)]
pub enum CollectionError {
    /// The bytes did not deserialize into the matched version's shape.
    #[display("Malformed document: {_0}")]
    Malformed(serde_json::Error),

    /// No registered parser recognized the document.
    #[from(ignore)]
    #[display("No matching parser: unrecognized format")]
    NoMatchingParser,

    /// A known auth type whose parameters have the wrong shape.
    #[from(ignore)]
    #[display("incorrect auth structure for type {_0}")]
    InvalidAuthShape(String),

    /// An auth type this crate cannot represent.
    #[from(ignore)]
    #[display("unsupported auth type {_0}")]
    UnsupportedAuthType(String),

    /// Options could not be loaded from a configuration document.
    #[from(ignore)]
    #[display("Invalid options: {_0}")]
    InvalidOptions(String),
}

impl std::error::Error for CollectionError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            CollectionError::Malformed(e) => Some(e),
            _ => None,
        }
    }
}

/// Helper type alias for Result using CollectionError.
pub type CollectionResult<T> = Result<T, CollectionError>;
