#![deny(missing_docs)]

//! # Postnorm Core
//!
//! Version-aware parsing of exported API collection documents into one
//! canonical model.
//!
//! ```no_run
//! use postnorm_core::{parse, ParseOptions};
//!
//! let bytes = std::fs::read("collection.json").unwrap();
//! let options = ParseOptions::new().ignore_response_header("Date");
//! let collection = parse(&bytes, &options).unwrap();
//! for request in collection.walk_requests() {
//!     println!("{} {}", request.original.method, request.original.url);
//! }
//! ```

/// Shared error types.
pub mod error;

/// Canonical, version-independent model.
pub mod model;

/// Normalization options.
pub mod options;

/// Identifier generation.
pub mod ids;

/// Key-value normalization.
pub mod pairs;

/// Auth validation and inheritance.
pub mod auth;

/// Version parser trait and dispatch.
pub mod registry;

/// Collection format v2.1.0.
pub mod v210;

pub use error::{CollectionError, CollectionResult};
pub use ids::{IdGenerator, SequentialIds, UuidGenerator};
pub use model::{
    Auth, AuthKind, Collection, Folder, KeyValuePair, OriginalRequest, Request, Response,
    StructureDefinition, StructureFieldDefinition,
};
pub use options::{HeaderMatching, ParseOptions};
pub use registry::{ParserRegistry, VersionParser};
pub use v210::CollectionV210Parser;

/// Parses a document with the built-in parsers and random UUID identifiers.
pub fn parse(contents: &[u8], options: &ParseOptions) -> CollectionResult<Collection> {
    ParserRegistry::default().parse(contents, options)
}

/// Parses a document with the built-in parsers and the given identifier generator.
pub fn parse_with_ids(
    contents: &[u8],
    options: &ParseOptions,
    ids: &mut dyn IdGenerator,
) -> CollectionResult<Collection> {
    ParserRegistry::default().parse_with_ids(contents, options, ids)
}
