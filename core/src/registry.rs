#![deny(missing_docs)]

//! # Parser Registry
//!
//! Holds the available version parsers and dispatches a document to the first
//! one whose detection predicate accepts it. Candidates are evaluated in
//! registration order.

use crate::error::{CollectionError, CollectionResult};
use crate::ids::{IdGenerator, UuidGenerator};
use crate::model::Collection;
use crate::options::ParseOptions;
use crate::v210::CollectionV210Parser;

/// Decodes one wire-format version into the canonical model.
pub trait VersionParser: Send + Sync {
    /// Short version label, e.g. `v2.1.0`.
    fn version(&self) -> &'static str;

    /// Pure inspection: does this parser understand `contents`?
    fn can_parse(&self, contents: &[u8]) -> bool;

    /// Decodes and normalizes `contents`.
    fn parse(
        &self,
        contents: &[u8],
        options: &ParseOptions,
        ids: &mut dyn IdGenerator,
    ) -> CollectionResult<Collection>;
}

/// Ordered set of version parsers.
pub struct ParserRegistry {
    parsers: Vec<Box<dyn VersionParser>>,
}

impl ParserRegistry {
    /// Creates an empty registry.
    pub fn new() -> Self {
        Self {
            parsers: Vec::new(),
        }
    }

    /// Appends a parser. Earlier registrations take precedence.
    pub fn register(&mut self, parser: impl VersionParser + 'static) -> &mut Self {
        self.parsers.push(Box::new(parser));
        self
    }

    /// Version labels in precedence order.
    pub fn versions(&self) -> Vec<&'static str> {
        self.parsers.iter().map(|p| p.version()).collect()
    }

    /// Returns the first parser accepting `contents`.
    pub fn find(&self, contents: &[u8]) -> Option<&dyn VersionParser> {
        self.parsers
            .iter()
            .find(|p| p.can_parse(contents))
            .map(|p| p.as_ref())
    }

    /// Parses with random UUID identifiers.
    pub fn parse(&self, contents: &[u8], options: &ParseOptions) -> CollectionResult<Collection> {
        self.parse_with_ids(contents, options, &mut UuidGenerator)
    }

    /// Parses with a caller-supplied identifier generator.
    pub fn parse_with_ids(
        &self,
        contents: &[u8],
        options: &ParseOptions,
        ids: &mut dyn IdGenerator,
    ) -> CollectionResult<Collection> {
        let parser = self.find(contents).ok_or(CollectionError::NoMatchingParser)?;
        tracing::debug!(version = parser.version(), bytes = contents.len(), "selected parser");
        parser.parse(contents, options, ids)
    }
}

impl Default for ParserRegistry {
    /// A registry holding every built-in parser.
    fn default() -> Self {
        let mut registry = Self::new();
        registry.register(CollectionV210Parser);
        registry
    }
}
