#![deny(missing_docs)]

//! # Collection Format v2.1.0
//!
//! - **shims**: Intermediate deserialization layer for the v2.1.0 JSON shape.
//! - **builder**: Tree walk folding shims into the canonical model.

pub(crate) mod builder;
pub(crate) mod shims;

use crate::error::CollectionResult;
use crate::ids::IdGenerator;
use crate::model::Collection;
use crate::options::ParseOptions;
use crate::registry::VersionParser;
use builder::CollectionBuilder;
use shims::{ShimCollection, ShimSchemaMarker};

/// Suffix of the `info.schema` URL declared by v2.1.0 documents.
pub const SCHEMA_SUFFIX: &str = "/v2.1.0/collection.json";

/// Parser for v2.1.0 collection documents.
#[derive(Debug, Clone, Copy, Default)]
pub struct CollectionV210Parser;

impl VersionParser for CollectionV210Parser {
    fn version(&self) -> &'static str {
        "v2.1.0"
    }

    /// A document cut off before its end is still claimed when it mentions the
    /// v2.1.0 schema URL, so that parsing reports it as malformed.
    fn can_parse(&self, contents: &[u8]) -> bool {
        match serde_json::from_slice::<ShimSchemaMarker>(contents) {
            Ok(marker) => marker
                .info
                .and_then(|info| info.schema)
                .is_some_and(|schema| schema.trim_end().ends_with(SCHEMA_SUFFIX)),
            Err(e) if e.is_eof() => mentions_schema(contents),
            Err(_) => false,
        }
    }

    fn parse(
        &self,
        contents: &[u8],
        options: &ParseOptions,
        ids: &mut dyn IdGenerator,
    ) -> CollectionResult<Collection> {
        let src: ShimCollection = serde_json::from_slice(contents)?;
        CollectionBuilder::new(options, ids).build(src)
    }
}

fn mentions_schema(contents: &[u8]) -> bool {
    contents
        .windows(SCHEMA_SUFFIX.len())
        .any(|window| window == SCHEMA_SUFFIX.as_bytes())
}
