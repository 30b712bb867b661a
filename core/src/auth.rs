#![deny(missing_docs)]

//! # Auth Resolution
//!
//! Validates raw auth blocks into canonical `Auth` values and implements the
//! inheritance rule used by the tree walk.
//!
//! Only `bearer` is representable. Any other declared type is rejected rather
//! than passed through with parameters we cannot interpret.

use crate::error::{CollectionError, CollectionResult};
use crate::model::{Auth, AuthKind, KeyValuePair};
use crate::pairs::{normalize_pairs, RawPair};
use serde::Deserialize;
use serde_json::Value;
use std::str::FromStr;

/// A borrowed, version-neutral view of a declared auth block.
#[derive(Debug, Clone)]
pub struct RawAuth<'a> {
    /// Declared type tag.
    pub kind: &'a str,
    /// Declared parameters for that type, in source order.
    pub params: Vec<RawPair<'a>>,
}

/// Resolves an optional raw auth block.
///
/// Absent input yields `Ok(None)`. Present input is validated against the
/// shape its type requires.
pub fn resolve_auth(raw: Option<RawAuth<'_>>) -> CollectionResult<Option<Auth>> {
    let Some(raw) = raw else {
        return Ok(None);
    };
    Auth::new(raw.kind, normalize_pairs(raw.params)).map(Some)
}

/// The auth that applies to a node: its own declaration if any, otherwise the
/// nearest ancestor's.
pub fn effective_auth(local: Option<&Auth>, inherited: Option<&Auth>) -> Option<Auth> {
    local.or(inherited).cloned()
}

impl FromStr for AuthKind {
    type Err = CollectionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "bearer" => Ok(AuthKind::Bearer),
            other => Err(CollectionError::UnsupportedAuthType(other.to_string())),
        }
    }
}

impl Auth {
    /// Validates `params` against the shape `kind` requires.
    pub fn new(kind: &str, params: Vec<KeyValuePair>) -> CollectionResult<Self> {
        let kind: AuthKind = kind.parse()?;
        match kind {
            AuthKind::Bearer => {
                let is_token_only = params.len() == 1 && params[0].key == "token";
                if !is_token_only {
                    return Err(CollectionError::InvalidAuthShape(kind.to_string()));
                }
            }
        }
        Ok(Self { kind, params })
    }

    /// A bearer auth carrying `token`.
    pub fn bearer(token: impl Into<Value>) -> Self {
        Self {
            kind: AuthKind::Bearer,
            params: vec![KeyValuePair {
                name: "token".into(),
                key: "token".into(),
                value: token.into(),
                description: String::new(),
            }],
        }
    }
}

/// Unvalidated serialized form of `Auth`.
#[derive(Deserialize)]
pub(crate) struct AuthRecord {
    #[serde(rename = "type")]
    kind: String,
    #[serde(default)]
    params: Vec<KeyValuePair>,
}

impl TryFrom<AuthRecord> for Auth {
    type Error = CollectionError;

    fn try_from(record: AuthRecord) -> Result<Self, Self::Error> {
        Auth::new(&record.kind, record.params)
    }
}
