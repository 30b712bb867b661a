#![deny(missing_docs)]

//! # Parse Options
//!
//! Header suppression configuration consumed by the normalizer.
//! Loadable from JSON or YAML; every field has a default.

use crate::error::{CollectionError, CollectionResult};
use indexmap::IndexSet;
use serde::{Deserialize, Serialize};

/// How header keys are compared against a suppression list.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum HeaderMatching {
    /// Case-sensitive exact string membership.
    #[default]
    Exact,
    /// ASCII case-insensitive membership.
    CaseInsensitive,
}

/// Options controlling normalization.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ParseOptions {
    /// Header keys dropped from requests and from every reconstructed original request.
    pub ignored_request_headers: IndexSet<String>,
    /// Header keys dropped from example responses.
    pub ignored_response_headers: IndexSet<String>,
    /// Key comparison mode for both lists.
    pub header_matching: HeaderMatching,
}

impl ParseOptions {
    /// Creates options that suppress nothing.
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a request-side header key to suppress.
    pub fn ignore_request_header(mut self, key: impl Into<String>) -> Self {
        self.ignored_request_headers.insert(key.into());
        self
    }

    /// Adds a response-side header key to suppress.
    pub fn ignore_response_header(mut self, key: impl Into<String>) -> Self {
        self.ignored_response_headers.insert(key.into());
        self
    }

    /// Sets the key comparison mode.
    pub fn with_header_matching(mut self, matching: HeaderMatching) -> Self {
        self.header_matching = matching;
        self
    }

    /// Loads options from a YAML document.
    pub fn from_yaml_str(yaml: &str) -> CollectionResult<Self> {
        serde_yaml::from_str(yaml).map_err(|e| {
            CollectionError::InvalidOptions(format!("Failed to parse options YAML: {}", e))
        })
    }

    /// Loads options from a JSON document.
    pub fn from_json_str(json: &str) -> CollectionResult<Self> {
        serde_json::from_str(json).map_err(|e| {
            CollectionError::InvalidOptions(format!("Failed to parse options JSON: {}", e))
        })
    }

    /// Whether a request header with this key is suppressed.
    pub fn is_request_header_ignored(&self, key: &str) -> bool {
        self.header_matching.contains(&self.ignored_request_headers, key)
    }

    /// Whether a response header with this key is suppressed.
    pub fn is_response_header_ignored(&self, key: &str) -> bool {
        self.header_matching.contains(&self.ignored_response_headers, key)
    }
}

impl HeaderMatching {
    fn contains(self, set: &IndexSet<String>, key: &str) -> bool {
        match self {
            HeaderMatching::Exact => set.contains(key),
            HeaderMatching::CaseInsensitive => set.iter().any(|k| k.eq_ignore_ascii_case(key)),
        }
    }
}
