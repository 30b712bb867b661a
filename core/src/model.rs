#![deny(missing_docs)]

//! # Canonical Model
//!
//! Version-independent representation of a collection. Every version parser
//! converges on these types; renderers never see a wire-format shape.
//!
//! The tree is strictly owned: folders own their children by value and hold
//! no back-references.

use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::fmt;

/// The root of a parsed collection.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Collection {
    /// Collection name.
    pub name: String,
    /// Collection description.
    pub description: String,
    /// Requests that are immediate children of the document root.
    pub requests: Vec<Request>,
    /// Folders that are immediate children of the document root.
    pub folders: Vec<Folder>,
    /// Payload structure definitions, passed through untouched.
    pub structures: Vec<StructureDefinition>,
    /// Auth declared on the collection itself.
    pub auth: Option<Auth>,
}

impl Collection {
    /// Iterates every request in the tree, depth-first in document order.
    ///
    /// Top-level requests come first, then each folder's requests followed
    /// by its subfolders.
    pub fn walk_requests(&self) -> impl Iterator<Item = &Request> {
        let mut out = Vec::new();
        out.extend(self.requests.iter());
        for folder in &self.folders {
            folder.collect_requests(&mut out);
        }
        out.into_iter()
    }
}

/// A named grouping node.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Folder {
    /// Generated identifier.
    pub id: String,
    /// Folder name.
    pub name: String,
    /// Folder description.
    pub description: String,
    /// Child folders in source order.
    pub folders: Vec<Folder>,
    /// Child requests in source order.
    pub requests: Vec<Request>,
    /// Auth declared on this folder. Never back-filled from an ancestor.
    pub auth: Option<Auth>,
}

impl Folder {
    fn collect_requests<'a>(&'a self, out: &mut Vec<&'a Request>) {
        out.extend(self.requests.iter());
        for folder in &self.folders {
            folder.collect_requests(out);
        }
    }
}

/// Snapshot of a request as sent.
///
/// Embedded both in live requests and in each example response.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct OriginalRequest {
    /// HTTP method, verbatim from the source.
    pub method: String,
    /// Raw URL.
    pub url: String,
    /// Body mode (e.g. `raw`, `urlencoded`, `formdata`).
    pub payload_type: String,
    /// Raw body text.
    pub payload_raw: String,
    /// Form parameters for `urlencoded` / `formdata` bodies.
    pub payload_params: Vec<KeyValuePair>,
    /// Headers remaining after suppression.
    pub headers: Vec<KeyValuePair>,
    /// Effective auth after inheritance.
    pub auth: Option<Auth>,
}

/// A leaf action.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Request {
    /// Generated identifier.
    pub id: String,
    /// Request name.
    pub name: String,
    /// Request description.
    pub description: String,
    /// The request as sent, carrying the effective auth.
    #[serde(flatten)]
    pub original: OriginalRequest,
    /// URL path variables.
    pub path_variables: Vec<KeyValuePair>,
    /// Example responses.
    pub responses: Vec<Response>,
    /// Test script body, lines joined by `\n`. Empty when none is declared.
    pub tests: String,
}

/// An example response tied to a request.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Response {
    /// Generated identifier.
    pub id: String,
    /// Response name.
    pub name: String,
    /// Status text (e.g. `OK`).
    pub status: String,
    /// Numeric status code.
    pub status_code: i64,
    /// Body text.
    pub body: String,
    /// Response headers remaining after suppression.
    pub headers: Vec<KeyValuePair>,
    /// The request that produced this example.
    pub original_request: OriginalRequest,
}

/// Auth schemes this crate can represent.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AuthKind {
    /// `bearer`: a single `token` parameter.
    Bearer,
}

impl AuthKind {
    /// Type tag as it appears in source documents.
    pub fn as_str(self) -> &'static str {
        match self {
            AuthKind::Bearer => "bearer",
        }
    }
}

impl fmt::Display for AuthKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A validated auth declaration.
///
/// Constructed only through `Auth::new` / `Auth::bearer` or the auth resolver,
/// and deserialization runs the same validation, so an existing `Auth` always
/// has the shape its kind requires.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "crate::auth::AuthRecord")]
pub struct Auth {
    #[serde(rename = "type")]
    pub(crate) kind: AuthKind,
    pub(crate) params: Vec<KeyValuePair>,
}

impl Auth {
    /// Declared scheme.
    pub fn kind(&self) -> AuthKind {
        self.kind
    }

    /// Parameters in source order.
    pub fn params(&self) -> &[KeyValuePair] {
        &self.params
    }

    /// Looks up a parameter value by key.
    pub fn param(&self, key: &str) -> Option<&Value> {
        self.params.iter().find(|p| p.key == key).map(|p| &p.value)
    }

    /// Renders the HTTP header line this auth produces.
    pub fn authorization_header(&self) -> String {
        match self.kind {
            AuthKind::Bearer => {
                let token = self.param("token").map(value_text).unwrap_or_default();
                format!("Authorization: Bearer {}", token)
            }
        }
    }
}

/// A name/value pair used for headers, form params, path variables and auth params.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct KeyValuePair {
    /// Display name (same as the key for every current source format).
    pub name: String,
    /// Key.
    pub key: String,
    /// Value in its original shape.
    pub value: Value,
    /// Description.
    pub description: String,
}

/// A named payload schema.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct StructureDefinition {
    /// Structure name.
    pub name: String,
    /// Structure description.
    pub description: String,
    /// Field descriptors in declaration order.
    pub fields: Vec<StructureFieldDefinition>,
}

/// A single field of a `StructureDefinition`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct StructureFieldDefinition {
    /// Field name.
    pub name: String,
    /// Field description.
    pub description: String,
    /// Type name, free text.
    #[serde(rename = "type")]
    pub ty: String,
}

/// Strings render bare, everything else as JSON text.
fn value_text(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}
