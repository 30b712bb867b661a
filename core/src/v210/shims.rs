#![deny(missing_docs)]

//! # v2.1.0 Shims
//!
//! Intermediate deserialization layer mapping directly onto the v2.1.0
//! collection JSON. Nothing here is exposed to renderers; the builder folds
//! these into the canonical model.
//!
//! The wire format is loose: most fields may be missing or `null`, and a few
//! have alternative shapes (`url` as string or object, `description` as
//! string or object, `exec` as string or list). All of that is absorbed here.

use crate::auth::RawAuth;
use crate::pairs::RawPair;
use serde::{Deserialize, Deserializer};
use serde_json::Value;

/// Root object of a v2.1.0 collection.
#[derive(Debug, Default, Deserialize)]
pub struct ShimCollection {
    /// `info` block.
    #[serde(default, deserialize_with = "nullable")]
    pub info: ShimInfo,
    /// Top-level items.
    #[serde(default, deserialize_with = "nullable")]
    pub item: Vec<ShimItem>,
    /// Collection-level auth.
    #[serde(default)]
    pub auth: Option<ShimAuth>,
}

/// The `info` block.
#[derive(Debug, Default, Deserialize)]
pub struct ShimInfo {
    /// Collection name.
    #[serde(default, deserialize_with = "nullable")]
    pub name: String,
    /// Collection description.
    #[serde(default, deserialize_with = "description")]
    pub description: String,
}

/// An item: a folder when `request` is absent, a request otherwise.
#[derive(Debug, Default, Deserialize)]
pub struct ShimItem {
    /// Item name.
    #[serde(default, deserialize_with = "nullable")]
    pub name: String,
    /// Item description.
    #[serde(default, deserialize_with = "description")]
    pub description: String,
    /// Script hooks.
    #[serde(default, deserialize_with = "nullable")]
    pub event: Vec<ShimEvent>,
    /// Children (folders only).
    #[serde(default, deserialize_with = "nullable")]
    pub item: Vec<ShimItem>,
    /// Embedded request definition.
    #[serde(default)]
    pub request: Option<ShimRequest>,
    /// Example responses.
    #[serde(default, deserialize_with = "nullable")]
    pub response: Vec<ShimResponse>,
    /// Item-level auth.
    #[serde(default)]
    pub auth: Option<ShimAuth>,
}

/// A request definition, also used for a response's `originalRequest`.
#[derive(Debug, Default, Deserialize)]
pub struct ShimRequest {
    /// HTTP method.
    #[serde(default, deserialize_with = "nullable")]
    pub method: String,
    /// Headers.
    #[serde(default, deserialize_with = "nullable")]
    pub header: Vec<ShimPair>,
    /// Body.
    #[serde(default, deserialize_with = "nullable")]
    pub body: ShimBody,
    /// URL.
    #[serde(default, deserialize_with = "nullable")]
    pub url: ShimUrl,
    /// Request description.
    #[serde(default, deserialize_with = "description")]
    pub description: String,
    /// Request-level auth.
    #[serde(default)]
    pub auth: Option<ShimAuth>,
}

/// Request body.
#[derive(Debug, Default, Deserialize)]
pub struct ShimBody {
    /// Body mode: `raw`, `urlencoded`, `formdata`, ...
    #[serde(default, deserialize_with = "nullable")]
    pub mode: String,
    /// Raw body text.
    #[serde(default, deserialize_with = "nullable")]
    pub raw: String,
    /// `formdata` parameters.
    #[serde(default, deserialize_with = "nullable")]
    pub formdata: Vec<ShimPair>,
    /// `urlencoded` parameters.
    #[serde(default, deserialize_with = "nullable")]
    pub urlencoded: Vec<ShimPair>,
}

impl ShimBody {
    /// The parameter list matching the body mode, empty for other modes.
    pub fn params(&self) -> &[ShimPair] {
        match self.mode.as_str() {
            "urlencoded" => &self.urlencoded,
            "formdata" => &self.formdata,
            _ => &[],
        }
    }
}

/// A URL, either a bare string or a structured object.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
pub enum ShimUrl {
    /// Plain URL text.
    Raw(String),
    /// Structured URL.
    Structured(ShimUrlObject),
}

impl Default for ShimUrl {
    fn default() -> Self {
        ShimUrl::Raw(String::new())
    }
}

impl ShimUrl {
    /// Raw URL text.
    pub fn raw(&self) -> &str {
        match self {
            ShimUrl::Raw(raw) => raw,
            ShimUrl::Structured(obj) => &obj.raw,
        }
    }

    /// Declared path variables; a bare string declares none.
    pub fn variables(&self) -> &[ShimPair] {
        match self {
            ShimUrl::Raw(_) => &[],
            ShimUrl::Structured(obj) => &obj.variable,
        }
    }
}

/// Structured URL object.
#[derive(Debug, Default, Deserialize)]
pub struct ShimUrlObject {
    /// Raw URL text.
    #[serde(default, deserialize_with = "nullable")]
    pub raw: String,
    /// Path variables.
    #[serde(default, deserialize_with = "nullable")]
    pub variable: Vec<ShimPair>,
}

/// An example response.
#[derive(Debug, Default, Deserialize)]
pub struct ShimResponse {
    /// Response name.
    #[serde(default, deserialize_with = "nullable")]
    pub name: String,
    /// Status text.
    #[serde(default, deserialize_with = "nullable")]
    pub status: String,
    /// Status code.
    #[serde(default, deserialize_with = "nullable")]
    pub code: i64,
    /// Headers.
    #[serde(default, deserialize_with = "nullable")]
    pub header: Vec<ShimPair>,
    /// Body text.
    #[serde(default, deserialize_with = "nullable")]
    pub body: String,
    /// The request that produced this response.
    #[serde(default, rename = "originalRequest")]
    pub original_request: Option<ShimRequest>,
}

/// A script hook.
#[derive(Debug, Default, Deserialize)]
pub struct ShimEvent {
    /// Trigger name, e.g. `test` or `prerequest`.
    #[serde(default, deserialize_with = "nullable")]
    pub listen: String,
    /// Script body.
    #[serde(default, deserialize_with = "nullable")]
    pub script: ShimScript,
}

/// Script body of an event.
#[derive(Debug, Default, Deserialize)]
pub struct ShimScript {
    /// Source lines.
    #[serde(default, deserialize_with = "nullable")]
    pub exec: ShimLines,
}

/// Script source, either one string or a list of lines.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
pub enum ShimLines {
    /// A single block of text.
    One(String),
    /// Individual lines.
    Many(Vec<String>),
}

impl Default for ShimLines {
    fn default() -> Self {
        ShimLines::Many(Vec::new())
    }
}

impl ShimLines {
    /// Joins lines with `\n`.
    pub fn joined(&self) -> String {
        match self {
            ShimLines::One(text) => text.clone(),
            ShimLines::Many(lines) => lines.join("\n"),
        }
    }
}

/// An auth block. Only the `bearer` parameter list is read.
#[derive(Debug, Default, Deserialize)]
pub struct ShimAuth {
    /// Declared type.
    #[serde(rename = "type", default, deserialize_with = "nullable")]
    pub kind: String,
    /// Bearer parameters.
    #[serde(default, deserialize_with = "nullable")]
    pub bearer: Vec<ShimPair>,
}

impl ShimAuth {
    /// Borrowed view for the auth resolver.
    pub fn as_raw(&self) -> RawAuth<'_> {
        RawAuth {
            kind: &self.kind,
            params: self.bearer.iter().map(ShimPair::as_raw).collect(),
        }
    }
}

/// A key/value/description triple.
#[derive(Debug, Default, Deserialize)]
pub struct ShimPair {
    /// Key.
    #[serde(default, deserialize_with = "nullable")]
    pub key: String,
    /// Value in any JSON shape.
    #[serde(default)]
    pub value: Value,
    /// Description.
    #[serde(default, deserialize_with = "description")]
    pub description: String,
}

impl ShimPair {
    /// Borrowed view for the key-value normalizer.
    pub fn as_raw(&self) -> RawPair<'_> {
        RawPair {
            key: &self.key,
            value: &self.value,
            description: &self.description,
        }
    }
}

/// Just enough structure to read `info.schema` during detection.
#[derive(Debug, Deserialize)]
pub struct ShimSchemaMarker {
    /// `info` block, if any.
    #[serde(default)]
    pub info: Option<ShimSchemaInfo>,
}

/// `info` as seen during detection.
#[derive(Debug, Deserialize)]
pub struct ShimSchemaInfo {
    /// Declared schema URL.
    #[serde(default)]
    pub schema: Option<String>,
}

/// Treats an explicit `null` like a missing field.
fn nullable<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de> + Default,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

/// Description text, from either a string or a `{ "content": ... }` object.
fn description<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum ShimDescription {
        Text(String),
        Object {
            #[serde(default, deserialize_with = "nullable")]
            content: String,
        },
    }

    Ok(match Option::<ShimDescription>::deserialize(deserializer)? {
        Some(ShimDescription::Text(text)) => text,
        Some(ShimDescription::Object { content }) => content,
        None => String::new(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_nulls_decode_as_empty() {
        let item: ShimItem = serde_json::from_value(json!({
            "name": null,
            "description": null,
            "event": null,
            "item": null,
            "response": null
        }))
        .unwrap();
        assert_eq!(item.name, "");
        assert_eq!(item.description, "");
        assert!(item.event.is_empty());
        assert!(item.request.is_none());
    }

    #[test]
    fn test_description_object_form() {
        let info: ShimInfo = serde_json::from_value(json!({
            "name": "API",
            "description": { "content": "Long text", "type": "text/markdown" }
        }))
        .unwrap();
        assert_eq!(info.description, "Long text");
    }

    #[test]
    fn test_url_string_and_object() {
        let plain: ShimRequest =
            serde_json::from_value(json!({ "url": "https://api.test/users" })).unwrap();
        assert_eq!(plain.url.raw(), "https://api.test/users");
        assert!(plain.url.variables().is_empty());

        let structured: ShimRequest = serde_json::from_value(json!({
            "url": {
                "raw": "https://api.test/users/:id",
                "variable": [{ "key": "id", "value": "1" }]
            }
        }))
        .unwrap();
        assert_eq!(structured.url.raw(), "https://api.test/users/:id");
        assert_eq!(structured.url.variables()[0].key, "id");
    }

    #[test]
    fn test_exec_single_string() {
        let event: ShimEvent = serde_json::from_value(json!({
            "listen": "test",
            "script": { "exec": "pm.test('ok');" }
        }))
        .unwrap();
        assert_eq!(event.script.exec.joined(), "pm.test('ok');");
    }

    #[test]
    fn test_body_params_follow_mode() {
        let body: ShimBody = serde_json::from_value(json!({
            "mode": "formdata",
            "formdata": [{ "key": "file", "value": "a.txt" }],
            "urlencoded": [{ "key": "ignored" }]
        }))
        .unwrap();
        assert_eq!(body.params().len(), 1);
        assert_eq!(body.params()[0].key, "file");

        let raw: ShimBody = serde_json::from_value(json!({
            "mode": "raw",
            "raw": "{}",
            "formdata": [{ "key": "ignored" }]
        }))
        .unwrap();
        assert!(raw.params().is_empty());
    }

    #[test]
    fn test_wrong_type_is_an_error() {
        let res = serde_json::from_value::<ShimItem>(json!({ "item": "nope" }));
        assert!(res.is_err());
    }
}
