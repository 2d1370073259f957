//! Decoding exports and rendering `vercel.json`
//!
//! Decoding runs in two stages so the error tells the user what is wrong:
//! text that is not JSON fails with [`Error::Parse`], JSON that is not a
//! Redirection export fails with [`Error::Schema`] naming the offending path.

use crate::error::{Error, Result};
use crate::types::{SourceDocument, SourceRule, TargetDocument};
use serde::Serialize;
use serde_json::Value;

/// Default file name of the rendered document
pub const OUTPUT_FILE_NAME: &str = "vercel.json";

/// Media type of the rendered document
pub const CONTENT_TYPE: &str = "application/json";

const BOM: char = '\u{feff}';
const UTF8_BOM: &[u8] = b"\xEF\xBB\xBF";

/// Parse raw export text into untyped JSON
///
/// A leading byte order mark is skipped, as browsers do when reading text files.
pub fn parse_json(text: &str) -> Result<Value> {
    serde_json::from_str(text.strip_prefix(BOM).unwrap_or(text)).map_err(Error::parse)
}

/// Parse raw export bytes into untyped JSON
///
/// Bytes that are not valid UTF-8 fail as a parse error with a position.
pub fn parse_json_slice(bytes: &[u8]) -> Result<Value> {
    serde_json::from_slice(bytes.strip_prefix(UTF8_BOM).unwrap_or(bytes)).map_err(Error::parse)
}

/// Parse and schema-check raw export text
pub fn parse_source(text: &str) -> Result<SourceDocument> {
    let value = parse_json(text)?;
    SourceDocument::from_value(value)
}

impl SourceDocument {
    /// Decode an export from already-parsed JSON
    ///
    /// Fails only when the root is not an object or `redirects` is missing or
    /// not an array. A rule that is not an object decodes as an empty rule.
    pub fn from_value(value: Value) -> Result<Self> {
        let items = match value {
            Value::Object(mut map) => match map.remove("redirects") {
                Some(Value::Array(items)) => items,
                None | Some(Value::Null) => {
                    return Err(Error::schema("$.redirects", "missing required field `redirects`"));
                }
                Some(other) => {
                    return Err(Error::schema(
                        "$.redirects",
                        format!("expected an array, found {}", json_type(&other)),
                    ));
                }
            },
            other => {
                return Err(Error::schema(
                    "$",
                    format!("expected an object with a `redirects` array, found {}", json_type(&other)),
                ));
            }
        };

        let redirects = items
            .into_iter()
            .enumerate()
            .map(|(index, item)| decode_rule(index, item))
            .collect::<Result<Vec<_>>>()?;

        tracing::debug!(rules = redirects.len(), "decoded redirect export");
        Ok(Self { redirects })
    }
}

fn decode_rule(index: usize, item: Value) -> Result<SourceRule> {
    let path = format!("$.redirects[{}]", index);

    if !item.is_object() {
        tracing::warn!(path = %path, found = json_type(&item), "redirect rule is not an object");
        return Ok(SourceRule::default());
    }

    serde_json::from_value(item).map_err(|e| Error::schema(path, e.to_string()))
}

/// Render a target document as two-space indented JSON with a trailing newline
pub fn render(document: &TargetDocument) -> Result<String> {
    render_pretty(document)
}

/// Render any serializable value the way `vercel.json` is rendered
pub fn render_pretty<T: Serialize + ?Sized>(value: &T) -> Result<String> {
    let mut text = serde_json::to_string_pretty(value).map_err(|source| Error::Render {
        message: source.to_string(),
        source,
    })?;
    text.push('\n');
    Ok(text)
}

/// Human name of a JSON value's type, for diagnostics
pub(crate) fn json_type(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}
