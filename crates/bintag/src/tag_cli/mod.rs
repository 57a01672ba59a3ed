//! `tag-cli` — command-line tools for packing and unpacking tag documents.
//!
//! Provides the core logic used by the binary entry points:
//! - `tag-pack`   — encode JSON → binary tag document
//! - `tag-unpack` — decode a binary tag document → JSON or tag text

use serde_json::Value;

use crate::decoder::TagDecoder;
use crate::encoder::TagEncoder;
use crate::json::{from_json, to_json};
use crate::limit::Limits;

// ── Defaults ──────────────────────────────────────────────────────────────

/// Element budget applied when no limit flag is given.
pub const DEFAULT_MAX_ELEMENTS: u64 = 1 << 20;

/// Nesting ceiling applied when no limit flag is given.
pub const DEFAULT_MAX_DEPTH: u32 = 512;

/// Limits used when none are specified on the command line.
pub fn default_limits() -> Limits {
    Limits::new(DEFAULT_MAX_ELEMENTS, DEFAULT_MAX_DEPTH)
}

// ── Errors ────────────────────────────────────────────────────────────────

#[derive(Debug)]
pub enum CliError {
    Json(serde_json::Error),
    FromJson(String),
    Tag(String),
    UnknownFormat(String),
}

impl std::fmt::Display for CliError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            CliError::Json(e)          => write!(f, "{e}"),
            CliError::FromJson(e)      => write!(f, "{e}"),
            CliError::Tag(e)           => write!(f, "{e}"),
            CliError::UnknownFormat(e) => write!(f, "Unknown format: {e}"),
        }
    }
}

impl From<serde_json::Error> for CliError {
    fn from(e: serde_json::Error) -> Self { CliError::Json(e) }
}

// ── tag-pack ──────────────────────────────────────────────────────────────

/// Encode a JSON string to a binary tag document rooted at `root_name`.
pub fn pack(json: &str, root_name: &str) -> Result<Vec<u8>, CliError> {
    let value: Value = serde_json::from_str(json)?;
    let tag = from_json(&value).map_err(|e| CliError::FromJson(e.to_string()))?;
    let mut encoder = TagEncoder::default();
    encoder
        .encode(root_name, &tag)
        .map_err(|e| CliError::Tag(e.to_string()))
}

// ── tag-unpack ────────────────────────────────────────────────────────────

/// Decode a binary tag document to a pretty-printed JSON string.
pub fn unpack_json(bytes: &[u8], limits: Limits) -> Result<String, CliError> {
    let decoder = TagDecoder::new();
    let (_, tag) = decoder
        .decode(bytes, limits)
        .map_err(|e| CliError::Tag(e.to_string()))?;
    Ok(serde_json::to_string_pretty(&to_json(&tag))?)
}

/// Decode a binary tag document to the single-line tag text form.
pub fn unpack_text(bytes: &[u8], limits: Limits) -> Result<String, CliError> {
    let decoder = TagDecoder::new();
    let (_, tag) = decoder
        .decode(bytes, limits)
        .map_err(|e| CliError::Tag(e.to_string()))?;
    Ok(tag.to_string())
}

/// Decode bytes to the requested output format (`"json"` or `"text"`).
pub fn unpack(bytes: &[u8], format: &str, limits: Limits) -> Result<String, CliError> {
    match format.to_lowercase().as_str() {
        "json" => unpack_json(bytes, limits),
        "text" => unpack_text(bytes, limits),
        other => Err(CliError::UnknownFormat(other.to_string())),
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tag::{Compound, Tag};

    // ── pack / unpack roundtrips ───────────────────────────────────────────

    #[test]
    fn pack_unpack_number() {
        let bytes = pack("42", "").unwrap();
        let json  = unpack_json(&bytes, default_limits()).unwrap();
        assert_eq!(json.trim(), "42");
    }

    #[test]
    fn pack_unpack_object() {
        let orig  = r#"{"a":1,"b":true}"#;
        let bytes = pack(orig, "root").unwrap();
        let json  = unpack_json(&bytes, default_limits()).unwrap();
        let v: Value = serde_json::from_str(&json).unwrap();
        assert_eq!(v["a"], 1);
        // booleans pack as byte tags and come back as numbers
        assert_eq!(v["b"], 1);
    }

    #[test]
    fn pack_writes_the_root_name() {
        let bytes = pack("{}", "root").unwrap();
        assert_eq!(&bytes[..7], &[0x0a, 0x00, 0x04, b'r', b'o', b'o', b't']);
    }

    #[test]
    fn pack_rejects_null() {
        let r = pack("null", "");
        assert!(matches!(r, Err(CliError::FromJson(_))));
    }

    #[test]
    fn pack_rejects_mixed_arrays() {
        let r = pack(r#"[1,"two"]"#, "");
        assert!(matches!(r, Err(CliError::FromJson(_))));
    }

    #[test]
    fn pack_rejects_invalid_json() {
        let r = pack("{not json", "");
        assert!(matches!(r, Err(CliError::Json(_))));
    }

    // ── text output ────────────────────────────────────────────────────────

    #[test]
    fn unpack_text_renders_suffixed_scalars() {
        let mut root = Compound::new();
        root.put("health", Tag::Short(20));
        let bytes = TagEncoder::default()
            .encode("root", &Tag::Compound(root))
            .unwrap();
        let text = unpack_text(&bytes, default_limits()).unwrap();
        assert_eq!(text, "{health:20s}");
    }

    #[test]
    fn unpack_dispatch_unknown_format() {
        let bytes = pack("42", "").unwrap();
        let r = unpack(&bytes, "yaml", default_limits());
        assert!(matches!(r, Err(CliError::UnknownFormat(_))));
    }

    // ── limits ─────────────────────────────────────────────────────────────

    #[test]
    fn unpack_enforces_element_budget() {
        let bytes = pack("[1,2,3,4,5,6,7,8,9,10]", "").unwrap();
        // root + list claim of 10
        assert!(unpack_json(&bytes, Limits::new(11, 16)).is_ok());
        let err = unpack_json(&bytes, Limits::new(5, 16)).unwrap_err();
        assert!(matches!(err, CliError::Tag(_)));
    }

    #[test]
    fn unpack_enforces_depth() {
        let bytes = pack(r#"{"a":{"b":{"c":1}}}"#, "").unwrap();
        assert!(unpack_json(&bytes, Limits::new(1 << 20, 3)).is_ok());
        let err = unpack_json(&bytes, Limits::new(1 << 20, 2)).unwrap_err();
        assert!(matches!(err, CliError::Tag(_)));
    }

    #[test]
    fn default_limits_accept_ordinary_documents() {
        let bytes = pack(r#"{"name":"Steve","scores":[1,2,3]}"#, "player").unwrap();
        assert!(unpack_json(&bytes, default_limits()).is_ok());
    }
}
