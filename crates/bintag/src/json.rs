//! Conversions between tag trees and JSON values.
//!
//! `to_json` is total: every tag has a JSON rendering, with compounds
//! becoming objects in iteration order and the typed arrays becoming plain
//! number arrays. Non-finite floats become `null`, which JSON cannot
//! express otherwise. The mapping is not reversible in general — JSON has
//! no typed arrays and no integer widths, so `from_json` picks the
//! narrowest reasonable tag and rejects values with no tag counterpart.

use serde_json::{Map, Value};
use thiserror::Error;

use crate::tag::{Compound, List, Tag};

/// A JSON value that cannot be represented as a tag.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum FromJsonError {
    /// JSON `null` has no tag counterpart.
    #[error("null has no tag representation")]
    Null,
    /// Tag lists are homogeneous; the JSON array mixed kinds.
    #[error("array elements must share one tag kind")]
    MixedArray,
    /// The integer does not fit a 64-bit signed tag.
    #[error("integer {0} does not fit a 64-bit signed tag")]
    IntegerRange(u64),
}

/// Renders a tag tree as a JSON value.
pub fn to_json(tag: &Tag) -> Value {
    match tag {
        Tag::Byte(v) => Value::from(*v),
        Tag::Short(v) => Value::from(*v),
        Tag::Int(v) => Value::from(*v),
        Tag::Long(v) => Value::from(*v),
        Tag::Float(v) => Value::from(*v),
        Tag::Double(v) => Value::from(*v),
        Tag::ByteArray(v) => Value::Array(v.iter().map(|b| Value::from(*b)).collect()),
        Tag::String(s) => Value::String(s.clone()),
        Tag::List(list) => Value::Array(list.iter().map(to_json).collect()),
        Tag::Compound(compound) => {
            let mut map = Map::new();
            for (name, child) in compound {
                map.insert(name.clone(), to_json(child));
            }
            Value::Object(map)
        }
        Tag::IntArray(v) => Value::Array(v.iter().map(|n| Value::from(*n)).collect()),
        Tag::LongArray(v) => Value::Array(v.iter().map(|n| Value::from(*n)).collect()),
    }
}

/// Builds a tag tree from a JSON value.
///
/// Booleans become bytes, integers become the narrower of `Int` and
/// `Long`, all other numbers become `Double`, arrays become lists and
/// must be kind-homogeneous after conversion.
pub fn from_json(value: &Value) -> Result<Tag, FromJsonError> {
    match value {
        Value::Null => Err(FromJsonError::Null),
        Value::Bool(b) => Ok(Tag::Byte(if *b { 1 } else { 0 })),
        Value::Number(n) => {
            if let Some(i) = n.as_i64() {
                if i >= i32::MIN as i64 && i <= i32::MAX as i64 {
                    Ok(Tag::Int(i as i32))
                } else {
                    Ok(Tag::Long(i))
                }
            } else if let Some(u) = n.as_u64() {
                Err(FromJsonError::IntegerRange(u))
            } else {
                Ok(Tag::Double(n.as_f64().unwrap_or(0.0)))
            }
        }
        Value::String(s) => Ok(Tag::String(s.clone())),
        Value::Array(items) => {
            let mut list = List::new();
            for item in items {
                let tag = from_json(item)?;
                list.push(tag).map_err(|_| FromJsonError::MixedArray)?;
            }
            Ok(Tag::List(list))
        }
        Value::Object(map) => {
            let mut compound = Compound::new();
            for (name, child) in map {
                compound.put(name.clone(), from_json(child)?);
            }
            Ok(Tag::Compound(compound))
        }
    }
}
