//! The tag tree document model.
//!
//! A [`Tag`] is one node of the tree: a fixed-width numeric leaf, a string,
//! a fixed-width array, a homogeneous [`List`], or a name-keyed [`Compound`].
//! A tag's variant is fixed at construction; mutation replaces the payload
//! or container contents, never the variant. Names are not stored on the
//! tag itself — entries of a compound are named by their map key, and the
//! document root's name travels alongside the tag at the codec boundary.

use indexmap::IndexMap;

use crate::error::TagError;
use crate::kind::Kind;

/// A tag value — one node of a named binary tag tree.
///
/// Containers own their children exclusively: the tree has no sharing and
/// no back-references, so the derived `Clone` is a fully independent deep
/// copy. Equality is structural — ordered for lists and arrays, independent
/// of iteration order for compounds. Float equality follows IEEE 754.
#[derive(Debug, Clone, PartialEq)]
pub enum Tag {
    /// 8-bit signed integer (id 1)
    Byte(i8),
    /// 16-bit signed integer (id 2)
    Short(i16),
    /// 32-bit signed integer (id 3)
    Int(i32),
    /// 64-bit signed integer (id 4)
    Long(i64),
    /// 32-bit float (id 5)
    Float(f32),
    /// 64-bit float (id 6)
    Double(f64),
    /// Array of 8-bit signed integers (id 7)
    ByteArray(Vec<i8>),
    /// UTF-8 string (id 8)
    String(String),
    /// Homogeneous ordered list of anonymous tags (id 9)
    List(List),
    /// Name-keyed ordered mapping of tags (id 10)
    Compound(Compound),
    /// Array of 32-bit signed integers (id 11)
    IntArray(Vec<i32>),
    /// Array of 64-bit signed integers (id 12)
    LongArray(Vec<i64>),
}

impl Tag {
    /// The wire kind of this tag.
    pub fn kind(&self) -> Kind {
        match self {
            Tag::Byte(_) => Kind::Byte,
            Tag::Short(_) => Kind::Short,
            Tag::Int(_) => Kind::Int,
            Tag::Long(_) => Kind::Long,
            Tag::Float(_) => Kind::Float,
            Tag::Double(_) => Kind::Double,
            Tag::ByteArray(_) => Kind::ByteArray,
            Tag::String(_) => Kind::String,
            Tag::List(_) => Kind::List,
            Tag::Compound(_) => Kind::Compound,
            Tag::IntArray(_) => Kind::IntArray,
            Tag::LongArray(_) => Kind::LongArray,
        }
    }

    // ── Typed accessors ─────────────────────────────────────────────────

    pub fn as_byte(&self) -> Option<i8> {
        match self {
            Tag::Byte(v) => Some(*v),
            _ => None,
        }
    }

    pub fn as_short(&self) -> Option<i16> {
        match self {
            Tag::Short(v) => Some(*v),
            _ => None,
        }
    }

    pub fn as_int(&self) -> Option<i32> {
        match self {
            Tag::Int(v) => Some(*v),
            _ => None,
        }
    }

    pub fn as_long(&self) -> Option<i64> {
        match self {
            Tag::Long(v) => Some(*v),
            _ => None,
        }
    }

    pub fn as_float(&self) -> Option<f32> {
        match self {
            Tag::Float(v) => Some(*v),
            _ => None,
        }
    }

    pub fn as_double(&self) -> Option<f64> {
        match self {
            Tag::Double(v) => Some(*v),
            _ => None,
        }
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            Tag::String(s) => Some(s),
            _ => None,
        }
    }

    pub fn as_byte_array(&self) -> Option<&[i8]> {
        match self {
            Tag::ByteArray(v) => Some(v),
            _ => None,
        }
    }

    pub fn as_int_array(&self) -> Option<&[i32]> {
        match self {
            Tag::IntArray(v) => Some(v),
            _ => None,
        }
    }

    pub fn as_long_array(&self) -> Option<&[i64]> {
        match self {
            Tag::LongArray(v) => Some(v),
            _ => None,
        }
    }

    pub fn as_list(&self) -> Option<&List> {
        match self {
            Tag::List(l) => Some(l),
            _ => None,
        }
    }

    pub fn as_compound(&self) -> Option<&Compound> {
        match self {
            Tag::Compound(c) => Some(c),
            _ => None,
        }
    }

    // ── In-place payload mutators ───────────────────────────────────────
    //
    // A `&mut` to the payload can replace the value but never the variant.

    pub fn as_byte_mut(&mut self) -> Option<&mut i8> {
        match self {
            Tag::Byte(v) => Some(v),
            _ => None,
        }
    }

    pub fn as_short_mut(&mut self) -> Option<&mut i16> {
        match self {
            Tag::Short(v) => Some(v),
            _ => None,
        }
    }

    pub fn as_int_mut(&mut self) -> Option<&mut i32> {
        match self {
            Tag::Int(v) => Some(v),
            _ => None,
        }
    }

    pub fn as_long_mut(&mut self) -> Option<&mut i64> {
        match self {
            Tag::Long(v) => Some(v),
            _ => None,
        }
    }

    pub fn as_float_mut(&mut self) -> Option<&mut f32> {
        match self {
            Tag::Float(v) => Some(v),
            _ => None,
        }
    }

    pub fn as_double_mut(&mut self) -> Option<&mut f64> {
        match self {
            Tag::Double(v) => Some(v),
            _ => None,
        }
    }

    pub fn as_string_mut(&mut self) -> Option<&mut String> {
        match self {
            Tag::String(s) => Some(s),
            _ => None,
        }
    }

    pub fn as_byte_array_mut(&mut self) -> Option<&mut Vec<i8>> {
        match self {
            Tag::ByteArray(v) => Some(v),
            _ => None,
        }
    }

    pub fn as_int_array_mut(&mut self) -> Option<&mut Vec<i32>> {
        match self {
            Tag::IntArray(v) => Some(v),
            _ => None,
        }
    }

    pub fn as_long_array_mut(&mut self) -> Option<&mut Vec<i64>> {
        match self {
            Tag::LongArray(v) => Some(v),
            _ => None,
        }
    }

    pub fn as_list_mut(&mut self) -> Option<&mut List> {
        match self {
            Tag::List(l) => Some(l),
            _ => None,
        }
    }

    pub fn as_compound_mut(&mut self) -> Option<&mut Compound> {
        match self {
            Tag::Compound(c) => Some(c),
            _ => None,
        }
    }

    // ── Generic numeric accessors ───────────────────────────────────────
    //
    // Read any numeric leaf as any fixed width. Conversions are `as` casts:
    // lossless where the value fits, truncating or saturating where not.
    // Non-numeric tags fail with `TypeMismatch`.

    pub fn to_i8(&self) -> Result<i8, TagError> {
        match self {
            Tag::Byte(v) => Ok(*v),
            Tag::Short(v) => Ok(*v as i8),
            Tag::Int(v) => Ok(*v as i8),
            Tag::Long(v) => Ok(*v as i8),
            Tag::Float(v) => Ok(*v as i8),
            Tag::Double(v) => Ok(*v as i8),
            _ => Err(TagError::TypeMismatch {
                expected: Kind::Byte,
                actual: self.kind(),
            }),
        }
    }

    pub fn to_i16(&self) -> Result<i16, TagError> {
        match self {
            Tag::Byte(v) => Ok(*v as i16),
            Tag::Short(v) => Ok(*v),
            Tag::Int(v) => Ok(*v as i16),
            Tag::Long(v) => Ok(*v as i16),
            Tag::Float(v) => Ok(*v as i16),
            Tag::Double(v) => Ok(*v as i16),
            _ => Err(TagError::TypeMismatch {
                expected: Kind::Short,
                actual: self.kind(),
            }),
        }
    }

    pub fn to_i32(&self) -> Result<i32, TagError> {
        match self {
            Tag::Byte(v) => Ok(*v as i32),
            Tag::Short(v) => Ok(*v as i32),
            Tag::Int(v) => Ok(*v),
            Tag::Long(v) => Ok(*v as i32),
            Tag::Float(v) => Ok(*v as i32),
            Tag::Double(v) => Ok(*v as i32),
            _ => Err(TagError::TypeMismatch {
                expected: Kind::Int,
                actual: self.kind(),
            }),
        }
    }

    pub fn to_i64(&self) -> Result<i64, TagError> {
        match self {
            Tag::Byte(v) => Ok(*v as i64),
            Tag::Short(v) => Ok(*v as i64),
            Tag::Int(v) => Ok(*v as i64),
            Tag::Long(v) => Ok(*v),
            Tag::Float(v) => Ok(*v as i64),
            Tag::Double(v) => Ok(*v as i64),
            _ => Err(TagError::TypeMismatch {
                expected: Kind::Long,
                actual: self.kind(),
            }),
        }
    }

    pub fn to_f32(&self) -> Result<f32, TagError> {
        match self {
            Tag::Byte(v) => Ok(*v as f32),
            Tag::Short(v) => Ok(*v as f32),
            Tag::Int(v) => Ok(*v as f32),
            Tag::Long(v) => Ok(*v as f32),
            Tag::Float(v) => Ok(*v),
            Tag::Double(v) => Ok(*v as f32),
            _ => Err(TagError::TypeMismatch {
                expected: Kind::Float,
                actual: self.kind(),
            }),
        }
    }

    pub fn to_f64(&self) -> Result<f64, TagError> {
        match self {
            Tag::Byte(v) => Ok(*v as f64),
            Tag::Short(v) => Ok(*v as f64),
            Tag::Int(v) => Ok(*v as f64),
            Tag::Long(v) => Ok(*v as f64),
            Tag::Float(v) => Ok(*v as f64),
            Tag::Double(v) => Ok(*v),
            _ => Err(TagError::TypeMismatch {
                expected: Kind::Double,
                actual: self.kind(),
            }),
        }
    }
}

/// Homogeneous ordered list of anonymous tags.
///
/// The element kind is recorded even when the list is empty. A list created
/// without a declared kind starts as [`Kind::End`] and adopts the kind of
/// the first pushed tag.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct List {
    // None while no element kind has been declared or observed. Kept
    // private so pushes cannot bypass the homogeneity check.
    elem: Option<Kind>,
    items: Vec<Tag>,
}

impl List {
    /// An empty list whose element kind has not been observed yet.
    pub fn new() -> Self {
        Self {
            elem: None,
            items: Vec::new(),
        }
    }

    /// An empty list with a declared element kind.
    pub fn with_kind(kind: Kind) -> Self {
        let elem = if kind == Kind::End { None } else { Some(kind) };
        Self {
            elem,
            items: Vec::new(),
        }
    }

    /// The declared element kind. [`Kind::End`] while no element kind has
    /// been declared or observed.
    pub fn elem_kind(&self) -> Kind {
        self.elem.unwrap_or(Kind::End)
    }

    /// Appends a tag. Fails with [`TagError::TypeMismatch`] when the tag's
    /// kind does not match the declared element kind, leaving the list
    /// unchanged. An undeclared list adopts the first pushed tag's kind.
    pub fn push(&mut self, tag: Tag) -> Result<(), TagError> {
        match self.elem {
            None => {
                self.elem = Some(tag.kind());
                self.items.push(tag);
                Ok(())
            }
            Some(kind) if tag.kind() == kind => {
                self.items.push(tag);
                Ok(())
            }
            Some(kind) => Err(TagError::TypeMismatch {
                expected: kind,
                actual: tag.kind(),
            }),
        }
    }

    pub fn get(&self, index: usize) -> Option<&Tag> {
        self.items.get(index)
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Tag> {
        self.items.iter()
    }
}

impl<'a> IntoIterator for &'a List {
    type Item = &'a Tag;
    type IntoIter = std::slice::Iter<'a, Tag>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.iter()
    }
}

/// Name-keyed ordered mapping of tags.
///
/// Insertion order is preserved and observable through iteration, but does
/// not participate in equality: two compounds with the same entries in
/// different orders are equal. Overwriting an existing name keeps the
/// entry's original position, so repeated updates never reorder a compound.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Compound {
    entries: IndexMap<String, Tag>,
}

impl Compound {
    pub fn new() -> Self {
        Self {
            entries: IndexMap::new(),
        }
    }

    pub fn get(&self, name: &str) -> Option<&Tag> {
        self.entries.get(name)
    }

    pub fn get_mut(&mut self, name: &str) -> Option<&mut Tag> {
        self.entries.get_mut(name)
    }

    /// Inserts an entry. An existing entry with the same name is replaced
    /// in place, keeping its original position; the replaced tag is
    /// returned.
    pub fn put(&mut self, name: impl Into<String>, tag: Tag) -> Option<Tag> {
        self.entries.insert(name.into(), tag)
    }

    /// Removes an entry by name, preserving the order of the remaining
    /// entries. Returns the removed tag if the name was present.
    pub fn remove(&mut self, name: &str) -> Option<Tag> {
        self.entries.shift_remove(name)
    }

    pub fn contains_key(&self, name: &str) -> bool {
        self.entries.contains_key(name)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> indexmap::map::Iter<'_, String, Tag> {
        self.entries.iter()
    }

    pub fn keys(&self) -> indexmap::map::Keys<'_, String, Tag> {
        self.entries.keys()
    }
}

impl<'a> IntoIterator for &'a Compound {
    type Item = (&'a String, &'a Tag);
    type IntoIter = indexmap::map::Iter<'a, String, Tag>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}
