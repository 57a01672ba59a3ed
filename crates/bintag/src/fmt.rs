//! Text rendering of tag trees.
//!
//! A compact single-line form: numeric leaves carry a width suffix
//! (`20s`, `3l`, `1.5f`), strings are double-quoted with `\` escapes,
//! arrays open with a width marker (`[B;`, `[I;`, `[L;`), lists and
//! compounds bracket their children. Compound keys print bare when they
//! are plain identifiers and quoted otherwise. Compound entries render
//! in iteration order, so the output is deterministic for a given tree.

use std::fmt::{self, Write as _};

use crate::tag::{Compound, List, Tag};

impl fmt::Display for Tag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Tag::Byte(v) => write!(f, "{v}b"),
            Tag::Short(v) => write!(f, "{v}s"),
            Tag::Int(v) => write!(f, "{v}"),
            Tag::Long(v) => write!(f, "{v}l"),
            Tag::Float(v) => write!(f, "{v}f"),
            Tag::Double(v) => write!(f, "{v}d"),
            Tag::ByteArray(v) => {
                f.write_str("[B;")?;
                for (i, b) in v.iter().enumerate() {
                    if i > 0 {
                        f.write_char(',')?;
                    }
                    write!(f, "{b}b")?;
                }
                f.write_char(']')
            }
            Tag::String(s) => write_quoted(f, s),
            Tag::List(list) => list.fmt(f),
            Tag::Compound(compound) => compound.fmt(f),
            Tag::IntArray(v) => {
                f.write_str("[I;")?;
                for (i, n) in v.iter().enumerate() {
                    if i > 0 {
                        f.write_char(',')?;
                    }
                    write!(f, "{n}")?;
                }
                f.write_char(']')
            }
            Tag::LongArray(v) => {
                f.write_str("[L;")?;
                for (i, n) in v.iter().enumerate() {
                    if i > 0 {
                        f.write_char(',')?;
                    }
                    write!(f, "{n}l")?;
                }
                f.write_char(']')
            }
        }
    }
}

impl fmt::Display for List {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_char('[')?;
        for (i, item) in self.iter().enumerate() {
            if i > 0 {
                f.write_char(',')?;
            }
            item.fmt(f)?;
        }
        f.write_char(']')
    }
}

impl fmt::Display for Compound {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_char('{')?;
        for (i, (name, tag)) in self.iter().enumerate() {
            if i > 0 {
                f.write_char(',')?;
            }
            if is_bare_key(name) {
                f.write_str(name)?;
            } else {
                write_quoted(f, name)?;
            }
            f.write_char(':')?;
            tag.fmt(f)?;
        }
        f.write_char('}')
    }
}

// Keys print unquoted only when every byte is a plain identifier
// character; anything else, including the empty key, is quoted.
fn is_bare_key(s: &str) -> bool {
    !s.is_empty()
        && s.bytes()
            .all(|b| b.is_ascii_alphanumeric() || matches!(b, b'_' | b'.' | b'+' | b'-'))
}

fn write_quoted(f: &mut fmt::Formatter<'_>, s: &str) -> fmt::Result {
    f.write_char('"')?;
    for c in s.chars() {
        if c == '"' || c == '\\' {
            f.write_char('\\')?;
        }
        f.write_char(c)?;
    }
    f.write_char('"')
}
