//! Tag tree decoder.
//!
//! Parses the big-endian wire form into a named [`Tag`] tree. Input is
//! untrusted: every read is bounds-checked by the [`Reader`], and declared
//! sizes are charged against a [`Limiter`] before any element storage is
//! built, so a hostile length claim fails on the budget rather than on an
//! allocation.

use std::io;

use bintag_buffers::Reader;

use crate::error::TagError;
use crate::kind::Kind;
use crate::limit::{Limiter, Limits};
use crate::tag::{Compound, List, Tag};

/// Decoder for named tag trees.
#[derive(Default)]
pub struct TagDecoder;

impl TagDecoder {
    pub fn new() -> Self {
        Self
    }

    /// Decodes one document from the front of `data`, returning the root
    /// name and tag. Bytes after the document are left unread.
    pub fn decode(&self, data: &[u8], limits: Limits) -> Result<(String, Tag), TagError> {
        let mut reader = Reader::new(data);
        let mut limiter = Limiter::new(limits);
        // The root is a tag like any other and counts toward the budget.
        limiter.count_elements(1)?;
        self.read_named(&mut reader, &mut limiter)
    }

    /// Reads `source` to its end and decodes one document from the bytes.
    pub fn decode_from<R: io::Read>(
        &self,
        source: &mut R,
        limits: Limits,
    ) -> Result<(String, Tag), TagError> {
        let mut data = Vec::new();
        source
            .read_to_end(&mut data)
            .map_err(|err| TagError::Io(err.to_string()))?;
        self.decode(&data, limits)
    }

    // A full tag: kind id, 2-byte name length, name bytes, payload. The
    // End id carries no name or payload and cannot head a tag.
    fn read_named(
        &self,
        reader: &mut Reader,
        limiter: &mut Limiter,
    ) -> Result<(String, Tag), TagError> {
        let kind = Kind::from_id(reader.u8()?)?;
        if kind == Kind::End {
            return Err(TagError::UnknownTagType(0));
        }
        let name_len = reader.u16()? as usize;
        let name = reader.utf8(name_len)?.to_owned();
        let tag = self.read_payload(reader, kind, limiter)?;
        Ok((name, tag))
    }

    fn read_payload(
        &self,
        reader: &mut Reader,
        kind: Kind,
        limiter: &mut Limiter,
    ) -> Result<Tag, TagError> {
        match kind {
            Kind::End => Err(TagError::UnknownTagType(0)),
            Kind::Byte => Ok(Tag::Byte(reader.i8()?)),
            Kind::Short => Ok(Tag::Short(reader.i16()?)),
            Kind::Int => Ok(Tag::Int(reader.i32()?)),
            Kind::Long => Ok(Tag::Long(reader.i64()?)),
            Kind::Float => Ok(Tag::Float(reader.f32()?)),
            Kind::Double => Ok(Tag::Double(reader.f64()?)),
            Kind::ByteArray => {
                let len = declared_len(reader.i32()?);
                limiter.count_elements(len as u64)?;
                let bytes = reader.buf(len)?;
                Ok(Tag::ByteArray(bytes.iter().map(|b| *b as i8).collect()))
            }
            Kind::String => {
                let len = reader.u16()? as usize;
                Ok(Tag::String(reader.utf8(len)?.to_owned()))
            }
            Kind::List => {
                let elem = Kind::from_id(reader.u8()?)?;
                let count = declared_len(reader.i32()?);
                if elem == Kind::End && count > 0 {
                    return Err(TagError::UnknownTagType(0));
                }
                // The claimed count is charged before any element is read.
                limiter.count_elements(count as u64)?;
                limiter.enter_container()?;
                let mut list = List::with_kind(elem);
                for _ in 0..count {
                    list.push(self.read_payload(reader, elem, limiter)?)?;
                }
                limiter.exit_container();
                Ok(Tag::List(list))
            }
            Kind::Compound => {
                limiter.enter_container()?;
                let mut compound = Compound::new();
                loop {
                    let id = reader.u8()?;
                    if id == Kind::End.id() {
                        break;
                    }
                    let kind = Kind::from_id(id)?;
                    // Each entry is charged as it is discovered, before its
                    // name and payload are read.
                    limiter.count_elements(1)?;
                    let name_len = reader.u16()? as usize;
                    let name = reader.utf8(name_len)?.to_owned();
                    let tag = self.read_payload(reader, kind, limiter)?;
                    compound.put(name, tag);
                }
                limiter.exit_container();
                Ok(Tag::Compound(compound))
            }
            Kind::IntArray => {
                let len = declared_len(reader.i32()?);
                limiter.count_elements(len as u64)?;
                // Capacity from the claim, clamped by what the buffer could
                // actually hold.
                let mut items = Vec::with_capacity(len.min(reader.size() / 4));
                for _ in 0..len {
                    items.push(reader.i32()?);
                }
                Ok(Tag::IntArray(items))
            }
            Kind::LongArray => {
                let len = declared_len(reader.i32()?);
                limiter.count_elements(len as u64)?;
                let mut items = Vec::with_capacity(len.min(reader.size() / 8));
                for _ in 0..len {
                    items.push(reader.i64()?);
                }
                Ok(Tag::LongArray(items))
            }
        }
    }
}

// A negative declared length means an empty sequence.
fn declared_len(raw: i32) -> usize {
    if raw < 0 {
        0
    } else {
        raw as usize
    }
}
