//! Tag tree encoder.
//!
//! Serializes a named [`Tag`] into the big-endian wire form. The encoder
//! owns a growable [`Writer`] which is reused across calls.

use std::io;

use bintag_buffers::Writer;

use crate::error::TagError;
use crate::kind::Kind;
use crate::tag::Tag;

/// Encoder for named tag trees.
pub struct TagEncoder {
    pub writer: Writer,
}

impl Default for TagEncoder {
    fn default() -> Self {
        Self::new(Writer::new())
    }
}

impl TagEncoder {
    pub fn new(writer: Writer) -> Self {
        Self { writer }
    }

    /// Encodes `tag` as a document root named `name` and returns the wire
    /// bytes. The internal writer is reset first, so each call produces a
    /// self-contained document.
    pub fn encode(&mut self, name: &str, tag: &Tag) -> Result<Vec<u8>, TagError> {
        self.writer.reset();
        self.write_named(name, tag)?;
        Ok(self.writer.flush())
    }

    /// Encodes a named document and writes it to `sink`, returning the
    /// number of bytes written.
    pub fn encode_to<W: io::Write>(
        &mut self,
        name: &str,
        tag: &Tag,
        sink: &mut W,
    ) -> Result<usize, TagError> {
        let bytes = self.encode(name, tag)?;
        sink.write_all(&bytes)
            .map_err(|err| TagError::Io(err.to_string()))?;
        Ok(bytes.len())
    }

    // A full tag: kind id, 2-byte name length, name bytes, payload.
    fn write_named(&mut self, name: &str, tag: &Tag) -> Result<(), TagError> {
        if name.len() > u16::MAX as usize {
            return Err(TagError::NameTooLong(name.len()));
        }
        self.writer.u8u16(tag.kind().id(), name.len() as u16);
        self.writer.utf8(name);
        self.write_payload(tag)
    }

    // Payload only, no kind id and no name. List elements are written
    // through here: anonymous, with the kind hoisted into the list header.
    fn write_payload(&mut self, tag: &Tag) -> Result<(), TagError> {
        match tag {
            Tag::Byte(v) => self.writer.i8(*v),
            Tag::Short(v) => self.writer.i16(*v),
            Tag::Int(v) => self.writer.i32(*v),
            Tag::Long(v) => self.writer.i64(*v),
            Tag::Float(v) => self.writer.f32(*v),
            Tag::Double(v) => self.writer.f64(*v),
            Tag::ByteArray(v) => {
                if v.len() > i32::MAX as usize {
                    return Err(TagError::SequenceTooLong(v.len()));
                }
                self.writer.i32(v.len() as i32);
                for b in v {
                    self.writer.i8(*b);
                }
            }
            Tag::String(s) => {
                if s.len() > u16::MAX as usize {
                    return Err(TagError::StringTooLong(s.len()));
                }
                self.writer.u16(s.len() as u16);
                self.writer.utf8(s);
            }
            Tag::List(list) => {
                if list.len() > i32::MAX as usize {
                    return Err(TagError::SequenceTooLong(list.len()));
                }
                self.writer.u8(list.elem_kind().id());
                self.writer.i32(list.len() as i32);
                for item in list {
                    self.write_payload(item)?;
                }
            }
            Tag::Compound(compound) => {
                for (name, child) in compound {
                    self.write_named(name, child)?;
                }
                self.writer.u8(Kind::End.id());
            }
            Tag::IntArray(v) => {
                if v.len() > i32::MAX as usize {
                    return Err(TagError::SequenceTooLong(v.len()));
                }
                self.writer.i32(v.len() as i32);
                for n in v {
                    self.writer.i32(*n);
                }
            }
            Tag::LongArray(v) => {
                if v.len() > i32::MAX as usize {
                    return Err(TagError::SequenceTooLong(v.len()));
                }
                self.writer.i32(v.len() as i32);
                for n in v {
                    self.writer.i64(*n);
                }
            }
        }
        Ok(())
    }
}
