//! Tag type registry — the one-byte wire id for every tag variant.

use std::fmt;

use crate::error::TagError;

/// Wire type id of a tag.
///
/// The ids are a closed, stable enumeration and part of the wire contract;
/// they are never reassigned. `End` (0) is the sentinel that terminates a
/// compound body and doubles as the declared element type of an empty list
/// whose element type was never observed.
#[repr(u8)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Kind {
    End = 0,
    Byte = 1,
    Short = 2,
    Int = 3,
    Long = 4,
    Float = 5,
    Double = 6,
    ByteArray = 7,
    String = 8,
    List = 9,
    Compound = 10,
    IntArray = 11,
    LongArray = 12,
}

impl Kind {
    /// The wire id of this kind.
    #[inline]
    pub const fn id(self) -> u8 {
        self as u8
    }

    /// Looks up the kind for a wire id. Unknown ids fail with
    /// [`TagError::UnknownTagType`]; this is the only validation the
    /// registry performs.
    pub fn from_id(id: u8) -> Result<Kind, TagError> {
        match id {
            0 => Ok(Kind::End),
            1 => Ok(Kind::Byte),
            2 => Ok(Kind::Short),
            3 => Ok(Kind::Int),
            4 => Ok(Kind::Long),
            5 => Ok(Kind::Float),
            6 => Ok(Kind::Double),
            7 => Ok(Kind::ByteArray),
            8 => Ok(Kind::String),
            9 => Ok(Kind::List),
            10 => Ok(Kind::Compound),
            11 => Ok(Kind::IntArray),
            12 => Ok(Kind::LongArray),
            other => Err(TagError::UnknownTagType(other)),
        }
    }

    /// Human-readable name of the kind.
    pub const fn name(self) -> &'static str {
        match self {
            Kind::End => "End",
            Kind::Byte => "Byte",
            Kind::Short => "Short",
            Kind::Int => "Int",
            Kind::Long => "Long",
            Kind::Float => "Float",
            Kind::Double => "Double",
            Kind::ByteArray => "ByteArray",
            Kind::String => "String",
            Kind::List => "List",
            Kind::Compound => "Compound",
            Kind::IntArray => "IntArray",
            Kind::LongArray => "LongArray",
        }
    }

    /// True for the six fixed-width numeric kinds.
    pub const fn is_numeric(self) -> bool {
        matches!(
            self,
            Kind::Byte | Kind::Short | Kind::Int | Kind::Long | Kind::Float | Kind::Double
        )
    }
}

impl fmt::Display for Kind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
