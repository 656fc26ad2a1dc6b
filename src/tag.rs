use std::fmt::{self, Display};

/// The kind of a value.
///
/// This is a closed set: every [`OwnValue`](crate::OwnValue) carries exactly one of
/// these, and typed nulls (`null.struct`, `null.list`, ...) carry the tag of the
/// kind they are a null of.
#[repr(u8)]
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Debug)]
pub enum Tag {
    Null = 0,
    Bool = 1,
    Int = 2,
    Float = 3,
    Decimal = 4,
    Timestamp = 5,
    Symbol = 6,
    String = 7,
    Clob = 8,
    Blob = 9,
    List = 10,
    SExp = 11,
    Struct = 12,
}

impl Tag {
    /// Returns the tag for a raw byte value, or `None` if the byte is not a tag.
    ///
    /// # Example
    ///
    /// ```
    /// use ion_ci::Tag;
    ///
    /// assert_eq!(Tag::from_u8(12), Some(Tag::Struct));
    /// assert_eq!(Tag::from_u8(13), None);
    /// ```
    pub const fn from_u8(value: u8) -> Option<Self> {
        Some(match value {
            0 => Self::Null,
            1 => Self::Bool,
            2 => Self::Int,
            3 => Self::Float,
            4 => Self::Decimal,
            5 => Self::Timestamp,
            6 => Self::Symbol,
            7 => Self::String,
            8 => Self::Clob,
            9 => Self::Blob,
            10 => Self::List,
            11 => Self::SExp,
            12 => Self::Struct,
            _ => return None,
        })
    }

    /// Returns `true` for the kinds that hold other values.
    ///
    /// # Example
    ///
    /// ```
    /// use ion_ci::Tag;
    ///
    /// assert!(Tag::Struct.is_container());
    /// assert!(Tag::SExp.is_container());
    /// assert!(!Tag::Blob.is_container());
    /// ```
    pub const fn is_container(self) -> bool {
        matches!(self, Self::List | Self::SExp | Self::Struct)
    }

    /// Returns `true` for the ordered, position-indexed containers.
    pub const fn is_sequence(self) -> bool {
        matches!(self, Self::List | Self::SExp)
    }

    pub const fn is_scalar(self) -> bool {
        !self.is_container()
    }

    /// Returns `true` for the text-valued scalars.
    pub const fn is_text(self) -> bool {
        matches!(self, Self::String | Self::Symbol)
    }

    /// Returns `true` for the byte-valued scalars.
    pub const fn is_lob(self) -> bool {
        matches!(self, Self::Clob | Self::Blob)
    }

    /// The lower-case name used by the text notation, e.g. `struct` or `sexp`.
    pub const fn name(self) -> &'static str {
        match self {
            Self::Null => "null",
            Self::Bool => "bool",
            Self::Int => "int",
            Self::Float => "float",
            Self::Decimal => "decimal",
            Self::Timestamp => "timestamp",
            Self::Symbol => "symbol",
            Self::String => "string",
            Self::Clob => "clob",
            Self::Blob => "blob",
            Self::List => "list",
            Self::SExp => "sexp",
            Self::Struct => "struct",
        }
    }
}

impl Display for Tag {
    fn fmt(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
        formatter.write_str(self.name())
    }
}
