//! Field types and fixed byte-offset layouts.
//!
//! A layout is an ordered list of fixed-width integer fields packed back to
//! back with no padding. Each field's offset is the sum of the widths of the
//! fields before it, so a layout is fully described by its field types.

use alloc::vec::Vec;
use core::fmt;
use core::str::FromStr;

use crate::error::{Error, Result};

/// The storage type of one field in a fixed layout.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FieldType {
    /// 16-bit signed integer.
    I16,
    /// 32-bit signed integer.
    I32,
    /// 64-bit signed integer.
    I64,
    /// 16-bit unsigned integer.
    U16,
    /// 32-bit unsigned integer.
    U32,
    /// 64-bit unsigned integer.
    U64,
}

impl FieldType {
    /// Number of bytes one value of this type occupies.
    pub const fn byte_width(self) -> usize {
        match self {
            FieldType::I16 | FieldType::U16 => 2,
            FieldType::I32 | FieldType::U32 => 4,
            FieldType::I64 | FieldType::U64 => 8,
        }
    }

    /// Returns `true` for the signed integer types.
    pub const fn is_signed(self) -> bool {
        matches!(self, FieldType::I16 | FieldType::I32 | FieldType::I64)
    }

    /// Lowercase Rust-style type name (`"i16"`, `"u64"`, ...).
    pub const fn name(self) -> &'static str {
        match self {
            FieldType::I16 => "i16",
            FieldType::I32 => "i32",
            FieldType::I64 => "i64",
            FieldType::U16 => "u16",
            FieldType::U32 => "u32",
            FieldType::U64 => "u64",
        }
    }
}

impl fmt::Display for FieldType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.name())
    }
}

impl FromStr for FieldType {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim() {
            "i16" => Ok(FieldType::I16),
            "i32" => Ok(FieldType::I32),
            "i64" => Ok(FieldType::I64),
            "u16" => Ok(FieldType::U16),
            "u32" => Ok(FieldType::U32),
            "u64" => Ok(FieldType::U64),
            _ => Err(Error::InvalidFieldType),
        }
    }
}

/// Compute the byte offset of each field in a packed layout at compile time.
pub const fn record_offsets<const N: usize>(fields: &[FieldType; N]) -> [usize; N] {
    let mut offsets = [0usize; N];
    let mut offset = 0usize;
    let mut i = 0;
    while i < N {
        offsets[i] = offset;
        offset += fields[i].byte_width();
        i += 1;
    }
    offsets
}

/// Sum of the byte widths of all fields.
pub const fn total_width(fields: &[FieldType]) -> usize {
    let mut total = 0usize;
    let mut i = 0;
    while i < fields.len() {
        total += fields[i].byte_width();
        i += 1;
    }
    total
}

/// A runtime layout over an arbitrary list of field types.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Layout {
    fields: Vec<FieldType>,
    offsets: Vec<usize>,
    total_len: usize,
}

impl Layout {
    /// Build a layout from field types.
    ///
    /// Returns `Err(Error::InvalidLayout)` if `fields` is empty.
    pub fn new(fields: &[FieldType]) -> Result<Self> {
        if fields.is_empty() {
            return Err(Error::InvalidLayout);
        }
        let mut offsets = Vec::with_capacity(fields.len());
        let mut offset = 0usize;
        for field in fields {
            offsets.push(offset);
            offset += field.byte_width();
        }
        Ok(Layout {
            fields: fields.to_vec(),
            offsets,
            total_len: offset,
        })
    }

    /// Number of fields.
    pub fn len(&self) -> usize {
        self.fields.len()
    }

    /// Always `false`; a layout has at least one field.
    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    /// Total encoded length in bytes.
    pub fn total_len(&self) -> usize {
        self.total_len
    }

    /// Field types in layout order.
    pub fn fields(&self) -> &[FieldType] {
        &self.fields
    }

    /// Byte offset of each field, parallel to [`Layout::fields`].
    pub fn offsets(&self) -> &[usize] {
        &self.offsets
    }

    /// Byte offset of field `index`, or `IndexOutOfRange` past the last field.
    pub fn offset_of(&self, index: usize) -> Result<usize> {
        self.offsets
            .get(index)
            .copied()
            .ok_or(Error::IndexOutOfRange {
                index,
                len: self.offsets.len(),
            })
    }

    /// Iterate `(field type, offset)` pairs in field order.
    pub fn iter(&self) -> impl Iterator<Item = (FieldType, usize)> + '_ {
        self.fields.iter().copied().zip(self.offsets.iter().copied())
    }
}

/// Parse a comma-separated field list such as `"i16,i32,u64"`.
///
/// Whitespace around each entry is ignored.
pub fn parse_layout(s: &str) -> Result<Layout> {
    let s = s.trim();
    if s.is_empty() {
        return Err(Error::InvalidLayout);
    }
    let fields = s
        .split(',')
        .map(FieldType::from_str)
        .collect::<Result<Vec<_>>>()?;
    Layout::new(&fields)
}
