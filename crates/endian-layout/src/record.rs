//! The twelve-field boundary test record and its fixed-layout encoding.

use alloc::vec;
use alloc::vec::Vec;

use crate::endian::{ByteOrder, Scalar};
use crate::error::{Error, Result};
use crate::layout::{record_offsets, total_width, FieldType};

/// Field types of [`TestRecord`] in encoding order.
pub const RECORD_FIELDS: [FieldType; 12] = [
    FieldType::I16,
    FieldType::I32,
    FieldType::I64,
    FieldType::U16,
    FieldType::U32,
    FieldType::U64,
    FieldType::I16,
    FieldType::I32,
    FieldType::I64,
    FieldType::U16,
    FieldType::U32,
    FieldType::U64,
];

/// Field names of [`TestRecord`] in encoding order.
pub const RECORD_FIELD_NAMES: [&str; 12] = [
    "S0", "I0", "L0", "US0", "UI0", "UL0", "S1", "I1", "L1", "US1", "UI1", "UL1",
];

/// Byte offset of each field within an encoded record.
pub const RECORD_OFFSETS: [usize; 12] = record_offsets(&RECORD_FIELDS);

/// Encoded size of a [`TestRecord`] in bytes.
pub const RECORD_LEN: usize = total_width(&RECORD_FIELDS);

/// A single field value tagged with its storage type.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldValue {
    /// 16-bit signed integer.
    I16(i16),
    /// 32-bit signed integer.
    I32(i32),
    /// 64-bit signed integer.
    I64(i64),
    /// 16-bit unsigned integer.
    U16(u16),
    /// 32-bit unsigned integer.
    U32(u32),
    /// 64-bit unsigned integer.
    U64(u64),
}

impl FieldValue {
    /// The storage type this value is encoded as.
    pub fn field_type(&self) -> FieldType {
        match self {
            FieldValue::I16(_) => FieldType::I16,
            FieldValue::I32(_) => FieldType::I32,
            FieldValue::I64(_) => FieldType::I64,
            FieldValue::U16(_) => FieldType::U16,
            FieldValue::U32(_) => FieldType::U32,
            FieldValue::U64(_) => FieldType::U64,
        }
    }

    /// Write the value in `order` into the front of `buf`.
    ///
    /// # Panics
    /// Panics if `buf` is shorter than the field's byte width.
    pub fn write(&self, buf: &mut [u8], order: ByteOrder) {
        match *self {
            FieldValue::I16(v) => v.write(buf, order),
            FieldValue::I32(v) => v.write(buf, order),
            FieldValue::I64(v) => v.write(buf, order),
            FieldValue::U16(v) => v.write(buf, order),
            FieldValue::U32(v) => v.write(buf, order),
            FieldValue::U64(v) => v.write(buf, order),
        }
    }

    /// Read a value of `field_type` in `order` from the front of `buf`.
    ///
    /// Returns `Err(Error::UnexpectedEof)` if `buf` is too short.
    pub fn read(buf: &[u8], field_type: FieldType, order: ByteOrder) -> Result<Self> {
        if buf.len() < field_type.byte_width() {
            return Err(Error::UnexpectedEof);
        }
        let value = match field_type {
            FieldType::I16 => FieldValue::I16(i16::read(buf, order)),
            FieldType::I32 => FieldValue::I32(i32::read(buf, order)),
            FieldType::I64 => FieldValue::I64(i64::read(buf, order)),
            FieldType::U16 => FieldValue::U16(u16::read(buf, order)),
            FieldType::U32 => FieldValue::U32(u32::read(buf, order)),
            FieldType::U64 => FieldValue::U64(u64::read(buf, order)),
        };
        Ok(value)
    }
}

impl core::fmt::Display for FieldValue {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            FieldValue::I16(v) => write!(f, "{v}"),
            FieldValue::I32(v) => write!(f, "{v}"),
            FieldValue::I64(v) => write!(f, "{v}"),
            FieldValue::U16(v) => write!(f, "{v}"),
            FieldValue::U32(v) => write!(f, "{v}"),
            FieldValue::U64(v) => write!(f, "{v}"),
        }
    }
}

/// Write `values` at the given offsets of `buf` in `order`.
///
/// Returns `Err(Error::InvalidLayout)` if `values` and `offsets` differ in
/// length, and `Err(Error::UnexpectedEof)` if any field would run past the
/// end. Every field is checked before the first write, so `buf` is left
/// untouched on error.
pub fn encode_fields(
    values: &[FieldValue],
    offsets: &[usize],
    buf: &mut [u8],
    order: ByteOrder,
) -> Result<()> {
    if values.len() != offsets.len() {
        return Err(Error::InvalidLayout);
    }
    for (value, &offset) in values.iter().zip(offsets) {
        match offset.checked_add(value.field_type().byte_width()) {
            Some(end) if end <= buf.len() => {}
            _ => return Err(Error::UnexpectedEof),
        }
    }
    for (value, &offset) in values.iter().zip(offsets) {
        value.write(&mut buf[offset..], order);
    }
    Ok(())
}

/// A record of mixed-width integers used for boundary tests of byte codecs.
///
/// Fields are named by width (`S` short, `I` int, `L` long) with a `U` prefix
/// for unsigned types.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TestRecord {
    pub s0: i16,
    pub i0: i32,
    pub l0: i64,
    pub us0: u16,
    pub ui0: u32,
    pub ul0: u64,
    pub s1: i16,
    pub i1: i32,
    pub l1: i64,
    pub us1: u16,
    pub ui1: u32,
    pub ul1: u64,
}

impl TestRecord {
    /// The extremal record: type maxima in the `*0` fields, minima in the `*1` fields.
    pub const EXTREMES: TestRecord = TestRecord {
        s0: i16::MAX,
        i0: i32::MAX,
        l0: i64::MAX,
        us0: u16::MAX,
        ui0: u32::MAX,
        ul0: u64::MAX,
        s1: i16::MIN,
        i1: i32::MIN,
        l1: i64::MIN,
        us1: u16::MIN,
        ui1: u32::MIN,
        ul1: u64::MIN,
    };

    /// All twelve fields as tagged values, in encoding order.
    pub fn values(&self) -> [FieldValue; 12] {
        [
            FieldValue::I16(self.s0),
            FieldValue::I32(self.i0),
            FieldValue::I64(self.l0),
            FieldValue::U16(self.us0),
            FieldValue::U32(self.ui0),
            FieldValue::U64(self.ul0),
            FieldValue::I16(self.s1),
            FieldValue::I32(self.i1),
            FieldValue::I64(self.l1),
            FieldValue::U16(self.us1),
            FieldValue::U32(self.ui1),
            FieldValue::U64(self.ul1),
        ]
    }

    /// Encode into a newly allocated buffer of exactly [`RECORD_LEN`] bytes.
    pub fn encode(&self, order: ByteOrder) -> Vec<u8> {
        let mut buf = vec![0u8; RECORD_LEN];
        for (value, &offset) in self.values().iter().zip(RECORD_OFFSETS.iter()) {
            value.write(&mut buf[offset..], order);
        }
        buf
    }

    /// Encode into the first [`RECORD_LEN`] bytes of `dest`.
    ///
    /// Returns `Err(Error::UnexpectedEof)` if `dest` is too short; `dest` is
    /// left untouched in that case.
    pub fn encode_into(&self, dest: &mut [u8], order: ByteOrder) -> Result<()> {
        if dest.len() < RECORD_LEN {
            return Err(Error::UnexpectedEof);
        }
        encode_fields(&self.values(), &RECORD_OFFSETS, dest, order)
    }

    /// Decode a record from the first [`RECORD_LEN`] bytes of `buf`.
    pub fn decode(buf: &[u8], order: ByteOrder) -> Result<Self> {
        if buf.len() < RECORD_LEN {
            return Err(Error::UnexpectedEof);
        }
        let at = |i: usize| &buf[RECORD_OFFSETS[i]..];
        Ok(TestRecord {
            s0: i16::read(at(0), order),
            i0: i32::read(at(1), order),
            l0: i64::read(at(2), order),
            us0: u16::read(at(3), order),
            ui0: u32::read(at(4), order),
            ul0: u64::read(at(5), order),
            s1: i16::read(at(6), order),
            i1: i32::read(at(7), order),
            l1: i64::read(at(8), order),
            us1: u16::read(at(9), order),
            ui1: u32::read(at(10), order),
            ul1: u64::read(at(11), order),
        })
    }
}

/// Encode the extremal record big-endian.
pub fn big_endian_bytes() -> Vec<u8> {
    TestRecord::EXTREMES.encode(ByteOrder::Big)
}

/// Encode the extremal record little-endian.
pub fn little_endian_bytes() -> Vec<u8> {
    TestRecord::EXTREMES.encode(ByteOrder::Little)
}
