//! Assertion helpers for views and encoded buffers.
//!
//! These panic with a descriptive message on mismatch, so they can be called
//! directly from `#[test]` functions in this crate and in downstream crates.

use core::fmt::Debug;

use crate::endian::{ByteOrder, Scalar};
use crate::error::{Error, Result};
use crate::record::{FieldValue, TestRecord, RECORD_LEN, RECORD_OFFSETS};
use crate::span::{Span, SpanMut};

/// Assert that `span` holds exactly the elements of `expected`, compared by value.
#[track_caller]
pub fn assert_span_eq<T: PartialEq + Debug>(span: Span<'_, T>, expected: &[T]) {
    assert_eq!(
        span.len(),
        expected.len(),
        "span length {} does not match expected length {}",
        span.len(),
        expected.len()
    );
    for (i, (actual, want)) in span.iter().zip(expected).enumerate() {
        assert!(
            actual == want,
            "element {} differs: {:?} != {:?}",
            i,
            actual,
            want
        );
    }
}

/// Assert that every reference in `span` points at the same object as the
/// matching reference in `expected`.
///
/// Equal values at different addresses fail this check.
#[track_caller]
pub fn assert_span_same<T: Debug>(span: Span<'_, &T>, expected: &[&T]) {
    assert_eq!(
        span.len(),
        expected.len(),
        "span length {} does not match expected length {}",
        span.len(),
        expected.len()
    );
    for (i, (actual, want)) in span.iter().zip(expected).enumerate() {
        assert!(
            core::ptr::eq(*actual, *want),
            "element {} is not the same object: {:p} ({:?}) vs {:p} ({:?})",
            i,
            *actual,
            actual,
            *want,
            want
        );
    }
}

/// Assert that `result` failed with [`Error::IndexOutOfRange`].
///
/// Any other error kind, or success, panics. Returns the reported
/// `(index, len)` for further checks.
#[track_caller]
pub fn assert_out_of_range<T: Debug>(result: Result<T>) -> (usize, usize) {
    match result {
        Err(Error::IndexOutOfRange { index, len }) => (index, len),
        Err(other) => panic!("expected index out of range, got wrong error kind: {other:?}"),
        Ok(value) => panic!("expected index out of range, got Ok({value:?})"),
    }
}

/// Decode an `S` at `offset`, then zero the bytes it was read from.
pub fn read_and_clear<S: Scalar>(
    span: &mut SpanMut<'_, u8>,
    offset: usize,
    order: ByteOrder,
) -> Result<S> {
    let value = span.read::<S>(offset, order)?;
    span.clear_range(offset, S::WIDTH)?;
    Ok(value)
}

fn read_and_clear_value(
    span: &mut SpanMut<'_, u8>,
    offset: usize,
    like: FieldValue,
    order: ByteOrder,
) -> Result<FieldValue> {
    let value = match like {
        FieldValue::I16(_) => FieldValue::I16(read_and_clear(span, offset, order)?),
        FieldValue::I32(_) => FieldValue::I32(read_and_clear(span, offset, order)?),
        FieldValue::I64(_) => FieldValue::I64(read_and_clear(span, offset, order)?),
        FieldValue::U16(_) => FieldValue::U16(read_and_clear(span, offset, order)?),
        FieldValue::U32(_) => FieldValue::U32(read_and_clear(span, offset, order)?),
        FieldValue::U64(_) => FieldValue::U64(read_and_clear(span, offset, order)?),
    };
    Ok(value)
}

/// Assert that `buf` holds `expected` encoded in `order`.
///
/// Each field is read and cleared in turn, so on success the first
/// [`RECORD_LEN`] bytes of `buf` are all zero.
#[track_caller]
pub fn assert_record_bytes(buf: &mut [u8], expected: &TestRecord, order: ByteOrder) {
    assert!(
        buf.len() >= RECORD_LEN,
        "buffer of {} bytes is shorter than a record ({} bytes)",
        buf.len(),
        RECORD_LEN
    );
    let mut span = SpanMut::new(&mut buf[..RECORD_LEN]);
    for (i, want) in expected.values().into_iter().enumerate() {
        let offset = RECORD_OFFSETS[i];
        match read_and_clear_value(&mut span, offset, want, order) {
            Ok(actual) => assert_eq!(
                actual, want,
                "field {} at offset {} differs ({} order)",
                i, offset, order
            ),
            Err(e) => panic!("field {i} at offset {offset}: {e}"),
        }
    }
    assert!(
        span.as_span().iter().all(|&b| b == 0),
        "record bytes not fully consumed"
    );
}
