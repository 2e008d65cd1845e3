//! Reading and writing encoded records through `std::io` streams.

use std::io::{Read, Write};

use crate::endian::ByteOrder;
use crate::error::{Error, Result};
use crate::record::{TestRecord, RECORD_LEN};

/// Encode `record` in `order` and write all [`RECORD_LEN`] bytes to `writer`.
pub fn write_record<W: Write>(
    writer: &mut W,
    record: &TestRecord,
    order: ByteOrder,
) -> Result<()> {
    writer.write_all(&record.encode(order))?;
    Ok(())
}

/// Read exactly [`RECORD_LEN`] bytes from `reader` and decode them in `order`.
///
/// A stream that ends early yields `Err(Error::UnexpectedEof)`.
pub fn read_record<R: Read>(reader: &mut R, order: ByteOrder) -> Result<TestRecord> {
    let mut buf = [0u8; RECORD_LEN];
    reader.read_exact(&mut buf)?;
    TestRecord::decode(&buf, order)
}

/// Read back-to-back records until the stream is exhausted.
///
/// Trailing bytes that do not form a whole record are an error.
pub fn read_records<R: Read>(reader: &mut R, order: ByteOrder) -> Result<Vec<TestRecord>> {
    let mut data = Vec::new();
    reader.read_to_end(&mut data)?;
    if !data.len().is_multiple_of(RECORD_LEN) {
        return Err(Error::UnexpectedEof);
    }
    data
        .chunks_exact(RECORD_LEN)
        .map(|chunk| TestRecord::decode(chunk, order))
        .collect()
}
