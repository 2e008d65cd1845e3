//! Round-trip and boundary integration tests for endian-layout.
//!
//! Everything runs on in-memory buffers except the file test at the end,
//! which goes through a temporary directory.

use endian_layout::endian::{collect_bytes, read_be, read_le};
use endian_layout::io::{read_record, write_record};
use endian_layout::layout::{parse_layout, total_width, FieldType, Layout};
use endian_layout::record::{encode_fields, FieldValue, RECORD_FIELDS};
use endian_layout::verify::{
    assert_out_of_range, assert_record_bytes, assert_span_eq, assert_span_same, read_and_clear,
};
use endian_layout::{ByteOrder, Error, Span, SpanMut, TestRecord, RECORD_LEN, RECORD_OFFSETS};

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

fn other_order(order: ByteOrder) -> ByteOrder {
    match order {
        ByteOrder::Big => ByteOrder::Little,
        ByteOrder::Little => ByteOrder::Big,
    }
}

fn sample_record() -> TestRecord {
    TestRecord {
        s0: -12345,
        i0: 0x1234_5678,
        l0: -0x0102_0304_0506_0708,
        us0: 0xA1B2,
        ui0: 0xC3D4_E5F6,
        ul0: 0x0011_2233_4455_6677,
        s1: 1,
        i1: -1,
        l1: 0,
        us1: 0x00FF,
        ui1: 0xFF00_0000,
        ul1: 0x8000_0000_0000_0000,
    }
}

// ===========================================================================
// Encoding
// ===========================================================================

#[test]
fn roundtrip_extremes_both_orders() {
    for order in ByteOrder::ALL {
        let bytes = TestRecord::EXTREMES.encode(order);
        assert_eq!(TestRecord::decode(&bytes, order).unwrap(), TestRecord::EXTREMES);
    }
}

#[test]
fn roundtrip_sample_both_orders() {
    let record = sample_record();
    for order in ByteOrder::ALL {
        let bytes = record.encode(order);
        assert_eq!(bytes.len(), RECORD_LEN);
        assert_eq!(TestRecord::decode(&bytes, order).unwrap(), record);
    }
}

#[test]
fn big_and_little_differ_with_equal_length() {
    let be = TestRecord::EXTREMES.encode(ByteOrder::Big);
    let le = TestRecord::EXTREMES.encode(ByteOrder::Little);
    assert_eq!(be.len(), 56);
    assert_eq!(le.len(), 56);
    assert_ne!(be, le);
}

#[test]
fn each_field_is_byte_reversed_between_orders() {
    let record = sample_record();
    let be = record.encode(ByteOrder::Big);
    let le = record.encode(ByteOrder::Little);
    for (i, ft) in RECORD_FIELDS.iter().enumerate() {
        let start = RECORD_OFFSETS[i];
        let end = start + ft.byte_width();
        let mut reversed = le[start..end].to_vec();
        reversed.reverse();
        assert_eq!(&be[start..end], &reversed[..], "field {}", i);
    }
}

#[test]
fn s0_max_layout_bytes() {
    let be = TestRecord::EXTREMES.encode(ByteOrder::Big);
    let le = TestRecord::EXTREMES.encode(ByteOrder::Little);
    assert_eq!(&be[0..2], &[0x7F, 0xFF]);
    assert_eq!(&le[0..2], &[0xFF, 0x7F]);
}

#[test]
fn ul1_min_is_zero_in_both_orders() {
    for order in ByteOrder::ALL {
        let bytes = TestRecord::EXTREMES.encode(order);
        assert_eq!(&bytes[48..56], &[0u8; 8]);
    }
}

#[test]
fn fields_read_back_at_fixed_offsets() {
    let be = TestRecord::EXTREMES.encode(ByteOrder::Big);
    let le = TestRecord::EXTREMES.encode(ByteOrder::Little);
    assert_eq!(read_be::<i32>(&be[2..]), i32::MAX);
    assert_eq!(read_le::<i32>(&le[2..]), i32::MAX);
    assert_eq!(read_be::<u64>(&be[20..]), u64::MAX);
    assert_eq!(read_be::<i16>(&be[28..]), i16::MIN);
    assert_eq!(read_le::<i64>(&le[34..]), i64::MIN);
    assert_eq!(read_le::<u32>(&le[44..]), 0);
}

#[test]
fn decode_in_wrong_order_does_not_match() {
    let record = sample_record();
    for order in ByteOrder::ALL {
        let bytes = record.encode(order);
        let decoded = TestRecord::decode(&bytes, other_order(order)).unwrap();
        assert_ne!(decoded, record);
    }
}

#[test]
fn generic_field_encoder_matches_record_encoder() {
    let record = sample_record();
    let layout = Layout::new(&RECORD_FIELDS).unwrap();
    for order in ByteOrder::ALL {
        let mut buf = vec![0u8; layout.total_len()];
        encode_fields(&record.values(), layout.offsets(), &mut buf, order).unwrap();
        assert_eq!(buf, record.encode(order));
    }
}

#[test]
fn generic_field_encoder_rejects_short_buffer() {
    let values = [FieldValue::U64(1), FieldValue::I16(2)];
    let mut buf = [0u8; 9];
    let result = encode_fields(&values, &[0, 8], &mut buf, ByteOrder::Big);
    assert!(matches!(result, Err(Error::UnexpectedEof)));
}

#[test]
fn bulk_collect_matches_record_prefix() {
    let record = TestRecord::EXTREMES;
    let be = record.encode(ByteOrder::Big);
    // S0 and S1 are both i16; check bulk serialization agrees with the record
    let shorts = collect_bytes(&[record.s0, record.s1], ByteOrder::Big);
    assert_eq!(&shorts[0..2], &be[0..2]);
    assert_eq!(&shorts[2..4], &be[28..30]);
}

// ===========================================================================
// Layout
// ===========================================================================

#[test]
fn record_layout_offsets_and_length() {
    assert_eq!(RECORD_OFFSETS, [0, 2, 6, 14, 16, 20, 28, 30, 34, 42, 44, 48]);
    assert_eq!(RECORD_LEN, total_width(&RECORD_FIELDS));
    for i in 1..RECORD_OFFSETS.len() {
        assert_eq!(
            RECORD_OFFSETS[i],
            RECORD_OFFSETS[i - 1] + RECORD_FIELDS[i - 1].byte_width()
        );
    }
}

#[test]
fn parsed_layout_matches_record() {
    let layout = parse_layout("i16,i32,i64,u16,u32,u64,i16,i32,i64,u16,u32,u64").unwrap();
    assert_eq!(layout.fields(), &RECORD_FIELDS[..]);
    assert_eq!(layout.offsets(), &RECORD_OFFSETS[..]);
    assert_eq!(layout.total_len(), RECORD_LEN);
    assert_eq!(layout.offset_of(11).unwrap(), 48);
    assert_out_of_range(layout.offset_of(12));
}

#[test]
fn signedness_alternates_by_group() {
    let signed: Vec<bool> = RECORD_FIELDS.iter().map(|ft| ft.is_signed()).collect();
    assert_eq!(&signed[..6], &[true, true, true, false, false, false]);
    assert_eq!(&signed[..6], &signed[6..]);
    assert_eq!(RECORD_FIELDS[0], FieldType::I16);
}

// ===========================================================================
// Views and validation helpers
// ===========================================================================

#[test]
fn index_one_past_end_is_out_of_range() {
    for order in ByteOrder::ALL {
        let bytes = TestRecord::EXTREMES.encode(order);
        let span = Span::new(&bytes);
        assert!(span.get(55).is_ok());
        let (index, len) = assert_out_of_range(span.get(56));
        assert_eq!(index, 56);
        assert_eq!(len, 56);
    }
}

#[test]
fn reading_past_end_is_out_of_range() {
    let bytes = TestRecord::EXTREMES.encode(ByteOrder::Big);
    let span = Span::new(&bytes);
    assert_eq!(span.read::<u64>(48, ByteOrder::Big).unwrap(), 0);
    assert_out_of_range(span.read::<u64>(49, ByteOrder::Big));
    assert_out_of_range(span.slice(50, 7));
}

#[test]
fn mutable_view_out_of_range() {
    let mut bytes = TestRecord::EXTREMES.encode(ByteOrder::Little);
    let mut span = SpanMut::new(&mut bytes);
    assert_out_of_range(span.get_mut(56));
    assert_out_of_range(span.write(55, 0_u16, ByteOrder::Little));
    assert_out_of_range(span.clear_range(56, 1));
}

#[test]
fn encoded_buffer_verifies_and_clears() {
    let record = sample_record();
    for order in ByteOrder::ALL {
        let mut bytes = record.encode(order);
        assert_record_bytes(&mut bytes, &record, order);
        assert!(bytes.iter().all(|&b| b == 0));
    }
}

#[test]
fn read_and_clear_each_field() {
    let mut bytes = TestRecord::EXTREMES.encode(ByteOrder::Big);
    let mut span = SpanMut::new(&mut bytes);
    let s0: i16 = read_and_clear(&mut span, 0, ByteOrder::Big).unwrap();
    let ul0: u64 = read_and_clear(&mut span, 20, ByteOrder::Big).unwrap();
    assert_eq!(s0, i16::MAX);
    assert_eq!(ul0, u64::MAX);
    assert_span_eq(span.as_span().slice(0, 2).unwrap(), &[0, 0]);
    assert_span_eq(span.as_span().slice(20, 8).unwrap(), &[0; 8]);
    // neighbouring fields are untouched
    assert_eq!(span.read::<i32>(2, ByteOrder::Big).unwrap(), i32::MAX);
}

#[test]
fn value_and_identity_views_of_records() {
    let a = TestRecord::EXTREMES;
    let b = sample_record();
    let values = [a, b];
    assert_span_eq(Span::new(&values), &[TestRecord::EXTREMES, sample_record()]);

    let refs = [&values[0], &values[1]];
    assert_span_same(Span::new(&refs), &[&values[0], &values[1]]);
}

#[test]
#[should_panic(expected = "is not the same object")]
fn identity_view_rejects_equal_copy() {
    let values = [TestRecord::EXTREMES];
    let copy = TestRecord::EXTREMES;
    let refs = [&values[0]];
    assert_span_same(Span::new(&refs), &[&copy]);
}

#[test]
#[should_panic(expected = "wrong error kind")]
fn out_of_range_helper_detects_wrong_kind() {
    let bytes = TestRecord::EXTREMES.encode(ByteOrder::Big);
    assert_out_of_range(TestRecord::decode(&bytes[..10], ByteOrder::Big));
}

// ===========================================================================
// Streams and files
// ===========================================================================

#[test]
fn record_file_roundtrip() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("record.bin");
    let record = sample_record();

    for order in ByteOrder::ALL {
        let mut file = std::fs::File::create(&path).unwrap();
        write_record(&mut file, &record, order).unwrap();
        drop(file);

        assert_eq!(std::fs::metadata(&path).unwrap().len(), RECORD_LEN as u64);

        let mut file = std::fs::File::open(&path).unwrap();
        assert_eq!(read_record(&mut file, order).unwrap(), record);
    }
}
