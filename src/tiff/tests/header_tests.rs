//! Tests for header parsing

use std::io::Cursor;

use super::test_utils::{put_u16, put_u32, TiffFixture};
use crate::io::byte_order::ByteOrder;
use crate::tiff::errors::GeoTiffError;
use crate::tiff::header::HeaderParser;

#[test]
fn test_classic_little_endian_header() {
    let mut cursor = TiffFixture::classic().cursor();
    let header = HeaderParser::new(true).parse(&mut cursor).unwrap();

    assert_eq!(header.byte_order, ByteOrder::LittleEndian);
    assert!(!header.is_big_tiff);
    assert_eq!(header.ifd0_offset, 8);
    assert_eq!(header.version(), 42);
    assert_eq!(header.header_size(), 8);
    assert_eq!(cursor.position(), 8);
}

#[test]
fn test_big_tiff_big_endian_header() {
    let mut cursor = TiffFixture::new(ByteOrder::BigEndian, true).cursor();
    let header = HeaderParser::new(true).parse(&mut cursor).unwrap();

    assert_eq!(header.byte_order, ByteOrder::BigEndian);
    assert!(header.is_big_tiff);
    assert_eq!(header.ifd0_offset, 16);
    assert_eq!(header.version(), 43);
    assert_eq!(header.inline_capacity(), 8);
    assert_eq!(cursor.position(), 16);
}

#[test]
fn test_big_tiff_offset_size_field_not_validated() {
    let mut buffer = b"II".to_vec();
    put_u16(&mut buffer, ByteOrder::LittleEndian, 43);
    put_u16(&mut buffer, ByteOrder::LittleEndian, 4);
    put_u16(&mut buffer, ByteOrder::LittleEndian, 7);
    buffer.extend_from_slice(&64u64.to_le_bytes());

    let header = HeaderParser::new(true).parse(&mut Cursor::new(buffer)).unwrap();
    assert_eq!(header.ifd0_offset, 64);
}

#[test]
fn test_invalid_magic() {
    let mut cursor = Cursor::new(b"XX\x2a\x00\x08\x00\x00\x00".to_vec());
    assert!(matches!(
        HeaderParser::new(true).parse(&mut cursor),
        Err(GeoTiffError::InvalidFormat(_))
    ));
}

#[test]
fn test_unsupported_version() {
    let mut buffer = b"II".to_vec();
    put_u16(&mut buffer, ByteOrder::LittleEndian, 99);
    put_u32(&mut buffer, ByteOrder::LittleEndian, 8);

    match HeaderParser::new(true).parse(&mut Cursor::new(buffer)) {
        Err(GeoTiffError::UnsupportedVersion(99)) => {}
        other => panic!("expected UnsupportedVersion(99), got {:?}", other),
    }
}

#[test]
fn test_big_tiff_rejected_when_disabled() {
    let mut cursor = TiffFixture::new(ByteOrder::LittleEndian, true).cursor();

    match HeaderParser::new(false).parse(&mut cursor) {
        Err(GeoTiffError::UnsupportedVersion(43)) => {}
        other => panic!("expected UnsupportedVersion(43), got {:?}", other),
    }
}

#[test]
fn test_truncated_header() {
    let mut cursor = Cursor::new(b"MM\x00\x2a\x00".to_vec());
    assert!(matches!(
        HeaderParser::new(true).parse(&mut cursor),
        Err(GeoTiffError::IoError { offset: 4, length: 4, .. })
    ));
}
