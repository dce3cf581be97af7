//! Tests for the byte order module

use std::io::Cursor;
use byteorder::{LittleEndian, BigEndian, WriteBytesExt};
use crate::io::byte_order::{ByteOrder, ByteOrderHandler, LittleEndianHandler, BigEndianHandler};
use crate::tiff::errors::GeoTiffError;

#[test]
fn test_byte_order_detection_little_endian() {
    let mut cursor = Cursor::new(b"II".to_vec());
    assert_eq!(ByteOrder::detect(&mut cursor).unwrap(), ByteOrder::LittleEndian);
}

#[test]
fn test_byte_order_detection_big_endian() {
    let mut cursor = Cursor::new(b"MM".to_vec());
    assert_eq!(ByteOrder::detect(&mut cursor).unwrap(), ByteOrder::BigEndian);
}

#[test]
fn test_byte_order_detection_invalid() {
    let mut cursor = Cursor::new(b"IM".to_vec());
    match ByteOrder::detect(&mut cursor) {
        Err(GeoTiffError::InvalidFormat(marker)) => assert_eq!(&marker, b"IM"),
        other => panic!("expected InvalidFormat, got {:?}", other),
    }
}

#[test]
fn test_byte_order_detection_empty_source() {
    let mut cursor = Cursor::new(Vec::new());
    assert!(matches!(
        ByteOrder::detect(&mut cursor),
        Err(GeoTiffError::IoError { offset: 0, length: 2, .. })
    ));
}

#[test]
fn test_little_endian_handler() {
    let mut buffer = Vec::new();
    buffer.write_u16::<LittleEndian>(0x1234).unwrap();
    buffer.write_u32::<LittleEndian>(0x12345678).unwrap();
    buffer.write_u64::<LittleEndian>(0x1234567890ABCDEF).unwrap();
    buffer.write_f64::<LittleEndian>(50.8549).unwrap();
    let mut cursor = Cursor::new(buffer);

    let handler = LittleEndianHandler;

    assert_eq!(handler.read_u16(&mut cursor).unwrap(), 0x1234);
    assert_eq!(handler.read_u32(&mut cursor).unwrap(), 0x12345678);
    assert_eq!(handler.read_u64(&mut cursor).unwrap(), 0x1234567890ABCDEF);
    assert_eq!(handler.read_f64(&mut cursor).unwrap(), 50.8549);
}

#[test]
fn test_big_endian_handler() {
    let mut buffer = Vec::new();
    buffer.write_u16::<BigEndian>(0x1234).unwrap();
    buffer.write_u32::<BigEndian>(0x12345678).unwrap();
    buffer.write_u64::<BigEndian>(0x1234567890ABCDEF).unwrap();
    buffer.write_f64::<BigEndian>(50.8549).unwrap();
    let mut cursor = Cursor::new(buffer);

    let handler = BigEndianHandler;

    assert_eq!(handler.read_u16(&mut cursor).unwrap(), 0x1234);
    assert_eq!(handler.read_u32(&mut cursor).unwrap(), 0x12345678);
    assert_eq!(handler.read_u64(&mut cursor).unwrap(), 0x1234567890ABCDEF);
    assert_eq!(handler.read_f64(&mut cursor).unwrap(), 50.8549);
}

#[test]
fn test_big_endian_double_reverses_all_eight_bytes() {
    let bytes = 6.11667f64.to_be_bytes();

    assert_eq!(BigEndianHandler.f64_from_bytes(&bytes), 6.11667);
    assert_ne!(LittleEndianHandler.f64_from_bytes(&bytes), 6.11667);
}

#[test]
fn test_from_bytes_uses_leading_bytes() {
    // Left-aligned inline value padded to the 8-byte BigTIFF field
    let field = [0x00, 0x04, 0x00, 0x03, 0xFF, 0xFF, 0xFF, 0xFF];

    assert_eq!(BigEndianHandler.u16_from_bytes(&field), 4);
    assert_eq!(BigEndianHandler.u32_from_bytes(&field), 0x0004_0003);
    assert_eq!(LittleEndianHandler.u16_from_bytes(&field), 0x0400);
}
