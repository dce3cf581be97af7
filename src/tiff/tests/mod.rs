//! Unit tests for TIFF parsing

mod byte_order_tests;
mod header_tests;
