//! I/O utilities for file handling
//!
//! This module provides traits and implementations for various I/O operations.

pub mod seekable;
pub mod byte_order;
pub mod byte_reader;

pub use byte_reader::ByteReader;
