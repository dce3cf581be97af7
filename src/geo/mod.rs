//! Georeferencing metadata extracted from the first IFD

mod metadata;

pub use self::metadata::{GeoInterpreter, GeoMetadata};
