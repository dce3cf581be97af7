//! Mapping of decoded tags onto georeferencing fields
//!
//! The interpreter accepts the retained tags in directory order. When a tag
//! occurs more than once, the last occurrence wins. Completeness is only
//! checked in `finish`, so absent tags are simply never recorded.

use log::{debug, trace};

use crate::tiff::constants::tags;
use crate::tiff::errors::{GeoTiffError, GeoTiffResult};
use crate::tiff::ifd::DecodedTag;
use crate::tiff::value::DecodedValue;

/// Validated georeferencing metadata of an image
#[derive(Debug, Clone, PartialEq)]
pub struct GeoMetadata {
    /// Image width in pixels (> 0)
    pub width: u32,
    /// Image height in pixels (> 0)
    pub height: u32,
    /// Map units per pixel along X (non-zero)
    pub pixel_scale_x: f64,
    /// Map units per pixel along Y (non-zero)
    pub pixel_scale_y: f64,
    /// Longitude of the geographic tie point
    pub tie_point_longitude: f64,
    /// Latitude of the geographic tie point
    pub tie_point_latitude: f64,
    /// Image description, empty if the tag is absent
    pub description: String,
}

/// Collects tag values and validates them into `GeoMetadata`
#[derive(Debug, Default, Clone)]
pub struct GeoInterpreter {
    width: Option<u32>,
    height: Option<u32>,
    description: Option<String>,
    pixel_scale: Option<(f64, f64)>,
    tie_point: Option<(f64, f64)>,
}

impl GeoInterpreter {
    /// Creates an interpreter with nothing recorded
    pub fn new() -> Self {
        Self::default()
    }

    /// Interprets every tag in order and validates the result
    pub fn interpret<'t, I>(tags: I) -> GeoTiffResult<GeoMetadata>
    where
        I: IntoIterator<Item = &'t DecodedTag>,
    {
        let mut interpreter = GeoInterpreter::new();
        for tag in tags {
            interpreter.apply(tag.tag, &tag.value)?;
        }
        interpreter.finish()
    }

    /// Records one decoded tag, overwriting any earlier occurrence
    pub fn apply(&mut self, tag: u16, value: &DecodedValue) -> GeoTiffResult<()> {
        trace!("Interpreting tag {}: {}", tag, value);

        match tag {
            tags::IMAGE_WIDTH => self.width = Some(last_short(tag, value)?),
            tags::IMAGE_LENGTH => self.height = Some(last_short(tag, value)?),
            tags::IMAGE_DESCRIPTION => {
                self.description = Some(value.strings().last().cloned().unwrap_or_default());
            }
            tags::MODEL_PIXEL_SCALE_TAG => {
                let scale = required_doubles(tag, value, 2)?;
                self.pixel_scale = Some((scale[0], scale[1]));
            }
            tags::MODEL_TIEPOINT_TAG => {
                // Elements 0-2 are the raster point (I, J, K); only the model point is used
                let tie_point = required_doubles(tag, value, 5)?;
                self.tie_point = Some((tie_point[3], tie_point[4]));
            }
            _ => debug!("Ignoring tag {}", tag),
        }

        Ok(())
    }

    /// Checks completeness and produces the metadata
    ///
    /// Checked in order: tie point, pixel scale, width, height. A zero pixel
    /// scale component or a zero dimension counts as absent.
    pub fn finish(self) -> GeoTiffResult<GeoMetadata> {
        let (tie_point_longitude, tie_point_latitude) = self
            .tie_point
            .ok_or(GeoTiffError::MissingTag(tags::MODEL_TIEPOINT_TAG))?;

        let (pixel_scale_x, pixel_scale_y) = self
            .pixel_scale
            .filter(|&(x, y)| x != 0.0 && y != 0.0)
            .ok_or(GeoTiffError::MissingTag(tags::MODEL_PIXEL_SCALE_TAG))?;

        let width = self
            .width
            .filter(|&w| w > 0)
            .ok_or(GeoTiffError::MissingTag(tags::IMAGE_WIDTH))?;

        let height = self
            .height
            .filter(|&h| h > 0)
            .ok_or(GeoTiffError::MissingTag(tags::IMAGE_LENGTH))?;

        Ok(GeoMetadata {
            width,
            height,
            pixel_scale_x,
            pixel_scale_y,
            tie_point_longitude,
            tie_point_latitude,
            description: self.description.unwrap_or_default(),
        })
    }
}

fn last_short(tag: u16, value: &DecodedValue) -> GeoTiffResult<u32> {
    value.shorts().last().copied().ok_or(GeoTiffError::MalformedTag {
        tag,
        expected: 1,
        found: 0,
    })
}

fn required_doubles(tag: u16, value: &DecodedValue, expected: usize) -> GeoTiffResult<&[f64]> {
    let doubles = value.doubles();
    if doubles.len() < expected {
        return Err(GeoTiffError::MalformedTag {
            tag,
            expected,
            found: doubles.len(),
        });
    }
    Ok(doubles)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn complete() -> GeoInterpreter {
        let mut interpreter = GeoInterpreter::new();
        interpreter.apply(256, &DecodedValue::Shorts(vec![1024])).unwrap();
        interpreter.apply(257, &DecodedValue::Shorts(vec![768])).unwrap();
        interpreter.apply(33550, &DecodedValue::Doubles(vec![0.1, 0.1, 0.0])).unwrap();
        interpreter
            .apply(33922, &DecodedValue::Doubles(vec![0.0, 0.0, 0.0, 6.11667, 50.8549, 0.0]))
            .unwrap();
        interpreter
    }

    #[test]
    fn test_complete_metadata() {
        let meta = complete().finish().unwrap();
        assert_eq!(meta.width, 1024);
        assert_eq!(meta.height, 768);
        assert_eq!(meta.pixel_scale_x, 0.1);
        assert_eq!(meta.pixel_scale_y, 0.1);
        assert_eq!(meta.tie_point_longitude, 6.11667);
        assert_eq!(meta.tie_point_latitude, 50.8549);
        assert_eq!(meta.description, "");
    }

    #[test]
    fn test_last_occurrence_wins() {
        let mut interpreter = complete();
        interpreter.apply(256, &DecodedValue::Shorts(vec![10, 20])).unwrap();
        interpreter.apply(270, &DecodedValue::Ascii(vec!["a".into(), "b".into()])).unwrap();
        interpreter.apply(270, &DecodedValue::Ascii(vec!["EDKA".into()])).unwrap();

        let meta = interpreter.finish().unwrap();
        assert_eq!(meta.width, 20);
        assert_eq!(meta.description, "EDKA");
    }

    #[test]
    fn test_missing_tie_point_reported_first() {
        let mut interpreter = GeoInterpreter::new();
        interpreter.apply(33550, &DecodedValue::Doubles(vec![0.1, 0.1])).unwrap();

        match interpreter.finish() {
            Err(GeoTiffError::MissingTag(33922)) => {}
            other => panic!("expected MissingTag(33922), got {:?}", other),
        }
    }

    #[test]
    fn test_zero_scale_counts_as_missing() {
        let mut interpreter = complete();
        interpreter.apply(33550, &DecodedValue::Doubles(vec![0.1, 0.0])).unwrap();

        match interpreter.finish() {
            Err(GeoTiffError::MissingTag(33550)) => {}
            other => panic!("expected MissingTag(33550), got {:?}", other),
        }
    }

    #[test]
    fn test_zero_height_is_missing() {
        let mut interpreter = complete();
        interpreter.apply(257, &DecodedValue::Shorts(vec![0])).unwrap();

        match interpreter.finish() {
            Err(GeoTiffError::MissingTag(257)) => {}
            other => panic!("expected MissingTag(257), got {:?}", other),
        }
    }

    #[test]
    fn test_short_tie_point_is_malformed() {
        let mut interpreter = GeoInterpreter::new();
        let err = interpreter
            .apply(33922, &DecodedValue::Doubles(vec![0.0, 0.0, 0.0, 6.1]))
            .unwrap_err();

        match err {
            GeoTiffError::MalformedTag { tag, expected, found } => {
                assert_eq!((tag, expected, found), (33922, 5, 4));
            }
            other => panic!("expected MalformedTag, got {:?}", other),
        }
    }

    #[test]
    fn test_undecoded_width_is_malformed() {
        let mut interpreter = GeoInterpreter::new();
        assert!(matches!(
            interpreter.apply(256, &DecodedValue::Empty),
            Err(GeoTiffError::MalformedTag { tag: 256, .. })
        ));
    }
}
