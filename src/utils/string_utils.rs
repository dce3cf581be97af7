//! String utility functions
//!
//! Utilities for working with strings and text data.

/// Decodes Latin-1 bytes; every byte maps to the code point of the same value
pub fn latin1_to_string(bytes: &[u8]) -> String {
    bytes.iter().map(|&b| b as char).collect()
}

/// Splits a TIFF ASCII value into its NUL-separated Latin-1 segments
///
/// A terminating NUL closes the last segment. Without one, the bytes after
/// the last NUL still form a segment, so "abc" gives one segment and
/// "a\0b\0" gives two.
pub fn split_latin1_segments(buffer: &[u8]) -> Vec<String> {
    let mut segments: Vec<String> = buffer.split(|&b| b == 0).map(latin1_to_string).collect();

    if buffer.last() == Some(&0) {
        segments.pop();
    }

    segments
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_latin1_high_bytes() {
        assert_eq!(latin1_to_string(&[0x4B, 0xF6, 0x6C, 0x6E]), "Köln");
    }

    #[test]
    fn test_segment_without_terminator() {
        assert_eq!(split_latin1_segments(b"EDKA"), vec!["EDKA"]);
    }

    #[test]
    fn test_terminated_segment_has_no_empty_tail() {
        assert_eq!(split_latin1_segments(b"EDKA\0"), vec!["EDKA"]);
    }

    #[test]
    fn test_unterminated_tail_segment() {
        assert_eq!(split_latin1_segments(b"first\0second"), vec!["first", "second"]);
    }

    #[test]
    fn test_consecutive_nuls() {
        assert_eq!(split_latin1_segments(b"a\0\0"), vec!["a", ""]);
        assert_eq!(split_latin1_segments(b"\0"), vec![String::new()]);
    }
}
