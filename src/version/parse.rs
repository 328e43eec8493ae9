//! Version string parsing and formatting
//!
//! Accepted grammar: `<digits>.<digits>.<digits>` with an optional
//! `-<letter>` suffix, where the letter is a single uppercase A-Z test
//! identifier. The grammar is checked explicitly, segment by segment,
//! so the accepted language is exactly what this module spells out.

use std::fmt;

use super::errors::{VersionError, VersionResult};

/// A version string in structured form.
///
/// Invariant: `test_id` is `None` or a single `'A'..='Z'` character.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ParsedVersion {
    pub major: u64,
    pub minor: u64,
    pub patch: u64,
    pub test_id: Option<char>,
}

impl ParsedVersion {
    /// Parses a canonical version string.
    ///
    /// # Errors
    ///
    /// Returns `VersionError::InvalidFormat` unless the input matches
    /// `<digits>.<digits>.<digits>` with an optional `-<A-Z>` suffix.
    pub fn parse(text: &str) -> VersionResult<Self> {
        let (core, test_id) = match text.split_once('-') {
            Some((core, suffix)) => {
                let mut chars = suffix.chars();
                match (chars.next(), chars.next()) {
                    (Some(c), None) if c.is_ascii_uppercase() => (core, Some(c)),
                    _ => return Err(VersionError::invalid_format(text)),
                }
            }
            None => (text, None),
        };

        let mut segments = core.split('.');
        let major = parse_segment(segments.next(), text)?;
        let minor = parse_segment(segments.next(), text)?;
        let patch = parse_segment(segments.next(), text)?;
        if segments.next().is_some() {
            return Err(VersionError::invalid_format(text));
        }

        Ok(Self {
            major,
            minor,
            patch,
            test_id,
        })
    }
}

/// Parses one dotted segment as a base-10 non-negative integer.
/// Digit-only content is the whole requirement.
fn parse_segment(segment: Option<&str>, text: &str) -> VersionResult<u64> {
    let segment = segment.ok_or_else(|| VersionError::invalid_format(text))?;
    if segment.is_empty() || !segment.bytes().all(|b| b.is_ascii_digit()) {
        return Err(VersionError::invalid_format(text));
    }
    segment
        .parse()
        .map_err(|_| VersionError::invalid_format(text))
}

impl fmt::Display for ParsedVersion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{}.{}", self.major, self.minor, self.patch)?;
        if let Some(id) = self.test_id {
            write!(f, "-{}", id)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_plain_version() {
        let v = ParsedVersion::parse("1.2.3").unwrap();
        assert_eq!((v.major, v.minor, v.patch, v.test_id), (1, 2, 3, None));
    }

    #[test]
    fn test_parse_test_suffix() {
        let v = ParsedVersion::parse("1.0.0-A").unwrap();
        assert_eq!((v.major, v.minor, v.patch), (1, 0, 0));
        assert_eq!(v.test_id, Some('A'));
    }

    #[test]
    fn test_round_trip_of_canonical_strings() {
        for s in ["0.0.0", "1.2.3", "10.20.30", "1.0.0-A", "1.0.0-Z", "123.0.7-Q"] {
            assert_eq!(ParsedVersion::parse(s).unwrap().to_string(), s);
        }
    }

    #[test]
    fn test_rejects_malformed_input() {
        let bad = [
            "", "1", "1.2", "1.2.3.4", "v1.2.3", "1.2.x", "1..3", "1.2.3-", "1.2.3-a",
            "1.2.3-AB", "1.2.3-1", " 1.2.3", "1.2.3 ", "-A", "1.-2.3",
        ];
        for s in bad {
            assert!(ParsedVersion::parse(s).is_err(), "accepted {:?}", s);
        }
    }

    #[test]
    fn test_leading_zeros_parse_as_plain_integers() {
        let v = ParsedVersion::parse("01.002.0").unwrap();
        assert_eq!((v.major, v.minor, v.patch), (1, 2, 0));
    }
}
