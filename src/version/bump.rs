//! Version transitions
//!
//! Five pure transitions over `ParsedVersion`. All five are total: given
//! a valid version they cannot fail. No transition keeps state beyond
//! the version it is handed.

use super::parse::ParsedVersion;

/// A named version transition.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Bump {
    /// Increment patch, clear the test identifier
    Patch,
    /// Increment minor, reset patch, clear the test identifier
    Minor,
    /// Increment major, reset minor and patch, clear the test identifier
    Major,
    /// Add or advance the single-letter test identifier
    Test,
    /// Strip the test identifier and bump patch; no-op without one
    Release,
}

impl Bump {
    /// Applies the transition, producing the next version.
    pub fn apply(self, v: ParsedVersion) -> ParsedVersion {
        match self {
            Bump::Patch => ParsedVersion {
                patch: v.patch.saturating_add(1),
                test_id: None,
                ..v
            },
            Bump::Minor => ParsedVersion {
                minor: v.minor.saturating_add(1),
                patch: 0,
                test_id: None,
                ..v
            },
            // minor and patch reset unconditionally, even when already zero
            Bump::Major => ParsedVersion {
                major: v.major.saturating_add(1),
                minor: 0,
                patch: 0,
                test_id: None,
            },
            Bump::Test => ParsedVersion {
                test_id: Some(next_test_id(v.test_id)),
                ..v
            },
            Bump::Release => match v.test_id {
                // Stripping the test identifier counts as a patch release
                Some(_) => ParsedVersion {
                    patch: v.patch.saturating_add(1),
                    test_id: None,
                    ..v
                },
                // Nothing to release; the version is already final
                None => v,
            },
        }
    }
}

/// Next identifier in the A-Z cycle. `None` starts at 'A'; 'Z' wraps
/// back to 'A', reusing earlier labels.
fn next_test_id(current: Option<char>) -> char {
    match current {
        None | Some('Z') => 'A',
        Some(c) => (c as u8 + 1) as char,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn v(s: &str) -> ParsedVersion {
        ParsedVersion::parse(s).unwrap()
    }

    #[test]
    fn test_patch_bump_clears_test_id() {
        assert_eq!(Bump::Patch.apply(v("1.0.0")).to_string(), "1.0.1");
        assert_eq!(Bump::Patch.apply(v("1.0.0-D")).to_string(), "1.0.1");
    }

    #[test]
    fn test_minor_bump_resets_patch() {
        assert_eq!(Bump::Minor.apply(v("1.2.3")).to_string(), "1.3.0");
        assert_eq!(Bump::Minor.apply(v("1.2.3-B")).to_string(), "1.3.0");
    }

    #[test]
    fn test_major_bump_resets_minor_and_patch() {
        assert_eq!(Bump::Major.apply(v("1.2.3")).to_string(), "2.0.0");
        assert_eq!(Bump::Major.apply(v("1.0.0")).to_string(), "2.0.0");
        assert_eq!(Bump::Major.apply(v("3.0.9-F")).to_string(), "4.0.0");
    }

    #[test]
    fn test_first_test_id_is_a() {
        assert_eq!(Bump::Test.apply(v("1.0.0")).to_string(), "1.0.0-A");
    }

    #[test]
    fn test_test_id_advances() {
        assert_eq!(Bump::Test.apply(v("1.0.0-A")).to_string(), "1.0.0-B");
        assert_eq!(Bump::Test.apply(v("1.0.0-Y")).to_string(), "1.0.0-Z");
    }

    #[test]
    fn test_test_id_wraps_z_to_a() {
        assert_eq!(Bump::Test.apply(v("1.0.0-Z")).to_string(), "1.0.0-A");
    }

    #[test]
    fn test_test_cycle_has_period_26() {
        let mut cur = v("1.0.0");
        for _ in 0..26 {
            cur = Bump::Test.apply(cur);
        }
        assert_eq!(cur.to_string(), "1.0.0-Z");
        assert_eq!(Bump::Test.apply(cur).to_string(), "1.0.0-A");
    }

    #[test]
    fn test_release_strips_test_id_and_bumps_patch() {
        assert_eq!(Bump::Release.apply(v("1.0.0-C")).to_string(), "1.0.1");
        assert_eq!(Bump::Release.apply(v("2.5.9-Z")).to_string(), "2.5.10");
    }

    #[test]
    fn test_release_without_test_id_is_fixed_point() {
        let version = v("1.0.0");
        assert_eq!(Bump::Release.apply(version), version);
    }

    #[test]
    fn test_numeric_bumps_saturate_at_component_limit() {
        let max = u64::MAX.to_string();

        let v = Bump::Patch.apply(ParsedVersion::parse(&format!("1.0.{}", max)).unwrap());
        assert_eq!(v.patch, u64::MAX);

        let v = Bump::Minor.apply(ParsedVersion::parse(&format!("1.{}.0", max)).unwrap());
        assert_eq!((v.minor, v.patch), (u64::MAX, 0));

        let v = Bump::Major.apply(ParsedVersion::parse(&format!("{}.0.0", max)).unwrap());
        assert_eq!((v.major, v.minor, v.patch), (u64::MAX, 0, 0));

        let v = Bump::Release.apply(ParsedVersion::parse(&format!("1.0.{}-C", max)).unwrap());
        assert_eq!((v.patch, v.test_id), (u64::MAX, None));
    }

    #[test]
    fn test_numeric_bumps_never_yield_test_id() {
        for bump in [Bump::Patch, Bump::Minor, Bump::Major] {
            assert_eq!(bump.apply(v("1.2.3-C")).test_id, None);
        }
    }
}
