//! Aligning pitch-accent patterns with the morae of a reading.

use crate::mora;

/// Relative pitch of one mora.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PitchLevel {
    High,
    Low,
}

impl PitchLevel {
    /// `"H"` is high; every other token (`"L"`, `"(L)"`, ...) is low.
    #[must_use]
    pub fn from_token(token: &str) -> Self {
        if token == "H" { Self::High } else { Self::Low }
    }
}

/// One marker on a pitch graph.
///
/// `mora` is `None` for markers past the end of the word, which describe the
/// pitch of a following particle.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PitchMark {
    pub mora: Option<String>,
    pub level: PitchLevel,
}

/// Pair each pattern token with the mora it belongs to.
///
/// ```
/// use kanji_core::pitch::{PitchLevel, contour};
///
/// let marks = contour("はし", &["L", "H", "(L)"]);
/// assert_eq!(marks.len(), 3);
/// assert_eq!(marks[1].mora.as_deref(), Some("し"));
/// assert_eq!(marks[2].mora, None);
/// assert_eq!(marks[2].level, PitchLevel::Low);
/// ```
#[must_use]
pub fn contour<S: AsRef<str>>(reading: &str, pattern: &[S]) -> Vec<PitchMark> {
    let mut morae = mora::segment(reading).into_iter();
    pattern
        .iter()
        .map(|token| PitchMark {
            mora: morae.next(),
            level: PitchLevel::from_token(token.as_ref()),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn aligns_one_mark_per_mora() {
        let marks = contour("きょう", &["H", "L"]);
        assert_eq!(
            marks,
            vec![
                PitchMark {
                    mora: Some("きょ".into()),
                    level: PitchLevel::High,
                },
                PitchMark {
                    mora: Some("う".into()),
                    level: PitchLevel::Low,
                },
            ]
        );
    }

    #[test]
    fn trailing_particle_mark_has_no_mora() {
        let marks = contour("さかな", &["L", "H", "H", "(L)"]);
        assert_eq!(marks.len(), 4);
        assert_eq!(marks[3].mora, None);
        assert_eq!(marks[3].level, PitchLevel::Low);
    }

    #[test]
    fn short_pattern_leaves_morae_unmarked() {
        let marks = contour("ともだち", &["L", "H"]);
        assert_eq!(marks.len(), 2);
    }
}
