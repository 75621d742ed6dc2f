use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Spaced-repetition stage of an entry, as reported by the backend.
///
/// The client never computes transitions between stages; it only displays them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum SrsStage {
    Locked,
    Lesson,
    #[serde(rename = "APPRENTICE_1")]
    Apprentice1,
    #[serde(rename = "APPRENTICE_2")]
    Apprentice2,
    #[serde(rename = "APPRENTICE_3")]
    Apprentice3,
    #[serde(rename = "APPRENTICE_4")]
    Apprentice4,
    #[serde(rename = "GURU_1")]
    Guru1,
    #[serde(rename = "GURU_2")]
    Guru2,
    Master,
    Enlightened,
    Burned,
}

impl SrsStage {
    pub const ALL: [SrsStage; 11] = [
        SrsStage::Locked,
        SrsStage::Lesson,
        SrsStage::Apprentice1,
        SrsStage::Apprentice2,
        SrsStage::Apprentice3,
        SrsStage::Apprentice4,
        SrsStage::Guru1,
        SrsStage::Guru2,
        SrsStage::Master,
        SrsStage::Enlightened,
        SrsStage::Burned,
    ];

    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            SrsStage::Locked => "LOCKED",
            SrsStage::Lesson => "LESSON",
            SrsStage::Apprentice1 => "APPRENTICE_1",
            SrsStage::Apprentice2 => "APPRENTICE_2",
            SrsStage::Apprentice3 => "APPRENTICE_3",
            SrsStage::Apprentice4 => "APPRENTICE_4",
            SrsStage::Guru1 => "GURU_1",
            SrsStage::Guru2 => "GURU_2",
            SrsStage::Master => "MASTER",
            SrsStage::Enlightened => "ENLIGHTENED",
            SrsStage::Burned => "BURNED",
        }
    }

    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            SrsStage::Locked => "Locked",
            SrsStage::Lesson => "Lesson",
            SrsStage::Apprentice1 => "Apprentice 1",
            SrsStage::Apprentice2 => "Apprentice 2",
            SrsStage::Apprentice3 => "Apprentice 3",
            SrsStage::Apprentice4 => "Apprentice 4",
            SrsStage::Guru1 => "Guru 1",
            SrsStage::Guru2 => "Guru 2",
            SrsStage::Master => "Master",
            SrsStage::Enlightened => "Enlightened",
            SrsStage::Burned => "Burned",
        }
    }
}

impl fmt::Display for SrsStage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown SRS stage: {raw}")]
pub struct ParseSrsStageError {
    raw: String,
}

impl FromStr for SrsStage {
    type Err = ParseSrsStageError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim();
        SrsStage::ALL
            .into_iter()
            .find(|stage| stage.as_str().eq_ignore_ascii_case(wanted))
            .ok_or_else(|| ParseSrsStageError { raw: s.to_string() })
    }
}
