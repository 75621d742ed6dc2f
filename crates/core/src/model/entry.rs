use chrono::{DateTime, Utc};
use serde::{Deserialize, Deserializer, Serialize};

use crate::model::{EntryId, EntryType, SrsStage};

//
// ─── CONSTITUENT ───────────────────────────────────────────────────────────────
//

/// Short reference to another entry (a component, a compound using it, a look-alike).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Constituent {
    pub id: EntryId,
    pub literal: String,
    pub meaning: String,
    pub entry_type: EntryType,
}

//
// ─── DICTIONARY ENTRY ──────────────────────────────────────────────────────────
//

/// Display content of a radical, kanji, or vocabulary word.
///
/// Only `id`, `literal`, `meaning` and `entry_type` are required on the wire;
/// every other field falls back to its empty value when missing or `null`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DictionaryEntry {
    pub id: EntryId,
    pub literal: String,
    pub meaning: String,
    pub entry_type: EntryType,
    #[serde(default, deserialize_with = "null_as_default")]
    pub kunyomi_readings: Vec<String>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub onyomi_readings: Vec<String>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub reading: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub level: u32,
    #[serde(default, deserialize_with = "null_as_default")]
    pub priority: i32,
    #[serde(default, deserialize_with = "null_as_default")]
    pub constituents: Vec<Constituent>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub meaning_mnemonic: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub reading_mnemonic: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub parts_of_speech: Vec<String>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub explanation: String,
    #[serde(default)]
    pub audio: Option<String>,
    /// One pitch pattern per accepted pronunciation, e.g. `["L", "H", "H", "(L)"]`.
    #[serde(default, deserialize_with = "null_as_default")]
    pub pitch_graphs: Vec<Vec<String>>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub visually_similar: Vec<Constituent>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub used_in: Vec<Constituent>,
}

impl DictionaryEntry {
    /// Minimal entry with every optional field empty.
    #[must_use]
    pub fn new(
        id: EntryId,
        literal: impl Into<String>,
        meaning: impl Into<String>,
        entry_type: EntryType,
    ) -> Self {
        Self {
            id,
            literal: literal.into(),
            meaning: meaning.into(),
            entry_type,
            kunyomi_readings: Vec::new(),
            onyomi_readings: Vec::new(),
            reading: String::new(),
            level: 0,
            priority: 0,
            constituents: Vec::new(),
            meaning_mnemonic: String::new(),
            reading_mnemonic: String::new(),
            parts_of_speech: Vec::new(),
            explanation: String::new(),
            audio: None,
            pitch_graphs: Vec::new(),
            visually_similar: Vec::new(),
            used_in: Vec::new(),
        }
    }

    #[must_use]
    pub fn is_radical(&self) -> bool {
        self.entry_type == EntryType::Radical
    }

    #[must_use]
    pub fn is_kanji(&self) -> bool {
        self.entry_type == EntryType::Kanji
    }

    #[must_use]
    pub fn is_vocab(&self) -> bool {
        self.entry_type == EntryType::Vocab
    }

    #[must_use]
    pub fn has_audio(&self) -> bool {
        self.audio.as_deref().is_some_and(|audio| !audio.is_empty())
    }
}

//
// ─── USER ENTRY ────────────────────────────────────────────────────────────────
//

/// A dictionary entry together with the learner's progress on it.
///
/// This is the unit a study session drills. The backend creates these once per
/// fetch; the client never mutates them.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserEntry {
    pub entry: DictionaryEntry,
    #[serde(default)]
    pub srs_stage: Option<SrsStage>,
    #[serde(default)]
    pub unlocked_at: Option<DateTime<Utc>>,
    #[serde(default)]
    pub next_review_at: Option<DateTime<Utc>>,
    #[serde(default)]
    pub in_plan: bool,
}

impl UserEntry {
    /// Wrap a dictionary entry with no progress information.
    #[must_use]
    pub fn new(entry: DictionaryEntry) -> Self {
        Self {
            entry,
            srs_stage: None,
            unlocked_at: None,
            next_review_at: None,
            in_plan: false,
        }
    }

    #[must_use]
    pub fn with_stage(mut self, stage: SrsStage) -> Self {
        self.srs_stage = Some(stage);
        self
    }

    #[must_use]
    pub fn id(&self) -> EntryId {
        self.entry.id
    }

    #[must_use]
    pub fn is_lesson(&self) -> bool {
        self.srs_stage == Some(SrsStage::Lesson)
    }
}

fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}
