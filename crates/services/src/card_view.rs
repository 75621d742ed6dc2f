//! Presentation-agnostic content of a study card.
//!
//! No markup and no styling: the UI decides how each section looks.

use chrono::{DateTime, Utc};

use kanji_core::highlight::{self, Span};
use kanji_core::model::{Constituent, EntryType, SrsStage, UserEntry};
use kanji_core::pitch::{self, PitchMark};

/// One titled block on the card.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CardSection {
    PartsOfSpeech(Vec<String>),
    Meaning(String),
    Readings {
        kunyomi: Vec<String>,
        onyomi: Vec<String>,
        reading: Option<String>,
    },
    MeaningMnemonic(Vec<Span>),
    ReadingMnemonic(Vec<Span>),
    Constituents(Vec<Constituent>),
    Explanation(Vec<Span>),
    Audio(String),
    /// One contour per accepted pronunciation.
    PitchAccent(Vec<Vec<PitchMark>>),
    UsedIn(Vec<Constituent>),
    VisuallySimilar(Vec<Constituent>),
    SrsStage(Option<SrsStage>),
    NextReview(Option<DateTime<Utc>>),
}

impl CardSection {
    #[must_use]
    pub fn title(&self) -> &'static str {
        match self {
            CardSection::PartsOfSpeech(_) => "Parts of speech",
            CardSection::Meaning(_) => "Meaning",
            CardSection::Readings { .. } => "Readings",
            CardSection::MeaningMnemonic(_) => "Meaning mnemonic",
            CardSection::ReadingMnemonic(_) => "Reading mnemonic",
            CardSection::Constituents(_) => "Constituents",
            CardSection::Explanation(_) => "Explanation",
            CardSection::Audio(_) => "Audio",
            CardSection::PitchAccent(_) => "Pitch Accent",
            CardSection::UsedIn(_) => "Used In",
            CardSection::VisuallySimilar(_) => "Visually Similar",
            CardSection::SrsStage(_) => "SRS Stage",
            CardSection::NextReview(_) => "Next Review",
        }
    }
}

/// Everything the UI needs to draw one side of a card.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CardView {
    pub literal: String,
    pub entry_type: EntryType,
    pub revealed: bool,
    pub sections: Vec<CardSection>,
}

impl CardView {
    /// Build the front (`revealed == false`) or back of the card for `ude`.
    ///
    /// Sections with nothing to show are left out, except the SRS stage and
    /// next review time which always appear on the back.
    #[must_use]
    pub fn build(ude: &UserEntry, revealed: bool) -> Self {
        let entry = &ude.entry;
        let mut sections = Vec::new();

        if !revealed {
            if entry.is_vocab() && !entry.parts_of_speech.is_empty() {
                sections.push(CardSection::PartsOfSpeech(entry.parts_of_speech.clone()));
            }
        } else {
            sections.push(CardSection::Meaning(entry.meaning.clone()));

            let reading = (!entry.reading.is_empty()).then(|| entry.reading.clone());
            if !entry.kunyomi_readings.is_empty()
                || !entry.onyomi_readings.is_empty()
                || reading.is_some()
            {
                sections.push(CardSection::Readings {
                    kunyomi: entry.kunyomi_readings.clone(),
                    onyomi: entry.onyomi_readings.clone(),
                    reading,
                });
            }

            if !entry.meaning_mnemonic.is_empty() {
                sections.push(CardSection::MeaningMnemonic(highlight::parse(
                    &entry.meaning_mnemonic,
                )));
            }
            if !entry.reading_mnemonic.is_empty() {
                sections.push(CardSection::ReadingMnemonic(highlight::parse(
                    &entry.reading_mnemonic,
                )));
            }
            if !entry.constituents.is_empty() {
                sections.push(CardSection::Constituents(entry.constituents.clone()));
            }
            if !entry.explanation.is_empty() {
                sections.push(CardSection::Explanation(highlight::parse(&entry.explanation)));
            }
            if let Some(audio) = entry.audio.as_ref().filter(|_| entry.has_audio()) {
                sections.push(CardSection::Audio(audio.clone()));
            }
            if entry.is_vocab() && !entry.pitch_graphs.is_empty() {
                let contours = entry
                    .pitch_graphs
                    .iter()
                    .map(|pattern| pitch::contour(&entry.reading, pattern))
                    .collect();
                sections.push(CardSection::PitchAccent(contours));
            }
            if !entry.used_in.is_empty() {
                sections.push(CardSection::UsedIn(entry.used_in.clone()));
            }
            if !entry.visually_similar.is_empty() {
                sections.push(CardSection::VisuallySimilar(entry.visually_similar.clone()));
            }
            sections.push(CardSection::SrsStage(ude.srs_stage));
            sections.push(CardSection::NextReview(ude.next_review_at));
        }

        Self {
            literal: entry.literal.clone(),
            entry_type: entry.entry_type,
            revealed,
            sections,
        }
    }

    /// Look up a section by its title.
    #[must_use]
    pub fn section(&self, title: &str) -> Option<&CardSection> {
        self.sections.iter().find(|section| section.title() == title)
    }

    /// Section titles in display order.
    #[must_use]
    pub fn titles(&self) -> Vec<&'static str> {
        self.sections.iter().map(CardSection::title).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use kanji_core::highlight::HighlightCategory;
    use kanji_core::model::{DictionaryEntry, EntryId};
    use kanji_core::pitch::PitchLevel;

    fn vocab() -> UserEntry {
        let mut entry = DictionaryEntry::new(EntryId::new(5), "今日", "today", EntryType::Vocab);
        entry.reading = "きょう".into();
        entry.parts_of_speech = vec!["noun".into(), "adverb".into()];
        entry.meaning_mnemonic = "The <kanji>now</kanji> <vocab>day</vocab>".into();
        entry.pitch_graphs = vec![vec!["H".into(), "L".into(), "(L)".into()]];
        entry.constituents = vec![Constituent {
            id: EntryId::new(2),
            literal: "今".into(),
            meaning: "now".into(),
            entry_type: EntryType::Kanji,
        }];
        UserEntry::new(entry).with_stage(SrsStage::Guru1)
    }

    #[test]
    fn front_shows_parts_of_speech_for_vocab_only() {
        let view = CardView::build(&vocab(), false);
        assert_eq!(view.literal, "今日");
        assert_eq!(view.titles(), vec!["Parts of speech"]);

        let kanji = UserEntry::new(DictionaryEntry::new(
            EntryId::new(1),
            "木",
            "tree",
            EntryType::Kanji,
        ));
        assert!(CardView::build(&kanji, false).sections.is_empty());
    }

    #[test]
    fn back_lists_populated_sections_in_order() {
        let view = CardView::build(&vocab(), true);
        assert_eq!(
            view.titles(),
            vec![
                "Meaning",
                "Readings",
                "Meaning mnemonic",
                "Constituents",
                "Pitch Accent",
                "SRS Stage",
                "Next Review",
            ]
        );
        assert_eq!(
            view.section("SRS Stage"),
            Some(&CardSection::SrsStage(Some(SrsStage::Guru1)))
        );
    }

    #[test]
    fn mnemonics_are_parsed_into_spans() {
        let view = CardView::build(&vocab(), true);
        let Some(CardSection::MeaningMnemonic(spans)) = view.section("Meaning mnemonic") else {
            panic!("missing mnemonic");
        };
        assert_eq!(
            spans,
            &vec![
                Span::plain("The "),
                Span::highlighted("now", HighlightCategory::Kanji),
                Span::plain(" "),
                Span::highlighted("day", HighlightCategory::Vocab),
            ]
        );
    }

    #[test]
    fn pitch_contours_follow_morae() {
        let view = CardView::build(&vocab(), true);
        let Some(CardSection::PitchAccent(contours)) = view.section("Pitch Accent") else {
            panic!("missing pitch accent");
        };
        assert_eq!(contours.len(), 1);
        let contour = &contours[0];
        assert_eq!(contour[0].mora.as_deref(), Some("きょ"));
        assert_eq!(contour[0].level, PitchLevel::High);
        assert_eq!(contour[1].mora.as_deref(), Some("う"));
        assert_eq!(contour[2].mora, None);
    }
}
