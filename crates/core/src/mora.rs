//! Splitting kana readings into morae, one per pitch marker.

/// Small kana that fuse with the preceding kana into a single mora.
const SMALL_KANA: &[char] = &[
    'ゃ', 'ゅ', 'ょ', 'ぁ', 'ぃ', 'ぅ', 'ぇ', 'ぉ', 'ャ', 'ュ', 'ョ', 'ァ', 'ィ', 'ゥ', 'ェ', 'ォ', 'ヮ',
    'ヵ', 'ヶ',
];

/// Sokuon (geminate marker), hiragana and katakana.
const SOKUON: &[char] = &['っ', 'ッ'];

/// Long vowel mark.
const CHOONPU: char = 'ー';

#[must_use]
pub fn is_small_kana(c: char) -> bool {
    SMALL_KANA.contains(&c)
}

#[must_use]
pub fn is_sokuon(c: char) -> bool {
    SOKUON.contains(&c)
}

/// Split a kana reading into morae.
///
/// Small kana and the long vowel mark extend the previous mora; the sokuon is
/// always a mora of its own. A leading small kana or long vowel mark has
/// nothing to attach to and becomes its own mora. No width or script
/// normalization is performed.
///
/// ```
/// use kanji_core::mora::segment;
///
/// assert_eq!(segment("きょう"), vec!["きょ", "う"]);
/// assert_eq!(segment("がっこう"), vec!["が", "っ", "こ", "う"]);
/// ```
#[must_use]
pub fn segment(reading: &str) -> Vec<String> {
    let mut morae: Vec<String> = Vec::new();

    for c in reading.chars() {
        if is_sokuon(c) {
            morae.push(c.to_string());
            continue;
        }

        if is_small_kana(c) || c == CHOONPU {
            if let Some(last) = morae.last_mut() {
                last.push(c);
                continue;
            }
        }

        morae.push(c.to_string());
    }

    morae
}

/// Number of morae in `reading`.
#[must_use]
pub fn count(reading: &str) -> usize {
    segment(reading).len()
}
