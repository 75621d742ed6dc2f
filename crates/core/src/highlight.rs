//! Inline category markup used in mnemonics and explanations.
//!
//! Text such as `"The <radical>sprout</radical> grows"` is split into plain and
//! highlighted spans. Tags never nest: an opening tag sets the active category,
//! any closing tag clears it.

use std::fmt;

/// Semantic category a highlighted span belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum HighlightCategory {
    Radical,
    Kanji,
    Vocab,
    Reading,
}

impl HighlightCategory {
    /// Look up a category by (already lower-cased) tag name.
    #[must_use]
    pub fn from_tag(name: &str) -> Option<Self> {
        match name {
            "radical" => Some(Self::Radical),
            "kanji" => Some(Self::Kanji),
            "vocab" => Some(Self::Vocab),
            "reading" => Some(Self::Reading),
            _ => None,
        }
    }

    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Radical => "radical",
            Self::Kanji => "kanji",
            Self::Vocab => "vocab",
            Self::Reading => "reading",
        }
    }

}

impl fmt::Display for HighlightCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A run of text and the category it should be styled as.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Span {
    pub text: String,
    pub category: Option<HighlightCategory>,
}

impl Span {
    #[must_use]
    pub fn plain(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            category: None,
        }
    }

    #[must_use]
    pub fn highlighted(text: impl Into<String>, category: HighlightCategory) -> Self {
        Self {
            text: text.into(),
            category: Some(category),
        }
    }

    #[must_use]
    pub fn is_highlighted(&self) -> bool {
        self.category.is_some()
    }
}

#[derive(Debug, PartialEq, Eq)]
enum Token<'a> {
    Open(&'a str),
    Close,
    Text(&'a str),
}

/// Tokenizer over `<tag>`, `</tag>` and runs of non-`<` text.
///
/// A `<` that does not start a well-formed tag (no closing `>`, or nothing
/// between the brackets) is skipped.
struct Tokens<'a> {
    rest: &'a str,
}

impl<'a> Tokens<'a> {
    fn new(text: &'a str) -> Self {
        Self { rest: text }
    }
}

impl<'a> Iterator for Tokens<'a> {
    type Item = Token<'a>;

    fn next(&mut self) -> Option<Token<'a>> {
        loop {
            if self.rest.is_empty() {
                return None;
            }

            let Some(after_lt) = self.rest.strip_prefix('<') else {
                let end = self.rest.find('<').unwrap_or(self.rest.len());
                let (text, rest) = self.rest.split_at(end);
                self.rest = rest;
                return Some(Token::Text(text));
            };

            match after_lt.find('>') {
                Some(inner_len) if inner_len > 0 => {
                    let inner = &after_lt[..inner_len];
                    let tag = &self.rest[..inner_len + 2];
                    self.rest = &after_lt[inner_len + 1..];
                    return Some(classify(tag, inner));
                }
                _ => {
                    self.rest = after_lt;
                }
            }
        }
    }
}

fn classify<'a>(tag: &'a str, inner: &'a str) -> Token<'a> {
    match inner.strip_prefix('/') {
        Some(name) if !name.is_empty() => Token::Close,
        Some(_) => Token::Text(tag),
        None if inner.contains('/') => Token::Text(tag),
        None => Token::Open(inner),
    }
}

/// Parse highlight markup into spans.
///
/// Unknown tag names and mismatched closing tags are tolerated: text inside an
/// unknown tag is plain, and any closing tag ends the current highlight.
/// Text after an unclosed tag keeps that tag's category to the end.
#[must_use]
pub fn parse(text: &str) -> Vec<Span> {
    let mut spans = Vec::new();
    let mut active: Option<String> = None;

    for token in Tokens::new(text) {
        match token {
            Token::Open(name) => active = Some(name.to_lowercase()),
            Token::Close => active = None,
            Token::Text(run) => {
                let category = active.as_deref().and_then(HighlightCategory::from_tag);
                spans.push(Span {
                    text: run.to_string(),
                    category,
                });
            }
        }
    }

    spans
}

/// Concatenate span text, dropping all markup.
#[must_use]
pub fn strip(text: &str) -> String {
    parse(text).into_iter().map(|span| span.text).collect()
}
