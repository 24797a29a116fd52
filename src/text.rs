//! Text transforms driven by the style descriptor: word simplification and
//! difficult-pattern highlighting.

use std::collections::BTreeMap;

use itertools::Itertools;
use serde::Serialize;

use crate::style::StyleDescriptor;

/// Letter patterns that trip up struggling readers. Longer patterns come
/// first so they win when several start at the same position.
const DIFFICULT_PATTERNS: &[&str] = &["ough", "tion", "ph", "gh", "ei", "ie"];

const BUILTIN_SYNONYMS: &[(&str, &str)] = &[
    ("approximately", "about"),
    ("assistance", "help"),
    ("commence", "start"),
    ("comprehend", "understand"),
    ("demonstrate", "show"),
    ("facilitate", "help"),
    ("numerous", "many"),
    ("subsequently", "later"),
    ("sufficient", "enough"),
    ("utilize", "use"),
];

/// Complex word to simpler synonym, keyed in lowercase.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Lexicon {
    entries: BTreeMap<String, String>,
}

impl Lexicon {
    pub fn builtin() -> Self {
        Self::from_pairs(BUILTIN_SYNONYMS.iter().copied())
    }

    pub fn from_pairs<I, K, V>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: AsRef<str>,
        V: Into<String>,
    {
        let entries = pairs
            .into_iter()
            .map(|(k, v)| (k.as_ref().to_lowercase(), v.into()))
            .collect();
        Self { entries }
    }

    pub fn lookup(&self, word: &str) -> Option<&str> {
        self.entries.get(&word.to_lowercase()).map(String::as_str)
    }
}

fn match_case(original: &str, replacement: &str) -> String {
    let mut chars = original.chars();
    let first_upper = chars.next().is_some_and(char::is_uppercase);
    let all_upper = first_upper && original.chars().count() > 1 && chars.all(char::is_uppercase);
    if all_upper {
        return replacement.to_uppercase();
    }
    if first_upper {
        let mut out = String::with_capacity(replacement.len());
        let mut rc = replacement.chars();
        if let Some(c) = rc.next() {
            out.extend(c.to_uppercase());
        }
        out.push_str(rc.as_str());
        return out;
    }
    replacement.to_string()
}

/// Replace whole words found in `lexicon`. Everything that is not part of
/// an alphabetic run is copied through unchanged.
pub fn simplify_words(text: &str, lexicon: &Lexicon) -> String {
    let mut out = String::with_capacity(text.len());
    let mut word_start: Option<usize> = None;

    let flush = |out: &mut String, word: &str| match lexicon.lookup(word) {
        Some(simple) => out.push_str(&match_case(word, simple)),
        None => out.push_str(word),
    };

    for (i, c) in text.char_indices() {
        if c.is_alphabetic() {
            word_start.get_or_insert(i);
            continue;
        }
        if let Some(start) = word_start.take() {
            flush(&mut out, &text[start..i]);
        }
        out.push(c);
    }
    if let Some(start) = word_start {
        flush(&mut out, &text[start..]);
    }
    out
}

/// Byte range of a highlighted pattern.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct PatternSpan {
    pub start: usize,
    pub end: usize,
    pub pattern: &'static str,
}

/// Non-overlapping pattern matches, left to right, case-insensitive.
pub fn difficult_patterns(text: &str) -> Vec<PatternSpan> {
    let bytes = text.as_bytes();
    let mut spans = Vec::new();
    let mut i = 0;
    while i < bytes.len() {
        let hit = DIFFICULT_PATTERNS.iter().find(|p| {
            let end = i + p.len();
            end <= bytes.len() && bytes[i..end].eq_ignore_ascii_case(p.as_bytes())
        });
        match hit {
            Some(p) => {
                spans.push(PatternSpan {
                    start: i,
                    end: i + p.len(),
                    pattern: *p,
                });
                i += p.len();
            }
            None => i += 1,
        }
    }
    spans
}

/// Output of [`render_text`]. Highlights are ordered, non-overlapping and
/// index into `text`; only this module builds one.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RenderedText {
    text: String,
    highlights: Vec<PatternSpan>,
}

impl RenderedText {
    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn highlights(&self) -> &[PatternSpan] {
        &self.highlights
    }

    /// The text with each highlight wrapped in `open`/`close`.
    pub fn marked(&self, open: &str, close: &str) -> String {
        let mut cursor = 0;
        let pieces = self.highlights.iter().flat_map(|span| {
            let before = &self.text[cursor..span.start.max(cursor)];
            let inner = &self.text[span.start..span.end];
            cursor = span.end;
            [before, open, inner, close]
        });
        let mut out = pieces.collect::<Vec<_>>().concat();
        out.push_str(&self.text[cursor..]);
        out
    }

    /// Distinct patterns present, in first-seen order.
    pub fn patterns(&self) -> Vec<&'static str> {
        self.highlights.iter().map(|s| s.pattern).unique().collect()
    }
}

/// Apply the descriptor's text directives. Highlights refer to the
/// simplified text when both are on.
pub fn render_text(text: &str, style: &StyleDescriptor, lexicon: &Lexicon) -> RenderedText {
    let text = if style.simplify_words {
        simplify_words(text, lexicon)
    } else {
        text.to_string()
    };
    let highlights = if style.highlight_patterns {
        difficult_patterns(&text)
    } else {
        Vec::new()
    };
    RenderedText { text, highlights }
}
