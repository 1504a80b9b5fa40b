//! Resolves loosely typed style names against the known style set.

use crate::models::{KnownStyles, MatchTier, StyleLabel, StyleMatch};

use super::text::normalize_text;

/// A single matching rule. Rules run in [`CASCADE`] order; the first hit wins.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MatchStrategy {
    /// Canonical input equals the canonical label
    Exact,
    /// Canonical input is a substring of the canonical label
    Partial,
    /// First known label
    FirstKnown,
}

/// Strategy order. The last entry always produces a match.
pub const CASCADE: [MatchStrategy; 3] = [
    MatchStrategy::Exact,
    MatchStrategy::Partial,
    MatchStrategy::FirstKnown,
];

impl MatchStrategy {
    /// Applies this rule to already canonicalized input
    pub fn apply(&self, input: &str, styles: &KnownStyles) -> Option<StyleMatch> {
        match self {
            MatchStrategy::Exact => {
                find(styles, |label| label == input).map(|style| matched(style, MatchTier::Exact))
            }
            // Empty input is a substring of everything; it must not count as a hit
            MatchStrategy::Partial if input.is_empty() => None,
            MatchStrategy::Partial => find(styles, |label| label.contains(input))
                .map(|style| matched(style, MatchTier::Partial)),
            MatchStrategy::FirstKnown => Some(matched(styles.first(), MatchTier::Fallback)),
        }
    }
}

fn find<'a>(styles: &'a KnownStyles, predicate: impl Fn(&str) -> bool) -> Option<&'a StyleLabel> {
    styles
        .iter()
        .find(|style| predicate(&normalize_text(style.as_str())))
}

fn matched(style: &StyleLabel, tier: MatchTier) -> StyleMatch {
    StyleMatch {
        style: style.clone(),
        tier,
    }
}

/// Resolves `input` to a known style. Never fails: unmatched text falls back
/// to the first known style with the lowest similarity.
pub fn find_similar_style(input: &str, styles: &KnownStyles) -> StyleMatch {
    let input = normalize_text(input);

    CASCADE
        .iter()
        .find_map(|strategy| strategy.apply(&input, styles))
        .unwrap_or_else(|| matched(styles.first(), MatchTier::Fallback))
}
