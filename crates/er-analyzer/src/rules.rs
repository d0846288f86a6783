//! Keyword scoring with intensity amplification, plus contextual boosts.

use crate::types::{Lexicon, ScoreMap};
use tracing::trace;

/// Words following a modifier (inclusive) that it can reach.
const MODIFIER_WINDOW: usize = 3;

/// Score every lexicon category against already-normalized text.
///
/// Each trigger phrase contributes `occurrences * weight`. Every modifier word
/// whose window contains the phrase multiplies that contribution again, so
/// several modifiers compound.
pub fn score_keywords(normalized: &str, lexicon: &Lexicon) -> ScoreMap {
    let words: Vec<&str> = normalized.split_whitespace().collect();
    let mut scores = ScoreMap::zeroed(lexicon.categories());

    for (category, keywords) in &lexicon.keywords {
        for keyword in keywords {
            let count = normalized.matches(keyword.as_str()).count();
            if count == 0 {
                continue;
            }
            let mut contribution = count as f64 * lexicon.weights.keyword;

            for (idx, word) in words.iter().enumerate() {
                let Some(multiplier) = lexicon.multiplier(word) else {
                    continue;
                };
                // A repeated modifier always anchors at its first occurrence.
                let anchor = words.iter().position(|w| w == word).unwrap_or(idx);
                if anchor + 1 >= words.len() {
                    continue;
                }
                let end = (anchor + MODIFIER_WINDOW).min(words.len());
                let window = words[anchor..end].join(" ");
                if window.contains(keyword.as_str()) {
                    contribution *= multiplier;
                    trace!(%category, keyword = %keyword, modifier = %word, multiplier, "intensity applied");
                }
            }

            scores.add(*category, contribution);
        }
    }

    scores
}

/// Add a flat boost for every context phrase found in the lowercased raw text.
pub fn apply_context_boosts(text_lower: &str, mut scores: ScoreMap, lexicon: &Lexicon) -> ScoreMap {
    for (category, patterns) in &lexicon.context_patterns {
        let boost: f64 = patterns
            .iter()
            .filter(|p| text_lower.contains(p.as_str()))
            .map(|_| lexicon.weights.context_boost)
            .sum();
        scores.add(*category, boost);
    }
    scores
}
