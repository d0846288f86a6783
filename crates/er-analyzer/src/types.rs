use er_core::EmotionCategory;
use std::collections::HashMap;

/// Lexicon store: trigger phrases, intensity modifiers and context patterns.
///
/// Keyword entries keep their declaration order. The scorer walks them in
/// that order and the selector resolves ties in favour of the earlier one.
#[derive(Debug, Clone)]
pub struct Lexicon {
    pub keywords: Vec<(EmotionCategory, Vec<String>)>,
    pub intensity_modifiers: HashMap<String, f64>,
    pub context_patterns: Vec<(EmotionCategory, Vec<String>)>,
    pub weights: ScoringWeights,
}

/// Fixed weights applied by the scorer and selector.
#[derive(Debug, Clone, Copy)]
pub struct ScoringWeights {
    /// Base score per keyword occurrence.
    pub keyword: f64,
    /// Flat boost per matched context phrase.
    pub context_boost: f64,
    /// Winning score below this falls back to neutral.
    pub neutral_threshold: f64,
}

impl Default for ScoringWeights {
    fn default() -> Self {
        Self { keyword: 0.3, context_boost: 0.2, neutral_threshold: 0.1 }
    }
}

fn clean_phrases(phrases: &[&str]) -> Vec<String> {
    phrases
        .iter()
        .map(|p| p.trim().to_lowercase())
        .filter(|p| !p.is_empty())
        .collect()
}

impl Lexicon {
    /// Build a lexicon from borrowed tables. Phrases are trimmed and lowercased;
    /// empty phrases are dropped. `Neutral` is never accepted as a key.
    pub fn new(
        keywords: &[(EmotionCategory, &[&str])],
        intensity_modifiers: &[(&str, f64)],
        context_patterns: &[(EmotionCategory, &[&str])],
    ) -> Self {
        let keywords = keywords
            .iter()
            .filter(|(c, _)| !c.is_neutral())
            .map(|(c, phrases)| (*c, clean_phrases(phrases)))
            .collect();
        let intensity_modifiers = intensity_modifiers
            .iter()
            .map(|(m, v)| (m.trim().to_lowercase(), *v))
            .filter(|(m, _)| !m.is_empty())
            .collect();
        let context_patterns = context_patterns
            .iter()
            .filter(|(c, _)| !c.is_neutral())
            .map(|(c, phrases)| (*c, clean_phrases(phrases)))
            .collect();
        Self { keywords, intensity_modifiers, context_patterns, weights: ScoringWeights::default() }
    }

    pub fn with_weights(mut self, weights: ScoringWeights) -> Self {
        self.weights = weights;
        self
    }

    /// Categories in declaration order.
    pub fn categories(&self) -> Vec<EmotionCategory> {
        self.keywords.iter().map(|(c, _)| *c).collect()
    }

    pub fn keywords_for(&self, category: EmotionCategory) -> &[String] {
        self.keywords
            .iter()
            .find(|(c, _)| *c == category)
            .map(|(_, k)| k.as_slice())
            .unwrap_or(&[])
    }

    pub fn multiplier(&self, word: &str) -> Option<f64> {
        self.intensity_modifiers.get(word).copied()
    }
}

/// Per-call category scores, in lexicon order.
#[derive(Debug, Clone, PartialEq)]
pub struct ScoreMap {
    scores: Vec<(EmotionCategory, f64)>,
}

impl ScoreMap {
    /// All categories at 0.0.
    pub fn zeroed(categories: impl IntoIterator<Item = EmotionCategory>) -> Self {
        Self { scores: categories.into_iter().map(|c| (c, 0.0)).collect() }
    }

    pub fn get(&self, category: EmotionCategory) -> f64 {
        self.scores
            .iter()
            .find(|(c, _)| *c == category)
            .map(|(_, s)| *s)
            .unwrap_or(0.0)
    }

    /// Add to a category's score. Unknown categories are ignored.
    pub fn add(&mut self, category: EmotionCategory, amount: f64) {
        if let Some((_, s)) = self.scores.iter_mut().find(|(c, _)| *c == category) {
            *s += amount;
        }
    }

    pub fn iter(&self) -> impl Iterator<Item = (EmotionCategory, f64)> + '_ {
        self.scores.iter().copied()
    }

    pub fn len(&self) -> usize {
        self.scores.len()
    }

    pub fn is_empty(&self) -> bool {
        self.scores.is_empty()
    }
}

/// Dominant category and its score. `score` is `None` on the neutral fallback.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Selection {
    pub category: EmotionCategory,
    pub score: Option<f64>,
}
