//! Emotion analyzer — rule-based lexical scoring with intensity modifiers and
//! contextual boosts.

pub mod types;
pub mod lexicon;
pub mod normalize;
pub mod rules;
pub mod selector;
pub mod suggestions;

pub use types::*;
pub use lexicon::{default_lexicon, LEXICON};
pub use normalize::normalize;
pub use rules::{apply_context_boosts, score_keywords};
pub use selector::{confidence, neutral_confidence, select_category};
pub use suggestions::suggestions_for;

use er_core::{AnalysisResult, EmotionCategory};
use rand::Rng;
use std::sync::Arc;
use tracing::debug;

/// Inputs with fewer visible characters than this skip scoring entirely.
const MIN_VISIBLE_CHARS: usize = 3;

/// Lexicon categories in declaration order, without `neutral`.
pub fn list_categories() -> Vec<EmotionCategory> {
    LEXICON.categories()
}

/// Stateless analyzer over a shared, read-only lexicon.
#[derive(Debug, Clone)]
pub struct EmotionAnalyzer {
    lexicon: Arc<Lexicon>,
}

impl Default for EmotionAnalyzer {
    fn default() -> Self {
        Self { lexicon: Arc::clone(&*LEXICON) }
    }
}

impl EmotionAnalyzer {
    pub fn new(lexicon: Arc<Lexicon>) -> Self {
        Self { lexicon }
    }

    pub fn lexicon(&self) -> &Lexicon {
        &self.lexicon
    }

    pub fn categories(&self) -> Vec<EmotionCategory> {
        self.lexicon.categories()
    }

    /// Combined keyword and context scores. Deterministic.
    pub fn score(&self, text: &str) -> ScoreMap {
        let normalized = normalize(text);
        let scores = score_keywords(&normalized, &self.lexicon);
        apply_context_boosts(&text.to_lowercase(), scores, &self.lexicon)
    }

    /// Analyze with the thread-local random source.
    pub fn analyze(&self, text: &str) -> AnalysisResult {
        self.analyze_with_rng(text, &mut rand::thread_rng())
    }

    /// Analyze with a caller-supplied random source for the confidence jitter.
    pub fn analyze_with_rng<R: Rng>(&self, text: &str, rng: &mut R) -> AnalysisResult {
        if normalize::visible_len(text) < MIN_VISIBLE_CHARS {
            debug!("input too short, falling back to neutral");
            return AnalysisResult::new(EmotionCategory::Neutral, neutral_confidence(rng));
        }

        let scores = self.score(text);
        debug!(?scores, "category scores");

        let selection = select_category(&scores, self.lexicon.weights.neutral_threshold);
        let confidence = confidence(
            selection.score.unwrap_or(0.0),
            text.chars().count(),
            selection.category.is_neutral(),
            rng,
        );
        debug!(category = %selection.category, confidence, "analysis complete");

        AnalysisResult::new(selection.category, confidence)
    }

    pub fn suggestions(&self, category: EmotionCategory) -> &'static [&'static str] {
        suggestions_for(category)
    }
}
