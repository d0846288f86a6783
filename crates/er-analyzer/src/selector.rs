//! Dominant-category selection and confidence.

use crate::types::{ScoreMap, Selection};
use er_core::EmotionCategory;
use rand::Rng;

/// Pick the highest-scoring category. Ties keep the earlier category;
/// anything below `threshold` becomes neutral.
pub fn select_category(scores: &ScoreMap, threshold: f64) -> Selection {
    let mut best: Option<(EmotionCategory, f64)> = None;
    for (category, score) in scores.iter() {
        match best {
            Some((_, top)) if score <= top => {}
            _ => best = Some((category, score)),
        }
    }

    match best {
        Some((category, score)) if score >= threshold => Selection { category, score: Some(score) },
        _ => Selection { category: EmotionCategory::Neutral, score: None },
    }
}

fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

/// Confidence for the neutral fallback: uniform in [0.3, 0.6].
pub fn neutral_confidence<R: Rng>(rng: &mut R) -> f64 {
    round2(rng.gen_range(0.3..=0.6))
}

/// Confidence from the winning score and the input's character count.
///
/// Returns a value in [0.1, 0.95], or [0.3, 0.6] when `is_neutral`.
pub fn confidence<R: Rng>(max_score: f64, text_len: usize, is_neutral: bool, rng: &mut R) -> f64 {
    if is_neutral {
        return neutral_confidence(rng);
    }
    let length_factor = (text_len as f64 / 100.0).min(1.0);
    let raw = (max_score + length_factor * 0.2).min(1.0);
    let jittered = raw + rng.gen_range(-0.05..=0.05);
    round2(jittered.clamp(0.1, 0.95))
}
