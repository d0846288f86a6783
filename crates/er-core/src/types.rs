use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::ErError;

/// Emotional category assigned to a piece of text.
///
/// The ten lexicon categories are declared in the order the scorer walks them,
/// which is also the tie-break order. `Neutral` is a result-only value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EmotionCategory {
    Happy,
    Sad,
    Angry,
    Anxious,
    Excited,
    Calm,
    Confused,
    Confident,
    Frustrated,
    Peaceful,
    Neutral,
}

impl EmotionCategory {
    /// Lexicon categories in declaration order (no `Neutral`).
    pub const LEXICON: [EmotionCategory; 10] = [
        Self::Happy,
        Self::Sad,
        Self::Angry,
        Self::Anxious,
        Self::Excited,
        Self::Calm,
        Self::Confused,
        Self::Confident,
        Self::Frustrated,
        Self::Peaceful,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Happy => "happy",
            Self::Sad => "sad",
            Self::Angry => "angry",
            Self::Anxious => "anxious",
            Self::Excited => "excited",
            Self::Calm => "calm",
            Self::Confused => "confused",
            Self::Confident => "confident",
            Self::Frustrated => "frustrated",
            Self::Peaceful => "peaceful",
            Self::Neutral => "neutral",
        }
    }

    pub fn is_neutral(&self) -> bool {
        matches!(self, Self::Neutral)
    }
}

impl fmt::Display for EmotionCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for EmotionCategory {
    type Err = ErError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let lower = s.trim().to_lowercase();
        Self::LEXICON
            .iter()
            .chain(std::iter::once(&Self::Neutral))
            .find(|c| c.as_str() == lower)
            .copied()
            .ok_or_else(|| ErError::UnknownCategory(s.to_string()))
    }
}

/// Outcome of a single analysis. Confidence is already rounded to 2 decimals.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct AnalysisResult {
    #[serde(rename = "emotion")]
    pub category: EmotionCategory,
    pub confidence: f64,
}

impl AnalysisResult {
    pub fn new(category: EmotionCategory, confidence: f64) -> Self {
        Self { category, confidence }
    }

    pub fn is_neutral(&self) -> bool {
        self.category.is_neutral()
    }
}
