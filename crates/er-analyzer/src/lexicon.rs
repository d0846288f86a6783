//! Default English lexicon, intensity modifiers and context patterns.

use crate::types::Lexicon;
use er_core::EmotionCategory::{self, *};
use std::sync::{Arc, LazyLock};

const KEYWORDS: &[(EmotionCategory, &[&str])] = &[
    (Happy, &[
        "happy", "joy", "excited", "great", "awesome", "wonderful", "amazing",
        "fantastic", "good", "excellent", "love", "celebrate", "cheerful",
    ]),
    (Sad, &[
        "sad", "depressed", "down", "unhappy", "disappointed", "hurt", "cry",
        "tears", "lonely", "empty", "grief", "sorrow",
    ]),
    (Angry, &[
        "angry", "mad", "furious", "rage", "irritated", "annoyed", "frustrated",
        "hate", "disgusted", "outraged",
    ]),
    (Anxious, &[
        "anxious", "nervous", "worried", "stress", "panic", "fear", "scared",
        "overwhelmed", "tense", "uneasy",
    ]),
    (Excited, &[
        "excited", "thrilled", "pumped", "enthusiastic", "eager", "anticipate",
        "can't wait", "looking forward",
    ]),
    (Calm, &[
        "calm", "peaceful", "relaxed", "serene", "tranquil", "quiet", "still",
        "composed", "balanced",
    ]),
    (Confused, &[
        "confused", "puzzled", "lost", "uncertain", "unsure", "don't know",
        "unclear", "mixed up",
    ]),
    (Confident, &[
        "confident", "sure", "certain", "strong", "capable", "ready", "prepared",
        "determined",
    ]),
    (Frustrated, &[
        "frustrated", "stuck", "blocked", "annoyed", "irritated", "fed up", "tired of",
    ]),
    (Peaceful, &[
        "peaceful", "content", "satisfied", "at ease", "harmonious", "balanced", "centered",
    ]),
];

// Multi-word modifiers never match a single word; kept as table data.
const INTENSITY_MODIFIERS: &[(&str, f64)] = &[
    ("very", 1.3),
    ("extremely", 1.5),
    ("really", 1.2),
    ("quite", 1.1),
    ("somewhat", 0.8),
    ("slightly", 0.6),
    ("a bit", 0.7),
    ("super", 1.4),
    ("incredibly", 1.5),
    ("totally", 1.3),
];

const CONTEXT_PATTERNS: &[(EmotionCategory, &[&str])] = &[
    (Anxious, &["job interview", "presentation", "exam", "test", "meeting", "first day", "new job"]),
    (Excited, &["vacation", "trip", "party", "celebration", "promotion", "new opportunity"]),
    (Sad, &["loss", "breakup", "end", "goodbye", "miss", "alone"]),
    (Angry, &["unfair", "injustice", "betrayed", "lied", "cheated"]),
    (Confident, &["ready", "prepared", "bring it on", "can do", "will succeed"]),
    (Frustrated, &["stuck", "not working", "trying", "attempt", "effort"]),
];

/// Build the default lexicon.
pub fn default_lexicon() -> Lexicon {
    Lexicon::new(KEYWORDS, INTENSITY_MODIFIERS, CONTEXT_PATTERNS)
}

/// The process-wide default lexicon, built on first use.
pub static LEXICON: LazyLock<Arc<Lexicon>> = LazyLock::new(|| Arc::new(default_lexicon()));
