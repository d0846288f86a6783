use er_core::EmotionCategory;

const FALLBACK: &[&str] = &["Take time to reflect on your feelings"];

/// Coping and reflection suggestions for a category. Never empty.
pub fn suggestions_for(category: EmotionCategory) -> &'static [&'static str] {
    match category {
        EmotionCategory::Anxious => &[
            "Try deep breathing exercises",
            "Break down the task into smaller steps",
            "Remember past successes you've had",
        ],
        EmotionCategory::Sad => &[
            "It's okay to feel this way",
            "Consider talking to someone you trust",
            "Focus on self-care activities",
        ],
        EmotionCategory::Angry => &[
            "Take a moment to cool down",
            "Try to understand the other perspective",
            "Channel this energy into positive action",
        ],
        EmotionCategory::Happy => &[
            "Enjoy this positive moment",
            "Share your happiness with others",
            "Remember this feeling for tough times",
        ],
        EmotionCategory::Excited => &[
            "Channel this energy productively",
            "Plan your next steps carefully",
            "Share your excitement with others",
        ],
        _ => FALLBACK,
    }
}
