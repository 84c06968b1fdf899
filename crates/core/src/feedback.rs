//! Band-keyed feedback generation.

use serde::{Deserialize, Serialize};

/// Per-answer feedback returned to the candidate. Constructed fresh for each
/// submission and never persisted.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Feedback {
    pub score: u32,
    pub comment: String,
    pub suggestions: Vec<String>,
    pub correct_answer: String,
}

/// Maps a score to a comment and improvement suggestions.
///
/// Purely a function of the score band; the candidate text never influences
/// the wording. All four thresholds are implemented even though the keyword
/// scorer only produces 3, 5, 7 and 9.
pub fn feedback_for(score: u32, reference_answer: &str) -> Feedback {
    let (comment, suggestions) = if score >= 8 {
        (
            "Excellent answer! You understand the concept well.",
            ["Add practical examples", "Consider edge cases"],
        )
    } else if score >= 6 {
        (
            "Good answer, but there is room for improvement.",
            ["Add more detail", "Provide code examples"],
        )
    } else if score >= 4 {
        (
            "You have a basic understanding, but should deepen your knowledge.",
            ["Study the documentation", "Practice with examples"],
        )
    } else {
        (
            "We recommend studying this topic in more depth.",
            ["Read the study materials", "Watch tutorials"],
        )
    };

    Feedback {
        score,
        comment: comment.to_string(),
        suggestions: suggestions.into_iter().map(str::to_string).collect(),
        correct_answer: reference_answer.to_string(),
    }
}
