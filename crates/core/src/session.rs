//! Interview Session State
//!
//! The session record tracked per interview attempt, plus the progress and
//! summary views derived from it. Lifecycle transitions live in the engine;
//! this module only knows the state and its arithmetic.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// One interview attempt, retained for the life of the process.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct InterviewSession {
    pub id: Uuid,
    pub topic: String,
    pub difficulty: String,
    /// 1-based pointer to the next question to ask. Never exceeds
    /// `total_questions + 1`.
    pub current_question: u32,
    /// Fixed at creation; min of the requested count and the bank size.
    pub total_questions: u32,
    /// Sum of per-answer scores.
    pub score: u32,
    pub start_time: DateTime<Utc>,
    /// `false` is terminal; nothing mutates an ended session.
    pub is_active: bool,
}

impl InterviewSession {
    pub fn new(topic: String, difficulty: String, total_questions: u32) -> Self {
        Self {
            id: Uuid::new_v4(),
            topic,
            difficulty,
            current_question: 1,
            total_questions,
            score: 0,
            start_time: Utc::now(),
            is_active: true,
        }
    }

    /// Whether every seeded question has been answered.
    pub fn is_exhausted(&self) -> bool {
        self.current_question > self.total_questions
    }

    pub fn questions_answered(&self) -> u32 {
        self.current_question - 1
    }

    pub fn progress(&self) -> Progress {
        Progress {
            current: self.current_question,
            total: self.total_questions,
            score: self.score,
        }
    }

    /// Final report for the session in its current state.
    pub fn summary(&self) -> InterviewSummary {
        let max_possible_score = self.total_questions * 10;
        let percentage = if max_possible_score == 0 {
            0.0
        } else {
            let raw = f64::from(self.score) * 100.0 / f64::from(max_possible_score);
            (raw * 100.0).round() / 100.0
        };
        InterviewSummary {
            final_score: self.score,
            max_possible_score,
            percentage,
            questions_answered: self.questions_answered(),
            total_questions: self.total_questions,
        }
    }
}

/// Progress snapshot returned alongside the current question.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Progress {
    pub current: u32,
    pub total: u32,
    pub score: u32,
}

/// Final report computed when a session ends.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InterviewSummary {
    pub final_score: u32,
    pub max_possible_score: u32,
    /// Percent of the maximum score, rounded to two decimals.
    pub percentage: f64,
    pub questions_answered: u32,
    pub total_questions: u32,
}
