//! Static Question Catalog
//!
//! The bank is built once at process start and never mutated afterwards.
//! The engine holds it behind an `Arc` and reads it on every operation;
//! question order within a topic is the seed order and is stable.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

use crate::error::InterviewError;

/// A single interview question with its canonical reference answer.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Question {
    /// Unique within the question's topic.
    pub id: String,
    pub text: String,
    pub topic: String,
    pub difficulty: String,
    /// Canonical correct-answer text used for scoring comparison.
    pub reference_answer: String,
}

/// Read-only catalog of questions grouped by topic.
#[derive(Debug, Default)]
pub struct QuestionBank {
    topics: HashMap<String, Vec<Question>>,
}

impl QuestionBank {
    /// Builds a bank from an explicit question list, grouping by topic and
    /// preserving insertion order within each topic.
    pub fn new(questions: Vec<Question>) -> Self {
        let mut topics: HashMap<String, Vec<Question>> = HashMap::new();
        for question in questions {
            topics
                .entry(question.topic.clone())
                .or_default()
                .push(question);
        }
        Self { topics }
    }

    /// The static seed catalog served by the API.
    pub fn seeded() -> Self {
        let topic = "javascript-basics";
        Self::new(vec![
            Question {
                id: "q1".to_string(),
                text: "Explain the difference between var, let and const in JavaScript"
                    .to_string(),
                topic: topic.to_string(),
                difficulty: "middle".to_string(),
                reference_answer: "var is function scoped and hoisted, let and const are block \
                                   scoped, const cannot be reassigned"
                    .to_string(),
            },
            Question {
                id: "q2".to_string(),
                text: "What is a closure in JavaScript?".to_string(),
                topic: topic.to_string(),
                difficulty: "middle".to_string(),
                reference_answer: "a closure is a function that keeps access to variables from \
                                   its outer scope even after the outer function has finished \
                                   executing"
                    .to_string(),
            },
            Question {
                id: "q3".to_string(),
                text: "Explain what the Event Loop is in JavaScript".to_string(),
                topic: topic.to_string(),
                difficulty: "senior".to_string(),
                reference_answer: "the event loop is the mechanism that lets JavaScript perform \
                                   non-blocking operations even though JavaScript is single \
                                   threaded"
                    .to_string(),
            },
        ])
    }

    pub fn contains_topic(&self, topic: &str) -> bool {
        self.topics.contains_key(topic)
    }

    /// All questions for a topic, in seed order.
    pub fn questions_for(&self, topic: &str) -> Result<&[Question], InterviewError> {
        self.topics
            .get(topic)
            .map(Vec::as_slice)
            .ok_or_else(|| InterviewError::UnknownTopic(topic.to_string()))
    }

    /// The question at a 1-based position within a topic.
    pub fn question_at(&self, topic: &str, number: u32) -> Result<&Question, InterviewError> {
        let questions = self.questions_for(topic)?;
        number
            .checked_sub(1)
            .and_then(|index| questions.get(index as usize))
            .ok_or_else(|| InterviewError::QuestionNotFound(format!("#{number}")))
    }

    /// Looks up a question by id within a topic.
    pub fn find(&self, topic: &str, question_id: &str) -> Result<&Question, InterviewError> {
        self.questions_for(topic)?
            .iter()
            .find(|question| question.id == question_id)
            .ok_or_else(|| InterviewError::QuestionNotFound(question_id.to_string()))
    }

    /// Number of seeded questions for a topic; 0 for unknown topics.
    pub fn topic_size(&self, topic: &str) -> usize {
        self.topics.get(topic).map_or(0, Vec::len)
    }
}
