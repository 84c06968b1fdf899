//! API Wire Models
//!
//! This module defines the request and response schemas for the interview
//! endpoints, used both for serde (de)serialization and for generating
//! OpenAPI documentation with `utoipa`. Conversions from the core types keep
//! the engine free of any HTTP or documentation concerns.

use chrono::{DateTime, Utc};
use interviewer_core::{
    engine::AskedQuestion,
    feedback::Feedback,
    session::{InterviewSession, InterviewSummary, Progress},
};
use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};
use uuid::Uuid;

fn default_difficulty() -> String {
    "middle".to_string()
}

fn default_question_count() -> u32 {
    10
}

#[derive(Deserialize, ToSchema)]
pub struct StartInterviewPayload {
    #[schema(example = "javascript-basics")]
    pub topic: String,
    #[serde(default = "default_difficulty")]
    #[schema(example = "middle")]
    pub difficulty: String,
    #[serde(default = "default_question_count")]
    pub question_count: u32,
}

#[derive(Serialize, Deserialize, ToSchema, Debug, Clone)]
pub struct InterviewSessionBody {
    #[schema(value_type = String, format = Uuid)]
    pub id: Uuid,
    pub topic: String,
    pub difficulty: String,
    pub current_question: u32,
    pub total_questions: u32,
    pub score: u32,
    pub start_time: DateTime<Utc>,
    pub is_active: bool,
}

impl From<InterviewSession> for InterviewSessionBody {
    fn from(session: InterviewSession) -> Self {
        Self {
            id: session.id,
            topic: session.topic,
            difficulty: session.difficulty,
            current_question: session.current_question,
            total_questions: session.total_questions,
            score: session.score,
            start_time: session.start_time,
            is_active: session.is_active,
        }
    }
}

#[derive(Serialize, Deserialize, ToSchema, Debug, Clone)]
pub struct QuestionBody {
    #[schema(example = "q1")]
    pub id: String,
    pub text: String,
    pub topic: String,
    pub difficulty: String,
    pub question_number: u32,
}

impl From<AskedQuestion> for QuestionBody {
    fn from(question: AskedQuestion) -> Self {
        Self {
            id: question.id,
            text: question.text,
            topic: question.topic,
            difficulty: question.difficulty,
            question_number: question.question_number,
        }
    }
}

#[derive(Serialize, Deserialize, ToSchema, Debug, Clone)]
pub struct ProgressBody {
    pub current: u32,
    pub total: u32,
    pub score: u32,
}

impl From<Progress> for ProgressBody {
    fn from(progress: Progress) -> Self {
        Self {
            current: progress.current,
            total: progress.total,
            score: progress.score,
        }
    }
}

#[derive(Serialize, Deserialize, ToSchema, Debug, Clone)]
pub struct QuestionResponse {
    pub question: QuestionBody,
    pub progress: ProgressBody,
}

#[derive(Deserialize, ToSchema)]
pub struct AnswerPayload {
    #[schema(value_type = String, format = Uuid)]
    pub interview_id: Uuid,
    #[schema(example = "q1")]
    pub question_id: String,
    pub answer: String,
    /// Seconds spent on the answer. Accepted but not used by scoring yet.
    pub time_spent: u32,
}

#[derive(Serialize, Deserialize, ToSchema, Debug, Clone)]
pub struct FeedbackBody {
    pub score: u32,
    pub comment: String,
    pub suggestions: Vec<String>,
    pub correct_answer: String,
}

impl From<Feedback> for FeedbackBody {
    fn from(feedback: Feedback) -> Self {
        Self {
            score: feedback.score,
            comment: feedback.comment,
            suggestions: feedback.suggestions,
            correct_answer: feedback.correct_answer,
        }
    }
}

#[derive(Serialize, Deserialize, ToSchema, Debug, Clone)]
pub struct SummaryResponse {
    pub message: String,
    pub final_score: u32,
    pub max_possible_score: u32,
    pub percentage: f64,
    pub questions_answered: u32,
    pub total_questions: u32,
}

impl From<InterviewSummary> for SummaryResponse {
    fn from(summary: InterviewSummary) -> Self {
        Self {
            message: "Interview completed".to_string(),
            final_score: summary.final_score,
            max_possible_score: summary.max_possible_score,
            percentage: summary.percentage,
            questions_answered: summary.questions_answered,
            total_questions: summary.total_questions,
        }
    }
}

#[derive(Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct InterviewIdQuery {
    /// Interview session id.
    pub interview_id: Uuid,
}

#[derive(Serialize, ToSchema)]
pub struct EndpointIndex {
    pub start_interview: String,
    pub get_question: String,
    pub submit_answer: String,
    pub end_interview: String,
}

#[derive(Serialize, ToSchema)]
pub struct ServiceInfo {
    pub message: String,
    pub version: String,
    pub endpoints: EndpointIndex,
}

#[derive(Serialize, ToSchema)]
pub struct ErrorResponse {
    pub message: String,
}
