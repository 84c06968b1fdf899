use thiserror::Error;
use uuid::Uuid;

/// Recoverable failure conditions surfaced by the interview engine.
///
/// Every variant is a distinct client-visible condition; none are fatal to
/// the process, and a failed operation performs no partial mutation.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum InterviewError {
    #[error("no questions found for topic '{0}'")]
    UnknownTopic(String),
    #[error("interview session '{0}' not found")]
    SessionNotFound(Uuid),
    #[error("question '{0}' not found")]
    QuestionNotFound(String),
    #[error("interview has already ended")]
    SessionEnded,
    #[error("all questions have been answered")]
    NoMoreQuestions,
}
