//! Interview Session State Machine
//!
//! Orchestrates session creation, question advancement, answer submission
//! and termination over the question bank and session store. A session moves
//! through three states: in progress (`is_active`, pointer within range),
//! exhausted (`is_active`, every question answered) and ended (terminal).

use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tracing::{info, warn};
use uuid::Uuid;

use crate::{
    bank::{Question, QuestionBank},
    error::InterviewError,
    feedback::{Feedback, feedback_for},
    scoring::{AnswerScorer, KeywordScorer, keyword_score},
    session::{InterviewSession, InterviewSummary, Progress},
    store::SessionStore,
};

/// A bank question stamped with its position in the session.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AskedQuestion {
    pub id: String,
    pub text: String,
    pub topic: String,
    pub difficulty: String,
    /// Equal to the session's `current_question` at the time of the read.
    pub question_number: u32,
}

impl AskedQuestion {
    fn from_bank(question: &Question, question_number: u32) -> Self {
        Self {
            id: question.id.clone(),
            text: question.text.clone(),
            topic: question.topic.clone(),
            difficulty: question.difficulty.clone(),
            question_number,
        }
    }
}

/// The session engine behind the interview API.
///
/// Holds the read-only question bank, the in-memory session store and the
/// scoring strategy. All operations are short read-modify-writes; per-session
/// mutations serialize on the session's own lock.
pub struct InterviewEngine {
    bank: Arc<QuestionBank>,
    store: SessionStore,
    scorer: Arc<dyn AnswerScorer>,
}

impl InterviewEngine {
    pub fn new(bank: Arc<QuestionBank>, scorer: Arc<dyn AnswerScorer>) -> Self {
        Self {
            bank,
            store: SessionStore::new(),
            scorer,
        }
    }

    /// An engine with the default keyword scorer.
    pub fn with_keyword_scorer(bank: Arc<QuestionBank>) -> Self {
        Self::new(bank, Arc::new(KeywordScorer))
    }

    /// Starts a new session on `topic`.
    ///
    /// The topic is validated before anything is stored, so a failed start
    /// leaves the store untouched. The session length is clamped to the
    /// number of seeded questions for the topic.
    pub async fn start(
        &self,
        topic: &str,
        difficulty: &str,
        requested_count: u32,
    ) -> Result<InterviewSession, InterviewError> {
        let available = self.bank.questions_for(topic)?.len() as u32;
        let total_questions = requested_count.min(available);

        let session =
            InterviewSession::new(topic.to_string(), difficulty.to_string(), total_questions);
        let id = self.store.create(session.clone()).await;

        info!(%id, topic, total_questions, "interview session started");
        Ok(session)
    }

    /// Returns the question at the session's current pointer, together with
    /// a progress snapshot.
    pub async fn current_question(
        &self,
        id: Uuid,
    ) -> Result<(AskedQuestion, Progress), InterviewError> {
        let handle = self
            .store
            .get(id)
            .await
            .ok_or(InterviewError::SessionNotFound(id))?;
        let session = handle.lock().await;

        if !session.is_active {
            return Err(InterviewError::SessionEnded);
        }
        if session.is_exhausted() {
            return Err(InterviewError::NoMoreQuestions);
        }

        let question = self.bank.question_at(&session.topic, session.current_question)?;
        Ok((
            AskedQuestion::from_bank(question, session.current_question),
            session.progress(),
        ))
    }

    /// Scores an answer, folds it into the session and returns feedback.
    ///
    /// The submitted question id only needs to resolve within the session's
    /// topic; it is not required to match the current pointer. The whole
    /// read-modify-write runs under the session's lock, so concurrent
    /// submissions to one session serialize and no update is lost.
    pub async fn submit_answer(
        &self,
        id: Uuid,
        question_id: &str,
        answer: &str,
    ) -> Result<Feedback, InterviewError> {
        let handle = self
            .store
            .get(id)
            .await
            .ok_or(InterviewError::SessionNotFound(id))?;
        let mut session = handle.lock().await;

        if !session.is_active {
            return Err(InterviewError::SessionEnded);
        }
        if session.is_exhausted() {
            return Err(InterviewError::NoMoreQuestions);
        }

        let question = self.bank.find(&session.topic, question_id)?;

        let score = match self.scorer.score(answer, &question.reference_answer).await {
            Ok(score) => score,
            Err(error) => {
                warn!(%id, %error, "answer scorer failed, falling back to keyword heuristic");
                keyword_score(answer, &question.reference_answer)
            }
        };

        session.score += score;
        session.current_question += 1;
        info!(%id, question_id, score, total_score = session.score, "answer scored");

        Ok(feedback_for(score, &question.reference_answer))
    }

    /// Ends the session and returns the final report.
    ///
    /// Idempotent: ending an already-ended session re-returns the same
    /// summary without touching any state.
    pub async fn end(&self, id: Uuid) -> Result<InterviewSummary, InterviewError> {
        let handle = self
            .store
            .get(id)
            .await
            .ok_or(InterviewError::SessionNotFound(id))?;
        let mut session = handle.lock().await;

        if session.is_active {
            session.is_active = false;
            info!(%id, final_score = session.score, "interview session ended");
        }
        Ok(session.summary())
    }
}
