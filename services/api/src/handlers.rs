//! Axum Handlers for the REST API
//!
//! This module contains the logic for handling interview requests.
//! It uses `utoipa` doc comments to generate OpenAPI documentation.

use axum::{
    extract::{Query, State},
    http::StatusCode,
    response::{IntoResponse, Json, Response},
};
use interviewer_core::error::InterviewError;
use std::sync::Arc;
use tracing::debug;

use crate::{
    models::{
        AnswerPayload, EndpointIndex, ErrorResponse, FeedbackBody, InterviewIdQuery,
        InterviewSessionBody, QuestionResponse, ServiceInfo, StartInterviewPayload,
        SummaryResponse,
    },
    state::AppState,
};

pub enum ApiError {
    BadRequest(String),
    NotFound(String),
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        match self {
            ApiError::BadRequest(message) => {
                (StatusCode::BAD_REQUEST, Json(ErrorResponse { message })).into_response()
            }
            ApiError::NotFound(message) => {
                (StatusCode::NOT_FOUND, Json(ErrorResponse { message })).into_response()
            }
        }
    }
}

impl From<InterviewError> for ApiError {
    fn from(err: InterviewError) -> Self {
        match err {
            InterviewError::UnknownTopic(_)
            | InterviewError::SessionNotFound(_)
            | InterviewError::QuestionNotFound(_) => ApiError::NotFound(err.to_string()),
            InterviewError::SessionEnded | InterviewError::NoMoreQuestions => {
                ApiError::BadRequest(err.to_string())
            }
        }
    }
}

/// Service index: name, version and the available endpoints.
#[utoipa::path(
    get,
    path = "/",
    responses(
        (status = 200, description = "Service information", body = ServiceInfo)
    )
)]
pub async fn service_info() -> Json<ServiceInfo> {
    Json(ServiceInfo {
        message: "AI Interviewer API".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        endpoints: EndpointIndex {
            start_interview: "POST /api/interview/start".to_string(),
            get_question: "GET /api/interview/question".to_string(),
            submit_answer: "POST /api/interview/answer".to_string(),
            end_interview: "POST /api/interview/end".to_string(),
        },
    })
}

/// Start a new interview session.
#[utoipa::path(
    post,
    path = "/api/interview/start",
    request_body = StartInterviewPayload,
    responses(
        (status = 200, description = "Session created successfully", body = InterviewSessionBody),
        (status = 404, description = "Unknown topic", body = ErrorResponse)
    )
)]
pub async fn start_interview(
    State(state): State<Arc<AppState>>,
    Json(payload): Json<StartInterviewPayload>,
) -> Result<Json<InterviewSessionBody>, ApiError> {
    let session = state
        .engine
        .start(&payload.topic, &payload.difficulty, payload.question_count)
        .await?;
    Ok(Json(session.into()))
}

/// Get the current question for an interview.
#[utoipa::path(
    get,
    path = "/api/interview/question",
    params(InterviewIdQuery),
    responses(
        (status = 200, description = "Current question with progress", body = QuestionResponse),
        (status = 400, description = "Session ended or no questions left", body = ErrorResponse),
        (status = 404, description = "Session not found", body = ErrorResponse)
    )
)]
pub async fn get_question(
    State(state): State<Arc<AppState>>,
    Query(query): Query<InterviewIdQuery>,
) -> Result<Json<QuestionResponse>, ApiError> {
    let (question, progress) = state.engine.current_question(query.interview_id).await?;
    Ok(Json(QuestionResponse {
        question: question.into(),
        progress: progress.into(),
    }))
}

/// Submit an answer and receive scored feedback.
#[utoipa::path(
    post,
    path = "/api/interview/answer",
    request_body = AnswerPayload,
    responses(
        (status = 200, description = "Feedback for the answer", body = FeedbackBody),
        (status = 400, description = "Session ended or all questions answered", body = ErrorResponse),
        (status = 404, description = "Session or question not found", body = ErrorResponse)
    )
)]
pub async fn submit_answer(
    State(state): State<Arc<AppState>>,
    Json(payload): Json<AnswerPayload>,
) -> Result<Json<FeedbackBody>, ApiError> {
    // time_spent is accepted for future use; scoring ignores it.
    debug!(
        interview_id = %payload.interview_id,
        question_id = %payload.question_id,
        time_spent = payload.time_spent,
        "answer received"
    );
    let feedback = state
        .engine
        .submit_answer(payload.interview_id, &payload.question_id, &payload.answer)
        .await?;
    Ok(Json(feedback.into()))
}

/// End an interview and receive the final report.
#[utoipa::path(
    post,
    path = "/api/interview/end",
    params(InterviewIdQuery),
    responses(
        (status = 200, description = "Final interview summary", body = SummaryResponse),
        (status = 404, description = "Session not found", body = ErrorResponse)
    )
)]
pub async fn end_interview(
    State(state): State<Arc<AppState>>,
    Query(query): Query<InterviewIdQuery>,
) -> Result<Json<SummaryResponse>, ApiError> {
    let summary = state.engine.end(query.interview_id).await?;
    Ok(Json(summary.into()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use uuid::Uuid;

    #[test]
    fn not_found_family_maps_to_404() {
        let errors = [
            InterviewError::UnknownTopic("x".to_string()),
            InterviewError::SessionNotFound(Uuid::new_v4()),
            InterviewError::QuestionNotFound("q9".to_string()),
        ];
        for err in errors {
            let response = ApiError::from(err).into_response();
            assert_eq!(response.status(), StatusCode::NOT_FOUND);
        }
    }

    #[test]
    fn state_violations_map_to_400() {
        for err in [InterviewError::SessionEnded, InterviewError::NoMoreQuestions] {
            let response = ApiError::from(err).into_response();
            assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        }
    }
}
