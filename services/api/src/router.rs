//! Axum Router Configuration
//!
//! This module defines the complete HTTP routing for the application,
//! including the REST API and OpenAPI documentation.

use crate::{
    handlers,
    models::{
        AnswerPayload, EndpointIndex, ErrorResponse, FeedbackBody, InterviewSessionBody,
        ProgressBody, QuestionBody, QuestionResponse, ServiceInfo, StartInterviewPayload,
        SummaryResponse,
    },
    state::AppState,
};

use axum::{
    Router,
    routing::{get, post},
};
use std::sync::Arc;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

#[derive(OpenApi)]
#[openapi(
    paths(
        handlers::service_info,
        handlers::start_interview,
        handlers::get_question,
        handlers::submit_answer,
        handlers::end_interview,
    ),
    components(
        schemas(
            ServiceInfo,
            EndpointIndex,
            StartInterviewPayload,
            InterviewSessionBody,
            QuestionResponse,
            QuestionBody,
            ProgressBody,
            AnswerPayload,
            FeedbackBody,
            SummaryResponse,
            ErrorResponse
        )
    ),
    tags(
        (name = "Interviewer API", description = "Scripted technical-interview sessions")
    )
)]
pub struct ApiDoc;

/// Creates the main Axum router for the application.
pub fn create_router(app_state: Arc<AppState>) -> Router {
    // Group all routes that require AppState into their own router.
    let api_router = Router::new()
        .route("/", get(handlers::service_info))
        .route("/api/interview/start", post(handlers::start_interview))
        .route("/api/interview/question", get(handlers::get_question))
        .route("/api/interview/answer", post(handlers::submit_answer))
        .route("/api/interview/end", post(handlers::end_interview))
        // Apply the state ONLY to this group of routes.
        .with_state(app_state);

    // Create the final router that merges the stateful routes
    // with the stateless routes (like Swagger UI).
    Router::new()
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", ApiDoc::openapi()))
        .merge(api_router)
}
