//! Ollama Client and AI-Backed Scorer
//!
//! A narrow client for a local Ollama instance: a health probe and a single
//! non-streaming generate call, plus an [`AnswerScorer`] implementation that
//! asks the model to grade an answer against the reference. Any transport,
//! decode or parse failure surfaces as an error; the engine degrades to the
//! keyword heuristic instead of failing the submission.

use anyhow::{Context, Result, anyhow};
use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::scoring::AnswerScorer;

#[derive(Debug, Serialize)]
struct GenerateRequest<'a> {
    model: &'a str,
    prompt: &'a str,
    stream: bool,
}

#[derive(Debug, Deserialize)]
struct GenerateResponse {
    response: String,
}

/// Client for an Ollama HTTP endpoint.
pub struct OllamaClient {
    http: reqwest::Client,
    base_url: String,
    model: String,
}

impl OllamaClient {
    pub fn new(base_url: impl Into<String>, model: impl Into<String>) -> Self {
        Self {
            http: reqwest::Client::new(),
            base_url: base_url.into().trim_end_matches('/').to_string(),
            model: model.into(),
        }
    }

    /// Whether the Ollama API answers at all.
    pub async fn health_check(&self) -> bool {
        let url = format!("{}/api/tags", self.base_url);
        match self.http.get(&url).send().await {
            Ok(response) => response.status().is_success(),
            Err(_) => false,
        }
    }

    /// Single non-streaming completion.
    pub async fn generate(&self, prompt: &str) -> Result<String> {
        let url = format!("{}/api/generate", self.base_url);
        let request = GenerateRequest {
            model: &self.model,
            prompt,
            stream: false,
        };

        let response = self
            .http
            .post(&url)
            .json(&request)
            .send()
            .await
            .context("failed to reach the Ollama API")?
            .error_for_status()
            .context("Ollama API returned an error status")?;

        let body: GenerateResponse = response
            .json()
            .await
            .context("invalid Ollama response body")?;
        Ok(body.response)
    }
}

#[async_trait]
impl AnswerScorer for OllamaClient {
    async fn score(&self, answer: &str, reference: &str) -> Result<u32> {
        let prompt = format!(
            "You are grading a technical interview answer.\n\
             Reference answer: {reference}\n\
             Candidate answer: {answer}\n\
             Reply with a single integer from 0 to 10 rating how well the \
             candidate answer matches the reference."
        );
        let reply = self.generate(&prompt).await?;
        parse_score(&reply).ok_or_else(|| anyhow!("no score in Ollama reply: {reply:?}"))
    }
}

/// First integer in the reply, clamped to the 0-10 scale.
fn parse_score(reply: &str) -> Option<u32> {
    let digits: String = reply
        .chars()
        .skip_while(|c| !c.is_ascii_digit())
        .take_while(char::is_ascii_digit)
        .collect();
    digits.parse::<u32>().ok().map(|score| score.min(10))
}
