//! Shared Application State
//!
//! This module defines the `AppState` struct, which holds all shared,
//! clonable resources: the interview engine and the loaded configuration.

use crate::config::Config;
use interviewer_core::engine::InterviewEngine;
use std::sync::Arc;

/// The shared application state, created once at startup and passed to all handlers.
#[derive(Clone)]
pub struct AppState {
    pub engine: Arc<InterviewEngine>,
    pub config: Arc<Config>,
}
