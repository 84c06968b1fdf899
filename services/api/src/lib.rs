//! Interviewer API Library Crate
//!
//! This library contains the HTTP layer for the interview service: the
//! application state, request/response models, API handlers and routing.
//! The `api` binary is a thin wrapper around this library.

pub mod config;
pub mod handlers;
pub mod models;
pub mod router;
pub mod state;
