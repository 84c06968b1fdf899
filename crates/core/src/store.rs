//! In-Memory Session Store
//!
//! The map is guarded by an `RwLock` that is write-locked only on insert;
//! each session sits behind its own `tokio::sync::Mutex`, so concurrent
//! mutations of one session serialize while different sessions proceed
//! independently. Sessions are never removed.

use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::{Mutex, RwLock};
use uuid::Uuid;

use crate::session::InterviewSession;

/// The per-session lock handed out for read-modify-write cycles.
pub type SessionHandle = Arc<Mutex<InterviewSession>>;

#[derive(Default)]
pub struct SessionStore {
    sessions: RwLock<HashMap<Uuid, SessionHandle>>,
}

impl SessionStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers a new session under its own id.
    pub async fn create(&self, session: InterviewSession) -> Uuid {
        let id = session.id;
        self.sessions
            .write()
            .await
            .insert(id, Arc::new(Mutex::new(session)));
        id
    }

    /// Hands out the session's lock, or `None` for an unknown id.
    pub async fn get(&self, id: Uuid) -> Option<SessionHandle> {
        self.sessions.read().await.get(&id).cloned()
    }

    /// A consistent copy of the session's current state.
    pub async fn snapshot(&self, id: Uuid) -> Option<InterviewSession> {
        let handle = self.get(id).await?;
        let session = handle.lock().await;
        Some(session.clone())
    }

    pub async fn count(&self) -> usize {
        self.sessions.read().await.len()
    }
}
