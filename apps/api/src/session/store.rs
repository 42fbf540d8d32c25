//! In-memory session store. Sessions live until deleted or idle past the TTL;
//! nothing is persisted.

use std::collections::HashMap;
use std::sync::Arc;
use std::time::Duration;

use chrono::{DateTime, Utc};
use serde::Serialize;
use tokio::sync::RwLock;
use tokio::task::JoinHandle;
use tokio::time::Instant;
use tracing::info;
use uuid::Uuid;

use crate::models::resume::ResumeDocument;
use crate::session::FormState;

/// Idle time after which a session is evicted when no TTL is configured.
pub const DEFAULT_SESSION_TTL: Duration = Duration::from_secs(60 * 60);

#[derive(Debug, Clone, Serialize)]
pub struct Session {
    pub session_id: Uuid,
    pub form: FormState,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    /// Monotonic twin of `updated_at`, used for expiry.
    #[serde(skip)]
    last_active: Instant,
}

impl Session {
    fn touch(&mut self) {
        self.updated_at = Utc::now();
        self.last_active = Instant::now();
    }
}

/// Shared handle; cloning shares the same map.
#[derive(Debug, Clone)]
pub struct SessionStore {
    sessions: Arc<RwLock<HashMap<Uuid, Session>>>,
    ttl: Duration,
}

impl Default for SessionStore {
    fn default() -> Self {
        Self::new(DEFAULT_SESSION_TTL)
    }
}

impl SessionStore {
    pub fn new(ttl: Duration) -> Self {
        Self {
            sessions: Arc::default(),
            ttl,
        }
    }

    /// Creates a session holding `form` and returns it. Idle sessions are pruned first.
    pub async fn create(&self, form: FormState) -> Session {
        let now = Utc::now();
        let session = Session {
            session_id: Uuid::new_v4(),
            form,
            created_at: now,
            updated_at: now,
            last_active: Instant::now(),
        };
        let mut sessions = self.sessions.write().await;
        let ttl = self.ttl;
        sessions.retain(|_, s| s.last_active.elapsed() <= ttl);
        sessions.insert(session.session_id, session.clone());
        session
    }

    pub async fn get(&self, id: Uuid) -> Option<Session> {
        self.sessions.read().await.get(&id).cloned()
    }

    /// Runs `edit` on the current form under the write lock.
    ///
    /// The form is replaced only when `edit` succeeds. `None` if the id is unknown.
    pub async fn update<E>(
        &self,
        id: Uuid,
        edit: impl FnOnce(&mut FormState) -> Result<(), E>,
    ) -> Option<Result<Session, E>> {
        let mut sessions = self.sessions.write().await;
        let session = sessions.get_mut(&id)?;
        let mut form = session.form.clone();
        if let Err(e) = edit(&mut form) {
            return Some(Err(e));
        }
        session.form = form;
        session.touch();
        Some(Ok(session.clone()))
    }

    /// Replaces every form field, keeping the chat transcript.
    pub async fn replace_document(&self, id: Uuid, document: ResumeDocument) -> Option<Session> {
        let mut sessions = self.sessions.write().await;
        let session = sessions.get_mut(&id)?;
        session.form.document = document;
        session.touch();
        Some(session.clone())
    }

    pub async fn remove(&self, id: Uuid) -> Option<Session> {
        self.sessions.write().await.remove(&id)
    }

    /// Drops every session idle for longer than the TTL. Returns how many were dropped.
    pub async fn evict_idle(&self) -> usize {
        let mut sessions = self.sessions.write().await;
        let before = sessions.len();
        let ttl = self.ttl;
        sessions.retain(|_, s| s.last_active.elapsed() <= ttl);
        before - sessions.len()
    }

    /// Sweeps idle sessions every `period` for the life of the process.
    pub fn spawn_sweeper(&self, period: Duration) -> JoinHandle<()> {
        let store = self.clone();
        tokio::spawn(async move {
            let mut ticker = tokio::time::interval(period);
            loop {
                ticker.tick().await;
                let evicted = store.evict_idle().await;
                if evicted > 0 {
                    info!(evicted, "Evicted idle sessions");
                }
            }
        })
    }

    pub async fn len(&self) -> usize {
        self.sessions.read().await.len()
    }
}
