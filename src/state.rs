use std::collections::HashMap;
use std::sync::Arc;
use std::time::Instant;

use tokio::sync::RwLock;
use uuid::Uuid;

use crate::config::Config;
use crate::session::QuizSession;

/// Shared application state: the in-memory session store plus configuration.
///
/// Sessions are session-local by design; nothing survives a process restart.
#[derive(Clone)]
pub struct AppState {
    sessions: Arc<RwLock<HashMap<Uuid, QuizSession>>>,
    config: Arc<Config>,
    started_at: Instant,
}

impl AppState {
    pub fn new(config: &Config) -> Self {
        Self {
            sessions: Arc::new(RwLock::new(HashMap::new())),
            config: Arc::new(config.clone()),
            started_at: Instant::now(),
        }
    }

    pub fn sessions(&self) -> &RwLock<HashMap<Uuid, QuizSession>> {
        &self.sessions
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    pub fn uptime_secs(&self) -> u64 {
        self.started_at.elapsed().as_secs()
    }

    /// Inserts a session, evicting the oldest one when the store is full.
    pub async fn insert_session(&self, session: QuizSession) -> Uuid {
        let id = session.id();
        let mut sessions = self.sessions.write().await;

        if sessions.len() >= self.config.max_sessions {
            let oldest = sessions
                .values()
                .min_by_key(|s| s.created_at())
                .map(|s| s.id());
            if let Some(old_id) = oldest {
                sessions.remove(&old_id);
                tracing::debug!(session_id = %old_id, "Evicted oldest session at capacity");
            }
        }

        sessions.insert(id, session);
        id
    }

    pub async fn session_count(&self) -> usize {
        self.sessions.read().await.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn insert_evicts_oldest_at_capacity() {
        let mut config = Config::from_env();
        config.max_sessions = 2;
        let state = AppState::new(&config);

        let first = state.insert_session(QuizSession::new()).await;
        tokio::time::sleep(std::time::Duration::from_millis(5)).await;
        let second = state.insert_session(QuizSession::new()).await;
        tokio::time::sleep(std::time::Duration::from_millis(5)).await;
        let third = state.insert_session(QuizSession::new()).await;

        let sessions = state.sessions().read().await;
        assert_eq!(sessions.len(), 2);
        assert!(!sessions.contains_key(&first));
        assert!(sessions.contains_key(&second));
        assert!(sessions.contains_key(&third));
    }

    #[tokio::test]
    async fn session_count_tracks_inserts() {
        let state = AppState::new(&Config::from_env());
        assert_eq!(state.session_count().await, 0);
        state.insert_session(QuizSession::new()).await;
        assert_eq!(state.session_count().await, 1);
    }
}
