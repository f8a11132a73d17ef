//! Session Management
//!
//! A disclosure session is a caller-owned cursor over one topic's hints.
//! Hosts serving many learners keep one session per learner, typically in a
//! [`SessionStore`].

use std::collections::HashMap;
use std::sync::{Arc, RwLock};
use std::time::Duration;

use chrono::{DateTime, TimeDelta, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::error::{HintError, Result};
use crate::model::{HintLevel, HintRecord, RevealedHints};

/// Unique session identifier
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SessionId(String);

impl SessionId {
    pub fn new() -> Self {
        Self(Uuid::new_v4().to_string())
    }

    pub fn from_string(s: impl Into<String>) -> Self {
        Self(s.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Default for SessionId {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Display for SessionId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Reveal progress, useful for UI
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionProgress {
    pub total: usize,
    pub revealed: usize,
    pub remaining: usize,
    pub is_complete: bool,
}

/// Serializable view of a session
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct SessionSnapshot {
    pub id: SessionId,
    pub topic_id: String,
    pub category: String,
    pub revealed_count: usize,
    pub total: usize,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Stateful reveal cursor for one topic
#[derive(Clone, Debug)]
pub struct DisclosureSession {
    id: SessionId,
    record: Arc<HintRecord>,
    revealed_count: usize,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

impl DisclosureSession {
    /// Sessions come from [`HintRegistry::open_session`](crate::HintRegistry::open_session)
    pub(crate) fn new(record: Arc<HintRecord>) -> Self {
        let now = Utc::now();
        Self {
            id: SessionId::new(),
            record,
            revealed_count: 0,
            created_at: now,
            updated_at: now,
        }
    }

    pub const fn id(&self) -> &SessionId {
        &self.id
    }

    pub fn topic_id(&self) -> &str {
        &self.record.topic_id
    }

    pub const fn revealed_count(&self) -> usize {
        self.revealed_count
    }

    pub fn total(&self) -> usize {
        self.record.total()
    }

    pub fn is_exhausted(&self) -> bool {
        self.revealed_count >= self.total()
    }

    /// Reveal the next hint
    pub fn next(&mut self) -> Result<HintLevel> {
        let total = self.total();
        if self.revealed_count >= total {
            tracing::debug!(topic = self.topic_id(), total, "hint session exhausted");
            return Err(HintError::Exhausted {
                topic: self.topic_id().to_string(),
                total,
            });
        }

        self.revealed_count += 1;
        self.touch();

        let text = self
            .record
            .hint_at(self.revealed_count)
            .unwrap_or_default()
            .to_string();

        Ok(HintLevel {
            text,
            level: self.revealed_count,
            total,
        })
    }

    /// Start over from the first hint
    pub fn reset(&mut self) {
        self.revealed_count = 0;
        self.touch();
    }

    /// Show everything without counting it as a disclosure step
    pub fn reveal(&self) -> RevealedHints {
        RevealedHints::from(self.record.as_ref())
    }

    pub fn summary(&self) -> &str {
        &self.record.summary
    }

    pub fn progress(&self) -> SessionProgress {
        let total = self.total();
        SessionProgress {
            total,
            revealed: self.revealed_count,
            remaining: total.saturating_sub(self.revealed_count),
            is_complete: self.is_exhausted(),
        }
    }

    pub fn snapshot(&self) -> SessionSnapshot {
        SessionSnapshot {
            id: self.id.clone(),
            topic_id: self.record.topic_id.clone(),
            category: self.record.category.clone(),
            revealed_count: self.revealed_count,
            total: self.total(),
            created_at: self.created_at,
            updated_at: self.updated_at,
        }
    }

    /// Time since last activity
    pub fn idle_for(&self, now: DateTime<Utc>) -> TimeDelta {
        now - self.updated_at
    }

    fn touch(&mut self) {
        self.updated_at = Utc::now();
    }
}

/// Session store trait for hosts serving many learners
///
/// `advance` and `reset` mutate under the store's own exclusion, so a
/// session is never stepped by two flows at once.
pub trait SessionStore: Send + Sync {
    /// Save or replace a session
    fn save(&self, session: DisclosureSession) -> Result<()>;

    /// Load a copy of a session by ID
    fn load(&self, id: &SessionId) -> Result<Option<DisclosureSession>>;

    /// Delete a session, returning whether it existed
    fn delete(&self, id: &SessionId) -> Result<bool>;

    /// List sessions, optionally for one topic, most recent first
    fn list(&self, topic_id: Option<&str>, limit: usize) -> Result<Vec<SessionSnapshot>>;

    /// Reveal the next hint of a stored session, with the session's topic id
    fn advance(&self, id: &SessionId) -> Result<(String, HintLevel)>;

    /// Reset a stored session
    fn reset(&self, id: &SessionId) -> Result<()>;

    /// Drop sessions idle longer than `max_idle`, returning how many
    fn purge_idle(&self, max_idle: Duration) -> Result<usize>;

    /// Number of live sessions
    fn len(&self) -> Result<usize>;
}

/// In-memory session store
pub struct MemorySessionStore {
    sessions: RwLock<HashMap<SessionId, DisclosureSession>>,
}

impl Default for MemorySessionStore {
    fn default() -> Self {
        Self::new()
    }
}

impl MemorySessionStore {
    pub fn new() -> Self {
        Self {
            sessions: RwLock::new(HashMap::new()),
        }
    }
}

fn poisoned<T>(_: T) -> HintError {
    HintError::Storage("session lock poisoned".into())
}

impl SessionStore for MemorySessionStore {
    fn save(&self, session: DisclosureSession) -> Result<()> {
        let mut sessions = self.sessions.write().map_err(poisoned)?;
        sessions.insert(session.id.clone(), session);
        Ok(())
    }

    fn load(&self, id: &SessionId) -> Result<Option<DisclosureSession>> {
        let sessions = self.sessions.read().map_err(poisoned)?;
        Ok(sessions.get(id).cloned())
    }

    fn delete(&self, id: &SessionId) -> Result<bool> {
        let mut sessions = self.sessions.write().map_err(poisoned)?;
        Ok(sessions.remove(id).is_some())
    }

    fn list(&self, topic_id: Option<&str>, limit: usize) -> Result<Vec<SessionSnapshot>> {
        let sessions = self.sessions.read().map_err(poisoned)?;
        let mut result: Vec<_> = sessions
            .values()
            .filter(|s| topic_id.is_none_or(|t| s.topic_id() == t))
            .map(DisclosureSession::snapshot)
            .collect();

        result.sort_by(|a, b| b.updated_at.cmp(&a.updated_at));
        result.truncate(limit);

        Ok(result)
    }

    fn advance(&self, id: &SessionId) -> Result<(String, HintLevel)> {
        let mut sessions = self.sessions.write().map_err(poisoned)?;
        let session = sessions
            .get_mut(id)
            .ok_or_else(|| HintError::SessionNotFound(id.to_string()))?;
        let hint = session.next()?;
        Ok((session.topic_id().to_string(), hint))
    }

    fn reset(&self, id: &SessionId) -> Result<()> {
        let mut sessions = self.sessions.write().map_err(poisoned)?;
        sessions
            .get_mut(id)
            .ok_or_else(|| HintError::SessionNotFound(id.to_string()))?
            .reset();
        Ok(())
    }

    fn purge_idle(&self, max_idle: Duration) -> Result<usize> {
        let max_idle = TimeDelta::from_std(max_idle).unwrap_or(TimeDelta::MAX);
        let now = Utc::now();
        let mut sessions = self.sessions.write().map_err(poisoned)?;
        let before = sessions.len();
        sessions.retain(|_, s| s.idle_for(now) <= max_idle);
        Ok(before - sessions.len())
    }

    fn len(&self) -> Result<usize> {
        Ok(self.sessions.read().map_err(poisoned)?.len())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::registry::tests::sample_registry;

    #[test]
    fn test_next_walks_every_hint_then_exhausts() {
        let registry = sample_registry();
        let mut session = registry.open_session("alpha").unwrap();
        assert_eq!(session.revealed_count(), 0);

        let walked: Vec<String> = (0..session.total())
            .map(|_| session.next().unwrap().text)
            .collect();
        assert_eq!(walked, registry.reveal_all("alpha").unwrap().hints);

        let err = session.next().unwrap_err();
        assert!(matches!(err, HintError::Exhausted { ref topic, total: 4 } if topic == "alpha"));
        assert_eq!(session.revealed_count(), 4);
    }

    #[test]
    fn test_single_hint_topic() {
        let registry = sample_registry();
        let mut session = registry.open_session("beta").unwrap();

        let hint = session.next().unwrap();
        assert_eq!(hint.text, "only hint");
        assert_eq!((hint.level, hint.total), (1, 1));

        assert!(matches!(
            session.next(),
            Err(HintError::Exhausted { ref topic, total: 1 }) if topic == "beta"
        ));
    }

    #[test]
    fn test_reset_is_idempotent() {
        let registry = sample_registry();
        let mut session = registry.open_session("alpha").unwrap();
        session.next().unwrap();
        session.next().unwrap();

        for _ in 0..3 {
            session.reset();
            assert_eq!(session.revealed_count(), 0);
        }
        assert_eq!(session.next().unwrap().level, 1);
    }

    #[test]
    fn test_reveal_does_not_advance() {
        let registry = sample_registry();
        let mut session = registry.open_session("alpha").unwrap();
        session.next().unwrap();

        let revealed = session.reveal();
        assert_eq!(revealed, registry.reveal_all("alpha").unwrap());
        assert_eq!(session.revealed_count(), 1);
        assert_eq!(session.summary(), "alpha approach");
    }

    #[test]
    fn test_progress() {
        let registry = sample_registry();
        let mut session = registry.open_session("alpha").unwrap();
        session.next().unwrap();

        assert_eq!(
            session.progress(),
            SessionProgress { total: 4, revealed: 1, remaining: 3, is_complete: false }
        );
    }

    #[test]
    fn test_memory_store() {
        let registry = sample_registry();
        let store = MemorySessionStore::new();
        let session = registry.open_session("beta").unwrap();
        let id = session.id().clone();

        store.save(session).unwrap();
        assert_eq!(store.len().unwrap(), 1);

        let (topic, hint) = store.advance(&id).unwrap();
        assert_eq!(topic, "beta");
        assert_eq!(hint.text, "only hint");
        assert!(matches!(store.advance(&id), Err(HintError::Exhausted { .. })));

        store.reset(&id).unwrap();
        assert_eq!(store.load(&id).unwrap().unwrap().revealed_count(), 0);

        assert!(store.delete(&id).unwrap());
        assert!(!store.delete(&id).unwrap());
        assert!(matches!(store.advance(&id), Err(HintError::SessionNotFound(_))));
    }

    #[test]
    fn test_store_list_filters_by_topic() {
        let registry = sample_registry();
        let store = MemorySessionStore::new();
        store.save(registry.open_session("alpha").unwrap()).unwrap();
        store.save(registry.open_session("alpha").unwrap()).unwrap();
        store.save(registry.open_session("beta").unwrap()).unwrap();

        assert_eq!(store.list(None, 10).unwrap().len(), 3);
        assert_eq!(store.list(Some("alpha"), 10).unwrap().len(), 2);
        assert_eq!(store.list(None, 1).unwrap().len(), 1);
    }

    #[test]
    fn test_purge_idle() {
        let registry = sample_registry();
        let store = MemorySessionStore::new();
        store.save(registry.open_session("alpha").unwrap()).unwrap();

        assert_eq!(store.purge_idle(Duration::from_secs(3600)).unwrap(), 0);

        std::thread::sleep(Duration::from_millis(10));
        assert_eq!(store.purge_idle(Duration::ZERO).unwrap(), 1);
        assert_eq!(store.len().unwrap(), 0);
    }
}
