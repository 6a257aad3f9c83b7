//! Per-visitor session state.
//!
//! Sessions live only in this process. Each one owns a `History` guarded by
//! its own mutex, so two submissions from the same browser record their
//! entries one after the other. Idle sessions are dropped lazily whenever a
//! session is resolved.

use std::collections::HashMap;
use std::sync::Arc;
use std::time::{Duration, Instant};

use axum::http::{HeaderMap, HeaderValue, header};
use tokio::sync::{Mutex, RwLock};
use uuid::Uuid;

use crate::history::{History, HistoryEntry};

pub const SESSION_COOKIE: &str = "reqdesk_session";

#[derive(Debug)]
pub struct Session {
    id: Uuid,
    history: Mutex<History>,
}

impl Session {
    fn new(id: Uuid, history_limit: usize) -> Self {
        Self {
            id,
            history: Mutex::new(History::new(history_limit)),
        }
    }

    pub fn id(&self) -> Uuid {
        self.id
    }

    pub async fn record(&self, entry: HistoryEntry) {
        self.history.lock().await.record(entry);
    }

    /// Snapshot of the history, most recent first.
    pub async fn history(&self) -> Vec<HistoryEntry> {
        self.history.lock().await.entries().iter().cloned().collect()
    }

    pub async fn clear_history(&self) {
        self.history.lock().await.clear();
    }
}

#[derive(Debug)]
struct Slot {
    session: Arc<Session>,
    last_seen: Instant,
}

/// Cloneable handle to the session table.
#[derive(Debug, Clone)]
pub struct SessionStore {
    sessions: Arc<RwLock<HashMap<Uuid, Slot>>>,
    history_limit: usize,
    ttl: Duration,
}

impl SessionStore {
    pub fn new(history_limit: usize, ttl: Duration) -> Self {
        Self {
            sessions: Arc::new(RwLock::new(HashMap::new())),
            history_limit,
            ttl,
        }
    }

    /// Find the live session for `id`, or start an empty one. The flag is
    /// true when a new session was created and its cookie must be sent.
    pub async fn resolve(&self, id: Option<Uuid>) -> (Arc<Session>, bool) {
        let now = Instant::now();
        let mut sessions = self.sessions.write().await;

        let before = sessions.len();
        sessions.retain(|_, slot| now.duration_since(slot.last_seen) < self.ttl);
        let expired = before - sessions.len();
        if expired > 0 {
            tracing::debug!(expired, "dropped idle sessions");
        }

        if let Some(slot) = id.and_then(|id| sessions.get_mut(&id)) {
            slot.last_seen = now;
            return (slot.session.clone(), false);
        }

        let id = Uuid::new_v4();
        let session = Arc::new(Session::new(id, self.history_limit));
        sessions.insert(
            id,
            Slot {
                session: session.clone(),
                last_seen: now,
            },
        );
        tracing::debug!(session = %id, "session created");
        (session, true)
    }

    #[cfg(test)]
    pub async fn count(&self) -> usize {
        self.sessions.read().await.len()
    }
}

/// Extract the session id from the request's `Cookie` headers.
pub fn session_id_from_headers(headers: &HeaderMap) -> Option<Uuid> {
    headers
        .get_all(header::COOKIE)
        .iter()
        .filter_map(|value| value.to_str().ok())
        .flat_map(|value| value.split(';'))
        .filter_map(|pair| pair.trim().split_once('='))
        .find(|(name, _)| *name == SESSION_COOKIE)
        .and_then(|(_, value)| Uuid::parse_str(value.trim()).ok())
}

pub fn session_cookie(id: Uuid) -> HeaderValue {
    // A hyphenated uuid only contains cookie-safe characters.
    HeaderValue::from_str(&format!(
        "{SESSION_COOKIE}={id}; Path=/; HttpOnly; SameSite=Lax"
    ))
    .unwrap_or_else(|_| HeaderValue::from_static("reqdesk_session=; Path=/"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::http::method::HttpMethod;

    fn entry(url: &str) -> HistoryEntry {
        HistoryEntry {
            method: HttpMethod::Get,
            url: url.to_string(),
            status: 200,
        }
    }

    #[tokio::test]
    async fn new_visitor_gets_empty_session() {
        let store = SessionStore::new(10, Duration::from_secs(60));
        let (session, created) = store.resolve(None).await;
        assert!(created);
        assert!(session.history().await.is_empty());
        assert_eq!(store.count().await, 1);
    }

    #[tokio::test]
    async fn known_id_resolves_to_same_session() {
        let store = SessionStore::new(10, Duration::from_secs(60));
        let (first, _) = store.resolve(None).await;
        first.record(entry("https://a.com")).await;

        let (again, created) = store.resolve(Some(first.id())).await;
        assert!(!created);
        assert_eq!(again.id(), first.id());
        assert_eq!(again.history().await, vec![entry("https://a.com")]);
    }

    #[tokio::test]
    async fn unknown_id_starts_fresh_session() {
        let store = SessionStore::new(10, Duration::from_secs(60));
        let stale = Uuid::new_v4();
        let (session, created) = store.resolve(Some(stale)).await;
        assert!(created);
        assert_ne!(session.id(), stale);
    }

    #[tokio::test]
    async fn sessions_do_not_share_history() {
        let store = SessionStore::new(10, Duration::from_secs(60));
        let (a, _) = store.resolve(None).await;
        let (b, _) = store.resolve(None).await;
        a.record(entry("https://a.com")).await;
        assert!(b.history().await.is_empty());
    }

    #[tokio::test]
    async fn idle_sessions_expire() {
        let store = SessionStore::new(10, Duration::from_millis(20));
        let (session, _) = store.resolve(None).await;
        session.record(entry("https://a.com")).await;

        tokio::time::sleep(Duration::from_millis(50)).await;

        let (fresh, created) = store.resolve(Some(session.id())).await;
        assert!(created);
        assert!(fresh.history().await.is_empty());
        assert_eq!(store.count().await, 1);
    }

    #[tokio::test]
    async fn concurrent_records_are_all_applied() {
        let store = SessionStore::new(10, Duration::from_secs(60));
        let (session, _) = store.resolve(None).await;

        let tasks: Vec<_> = (0..8)
            .map(|i| {
                let session = session.clone();
                tokio::spawn(async move { session.record(entry(&format!("https://a.com/{i}"))).await })
            })
            .collect();
        for task in tasks {
            task.await.unwrap();
        }

        assert_eq!(session.history().await.len(), 8);
    }

    #[tokio::test]
    async fn clear_history_empties_list() {
        let store = SessionStore::new(10, Duration::from_secs(60));
        let (session, _) = store.resolve(None).await;
        session.record(entry("https://a.com")).await;
        session.clear_history().await;
        assert!(session.history().await.is_empty());
    }

    #[test]
    fn reads_session_id_among_other_cookies() {
        let id = Uuid::new_v4();
        let mut headers = HeaderMap::new();
        headers.append(header::COOKIE, "theme=dark".parse().unwrap());
        headers.append(
            header::COOKIE,
            format!("a=1; {SESSION_COOKIE}={id}; b=2").parse().unwrap(),
        );
        assert_eq!(session_id_from_headers(&headers), Some(id));
    }

    #[test]
    fn malformed_session_cookie_is_ignored() {
        let mut headers = HeaderMap::new();
        headers.insert(
            header::COOKIE,
            format!("{SESSION_COOKIE}=not-a-uuid").parse().unwrap(),
        );
        assert_eq!(session_id_from_headers(&headers), None);
        assert_eq!(session_id_from_headers(&HeaderMap::new()), None);
    }

    #[test]
    fn cookie_is_http_only_and_site_wide() {
        let id = Uuid::nil();
        let cookie = session_cookie(id);
        assert_eq!(
            cookie.to_str().unwrap(),
            "reqdesk_session=00000000-0000-0000-0000-000000000000; Path=/; HttpOnly; SameSite=Lax"
        );
    }
}
