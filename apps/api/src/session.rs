//! Session-scoped result slots.
//!
//! Each browser session (identified by a cookie) owns one slot. The slot's
//! recommendations are written only after a successful parse, so a failed
//! submission leaves the previous result on screen.

use std::collections::HashMap;
use std::sync::Arc;

use axum::http::{header, HeaderMap};
use chrono::{DateTime, Duration, Utc};
use tokio::sync::RwLock;
use tracing::debug;
use uuid::Uuid;

use crate::recommendation::models::RecommendationSet;

pub const SESSION_COOKIE: &str = "career_compass_session";

/// The last successful submission of a session.
#[derive(Debug, Clone)]
pub struct StoredResult {
    pub recommendations: RecommendationSet,
    pub model: String,
    pub generated_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Default)]
pub struct SessionSlot {
    pub result: Option<StoredResult>,
    /// Model picked on the last submission; pre-selected on the next render.
    pub selected_model: Option<String>,
}

#[derive(Debug)]
struct Entry {
    slot: SessionSlot,
    last_seen: DateTime<Utc>,
}

#[derive(Clone)]
pub struct SessionStore {
    inner: Arc<RwLock<HashMap<Uuid, Entry>>>,
    ttl: Duration,
}

impl SessionStore {
    pub fn new(ttl: Duration) -> Self {
        Self {
            inner: Arc::new(RwLock::new(HashMap::new())),
            ttl,
        }
    }

    /// Snapshot of a session's slot. Unknown or expired sessions read as empty.
    pub async fn get(&self, id: Uuid) -> SessionSlot {
        let now = Utc::now();
        let mut sessions = self.inner.write().await;
        match sessions.get_mut(&id) {
            Some(entry) if now - entry.last_seen <= self.ttl => {
                entry.last_seen = now;
                entry.slot.clone()
            }
            _ => SessionSlot::default(),
        }
    }

    /// Replaces the session's result. Call only with a successfully parsed set.
    pub async fn store_result(&self, id: Uuid, result: StoredResult) {
        self.update(id, |slot| {
            slot.selected_model = Some(result.model.clone());
            slot.result = Some(result);
        })
        .await;
    }

    pub async fn remember_model(&self, id: Uuid, model: &str) {
        self.update(id, |slot| slot.selected_model = Some(model.to_string()))
            .await;
    }

    async fn update(&self, id: Uuid, apply: impl FnOnce(&mut SessionSlot)) {
        let now = Utc::now();
        let mut sessions = self.inner.write().await;
        prune_expired(&mut sessions, now, self.ttl);

        let entry = sessions.entry(id).or_insert_with(|| Entry {
            slot: SessionSlot::default(),
            last_seen: now,
        });
        entry.last_seen = now;
        apply(&mut entry.slot);
    }

    #[cfg(test)]
    pub async fn len(&self) -> usize {
        self.inner.read().await.len()
    }
}

fn prune_expired(sessions: &mut HashMap<Uuid, Entry>, now: DateTime<Utc>, ttl: Duration) {
    let before = sessions.len();
    sessions.retain(|_, entry| now - entry.last_seen <= ttl);
    let pruned = before - sessions.len();
    if pruned > 0 {
        debug!("Pruned {pruned} expired sessions");
    }
}

/// Reads the session id from the request's `Cookie` header, if any.
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

pub fn session_cookie(id: Uuid) -> String {
    format!("{SESSION_COOKIE}={id}; Path=/; HttpOnly; SameSite=Lax")
}
