//! Transport Session Bookkeeping
//!
//! Tracks the `mcp-session-id` values seen by the HTTP transport. Sessions
//! carry no protocol state; the registry only exists so the id can be echoed
//! back and so the number of remembered ids stays bounded.

use dashmap::DashMap;
use std::time::Instant;
use uuid::Uuid;

/// Header carrying the transport session identifier.
pub const SESSION_HEADER: &str = "mcp-session-id";

#[derive(Debug, Clone, Copy)]
pub struct SessionInfo {
    pub created_at: Instant,
    pub last_seen: Instant,
    pub requests: u64,
}

/// Concurrent registry of known sessions, capped at `capacity` entries.
///
/// When a new session would exceed the cap, the least recently seen session
/// is evicted first.
pub struct SessionRegistry {
    sessions: DashMap<String, SessionInfo>,
    capacity: usize,
}

impl SessionRegistry {
    pub fn new(capacity: usize) -> Self {
        Self {
            sessions: DashMap::new(),
            capacity: capacity.max(1),
        }
    }

    /// Records a request for `session_id`, minting a fresh id when the client
    /// did not send one. Returns the id to echo back.
    pub fn touch(&self, session_id: Option<&str>) -> String {
        let id = match session_id {
            Some(id) if !id.is_empty() => id.to_string(),
            _ => format!("session_{}", Uuid::new_v4().simple()),
        };
        let now = Instant::now();

        if let Some(mut info) = self.sessions.get_mut(&id) {
            info.last_seen = now;
            info.requests += 1;
            return id;
        }

        while self.sessions.len() >= self.capacity {
            if !self.evict_oldest() {
                break;
            }
        }

        tracing::debug!(session = %id, "New MCP session");
        self.sessions.insert(
            id.clone(),
            SessionInfo {
                created_at: now,
                last_seen: now,
                requests: 1,
            },
        );
        id
    }

    /// Removes the least recently seen session. Returns false when empty.
    fn evict_oldest(&self) -> bool {
        let oldest = self
            .sessions
            .iter()
            .min_by_key(|entry| entry.value().last_seen)
            .map(|entry| entry.key().clone());

        match oldest {
            Some(id) => {
                tracing::debug!(session = %id, "Evicting idle MCP session");
                self.sessions.remove(&id);
                true
            }
            None => false,
        }
    }

    pub fn get(&self, session_id: &str) -> Option<SessionInfo> {
        self.sessions.get(session_id).map(|info| *info)
    }

    pub fn len(&self) -> usize {
        self.sessions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sessions.is_empty()
    }
}
