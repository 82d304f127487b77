//! Guest session lifecycle
//!
//! Sessions bind a guest device to one restaurant table for a bounded time.
//! Records are immutable after creation and never deleted; expiry is checked
//! lazily at validation time, so there is no background sweep. The store is
//! append-only, which makes validation concurrency-safe by construction.

use chrono::{DateTime, Duration, Utc};
use dashmap::DashMap;
use shared::models::GuestSession;
use thiserror::Error;
use uuid::Uuid;

/// Session validation errors
#[derive(Debug, Error)]
pub enum SessionError {
    #[error("Session {0} not found")]
    NotFound(Uuid),

    #[error("Session {0} expired")]
    Expired(Uuid),

    #[error("Table mismatch: session is bound to table '{bound}', request says '{requested}'")]
    TableMismatch { bound: String, requested: String },
}

/// Session manager
///
/// Keyed by session id, with a (restaurant, table) index used to hand an
/// existing still-valid session back to a guest who re-scans the same QR code.
pub struct SessionManager {
    ttl: Duration,
    sessions: DashMap<Uuid, GuestSession>,
    by_table: DashMap<(String, String), Uuid>,
}

impl SessionManager {
    pub fn new(ttl: Duration) -> Self {
        Self {
            ttl,
            sessions: DashMap::new(),
            by_table: DashMap::new(),
        }
    }

    /// Create a session for a restaurant table, or return the existing one if
    /// it is still valid
    ///
    /// Restaurant existence is checked by the caller against the catalog;
    /// this layer only owns session records.
    pub fn create(&self, restaurant_slug: &str, table_id: &str) -> GuestSession {
        use dashmap::mapref::entry::Entry;

        let key = (restaurant_slug.to_string(), table_id.to_string());
        let now = Utc::now();

        // Entry lock on the index serializes concurrent scans of one table,
        // so a table never ends up with two live sessions
        match self.by_table.entry(key) {
            Entry::Occupied(mut occupied) => {
                if let Some(existing) = self.sessions.get(occupied.get()) {
                    if existing.is_valid_at(now) {
                        return existing.clone();
                    }
                }
                let session = self.mint(restaurant_slug, table_id, now);
                occupied.insert(session.session_id);
                session
            }
            Entry::Vacant(vacant) => {
                let session = self.mint(restaurant_slug, table_id, now);
                vacant.insert(session.session_id);
                session
            }
        }
    }

    fn mint(&self, restaurant_slug: &str, table_id: &str, now: DateTime<Utc>) -> GuestSession {
        let session = GuestSession {
            session_id: Uuid::new_v4(),
            restaurant_slug: restaurant_slug.to_string(),
            table_id: table_id.to_string(),
            created_at: now,
            expires_at: now + self.ttl,
        };
        self.sessions.insert(session.session_id, session.clone());

        tracing::info!(
            session_id = %session.session_id,
            restaurant = restaurant_slug,
            table = table_id,
            expires_at = %session.expires_at,
            "Guest session created"
        );
        session
    }

    /// Validate a session id, optionally against an expected table
    ///
    /// Expired sessions are kept but rejected; the record itself stays
    /// inspectable.
    pub fn validate(
        &self,
        session_id: Uuid,
        expected_table: Option<&str>,
    ) -> Result<GuestSession, SessionError> {
        self.validate_at(session_id, expected_table, Utc::now())
    }

    /// Validation against an explicit clock, used by tests to pin the boundary
    pub fn validate_at(
        &self,
        session_id: Uuid,
        expected_table: Option<&str>,
        now: DateTime<Utc>,
    ) -> Result<GuestSession, SessionError> {
        let session = self
            .sessions
            .get(&session_id)
            .ok_or(SessionError::NotFound(session_id))?;

        if !session.is_valid_at(now) {
            return Err(SessionError::Expired(session_id));
        }

        if let Some(table) = expected_table {
            if session.table_id != table {
                return Err(SessionError::TableMismatch {
                    bound: session.table_id.clone(),
                    requested: table.to_string(),
                });
            }
        }

        Ok(session.clone())
    }
}
