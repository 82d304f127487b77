//! Guest session model

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Guest session binding one device to a restaurant table
///
/// Immutable after creation. A session is usable strictly while
/// `now < expires_at`; expired sessions are kept but rejected at validation
/// time (lazy expiry, no background sweep).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GuestSession {
    /// Opaque unguessable token (UUID v4, 122 random bits)
    pub session_id: Uuid,
    pub restaurant_slug: String,
    pub table_id: String,
    pub created_at: DateTime<Utc>,
    pub expires_at: DateTime<Utc>,
}

impl GuestSession {
    /// Whether the session is still usable at `now`
    pub fn is_valid_at(&self, now: DateTime<Utc>) -> bool {
        now < self.expires_at
    }
}
