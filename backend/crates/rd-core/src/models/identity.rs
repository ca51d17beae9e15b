//! Identity - the authenticated user handle issued by the identity provider.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// An identity is created once at registration and its `id` never changes.
/// Exactly one [`crate::AccountRecord`] hangs off each identity.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Identity {
    pub id: Uuid,
    /// Normalized (trimmed, lowercase) email used to sign in
    pub email: String,
    pub display_name: String,
    pub created_at: DateTime<Utc>,
}

impl Identity {
    /// Create a new identity with a fresh id
    pub fn new(email: String, display_name: String) -> Self {
        Self {
            id: Uuid::new_v4(),
            email,
            display_name,
            created_at: Utc::now(),
        }
    }
}
