use rd_core::Identity;

use serde::{Deserialize, Serialize};

/// Identity as returned to clients
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct IdentityDto {
    pub id: String,
    pub email: String,
    pub display_name: String,
    /// Unix timestamp (seconds since epoch)
    pub created_at: i64,
}

impl From<Identity> for IdentityDto {
    fn from(identity: Identity) -> Self {
        Self {
            id: identity.id.to_string(),
            email: identity.email,
            display_name: identity.display_name,
            created_at: identity.created_at.timestamp(),
        }
    }
}
