use crate::{AccountDto, IdentityDto};

use serde::{Deserialize, Serialize};

/// Session token plus the signed-in player's identity and score record
#[derive(Debug, Serialize, Deserialize)]
pub struct SessionResponse {
    /// HS256 bearer token for the `/api/v1/me` routes
    pub token: String,
    pub identity: IdentityDto,
    pub account: AccountDto,
}
