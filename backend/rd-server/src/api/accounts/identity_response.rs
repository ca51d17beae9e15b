use crate::IdentityDto;

use serde::Serialize;

/// Response wrapper for a newly registered identity
#[derive(Debug, Serialize)]
pub struct IdentityResponse {
    pub identity: IdentityDto,
}
