use crate::AccountDto;

use serde::Serialize;

/// Response wrapper for a single score record
#[derive(Debug, Serialize)]
pub struct AccountResponse {
    pub account: AccountDto,
}
