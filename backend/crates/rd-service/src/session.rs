use rd_core::{AccountRecord, Identity};

/// Result of a successful sign-in: who signed in and their freshly loaded record
#[derive(Debug, Clone)]
pub struct Session {
    pub identity: Identity,
    pub account: AccountRecord,
}
