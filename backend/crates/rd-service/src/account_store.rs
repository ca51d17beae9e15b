//! Persistence seam for account records.

use crate::{Result as ServiceResult, ServiceError};

use rd_core::{AccountRecord, LeaderboardEntry, Outcome};
use rd_db::AccountRepository;

use async_trait::async_trait;
use uuid::Uuid;

/// Backing store for account records. Implementations must apply
/// `record_outcome` atomically: both counters move or neither does.
#[async_trait]
pub trait AccountStore: Send + Sync {
    async fn find(&self, identity_id: Uuid) -> ServiceResult<Option<AccountRecord>>;

    /// `true` only when this call created the record
    async fn insert_if_absent(&self, record: &AccountRecord) -> ServiceResult<bool>;

    /// `false` when there is no record for the identity
    async fn update_display_name(
        &self,
        identity_id: Uuid,
        display_name: &str,
    ) -> ServiceResult<bool>;

    /// `None` when there is no record for the identity
    async fn record_outcome(
        &self,
        identity_id: Uuid,
        outcome: Outcome,
    ) -> ServiceResult<Option<AccountRecord>>;

    /// Highest win counts first, at most `limit` entries
    async fn top_by_wins(&self, limit: u32) -> ServiceResult<Vec<LeaderboardEntry>>;
}

#[async_trait]
impl AccountStore for AccountRepository {
    async fn find(&self, identity_id: Uuid) -> ServiceResult<Option<AccountRecord>> {
        self.find_by_identity(identity_id)
            .await
            .map_err(ServiceError::persistence)
    }

    async fn insert_if_absent(&self, record: &AccountRecord) -> ServiceResult<bool> {
        AccountRepository::insert_if_absent(self, record)
            .await
            .map_err(ServiceError::persistence)
    }

    async fn update_display_name(
        &self,
        identity_id: Uuid,
        display_name: &str,
    ) -> ServiceResult<bool> {
        AccountRepository::update_display_name(self, identity_id, display_name)
            .await
            .map_err(ServiceError::persistence)
    }

    async fn record_outcome(
        &self,
        identity_id: Uuid,
        outcome: Outcome,
    ) -> ServiceResult<Option<AccountRecord>> {
        AccountRepository::record_outcome(self, identity_id, outcome)
            .await
            .map_err(ServiceError::persistence)
    }

    async fn top_by_wins(&self, limit: u32) -> ServiceResult<Vec<LeaderboardEntry>> {
        AccountRepository::top_by_wins(self, limit)
            .await
            .map_err(ServiceError::persistence)
    }
}
