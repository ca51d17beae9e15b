//! Account Service - the operations the game client calls.
//!
//! Every operation goes straight to the identity provider or the account
//! store; nothing is cached in process. Input validation happens before any
//! outbound call, so a rejected request never touches either collaborator.

use crate::{
    AccountStore, IdentityProvider, Leaderboard, Metrics, Result as ServiceResult, ServiceConfig,
    ServiceError, Session,
};

use rd_core::{
    AccountRecord, Credentials, Identity, LeaderboardEntry, Outcome, Registration,
    validate_display_name,
};

use std::sync::Arc;

use log::{debug, info, warn};
use uuid::Uuid;

#[derive(Clone)]
pub struct AccountService {
    identities: Arc<dyn IdentityProvider>,
    accounts: Arc<dyn AccountStore>,
    leaderboard: Leaderboard,
    config: ServiceConfig,
    metrics: Metrics,
}

impl AccountService {
    pub fn new(
        identities: Arc<dyn IdentityProvider>,
        accounts: Arc<dyn AccountStore>,
        config: ServiceConfig,
    ) -> Self {
        let leaderboard = Leaderboard::new(Arc::clone(&accounts), config.max_page_size);

        Self {
            identities,
            accounts,
            leaderboard,
            config,
            metrics: Metrics::new(),
        }
    }

    /// Create an identity. The account record is created on first load.
    pub async fn register(&self, registration: Registration) -> ServiceResult<Identity> {
        let result = self.try_register(&registration).await;

        match &result {
            Ok(identity) => {
                info!("Registered identity {}", identity.id);
                self.metrics.registration_succeeded();
            }
            Err(e) => {
                warn!("Registration rejected: {}", e);
                self.metrics.registration_rejected(e.error_code());
            }
        }

        result
    }

    async fn try_register(&self, registration: &Registration) -> ServiceResult<Identity> {
        registration.validate(self.config.max_display_name_length)?;

        self.identities
            .create_identity(
                &registration.email,
                &registration.display_name,
                &registration.password,
            )
            .await
    }

    /// Check credentials. Every rejection is the same `InvalidCredential`.
    pub async fn authenticate(&self, credentials: &Credentials) -> ServiceResult<Identity> {
        if credentials.is_blank() {
            return Err(ServiceError::invalid_credential());
        }

        self.identities
            .verify_credentials(&credentials.email, &credentials.password)
            .await
    }

    /// Authenticate, then load (or initialize) the account record
    pub async fn sign_in(&self, credentials: &Credentials) -> ServiceResult<Session> {
        let identity = match self.authenticate(credentials).await {
            Ok(identity) => identity,
            Err(e) => {
                debug!("Sign-in rejected: {}", e);
                self.metrics.sign_in_rejected();
                return Err(e);
            }
        };

        let account = self.load_or_init(identity.id).await?;
        self.metrics.sign_in_succeeded();

        Ok(Session { identity, account })
    }

    /// Return the record for `identity_id`, creating a zeroed one if absent.
    /// Concurrent first loads create exactly one record.
    pub async fn load_or_init(&self, identity_id: Uuid) -> ServiceResult<AccountRecord> {
        if let Some(record) = self.observe("load", self.accounts.find(identity_id).await)? {
            debug!("Loaded account record for {}", identity_id);
            return Ok(record);
        }

        let identity = self
            .identities
            .find_identity(identity_id)
            .await?
            .ok_or_else(|| ServiceError::unknown_identity(identity_id))?;

        let created = self.observe(
            "initialize",
            self.accounts
                .insert_if_absent(&AccountRecord::initial(&identity))
                .await,
        )?;

        if created {
            info!("Initialized account record for {}", identity_id);
            self.metrics.account_initialized();
        }

        self.observe("load", self.accounts.find(identity_id).await)?
            .ok_or_else(|| ServiceError::persistence("account record missing after initialization"))
    }

    /// Rename on both the account record and the identity.
    ///
    /// The record is written first. If the identity rename then fails, the
    /// record gets its previous name back, so a failed call leaves both names
    /// as they were.
    pub async fn update_display_name(
        &self,
        identity_id: Uuid,
        display_name: &str,
    ) -> ServiceResult<AccountRecord> {
        validate_display_name(display_name, self.config.max_display_name_length)?;
        let display_name = display_name.trim();

        let previous = self.load_or_init(identity_id).await?;

        self.rename_record(identity_id, display_name).await?;

        let renamed = match self
            .identities
            .set_display_name(identity_id, display_name)
            .await
        {
            Ok(true) => Ok(()),
            Ok(false) => Err(ServiceError::unknown_identity(identity_id)),
            Err(e) => Err(e),
        };
        if let Err(e) = renamed {
            warn!("Identity rename failed for {}: {}", identity_id, e);
            if let Err(restore) = self
                .rename_record(identity_id, &previous.display_name)
                .await
            {
                warn!(
                    "Could not restore display name for {}: {}",
                    identity_id, restore
                );
            }
            return Err(e);
        }

        info!("Display name updated for {}", identity_id);

        self.observe("load", self.accounts.find(identity_id).await)?
            .ok_or_else(|| ServiceError::persistence("account record missing after update"))
    }

    async fn rename_record(&self, identity_id: Uuid, display_name: &str) -> ServiceResult<()> {
        let updated = self.observe(
            "update_display_name",
            self.accounts
                .update_display_name(identity_id, display_name)
                .await,
        )?;
        if !updated {
            self.metrics.persistence_failed("update_display_name");
            return Err(ServiceError::persistence("display name update did not commit"));
        }
        Ok(())
    }

    /// Count one completed round and return the updated record.
    ///
    /// A failure means the round was not recorded. Nothing is retried here.
    pub async fn record_outcome(
        &self,
        identity_id: Uuid,
        outcome: Outcome,
    ) -> ServiceResult<AccountRecord> {
        let recorded = match self.increment(identity_id, outcome).await? {
            Some(record) => record,
            None => {
                self.load_or_init(identity_id).await?;
                self.increment(identity_id, outcome).await?.ok_or_else(|| {
                    ServiceError::persistence("account record missing after initialization")
                })?
            }
        };

        debug!(
            "Recorded {} for {} ({} played)",
            outcome, identity_id, recorded.matches_played
        );
        self.metrics.round_recorded(outcome);

        Ok(recorded)
    }

    async fn increment(
        &self,
        identity_id: Uuid,
        outcome: Outcome,
    ) -> ServiceResult<Option<AccountRecord>> {
        self.observe(
            "record_outcome",
            self.accounts.record_outcome(identity_id, outcome).await,
        )
    }

    pub async fn top_players(&self, limit: u32) -> ServiceResult<Vec<LeaderboardEntry>> {
        self.observe("top_players", self.leaderboard.top_players(limit).await)
    }

    fn observe<T>(&self, operation: &str, result: ServiceResult<T>) -> ServiceResult<T> {
        if let Err(e @ ServiceError::Persistence { .. }) = &result {
            warn!("{} failed: {}", operation, e);
            self.metrics.persistence_failed(operation);
        }
        result
    }
}
