//! Identity provider seam and the SQLite-backed implementation.
//!
//! The provider owns credentials. The account service only ever sees
//! [`Identity`] handles and never touches password hashes.

use crate::{Result as ServiceResult, ServiceError};

use rd_auth::{PasswordPolicy, hash_password, verify_password};
use rd_core::{Identity, is_valid_email, normalize_email};
use rd_db::IdentityRepository;

use async_trait::async_trait;
use log::{debug, warn};
use uuid::Uuid;

#[async_trait]
pub trait IdentityProvider: Send + Sync {
    /// Create an identity. Duplicate emails and policy failures are errors.
    async fn create_identity(
        &self,
        email: &str,
        display_name: &str,
        password: &str,
    ) -> ServiceResult<Identity>;

    /// Any mismatch, unknown email included, is `InvalidCredential`
    async fn verify_credentials(&self, email: &str, password: &str) -> ServiceResult<Identity>;

    async fn find_identity(&self, identity_id: Uuid) -> ServiceResult<Option<Identity>>;

    /// `false` when the identity does not exist
    async fn set_display_name(&self, identity_id: Uuid, display_name: &str)
    -> ServiceResult<bool>;
}

/// Identity provider backed by the `identities` table and Argon2 hashes
#[derive(Clone)]
pub struct LocalIdentityProvider {
    identities: IdentityRepository,
    policy: PasswordPolicy,
}

impl LocalIdentityProvider {
    pub fn new(identities: IdentityRepository, policy: PasswordPolicy) -> Self {
        Self {
            identities,
            policy,
        }
    }
}

#[async_trait]
impl IdentityProvider for LocalIdentityProvider {
    async fn create_identity(
        &self,
        email: &str,
        display_name: &str,
        password: &str,
    ) -> ServiceResult<Identity> {
        self.policy.check(password)?;

        let identity = Identity::new(normalize_email(email), display_name.trim().to_string());

        // Argon2 is CPU bound; keep it off the async workers
        let password = password.to_string();
        let password_hash = tokio::task::spawn_blocking(move || hash_password(&password))
            .await
            .map_err(ServiceError::internal)??;

        self.identities.create(&identity, &password_hash).await?;

        Ok(identity)
    }

    async fn verify_credentials(&self, email: &str, password: &str) -> ServiceResult<Identity> {
        if !is_valid_email(email) {
            return Err(ServiceError::invalid_credential());
        }

        let Some(stored) = self.identities.find_by_email(&normalize_email(email)).await? else {
            debug!("Sign-in for unregistered email rejected");
            return Err(ServiceError::invalid_credential());
        };

        let password = password.to_string();
        let password_hash = stored.password_hash;
        let matches =
            tokio::task::spawn_blocking(move || verify_password(&password, &password_hash))
                .await
                .map_err(ServiceError::internal)?;

        match matches {
            Ok(true) => Ok(stored.identity),
            Ok(false) => Err(ServiceError::invalid_credential()),
            Err(e) => {
                warn!("Stored hash for identity {} is unreadable: {}", stored.identity.id, e);
                Err(ServiceError::from(e))
            }
        }
    }

    async fn find_identity(&self, identity_id: Uuid) -> ServiceResult<Option<Identity>> {
        Ok(self.identities.find_by_id(identity_id).await?)
    }

    async fn set_display_name(
        &self,
        identity_id: Uuid,
        display_name: &str,
    ) -> ServiceResult<bool> {
        Ok(self
            .identities
            .update_display_name(identity_id, display_name)
            .await?)
    }
}
