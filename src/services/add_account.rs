//! Account registration use case.
//!
//! Hashes the credential, then hands the account to the repository.
//! Failures from either adapter propagate unchanged.

use async_trait::async_trait;
use std::sync::Arc;

use crate::domain::{Account, AccountToCreate};
use crate::errors::{AppError, AppResult};
use crate::infra::{AccountRepository, Hasher};

#[cfg(any(test, feature = "test-utils"))]
use mockall::automock;

/// Registration use case trait for dependency injection.
#[cfg_attr(any(test, feature = "test-utils"), automock)]
#[async_trait]
pub trait AddAccount: Send + Sync {
    /// Register an account and return it as persisted.
    async fn add(&self, account: AccountToCreate) -> AppResult<Account>;
}

/// Concrete implementation of AddAccount backed by a hasher and a repository.
pub struct DbAddAccount {
    hasher: Arc<dyn Hasher>,
    account_repository: Arc<dyn AccountRepository>,
}

impl DbAddAccount {
    pub fn new(hasher: Arc<dyn Hasher>, account_repository: Arc<dyn AccountRepository>) -> Self {
        Self {
            hasher,
            account_repository,
        }
    }
}

#[async_trait]
impl AddAccount for DbAddAccount {
    #[tracing::instrument(skip_all, fields(email = %account.email))]
    async fn add(&self, account: AccountToCreate) -> AppResult<Account> {
        let password_hash = self.hasher.encrypt(&account.password).await?;
        if password_hash == account.password {
            return Err(AppError::hashing("Hasher returned the plaintext unchanged"));
        }

        let hashed = account.with_password_hash(password_hash);
        self.account_repository.add(hashed).await
    }
}
