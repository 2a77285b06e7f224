//! Account repository implementation.

use async_trait::async_trait;
use mongodb::Collection;

use super::entities::{map_inserted_account, AccountDocument};
use crate::config::ACCOUNTS_COLLECTION;
use crate::domain::{Account, HashedAccountToCreate};
use crate::errors::AppResult;
use crate::infra::Database;

#[cfg(any(test, feature = "test-utils"))]
use mockall::automock;

/// Account repository trait for dependency injection.
#[cfg_attr(any(test, feature = "test-utils"), automock)]
#[async_trait]
pub trait AccountRepository: Send + Sync {
    /// Insert a new account and return it with its store-assigned id.
    async fn add(&self, account: HashedAccountToCreate) -> AppResult<Account>;
}

/// MongoDB implementation of AccountRepository
pub struct AccountStore {
    collection: Collection<AccountDocument>,
}

impl AccountStore {
    /// Create a repository over the `accounts` collection.
    pub fn new(db: &Database) -> Self {
        Self::with_collection(db, ACCOUNTS_COLLECTION)
    }

    /// Create a repository with a custom collection name
    pub fn with_collection(db: &Database, collection_name: &str) -> Self {
        Self {
            collection: db.collection::<AccountDocument>(collection_name),
        }
    }
}

#[async_trait]
impl AccountRepository for AccountStore {
    #[tracing::instrument(skip_all, fields(email = %account.email))]
    async fn add(&self, account: HashedAccountToCreate) -> AppResult<Account> {
        let document = AccountDocument::from(account);
        let result = self.collection.insert_one(&document).await?;

        let account = map_inserted_account(result.inserted_id, document)?;
        tracing::info!(account_id = %account.id, "Account created");
        Ok(account)
    }
}
