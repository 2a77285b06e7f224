//! Account domain entity and its creation stages.
//!
//! An account moves through three shapes: [`AccountToCreate`] (validated,
//! plaintext password), [`HashedAccountToCreate`] (password replaced by its
//! hash) and finally [`Account`], which only the persistence layer produces.

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Registered account.
///
/// `password` holds the hash, never the plaintext. `id` is assigned by the
/// persistence layer and never changes afterwards.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct Account {
    /// Store-generated identifier
    #[schema(example = "65f1c0ffee0123456789abcd")]
    pub id: String,
    #[schema(example = "Tauan Gabriel")]
    pub name: String,
    #[schema(example = "tauan@email.com")]
    pub email: String,
    /// Password hash (PHC string)
    #[schema(example = "$argon2id$v=19$m=19456,t=2,p=1$...")]
    pub password: String,
}

/// Validated signup data, password still in plaintext.
#[derive(Clone, PartialEq, Eq)]
pub struct AccountToCreate {
    pub name: String,
    pub email: String,
    pub password: String,
}

// Don't expose the plaintext password in debug output
impl std::fmt::Debug for AccountToCreate {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AccountToCreate")
            .field("name", &self.name)
            .field("email", &self.email)
            .field("password", &"[REDACTED]")
            .finish()
    }
}

impl AccountToCreate {
    pub fn new(name: impl Into<String>, email: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            email: email.into(),
            password: password.into(),
        }
    }

    /// Replace the plaintext password with its hash, consuming the plaintext.
    pub fn with_password_hash(self, password_hash: String) -> HashedAccountToCreate {
        HashedAccountToCreate {
            name: self.name,
            email: self.email,
            password: password_hash,
        }
    }
}

/// Account ready for storage; `password` is the hash.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HashedAccountToCreate {
    pub name: String,
    pub email: String,
    pub password: String,
}
