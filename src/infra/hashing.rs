//! Password hashing adapter.
//!
//! Wraps Argon2id behind the [`Hasher`] trait so the registration use case
//! never touches the primitive directly.

use argon2::{
    password_hash::{rand_core::OsRng, PasswordHash, PasswordHasher, PasswordVerifier, SaltString},
    Algorithm, Argon2, Params, Version,
};
use async_trait::async_trait;

use crate::errors::{AppError, AppResult};

#[cfg(any(test, feature = "test-utils"))]
use mockall::automock;

/// One-way hashing of a plaintext credential.
#[cfg_attr(any(test, feature = "test-utils"), automock)]
#[async_trait]
pub trait Hasher: Send + Sync {
    /// Derive a salted hash of `plaintext`.
    ///
    /// The same input yields a different output on every call.
    async fn encrypt(&self, plaintext: &str) -> AppResult<String>;
}

/// Argon2id hasher with a fixed cost.
#[derive(Debug, Clone, Default)]
pub struct Argon2Hasher {
    params: Params,
}

impl Argon2Hasher {
    /// Create a hasher with explicit cost parameters.
    pub fn new(params: Params) -> Self {
        Self { params }
    }

    /// Create a hasher from raw cost values.
    ///
    /// # Errors
    /// Returns a hashing error if Argon2 rejects the combination.
    pub fn with_cost(memory_kib: u32, iterations: u32, parallelism: u32) -> AppResult<Self> {
        let params = Params::new(memory_kib, iterations, parallelism, None)
            .map_err(|e| AppError::hashing(format!("Invalid Argon2 parameters: {}", e)))?;
        Ok(Self::new(params))
    }

    /// Check a plaintext against a PHC hash string produced by this hasher.
    pub fn verify(&self, plaintext: &str, hash: &str) -> bool {
        PasswordHash::new(hash)
            .map(|parsed| {
                self.argon2()
                    .verify_password(plaintext.as_bytes(), &parsed)
                    .is_ok()
            })
            .unwrap_or(false)
    }

    #[inline]
    fn argon2(&self) -> Argon2<'static> {
        Argon2::new(Algorithm::Argon2id, Version::V0x13, self.params.clone())
    }

    fn hash_blocking(&self, plaintext: &str) -> AppResult<String> {
        let salt = SaltString::generate(&mut OsRng);
        let hash = self
            .argon2()
            .hash_password(plaintext.as_bytes(), &salt)
            .map_err(|e| AppError::hashing(format!("Password hash failed: {}", e)))?;
        Ok(hash.to_string())
    }
}

#[async_trait]
impl Hasher for Argon2Hasher {
    #[tracing::instrument(skip_all)]
    async fn encrypt(&self, plaintext: &str) -> AppResult<String> {
        let hasher = self.clone();
        let plaintext = plaintext.to_owned();

        // CPU-bound: keep it off the async worker threads
        tokio::task::spawn_blocking(move || hasher.hash_blocking(&plaintext))
            .await
            .map_err(|e| AppError::hashing(format!("Hashing task failed: {}", e)))?
    }
}
