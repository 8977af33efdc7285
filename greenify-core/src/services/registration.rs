//! Registration service - server side of `POST /api/register`
//!
//! Validates the three required fields, hashes the password with Argon2id
//! and inserts a row. The outcome is always a status code plus a
//! `{success, message}` body.

use std::sync::Arc;

use anyhow::{anyhow, Result};
use argon2::password_hash::{PasswordHash, PasswordHasher, PasswordVerifier, SaltString};
use argon2::{Algorithm, Argon2, Params, Version};
use axum::http::StatusCode;
use rand::Rng;

use crate::domain::credentials::DEFAULT_SALT_LEN;
use crate::domain::registration::{MSG_DB_ERROR, MSG_MISSING_FIELDS, MSG_REGISTERED};
use crate::domain::{Argon2Params, RegisteredUser, RegistrationRequest, RegistrationResponse};
use crate::ports::UserRepository;

pub struct RegistrationService {
    repo: Arc<dyn UserRepository>,
    params: Argon2Params,
}

impl RegistrationService {
    pub fn new(repo: Arc<dyn UserRepository>) -> Self {
        Self::with_params(repo, Argon2Params::default())
    }

    pub fn with_params(repo: Arc<dyn UserRepository>, params: Argon2Params) -> Self {
        Self { repo, params }
    }

    /// Handle one registration request.
    ///
    /// 400 when a field is missing or empty, 500 when hashing or the insert
    /// fails, 200 otherwise. Duplicate emails are accepted.
    pub fn register(&self, request: &RegistrationRequest) -> (StatusCode, RegistrationResponse) {
        let Some((name, email, password)) = request.required_fields() else {
            return (
                StatusCode::BAD_REQUEST,
                RegistrationResponse::fail(MSG_MISSING_FIELDS),
            );
        };

        let stored = hash_password(password, &self.params)
            .map(|hash| RegisteredUser::new(name, email, hash))
            .and_then(|user| self.repo.insert_user(&user));

        match stored {
            Ok(()) => (StatusCode::OK, RegistrationResponse::ok(MSG_REGISTERED)),
            Err(e) => {
                tracing::error!("Registration insert failed: {:#}", e);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    RegistrationResponse::fail(MSG_DB_ERROR),
                )
            }
        }
    }
}

fn argon2(params: &Argon2Params) -> Result<Argon2<'static>> {
    let params = Params::new(params.memory_cost, params.time_cost, params.parallelism, None)
        .map_err(|e| anyhow!("Invalid argon2 params: {}", e))?;
    Ok(Argon2::new(Algorithm::Argon2id, Version::V0x13, params))
}

/// Argon2id PHC string for `password` with a fresh random salt
pub fn hash_password(password: &str, params: &Argon2Params) -> Result<String> {
    let salt_bytes: [u8; DEFAULT_SALT_LEN] = rand::thread_rng().gen();
    let salt = SaltString::encode_b64(&salt_bytes)
        .map_err(|e| anyhow!("Failed to encode salt: {}", e))?;

    let hash = argon2(params)?
        .hash_password(password.as_bytes(), &salt)
        .map_err(|e| anyhow!("Failed to hash password: {}", e))?;
    Ok(hash.to_string())
}

/// Check `password` against a PHC string produced by [`hash_password`]
pub fn verify_password(password: &str, phc: &str) -> Result<bool> {
    let parsed = PasswordHash::new(phc).map_err(|e| anyhow!("Invalid password hash: {}", e))?;
    // Cost parameters are read from the PHC string itself
    Ok(Argon2::default()
        .verify_password(password.as_bytes(), &parsed)
        .is_ok())
}
