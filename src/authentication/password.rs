use anyhow::{Context, anyhow};
use argon2::PasswordHasher;
use argon2::PasswordVerifier;
use secrecy::{ExposeSecret, Secret};

use crate::domain::Username;
use crate::storage::{Account, MemStorage};
use crate::telemetry::spawn_blocking_with_async;

#[derive(thiserror::Error, Debug)]
pub enum AuthError {
    #[error("Invalid Credentials")]
    InvalidCredentials(#[source] anyhow::Error),
    #[error(transparent)]
    UnexpectedError(#[from] anyhow::Error),
}

#[derive(Debug)]
pub struct Credentials {
    pub username: String,
    pub password: Secret<String>,
}

// Verified against when the username is unknown, so both paths do the same work.
const DUMMY_PASSWORD_HASH: &str = "$argon2id$v=19$m=19456,t=2,p=1$\
    vNXfNE0l0bV2e1R7vDhL8w$uvhiLTsidsTzLUUYFHJbjZ5AKEMDEySRhwVZFcehFWs";

#[tracing::instrument(name = "Validate credentials", skip(credentials, store))]
pub async fn validate_credentials(
    store: &MemStorage,
    credentials: Credentials,
) -> Result<u64, AuthError> {
    let mut password_hash = Secret::new(DUMMY_PASSWORD_HASH.to_owned());
    let mut account_id = None;

    if let Some(account) = store.get_account_by_username(&credentials.username) {
        account_id = Some(account.id);
        password_hash = account.password;
    }

    spawn_blocking_with_async(move || verify_password_hash(password_hash, credentials.password))
        .await
        .context("Failed to spawn blocking task")??;

    account_id
        .ok_or_else(|| anyhow!("Unknown username"))
        .map_err(AuthError::InvalidCredentials)
}

#[tracing::instrument(name = "Verify password hash", skip(expected_hash, given_password))]
fn verify_password_hash(
    expected_hash: Secret<String>,
    given_password: Secret<String>,
) -> Result<(), AuthError> {
    let argon2 = argon2::Argon2::default();

    let hash = argon2::password_hash::PasswordHash::new(expected_hash.expose_secret())
        .context("Failed to parse hash in PHC string format.")?;

    if let Err(e) = argon2.verify_password(given_password.expose_secret().as_bytes(), &hash) {
        match e {
            argon2::password_hash::Error::Password => {
                return Err(AuthError::InvalidCredentials(anyhow!("Invalid password")));
            }
            _ => return Err(anyhow::Error::new(e).into()),
        }
    }
    Ok(())
}

fn compute_password_hash(password: Secret<String>) -> Result<Secret<String>, anyhow::Error> {
    let params = argon2::Params::new(19 * 1024, 2, 1, None)
        .context("Failed to build argon2 parameters")?;
    let argon2 = argon2::Argon2::new(argon2::Algorithm::Argon2id, argon2::Version::V0x13, params);

    let salt = argon2::password_hash::SaltString::generate(rand::thread_rng());

    let hash = Secret::new(
        argon2
            .hash_password(password.expose_secret().as_bytes(), &salt)?
            .to_string(),
    );
    Ok(hash)
}

/// Hashes `password` and stores a new account under `username`.
#[tracing::instrument(name = "Register account", skip(store, password))]
pub async fn register_account(
    store: &MemStorage,
    username: Username,
    password: Secret<String>,
) -> Result<Account, anyhow::Error> {
    let hash = spawn_blocking_with_async(move || compute_password_hash(password))
        .await?
        .context("Failed to hash password")?;
    Ok(store.create_account(username.as_ref(), hash))
}
