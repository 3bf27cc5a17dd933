use actix_web::http::header::HeaderMap;
use anyhow::{Context, anyhow};
use base64::Engine;
use secrecy::Secret;

use super::Credentials;

/// Extracts credentials from an `Authorization: Basic <base64(user:pass)>` header.
pub fn basic_authentication(headers: &HeaderMap) -> Result<Credentials, anyhow::Error> {
    let encoded_auth = headers
        .get("Authorization")
        .context("The Authorization header was missing")?
        .to_str()
        .context("Authorization header content was not a valid UTF-8 string")?
        .strip_prefix("Basic ")
        .context("The Authorization scheme was not basic")?;

    let decoded = String::from_utf8(
        base64::engine::general_purpose::STANDARD
            .decode(encoded_auth)
            .context("Could not decode base64 credentials")?,
    )
    .context("Decoded header content is not valid utf-8")?;

    let mut split = decoded.splitn(2, ':');

    let (username, password) = (
        split
            .next()
            .ok_or_else(|| anyhow!("Basic auth must contain a username"))?
            .to_string(),
        split
            .next()
            .ok_or_else(|| anyhow!("Basic auth must contain a password"))?
            .to_string(),
    );

    Ok(Credentials {
        username,
        password: Secret::new(password),
    })
}
