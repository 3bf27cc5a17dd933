use actix_web::HttpRequest;

use crate::authentication::{basic_authentication, validate_credentials};
use crate::startup::ListingProtection;
use crate::storage::MemStorage;

use super::ApiError;

/// Lets the request through unless listings are protected, in which case it
/// must carry Basic credentials of a stored account.
#[tracing::instrument(
    name = "Check listing access",
    skip_all,
    fields(username = tracing::field::Empty, account_id = tracing::field::Empty)
)]
pub async fn check_listing_access(
    request: &HttpRequest,
    store: &MemStorage,
    protection: &ListingProtection,
) -> Result<(), ApiError> {
    if !protection.0 {
        return Ok(());
    }

    let credentials = basic_authentication(request.headers()).map_err(ApiError::AuthError)?;
    tracing::Span::current().record("username", tracing::field::display(&credentials.username));
    let account_id = validate_credentials(store, credentials).await?;
    tracing::Span::current().record("account_id", tracing::field::display(account_id));
    Ok(())
}
