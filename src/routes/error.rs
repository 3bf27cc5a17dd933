use actix_web::error::{InternalError, JsonPayloadError};
use actix_web::http::StatusCode;
use actix_web::http::header::{HeaderValue, WWW_AUTHENTICATE};
use actix_web::{HttpRequest, HttpResponse};
use serde::Serialize;

use crate::authentication::AuthError;

#[derive(thiserror::Error)]
pub enum ApiError {
    #[error("{0}")]
    ValidationError(String),
    #[error("Authentication failed")]
    AuthError(#[source] anyhow::Error),
    #[error(transparent)]
    UnexpectedError(#[from] anyhow::Error),
}

impl std::fmt::Debug for ApiError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        error_chain_fmt(self, f)
    }
}

impl From<AuthError> for ApiError {
    fn from(e: AuthError) -> Self {
        match e {
            AuthError::InvalidCredentials(e) => Self::AuthError(e),
            AuthError::UnexpectedError(e) => Self::UnexpectedError(e),
        }
    }
}

/// JSON body of every non-2xx response.
#[derive(Serialize)]
pub struct ErrorBody {
    pub message: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub errors: Option<String>,
}

impl ErrorBody {
    pub fn validation(errors: String) -> Self {
        Self {
            message: "Validation error",
            errors: Some(errors),
        }
    }
}

impl actix_web::ResponseError for ApiError {
    fn status_code(&self) -> StatusCode {
        match self {
            Self::ValidationError(_) => StatusCode::BAD_REQUEST,
            Self::AuthError(_) => StatusCode::UNAUTHORIZED,
            Self::UnexpectedError(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn error_response(&self) -> HttpResponse {
        let mut response = HttpResponse::build(self.status_code());
        match self {
            Self::ValidationError(errors) => response.json(ErrorBody::validation(errors.clone())),
            Self::AuthError(_) => response
                .insert_header((
                    WWW_AUTHENTICATE,
                    HeaderValue::from_static(r#"Basic realm="listings""#),
                ))
                .json(ErrorBody {
                    message: "Authentication required",
                    errors: None,
                }),
            Self::UnexpectedError(e) => {
                tracing::error!(
                    error.cause_chain = ?e,
                    error.message = %e,
                    "Unexpected error while handling request"
                );
                response.json(ErrorBody {
                    message: "Internal server error",
                    errors: None,
                })
            }
        }
    }
}

/// Turns body extraction failures (malformed JSON, missing fields) into the
/// same 400 body as a failed field validation.
pub fn json_error_handler(err: JsonPayloadError, _req: &HttpRequest) -> actix_web::Error {
    let response = HttpResponse::BadRequest().json(ErrorBody::validation(err.to_string()));
    InternalError::from_response(err, response).into()
}

pub fn error_chain_fmt(
    e: &impl std::error::Error,
    f: &mut std::fmt::Formatter<'_>,
) -> std::fmt::Result {
    writeln!(f, "{}\n", e)?;
    let mut current = e.source();
    while let Some(cause) = current {
        writeln!(f, "Caused by:\n\t{}", cause)?;
        current = cause.source();
    }
    Ok(())
}
