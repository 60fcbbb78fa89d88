use std::sync::Arc;

use axum::extract::{FromRequestParts, Request, State};
use axum::http::request::Parts;
use axum::http::{HeaderMap, StatusCode, header};
use axum::middleware::Next;
use axum::response::{IntoResponse, Response};
use thiserror::Error;

use roster_core::{AppError, Identity, TokenIssuer};

use crate::dto::ErrorResponse;
use crate::error::ApiError;
use crate::state::AppState;

/// Why a request was turned away.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RejectReason {
    #[error("Missing Authorization header. Expected: Bearer <token>")]
    MissingToken,
    #[error("Malformed Authorization header. Expected: Bearer <token>")]
    MalformedHeader,
    #[error("Invalid or expired token")]
    InvalidToken,
}

/// Result of checking a request's bearer token.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AuthOutcome {
    Authenticated(Identity),
    Rejected(RejectReason),
}

/// Decide whether the headers carry a valid bearer token.
pub fn authenticate<T: TokenIssuer>(headers: &HeaderMap, tokens: &T) -> AuthOutcome {
    let Some(value) = headers.get(header::AUTHORIZATION) else {
        return AuthOutcome::Rejected(RejectReason::MissingToken);
    };

    // The auth scheme name is case-insensitive (RFC 9110 section 11.1).
    let token = value
        .to_str()
        .ok()
        .and_then(|v| v.split_once(' '))
        .filter(|(scheme, _)| scheme.eq_ignore_ascii_case("Bearer"))
        .map(|(_, token)| token.trim())
        .filter(|t| !t.is_empty());

    let Some(token) = token else {
        return AuthOutcome::Rejected(RejectReason::MalformedHeader);
    };

    match tokens.verify(token) {
        Ok(claims) => AuthOutcome::Authenticated(claims.into()),
        Err(_) => AuthOutcome::Rejected(RejectReason::InvalidToken),
    }
}

/// Middleware that validates `Authorization: Bearer <token>` and attaches the [`Identity`].
pub async fn require_bearer(
    State(state): State<Arc<AppState>>,
    mut request: Request,
    next: Next,
) -> Response {
    match authenticate(request.headers(), state.auth.tokens()) {
        AuthOutcome::Authenticated(identity) => {
            request.extensions_mut().insert(identity);
            next.run(request).await
        }
        AuthOutcome::Rejected(reason) => {
            tracing::debug!(%reason, path = %request.uri().path(), "Request rejected");
            let body = ErrorResponse {
                error: "unauthorized".to_string(),
                message: reason.to_string(),
            };
            (StatusCode::UNAUTHORIZED, axum::Json(body)).into_response()
        }
    }
}

/// Extractor for the identity attached by [`require_bearer`].
#[derive(Debug, Clone, Copy)]
pub struct CurrentUser(pub Identity);

impl<S> FromRequestParts<S> for CurrentUser
where
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        parts
            .extensions
            .get::<Identity>()
            .copied()
            .map(CurrentUser)
            .ok_or_else(|| ApiError(AppError::Unauthorized("not authenticated".into())))
    }
}
