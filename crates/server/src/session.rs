// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Bearer token extraction for the server.
//!
//! Tokens come from `POST /auth/login` and are resolved against the
//! in-process session table on every request.

use axum::{
    Json,
    extract::{FromRequestParts, OptionalFromRequestParts},
    http::{StatusCode, header::AUTHORIZATION, request::Parts},
    response::{IntoResponse, Response},
};
use hotel_desk::Session;
use tracing::{debug, warn};

use crate::{AppState, ErrorResponse};

/// Extractor for logged-in callers.
///
/// # Usage
///
/// ```ignore
/// async fn my_handler(
///     SessionCaller { session, .. }: SessionCaller,
/// ) -> Result<Json<Response>, HttpError> {
///     Ok(Json(Response { ... }))
/// }
/// ```
///
/// Wrapped in `Option`, a request without an `Authorization` header
/// yields `None`; a header that is present must still be valid.
///
/// # Errors
///
/// Returns HTTP 401 Unauthorized if:
/// - Authorization header is missing
/// - Authorization header format is invalid
/// - The token is unknown or was revoked
pub struct SessionCaller {
    pub session: Session,
    pub token: String,
}

/// Reads the bearer token, if any.
fn bearer_token(parts: &Parts) -> Result<Option<String>, SessionError> {
    let Some(value) = parts.headers.get(AUTHORIZATION) else {
        return Ok(None);
    };

    let header: &str = value.to_str().map_err(|_| {
        warn!("Invalid Authorization header encoding");
        SessionError::InvalidAuthorizationHeader
    })?;

    let token: &str = header.strip_prefix("Bearer ").ok_or_else(|| {
        warn!("Authorization header does not start with 'Bearer '");
        SessionError::InvalidAuthorizationHeader
    })?;

    Ok(Some(token.trim().to_string()))
}

fn resolve(state: &AppState, token: String) -> Result<SessionCaller, SessionError> {
    let session: Session = state.sessions.resolve(&token).ok_or_else(|| {
        warn!("Unknown or revoked session token");
        SessionError::InvalidSession
    })?;

    debug!(
        username = session.username.value(),
        role = session.role.as_str(),
        "Session validated"
    );
    Ok(SessionCaller { session, token })
}

impl FromRequestParts<AppState> for SessionCaller {
    type Rejection = SessionError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let token: String = bearer_token(parts)?.ok_or_else(|| {
            debug!("Missing Authorization header");
            SessionError::MissingAuthorizationHeader
        })?;
        resolve(state, token)
    }
}

impl OptionalFromRequestParts<AppState> for SessionCaller {
    type Rejection = SessionError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Option<Self>, Self::Rejection> {
        match bearer_token(parts)? {
            Some(token) => resolve(state, token).map(Some),
            None => Ok(None),
        }
    }
}

/// Session extraction errors.
///
/// These errors are returned when session validation fails and are
/// automatically converted to HTTP responses.
#[derive(Debug)]
pub enum SessionError {
    /// Authorization header is missing.
    MissingAuthorizationHeader,
    /// Authorization header format is invalid.
    InvalidAuthorizationHeader,
    /// The token is not in the session table.
    InvalidSession,
}

impl IntoResponse for SessionError {
    fn into_response(self) -> Response {
        let message: &str = match self {
            Self::MissingAuthorizationHeader => "Missing Authorization header",
            Self::InvalidAuthorizationHeader => {
                "Invalid Authorization header format. Expected: 'Bearer <token>'"
            }
            Self::InvalidSession => "Session is not active",
        };

        let body: Json<ErrorResponse> = Json(ErrorResponse {
            error: true,
            message: message.to_string(),
        });
        (StatusCode::UNAUTHORIZED, body).into_response()
    }
}
