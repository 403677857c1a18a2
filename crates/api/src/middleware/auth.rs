//! Session-token authentication extractor for Axum handlers.

use axum::extract::FromRequestParts;
use axum::http::header::{AUTHORIZATION, COOKIE};
use axum::http::request::Parts;
use projecthub_core::error::CoreError;
use projecthub_core::roles::ROLE_MEMBER;

use crate::auth::session::validate_session_token;
use crate::error::AppError;
use crate::state::AppState;

/// Cookie carrying the session token when no `Authorization` header is sent.
pub const SESSION_COOKIE: &str = "session_token";

/// Authenticated user extracted from the session token.
///
/// The token is read from `Authorization: Bearer <token>`, falling back to
/// the [`SESSION_COOKIE`] cookie. Use this as an extractor parameter in any
/// handler that requires authentication:
///
/// ```ignore
/// async fn my_handler(user: AuthUser) -> AppResult<Json<()>> {
///     tracing::info!(user = %user.name, role = %user.role, "handling request");
///     Ok(Json(()))
/// }
/// ```
#[derive(Debug, Clone)]
pub struct AuthUser {
    /// The identity provider's user id (from `claims.sub`).
    pub id: String,
    pub email: Option<String>,
    /// Display name, trimmed. The key for project ownership and team
    /// membership, which are stored trimmed as well.
    pub name: String,
    /// Role name (`"admin"` or `"member"`).
    pub role: String,
}

impl FromRequestParts<AppState> for AuthUser {
    type Rejection = AppError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let token = session_token(parts)?;

        let claims = validate_session_token(token, &state.config.session)
            .map_err(|e| unauthorized(format!("Invalid or expired session token: {e}")))?;

        if claims.name.trim().is_empty() {
            return Err(unauthorized("Session token has no user name".into()));
        }

        Ok(AuthUser {
            id: claims.sub,
            email: claims.email,
            name: claims.name.trim().to_string(),
            role: claims.role.unwrap_or_else(|| ROLE_MEMBER.to_string()),
        })
    }
}

/// Locate the raw session token in the request headers.
///
/// A `Bearer` authorization header wins; any other authorization value is
/// ignored in favour of the session cookie.
fn session_token(parts: &Parts) -> Result<&str, AppError> {
    let bearer = parts
        .headers
        .get(AUTHORIZATION)
        .and_then(|v| v.to_str().ok())
        .and_then(bearer_token);
    if let Some(token) = bearer {
        return Ok(token);
    }

    parts
        .headers
        .get_all(COOKIE)
        .iter()
        .filter_map(|v| v.to_str().ok())
        .flat_map(|v| v.split(';'))
        .find_map(|pair| {
            let (name, value) = pair.trim().split_once('=')?;
            (name == SESSION_COOKIE && !value.is_empty()).then_some(value)
        })
        .ok_or_else(|| unauthorized("Missing session token".into()))
}

/// Credentials of a `Bearer` authorization value. The scheme name is
/// case-insensitive.
fn bearer_token(value: &str) -> Option<&str> {
    let (scheme, token) = value.trim().split_once(' ')?;
    let token = token.trim();
    (scheme.eq_ignore_ascii_case("bearer") && !token.is_empty()).then_some(token)
}

fn unauthorized(reason: String) -> AppError {
    AppError::Core(CoreError::Unauthorized(reason))
}
