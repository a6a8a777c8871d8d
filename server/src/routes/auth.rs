//! Auth routes — signup, login, session management.

#[cfg(test)]
#[path = "auth_test.rs"]
mod tests;

use axum::extract::{FromRef, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Json};
use axum_extra::extract::cookie::{Cookie, CookieJar, SameSite};
use serde::{Deserialize, Serialize};
use time::Duration;

use crate::services::auth::{self as auth_svc, AuthError};
use crate::services::session;
use crate::state::AppState;

const COOKIE_NAME: &str = "session_token";

pub(crate) fn env_bool(key: &str) -> Option<bool> {
    std::env::var(key)
        .ok()
        .and_then(|raw| match raw.trim().to_ascii_lowercase().as_str() {
            "1" | "true" | "yes" | "on" => Some(true),
            "0" | "false" | "no" | "off" => Some(false),
            _ => None,
        })
}

pub(crate) fn cookie_secure() -> bool {
    env_bool("COOKIE_SECURE").unwrap_or(false)
}

fn session_cookie(token: String) -> Cookie<'static> {
    Cookie::build((COOKIE_NAME, token))
        .path("/")
        .http_only(true)
        .same_site(SameSite::Lax)
        .secure(cookie_secure())
        .build()
}

fn clear_session_cookie() -> Cookie<'static> {
    Cookie::build((COOKIE_NAME, ""))
        .path("/")
        .http_only(true)
        .same_site(SameSite::Lax)
        .secure(cookie_secure())
        .max_age(Duration::ZERO)
        .build()
}

// =============================================================================
// AUTH EXTRACTOR
// =============================================================================

/// Authenticated user extracted from the session cookie.
/// Use as a handler parameter to require authentication.
pub struct AuthUser {
    pub user: session::SessionUser,
    pub token: String,
}

impl<S> axum::extract::FromRequestParts<S> for AuthUser
where
    AppState: FromRef<S>,
    S: Send + Sync,
{
    type Rejection = StatusCode;

    async fn from_request_parts(parts: &mut axum::http::request::Parts, state: &S) -> Result<Self, Self::Rejection> {
        let jar = CookieJar::from_headers(&parts.headers);
        let token = jar.get(COOKIE_NAME).map(Cookie::value).unwrap_or_default();
        if token.is_empty() {
            return Err(StatusCode::UNAUTHORIZED);
        }

        let app_state = AppState::from_ref(state);
        let user = session::validate_session(&app_state.pool, token)
            .await
            .map_err(|_| StatusCode::INTERNAL_SERVER_ERROR)?
            .ok_or(StatusCode::UNAUTHORIZED)?;

        Ok(Self { user, token: token.to_owned() })
    }
}

// =============================================================================
// ERROR MAPPING
// =============================================================================

#[derive(Serialize)]
pub struct ErrorBody {
    pub error: String,
}

pub(crate) fn auth_error_status(err: &AuthError) -> StatusCode {
    match err {
        AuthError::InvalidEmail => StatusCode::BAD_REQUEST,
        AuthError::InvalidCredentials => StatusCode::UNAUTHORIZED,
        AuthError::EmailTaken => StatusCode::CONFLICT,
        AuthError::UserNotFound => StatusCode::NOT_FOUND,
        AuthError::UserDeleted => StatusCode::GONE,
        AuthError::Db(_) => StatusCode::INTERNAL_SERVER_ERROR,
    }
}

fn auth_error_response(err: &AuthError) -> (StatusCode, Json<ErrorBody>) {
    if let AuthError::Db(e) = err {
        tracing::error!(error = %e, "auth database error");
    }
    (auth_error_status(err), Json(ErrorBody { error: err.to_string() }))
}

// =============================================================================
// HANDLERS
// =============================================================================

#[derive(Deserialize)]
pub struct CredentialsBody {
    pub email: String,
    pub password: String,
}

/// `POST /api/auth/signup` — create credentials for a new account.
///
/// The user document itself is created by an administrator; signup only
/// registers the password so login can later resolve the document.
pub async fn signup(
    State(state): State<AppState>,
    Json(body): Json<CredentialsBody>,
) -> Result<Json<serde_json::Value>, (StatusCode, Json<ErrorBody>)> {
    let email = auth_svc::create_credentials(&state.pool, &body.email, &body.password)
        .await
        .map_err(|e| auth_error_response(&e))?;
    Ok(Json(serde_json::json!({ "ok": true, "email": email })))
}

/// `POST /api/auth/login` — verify credentials, set session cookie.
pub async fn login(
    State(state): State<AppState>,
    jar: CookieJar,
    Json(body): Json<CredentialsBody>,
) -> Result<(CookieJar, Json<session::SessionUser>), (StatusCode, Json<ErrorBody>)> {
    let user = auth_svc::login(&state.pool, &body.email, &body.password)
        .await
        .map_err(|e| auth_error_response(&e))?;

    let token = session::create_session(&state.pool, &user.email)
        .await
        .map_err(|e| auth_error_response(&AuthError::Db(e)))?;

    Ok((jar.add(session_cookie(token)), Json(user)))
}

/// `GET /api/auth/me` — return current user.
pub async fn me(auth: AuthUser) -> Json<session::SessionUser> {
    Json(auth.user)
}

/// `POST /api/auth/logout` — delete session, clear cookie.
pub async fn logout(State(state): State<AppState>, auth: AuthUser) -> impl IntoResponse {
    let _ = session::delete_session(&state.pool, &auth.token).await;
    let jar = CookieJar::new().add(clear_session_cookie());
    (jar, StatusCode::NO_CONTENT)
}
