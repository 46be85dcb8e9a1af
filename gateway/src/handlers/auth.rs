//! Cookie-managing auth routes.
//!
//! `/api/auth/login` proxies the the-404 backend and stores the issued
//! token in an HTTP-only cookie so the navigation gate can see it;
//! `/api/auth/logout` clears the cookie; `/api/auth/verify` reports
//! cookie presence only.

use axum::{
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use shared::{
    endpoints, ErrorResponse, LoginRequest, LoginResponse, LogoutResponse, SessionUser,
    VerifyResponse,
};
use std::sync::Arc;
use tower_cookies::{
    cookie::{time::Duration, SameSite},
    Cookie, Cookies,
};
use tracing::info;

use crate::{error::GatewayError, gate::AUTH_COOKIE_NAME, AppState};

const AUTH_COOKIE_TTL_DAYS: i64 = 7;

/// Username recorded when the backend response lacks one.
const FALLBACK_USERNAME: &str = "unknown";

fn session_cookie(token: String, secure: bool) -> Cookie<'static> {
    let mut cookie = Cookie::new(AUTH_COOKIE_NAME, token);
    cookie.set_path("/");
    cookie.set_http_only(true);
    cookie.set_secure(secure);
    cookie.set_same_site(SameSite::Lax);
    cookie.set_max_age(Duration::days(AUTH_COOKIE_TTL_DAYS));
    cookie
}

/// Map the backend's login reply onto the gateway's response contract.
///
/// Success requires a 2xx status carrying a non-empty `token`; anything
/// else becomes a status-passthrough error body, preferring the
/// backend's `error` field over the templated fallback.
fn map_backend_login(
    status: u16,
    body: Option<serde_json::Value>,
    submitted_email: &str,
) -> Result<LoginResponse, (u16, ErrorResponse)> {
    let ok = (200..300).contains(&status);
    let token = body
        .as_ref()
        .and_then(|b| b.get("token"))
        .and_then(|t| t.as_str())
        .filter(|t| !t.is_empty());

    if ok {
        if let Some(token) = token {
            let user: SessionUser = body
                .as_ref()
                .and_then(|b| b.get("user"))
                .and_then(|u| serde_json::from_value(u.clone()).ok())
                .unwrap_or_default();
            return Ok(LoginResponse {
                success: true,
                token: token.to_string(),
                user: SessionUser {
                    username: Some(
                        user.username
                            .filter(|u| !u.is_empty())
                            .unwrap_or_else(|| FALLBACK_USERNAME.to_string()),
                    ),
                    email: Some(submitted_email.to_string()),
                    is_admin: user.is_admin,
                },
            });
        }
    }

    let error_field = body
        .as_ref()
        .and_then(|b| b.get("error"))
        .and_then(|e| e.as_str());
    let message = match error_field {
        Some(error) if !error.is_empty() => error.to_string(),
        _ => format!("Server error: {}", status),
    };
    Err((status, ErrorResponse::new(message)))
}

pub async fn login(
    State(state): State<Arc<AppState>>,
    cookies: Cookies,
    Json(request): Json<LoginRequest>,
) -> Result<Response, GatewayError> {
    let url = state.config.backend_url(endpoints::backend::USERS_LOGIN);
    let response = state.http.post(&url).json(&request).send().await?;

    let status = response.status();
    let is_json = response
        .headers()
        .get(reqwest::header::CONTENT_TYPE)
        .and_then(|v| v.to_str().ok())
        .is_some_and(|v| v.contains("application/json"));
    let body: Option<serde_json::Value> = if is_json { response.json().await.ok() } else { None };

    match map_backend_login(status.as_u16(), body, &request.email) {
        Ok(login) => {
            cookies.add(session_cookie(login.token.clone(), !state.config.dev_mode));
            info!(email = %request.email, "user logged in");
            Ok(Json(login).into_response())
        }
        Err((status, body)) => {
            info!(email = %request.email, status, "login rejected by backend");
            let status =
                StatusCode::from_u16(status).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);
            Ok((status, Json(body)).into_response())
        }
    }
}

pub async fn logout(cookies: Cookies) -> Json<LogoutResponse> {
    // Remove the cookie by re-setting it with an empty value and zero max-age
    let mut cookie = Cookie::new(AUTH_COOKIE_NAME, "");
    cookie.set_path("/");
    cookie.set_http_only(true);
    cookie.set_same_site(SameSite::Lax);
    cookie.set_max_age(Duration::ZERO);
    cookies.add(cookie);

    info!("user logged out");
    Json(LogoutResponse { success: true })
}

pub async fn verify(cookies: Cookies) -> Response {
    match cookies.get(AUTH_COOKIE_NAME) {
        Some(cookie) if !cookie.value().is_empty() => Json(VerifyResponse {
            success: true,
            has_token: true,
        })
        .into_response(),
        _ => (
            StatusCode::UNAUTHORIZED,
            Json(ErrorResponse::new("No token found")),
        )
            .into_response(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::GatewayConfig;
    use axum::{
        body::Body,
        http::{header, Request},
        routing::{get, post},
        Router,
    };
    use serde_json::json;
    use tower::ServiceExt;
    use tower_cookies::CookieManagerLayer;

    fn test_router() -> Router {
        let state = Arc::new(AppState {
            config: GatewayConfig {
                internal_api_base_url: "http://localhost:8000".into(),
                dev_mode: true,
            },
            http: reqwest::Client::new(),
        });
        Router::new()
            .route(endpoints::gateway::AUTH_LOGOUT, post(logout))
            .route(endpoints::gateway::AUTH_VERIFY, get(verify))
            .with_state(state)
            .layer(CookieManagerLayer::new())
    }

    #[test]
    fn login_mapping_success_with_full_user() {
        let body = json!({"token": "jwt", "user": {"username": "nick", "isAdmin": true}});
        let login = map_backend_login(200, Some(body), "nick@mail.com").unwrap();
        assert_eq!(login.token, "jwt");
        assert_eq!(login.user.username.as_deref(), Some("nick"));
        assert_eq!(login.user.email.as_deref(), Some("nick@mail.com"));
        assert!(login.user.is_admin);
    }

    #[test]
    fn login_mapping_defaults_missing_username() {
        let body = json!({"token": "jwt"});
        let login = map_backend_login(200, Some(body), "a@b.c").unwrap();
        assert_eq!(login.user.username.as_deref(), Some("unknown"));
        assert!(!login.user.is_admin);
    }

    #[test]
    fn login_mapping_passes_backend_error_through() {
        let body = json!({"error": "Invalid credentials"});
        let (status, err) = map_backend_login(401, Some(body), "a@b.c").unwrap_err();
        assert_eq!(status, 401);
        assert_eq!(err.error, "Invalid credentials");
        assert!(!err.success);
    }

    #[test]
    fn login_mapping_templates_non_json_failure() {
        let (status, err) = map_backend_login(500, None, "a@b.c").unwrap_err();
        assert_eq!(status, 500);
        assert_eq!(err.error, "Server error: 500");
    }

    #[test]
    fn login_mapping_rejects_ok_without_token() {
        let (status, err) = map_backend_login(200, Some(json!({"user": {}})), "a@b.c").unwrap_err();
        assert_eq!(status, 200);
        assert_eq!(err.error, "Server error: 200");
    }

    #[test]
    fn session_cookie_attributes() {
        let cookie = session_cookie("jwt".into(), true);
        assert_eq!(cookie.name(), AUTH_COOKIE_NAME);
        assert_eq!(cookie.value(), "jwt");
        assert_eq!(cookie.path(), Some("/"));
        assert_eq!(cookie.http_only(), Some(true));
        assert_eq!(cookie.secure(), Some(true));
        assert_eq!(cookie.same_site(), Some(SameSite::Lax));
        assert_eq!(
            cookie.max_age(),
            Some(Duration::days(AUTH_COOKIE_TTL_DAYS))
        );

        let dev_cookie = session_cookie("jwt".into(), false);
        assert_eq!(dev_cookie.secure(), Some(false));
    }

    #[tokio::test]
    async fn verify_without_cookie_is_unauthorized() {
        let response = test_router()
            .oneshot(
                Request::builder()
                    .uri(endpoints::gateway::AUTH_VERIFY)
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::UNAUTHORIZED);

        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        let body: ErrorResponse = serde_json::from_slice(&bytes).unwrap();
        assert_eq!(body.error, "No token found");
    }

    #[tokio::test]
    async fn verify_with_cookie_reports_token() {
        let response = test_router()
            .oneshot(
                Request::builder()
                    .uri(endpoints::gateway::AUTH_VERIFY)
                    .header(header::COOKIE, format!("{}=jwt", AUTH_COOKIE_NAME))
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);

        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        let body: VerifyResponse = serde_json::from_slice(&bytes).unwrap();
        assert!(body.success);
        assert!(body.has_token);
    }

    #[tokio::test]
    async fn logout_expires_the_cookie() {
        let response = test_router()
            .oneshot(
                Request::builder()
                    .method("POST")
                    .uri(endpoints::gateway::AUTH_LOGOUT)
                    .header(header::COOKIE, format!("{}=jwt", AUTH_COOKIE_NAME))
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);

        let set_cookie = response
            .headers()
            .get(header::SET_COOKIE)
            .and_then(|v| v.to_str().ok())
            .unwrap_or_default()
            .to_string();
        assert!(set_cookie.starts_with(&format!("{}=", AUTH_COOKIE_NAME)));
        assert!(set_cookie.contains("Max-Age=0"));

        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        let body: LogoutResponse = serde_json::from_slice(&bytes).unwrap();
        assert!(body.success);
    }
}
