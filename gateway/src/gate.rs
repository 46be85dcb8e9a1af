//! Navigation auth gate.
//!
//! Evaluated once per inbound request before anything renders. The
//! check is presence-only: it never validates the token. Real
//! authorization is enforced by the the-404 backend on every API call.

use axum::{
    extract::Request,
    middleware::Next,
    response::{IntoResponse, Redirect, Response},
};
use tower_cookies::Cookies;

/// Cookie the login route sets and this gate reads.
pub const AUTH_COOKIE_NAME: &str = "auth-token";

/// Routes reachable without a session cookie (exact match).
pub const PUBLIC_ROUTES: &[&str] = &["/login", "/register", "/forgot-password"];

/// Tokenized reset links arrive under this prefix before any session exists.
const RESET_PREFIX: &str = "/forgot-password/";

/// API routes are excluded from the gate; the backend authorizes them.
pub const API_PREFIX: &str = "/api";

/// Non-page resources are never gated.
const ASSET_PREFIXES: &[&str] = &["/static/", "/pkg/", "/images/", "/icons/"];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GateDecision {
    /// Forward the request unmodified.
    PassThrough,
    /// Redirect to `/login`; the original path is discarded.
    RedirectToLogin,
}

/// Decide whether a request may proceed. Pure function of the path and
/// whether an `auth-token` cookie value is present.
pub fn decide(path: &str, has_token: bool) -> GateDecision {
    if path.starts_with(API_PREFIX) {
        return GateDecision::PassThrough;
    }
    if PUBLIC_ROUTES.contains(&path) || path.starts_with(RESET_PREFIX) {
        return GateDecision::PassThrough;
    }
    if path == "/favicon.ico" || ASSET_PREFIXES.iter().any(|p| path.starts_with(p)) {
        return GateDecision::PassThrough;
    }
    if has_token {
        GateDecision::PassThrough
    } else {
        GateDecision::RedirectToLogin
    }
}

/// Axum middleware wrapping [`decide`].
pub async fn require_session_cookie(cookies: Cookies, request: Request, next: Next) -> Response {
    let has_token = cookies
        .get(AUTH_COOKIE_NAME)
        .is_some_and(|c| !c.value().is_empty());

    match decide(request.uri().path(), has_token) {
        GateDecision::PassThrough => next.run(request).await,
        GateDecision::RedirectToLogin => {
            tracing::debug!(path = %request.uri().path(), "no session cookie, redirecting to login");
            Redirect::temporary("/login").into_response()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn public_routes_pass_with_and_without_cookie() {
        for path in PUBLIC_ROUTES {
            assert_eq!(decide(path, false), GateDecision::PassThrough);
            assert_eq!(decide(path, true), GateDecision::PassThrough);
        }
    }

    #[test]
    fn api_prefix_always_passes() {
        assert_eq!(decide("/api/auth/login", false), GateDecision::PassThrough);
        assert_eq!(decide("/api/auth/verify", true), GateDecision::PassThrough);
    }

    #[test]
    fn protected_path_without_cookie_redirects() {
        for path in ["/home", "/servers/machines", "/servers/pm2-apps", "/"] {
            assert_eq!(decide(path, false), GateDecision::RedirectToLogin);
        }
    }

    #[test]
    fn protected_path_with_cookie_passes() {
        assert_eq!(decide("/home", true), GateDecision::PassThrough);
        assert_eq!(decide("/servers/machines", true), GateDecision::PassThrough);
    }

    #[test]
    fn reset_links_pass_without_cookie() {
        assert_eq!(
            decide("/forgot-password/reset/abc123", false),
            GateDecision::PassThrough
        );
    }

    #[test]
    fn assets_are_not_gated() {
        for path in [
            "/favicon.ico",
            "/static/app.css",
            "/pkg/frontend_bg.wasm",
            "/images/logo02_whiteFont.png",
            "/icons/eye.svg",
        ] {
            assert_eq!(decide(path, false), GateDecision::PassThrough);
        }
    }

    #[test]
    fn prefix_match_is_not_exact_match() {
        // "/loginX" is not on the allow-list
        assert_eq!(decide("/loginX", false), GateDecision::RedirectToLogin);
    }
}
