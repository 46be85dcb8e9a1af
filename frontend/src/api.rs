//! REST calls against the gateway and the the-404 backend.
//!
//! Form-facing calls (`login`, `reset_password`) return the display
//! text to surface on failure; resource calls return [`ApiError`].
//! Authenticated calls refuse to go out without a token instead of
//! sending an anonymous bearer header.

use gloo_net::http::{Request, Response};
use shared::{
    api::{server_error_message, ApiClientConfig, ApiError},
    endpoints, AddMachineRequest, LoginRequest, LoginResponse, Machine, Pm2App,
    ResetPasswordRequest, TogglePm2AppRequest,
};

use crate::remote::{parse_collection, INVALID_RESPONSE};
use crate::utils;

/// Message shown when no response was obtained at all.
pub const CONNECTION_ERROR: &str = "Error connecting to server. Please try again.";

fn bearer(config: &ApiClientConfig) -> Result<String, ApiError> {
    config
        .auth_token
        .as_deref()
        .filter(|token| !token.is_empty())
        .map(|token| format!("Bearer {}", token))
        .ok_or_else(|| ApiError::Auth("no session token held".to_string()))
}

/// Parse the body only when the server said it sent JSON.
async fn json_body(response: &Response) -> Option<serde_json::Value> {
    let is_json = response
        .headers()
        .get("content-type")
        .is_some_and(|value| value.contains("application/json"));
    if is_json {
        response.json().await.ok()
    } else {
        None
    }
}

/// Classify a non-2xx status, extracting the backend's `error` field
/// when one was sent.
fn check_status(ok: bool, status: u16, body: Option<&serde_json::Value>) -> Result<(), ApiError> {
    if ok {
        return Ok(());
    }
    let error_field = body
        .and_then(|body| body.get("error"))
        .and_then(|error| error.as_str());
    let message = server_error_message(status, error_field);
    if status == 404 {
        Err(ApiError::NotFound(message))
    } else {
        Err(ApiError::Server { status, message })
    }
}

/// Map a login HTTP result onto credentials or the display message the
/// form should show. Success requires a 2xx JSON body with a token.
pub fn interpret_login_response(
    status: u16,
    body: Option<serde_json::Value>,
) -> Result<LoginResponse, String> {
    if (200..300).contains(&status) {
        let body = body.ok_or_else(|| INVALID_RESPONSE.to_string())?;
        match serde_json::from_value::<LoginResponse>(body) {
            Ok(login) if !login.token.is_empty() => Ok(login),
            _ => Err(INVALID_RESPONSE.to_string()),
        }
    } else {
        let error_field = body
            .as_ref()
            .and_then(|body| body.get("error"))
            .and_then(|error| error.as_str());
        Err(server_error_message(status, error_field))
    }
}

/// `POST /api/auth/login` via the gateway (sets the session cookie).
pub async fn login(email: &str, password: &str) -> Result<LoginResponse, String> {
    let request = LoginRequest {
        email: email.to_string(),
        password: password.to_string(),
    };
    let response = Request::post(&utils::api_url(endpoints::gateway::AUTH_LOGIN))
        .json(&request)
        .map_err(|_| CONNECTION_ERROR.to_string())?
        .send()
        .await
        .map_err(|_| CONNECTION_ERROR.to_string())?;

    let body = json_body(&response).await;
    interpret_login_response(response.status(), body)
}

/// `POST /api/auth/logout` via the gateway (clears the session cookie).
pub async fn logout() -> Result<(), ApiError> {
    let response = Request::post(&utils::api_url(endpoints::gateway::AUTH_LOGOUT))
        .send()
        .await
        .map_err(|e| ApiError::Network(e.to_string()))?;
    let body = json_body(&response).await;
    check_status(response.ok(), response.status(), body.as_ref())
}

/// `POST /users/reset-password-with-new-password` against the backend.
pub async fn reset_password(token: &str, new_password: &str) -> Result<(), String> {
    let request = ResetPasswordRequest {
        token: token.to_string(),
        new_password: new_password.to_string(),
    };
    let url = format!(
        "{}{}",
        crate::config::api_base_url(),
        endpoints::backend::USERS_RESET_PASSWORD
    );
    let response = Request::post(&url)
        .json(&request)
        .map_err(|_| CONNECTION_ERROR.to_string())?
        .send()
        .await
        .map_err(|_| CONNECTION_ERROR.to_string())?;

    if response.ok() {
        return Ok(());
    }
    let body = json_body(&response).await;
    let error_field = body
        .as_ref()
        .and_then(|body| body.get("error"))
        .and_then(|error| error.as_str());
    Err(server_error_message(response.status(), error_field))
}

/// `GET /machines` with the session bearer token.
pub async fn fetch_machines(config: &ApiClientConfig) -> Result<Vec<Machine>, ApiError> {
    let auth = bearer(config)?;
    let response = Request::get(&config.url(endpoints::backend::MACHINES))
        .header("Authorization", &auth)
        .send()
        .await
        .map_err(|e| ApiError::Network(e.to_string()))?;

    let body = json_body(&response).await;
    check_status(response.ok(), response.status(), body.as_ref())?;
    let body = body.ok_or_else(|| ApiError::Parse(INVALID_RESPONSE.to_string()))?;
    parse_collection::<Machine>(&body, "existingMachines").map_err(ApiError::Parse)
}

/// `POST /machines` with the session bearer token.
pub async fn add_machine(
    config: &ApiClientConfig,
    request: &AddMachineRequest,
) -> Result<Machine, ApiError> {
    let auth = bearer(config)?;
    let response = Request::post(&config.url(endpoints::backend::MACHINES))
        .header("Authorization", &auth)
        .json(request)
        .map_err(|e| ApiError::Network(e.to_string()))?
        .send()
        .await
        .map_err(|e| ApiError::Network(e.to_string()))?;

    let body = json_body(&response).await;
    check_status(response.ok(), response.status(), body.as_ref())?;
    let body = body.ok_or_else(|| ApiError::Parse(INVALID_RESPONSE.to_string()))?;
    serde_json::from_value(body).map_err(|_| ApiError::Parse(INVALID_RESPONSE.to_string()))
}

/// `DELETE /machines/{id}` with the session bearer token.
pub async fn delete_machine(config: &ApiClientConfig, id: &str) -> Result<(), ApiError> {
    let auth = bearer(config)?;
    let response = Request::delete(&config.url(&endpoints::backend::machine(id)))
        .header("Authorization", &auth)
        .send()
        .await
        .map_err(|e| ApiError::Network(e.to_string()))?;

    let body = json_body(&response).await;
    check_status(response.ok(), response.status(), body.as_ref())
}

/// `GET {machine}/pm2/apps` against the connected machine's API base.
pub async fn fetch_pm2_apps(config: &ApiClientConfig) -> Result<Vec<Pm2App>, ApiError> {
    let auth = bearer(config)?;
    let response = Request::get(&config.url(endpoints::backend::PM2_APPS))
        .header("Authorization", &auth)
        .send()
        .await
        .map_err(|e| ApiError::Network(e.to_string()))?;

    let body = json_body(&response).await;
    check_status(response.ok(), response.status(), body.as_ref())?;
    let body = body.ok_or_else(|| ApiError::Parse(INVALID_RESPONSE.to_string()))?;
    parse_collection::<Pm2App>(&body, "pm2Apps").map_err(ApiError::Parse)
}

/// `POST {machine}/pm2/apps/{name}/toggle` against the connected
/// machine's API base.
pub async fn toggle_pm2_app(
    config: &ApiClientConfig,
    name: &str,
    current_status: &str,
) -> Result<(), ApiError> {
    let auth = bearer(config)?;
    let request = TogglePm2AppRequest {
        current_status: current_status.to_string(),
    };
    let response = Request::post(&config.url(&endpoints::backend::pm2_app_toggle(name)))
        .header("Authorization", &auth)
        .json(&request)
        .map_err(|e| ApiError::Network(e.to_string()))?
        .send()
        .await
        .map_err(|e| ApiError::Network(e.to_string()))?;

    let body = json_body(&response).await;
    check_status(response.ok(), response.status(), body.as_ref())
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn login_success_requires_token() {
        let body = json!({
            "success": true,
            "token": "jwt",
            "user": {"username": "nick", "email": "nick@mail.com", "isAdmin": false}
        });
        let login = interpret_login_response(200, Some(body)).unwrap();
        assert_eq!(login.token, "jwt");
    }

    #[test]
    fn login_non_json_500_uses_templated_text() {
        let message = interpret_login_response(500, None).unwrap_err();
        assert_eq!(message, "There was a server error: 500");
    }

    #[test]
    fn login_error_field_is_surfaced_verbatim() {
        let body = json!({"success": false, "error": "Invalid credentials"});
        let message = interpret_login_response(401, Some(body)).unwrap_err();
        assert_eq!(message, "Invalid credentials");
    }

    #[test]
    fn login_2xx_without_token_is_malformed() {
        let body = json!({"success": true});
        let message = interpret_login_response(200, Some(body)).unwrap_err();
        assert_eq!(message, INVALID_RESPONSE);
    }

    #[test]
    fn bearer_refuses_to_build_without_token() {
        let config = ApiClientConfig::new("http://localhost:8000");
        assert!(matches!(bearer(&config), Err(ApiError::Auth(_))));

        let config = config.with_token("jwt");
        assert_eq!(bearer(&config).unwrap(), "Bearer jwt");
    }

    #[test]
    fn check_status_maps_error_field_and_template() {
        assert!(check_status(true, 200, None).is_ok());

        let body = json!({"error": "Machine not found"});
        match check_status(false, 404, Some(&body)) {
            Err(ApiError::NotFound(message)) => assert_eq!(message, "Machine not found"),
            other => panic!("unexpected: {:?}", other),
        }

        match check_status(false, 502, None) {
            Err(ApiError::Server { status, message }) => {
                assert_eq!(status, 502);
                assert_eq!(message, "There was a server error: 502");
            }
            other => panic!("unexpected: {:?}", other),
        }
    }
}
