use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

// API error taxonomy and client configuration
pub mod api;
pub use api::{server_error_message, ApiClientConfig, ApiError};

// REST path constants shared between the gateway and the frontend
pub mod endpoints;

/// A registered remote machine, as the the-404 backend stores it.
///
/// Field names on the wire are the backend's Mongo-style names
/// (`_id`, `__v`, `urlFor404Api`, ...); the struct keeps Rust naming
/// and maps via serde.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Machine {
    #[serde(rename = "_id")]
    pub id: String,
    pub machine_name: String,
    pub url_for_404_api: String,
    pub local_ip_address: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub user_home_dir: Option<String>,
    #[serde(default)]
    pub nginx_storage_path_options: Vec<String>,
    pub date_created: DateTime<Utc>,
    pub date_last_modified: DateTime<Utc>,
    /// Backend revision counter (`__v`).
    #[serde(rename = "__v", default)]
    pub revision: i32,
}

/// Envelope for `GET /machines`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MachinesResponse {
    pub result: bool,
    #[serde(default)]
    pub existing_machines: Vec<Machine>,
}

/// A PM2-managed application on a connected machine.
///
/// `status` is a backend-defined string; only `"online"` carries
/// meaning on this side.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Pm2App {
    pub name: String,
    pub status: String,
    #[serde(default)]
    pub port: Option<u16>,
    /// CPU usage, percent.
    pub cpu: f64,
    /// Resident memory, bytes.
    pub memory: u64,
    /// Uptime, milliseconds.
    pub uptime: u64,
    pub restarts: u32,
}

impl Pm2App {
    pub const STATUS_ONLINE: &'static str = "online";

    pub fn is_online(&self) -> bool {
        self.status == Self::STATUS_ONLINE
    }
}

/// Envelope for `GET {machine}/pm2/apps`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Pm2AppsResponse {
    pub result: bool,
    #[serde(default)]
    pub pm2_apps: Vec<Pm2App>,
}

/// Credentials submitted to `POST /users/login` and to the gateway's
/// `/api/auth/login` wrapper.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

/// The `user` object inside a login response.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SessionUser {
    #[serde(default)]
    pub username: Option<String>,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub is_admin: bool,
}

/// Raw success body from the backend's `POST /users/login`.
/// Both fields are optional on the wire; the gateway decides whether
/// the response actually carries a usable token.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct BackendLoginResponse {
    #[serde(default)]
    pub token: Option<String>,
    #[serde(default)]
    pub user: Option<SessionUser>,
}

/// Success body the gateway returns from `/api/auth/login`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LoginResponse {
    pub success: bool,
    pub token: String,
    pub user: SessionUser,
}

/// Error body used across the gateway routes.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub success: bool,
    pub error: String,
}

impl ErrorResponse {
    pub fn new(error: impl Into<String>) -> Self {
        Self {
            success: false,
            error: error.into(),
        }
    }
}

/// Body of `GET /api/auth/verify` when a cookie is present.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VerifyResponse {
    pub success: bool,
    pub has_token: bool,
}

/// Body of `POST /api/auth/logout`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LogoutResponse {
    pub success: bool,
}

/// Body for `POST /users/reset-password-with-new-password`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ResetPasswordRequest {
    pub token: String,
    pub new_password: String,
}

/// Body for `POST /machines`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AddMachineRequest {
    pub url_for_404_api: String,
    pub user_home_dir: String,
    #[serde(default)]
    pub nginx_storage_path_options: Vec<String>,
}

/// Body for `POST {machine}/pm2/apps/{name}/toggle`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TogglePm2AppRequest {
    pub current_status: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn machine_parses_backend_wire_names() {
        let json = r#"{
            "_id": "6772c80b0391cbca4d643214",
            "localIpAddress": "192.168.1.193",
            "machineName": "Nicks-Mac-mini.local",
            "__v": 0,
            "dateCreated": "2024-12-30T16:19:22.843Z",
            "dateLastModified": "2024-12-30T16:19:22.839Z",
            "nginxStoragePathOptions": ["/etc/nginx/conf.d"],
            "userHomeDir": "/home/nick",
            "urlFor404Api": "http://localhost:3000"
        }"#;
        let machine: Machine = serde_json::from_str(json).unwrap();
        assert_eq!(machine.id, "6772c80b0391cbca4d643214");
        assert_eq!(machine.machine_name, "Nicks-Mac-mini.local");
        assert_eq!(machine.url_for_404_api, "http://localhost:3000");
        assert_eq!(machine.local_ip_address, "192.168.1.193");
        assert_eq!(machine.user_home_dir.as_deref(), Some("/home/nick"));
        assert_eq!(machine.revision, 0);

        let back = serde_json::to_value(&machine).unwrap();
        assert!(back.get("_id").is_some());
        assert!(back.get("__v").is_some());
        assert!(back.get("urlFor404Api").is_some());
    }

    #[test]
    fn machine_home_dir_is_optional() {
        let json = r#"{
            "_id": "x",
            "localIpAddress": "10.0.0.1",
            "machineName": "m",
            "dateCreated": "2025-01-01T00:00:00.000Z",
            "dateLastModified": "2025-01-01T00:00:00.000Z",
            "urlFor404Api": "http://localhost:8000"
        }"#;
        let machine: Machine = serde_json::from_str(json).unwrap();
        assert!(machine.user_home_dir.is_none());
        assert!(machine.nginx_storage_path_options.is_empty());
    }

    #[test]
    fn machines_envelope_uses_existing_machines_key() {
        let json = r#"{"result": true, "existingMachines": []}"#;
        let resp: MachinesResponse = serde_json::from_str(json).unwrap();
        assert!(resp.result);
        assert!(resp.existing_machines.is_empty());
    }

    #[test]
    fn pm2_app_status_and_null_port() {
        let json = r#"{
            "name": "the-404-api",
            "status": "online",
            "port": null,
            "cpu": 0.3,
            "memory": 52428800,
            "uptime": 86400000,
            "restarts": 2
        }"#;
        let app: Pm2App = serde_json::from_str(json).unwrap();
        assert!(app.is_online());
        assert!(app.port.is_none());

        let stopped = Pm2App {
            status: "stopped".into(),
            ..app
        };
        assert!(!stopped.is_online());
    }

    #[test]
    fn pm2_envelope_uses_pm2_apps_key() {
        let json = r#"{"result": true, "pm2Apps": [{"name":"a","status":"online","cpu":0.0,"memory":1,"uptime":1,"restarts":0}]}"#;
        let resp: Pm2AppsResponse = serde_json::from_str(json).unwrap();
        assert_eq!(resp.pm2_apps.len(), 1);
    }

    #[test]
    fn session_user_is_admin_wire_name() {
        let user: SessionUser =
            serde_json::from_str(r#"{"username":"nick","isAdmin":true}"#).unwrap();
        assert!(user.is_admin);
        assert!(user.email.is_none());
    }

    #[test]
    fn reset_request_uses_new_password_key() {
        let req = ResetPasswordRequest {
            token: "t".into(),
            new_password: "hunter2".into(),
        };
        let json = serde_json::to_string(&req).unwrap();
        assert!(json.contains(r#""newPassword""#));
    }

    #[test]
    fn verify_response_uses_has_token_key() {
        let resp = VerifyResponse {
            success: true,
            has_token: true,
        };
        let json = serde_json::to_string(&resp).unwrap();
        assert!(json.contains(r#""hasToken""#));
    }

    #[test]
    fn backend_login_tolerates_missing_fields() {
        let resp: BackendLoginResponse = serde_json::from_str("{}").unwrap();
        assert!(resp.token.is_none());
        assert!(resp.user.is_none());
    }
}
