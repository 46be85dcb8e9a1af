//! REST path constants.
//!
//! The `backend` module covers the external the-404 API (machine
//! registry, PM2 control, user auth); the `gateway` module covers the
//! dashboard's own cookie-managing auth routes.

/// Paths on the external the-404 backend API.
pub mod backend {
    pub const USERS_LOGIN: &str = "/users/login";
    pub const USERS_RESET_PASSWORD: &str = "/users/reset-password-with-new-password";
    pub const MACHINES: &str = "/machines";
    pub const PM2_APPS: &str = "/pm2/apps";

    pub fn machine(id: &str) -> String {
        format!("/machines/{}", id)
    }

    pub fn pm2_app_toggle(name: &str) -> String {
        format!("/pm2/apps/{}/toggle", name)
    }
}

/// Same-origin routes served by the gateway.
pub mod gateway {
    pub const AUTH_LOGIN: &str = "/api/auth/login";
    pub const AUTH_LOGOUT: &str = "/api/auth/logout";
    pub const AUTH_VERIFY: &str = "/api/auth/verify";
}
