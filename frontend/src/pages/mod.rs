pub mod forgot_password;
pub mod home;
pub mod login;
pub mod machines;
pub mod pm2_apps;
pub mod reset_password;
