//! Custom Yew hooks for the frontend application.
//!
//! These hooks encapsulate reusable state logic to keep components clean and focused.

mod use_machines;
mod use_pm2_apps;
mod use_session_guard;

pub use use_machines::{use_machines, UseMachines};
pub use use_pm2_apps::{use_pm2_apps, UsePm2Apps};
pub use use_session_guard::use_session_guard;
