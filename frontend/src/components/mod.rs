mod add_machine_modal;
mod forgot_password_form;
mod login_form;
mod machines_table;
mod notification_modal;
mod pm2_apps_table;
mod reset_password_form;

pub use add_machine_modal::AddMachineModal;
pub use forgot_password_form::ForgotPasswordForm;
pub use login_form::LoginForm;
pub use machines_table::MachinesTable;
pub use notification_modal::NotificationModal;
pub use pm2_apps_table::Pm2AppsTable;
pub use reset_password_form::ResetPasswordForm;
