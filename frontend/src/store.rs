//! Session and machine-connection store.
//!
//! One process-wide state value mutated only through the dispatched
//! actions below. The app root installs it as a `use_reducer` handle
//! behind a `ContextProvider`, so every component receives the same
//! handle explicitly instead of reaching for a global.

use shared::SessionUser;
use std::rc::Rc;
use yew::prelude::*;

/// Username recorded when a login response carries none.
pub const DEFAULT_USERNAME: &str = "some_name";
/// Email recorded when a login response carries none.
pub const DEFAULT_EMAIL: &str = "some_name@mail.com";

#[derive(Debug, Clone, PartialEq, Default)]
pub struct SessionState {
    pub token: Option<String>,
    pub username: Option<String>,
    pub email: Option<String>,
    pub is_admin: bool,
    // Connected machine info
    pub machine_name: Option<String>,
    pub api_base_url: Option<String>,
    pub storage_path_options: Vec<String>,
}

#[derive(Debug, Clone, PartialEq)]
pub enum SessionAction {
    LoginUser {
        token: String,
        user: SessionUser,
    },
    /// Partial logout: clears identity only, keeps `is_admin` and the
    /// machine context. UI logout paths dispatch the full variant.
    LogoutUser,
    LogoutUserFully,
    /// Overwrites the single active machine context unconditionally.
    ConnectMachine {
        machine_name: String,
        api_base_url: String,
        storage_path_options: Vec<String>,
    },
    DisconnectMachine,
}

impl SessionState {
    /// Reduce one action into the next state. Total and synchronous;
    /// no transition can fail.
    pub fn apply(&self, action: SessionAction) -> SessionState {
        let mut next = self.clone();
        match action {
            SessionAction::LoginUser { token, user } => {
                next.token = Some(token);
                next.username = Some(
                    user.username
                        .filter(|v| !v.is_empty())
                        .unwrap_or_else(|| DEFAULT_USERNAME.to_string()),
                );
                next.email = Some(
                    user.email
                        .filter(|v| !v.is_empty())
                        .unwrap_or_else(|| DEFAULT_EMAIL.to_string()),
                );
                next.is_admin = user.is_admin;
            }
            SessionAction::LogoutUser => {
                next.token = None;
                next.username = None;
                next.email = None;
            }
            SessionAction::LogoutUserFully => {
                next = SessionState::default();
            }
            SessionAction::ConnectMachine {
                machine_name,
                api_base_url,
                storage_path_options,
            } => {
                next.machine_name = Some(machine_name);
                next.api_base_url = Some(api_base_url);
                next.storage_path_options = storage_path_options;
            }
            SessionAction::DisconnectMachine => {
                next.machine_name = None;
                next.api_base_url = None;
                next.storage_path_options = Vec::new();
            }
        }
        next
    }

    pub fn is_authenticated(&self) -> bool {
        self.token.is_some()
    }

    pub fn has_connected_machine(&self) -> bool {
        self.machine_name.is_some() && self.api_base_url.is_some()
    }
}

impl Reducible for SessionState {
    type Action = SessionAction;

    fn reduce(self: Rc<Self>, action: SessionAction) -> Rc<Self> {
        if matches!(action, SessionAction::LogoutUserFully) {
            log::info!("session fully cleared");
        }
        Rc::new(self.apply(action))
    }
}

/// Handle to the app-wide session store.
pub type SessionStore = UseReducerHandle<SessionState>;

/// Read the session store installed by the app root.
#[hook]
pub fn use_session() -> SessionStore {
    use_context::<SessionStore>().expect("session context not installed")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn logged_in_and_connected() -> SessionState {
        SessionState::default()
            .apply(SessionAction::LoginUser {
                token: "jwt".into(),
                user: SessionUser {
                    username: Some("nick".into()),
                    email: Some("nick@mail.com".into()),
                    is_admin: true,
                },
            })
            .apply(SessionAction::ConnectMachine {
                machine_name: "maestro03".into(),
                api_base_url: "https://maestro03.example".into(),
                storage_path_options: vec!["/etc/nginx/conf.d".into()],
            })
    }

    #[test]
    fn login_sets_identity() {
        let state = SessionState::default().apply(SessionAction::LoginUser {
            token: "jwt".into(),
            user: SessionUser {
                username: Some("nick".into()),
                email: Some("nick@mail.com".into()),
                is_admin: false,
            },
        });
        assert_eq!(state.token.as_deref(), Some("jwt"));
        assert_eq!(state.username.as_deref(), Some("nick"));
        assert_eq!(state.email.as_deref(), Some("nick@mail.com"));
        assert!(!state.is_admin);
        assert!(state.is_authenticated());
    }

    #[test]
    fn login_defaults_missing_identity_fields() {
        let state = SessionState::default().apply(SessionAction::LoginUser {
            token: "jwt".into(),
            user: SessionUser::default(),
        });
        assert_eq!(state.username.as_deref(), Some(DEFAULT_USERNAME));
        assert_eq!(state.email.as_deref(), Some(DEFAULT_EMAIL));
        assert!(!state.is_admin);
    }

    #[test]
    fn login_defaults_empty_strings_too() {
        let state = SessionState::default().apply(SessionAction::LoginUser {
            token: "jwt".into(),
            user: SessionUser {
                username: Some(String::new()),
                email: Some(String::new()),
                is_admin: false,
            },
        });
        assert_eq!(state.username.as_deref(), Some(DEFAULT_USERNAME));
        assert_eq!(state.email.as_deref(), Some(DEFAULT_EMAIL));
    }

    #[test]
    fn full_logout_restores_initial_state_after_any_history() {
        let state = logged_in_and_connected()
            .apply(SessionAction::DisconnectMachine)
            .apply(SessionAction::ConnectMachine {
                machine_name: "nnProd".into(),
                api_base_url: "https://nn07.example".into(),
                storage_path_options: vec![],
            })
            .apply(SessionAction::LogoutUserFully);
        assert_eq!(state, SessionState::default());
    }

    #[test]
    fn partial_logout_keeps_admin_flag_and_machine() {
        let state = logged_in_and_connected().apply(SessionAction::LogoutUser);
        assert!(state.token.is_none());
        assert!(state.username.is_none());
        assert!(state.email.is_none());
        // The asymmetry the partial variant carries
        assert!(state.is_admin);
        assert_eq!(state.machine_name.as_deref(), Some("maestro03"));
        assert!(state.has_connected_machine());
    }

    #[test]
    fn second_connect_replaces_the_first_entirely() {
        let state = logged_in_and_connected().apply(SessionAction::ConnectMachine {
            machine_name: "nnDev".into(),
            api_base_url: "https://nn-dev.example".into(),
            storage_path_options: vec!["/home/shared/".into(), "/etc/nginx/conf.d".into()],
        });
        assert_eq!(state.machine_name.as_deref(), Some("nnDev"));
        assert_eq!(state.api_base_url.as_deref(), Some("https://nn-dev.example"));
        assert_eq!(
            state.storage_path_options,
            vec!["/home/shared/".to_string(), "/etc/nginx/conf.d".to_string()]
        );
    }

    #[test]
    fn disconnect_clears_machine_fields_only() {
        let state = logged_in_and_connected().apply(SessionAction::DisconnectMachine);
        assert!(!state.has_connected_machine());
        assert!(state.storage_path_options.is_empty());
        assert!(state.is_authenticated());
        assert_eq!(state.username.as_deref(), Some("nick"));
    }
}
