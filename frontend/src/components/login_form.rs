//! Sign-in form backed by the gateway's cookie-setting login route.

use crate::components::NotificationModal;
use crate::store::{use_session, SessionAction};
use crate::{api, config, Route};
use shared::SessionUser;
use wasm_bindgen_futures::spawn_local;
use web_sys::HtmlInputElement;
use yew::prelude::*;
use yew_router::prelude::*;

#[function_component(LoginForm)]
pub fn login_form() -> Html {
    let session = use_session();
    let navigator = use_navigator().expect("router context not installed");

    let email = use_state(|| {
        if config::workstation_mode() {
            "dev@the404.local".to_string()
        } else {
            String::new()
        }
    });
    let password = use_state(|| {
        if config::workstation_mode() {
            "test".to_string()
        } else {
            String::new()
        }
    });
    let show_password = use_state(|| false);
    let submitting = use_state(|| false);
    let error = use_state(|| None::<String>);

    // Already signed in: go straight to the landing screen
    {
        let navigator = navigator.clone();
        use_effect_with(session.token.clone(), move |token| {
            if token.is_some() {
                navigator.push(&Route::Home);
            }
            || ()
        });
    }

    let on_email_input = {
        let email = email.clone();
        Callback::from(move |e: InputEvent| {
            if let Some(input) = e.target_dyn_into::<HtmlInputElement>() {
                email.set(input.value());
            }
        })
    };

    let on_password_input = {
        let password = password.clone();
        Callback::from(move |e: InputEvent| {
            if let Some(input) = e.target_dyn_into::<HtmlInputElement>() {
                password.set(input.value());
            }
        })
    };

    let on_toggle_password = {
        let show_password = show_password.clone();
        Callback::from(move |_| show_password.set(!*show_password))
    };

    let on_submit = {
        let session = session.clone();
        let navigator = navigator.clone();
        let email = email.clone();
        let password = password.clone();
        let submitting = submitting.clone();
        let error = error.clone();
        Callback::from(move |_: MouseEvent| {
            if *submitting {
                return;
            }
            let email_value = (*email).clone();
            if email_value.trim().is_empty() {
                error.set(Some("Email is required".to_string()));
                return;
            }
            let password_value = (*password).clone();
            let session = session.clone();
            let navigator = navigator.clone();
            let submitting = submitting.clone();
            let error = error.clone();
            submitting.set(true);
            spawn_local(async move {
                match api::login(&email_value, &password_value).await {
                    Ok(login) => {
                        session.dispatch(SessionAction::LoginUser {
                            token: login.token,
                            user: SessionUser {
                                email: Some(email_value),
                                ..login.user
                            },
                        });
                        navigator.push(&Route::Home);
                    }
                    Err(message) => error.set(Some(message)),
                }
                submitting.set(false);
            });
        })
    };

    let close_error = {
        let error = error.clone();
        Callback::from(move |_| error.set(None))
    };

    html! {
        <div class="auth-screen">
            <div class="auth-logo">
                <h1 class="terminal-logo">
                    { "$ the-" }<span class="accent">{ "404" }</span>{ "> _" }
                </h1>
            </div>

            <form class="auth-form" onsubmit={Callback::from(|e: SubmitEvent| e.prevent_default())}>
                <input
                    type="email"
                    placeholder="Email"
                    value={(*email).clone()}
                    oninput={on_email_input}
                />
                <div class="password-field">
                    <input
                        type={if *show_password { "text" } else { "password" }}
                        placeholder="Password"
                        value={(*password).clone()}
                        oninput={on_password_input}
                    />
                    <button type="button" class="password-toggle" onclick={on_toggle_password}>
                        { if *show_password { "Hide" } else { "Show" } }
                    </button>
                </div>
                <button
                    type="button"
                    class="primary-button"
                    disabled={*submitting}
                    onclick={on_submit}
                >
                    { if *submitting { "Signing in..." } else { "Sign in" } }
                </button>
                <p class="auth-links">
                    <Link<Route> to={Route::ForgotPassword}>{ "Forgot password?" }</Link<Route>>
                </p>
            </form>

            if let Some(message) = (*error).clone() {
                <NotificationModal {message} on_close={close_error} />
            }
        </div>
    }
}
