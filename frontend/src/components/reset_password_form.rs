//! Set-new-password form reached from a tokenized reset link.

use crate::components::NotificationModal;
use crate::{api, Route};
use web_sys::HtmlInputElement;
use yew::prelude::*;
use yew_router::prelude::*;

const MIN_PASSWORD_LEN: usize = 2;

/// Local validation before any network call.
fn validate_new_password(password: &str) -> Result<(), &'static str> {
    if password.is_empty() {
        return Err("Please enter a new password");
    }
    if password.chars().count() < MIN_PASSWORD_LEN {
        return Err("Password must be at least 2 characters long");
    }
    Ok(())
}

#[derive(Properties, PartialEq)]
pub struct ResetPasswordFormProps {
    /// Reset token from the emailed link.
    pub token: String,
}

#[function_component(ResetPasswordForm)]
pub fn reset_password_form(props: &ResetPasswordFormProps) -> Html {
    let password = use_state(String::new);
    let show_password = use_state(|| false);
    let submitted = use_state(|| false);
    let loading = use_state(|| false);
    let error = use_state(|| None::<String>);

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
        let token = props.token.clone();
        let password = password.clone();
        let submitted = submitted.clone();
        let loading = loading.clone();
        let error = error.clone();
        Callback::from(move |_: MouseEvent| {
            if *loading {
                return;
            }
            let password_value = (*password).clone();
            if let Err(message) = validate_new_password(&password_value) {
                error.set(Some(message.to_string()));
                return;
            }
            let token = token.clone();
            let submitted = submitted.clone();
            let loading = loading.clone();
            let error = error.clone();
            loading.set(true);
            wasm_bindgen_futures::spawn_local(async move {
                match api::reset_password(&token, &password_value).await {
                    Ok(()) => submitted.set(true),
                    Err(message) => error.set(Some(message)),
                }
                loading.set(false);
            });
        })
    };

    let close_error = {
        let error = error.clone();
        Callback::from(move |_| error.set(None))
    };

    if *submitted {
        return html! {
            <div class="auth-screen">
                <div class="auth-logo">
                    <h1 class="terminal-logo">
                        { "$ the-" }<span class="accent">{ "404" }</span>{ "> _" }
                    </h1>
                </div>
                <div class="auth-confirmation">
                    <h2>{ "Password reset successful" }</h2>
                    <p>{ "Your password has been updated. You can now sign in with your new password." }</p>
                    <Link<Route> to={Route::Login} classes="primary-button">
                        { "Go to login" }
                    </Link<Route>>
                </div>
            </div>
        };
    }

    html! {
        <div class="auth-screen">
            <div class="auth-logo">
                <h1 class="terminal-logo">
                    { "$ the-" }<span class="accent">{ "404" }</span>{ "> _" }
                </h1>
            </div>

            <div class="auth-heading">
                <h2>{ "Reset your password" }</h2>
                <p>{ "Enter your new password below" }</p>
            </div>

            <form class="auth-form" onsubmit={Callback::from(|e: SubmitEvent| e.prevent_default())}>
                <div class="password-field">
                    <input
                        type={if *show_password { "text" } else { "password" }}
                        placeholder="New password"
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
                    disabled={*loading}
                    onclick={on_submit}
                >
                    { if *loading { "Resetting..." } else { "Reset password" } }
                </button>
                <p class="auth-links">
                    <Link<Route> to={Route::Login}>{ "back to login" }</Link<Route>>
                </p>
            </form>

            if let Some(message) = (*error).clone() {
                <NotificationModal {message} on_close={close_error} />
            }
        </div>
    }
}
