//! Forgot-password flow: collect an email, confirm without revealing
//! whether the account exists. The backend endpoint for this flow is
//! not built yet, so no call goes out.

use crate::components::NotificationModal;
use crate::Route;
use web_sys::HtmlInputElement;
use yew::prelude::*;
use yew_router::prelude::*;

#[function_component(ForgotPasswordForm)]
pub fn forgot_password_form() -> Html {
    let email = use_state(String::new);
    let submitted = use_state(|| false);
    let error = use_state(|| None::<String>);

    let on_email_input = {
        let email = email.clone();
        Callback::from(move |e: InputEvent| {
            if let Some(input) = e.target_dyn_into::<HtmlInputElement>() {
                email.set(input.value());
            }
        })
    };

    let on_submit = {
        let email = email.clone();
        let submitted = submitted.clone();
        let error = error.clone();
        Callback::from(move |_: MouseEvent| {
            if email.trim().is_empty() {
                error.set(Some("Email is required".to_string()));
                return;
            }
            submitted.set(true);
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
                    <h2>{ "Check your email" }</h2>
                    <p>
                        { format!(
                            "If an account exists for {}, you will receive password reset instructions.",
                            *email
                        ) }
                    </p>
                    <Link<Route> to={Route::Login} classes="auth-links">
                        { "Back to login" }
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

            <form class="auth-form" onsubmit={Callback::from(|e: SubmitEvent| e.prevent_default())}>
                <input
                    type="email"
                    placeholder="Email"
                    value={(*email).clone()}
                    oninput={on_email_input}
                />
                <button type="button" class="primary-button" onclick={on_submit}>
                    { "Reset password" }
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
