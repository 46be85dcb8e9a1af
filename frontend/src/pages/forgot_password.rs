use crate::components::ForgotPasswordForm;
use yew::prelude::*;

#[function_component(ForgotPasswordPage)]
pub fn forgot_password_page() -> Html {
    html! { <ForgotPasswordForm /> }
}
