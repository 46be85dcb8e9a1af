use crate::components::ResetPasswordForm;
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct ResetPasswordPageProps {
    /// Reset token from the emailed link path.
    pub token: String,
}

#[function_component(ResetPasswordPage)]
pub fn reset_password_page(props: &ResetPasswordPageProps) -> Html {
    html! { <ResetPasswordForm token={props.token.clone()} /> }
}
