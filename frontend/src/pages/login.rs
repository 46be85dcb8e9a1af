use crate::components::LoginForm;
use yew::prelude::*;

#[function_component(LoginPage)]
pub fn login_page() -> Html {
    html! { <LoginForm /> }
}
