pub mod api;
mod components;
pub mod config;
pub mod data;
mod hooks;
mod pages;
pub mod remote;
pub mod store;
pub mod table;
pub mod utils;

use pages::{
    forgot_password::ForgotPasswordPage, home::HomePage, login::LoginPage,
    machines::MachinesPage, pm2_apps::Pm2AppsPage, reset_password::ResetPasswordPage,
};
use store::{SessionState, SessionStore};
use yew::prelude::*;
use yew_router::prelude::*;

#[derive(Clone, Routable, PartialEq)]
pub enum Route {
    #[at("/login")]
    Login,
    #[at("/forgot-password")]
    ForgotPassword,
    #[at("/forgot-password/reset/:token")]
    ResetPassword { token: String },
    #[at("/home")]
    Home,
    #[at("/servers/machines")]
    Machines,
    #[at("/servers/pm2-apps")]
    Pm2Apps,
    #[at("/")]
    Root,
}

fn switch(routes: Route) -> Html {
    match routes {
        Route::Login => html! { <LoginPage /> },
        Route::ForgotPassword => html! { <ForgotPasswordPage /> },
        Route::ResetPassword { token } => html! { <ResetPasswordPage {token} /> },
        Route::Home => html! { <HomePage /> },
        Route::Machines => html! { <MachinesPage /> },
        Route::Pm2Apps => html! { <Pm2AppsPage /> },
        Route::Root => html! { <Redirect<Route> to={Route::Home} /> },
    }
}

#[function_component(App)]
fn app() -> Html {
    // One store for the whole app, handed down explicitly via context
    let session = use_reducer(SessionState::default);

    html! {
        <ContextProvider<SessionStore> context={session}>
            <BrowserRouter>
                <Switch<Route> render={switch} />
            </BrowserRouter>
        </ContextProvider<SessionStore>>
    }
}

#[wasm_bindgen::prelude::wasm_bindgen(start)]
pub fn run_app() {
    wasm_logger::init(wasm_logger::Config::default());
    yew::Renderer::<App>::new().render();
}
