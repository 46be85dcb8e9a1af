//! Authenticated landing screen: session summary, connected-machine
//! panel, navigation into the server screens.

use crate::hooks::use_session_guard;
use crate::store::{use_session, SessionAction};
use crate::{api, Route};
use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;
use yew_router::prelude::*;

#[function_component(HomePage)]
pub fn home_page() -> Html {
    use_session_guard();
    let session = use_session();
    let navigator = use_navigator().expect("router context not installed");

    let on_disconnect = {
        let session = session.clone();
        Callback::from(move |_| session.dispatch(SessionAction::DisconnectMachine))
    };

    let on_logout = {
        let session = session.clone();
        let navigator = navigator.clone();
        Callback::from(move |_| {
            let session = session.clone();
            let navigator = navigator.clone();
            spawn_local(async move {
                if let Err(err) = api::logout().await {
                    log::warn!("logout call failed: {}", err);
                }
                session.dispatch(SessionAction::LogoutUserFully);
                navigator.push(&Route::Login);
            });
        })
    };

    let username = session.username.clone().unwrap_or_default();
    let email = session.email.clone().unwrap_or_default();

    html! {
        <div class="page home-page">
            <div class="page-header">
                <h1>{ format!("Welcome, {}", username) }</h1>
                <p>{ email }</p>
                if session.is_admin {
                    <span class="admin-badge">{ "Admin" }</span>
                }
            </div>

            <div class="panel machine-panel">
                <h2>{ "Connected machine" }</h2>
                if let (Some(name), Some(url)) =
                    (session.machine_name.clone(), session.api_base_url.clone()) {
                    <div>
                        <p class="machine-name">{ name }</p>
                        <p class="machine-detail">{ url }</p>
                        if !session.storage_path_options.is_empty() {
                            <ul class="storage-paths">
                                { for session.storage_path_options.iter().map(|path| html! {
                                    <li>{ path }</li>
                                }) }
                            </ul>
                        }
                        <button class="secondary-button" onclick={on_disconnect}>
                            { "Disconnect" }
                        </button>
                    </div>
                } else {
                    <p class="machine-detail">{ "No machine connected" }</p>
                }
            </div>

            <nav class="home-nav">
                <Link<Route> to={Route::Machines} classes="nav-card">
                    { "Machines" }
                </Link<Route>>
                <Link<Route> to={Route::Pm2Apps} classes="nav-card">
                    { "PM2 Apps" }
                </Link<Route>>
            </nav>

            <button class="logout-button" onclick={on_logout}>{ "Log out" }</button>
        </div>
    }
}
