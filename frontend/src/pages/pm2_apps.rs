//! PM2 app screen for the connected machine.

use crate::components::{NotificationModal, Pm2AppsTable};
use crate::hooks::{use_pm2_apps, use_session_guard};
use crate::remote::{self, RemoteData};
use crate::store::use_session;
use crate::{api, config, Route};
use shared::api::ApiClientConfig;
use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;
use yew_router::prelude::*;

#[function_component(Pm2AppsPage)]
pub fn pm2_apps_page() -> Html {
    use_session_guard();
    let session = use_session();

    if !session.has_connected_machine() && !config::mock_data_enabled() {
        return html! {
            <div class="page pm2-page">
                <div class="page-header">
                    <h1>{ "PM2 Apps" }</h1>
                </div>
                <div class="panel">
                    <p>{ "No machine connected" }</p>
                    <Link<Route> to={Route::Machines} classes="nav-card">
                        { "Connect a machine first" }
                    </Link<Route>>
                </div>
            </div>
        };
    }

    html! { <ConnectedPm2Apps /> }
}

#[function_component(ConnectedPm2Apps)]
fn connected_pm2_apps() -> Html {
    let session = use_session();
    let apps = use_pm2_apps();
    let notice = use_state(|| None::<String>);

    let machine_name = session.machine_name.clone().unwrap_or_default();

    let on_toggle = {
        let token = session.token.clone();
        let machine_base = session.api_base_url.clone();
        let state = apps.state.clone();
        let refresh = apps.refresh.clone();
        let set_items = apps.set_items.clone();
        let notice = notice.clone();
        Callback::from(move |(name, current_status): (String, String)| {
            if config::mock_data_enabled() {
                if let RemoteData::Ready(items) = &state {
                    set_items.emit(remote::mirror_toggled_status(items, &name));
                }
                return;
            }
            let Some(base) = machine_base.clone() else {
                notice.set(Some("No machine connected".to_string()));
                return;
            };
            let mut client = ApiClientConfig::new(base);
            if let Some(token) = token.clone() {
                client = client.with_token(token);
            }
            let refresh = refresh.clone();
            let notice = notice.clone();
            spawn_local(async move {
                match api::toggle_pm2_app(&client, &name, &current_status).await {
                    Ok(()) => refresh.emit(()),
                    Err(err) => notice.set(Some(err.display_message())),
                }
            });
        })
    };

    let close_notice = {
        let notice = notice.clone();
        Callback::from(move |_| notice.set(None))
    };

    let on_retry = {
        let refresh = apps.refresh.clone();
        Callback::from(move |_: MouseEvent| refresh.emit(()))
    };

    html! {
        <div class="page pm2-page">
            <div class="page-header">
                <h1>{ "PM2 Apps" }</h1>
                if !machine_name.is_empty() {
                    <p>{ format!("Processes on {}", machine_name) }</p>
                }
            </div>

            {
                match &apps.state {
                    RemoteData::Loading => html! {
                        <div class="panel loading-panel">{ "Loading apps..." }</div>
                    },
                    RemoteData::Error(message) => html! {
                        <div class="panel error-panel">
                            <p>{ message }</p>
                            <button class="secondary-button" onclick={on_retry}>
                                { "Retry" }
                            </button>
                        </div>
                    },
                    RemoteData::Ready(items) => html! {
                        <Pm2AppsTable apps={items.clone()} on_toggle={on_toggle} />
                    },
                }
            }

            if let Some(message) = (*notice).clone() {
                <NotificationModal {message} on_close={close_notice} />
            }
        </div>
    }
}
