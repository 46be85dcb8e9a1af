//! Machine registry screen.
//!
//! Live mode refetches after every successful write; mock mode edits
//! the local fixture collection instead.

use crate::components::{AddMachineModal, MachinesTable, NotificationModal};
use crate::hooks::{use_machines, use_session_guard};
use crate::remote::{self, RemoteData};
use crate::store::use_session;
use crate::{api, config};
use shared::{api::ApiClientConfig, AddMachineRequest, Machine};
use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;

fn api_client(token: Option<String>) -> ApiClientConfig {
    let mut client = ApiClientConfig::new(config::api_base_url());
    if let Some(token) = token {
        client = client.with_token(token);
    }
    client
}

#[function_component(MachinesPage)]
pub fn machines_page() -> Html {
    use_session_guard();
    let session = use_session();
    let machines = use_machines();
    let show_add_modal = use_state(|| false);
    let notice = use_state(|| None::<String>);

    let on_delete = {
        let token = session.token.clone();
        let state = machines.state.clone();
        let refresh = machines.refresh.clone();
        let set_items = machines.set_items.clone();
        let notice = notice.clone();
        Callback::from(move |machine: Machine| {
            if config::mock_data_enabled() {
                if let RemoteData::Ready(items) = &state {
                    set_items.emit(remote::remove_machine(items, &machine.id));
                }
                return;
            }
            let client = api_client(token.clone());
            let refresh = refresh.clone();
            let notice = notice.clone();
            spawn_local(async move {
                match api::delete_machine(&client, &machine.id).await {
                    Ok(()) => refresh.emit(()),
                    Err(err) => notice.set(Some(err.display_message())),
                }
            });
        })
    };

    let on_add_submit = {
        let token = session.token.clone();
        let state = machines.state.clone();
        let refresh = machines.refresh.clone();
        let set_items = machines.set_items.clone();
        let show_add_modal = show_add_modal.clone();
        let notice = notice.clone();
        Callback::from(move |request: AddMachineRequest| {
            if config::mock_data_enabled() {
                if let RemoteData::Ready(items) = &state {
                    set_items.emit(remote::append_machine(items, &request));
                }
                show_add_modal.set(false);
                return;
            }
            let client = api_client(token.clone());
            let refresh = refresh.clone();
            let show_add_modal = show_add_modal.clone();
            let notice = notice.clone();
            spawn_local(async move {
                match api::add_machine(&client, &request).await {
                    Ok(_created) => {
                        show_add_modal.set(false);
                        refresh.emit(());
                    }
                    Err(err) => notice.set(Some(err.display_message())),
                }
            });
        })
    };

    let open_add_modal = {
        let show_add_modal = show_add_modal.clone();
        Callback::from(move |_| show_add_modal.set(true))
    };

    let close_add_modal = {
        let show_add_modal = show_add_modal.clone();
        Callback::from(move |_| show_add_modal.set(false))
    };

    let close_notice = {
        let notice = notice.clone();
        Callback::from(move |_| notice.set(None))
    };

    let on_retry = {
        let refresh = machines.refresh.clone();
        Callback::from(move |_: MouseEvent| refresh.emit(()))
    };

    html! {
        <div class="page machines-page">
            <div class="page-header">
                <h1>{ "Machines" }</h1>
                <p>{ "Manage and connect to your Ubuntu servers" }</p>
                <button class="primary-button" onclick={open_add_modal}>
                    { "Add Machine" }
                </button>
            </div>

            {
                match &machines.state {
                    RemoteData::Loading => html! {
                        <div class="panel loading-panel">{ "Loading machines..." }</div>
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
                        <MachinesTable machines={items.clone()} on_delete={on_delete} />
                    },
                }
            }

            if *show_add_modal {
                <AddMachineModal on_close={close_add_modal} on_submit={on_add_submit} />
            }

            if let Some(message) = (*notice).clone() {
                <NotificationModal {message} on_close={close_notice} />
            }
        </div>
    }
}
