//! Machine registry table: search, name sorting, connect/delete actions.

use crate::store::{use_session, SessionAction};
use crate::table::{sort_indicator, TableModel};
use shared::Machine;
use web_sys::HtmlInputElement;
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct MachinesTableProps {
    pub machines: Vec<Machine>,
    pub on_delete: Callback<Machine>,
}

#[function_component(MachinesTable)]
pub fn machines_table(props: &MachinesTableProps) -> Html {
    let session = use_session();
    let model = use_state(TableModel::default);

    if props.machines.is_empty() {
        return html! {
            <div class="table-empty">
                <p>{ "No machines available" }</p>
            </div>
        };
    }

    let connected_name = session.machine_name.clone();

    let on_connect = {
        let session = session.clone();
        Callback::from(move |machine: Machine| {
            session.dispatch(SessionAction::ConnectMachine {
                machine_name: machine.machine_name,
                api_base_url: machine.url_for_404_api,
                storage_path_options: machine.nginx_storage_path_options,
            });
        })
    };

    let on_search = {
        let model = model.clone();
        Callback::from(move |e: InputEvent| {
            if let Some(input) = e.target_dyn_into::<HtmlInputElement>() {
                let mut next = (*model).clone();
                next.set_query(input.value());
                model.set(next);
            }
        })
    };

    let on_sort_name = {
        let model = model.clone();
        Callback::from(move |_| {
            let mut next = (*model).clone();
            next.cycle_sort(0);
            model.set(next);
        })
    };

    let visible = model.visible_indices(&props.machines);

    html! {
        <div class="data-table">
            <input
                type="text"
                class="table-search"
                placeholder="Search machines..."
                value={model.query().to_string()}
                oninput={on_search}
            />
            <table>
                <thead>
                    <tr>
                        <th class="sortable" onclick={on_sort_name}>
                            { "Machine" }
                            <span class="sort-indicator">{ sort_indicator(model.sort_state(0)) }</span>
                        </th>
                        <th>{ "Actions" }</th>
                    </tr>
                </thead>
                <tbody>
                    if visible.is_empty() {
                        <tr>
                            <td colspan="2" class="table-no-results">{ "No machines found" }</td>
                        </tr>
                    } else {
                        { for visible.into_iter().map(|index| {
                            let machine = props.machines[index].clone();
                            let is_connected =
                                connected_name.as_deref() == Some(machine.machine_name.as_str());
                            let connect_machine = machine.clone();
                            let on_connect = {
                                let on_connect = on_connect.clone();
                                Callback::from(move |_| on_connect.emit(connect_machine.clone()))
                            };
                            let delete_machine = machine.clone();
                            let on_delete = {
                                let on_delete = props.on_delete.clone();
                                Callback::from(move |_| on_delete.emit(delete_machine.clone()))
                            };
                            html! {
                                <tr key={machine.id.clone()}>
                                    <td>
                                        <div class="machine-name">{ &machine.machine_name }</div>
                                        <div class="machine-detail">{ &machine.url_for_404_api }</div>
                                        <div class="machine-detail">{ &machine.local_ip_address }</div>
                                    </td>
                                    <td class="machine-actions">
                                        <button
                                            class={if is_connected { "connected-button" } else { "connect-button" }}
                                            disabled={is_connected}
                                            onclick={on_connect}
                                        >
                                            { if is_connected { "Connected" } else { "Connect Machine" } }
                                        </button>
                                        <button class="delete-button" onclick={on_delete}>
                                            { "Delete" }
                                        </button>
                                    </td>
                                </tr>
                            }
                        }) }
                    }
                </tbody>
            </table>
        </div>
    }
}
