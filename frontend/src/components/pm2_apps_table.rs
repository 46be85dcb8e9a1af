//! PM2 app table: search, column sorting, status toggle.

use crate::table::{sort_indicator, TableModel};
use crate::utils::{format_memory, format_uptime};
use shared::Pm2App;
use web_sys::HtmlInputElement;
use yew::prelude::*;

const COL_NAME: usize = 0;
const COL_PORT: usize = 1;
const COL_STATUS: usize = 2;

#[derive(Properties, PartialEq)]
pub struct Pm2AppsTableProps {
    pub apps: Vec<Pm2App>,
    /// (app name, current status)
    pub on_toggle: Callback<(String, String)>,
}

#[function_component(Pm2AppsTable)]
pub fn pm2_apps_table(props: &Pm2AppsTableProps) -> Html {
    let model = use_state(TableModel::default);

    if props.apps.is_empty() {
        return html! {
            <div class="table-empty">
                <p>{ "No PM2 managed apps available" }</p>
            </div>
        };
    }

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

    let sort_callback = |column: usize| {
        let model = model.clone();
        Callback::from(move |_: MouseEvent| {
            let mut next = (*model).clone();
            next.cycle_sort(column);
            model.set(next);
        })
    };

    let visible = model.visible_indices(&props.apps);

    html! {
        <div class="data-table">
            <input
                type="text"
                class="table-search"
                placeholder="Search apps..."
                value={model.query().to_string()}
                oninput={on_search}
            />
            <table>
                <thead>
                    <tr>
                        <th class="sortable" onclick={sort_callback(COL_NAME)}>
                            { "App" }
                            <span class="sort-indicator">{ sort_indicator(model.sort_state(COL_NAME)) }</span>
                        </th>
                        <th class="sortable" onclick={sort_callback(COL_PORT)}>
                            { "Port" }
                            <span class="sort-indicator">{ sort_indicator(model.sort_state(COL_PORT)) }</span>
                        </th>
                        <th class="sortable" onclick={sort_callback(COL_STATUS)}>
                            { "Status" }
                            <span class="sort-indicator">{ sort_indicator(model.sort_state(COL_STATUS)) }</span>
                        </th>
                    </tr>
                </thead>
                <tbody>
                    if visible.is_empty() {
                        <tr>
                            <td colspan="3" class="table-no-results">{ "No apps found" }</td>
                        </tr>
                    } else {
                        { for visible.into_iter().map(|index| {
                            let app = props.apps[index].clone();
                            let toggle_payload = (app.name.clone(), app.status.clone());
                            let on_toggle = {
                                let on_toggle = props.on_toggle.clone();
                                Callback::from(move |_| on_toggle.emit(toggle_payload.clone()))
                            };
                            let status_label = if app.is_online() {
                                "Online".to_string()
                            } else {
                                let mut label = app.status.clone();
                                if let Some(first) = label.get_mut(0..1) {
                                    first.make_ascii_uppercase();
                                }
                                label
                            };
                            html! {
                                <tr key={app.name.clone()}>
                                    <td>
                                        <div class="app-name">{ &app.name }</div>
                                        <div class="app-detail">
                                            { format!("CPU: {}% | Memory: {}", app.cpu, format_memory(app.memory)) }
                                        </div>
                                        <div class="app-detail">
                                            { format!("Uptime: {} | Restarts: {}", format_uptime(app.uptime), app.restarts) }
                                        </div>
                                    </td>
                                    <td>
                                        { app.port.map(|p| p.to_string()).unwrap_or_else(|| "N/A".to_string()) }
                                    </td>
                                    <td>
                                        <button
                                            class={if app.is_online() { "status-button online" } else { "status-button offline" }}
                                            onclick={on_toggle}
                                        >
                                            { status_label }
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
