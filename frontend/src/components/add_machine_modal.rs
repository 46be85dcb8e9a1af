//! Modal form for registering a new machine.

use shared::AddMachineRequest;
use web_sys::HtmlInputElement;
use yew::prelude::*;

/// Assemble the request from the form fields. Empty nginx path rows
/// are dropped; the URL is required.
fn build_request(
    url: &str,
    home_dir: &str,
    paths: &[String],
) -> Result<AddMachineRequest, &'static str> {
    let url = url.trim();
    if url.is_empty() {
        return Err("API URL is required");
    }
    Ok(AddMachineRequest {
        url_for_404_api: url.to_string(),
        user_home_dir: home_dir.trim().to_string(),
        nginx_storage_path_options: paths
            .iter()
            .map(|path| path.trim())
            .filter(|path| !path.is_empty())
            .map(str::to_string)
            .collect(),
    })
}

#[derive(Properties, PartialEq)]
pub struct AddMachineModalProps {
    pub on_close: Callback<()>,
    pub on_submit: Callback<AddMachineRequest>,
}

#[function_component(AddMachineModal)]
pub fn add_machine_modal(props: &AddMachineModalProps) -> Html {
    let url = use_state(String::new);
    let home_dir = use_state(|| "/home/nick".to_string());
    let nginx_paths = use_state(|| {
        vec![
            "/etc/nginx/sites-available".to_string(),
            "/etc/nginx/conf.d".to_string(),
            "/home/nick".to_string(),
        ]
    });
    let error = use_state(|| None::<String>);

    let on_url_input = {
        let url = url.clone();
        Callback::from(move |e: InputEvent| {
            if let Some(input) = e.target_dyn_into::<HtmlInputElement>() {
                url.set(input.value());
            }
        })
    };

    let on_home_dir_input = {
        let home_dir = home_dir.clone();
        Callback::from(move |e: InputEvent| {
            if let Some(input) = e.target_dyn_into::<HtmlInputElement>() {
                home_dir.set(input.value());
            }
        })
    };

    let on_add_path = {
        let nginx_paths = nginx_paths.clone();
        Callback::from(move |_| {
            let mut next = (*nginx_paths).clone();
            next.push(String::new());
            nginx_paths.set(next);
        })
    };

    let on_submit = {
        let url = url.clone();
        let home_dir = home_dir.clone();
        let nginx_paths = nginx_paths.clone();
        let error = error.clone();
        let submit = props.on_submit.clone();
        Callback::from(move |_: MouseEvent| {
            match build_request(&url, &home_dir, &nginx_paths) {
                Ok(request) => submit.emit(request),
                Err(message) => error.set(Some(message.to_string())),
            }
        })
    };

    let on_cancel = {
        let close = props.on_close.clone();
        Callback::from(move |_| close.emit(()))
    };

    html! {
        <div class="modal-overlay">
            <div class="modal add-machine-modal">
                <div class="modal-heading">
                    <h2>{ "Add New Machine" }</h2>
                    <p>{ "Configure a new Ubuntu server to monitor and manage" }</p>
                </div>

                if let Some(message) = (*error).clone() {
                    <div class="form-error">{ message }</div>
                }

                <form onsubmit={Callback::from(|e: SubmitEvent| e.prevent_default())}>
                    <label for="url-for-404-api">{ "API URL *" }</label>
                    <input
                        id="url-for-404-api"
                        type="text"
                        placeholder="e.g., https://maestro03.the404api.dashanddata.com"
                        value={(*url).clone()}
                        oninput={on_url_input}
                    />

                    <label for="user-home-dir">{ "User Home Directory" }</label>
                    <input
                        id="user-home-dir"
                        type="text"
                        placeholder="e.g., /home/nick"
                        value={(*home_dir).clone()}
                        oninput={on_home_dir_input}
                    />

                    <label>{ "Nginx Storage Paths" }</label>
                    { for nginx_paths.iter().enumerate().map(|(index, path)| {
                        let on_path_input = {
                            let nginx_paths = nginx_paths.clone();
                            Callback::from(move |e: InputEvent| {
                                if let Some(input) = e.target_dyn_into::<HtmlInputElement>() {
                                    let mut next = (*nginx_paths).clone();
                                    next[index] = input.value();
                                    nginx_paths.set(next);
                                }
                            })
                        };
                        let on_remove_path = {
                            let nginx_paths = nginx_paths.clone();
                            Callback::from(move |_: MouseEvent| {
                                let mut next = (*nginx_paths).clone();
                                next.remove(index);
                                nginx_paths.set(next);
                            })
                        };
                        html! {
                            <div class="path-row" key={index}>
                                <input
                                    type="text"
                                    placeholder="e.g., /etc/nginx/conf.d"
                                    value={path.clone()}
                                    oninput={on_path_input}
                                />
                                if nginx_paths.len() > 1 {
                                    <button type="button" class="remove-button" onclick={on_remove_path}>
                                        { "Remove" }
                                    </button>
                                }
                            </div>
                        }
                    }) }
                    <button type="button" class="link-button" onclick={on_add_path}>
                        { "+ Add another path" }
                    </button>

                    <div class="modal-actions">
                        <button type="button" class="secondary-button" onclick={on_cancel}>
                            { "Cancel" }
                        </button>
                        <button type="button" class="primary-button" onclick={on_submit}>
                            { "Add Machine" }
                        </button>
                    </div>
                </form>
            </div>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn url_is_required() {
        assert_eq!(
            build_request("  ", "/home/nick", &[]),
            Err("API URL is required")
        );
    }

    #[test]
    fn empty_path_rows_are_dropped() {
        let request = build_request(
            "https://new.example",
            "/home/nick",
            &[
                "/etc/nginx/conf.d".to_string(),
                "   ".to_string(),
                String::new(),
                "/home/nick".to_string(),
            ],
        )
        .unwrap();
        assert_eq!(
            request.nginx_storage_path_options,
            vec!["/etc/nginx/conf.d".to_string(), "/home/nick".to_string()]
        );
    }

    #[test]
    fn fields_are_trimmed() {
        let request = build_request(" https://new.example ", " /home/nick ", &[]).unwrap();
        assert_eq!(request.url_for_404_api, "https://new.example");
        assert_eq!(request.user_home_dir, "/home/nick");
    }
}
