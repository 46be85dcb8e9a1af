//! Hook for the PM2 app list of the connected machine.

use crate::remote::RemoteData;
use crate::store::use_session;
use crate::{api, config, data};
use shared::{api::ApiClientConfig, Pm2App};
use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;

/// Return value from the use_pm2_apps hook.
pub struct UsePm2Apps {
    pub state: RemoteData<Pm2App>,
    pub refresh: Callback<()>,
    /// Replace the local collection (mock-mode mutations)
    pub set_items: Callback<Vec<Pm2App>>,
}

/// Fetches the PM2 app list from the connected machine's API base URL.
/// Refetches when the connected machine changes or `refresh` fires.
#[hook]
pub fn use_pm2_apps() -> UsePm2Apps {
    let session = use_session();
    let state = use_state(|| RemoteData::<Pm2App>::Loading);
    let refresh_trigger = use_state(|| 0u32);

    {
        let state = state.clone();
        let token = session.token.clone();
        let machine_base = session.api_base_url.clone();
        use_effect_with(
            (session.api_base_url.clone(), *refresh_trigger),
            move |_| {
                if config::mock_data_enabled() {
                    state.set(RemoteData::Ready(data::mock_pm2_apps()));
                } else {
                    match machine_base {
                        None => state.set(RemoteData::Error("No machine connected".to_string())),
                        Some(base) => {
                            state.set(RemoteData::Loading);
                            spawn_local(async move {
                                let mut client = ApiClientConfig::new(base);
                                if let Some(token) = token {
                                    client = client.with_token(token);
                                }
                                match api::fetch_pm2_apps(&client).await {
                                    Ok(items) => state.set(RemoteData::Ready(items)),
                                    Err(err) => {
                                        log::error!("failed to fetch PM2 apps: {}", err);
                                        state.set(RemoteData::Error(err.display_message()));
                                    }
                                }
                            });
                        }
                    }
                }
                || ()
            },
        );
    }

    let refresh = {
        let refresh_trigger = refresh_trigger.clone();
        Callback::from(move |_| refresh_trigger.set(*refresh_trigger + 1))
    };

    let set_items = {
        let state = state.clone();
        Callback::from(move |items: Vec<Pm2App>| state.set(RemoteData::Ready(items)))
    };

    UsePm2Apps {
        state: (*state).clone(),
        refresh,
        set_items,
    }
}
