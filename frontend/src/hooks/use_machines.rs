//! Hook for the machines collection screen state.

use crate::remote::RemoteData;
use crate::store::use_session;
use crate::{api, config, data};
use shared::{api::ApiClientConfig, Machine};
use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;

/// Return value from the use_machines hook.
pub struct UseMachines {
    /// Current screen state: loading, error, or the fetched collection
    pub state: RemoteData<Machine>,
    /// Re-run the collection fetch (authoritative refetch after writes)
    pub refresh: Callback<()>,
    /// Replace the local collection (mock-mode mutations)
    pub set_items: Callback<Vec<Machine>>,
}

/// Fetches the machine list on mount and on every `refresh`.
///
/// In mock-data mode the fixture is substituted synchronously and no
/// network call is made.
#[hook]
pub fn use_machines() -> UseMachines {
    let session = use_session();
    let state = use_state(|| RemoteData::<Machine>::Loading);
    let refresh_trigger = use_state(|| 0u32);

    {
        let state = state.clone();
        let token = session.token.clone();
        use_effect_with(*refresh_trigger, move |_| {
            if config::mock_data_enabled() {
                state.set(RemoteData::Ready(data::mock_machines()));
            } else {
                state.set(RemoteData::Loading);
                spawn_local(async move {
                    let mut client = ApiClientConfig::new(config::api_base_url());
                    if let Some(token) = token {
                        client = client.with_token(token);
                    }
                    match api::fetch_machines(&client).await {
                        Ok(items) => state.set(RemoteData::Ready(items)),
                        Err(err) => {
                            log::error!("failed to fetch machines: {}", err);
                            state.set(RemoteData::Error(err.display_message()));
                        }
                    }
                });
            }
            || ()
        });
    }

    let refresh = {
        let refresh_trigger = refresh_trigger.clone();
        Callback::from(move |_| refresh_trigger.set(*refresh_trigger + 1))
    };

    let set_items = {
        let state = state.clone();
        Callback::from(move |items: Vec<Machine>| state.set(RemoteData::Ready(items)))
    };

    UseMachines {
        state: (*state).clone(),
        refresh,
        set_items,
    }
}
