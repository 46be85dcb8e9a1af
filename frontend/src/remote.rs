//! Tri-state view model for remote collections, plus the pure
//! collection edits mock mode applies in place of a refetch.

use shared::{AddMachineRequest, Machine, Pm2App};

/// Message shown when a 2xx body does not match the expected shape.
pub const INVALID_RESPONSE: &str = "Invalid response format from API";

#[derive(Debug, Clone, PartialEq)]
pub enum RemoteData<T> {
    Loading,
    Error(String),
    Ready(Vec<T>),
}

impl<T> RemoteData<T> {
    pub fn is_loading(&self) -> bool {
        matches!(self, RemoteData::Loading)
    }

    pub fn items(&self) -> Option<&[T]> {
        match self {
            RemoteData::Ready(items) => Some(items),
            _ => None,
        }
    }
}

/// Pull the collection out of a `{result: true, <key>: [...]}` envelope.
pub fn parse_collection<T: serde::de::DeserializeOwned>(
    body: &serde_json::Value,
    key: &str,
) -> Result<Vec<T>, String> {
    let items = body
        .get(key)
        .cloned()
        .ok_or_else(|| INVALID_RESPONSE.to_string())?;
    serde_json::from_value(items).map_err(|_| INVALID_RESPONSE.to_string())
}

/// Drop the machine with the given id, preserving relative order.
pub fn remove_machine(machines: &[Machine], id: &str) -> Vec<Machine> {
    machines
        .iter()
        .filter(|machine| machine.id != id)
        .cloned()
        .collect()
}

/// What a status toggle should land on.
pub fn toggled_status(status: &str) -> String {
    if status == Pm2App::STATUS_ONLINE {
        "stopped".to_string()
    } else {
        Pm2App::STATUS_ONLINE.to_string()
    }
}

/// Mirror a toggle into the local collection.
pub fn mirror_toggled_status(apps: &[Pm2App], name: &str) -> Vec<Pm2App> {
    apps.iter()
        .map(|app| {
            if app.name == name {
                Pm2App {
                    status: toggled_status(&app.status),
                    ..app.clone()
                }
            } else {
                app.clone()
            }
        })
        .collect()
}

/// Mock-mode stand-in for the backend's created machine record.
pub fn append_machine(machines: &[Machine], request: &AddMachineRequest) -> Vec<Machine> {
    let now = chrono::Utc::now();
    let mut next = machines.to_vec();
    next.push(Machine {
        id: format!("local-{}", machines.len() + 1),
        machine_name: request.url_for_404_api.clone(),
        url_for_404_api: request.url_for_404_api.clone(),
        local_ip_address: String::new(),
        user_home_dir: (!request.user_home_dir.is_empty()).then(|| request.user_home_dir.clone()),
        nginx_storage_path_options: request.nginx_storage_path_options.clone(),
        date_created: now,
        date_last_modified: now,
        revision: 0,
    });
    next
}
