//! Client-side sort/filter model shared by the data tables.
//!
//! Pure state machine: a query string plus at most one sorted column
//! cycling ascending -> descending -> unsorted on repeated activation.
//! Filtering is case-insensitive substring match over each row's
//! search fields; sorting is stable for equal keys.

use shared::{Machine, Pm2App};
use std::cmp::Ordering;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortOrder {
    Ascending,
    Descending,
}

/// A value a column can sort on.
#[derive(Debug, Clone, PartialEq)]
pub enum SortKey {
    Text(String),
    Number(f64),
}

impl SortKey {
    fn compare(&self, other: &SortKey) -> Ordering {
        match (self, other) {
            (SortKey::Text(a), SortKey::Text(b)) => a.to_lowercase().cmp(&b.to_lowercase()),
            (SortKey::Number(a), SortKey::Number(b)) => a.partial_cmp(b).unwrap_or(Ordering::Equal),
            (SortKey::Number(_), SortKey::Text(_)) => Ordering::Less,
            (SortKey::Text(_), SortKey::Number(_)) => Ordering::Greater,
        }
    }
}

/// Row behavior the table model needs: what the global search scans
/// and what each sortable column orders by.
pub trait TableRow {
    fn search_fields(&self) -> Vec<String>;
    /// `None` marks the column unsortable; rows without a key sort last.
    fn sort_key(&self, column: usize) -> Option<SortKey>;
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct TableModel {
    sort: Option<(usize, SortOrder)>,
    query: String,
}

impl TableModel {
    /// Header activation: ascending -> descending -> unsorted, and a
    /// fresh ascending sort when a different column is activated.
    pub fn cycle_sort(&mut self, column: usize) {
        self.sort = match self.sort {
            Some((current, SortOrder::Ascending)) if current == column => {
                Some((column, SortOrder::Descending))
            }
            Some((current, SortOrder::Descending)) if current == column => None,
            _ => Some((column, SortOrder::Ascending)),
        };
    }

    pub fn set_query(&mut self, query: impl Into<String>) {
        self.query = query.into();
    }

    pub fn query(&self) -> &str {
        &self.query
    }

    pub fn sort_state(&self, column: usize) -> Option<SortOrder> {
        match self.sort {
            Some((current, order)) if current == column => Some(order),
            _ => None,
        }
    }

    /// Indices into `rows`, filtered by the query then stably sorted.
    pub fn visible_indices<R: TableRow>(&self, rows: &[R]) -> Vec<usize> {
        let needle = self.query.trim().to_lowercase();
        let mut indices: Vec<usize> = rows
            .iter()
            .enumerate()
            .filter(|(_, row)| {
                needle.is_empty()
                    || row
                        .search_fields()
                        .iter()
                        .any(|field| field.to_lowercase().contains(&needle))
            })
            .map(|(index, _)| index)
            .collect();

        if let Some((column, order)) = self.sort {
            indices.sort_by(|&a, &b| {
                let ordering = match (rows[a].sort_key(column), rows[b].sort_key(column)) {
                    (Some(x), Some(y)) => x.compare(&y),
                    (Some(_), None) => Ordering::Less,
                    (None, Some(_)) => Ordering::Greater,
                    (None, None) => Ordering::Equal,
                };
                match order {
                    SortOrder::Ascending => ordering,
                    SortOrder::Descending => ordering.reverse(),
                }
            });
        }

        indices
    }
}

/// Header glyph for the current sort state.
pub fn sort_indicator(state: Option<SortOrder>) -> &'static str {
    match state {
        Some(SortOrder::Ascending) => "↑",
        Some(SortOrder::Descending) => "↓",
        None => "↕",
    }
}

impl TableRow for Machine {
    fn search_fields(&self) -> Vec<String> {
        vec![
            self.machine_name.clone(),
            self.url_for_404_api.clone(),
            self.local_ip_address.clone(),
        ]
    }

    fn sort_key(&self, column: usize) -> Option<SortKey> {
        match column {
            0 => Some(SortKey::Text(self.machine_name.clone())),
            _ => None,
        }
    }
}

impl TableRow for Pm2App {
    fn search_fields(&self) -> Vec<String> {
        let mut fields = vec![self.name.clone(), self.status.clone()];
        if let Some(port) = self.port {
            fields.push(port.to_string());
        }
        fields
    }

    fn sort_key(&self, column: usize) -> Option<SortKey> {
        match column {
            0 => Some(SortKey::Text(self.name.clone())),
            1 => self.port.map(|port| SortKey::Number(port as f64)),
            2 => Some(SortKey::Text(self.status.clone())),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn machine(name: &str, url: &str, ip: &str) -> Machine {
        Machine {
            id: name.into(),
            machine_name: name.into(),
            url_for_404_api: url.into(),
            local_ip_address: ip.into(),
            user_home_dir: None,
            nginx_storage_path_options: vec![],
            date_created: "2025-01-01T00:00:00Z".parse().unwrap(),
            date_last_modified: "2025-01-01T00:00:00Z".parse().unwrap(),
            revision: 0,
        }
    }

    fn fixture() -> Vec<Machine> {
        vec![
            machine("maestro03", "https://maestro03.example", "192.168.100.166"),
            machine("nnDev", "https://nn-dev.example", "192.168.100.148"),
            machine("nnProd", "https://nn07.example", "192.168.100.149"),
            machine("Nicks-Mac-mini.local", "http://localhost:3000", "192.168.1.193"),
        ]
    }

    #[test]
    fn empty_query_returns_every_row() {
        let rows = fixture();
        let model = TableModel::default();
        assert_eq!(model.visible_indices(&rows).len(), rows.len());
    }

    #[test]
    fn search_matches_name_url_and_ip_case_insensitively() {
        let rows = fixture();
        let mut model = TableModel::default();

        model.set_query("NNDEV");
        assert_eq!(model.visible_indices(&rows), vec![1]);

        model.set_query("localhost");
        assert_eq!(model.visible_indices(&rows), vec![3]);

        model.set_query("192.168.100");
        assert_eq!(model.visible_indices(&rows), vec![0, 1, 2]);

        model.set_query("no-such-machine");
        assert!(model.visible_indices(&rows).is_empty());
    }

    #[test]
    fn sort_cycles_ascending_descending_unsorted() {
        let rows = fixture();
        let mut model = TableModel::default();

        model.cycle_sort(0);
        assert_eq!(model.sort_state(0), Some(SortOrder::Ascending));
        assert_eq!(model.visible_indices(&rows), vec![0, 3, 1, 2]);

        model.cycle_sort(0);
        assert_eq!(model.sort_state(0), Some(SortOrder::Descending));
        assert_eq!(model.visible_indices(&rows), vec![2, 1, 3, 0]);

        model.cycle_sort(0);
        assert_eq!(model.sort_state(0), None);
        assert_eq!(model.visible_indices(&rows), vec![0, 1, 2, 3]);
    }

    #[test]
    fn switching_columns_restarts_at_ascending() {
        let apps = vec![
            Pm2App {
                name: "api".into(),
                status: "online".into(),
                port: Some(8000),
                cpu: 0.0,
                memory: 0,
                uptime: 0,
                restarts: 0,
            },
            Pm2App {
                name: "worker".into(),
                status: "stopped".into(),
                port: Some(3000),
                cpu: 0.0,
                memory: 0,
                uptime: 0,
                restarts: 0,
            },
        ];
        let mut model = TableModel::default();
        model.cycle_sort(0);
        model.cycle_sort(0);
        assert_eq!(model.sort_state(0), Some(SortOrder::Descending));

        model.cycle_sort(1);
        assert_eq!(model.sort_state(0), None);
        assert_eq!(model.sort_state(1), Some(SortOrder::Ascending));
        assert_eq!(model.visible_indices(&apps), vec![1, 0]);
    }

    #[test]
    fn sort_is_stable_for_equal_keys() {
        let rows = vec![
            machine("same", "https://a.example", "10.0.0.1"),
            machine("same", "https://b.example", "10.0.0.2"),
            machine("aaa", "https://c.example", "10.0.0.3"),
        ];
        let mut model = TableModel::default();
        model.cycle_sort(0);
        assert_eq!(model.visible_indices(&rows), vec![2, 0, 1]);

        // Equal keys keep their relative order in descending too
        model.cycle_sort(0);
        assert_eq!(model.visible_indices(&rows), vec![0, 1, 2]);
    }

    #[test]
    fn rows_without_a_sort_key_sort_last() {
        let apps = vec![
            Pm2App {
                name: "no-port".into(),
                status: "online".into(),
                port: None,
                cpu: 0.0,
                memory: 0,
                uptime: 0,
                restarts: 0,
            },
            Pm2App {
                name: "api".into(),
                status: "online".into(),
                port: Some(8000),
                cpu: 0.0,
                memory: 0,
                uptime: 0,
                restarts: 0,
            },
        ];
        let mut model = TableModel::default();
        model.cycle_sort(1);
        assert_eq!(model.visible_indices(&apps), vec![1, 0]);
    }

    #[test]
    fn pm2_search_covers_port_digits() {
        let apps = vec![Pm2App {
            name: "api".into(),
            status: "online".into(),
            port: Some(8000),
            cpu: 0.0,
            memory: 0,
            uptime: 0,
            restarts: 0,
        }];
        let mut model = TableModel::default();
        model.set_query("800");
        assert_eq!(model.visible_indices(&apps), vec![0]);
    }
}
