//! Fixed fixtures substituted for network calls in mock-data mode.

use chrono::{DateTime, Utc};
use shared::{Machine, Pm2App};

fn ts(value: &str) -> DateTime<Utc> {
    value.parse().expect("fixture timestamp")
}

pub fn mock_machines() -> Vec<Machine> {
    vec![
        Machine {
            id: "6772c80b0391cbca4d643214".into(),
            machine_name: "Nicks-Mac-mini.local".into(),
            url_for_404_api: "http://localhost:3000".into(),
            local_ip_address: "192.168.1.193".into(),
            user_home_dir: Some("/Users/nick/Documents/_testData/DevelopmentServerNginx".into()),
            nginx_storage_path_options: vec![
                "/Users/nick/Documents/_testData/DevelopmentServerNginx/conf.d".into(),
                "/Users/nick/Documents/_testData/Machine01Nginx/sites-available".into(),
            ],
            date_created: ts("2024-12-30T16:19:22.843Z"),
            date_last_modified: ts("2024-12-30T16:19:22.839Z"),
            revision: 0,
        },
        Machine {
            id: "67fcb31d408d1b1b3a705f5a".into(),
            machine_name: "maestro03".into(),
            url_for_404_api: "https://maestro03.the404api.dashanddata.com".into(),
            local_ip_address: "192.168.100.166".into(),
            user_home_dir: Some("/home/nick".into()),
            nginx_storage_path_options: vec![
                "/home/nick".into(),
                "/etc/nginx/conf.d".into(),
                "/etc/nginx/sites-available".into(),
            ],
            date_created: ts("2025-04-14T07:02:53.306Z"),
            date_last_modified: ts("2025-09-28T15:31:12.739Z"),
            revision: 0,
        },
        Machine {
            id: "6805ffdcaa2d0072c1a3502c".into(),
            machine_name: "nnDev".into(),
            url_for_404_api: "https://nn-dev.the404api.dashanddata.com".into(),
            local_ip_address: "192.168.100.148".into(),
            user_home_dir: Some("/home/shared/".into()),
            nginx_storage_path_options: vec![
                "/home/shared/".into(),
                "/etc/nginx/conf.d".into(),
                "/etc/nginx/sites-available".into(),
            ],
            date_created: ts("2025-04-21T08:20:43.520Z"),
            date_last_modified: ts("2025-09-28T01:07:19.540Z"),
            revision: 0,
        },
        Machine {
            id: "68107161aa2d0072c1a3f689".into(),
            machine_name: "nnProd".into(),
            url_for_404_api: "https://nn07.the404api.dashanddata.com".into(),
            local_ip_address: "192.168.100.149".into(),
            user_home_dir: Some("/home/shared/".into()),
            nginx_storage_path_options: vec![
                "/home/shared/".into(),
                "/etc/nginx/conf.d".into(),
                "/etc/nginx/sites-available".into(),
            ],
            date_created: ts("2025-04-29T06:27:43.893Z"),
            date_last_modified: ts("2025-10-16T15:14:06.397Z"),
            revision: 0,
        },
        Machine {
            id: "68f831b6c8a57e8067f2cf14".into(),
            machine_name: "Nicks-MacBook-Air-3.local".into(),
            url_for_404_api: "http://localhost:8000".into(),
            local_ip_address: "10.0.0.123".into(),
            user_home_dir: Some("/home/dashanddata_user".into()),
            nginx_storage_path_options: vec![
                "/home/dashanddata_user".into(),
                "/Users/nick/Documents/_testData/nginx-sites-confd".into(),
                "/Users/nick/Documents/_testData/nginx-sites-available".into(),
            ],
            date_created: ts("2025-10-22T01:21:56.976Z"),
            date_last_modified: ts("2025-10-23T21:17:36.809Z"),
            revision: 0,
        },
    ]
}

pub fn mock_pm2_apps() -> Vec<Pm2App> {
    vec![
        Pm2App {
            name: "the-404-api".into(),
            status: "online".into(),
            port: Some(8000),
            cpu: 0.3,
            memory: 52_428_800,
            uptime: 2 * 86_400_000 + 3 * 3_600_000,
            restarts: 2,
        },
        Pm2App {
            name: "dash-and-data-site".into(),
            status: "online".into(),
            port: Some(3001),
            cpu: 1.2,
            memory: 104_857_600,
            uptime: 5 * 3_600_000,
            restarts: 0,
        },
        Pm2App {
            name: "nginx-config-sync".into(),
            status: "stopped".into(),
            port: None,
            cpu: 0.0,
            memory: 0,
            uptime: 0,
            restarts: 7,
        },
        Pm2App {
            name: "metrics-agent".into(),
            status: "online".into(),
            port: None,
            cpu: 0.1,
            memory: 18_874_368,
            uptime: 42_000,
            restarts: 1,
        },
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn machine_fixture_is_well_formed() {
        let machines = mock_machines();
        assert_eq!(machines.len(), 5);
        assert!(machines.iter().all(|m| !m.machine_name.is_empty()));
        assert!(machines.iter().all(|m| !m.url_for_404_api.is_empty()));
    }

    #[test]
    fn pm2_fixture_mixes_statuses_and_ports() {
        let apps = mock_pm2_apps();
        assert!(apps.iter().any(|a| a.is_online()));
        assert!(apps.iter().any(|a| !a.is_online()));
        assert!(apps.iter().any(|a| a.port.is_none()));
    }
}
