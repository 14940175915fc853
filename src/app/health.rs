//! Server health probe

use super::App;
use crate::api::{self, HealthReport};
use crate::constants::HEALTH_PATH;
use crate::types::ServerStatus;
use eframe::egui;
use tracing::{debug, info, warn};

/// Pack a probe outcome into the temp-memory string, first line is the URL
/// that was probed so late answers for an abandoned URL can be told apart.
fn pack_probe(url: &str, result: &Result<HealthReport, String>) -> String {
    match result {
        Ok(report) => format!("{}\nok\n{}\n{}", url, report.service, report.version),
        Err(e) => format!("{}\nerr\n{}", url, e),
    }
}

/// Decode a packed probe outcome. Returns None when the result belongs to a
/// URL the user has since switched away from.
fn interpret_probe(raw: &str, current_url: &str) -> Option<ServerStatus> {
    let (probed_url, rest) = raw.split_once('\n')?;
    if probed_url != current_url {
        return None;
    }
    Some(match rest.split_once('\n') {
        Some(("ok", rest)) => {
            let (service, version) = rest.split_once('\n').unwrap_or((rest, ""));
            ServerStatus::Connected {
                service: service.to_string(),
                version: version.to_string(),
            }
        }
        Some(("err", detail)) => ServerStatus::Unreachable(detail.to_string()),
        _ => ServerStatus::Unreachable(rest.to_string()),
    })
}

impl App {
    /// Probe the advisory server in the background. Runs once at startup
    /// and again whenever the server URL changes.
    pub fn check_server_health(&mut self, ctx: &egui::Context) {
        self.server_status = ServerStatus::Checking;

        let ctx = ctx.clone();
        let url = api::join_url(&self.server_url, HEALTH_PATH);
        debug!(url = %url, "Probing advisory server");

        std::thread::spawn(move || {
            let result: Result<HealthReport, String> = (|| {
                let response = reqwest::blocking::get(&url).map_err(|e| e.to_string())?;
                let report = response.json::<HealthReport>().map_err(|e| e.to_string())?;
                if report.status != "healthy" {
                    return Err(format!("service reports status '{}'", report.status));
                }
                Ok(report)
            })();

            match &result {
                Ok(report) => info!(
                    service = %report.service,
                    version = %report.version,
                    "Advisory server reachable"
                ),
                Err(e) => warn!(error = %e, "Advisory server unreachable"),
            }

            let packed = pack_probe(&url, &result);
            ctx.memory_mut(|mem| mem.data.insert_temp("server_health".into(), packed));
            ctx.request_repaint();
        });
    }

    /// Pick up a finished health probe. Called every frame.
    pub fn poll_health(&mut self, ctx: &egui::Context) {
        let raw = ctx.memory_mut(|mem| {
            let value = mem.data.get_temp::<String>("server_health".into());
            if value.is_some() {
                mem.data.remove::<String>("server_health".into());
            }
            value
        });

        if let Some(raw) = raw {
            let current = api::join_url(&self.server_url, HEALTH_PATH);
            match interpret_probe(&raw, &current) {
                Some(status) => self.server_status = status,
                None => debug!("Discarding health probe for an old server URL"),
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    const PROBE_URL: &str = "http://localhost:5000/api/health";

    fn healthy_report() -> HealthReport {
        HealthReport {
            status: "healthy".into(),
            service: "Farm Advisory API".into(),
            version: "1.2.0".into(),
        }
    }

    #[test]
    fn probe_of_a_reachable_server_comes_back_connected() {
        let packed = pack_probe(PROBE_URL, &Ok(healthy_report()));
        assert_eq!(
            interpret_probe(&packed, PROBE_URL),
            Some(ServerStatus::Connected {
                service: "Farm Advisory API".into(),
                version: "1.2.0".into(),
            })
        );
    }

    #[test]
    fn probe_failure_carries_the_detail() {
        let packed = pack_probe(PROBE_URL, &Err("connection refused".into()));
        assert_eq!(
            interpret_probe(&packed, PROBE_URL),
            Some(ServerStatus::Unreachable("connection refused".into()))
        );
    }

    #[test]
    fn probe_for_a_superseded_url_is_discarded() {
        // the URL changed while the probe was running
        let packed = pack_probe("http://old-host:5000/api/health", &Ok(healthy_report()));
        assert_eq!(interpret_probe(&packed, PROBE_URL), None);
    }

    #[test]
    fn malformed_probe_payload_reads_as_unreachable() {
        assert_eq!(
            interpret_probe(&format!("{}\ngarbage", PROBE_URL), PROBE_URL),
            Some(ServerStatus::Unreachable("garbage".into()))
        );
    }
}
