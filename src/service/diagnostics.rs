use crate::model::region::{Region, REGIONS};

use super::{config::ApiConfig, gameapi::client::ApiClient};

/// Known player used to probe endpoints that need an existing account.
const PROBE_PLAYER: &str = "Faker";

/// Outcome of one diagnostic step.
pub struct DiagnosticLine {
    pub label: String,
    pub passed: bool,
    pub detail: String,
}

pub struct DiagnosticsService<'a> {
    client: &'a ApiClient,
    config: &'a ApiConfig,
}

impl<'a> DiagnosticsService<'a> {
    pub fn new(client: &'a ApiClient, config: &'a ApiConfig) -> Self {
        Self { client, config }
    }

    /// Key checks, one availability probe per region, and a summoner probe on
    /// the first region. Failures become report lines, never errors.
    pub fn run(&self) -> Vec<DiagnosticLine> {
        let mut lines = self.check_api_key();
        for region in &REGIONS {
            lines.push(self.probe_status(region));
        }
        lines.push(self.probe_summoner(&REGIONS[0]));
        lines
    }

    fn check_api_key(&self) -> Vec<DiagnosticLine> {
        let key = self.config.api_key();
        let configured = self.config.has_api_key();
        let well_formed = self.config.api_key_looks_valid();

        vec![
            DiagnosticLine {
                label: "API key configured".to_string(),
                passed: configured,
                detail: if configured {
                    format!("{} characters", key.len())
                } else {
                    "no key set".to_string()
                },
            },
            DiagnosticLine {
                label: "API key format".to_string(),
                passed: well_formed,
                detail: if well_formed {
                    format!("{}...", key.get(..10).unwrap_or(key))
                } else {
                    "development keys start with RGAPI- and expire after 24h".to_string()
                },
            },
        ]
    }

    fn probe_status(&self, region: &Region) -> DiagnosticLine {
        let label = format!("Status API ({})", region.code);
        match self.client.probe_status_endpoint(region) {
            Ok(200) => DiagnosticLine {
                label,
                passed: true,
                detail: "HTTP 200".to_string(),
            },
            Ok(status) => DiagnosticLine {
                label,
                passed: false,
                detail: DiagnosticsService::status_hint(status),
            },
            Err(err) => DiagnosticLine {
                label,
                passed: false,
                detail: format!("{}", err),
            },
        }
    }

    fn probe_summoner(&self, region: &Region) -> DiagnosticLine {
        let label = format!("Summoner API ({}, '{}')", region.code, PROBE_PLAYER);
        match self.client.probe_summoner_endpoint(PROBE_PLAYER, region) {
            Ok(200) => DiagnosticLine {
                label,
                passed: true,
                detail: "HTTP 200".to_string(),
            },
            Ok(status) => DiagnosticLine {
                label,
                passed: false,
                detail: DiagnosticsService::status_hint(status),
            },
            Err(err) => DiagnosticLine {
                label,
                passed: false,
                detail: format!("{}", err),
            },
        }
    }

    fn status_hint(status: u16) -> String {
        match status {
            403 => "HTTP 403 - key invalid, expired or lacking permissions".to_string(),
            404 => "HTTP 404 - endpoint reachable, player unknown".to_string(),
            429 => "HTTP 429 - rate limit exceeded, wait a few minutes".to_string(),
            other => format!("HTTP {}", other),
        }
    }
}
