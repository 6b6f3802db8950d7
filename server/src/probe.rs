//! Connectivity checks against the configured *arr services.
//!
//! One bounded status request per configured service, no retries. Services
//! without a usable URL/key combination are classified without any network
//! call being made.

use axum::{Json, extract::State};
use serde::Serialize;
use std::collections::{BTreeMap, HashMap};
use std::time::Duration;

use crate::prelude::*;
use crate::settings::reconcile;

const PROBE_TIMEOUT: Duration = Duration::from_secs(10);

pub struct ProbeTarget {
	pub name: &'static str,
	pub url_key: &'static str,
	pub api_key_key: &'static str,
	pub status_path: &'static str,
}

pub const PROBE_TARGETS: [ProbeTarget; 4] = [
	ProbeTarget {
		name: "RADARR",
		url_key: "RADARR_URL",
		api_key_key: "RADARR_KEY",
		status_path: "/api/v3/system/status",
	},
	ProbeTarget {
		name: "SONARR",
		url_key: "SONARR_URL",
		api_key_key: "SONARR_KEY",
		status_path: "/api/v3/system/status",
	},
	ProbeTarget {
		name: "LIDARR",
		url_key: "LIDARR_URL",
		api_key_key: "LIDARR_KEY",
		status_path: "/api/v1/system/status",
	},
	ProbeTarget {
		name: "READARR",
		url_key: "READARR_URL",
		api_key_key: "READARR_KEY",
		status_path: "/api/v1/system/status",
	},
];

#[derive(Debug, PartialEq, Eq, Serialize)]
pub struct ProbeResult {
	pub success: bool,
	pub message: String,
}

impl ProbeResult {
	fn ok() -> Self {
		ProbeResult { success: true, message: "Connection successful".to_string() }
	}

	fn failure(message: impl Into<String>) -> Self {
		ProbeResult { success: false, message: message.into() }
	}
}

/// Pre-flight classification. `Some` means the result is already decided and
/// no request must be issued.
pub fn classify_config(url: &str, api_key: &str) -> Option<ProbeResult> {
	if url.trim().is_empty() {
		Some(ProbeResult::failure("URL not configured"))
	} else if api_key.trim().is_empty() {
		Some(ProbeResult::failure("API key missing"))
	} else {
		None
	}
}

fn status_url(base: &str, path: &str) -> String {
	format!("{}{}", base.trim().trim_end_matches('/'), path)
}

pub async fn probe_target(
	client: &reqwest::Client,
	target: &ProbeTarget,
	url: &str,
	api_key: &str,
) -> ProbeResult {
	if let Some(result) = classify_config(url, api_key) {
		return result;
	}

	let request = client
		.get(status_url(url, target.status_path))
		.header("X-Api-Key", api_key.trim())
		.timeout(PROBE_TIMEOUT);
	match request.send().await {
		Ok(response) if response.status() == reqwest::StatusCode::OK => ProbeResult::ok(),
		Ok(response) => ProbeResult::failure(format!("HTTP {}", response.status().as_u16())),
		Err(err) => ProbeResult::failure(err.to_string()),
	}
}

/// GET /api/test-connections
pub async fn get_test_connections(
	State(app): State<App>,
) -> Json<BTreeMap<&'static str, ProbeResult>> {
	let existing = match app.compose.read_environment().await {
		Ok(pairs) => pairs,
		Err(err) => {
			warn!("Falling back to schema defaults for connectivity test: {}", err);
			HashMap::new()
		}
	};
	let config = reconcile::merge_current(&existing);

	let mut results = BTreeMap::new();
	for target in &PROBE_TARGETS {
		let url = config.get(target.url_key).unwrap_or("");
		let api_key = config.get(target.api_key_key).unwrap_or("");
		results.insert(target.name, probe_target(&app.http, target, url, api_key).await);
	}
	Json(results)
}


// vim: ts=4
