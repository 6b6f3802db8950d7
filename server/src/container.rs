//! Container lifecycle and log endpoints.
//!
//! Every failure from the adapter is converted to a JSON `message` here;
//! nothing is retried and nothing crashes the request loop.

use axum::{
	Json,
	extract::{Path, State},
	http::StatusCode,
	response::{IntoResponse, Response},
};
use serde::Serialize;
use std::time::Duration;

use crate::prelude::*;
use manager_types::container_adapter::ContainerStatus;

/// Window of log history returned by the logs endpoint
const LOG_WINDOW: Duration = Duration::from_secs(24 * 60 * 60);

#[derive(Serialize)]
pub struct MessageResponse {
	pub message: String,
}

#[derive(Serialize)]
pub struct LogsResponse {
	pub logs: Vec<String>,
	pub status: ContainerStatus,
}

#[derive(Serialize)]
pub struct StatusResponse {
	pub status: ContainerStatus,
}

fn message(text: impl Into<String>) -> Json<MessageResponse> {
	Json(MessageResponse { message: text.into() })
}

/// POST /api/container/{action}
pub async fn post_container_action(State(app): State<App>, Path(action): Path<String>) -> Response {
	let result = match action.as_str() {
		"start" => app
			.container
			.start()
			.await
			.map(|()| "Container started successfully (with latest settings)"),
		"stop" => app.container.stop().await.map(|()| "Container stopped successfully"),
		// stop + up rather than a plain restart, so changed environment
		// variables actually take effect
		"restart" => app
			.container
			.restart()
			.await
			.map(|()| "Container restarted successfully (settings applied)"),
		_ => return (StatusCode::BAD_REQUEST, message("Invalid action")).into_response(),
	};

	match result {
		Ok(text) => message(text).into_response(),
		Err(err) => {
			error!("Container {} failed: {}", action, err);
			(StatusCode::INTERNAL_SERVER_ERROR, message(err.to_string())).into_response()
		}
	}
}

/// POST /api/container/restart-with-settings
///
/// Stop, remove and recreate, forcing the freshly saved environment in
pub async fn post_restart_with_settings(State(app): State<App>) -> Response {
	match app.container.recreate().await {
		Ok(()) => message("Container recreated successfully with new settings!").into_response(),
		Err(err) => {
			error!("Container recreate failed: {}", err);
			(StatusCode::INTERNAL_SERVER_ERROR, message(err.to_string())).into_response()
		}
	}
}

/// GET /api/logs
pub async fn get_logs(State(app): State<App>) -> Json<LogsResponse> {
	let status = app.container.status().await.unwrap_or(ContainerStatus::Unknown);
	match app.container.logs(LOG_WINDOW).await {
		Ok(logs) => Json(LogsResponse { logs, status }),
		Err(err) => {
			warn!("Failed to fetch container logs: {}", err);
			Json(LogsResponse { logs: vec![format!("Error: {}", err)], status })
		}
	}
}

/// GET /api/status
pub async fn get_status(State(app): State<App>) -> Json<StatusResponse> {
	let status = match app.container.status().await {
		Ok(status) => status,
		Err(err) => {
			warn!("Failed to check container status: {}", err);
			ContainerStatus::Unknown
		}
	};
	Json(StatusResponse { status })
}

// vim: ts=4
