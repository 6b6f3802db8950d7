use axum::{
	Router,
	routing::{get, post},
};
use tower_http::trace::TraceLayer;

use crate::prelude::*;
use crate::{container, probe, settings};

pub fn init(app: App) -> Router {
	Router::new()
		.route("/", get(settings::handler::get_dashboard))
		.route("/save-settings", post(settings::handler::post_save_settings))
		.route("/api/container/restart-with-settings", post(container::post_restart_with_settings))
		.route("/api/container/{action}", post(container::post_container_action))
		.route("/api/logs", get(container::get_logs))
		.route("/api/status", get(container::get_status))
		.route("/api/test-connections", get(probe::get_test_connections))
		.layer(TraceLayer::new_for_http())
		.with_state(app)
}

// vim: ts=4
