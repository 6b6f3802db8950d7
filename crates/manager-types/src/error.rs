use axum::{Json, http::StatusCode, response::IntoResponse};
use serde_json::json;

pub type MgrResult<T> = std::result::Result<T, Error>;

#[derive(Debug)]
pub enum Error {
	/// The compose document or the managed service block is missing
	ConfigMissing,
	/// The persisted document exists but cannot be parsed
	Parse(String),
	/// The container CLI exited non-zero or timed out
	ContainerControl { action: &'static str, message: String },
	/// A connectivity check failed at the transport level
	Probe(String),
	/// Invalid user input
	Validation(String),
	Internal(String),

	// externals
	Io(std::io::Error),
}

impl From<std::io::Error> for Error {
	fn from(err: std::io::Error) -> Self {
		Self::Io(err)
	}
}

impl std::fmt::Display for Error {
	fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
		match self {
			Error::ConfigMissing => write!(f, "compose service configuration is missing"),
			Error::Parse(msg) => write!(f, "parse error: {}", msg),
			Error::ContainerControl { action, message } => {
				write!(f, "container {} failed: {}", action, message)
			}
			Error::Probe(msg) => write!(f, "probe error: {}", msg),
			Error::Validation(msg) => write!(f, "{}", msg),
			Error::Internal(msg) => write!(f, "{}", msg),
			Error::Io(err) => write!(f, "io error: {}", err),
		}
	}
}

impl std::error::Error for Error {}

/// Every failure surfaces at the request boundary as a JSON `message`,
/// never as a crash.
impl IntoResponse for Error {
	fn into_response(self) -> axum::response::Response {
		let status = match self {
			Error::Validation(_) => StatusCode::BAD_REQUEST,
			_ => StatusCode::INTERNAL_SERVER_ERROR,
		};
		(status, Json(json!({ "message": self.to_string() }))).into_response()
	}
}

// vim: ts=4
