use async_trait::async_trait;
use serde::Serialize;
use std::{fmt::Debug, time::Duration};

use crate::error::MgrResult;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ContainerStatus {
	Running,
	Stopped,
	Unknown,
}

/// Capability interface for controlling the managed container.
///
/// Implementations shell out to a container runtime (or fake it in tests).
/// Every call is bounded by a timeout; failures carry the attempted action
/// and the underlying tool message, and are never retried.
#[async_trait]
pub trait ContainerAdapter: Debug + Send + Sync {
	/// Creates/starts the container with the current compose environment
	async fn start(&self) -> MgrResult<()>;
	async fn stop(&self) -> MgrResult<()>;
	/// Stop + up. A plain runtime restart would keep the old environment,
	/// only recreating the container picks up changed variables.
	async fn restart(&self) -> MgrResult<()>;
	/// Stop, remove and create the container from scratch
	async fn recreate(&self) -> MgrResult<()>;
	async fn status(&self) -> MgrResult<ContainerStatus>;
	/// Timestamp-prefixed log lines covering the given window,
	/// stderr before stdout, blank lines stripped
	async fn logs(&self, since: Duration) -> MgrResult<Vec<String>>;
}

// vim: ts=4
