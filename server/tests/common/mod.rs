//! Shared fixtures for the HTTP endpoint tests.

use async_trait::async_trait;
use axum::Router;
use std::{
	path::{Path, PathBuf},
	sync::{Arc, Mutex},
	time::Duration,
};

use decluttarr_manager::{AppBuilder, routes};
use manager_types::container_adapter::{ContainerAdapter, ContainerStatus};
use manager_types::error::{Error, MgrResult};

pub const COMPOSE_FIXTURE: &str = "\
services:
  decluttarr:
    image: ghcr.io/manimatter/decluttarr:latest
    restart: unless-stopped
    environment:
      - TZ=America/Detroit
      - PUID=1000
      - PGID=1000
      - LOG_LEVEL=INFO
      - REMOVE_TIMER=6
      - RADARR_URL=http://192.168.1.4:7878
      - RADARR_KEY=secret123
";

/// In-memory stand-in for the compose-backed adapter.
#[derive(Debug)]
pub struct FakeContainerAdapter {
	pub state: Mutex<ContainerStatus>,
	pub fail: bool,
}

impl FakeContainerAdapter {
	pub fn new(initial: ContainerStatus) -> Arc<Self> {
		Arc::new(FakeContainerAdapter { state: Mutex::new(initial), fail: false })
	}

	pub fn failing() -> Arc<Self> {
		Arc::new(FakeContainerAdapter { state: Mutex::new(ContainerStatus::Stopped), fail: true })
	}

	pub fn current(&self) -> ContainerStatus {
		*self.state.lock().unwrap()
	}

	fn check(&self, action: &'static str) -> MgrResult<()> {
		if self.fail {
			Err(Error::ContainerControl { action, message: "docker unavailable".into() })
		} else {
			Ok(())
		}
	}

	fn set(&self, status: ContainerStatus) {
		*self.state.lock().unwrap() = status;
	}
}

#[async_trait]
impl ContainerAdapter for FakeContainerAdapter {
	async fn start(&self) -> MgrResult<()> {
		self.check("start")?;
		self.set(ContainerStatus::Running);
		Ok(())
	}

	async fn stop(&self) -> MgrResult<()> {
		self.check("stop")?;
		self.set(ContainerStatus::Stopped);
		Ok(())
	}

	async fn restart(&self) -> MgrResult<()> {
		self.check("restart")?;
		self.set(ContainerStatus::Running);
		Ok(())
	}

	async fn recreate(&self) -> MgrResult<()> {
		self.check("recreate")?;
		self.set(ContainerStatus::Running);
		Ok(())
	}

	async fn status(&self) -> MgrResult<ContainerStatus> {
		self.check("status")?;
		Ok(self.current())
	}

	async fn logs(&self, _since: Duration) -> MgrResult<Vec<String>> {
		self.check("logs")?;
		Ok(vec![
			"2025-01-01T00:00:00.000000000Z [Info] Queue clean".into(),
			"2025-01-01T00:00:05.000000000Z [Info] Nothing to remove".into(),
		])
	}
}

pub fn write_compose(dir: &Path, yaml: &str) -> PathBuf {
	let path = dir.join("docker-compose.yml");
	std::fs::write(&path, yaml).expect("write compose fixture");
	path
}

pub fn test_app(compose_file: impl Into<PathBuf>, adapter: Arc<dyn ContainerAdapter>) -> Router {
	let mut builder = AppBuilder::new();
	builder.compose_file(compose_file).service("decluttarr").container_adapter(adapter);
	routes::init(builder.build().expect("app should build"))
}

// vim: ts=4
