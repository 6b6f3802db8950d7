//! docker-compose CLI backed implementation of the `ContainerAdapter` trait.
//!
//! All lifecycle operations go through `docker compose -f <file> ...` so that
//! (re)created containers always pick up the environment currently persisted
//! in the compose document. Status and logs use the plain `docker` CLI.

use std::{path::Path, process::Output, time::Duration};

use async_trait::async_trait;
use tokio::{process::Command, time::timeout};

use manager_types::container_adapter::{ContainerAdapter, ContainerStatus};
use manager_types::prelude::*;

/// Bound for stop/status-class calls
const STOP_TIMEOUT: Duration = Duration::from_secs(30);
/// Bound for start/create-class calls
const START_TIMEOUT: Duration = Duration::from_secs(60);

#[derive(Debug)]
pub struct ContainerAdapterCompose {
	compose_file: Box<Path>,
	service: Box<str>,
}

impl ContainerAdapterCompose {
	pub fn new(compose_file: impl Into<Box<Path>>, service: impl Into<Box<str>>) -> Self {
		Self { compose_file: compose_file.into(), service: service.into() }
	}

	/// `docker compose -f <file> <args..> <service>`
	fn compose_command(&self, args: &[&str]) -> Command {
		let mut cmd = Command::new("docker");
		cmd.arg("compose").arg("-f").arg(self.compose_file.as_ref());
		cmd.args(args);
		cmd.arg(self.service.as_ref());
		cmd
	}

	async fn run(&self, action: &'static str, limit: Duration, mut cmd: Command) -> MgrResult<Output> {
		debug!("Running container {} command: {:?}", action, cmd.as_std());
		let output = timeout(limit, cmd.output())
			.await
			.map_err(|_| Error::ContainerControl {
				action,
				message: format!("timed out after {}s", limit.as_secs()),
			})?
			.map_err(|err| Error::ContainerControl { action, message: err.to_string() })?;

		if !output.status.success() {
			let stderr = String::from_utf8_lossy(&output.stderr);
			return Err(Error::ContainerControl { action, message: stderr.trim().to_string() });
		}
		Ok(output)
	}

	async fn compose_up(&self, action: &'static str) -> MgrResult<()> {
		self.run(action, START_TIMEOUT, self.compose_command(&["up", "-d"])).await?;
		Ok(())
	}

	async fn compose_stop(&self, action: &'static str) -> MgrResult<()> {
		self.run(action, STOP_TIMEOUT, self.compose_command(&["stop"])).await?;
		Ok(())
	}
}

#[async_trait]
impl ContainerAdapter for ContainerAdapterCompose {
	async fn start(&self) -> MgrResult<()> {
		// `up -d` rather than `start`, so a stale container is recreated
		// with the latest environment
		self.compose_up("start").await
	}

	async fn stop(&self) -> MgrResult<()> {
		self.compose_stop("stop").await
	}

	async fn restart(&self) -> MgrResult<()> {
		self.compose_stop("restart").await?;
		self.compose_up("restart").await
	}

	async fn recreate(&self) -> MgrResult<()> {
		self.compose_stop("recreate").await?;
		self.run("recreate", STOP_TIMEOUT, self.compose_command(&["rm", "-f"])).await?;
		self.compose_up("recreate").await
	}

	async fn status(&self) -> MgrResult<ContainerStatus> {
		let mut cmd = Command::new("docker");
		cmd.args(["ps", "--filter"])
			.arg(format!("name={}", self.service))
			.args(["--format", "{{.Status}}"]);
		let output = self.run("status", STOP_TIMEOUT, cmd).await?;
		Ok(parse_status(&String::from_utf8_lossy(&output.stdout)))
	}

	async fn logs(&self, since: Duration) -> MgrResult<Vec<String>> {
		let mut cmd = Command::new("docker");
		cmd.args(["logs", "--timestamps", "--since"])
			.arg(format!("{}s", since.as_secs()))
			.arg(self.service.as_ref());
		let output = self.run("logs", STOP_TIMEOUT, cmd).await?;
		Ok(collect_log_lines(
			&String::from_utf8_lossy(&output.stderr),
			&String::from_utf8_lossy(&output.stdout),
		))
	}
}

fn parse_status(ps_output: &str) -> ContainerStatus {
	if ps_output.contains("Up") { ContainerStatus::Running } else { ContainerStatus::Stopped }
}

/// Interleaves the two log streams stderr-first and strips blank lines
fn collect_log_lines(stderr: &str, stdout: &str) -> Vec<String> {
	stderr
		.lines()
		.chain(stdout.lines())
		.map(str::trim)
		.filter(|line| !line.is_empty())
		.map(str::to_string)
		.collect()
}


// vim: ts=4
