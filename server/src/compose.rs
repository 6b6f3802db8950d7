//! Compose document store.
//!
//! Reads and patches the `services.<service>.environment` list of a
//! docker-compose YAML document. Only the environment list is ever touched;
//! the rest of the document round-trips untouched. Writes build the full new
//! document in memory and swap the file in with a rename, so a failed save
//! never leaves a half-written document behind.

use serde_yaml::Value;
use std::collections::HashMap;
use std::path::{Path, PathBuf};

use crate::prelude::*;

pub struct ComposeStore {
	path: Box<Path>,
	service: Box<str>,
}

impl ComposeStore {
	pub fn new(path: impl Into<PathBuf>, service: impl Into<Box<str>>) -> Self {
		Self { path: path.into().into(), service: service.into() }
	}

	async fn load(&self) -> MgrResult<Value> {
		let text = match tokio::fs::read_to_string(&self.path).await {
			Ok(text) => text,
			Err(err) if err.kind() == std::io::ErrorKind::NotFound => {
				return Err(Error::ConfigMissing);
			}
			Err(err) => return Err(err.into()),
		};
		serde_yaml::from_str(&text)
			.map_err(|err| Error::Parse(format!("invalid compose document: {}", err)))
	}

	/// Current `KEY=VALUE` pairs of the managed service.
	///
	/// Entries without a `=` are ignored. A service without an `environment`
	/// list yields an empty map; a missing document or service block is
	/// `ConfigMissing`.
	pub async fn read_environment(&self) -> MgrResult<HashMap<String, String>> {
		let doc = self.load().await?;
		let service = doc
			.get("services")
			.and_then(|services| services.get(self.service.as_ref()))
			.ok_or(Error::ConfigMissing)?;

		let mut pairs = HashMap::new();
		if let Some(Value::Sequence(entries)) = service.get("environment") {
			for entry in entries {
				if let Some((key, value)) = entry.as_str().and_then(|line| line.split_once('=')) {
					pairs.insert(key.to_string(), value.to_string());
				}
			}
		}
		Ok(pairs)
	}

	/// Replaces the service's environment list and atomically rewrites the file
	pub async fn write_environment(&self, env: &[String]) -> MgrResult<()> {
		let mut doc = self.load().await?;
		let service = doc
			.get_mut("services")
			.and_then(|services| services.get_mut(self.service.as_ref()))
			.ok_or(Error::ConfigMissing)?;

		let list = Value::Sequence(env.iter().map(|line| Value::String(line.clone())).collect());
		match service {
			Value::Mapping(map) => {
				map.insert(Value::String("environment".to_string()), list);
			}
			_ => return Err(Error::ConfigMissing),
		}

		let text = serde_yaml::to_string(&doc)
			.map_err(|err| Error::Parse(format!("failed to serialize compose document: {}", err)))?;

		let tmp = self.path.with_extension("tmp");
		tokio::fs::write(&tmp, text).await?;
		tokio::fs::rename(&tmp, &self.path).await?;
		info!("Wrote {} environment entries to {:?}", env.len(), self.path);
		Ok(())
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	const COMPOSE: &str = "\
services:
  decluttarr:
    image: ghcr.io/manimatter/decluttarr:latest
    restart: unless-stopped
    environment:
      - TZ=America/Detroit
      - LOG_LEVEL=VERBOSE
      - badline
";

	fn store(dir: &tempfile::TempDir) -> ComposeStore {
		let path = dir.path().join("docker-compose.yml");
		std::fs::write(&path, COMPOSE).unwrap();
		ComposeStore::new(path, "decluttarr")
	}

	#[tokio::test]
	async fn test_read_environment() {
		let dir = tempfile::tempdir().unwrap();
		let pairs = store(&dir).read_environment().await.unwrap();
		assert_eq!(pairs.get("LOG_LEVEL").map(String::as_str), Some("VERBOSE"));
		assert_eq!(pairs.get("TZ").map(String::as_str), Some("America/Detroit"));
		// entries without '=' are skipped
		assert_eq!(pairs.len(), 2);
	}

	#[tokio::test]
	async fn test_missing_file_is_config_missing() {
		let dir = tempfile::tempdir().unwrap();
		let store = ComposeStore::new(dir.path().join("nope.yml"), "decluttarr");
		assert!(matches!(store.read_environment().await, Err(Error::ConfigMissing)));
	}

	#[tokio::test]
	async fn test_missing_service_is_config_missing() {
		let dir = tempfile::tempdir().unwrap();
		let path = dir.path().join("docker-compose.yml");
		std::fs::write(&path, "services:\n  other: {}\n").unwrap();
		let store = ComposeStore::new(path, "decluttarr");
		assert!(matches!(store.read_environment().await, Err(Error::ConfigMissing)));
		assert!(matches!(store.write_environment(&[]).await, Err(Error::ConfigMissing)));
	}

	#[tokio::test]
	async fn test_malformed_document_is_parse_error() {
		let dir = tempfile::tempdir().unwrap();
		let path = dir.path().join("docker-compose.yml");
		std::fs::write(&path, "services: [unterminated\n").unwrap();
		let store = ComposeStore::new(path, "decluttarr");
		assert!(matches!(store.read_environment().await, Err(Error::Parse(_))));
	}

	#[tokio::test]
	async fn test_write_replaces_environment_and_preserves_rest() {
		let dir = tempfile::tempdir().unwrap();
		let store = store(&dir);
		store
			.write_environment(&["TZ=America/Detroit".to_string(), "LOG_LEVEL=INFO".to_string()])
			.await
			.unwrap();

		let pairs = store.read_environment().await.unwrap();
		assert_eq!(pairs.get("LOG_LEVEL").map(String::as_str), Some("INFO"));

		let text = std::fs::read_to_string(dir.path().join("docker-compose.yml")).unwrap();
		assert!(text.contains("ghcr.io/manimatter/decluttarr:latest"));
		assert!(text.contains("restart: unless-stopped"));
		assert!(!text.contains("badline"));
	}

	#[tokio::test]
	async fn test_write_adds_environment_when_absent() {
		let dir = tempfile::tempdir().unwrap();
		let path = dir.path().join("docker-compose.yml");
		std::fs::write(&path, "services:\n  decluttarr:\n    image: x\n").unwrap();
		let store = ComposeStore::new(path, "decluttarr");
		store.write_environment(&["PUID=1000".to_string()]).await.unwrap();
		let pairs = store.read_environment().await.unwrap();
		assert_eq!(pairs.get("PUID").map(String::as_str), Some("1000"));
	}
}

// vim: ts=4
