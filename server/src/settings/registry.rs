//! The immutable schema of recognized settings.
//!
//! Declaration order is authoritative: it drives both the rendered form and
//! the order of `KEY=VALUE` entries written back to the compose document.

use super::types::{Category, SettingDefinition, ValueType};

/// Infrastructure variables regenerated at fixed values on every save.
/// Not part of the schema and never shown in the form.
pub const INFRA_VARS: [&str; 3] = ["TZ=America/Detroit", "PUID=1000", "PGID=1000"];

const GENERAL: &[SettingDefinition] = &[
	SettingDefinition {
		key: "LOG_LEVEL",
		typ: ValueType::Select { options: &["INFO", "VERBOSE"] },
		default: "INFO",
		description: "Logging verbosity level",
	},
	SettingDefinition {
		key: "TEST_RUN",
		typ: ValueType::Bool,
		default: "False",
		description: "Dry run mode - shows what would be removed without actually removing",
	},
	SettingDefinition {
		key: "REMOVE_TIMER",
		typ: ValueType::Number { min: 1, max: 1440 },
		default: "6",
		description: "Minutes between cleanup cycles",
	},
];

const CLEANUP_FEATURES: &[SettingDefinition] = &[
	SettingDefinition {
		key: "REMOVE_FAILED",
		typ: ValueType::Bool,
		default: "True",
		description: "Remove downloads that failed",
	},
	SettingDefinition {
		key: "REMOVE_FAILED_IMPORTS",
		typ: ValueType::Bool,
		default: "True",
		description: "Remove downloads that failed to import",
	},
	SettingDefinition {
		key: "REMOVE_METADATA_MISSING",
		typ: ValueType::Bool,
		default: "True",
		description: "Remove downloads missing metadata",
	},
	SettingDefinition {
		key: "REMOVE_MISSING_FILES",
		typ: ValueType::Bool,
		default: "True",
		description: "Remove downloads with missing files",
	},
	SettingDefinition {
		key: "REMOVE_ORPHANS",
		typ: ValueType::Bool,
		default: "True",
		description: "Remove orphaned downloads not linked to media",
	},
	SettingDefinition {
		key: "REMOVE_SLOW",
		typ: ValueType::Bool,
		default: "True",
		description: "Remove downloads below minimum speed",
	},
	SettingDefinition {
		key: "REMOVE_STALLED",
		typ: ValueType::Bool,
		default: "True",
		description: "Remove stalled downloads",
	},
	SettingDefinition {
		key: "REMOVE_UNMONITORED",
		typ: ValueType::Bool,
		default: "True",
		description: "Remove downloads for unmonitored items",
	},
];

const BEHAVIOR: &[SettingDefinition] = &[
	SettingDefinition {
		key: "MIN_DOWNLOAD_SPEED",
		typ: ValueType::Number { min: 0, max: 10000 },
		default: "100",
		description: "Minimum KB/s before considering download \"slow\"",
	},
	SettingDefinition {
		key: "PERMITTED_ATTEMPTS",
		typ: ValueType::Number { min: 1, max: 10 },
		default: "3",
		description: "Times to detect issue before removal",
	},
	SettingDefinition {
		key: "IGNORE_PRIVATE_TRACKERS",
		typ: ValueType::Bool,
		default: "False",
		description: "Skip downloads from private trackers",
	},
	SettingDefinition {
		key: "NO_STALLED_REMOVAL_QBIT_TAG",
		typ: ValueType::Text,
		default: "Don't Kill",
		description: "qBittorrent tag to protect from stalled removal",
	},
];

const ARR_SERVICES: &[SettingDefinition] = &[
	SettingDefinition {
		key: "RADARR_URL",
		typ: ValueType::Text,
		default: "http://192.168.1.4:7878",
		description: "Radarr base URL",
	},
	SettingDefinition {
		key: "RADARR_KEY",
		typ: ValueType::Secret,
		default: "",
		description: "Radarr API key",
	},
	SettingDefinition {
		key: "SONARR_URL",
		typ: ValueType::Text,
		default: "http://192.168.1.4:8989",
		description: "Sonarr base URL",
	},
	SettingDefinition {
		key: "SONARR_KEY",
		typ: ValueType::Secret,
		default: "",
		description: "Sonarr API key",
	},
	SettingDefinition {
		key: "LIDARR_URL",
		typ: ValueType::Text,
		default: "",
		description: "Lidarr base URL (optional)",
	},
	SettingDefinition {
		key: "LIDARR_KEY",
		typ: ValueType::Secret,
		default: "",
		description: "Lidarr API key (optional)",
	},
	SettingDefinition {
		key: "READARR_URL",
		typ: ValueType::Text,
		default: "",
		description: "Readarr base URL (optional)",
	},
	SettingDefinition {
		key: "READARR_KEY",
		typ: ValueType::Secret,
		default: "",
		description: "Readarr API key (optional)",
	},
];

const DOWNLOAD_CLIENT: &[SettingDefinition] = &[
	SettingDefinition {
		key: "QBITTORRENT_URL",
		typ: ValueType::Text,
		default: "",
		description: "qBittorrent base URL (optional)",
	},
	SettingDefinition {
		key: "QBITTORRENT_USERNAME",
		typ: ValueType::Text,
		default: "",
		description: "qBittorrent username (optional)",
	},
	SettingDefinition {
		key: "QBITTORRENT_PASSWORD",
		typ: ValueType::Secret,
		default: "",
		description: "qBittorrent password (optional)",
	},
];

pub const GROUPS: [(Category, &[SettingDefinition]); 5] = [
	(Category::General, GENERAL),
	(Category::CleanupFeatures, CLEANUP_FEATURES),
	(Category::Behavior, BEHAVIOR),
	(Category::ArrServices, ARR_SERVICES),
	(Category::DownloadClient, DOWNLOAD_CLIENT),
];

/// All definitions in declaration order
pub fn definitions() -> impl Iterator<Item = (Category, &'static SettingDefinition)> {
	GROUPS.iter().flat_map(|(category, defs)| defs.iter().map(move |def| (*category, def)))
}

pub fn get(key: &str) -> Option<&'static SettingDefinition> {
	definitions().map(|(_, def)| def).find(|def| def.key == key)
}

#[cfg(test)]
mod tests {
	use super::*;
	use std::collections::HashSet;

	#[test]
	fn test_keys_are_unique() {
		let mut seen = HashSet::new();
		for (_, def) in definitions() {
			assert!(seen.insert(def.key), "duplicate key {}", def.key);
		}
	}

	#[test]
	fn test_bool_defaults_are_canonical() {
		for (_, def) in definitions() {
			if def.is_bool() {
				assert!(def.default == "True" || def.default == "False", "{}", def.key);
			}
		}
	}

	#[test]
	fn test_lookup() {
		assert_eq!(get("LOG_LEVEL").map(|d| d.default), Some("INFO"));
		assert!(get("NOT_A_SETTING").is_none());
	}
}

// vim: ts=4
