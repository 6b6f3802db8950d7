//! Reconciliation between the schema, the persisted environment, and form
//! submissions.
//!
//! Read path: `merge_current` overlays the persisted `KEY=VALUE` pairs on the
//! schema defaults and yields a fresh `EffectiveConfiguration` in registry
//! order. Write path: `merge_submission` normalizes a decoded form submission
//! into the environment list that gets written back.
//!
//! The registry is authoritative: keys present in the document but not in the
//! schema are dropped from the effective view and do not round-trip a save.

use std::collections::HashMap;

use super::form::Submission;
use super::registry;
use super::types::{Category, SettingDefinition};

/// One setting with its current value applied
#[derive(Debug, PartialEq, Eq)]
pub struct EffectiveSetting {
	pub def: &'static SettingDefinition,
	pub value: String,
}

/// The read-time view of all settings, defaults applied, registry order.
/// Built fresh per request and discarded; never mutated in place.
#[derive(Debug, PartialEq, Eq)]
pub struct EffectiveConfiguration {
	pub groups: Vec<(Category, Vec<EffectiveSetting>)>,
}

impl EffectiveConfiguration {
	pub fn settings(&self) -> impl Iterator<Item = &EffectiveSetting> {
		self.groups.iter().flat_map(|(_, settings)| settings.iter())
	}

	pub fn get(&self, key: &str) -> Option<&str> {
		self.settings().find(|s| s.def.key == key).map(|s| s.value.as_str())
	}

	pub fn to_pairs(&self) -> HashMap<String, String> {
		self.settings().map(|s| (s.def.key.to_string(), s.value.clone())).collect()
	}
}

/// Overlays existing pairs on the schema defaults.
///
/// Present keys override their default, absent keys fall back to it.
/// Idempotent: feeding the output pairs back in yields the same view.
pub fn merge_current(existing: &HashMap<String, String>) -> EffectiveConfiguration {
	let groups = registry::GROUPS
		.iter()
		.map(|(category, defs)| {
			let settings = defs
				.iter()
				.map(|def| EffectiveSetting {
					def,
					value: existing.get(def.key).cloned().unwrap_or_else(|| def.default.to_string()),
				})
				.collect();
			(*category, settings)
		})
		.collect();
	EffectiveConfiguration { groups }
}

/// Normalizes a form submission into the environment list to persist.
///
/// - absent boolean keys are injected as `"False"` (checkbox omission)
/// - other absent keys are omitted entirely; defaults are a read-time
///   concern and are not re-injected on save
/// - values that are empty after trimming are omitted, never written as `KEY=`
/// - output starts with the fixed infrastructure variables, then one entry
///   per surviving schema key in registry declaration order
pub fn merge_submission(submission: &Submission) -> Vec<String> {
	let mut flat = submission.flatten();

	// Unchecked checkboxes never reach the form data; this must run before
	// the general pass so booleans are written explicitly.
	for (_, def) in registry::definitions() {
		if def.is_bool() && !flat.contains_key(def.key) {
			flat.insert(def.key.to_string(), "False".to_string());
		}
	}

	let mut env: Vec<String> = registry::INFRA_VARS.iter().map(|line| line.to_string()).collect();
	for (_, def) in registry::definitions() {
		if let Some(value) = flat.get(def.key) {
			if !value.trim().is_empty() {
				env.push(format!("{}={}", def.key, value));
			}
		}
	}
	env
}


// vim: ts=4
