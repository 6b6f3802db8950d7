//! Decoding of the flat HTML form submission.
//!
//! HTML forms are stringly typed: a field can arrive once, several times
//! (checkbox + hidden fallback), or not at all. The duck typing is resolved
//! once here, at the boundary, into an explicit `FormValue` before anything
//! reaches the reconciler.

use std::collections::HashMap;
use std::collections::hash_map::Entry;

/// Checkbox token sent by browsers for a checked box without a value attribute
const CHECKBOX_TOKEN: &str = "on";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FormValue {
	Scalar(String),
	Multiple(Vec<String>),
}

/// One decoded form submission, keyed by field name
#[derive(Debug, Default)]
pub struct Submission(HashMap<String, FormValue>);

impl Submission {
	/// Groups the raw urlencoded pair list by field name
	pub fn from_pairs(pairs: impl IntoIterator<Item = (String, String)>) -> Self {
		let mut map: HashMap<String, FormValue> = HashMap::new();
		for (key, value) in pairs {
			match map.entry(key) {
				Entry::Vacant(entry) => {
					entry.insert(FormValue::Scalar(value));
				}
				Entry::Occupied(mut entry) => {
					let slot = entry.get_mut();
					match slot {
						FormValue::Scalar(prev) => {
							let first = std::mem::take(prev);
							*slot = FormValue::Multiple(vec![first, value]);
						}
						FormValue::Multiple(list) => list.push(value),
					}
				}
			}
		}
		Submission(map)
	}

	pub fn insert(&mut self, key: impl Into<String>, value: FormValue) {
		self.0.insert(key.into(), value);
	}

	pub fn contains_key(&self, key: &str) -> bool {
		self.0.contains_key(key)
	}

	/// Collapses every field to a single string:
	/// - a list of length 1 collapses to its element
	/// - a list of length > 1 or the raw checkbox token collapses to `"True"`
	pub fn flatten(&self) -> HashMap<String, String> {
		self.0
			.iter()
			.map(|(key, value)| (key.clone(), flatten_value(value)))
			.collect()
	}
}

fn flatten_value(value: &FormValue) -> String {
	match value {
		FormValue::Scalar(s) => coerce_checkbox(s),
		FormValue::Multiple(list) if list.len() == 1 => coerce_checkbox(&list[0]),
		FormValue::Multiple(_) => "True".to_string(),
	}
}

fn coerce_checkbox(value: &str) -> String {
	if value == CHECKBOX_TOKEN { "True".to_string() } else { value.to_string() }
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn test_scalar_checkbox_token_becomes_true() {
		let sub = Submission::from_pairs([("REMOVE_FAILED".to_string(), "on".to_string())]);
		assert_eq!(sub.flatten().get("REMOVE_FAILED").map(String::as_str), Some("True"));
	}

	#[test]
	fn test_single_item_list_collapses_to_element() {
		let mut sub = Submission::default();
		sub.insert("LOG_LEVEL", FormValue::Multiple(vec!["VERBOSE".to_string()]));
		assert_eq!(sub.flatten().get("LOG_LEVEL").map(String::as_str), Some("VERBOSE"));
	}

	#[test]
	fn test_multi_item_list_becomes_true() {
		// checkbox plus hidden fallback field submit the same name twice
		let sub = Submission::from_pairs([
			("REMOVE_SLOW".to_string(), "False".to_string()),
			("REMOVE_SLOW".to_string(), "on".to_string()),
		]);
		assert_eq!(sub.flatten().get("REMOVE_SLOW").map(String::as_str), Some("True"));
	}

	#[test]
	fn test_plain_scalar_passes_through() {
		let sub = Submission::from_pairs([("RADARR_URL".to_string(), "http://radarr:7878".to_string())]);
		assert_eq!(sub.flatten().get("RADARR_URL").map(String::as_str), Some("http://radarr:7878"));
	}

	#[test]
	fn test_decodes_urlencoded_body() {
		let pairs: Vec<(String, String)> =
			serde_urlencoded::from_str("LOG_LEVEL=INFO&TEST_RUN=on&RADARR_KEY=").unwrap();
		let flat = Submission::from_pairs(pairs).flatten();
		assert_eq!(flat.get("LOG_LEVEL").map(String::as_str), Some("INFO"));
		assert_eq!(flat.get("TEST_RUN").map(String::as_str), Some("True"));
		assert_eq!(flat.get("RADARR_KEY").map(String::as_str), Some(""));
	}
}

// vim: ts=4
