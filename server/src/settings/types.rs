//! Setting categories, value types and definitions

/// Fixed set of form sections, in display order
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Category {
	General,
	CleanupFeatures,
	Behavior,
	ArrServices,
	DownloadClient,
}

impl Category {
	pub fn title(self) -> &'static str {
		match self {
			Category::General => "General Settings",
			Category::CleanupFeatures => "Cleanup Features",
			Category::Behavior => "Behavior Settings",
			Category::ArrServices => "*arr Services",
			Category::DownloadClient => "Download Client",
		}
	}
}

/// Declared type of a setting value.
///
/// Canonical boolean forms are exactly `"True"`/`"False"`. Number bounds and
/// select options only drive the form controls; the reconciler accepts
/// out-of-range and unlisted values as submitted (intentionally permissive,
/// matching how the managed tool itself treats its environment).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValueType {
	Bool,
	Number { min: i64, max: i64 },
	Select { options: &'static [&'static str] },
	Text,
	Secret,
}

/// Immutable description of one recognized setting key
#[derive(Debug, PartialEq, Eq)]
pub struct SettingDefinition {
	pub key: &'static str,
	pub typ: ValueType,
	pub default: &'static str,
	pub description: &'static str,
}

impl SettingDefinition {
	pub fn is_bool(&self) -> bool {
		matches!(self.typ, ValueType::Bool)
	}
}

// vim: ts=4
