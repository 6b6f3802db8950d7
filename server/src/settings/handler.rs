//! Dashboard rendering and the save endpoint

use axum::{
	Form,
	extract::{Query, State},
	response::{Html, Redirect},
};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

use crate::prelude::*;
use crate::settings::form::Submission;
use crate::settings::reconcile::{self, EffectiveConfiguration};
use crate::settings::types::ValueType;

/// One-shot banner carried via query parameters after a redirect
#[derive(Deserialize)]
pub struct BannerParams {
	pub message: Option<String>,
	#[serde(rename = "type", default = "default_banner_type")]
	pub typ: String,
}

fn default_banner_type() -> String {
	"success".to_string()
}

#[derive(Serialize)]
struct Banner {
	text: String,
	#[serde(rename = "type")]
	typ: String,
}

#[derive(Serialize)]
struct OptionView {
	name: &'static str,
	selected: bool,
}

#[derive(Serialize)]
struct SettingView {
	key: &'static str,
	label: String,
	description: &'static str,
	value: String,
	placeholder: String,
	is_bool: bool,
	checked: bool,
	is_select: bool,
	options: Vec<OptionView>,
	is_number: bool,
	min: i64,
	max: i64,
	is_secret: bool,
}

#[derive(Serialize)]
struct CategoryView {
	title: &'static str,
	settings: Vec<SettingView>,
}

#[derive(Serialize)]
struct DashboardContext {
	message: Option<Banner>,
	categories: Vec<CategoryView>,
}

/// "REMOVE_FAILED" -> "Remove Failed"
fn label(key: &str) -> String {
	key.split('_')
		.map(|word| {
			let mut chars = word.chars();
			match chars.next() {
				Some(first) => first.to_uppercase().collect::<String>() + &chars.as_str().to_lowercase(),
				None => String::new(),
			}
		})
		.collect::<Vec<_>>()
		.join(" ")
}

fn dashboard_context(config: &EffectiveConfiguration, banner: BannerParams) -> DashboardContext {
	let categories = config
		.groups
		.iter()
		.map(|(category, settings)| CategoryView {
			title: category.title(),
			settings: settings
				.iter()
				.map(|setting| {
					let (is_bool, is_select, is_number, is_secret, options, min, max) =
						match setting.def.typ {
							ValueType::Bool => (true, false, false, false, &[][..], 0, 0),
							ValueType::Select { options } => {
								(false, true, false, false, options, 0, 0)
							}
							ValueType::Number { min, max } => {
								(false, false, true, false, &[][..], min, max)
							}
							ValueType::Text => (false, false, false, false, &[][..], 0, 0),
							ValueType::Secret => (false, false, false, true, &[][..], 0, 0),
						};
					SettingView {
						key: setting.def.key,
						label: label(setting.def.key),
						description: setting.def.description,
						value: setting.value.clone(),
						placeholder: format!("Enter {}", label(setting.def.key).to_lowercase()),
						is_bool,
						checked: setting.value == "True",
						is_select,
						options: options
							.iter()
							.map(|name| OptionView { name, selected: *name == setting.value })
							.collect(),
						is_number,
						min,
						max,
						is_secret,
					}
				})
				.collect(),
		})
		.collect();

	DashboardContext {
		message: banner.message.map(|text| Banner { text, typ: banner.typ }),
		categories,
	}
}

/// GET /
pub async fn get_dashboard(
	State(app): State<App>,
	Query(banner): Query<BannerParams>,
) -> MgrResult<Html<String>> {
	// The read path degrades to schema defaults when the document is missing
	let existing = match app.compose.read_environment().await {
		Ok(pairs) => pairs,
		Err(err) => {
			warn!("Failed to load compose environment, using defaults: {}", err);
			HashMap::new()
		}
	};
	let config = reconcile::merge_current(&existing);
	let context = dashboard_context(&config, banner);

	let html = app
		.templates
		.render("dashboard", &context)
		.map_err(|err| Error::Internal(format!("failed to render dashboard: {}", err)))?;
	Ok(Html(html))
}

/// POST /save-settings
pub async fn post_save_settings(
	State(app): State<App>,
	Form(pairs): Form<Vec<(String, String)>>,
) -> Redirect {
	let submission = Submission::from_pairs(pairs);
	let env = reconcile::merge_submission(&submission);

	match app.compose.write_environment(&env).await {
		Ok(()) => banner_redirect(
			"Settings saved successfully! Use the Actions tab to restart and apply changes.",
			"success",
		),
		Err(err) => {
			error!("Failed to save settings: {}", err);
			banner_redirect(&format!("Error saving settings: {}", err), "error")
		}
	}
}

fn banner_redirect(message: &str, typ: &str) -> Redirect {
	let query = url::form_urlencoded::Serializer::new(String::new())
		.append_pair("message", message)
		.append_pair("type", typ)
		.finish();
	Redirect::to(&format!("/?{}", query))
}


// vim: ts=4
