//! App state type

use handlebars::Handlebars;
use std::{path::PathBuf, sync::Arc};

use crate::compose::ComposeStore;
use crate::prelude::*;
use crate::routes;
use manager_types::container_adapter::ContainerAdapter;

pub const VERSION: &str = env!("CARGO_PKG_VERSION");

pub struct AppState {
	pub opts: AppBuilderOpts,
	pub compose: ComposeStore,
	pub container: Arc<dyn ContainerAdapter>,
	pub http: reqwest::Client,
	pub templates: Handlebars<'static>,
}

pub type App = Arc<AppState>;

#[derive(Debug)]
pub struct AppBuilderOpts {
	listen: Box<str>,
	compose_file: PathBuf,
	service: Box<str>,
}

pub struct AppBuilder {
	opts: AppBuilderOpts,
	container_adapter: Option<Arc<dyn ContainerAdapter>>,
}

impl AppBuilder {
	pub fn new() -> Self {
		AppBuilder {
			opts: AppBuilderOpts {
				listen: "0.0.0.0:8081".into(),
				compose_file: PathBuf::from("/docker/decluttarr/docker-compose.yml"),
				service: "decluttarr".into(),
			},
			container_adapter: None,
		}
	}

	// Opts
	pub fn listen(&mut self, listen: impl Into<Box<str>>) -> &mut Self { self.opts.listen = listen.into(); self }
	pub fn compose_file(&mut self, compose_file: impl Into<PathBuf>) -> &mut Self { self.opts.compose_file = compose_file.into(); self }
	pub fn service(&mut self, service: impl Into<Box<str>>) -> &mut Self { self.opts.service = service.into(); self }

	// Adapters
	pub fn container_adapter(&mut self, adapter: Arc<dyn ContainerAdapter>) -> &mut Self { self.container_adapter = Some(adapter); self }

	/// Builds the shared application state without starting the server
	pub fn build(self) -> MgrResult<App> {
		let container = self
			.container_adapter
			.ok_or_else(|| Error::Internal("no container adapter configured".into()))?;

		let mut templates = Handlebars::new();
		templates
			.register_template_string("dashboard", include_str!("../../templates/dashboard.hbs"))
			.map_err(|err| Error::Internal(format!("invalid dashboard template: {}", err)))?;

		let compose = ComposeStore::new(self.opts.compose_file.clone(), self.opts.service.clone());

		Ok(Arc::new(AppState {
			opts: self.opts,
			compose,
			container,
			http: reqwest::Client::new(),
			templates,
		}))
	}

	pub async fn run(self) -> MgrResult<()> {
		tracing_subscriber::fmt()
			.with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
			.with_target(false)
			.init();
		info!("decluttarr-manager V{}", VERSION);

		let app = self.build()?;
		let router = routes::init(app.clone());

		let listener = tokio::net::TcpListener::bind(app.opts.listen.as_ref()).await?;
		info!("Listening on http://{}", app.opts.listen);
		axum::serve(listener, router).await?;

		Ok(())
	}
}

impl Default for AppBuilder {
	fn default() -> Self { Self::new() }
}

// vim: ts=4
