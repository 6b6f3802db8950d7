use std::{env, path::PathBuf, sync::Arc};

use container_adapter_compose::ContainerAdapterCompose;
use decluttarr_manager::AppBuilder;

#[tokio::main]
async fn main() {
	let compose_file = PathBuf::from(
		env::var("COMPOSE_FILE")
			.unwrap_or_else(|_| "/docker/decluttarr/docker-compose.yml".to_string()),
	);
	let service = env::var("COMPOSE_SERVICE").unwrap_or_else(|_| "decluttarr".to_string());
	let listen = env::var("LISTEN").unwrap_or_else(|_| "0.0.0.0:8081".to_string());

	let adapter = Arc::new(ContainerAdapterCompose::new(compose_file.clone(), service.as_str()));

	let mut builder = AppBuilder::new();
	builder
		.listen(listen)
		.compose_file(compose_file)
		.service(service)
		.container_adapter(adapter);
	builder.run().await.expect("FATAL: Server failed");
}

// vim: ts=4
