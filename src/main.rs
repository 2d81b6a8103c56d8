// © 2024 ElementalAlchemist and the Dainsleif Mains Development Team
//
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

#[cfg(feature = "ssr")]
#[tokio::main]
async fn main() -> miette::Result<()> {
	use helpdesk_widget::backend::BackendClient;
	use helpdesk_widget::config::parse_config;
	use helpdesk_widget::web::server::run_server;
	use miette::IntoDiagnostic;
	use std::sync::Arc;
	use tracing_subscriber::EnvFilter;

	tracing_subscriber::fmt()
		.with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
		.init();

	let config_path = std::env::var("HELPDESK_CONFIG").unwrap_or_else(|_| String::from("config.kdl"));
	let config = Arc::new(parse_config(&config_path).await?);
	let backend = Arc::new(BackendClient::new(&config.backend).into_diagnostic()?);

	run_server(config, backend).await
}

#[cfg(not(feature = "ssr"))]
pub fn main() {
	// The binary is only built with the server feature; the client entry point is `hydrate` in the library.
}
