// © 2024 ElementalAlchemist and the Dainsleif Mains Development Team
//
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

use kdl::{KdlDocument, KdlNode};
use miette::{IntoDiagnostic, NamedSource, Report, Result, miette};
use std::time::Duration;
use tokio::fs::read_to_string;

pub async fn parse_config(config_path: &str) -> Result<ConfigData> {
	let config_file_contents = read_to_string(config_path).await.into_diagnostic()?;
	parse_config_str(config_path, &config_file_contents)
}

pub fn parse_config_str(config_path: &str, contents: &str) -> Result<ConfigData> {
	let document: KdlDocument = contents
		.parse()
		.map_err(|error| Report::new(error).with_source_code(NamedSource::new(config_path, contents.to_string())))?;

	let web = match document.get("web").and_then(KdlNode::children) {
		Some(web) => WebConfig {
			bind_addr: optional_string(web, "bind_addr")?,
		},
		None => WebConfig::default(),
	};

	let Some(backend) = document.get("backend").and_then(KdlNode::children) else {
		return Err(miette!("Config is missing the `backend` block"));
	};
	let Some(base_url) = optional_string(backend, "base_url")? else {
		return Err(miette!("Config is missing `backend.base_url`"));
	};
	let request_timeout = match backend.get_arg("request_timeout_seconds") {
		Some(value) => {
			let seconds = value
				.as_integer()
				.ok_or_else(|| miette!("`backend.request_timeout_seconds` must be an integer"))?;
			let seconds: u64 = seconds
				.try_into()
				.map_err(|_| miette!("`backend.request_timeout_seconds` must not be negative"))?;
			Some(Duration::from_secs(seconds))
		}
		None => None,
	};

	Ok(ConfigData {
		web,
		backend: BackendConfig {
			base_url,
			request_timeout,
		},
	})
}

fn optional_string(document: &KdlDocument, name: &str) -> Result<Option<String>> {
	match document.get_arg(name) {
		Some(value) => match value.as_string() {
			Some(value) => Ok(Some(value.to_string())),
			None => Err(miette!("`{}` must be a string", name)),
		},
		None => Ok(None),
	}
}

#[derive(Clone, Debug)]
pub struct ConfigData {
	pub web: WebConfig,
	pub backend: BackendConfig,
}

#[derive(Clone, Debug, Default)]
pub struct WebConfig {
	/// Overrides the address from the Leptos configuration
	pub bind_addr: Option<String>,
}

#[derive(Clone, Debug)]
pub struct BackendConfig {
	/// The only place the support backend's address is configured; every endpoint is relative to it
	pub base_url: String,
	pub request_timeout: Option<Duration>,
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn parses_full_config() {
		let config = parse_config_str(
			"config.kdl",
			r#"
			web {
				bind_addr "0.0.0.0:8080"
			}
			backend {
				base_url "http://support.internal:5000/api"
				request_timeout_seconds 15
			}
			"#,
		)
		.unwrap();

		assert_eq!(config.web.bind_addr.as_deref(), Some("0.0.0.0:8080"));
		assert_eq!(config.backend.base_url, "http://support.internal:5000/api");
		assert_eq!(config.backend.request_timeout, Some(Duration::from_secs(15)));
	}

	#[test]
	fn optional_settings_may_be_omitted() {
		let config = parse_config_str("config.kdl", r#"backend { base_url "http://localhost:5000"; }"#).unwrap();

		assert_eq!(config.web.bind_addr, None);
		assert_eq!(config.backend.request_timeout, None);
	}

	#[test]
	fn backend_url_is_required() {
		assert!(parse_config_str("config.kdl", "web { bind_addr \"127.0.0.1:3000\"; }").is_err());
		assert!(parse_config_str("config.kdl", "backend { request_timeout_seconds 5; }").is_err());
	}

	#[test]
	fn rejects_wrongly_typed_values() {
		assert!(parse_config_str("config.kdl", "backend { base_url 5000; }").is_err());
		assert!(
			parse_config_str(
				"config.kdl",
				r#"backend { base_url "http://localhost:5000"; request_timeout_seconds "soon"; }"#
			)
			.is_err()
		);
	}

	#[test]
	fn reports_syntax_errors() {
		assert!(parse_config_str("config.kdl", "backend { base_url \"http://localhost").is_err());
	}
}
