// © 2024-2025 ElementalAlchemist and the Dainsleif Mains Development Team
//
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

use crate::config::BackendConfig;
use crate::support::model::{CreatedTicket, FaqRecord, TicketDetails};
use reqwest::{Client, StatusCode, Url};
use serde_json::json;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum BackendError {
	#[error("invalid backend base URL `{0}`")]
	InvalidBaseUrl(String),
	#[error("backend request failed")]
	Request(#[from] reqwest::Error),
}

/// HTTP client for the FAQ and ticket backend
#[derive(Clone, Debug)]
pub struct BackendClient {
	http_client: Client,
	base_url: Url,
}

impl BackendClient {
	pub fn new(config: &BackendConfig) -> Result<Self, BackendError> {
		let base_url =
			Url::parse(&config.base_url).map_err(|_| BackendError::InvalidBaseUrl(config.base_url.clone()))?;
		if base_url.cannot_be_a_base() || !matches!(base_url.scheme(), "http" | "https") {
			return Err(BackendError::InvalidBaseUrl(config.base_url.clone()));
		}

		let mut http_client = Client::builder();
		if let Some(timeout) = config.request_timeout {
			http_client = http_client.timeout(timeout);
		}
		let http_client = http_client.build()?;

		Ok(Self { http_client, base_url })
	}

	/// Builds the URL for an endpoint by appending path segments to the base URL's path
	fn endpoint(&self, segments: &[&str]) -> Url {
		let mut url = self.base_url.clone();
		// Checked in the constructor
		if let Ok(mut path) = url.path_segments_mut() {
			path.pop_if_empty().extend(segments);
		}
		url
	}

	/// Searches the FAQ for a free-text question
	pub async fn ask(&self, query: &str) -> Result<Vec<FaqRecord>, BackendError> {
		let records = self
			.http_client
			.post(self.endpoint(&["ask"]))
			.json(&json!({ "query": query }))
			.send()
			.await?
			.error_for_status()?
			.json()
			.await?;
		Ok(records)
	}

	/// Gets the FAQ answers for the query stored with a ticket
	pub async fn ask_by_ticket(&self, ticket_number: &str) -> Result<Vec<FaqRecord>, BackendError> {
		let records = self
			.http_client
			.post(self.endpoint(&["ask_by_ticket"]))
			.json(&json!({ "ticket_number": ticket_number }))
			.send()
			.await?
			.error_for_status()?
			.json()
			.await?;
		Ok(records)
	}

	pub async fn create_ticket(&self, user_query: &str) -> Result<CreatedTicket, BackendError> {
		let ticket = self
			.http_client
			.post(self.endpoint(&["ticket"]))
			.json(&json!({ "user_query": user_query }))
			.send()
			.await?
			.error_for_status()?
			.json()
			.await?;
		Ok(ticket)
	}

	/// Gets a stored ticket. Returns `None` if the backend doesn't know the ticket number.
	pub async fn ticket_details(&self, ticket_number: &str) -> Result<Option<TicketDetails>, BackendError> {
		let response = self
			.http_client
			.get(self.endpoint(&["ticket", ticket_number]))
			.send()
			.await?;
		if response.status() == StatusCode::NOT_FOUND {
			return Ok(None);
		}
		let ticket = response.error_for_status()?.json().await?;
		Ok(Some(ticket))
	}
}
