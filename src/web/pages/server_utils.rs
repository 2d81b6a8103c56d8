// © 2024-2025 ElementalAlchemist and the Dainsleif Mains Development Team
//
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

use crate::backend::{BackendClient, BackendError};
use crate::support::classifier::is_ticket_number;
use crate::support::model::{FaqRecord, TicketDetails};
use crate::web::state::AppState;
use leptos::prelude::*;
use std::sync::Arc;

/// Gets the backend client for a request.
/// Must be used from a server function; relies on the app state being in the context.
pub fn backend_from_context() -> Arc<BackendClient> {
	let state: AppState = expect_context();
	Arc::clone(&state.backend)
}

/// Logs a failed backend call and converts it into an error for the client.
/// The client only learns that the call failed, not why.
pub fn backend_failure(error: BackendError, operation: &str) -> ServerFnError {
	tracing::error!(source = ?error, operation, "Support backend request failed");
	ServerFnError::ServerError(format!("The support backend could not complete the {}", operation))
}

/// Looks up the answers for a ticket. Text that isn't a ticket number never reaches the backend.
pub async fn answers_for_ticket(
	backend: &BackendClient,
	ticket_number: &str,
) -> Result<Vec<FaqRecord>, ServerFnError> {
	if !is_ticket_number(ticket_number) {
		return Err(ServerFnError::ServerError(String::from("Not a ticket number")));
	}

	backend
		.ask_by_ticket(ticket_number)
		.await
		.map_err(|error| backend_failure(error, "ticket answer lookup"))
}

/// Gets the details of a ticket; text that isn't a ticket number is treated as an unknown ticket
pub async fn details_for_ticket(
	backend: &BackendClient,
	ticket_number: &str,
) -> Result<Option<TicketDetails>, ServerFnError> {
	if !is_ticket_number(ticket_number) {
		return Ok(None);
	}

	backend
		.ticket_details(ticket_number)
		.await
		.map_err(|error| backend_failure(error, "ticket details lookup"))
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::config::BackendConfig;
	use axum::Router;
	use axum::http::StatusCode;
	use axum::routing::{get, post};
	use std::sync::atomic::{AtomicUsize, Ordering};
	use tokio::net::TcpListener;

	/// Starts a backend that fails every request, counting how many it sees
	async fn failing_backend() -> (BackendClient, Arc<AtomicUsize>) {
		let hits = Arc::new(AtomicUsize::new(0));
		let lookup_hits = Arc::clone(&hits);
		let details_hits = Arc::clone(&hits);
		let router = Router::new()
			.route(
				"/ask_by_ticket",
				post(move || {
					let hits = Arc::clone(&lookup_hits);
					async move {
						hits.fetch_add(1, Ordering::SeqCst);
						StatusCode::INTERNAL_SERVER_ERROR
					}
				}),
			)
			.route(
				"/ticket/{ticket_number}",
				get(move || {
					let hits = Arc::clone(&details_hits);
					async move {
						hits.fetch_add(1, Ordering::SeqCst);
						StatusCode::INTERNAL_SERVER_ERROR
					}
				}),
			);

		let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
		let address = listener.local_addr().unwrap();
		tokio::spawn(async move { axum::serve(listener, router).await.unwrap() });

		let backend = BackendClient::new(&BackendConfig {
			base_url: format!("http://{}", address),
			request_timeout: None,
		})
		.unwrap();
		(backend, hits)
	}

	fn server_error_text(error: ServerFnError) -> String {
		match error {
			ServerFnError::ServerError(text) => text,
			other => panic!("expected a server error, got {:?}", other),
		}
	}

	#[tokio::test]
	async fn non_ticket_lookup_is_rejected_without_calling_backend() {
		let (backend, hits) = failing_backend().await;

		let result = answers_for_ticket(&backend, "hello").await;

		assert!(result.is_err());
		assert_eq!(hits.load(Ordering::SeqCst), 0);
	}

	#[tokio::test]
	async fn non_ticket_details_are_unknown_without_calling_backend() {
		let (backend, hits) = failing_backend().await;

		assert_eq!(details_for_ticket(&backend, "bogus").await.unwrap(), None);
		assert_eq!(hits.load(Ordering::SeqCst), 0);
	}

	#[tokio::test]
	async fn failed_lookup_hides_the_cause() {
		let (backend, hits) = failing_backend().await;

		let error = answers_for_ticket(&backend, "TKT00000001").await.unwrap_err();

		assert_eq!(hits.load(Ordering::SeqCst), 1);
		let text = server_error_text(error);
		assert_eq!(text, "The support backend could not complete the ticket answer lookup");
		assert!(!text.contains("500"));
		assert!(!text.contains("127.0.0.1"));
	}

	#[tokio::test]
	async fn failed_details_lookup_hides_the_cause() {
		let (backend, hits) = failing_backend().await;

		let error = details_for_ticket(&backend, "TKTABCD1234").await.unwrap_err();

		assert_eq!(hits.load(Ordering::SeqCst), 1);
		assert_eq!(
			server_error_text(error),
			"The support backend could not complete the ticket details lookup",
		);
	}
}
