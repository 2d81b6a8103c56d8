// © 2024-2025 ElementalAlchemist and the Dainsleif Mains Development Team
//
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

use crate::support::api::SupportApi;
use crate::support::model::{CreatedTicket, FaqRecord, TicketDetails};
use async_trait::async_trait;
use leptos::prelude::*;
use leptos_router::params::Params;

#[derive(Clone, Debug, Params, PartialEq)]
pub struct TicketParams {
	pub ticket_number: Option<String>,
}

/// Makes a URL to the status page for a ticket
pub fn make_ticket_url(ticket_number: &str) -> String {
	format!("/ticket/{}", ticket_number)
}

/// Routes the support widgets' backend calls through this app's server functions
#[derive(Clone, Copy, Debug, Default)]
pub struct ServerFnApi;

#[async_trait(?Send)]
impl SupportApi for ServerFnApi {
	async fn ask(&self, query: String) -> Result<Vec<FaqRecord>, ServerFnError> {
		ask_faq(query).await
	}

	async fn ask_by_ticket(&self, ticket_number: String) -> Result<Vec<FaqRecord>, ServerFnError> {
		lookup_ticket_answers(ticket_number).await
	}

	async fn create_ticket(&self, user_query: String) -> Result<CreatedTicket, ServerFnError> {
		raise_ticket(user_query).await
	}
}

#[server]
pub async fn ask_faq(query: String) -> Result<Vec<FaqRecord>, ServerFnError> {
	use super::server_utils::{backend_failure, backend_from_context};

	let backend = backend_from_context();
	backend
		.ask(&query)
		.await
		.map_err(|error| backend_failure(error, "FAQ search"))
}

#[server]
pub async fn lookup_ticket_answers(ticket_number: String) -> Result<Vec<FaqRecord>, ServerFnError> {
	use super::server_utils::{answers_for_ticket, backend_from_context};

	let backend = backend_from_context();
	answers_for_ticket(&backend, &ticket_number).await
}

#[server]
pub async fn raise_ticket(user_query: String) -> Result<CreatedTicket, ServerFnError> {
	use super::server_utils::{backend_failure, backend_from_context};

	let backend = backend_from_context();
	let ticket = backend
		.create_ticket(&user_query)
		.await
		.map_err(|error| backend_failure(error, "ticket creation"))?;
	tracing::info!(ticket_number = %ticket.ticket_number, "Created support ticket");
	Ok(ticket)
}

#[server]
pub async fn get_ticket_details(ticket_number: String) -> Result<Option<TicketDetails>, ServerFnError> {
	use super::server_utils::{backend_from_context, details_for_ticket};

	let backend = backend_from_context();
	details_for_ticket(&backend, &ticket_number).await
}
