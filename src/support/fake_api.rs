// © 2024-2025 ElementalAlchemist and the Dainsleif Mains Development Team
//
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

use super::api::SupportApi;
use super::model::{CreatedTicket, FaqRecord};
use async_trait::async_trait;
use leptos::prelude::ServerFnError;
use std::cell::RefCell;

/// Canned backend responses for driving the controllers in tests. A `None` response fails the call.
#[derive(Default)]
pub struct FakeSupportApi {
	pub faq_response: Option<Vec<FaqRecord>>,
	pub ticket_response: Option<Vec<FaqRecord>>,
	pub created_ticket: Option<CreatedTicket>,
	pub calls: RefCell<Vec<String>>,
}

impl FakeSupportApi {
	pub fn call_log(&self) -> Vec<String> {
		self.calls.borrow().clone()
	}

	fn respond<T: Clone>(&self, call: String, response: &Option<T>) -> Result<T, ServerFnError> {
		self.calls.borrow_mut().push(call);
		response
			.clone()
			.ok_or_else(|| ServerFnError::ServerError(String::from("backend unavailable")))
	}
}

#[async_trait(?Send)]
impl SupportApi for FakeSupportApi {
	async fn ask(&self, query: String) -> Result<Vec<FaqRecord>, ServerFnError> {
		self.respond(format!("ask:{}", query), &self.faq_response)
	}

	async fn ask_by_ticket(&self, ticket_number: String) -> Result<Vec<FaqRecord>, ServerFnError> {
		self.respond(format!("ask_by_ticket:{}", ticket_number), &self.ticket_response)
	}

	async fn create_ticket(&self, user_query: String) -> Result<CreatedTicket, ServerFnError> {
		self.respond(format!("create_ticket:{}", user_query), &self.created_ticket)
	}
}

pub fn faq(question: &str, answer: &str) -> FaqRecord {
	FaqRecord {
		question: String::from(question),
		answer: String::from(answer),
	}
}
