// © 2024-2025 ElementalAlchemist and the Dainsleif Mains Development Team
//
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

use super::api::SupportApi;
use super::model::CreatedTicket;
use leptos::logging::warn;

pub const EMPTY_DESCRIPTION_ERROR: &str = "Please enter your issue.";
pub const CREATE_FAILED_ERROR: &str = "Could not create ticket.";

#[derive(Clone, Debug, Eq, PartialEq)]
pub enum TicketOutcome {
	Created(CreatedTicket),
	Failed,
}

/// An issue description on its way to the backend
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct TicketSubmission {
	user_query: String,
}

impl TicketSubmission {
	pub fn user_query(&self) -> &str {
		&self.user_query
	}

	pub async fn dispatch<A: SupportApi + ?Sized>(&self, api: &A) -> TicketOutcome {
		match api.create_ticket(self.user_query.clone()).await {
			Ok(ticket) => TicketOutcome::Created(ticket),
			Err(error) => {
				warn!("Ticket creation failed: {}", error);
				TicketOutcome::Failed
			}
		}
	}
}

/// State of the "raise a ticket" form
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct TicketForm {
	description: String,
	ticket: Option<CreatedTicket>,
	error: Option<String>,
	submitting: bool,
}

impl TicketForm {
	pub fn description(&self) -> &str {
		&self.description
	}

	pub fn set_description(&mut self, description: String) {
		self.description = description;
	}

	/// The ticket created by the last successful submission. Once set, the form no longer accepts edits.
	pub fn ticket(&self) -> Option<&CreatedTicket> {
		self.ticket.as_ref()
	}

	pub fn error(&self) -> Option<&str> {
		self.error.as_deref()
	}

	pub fn is_submitting(&self) -> bool {
		self.submitting
	}

	/// Validates the description and, if it's usable, marks the form as submitting.
	///
	/// Returns `None` without touching the network when the description is blank (setting a
	/// validation error), when a submission is already in flight, or when a ticket was already created.
	pub fn begin_submit(&mut self) -> Option<TicketSubmission> {
		if self.ticket.is_some() || self.submitting {
			return None;
		}
		if self.description.trim().is_empty() {
			self.error = Some(String::from(EMPTY_DESCRIPTION_ERROR));
			return None;
		}

		self.submitting = true;
		Some(TicketSubmission {
			user_query: self.description.clone(),
		})
	}

	pub fn finish(&mut self, outcome: TicketOutcome) {
		self.submitting = false;
		match outcome {
			TicketOutcome::Created(ticket) => {
				self.ticket = Some(ticket);
				self.error = None;
			}
			TicketOutcome::Failed => self.error = Some(String::from(CREATE_FAILED_ERROR)),
		}
	}

	/// Returns the form to its empty, editable state
	pub fn reset(&mut self) {
		*self = Self::default();
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::support::fake_api::FakeSupportApi;

	fn created(ticket_number: &str) -> CreatedTicket {
		CreatedTicket {
			ticket_number: String::from(ticket_number),
			message: Some(String::from("Ticket created successfully!")),
		}
	}

	#[test]
	fn blank_description_sets_error_without_submitting() {
		let mut form = TicketForm::default();
		form.set_description(String::from(" \n "));

		assert!(form.begin_submit().is_none());
		assert_eq!(form.error(), Some(EMPTY_DESCRIPTION_ERROR));
		assert!(form.ticket().is_none());
		assert!(!form.is_submitting());
	}

	#[tokio::test]
	async fn successful_submission_shows_ticket_and_clears_error() {
		let api = FakeSupportApi {
			created_ticket: Some(created("TKT00000001")),
			..Default::default()
		};
		let mut form = TicketForm::default();
		assert!(form.begin_submit().is_none());

		form.set_description(String::from("  My printer is on fire  "));
		let submission = form.begin_submit().unwrap();
		assert_eq!(submission.user_query(), "  My printer is on fire  ");
		form.finish(submission.dispatch(&api).await);

		assert_eq!(api.call_log(), vec![String::from("create_ticket:  My printer is on fire  ")]);
		assert_eq!(form.ticket().map(|ticket| ticket.ticket_number.as_str()), Some("TKT00000001"));
		assert_eq!(form.error(), None);
		assert!(!form.is_submitting());
	}

	#[tokio::test]
	async fn failed_submission_keeps_form_editable() {
		let api = FakeSupportApi::default();
		let mut form = TicketForm::default();
		form.set_description(String::from("Cannot log in"));

		let submission = form.begin_submit().unwrap();
		form.finish(submission.dispatch(&api).await);

		assert_eq!(form.error(), Some(CREATE_FAILED_ERROR));
		assert!(form.ticket().is_none());
		assert_eq!(form.description(), "Cannot log in");
		assert!(form.begin_submit().is_some());
	}

	#[test]
	fn no_double_submission_while_in_flight() {
		let mut form = TicketForm::default();
		form.set_description(String::from("Cannot log in"));

		assert!(form.begin_submit().is_some());
		assert!(form.begin_submit().is_none());
		assert!(form.is_submitting());
	}

	#[test]
	fn created_ticket_locks_the_form_until_reset() {
		let mut form = TicketForm::default();
		form.set_description(String::from("Cannot log in"));
		form.begin_submit().unwrap();
		form.finish(TicketOutcome::Created(created("TKTABCDEFGH")));

		assert!(form.begin_submit().is_none());

		form.reset();
		assert_eq!(form, TicketForm::default());
	}
}
