// © 2024-2025 ElementalAlchemist and the Dainsleif Mains Development Team
//
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

use super::api::SupportApi;
use super::classifier::is_ticket_number;
use super::model::{FaqRecord, Message};
use leptos::logging::warn;

pub const GREETING: &str = "👋 Hey there! Need help with something? 🤖\n\nYou can ask me questions directly OR enter your Ticket Number (if you have one) to check the status.";
pub const SUGGESTION_PROMPT: &str = "Did you mean one of these?";
pub const NO_TICKET_ANSWER: &str = "Sorry, no relevant answer found for that ticket.";
pub const NO_FAQ_ANSWER: &str = "Sorry, I couldn't find anything relevant.";
pub const SERVER_ERROR: &str = "Server error. Try again later.";

/// Answer text the FAQ backend uses for its placeholder "nothing matched" record
const FALLBACK_ANSWER_MARKER: &str = "no relevant answer";

/// Which backend call a chat submission is routed to
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum QueryKind {
	TicketLookup,
	FaqSearch,
}

/// The result of a chat query once the backend has responded (or failed to)
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum QueryOutcome {
	Found(Vec<FaqRecord>),
	NotFound,
	Failed,
}

impl QueryOutcome {
	fn from_records(kind: QueryKind, records: Vec<FaqRecord>) -> Self {
		if records.is_empty() {
			return Self::NotFound;
		}
		if kind == QueryKind::FaqSearch && is_fallback_only(&records) {
			return Self::NotFound;
		}
		Self::Found(records)
	}
}

fn is_fallback_only(records: &[FaqRecord]) -> bool {
	match records {
		[record] => record.answer.to_lowercase().contains(FALLBACK_ANSWER_MARKER),
		_ => false,
	}
}

/// A submitted chat message waiting on the backend
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct ChatRequest {
	generation: u64,
	kind: QueryKind,
	text: String,
}

impl ChatRequest {
	pub fn kind(&self) -> QueryKind {
		self.kind
	}

	pub fn text(&self) -> &str {
		&self.text
	}

	/// Sends the request to the backend. Exactly one call is made; failures are reported as
	/// [QueryOutcome::Failed] and never retried.
	pub async fn dispatch<A: SupportApi + ?Sized>(&self, api: &A) -> QueryOutcome {
		let response = match self.kind {
			QueryKind::TicketLookup => api.ask_by_ticket(self.text.clone()).await,
			QueryKind::FaqSearch => api.ask(self.text.clone()).await,
		};
		match response {
			Ok(records) => QueryOutcome::from_records(self.kind, records),
			Err(error) => {
				warn!("Chat query failed ({:?}): {}", self.kind, error);
				QueryOutcome::Failed
			}
		}
	}
}

/// State of the chat widget for the current page session
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct ChatSession {
	messages: Vec<Message>,
	suggestions: Vec<FaqRecord>,
	input: String,
	loading: bool,
	generation: u64,
}

impl Default for ChatSession {
	fn default() -> Self {
		Self::new()
	}
}

impl ChatSession {
	/// Starts a session with the bot's greeting in the transcript
	pub fn new() -> Self {
		Self {
			messages: vec![Message::bot(GREETING)],
			suggestions: Vec::new(),
			input: String::new(),
			loading: false,
			generation: 0,
		}
	}

	pub fn messages(&self) -> &[Message] {
		&self.messages
	}

	pub fn suggestions(&self) -> &[FaqRecord] {
		&self.suggestions
	}

	pub fn has_suggestions(&self) -> bool {
		!self.suggestions.is_empty()
	}

	pub fn input(&self) -> &str {
		&self.input
	}

	pub fn set_input(&mut self, input: String) {
		self.input = input;
	}

	pub fn is_loading(&self) -> bool {
		self.loading
	}

	/// Identifies the most recent submission. Changes whenever a new suggestion list can appear.
	pub fn generation(&self) -> u64 {
		self.generation
	}

	/// Records the user's message and classifies it. Returns the request to dispatch, or `None` if
	/// the input was blank or a suggestion still has to be picked; in that case nothing changes.
	///
	/// Starting a request supersedes any request still in flight.
	pub fn begin_submit(&mut self, text: &str) -> Option<ChatRequest> {
		let text = text.trim();
		if text.is_empty() || self.has_suggestions() {
			return None;
		}

		self.messages.push(Message::user(text));
		self.input.clear();
		self.suggestions.clear();
		self.loading = true;
		self.generation += 1;

		let kind = if is_ticket_number(text) {
			QueryKind::TicketLookup
		} else {
			QueryKind::FaqSearch
		};

		Some(ChatRequest {
			generation: self.generation,
			kind,
			text: text.to_string(),
		})
	}

	/// Applies the outcome of a dispatched request. Returns `false` (and leaves the session alone) if
	/// the request has been superseded by a later submission.
	pub fn finish(&mut self, request: &ChatRequest, outcome: QueryOutcome) -> bool {
		if request.generation != self.generation {
			return false;
		}
		self.loading = false;

		match (request.kind, outcome) {
			(QueryKind::TicketLookup, QueryOutcome::Found(records)) => {
				let answers: Vec<String> = records.into_iter().map(|record| record.answer).collect();
				self.messages.push(Message::bot(answers.join("\n\n")));
			}
			(QueryKind::TicketLookup, QueryOutcome::NotFound) => self.messages.push(Message::bot(NO_TICKET_ANSWER)),
			(QueryKind::FaqSearch, QueryOutcome::Found(records)) => self.suggestions = records,
			(QueryKind::FaqSearch, QueryOutcome::NotFound) => self.messages.push(Message::bot(NO_FAQ_ANSWER)),
			(_, QueryOutcome::Failed) => self.messages.push(Message::bot(SERVER_ERROR)),
		}

		true
	}

	/// Answers the user with the suggestion they picked
	pub fn select_suggestion(&mut self, suggestion: FaqRecord) {
		self.suggestions.clear();
		self.messages.push(Message::user(suggestion.question));
		self.messages.push(Message::bot(suggestion.answer));
	}
}
