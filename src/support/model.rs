// © 2024-2025 ElementalAlchemist and the Dainsleif Mains Development Team
//
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Clone, Copy, Debug, Deserialize, Eq, PartialEq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Sender {
	User,
	Bot,
}

/// A single entry in the chat transcript
#[derive(Clone, Debug, Deserialize, Eq, PartialEq, Serialize)]
pub struct Message {
	pub sender: Sender,
	pub text: String,
}

impl Message {
	pub fn user(text: impl Into<String>) -> Self {
		Self {
			sender: Sender::User,
			text: text.into(),
		}
	}

	pub fn bot(text: impl Into<String>) -> Self {
		Self {
			sender: Sender::Bot,
			text: text.into(),
		}
	}
}

/// A question/answer pair as returned by the FAQ backend.
///
/// The backend's fallback record only carries an answer, so both fields default to empty.
#[derive(Clone, Debug, Default, Deserialize, Eq, PartialEq, Serialize)]
pub struct FaqRecord {
	#[serde(rename = "Question", default)]
	pub question: String,
	#[serde(rename = "Answer", default)]
	pub answer: String,
}

#[derive(Clone, Debug, Deserialize, Eq, PartialEq, Serialize)]
pub struct CreatedTicket {
	pub ticket_number: String,
	#[serde(default)]
	pub message: Option<String>,
}

/// The stored state of a ticket
#[derive(Clone, Debug, Deserialize, Eq, PartialEq, Serialize)]
pub struct TicketDetails {
	pub ticket_number: String,
	pub user_query: String,
	#[serde(default)]
	pub response: Option<String>,
	#[serde(with = "backend_timestamp")]
	pub created_at: DateTime<Utc>,
}

/// The backend sends timestamps as naive UTC text.
mod backend_timestamp {
	use chrono::{DateTime, NaiveDateTime, Utc};
	use serde::{Deserialize, Deserializer, Serializer};

	const FORMAT: &str = "%Y-%m-%d %H:%M:%S";

	pub fn serialize<S: Serializer>(timestamp: &DateTime<Utc>, serializer: S) -> Result<S::Ok, S::Error> {
		serializer.serialize_str(&timestamp.format(FORMAT).to_string())
	}

	pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<DateTime<Utc>, D::Error> {
		let text = String::deserialize(deserializer)?;
		NaiveDateTime::parse_from_str(&text, FORMAT)
			.map(|timestamp| timestamp.and_utc())
			.map_err(serde::de::Error::custom)
	}
}
