// © 2024-2025 ElementalAlchemist and the Dainsleif Mains Development Team
//
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

use super::model::{CreatedTicket, FaqRecord};
use async_trait::async_trait;
use leptos::prelude::ServerFnError;

/// The backend operations the support widgets depend on.
///
/// In the browser this is backed by server functions; the futures aren't `Send` there.
#[async_trait(?Send)]
pub trait SupportApi {
	/// Searches the FAQ for entries matching a free-text question
	async fn ask(&self, query: String) -> Result<Vec<FaqRecord>, ServerFnError>;

	/// Gets the answers associated with an existing ticket
	async fn ask_by_ticket(&self, ticket_number: String) -> Result<Vec<FaqRecord>, ServerFnError>;

	/// Files a new ticket for the given issue description
	async fn create_ticket(&self, user_query: String) -> Result<CreatedTicket, ServerFnError>;
}
