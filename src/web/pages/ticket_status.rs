// © 2024-2025 ElementalAlchemist and the Dainsleif Mains Development Team
//
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

use super::errors::error::ServiceError;
use super::errors::not_found::NotFound;
use crate::support::classifier::is_ticket_number;
use crate::web::pages::utils::{TicketParams, get_ticket_details};
use leptos::prelude::*;
use leptos_router::hooks::use_params;

#[component]
pub fn TicketStatusPage() -> impl IntoView {
	let params = use_params::<TicketParams>();
	let ticket_number = Memo::new(move |_| {
		params
			.read()
			.as_ref()
			.ok()
			.and_then(|params| params.ticket_number.clone())
			.filter(|ticket_number| is_ticket_number(ticket_number))
	});

	let ticket = Resource::new(
		move || ticket_number.get(),
		|ticket_number| async move {
			match ticket_number {
				Some(ticket_number) => get_ticket_details(ticket_number).await,
				None => Ok(None),
			}
		},
	);

	view! {
		<Transition fallback=|| view! { <div id="ticket_status_loading">"Loading ticket..."</div> }>
			{
				move || match ticket.read().as_ref() {
					Some(Ok(Some(details))) => {
						let response = details.response.clone();
						view! {
							<div id="ticket_status">
								<h2 id="ticket_status_number">{details.ticket_number.clone()}</h2>
								<div id="ticket_status_created">
									"Opened "
									{details.created_at.format("%Y-%m-%d %H:%M UTC").to_string()}
								</div>
								<h3>"Your issue"</h3>
								<div id="ticket_status_query">{details.user_query.clone()}</div>
								<h3>"Response"</h3>
								{
									match response {
										Some(response) => view! {
											<div id="ticket_status_response">{response}</div>
										}.into_any(),
										None => view! {
											<div id="ticket_status_pending">"Our team hasn't responded yet."</div>
										}.into_any(),
									}
								}
							</div>
						}.into_any()
					}
					Some(Ok(None)) => view! { <NotFound /> }.into_any(),
					Some(Err(_)) => view! { <ServiceError /> }.into_any(),
					None => ().into_any(),
				}
			}
		</Transition>
	}
}
