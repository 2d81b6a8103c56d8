// © 2024-2025 ElementalAlchemist and the Dainsleif Mains Development Team
//
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

use crate::support::ticket_form::TicketForm;
use crate::web::pages::utils::{ServerFnApi, make_ticket_url};
use leptos::ev::SubmitEvent;
use leptos::prelude::*;
use leptos::task::spawn_local;

#[component]
pub fn RaiseTicketForm() -> impl IntoView {
	let form = RwSignal::new(TicketForm::default());
	let created_ticket = Memo::new(move |_| form.with(|form| form.ticket().cloned()));

	let form_submit = move |event: SubmitEvent| {
		event.prevent_default();

		let submission = form.try_update(|form| form.begin_submit()).flatten();
		let Some(submission) = submission else {
			return;
		};

		spawn_local(async move {
			let outcome = submission.dispatch(&ServerFnApi).await;
			form.update(|form| form.finish(outcome));
		});
	};

	view! {
		<div id="raise_ticket">
			{
				move || match created_ticket.get() {
					Some(ticket) => view! {
						<div class="raise_ticket_created">
							<p class="raise_ticket_created_title">"Ticket created!"</p>
							<p>"Your ticket number:"</p>
							<p class="raise_ticket_number">{ticket.ticket_number.clone()}</p>
							<a href={make_ticket_url(&ticket.ticket_number)}>"Check ticket status"</a>
							<button type="button" on:click=move |_| form.update(TicketForm::reset)>
								"Raise another ticket"
							</button>
						</div>
					}.into_any(),
					None => view! {
						<form on:submit=form_submit>
							<h2>"Raise a Ticket"</h2>
							<textarea
								class="raise_ticket_description"
								rows=4
								placeholder="Describe your issue..."
								prop:value=move || form.with(|form| form.description().to_string())
								on:input=move |event| {
									let value = event_target_value(&event);
									form.update(|form| form.set_description(value));
								}
							></textarea>
							{
								move || form.with(|form| form.error().map(String::from)).map(|error| view! {
									<p class="raise_ticket_error">{error}</p>
								})
							}
							<button type="submit" disabled=move || form.with(|form| form.is_submitting())>
								"Submit"
							</button>
						</form>
					}.into_any(),
				}
			}
		</div>
	}
}
