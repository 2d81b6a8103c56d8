// © 2024-2025 ElementalAlchemist and the Dainsleif Mains Development Team
//
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

use super::chat::ChatBot;
use super::errors::not_found::NotFound;
use super::header::PageHeader;
use super::raise_ticket::RaiseTicketForm;
use super::ticket_status::TicketStatusPage;
use leptos::prelude::*;
use leptos_meta::{Stylesheet, Title, provide_meta_context};
use leptos_router::components::{Route, Router, Routes};
use leptos_router::path;

#[component]
pub fn App() -> impl IntoView {
	provide_meta_context();

	view! {
		<Stylesheet href="/pkg/helpdesk-widget.css" />
		<Title text="Support" />

		<Router>
			<PageHeader />
			<main>
				<Routes fallback=|| view! { <NotFound /> }>
					<Route path=path!("/") view=SupportHome />
					<Route path=path!("/ticket/:ticket_number") view=TicketStatusPage />
				</Routes>
			</main>
		</Router>
	}
}

#[component]
fn SupportHome() -> impl IntoView {
	view! {
		<RaiseTicketForm />
		<ChatBot />
	}
}
