// © 2024-2025 ElementalAlchemist and the Dainsleif Mains Development Team
//
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

use super::chat_window::ChatWindow;
use crate::support::chat::ChatSession;
use leptos::prelude::*;

/// Floating launcher for the chat panel. Owns the chat state so it survives closing the panel.
#[component]
pub fn ChatBot() -> impl IntoView {
	let (is_open, set_is_open) = signal(false);
	let session = RwSignal::new(ChatSession::new());

	view! {
		<div id="chat_launcher">
			<button
				id="chat_launcher_button"
				type="button"
				aria-label="Toggle chat"
				on:click=move |_| set_is_open.update(|open| *open = !*open)
			>
				"💬"
			</button>
			<Show when=move || !is_open.get()>
				<div id="chat_launcher_tooltip">"Need help? Click me!"</div>
			</Show>
		</div>
		<Show when=move || is_open.get()>
			<ChatWindow session set_is_open />
		</Show>
	}
}
