// © 2024-2025 ElementalAlchemist and the Dainsleif Mains Development Team
//
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

use super::chat_bubble::ChatBubble;
use crate::support::chat::{ChatSession, SUGGESTION_PROMPT};
use crate::support::model::{FaqRecord, Message, Sender};
use crate::web::pages::utils::ServerFnApi;
use leptos::ev::KeyboardEvent;
use leptos::html::{Div, Input};
use leptos::prelude::*;
use leptos::task::spawn_local;
use std::time::Duration;

const SCROLL_DELAY: Duration = Duration::from_millis(100);

#[component]
pub fn ChatWindow(session: RwSignal<ChatSession>, set_is_open: WriteSignal<bool>) -> impl IntoView {
	let transcript_ref: NodeRef<Div> = NodeRef::new();
	let input_ref: NodeRef<Input> = NodeRef::new();

	Effect::new(move |_| {
		if let Some(input) = input_ref.get() {
			let _ = input.focus();
		}
	});

	// Typing only changes the input, so it doesn't move the transcript
	let transcript_shape = Memo::new(move |_| {
		session.with(|session| {
			(
				session.messages().len(),
				session.suggestions().len(),
				session.is_loading(),
			)
		})
	});

	// Keep the newest message in view
	Effect::new(move |_| {
		transcript_shape.track();
		set_timeout(
			move || {
				if let Some(transcript) = transcript_ref.get_untracked() {
					transcript.set_scroll_top(transcript.scroll_height());
				}
			},
			SCROLL_DELAY,
		);
	});

	let send_message = move || {
		let request = session
			.try_update(|session| {
				let text = session.input().to_string();
				session.begin_submit(&text)
			})
			.flatten();
		let Some(request) = request else {
			return;
		};

		spawn_local(async move {
			let outcome = request.dispatch(&ServerFnApi).await;
			session.update(|session| {
				session.finish(&request, outcome);
			});
		});
	};

	let messages = move || -> Vec<(usize, Message)> {
		session.with(|session| session.messages().iter().cloned().enumerate().collect())
	};
	// The generation is part of the key so a new suggestion list never reuses rows from the previous one.
	let suggestions = move || -> Vec<((u64, usize), FaqRecord)> {
		session.with(|session| {
			let generation = session.generation();
			session
				.suggestions()
				.iter()
				.cloned()
				.enumerate()
				.map(|(index, suggestion)| ((generation, index), suggestion))
				.collect()
		})
	};
	let input_disabled = move || session.with(|session| session.has_suggestions());

	view! {
		<div id="chat_window">
			<div id="chat_window_header">
				<span>"FAQ Assistant"</span>
				<button
					type="button"
					id="chat_window_close"
					aria-label="Close chat"
					on:click=move |_| set_is_open.set(false)
				>
					"×"
				</button>
			</div>
			<div id="chat_transcript" node_ref=transcript_ref>
				<For
					each=messages
					key=|(index, _)| *index
					children=|(_, message)| view! { <ChatBubble sender=message.sender text=message.text /> }
				/>
				<Show when=move || session.with(|session| session.has_suggestions())>
					<div class="chat_suggestions">
						<ChatBubble sender=Sender::Bot text=SUGGESTION_PROMPT />
						<For
							each=suggestions
							key=|(key, _)| *key
							children=move |(_, suggestion)| {
								let question = suggestion.question.clone();
								view! {
									<button
										type="button"
										class="chat_suggestion"
										on:click=move |_| session.update(|session| session.select_suggestion(suggestion.clone()))
									>
										{question}
									</button>
								}
							}
						/>
					</div>
				</Show>
				<Show when=move || session.with(|session| session.is_loading())>
					<ChatBubble sender=Sender::Bot text="Typing..." />
				</Show>
			</div>
			<div id="chat_input">
				<input
					type="text"
					node_ref=input_ref
					placeholder="Ask your question..."
					prop:value=move || session.with(|session| session.input().to_string())
					on:input=move |event| {
						let value = event_target_value(&event);
						session.update(|session| session.set_input(value));
					}
					on:keydown=move |event: KeyboardEvent| {
						if event.key() == "Enter" {
							send_message();
						}
					}
					disabled=input_disabled
				/>
				<button type="button" on:click=move |_| send_message() disabled=input_disabled>
					"Send"
				</button>
			</div>
		</div>
	}
}
