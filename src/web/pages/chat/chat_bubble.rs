// © 2024-2025 ElementalAlchemist and the Dainsleif Mains Development Team
//
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

use crate::support::model::Sender;
use leptos::prelude::*;

#[component]
pub fn ChatBubble(sender: Sender, #[prop(into)] text: String) -> impl IntoView {
	let class = match sender {
		Sender::User => "chat_bubble chat_bubble_user",
		Sender::Bot => "chat_bubble chat_bubble_bot",
	};

	view! {
		<div class=class>
			{text}
		</div>
	}
}
