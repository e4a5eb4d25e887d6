//! Input row: file picker, message box, mic toggle, and send button.

#[cfg(test)]
#[path = "composer_test.rs"]
mod composer_test;

use leptos::prelude::*;
use protocol::{ACCEPTED_EXTENSIONS, accept_attribute};

use crate::pages::chat::send_message;
use crate::state::chat::ChatState;
use crate::util::speech;

/// Footer hint, e.g. `"Supports: TXT, MD, ... • Voice input/output enabled"`.
fn supported_formats_hint() -> String {
    let formats = ACCEPTED_EXTENSIONS.map(str::to_ascii_uppercase).join(", ");
    format!("Supports: {formats} • Voice input/output enabled")
}

#[component]
pub fn Composer() -> impl IntoView {
    let chat = expect_context::<RwSignal<ChatState>>();
    let file_input = NodeRef::<leptos::html::Input>::new();

    let on_keydown = move |ev: leptos::ev::KeyboardEvent| {
        if ev.key() == "Enter" && !ev.shift_key() {
            ev.prevent_default();
            send_message(chat);
        }
    };

    let on_pick = move |_| {
        if let Some(input) = file_input.get() {
            input.click();
        }
    };

    let on_file_change = move |ev: leptos::ev::Event| {
        #[cfg(feature = "csr")]
        {
            let input: web_sys::HtmlInputElement = event_target(&ev);
            let file = input.files().and_then(|files| files.get(0));
            input.set_value("");
            if let Some(file) = file {
                crate::pages::chat::upload_file(chat, file);
            }
        }
        #[cfg(not(feature = "csr"))]
        {
            let _ = ev;
        }
    };

    let on_mic = move |_| {
        let commands = chat.try_update(ChatState::toggle_recording).unwrap_or_default();
        speech::run(commands);
    };

    let loading = move || chat.with(|s| s.loading);
    let recording = move || chat.with(|s| s.voice.recording);

    view! {
        <div class="chat-composer">
            <div class="chat-composer__row">
                <input
                    class="chat-composer__file"
                    type="file"
                    accept=accept_attribute()
                    node_ref=file_input
                    on:change=on_file_change
                />
                <button
                    class="chat-composer__btn"
                    title="Upload from computer"
                    disabled=loading
                    on:click=on_pick
                >
                    "📁"
                </button>
                <textarea
                    class="chat-composer__input"
                    rows="1"
                    placeholder="Type your message or upload a file..."
                    prop:value=move || chat.with(|s| s.input.clone())
                    on:input=move |ev| {
                        let value = event_target_value(&ev);
                        chat.update(|s| s.input = value);
                    }
                    on:keydown=on_keydown
                    disabled=loading
                ></textarea>
                <button
                    class="chat-composer__btn"
                    class:chat-composer__btn--recording=recording
                    title=move || if recording() { "Stop recording" } else { "Start voice input" }
                    disabled=loading
                    on:click=on_mic
                >
                    {move || if recording() { "⏹" } else { "🎤" }}
                </button>
                <button
                    class="chat-composer__btn chat-composer__btn--send"
                    disabled=move || !chat.with(ChatState::can_send)
                    on:click=move |_| send_message(chat)
                >
                    {move || if loading() { "…" } else { "➤" }}
                </button>
            </div>
            <p class="chat-composer__hint">{supported_formats_hint()}</p>
        </div>
    }
}
