//! Inline status strips above the composer: error, attached file, speaking.

use leptos::prelude::*;

use crate::state::chat::ChatState;
use crate::util::speech;

#[component]
pub fn ErrorBanner() -> impl IntoView {
    let chat = expect_context::<RwSignal<ChatState>>();

    view! {
        {move || chat.with(|s| s.error.clone()).map(|error| view! {
            <div class="chat-banner chat-banner--error" role="alert">
                <span>{error}</span>
                <button class="chat-banner__close" title="Dismiss" on:click=move |_| chat.update(ChatState::dismiss_error)>
                    "✕"
                </button>
            </div>
        })}
    }
}

#[component]
pub fn FileBanner() -> impl IntoView {
    let chat = expect_context::<RwSignal<ChatState>>();

    view! {
        {move || chat.with(|s| s.uploaded_file.clone()).map(|file| {
            let size = file.size_label();
            view! {
                <div class="chat-banner chat-banner--file">
                    <span class="chat-banner__name">"📄 " {file.name}</span>
                    <span class="chat-banner__meta">{size}</span>
                    <button class="chat-banner__close" title="Remove file" on:click=move |_| chat.update(ChatState::remove_file)>
                        "✕"
                    </button>
                </div>
            }
        })}
    }
}

#[component]
pub fn SpeakingBanner() -> impl IntoView {
    let chat = expect_context::<RwSignal<ChatState>>();
    let stop = move |_| {
        let commands = chat.try_update(|s| s.voice.stop_speaking()).unwrap_or_default();
        speech::run(commands);
    };

    view! {
        <Show when=move || chat.with(|s| s.voice.speaking)>
            <div class="chat-banner chat-banner--speaking">
                <span class="chat-banner__pulse">"🔊 Speaking..."</span>
                <button class="chat-banner__close" title="Stop speaking" on:click=stop>
                    "✕"
                </button>
            </div>
        </Show>
    }
}
