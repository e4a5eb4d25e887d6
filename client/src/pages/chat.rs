//! Single-page chat assistant: header, conversation, banners, composer.
//!
//! SYSTEM CONTEXT
//! ==============
//! Actions here split each network call around it: the state transition
//! runs synchronously, the request runs on `spawn_local`, and the result is
//! applied back to the signal when it resolves.

use leptos::prelude::*;

use crate::components::banners::{ErrorBanner, FileBanner, SpeakingBanner};
use crate::components::composer::Composer;
use crate::components::message_list::MessageList;
use crate::state::chat::ChatState;
#[cfg(feature = "csr")]
use crate::util::{now_ms, speech};

/// Send the typed text (and attached file) to the gateway.
pub fn send_message(chat: RwSignal<ChatState>) {
    #[cfg(feature = "csr")]
    {
        let Some(request) = chat.try_update(|s| s.begin_send(now_ms())).flatten() else {
            return;
        };
        leptos::task::spawn_local(async move {
            let result = crate::net::api::send_chat(&request).await.map(|reply| reply.message);
            if let Err(e) = &result {
                log::warn!("chat failed: {e}");
            }
            let to_speak = chat.try_update(|s| s.finish_send(result, now_ms())).flatten();
            if let Some(text) = to_speak {
                speech::speak(chat, &text);
            }
        });
    }
    #[cfg(not(feature = "csr"))]
    {
        let _ = chat;
    }
}

/// Upload one picked file and keep its extracted text for the next send.
#[cfg(feature = "csr")]
pub fn upload_file(chat: RwSignal<ChatState>, file: web_sys::File) {
    chat.update(ChatState::begin_upload);
    leptos::task::spawn_local(async move {
        let result = crate::net::api::parse_file(file).await;
        match &result {
            Ok(parsed) => log::info!("parsed {} ({} chars)", parsed.file_name, parsed.content_length),
            Err(e) => log::warn!("parse-file failed: {e}"),
        }
        chat.update(|s| s.finish_upload(result));
    });
}

#[component]
pub fn ChatPage() -> impl IntoView {
    let chat = expect_context::<RwSignal<ChatState>>();
    let auto_speak = move || chat.with(|s| s.auto_speak);

    view! {
        <div class="chat-page">
            <header class="chat-header">
                <div>
                    <h1>"AI Assistant"</h1>
                    <p class="chat-header__subtitle">"Powered by Llama 3 70B on Groq"</p>
                </div>
                <button
                    class="chat-header__toggle"
                    class:chat-header__toggle--on=auto_speak
                    title=move || if auto_speak() { "Auto-speak ON" } else { "Auto-speak OFF" }
                    on:click=move |_| chat.update(ChatState::toggle_auto_speak)
                >
                    {move || if auto_speak() { "🔊" } else { "🔇" }}
                </button>
            </header>

            <MessageList/>
            <ErrorBanner/>
            <FileBanner/>
            <SpeakingBanner/>
            <Composer/>
        </div>
    }
}
