//! Scrolling conversation view with the welcome screen and typing spinner.

use leptos::prelude::*;
use protocol::Role;

use crate::state::chat::{ChatMessage, ChatState};
use crate::util::speech;

#[component]
pub fn MessageList() -> impl IntoView {
    let chat = expect_context::<RwSignal<ChatState>>();
    let messages_ref = NodeRef::<leptos::html::Div>::new();

    Effect::new(move || {
        let _ = chat.with(|s| s.messages.len());
        let _ = chat.with(|s| s.loading);

        #[cfg(feature = "csr")]
        {
            if let Some(el) = messages_ref.get() {
                el.set_scroll_top(el.scroll_height());
            }
        }
    });

    view! {
        <div class="chat-messages" node_ref=messages_ref>
            {move || {
                let messages = chat.with(|s| s.messages.clone());
                if messages.is_empty() {
                    return view! { <Welcome/> }.into_any();
                }
                messages
                    .into_iter()
                    .map(|message| view! { <MessageBubble message=message/> })
                    .collect::<Vec<_>>()
                    .into_any()
            }}
            <Show when=move || chat.with(|s| s.loading)>
                <div class="chat-row chat-row--assistant">
                    <div class="chat-bubble chat-bubble--assistant">
                        <span class="chat-spinner"></span>
                    </div>
                </div>
            </Show>
        </div>
    }
}

#[component]
fn Welcome() -> impl IntoView {
    view! {
        <div class="chat-welcome">
            <div class="chat-welcome__icon">"🤖"</div>
            <h2>"Welcome to AI Assistant"</h2>
            <p>"Chat with Llama 3 70B, upload documents, or use voice input"</p>
            <div class="chat-welcome__features">
                <span>"Upload files"</span>
                <span>"Voice input"</span>
                <span>"Voice output"</span>
            </div>
        </div>
    }
}

#[component]
fn MessageBubble(message: ChatMessage) -> impl IntoView {
    let chat = expect_context::<RwSignal<ChatState>>();
    let is_user = message.role == Role::User;
    let ChatMessage { content, file_name, .. } = message;

    let read_aloud = {
        let content = content.clone();
        move |_| speech::speak(chat, &content)
    };

    view! {
        <div class="chat-row" class:chat-row--user=is_user class:chat-row--assistant=!is_user>
            <div class="chat-bubble" class:chat-bubble--user=is_user class:chat-bubble--assistant=!is_user>
                {file_name.map(|name| view! { <div class="chat-bubble__file">"📄 " {name}</div> })}
                <div class="chat-bubble__text">{content}</div>
                {(!is_user).then(|| view! {
                    <button class="chat-bubble__speak" on:click=read_aloud>"🔊 Read aloud"</button>
                })}
            </div>
        </div>
    }
}
