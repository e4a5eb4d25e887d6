//! Root application component and context providers.

use leptos::prelude::*;
use leptos_meta::{Title, provide_meta_context};

use crate::pages::chat::ChatPage;
use crate::state::chat::ChatState;
use crate::util::speech;

/// Root application component.
///
/// Provides the chat state context and installs the speech bridge, whose
/// support probe seeds the voice flags.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let chat = RwSignal::new(ChatState::default());
    let voice = speech::install(chat);
    chat.update(|s| s.voice = voice);
    provide_context(chat);

    view! {
        <Title text="AI Assistant"/>
        <ChatPage/>
    }
}
