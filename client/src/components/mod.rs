//! Reusable UI components for the chat page.
//!
//! ARCHITECTURE
//! ============
//! Components read the `RwSignal<ChatState>` from context and call state
//! transitions directly; network work lives in `pages::chat` actions.

pub mod banners;
pub mod composer;
pub mod message_list;
