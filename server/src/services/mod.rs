//! Domain services used by the HTTP routes.
//!
//! ARCHITECTURE
//! ============
//! Service modules own prompt assembly and document extraction so route
//! handlers can stay focused on request translation and status mapping.

pub mod chat;
pub mod extract;
