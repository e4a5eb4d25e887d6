//! Shared client-side state modules.
//!
//! DESIGN
//! ======
//! State is split by domain (`chat`, `voice`) so the page components can
//! depend on small focused models.

pub mod chat;
pub mod voice;
