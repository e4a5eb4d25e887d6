//! Shared application state.
//!
//! DESIGN
//! ======
//! `AppState` is injected into Axum handlers via the `State` extractor. The
//! gateway keeps no per-conversation data: it only holds the optional LLM
//! client and the request settings read at startup.

use std::sync::Arc;

use crate::llm::LlmChat;
use crate::llm::types::SamplingParams;

pub const DEFAULT_MAX_UPLOAD_BYTES: usize = 20 * 1024 * 1024;

/// Shared application state, injected into Axum handlers via State extractor.
/// Clone is required by Axum; all inner fields are Arc-wrapped or Copy.
#[derive(Clone)]
pub struct AppState {
    /// Optional LLM client. `None` if LLM env vars are not configured.
    pub llm: Option<Arc<dyn LlmChat>>,
    /// Sampling parameters sent with every completion.
    pub sampling: SamplingParams,
    /// Largest accepted request body for uploads.
    pub max_upload_bytes: usize,
}

impl AppState {
    #[must_use]
    pub fn new(llm: Option<Arc<dyn LlmChat>>, sampling: SamplingParams) -> Self {
        Self { llm, sampling, max_upload_bytes: DEFAULT_MAX_UPLOAD_BYTES }
    }

    #[must_use]
    pub fn with_max_upload_bytes(mut self, max_upload_bytes: usize) -> Self {
        self.max_upload_bytes = max_upload_bytes;
        self
    }
}

// =============================================================================
// TEST HELPERS
// =============================================================================


#[cfg(test)]
#[path = "state_test.rs"]
mod tests;
