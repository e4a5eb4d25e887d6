//! Conversation state for the chat page.
//!
//! DESIGN
//! ======
//! All transitions are plain methods on [`ChatState`] so they can be unit
//! tested without a browser. Components hold the state in an `RwSignal`
//! and run the network call between the `begin_*` and `finish_*` halves.
//!
//! A send builds its request from the history as it stood *before* the new
//! user turn, then appends that turn. A failed send leaves the user turn in
//! place and appends nothing else.

#[cfg(test)]
#[path = "chat_test.rs"]
mod chat_test;

use protocol::{ChatRequest, ChatTurn, ParsedFile, Role};

use super::voice::{RecognitionEvent, SynthesisEvent, VoiceCommand, VoiceState};

pub const REPLY_FALLBACK: &str = "Failed to get response";
pub const PARSE_FALLBACK: &str = "Failed to parse file";

/// A rendered conversation entry.
#[derive(Clone, Debug, PartialEq)]
pub struct ChatMessage {
    pub id: String,
    pub role: Role,
    pub content: String,
    /// Milliseconds since the epoch.
    pub timestamp: f64,
    /// Name of the document attached to this turn.
    pub file_name: Option<String>,
}

/// A parsed document waiting to be sent with the next message.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct UploadedFile {
    pub name: String,
    pub content: String,
    pub size: u64,
}

impl UploadedFile {
    /// Size label shown next to the file name, e.g. `"(1.5 KB)"`.
    #[must_use]
    #[allow(clippy::cast_precision_loss)]
    pub fn size_label(&self) -> String {
        format!("({:.1} KB)", self.size as f64 / 1024.0)
    }
}

impl From<ParsedFile> for UploadedFile {
    fn from(parsed: ParsedFile) -> Self {
        Self { name: parsed.file_name, content: parsed.content, size: parsed.file_size }
    }
}

#[derive(Clone, Debug, Default)]
pub struct ChatState {
    pub messages: Vec<ChatMessage>,
    pub input: String,
    pub loading: bool,
    pub uploaded_file: Option<UploadedFile>,
    pub auto_speak: bool,
    pub error: Option<String>,
    pub voice: VoiceState,
    next_id: u64,
}

impl ChatState {
    #[cfg(test)]
    #[must_use]
    pub fn new(voice: VoiceState) -> Self {
        Self { voice, ..Self::default() }
    }

    /// Whether the send button is enabled.
    #[must_use]
    pub fn can_send(&self) -> bool {
        !self.loading && (!self.input.trim().is_empty() || self.uploaded_file.is_some())
    }

    /// Start a send. Returns the request to post, or `None` when there is
    /// nothing to send.
    pub fn begin_send(&mut self, now: f64) -> Option<ChatRequest> {
        if !self.can_send() {
            return None;
        }

        let content = self.input.trim().to_owned();
        let mut turns: Vec<ChatTurn> = self
            .messages
            .iter()
            .map(|m| ChatTurn { role: m.role, content: m.content.clone() })
            .collect();
        turns.push(ChatTurn::user(content.clone()));

        let request = ChatRequest {
            messages: turns,
            file_content: self.uploaded_file.as_ref().map(|f| f.content.clone()),
        };

        let file_name = self.uploaded_file.as_ref().map(|f| f.name.clone());
        self.push_message(Role::User, content, now, file_name);
        self.input.clear();
        self.error = None;
        self.loading = true;
        Some(request)
    }

    /// Finish a send. Returns the reply text when it should be read aloud.
    pub fn finish_send(&mut self, result: Result<String, String>, now: f64) -> Option<String> {
        self.loading = false;
        match result {
            Ok(reply) => {
                self.push_message(Role::Assistant, reply.clone(), now, None);
                self.uploaded_file = None;
                self.auto_speak.then_some(reply)
            }
            Err(err) => {
                self.error = Some(non_blank_or(err, REPLY_FALLBACK));
                None
            }
        }
    }

    pub fn begin_upload(&mut self) {
        self.loading = true;
        self.error = None;
    }

    pub fn finish_upload(&mut self, result: Result<ParsedFile, String>) {
        self.loading = false;
        match result {
            Ok(parsed) => self.uploaded_file = Some(parsed.into()),
            Err(err) => self.error = Some(non_blank_or(err, PARSE_FALLBACK)),
        }
    }

    pub fn remove_file(&mut self) {
        self.uploaded_file = None;
    }

    pub fn dismiss_error(&mut self) {
        self.error = None;
    }

    pub fn toggle_auto_speak(&mut self) {
        self.auto_speak = !self.auto_speak;
    }

    // =========================================================================
    // Voice
    // =========================================================================

    /// Mic button. Surfaces an error instead of commands when unsupported.
    pub fn toggle_recording(&mut self) -> Vec<VoiceCommand> {
        match self.voice.toggle_recording() {
            Ok(commands) => {
                if self.voice.recording {
                    self.error = None;
                }
                commands
            }
            Err(message) => {
                self.error = Some(message.to_owned());
                Vec::new()
            }
        }
    }

    pub fn on_recognition(&mut self, event: RecognitionEvent) {
        if let Some(transcript) = self.voice.on_recognition(event) {
            self.input = transcript;
        }
    }

    pub fn on_synthesis(&mut self, event: SynthesisEvent) {
        self.voice.on_synthesis(event);
    }

    fn push_message(&mut self, role: Role, content: String, timestamp: f64, file_name: Option<String>) {
        self.next_id += 1;
        self.messages.push(ChatMessage {
            id: format!("{}-{}", timestamp, self.next_id),
            role,
            content,
            timestamp,
            file_name,
        });
    }
}

fn non_blank_or(message: String, fallback: &str) -> String {
    if message.trim().is_empty() { fallback.to_owned() } else { message }
}
