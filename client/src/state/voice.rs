//! Voice input/output state.
//!
//! DESIGN
//! ======
//! The browser speech APIs are callback driven. The `csr` bridge in
//! `util::speech` turns those callbacks into [`RecognitionEvent`] and
//! [`SynthesisEvent`] values and applies them here, while user actions return
//! [`VoiceCommand`]s for the bridge to execute. Capture and playback are
//! mutually exclusive: starting one stops the other.

#[cfg(test)]
#[path = "voice_test.rs"]
mod voice_test;

pub const RECOGNITION_UNSUPPORTED: &str = "Speech recognition not supported in this browser";

/// Recognition language requested from the browser.
pub const RECOGNITION_LANG: &str = "en-US";

/// Notification from the speech recognizer.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum RecognitionEvent {
    Start,
    /// Concatenated transcript of every result so far, interim included.
    Result(String),
    End,
    Error(String),
}

/// Notification from the current utterance.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SynthesisEvent {
    Start,
    End,
    Error,
}

/// Side effect for the browser bridge to perform.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum VoiceCommand {
    StartRecognition,
    StopRecognition,
    /// Cancel any queued or playing utterance.
    CancelSpeech,
    Speak(String),
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct VoiceState {
    pub recognition_supported: bool,
    pub synthesis_supported: bool,
    pub recording: bool,
    pub speaking: bool,
}

impl VoiceState {
    #[must_use]
    pub fn new(recognition_supported: bool, synthesis_supported: bool) -> Self {
        Self { recognition_supported, synthesis_supported, ..Self::default() }
    }

    /// Start or stop capture.
    ///
    /// # Errors
    ///
    /// Returns [`RECOGNITION_UNSUPPORTED`] when the browser has no recognizer.
    pub fn toggle_recording(&mut self) -> Result<Vec<VoiceCommand>, &'static str> {
        if !self.recognition_supported {
            return Err(RECOGNITION_UNSUPPORTED);
        }
        if self.recording {
            self.recording = false;
            return Ok(vec![VoiceCommand::StopRecognition]);
        }

        let mut commands = Vec::with_capacity(2);
        if self.speaking {
            self.speaking = false;
            commands.push(VoiceCommand::CancelSpeech);
        }
        self.recording = true;
        commands.push(VoiceCommand::StartRecognition);
        Ok(commands)
    }

    /// Read `text` aloud, replacing whatever is playing.
    pub fn speak(&mut self, text: &str) -> Vec<VoiceCommand> {
        if !self.synthesis_supported || text.trim().is_empty() {
            return Vec::new();
        }
        let mut commands = Vec::with_capacity(3);
        if self.recording {
            self.recording = false;
            commands.push(VoiceCommand::StopRecognition);
        }
        commands.push(VoiceCommand::CancelSpeech);
        commands.push(VoiceCommand::Speak(text.to_owned()));
        commands
    }

    pub fn stop_speaking(&mut self) -> Vec<VoiceCommand> {
        if !self.synthesis_supported {
            return Vec::new();
        }
        self.speaking = false;
        vec![VoiceCommand::CancelSpeech]
    }

    /// Apply a recognizer event. Returns the transcript that should replace
    /// the input box, if any.
    pub fn on_recognition(&mut self, event: RecognitionEvent) -> Option<String> {
        match event {
            RecognitionEvent::Start => {
                self.recording = true;
                None
            }
            RecognitionEvent::Result(transcript) => Some(transcript),
            RecognitionEvent::End | RecognitionEvent::Error(_) => {
                self.recording = false;
                None
            }
        }
    }

    pub fn on_synthesis(&mut self, event: SynthesisEvent) {
        self.speaking = matches!(event, SynthesisEvent::Start);
    }
}

/// Join per-result transcripts the way the recognizer reports them.
#[must_use]
pub fn join_transcripts<I, S>(parts: I) -> String
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    parts.into_iter().fold(String::new(), |mut acc, part| {
        acc.push_str(part.as_ref());
        acc
    })
}
