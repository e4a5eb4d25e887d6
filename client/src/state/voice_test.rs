use super::*;

fn supported() -> VoiceState {
    VoiceState::new(true, true)
}

// =============================================================
// Recording
// =============================================================

#[test]
fn toggle_without_recognizer_is_rejected() {
    let mut voice = VoiceState::new(false, true);
    assert_eq!(voice.toggle_recording(), Err(RECOGNITION_UNSUPPORTED));
    assert!(!voice.recording);
}

#[test]
fn toggle_starts_then_stops() {
    let mut voice = supported();
    assert_eq!(voice.toggle_recording(), Ok(vec![VoiceCommand::StartRecognition]));
    assert!(voice.recording);
    assert_eq!(voice.toggle_recording(), Ok(vec![VoiceCommand::StopRecognition]));
    assert!(!voice.recording);
}

#[test]
fn starting_capture_cancels_speech() {
    let mut voice = supported();
    voice.on_synthesis(SynthesisEvent::Start);
    let commands = voice.toggle_recording().unwrap();
    assert_eq!(commands, vec![VoiceCommand::CancelSpeech, VoiceCommand::StartRecognition]);
    assert!(!voice.speaking);
    assert!(voice.recording);
}

#[test]
fn recognition_end_and_error_clear_recording() {
    let mut voice = supported();
    voice.on_recognition(RecognitionEvent::Start);
    assert!(voice.recording);
    assert_eq!(voice.on_recognition(RecognitionEvent::End), None);
    assert!(!voice.recording);

    voice.on_recognition(RecognitionEvent::Start);
    voice.on_recognition(RecognitionEvent::Error("no-speech".into()));
    assert!(!voice.recording);
}

#[test]
fn recognition_result_yields_transcript() {
    let mut voice = supported();
    let out = voice.on_recognition(RecognitionEvent::Result("hello there".into()));
    assert_eq!(out.as_deref(), Some("hello there"));
}

#[test]
fn join_transcripts_concatenates_in_order() {
    assert_eq!(join_transcripts(["hello ", "wor", "ld"]), "hello world");
    assert_eq!(join_transcripts(Vec::<String>::new()), "");
}

// =============================================================
// Speaking
// =============================================================

#[test]
fn speak_cancels_current_utterance_first() {
    let mut voice = supported();
    let commands = voice.speak("reply");
    assert_eq!(commands, vec![VoiceCommand::CancelSpeech, VoiceCommand::Speak("reply".into())]);
}

#[test]
fn speak_stops_capture() {
    let mut voice = supported();
    voice.toggle_recording().unwrap();
    let commands = voice.speak("reply");
    assert_eq!(commands[0], VoiceCommand::StopRecognition);
    assert!(!voice.recording);
}

#[test]
fn speak_without_synthesis_or_text_is_noop() {
    let mut voice = VoiceState::new(true, false);
    assert!(voice.speak("reply").is_empty());
    let mut voice = supported();
    assert!(voice.speak("   ").is_empty());
}

#[test]
fn synthesis_events_track_speaking() {
    let mut voice = supported();
    voice.on_synthesis(SynthesisEvent::Start);
    assert!(voice.speaking);
    voice.on_synthesis(SynthesisEvent::End);
    assert!(!voice.speaking);
    voice.on_synthesis(SynthesisEvent::Start);
    voice.on_synthesis(SynthesisEvent::Error);
    assert!(!voice.speaking);
}

#[test]
fn stop_speaking_clears_flag() {
    let mut voice = supported();
    voice.on_synthesis(SynthesisEvent::Start);
    assert_eq!(voice.stop_speaking(), vec![VoiceCommand::CancelSpeech]);
    assert!(!voice.speaking);
}
