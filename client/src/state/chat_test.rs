use super::*;
use crate::state::voice::RECOGNITION_UNSUPPORTED;

fn parsed(name: &str, content: &str, size: u64) -> ParsedFile {
    ParsedFile {
        success: true,
        file_name: name.to_owned(),
        file_type: "text/plain".to_owned(),
        file_size: size,
        content: content.to_owned(),
        content_length: content.chars().count(),
    }
}

fn with_history() -> ChatState {
    let mut state = ChatState::default();
    state.input = "first".into();
    state.begin_send(1.0).unwrap();
    state.finish_send(Ok("answer".into()), 2.0);
    state
}

// =============================================================
// can_send
// =============================================================

#[test]
fn cannot_send_blank_input_without_file() {
    let mut state = ChatState::default();
    assert!(!state.can_send());
    state.input = "   ".into();
    assert!(!state.can_send());
    assert!(state.begin_send(0.0).is_none());
}

#[test]
fn file_alone_enables_send() {
    let mut state = ChatState::default();
    state.finish_upload(Ok(parsed("a.txt", "doc", 3)));
    assert!(state.can_send());
}

#[test]
fn loading_disables_send() {
    let mut state = ChatState::default();
    state.input = "hi".into();
    state.loading = true;
    assert!(!state.can_send());
}

// =============================================================
// begin_send / finish_send
// =============================================================

#[test]
fn begin_send_builds_request_from_prior_history() {
    let mut state = with_history();
    state.input = "  second  ".into();
    let request = state.begin_send(3.0).unwrap();

    assert_eq!(
        request.messages,
        vec![ChatTurn::user("first"), ChatTurn::assistant("answer"), ChatTurn::user("second")]
    );
    assert_eq!(request.file_content, None);
    assert_eq!(state.messages.len(), 3);
    assert_eq!(state.messages[2].content, "second");
    assert!(state.input.is_empty());
    assert!(state.loading);
}

#[test]
fn begin_send_attaches_file_text_and_name() {
    let mut state = ChatState::default();
    state.finish_upload(Ok(parsed("report.md", "# Report", 8)));
    state.input = "summarize".into();
    let request = state.begin_send(1.0).unwrap();

    assert_eq!(request.file_content.as_deref(), Some("# Report"));
    assert_eq!(state.messages[0].file_name.as_deref(), Some("report.md"));
}

#[test]
fn begin_send_clears_previous_error() {
    let mut state = ChatState::default();
    state.error = Some("old".into());
    state.input = "hi".into();
    state.begin_send(1.0);
    assert!(state.error.is_none());
}

#[test]
fn successful_send_appends_reply_and_clears_file() {
    let mut state = ChatState::default();
    state.finish_upload(Ok(parsed("a.txt", "doc", 3)));
    state.input = "go".into();
    state.begin_send(1.0);
    let speak = state.finish_send(Ok("done".into()), 2.0);

    assert_eq!(speak, None);
    assert!(!state.loading);
    assert!(state.uploaded_file.is_none());
    assert_eq!(state.messages.len(), 2);
    assert_eq!(state.messages[1].role, Role::Assistant);
    assert_eq!(state.messages[1].content, "done");
    assert_eq!(state.messages[1].file_name, None);
}

#[test]
fn auto_speak_returns_reply_text() {
    let mut state = ChatState::default();
    state.toggle_auto_speak();
    state.input = "go".into();
    state.begin_send(1.0);
    assert_eq!(state.finish_send(Ok("spoken".into()), 2.0).as_deref(), Some("spoken"));
}

#[test]
fn failed_send_keeps_history_and_file() {
    let mut state = with_history();
    state.finish_upload(Ok(parsed("a.txt", "doc", 3)));
    state.input = "again".into();
    state.begin_send(3.0);
    let before = state.messages.clone();

    let speak = state.finish_send(Err("Rate limit exceeded".into()), 4.0);

    assert_eq!(speak, None);
    assert_eq!(state.messages, before);
    assert!(state.messages.iter().all(|m| m.content != "Rate limit exceeded"));
    assert!(state.uploaded_file.is_some());
    assert_eq!(state.error.as_deref(), Some("Rate limit exceeded"));
    assert!(!state.loading);
}

#[test]
fn blank_send_error_uses_fallback() {
    let mut state = ChatState::default();
    state.input = "x".into();
    state.begin_send(1.0);
    state.finish_send(Err(String::new()), 2.0);
    assert_eq!(state.error.as_deref(), Some(REPLY_FALLBACK));
}

#[test]
fn message_ids_are_unique() {
    let mut state = with_history();
    state.input = "next".into();
    state.begin_send(1.0);
    state.finish_send(Ok("again".into()), 1.0);
    let mut ids: Vec<_> = state.messages.iter().map(|m| m.id.clone()).collect();
    ids.sort();
    ids.dedup();
    assert_eq!(ids.len(), 4);
}

// =============================================================
// Uploads
// =============================================================

#[test]
fn upload_success_stores_file() {
    let mut state = ChatState::default();
    state.begin_upload();
    assert!(state.loading);
    state.finish_upload(Ok(parsed("notes.txt", "hello", 1536)));
    assert!(!state.loading);
    let file = state.uploaded_file.as_ref().unwrap();
    assert_eq!(file.name, "notes.txt");
    assert_eq!(file.content, "hello");
    assert_eq!(file.size_label(), "(1.5 KB)");
}

#[test]
fn upload_failure_sets_error() {
    let mut state = ChatState::default();
    state.begin_upload();
    state.finish_upload(Err("Unsupported file type".into()));
    assert_eq!(state.error.as_deref(), Some("Unsupported file type"));
    assert!(state.uploaded_file.is_none());

    state.finish_upload(Err(" ".into()));
    assert_eq!(state.error.as_deref(), Some(PARSE_FALLBACK));
}

#[test]
fn remove_file_and_dismiss_error() {
    let mut state = ChatState::default();
    state.finish_upload(Ok(parsed("a.txt", "doc", 3)));
    state.error = Some("boom".into());
    state.remove_file();
    state.dismiss_error();
    assert!(state.uploaded_file.is_none());
    assert!(state.error.is_none());
}

// =============================================================
// Voice wiring
// =============================================================

#[test]
fn unsupported_recording_sets_error() {
    let mut state = ChatState::new(VoiceState::new(false, false));
    assert!(state.toggle_recording().is_empty());
    assert_eq!(state.error.as_deref(), Some(RECOGNITION_UNSUPPORTED));
}

#[test]
fn starting_recording_clears_error() {
    let mut state = ChatState::new(VoiceState::new(true, true));
    state.error = Some("old".into());
    assert_eq!(state.toggle_recording(), vec![VoiceCommand::StartRecognition]);
    assert!(state.error.is_none());
}

#[test]
fn recognition_result_replaces_input() {
    let mut state = ChatState::new(VoiceState::new(true, true));
    state.input = "typed".into();
    state.on_recognition(RecognitionEvent::Result("spoken words".into()));
    assert_eq!(state.input, "spoken words");
}
