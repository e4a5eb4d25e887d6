use super::*;

#[test]
fn new_state_uses_default_upload_cap() {
    let state = test_helpers::test_app_state();
    assert!(state.llm.is_none());
    assert_eq!(state.max_upload_bytes, DEFAULT_MAX_UPLOAD_BYTES);
}

#[test]
fn with_max_upload_bytes_overrides_cap() {
    let state = test_helpers::test_app_state().with_max_upload_bytes(1024);
    assert_eq!(state.max_upload_bytes, 1024);
}

#[test]
fn state_with_llm_is_configured() {
    let llm: Arc<dyn LlmChat> = Arc::new(test_helpers::MockLlm::replying("ok"));
    let state = test_helpers::test_app_state_with_llm(llm);
    assert!(state.llm.is_some());
    assert_eq!(state.sampling, SamplingParams::default());
}
