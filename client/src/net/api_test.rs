use super::*;

#[test]
fn parsed_file_success_body_decodes() {
    let body = r#"{"success":true,"fileName":"a.txt","fileType":"text/plain","fileSize":5,"content":"hello","contentLength":5}"#;
    let parsed = decode_parsed_file(body).unwrap();
    assert_eq!(parsed.file_name, "a.txt");
    assert_eq!(parsed.content, "hello");
}

#[test]
fn parse_error_body_passes_message_through() {
    let body = r#"{"success":false,"error":"Unsupported file type"}"#;
    assert_eq!(decode_parsed_file(body).unwrap_err(), "Unsupported file type");
}

#[test]
fn parse_error_without_message_uses_fallback() {
    let body = r#"{"success":false,"error":""}"#;
    assert_eq!(decode_parsed_file(body).unwrap_err(), PARSE_FALLBACK);
}

#[test]
fn chat_reply_decodes_with_usage() {
    let body = r#"{"success":true,"message":"Hi","usage":{"prompt_tokens":1,"completion_tokens":2,"total_tokens":3}}"#;
    let reply = decode_chat_reply(body).unwrap();
    assert_eq!(reply.message, "Hi");
    assert_eq!(reply.usage.map(|u| u.total_tokens), Some(3));
}

#[test]
fn chat_error_body_passes_message_through() {
    let body = r#"{"success":false,"error":"Invalid API key. Please check your API key."}"#;
    assert_eq!(decode_chat_reply(body).unwrap_err(), "Invalid API key. Please check your API key.");
}

#[test]
fn non_json_body_uses_fallback() {
    assert_eq!(decode_chat_reply("<html>502</html>").unwrap_err(), REPLY_FALLBACK);
    assert_eq!(decode_parsed_file("").unwrap_err(), PARSE_FALLBACK);
}
