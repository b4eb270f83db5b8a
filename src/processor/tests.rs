use super::validator::{InvalidReason, ValidationOutcome, process_message};

#[test]
fn test_valid_json_object() {
    let payload = br#"{"timestamp": "2023-01-01T00:00:00Z", "message": "test"}"#;
    let outcome = process_message(payload);
    match outcome {
        ValidationOutcome::Valid(value) => {
            assert_eq!(value["timestamp"], "2023-01-01T00:00:00Z");
            assert_eq!(value["message"], "test");
        }
        ValidationOutcome::Invalid(reason) => panic!("Expected valid outcome, got {reason}"),
    }
}

#[test]
fn test_parsed_value_exposes_all_top_level_fields() {
    let payload = br#"{"timestamp": "2023-01-01T00:00:00Z", "service_name": "auth-service", "log_level": "INFO", "message": "ok", "request_id": "req-1"}"#;
    let ValidationOutcome::Valid(value) = process_message(payload) else {
        panic!("Expected valid outcome");
    };
    let object = value.as_object().unwrap();
    for field in [
        "timestamp",
        "service_name",
        "log_level",
        "message",
        "request_id",
    ] {
        assert!(object.contains_key(field), "missing field {field}");
    }
}

#[test]
fn test_invalid_json_string() {
    let outcome = process_message(b"this is not json");
    assert!(matches!(
        outcome,
        ValidationOutcome::Invalid(InvalidReason::MalformedSyntax(_))
    ));
}

#[test]
fn test_truncated_json() {
    let outcome = process_message(br#"{"timestamp": "2023-01-01T00:00:00Z", "message": "#);
    assert!(matches!(
        outcome,
        ValidationOutcome::Invalid(InvalidReason::MalformedSyntax(_))
    ));
}

#[test]
fn test_empty_payload() {
    let outcome = process_message(b"");
    assert!(matches!(
        outcome,
        ValidationOutcome::Invalid(InvalidReason::MalformedSyntax(_))
    ));
}

#[test]
fn test_non_utf8_payload_is_a_processing_error() {
    let outcome = process_message(&[0xff, 0xfe, b'{', b'}']);
    assert!(matches!(
        outcome,
        ValidationOutcome::Invalid(InvalidReason::ProcessingError(_))
    ));
}

#[test]
fn test_scalar_and_array_documents_are_accepted() {
    assert!(process_message(b"42").is_valid());
    assert!(process_message(b"\"just a string\"").is_valid());
    assert!(process_message(b"[1, 2, 3]").is_valid());
    assert!(process_message(b"null").is_valid());
}

#[test]
fn test_same_input_yields_same_outcome() {
    let payloads: [&[u8]; 4] = [
        br#"{"message": "test"}"#,
        b"this is not json",
        b"",
        &[0xc3, 0x28],
    ];
    for payload in payloads {
        assert_eq!(process_message(payload), process_message(payload));
    }
}
