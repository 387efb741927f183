//! Tests for domain error construction.

use super::*;
use contact_rules::{ContactDraft, validate_contact};
use rstest::rstest;

const TRACE_ID: &str = "00000000-0000-0000-0000-000000000000";

#[rstest]
#[case(Error::invalid_request("bad"), ErrorCode::InvalidRequest)]
#[case(Error::not_found("missing"), ErrorCode::NotFound)]
#[case(Error::internal("boom"), ErrorCode::InternalError)]
fn constructors_set_code(#[case] error: Error, #[case] expected: ErrorCode) {
    assert_eq!(error.code(), expected);
    assert!(error.field_errors().is_empty());
}

#[rstest]
fn new_returns_none_when_trace_id_out_of_scope() {
    let error = Error::internal("boom");
    assert!(error.trace_id().is_none());
}

#[tokio::test]
async fn new_captures_trace_id_in_scope() {
    let trace_id: TraceId = TRACE_ID.parse().expect("valid uuid");
    let error = TraceId::scope(trace_id, async { Error::not_found("missing") }).await;
    assert_eq!(error.trace_id(), Some(TRACE_ID));
}

#[rstest]
fn with_trace_id_overrides_value() {
    let error = Error::invalid_request("bad").with_trace_id("abc");
    assert_eq!(error.trace_id(), Some("abc"));
}

#[rstest]
fn validation_lists_fields_in_form_order() {
    let report = validate_contact(&ContactDraft::new("", "not-an-email", "123"));
    let error = Error::validation(&report);
    let pairs: Vec<_> = error
        .field_errors()
        .iter()
        .map(|fe| (fe.field(), fe.message()))
        .collect();
    assert_eq!(
        pairs,
        vec![
            ("name", "Name is required"),
            ("email", "Please enter a valid email"),
            ("phone", "Enter valid phone (10-15 digits)"),
        ]
    );
}

#[rstest]
fn display_uses_message() {
    assert_eq!(Error::not_found("Contact not found").to_string(), "Contact not found");
}
