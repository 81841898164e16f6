// Rust guideline compliant 2026-10-19

//! Unit tests for error types and messages.
//!
//! These tests validate error formatting and context preservation.

use abundant_core::{Error, PrefixIndex};

#[test]
fn test_io_error_formatting() {
    let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file not found");
    let error = Error::Io(io_err);
    let msg = error.to_string();
    assert!(
        msg.contains("IO error"),
        "IO error should contain 'IO error' prefix"
    );
}

#[test]
fn test_json_error_formatting() {
    let json_err = serde_json::from_str::<serde_json::Value>("invalid json")
        .expect_err("Should fail to parse invalid JSON");
    let error = Error::Json(json_err);
    assert!(error.to_string().contains("JSON error"));
}

#[test]
fn test_unknown_prefix_formatting() {
    let error = Error::UnknownPrefix("q".to_string());
    assert_eq!(error.to_string(), "Unknown prefix: q");
}

#[test]
fn test_ambiguous_prefix_formatting() {
    let error = Error::AmbiguousPrefix {
        prefix: "ab".to_string(),
        candidates: vec!["abc123".to_string(), "abd456".to_string()],
    };
    let msg = error.to_string();
    assert!(msg.starts_with("Ambiguous prefix: ab"));
    assert!(msg.contains("abc123"), "Should list all candidates");
    assert!(msg.contains("abd456"), "Should list all candidates");
}

#[test]
fn test_no_such_issue_formatting() {
    let error = Error::NoSuchIssue(".ab/issues/deadbeef.issue".to_string());
    assert_eq!(
        error.to_string(),
        "No issue could be found at: .ab/issues/deadbeef.issue"
    );
}

#[test]
fn test_invalid_issue_and_config_formatting() {
    let context = "expected value at line 1 column 1";
    assert!(Error::InvalidIssue(context.to_string())
        .to_string()
        .contains(context));
    assert_eq!(
        Error::Config("bad table".to_string()).to_string(),
        "Config error: bad table"
    );
}

#[test]
fn test_lookup_errors_carry_the_typed_prefix() {
    let index = PrefixIndex::from_items(["abc123", "abd456"]);
    match index.lookup("AB") {
        Err(Error::AmbiguousPrefix { prefix, candidates }) => {
            assert_eq!(prefix, "AB");
            assert_eq!(candidates.len(), 2);
        }
        other => panic!("expected ambiguity, got {other:?}"),
    }
    assert!(matches!(index.lookup("Z"), Err(Error::UnknownPrefix(p)) if p == "Z"));
}

#[test]
fn test_error_messages_are_single_line() {
    let errors = [
        Error::UnknownPrefix("x".to_string()),
        Error::AmbiguousPrefix {
            prefix: "a".to_string(),
            candidates: vec!["ab".to_string(), "ac".to_string()],
        },
        Error::NoSuchIssue("x".to_string()),
    ];
    for error in errors {
        let msg = error.to_string();
        assert!(msg.contains(':'), "Error message should have structured format");
        assert!(!msg.contains('\n'), "Error message should be single line");
    }
}
