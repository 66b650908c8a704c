//! The storage-domain walkthrough: construct, inspect, annotate, render.

use coded_result::{CodedResult, ErrorDomain, Status};

use crate::common::{Storage, StorageCode};

#[test]
fn test_every_code_round_trips() {
    for code in [StorageCode::Ok, StorageCode::NotFound, StorageCode::IoError] {
        let result = CodedResult::<Storage>::new(code);
        assert_eq!(result.code(), code);
        assert_eq!(result.is_success(), code == Storage::SUCCESS);
        assert_eq!(result.is_failure(), code != Storage::SUCCESS);
    }
}

#[test]
fn test_default_is_io_error() {
    assert_eq!(CodedResult::<Storage>::default().code(), StorageCode::IoError);
}

#[test]
fn test_not_found_renders_with_file_name() {
    let mut result = CodedResult::<Storage>::new(StorageCode::NotFound);
    assert_eq!(result.format(), "Code 1: not found");

    result.append_value("file.txt");
    assert_eq!(result.format(), "Code 1: not found (file.txt)");
}

#[test]
fn test_append_text_adds_parenthetical() {
    let mut result = CodedResult::<Storage>::new(StorageCode::IoError);
    result.append_value("abc");
    assert!(result.format().ends_with(" (abc)"));
}

#[test]
fn test_success_factory() {
    let first = CodedResult::<Storage>::success();
    let second = CodedResult::<Storage>::success();
    assert!(first.is_success());
    assert_eq!(first.message(), "");
    assert_eq!(first, second);
    assert_eq!(first.format(), "Success");
    assert_eq!(second.format(), "Success");
}

#[test]
fn test_cause_trail_has_inner_separators_only() {
    let mut result = CodedResult::<Storage>::default();
    result
        .append_cause(&CodedResult::<Storage>::new(StorageCode::NotFound))
        .append_cause(&CodedResult::<Storage>::new(StorageCode::IoError));
    assert_eq!(result.message(), "Code 1: not found: Code 2: i/o error");
}

#[test]
fn test_branching_on_status() {
    let describe = |result: &CodedResult<Storage>| match result.status() {
        Status::Success => "ok",
        Status::Failure(StorageCode::NotFound) => "missing",
        Status::Failure(_) => "broken",
    };

    assert_eq!(describe(&CodedResult::success()), "ok");
    assert_eq!(describe(&CodedResult::new(StorageCode::NotFound)), "missing");
    assert_eq!(describe(&CodedResult::new(StorageCode::IoError)), "broken");
}

#[test]
fn test_equality_ignores_diagnostics() {
    let mut left = CodedResult::<Storage>::new(StorageCode::NotFound);
    left.append_value("a");
    let right = CodedResult::<Storage>::new(StorageCode::NotFound);
    assert_eq!(left, right);
    assert_ne!(left, CodedResult::new(StorageCode::IoError));
}
