//! Unit tests for error classification.

use clap::{Command, error::ErrorKind};
use rstest::rstest;

use super::{ConfillError, is_display_request};

fn flag_error(kind: ErrorKind) -> ConfillError {
    Command::new("demo").error(kind, "demo output").into()
}

fn file_error() -> ConfillError {
    ConfillError::File {
        path: "missing.yml".into(),
        source: std::io::Error::from(std::io::ErrorKind::NotFound),
    }
}

#[rstest]
#[case(ErrorKind::DisplayHelp)]
#[case(ErrorKind::DisplayVersion)]
fn recognises_display_requests(#[case] kind: ErrorKind) {
    assert!(is_display_request(&flag_error(kind)));
}

#[rstest]
#[case(ErrorKind::UnknownArgument)]
#[case(ErrorKind::InvalidValue)]
fn rejects_regular_flag_errors(#[case] kind: ErrorKind) {
    assert!(!is_display_request(&flag_error(kind)));
}

#[rstest]
fn file_stage_errors_are_soft() {
    assert!(file_error().is_soft());
    let decode = ConfillError::decode("bad.yml", figment::Error::from("boom"));
    assert!(decode.is_soft());
    assert!(!is_display_request(&decode));
}

#[rstest]
fn flag_errors_are_fatal() {
    assert!(!flag_error(ErrorKind::UnknownArgument).is_soft());
}

#[rstest]
fn messages_name_the_path() {
    let rendered = file_error().to_string();
    assert!(
        rendered.contains("missing.yml"),
        "unexpected message: {rendered}"
    );
}
