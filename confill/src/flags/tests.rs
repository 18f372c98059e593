//! Unit tests for the flag source.
#![expect(
    clippy::expect_used,
    reason = "tests panic to surface fixture mistakes"
)]

use clap::{Arg, ArgAction, Command};
use rstest::{fixture, rstest};

use super::{FlagSet, try_load_flags};
use crate::load::Tunables;
use crate::{Configurable, ConfillError};

#[derive(Debug, Default, Configurable)]
struct Server {
    pub name: String,
    pub port: u16,
    pub debug: bool,
    pub log_level: String,
    pub tags: Vec<String>,
}

#[fixture]
fn command() -> Command {
    Command::new("server")
        .arg(Arg::new("name").long("name"))
        .arg(Arg::new("port").long("port"))
        .arg(Arg::new("log-level").long("log-level"))
        .arg(Arg::new("tags").long("tags").num_args(1..).action(ArgAction::Append))
}

fn parsed(command: Command, args: &[&str]) -> FlagSet {
    let mut set = FlagSet::new(command);
    set.parse(args.iter().copied()).expect("parse flags");
    set
}

#[rstest]
fn fills_only_missing_fields(command: Command) {
    let mut set = parsed(command, &["--name", "flagged", "--port", "8080"]);
    let mut dest = Server {
        name: "preset".into(),
        ..Server::default()
    };
    try_load_flags(&mut set, &mut dest, &Tunables::default()).expect("load flags");
    assert_eq!(dest.name, "preset");
    assert_eq!(dest.port, 8080);
    assert!(!dest.debug);
}

#[rstest]
fn hyphenated_spelling_matches_underscored_fields(command: Command) {
    let mut set = parsed(command, &["--log-level", "trace"]);
    let mut dest = Server::default();
    try_load_flags(&mut set, &mut dest, &Tunables::default()).expect("load flags");
    assert_eq!(dest.log_level, "trace");
}

#[rstest]
fn repeated_values_become_a_list(command: Command) {
    let mut set = parsed(command, &["--tags", "a", "b", "--tags", "c"]);
    let mut dest = Server::default();
    try_load_flags(&mut set, &mut dest, &Tunables::default()).expect("load flags");
    assert_eq!(dest.tags, ["a", "b", "c"]);
}

#[rstest]
fn defaults_count_as_supplied() {
    let command = Command::new("server").arg(Arg::new("port").long("port").default_value("3000"));
    let mut set = parsed(command, &[]);
    let mut dest = Server::default();
    try_load_flags(&mut set, &mut dest, &Tunables::default()).expect("load flags");
    assert_eq!(dest.port, 3000);
}

#[rstest]
fn undeclared_and_absent_flags_leave_fields_missing(command: Command) {
    let mut set = parsed(command, &[]);
    let mut dest = Server::default();
    try_load_flags(&mut set, &mut dest, &Tunables::default()).expect("load flags");
    assert!(dest.name.is_empty());
    assert_eq!(dest.port, 0);
    assert!(!dest.debug);
}

#[rstest]
fn unparsable_number_degrades_to_zero(command: Command) {
    let mut set = parsed(command, &["--port", "eighty"]);
    let mut dest = Server::default();
    try_load_flags(&mut set, &mut dest, &Tunables::default()).expect("load flags");
    assert_eq!(dest.port, 0);
}

#[rstest]
fn parse_failure_is_fatal(command: Command) {
    let mut set = FlagSet::new(command);
    let clap_err = set.parse(["--unknown"]).expect_err("unknown flag");
    let err = ConfillError::from(clap_err);
    assert!(matches!(err, ConfillError::FlagParsing(_)));
    assert!(!err.is_soft());
}

#[rstest]
fn prepared_matches_are_reused(command: Command) {
    let matches = command
        .clone()
        .try_get_matches_from(["server", "--port", "9"])
        .expect("matches");
    let mut set = FlagSet::from_matches(command, matches);
    assert!(set.is_parsed());
    let mut dest = Server::default();
    try_load_flags(&mut set, &mut dest, &Tunables::default()).expect("load flags");
    assert_eq!(dest.port, 9);
}

#[rstest]
fn lookup_requires_parsing(command: Command) {
    let set = FlagSet::new(command);
    assert!(!set.is_parsed());
    assert_eq!(set.lookup("port"), None);
}

#[rstest]
fn lookup_by_long_name() {
    let command = Command::new("server").arg(Arg::new("listen_port").long("port"));
    let set = parsed(command, &["--port", "1"]);
    assert_eq!(set.lookup("port").as_deref(), Some("1"));
    assert_eq!(set.lookup("listen_port").as_deref(), Some("1"));
}
