//! End-to-end resolution through file, flags, and prompts.
#![expect(
    clippy::expect_used,
    reason = "tests panic to surface configuration mistakes"
)]

use clap::{Arg, Command};
use confill::{
    Answer, Configurable, ConfillError, FlagSet, LoadOptions, PromptKind, ScriptedPrompter, load,
    missing_fields,
};
use rstest::rstest;
use serde::{Deserialize, Serialize};
use serial_test::serial;
use test_helpers::flags::command_with_longs;
use test_helpers::workdir::Workdir;

#[derive(Debug, Default, PartialEq, Serialize, Deserialize, Configurable)]
struct Service {
    pub name: String,
    pub port: u16,
    pub debug: bool,
}

#[derive(Debug, Default, PartialEq, Serialize, Deserialize, Configurable)]
struct Endpoint {
    pub name: String,
    pub port: u16,
}

#[derive(Debug, Default, PartialEq, Serialize, Deserialize, Configurable)]
struct Login {
    pub user: String,
    #[confill(tag(config = "password"))]
    pub password: String,
    pub enabled: bool,
}

fn parsed_flags(command: Command, args: &[&str]) -> FlagSet {
    let mut set = FlagSet::new(command);
    set.parse(args.iter().copied()).expect("parse flags");
    set
}

#[rstest]
fn port_flag_without_file_or_survey() {
    let mut flags = parsed_flags(
        Command::new("svc").arg(Arg::new("port").long("port")),
        &["--port=8080"],
    );
    let mut dest = Service::default();
    load(
        "unused.yml",
        &mut dest,
        LoadOptions::default()
            .without_file_decoder()
            .without_survey()
            .with_flags(&mut flags),
    )
    .expect("load succeeds");
    assert_eq!(
        dest,
        Service {
            name: String::new(),
            port: 8080,
            debug: false,
        }
    );
}

#[rstest]
fn secret_is_prompted_masked() {
    let mut prompter =
        ScriptedPrompter::new([Answer::from("admin"), Answer::from("secr3t"), Answer::from(true)]);
    let mut dest = Login::default();
    load(
        "unused.yml",
        &mut dest,
        LoadOptions::default()
            .without_file_decoder()
            .with_prompter(&mut prompter),
    )
    .expect("load succeeds");
    assert_eq!(dest.password, "secr3t");
    let kinds: Vec<PromptKind> = prompter.asked().iter().map(|(kind, _)| *kind).collect();
    assert_eq!(
        kinds,
        [PromptKind::Input, PromptKind::Password, PromptKind::Confirm]
    );
}

#[rstest]
fn boolean_is_confirmed() {
    let mut prompter = ScriptedPrompter::new([Answer::from(true)]);
    let mut dest = Login {
        user: "u".into(),
        password: "p".into(),
        enabled: false,
    };
    load(
        "unused.yml",
        &mut dest,
        LoadOptions::default()
            .without_file_decoder()
            .with_prompter(&mut prompter),
    )
    .expect("load succeeds");
    assert!(dest.enabled);
    let [(PromptKind::Confirm, spec)] = prompter.asked() else {
        panic!("expected a single confirmation, got {:?}", prompter.asked());
    };
    assert_eq!(spec.message, "enabled?");
}

#[rstest]
#[serial]
fn complete_file_leaves_later_stages_idle() {
    let dir = Workdir::new().expect("workdir");
    dir.write("svc.yml", "name: api\nport: 9000\ndebug: true\n")
        .expect("write config");
    let mut flags = parsed_flags(command_with_longs("svc", &["name", "port"]), &["--port", "1"]);
    let mut prompter = ScriptedPrompter::default();
    let mut dest = Service::default();
    load(
        "svc.yml",
        &mut dest,
        LoadOptions::default()
            .with_flags(&mut flags)
            .with_prompter(&mut prompter),
    )
    .expect("load succeeds");
    assert_eq!(
        dest,
        Service {
            name: "api".into(),
            port: 9000,
            debug: true,
        }
    );
    assert!(prompter.asked().is_empty());
}

#[rstest]
#[serial]
fn flags_repair_a_broken_file() {
    let dir = Workdir::new().expect("workdir");
    dir.write("svc.yml", "port: [unterminated\n")
        .expect("write config");
    let mut flags = parsed_flags(
        command_with_longs("svc", &["name", "port"]),
        &["--name", "api", "--port", "81"],
    );
    let mut dest = Endpoint::default();
    load(
        "svc.yml",
        &mut dest,
        LoadOptions::default()
            .without_survey()
            .with_flags(&mut flags),
    )
    .expect("flags cover every required field");
    assert_eq!(
        dest,
        Endpoint {
            name: "api".into(),
            port: 81,
        }
    );
}

#[rstest]
#[serial]
fn unrepaired_decode_failure_is_reported() {
    let dir = Workdir::new().expect("workdir");
    dir.write("svc.yml", "port: [unterminated\n")
        .expect("write config");
    let mut flags = parsed_flags(command_with_longs("svc", &["name"]), &["--name", "api"]);
    let mut dest = Endpoint::default();
    let err = load(
        "svc.yml",
        &mut dest,
        LoadOptions::default()
            .without_survey()
            .with_flags(&mut flags),
    )
    .expect_err("port is still missing");
    assert!(matches!(err, ConfillError::Decode { .. }), "got {err:?}");
    assert_eq!(dest.name, "api");
}

#[rstest]
#[serial]
fn missing_file_is_reported_when_nothing_fills_the_gap() {
    let _dir = Workdir::new().expect("workdir");
    let mut dest = Endpoint::default();
    let err = load(
        "absent.yml",
        &mut dest,
        LoadOptions::default().without_survey(),
    )
    .expect_err("file is absent");
    let ConfillError::File { path, .. } = err else {
        panic!("expected a file error, got {err:?}");
    };
    assert!(path.is_absolute());
    assert!(path.ends_with("absent.yml"));
}

#[rstest]
#[serial]
fn prompts_repair_a_missing_file() {
    let _dir = Workdir::new().expect("workdir");
    let mut prompter = ScriptedPrompter::new([Answer::from("api"), Answer::from("8443")]);
    let mut dest = Endpoint::default();
    load(
        "absent.yml",
        &mut dest,
        LoadOptions::default().with_prompter(&mut prompter),
    )
    .expect("prompts cover every required field");
    assert_eq!(dest.port, 8443);
}

#[rstest]
#[serial]
fn flag_errors_override_file_errors() {
    let _dir = Workdir::new().expect("workdir");
    // Unparsed, so the process arguments are read; `--token` is never among
    // them.
    let mut flags = FlagSet::new(
        Command::new("svc").arg(Arg::new("token").long("token").required(true)),
    );
    let mut prompter = ScriptedPrompter::new([Answer::from("api"), Answer::from("1")]);
    let mut dest = Endpoint::default();
    let err = load(
        "absent.yml",
        &mut dest,
        LoadOptions::default()
            .with_flags(&mut flags)
            .with_prompter(&mut prompter),
    )
    .expect_err("flag parsing fails");
    assert!(matches!(err, ConfillError::FlagParsing(_)), "got {err:?}");
    assert!(!confill::is_display_request(&err));
    assert!(prompter.asked().is_empty(), "survey must not run");
}

#[rstest]
fn missing_required_fields_alone_are_not_errors() {
    let mut dest = Service::default();
    load(
        "unused.yml",
        &mut dest,
        LoadOptions::default()
            .without_file_decoder()
            .without_survey(),
    )
    .expect("nothing to do is fine");
    let missing: Vec<String> = missing_fields(&dest, "config")
        .into_iter()
        .map(|d| d.name)
        .collect();
    assert_eq!(missing, ["name", "port", "debug"]);
}
