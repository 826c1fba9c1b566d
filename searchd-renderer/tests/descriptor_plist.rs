//! Rendered descriptors must be valid launchd property lists.

use std::path::Path;

use plist::Value;
use rstest::rstest;
use searchd_core::paths::{DAEMON_LABEL, MENUBAR_LABEL};
use searchd_core::ServiceKind;
use searchd_renderer::{Renderer, TokenValues};

fn values() -> TokenValues {
    TokenValues::for_home(
        Path::new("/Users/tester"),
        Path::new("/Users/tester/.local/bin/uv"),
        Path::new("/Users/tester/src/search-daemon"),
    )
}

fn parse(kind: ServiceKind) -> plist::Dictionary {
    let rendered = Renderer::default().render(kind, &values()).expect("render");
    let value = Value::from_reader_xml(rendered.as_bytes()).expect("parse plist");
    value.into_dictionary().expect("plist root dict")
}

fn program_arguments(dict: &plist::Dictionary) -> Vec<String> {
    dict.get("ProgramArguments")
        .and_then(Value::as_array)
        .expect("ProgramArguments array")
        .iter()
        .map(|v| v.as_string().expect("program arg as string").to_string())
        .collect()
}

#[rstest]
#[case(ServiceKind::Daemon, DAEMON_LABEL)]
#[case(ServiceKind::MenuBar, MENUBAR_LABEL)]
fn label_matches_service_kind(#[case] kind: ServiceKind, #[case] label: &str) {
    let dict = parse(kind);
    assert_eq!(dict.get("Label").and_then(Value::as_string), Some(label));
    assert_eq!(kind.label(), label);
    assert_eq!(
        dict.get("WorkingDirectory").and_then(Value::as_string),
        Some("/Users/tester/src/search-daemon")
    );
    assert_eq!(dict.get("RunAtLoad").and_then(Value::as_boolean), Some(true));
}

#[test]
fn daemon_runs_module_with_config_and_logs_stderr() {
    let dict = parse(ServiceKind::Daemon);
    assert_eq!(
        program_arguments(&dict),
        vec![
            "/Users/tester/.local/bin/uv",
            "run",
            "--project",
            "/Users/tester/src/search-daemon",
            "python",
            "-m",
            "search_daemon",
            "--config",
            "/Users/tester/.config/search-daemon/config.yaml",
        ]
    );
    assert_eq!(
        dict.get("StandardErrorPath").and_then(Value::as_string),
        Some("/Users/tester/.cache/search-mcp/daemon.log")
    );
    assert_eq!(dict.get("KeepAlive").and_then(Value::as_boolean), Some(true));
}

#[test]
fn menubar_runs_in_aqua_session() {
    let dict = parse(ServiceKind::MenuBar);
    let args = program_arguments(&dict);
    assert_eq!(args.first().map(String::as_str), Some("/Users/tester/.local/bin/uv"));
    assert_eq!(args.last().map(String::as_str), Some("search_daemon.menu_bar"));
    assert_eq!(
        dict.get("LimitLoadToSessionType").and_then(Value::as_string),
        Some("Aqua")
    );
}
