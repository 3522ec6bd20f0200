use std::{
    io::Write,
    process::{Command, Output},
};

fn run(args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_hide_my_proxy"))
        .args(args)
        .output()
        .unwrap()
}

fn stderr(output: &Output) -> String {
    String::from_utf8_lossy(&output.stderr).into_owned()
}

#[test]
fn negative_number_exits_with_usage_error() {
    let output = run(&["-o", "db", "-n", "-5"]);
    assert_eq!(output.status.code(), Some(2));
    assert!(output.stdout.is_empty());

    let stderr = stderr(&output);
    assert!(stderr.contains("Usage: hide_my_proxy"), "{}", stderr);
    assert!(
        stderr.contains(
            "hide_my_proxy: error: argument -n: invalid value (a positive integer is required): -5"
        ),
        "{}",
        stderr
    );
}

#[test]
fn missing_countries_file_exits_with_usage_error() {
    let dir = tempfile::tempdir().unwrap();
    let missing = dir.path().join("countries");
    let missing = missing.to_str().unwrap();

    let output = run(&["-o", "db", "-ct", missing]);
    assert_eq!(output.status.code(), Some(2));

    let stderr = stderr(&output);
    let expected = format!("hide_my_proxy: error: argument -ct: can't open '{}': ", missing);
    assert!(stderr.contains(&expected), "{}", stderr);
}

#[test]
fn too_many_ports_exits_with_usage_error() {
    let mut args = vec!["-o", "db", "-p"];
    let ports: Vec<String> = (1..=21).map(|port| port.to_string()).collect();
    args.extend(ports.iter().map(String::as_str));

    let output = run(&args);
    assert_eq!(output.status.code(), Some(2));
    assert!(stderr(&output)
        .contains("hide_my_proxy: error: argument -p: invalid value (maximum 20 ports): 21 ports given"));
}

#[test]
fn oversized_port_exits_with_range_error() {
    let output = run(&["-o", "db", "-p", "99999999999999999999"]);
    assert_eq!(output.status.code(), Some(2));
    assert!(stderr(&output).contains(
        "hide_my_proxy: error: argument -p: invalid value (port must be between 1 and 65535): 99999999999999999999"
    ));
}

#[test]
fn parse_errors_exit_with_status_two() {
    assert_eq!(run(&[]).status.code(), Some(2));
    assert_eq!(run(&["-o", "db", "-pr", "ftp"]).status.code(), Some(2));
}

#[test]
fn valid_invocation_prints_json_configuration() {
    let output = run(&["-o", "db", "-p", "80", "80", "443", "-f", "json"]);
    assert_eq!(output.status.code(), Some(0), "{}", stderr(&output));

    let json: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(json["database_file"], "db");
    assert_eq!(json["ports"]["only"], serde_json::json!([80, 443]));
    assert_eq!(
        json["protocols"],
        serde_json::json!(["http", "https", "socks"])
    );
    assert!(json["countries"].as_array().unwrap().len() > 100);
}

#[test]
fn legacy_spellings_with_attached_values_run() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    file.write_all(b"France\nGermany\n").unwrap();
    let countries = format!("-ct={}", file.path().to_str().unwrap());

    let output = run(&["-o", "db", &countries, "-pr=socks", "-ka", "-aaaaa", "-f", "json"]);
    assert_eq!(output.status.code(), Some(0), "{}", stderr(&output));

    let json: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(json["countries"], serde_json::json!(["France", "Germany"]));
    assert_eq!(json["protocols"], serde_json::json!(["socks"]));
    assert_eq!(json["keep_alive_allowed"], true);
    assert_eq!(json["anonymity_level"], "Elite");
}

#[test]
fn default_format_prints_summary() {
    let output = run(&["-o", "db", "-n", "10", "-ss"]);
    assert_eq!(output.status.code(), Some(0), "{}", stderr(&output));

    let stdout = String::from_utf8(output.stdout).unwrap();
    assert!(stdout.contains("max proxies     : 10"));
    assert!(stdout.contains("speed           : >= Fast"));
}
