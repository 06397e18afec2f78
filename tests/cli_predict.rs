mod support;

use support::stub_backend::StubBackend;

use std::process::{Command, Output};
use std::time::Duration;

const FIELD_ARGS: [&str; 10] = [
    "--field",
    "age=63",
    "--field",
    "trestbps=145",
    "--field",
    "chol=233",
    "--field",
    "thalach=150",
    "--field",
    "oldpeak=2.3",
];

fn run_cli(config_home: &std::path::Path, api_url: &str, extra: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_heartcheck-predict"))
        .env("HEARTCHECK_CONFIG_HOME", config_home)
        .env("HEARTCHECK_API_URL", api_url)
        .args(extra)
        .args(FIELD_ARGS)
        .output()
        .expect("run heartcheck-predict")
}

#[test]
fn explicit_url_wins_over_invalid_environment_url() {
    let backend = StubBackend::respond_json(200, r#"{"logistic_regression":1,"decision_tree":0}"#);
    let home = tempfile::tempdir().expect("create tempdir");

    let output = run_cli(home.path(), "ftp://bad", &["--url", &backend.url]);

    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(output.status.success(), "{}", String::from_utf8_lossy(&output.stderr));
    assert!(stdout.contains("Logistic Regression: High Risk"), "{stdout}");
    assert!(stdout.contains("Decision Tree: Low Risk"), "{stdout}");
    let request = backend
        .next_request(Duration::from_secs(5))
        .expect("request captured");
    assert_eq!(request.request_line, "POST /predict HTTP/1.1");
}

#[test]
fn invalid_environment_url_fails_without_explicit_url() {
    let home = tempfile::tempdir().expect("create tempdir");

    let output = run_cli(home.path(), "ftp://bad", &[]);

    assert_eq!(output.status.code(), Some(1));
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("Invalid backend URL 'ftp://bad'"), "{stderr}");
}
