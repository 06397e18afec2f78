mod support;

use support::stub_backend::{StubBackend, unreachable_url};

use heartcheck::{
    config::{BackendSettings, resolve_backend},
    form::{FormState, SubmissionVector},
    prediction_gateway::{PredictError, PredictionClient, RiskLabel},
};
use std::time::Duration;

fn client_for(url: &str) -> PredictionClient {
    let settings = BackendSettings {
        base_url: Some(url.to_string()),
        request_timeout_secs: Some(10),
        check_status_on_launch: false,
    };
    PredictionClient::new(&resolve_backend(&settings, None).expect("valid stub url"))
}

fn features() -> SubmissionVector {
    let mut form = FormState::new();
    for (name, value) in [
        ("age", "41"),
        ("trestbps", "130"),
        ("chol", "204"),
        ("thalach", "172"),
        ("oldpeak", "1.4"),
        ("sex", "0"),
    ] {
        form.set_field(name, value).expect("known field");
    }
    SubmissionVector::from_form(&form).expect("valid form")
}

#[test]
fn posts_json_features_and_reads_labels() {
    let backend = StubBackend::respond_json(200, r#"{"logistic_regression":0,"decision_tree":1}"#);
    let result = client_for(&format!("{}/", backend.url))
        .predict(&features())
        .expect("prediction");
    assert_eq!(result.logistic_regression, RiskLabel::Low);
    assert_eq!(result.decision_tree, RiskLabel::High);

    let request = backend
        .next_request(Duration::from_secs(5))
        .expect("request captured");
    assert_eq!(request.request_line, "POST /predict HTTP/1.1");
    assert!(
        request
            .headers
            .to_ascii_lowercase()
            .contains("content-type: application/json")
    );
    let features = request.json()["features"].clone();
    assert_eq!(features.as_array().map(Vec::len), Some(13));
    assert_eq!(features[1], serde_json::json!(0.0));
    assert_eq!(features[9], serde_json::json!(1.4));
}

#[test]
fn non_success_status_keeps_body_for_diagnostics() {
    let backend = StubBackend::respond_json(500, r#"{"detail":"Models not loaded"}"#);
    let err = client_for(&backend.url).predict(&features()).unwrap_err();
    match err {
        PredictError::Status { code, body } => {
            assert_eq!(code, 500);
            assert!(body.contains("Models not loaded"));
        }
        other => panic!("unexpected error: {other:?}"),
    }
}

#[test]
fn refused_connection_is_a_transport_error() {
    let err = client_for(&unreachable_url())
        .predict(&features())
        .unwrap_err();
    assert!(matches!(err, PredictError::Transport(_)), "{err:?}");
}

#[test]
fn status_probe_reads_root_message() {
    let backend =
        StubBackend::respond_json(200, r#"{"message":"Heart Disease Prediction API is running."}"#);
    let status = client_for(&backend.url)
        .service_status()
        .expect("status");
    assert_eq!(
        status.message.as_deref(),
        Some("Heart Disease Prediction API is running.")
    );
    let request = backend
        .next_request(Duration::from_secs(5))
        .expect("request captured");
    assert_eq!(request.request_line, "GET / HTTP/1.1");
}
