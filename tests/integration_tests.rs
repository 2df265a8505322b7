use anyhow::Result;
use candidate_screening::{
    EndpointTable, FetchOutcome, HttpScoringBackend, ModelChoice, ResultStatus, ScreeningClient,
    ScreeningSettings, TomlConfig,
};
use httpmock::prelude::*;
use serde_json::json;
use std::io::Write;
use tempfile::NamedTempFile;

const BASE_PATH: &str = "/api/predict-candidates";

fn client_for(server: &MockServer) -> ScreeningClient<HttpScoringBackend> {
    ScreeningClient::new(
        HttpScoringBackend::new(),
        EndpointTable::with_base_url(&server.url(BASE_PATH)),
    )
}

#[tokio::test]
async fn test_end_to_end_ranked_candidates() -> Result<()> {
    let server = MockServer::start();
    let api_mock = server.mock(|when, then| {
        when.method(POST)
            .path(BASE_PATH)
            .header("content-type", "application/json")
            .json_body(json!({"jobDescription": "Senior front-end developer with React"}));
        then.status(200)
            .header("Content-Type", "application/json")
            .json_body(json!({
                "topCandidates": [
                    {"Name": "Alice", "Score": 0.87},
                    {"Name": "Bob", "Score": 0.5}
                ]
            }));
    });

    let client = client_for(&server);
    client.set_job_description("Senior front-end developer with React");
    let outcome = client.fetch_candidates().await;

    api_mock.assert();
    assert_eq!(outcome, FetchOutcome::Loaded { count: 2 });
    assert_eq!(
        client.display_lines(),
        vec!["Alice - Score: 0.87", "Bob - Score: 0.50"]
    );
    assert!(!client.is_loading());
    Ok(())
}

#[tokio::test]
async fn test_each_model_hits_only_its_endpoint() -> Result<()> {
    for selected in ModelChoice::ALL {
        let server = MockServer::start();
        let mocks = [
            (ModelChoice::NeuralNet, BASE_PATH.to_string()),
            (ModelChoice::XGBoost, format!("{}/XGboost", BASE_PATH)),
            (ModelChoice::SpacySimilarity, format!("{}/spacy", BASE_PATH)),
        ]
        .map(|(model, path)| {
            let mock = server.mock(|when, then| {
                when.method(POST)
                    .path(path.as_str())
                    .json_body(json!({"jobDescription": "Cloud engineer"}));
                then.status(200)
                    .json_body(json!({"topCandidates": [{"Name": "Eve", "Score": 42}]}));
            });
            (model, mock)
        });

        let client = client_for(&server);
        client.set_job_description("Cloud engineer");
        client.set_selected_model(selected);
        let outcome = client.fetch_candidates().await;

        assert_eq!(outcome, FetchOutcome::Loaded { count: 1 });
        assert_eq!(client.display_lines(), vec!["Eve - Score: 42.00"]);
        for (model, mock) in &mocks {
            let expected_hits = if *model == selected { 1 } else { 0 };
            mock.assert_hits(expected_hits);
        }
    }
    Ok(())
}

#[tokio::test]
async fn test_non_success_status_clears_results() -> Result<()> {
    let server = MockServer::start();
    let mut ok_mock = server.mock(|when, then| {
        when.method(POST).path(BASE_PATH);
        then.status(200)
            .json_body(json!({"topCandidates": [{"Name": "Alice", "Score": 0.87}]}));
    });

    let client = client_for(&server);
    client.fetch_candidates().await;
    assert_eq!(client.candidates().len(), 1);
    ok_mock.assert();
    ok_mock.delete();

    let error_mock = server.mock(|when, then| {
        when.method(POST).path(BASE_PATH);
        then.status(500).json_body(json!({"detail": "prediction failed"}));
    });

    let outcome = client.fetch_candidates().await;

    error_mock.assert();
    match outcome {
        FetchOutcome::Failed { reason } => assert!(reason.contains("prediction failed")),
        other => panic!("unexpected outcome: {:?}", other),
    }
    assert!(client.display_lines().is_empty());
    assert!(!client.is_loading());
    Ok(())
}

#[tokio::test]
async fn test_client_error_status_treated_like_server_error() -> Result<()> {
    let server = MockServer::start();
    let api_mock = server.mock(|when, then| {
        when.method(POST).path(format!("{}/spacy", BASE_PATH));
        then.status(422).body("Unprocessable Entity");
    });

    let client = client_for(&server).with_model(ModelChoice::SpacySimilarity);
    let outcome = client.fetch_candidates().await;

    api_mock.assert();
    assert!(matches!(outcome, FetchOutcome::Failed { .. }));
    assert!(client.candidates().is_empty());
    Ok(())
}

#[tokio::test]
async fn test_transport_failure_clears_results() -> Result<()> {
    let listener = std::net::TcpListener::bind("127.0.0.1:0")?;
    let addr = listener.local_addr()?;
    drop(listener);

    let client = ScreeningClient::new(
        HttpScoringBackend::new(),
        EndpointTable::with_base_url(&format!("http://{}{}", addr, BASE_PATH)),
    );
    client.set_job_description("IT support specialist");

    let outcome = client.fetch_candidates().await;

    assert!(matches!(outcome, FetchOutcome::Failed { .. }));
    assert!(client.display_lines().is_empty());
    assert!(!client.is_loading());
    assert!(matches!(
        client.snapshot().status,
        ResultStatus::FetchFailed { .. }
    ));
    Ok(())
}

#[tokio::test]
async fn test_missing_top_candidates_is_empty_success() -> Result<()> {
    let server = MockServer::start();
    server.mock(|when, then| {
        when.method(POST).path(BASE_PATH);
        then.status(200).json_body(json!({"status": "ok"}));
    });

    let client = client_for(&server);
    let outcome = client.fetch_candidates().await;

    assert_eq!(outcome, FetchOutcome::Loaded { count: 0 });
    assert_eq!(client.snapshot().status, ResultStatus::Ready);
    assert!(client.candidates().is_empty());
    Ok(())
}

#[tokio::test]
async fn test_malformed_body_is_failure() -> Result<()> {
    let server = MockServer::start();
    server.mock(|when, then| {
        when.method(POST).path(BASE_PATH);
        then.status(200).body("not json");
    });

    let client = client_for(&server);
    let outcome = client.fetch_candidates().await;

    assert!(matches!(outcome, FetchOutcome::Failed { .. }));
    assert!(client.candidates().is_empty());
    Ok(())
}

#[tokio::test]
async fn test_clear_issues_no_request() -> Result<()> {
    let server = MockServer::start();
    let api_mock = server.mock(|when, then| {
        when.method(POST).path(BASE_PATH);
        then.status(200)
            .json_body(json!({"topCandidates": [{"Name": "Alice", "Score": 0.87}]}));
    });

    let client = client_for(&server);
    client.fetch_candidates().await;
    client.clear_candidates();
    client.clear_candidates();

    api_mock.assert_hits(1);
    assert!(client.display_lines().is_empty());
    assert_eq!(client.snapshot().status, ResultStatus::NotRequested);
    Ok(())
}

#[tokio::test]
async fn test_settings_from_config_file_drive_requests() -> Result<()> {
    let server = MockServer::start();
    let api_mock = server.mock(|when, then| {
        when.method(POST).path("/custom/xgb");
        then.status(200)
            .json_body(json!({"topCandidates": [{"Name": "Grace", "Score": 88.126}]}));
    });

    let mut file = NamedTempFile::new()?;
    write!(
        file,
        r#"
[endpoints]
base_url = "{base}"
xgboost = "{xgb}"

[client]
timeout_seconds = 5
default_model = "XGBoost"
"#,
        base = server.url(BASE_PATH),
        xgb = server.url("/custom/xgb"),
    )?;

    let config = TomlConfig::from_file(file.path())?;
    let settings = ScreeningSettings::from_toml(&config)?;
    let client = ScreeningClient::new(
        HttpScoringBackend::new().with_timeout(settings.timeout),
        settings.endpoints.clone(),
    )
    .with_model(settings.model);

    let outcome = client.fetch_candidates().await;

    api_mock.assert();
    assert_eq!(outcome, FetchOutcome::Loaded { count: 1 });
    assert_eq!(client.display_lines(), vec!["Grace - Score: 88.13"]);
    Ok(())
}
