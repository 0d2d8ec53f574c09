//! HttpClient against a local fixture server

use pretty_assertions::assert_eq;
use selection_client::{ClientConfig, Endpoint, ErrorKind, FetchError, HttpClient, SelectionApi};
use selection_core::domino::join_tiles;
use selection_test_utils::{sample_users, FixtureServer, SAMPLE_PARAGRAPH, SAMPLE_TILES};
use std::io::Write;

#[tokio::test]
async fn test_random_strings_follow_config() {
    let server = FixtureServer::start();
    let client = HttpClient::new(server.config().with_random_strings(4, 6)).unwrap();

    let strings = client.random_strings().await.unwrap();
    assert_eq!(strings.len(), 4);
    assert!(strings.iter().all(|s| s.len() == 6));
    assert_eq!(strings[0], "ABCDEF");
}

#[tokio::test]
async fn test_default_batch_shape() {
    let server = FixtureServer::start();
    let client = HttpClient::new(server.config()).unwrap();

    let strings = client.random_strings().await.unwrap();
    assert_eq!(strings.len(), 10);
    assert!(strings.iter().all(|s| s.len() == 32));
}

#[tokio::test]
async fn test_users_decode() {
    let server = FixtureServer::start();
    let client = HttpClient::new(server.config()).unwrap();

    assert_eq!(client.users().await.unwrap(), sample_users());
}

#[tokio::test]
async fn test_paragraph_envelope() {
    let server = FixtureServer::start();
    let client = HttpClient::new(server.config()).unwrap();

    assert_eq!(client.paragraph().await.unwrap(), SAMPLE_PARAGRAPH);
}

#[tokio::test]
async fn test_domino_tiles_sent_with_auth() {
    let server = FixtureServer::start();
    let client = HttpClient::new(server.config()).unwrap();

    let tiles = client.domino_tiles().await.unwrap();
    assert_eq!(join_tiles(&tiles), SAMPLE_TILES);
}

#[tokio::test]
async fn test_missing_auth_is_not_ok() {
    let server = FixtureServer::start();
    let config = server
        .config()
        .with_dominoes(Endpoint::new(server.url("/domino/array-type-two")));
    let client = HttpClient::new(config).unwrap();

    let err = client.domino_tiles().await.unwrap_err();
    assert!(matches!(err, FetchError::NotOk { status: 401, .. }));
    assert_eq!(err.kind(), ErrorKind::Network);
    assert_eq!(err.user_message(), "Network response was not ok");
}

#[tokio::test]
async fn test_server_error_is_not_ok() {
    let server = FixtureServer::start();
    let config = server
        .config()
        .with_paragraph(Endpoint::new(server.url("/status/500")));
    let client = HttpClient::new(config).unwrap();

    let err = client.paragraph().await.unwrap_err();
    assert!(matches!(err, FetchError::NotOk { status: 500, .. }));
}

#[tokio::test]
async fn test_non_json_body_is_unknown() {
    let server = FixtureServer::start();
    let config = server
        .config()
        .with_paragraph(Endpoint::new(server.url("/malformed")));
    let client = HttpClient::new(config).unwrap();

    let err = client.paragraph().await.unwrap_err();
    assert!(matches!(err, FetchError::Malformed { .. }));
    assert_eq!(err.kind(), ErrorKind::Unknown);
    assert_eq!(err.user_message(), "An unknown error occurred");
}

#[tokio::test]
async fn test_envelope_error_flag_is_rejected() {
    let server = FixtureServer::start();
    let config = server
        .config()
        .with_dominoes(Endpoint::new(server.url("/domino/rejected")));
    let client = HttpClient::new(config).unwrap();

    let err = client.domino_tiles().await.unwrap_err();
    match err {
        FetchError::Rejected { message, .. } => assert_eq!(message, "quota exceeded"),
        other => panic!("unexpected error: {other}"),
    }
}

#[tokio::test]
async fn test_unreachable_host_is_transport_error() {
    let mut config = ClientConfig::new().with_timeout(2);
    config.users = Endpoint::new("http://127.0.0.1:1/users");
    let client = HttpClient::new(config).unwrap();

    let err = client.users().await.unwrap_err();
    assert!(matches!(err, FetchError::Transport { .. }));
    assert_eq!(err.kind(), ErrorKind::Network);
}

#[test]
fn test_config_file_loads() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    writeln!(
        file,
        "timeout_secs = 7\n\n[random_strings]\ncount = 2\nlength = 8\n\n[users]\nurl = \"http://localhost:1/users\""
    )
    .unwrap();

    let config = ClientConfig::load(file.path()).unwrap();
    assert_eq!(config.timeout_secs, 7);
    assert_eq!(config.random_strings.count, 2);
    assert_eq!(config.users.url, "http://localhost:1/users");
    assert!(HttpClient::new(config).is_ok());
}

#[test]
fn test_missing_config_file() {
    let err = ClientConfig::load("/nonexistent/selection.toml").unwrap_err();
    assert!(err.to_string().contains("/nonexistent/selection.toml"));
}
