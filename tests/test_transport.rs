mod common;

use std::time::{Duration, Instant};

use common::{tacos, weekly_list, TestEnvironment, SHORT_TIMEOUT};
use instacart_cli::{ClientConfig, ClientError, InstacartClient, TransportError};
use pretty_assertions::assert_eq;
use serde_json::json;
use tokio_util::sync::CancellationToken;
use wiremock::ResponseTemplate;

#[tokio::test]
async fn test_server_error_preserves_status_and_body() {
    common::init_test_logging();
    let env = TestEnvironment::new().await;
    env.respond_with(ResponseTemplate::new(500).set_body_string("  upstream exploded \n"))
        .await;

    let err = env
        .client
        .create_recipe(tacos(), &CancellationToken::new())
        .await
        .unwrap_err();

    assert_eq!(err.status(), Some(500));
    match err {
        ClientError::Transport(TransportError::Status { status, body }) => {
            assert_eq!(status, 500);
            assert_eq!(body, "upstream exploded");
        }
        other => panic!("expected status error, got {:?}", other),
    }
}

#[tokio::test]
async fn test_unauthorized_is_a_transport_error() {
    common::init_test_logging();
    let env = TestEnvironment::new().await;
    env.respond_with(ResponseTemplate::new(401).set_body_string("missing token"))
        .await;

    let err = env
        .client
        .create_shopping_list(weekly_list(), &CancellationToken::new())
        .await
        .unwrap_err();

    assert_eq!(err.to_string(), "instacart returned 401: missing token");
}

#[tokio::test]
async fn test_rpc_error_carries_code_and_message() {
    common::init_test_logging();
    let env = TestEnvironment::new().await;
    env.respond_with(ResponseTemplate::new(200).set_body_json(json!({
        "error": {"code": 42, "message": "bad"}
    })))
    .await;

    let err = env
        .client
        .create_recipe(tacos(), &CancellationToken::new())
        .await
        .unwrap_err();

    match err {
        ClientError::Rpc { code, message } => {
            assert_eq!(code, 42);
            assert_eq!(message, "bad");
        }
        other => panic!("expected rpc error, got {:?}", other),
    }
}

#[tokio::test]
async fn test_malformed_json_is_a_decode_error() {
    common::init_test_logging();
    let env = TestEnvironment::new().await;
    env.respond_with(ResponseTemplate::new(200).set_body_string("<html>oops</html>"))
        .await;

    let err = env
        .client
        .create_recipe(tacos(), &CancellationToken::new())
        .await
        .unwrap_err();

    assert!(matches!(err, ClientError::Decode(_)), "got {:?}", err);
}

#[tokio::test]
async fn test_null_result_yields_empty_url() {
    common::init_test_logging();
    let env = TestEnvironment::new().await;
    env.respond_with(ResponseTemplate::new(200).set_body_json(json!({
        "jsonrpc": "2.0",
        "result": null,
        "error": null
    })))
    .await;

    let url = env
        .client
        .create_recipe(tacos(), &CancellationToken::new())
        .await
        .unwrap();

    assert_eq!(url, "");
}

#[tokio::test]
async fn test_cancellation_returns_promptly() {
    common::init_test_logging();
    let env = TestEnvironment::new().await;
    env.respond_with(
        ResponseTemplate::new(200)
            .set_body_json(json!({"result": {"url": "https://instacart.com/r/late"}}))
            .set_delay(Duration::from_secs(10)),
    )
    .await;

    let cancel = CancellationToken::new();
    let trigger = cancel.clone();
    tokio::spawn(async move {
        tokio::time::sleep(Duration::from_millis(100)).await;
        trigger.cancel();
    });

    let started = Instant::now();
    let result = env.client.create_recipe(tacos(), &cancel).await;

    assert!(
        started.elapsed() < Duration::from_secs(2),
        "Cancelled call took {:?}",
        started.elapsed()
    );
    assert!(matches!(
        result,
        Err(ClientError::Transport(TransportError::Cancelled))
    ));
}

#[tokio::test]
async fn test_already_cancelled_token_skips_request() {
    common::init_test_logging();
    let env = TestEnvironment::new().await;
    env.respond_with_result(json!({"url": "https://instacart.com/r/1"})).await;

    let cancel = CancellationToken::new();
    cancel.cancel();

    let result = env.client.create_recipe(tacos(), &cancel).await;

    assert!(matches!(
        result,
        Err(ClientError::Transport(TransportError::Cancelled))
    ));
    assert!(env.received_bodies().await.is_empty());
}

#[tokio::test]
async fn test_slow_response_times_out() {
    common::init_test_logging();
    let env = TestEnvironment::with_config(|config| config.with_timeout(SHORT_TIMEOUT)).await;
    env.respond_with(
        ResponseTemplate::new(200)
            .set_body_json(json!({"result": {}}))
            .set_delay(Duration::from_secs(3)),
    )
    .await;

    let err = env
        .client
        .create_recipe(tacos(), &CancellationToken::new())
        .await
        .unwrap_err();

    assert!(
        matches!(err, ClientError::Transport(TransportError::Timeout(t)) if t == SHORT_TIMEOUT),
        "got {:?}",
        err
    );
}

#[tokio::test]
async fn test_connection_refused_is_a_network_error() {
    common::init_test_logging();
    let client = InstacartClient::new(
        ClientConfig::default().with_endpoint("http://127.0.0.1:1/mcp"),
    )
    .unwrap();

    let err = client
        .create_recipe(tacos(), &CancellationToken::new())
        .await
        .unwrap_err();

    assert!(
        matches!(err, ClientError::Transport(TransportError::Network(_))),
        "got {:?}",
        err
    );
}
