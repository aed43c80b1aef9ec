use std::time::Duration;

use coze::{CozeClient, Error, RetryConfig, TranscriptResult, TranscriptSource, WorkflowRequest};
use indoc::indoc;
use wiremock::matchers::{body_json, header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

const WORKFLOW_PATH: &str = "/v1/workflow/stream_run";

fn fast_retries(max_retries: usize) -> RetryConfig {
    RetryConfig {
        max_retries,
        base_delay: Duration::from_millis(1),
        max_delay: Duration::from_millis(5),
    }
}

fn client_for(server: &MockServer) -> CozeClient {
    CozeClient::builder()
        .api_base(format!("{}{WORKFLOW_PATH}", server.uri()))
        .api_key("test-key")
        .workflow_id("wf-1")
        .retry_config(fast_retries(3))
        .build()
        .unwrap()
}

fn event_stream(body: &str) -> ResponseTemplate {
    ResponseTemplate::new(200).set_body_raw(body, "text/event-stream")
}

const MESSAGE_STREAM: &str = indoc! {r#"
    id: 0
    event: Message
    data: {"content":"{\"output\":\"hello world\"}","node_title":"End"}

    id: 1
    event: Done
    data: {"debug_url":"https://www.coze.cn/work_flow?execute_id=1"}
"#};

#[tokio::test]
async fn stream_message_is_decoded() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path(WORKFLOW_PATH))
        .and(header("authorization", "Bearer test-key"))
        .and(body_json(serde_json::json!({
            "workflow_id": "wf-1",
            "parameters": { "input": "https://xhslink.com/a/1" }
        })))
        .respond_with(event_stream(MESSAGE_STREAM))
        .expect(1)
        .mount(&server)
        .await;

    let result = client_for(&server)
        .fetch("https://xhslink.com/a/1", 3)
        .await
        .unwrap();

    assert_eq!(
        result,
        TranscriptResult {
            text: "hello world".to_string(),
            source: TranscriptSource::Stream,
        }
    );
}

#[tokio::test]
async fn full_body_document_is_used_as_fallback() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path(WORKFLOW_PATH))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(serde_json::json!({ "data": { "content": "hi there" } })),
        )
        .expect(1)
        .mount(&server)
        .await;

    let result = client_for(&server).fetch("input", 3).await.unwrap();

    assert_eq!(result.text, "hi there");
    assert_eq!(result.source, TranscriptSource::FullBody);
}

#[tokio::test]
async fn extra_parameters_are_sent() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path(WORKFLOW_PATH))
        .and(body_json(serde_json::json!({
            "workflow_id": "wf-2",
            "parameters": { "input": "script", "video_url": "https://example.org/v" }
        })))
        .respond_with(event_stream(MESSAGE_STREAM))
        .expect(1)
        .mount(&server)
        .await;

    let request =
        WorkflowRequest::new("wf-2", "script").parameter("video_url", "https://example.org/v");
    let result = client_for(&server).run(&request, 0).await.unwrap();

    assert_eq!(result.text, "hello world");
}

#[tokio::test]
async fn rate_limited_calls_are_retried() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path(WORKFLOW_PATH))
        .respond_with(ResponseTemplate::new(429).set_body_json(serde_json::json!({ "msg": "slow down" })))
        .up_to_n_times(2)
        .with_priority(1)
        .expect(2)
        .mount(&server)
        .await;

    Mock::given(method("POST"))
        .and(path(WORKFLOW_PATH))
        .respond_with(event_stream(MESSAGE_STREAM))
        .expect(1)
        .mount(&server)
        .await;

    let result = client_for(&server).fetch("input", 3).await.unwrap();
    assert_eq!(result.text, "hello world");
}

#[tokio::test]
async fn rate_limit_exhausts_retries() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path(WORKFLOW_PATH))
        .respond_with(ResponseTemplate::new(429).set_body_json(serde_json::json!({ "msg": "slow down" })))
        .expect(3)
        .mount(&server)
        .await;

    let err = client_for(&server).fetch("input", 2).await.unwrap_err();

    match err {
        Error::RemoteCall { status, message } => {
            assert_eq!(status, Some(429));
            assert_eq!(message, "slow down");
        }
        other => panic!("unexpected error: {other:?}"),
    }
}

#[tokio::test]
async fn client_errors_fail_without_retry() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path(WORKFLOW_PATH))
        .respond_with(
            ResponseTemplate::new(401)
                .set_body_json(serde_json::json!({ "code": 4100, "msg": "invalid token" })),
        )
        .expect(1)
        .mount(&server)
        .await;

    let err = client_for(&server).fetch("input", 3).await.unwrap_err();

    assert_eq!(err.status(), Some(401));
    assert_eq!(
        err.to_string(),
        "workflow call failed with status 401: invalid token"
    );
}

#[tokio::test]
async fn server_errors_fail_without_retry() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path(WORKFLOW_PATH))
        .respond_with(ResponseTemplate::new(502).set_body_string("Bad Gateway"))
        .expect(1)
        .mount(&server)
        .await;

    let err = client_for(&server).fetch("input", 3).await.unwrap_err();

    assert_eq!(err.status(), Some(502));
}

#[tokio::test]
async fn stream_without_text_is_empty_result() {
    let server = MockServer::start().await;

    let body = indoc! {r#"
        event: Message
        data: {"content":"{\"node\":\"start\"}"}

        event: Done
        data: {}
    "#};

    Mock::given(method("POST"))
        .and(path(WORKFLOW_PATH))
        .respond_with(event_stream(body))
        .expect(1)
        .mount(&server)
        .await;

    let err = client_for(&server).fetch("input", 3).await.unwrap_err();
    assert!(matches!(err, Error::EmptyResult));
}

#[tokio::test]
async fn empty_body_is_empty_result() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path(WORKFLOW_PATH))
        .respond_with(ResponseTemplate::new(200))
        .expect(1)
        .mount(&server)
        .await;

    let err = client_for(&server).fetch("input", 3).await.unwrap_err();
    assert!(matches!(err, Error::EmptyResult));
}

#[tokio::test]
async fn transport_faults_surface_after_retries() {
    let client = CozeClient::builder()
        .api_base(format!("http://127.0.0.1:1{WORKFLOW_PATH}"))
        .api_key("test-key")
        .workflow_id("wf-1")
        .retry_config(fast_retries(1))
        .timeout(Duration::from_secs(2))
        .build()
        .unwrap();

    let err = client.fetch("input", 1).await.unwrap_err();

    assert!(matches!(err, Error::RemoteCall { status: None, .. }));
}
