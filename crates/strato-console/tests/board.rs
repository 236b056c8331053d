use httpmock::Method::GET;
use httpmock::MockServer;

use strato_common::Credentials;
use strato_console::{ApiClient, ConsoleState, ModelBoard};

fn api(server: &MockServer) -> ApiClient {
    ApiClient::new(server.base_url(), Credentials::default())
}

#[tokio::test]
async fn refresh_partitions_the_instance_map() {
    let server = MockServer::start_async().await;
    let list = server.mock(|when, then| {
        when.method(GET).path("/v1/models/");
        then.status(200)
            .header("content-type", "application/json")
            .body(
                r#"{
                    "m1": {"model_type": "LLM", "model_name": "x"},
                    "m2": {"model_type": "embedding", "model_name": "bge"},
                    "m3": {"model_type": "audio", "model_name": "whisper"}
                }"#,
            );
    });

    let state = ConsoleState::new();
    let board = ModelBoard::new(state.clone());
    board.refresh(&api(&server)).await;

    list.assert();
    let lists = board.lists();
    assert_eq!(lists.llm.len(), 1);
    assert_eq!(lists.llm[0].model_uid, "m1");
    assert_eq!(lists.embedding.len(), 1);
    assert_eq!(lists.embedding[0].model_uid, "m2");
    // No board category for audio.
    assert!(lists.rerank.is_empty());
    assert!(lists.image.is_empty());
    assert!(!state.is_busy());
}

#[tokio::test]
async fn refresh_failure_keeps_the_previous_lists() {
    let server = MockServer::start_async().await;
    let mut ok = server.mock(|when, then| {
        when.method(GET).path("/v1/models/");
        then.status(200)
            .header("content-type", "application/json")
            .body(r#"{"m1": {"model_type": "LLM", "model_name": "x"}}"#);
    });

    let state = ConsoleState::new();
    let board = ModelBoard::new(state.clone());
    let client = api(&server);
    board.refresh(&client).await;
    assert_eq!(board.lists().llm.len(), 1);

    ok.delete();
    server.mock(|when, then| {
        when.method(GET).path("/v1/models/");
        then.status(500);
    });

    // Never errors; the stale list stays on display.
    board.refresh(&client).await;
    let lists = board.lists();
    assert_eq!(lists.llm.len(), 1);
    assert_eq!(lists.llm[0].model_uid, "m1");
    assert!(!state.is_busy());
}

#[tokio::test]
async fn refresh_failure_on_malformed_body_is_swallowed() {
    let server = MockServer::start_async().await;
    server.mock(|when, then| {
        when.method(GET).path("/v1/models/");
        then.status(200).body("not json");
    });

    let state = ConsoleState::new();
    let board = ModelBoard::new(state.clone());
    board.refresh(&api(&server)).await;

    assert_eq!(board.lists(), Default::default());
    assert!(!state.is_busy());
}

#[tokio::test]
async fn refresh_is_skipped_while_another_refresh_is_in_flight() {
    let server = MockServer::start_async().await;
    let list = server.mock(|when, then| {
        when.method(GET).path("/v1/models/");
        then.status(200)
            .header("content-type", "application/json")
            .body("{}");
    });

    let state = ConsoleState::new();
    let board = ModelBoard::new(state.clone());
    let guard = state.try_begin_refresh().unwrap();
    board.refresh(&api(&server)).await;
    assert_eq!(list.hits(), 0);
    drop(guard);
}
