/*
[INPUT]:  Mock task store responses
[OUTPUT]: Test results for the board synchronizer
[POS]:    Integration tests - synchronizer behavior against a mock store
[UPDATE]: When adding new synchronization scenarios
*/

use taskboard_adapter::{ClientConfig, TaskStoreClient};
use taskboard_cli::TaskBoard;
use wiremock::matchers::{body_json, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn client_for(server: &MockServer) -> TaskStoreClient {
    TaskStoreClient::with_config_and_base_url(ClientConfig::default(), &server.uri())
        .expect("client init")
}

fn task_json(id: i64, title: &str, completed: bool) -> serde_json::Value {
    serde_json::json!({
        "id": id,
        "title": title,
        "completed": completed,
        "created_at": "2024-01-01T00:00:00Z"
    })
}

async fn mount_list(server: &MockServer, tasks: serde_json::Value) {
    Mock::given(method("GET"))
        .and(path("/api/tasks"))
        .respond_with(ResponseTemplate::new(200).set_body_json(tasks))
        .mount(server)
        .await;
}

#[tokio::test]
async fn test_initial_load_mirrors_store_order() {
    let server = MockServer::start().await;
    mount_list(
        &server,
        serde_json::json!([
            task_json(3, "newest", false),
            task_json(2, "middle", true),
            task_json(1, "oldest", false),
        ]),
    )
    .await;

    let board = TaskBoard::connect(client_for(&server)).await;

    let ids: Vec<i64> = board.tasks().iter().map(|task| task.id).collect();
    assert_eq!(ids, vec![3, 2, 1]);
    assert!(!board.pending());
    assert_eq!(board.last_error(), None);
}

#[tokio::test]
async fn test_load_failure_keeps_stale_cache() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api/tasks"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(serde_json::json!([task_json(1, "keep me", false)])),
        )
        .up_to_n_times(1)
        .mount(&server)
        .await;

    Mock::given(method("GET"))
        .and(path("/api/tasks"))
        .respond_with(
            ResponseTemplate::new(500)
                .set_body_json(serde_json::json!({"error": "failed to fetch tasks"})),
        )
        .mount(&server)
        .await;

    let mut board = TaskBoard::connect(client_for(&server)).await;
    assert_eq!(board.last_error(), None);

    board.load().await;

    assert_eq!(board.tasks().len(), 1);
    assert_eq!(board.tasks()[0].title, "keep me");
    assert_eq!(board.last_error(), Some("failed to fetch tasks"));
    assert!(!board.pending());
}

#[tokio::test]
async fn test_blank_draft_makes_no_request() {
    let server = MockServer::start().await;
    mount_list(&server, serde_json::json!([])).await;

    Mock::given(method("POST"))
        .and(path("/api/tasks"))
        .respond_with(ResponseTemplate::new(201))
        .expect(0)
        .mount(&server)
        .await;

    let mut board = TaskBoard::connect(client_for(&server)).await;
    board.set_draft_title("   ");
    board.submit_draft().await;

    assert!(board.tasks().is_empty());
    assert_eq!(board.last_error(), None);
    // expect(0) on the POST mock is verified when the server drops
}

#[tokio::test]
async fn test_create_prepends_and_clears_draft() {
    let server = MockServer::start().await;
    mount_list(&server, serde_json::json!([task_json(1, "existing", false)])).await;

    Mock::given(method("POST"))
        .and(path("/api/tasks"))
        .and(body_json(serde_json::json!({"title": "Buy milk"})))
        .respond_with(ResponseTemplate::new(201).set_body_json(serde_json::json!({
            "id": 7,
            "title": "Buy milk",
            "completed": false,
            "created_at": "2024-01-01T00:00:00Z"
        })))
        .expect(1)
        .mount(&server)
        .await;

    let mut board = TaskBoard::connect(client_for(&server)).await;
    board.set_draft_title("  Buy milk  ");
    board.submit_draft().await;

    assert_eq!(board.tasks()[0].id, 7);
    assert_eq!(board.tasks()[0].title, "Buy milk");
    assert_eq!(board.tasks()[1].id, 1);
    assert_eq!(board.draft_title(), "");
    assert_eq!(board.last_error(), None);
}

#[tokio::test]
async fn test_toggle_adopts_store_record_wholesale() {
    let server = MockServer::start().await;
    mount_list(
        &server,
        serde_json::json!([task_json(3, "water plants", false), task_json(4, "other", false)]),
    )
    .await;

    Mock::given(method("PUT"))
        .and(path("/api/tasks/3"))
        .and(body_json(serde_json::json!({"completed": true})))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "id": 3,
            "title": "water plants (edited elsewhere)",
            "completed": true,
            "created_at": "2024-01-01T00:00:00Z"
        })))
        .expect(1)
        .mount(&server)
        .await;

    let mut board = TaskBoard::connect(client_for(&server)).await;
    board.toggle(3).await;

    assert!(board.tasks()[0].completed);
    // full replace: the store's concurrent title edit is adopted too
    assert_eq!(board.tasks()[0].title, "water plants (edited elsewhere)");
    assert!(!board.tasks()[1].completed);
    assert_eq!(board.last_error(), None);
}

#[tokio::test]
async fn test_toggle_unknown_id_makes_no_request() {
    let server = MockServer::start().await;
    mount_list(&server, serde_json::json!([task_json(1, "only", false)])).await;

    Mock::given(method("PUT"))
        .respond_with(ResponseTemplate::new(200))
        .expect(0)
        .mount(&server)
        .await;

    let mut board = TaskBoard::connect(client_for(&server)).await;
    board.toggle(99).await;

    assert_eq!(board.tasks().len(), 1);
    assert_eq!(board.last_error(), None);
}

#[tokio::test]
async fn test_delete_removes_entry_preserving_order() {
    let server = MockServer::start().await;
    mount_list(
        &server,
        serde_json::json!([
            task_json(4, "a", false),
            task_json(5, "b", false),
            task_json(6, "c", false),
        ]),
    )
    .await;

    Mock::given(method("DELETE"))
        .and(path("/api/tasks/5"))
        .respond_with(ResponseTemplate::new(204))
        .expect(1)
        .mount(&server)
        .await;

    let mut board = TaskBoard::connect(client_for(&server)).await;
    board.delete(5).await;

    let ids: Vec<i64> = board.tasks().iter().map(|task| task.id).collect();
    assert_eq!(ids, vec![4, 6]);
    assert_eq!(board.last_error(), None);
}

#[tokio::test]
async fn test_load_twice_is_idempotent() {
    let server = MockServer::start().await;
    mount_list(
        &server,
        serde_json::json!([task_json(2, "b", true), task_json(1, "a", false)]),
    )
    .await;

    let mut board = TaskBoard::connect(client_for(&server)).await;
    let first = board.state().clone();

    board.load().await;

    assert_eq!(board.state(), &first);
}

#[tokio::test]
async fn test_create_failure_surfaces_store_message() {
    let server = MockServer::start().await;
    mount_list(&server, serde_json::json!([task_json(1, "existing", false)])).await;

    Mock::given(method("POST"))
        .and(path("/api/tasks"))
        .respond_with(
            ResponseTemplate::new(400).set_body_json(serde_json::json!({"error": "invalid input"})),
        )
        .mount(&server)
        .await;

    let mut board = TaskBoard::connect(client_for(&server)).await;
    board.set_draft_title("x".repeat(300));
    board.submit_draft().await;

    assert_eq!(board.tasks().len(), 1);
    assert_eq!(board.last_error(), Some("invalid input"));
    // failed submissions keep the draft for the user to retry
    assert!(!board.draft_title().is_empty());
}

#[tokio::test]
async fn test_transport_failure_uses_fallback_message() {
    // Bind then drop, so nothing is listening on the port.
    let listener = std::net::TcpListener::bind("127.0.0.1:0").expect("bind");
    let addr = listener.local_addr().expect("addr");
    drop(listener);

    let client = TaskStoreClient::with_config_and_base_url(
        ClientConfig::default(),
        &format!("http://{addr}"),
    )
    .expect("client init");

    let board = TaskBoard::connect(client).await;

    assert!(board.tasks().is_empty());
    assert_eq!(board.last_error(), Some("Failed to load tasks"));
    assert!(!board.pending());
}
