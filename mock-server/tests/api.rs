use axum::http::{self, Request, StatusCode};
use http_body_util::BodyExt;
use serde_json::Value;
use taskboard_mock_server::{app, app_with, Tables, Todo, User};
use tower::ServiceExt;

async fn body_json<T: serde::de::DeserializeOwned>(response: axum::response::Response) -> T {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}

async fn detail(response: axum::response::Response) -> String {
    let body: Value = body_json(response).await;
    body["detail"].as_str().unwrap().to_string()
}

fn get(uri: &str) -> Request<String> {
    Request::builder().uri(uri).body(String::new()).unwrap()
}

fn json_request(method: &str, uri: &str, body: &str) -> Request<String> {
    Request::builder()
        .method(method)
        .uri(uri)
        .header(http::header::CONTENT_TYPE, "application/json")
        .body(body.to_string())
        .unwrap()
}

// --- service ---

#[tokio::test]
async fn health_under_both_prefixes() {
    for uri in ["/api/health", "/api/python/health"] {
        let resp = app().oneshot(get(uri)).await.unwrap();
        assert_eq!(resp.status(), StatusCode::OK, "{uri}");
        let body: Value = body_json(resp).await;
        assert_eq!(body["status"], "healthy");
    }
}

#[tokio::test]
async fn root_lists_endpoints() {
    let resp = app().oneshot(get("/api")).await.unwrap();
    assert_eq!(resp.status(), StatusCode::OK);
    let body: Value = body_json(resp).await;
    assert_eq!(body["endpoints"]["todos"], "/api/todos");
}

// --- users ---

#[tokio::test]
async fn list_users_empty() {
    let resp = app().oneshot(get("/api/python/users")).await.unwrap();
    assert_eq!(resp.status(), StatusCode::OK);
    let users: Vec<User> = body_json(resp).await;
    assert!(users.is_empty());
}

#[tokio::test]
async fn seeded_users_in_insertion_order() {
    let resp = app_with(Tables::seeded()).oneshot(get("/api/users")).await.unwrap();
    let users: Vec<User> = body_json(resp).await;
    let names: Vec<_> = users.iter().map(|u| u.name.as_str()).collect();
    assert_eq!(names, ["John Doe", "Jane Smith", "Bob Johnson"]);
}

#[tokio::test]
async fn create_user_returns_201() {
    let resp = app()
        .oneshot(json_request(
            "POST",
            "/api/python/users",
            r#"{"name":"Ana","email":"ana@x.com"}"#,
        ))
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::CREATED);
    let user: User = body_json(resp).await;
    assert_eq!(user.id, 1);
    assert_eq!(user.email, "ana@x.com");
    assert!(!user.created_at.is_empty());
}

#[tokio::test]
async fn create_user_duplicate_email_returns_detail() {
    let resp = app_with(Tables::seeded())
        .oneshot(json_request(
            "POST",
            "/api/python/users",
            r#"{"name":"John Again","email":"john@example.com"}"#,
        ))
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    assert_eq!(detail(resp).await, "Email already exists");
}

#[tokio::test]
async fn create_user_invalid_email_returns_400() {
    let resp = app()
        .oneshot(json_request(
            "POST",
            "/api/users",
            r#"{"name":"Ana","email":"not-an-email"}"#,
        ))
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    assert!(detail(resp).await.contains("Invalid email format"));
}

#[tokio::test]
async fn create_user_malformed_json_returns_400_with_detail() {
    let resp = app()
        .oneshot(json_request("POST", "/api/users", r#"{"name":1}"#))
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    assert!(detail(resp).await.starts_with("Validation error"));
}

#[tokio::test]
async fn get_user_not_found() {
    let resp = app().oneshot(get("/api/users/9")).await.unwrap();
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
    assert_eq!(detail(resp).await, "User not found");
}

#[tokio::test]
async fn update_user_rejects_email_of_another_user() {
    let resp = app_with(Tables::seeded())
        .oneshot(json_request(
            "PUT",
            "/api/users/2",
            r#"{"email":"john@example.com"}"#,
        ))
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn user_todos_filters_by_owner() {
    let resp = app_with(Tables::seeded())
        .oneshot(get("/api/users/1/todos"))
        .await
        .unwrap();
    let todos: Vec<Todo> = body_json(resp).await;
    assert_eq!(todos.len(), 2);
    assert!(todos.iter().all(|t| t.user_id == 1));
}

// --- todos ---

#[tokio::test]
async fn create_todo_defaults_completed_false() {
    let resp = app_with(Tables::seeded())
        .oneshot(json_request(
            "POST",
            "/api/python/todos",
            r#"{"title":"Ship","description":"Release","user_id":3}"#,
        ))
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::CREATED);
    let todo: Todo = body_json(resp).await;
    assert_eq!(todo.id, 5);
    assert!(!todo.completed);
    assert!(todo.updated_at.is_none());
}

#[tokio::test]
async fn create_todo_for_unknown_user_returns_400() {
    let resp = app()
        .oneshot(json_request(
            "POST",
            "/api/python/todos",
            r#"{"title":"Ship","description":"Release","user_id":3}"#,
        ))
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    assert_eq!(detail(resp).await, "User not found");
}

#[tokio::test]
async fn list_todos_filters() {
    let seeded = app_with(Tables::seeded());

    let resp = seeded.clone().oneshot(get("/api/todos?completed=true")).await.unwrap();
    let todos: Vec<Todo> = body_json(resp).await;
    assert_eq!(todos.len(), 1);
    assert_eq!(todos[0].id, 1);

    let resp = seeded.clone().oneshot(get("/api/todos?user_id=2&completed=no")).await.unwrap();
    let todos: Vec<Todo> = body_json(resp).await;
    assert_eq!(todos.len(), 1);
    assert_eq!(todos[0].id, 3);

    let resp = seeded.oneshot(get("/api/todos?user_id=abc")).await.unwrap();
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    assert_eq!(detail(resp).await, "Invalid user_id parameter");
}

#[tokio::test]
async fn update_todo_not_found() {
    let resp = app()
        .oneshot(json_request("PUT", "/api/python/todos/5", r#"{"completed":true}"#))
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
    assert_eq!(detail(resp).await, "Todo not found");
}

#[tokio::test]
async fn get_todo_bad_id_returns_400() {
    let resp = app().oneshot(get("/api/todos/not-a-number")).await.unwrap();
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    assert!(detail(resp).await.contains("not-a-number"));
}

#[tokio::test]
async fn bad_id_rejections_carry_detail_on_every_id_route() {
    let requests = [
        get("/api/python/todos/abc"),
        get("/api/python/users/abc"),
        get("/api/python/users/abc/todos"),
        json_request("PUT", "/api/python/todos/abc", r#"{"completed":true}"#),
        json_request("PUT", "/api/python/users/abc", r#"{"name":"Ana"}"#),
    ];
    for req in requests {
        let uri = req.uri().to_string();
        let resp = app().oneshot(req).await.unwrap();
        assert_eq!(resp.status(), StatusCode::BAD_REQUEST, "{uri}");
        assert!(!detail(resp).await.is_empty(), "{uri}");
    }
}

#[tokio::test]
async fn unknown_route_returns_detail_404() {
    for uri in ["/api/python/projects", "/nowhere"] {
        let resp = app().oneshot(get(uri)).await.unwrap();
        assert_eq!(resp.status(), StatusCode::NOT_FOUND, "{uri}");
        assert_eq!(detail(resp).await, "Route not found", "{uri}");
    }
}

#[tokio::test]
async fn delete_todo_not_found() {
    let resp = app()
        .oneshot(
            Request::builder()
                .method("DELETE")
                .uri("/api/todos/1")
                .body(String::new())
                .unwrap(),
        )
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
}

// --- full lifecycle ---

#[tokio::test]
async fn todo_lifecycle_across_prefixes() {
    use tower::Service;

    let mut app = app_with(Tables::seeded()).into_service();

    // create through the UI prefix
    let resp = ServiceExt::ready(&mut app)
        .await
        .unwrap()
        .call(json_request(
            "POST",
            "/api/python/todos",
            r#"{"title":"Walk dog","description":"Around the block","user_id":2}"#,
        ))
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::CREATED);
    let created: Todo = body_json(resp).await;
    let id = created.id;

    // visible through the backend prefix, appended last
    let resp = ServiceExt::ready(&mut app)
        .await
        .unwrap()
        .call(get("/api/todos"))
        .await
        .unwrap();
    let todos: Vec<Todo> = body_json(resp).await;
    assert_eq!(todos.len(), 5);
    assert_eq!(todos.last().unwrap().id, id);

    // partial update: only completed
    let resp = ServiceExt::ready(&mut app)
        .await
        .unwrap()
        .call(json_request(
            "PUT",
            &format!("/api/python/todos/{id}"),
            r#"{"completed":true}"#,
        ))
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::OK);
    let updated: Todo = body_json(resp).await;
    assert_eq!(updated.title, "Walk dog"); // unchanged
    assert!(updated.completed);
    assert!(updated.updated_at.is_some());

    // reassign to an unknown user is rejected
    let resp = ServiceExt::ready(&mut app)
        .await
        .unwrap()
        .call(json_request(
            "PUT",
            &format!("/api/todos/{id}"),
            r#"{"user_id":99}"#,
        ))
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);

    // delete
    let resp = ServiceExt::ready(&mut app)
        .await
        .unwrap()
        .call(
            Request::builder()
                .method("DELETE")
                .uri(&format!("/api/todos/{id}"))
                .body(String::new())
                .unwrap(),
        )
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::OK);
    let body: Value = body_json(resp).await;
    assert_eq!(body["message"], "Todo deleted successfully");

    // get after delete: 404
    let resp = ServiceExt::ready(&mut app)
        .await
        .unwrap()
        .call(get(&format!("/api/python/todos/{id}")))
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
}
