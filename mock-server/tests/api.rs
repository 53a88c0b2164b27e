use axum::http::{self, Request, StatusCode};
use http_body_util::BodyExt;
use mock_server::{app, Echo};
use tower::ServiceExt;

async fn body_json<T: serde::de::DeserializeOwned>(response: axum::response::Response) -> T {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}

async fn body_bytes(response: axum::response::Response) -> bytes::Bytes {
    response.into_body().collect().await.unwrap().to_bytes()
}

fn json_request(method: &str, uri: &str, body: &str) -> Request<String> {
    Request::builder()
        .method(method)
        .uri(uri)
        .header(http::header::CONTENT_TYPE, "application/json")
        .body(body.to_string())
        .unwrap()
}

// --- admin ---

#[tokio::test]
async fn admin_get_echoes_request_without_body() {
    let resp = app().oneshot(json_request("GET", "/admin/users", "")).await.unwrap();

    assert_eq!(resp.status(), StatusCode::OK);
    let echo: Echo = body_json(resp).await;
    assert_eq!(echo.method, "GET");
    assert_eq!(echo.path, "/admin/users");
    assert_eq!(echo.content_type, vec!["application/json"]);
    assert!(echo.body.is_none());
}

#[tokio::test]
async fn admin_patch_echoes_body() {
    let resp = app()
        .oneshot(json_request("PATCH", "/admin/flag/1", r#"{"enabled":true}"#))
        .await
        .unwrap();

    assert_eq!(resp.status(), StatusCode::OK);
    let echo: Echo = body_json(resp).await;
    assert_eq!(echo.method, "PATCH");
    assert_eq!(echo.body.as_deref(), Some(r#"{"enabled":true}"#));
}

#[tokio::test]
async fn query_string_is_kept() {
    let resp = app()
        .oneshot(json_request("GET", "/admin/users?state=US_XX", ""))
        .await
        .unwrap();

    let echo: Echo = body_json(resp).await;
    assert_eq!(echo.path, "/admin/users?state=US_XX");
}

// --- auth ---

#[tokio::test]
async fn auth_delete_without_body() {
    let resp = app()
        .oneshot(
            Request::builder()
                .method("DELETE")
                .uri("/auth/users/5")
                .body(String::new())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(resp.status(), StatusCode::OK);
    let echo: Echo = body_json(resp).await;
    assert_eq!(echo.method, "DELETE");
    assert!(echo.content_type.is_empty());
    assert!(echo.body.is_none());
}

#[tokio::test]
async fn auth_root_is_routed() {
    let resp = app().oneshot(json_request("PUT", "/auth", "{}")).await.unwrap();

    assert_eq!(resp.status(), StatusCode::OK);
    let echo: Echo = body_json(resp).await;
    assert_eq!(echo.path, "/auth");
    assert_eq!(echo.body.as_deref(), Some("{}"));
}

// --- status and routing ---

#[tokio::test]
async fn forced_status_is_returned_with_echo() {
    let resp = app()
        .oneshot(json_request("POST", "/auth/status/409", r#"{"email":"a@b.com"}"#))
        .await
        .unwrap();

    assert_eq!(resp.status(), StatusCode::CONFLICT);
    let echo: Echo = body_json(resp).await;
    assert_eq!(echo.path, "/auth/status/409");
}

#[tokio::test]
async fn unknown_prefix_returns_404() {
    let resp = app().oneshot(json_request("GET", "/reports", "")).await.unwrap();

    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
    assert!(body_bytes(resp).await.is_empty());
}
