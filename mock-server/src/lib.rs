use axum::{
    http::{header, HeaderMap, Method, StatusCode, Uri},
    routing::any,
    Json, Router,
};
use serde::{Deserialize, Serialize};
use tokio::net::TcpListener;

/// What the server saw, sent back as the response body.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Echo {
    pub method: String,
    /// Path and query exactly as received.
    pub path: String,
    /// Every `content-type` value, in order.
    pub content_type: Vec<String>,
    /// `None` when the request carried no body bytes.
    pub body: Option<String>,
}

pub fn app() -> Router {
    Router::new()
        .route("/admin", any(echo))
        .route("/admin/{*rest}", any(echo))
        .route("/auth", any(echo))
        .route("/auth/{*rest}", any(echo))
}

pub async fn run(listener: TcpListener) -> Result<(), std::io::Error> {
    axum::serve(listener, app()).await
}

/// Reflects the request. A path segment `/status/<code>` right after the
/// prefix makes the server answer with that status instead of 200.
async fn echo(method: Method, uri: Uri, headers: HeaderMap, body: String) -> (StatusCode, Json<Echo>) {
    let echo = Echo {
        method: method.to_string(),
        path: uri
            .path_and_query()
            .map(|pq| pq.as_str().to_string())
            .unwrap_or_else(|| uri.path().to_string()),
        content_type: headers
            .get_all(header::CONTENT_TYPE)
            .iter()
            .map(|v| String::from_utf8_lossy(v.as_bytes()).into_owned())
            .collect(),
        body: (!body.is_empty()).then_some(body),
    };
    let status = forced_status(uri.path()).unwrap_or(StatusCode::OK);
    tracing::info!(method = %echo.method, path = %echo.path, status = status.as_u16(), "echo");
    (status, Json(echo))
}

fn forced_status(path: &str) -> Option<StatusCode> {
    let rest = path
        .strip_prefix("/admin")
        .or_else(|| path.strip_prefix("/auth"))?;
    let code = rest.strip_prefix("/status/")?.split('/').next()?;
    code.parse::<u16>().ok().and_then(|c| StatusCode::from_u16(c).ok())
}
