//! In-process upstream server for exercising the executor and the web flow
//! over real sockets.

use std::net::SocketAddr;
use std::time::Duration;

use axum::{
    Json, Router,
    extract::Path,
    http::{HeaderMap, Method, StatusCode, Uri, header},
    response::{IntoResponse, Redirect},
    routing::{any, get},
};
use serde_json::json;
use tokio::net::TcpListener;

pub struct Upstream {
    addr: SocketAddr,
}

impl Upstream {
    /// Bind to an ephemeral port and serve in the background.
    pub async fn spawn() -> Self {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        tokio::spawn(async move { axum::serve(listener, router()).await });
        Self { addr }
    }

    pub fn url(&self, path: &str) -> String {
        format!("http://{}{}", self.addr, path)
    }
}

/// A URL on a port nothing listens on.
pub fn closed_port_url() -> String {
    let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);
    format!("http://{addr}/")
}

fn router() -> Router {
    Router::new()
        .route("/json", get(json_body))
        .route("/text", get(text_body))
        .route("/echo", any(echo))
        .route("/status/{code}", get(status))
        .route("/redirect/{hops}", get(redirect))
        .route("/slow", get(slow))
}

async fn json_body() -> impl IntoResponse {
    ([(header::CONTENT_TYPE, "application/json")], r#"{"a":1}"#)
}

async fn text_body() -> impl IntoResponse {
    ([(header::CONTENT_TYPE, "text/plain")], "hello <world>")
}

async fn echo(method: Method, uri: Uri, headers: HeaderMap, body: String) -> Json<serde_json::Value> {
    let headers: Vec<(String, String)> = headers
        .iter()
        .map(|(name, value)| {
            (
                name.to_string(),
                value.to_str().unwrap_or_default().to_string(),
            )
        })
        .collect();
    Json(json!({
        "method": method.as_str(),
        "query": uri.query(),
        "headers": headers,
        "body": body,
    }))
}

async fn status(Path(code): Path<u16>) -> StatusCode {
    StatusCode::from_u16(code).unwrap_or(StatusCode::BAD_REQUEST)
}

async fn redirect(Path(hops): Path<u32>) -> axum::response::Response {
    if hops == 0 {
        "arrived".into_response()
    } else {
        Redirect::to(&format!("/redirect/{}", hops - 1)).into_response()
    }
}

async fn slow() -> &'static str {
    tokio::time::sleep(Duration::from_secs(2)).await;
    "late"
}
