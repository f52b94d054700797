//! HTTP Transport
//!
//! The seam between the client and the network. `ReqwestTransport` goes
//! through reqwest, which uses `fetch` when compiled to wasm32.

use async_trait::async_trait;

use crate::error::{ApiError, ApiResult};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Method {
    Get,
    Post,
    Put,
    Delete,
}

impl Method {
    pub fn as_str(&self) -> &'static str {
        match self {
            Method::Get => "GET",
            Method::Post => "POST",
            Method::Put => "PUT",
            Method::Delete => "DELETE",
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct HttpRequest {
    pub method: Method,
    pub url: String,
    /// Bearer token attached by the client, if the session has one
    pub bearer: Option<String>,
    pub body: Option<serde_json::Value>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HttpResponse {
    pub status: u16,
    pub body: String,
}

impl HttpResponse {
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

/// Sends one request and hands back the raw status and body.
///
/// Futures are not `Send`: in the browser everything runs on one thread.
#[async_trait(?Send)]
pub trait Transport {
    async fn send(&self, request: HttpRequest) -> ApiResult<HttpResponse>;
}

#[derive(Debug, Clone, Default)]
pub struct ReqwestTransport {
    client: reqwest::Client,
}

impl ReqwestTransport {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_client(client: reqwest::Client) -> Self {
        Self { client }
    }
}

#[async_trait(?Send)]
impl Transport for ReqwestTransport {
    async fn send(&self, request: HttpRequest) -> ApiResult<HttpResponse> {
        let method = match request.method {
            Method::Get => reqwest::Method::GET,
            Method::Post => reqwest::Method::POST,
            Method::Put => reqwest::Method::PUT,
            Method::Delete => reqwest::Method::DELETE,
        };

        let mut builder = self.client.request(method, &request.url);
        if let Some(token) = &request.bearer {
            builder = builder.bearer_auth(token);
        }
        if let Some(body) = &request.body {
            builder = builder.json(body);
        }

        let response = builder
            .send()
            .await
            .map_err(|e| ApiError::Transport(e.to_string()))?;
        let status = response.status().as_u16();
        let body = response
            .text()
            .await
            .map_err(|e| ApiError::Transport(e.to_string()))?;

        Ok(HttpResponse { status, body })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use mockito::Matcher;

    #[tokio::test]
    async fn test_reqwest_transport_sends_bearer_and_body() {
        let mut server = mockito::Server::new_async().await;
        let mock = server
            .mock("PUT", "/api/v1/goals/3")
            .match_header("authorization", "Bearer abc")
            .match_body(Matcher::Json(serde_json::json!({ "progress": 4 })))
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(r#"{"success":true,"message":"Goal updated successfully"}"#)
            .expect(1)
            .create_async()
            .await;

        let transport = ReqwestTransport::new();
        let response = transport
            .send(HttpRequest {
                method: Method::Put,
                url: format!("{}/api/v1/goals/3", server.url()),
                bearer: Some("abc".into()),
                body: Some(serde_json::json!({ "progress": 4 })),
            })
            .await
            .expect("request failed");

        assert_eq!(response.status, 200);
        assert!(response.is_success());
        assert!(response.body.contains("Goal updated"));
        mock.assert_async().await;
    }

    #[tokio::test]
    async fn test_reqwest_transport_passes_error_status_through() {
        let mut server = mockito::Server::new_async().await;
        let _mock = server
            .mock("GET", "/api/v1/habits")
            .with_status(401)
            .with_body(r#"{"success":false,"error":"Token expired"}"#)
            .create_async()
            .await;

        let response = ReqwestTransport::new()
            .send(HttpRequest {
                method: Method::Get,
                url: format!("{}/api/v1/habits", server.url()),
                bearer: None,
                body: None,
            })
            .await
            .expect("request failed");

        assert_eq!(response.status, 401);
        assert!(!response.is_success());
    }

    #[tokio::test]
    async fn test_reqwest_transport_unreachable_host() {
        let result = ReqwestTransport::new()
            .send(HttpRequest {
                method: Method::Get,
                url: "http://127.0.0.1:1/api/v1/goals".into(),
                bearer: None,
                body: None,
            })
            .await;
        assert!(matches!(result, Err(ApiError::Transport(_))));
    }
}
