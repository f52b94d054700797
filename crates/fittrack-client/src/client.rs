//! API Client
//!
//! Thin wrapper over a `Transport`: resolves paths against the configured base
//! URL, attaches the session's bearer token to every request and decodes the
//! response envelope.

use std::fmt;
use std::rc::Rc;

use serde::Serialize;

use crate::config::ClientConfig;
use crate::envelope::Envelope;
use crate::error::{ApiError, ApiResult};
use crate::session::Session;
use crate::transport::{HttpRequest, Method, ReqwestTransport, Transport};

const STATUS_UNAUTHORIZED: u16 = 401;

#[derive(Clone)]
pub struct ApiClient {
    config: ClientConfig,
    session: Session,
    transport: Rc<dyn Transport>,
}

impl ApiClient {
    pub fn new(config: ClientConfig, session: Session, transport: impl Transport + 'static) -> Self {
        Self {
            config,
            session,
            transport: Rc::new(transport),
        }
    }

    /// Client backed by reqwest
    pub fn with_reqwest(config: ClientConfig, session: Session) -> Self {
        Self::new(config, session, ReqwestTransport::new())
    }

    pub fn config(&self) -> &ClientConfig {
        &self.config
    }

    pub fn session(&self) -> &Session {
        &self.session
    }

    pub async fn get(&self, path: &str) -> ApiResult<Envelope> {
        self.send(Method::Get, path, None).await
    }

    pub async fn post<B: Serialize + ?Sized>(&self, path: &str, body: &B) -> ApiResult<Envelope> {
        let body = serde_json::to_value(body)?;
        self.send(Method::Post, path, Some(body)).await
    }

    pub async fn put<B: Serialize + ?Sized>(&self, path: &str, body: &B) -> ApiResult<Envelope> {
        let body = serde_json::to_value(body)?;
        self.send(Method::Put, path, Some(body)).await
    }

    pub async fn delete(&self, path: &str) -> ApiResult<Envelope> {
        self.send(Method::Delete, path, None).await
    }

    async fn send(
        &self,
        method: Method,
        path: &str,
        body: Option<serde_json::Value>,
    ) -> ApiResult<Envelope> {
        let request = HttpRequest {
            method,
            url: self.config.endpoint(path),
            bearer: self.session.token(),
            body,
        };
        tracing::debug!(method = method.as_str(), url = %request.url, "sending request");

        let response = self.transport.send(request).await?;

        if !response.is_success() {
            let message = Envelope::parse(&response.body)
                .ok()
                .and_then(|envelope| envelope.reason());
            if response.status == STATUS_UNAUTHORIZED {
                tracing::warn!(method = method.as_str(), path, "request unauthorized");
                return Err(ApiError::Unauthorized { message });
            }
            tracing::warn!(
                method = method.as_str(),
                path,
                status = response.status,
                message = message.as_deref().unwrap_or(""),
                "request failed"
            );
            return Err(ApiError::Status {
                status: response.status,
                message,
            });
        }

        Envelope::parse(&response.body)?.into_result()
    }
}

impl fmt::Debug for ApiClient {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ApiClient")
            .field("config", &self.config)
            .field("session", &self.session)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::session::MemoryCredentialStore;
    use crate::testing::MockTransport;
    use serde_json::json;

    fn client(transport: &MockTransport, token: Option<&str>) -> ApiClient {
        let session = match token {
            Some(token) => Session::new(MemoryCredentialStore::with_token(token)),
            None => Session::in_memory(),
        };
        ApiClient::new(ClientConfig::new("http://api.test/api/v1"), session, transport.clone())
    }

    #[tokio::test]
    async fn test_attaches_bearer_and_resolves_url() {
        let transport = MockTransport::new();
        transport.respond(200, json!({ "success": true, "goals": [] }));

        client(&transport, Some("abc")).get("goals").await.unwrap();

        let sent = transport.requests();
        assert_eq!(sent.len(), 1);
        assert_eq!(sent[0].method, Method::Get);
        assert_eq!(sent[0].url, "http://api.test/api/v1/goals");
        assert_eq!(sent[0].bearer.as_deref(), Some("abc"));
        assert_eq!(sent[0].body, None);
    }

    #[tokio::test]
    async fn test_no_bearer_without_session() {
        let transport = MockTransport::new();
        transport.respond(200, json!({ "success": true, "token": "t" }));

        client(&transport, None).post("login", &json!({ "email": "a@b.c" })).await.unwrap();

        let sent = transport.requests();
        assert_eq!(sent[0].bearer, None);
        assert_eq!(sent[0].body, Some(json!({ "email": "a@b.c" })));
    }

    #[tokio::test]
    async fn test_status_mapping() {
        let transport = MockTransport::new();
        transport.respond(401, json!({ "success": false, "error": "Token expired" }));
        transport.respond(400, json!({ "success": false, "message": "Missing required fields" }));
        transport.respond(200, json!({ "success": false, "message": "forbidden" }));
        let client = client(&transport, Some("abc"));

        assert_eq!(
            client.get("goals").await,
            Err(ApiError::Unauthorized {
                message: Some("Token expired".into())
            })
        );
        assert_eq!(
            client.post("goals", &json!({})).await,
            Err(ApiError::Status {
                status: 400,
                message: Some("Missing required fields".into())
            })
        );
        assert_eq!(client.delete("goals/1").await, Err(ApiError::Rejected("forbidden".into())));
    }

    #[tokio::test]
    async fn test_non_json_error_body() {
        let transport = MockTransport::new();
        transport.respond_raw(502, "<html>Bad Gateway</html>");

        let result = client(&transport, Some("abc")).get("habits").await;
        assert_eq!(result, Err(ApiError::Status { status: 502, message: None }));
    }
}
