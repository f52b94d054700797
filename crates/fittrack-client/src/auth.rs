//! Auth API
//!
//! Login and registration both answer with a JWT, which goes straight into
//! the session so every later request carries it.

use std::sync::OnceLock;

use regex::Regex;
use serde::Serialize;

use crate::client::ApiClient;
use crate::error::{ApiError, ApiResult};
use crate::session::Session;

const TOKEN_FIELD: &str = "token";
const BAD_CREDENTIALS: &str = "Incorrect email or password";
const MIN_PASSWORD_LEN: usize = 8;

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct Credentials {
    pub email: String,
    pub password: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct Registration {
    pub firstname: String,
    pub lastname: String,
    pub email: String,
    pub password: String,
    pub confirm_password: String,
}

impl Registration {
    /// Form checks run before anything is sent. The error is shown as-is.
    pub fn validate(&self) -> Result<(), String> {
        let fields = [
            &self.firstname,
            &self.lastname,
            &self.email,
            &self.password,
            &self.confirm_password,
        ];
        if fields.iter().any(|field| field.is_empty()) {
            return Err("All fields are required".to_string());
        }
        if !is_valid_email(&self.email) {
            return Err("Please enter a valid email address".to_string());
        }
        if self.password.chars().count() < MIN_PASSWORD_LEN {
            return Err(format!("Password must be at least {} characters", MIN_PASSWORD_LEN));
        }
        if self.password != self.confirm_password {
            return Err("Passwords do not match".to_string());
        }
        Ok(())
    }
}

fn is_valid_email(email: &str) -> bool {
    static EMAIL: OnceLock<Regex> = OnceLock::new();
    EMAIL
        .get_or_init(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("Invalid regex pattern"))
        .is_match(email)
}

pub async fn login(client: &ApiClient, credentials: &Credentials) -> ApiResult<()> {
    let mut envelope = client.post("login", credentials).await.map_err(|err| match err {
        ApiError::Unauthorized { message } => {
            ApiError::Rejected(message.unwrap_or_else(|| BAD_CREDENTIALS.to_string()))
        }
        other => other,
    })?;
    let token: String = envelope.take(TOKEN_FIELD)?;
    client.session().set_token(&token);
    tracing::info!("logged in");
    Ok(())
}

pub async fn register(client: &ApiClient, registration: &Registration) -> ApiResult<()> {
    let mut envelope = client.post("register", registration).await?;
    let token: String = envelope.take(TOKEN_FIELD)?;
    client.session().set_token(&token);
    tracing::info!("registered");
    Ok(())
}

pub fn logout(session: &Session) {
    session.clear();
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::ClientConfig;
    use crate::testing::MockTransport;
    use serde_json::json;

    fn client(transport: &MockTransport) -> ApiClient {
        ApiClient::new(ClientConfig::new("/api/v1"), Session::in_memory(), transport.clone())
    }

    fn registration() -> Registration {
        Registration {
            firstname: "Sam".into(),
            lastname: "Lee".into(),
            email: "sam@example.com".into(),
            password: "hunter22".into(),
            confirm_password: "hunter22".into(),
        }
    }

    #[test]
    fn test_registration_validate() {
        assert_eq!(registration().validate(), Ok(()));

        let mut missing = registration();
        missing.lastname.clear();
        assert_eq!(missing.validate(), Err("All fields are required".to_string()));

        for email in ["sam", "sam@example", "sam @example.com", "@example.com"] {
            let mut bad = registration();
            bad.email = email.into();
            assert_eq!(bad.validate(), Err("Please enter a valid email address".to_string()), "{email}");
        }

        let mut short = registration();
        short.password = "hunter2".into();
        short.confirm_password = "hunter2".into();
        assert_eq!(short.validate(), Err("Password must be at least 8 characters".to_string()));

        let mut mismatch = registration();
        mismatch.confirm_password = "hunter23".into();
        assert_eq!(mismatch.validate(), Err("Passwords do not match".to_string()));
    }

    #[tokio::test]
    async fn test_login_stores_token() {
        let transport = MockTransport::new();
        transport.respond(200, json!({ "success": true, "message": "Login successful", "token": "jwt-1" }));
        let client = client(&transport);

        let credentials = Credentials {
            email: "sam@example.com".into(),
            password: "hunter2".into(),
        };
        login(&client, &credentials).await.unwrap();

        assert_eq!(client.session().token().as_deref(), Some("jwt-1"));
        let sent = transport.requests();
        assert_eq!(sent[0].url, "/api/v1/login");
        assert_eq!(sent[0].body, Some(json!({ "email": "sam@example.com", "password": "hunter2" })));
    }

    #[tokio::test]
    async fn test_login_wrong_password() {
        let transport = MockTransport::new();
        transport.respond(401, json!({ "success": false, "message": "Incorrect password" }));
        let client = client(&transport);

        let err = login(&client, &Credentials::default()).await.unwrap_err();
        assert_eq!(err, ApiError::Rejected("Incorrect password".into()));
        assert!(!client.session().is_authenticated());
    }

    #[tokio::test]
    async fn test_login_refused_without_message() {
        let transport = MockTransport::new();
        transport.respond_raw(401, "");
        let client = client(&transport);

        let err = login(&client, &Credentials::default()).await.unwrap_err();
        assert_eq!(err, ApiError::Rejected(BAD_CREDENTIALS.into()));
    }

    #[tokio::test]
    async fn test_register_rejected_keeps_session_empty() {
        let transport = MockTransport::new();
        transport.respond(400, json!({ "success": false, "message": "User already exists" }));
        let client = client(&transport);

        let err = register(&client, &Registration::default()).await.unwrap_err();
        assert_eq!(err.server_message(), Some("User already exists"));
        assert!(!client.session().is_authenticated());
    }

    #[tokio::test]
    async fn test_register_then_logout() {
        let transport = MockTransport::new();
        transport.respond(201, json!({ "success": true, "token": "jwt-2" }));
        let client = client(&transport);

        register(&client, &Registration::default()).await.unwrap();
        assert!(client.session().is_authenticated());

        logout(client.session());
        assert!(!client.session().is_authenticated());
    }
}
