//! Response Envelope
//!
//! Every endpoint answers `{ "success": bool, "message"?: string, ...payload }`.
//! The payload keys differ per endpoint (`goals`, `workout`, `token`, ...), so
//! they are kept as raw JSON and pulled out by key into typed values.

use serde::de::DeserializeOwned;
use serde::Deserialize;
use serde_json::{Map, Value};

use crate::error::{ApiError, ApiResult};

const FALLBACK_REJECTION: &str = "Request failed";

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Envelope {
    pub success: bool,
    #[serde(default)]
    pub message: Option<String>,
    #[serde(flatten)]
    pub payload: Map<String, Value>,
}

impl Envelope {
    pub fn parse(body: &str) -> ApiResult<Self> {
        Ok(serde_json::from_str(body)?)
    }

    /// Server-supplied reason; some endpoints use `error` instead of `message`.
    pub fn reason(&self) -> Option<String> {
        self.message.clone().or_else(|| {
            self.payload
                .get("error")
                .and_then(Value::as_str)
                .map(str::to_string)
        })
    }

    /// `success: false` becomes `ApiError::Rejected` with the server's reason.
    pub fn into_result(self) -> ApiResult<Self> {
        if self.success {
            Ok(self)
        } else {
            Err(ApiError::Rejected(
                self.reason().unwrap_or_else(|| FALLBACK_REJECTION.to_string()),
            ))
        }
    }

    /// Remove `key` from the payload and decode it.
    pub fn take<T: DeserializeOwned>(&mut self, key: &str) -> ApiResult<T> {
        let value = self
            .payload
            .remove(key)
            .ok_or_else(|| ApiError::Decode(format!("missing `{}` in response", key)))?;
        serde_json::from_value(value)
            .map_err(|e| ApiError::Decode(format!("invalid `{}`: {}", key, e)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_take_payload_by_key() {
        let mut envelope =
            Envelope::parse(r#"{"success":true,"goals":[1,2,3],"message":"ok"}"#).unwrap();
        assert_eq!(envelope.message.as_deref(), Some("ok"));
        let goals: Vec<u32> = envelope.take("goals").unwrap();
        assert_eq!(goals, vec![1, 2, 3]);
        assert!(matches!(envelope.take::<Vec<u32>>("goals"), Err(ApiError::Decode(_))));
    }

    #[test]
    fn test_rejection_uses_message_then_error() {
        let rejected = Envelope::parse(r#"{"success":false,"message":"forbidden"}"#).unwrap();
        assert_eq!(rejected.into_result(), Err(ApiError::Rejected("forbidden".into())));

        let rejected = Envelope::parse(r#"{"success":false,"error":"Invalid token"}"#).unwrap();
        assert_eq!(rejected.into_result(), Err(ApiError::Rejected("Invalid token".into())));

        let bare = Envelope::parse(r#"{"success":false}"#).unwrap();
        assert_eq!(bare.into_result(), Err(ApiError::Rejected(FALLBACK_REJECTION.into())));
    }

    #[test]
    fn test_missing_success_is_decode_error() {
        assert!(matches!(Envelope::parse(r#"{"goals":[]}"#), Err(ApiError::Decode(_))));
        assert!(matches!(Envelope::parse("<html>"), Err(ApiError::Decode(_))));
    }

    #[test]
    fn test_wrong_payload_type() {
        let mut envelope = Envelope::parse(r#"{"success":true,"goals":"nope"}"#).unwrap();
        let err = envelope.take::<Vec<u32>>("goals").unwrap_err();
        assert!(err.to_string().contains("invalid `goals`"));
    }
}
