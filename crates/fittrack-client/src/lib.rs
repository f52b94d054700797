//! FitTrack Client
//!
//! Layered the same way on every target:
//! - config / session: where the API is and who we are
//! - transport / client / envelope: one request in, one typed envelope out
//! - resource / hook: per-entity list + mutation lifecycle used by the pages

pub mod auth;
pub mod client;
pub mod config;
pub mod envelope;
pub mod error;
pub mod hook;
pub mod models;
pub mod resource;
pub mod session;
pub mod transport;

#[cfg(test)]
mod testing;

pub use client::ApiClient;
pub use config::ClientConfig;
pub use envelope::Envelope;
pub use error::{ApiError, ApiResult};
pub use hook::{ConfirmGate, Navigator, Phase, ResourceHook, ResourceState};
pub use resource::{Goals, Habits, Resource, Workouts};
pub use session::{CredentialStore, MemoryCredentialStore, Session, TOKEN_KEY};
pub use transport::{HttpRequest, HttpResponse, Method, ReqwestTransport, Transport};
