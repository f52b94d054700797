//! Session
//!
//! Holds the bearer credential. It is set on login and cleared on logout or
//! when the server answers 401. Where the token physically lives is up to the
//! `CredentialStore` behind it (memory here, `localStorage` in the browser).

use std::cell::RefCell;
use std::fmt;
use std::rc::Rc;

/// Storage key used by every store for the bearer token
pub const TOKEN_KEY: &str = "token";

/// Backing storage for the session credential
pub trait CredentialStore {
    fn load(&self) -> Option<String>;
    fn save(&self, token: &str);
    fn remove(&self);
}

/// Process-local store, used natively and in tests
#[derive(Debug, Default)]
pub struct MemoryCredentialStore {
    token: RefCell<Option<String>>,
}

impl MemoryCredentialStore {
    pub fn with_token(token: impl Into<String>) -> Self {
        Self { token: RefCell::new(Some(token.into())) }
    }
}

impl CredentialStore for MemoryCredentialStore {
    fn load(&self) -> Option<String> {
        self.token.borrow().clone()
    }

    fn save(&self, token: &str) {
        *self.token.borrow_mut() = Some(token.to_string());
    }

    fn remove(&self) {
        self.token.borrow_mut().take();
    }
}

/// Shared handle to the current credential. Cloning shares the store.
#[derive(Clone)]
pub struct Session {
    store: Rc<dyn CredentialStore>,
}

impl Session {
    pub fn new(store: impl CredentialStore + 'static) -> Self {
        Self { store: Rc::new(store) }
    }

    pub fn in_memory() -> Self {
        Self::new(MemoryCredentialStore::default())
    }

    /// Current bearer token; empty strings count as absent.
    pub fn token(&self) -> Option<String> {
        self.store.load().filter(|token| !token.is_empty())
    }

    pub fn is_authenticated(&self) -> bool {
        self.token().is_some()
    }

    pub fn set_token(&self, token: &str) {
        self.store.save(token);
        tracing::info!("session credential stored");
    }

    /// Drop the credential. Returns `true` only if one was actually removed.
    pub fn clear(&self) -> bool {
        if self.token().is_none() {
            return false;
        }
        self.store.remove();
        tracing::info!("session credential cleared");
        true
    }
}

impl fmt::Debug for Session {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Session")
            .field("authenticated", &self.is_authenticated())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_set_and_clear() {
        let session = Session::in_memory();
        assert!(!session.is_authenticated());

        session.set_token("abc");
        assert_eq!(session.token().as_deref(), Some("abc"));

        assert!(session.clear());
        assert!(!session.is_authenticated());
        // Second clear has nothing left to remove
        assert!(!session.clear());
    }

    #[test]
    fn test_clones_share_store() {
        let session = Session::new(MemoryCredentialStore::with_token("abc"));
        let other = session.clone();
        other.clear();
        assert!(session.token().is_none());
    }

    #[test]
    fn test_empty_token_is_absent() {
        let session = Session::new(MemoryCredentialStore::with_token(""));
        assert!(!session.is_authenticated());
        assert!(!session.clear());
    }

    #[test]
    fn test_debug_hides_token() {
        let session = Session::new(MemoryCredentialStore::with_token("secret-token"));
        let printed = format!("{:?}", session);
        assert!(!printed.contains("secret-token"));
        assert!(printed.contains("authenticated: true"));
    }
}
