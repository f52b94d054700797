//! Resource Hook
//!
//! Request/response lifecycle for one REST resource: fetch the list, submit
//! the creation draft, patch and delete items, and track loading/error state.
//! Every successful mutation refetches the whole list instead of patching it
//! locally, so the list always mirrors the last successful fetch.
//!
//! State lives in a `RefCell` and is never borrowed across an `.await`.

mod habits;
mod workouts;


use std::cell::RefCell;
use std::rc::Rc;

use crate::client::ApiClient;
use crate::error::{ApiError, ApiResult};
use crate::resource::Resource;

/// Receives the redirect-to-login signal
pub trait Navigator {
    fn redirect_to_login(&self);
}

impl<F: Fn()> Navigator for F {
    fn redirect_to_login(&self) {
        self()
    }
}

/// Interactive yes/no gate in front of destructive operations
pub trait ConfirmGate {
    fn confirm(&self, prompt: &str) -> bool;
}

impl<F: Fn(&str) -> bool> ConfirmGate for F {
    fn confirm(&self, prompt: &str) -> bool {
        self(prompt)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Phase {
    #[default]
    Idle,
    Loading,
    Ready,
    Failed,
}

/// Everything a page renders from
#[derive(Debug, Clone, PartialEq)]
pub struct ResourceState<R: Resource> {
    pub items: Vec<R::Item>,
    pub selected: Option<R::Selected>,
    pub loading: bool,
    pub phase: Phase,
    /// One message per hook, not per operation
    pub error: Option<String>,
    pub draft: R::Draft,
}

impl<R: Resource> Default for ResourceState<R> {
    fn default() -> Self {
        Self {
            items: Vec::new(),
            selected: None,
            loading: false,
            phase: Phase::Idle,
            error: None,
            draft: R::Draft::default(),
        }
    }
}

impl<R: Resource> ResourceState<R> {
    pub fn selected_id(&self) -> Option<u32> {
        self.selected.as_ref().map(R::selected_id)
    }

    pub fn is_selected(&self, id: u32) -> bool {
        self.selected_id() == Some(id)
    }
}

type Observer<R> = Box<dyn Fn(&ResourceState<R>)>;

pub struct ResourceHook<R: Resource> {
    client: ApiClient,
    navigator: Rc<dyn Navigator>,
    state: RefCell<ResourceState<R>>,
    observer: Option<Observer<R>>,
}

impl<R: Resource> ResourceHook<R> {
    pub fn new(client: ApiClient, navigator: impl Navigator + 'static) -> Self {
        Self {
            client,
            navigator: Rc::new(navigator),
            state: RefCell::new(ResourceState::default()),
            observer: None,
        }
    }

    /// Called with a snapshot after every state change
    pub fn observe(mut self, observer: impl Fn(&ResourceState<R>) + 'static) -> Self {
        self.observer = Some(Box::new(observer));
        self
    }

    pub fn client(&self) -> &ApiClient {
        &self.client
    }

    pub fn state(&self) -> ResourceState<R> {
        self.state.borrow().clone()
    }

    pub fn select(&self, selected: Option<R::Selected>) {
        self.mutate(|s| s.selected = selected);
    }

    /// Select a list item by id; unknown ids clear the selection.
    pub fn select_item(&self, id: u32) {
        let selected = self
            .state
            .borrow()
            .items
            .iter()
            .find(|item| R::item_id(item) == id)
            .map(R::select);
        self.select(selected);
    }

    pub fn edit_draft(&self, edit: impl FnOnce(&mut R::Draft)) {
        self.mutate(|s| edit(&mut s.draft));
    }

    pub fn reset_draft(&self) {
        self.mutate(|s| s.draft = R::Draft::default());
    }

    pub fn clear_error(&self) {
        self.mutate(|s| s.error = None);
    }

    /// Replace the list with the server's. Failures leave the old list alone.
    pub async fn load(&self) {
        if !self.ensure_session() {
            return;
        }
        self.begin();

        match self.fetch_list().await {
            Ok(items) => {
                tracing::debug!(resource = R::PATH, count = items.len(), "list loaded");
                self.mutate(|s| {
                    s.items = items;
                    s.error = None;
                    s.loading = false;
                    s.phase = Phase::Ready;
                });
            }
            Err(err) => self.fail(err, &format!("load {}", R::PATH)),
        }
    }

    /// Submit the current draft. Returns `true` on success, after which the
    /// draft is back to its defaults and the list has been refetched.
    pub async fn create(&self) -> bool {
        if !self.ensure_session() {
            return false;
        }
        self.mutate(|s| {
            s.error = None;
            s.loading = true;
            s.phase = Phase::Loading;
        });
        let draft = self.state.borrow().draft.clone();

        match self.client.post(R::PATH, &draft).await {
            Ok(_) => {
                tracing::info!(resource = R::PATH, "created");
                self.reset_draft();
                self.load().await;
                true
            }
            Err(err) => {
                self.fail(err, &format!("create {}", R::SINGULAR));
                false
            }
        }
    }

    /// Send a partial update. A matching selection is patched right away,
    /// before the refetch completes.
    pub async fn update(&self, id: u32, patch: R::Patch) -> bool {
        if !self.ensure_session() {
            return false;
        }
        self.begin();

        match self.client.put(&R::item_path(id), &patch).await {
            Ok(_) => {
                tracing::info!(resource = R::PATH, id, "updated");
                self.mutate(|s| {
                    if let Some(selected) = s.selected.as_mut() {
                        if R::selected_id(selected) == id {
                            R::apply_patch(selected, &patch);
                        }
                    }
                });
                self.load().await;
                true
            }
            Err(err) => {
                self.fail(err, &format!("update {}", R::SINGULAR));
                false
            }
        }
    }

    /// Delete after the gate agrees. Declining sends nothing and changes nothing.
    pub async fn delete(&self, id: u32, gate: impl ConfirmGate) -> bool {
        if !gate.confirm(&format!("Delete this {}?", R::SINGULAR)) {
            tracing::debug!(resource = R::PATH, id, "delete declined");
            return false;
        }
        if !self.ensure_session() {
            return false;
        }
        self.begin();

        match self.client.delete(&R::item_path(id)).await {
            Ok(_) => {
                tracing::info!(resource = R::PATH, id, "deleted");
                self.mutate(|s| {
                    if s.is_selected(id) {
                        s.selected = None;
                    }
                });
                self.load().await;
                true
            }
            Err(err) => {
                self.fail(err, &format!("delete {}", R::SINGULAR));
                false
            }
        }
    }

    async fn fetch_list(&self) -> ApiResult<Vec<R::Item>> {
        let mut envelope = self.client.get(R::PATH).await?;
        envelope.take(R::LIST_KEY)
    }

    fn mutate(&self, change: impl FnOnce(&mut ResourceState<R>)) {
        change(&mut self.state.borrow_mut());
        if let Some(observer) = &self.observer {
            let snapshot = self.state.borrow().clone();
            observer(&snapshot);
        }
    }

    fn begin(&self) {
        self.mutate(|s| {
            s.loading = true;
            s.phase = Phase::Loading;
        });
    }

    fn settle(&self, phase: Phase) {
        self.mutate(|s| {
            s.loading = false;
            s.phase = phase;
        });
    }

    /// Without a credential nothing is sent; the caller is sent to login.
    fn ensure_session(&self) -> bool {
        if self.client.session().is_authenticated() {
            return true;
        }
        tracing::debug!(resource = R::PATH, "no credential, redirecting to login");
        self.navigator.redirect_to_login();
        false
    }

    /// 401: drop the credential and send the caller to login.
    fn sign_out(&self) {
        if self.client.session().clear() {
            tracing::warn!(resource = R::PATH, "credential rejected, signed out");
        }
        self.settle(Phase::Failed);
        self.navigator.redirect_to_login();
    }

    /// Route a failure to the redirect or to the hook's error string.
    fn fail(&self, err: ApiError, action: &str) {
        match err {
            ApiError::Unauthorized { .. } => self.sign_out(),
            ApiError::Rejected(message) => {
                tracing::warn!(resource = R::PATH, %message, "failed to {}", action);
                self.mutate(|s| {
                    s.error = Some(message);
                    s.loading = false;
                    s.phase = Phase::Failed;
                });
            }
            other => {
                tracing::warn!(resource = R::PATH, error = %other, "failed to {}", action);
                self.mutate(|s| {
                    s.error = Some(format!("Failed to {}", action));
                    s.loading = false;
                    s.phase = Phase::Failed;
                });
            }
        }
    }
}
