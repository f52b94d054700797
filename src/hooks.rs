//! Resource Hooks
//!
//! Binds a `ResourceHook` to a signal so pages re-render on every state
//! change. The list is fetched as soon as the hook is created.

use std::future::Future;
use std::rc::Rc;

use fittrack_client::{ConfirmGate, Resource, ResourceHook, ResourceState};
use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::context::use_app_context;

pub struct ResourceHandle<R: Resource> {
    pub state: ReadSignal<ResourceState<R>>,
    hook: StoredValue<Rc<ResourceHook<R>>, LocalStorage>,
}

impl<R: Resource> Clone for ResourceHandle<R> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<R: Resource> Copy for ResourceHandle<R> {}

/// Create the hook for `R` and start the initial fetch.
pub fn use_resource<R: Resource>() -> ResourceHandle<R> {
    let ctx = use_app_context();
    let (state, set_state) = signal(ResourceState::<R>::default());

    let hook = ResourceHook::<R>::new(ctx.client(), move || ctx.redirect_to_login())
        .observe(move |snapshot| {
            // The page may be gone by the time a response lands
            let _ = set_state.try_set(snapshot.clone());
        });

    let handle = ResourceHandle {
        state,
        hook: StoredValue::new_local(Rc::new(hook)),
    };
    handle.load();
    handle
}

impl<R: Resource> ResourceHandle<R> {
    pub fn load(&self) {
        self.spawn(move |hook| async move { hook.load().await });
    }

    /// Submit the draft; `on_done` gets the outcome (e.g. to close the form).
    pub fn create(&self, on_done: impl FnOnce(bool) + 'static) {
        self.spawn(move |hook| async move {
            let created = hook.create().await;
            on_done(created);
        });
    }

    pub fn update(&self, id: u32, patch: R::Patch) {
        self.spawn(move |hook| async move {
            hook.update(id, patch).await;
        });
    }

    pub fn delete(&self, id: u32, gate: impl ConfirmGate + 'static) {
        self.spawn(move |hook| async move {
            hook.delete(id, gate).await;
        });
    }

    /// Select a list item, or clear the selection with `None`.
    pub fn select(&self, id: Option<u32>) {
        self.hook.with_value(|hook| match id {
            Some(id) => hook.select_item(id),
            None => hook.select(None),
        });
    }

    pub fn edit_draft(&self, edit: impl FnOnce(&mut R::Draft)) {
        self.hook.with_value(|hook| hook.edit_draft(edit));
    }

    pub fn with_hook<T>(&self, f: impl FnOnce(&ResourceHook<R>) -> T) -> T {
        self.hook.with_value(|hook| f(hook))
    }

    /// Run an async operation against the hook on the local executor.
    pub fn spawn<F, Fut>(&self, op: F)
    where
        F: FnOnce(Rc<ResourceHook<R>>) -> Fut,
        Fut: Future<Output = ()> + 'static,
    {
        spawn_local(op(self.hook.get_value()));
    }
}
