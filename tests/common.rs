#![allow(dead_code)]

use std::cell::Cell;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

use loginform::form::{Collaborator, FormEvent, FormStore};
use loginform::types::LoginRequest;

/// Submit event double that counts `prevent_default` calls.
#[derive(Default)]
pub struct RecordedEvent {
    prevented: Cell<usize>,
}

impl RecordedEvent {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn default_prevented(&self) -> bool {
        self.prevented.get() > 0
    }

    pub fn prevent_count(&self) -> usize {
        self.prevented.get()
    }
}

impl FormEvent for RecordedEvent {
    fn prevent_default(&self) {
        self.prevented.set(self.prevented.get() + 1);
    }
}

#[derive(Clone, Default)]
pub struct RecordingCollaborator {
    received: Arc<Mutex<Vec<LoginRequest>>>,
}

impl RecordingCollaborator {
    pub fn received(&self) -> Vec<LoginRequest> {
        self.received.lock().unwrap().clone()
    }
}

impl Collaborator for RecordingCollaborator {
    fn accept(&self, request: LoginRequest) {
        self.received.lock().unwrap().push(request);
    }
}

pub fn recording_store() -> (FormStore, RecordingCollaborator) {
    let collaborator = RecordingCollaborator::default();
    let store = FormStore::new(Arc::new(collaborator.clone()));
    (store, collaborator)
}

pub fn filled_store(
    email: &str,
    password: &str,
    remember_me: bool,
) -> (FormStore, RecordingCollaborator) {
    let (mut store, collaborator) = recording_store();
    store.set_email(email);
    store.set_password(password);
    store.set_remember_me(remember_me);
    (store, collaborator)
}

/// Subscribes a counter that is bumped on every notification.
pub fn render_counter(store: &mut FormStore) -> Arc<AtomicUsize> {
    let renders = Arc::new(AtomicUsize::new(0));
    let counter = renders.clone();
    store.subscribe(move |_| {
        counter.fetch_add(1, Ordering::SeqCst);
    });
    renders
}

pub fn renders(counter: &AtomicUsize) -> usize {
    counter.load(Ordering::SeqCst)
}
