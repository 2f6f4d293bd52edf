use std::fmt;
use std::sync::Arc;

use crate::common::ValidationError;
use crate::form::{
    Collaborator, FormCommand, FormEvent, LoginFormState, SubmissionHandler,
};
use crate::types::LoginRequest;

type Observer = Box<dyn Fn(&LoginFormState) + Send + Sync>;

/// Handle returned by [`FormStore::subscribe`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct SubscriptionId(u64);

/// Observable owner of a [`LoginFormState`].
///
/// Every dispatched command notifies each observer exactly once, after the
/// state has been updated.
pub struct FormStore {
    state: LoginFormState,
    observers: Vec<(SubscriptionId, Observer)>,
    next_id: u64,
    handler: SubmissionHandler,
}

impl FormStore {
    pub fn new(collaborator: Arc<dyn Collaborator>) -> Self {
        Self::with_handler(SubmissionHandler::new(collaborator))
    }

    pub fn with_handler(handler: SubmissionHandler) -> Self {
        Self {
            state: LoginFormState::default(),
            observers: Vec::new(),
            next_id: 0,
            handler,
        }
    }

    pub fn state(&self) -> &LoginFormState {
        &self.state
    }

    pub fn subscribe<F>(&mut self, observer: F) -> SubscriptionId
    where
        F: Fn(&LoginFormState) + Send + Sync + 'static,
    {
        let id = SubscriptionId(self.next_id);
        self.next_id += 1;
        self.observers.push((id, Box::new(observer)));
        id
    }

    /// Returns `false` if the subscription was already gone.
    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        let before = self.observers.len();
        self.observers.retain(|(existing, _)| *existing != id);
        self.observers.len() != before
    }

    pub fn dispatch(&mut self, command: FormCommand) {
        log::trace!("Dispatching {}", command.name());
        self.state.apply(command);
        self.notify();
    }

    fn notify(&self) {
        for (_, observer) in &self.observers {
            observer(&self.state);
        }
    }

    pub fn email(&self) -> &str {
        self.state.email()
    }

    pub fn set_email(&mut self, email: impl Into<String>) {
        self.dispatch(FormCommand::SetEmail(email.into()));
    }

    pub fn password(&self) -> &str {
        self.state.password()
    }

    pub fn set_password(&mut self, password: impl Into<String>) {
        self.dispatch(FormCommand::SetPassword(password.into()));
    }

    pub fn remember_me(&self) -> bool {
        self.state.remember_me()
    }

    pub fn set_remember_me(&mut self, remember_me: bool) {
        self.dispatch(FormCommand::SetRememberMe(remember_me));
    }

    pub fn password_visible(&self) -> bool {
        self.state.password_visible()
    }

    pub fn toggle_password_visibility(&mut self) {
        self.dispatch(FormCommand::TogglePasswordVisibility);
    }

    /// Run the submission handler on the current state. Observers are not
    /// notified since nothing changes.
    pub fn submit<E>(&self, event: &E) -> Result<LoginRequest, ValidationError>
    where
        E: FormEvent + ?Sized,
    {
        self.handler.handle(event, &self.state)
    }
}

impl Default for FormStore {
    fn default() -> Self {
        Self::with_handler(SubmissionHandler::default())
    }
}

impl fmt::Debug for FormStore {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FormStore")
            .field("state", &self.state)
            .field("observers", &self.observers.len())
            .finish_non_exhaustive()
    }
}
