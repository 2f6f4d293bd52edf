use std::sync::Arc;

use crate::common::ValidationError;
use crate::form::LoginFormState;
use crate::form::validation::validate;
use crate::types::LoginRequest;

/// The event a form submission arrives with.
pub trait FormEvent {
    /// Suppress the host's own full-page submission.
    fn prevent_default(&self);
}

/// Receiver of submitted credentials, e.g. a client for an auth endpoint.
///
/// Called synchronously from the submit handler; anything long-running must
/// be spawned by the implementation.
pub trait Collaborator: Send + Sync {
    fn accept(&self, request: LoginRequest);
}

impl<F> Collaborator for F
where
    F: Fn(LoginRequest) + Send + Sync,
{
    fn accept(&self, request: LoginRequest) {
        self(request)
    }
}

/// Logs the submission and drops it.
#[derive(Clone, Copy, Debug, Default)]
pub struct LogCollaborator;

impl Collaborator for LogCollaborator {
    fn accept(&self, request: LoginRequest) {
        log::info!(
            "Login submitted for {} (remember_me={})",
            request.email,
            request.remember_me
        );
    }
}

pub struct SubmissionHandler {
    collaborator: Arc<dyn Collaborator>,
}

impl SubmissionHandler {
    pub fn new(collaborator: Arc<dyn Collaborator>) -> Self {
        Self { collaborator }
    }

    /// Handle one submit event against the current state.
    ///
    /// The default action is always prevented. A form that fails validation
    /// produces no snapshot and the collaborator is not called.
    pub fn handle<E>(
        &self,
        event: &E,
        state: &LoginFormState,
    ) -> Result<LoginRequest, ValidationError>
    where
        E: FormEvent + ?Sized,
    {
        event.prevent_default();

        if let Err(e) = validate(state) {
            log::debug!("Submission blocked: {}", e);
            return Err(e);
        }

        let request = state.snapshot();
        self.collaborator.accept(request.clone());

        Ok(request)
    }
}

impl Default for SubmissionHandler {
    fn default() -> Self {
        Self::new(Arc::new(LogCollaborator))
    }
}
