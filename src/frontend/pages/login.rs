//! Login page

use std::sync::Arc;

use leptos::ev::{Event, SubmitEvent};
use leptos::prelude::*;

use crate::form::{
    Collaborator, FormCommand, FormEvent, FormStore, LogCollaborator, LoginFormView,
};
use crate::frontend::components::{Button, Checkbox, TextInput, VisibilityToggle};

impl FormEvent for SubmitEvent {
    fn prevent_default(&self) {
        Event::prevent_default(self);
    }
}

/// Login page component.
///
/// Owns the form store; the only observer re-renders the view model, and
/// every control reads from that model.
#[component]
pub fn LoginPage(
    #[prop(optional)] collaborator: Option<Arc<dyn Collaborator>>,
) -> impl IntoView {
    let collaborator: Arc<dyn Collaborator> =
        collaborator.unwrap_or_else(|| Arc::new(LogCollaborator));
    let mut store = FormStore::new(collaborator);

    let form = RwSignal::new(LoginFormView::render(store.state()));
    store.subscribe(move |state| form.set(LoginFormView::render(state)));
    let store = StoredValue::new(store);

    let dispatch = move |command: FormCommand| store.update_value(|s| s.dispatch(command));

    let email = Memo::new(move |_| form.with(|f| f.email.clone()));
    let password = Memo::new(move |_| form.with(|f| f.password.clone()));
    let remember_me = Memo::new(move |_| form.with(|f| f.remember_me.clone()));
    let toggle = Memo::new(move |_| form.with(|f| f.toggle));
    let submit_label = form.with_untracked(|f| f.submit_label);

    let on_submit = move |ev: SubmitEvent| {
        store.with_value(|s| {
            if let Err(e) = s.submit(&ev) {
                log::debug!("Login form not submitted: {}", e);
            }
        });
    };

    view! {
        <div class="auth-page">
            <div class="auth-container">
                <h1>"Login"</h1>
                <p class="auth-subtitle">"Welcome back"</p>
                <form class="auth-form space-y-5" on:submit=on_submit>
                    <TextInput
                        field=email
                        on_input=Callback::new(move |value: String| dispatch(FormCommand::SetEmail(value)))
                    />
                    <TextInput
                        field=password
                        on_input=Callback::new(move |value: String| {
                            dispatch(FormCommand::SetPassword(value))
                        })
                    >
                        <VisibilityToggle
                            toggle=toggle
                            on_toggle=Callback::new(move |_: ()| {
                                dispatch(FormCommand::TogglePasswordVisibility)
                            })
                        />
                    </TextInput>
                    <Checkbox
                        field=remember_me
                        on_change=Callback::new(move |checked: bool| {
                            dispatch(FormCommand::SetRememberMe(checked))
                        })
                    />
                    <Button>{submit_label}</Button>
                </form>
            </div>
        </div>
    }
}
