mod common;

#[cfg(test)]
pub mod store_tests {
    use std::sync::{Arc, Mutex};

    use super::common::*;

    use loginform::form::*;

    #[test]
    fn test_store_default_state_success() {
        let store = FormStore::default();

        assert_eq!(store.email(), "");
        assert_eq!(store.password(), "");
        assert!(!store.remember_me());
        assert!(!store.password_visible());
        assert_eq!(store.state(), &LoginFormState::default());
    }

    #[test]
    fn test_email_renders_last_entered_value_success() {
        let (mut store, _) = recording_store();
        let rendered = Arc::new(Mutex::new(String::new()));
        let sink = rendered.clone();
        store.subscribe(move |state| {
            *sink.lock().unwrap() = LoginFormView::render(state).email.value;
        });

        for input in ["u", "us", "user@", "user@example.com", "", "other@example.org"] {
            store.set_email(input);

            assert_eq!(store.email(), input);
            assert_eq!(*rendered.lock().unwrap(), input);
            assert_eq!(LoginFormView::render(store.state()).email.value, input);
        }
    }

    #[test]
    fn test_toggle_parity_success() {
        for toggles in 0..8 {
            let mut store = FormStore::default();
            for _ in 0..toggles {
                store.toggle_password_visibility();
            }

            assert_eq!(store.password_visible(), toggles % 2 == 1, "after {toggles} toggles");
        }
    }

    #[test]
    fn test_toggle_never_changes_password_success() {
        let (mut store, _) = filled_store("user@example.com", "secret123", false);

        for _ in 0..5 {
            store.toggle_password_visibility();
            assert_eq!(store.password(), "secret123");
            assert_eq!(store.email(), "user@example.com");
        }
    }

    #[test]
    fn test_each_mutation_notifies_once_success() {
        let (mut store, _) = recording_store();
        let counter = render_counter(&mut store);

        store.set_email("user@example.com");
        assert_eq!(renders(&counter), 1);

        store.set_password("secret123");
        assert_eq!(renders(&counter), 2);

        store.set_remember_me(true);
        assert_eq!(renders(&counter), 3);

        store.toggle_password_visibility();
        assert_eq!(renders(&counter), 4);

        store.dispatch(FormCommand::SetEmail("x@example.com".into()));
        assert_eq!(renders(&counter), 5);
    }

    #[test]
    fn test_setting_same_value_notifies_once_success() {
        let (mut store, _) = recording_store();
        store.set_email("user@example.com");
        let counter = render_counter(&mut store);

        store.set_email("user@example.com");

        assert_eq!(renders(&counter), 1);
        assert_eq!(store.email(), "user@example.com");
    }

    #[test]
    fn test_observer_sees_updated_state_success() {
        let (mut store, _) = recording_store();
        let seen = Arc::new(Mutex::new(Vec::new()));
        let sink = seen.clone();
        store.subscribe(move |state| sink.lock().unwrap().push(state.clone()));

        store.set_password("secret123");
        store.toggle_password_visibility();

        let seen = seen.lock().unwrap();
        assert_eq!(seen.len(), 2);
        assert_eq!(seen[0].password(), "secret123");
        assert!(!seen[0].password_visible());
        assert!(seen[1].password_visible());
    }

    #[test]
    fn test_unsubscribe_stops_notifications_success() {
        let (mut store, _) = recording_store();
        let counter = render_counter(&mut store);
        let other = render_counter(&mut store);

        store.set_email("a@example.com");

        let ids: Vec<_> = (0..2).map(|_| store.subscribe(|_| {})).collect();
        assert!(store.unsubscribe(ids[0]));
        assert!(!store.unsubscribe(ids[0]));

        store.set_email("b@example.com");

        assert_eq!(renders(&counter), 2);
        assert_eq!(renders(&other), 2);
    }

    #[test]
    fn test_fields_are_independent_success() {
        let (mut store, _) = filled_store("user@example.com", "secret123", true);

        store.set_email("");
        assert_eq!(store.password(), "secret123");
        assert!(store.remember_me());

        store.set_remember_me(false);
        assert_eq!(store.email(), "");
        assert_eq!(store.password(), "secret123");
        assert!(!store.password_visible());
    }

    #[test]
    fn test_setters_store_values_verbatim_success() {
        let (mut store, _) = recording_store();

        store.set_email("  User@Example.COM \n");
        store.set_password(" pass word ");

        assert_eq!(store.email(), "  User@Example.COM \n");
        assert_eq!(store.password(), " pass word ");
    }

    #[test]
    fn test_state_apply_without_store_success() {
        let mut state = LoginFormState::default();

        state.apply(FormCommand::SetEmail("user@example.com".into()));
        state.apply(FormCommand::SetPassword("secret123".into()));
        state.apply(FormCommand::SetRememberMe(true));
        state.apply(FormCommand::TogglePasswordVisibility);

        assert_eq!(state.email(), "user@example.com");
        assert_eq!(state.password(), "secret123");
        assert!(state.remember_me());
        assert!(state.password_visible());
    }

    #[test]
    fn test_debug_output_hides_password_success() {
        let (store, _) = filled_store("user@example.com", "secret123", false);

        let debug = format!(
            "{:?} {:?} {:?}",
            store,
            store.state().snapshot(),
            FormCommand::SetPassword("secret123".into())
        );

        assert!(!debug.contains("secret123"));
        assert!(debug.contains("user@example.com"));
    }
}
