use leptos::prelude::*;

use crate::form::ToggleView;

/// Show/hide button for the password field. Its pressed state and label are
/// read from `toggle` only.
#[component]
pub fn VisibilityToggle(
    #[prop(into)] toggle: Signal<ToggleView>,
    #[prop(into)] on_toggle: Callback<()>,
) -> impl IntoView {
    view! {
        <button
            type="button"
            aria-controls=move || toggle.with(|t| t.controls)
            aria-pressed=move || toggle.with(|t| t.aria_pressed())
            aria-label=move || toggle.with(|t| t.label)
            on:click=move |_| on_toggle.run(())
            class="absolute right-3 text-sm text-slate-400 hover:text-white
                   focus:outline-none focus:ring-2 focus:ring-orange-500 rounded"
        >
            {move || if toggle.with(|t| t.pressed) { "Hide" } else { "Show" }}
        </button>
    }
}
