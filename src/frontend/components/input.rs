use leptos::prelude::*;

use crate::form::{CheckboxView, InputView};

/// Controlled text-like input. Every attribute comes from `field`, and edits
/// are only reported through `on_input`.
#[component]
pub fn TextInput(
    #[prop(into)] field: Signal<InputView>,
    #[prop(into)] on_input: Callback<String>,
    #[prop(optional)] children: Option<Children>,
) -> impl IntoView {
    let InputView {
        id,
        name,
        label,
        placeholder,
        autocomplete,
        required,
        ..
    } = field.get_untracked();

    view! {
        <div class="form-group">
            <label for=id class="block text-sm font-medium text-slate-300 mb-2">
                {label}
            </label>
            <div class="relative flex items-center">
                <input
                    type=move || field.with(|f| f.input_type.as_str())
                    id=id
                    name=name
                    placeholder=placeholder
                    autocomplete=autocomplete
                    required=required
                    prop:value=move || field.with(|f| f.value.clone())
                    on:input=move |ev| on_input.run(event_target_value(&ev))
                    class="w-full px-4 py-3 rounded-lg bg-slate-800 border border-slate-700
                           text-white placeholder-slate-500
                           focus:outline-none focus:ring-2 focus:ring-orange-500 focus:border-transparent
                           transition-all"
                />
                {children.map(|c| c())}
            </div>
        </div>
    }
}

#[component]
pub fn Checkbox(
    #[prop(into)] field: Signal<CheckboxView>,
    #[prop(into)] on_change: Callback<bool>,
) -> impl IntoView {
    let CheckboxView { id, name, label, .. } = field.get_untracked();

    view! {
        <div class="form-group flex items-center gap-2">
            <input
                type="checkbox"
                id=id
                name=name
                prop:checked=move || field.with(|f| f.checked)
                on:change=move |ev| on_change.run(event_target_checked(&ev))
                class="h-4 w-4 rounded border-slate-700 bg-slate-800 text-orange-500 focus:ring-orange-500"
            />
            <label for=id class="text-sm text-slate-300">
                {label}
            </label>
        </div>
    }
}
