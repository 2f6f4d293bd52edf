use leptos::prelude::*;

#[component]
pub fn Button(
    children: Children,
    #[prop(optional, into)] button_type: String,
) -> impl IntoView {
    let classes = "inline-flex items-center justify-center w-full px-8 py-4 text-lg font-semibold rounded-lg \
                   transition-all duration-200 focus:outline-none focus:ring-2 focus:ring-offset-2 \
                   focus:ring-offset-slate-950 bg-gradient-to-r from-orange-500 to-amber-500 text-white \
                   hover:from-orange-600 hover:to-amber-600 focus:ring-orange-500";

    let button_type = if button_type.is_empty() {
        "submit".to_string()
    } else {
        button_type
    };

    view! {
        <button type=button_type class=classes>
            {children()}
        </button>
    }
}
