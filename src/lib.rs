pub mod common;
pub mod form;
pub mod frontend;
pub mod types;

#[cfg(feature = "ssr")]
pub mod config;
#[cfg(feature = "ssr")]
pub mod page;

/// WASM entry point: replaces the server-rendered placeholder with the live
/// form.
#[cfg(feature = "csr")]
#[wasm_bindgen::prelude::wasm_bindgen(start)]
pub fn mount() {
    use wasm_bindgen::JsCast;

    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Debug);

    let root = web_sys::window()
        .and_then(|w| w.document())
        .and_then(|d| d.get_element_by_id(frontend::ROOT_ID));

    match root {
        Some(root) => {
            root.set_inner_html("");
            leptos::mount::mount_to(root.unchecked_into::<web_sys::HtmlElement>(), frontend::App)
                .forget();
        }
        None => {
            log::warn!("#{} not found, mounting on body", frontend::ROOT_ID);
            leptos::mount::mount_to_body(frontend::App);
        }
    }
}
