use survey_checker::Result;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;

use super::dom::{self, js_err};

/// Run `f` once the page has fully loaded: right away if it already has,
/// otherwise from a one-shot `load` listener on `window`.
pub(super) fn on_page_load(f: impl FnOnce() + 'static) -> Result<()> {
    let window = dom::window()?;
    let document = dom::document()?;
    when_loaded(&document.ready_state(), &window, f)
}

fn when_loaded(
    ready_state: &str,
    target: &web_sys::EventTarget,
    f: impl FnOnce() + 'static,
) -> Result<()> {
    if ready_state == "complete" {
        f();
        return Ok(());
    }

    let opts = web_sys::AddEventListenerOptions::new();
    opts.set_once(true);
    let cb = Closure::once_into_js(f);
    target
        .add_event_listener_with_callback_and_add_event_listener_options(
            "load",
            cb.unchecked_ref(),
            &opts,
        )
        .map_err(js_err)
}
