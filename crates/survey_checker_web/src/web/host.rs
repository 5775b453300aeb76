use std::cell::Cell;

use survey_checker::bootstrap::{BootHost, InitTask};
use survey_checker::guard::{GuardSubscription, WheelGuard};
use survey_checker::Result;
use tracing::debug;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;

use super::dom::{self, js_err, DomFocus};

thread_local! {
    static WHEEL_LISTENER: Cell<bool> = const { Cell::new(false) };
}

/// The real browser page.
pub struct WebHost;

impl BootHost for WebHost {
    fn install_wheel_guard(&mut self, guard: WheelGuard) -> Result<GuardSubscription> {
        if WHEEL_LISTENER.with(Cell::get) {
            debug!("wheel listener already attached");
            return Ok(GuardSubscription::document_wheel());
        }

        let document = dom::document()?;
        let focus = DomFocus::new(document.clone());
        let cb = Closure::wrap(Box::new(move |_ev: web_sys::WheelEvent| {
            guard.handle_wheel(&focus);
        }) as Box<dyn FnMut(_)>);

        // Never calls preventDefault, so scrolling stays smooth.
        let opts = web_sys::AddEventListenerOptions::new();
        opts.set_passive(true);
        document
            .add_event_listener_with_callback_and_add_event_listener_options(
                GuardSubscription::WHEEL,
                cb.as_ref().unchecked_ref(),
                &opts,
            )
            .map_err(js_err)?;

        // Lives as long as the page; there is no removal path.
        cb.forget();
        WHEEL_LISTENER.with(|l| l.set(true));
        Ok(GuardSubscription::document_wheel())
    }

    fn spawn_init(&mut self, task: InitTask) {
        // The promise is dropped on purpose: a propagated failure becomes an
        // unhandled rejection, reported by the browser like any other.
        let _ = wasm_bindgen_futures::future_to_promise(async move {
            match task.run().await {
                None => Ok(JsValue::UNDEFINED),
                Some(e) => Err(JsValue::from_str(&e.to_string())),
            }
        });
    }
}
