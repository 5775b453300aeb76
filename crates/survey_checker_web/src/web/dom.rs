use survey_checker::config::CONFIG_ELEMENT_ID;
use survey_checker::guard::{FocusSource, FocusTarget};
use survey_checker::{Error, Result};
use tracing::debug;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;

pub(super) fn js_err(v: JsValue) -> Error {
    Error::Js(v.as_string().unwrap_or_else(|| format!("{v:?}")))
}

pub(super) fn window() -> Result<web_sys::Window> {
    web_sys::window().ok_or_else(|| Error::dom("no window"))
}

pub(super) fn document() -> Result<web_sys::Document> {
    window()?
        .document()
        .ok_or_else(|| Error::dom("no document"))
}

/// First element matching `selector`, cast to `T`.
pub(super) fn select<T: JsCast>(selector: &str) -> Result<T> {
    select_opt(selector)?.ok_or_else(|| Error::dom(format!("{selector}: not found")))
}

pub(super) fn select_opt<T: JsCast>(selector: &str) -> Result<Option<T>> {
    let Some(el) = document()?.query_selector(selector).map_err(js_err)? else {
        return Ok(None);
    };
    el.dyn_into::<T>()
        .map(Some)
        .map_err(|_| Error::dom(format!("{selector}: unexpected element type")))
}

/// Raw JSON of the optional `<script id="survey-checker-config">` block.
pub(super) fn page_config_text() -> Result<Option<String>> {
    let el: Option<web_sys::Element> = select_opt(&format!("#{CONFIG_ELEMENT_ID}"))?;
    Ok(el
        .and_then(|el| el.text_content())
        .filter(|raw| !raw.trim().is_empty()))
}

/// `document.activeElement`, seen through the guard's focus traits.
#[derive(Clone)]
pub struct DomFocus {
    document: web_sys::Document,
}

impl DomFocus {
    pub fn new(document: web_sys::Document) -> Self {
        Self { document }
    }
}

impl FocusSource for DomFocus {
    type Target = ActiveElement;

    fn active_element(&self) -> Option<ActiveElement> {
        let el = self.document.active_element()?;
        // With nothing focused the browser reports <body>.
        if let Some(body) = self.document.body() {
            let body: web_sys::Element = body.into();
            if body == el {
                return None;
            }
        }
        Some(ActiveElement(el))
    }
}

pub struct ActiveElement(web_sys::Element);

impl FocusTarget for ActiveElement {
    fn input_type(&self) -> Option<String> {
        self.0
            .dyn_ref::<web_sys::HtmlInputElement>()
            .map(|input| input.type_())
    }

    fn blur(&self) {
        let Some(el) = self.0.dyn_ref::<web_sys::HtmlElement>() else {
            return;
        };
        if let Err(e) = el.blur() {
            debug!("blur threw: {}", js_err(e));
        }
    }
}
