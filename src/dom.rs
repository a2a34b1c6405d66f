//! Defensive DOM lookup and event helpers shared by every behavior.
//!
//! A missing element, an invalid selector, or a rejected JS call never fails
//! the page: lookups return empty results and fallible calls are logged and
//! swallowed through [`best_effort`].

use js_sys::Reflect;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{Document, Element, Event, EventTarget, HtmlElement, HtmlInputElement, NodeList};

/// The page document, when running in a browser.
#[must_use]
pub fn document() -> Option<Document> {
    web_sys::window().and_then(|window| window.document())
}

fn collect(list: Result<NodeList, JsValue>) -> Vec<Element> {
    let Ok(list) = list else {
        return Vec::new();
    };
    let mut out = Vec::with_capacity(list.length() as usize);
    for index in 0..list.length() {
        let Some(node) = list.item(index) else {
            continue;
        };
        if let Some(element) = node.dyn_ref::<Element>() {
            out.push(element.clone());
        }
    }
    out
}

/// All elements matching `selector`, or empty on any failure.
#[must_use]
pub fn elements(document: &Document, selector: &str) -> Vec<Element> {
    collect(document.query_selector_all(selector))
}

/// All elements matching `selector` below `root`.
#[must_use]
pub fn elements_within(root: &Element, selector: &str) -> Vec<Element> {
    collect(root.query_selector_all(selector))
}

/// All matching elements that are styleable HTML elements.
#[must_use]
pub fn html_elements(document: &Document, selector: &str) -> Vec<HtmlElement> {
    elements(document, selector)
        .iter()
        .filter_map(|element| element.dyn_ref::<HtmlElement>().cloned())
        .collect()
}

/// All matching form inputs.
#[must_use]
pub fn inputs(document: &Document, selector: &str) -> Vec<HtmlInputElement> {
    elements(document, selector)
        .iter()
        .filter_map(|element| element.dyn_ref::<HtmlInputElement>().cloned())
        .collect()
}

/// First element matching `selector`, if any.
#[must_use]
pub fn first(document: &Document, selector: &str) -> Option<Element> {
    document.query_selector(selector).unwrap_or(None)
}

/// First matching styleable HTML element, if any.
#[must_use]
pub fn first_html(document: &Document, selector: &str) -> Option<HtmlElement> {
    first(document, selector).and_then(|element| element.dyn_ref::<HtmlElement>().cloned())
}

/// First matching form input, if any.
#[must_use]
pub fn first_input(document: &Document, selector: &str) -> Option<HtmlInputElement> {
    first(document, selector).and_then(|element| element.dyn_ref::<HtmlInputElement>().cloned())
}

/// Register a page-lifetime event listener. The closure is leaked on purpose:
/// every listener here lives until navigation tears the page down.
pub fn listen<F>(target: &EventTarget, event: &str, handler: F)
where
    F: FnMut(Event) + 'static,
{
    let closure = Closure::<dyn FnMut(Event)>::new(handler);
    best_effort(
        target.add_event_listener_with_callback(event, closure.as_ref().unchecked_ref()),
        "event listener registration",
    );
    closure.forget();
}

/// Swallow a failed JS call; the corresponding behavior simply does not apply.
pub fn best_effort<T>(result: Result<T, JsValue>, context: &str) {
    if let Err(err) = result {
        log::debug!("{context} failed: {err:?}");
    }
}

/// A host-page global as JSON, or `None` when undefined or unserializable.
#[must_use]
pub fn global_json(name: &str) -> Option<serde_json::Value> {
    let window = web_sys::window()?;
    let value = Reflect::get(window.as_ref(), &JsValue::from_str(name)).unwrap_or(JsValue::UNDEFINED);
    if value.is_undefined() || value.is_null() {
        return None;
    }
    let text = js_sys::JSON::stringify(&value).map_or(None, |js| js.as_string())?;
    serde_json::from_str(&text).map_or(None, Some)
}

/// Whether a host-page global is defined and truthy.
#[must_use]
pub fn global_is_truthy(name: &str) -> bool {
    web_sys::window().is_some_and(|window| {
        Reflect::get(window.as_ref(), &JsValue::from_str(name))
            .map_or(false, |value| value.is_truthy())
    })
}
