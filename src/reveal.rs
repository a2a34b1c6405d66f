//! Scroll-in entrance animation for cards.
//!
//! One `IntersectionObserver` watches every card present at wiring time.
//! A card animates on its first intersection and is immediately unobserved,
//! so re-entering the viewport never replays the animation. The observer
//! lives for the page lifetime; there is no teardown.

use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{
    Document, HtmlElement, IntersectionObserver, IntersectionObserverEntry,
    IntersectionObserverInit,
};

use crate::consts::{
    CARD_ENTER_ANIMATION, CARD_ROOT_MARGIN, CARD_SELECTOR, CARD_VISIBILITY_THRESHOLD,
};
use crate::dom::{self, best_effort};

pub fn observe_cards(document: &Document) {
    let cards = dom::elements(document, CARD_SELECTOR);
    if cards.is_empty() {
        return;
    }

    let callback = Closure::<dyn FnMut(js_sys::Array, IntersectionObserver)>::new(
        move |entries: js_sys::Array, observer: IntersectionObserver| {
            for entry in entries.iter() {
                let Ok(entry) = entry.dyn_into::<IntersectionObserverEntry>() else {
                    continue;
                };
                if !entry.is_intersecting() {
                    continue;
                }
                let target = entry.target();
                if let Some(card) = target.dyn_ref::<HtmlElement>() {
                    best_effort(
                        card.style().set_property("animation", CARD_ENTER_ANIMATION),
                        "card entrance animation",
                    );
                }
                // Fire-once: a card never animates twice.
                observer.unobserve(&target);
            }
        },
    );

    let options = IntersectionObserverInit::new();
    options.set_threshold(&JsValue::from_f64(CARD_VISIBILITY_THRESHOLD));
    options.set_root_margin(CARD_ROOT_MARGIN);

    let Ok(observer) =
        IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &options)
    else {
        return;
    };
    for card in &cards {
        observer.observe(card);
    }
    callback.forget();
}
