//! Retake confirmation modal.
//!
//! A two-state toggle over the `#retakeModal` element: `show` sets the
//! `active` class, `close` clears it. A window-level click listener closes
//! the modal when the click lands on the backdrop itself — a click anywhere
//! inside the modal content targets a descendant and is ignored. No focus
//! trap and no Escape handling, matching the host page.

use web_sys::Document;

use crate::consts::{MODAL_ACTIVE_CLASS, RETAKE_MODAL_ID};
use crate::dom::{self, best_effort};

pub fn show() {
    set_active(true);
}

pub fn close() {
    set_active(false);
}

fn set_active(active: bool) {
    let Some(document) = dom::document() else {
        return;
    };
    let Some(modal) = document.get_element_by_id(RETAKE_MODAL_ID) else {
        return;
    };
    let result = if active {
        modal.class_list().add_1(MODAL_ACTIVE_CLASS)
    } else {
        modal.class_list().remove_1(MODAL_ACTIVE_CLASS)
    };
    best_effort(result, "retake modal toggle");
}

/// Close the modal when the backdrop (the modal element itself) is clicked.
pub fn wire_backdrop_close(document: &Document) {
    let Some(window) = web_sys::window() else {
        return;
    };
    let document = document.clone();
    dom::listen(&window, "click", move |event| {
        let Some(modal) = document.get_element_by_id(RETAKE_MODAL_ID) else {
            return;
        };
        let Some(target) = event.target() else {
            return;
        };
        if js_sys::Object::is(target.as_ref(), modal.as_ref()) {
            close();
        }
    });
}
