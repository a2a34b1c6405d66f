//! One-shot page wiring.
//!
//! Every behavior is installed exactly once, from module start, against the
//! markup present at that moment. Elements added later are not retrofitted.
//! The guard below makes a second `install` call a no-op rather than doubling
//! every listener.

use std::cell::Cell;

use web_sys::{Document, ScrollBehavior, ScrollToOptions};

use crate::dom::{self, best_effort};
use crate::{gauge, hover, modal, notice, progress, review, reveal};

thread_local! {
    static INSTALLED: Cell<bool> = const { Cell::new(false) };
}

/// Keyframes for the notification banner exit animation. Injected into the
/// page head so the host stylesheet does not need to carry them.
const SLIDE_OUT_KEYFRAMES: &str = "\
@keyframes slideOut {
    from { transform: translateY(0); opacity: 1; }
    to { transform: translateY(-20px); opacity: 0; }
}";

/// Wire every page behavior. Safe to call again; only the first call wires.
pub fn install() {
    let already = INSTALLED.with(|flag| flag.replace(true));
    if already {
        return;
    }
    let Some(document) = dom::document() else {
        return;
    };

    inject_exit_keyframes(&document);
    notice::schedule_dismissals(&document);
    review::restore_if_present(&document);
    reveal::observe_cards(&document);
    progress::wire_question_cards(&document);
    gauge::animate_if_present(&document);
    hover::wire_answer_options(&document);
    modal::wire_backdrop_close(&document);
    scroll_to_top();
}

fn inject_exit_keyframes(document: &Document) {
    let Ok(style) = document.create_element("style") else {
        return;
    };
    style.set_text_content(Some(SLIDE_OUT_KEYFRAMES));
    if let Some(head) = document.head() {
        best_effort(head.append_child(&style), "exit keyframes injection");
    }
}

/// Smooth-scroll back to the top so a reloaded page never starts mid-form.
fn scroll_to_top() {
    let Some(window) = web_sys::window() else {
        return;
    };
    let options = ScrollToOptions::new();
    options.set_top(0.0);
    options.set_behavior(ScrollBehavior::Smooth);
    window.scroll_to_with_scroll_to_options(&options);
}
