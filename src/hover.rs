//! Hover affordance on answer options: a small horizontal nudge on pointer
//! enter, reverted on leave. Purely cosmetic and stateless.

use web_sys::Document;

use crate::consts::ANSWER_OPTION_SELECTOR;
use crate::dom::{self, best_effort};

pub fn wire_answer_options(document: &Document) {
    for option in dom::html_elements(document, ANSWER_OPTION_SELECTOR) {
        let enter = option.clone();
        dom::listen(&option, "mouseenter", move |_event| {
            best_effort(
                enter.style().set_property("transform", "translateX(5px)"),
                "answer option hover",
            );
        });
        let leave = option.clone();
        dom::listen(&option, "mouseleave", move |_event| {
            best_effort(
                leave.style().set_property("transform", "translateX(0)"),
                "answer option hover revert",
            );
        });
    }
}
