//! Answer-change highlight and progress diagnostics.
//!
//! Each radio inside a question card gets a `change` listener that accents
//! the card's left border and recomputes the answered/total count. The count
//! is only logged for now; a visible progress bar is a natural extension
//! point once the page design calls for one.

#[cfg(test)]
#[path = "progress_test.rs"]
mod progress_test;

use web_sys::Document;

use crate::consts::{
    ANSWERED_CARD_ACCENT, CHECKED_RADIO_SELECTOR, QUESTION_CARD_SELECTOR, RADIO_SELECTOR,
};
use crate::dom::{self, best_effort};

pub fn wire_question_cards(document: &Document) {
    for card in dom::html_elements(document, QUESTION_CARD_SELECTOR) {
        for input in dom::elements_within(&card, RADIO_SELECTOR) {
            let card = card.clone();
            let document = document.clone();
            dom::listen(&input, "change", move |_event| {
                best_effort(
                    card.style().set_property("border-left", ANSWERED_CARD_ACCENT),
                    "answered card accent",
                );
                log_progress(&document);
            });
        }
    }
}

fn log_progress(document: &Document) {
    let answered = dom::elements(document, CHECKED_RADIO_SELECTOR).len();
    let total = dom::elements(document, QUESTION_CARD_SELECTOR).len();
    log::debug!("{}", summary(answered, total));
}

/// Diagnostic line for the browser console.
#[must_use]
pub fn summary(answered: usize, total: usize) -> String {
    format!("Progress: {answered}/{total}")
}
