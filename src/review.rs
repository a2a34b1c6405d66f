//! Previous-answer restoration for review mode.
//!
//! The server template injects two globals on a review page: a map from
//! question id to the stored answer, and a flag saying a submission exists.
//! When both are present, each stored choice is re-checked and its answer
//! option is colored by correctness, then the whole form is locked down.
//! Entries that no longer match an input are skipped without complaint.

#[cfg(test)]
#[path = "review_test.rs"]
mod review_test;

use serde::Deserialize;
use wasm_bindgen::JsCast;
use web_sys::Document;

use crate::consts::{
    ANSWER_OPTION_SELECTOR, CORRECT_BACKGROUND, CORRECT_BORDER, HAS_PREVIOUS_GLOBAL,
    PREVIOUS_ANSWERS_GLOBAL, RADIO_SELECTOR, SUBMIT_SECTION_SELECTOR, WRONG_BACKGROUND,
    WRONG_BORDER,
};
use crate::dom::{self, best_effort};

/// One restored answer: which choice was picked for a question and whether
/// the server graded it correct.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PreviousAnswer {
    pub question_id: String,
    pub selected: String,
    pub is_correct: bool,
}

/// Wire format of a single map entry as the template serializes it.
#[derive(Debug, Deserialize)]
struct RawEntry {
    #[serde(default)]
    selected: Option<serde_json::Value>,
    #[serde(default)]
    is_correct: bool,
}

/// Parse the host's previous-answers map into typed entries.
///
/// Malformed entries and entries without a usable `selected` choice are
/// dropped. The result is ordered by question id so restoration (and tests)
/// are deterministic.
#[must_use]
pub fn parse_previous_answers(raw: &serde_json::Value) -> Vec<PreviousAnswer> {
    let Some(map) = raw.as_object() else {
        return Vec::new();
    };
    let mut entries: Vec<PreviousAnswer> = map
        .iter()
        .filter_map(|(question_id, value)| {
            let Ok(entry) = serde_json::from_value::<RawEntry>(value.clone()) else {
                return None;
            };
            let selected = normalize_choice(entry.selected.as_ref())?;
            Some(PreviousAnswer {
                question_id: question_id.clone(),
                selected,
                is_correct: entry.is_correct,
            })
        })
        .collect();
    entries.sort_by(|a, b| a.question_id.cmp(&b.question_id));
    entries
}

/// A stored choice is usable when it is a non-empty string; numeric choices
/// are tolerated and stringified to match the input `value` attribute.
fn normalize_choice(selected: Option<&serde_json::Value>) -> Option<String> {
    match selected? {
        serde_json::Value::String(choice) if !choice.is_empty() => Some(choice.clone()),
        serde_json::Value::Number(choice) => Some(choice.to_string()),
        _ => None,
    }
}

/// Restore a prior submission if the host page declares one.
pub fn restore_if_present(document: &Document) {
    let Some(raw) = dom::global_json(PREVIOUS_ANSWERS_GLOBAL) else {
        return;
    };
    if !dom::global_is_truthy(HAS_PREVIOUS_GLOBAL) {
        return;
    }
    for answer in parse_previous_answers(&raw) {
        apply_answer(document, &answer);
    }
    lock_radios(document);
    hide_submit_section(document);
}

fn apply_answer(document: &Document, answer: &PreviousAnswer) {
    let selector = format!(
        "input[name=\"question_{}\"][value=\"{}\"]",
        answer.question_id, answer.selected
    );
    let Some(input) = dom::first_input(document, &selector) else {
        return;
    };
    input.set_checked(true);

    let container = input.closest(ANSWER_OPTION_SELECTOR).unwrap_or(None);
    let Some(container) = container.as_ref().and_then(|el| el.dyn_ref::<web_sys::HtmlElement>())
    else {
        return;
    };
    let (background, border) = if answer.is_correct {
        (CORRECT_BACKGROUND, CORRECT_BORDER)
    } else {
        (WRONG_BACKGROUND, WRONG_BORDER)
    };
    best_effort(
        container.style().set_property("background", background),
        "answer option background",
    );
    best_effort(
        container.style().set_property("border-color", border),
        "answer option border",
    );
}

/// Review mode is read-only: no radio stays interactive.
fn lock_radios(document: &Document) {
    for input in dom::inputs(document, RADIO_SELECTOR) {
        input.set_disabled(true);
    }
}

fn hide_submit_section(document: &Document) {
    let Some(section) = dom::first_html(document, SUBMIT_SECTION_SELECTOR) else {
        return;
    };
    best_effort(
        section.style().set_property("display", "none"),
        "submit section hiding",
    );
}
