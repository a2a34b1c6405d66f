//! Submission confirmation guard.
//!
//! The guard compares checked answers against the number of question cards
//! and asks the user to confirm, with a more pointed prompt when questions
//! are still unanswered. Prompt selection is pure so it can be tested off
//! the DOM; only [`confirm_submit`] touches the page.

#[cfg(test)]
#[path = "submit_test.rs"]
mod submit_test;

use crate::consts::{CHECKED_RADIO_SELECTOR, QUESTION_CARD_SELECTOR};
use crate::dom;

/// Which confirmation prompt the current answer state calls for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubmitPrompt {
    /// Some questions are still unanswered.
    Incomplete { answered: usize, unanswered: usize },
    /// Every question has an answer.
    Complete,
}

#[must_use]
pub fn prompt_for(answered: usize, total: usize) -> SubmitPrompt {
    if answered < total {
        SubmitPrompt::Incomplete { answered, unanswered: total - answered }
    } else {
        SubmitPrompt::Complete
    }
}

impl SubmitPrompt {
    /// Confirmation text shown to the user. The page is localized in Uzbek;
    /// these strings mirror the host templates.
    #[must_use]
    pub fn message(&self) -> String {
        match self {
            Self::Incomplete { answered, unanswered } => format!(
                "Siz {answered} ta savolga javob berdingiz. {unanswered} ta savol javobsiz qoldi. Testni yakunlamoqchimisiz?"
            ),
            Self::Complete => "Testni yakunlamoqchimisiz? Barcha javoblaringiz saqlanadi.".to_owned(),
        }
    }
}

/// Count answers on the live page and ask the user to confirm submission.
///
/// Returns `false` when the user cancels or when no browser document is
/// available, so a broken environment never submits silently.
#[must_use]
pub fn confirm_submit() -> bool {
    let Some(window) = web_sys::window() else {
        return false;
    };
    let Some(document) = window.document() else {
        return false;
    };
    let answered = dom::elements(&document, CHECKED_RADIO_SELECTOR).len();
    let total = dom::elements(&document, QUESTION_CARD_SELECTOR).len();
    let message = prompt_for(answered, total).message();
    window.confirm_with_message(&message).unwrap_or(false)
}
