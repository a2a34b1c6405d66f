use super::*;

#[test]
fn partial_answers_get_the_incomplete_prompt() {
    assert_eq!(prompt_for(3, 10), SubmitPrompt::Incomplete { answered: 3, unanswered: 7 });
    assert_eq!(prompt_for(0, 1), SubmitPrompt::Incomplete { answered: 0, unanswered: 1 });
    assert_eq!(prompt_for(9, 10), SubmitPrompt::Incomplete { answered: 9, unanswered: 1 });
}

#[test]
fn full_answers_get_the_completion_prompt() {
    assert_eq!(prompt_for(10, 10), SubmitPrompt::Complete);
    assert_eq!(prompt_for(0, 0), SubmitPrompt::Complete);
    // More checked inputs than cards (stray radios outside cards) still
    // counts as complete rather than underflowing.
    assert_eq!(prompt_for(11, 10), SubmitPrompt::Complete);
}

#[test]
fn incomplete_message_reports_both_counts() {
    let message = SubmitPrompt::Incomplete { answered: 3, unanswered: 7 }.message();
    assert_eq!(
        message,
        "Siz 3 ta savolga javob berdingiz. 7 ta savol javobsiz qoldi. Testni yakunlamoqchimisiz?"
    );
}

#[test]
fn complete_message_is_the_generic_confirmation() {
    assert_eq!(
        SubmitPrompt::Complete.message(),
        "Testni yakunlamoqchimisiz? Barcha javoblaringiz saqlanadi."
    );
}

#[test]
fn counts_flow_through_prompt_selection_into_the_message() {
    let message = prompt_for(4, 9).message();
    assert!(message.contains("Siz 4 ta savolga"));
    assert!(message.contains("5 ta savol javobsiz"));
}
