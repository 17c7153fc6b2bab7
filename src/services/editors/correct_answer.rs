use crate::models::form::AuthoringForm;
use crate::utils::text::{is_blank, non_blank};

/// Marks one of the current options as the single correct answer.
pub fn select_option(mut form: AuthoringForm, value: &str) -> AuthoringForm {
    if is_blank(value) || !non_blank(&form.options).iter().any(|o| o == value) {
        tracing::debug!(value, "Ignoring selection of unknown option");
        return form;
    }
    form.correct_answer = value.to_string();
    form
}

/// Adds or removes `value` from the set of correct answers.
pub fn toggle_option(mut form: AuthoringForm, value: &str) -> AuthoringForm {
    if let Some(pos) = form.correct_answers.iter().position(|a| a == value) {
        form.correct_answers.remove(pos);
        return form;
    }
    if is_blank(value) || !non_blank(&form.options).iter().any(|o| o == value) {
        tracing::debug!(value, "Ignoring toggle of unknown option");
        return form;
    }
    form.correct_answers.push(value.to_string());
    form
}

pub fn set_verdict(mut form: AuthoringForm, verdict: bool) -> AuthoringForm {
    form.correct_answer = verdict.to_string();
    form
}

/// Free-text answer: blanks for fill-in-the-blank, the target for pronunciation.
pub fn set_answer_text(mut form: AuthoringForm, text: &str) -> AuthoringForm {
    form.correct_answer = text.to_string();
    form
}
