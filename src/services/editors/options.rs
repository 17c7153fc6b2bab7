use crate::models::form::AuthoringForm;
use crate::models::question_kind::QuestionKind;
use crate::services::editors::ordering::sync_arranged;
use crate::utils::text::non_blank;

/// Option slots never drop below this count.
pub const MIN_OPTIONS: usize = 2;

pub fn add_option(mut form: AuthoringForm) -> AuthoringForm {
    form.options.push(String::new());
    reconcile(&mut form);
    form
}

pub fn update_option(mut form: AuthoringForm, index: usize, value: &str) -> AuthoringForm {
    let Some(slot) = form.options.get_mut(index) else {
        tracing::debug!(index, "Ignoring update of missing option slot");
        return form;
    };
    *slot = value.to_string();
    reconcile(&mut form);
    form
}

pub fn remove_option(mut form: AuthoringForm, index: usize) -> AuthoringForm {
    if form.options.len() <= MIN_OPTIONS || index >= form.options.len() {
        tracing::debug!(index, slots = form.options.len(), "Option removal blocked");
        return form;
    }
    form.options.remove(index);
    reconcile(&mut form);
    form
}

/// Re-establishes the correctness fields that depend on the option list.
pub(crate) fn reconcile(form: &mut AuthoringForm) {
    match form.kind {
        QuestionKind::Mcq => {
            let options = non_blank(&form.options);
            if !form.correct_answer.is_empty() && !options.contains(&form.correct_answer) {
                form.correct_answer.clear();
            }
        }
        QuestionKind::MultipleSelect => {
            let options = non_blank(&form.options);
            form.correct_answers.retain(|answer| options.contains(answer));
        }
        QuestionKind::Ordering => {
            if let Some(arranged) = sync_arranged(&form.options, &form.arranged_words) {
                form.arranged_words = arranged;
            }
        }
        QuestionKind::TrueFalse
        | QuestionKind::FillInTheBlank
        | QuestionKind::Matching
        | QuestionKind::Pronunciation
        | QuestionKind::Transcript => {}
    }
}
