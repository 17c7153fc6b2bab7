use crate::models::form::AuthoringForm;
use crate::models::question_kind::QuestionKind;

/// Reinitialises the form for a new kind.
///
/// Text, options, pairs and every correctness field are dropped; only
/// kind-agnostic metadata (audio reference, explanation) survives.
pub fn reset_for_kind(current: &AuthoringForm, kind: QuestionKind) -> AuthoringForm {
    tracing::debug!(from = %current.kind, to = %kind, "Resetting form for new question type");
    AuthoringForm {
        audio_url: current.audio_url.clone(),
        explanation: current.explanation.clone(),
        ..AuthoringForm::blank(kind)
    }
}
