//! Kind-specific authoring sub-editors.
//!
//! Every operation takes the current form by value and returns the next one;
//! requests that do not apply (out of range, below a minimum) come back
//! unchanged.

pub mod check;
pub mod correct_answer;
pub mod matching;
pub mod options;
pub mod ordering;
pub mod transcript;

use serde::{Deserialize, Serialize};

use crate::models::form::AuthoringForm;
use crate::models::question_kind::QuestionKind;
use crate::services::resetter::reset_for_kind;

use self::matching::Side;

/// One authoring edit, as sent by a client.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "action", rename_all = "snake_case")]
pub enum EditorAction {
    SetQuestionText { value: String },
    SetExplanation { value: Option<String> },
    SwitchKind { kind: QuestionKind },
    AddOption,
    UpdateOption { index: usize, value: String },
    RemoveOption { index: usize },
    MoveWordUp { index: usize },
    MoveWordDown { index: usize },
    AddPair,
    RemovePair { index: usize },
    UpdateLeft { index: usize, value: String },
    UpdateRight { index: usize, value: String },
    Link { left: usize, right: usize },
    Unlink { left: usize },
    SetAudio { audio_url: Option<String> },
    SetTranscript { value: String },
    SelectCorrect { value: String },
    ToggleCorrect { value: String },
    SetVerdict { value: bool },
    SetAnswerText { value: String },
}

pub fn apply(form: AuthoringForm, action: EditorAction) -> AuthoringForm {
    match action {
        EditorAction::SetQuestionText { value } => transcript::set_instruction(form, &value),
        EditorAction::SetExplanation { value } => AuthoringForm {
            explanation: value.filter(|v| !v.trim().is_empty()),
            ..form
        },
        EditorAction::SwitchKind { kind } => reset_for_kind(&form, kind),
        EditorAction::AddOption => options::add_option(form),
        EditorAction::UpdateOption { index, value } => options::update_option(form, index, &value),
        EditorAction::RemoveOption { index } => options::remove_option(form, index),
        EditorAction::MoveWordUp { index } => ordering::move_up(form, index),
        EditorAction::MoveWordDown { index } => ordering::move_down(form, index),
        EditorAction::AddPair => matching::add_pair(form),
        EditorAction::RemovePair { index } => matching::remove_pair(form, index),
        EditorAction::UpdateLeft { index, value } => {
            matching::update_item(form, Side::Left, index, &value)
        }
        EditorAction::UpdateRight { index, value } => {
            matching::update_item(form, Side::Right, index, &value)
        }
        EditorAction::Link { left, right } => matching::link(form, left, right),
        EditorAction::Unlink { left } => matching::unlink(form, left),
        EditorAction::SetAudio { audio_url } => transcript::set_audio(form, audio_url),
        EditorAction::SetTranscript { value } => transcript::set_transcript(form, &value),
        EditorAction::SelectCorrect { value } => correct_answer::select_option(form, &value),
        EditorAction::ToggleCorrect { value } => correct_answer::toggle_option(form, &value),
        EditorAction::SetVerdict { value } => correct_answer::set_verdict(form, value),
        EditorAction::SetAnswerText { value } => correct_answer::set_answer_text(form, &value),
    }
}
