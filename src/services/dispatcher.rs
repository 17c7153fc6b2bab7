use rand::Rng;
use serde::Serialize;
use serde_json::Value as JsonValue;

use crate::models::answer::{AnswerResult, LearnerAnswer};
use crate::models::question::{Question, QuestionBody};
use crate::models::question_kind::{KindTag, QuestionKind};
use crate::services::collectors::{
    AnswerCollector, FillBlankCollector, LearnerInput, MatchingCollector, McqCollector,
    MultiSelectCollector, OrderingCollector, PronunciationCollector, TranscriptCollector,
    TrueFalseCollector,
};
use crate::utils::text::is_blank;

/// Which authoring sub-editor a kind is edited with.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "editor", rename_all = "snake_case")]
pub enum AuthoringEditor {
    /// Option list plus a single correct option.
    SingleChoice,
    /// Option list plus a set of correct options.
    MultiChoice,
    TrueFalse,
    FillInTheBlank,
    MatchingPairs,
    Ordering,
    Pronunciation,
    Transcript,
    Unsupported { kind: String },
}

pub fn authoring_editor(tag: &KindTag) -> AuthoringEditor {
    let Some(kind) = tag.known() else {
        return AuthoringEditor::Unsupported {
            kind: tag.as_str().to_string(),
        };
    };
    match kind {
        QuestionKind::Mcq => AuthoringEditor::SingleChoice,
        QuestionKind::MultipleSelect => AuthoringEditor::MultiChoice,
        QuestionKind::TrueFalse => AuthoringEditor::TrueFalse,
        QuestionKind::FillInTheBlank => AuthoringEditor::FillInTheBlank,
        QuestionKind::Matching => AuthoringEditor::MatchingPairs,
        QuestionKind::Ordering => AuthoringEditor::Ordering,
        QuestionKind::Pronunciation => AuthoringEditor::Pronunciation,
        QuestionKind::Transcript => AuthoringEditor::Transcript,
    }
}

/// The learner widget state for one question.
#[derive(Debug, Clone, PartialEq)]
pub enum LearnerCollector {
    Mcq(McqCollector),
    MultipleSelect(MultiSelectCollector),
    TrueFalse(TrueFalseCollector),
    FillInTheBlank(FillBlankCollector),
    Matching(MatchingCollector),
    Ordering(OrderingCollector),
    Pronunciation(PronunciationCollector),
    Transcript(TranscriptCollector),
    Unsupported { kind: String },
}

impl LearnerCollector {
    /// Builds the collector for `question`, seeded from a saved in-progress answer.
    pub fn for_question<R: Rng + ?Sized>(
        question: &Question,
        saved: Option<&JsonValue>,
        rng: &mut R,
    ) -> Self {
        let Some(kind) = question.kind.known() else {
            tracing::warn!(kind = %question.kind, question_id = question.id, "No learner widget for question type");
            return LearnerCollector::Unsupported {
                kind: question.kind.as_str().to_string(),
            };
        };
        let saved = saved.and_then(|value| LearnerAnswer::from_saved(kind, value));
        match QuestionBody::from_json(kind, &question.content, &question.correct_answer) {
            QuestionBody::Mcq { content, .. } => {
                LearnerCollector::Mcq(McqCollector::new(&content.options, saved))
            }
            QuestionBody::MultipleSelect { content, .. } => {
                LearnerCollector::MultipleSelect(MultiSelectCollector::new(&content.options, saved))
            }
            QuestionBody::TrueFalse { .. } => {
                LearnerCollector::TrueFalse(TrueFalseCollector::new(saved))
            }
            QuestionBody::FillInTheBlank { .. } => {
                LearnerCollector::FillInTheBlank(FillBlankCollector::new(saved))
            }
            QuestionBody::Matching { content, .. } => {
                LearnerCollector::Matching(MatchingCollector::new(&content.pairs, saved))
            }
            QuestionBody::Ordering { content, .. } => {
                LearnerCollector::Ordering(OrderingCollector::new(&content.items, saved, rng))
            }
            QuestionBody::Pronunciation { content, answer } => {
                let target = if is_blank(&answer.text) {
                    content.text
                } else {
                    answer.text
                };
                LearnerCollector::Pronunciation(PronunciationCollector::new(&target))
            }
            QuestionBody::Transcript { .. } => LearnerCollector::Transcript(TranscriptCollector::new(
                question.audio_url.clone().filter(|url| !is_blank(url)),
                saved,
            )),
        }
    }

    pub fn is_supported(&self) -> bool {
        self.as_collector().is_some()
    }

    fn as_collector(&self) -> Option<&dyn AnswerCollector> {
        let collector: &dyn AnswerCollector = match self {
            LearnerCollector::Mcq(c) => c,
            LearnerCollector::MultipleSelect(c) => c,
            LearnerCollector::TrueFalse(c) => c,
            LearnerCollector::FillInTheBlank(c) => c,
            LearnerCollector::Matching(c) => c,
            LearnerCollector::Ordering(c) => c,
            LearnerCollector::Pronunciation(c) => c,
            LearnerCollector::Transcript(c) => c,
            LearnerCollector::Unsupported { .. } => return None,
        };
        Some(collector)
    }

    fn as_collector_mut(&mut self) -> Option<&mut dyn AnswerCollector> {
        let collector: &mut dyn AnswerCollector = match self {
            LearnerCollector::Mcq(c) => c,
            LearnerCollector::MultipleSelect(c) => c,
            LearnerCollector::TrueFalse(c) => c,
            LearnerCollector::FillInTheBlank(c) => c,
            LearnerCollector::Matching(c) => c,
            LearnerCollector::Ordering(c) => c,
            LearnerCollector::Pronunciation(c) => c,
            LearnerCollector::Transcript(c) => c,
            LearnerCollector::Unsupported { .. } => return None,
        };
        Some(collector)
    }

    pub fn answer(&self) -> Option<LearnerAnswer> {
        self.as_collector().and_then(|c| c.answer())
    }

    pub fn can_submit(&self) -> bool {
        self.as_collector().is_some_and(|c| c.can_submit())
    }

    pub fn result(&self) -> Option<&AnswerResult> {
        self.as_collector().and_then(|c| c.result())
    }

    pub fn is_frozen(&self) -> bool {
        self.result().is_some()
    }

    pub fn freeze(&mut self, result: AnswerResult) {
        if let Some(c) = self.as_collector_mut() {
            c.freeze(result);
        }
    }

    /// Routes one interaction to the widget; returns `false` when it does not apply.
    pub fn apply(&mut self, input: LearnerInput) -> bool {
        match (self, input) {
            (LearnerCollector::Mcq(c), LearnerInput::Choose { option }) => c.select(&option),
            (LearnerCollector::MultipleSelect(c), LearnerInput::Choose { option }) => {
                c.toggle(&option)
            }
            (LearnerCollector::TrueFalse(c), LearnerInput::Verdict { value }) => c.choose(value),
            (LearnerCollector::FillInTheBlank(c), LearnerInput::Text { value }) => {
                c.set_text(&value)
            }
            (LearnerCollector::Transcript(c), LearnerInput::Text { value }) => c.set_text(&value),
            (LearnerCollector::Matching(c), LearnerInput::SelectLeft { item }) => {
                c.select_left(&item)
            }
            (LearnerCollector::Matching(c), LearnerInput::AssignRight { item }) => {
                c.assign_right(&item)
            }
            (LearnerCollector::Ordering(c), LearnerInput::PickWord { word }) => c.pick(&word),
            (LearnerCollector::Ordering(c), LearnerInput::ReturnWord { word }) => {
                c.put_back(&word)
            }
            (LearnerCollector::Pronunciation(c), LearnerInput::Score { score }) => {
                c.record_score(score)
            }
            (_, input) => {
                tracing::debug!(?input, "Input does not apply to this question type");
                return false;
            }
        }
        true
    }
}
