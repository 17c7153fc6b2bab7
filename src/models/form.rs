use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::models::question_kind::QuestionKind;
use crate::utils::text::blank_slots;

/// Editable state of one authoring session.
///
/// Wide enough to hold the fields of every kind; only the slice exposed by
/// [`AuthoringForm::view`] is meaningful for the current `kind`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AuthoringForm {
    #[serde(rename = "type")]
    pub kind: QuestionKind,
    #[serde(default)]
    pub question_text: String,
    #[serde(default)]
    pub options: Vec<String>,
    #[serde(default)]
    pub left_items: Vec<String>,
    #[serde(default)]
    pub right_items: Vec<String>,
    /// Left slot index -> right slot index.
    #[serde(default)]
    pub match_pairs: BTreeMap<usize, usize>,
    #[serde(default)]
    pub arranged_words: Vec<String>,
    #[serde(default)]
    pub correct_answer: String,
    #[serde(default)]
    pub correct_answers: Vec<String>,
    #[serde(default, rename = "audio_url", skip_serializing_if = "Option::is_none")]
    pub audio_url: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub explanation: Option<String>,
}

impl AuthoringForm {
    pub fn blank(kind: QuestionKind) -> Self {
        Self {
            kind,
            question_text: String::new(),
            options: blank_slots(kind.default_option_slots()),
            left_items: blank_slots(2),
            right_items: blank_slots(2),
            match_pairs: BTreeMap::new(),
            arranged_words: Vec::new(),
            correct_answer: String::new(),
            correct_answers: Vec::new(),
            audio_url: None,
            explanation: None,
        }
    }

    pub fn view(&self) -> FormView<'_> {
        match self.kind {
            QuestionKind::Mcq => FormView::Mcq {
                question: &self.question_text,
                options: &self.options,
                correct: &self.correct_answer,
            },
            QuestionKind::MultipleSelect => FormView::MultipleSelect {
                question: &self.question_text,
                options: &self.options,
                correct: &self.correct_answers,
            },
            QuestionKind::TrueFalse => FormView::TrueFalse {
                question: &self.question_text,
                correct: &self.correct_answer,
            },
            QuestionKind::FillInTheBlank => FormView::FillInTheBlank {
                text: &self.question_text,
                answers: &self.correct_answer,
            },
            QuestionKind::Matching => FormView::Matching {
                question: &self.question_text,
                left: &self.left_items,
                right: &self.right_items,
                pairs: &self.match_pairs,
            },
            QuestionKind::Ordering => FormView::Ordering {
                question: &self.question_text,
                options: &self.options,
                arranged: &self.arranged_words,
            },
            QuestionKind::Pronunciation => FormView::Pronunciation {
                text: &self.question_text,
                target: &self.correct_answer,
            },
            QuestionKind::Transcript => FormView::Transcript {
                instruction: &self.question_text,
                transcript: &self.correct_answer,
                audio_url: self.audio_url.as_deref(),
            },
        }
    }
}

impl Default for AuthoringForm {
    fn default() -> Self {
        Self::blank(QuestionKind::Mcq)
    }
}

/// Borrowed, kind-specific slice of an [`AuthoringForm`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormView<'a> {
    Mcq {
        question: &'a str,
        options: &'a [String],
        correct: &'a str,
    },
    MultipleSelect {
        question: &'a str,
        options: &'a [String],
        correct: &'a [String],
    },
    TrueFalse {
        question: &'a str,
        correct: &'a str,
    },
    FillInTheBlank {
        text: &'a str,
        /// Comma separated, one entry per blank.
        answers: &'a str,
    },
    Matching {
        question: &'a str,
        left: &'a [String],
        right: &'a [String],
        pairs: &'a BTreeMap<usize, usize>,
    },
    Ordering {
        question: &'a str,
        options: &'a [String],
        arranged: &'a [String],
    },
    Pronunciation {
        text: &'a str,
        /// Empty means "same as text".
        target: &'a str,
    },
    Transcript {
        instruction: &'a str,
        transcript: &'a str,
        audio_url: Option<&'a str>,
    },
}
