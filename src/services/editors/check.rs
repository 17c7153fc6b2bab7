use serde::Serialize;

use crate::models::form::{AuthoringForm, FormView};
use crate::services::editors::matching::MIN_PAIRS;
use crate::services::editors::options::MIN_OPTIONS;
use crate::utils::text::{is_blank, non_blank, non_blank_trimmed, split_answers};

/// Something the author still has to fill in before the form can be saved.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, thiserror::Error)]
#[serde(tag = "code", rename_all = "snake_case")]
pub enum FormIssue {
    #[error("Question text is required")]
    MissingQuestionText,

    #[error("At least {min} options are required, found {found}")]
    TooFewOptions { min: usize, found: usize },

    #[error("A correct answer is required")]
    MissingCorrectAnswer,

    #[error("Correct answer '{answer}' is not one of the options")]
    UnknownCorrectAnswer { answer: String },

    #[error("An audio file is required")]
    MissingAudio,

    #[error("At least {min} complete pairs are required, found {found}")]
    TooFewPairs { min: usize, found: usize },

    #[error("Left item '{item}' has no match")]
    UnmatchedLeftItem { index: usize, item: String },
}

/// Lists every issue of the form; an empty list means it is ready to encode.
pub fn check_form(form: &AuthoringForm) -> Vec<FormIssue> {
    let mut issues = Vec::new();
    match form.view() {
        FormView::Mcq {
            question,
            options,
            correct,
        } => {
            require_text(&mut issues, question);
            let options = require_options(&mut issues, options);
            if is_blank(correct) {
                issues.push(FormIssue::MissingCorrectAnswer);
            } else if !options.iter().any(|o| o == correct) {
                issues.push(FormIssue::UnknownCorrectAnswer {
                    answer: correct.to_string(),
                });
            }
        }
        FormView::MultipleSelect {
            question,
            options,
            correct,
        } => {
            require_text(&mut issues, question);
            let options = require_options(&mut issues, options);
            if correct.is_empty() {
                issues.push(FormIssue::MissingCorrectAnswer);
            }
            for answer in correct.iter().filter(|a| !options.contains(a)) {
                issues.push(FormIssue::UnknownCorrectAnswer {
                    answer: answer.clone(),
                });
            }
        }
        FormView::TrueFalse { question, correct } => {
            require_text(&mut issues, question);
            if correct != "true" && correct != "false" {
                issues.push(FormIssue::MissingCorrectAnswer);
            }
        }
        FormView::FillInTheBlank { text, answers } => {
            require_text(&mut issues, text);
            if split_answers(answers).is_empty() {
                issues.push(FormIssue::MissingCorrectAnswer);
            }
        }
        FormView::Matching {
            question,
            left,
            right,
            pairs,
        } => {
            require_text(&mut issues, question);
            let complete = non_blank_trimmed(left).len().min(non_blank_trimmed(right).len());
            if complete < MIN_PAIRS {
                issues.push(FormIssue::TooFewPairs {
                    min: MIN_PAIRS,
                    found: complete,
                });
            }
            for (index, item) in left.iter().enumerate() {
                if is_blank(item) {
                    continue;
                }
                let linked = pairs
                    .get(&index)
                    .and_then(|r| right.get(*r))
                    .is_some_and(|r| !is_blank(r));
                if !linked {
                    issues.push(FormIssue::UnmatchedLeftItem {
                        index,
                        item: item.trim().to_string(),
                    });
                }
            }
        }
        FormView::Ordering {
            question, options, ..
        } => {
            require_text(&mut issues, question);
            require_options(&mut issues, options);
        }
        FormView::Pronunciation { text, .. } => {
            require_text(&mut issues, text);
        }
        FormView::Transcript {
            instruction,
            transcript,
            audio_url,
        } => {
            require_text(&mut issues, instruction);
            if audio_url.map_or(true, is_blank) {
                issues.push(FormIssue::MissingAudio);
            }
            if is_blank(transcript) {
                issues.push(FormIssue::MissingCorrectAnswer);
            }
        }
    }
    issues
}

fn require_text(issues: &mut Vec<FormIssue>, text: &str) {
    if is_blank(text) {
        issues.push(FormIssue::MissingQuestionText);
    }
}

fn require_options(issues: &mut Vec<FormIssue>, options: &[String]) -> Vec<String> {
    let filled = non_blank(options);
    if filled.len() < MIN_OPTIONS {
        issues.push(FormIssue::TooFewOptions {
            min: MIN_OPTIONS,
            found: filled.len(),
        });
    }
    filled
}
