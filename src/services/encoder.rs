use crate::models::form::{AuthoringForm, FormView};
use crate::models::question::{
    BoolAnswer, ChoiceContent, EncodedQuestion, MatchPair, MatchingContent, MultiAnswer,
    OrderAnswer, OrderingContent, PairsAnswer, QuestionBody, SingleAnswer, StatementContent,
    TextAnswer, TextContent,
};
use crate::services::editors::ordering::sync_arranged;
use crate::utils::text::{is_blank, non_blank, non_blank_trimmed, split_answers};

/// Shapes the form into the typed body of its kind.
pub fn encode_body(form: &AuthoringForm) -> QuestionBody {
    match form.view() {
        FormView::Mcq {
            question,
            options,
            correct,
        } => QuestionBody::Mcq {
            content: ChoiceContent {
                question: question.to_string(),
                options: non_blank(options),
            },
            answer: SingleAnswer {
                answer: correct.to_string(),
            },
        },
        FormView::MultipleSelect {
            question,
            options,
            correct,
        } => {
            let options = non_blank(options);
            let answers = correct
                .iter()
                .filter(|a| options.contains(a))
                .cloned()
                .collect();
            QuestionBody::MultipleSelect {
                content: ChoiceContent {
                    question: question.to_string(),
                    options,
                },
                answer: MultiAnswer { answers },
            }
        }
        FormView::TrueFalse { question, correct } => QuestionBody::TrueFalse {
            content: StatementContent {
                question: question.to_string(),
            },
            answer: BoolAnswer {
                answer: Some(correct == "true"),
            },
        },
        FormView::FillInTheBlank { text, answers } => QuestionBody::FillInTheBlank {
            content: TextContent {
                text: text.to_string(),
            },
            answer: MultiAnswer {
                answers: split_answers(answers),
            },
        },
        FormView::Matching {
            question,
            left,
            right,
            pairs,
        } => {
            // Pair indices address the editor slots, blanks included.
            let resolved = pairs
                .iter()
                .filter_map(|(l, r)| {
                    let left = filled(left, *l)?;
                    let right = filled(right, *r)?;
                    Some(MatchPair {
                        left: left.to_string(),
                        right: right.to_string(),
                    })
                })
                .collect();
            let left = non_blank_trimmed(left);
            let right = non_blank_trimmed(right);
            let rows = left.len().max(right.len());
            let columns = (0..rows)
                .map(|i| MatchPair {
                    left: left.get(i).cloned().unwrap_or_default(),
                    right: right.get(i).cloned().unwrap_or_default(),
                })
                .collect();
            QuestionBody::Matching {
                content: MatchingContent {
                    question: question.to_string(),
                    pairs: columns,
                },
                answer: PairsAnswer { pairs: resolved },
            }
        }
        FormView::Ordering {
            question,
            options,
            arranged,
        } => {
            // Items are stored in the asserted order, so `order` is the identity.
            let items = sync_arranged(options, arranged).unwrap_or_else(|| arranged.to_vec());
            let order = (0..items.len()).collect();
            QuestionBody::Ordering {
                content: OrderingContent {
                    question: question.to_string(),
                    items,
                },
                answer: OrderAnswer { order },
            }
        }
        FormView::Pronunciation { text, target } => {
            let target = if is_blank(target) { text } else { target };
            QuestionBody::Pronunciation {
                content: TextContent {
                    text: text.to_string(),
                },
                answer: TextAnswer {
                    text: target.to_string(),
                },
            }
        }
        FormView::Transcript {
            instruction,
            transcript,
            ..
        } => QuestionBody::Transcript {
            content: TextContent {
                text: instruction.to_string(),
            },
            answer: TextAnswer {
                text: transcript.to_string(),
            },
        },
    }
}

fn filled(slots: &[String], index: usize) -> Option<&str> {
    slots
        .get(index)
        .map(|slot| slot.trim())
        .filter(|slot| !slot.is_empty())
}

pub fn encode(form: &AuthoringForm) -> EncodedQuestion {
    let encoded = encode_body(form).to_encoded();
    tracing::debug!(kind = %form.kind, "Encoded question form");
    encoded
}
