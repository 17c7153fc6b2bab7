use std::collections::BTreeMap;

use crate::models::form::AuthoringForm;
use crate::models::question::{MatchPair, Question, QuestionBody};
use crate::utils::text::{is_blank, non_blank, non_blank_trimmed, or_placeholders};

const PLACEHOLDER_SLOTS: usize = 2;

/// Rebuilds an authoring form from a stored question.
///
/// Returns `None` for kinds this build cannot edit; malformed payloads of a
/// known kind decode to placeholder slots rather than failing.
pub fn decode(question: &Question) -> Option<AuthoringForm> {
    let Some(kind) = question.kind.known() else {
        tracing::warn!(kind = %question.kind, question_id = question.id, "Cannot edit unsupported question type");
        return None;
    };
    let body = QuestionBody::from_json(kind, &question.content, &question.correct_answer);
    let mut form = decode_body(body);
    form.audio_url = question.audio_url.clone().filter(|url| !is_blank(url));
    form.explanation = question.explanation.clone();
    Some(form)
}

pub fn decode_body(body: QuestionBody) -> AuthoringForm {
    let mut form = AuthoringForm::blank(body.kind());
    match body {
        QuestionBody::Mcq { content, answer } => {
            form.question_text = content.question;
            form.options = or_placeholders(content.options, PLACEHOLDER_SLOTS);
            form.correct_answer = answer.answer;
        }
        QuestionBody::MultipleSelect { content, answer } => {
            form.question_text = content.question;
            let options = non_blank(&content.options);
            form.correct_answers = answer
                .answers
                .into_iter()
                .filter(|a| options.contains(a))
                .collect();
            form.options = or_placeholders(content.options, PLACEHOLDER_SLOTS);
        }
        QuestionBody::TrueFalse { content, answer } => {
            form.question_text = content.question;
            form.correct_answer = answer.answer.map(|b| b.to_string()).unwrap_or_default();
        }
        QuestionBody::FillInTheBlank { content, answer } => {
            form.question_text = content.text;
            form.correct_answer = answer.answers.join(", ");
        }
        QuestionBody::Matching { content, answer } => {
            let (left, right): (Vec<String>, Vec<String>) = content
                .pairs
                .iter()
                .map(|p| (p.left.clone(), p.right.clone()))
                .unzip();
            let left = non_blank_trimmed(&left);
            let right = non_blank_trimmed(&right);
            form.match_pairs = locate_pairs(&answer.pairs, &left, &right);
            form.question_text = content.question;
            form.left_items = or_placeholders(left, PLACEHOLDER_SLOTS);
            form.right_items = or_placeholders(right, PLACEHOLDER_SLOTS);
        }
        QuestionBody::Ordering { content, answer } => {
            // `order` indexes the stored items as written, blanks included.
            let filled = non_blank(&content.items);
            let authored = if is_permutation(&answer.order, content.items.len()) {
                non_blank(&permute(&content.items, &answer.order))
            } else if is_permutation(&answer.order, filled.len()) {
                permute(&filled, &answer.order)
            } else {
                if !answer.order.is_empty() {
                    tracing::warn!(
                        items = content.items.len(),
                        order = answer.order.len(),
                        "Ordering answer does not match stored items, keeping storage order"
                    );
                }
                filled
            };
            form.question_text = content.question;
            form.arranged_words = authored.clone();
            form.options = or_placeholders(authored, PLACEHOLDER_SLOTS);
        }
        QuestionBody::Pronunciation { content, answer } => {
            // A target equal to the text is the encoder's fallback, not an override.
            form.correct_answer = if answer.text == content.text {
                String::new()
            } else {
                answer.text
            };
            form.question_text = content.text;
        }
        QuestionBody::Transcript { content, answer } => {
            form.question_text = content.text;
            form.correct_answer = answer.text;
        }
    }
    form
}

/// Maps value pairs back to indices; the first item with an equal value wins.
fn locate_pairs(pairs: &[MatchPair], left: &[String], right: &[String]) -> BTreeMap<usize, usize> {
    pairs
        .iter()
        .filter_map(|pair| {
            let l = left.iter().position(|item| *item == pair.left.trim())?;
            let r = right.iter().position(|item| *item == pair.right.trim())?;
            Some((l, r))
        })
        .collect()
}

fn permute(items: &[String], order: &[usize]) -> Vec<String> {
    order.iter().map(|i| items[*i].clone()).collect()
}

fn is_permutation(order: &[usize], len: usize) -> bool {
    if order.len() != len {
        return false;
    }
    let mut seen = vec![false; len];
    for &idx in order {
        if idx >= len || seen[idx] {
            return false;
        }
        seen[idx] = true;
    }
    true
}
