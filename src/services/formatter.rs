use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use serde_json::Value as JsonValue;

use crate::models::question::Question;
use crate::models::question_kind::{KindTag, QuestionKind};

/// Language used for the few labels the formatter renders itself.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Locale {
    #[default]
    En,
    Vi,
}

impl Locale {
    pub fn verdict_label(self, value: bool) -> &'static str {
        match (self, value) {
            (Locale::En, true) => "True",
            (Locale::En, false) => "False",
            (Locale::Vi, true) => "Đúng",
            (Locale::Vi, false) => "Sai",
        }
    }
}

impl fmt::Display for Locale {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Locale::En => "en",
            Locale::Vi => "vi",
        })
    }
}

impl FromStr for Locale {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "en" => Ok(Locale::En),
            "vi" => Ok(Locale::Vi),
            other => Err(format!("unsupported locale '{}'", other)),
        }
    }
}

/// Renders a canonical correct answer as one line of text.
pub fn format_correct_answer(kind: &KindTag, correct: &JsonValue, locale: Locale) -> String {
    let Some(kind) = kind.known() else {
        return scalar_text(correct);
    };
    match kind {
        QuestionKind::MultipleSelect | QuestionKind::FillInTheBlank => {
            match strings(correct.get("answers")) {
                Some(answers) => answers.join(", "),
                None => scalar_text(correct),
            }
        }
        QuestionKind::Matching => format_pairs(correct),
        QuestionKind::Ordering => ordered_words(correct).join(" "),
        QuestionKind::TrueFalse => match correct.get("answer") {
            Some(JsonValue::Bool(value)) => locale.verdict_label(*value).to_string(),
            Some(JsonValue::String(raw)) => match raw.as_str() {
                "true" => locale.verdict_label(true).to_string(),
                "false" => locale.verdict_label(false).to_string(),
                _ => String::new(),
            },
            _ => String::new(),
        },
        QuestionKind::Mcq | QuestionKind::Pronunciation | QuestionKind::Transcript => {
            scalar_text(correct)
        }
    }
}

/// Formats a stored question's answer; ordering items are read from its content.
pub fn format_question_answer(question: &Question, locale: Locale) -> String {
    let mut correct = question.correct_answer.clone();
    if question.kind.known() == Some(QuestionKind::Ordering) {
        if let (JsonValue::Object(map), Some(items)) = (&mut correct, question.content.get("items")) {
            map.entry("items").or_insert_with(|| items.clone());
        }
    }
    format_correct_answer(&question.kind, &correct, locale)
}

fn scalar_text(correct: &JsonValue) -> String {
    ["answer", "transcript", "text"]
        .iter()
        .find_map(|key| correct.get(*key).and_then(JsonValue::as_str))
        .unwrap_or_default()
        .to_string()
}

fn strings(value: Option<&JsonValue>) -> Option<Vec<String>> {
    let items = value?.as_array()?;
    Some(
        items
            .iter()
            .filter_map(|item| item.as_str().map(str::to_string))
            .collect(),
    )
}

fn format_pairs(correct: &JsonValue) -> String {
    if let Some(pairs) = correct.get("pairs").and_then(JsonValue::as_array) {
        return pairs
            .iter()
            .filter_map(|pair| {
                let left = pair.get("left")?.as_str()?;
                let right = pair.get("right")?.as_str()?;
                Some(format!("{} → {}", left, right))
            })
            .collect::<Vec<_>>()
            .join(", ");
    }
    // Submission results may carry the learner-side `{left: right}` map instead.
    if let Some(matches) = correct.get("matches").and_then(JsonValue::as_object) {
        return matches
            .iter()
            .filter_map(|(left, right)| Some(format!("{} → {}", left, right.as_str()?)))
            .collect::<Vec<_>>()
            .join(", ");
    }
    String::new()
}

fn ordered_words(correct: &JsonValue) -> Vec<String> {
    if let Some(words) = strings(correct.get("arranged_words")) {
        return words;
    }
    let Some(items) = strings(correct.get("items")) else {
        return Vec::new();
    };
    let order: Option<Vec<usize>> = correct
        .get("order")
        .and_then(JsonValue::as_array)
        .map(|order| {
            order
                .iter()
                .filter_map(|idx| idx.as_u64().map(|i| i as usize))
                .collect()
        });
    match order {
        Some(order) if !order.is_empty() && order.iter().all(|i| *i < items.len()) => {
            order.into_iter().map(|i| items[i].clone()).collect()
        }
        _ => items,
    }
}
