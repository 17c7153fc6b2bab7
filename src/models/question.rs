use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use serde_json::Value as JsonValue;

use crate::models::question_kind::{KindTag, QuestionKind};

/// A question as stored behind the persistence boundary.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Question {
    #[serde(default)]
    pub id: i64,
    #[serde(rename = "type")]
    pub kind: KindTag,
    #[serde(default)]
    pub content: JsonValue,
    #[serde(default)]
    pub correct_answer: JsonValue,
    #[serde(default)]
    pub explanation: Option<String>,
    #[serde(default)]
    pub audio_url: Option<String>,
    #[serde(default)]
    pub order_index: i32,
}

impl Question {
    /// Prompt text shown above the learner widget, whichever field the kind stores it in.
    pub fn prompt(&self) -> &str {
        ["question", "text"]
            .iter()
            .find_map(|key| self.content.get(*key).and_then(|v| v.as_str()))
            .unwrap_or("")
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ChoiceContent {
    pub question: String,
    pub options: Vec<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct StatementContent {
    pub question: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TextContent {
    pub text: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct MatchPair {
    pub left: String,
    pub right: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct MatchingContent {
    pub question: String,
    pub pairs: Vec<MatchPair>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct OrderingContent {
    pub question: String,
    pub items: Vec<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SingleAnswer {
    pub answer: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct MultiAnswer {
    pub answers: Vec<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct BoolAnswer {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub answer: Option<bool>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PairsAnswer {
    pub pairs: Vec<MatchPair>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct OrderAnswer {
    pub order: Vec<usize>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TextAnswer {
    pub text: String,
}

/// Content and correct answer of one question, typed by kind.
///
/// Each variant carries only the payload its kind stores, so cross-kind
/// fields cannot be produced by the encoder.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum QuestionBody {
    Mcq {
        content: ChoiceContent,
        answer: SingleAnswer,
    },
    MultipleSelect {
        content: ChoiceContent,
        answer: MultiAnswer,
    },
    TrueFalse {
        content: StatementContent,
        answer: BoolAnswer,
    },
    FillInTheBlank {
        content: TextContent,
        answer: MultiAnswer,
    },
    Matching {
        content: MatchingContent,
        answer: PairsAnswer,
    },
    Ordering {
        content: OrderingContent,
        answer: OrderAnswer,
    },
    Pronunciation {
        content: TextContent,
        answer: TextAnswer,
    },
    Transcript {
        content: TextContent,
        answer: TextAnswer,
    },
}

/// The `{content, correct_answer}` pair written to storage.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EncodedQuestion {
    pub content: JsonValue,
    pub correct_answer: JsonValue,
}

impl QuestionBody {
    pub fn kind(&self) -> QuestionKind {
        match self {
            QuestionBody::Mcq { .. } => QuestionKind::Mcq,
            QuestionBody::MultipleSelect { .. } => QuestionKind::MultipleSelect,
            QuestionBody::TrueFalse { .. } => QuestionKind::TrueFalse,
            QuestionBody::FillInTheBlank { .. } => QuestionKind::FillInTheBlank,
            QuestionBody::Matching { .. } => QuestionKind::Matching,
            QuestionBody::Ordering { .. } => QuestionKind::Ordering,
            QuestionBody::Pronunciation { .. } => QuestionKind::Pronunciation,
            QuestionBody::Transcript { .. } => QuestionKind::Transcript,
        }
    }

    /// Reads a persisted pair leniently: fields that are missing or of the
    /// wrong shape fall back to their defaults instead of failing.
    pub fn from_json(kind: QuestionKind, content: &JsonValue, correct_answer: &JsonValue) -> Self {
        match kind {
            QuestionKind::Mcq => QuestionBody::Mcq {
                content: lenient(kind, content),
                answer: lenient(kind, correct_answer),
            },
            QuestionKind::MultipleSelect => QuestionBody::MultipleSelect {
                content: lenient(kind, content),
                answer: lenient(kind, correct_answer),
            },
            QuestionKind::TrueFalse => QuestionBody::TrueFalse {
                content: lenient(kind, content),
                answer: lenient(kind, correct_answer),
            },
            QuestionKind::FillInTheBlank => QuestionBody::FillInTheBlank {
                content: lenient(kind, content),
                answer: lenient(kind, correct_answer),
            },
            QuestionKind::Matching => QuestionBody::Matching {
                content: lenient(kind, content),
                answer: lenient(kind, correct_answer),
            },
            QuestionKind::Ordering => QuestionBody::Ordering {
                content: lenient(kind, content),
                answer: lenient(kind, correct_answer),
            },
            QuestionKind::Pronunciation => QuestionBody::Pronunciation {
                content: lenient(kind, content),
                answer: lenient(kind, correct_answer),
            },
            QuestionKind::Transcript => QuestionBody::Transcript {
                content: lenient(kind, content),
                answer: lenient(kind, correct_answer),
            },
        }
    }

    pub fn to_encoded(&self) -> EncodedQuestion {
        let (content, correct_answer) = match self {
            QuestionBody::Mcq { content, answer } => (to_json(content), to_json(answer)),
            QuestionBody::MultipleSelect { content, answer } => (to_json(content), to_json(answer)),
            QuestionBody::TrueFalse { content, answer } => (to_json(content), to_json(answer)),
            QuestionBody::FillInTheBlank { content, answer } => (to_json(content), to_json(answer)),
            QuestionBody::Matching { content, answer } => (to_json(content), to_json(answer)),
            QuestionBody::Ordering { content, answer } => (to_json(content), to_json(answer)),
            QuestionBody::Pronunciation { content, answer } => (to_json(content), to_json(answer)),
            QuestionBody::Transcript { content, answer } => (to_json(content), to_json(answer)),
        };
        EncodedQuestion {
            content,
            correct_answer,
        }
    }
}

fn lenient<T: DeserializeOwned + Default>(kind: QuestionKind, value: &JsonValue) -> T {
    if value.is_null() {
        return T::default();
    }
    match serde_json::from_value(value.clone()) {
        Ok(parsed) => parsed,
        Err(e) => {
            tracing::warn!(%kind, error = %e, "Malformed question payload, using defaults");
            T::default()
        }
    }
}

// The payload structs are plain strings, vectors and options, which always serialize.
fn to_json<T: Serialize>(value: &T) -> JsonValue {
    serde_json::to_value(value).unwrap_or(JsonValue::Null)
}
