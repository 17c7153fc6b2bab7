use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// The closed set of question structures the platform knows how to author and collect.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum QuestionKind {
    Mcq,
    MultipleSelect,
    TrueFalse,
    FillInTheBlank,
    Matching,
    Ordering,
    Pronunciation,
    Transcript,
}

impl QuestionKind {
    pub const ALL: [QuestionKind; 8] = [
        QuestionKind::Mcq,
        QuestionKind::MultipleSelect,
        QuestionKind::TrueFalse,
        QuestionKind::FillInTheBlank,
        QuestionKind::Matching,
        QuestionKind::Ordering,
        QuestionKind::Pronunciation,
        QuestionKind::Transcript,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            QuestionKind::Mcq => "MCQ",
            QuestionKind::MultipleSelect => "MULTIPLE_SELECT",
            QuestionKind::TrueFalse => "TRUE_FALSE",
            QuestionKind::FillInTheBlank => "FILL_IN_THE_BLANK",
            QuestionKind::Matching => "MATCHING",
            QuestionKind::Ordering => "ORDERING",
            QuestionKind::Pronunciation => "PRONUNCIATION",
            QuestionKind::Transcript => "TRANSCRIPT",
        }
    }

    /// Number of blank option slots a fresh form of this kind starts with.
    pub fn default_option_slots(self) -> usize {
        match self {
            QuestionKind::TrueFalse | QuestionKind::Matching => 2,
            QuestionKind::Mcq
            | QuestionKind::MultipleSelect
            | QuestionKind::FillInTheBlank
            | QuestionKind::Ordering
            | QuestionKind::Pronunciation
            | QuestionKind::Transcript => 4,
        }
    }
}

impl fmt::Display for QuestionKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown question type: {0}")]
pub struct UnknownKind(pub String);

impl FromStr for QuestionKind {
    type Err = UnknownKind;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        QuestionKind::ALL
            .iter()
            .copied()
            .find(|kind| kind.as_str() == s)
            .ok_or_else(|| UnknownKind(s.to_string()))
    }
}

/// The raw `type` value found on a persisted question.
///
/// Persisted data may carry kinds this build does not support; those are kept
/// verbatim so the caller can show an "unsupported" state instead of failing.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum KindTag {
    Known(QuestionKind),
    Unsupported(String),
}

impl KindTag {
    pub fn known(&self) -> Option<QuestionKind> {
        match self {
            KindTag::Known(kind) => Some(*kind),
            KindTag::Unsupported(_) => None,
        }
    }

    pub fn as_str(&self) -> &str {
        match self {
            KindTag::Known(kind) => kind.as_str(),
            KindTag::Unsupported(raw) => raw,
        }
    }
}

impl From<QuestionKind> for KindTag {
    fn from(kind: QuestionKind) -> Self {
        KindTag::Known(kind)
    }
}

impl From<&str> for KindTag {
    fn from(raw: &str) -> Self {
        match raw.parse::<QuestionKind>() {
            Ok(kind) => KindTag::Known(kind),
            Err(_) => KindTag::Unsupported(raw.to_string()),
        }
    }
}

impl fmt::Display for KindTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl Serialize for KindTag {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for KindTag {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        Ok(KindTag::from(raw.as_str()))
    }
}
